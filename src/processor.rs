//! Walks the icon source tree into a list of [`Icon`]s.
//!
//! Each icon directory contains one sub-directory per theme, which in
//! turn contains one XML file per variant:
//!
//! ```text
//! alarm/
//!   materialsymbolsoutlined/
//!     alarm_24px.xml
//!     alarm_fill1_24px.xml
//!     alarm_wght300gradN25fill1_24px.xml
//!   materialsymbolsrounded/
//!   materialsymbolssharp/
//! ```
//!
//! Weight, grade and fill state are encoded in the file name; the theme
//! is the directory. After loading, every icon name must be present in
//! all three themes or the run aborts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SymbolgenError;
use crate::icon::{Icon, canonical_name};
use crate::variance::{Grade, Theme, Variance, Weight};

/// Marker selecting the variant files to process.
const SIZE_MARKER: &str = "24px";

/// Substring of a variation string marking the filled variant.
const FILLED_INDICATOR: &str = "fill1";

/// Theme-linked tint attribute; lines carrying it are removed so the
/// exported icon does not depend on a platform theme.
const THEME_TINT_ATTRIBUTE: &str = r#"android:tint="?attr/colorControlNormal""#;

// The imported icons use white as the path color and rely on the theme
// tint; exported icons should render solid black instead.
const WHITE_COLOR: &str = "@android:color/white";
const BLACK_COLOR: &str = "@android:color/black";

const AUTO_MIRRORED_ATTRIBUTE: &str = r#"android:autoMirrored="true""#;

/// Processes icon directories into [`Icon`]s, cleaning theme-linked
/// attributes from the XML and validating completeness across themes.
pub struct IconProcessor {
    icon_directories: Vec<PathBuf>,
}

impl IconProcessor {
    pub fn new(icon_directories: Vec<PathBuf>) -> Self {
        Self { icon_directories }
    }

    /// Collects every icon directory under `root`, sorted by name so
    /// reruns process icons in a stable order.
    pub fn from_root(root: &Path) -> Result<Self, SymbolgenError> {
        Ok(Self::new(sorted_entries(root, |path| path.is_dir())?))
    }

    /// Loads and validates all icons.
    pub fn process(&self) -> Result<Vec<Icon>, SymbolgenError> {
        let icons = self.load_icons()?;
        ensure_icons_exist_in_all_themes(&icons)?;
        Ok(icons)
    }

    fn load_icons(&self) -> Result<Vec<Icon>, SymbolgenError> {
        let mut icons = Vec::new();

        for icon_dir in &self.icon_directories {
            let source_name = file_name_string(icon_dir);
            let name = canonical_name(&source_name);

            for theme_dir in sorted_entries(icon_dir, |path| path.is_dir())? {
                let theme = Theme::from_dir_name(&file_name_string(&theme_dir))?;

                let variants = sorted_entries(&theme_dir, |path| {
                    !path.is_dir() && file_name_string(path).contains(SIZE_MARKER)
                })?;
                for variant in variants {
                    let variations = variation_string(&file_name_string(&variant), &source_name);
                    let raw = fs::read_to_string(&variant)?;
                    log::debug!("loaded {}", variant.display());

                    icons.push(Icon {
                        name: name.clone(),
                        auto_mirrored: is_auto_mirrored(&raw),
                        xml: clean_xml(&raw),
                        variance: Variance {
                            theme,
                            grade: Grade::extract(&variations),
                            weight: Weight::extract(&variations),
                            filled: variations.contains(FILLED_INDICATOR),
                        },
                    });
                }
            }
        }

        Ok(icons)
    }
}

/// The part of a variant file name that encodes weight/grade/fill:
/// the name minus the icon-name prefix and the extension.
fn variation_string(file_name: &str, icon_name: &str) -> String {
    let stem = file_name.strip_prefix(icon_name).unwrap_or(file_name);
    let stem = stem.rsplit_once('.').map(|(s, _)| s).unwrap_or(stem);
    stem.to_string()
}

/// Removes theme-linked attributes and rewrites the default path color.
fn clean_xml(content: &str) -> String {
    let kept: Vec<&str> = content
        .lines()
        .filter(|line| !line.contains(THEME_TINT_ATTRIBUTE))
        .collect();
    kept.join("\n").replace(WHITE_COLOR, BLACK_COLOR)
}

/// Auto-mirroring is detected on the raw text, before cleaning.
fn is_auto_mirrored(content: &str) -> bool {
    content.contains(AUTO_MIRRORED_ATTRIBUTE)
}

/// Every icon name found in one theme must be present in every other
/// theme, with the same number of variants. Any mismatch aborts the run.
fn ensure_icons_exist_in_all_themes(icons: &[Icon]) -> Result<(), SymbolgenError> {
    let mut by_theme: BTreeMap<Theme, Vec<&str>> = BTreeMap::new();
    for icon in icons {
        by_theme
            .entry(icon.variance.theme)
            .or_default()
            .push(&icon.name);
    }

    let missing: Vec<&str> = Theme::ALL
        .into_iter()
        .filter(|theme| !by_theme.contains_key(theme))
        .map(|theme| theme.type_name())
        .collect();
    if !missing.is_empty() {
        return Err(SymbolgenError::Completeness(format!(
            "no icons found for themes: {}",
            missing.join(", ")
        )));
    }

    for names in by_theme.values_mut() {
        names.sort_unstable();
    }

    let mut themes = by_theme.iter();
    let (expected_theme, expected) = themes.next().expect("all themes are present");
    for (theme, names) in themes {
        if names != expected {
            return Err(SymbolgenError::Completeness(format!(
                "{} has [{}] but {} has [{}]",
                theme.type_name(),
                names.join(", "),
                expected_theme.type_name(),
                expected.join(", ")
            )));
        }
    }

    Ok(())
}

fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>, SymbolgenError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if keep(&path) {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
