//! Theme, grade and weight variants of a Material symbol, and the naming
//! derived from them.
//!
//! The three axes are closed sets: every symbol ships in exactly three
//! themes, three grades and seven weights. A [`Variance`] identifies one
//! rendering of an icon and is the grouping key for generated files.

use std::path::PathBuf;

use crate::error::SymbolgenError;

/// Prefix shared by every theme directory in the icon source tree.
const THEME_DIR_PREFIX: &str = "materialsymbols";

/// Base segment of every generated module path.
pub const MODULE_BASE: &str = "symbols";

pub const AUTO_MIRRORED_NAME: &str = "AutoMirrored";
pub const AUTO_MIRRORED_MODULE: &str = "automirrored";
pub const FILLED_NAME: &str = "Filled";
pub const FILLED_MODULE: &str = "filled";

/// Visual style of a symbol. All three themes share the same icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Theme {
    Outlined,
    Rounded,
    Sharp,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Outlined, Theme::Rounded, Theme::Sharp];

    /// Lower-case name used in module paths and theme directories.
    pub fn module_name(self) -> &'static str {
        match self {
            Theme::Outlined => "outlined",
            Theme::Rounded => "rounded",
            Theme::Sharp => "sharp",
        }
    }

    /// CamelCase name used in display names.
    pub fn type_name(self) -> &'static str {
        match self {
            Theme::Outlined => "Outlined",
            Theme::Rounded => "Rounded",
            Theme::Sharp => "Sharp",
        }
    }

    /// Maps a theme directory name like `materialsymbolsrounded` to its
    /// theme.
    pub fn from_dir_name(name: &str) -> Result<Theme, SymbolgenError> {
        let suffix = name.strip_prefix(THEME_DIR_PREFIX).unwrap_or(name);
        Theme::ALL
            .into_iter()
            .find(|theme| theme.module_name() == suffix)
            .ok_or_else(|| SymbolgenError::UnknownTheme(name.to_string()))
    }
}

/// Fine-grained stroke-thickness adjustment of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    G0,
    G200,
    GN25,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::G0, Grade::G200, Grade::GN25];

    /// Keyword in a variant file name selecting this grade, if any.
    fn file_indicator(self) -> Option<&'static str> {
        match self {
            Grade::G0 => None,
            Grade::G200 => Some("grad200"),
            Grade::GN25 => Some("gradN25"),
        }
    }

    pub fn module_name(self) -> &'static str {
        match self {
            Grade::G0 => "g0",
            Grade::G200 => "g200",
            Grade::GN25 => "gn25",
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Grade::G0 => "Grade0",
            Grade::G200 => "Grade200",
            Grade::GN25 => "GradeN25",
        }
    }

    /// First grade whose indicator occurs in `variations`; grade 0 when
    /// none matches.
    pub fn extract(variations: &str) -> Grade {
        Grade::ALL
            .into_iter()
            .find(|grade| {
                grade
                    .file_indicator()
                    .is_some_and(|indicator| variations.contains(indicator))
            })
            .unwrap_or(Grade::G0)
    }
}

/// Stroke-thickness class of a symbol, from thin (100) to bold (700).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weight {
    W100,
    W200,
    W300,
    W400,
    W500,
    W600,
    W700,
}

impl Weight {
    pub const ALL: [Weight; 7] = [
        Weight::W100,
        Weight::W200,
        Weight::W300,
        Weight::W400,
        Weight::W500,
        Weight::W600,
        Weight::W700,
    ];

    /// Keyword in a variant file name selecting this weight, if any.
    /// Weight 400 is the default and has no keyword.
    fn file_indicator(self) -> Option<&'static str> {
        match self {
            Weight::W100 => Some("wght100"),
            Weight::W200 => Some("wght200"),
            Weight::W300 => Some("wght300"),
            Weight::W400 => None,
            Weight::W500 => Some("wght500"),
            Weight::W600 => Some("wght600"),
            Weight::W700 => Some("wght700"),
        }
    }

    pub fn module_name(self) -> &'static str {
        match self {
            Weight::W100 => "w100",
            Weight::W200 => "w200",
            Weight::W300 => "w300",
            Weight::W400 => "w400",
            Weight::W500 => "w500",
            Weight::W600 => "w600",
            Weight::W700 => "w700",
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Weight::W100 => "Weight100",
            Weight::W200 => "Weight200",
            Weight::W300 => "Weight300",
            Weight::W400 => "Weight400",
            Weight::W500 => "Weight500",
            Weight::W600 => "Weight600",
            Weight::W700 => "Weight700",
        }
    }

    /// First weight whose indicator occurs in `variations`; weight 400
    /// when none matches.
    pub fn extract(variations: &str) -> Weight {
        Weight::ALL
            .into_iter()
            .find(|weight| {
                weight
                    .file_indicator()
                    .is_some_and(|indicator| variations.contains(indicator))
            })
            .unwrap_or(Weight::W400)
    }
}

/// The (theme, grade, weight, filled) combination identifying one
/// rendering of an icon. Icons with equal variance land in the same
/// generated group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variance {
    pub theme: Theme,
    pub grade: Grade,
    pub weight: Weight,
    pub filled: bool,
}

impl Variance {
    /// Module segments of the generated package: base, theme, then the
    /// optional `automirrored` and `filled` segments, then grade and
    /// weight.
    fn segments(&self, auto_mirrored: bool) -> Vec<&'static str> {
        let mut segments = vec![MODULE_BASE, self.theme.module_name()];
        if auto_mirrored {
            segments.push(AUTO_MIRRORED_MODULE);
        }
        if self.filled {
            segments.push(FILLED_MODULE);
        }
        segments.push(self.grade.module_name());
        segments.push(self.weight.module_name());
        segments
    }

    /// Rust module path of the generated property, e.g.
    /// `symbols::outlined::filled::g0::w400`.
    pub fn module_path(&self, auto_mirrored: bool) -> String {
        self.segments(auto_mirrored).join("::")
    }

    /// Package directory relative to a flavor's `src/` root.
    pub fn package_dir(&self, auto_mirrored: bool) -> PathBuf {
        self.segments(auto_mirrored).into_iter().collect()
    }

    /// Diagnostic name attached to a generated vector, e.g.
    /// `AutoMirrored.Outlined.Grade0.Weight400.Filled.AddAlarm`.
    pub fn display_name(&self, auto_mirrored: bool, icon_name: &str) -> String {
        let mut name = String::new();
        if auto_mirrored {
            name.push_str(AUTO_MIRRORED_NAME);
            name.push('.');
        }
        name.push_str(self.theme.type_name());
        name.push('.');
        name.push_str(self.grade.type_name());
        name.push('.');
        name.push_str(self.weight.type_name());
        if self.filled {
            name.push('.');
            name.push_str(FILLED_NAME);
        }
        name.push('.');
        name.push_str(icon_name);
        name
    }

    /// Output folder for this variance's flavor, e.g. `outlinedG0W400`.
    /// Filled and auto-mirrored variants share the flavor of their base
    /// theme/grade/weight combination.
    pub fn flavor_dir(&self) -> String {
        format!(
            "{}{}{}",
            self.theme.module_name(),
            capitalize(self.grade.module_name()),
            capitalize(self.weight.module_name())
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
