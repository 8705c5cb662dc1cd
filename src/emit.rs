//! Emits generated Rust source for processed icons.
//!
//! Each icon variant becomes a `pub fn` returning a `&'static ImageVector`
//! built through the `symbols-core` builders on first call and cached in
//! a function-local `OnceLock`. File placement is derived entirely from
//! the icon's [`Variance`]: `<out>/<flavor dir>/src/<package dirs>/<file>.rs`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SymbolgenError;
use crate::icon::{Icon, property_ident};
use crate::parse::parse_icon;
use crate::path::float;
use crate::variance::Variance;
use crate::vector::{self, FillType, Vector, VectorNode};

/// Viewport size substituted when the source omits its dimensions
/// (all processed variants are 24px).
const DEFAULT_VIEWPORT: f32 = 24.0;

/// File stem of a grouped-mode source file.
const GROUPED_FILE_STEM: &str = "symbols";

const GENERATED_HEADER: &str = "// Generated by symbolgen. Do not edit by hand.\n\
                                #![allow(unused)]\n\
                                \n\
                                use std::sync::OnceLock;\n\
                                \n\
                                use symbols_core::{ImageVector, PathFillType};\n";

/// Writes generated source files for a list of processed icons.
pub struct IconWriter {
    icons: Vec<Icon>,
}

impl IconWriter {
    pub fn new(icons: Vec<Icon>) -> Self {
        Self { icons }
    }

    /// Grouped emission: one file per variance holding a property per
    /// icon, plus a parallel file in the `automirrored` package when the
    /// group contains auto-mirrorable icons. Returns the number of files
    /// written.
    pub fn write_grouped(&self, out_dir: &Path) -> Result<usize, SymbolgenError> {
        let mut groups: BTreeMap<Variance, Vec<&Icon>> = BTreeMap::new();
        for icon in &self.icons {
            groups.entry(icon.variance).or_default().push(icon);
        }

        let mut written = 0;
        for (variance, icons) in &groups {
            let mut properties = Vec::new();
            let mut mirrored_properties = Vec::new();

            for icon in icons {
                let vector = parse_icon(icon)?;
                properties.push(render_property(icon, &vector, false));
                if vector.auto_mirrored {
                    mirrored_properties.push(render_property(icon, &vector, true));
                }
            }

            let path = source_file_path(out_dir, variance, false, GROUPED_FILE_STEM);
            write_source_file(&path, &properties)?;
            written += 1;

            if !mirrored_properties.is_empty() {
                let path = source_file_path(out_dir, variance, true, GROUPED_FILE_STEM);
                write_source_file(&path, &mirrored_properties)?;
                written += 1;
            }
        }

        Ok(written)
    }

    /// Split emission: one file per icon per (normal | auto-mirrored)
    /// variant. Returns the number of files written.
    pub fn write_split(&self, out_dir: &Path) -> Result<usize, SymbolgenError> {
        let mut written = 0;
        for icon in &self.icons {
            let vector = parse_icon(icon)?;
            let stem = property_ident(&icon.name);

            let path = source_file_path(out_dir, &icon.variance, false, &stem);
            write_source_file(&path, &[render_property(icon, &vector, false)])?;
            written += 1;

            if vector.auto_mirrored {
                let path = source_file_path(out_dir, &icon.variance, true, &stem);
                write_source_file(&path, &[render_property(icon, &vector, true)])?;
                written += 1;
            }
        }

        Ok(written)
    }
}

/// Path of one generated file:
/// `<out>/<flavor dir>/src/<package dirs>/<stem>.rs`.
fn source_file_path(
    out_dir: &Path,
    variance: &Variance,
    auto_mirrored: bool,
    stem: &str,
) -> PathBuf {
    out_dir
        .join(variance.flavor_dir())
        .join("src")
        .join(variance.package_dir(auto_mirrored))
        .join(format!("{stem}.rs"))
}

fn write_source_file(path: &Path, properties: &[String]) -> Result<(), SymbolgenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = String::from(GENERATED_HEADER);
    for property in properties {
        out.push('\n');
        out.push_str(property);
    }

    fs::write(path, out)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Renders one cached property. Non-auto-mirrored properties of an
/// auto-mirrorable icon are deprecated in favor of their counterpart.
fn render_property(icon: &Icon, vector: &Vector, auto_mirror: bool) -> String {
    let ident = property_ident(&icon.name);
    let cache = ident.to_ascii_uppercase();
    let display = icon.variance.display_name(auto_mirror, &icon.name);
    let width = float(vector.viewport_width.unwrap_or(DEFAULT_VIEWPORT));
    let height = float(vector.viewport_height.unwrap_or(DEFAULT_VIEWPORT));

    let mut out = String::new();
    if !auto_mirror && vector.auto_mirrored {
        out.push_str(&format!(
            "#[deprecated(note = \"use the auto-mirrored version at {}::{}\")]\n",
            icon.variance.module_path(true),
            ident
        ));
    }
    out.push_str(&format!("pub fn {ident}() -> &'static ImageVector {{\n"));
    out.push_str(&format!(
        "    static {cache}: OnceLock<ImageVector> = OnceLock::new();\n"
    ));
    out.push_str(&format!("    {cache}.get_or_init(|| {{\n"));
    out.push_str(&format!(
        "        ImageVector::builder(\"{display}\")\n"
    ));
    out.push_str(&format!("            .viewport({width}, {height})\n"));
    if auto_mirror {
        out.push_str("            .auto_mirror(true)\n");
    }

    for node in &vector.nodes {
        match node {
            VectorNode::Group(group) => {
                out.push_str("            .group(|g| {\n");
                for path in &group.paths {
                    push_path(&mut out, path, 16, Some("g"));
                }
                out.push_str("            })\n");
            }
            VectorNode::Path(path) => push_path(&mut out, path, 12, None),
        }
    }

    out.push_str("            .build()\n");
    out.push_str("    })\n");
    out.push_str("}\n");
    out
}

/// Renders one `path(|p| { ... })` construct. With a receiver the call is a
/// statement inside a group closure; without one it continues the
/// builder chain. Path parameters are emitted only when they differ from
/// their defaults; commands replay in source order.
fn push_path(out: &mut String, path: &vector::Path, indent: usize, receiver: Option<&str>) {
    let pad = " ".repeat(indent);
    match receiver {
        Some(receiver) => out.push_str(&format!("{pad}{receiver}.path(|p| {{\n")),
        None => out.push_str(&format!("{pad}.path(|p| {{\n")),
    }

    let inner = " ".repeat(indent + 4);
    if path.fill_alpha != 1.0 {
        out.push_str(&format!("{inner}p.fill_alpha({});\n", float(path.fill_alpha)));
    }
    if path.stroke_alpha != 1.0 {
        out.push_str(&format!(
            "{inner}p.stroke_alpha({});\n",
            float(path.stroke_alpha)
        ));
    }
    if path.fill_type == FillType::EvenOdd {
        out.push_str(&format!("{inner}p.fill_type(PathFillType::EvenOdd);\n"));
    }
    for command in &path.commands {
        out.push_str(&format!("{inner}{}\n", command.builder_call("p")));
    }

    match receiver {
        Some(_) => out.push_str(&format!("{pad}}});\n")),
        None => out.push_str(&format!("{pad}}})\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variance::{Grade, Theme, Weight};

    fn test_icon(name: &str, xml: &str, auto_mirrored: bool) -> Icon {
        Icon {
            name: name.to_string(),
            xml: xml.to_string(),
            auto_mirrored,
            variance: Variance {
                theme: Theme::Outlined,
                grade: Grade::G0,
                weight: Weight::W400,
                filled: false,
            },
        }
    }

    const PLAIN_XML: &str = r#"<vector android:viewportWidth="24" android:viewportHeight="24">
  <path android:pathData="M12,2L2,7Z"/>
</vector>"#;

    const MIRRORED_XML: &str = r#"<vector android:autoMirrored="true">
  <path android:pathData="M0,0h24"/>
</vector>"#;

    #[test]
    fn test_render_property_defaults_omitted() {
        let icon = test_icon("AddAlarm", PLAIN_XML, false);
        let vector = parse_icon(&icon).unwrap();
        let property = render_property(&icon, &vector, false);

        assert!(property.contains("pub fn add_alarm() -> &'static ImageVector {"));
        assert!(property.contains("static ADD_ALARM: OnceLock<ImageVector> = OnceLock::new();"));
        assert!(property.contains("ImageVector::builder(\"Outlined.Grade0.Weight400.AddAlarm\")"));
        assert!(property.contains(".viewport(24.0, 24.0)"));
        assert!(property.contains("p.move_to(12.0, 2.0);"));
        assert!(property.contains("p.close();"));
        // Default parameters and flags stay out of the output.
        assert!(!property.contains("fill_alpha"));
        assert!(!property.contains("stroke_alpha"));
        assert!(!property.contains("fill_type"));
        assert!(!property.contains("auto_mirror"));
        assert!(!property.contains("deprecated"));
    }

    #[test]
    fn test_render_property_non_default_parameters() {
        let xml = r#"<vector>
  <path android:fillAlpha="0.3" android:fillType="evenOdd" android:pathData="M0,0"/>
</vector>"#;
        let icon = test_icon("Alarm", xml, false);
        let vector = parse_icon(&icon).unwrap();
        let property = render_property(&icon, &vector, false);

        assert!(property.contains("p.fill_alpha(0.3);"));
        assert!(property.contains("p.fill_type(PathFillType::EvenOdd);"));
        // Viewport missing from the source falls back to the default.
        assert!(property.contains(".viewport(24.0, 24.0)"));
    }

    #[test]
    fn test_render_property_group() {
        let xml = r#"<vector>
  <group>
    <path android:pathData="M1,1"/>
    <path android:pathData="M2,2"/>
  </group>
</vector>"#;
        let icon = test_icon("Alarm", xml, false);
        let vector = parse_icon(&icon).unwrap();
        let property = render_property(&icon, &vector, false);

        assert!(property.contains(".group(|g| {"));
        assert_eq!(property.matches("g.path(|p| {").count(), 2);
    }

    #[test]
    fn test_auto_mirrored_properties() {
        let icon = test_icon("ArrowBack", MIRRORED_XML, true);
        let vector = parse_icon(&icon).unwrap();

        let normal = render_property(&icon, &vector, false);
        assert!(normal.contains(
            "#[deprecated(note = \"use the auto-mirrored version at \
             symbols::outlined::automirrored::g0::w400::arrow_back\")]"
        ));
        assert!(!normal.contains(".auto_mirror(true)"));

        let mirrored = render_property(&icon, &vector, true);
        assert!(mirrored.contains(".auto_mirror(true)"));
        assert!(mirrored.contains("AutoMirrored.Outlined.Grade0.Weight400.ArrowBack"));
        assert!(!mirrored.contains("deprecated"));
    }

    #[test]
    fn test_split_write_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = IconWriter::new(vec![
            test_icon("AddAlarm", PLAIN_XML, false),
            test_icon("ArrowBack", MIRRORED_XML, true),
        ]);

        let written = writer.write_split(tmp.path()).unwrap();
        assert_eq!(written, 3);

        let base = tmp.path().join("outlinedG0W400").join("src");
        assert!(
            base.join("symbols/outlined/g0/w400/add_alarm.rs").is_file()
        );
        assert!(
            base.join("symbols/outlined/g0/w400/arrow_back.rs").is_file()
        );
        assert!(
            base.join("symbols/outlined/automirrored/g0/w400/arrow_back.rs")
                .is_file()
        );
    }

    #[test]
    fn test_grouped_write_merges_variance() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = IconWriter::new(vec![
            test_icon("AddAlarm", PLAIN_XML, false),
            test_icon("Alarm", PLAIN_XML, false),
        ]);

        let written = writer.write_grouped(tmp.path()).unwrap();
        assert_eq!(written, 1);

        let file = tmp
            .path()
            .join("outlinedG0W400/src/symbols/outlined/g0/w400/symbols.rs");
        let content = fs::read_to_string(file).unwrap();
        assert!(content.starts_with("// Generated by symbolgen."));
        assert!(content.contains("pub fn add_alarm()"));
        assert!(content.contains("pub fn alarm()"));
    }

    #[test]
    fn test_grouped_write_mirrored_file() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = IconWriter::new(vec![test_icon("ArrowBack", MIRRORED_XML, true)]);

        let written = writer.write_grouped(tmp.path()).unwrap();
        assert_eq!(written, 2);
        assert!(
            tmp.path()
                .join("outlinedG0W400/src/symbols/outlined/automirrored/g0/w400/symbols.rs")
                .is_file()
        );
    }
}
