//! End-to-end pipeline tests over a synthetic icon source tree.

use std::fs;
use std::path::Path;

use symbolgen::{Mode, Options, SymbolgenError, generate, generate_with_options};

const THEME_DIRS: [&str; 3] = [
    "materialsymbolsoutlined",
    "materialsymbolsrounded",
    "materialsymbolssharp",
];

const ALARM_XML: &str = r#"<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:width="24dp"
    android:height="24dp"
    android:tint="?attr/colorControlNormal"
    android:viewportWidth="24"
    android:viewportHeight="24">
  <path
      android:fillColor="@android:color/white"
      android:pathData="M12,22c1.1,0 2,-0.9 2,-2h-4c0,1.1 0.9,2 2,2zM18,16v-5Z"/>
</vector>"#;

const ARROW_XML: &str = r#"<vector xmlns:android="http://schemas.android.com/apk/res/android"
    android:autoMirrored="true"
    android:viewportWidth="24"
    android:viewportHeight="24">
  <path android:pathData="M20,11H7.83l5.59,-5.59L12,4l-8,8 8,8 1.41,-1.41L7.83,13H20v-2z"/>
</vector>"#;

fn write_variant(root: &Path, icon: &str, theme: &str, file: &str, content: &str) {
    let dir = root.join(icon).join(theme);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

fn write_in_all_themes(root: &Path, icon: &str, file: &str, content: &str) {
    for theme in THEME_DIRS {
        write_variant(root, icon, theme, file, content);
    }
}

/// One icon in all three themes with one default variant each: three
/// icons in, three files out, at the derived paths.
#[test]
fn test_split_mode_writes_one_file_per_variant() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(input.path(), "alarm", "alarm_24px.xml", ALARM_XML);

    let summary = generate(input.path(), output.path()).unwrap();
    assert_eq!(summary.icons, 3);
    assert_eq!(summary.files, 3);

    for (flavor, theme, display) in [
        ("outlinedG0W400", "outlined", "Outlined"),
        ("roundedG0W400", "rounded", "Rounded"),
        ("sharpG0W400", "sharp", "Sharp"),
    ] {
        let file = output
            .path()
            .join(flavor)
            .join("src/symbols")
            .join(theme)
            .join("g0/w400/alarm.rs");
        assert!(file.is_file(), "missing {}", file.display());

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("pub fn alarm() -> &'static ImageVector {"));
        assert!(content.contains(&format!(
            "ImageVector::builder(\"{display}.Grade0.Weight400.Alarm\")"
        )));
        assert!(content.contains(".viewport(24.0, 24.0)"));
    }
}

#[test]
fn test_auto_mirrored_icons_get_a_second_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(input.path(), "arrow_back", "arrow_back_24px.xml", ARROW_XML);

    let summary = generate(input.path(), output.path()).unwrap();
    assert_eq!(summary.icons, 3);
    assert_eq!(summary.files, 6);

    let base = output.path().join("outlinedG0W400/src/symbols/outlined");
    let normal = fs::read_to_string(base.join("g0/w400/arrow_back.rs")).unwrap();
    assert!(normal.contains("#[deprecated"));
    assert!(normal.contains("symbols::outlined::automirrored::g0::w400::arrow_back"));

    let mirrored = fs::read_to_string(base.join("automirrored/g0/w400/arrow_back.rs")).unwrap();
    assert!(mirrored.contains(".auto_mirror(true)"));
    assert!(!mirrored.contains("#[deprecated"));
}

#[test]
fn test_variant_flags_drive_placement() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(
        input.path(),
        "alarm",
        "alarm_wght700grad200fill1_24px.xml",
        ALARM_XML,
    );

    let summary = generate(input.path(), output.path()).unwrap();
    assert_eq!(summary.files, 3);
    assert!(
        output
            .path()
            .join("outlinedG200W700/src/symbols/outlined/filled/g200/w700/alarm.rs")
            .is_file()
    );
}

#[test]
fn test_grouped_mode_merges_icons_of_one_variance() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(input.path(), "alarm", "alarm_24px.xml", ALARM_XML);
    write_in_all_themes(input.path(), "add_alarm", "add_alarm_24px.xml", ALARM_XML);

    let options = Options { mode: Mode::Grouped };
    let summary = generate_with_options(input.path(), output.path(), &options).unwrap();
    assert_eq!(summary.icons, 6);
    // One group per theme.
    assert_eq!(summary.files, 3);

    let content = fs::read_to_string(
        output
            .path()
            .join("outlinedG0W400/src/symbols/outlined/g0/w400/symbols.rs"),
    )
    .unwrap();
    assert!(content.contains("pub fn add_alarm()"));
    assert!(content.contains("pub fn alarm()"));
}

/// Leading-digit icon names get an underscore prefix all the way to the
/// generated file and property.
#[test]
fn test_leading_digit_icon_name() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(input.path(), "360", "360_24px.xml", ALARM_XML);

    generate(input.path(), output.path()).unwrap();

    let file = output
        .path()
        .join("outlinedG0W400/src/symbols/outlined/g0/w400/_360.rs");
    let content = fs::read_to_string(file).unwrap();
    assert!(content.contains("pub fn _360() -> &'static ImageVector {"));
    assert!(content.contains("Outlined.Grade0.Weight400._360"));
}

/// A completeness failure aborts the run before anything is written.
#[test]
fn test_incomplete_icon_set_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(input.path(), "alarm", "alarm_24px.xml", ALARM_XML);
    write_variant(
        input.path(),
        "album",
        "materialsymbolsoutlined",
        "album_24px.xml",
        ALARM_XML,
    );

    let result = generate(input.path(), output.path());
    assert!(matches!(result, Err(SymbolgenError::Completeness(_))));
    assert!(fs::read_dir(output.path()).unwrap().next().is_none());
}

/// The theme-linked tint never reaches the generated output: the cleaned
/// path renders as solid black by default.
#[test]
fn test_generated_output_is_theme_independent() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_in_all_themes(input.path(), "alarm", "alarm_24px.xml", ALARM_XML);

    generate(input.path(), output.path()).unwrap();

    let content = fs::read_to_string(
        output
            .path()
            .join("outlinedG0W400/src/symbols/outlined/g0/w400/alarm.rs"),
    )
    .unwrap();
    assert!(!content.contains("colorControlNormal"));
    assert!(!content.contains("@android:color/white"));
}
