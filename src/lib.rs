//! symbolgen - a Material Symbols source-code generator.
//!
//! symbolgen converts a tree of Material Symbols vector drawables
//! (three themes, three grades, seven weights, filled and outline
//! variants) into Rust source files, one lazily-cached `ImageVector`
//! property per icon variant, written against the `symbols-core` model.

mod emit;
mod error;
mod icon;
mod parse;
mod path;
mod processor;
mod variance;
mod vector;

pub use emit::*;
pub use error::*;
pub use icon::*;
pub use parse::*;
pub use path::*;
pub use processor::*;
pub use variance::*;
pub use vector::*;

/// Emission mode for generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One file per variance, holding every icon of the group.
    Grouped,
    /// One file per icon variant.
    #[default]
    Split,
}

/// Generation options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub mode: Mode,
}

/// Counts reported by a generation run.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    /// Icon variants loaded from the source tree.
    pub icons: usize,
    /// Generated source files written.
    pub files: usize,
}

/// Process the icon tree under `input` and write generated sources under
/// `output` with default options.
pub fn generate(
    input: &std::path::Path,
    output: &std::path::Path,
) -> Result<Summary, SymbolgenError> {
    generate_with_options(input, output, &Options::default())
}

/// Process the icon tree under `input` and write generated sources under
/// `output`. All icons are loaded and validated before anything is
/// written; any failure aborts the run with no partial output.
pub fn generate_with_options(
    input: &std::path::Path,
    output: &std::path::Path,
    options: &Options,
) -> Result<Summary, SymbolgenError> {
    let icons = IconProcessor::from_root(input)?.process()?;
    let loaded = icons.len();
    log::info!("processed {loaded} icon variants");

    let writer = IconWriter::new(icons);
    let files = match options.mode {
        Mode::Grouped => writer.write_grouped(output)?,
        Mode::Split => writer.write_split(output)?,
    };
    log::info!("wrote {files} source files");

    Ok(Summary {
        icons: loaded,
        files,
    })
}
