use std::path::PathBuf;

use clap::Parser;
use symbolgen::{Mode, Options, generate_with_options};

#[derive(Parser)]
#[command(name = "symbolgen")]
#[command(
    about = "Generates Rust icon properties from Material Symbols vector drawables",
    long_about = None
)]
struct Cli {
    /// Icon source tree (one sub-directory per icon)
    input: PathBuf,

    /// Directory to write the generated flavor trees into
    output: PathBuf,

    /// Emit one file per variance group instead of one file per icon variant
    #[arg(long)]
    grouped: bool,

    /// Print icon and file counts
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.input.is_dir() {
        return Err(format!("input directory not found: {}", cli.input.display()).into());
    }

    let options = Options {
        mode: if cli.grouped { Mode::Grouped } else { Mode::Split },
    };

    let summary = generate_with_options(&cli.input, &cli.output, &options)?;

    if cli.stats {
        eprintln!(
            "{} icon variants -> {} source files in {}",
            summary.icons,
            summary.files,
            cli.output.display()
        );
    }

    Ok(())
}
