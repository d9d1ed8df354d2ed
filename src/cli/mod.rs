//! Command-line interface module

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutpathError, OutpathResult};
use crate::paths::PlacementOptions;

pub mod logging;
pub mod report;

pub use report::ReportFormat;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "css-outpath")]
#[command(about = "Resolve .css output paths for .css.js / .js sources")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input source paths; directories are expanded to the .js files inside
    #[arg()]
    pub inputs: Vec<String>,

    /// Directory to place outputs in (default: beside each input)
    #[arg(short = 'd', long)]
    pub outdir: Option<String>,

    /// Prefix stripped from inputs before relocating them (default: common directory)
    #[arg(short = 'b', long)]
    pub outbase: Option<String>,

    /// JSON file with "outdir" / "outbase" keys; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also read input paths from standard input, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Recursively expand directory inputs
    #[arg(short, long)]
    pub recursive: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub placement: PlacementOptions,
}

impl CliConfig {
    /// Create CLI configuration from arguments, loading `--config` if given
    pub fn from_args(args: Args) -> OutpathResult<Self> {
        let file_options = match &args.config {
            Some(path) => load_config_file(path)?,
            None => PlacementOptions::default(),
        };

        let flag_options = PlacementOptions {
            outdir: args.outdir.clone(),
            outbase: args.outbase.clone(),
        };

        Ok(Self {
            placement: file_options.merge(flag_options),
            args,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Load placement options from a JSON config file
pub fn load_config_file(path: &Path) -> OutpathResult<PlacementOptions> {
    let content = fs::read_to_string(path)
        .map_err(|e| OutpathError::io(e.to_string(), Some(path.to_path_buf())))?;

    PlacementOptions::from_json_str(&content)
        .map_err(|e| OutpathError::config(e.to_string(), Some(path.to_path_buf())))
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", console::style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", console::style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("⚠").yellow(), message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Apply the color decision to both stdout and stderr styling
    pub fn configure_colors() {
        let enabled = Self::should_use_color();
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled && atty::is(atty::Stream::Stderr));
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &OutpathError) {
    CliUtils::show_error(&error.user_message());

    match error {
        OutpathError::Config { .. } => {
            eprintln!("\nTip: config files accept only the keys \"outdir\" and \"outbase\"");
        }
        OutpathError::NoInputs => {
            eprintln!("\nTip: pass a directory to pick up every .js file inside it");
        }
        _ => {}
    }

    eprintln!("\nTry 'css-outpath --help' for usage information.");
}
