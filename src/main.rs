use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use css_outpath::cli::{self, logging, report, Args, CliConfig, CliUtils};
use css_outpath::{discovery, resolve_outputs, OutpathError};

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let verbosity = logging::init_logger(args.verbose, args.quiet);
    CliUtils::configure_colors();
    debug!("log verbosity: {}", verbosity);

    if let Err(error) = run(args) {
        match error.downcast_ref::<OutpathError>() {
            Some(outpath_error) => cli::handle_error(outpath_error),
            None => CliUtils::show_error(&format!("{:#}", error)),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;

    for warning in config.placement.warnings() {
        CliUtils::show_warning(&warning, config.is_quiet());
    }

    let inputs = gather_inputs(&config)?;
    if inputs.is_empty() {
        return Err(OutpathError::NoInputs.into());
    }

    info!("resolving {} input paths", inputs.len());
    let pairs = resolve_outputs(&inputs, &config.placement);
    let rendered = report::render_report(&pairs, config.args.format)?;

    match &config.args.output {
        Some(path) => {
            report::write_report_file(path, &rendered)?;
            CliUtils::show_success(
                &format!(
                    "Wrote {} mappings to {}",
                    pairs.len(),
                    config.output_description()
                ),
                config.is_quiet(),
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn gather_inputs(config: &CliConfig) -> Result<Vec<String>> {
    let mut inputs = discovery::gather_inputs(&config.args.inputs, config.args.recursive)?;

    if config.args.stdin {
        let stdin = std::io::stdin();
        let listed = discovery::read_path_list(stdin.lock())
            .context("Failed to read input paths from standard input")?;
        inputs.extend(listed);
    }

    Ok(inputs)
}
