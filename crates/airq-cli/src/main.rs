use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod format;
mod style;
mod util;

use cli::{Cli, Commands};
use commands::{
    cmd_breakpoints, cmd_categories, cmd_compute, cmd_config, cmd_pollutants, cmd_sub_index,
};
use config::{Config, resolve_format};
use format::FormatOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions early (no logging needed)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "airq", &mut io::stdout());
        return Ok(());
    }

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::path);
    let config = Config::load_from(&config_path);

    let no_color = cli.no_color || config.no_color;
    let base_opts = FormatOptions::new(no_color)
        .with_compact(cli.compact || config.compact)
        .with_advisory(config.advisory);
    let output = cli.output.as_ref();

    match cli.command {
        Commands::Compute {
            reading,
            output: out,
            no_advisory,
        } => {
            let format = resolve_format(out.format, cli.json, &config);
            let opts = base_opts
                .with_no_header(out.no_header)
                .with_advisory(base_opts.advisory && !no_advisory);
            cmd_compute(&reading.to_reading(), format, output, cli.quiet, &opts)?;
        }
        Commands::SubIndex {
            pollutant,
            value,
            output: out,
        } => {
            let format = resolve_format(out.format, cli.json, &config);
            let opts = base_opts.with_no_header(out.no_header);
            cmd_sub_index(pollutant, value, format, output, &opts)?;
        }
        Commands::Categories { output: out } => {
            let format = resolve_format(out.format, cli.json, &config);
            let opts = base_opts.with_no_header(out.no_header);
            cmd_categories(format, output, &opts)?;
        }
        Commands::Breakpoints {
            pollutant,
            output: out,
        } => {
            let format = resolve_format(out.format, cli.json, &config);
            let opts = base_opts.with_no_header(out.no_header);
            cmd_breakpoints(pollutant, format, output, &opts)?;
        }
        Commands::Pollutants { output: out } => {
            let format = resolve_format(out.format, cli.json, &config);
            let opts = base_opts.with_no_header(out.no_header);
            cmd_pollutants(format, output, &opts)?;
        }
        Commands::Config { action } => cmd_config(action, &config_path, no_color)?,
        Commands::Completions { .. } => {
            // Handled above
            unreachable!()
        }
    }

    Ok(())
}
