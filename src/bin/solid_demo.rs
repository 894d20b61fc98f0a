//! Print the SOLID and Builder demos to the console.
//!
//! Usage: `solid-demo [SCENARIO]... [--config FILE] [--no-color] [--pause] [--list]`

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::error;

use solid_patterns::logging::init_logging;
use solid_patterns::{DemoConfig, Result, Runner, Scenario};

#[derive(Parser, Debug)]
#[command(name = "solid-demo")]
#[command(about = "Contrast SOLID violations with their refactored versions")]
struct Args {
    /// Scenarios to run, in order (default: all)
    #[arg(value_enum)]
    scenarios: Vec<Scenario>,

    /// TOML file with demo settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,

    /// List the available scenarios and exit
    #[arg(long)]
    list: bool,
}

fn list_scenarios(out: &mut dyn Write, color: bool) -> Result<()> {
    for scenario in Scenario::ALL {
        let name = format!("{:<8}", scenario.title().to_lowercase());
        if color {
            writeln!(out, "{} {}", name.bold(), scenario.description())?;
        } else {
            writeln!(out, "{name} {}", scenario.description())?;
        }
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<DemoConfig> {
    let config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    Ok(config.with_overrides(&args.scenarios, args.no_color, args.pause))
}

fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let config = resolve_config(&args)?;
    if !config.color {
        colored::control::set_override(false);
    }

    if args.list {
        return list_scenarios(&mut out, config.color);
    }

    let runner = Runner::new(&config);
    runner.run_all(&mut out)?;
    runner.pause(&mut io::stdin().lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_logging();

    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err}");
        process::exit(1);
    }
}
