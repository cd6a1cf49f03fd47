//! Command-line front end for the Tally calculator.
//!
//! The binary is a thin consumer of `tally-calculator`: it resolves
//! configuration, installs logging, then calls `create`/`execute` and renders
//! the result.

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod repl;

pub use cli::{CalcArgs, Commands, ReplArgs, TallyCli};
pub use config::{OutputFormat, TallyConfig};

use anyhow::Result;
use std::io;
use tally_prelude::CalculationFactory;
use tracing::{debug, warn};

/// Runs one parsed invocation to completion.
pub fn run(cli: TallyCli) -> Result<()> {
    let mut config = TallyConfig::load(cli.config.as_deref())?.apply_env();
    if let Some(filter) = cli.log {
        config.logging.filter = filter;
    }
    logging::init_logging(&config.logging)?;

    match &config.source {
        Some(path) => debug!(path = %path.display(), "configuration loaded"),
        None => warn!("no configuration file found; using defaults"),
    }

    let factory = CalculationFactory::global()?;

    match cli.command {
        Commands::Calc(args) => {
            let format = args.format.unwrap_or(config.output.format);
            let calculation = factory.create(&args.identifier, args.a, args.b)?;
            println!("{}", render::render(&calculation, format)?);
        }
        Commands::List => {
            for identifier in factory.identifiers() {
                println!("{identifier}");
            }
        }
        Commands::Repl(args) => {
            let format = args.format.unwrap_or(config.output.format);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::Session::new(factory, format).run(stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
