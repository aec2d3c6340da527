mod cli;
mod core;
mod fmt;
mod labels;
mod prelude;
mod report;
mod session;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, estimate, report},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let constants = args.constants()?;

    match &args.command {
        Command::Estimate(args) => estimate(args, &constants)?,
        Command::Report(args) => report(args, &constants)?,
        Command::Constants => print!("{}", constants.to_toml()?),
    }

    info!("done!");
    Ok(())
}
