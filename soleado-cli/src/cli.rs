mod consumer;
mod consumption;
mod estimate;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    consumer::ConsumerArgs,
    consumption::ConsumptionArgs,
    estimate::{EstimateArgs, OutputFormat, estimate},
    report::{ReportArgs, report},
};
use crate::{core::constants::SystemConstants, prelude::*};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML file overriding the default efficiency and price table.
    #[clap(long = "constants", env = "SOLEADO_CONSTANTS")]
    pub constants_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn constants(&self) -> Result<SystemConstants> {
        match &self.constants_path {
            Some(path) => SystemConstants::read_from(path),
            None => Ok(SystemConstants::default()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Size the installation and print the quotation.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Size the installation and write the feasibility report.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Print the active efficiency and price table as TOML.
    #[clap(name = "constants")]
    Constants,
}
