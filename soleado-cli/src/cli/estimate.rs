use clap::Parser;

use crate::{
    cli::ConsumptionArgs,
    core::constants::SystemConstants,
    prelude::*,
    session::Session,
    tables::{build_cost_table, build_summary_table},
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    pub consumption: ConsumptionArgs,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// The complete result as JSON.
    Json,
}

#[instrument(skip_all)]
pub fn estimate(args: &EstimateArgs, constants: &SystemConstants) -> Result {
    let mut session = Session::default();
    session.set_consumption(args.consumption.profile())?;
    let result = session.calculate(constants)?;

    match args.format {
        OutputFormat::Table => {
            println!("{}", build_summary_table(result));
            println!("{}", build_cost_table(&result.cost_breakdown));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    Ok(())
}
