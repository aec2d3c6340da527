use std::{fs, path::PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    cli::{ConsumerArgs, ConsumptionArgs},
    core::constants::SystemConstants,
    prelude::*,
    session::Session,
    tables::build_summary_table,
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub consumer: ConsumerArgs,

    #[clap(flatten)]
    pub consumption: ConsumptionArgs,

    /// Where to write the report.
    #[clap(long, env = "REPORT_PATH", default_value = "informe-solar.txt")]
    pub output: PathBuf,

    /// Report date, today by default.
    #[clap(long, env = "REPORT_DATE")]
    pub date: Option<NaiveDate>,
}

#[instrument(skip_all, fields(output = %args.output.display()))]
pub fn report(args: &ReportArgs, constants: &SystemConstants) -> Result {
    let mut session = Session::default();
    session.set_consumer(args.consumer.profile())?;
    session.set_consumption(args.consumption.profile())?;
    println!("{}", build_summary_table(session.calculate(constants)?));

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let report = session.report(date)?;
    fs::write(&args.output, report.to_string())
        .with_context(|| format!("failed to write `{}`", args.output.display()))?;
    info!("written the report");
    Ok(())
}
