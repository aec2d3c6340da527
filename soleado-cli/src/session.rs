use chrono::NaiveDate;

use crate::{
    core::{
        constants::SystemConstants,
        profile::{ConsumerProfile, ConsumptionProfile},
        result::SystemResult,
        sizing::compute_system,
    },
    prelude::*,
    report::Report,
};

/// Records collected during a single quotation.
#[must_use]
#[derive(Default)]
pub struct Session {
    consumer: Option<ConsumerProfile>,
    consumption: Option<ConsumptionProfile>,
    result: Option<SystemResult>,
}

impl Session {
    pub fn set_consumer(&mut self, consumer: ConsumerProfile) -> Result {
        consumer.validate().context("the consumer profile is rejected")?;
        self.consumer = Some(consumer);
        Ok(())
    }

    /// Store the consumption profile and drop the outdated result.
    pub fn set_consumption(&mut self, consumption: ConsumptionProfile) -> Result {
        consumption.validate().context("the consumption profile is rejected")?;
        self.consumption = Some(consumption);
        self.result = None;
        Ok(())
    }

    pub fn calculate(&mut self, constants: &SystemConstants) -> Result<&SystemResult> {
        let Some(consumption) = &self.consumption else {
            bail!("the consumption profile must be set before calculating");
        };
        let result = compute_system(constants, consumption)?;
        Ok(self.result.insert(result))
    }

    pub fn report(&self, date: NaiveDate) -> Result<Report<'_>> {
        let (Some(consumer), Some(consumption), Some(result)) =
            (&self.consumer, &self.consumption, &self.result)
        else {
            bail!("the report needs the consumer, the consumption, and the calculation");
        };
        Ok(Report::builder()
            .consumer(consumer)
            .consumption(consumption)
            .result(result)
            .date(date)
            .build())
    }
}
