use clap::Parser;
use soleado_quantities::{area::SquareMetres, energy::KilowattHours, time::Hours};

use crate::core::profile::{BillingPeriod, ConsumptionProfile, RoofType};

#[must_use]
#[derive(Parser)]
pub struct ConsumptionArgs {
    /// Energy use reported on the bill, in kilowatt-hours.
    #[clap(long = "average-consumption", env = "AVERAGE_CONSUMPTION_KWH")]
    pub average_consumption: KilowattHours,

    /// Period covered by the bill.
    #[clap(long, env = "BILLING_PERIOD", default_value = "monthly")]
    pub billing_period: BillingPeriod,

    /// Hours of highest consumption per day.
    #[clap(long, env = "PEAK_HOURS")]
    pub peak_hours: Hours,

    /// Usable roof area in square metres.
    #[clap(long = "roof-area", env = "ROOF_AREA_SQUARE_METRES")]
    pub roof_area: SquareMetres,

    #[clap(long, env = "ROOF_TYPE")]
    pub roof_type: RoofType,
}

impl ConsumptionArgs {
    pub fn profile(&self) -> ConsumptionProfile {
        ConsumptionProfile {
            average_consumption: self.average_consumption,
            billing_period: self.billing_period,
            peak_hours: self.peak_hours,
            roof_area: self.roof_area,
            roof_type: self.roof_type,
        }
    }
}
