use serde::{Deserialize, Serialize};
use soleado_quantities::{area::SquareMetres, energy::KilowattHours, time::Hours};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BillingPeriod {
    /// The bill covers one month.
    Monthly,

    /// The bill covers two months.
    Bimonthly,
}

impl BillingPeriod {
    /// Normalize the billed consumption to a single month.
    pub fn monthly(self, billed: KilowattHours) -> KilowattHours {
        match self {
            Self::Monthly => billed,
            Self::Bimonthly => billed / 2.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RoofType {
    Flat,
    Sloped,
    Tile,
}

/// Household consumption and roof characteristics.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Deserialize, bon::Builder)]
pub struct ConsumptionProfile {
    /// Energy use reported for the billing period.
    pub average_consumption: KilowattHours,

    pub billing_period: BillingPeriod,

    /// Hours of highest consumption. Collected for the report, not used in the sizing.
    pub peak_hours: Hours,

    /// Usable roof area.
    pub roof_area: SquareMetres,

    pub roof_type: RoofType,
}

/// Contact details of the household owner.
#[must_use]
#[derive(Clone, Debug, Serialize, Deserialize, bon::Builder)]
pub struct ConsumerProfile {
    #[builder(into)]
    pub name: String,

    #[builder(into)]
    pub address: String,

    #[builder(into)]
    pub city: String,

    /// Colombian socioeconomic stratum, `1..=6`.
    pub stratum: u8,

    #[builder(into)]
    pub email: String,

    #[builder(into)]
    pub phone: String,
}
