use serde::Serialize;
use soleado_quantities::{
    currency::Pesos,
    energy::KilowattHours,
    length::Metres,
    power::{Kilowatts, Watts},
};

use crate::core::{costs::CostBreakdown, electrical::ElectricalConfiguration, specs::EquipmentSpecs};

/// Sized installation and its quotation.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SystemResult {
    /// Installed panels, possibly fewer than needed if the roof is too small.
    pub panel_count: u32,

    pub panel_power: Watts,
    pub inverter_size: Kilowatts,
    pub battery_capacity: KilowattHours,

    /// Approximate cabling for a grid-tied system.
    ///
    /// This is not the length priced in [`CostBreakdown::materials`],
    /// see [`CostBreakdown::cable_length`].
    pub cable_length: Metres,

    /// Yearly value of the produced energy at the grid tariff.
    pub estimated_savings: Pesos,

    pub total_cost: Pesos,
    pub total_cost_without_batteries: Pesos,
    pub cost_breakdown: CostBreakdown,
    pub panel_configuration: ElectricalConfiguration,
    pub equipment_specs: EquipmentSpecs,
}

impl SystemResult {
    /// Peak power of the array.
    pub fn installed_power(&self) -> Kilowatts {
        Kilowatts::from(self.panel_power * f64::from(self.panel_count))
    }
}
