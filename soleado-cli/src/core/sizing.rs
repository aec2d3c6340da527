//! Sizing and costing engine.

use serde::Serialize;
use soleado_quantities::{
    area::SquareMetres,
    energy::KilowattHours,
    length::Metres,
    power::Kilowatts,
};

use crate::{
    core::{
        constants::SystemConstants,
        costs::CostBreakdown,
        electrical::ElectricalConfiguration,
        error::InvalidInput,
        profile::ConsumptionProfile,
        result::SystemResult,
        specs::EquipmentSpecs,
        validation::ensure_positive,
    },
    prelude::*,
};

const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Production margin over the daily demand.
const ENERGY_MARGIN: f64 = 1.1;

/// Inverter oversizing over the nameplate array power.
const INVERTER_HEADROOM: f64 = 1.2;

/// Storage margin over a single day of consumption.
const BATTERY_MARGIN: f64 = 1.2;

/// Cabling allowance of the simplified result-level estimate.
const RESULT_CABLE_ALLOWANCE: f64 = 8.0;

/// Energy demand and the panel count that covers it.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct EnergyBalance {
    pub monthly_consumption: KilowattHours,
    pub daily_consumption: KilowattHours,

    /// Daily consumption with the production margin.
    pub required_daily_energy: KilowattHours,

    /// Daily yield of a single panel after the system losses.
    pub daily_energy_per_panel: KilowattHours,

    /// Panels needed to cover the demand.
    pub required_panel_count: u32,

    /// Panels that actually fit on the roof.
    pub panel_count: u32,
}

impl EnergyBalance {
    /// Fails when the demand needs more panels than a `u32` can count.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(
        constants: &SystemConstants,
        profile: &ConsumptionProfile,
    ) -> Result<Self, InvalidInput> {
        let monthly_consumption = profile.billing_period.monthly(profile.average_consumption);
        let daily_consumption = monthly_consumption / DAYS_PER_MONTH;
        let required_daily_energy = daily_consumption * ENERGY_MARGIN;
        let daily_energy_per_panel = KilowattHours(
            constants.panel_power.0
                * constants.average_sun_hours.0
                * (1.0 - constants.system_losses)
                / 1000.0,
        );

        let required_panel_count = (required_daily_energy / daily_energy_per_panel).ceil();
        if required_panel_count > f64::from(u32::MAX) {
            return Err(InvalidInput::new("average_consumption", "needs too many panels"));
        }
        let required_panel_count = required_panel_count as u32;
        let required_area = constants.panel_area * f64::from(required_panel_count);
        let panel_count = if profile.roof_area < required_area {
            (profile.roof_area / constants.panel_area).floor() as u32
        } else {
            required_panel_count
        };

        Ok(Self {
            monthly_consumption,
            daily_consumption,
            required_daily_energy,
            daily_energy_per_panel,
            required_panel_count,
            panel_count,
        })
    }

    /// Whether the roof limits the array below the energy-optimal size.
    pub const fn is_area_constrained(&self) -> bool {
        self.panel_count < self.required_panel_count
    }

    pub fn annual_production(&self) -> KilowattHours {
        KilowattHours(f64::from(self.panel_count) * self.daily_energy_per_panel.0 * DAYS_PER_YEAR)
    }
}

/// Size the installation for the household and quote it.
///
/// The calculation is pure: the same input always yields the same result.
/// It fails when the consumption or the roof area is not a positive number,
/// or when the roof cannot fit a single panel. See also [`EnergyBalance::new`].
#[instrument(
    skip_all,
    fields(average_consumption = ?profile.average_consumption, roof_area = ?profile.roof_area)
)]
pub fn compute_system(
    constants: &SystemConstants,
    profile: &ConsumptionProfile,
) -> Result<SystemResult, InvalidInput> {
    constants.validate()?;
    ensure_positive("average_consumption", profile.average_consumption.0)?;
    ensure_positive("roof_area", profile.roof_area.0)?;
    if profile.roof_area < constants.panel_area {
        return Err(InvalidInput::new("roof_area", "cannot fit a single panel"));
    }

    let balance = EnergyBalance::new(constants, profile)?;
    debug!(?balance, "balanced the energy");
    if balance.is_area_constrained() {
        warn!(
            required = balance.required_panel_count,
            fitting = balance.panel_count,
            "the roof is too small to cover the consumption"
        );
    }

    let inverter_size = Kilowatts(
        f64::from(balance.panel_count) * constants.panel_power.0 * INVERTER_HEADROOM / 1000.0,
    )
    .ceil();
    let battery_capacity = (balance.daily_consumption * BATTERY_MARGIN).ceil();
    let estimated_savings = (balance.annual_production() * constants.energy_cost).floor();

    let panel_configuration = ElectricalConfiguration::new(balance.panel_count, constants);
    debug_assert!(panel_configuration.capacity() >= u64::from(balance.panel_count));
    let cost_breakdown = CostBreakdown::new(
        constants,
        balance.panel_count,
        inverter_size,
        battery_capacity,
        profile.roof_area,
    );
    let total_cost = cost_breakdown.total().floor();
    let total_cost_without_batteries =
        (cost_breakdown.total() - cost_breakdown.equipment.batteries).floor();

    let result = SystemResult {
        panel_count: balance.panel_count,
        panel_power: constants.panel_power,
        inverter_size,
        battery_capacity,
        cable_length: result_cable_length(profile.roof_area),
        estimated_savings,
        total_cost,
        total_cost_without_batteries,
        cost_breakdown,
        panel_configuration,
        equipment_specs: EquipmentSpecs::new(inverter_size, battery_capacity),
    };
    info!(
        panel_count = result.panel_count,
        inverter_size = %result.inverter_size,
        battery_capacity = %result.battery_capacity,
        total_cost = %result.total_cost,
        "sized the system"
    );
    Ok(result)
}

/// Simplified grid-tied cabling estimate, independent of [`CostBreakdown::cable_length`].
fn result_cable_length(roof_area: SquareMetres) -> Metres {
    Metres(roof_area.0 * 0.5 + RESULT_CABLE_ALLOWANCE).ceil()
}
