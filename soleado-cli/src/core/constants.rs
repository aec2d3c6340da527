use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};
use soleado_quantities::{
    area::SquareMetres,
    currency::{Pesos, PesosPerKilowatt, PesosPerKilowattHour, PesosPerMetre},
    electric::Volts,
    length::Metres,
    power::Watts,
    time::Hours,
};

use crate::{
    core::{error::InvalidInput, validation::{ensure_non_negative, ensure_positive}},
    prelude::*,
};

/// Efficiency and pricing table the sizing is computed against.
///
/// Missing keys in a TOML file fall back to the defaults, so a file may override only the prices
/// that changed.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConstants {
    /// Average daily peak-sun hours.
    pub average_sun_hours: Hours,

    /// Nominal module efficiency. Informational only.
    pub panel_efficiency: f64,

    /// Fraction of the produced energy lost in wiring, inverter and soiling.
    pub system_losses: f64,

    /// Rated power of a single panel.
    pub panel_power: Watts,

    /// Footprint of a single panel.
    pub panel_area: SquareMetres,

    /// Operating voltage of a single panel.
    pub panel_voltage: Volts,

    /// Upper limit for a series string.
    pub max_string_voltage: Volts,

    /// Nominal battery bank voltage.
    pub nominal_voltage: Volts,

    /// Grid tariff used to value the produced energy.
    pub energy_cost: PesosPerKilowattHour,

    pub panel_cost: Pesos,
    pub inverter_cost_per_kw: PesosPerKilowatt,
    pub battery_cost_per_kwh: PesosPerKilowattHour,
    pub mounting_cost_per_panel: Pesos,
    pub protections_cost_per_kw: PesosPerKilowatt,
    pub monitoring_system_cost: Pesos,

    pub cable_cost_per_metre: PesosPerMetre,
    pub conduit_cost_per_metre: PesosPerMetre,
    pub connector_cost_per_panel: Pesos,

    /// Reduced since a grid-tied installation reuses the existing grounding.
    pub grounding_system_cost: Pesos,

    pub installation_cost_per_panel: Pesos,
    pub design_cost: Pesos,
    pub permits_cost: Pesos,
    pub inspection_cost: Pesos,

    /// Cable run from the roof down to the inverter, one storey.
    pub building_height: Metres,

    /// Cable run from the inverter to the main panel board.
    pub distance_to_panel_board: Metres,
}

impl Default for SystemConstants {
    /// Colombian market prices.
    fn default() -> Self {
        Self {
            average_sun_hours: Hours(5.5),
            panel_efficiency: 0.185,
            system_losses: 0.14,
            panel_power: Watts(550.0),
            panel_area: SquareMetres(2.2),
            panel_voltage: Volts(37.5),
            max_string_voltage: Volts(600.0),
            nominal_voltage: Volts(48.0),
            energy_cost: PesosPerKilowattHour(650.0),
            panel_cost: Pesos(1_200_000.0),
            inverter_cost_per_kw: PesosPerKilowatt(1_500_000.0),
            battery_cost_per_kwh: PesosPerKilowattHour(2_000_000.0),
            mounting_cost_per_panel: Pesos(200_000.0),
            protections_cost_per_kw: PesosPerKilowatt(300_000.0),
            monitoring_system_cost: Pesos(2_500_000.0),
            cable_cost_per_metre: PesosPerMetre(25_000.0),
            conduit_cost_per_metre: PesosPerMetre(15_000.0),
            connector_cost_per_panel: Pesos(50_000.0),
            grounding_system_cost: Pesos(500_000.0),
            installation_cost_per_panel: Pesos(150_000.0),
            design_cost: Pesos(2_000_000.0),
            permits_cost: Pesos(1_500_000.0),
            inspection_cost: Pesos(1_000_000.0),
            building_height: Metres(3.0),
            distance_to_panel_board: Metres(5.0),
        }
    }
}

impl SystemConstants {
    #[instrument(name = "reading the constants…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let constants: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check the values the sizing divides by, and that no price or allowance is negative.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        ensure_positive("average_sun_hours", self.average_sun_hours.0)?;
        if !(0.0..1.0).contains(&self.system_losses) {
            return Err(InvalidInput::new("system_losses", "must be within [0, 1)"));
        }
        ensure_positive("panel_power", self.panel_power.0)?;
        ensure_positive("panel_area", self.panel_area.0)?;
        ensure_positive("panel_voltage", self.panel_voltage.0)?;
        ensure_positive("max_string_voltage", self.max_string_voltage.0)?;
        if self.max_string_voltage < self.panel_voltage {
            return Err(InvalidInput::new(
                "max_string_voltage",
                "must fit at least one panel per string",
            ));
        }
        for (field, value) in [
            ("energy_cost", self.energy_cost.0),
            ("panel_cost", self.panel_cost.0),
            ("inverter_cost_per_kw", self.inverter_cost_per_kw.0),
            ("battery_cost_per_kwh", self.battery_cost_per_kwh.0),
            ("mounting_cost_per_panel", self.mounting_cost_per_panel.0),
            ("protections_cost_per_kw", self.protections_cost_per_kw.0),
            ("monitoring_system_cost", self.monitoring_system_cost.0),
            ("cable_cost_per_metre", self.cable_cost_per_metre.0),
            ("conduit_cost_per_metre", self.conduit_cost_per_metre.0),
            ("connector_cost_per_panel", self.connector_cost_per_panel.0),
            ("grounding_system_cost", self.grounding_system_cost.0),
            ("installation_cost_per_panel", self.installation_cost_per_panel.0),
            ("design_cost", self.design_cost.0),
            ("permits_cost", self.permits_cost.0),
            ("inspection_cost", self.inspection_cost.0),
            ("building_height", self.building_height.0),
            ("distance_to_panel_board", self.distance_to_panel_board.0),
        ] {
            ensure_non_negative(field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SystemConstants::default().validate(), Ok(()));
    }

    /// Verify that a partial file only overrides the listed keys.
    #[test]
    fn partial_override() -> Result {
        let constants: SystemConstants =
            toml::from_str("panel_cost = 1000000\nenergy_cost = 800.5")?;
        assert_eq!(constants.panel_cost, Pesos(1_000_000.0));
        assert_eq!(constants.energy_cost, PesosPerKilowattHour(800.5));
        assert_eq!(constants.panel_power, Watts(550.0));
        Ok(())
    }

    #[test]
    fn toml_round_trip() -> Result {
        let text = SystemConstants::default().to_toml()?;
        assert!(text.contains("panel_power = 550.0"));
        let constants: SystemConstants = toml::from_str(&text)?;
        assert_eq!(constants.inspection_cost, Pesos(1_000_000.0));
        Ok(())
    }

    #[test]
    fn read_from_file() -> Result {
        let path = std::env::temp_dir().join("soleado-constants-read-from-file.toml");
        fs::File::create(&path)?.write_all(b"average_sun_hours = 4.2\n")?;
        let constants = SystemConstants::read_from(&path)?;
        fs::remove_file(&path)?;
        assert_eq!(constants.average_sun_hours, Hours(4.2));
        Ok(())
    }

    #[test]
    fn rejects_oversized_panel_voltage() -> Result {
        let constants: SystemConstants = toml::from_str("panel_voltage = 700")?;
        assert_eq!(constants.validate().unwrap_err().field, "max_string_voltage");
        Ok(())
    }

    #[test]
    fn rejects_total_losses() -> Result {
        let constants: SystemConstants = toml::from_str("system_losses = 1.0")?;
        assert_eq!(constants.validate().unwrap_err().field, "system_losses");
        Ok(())
    }

    #[test]
    fn rejects_negative_prices() -> Result {
        let constants: SystemConstants = toml::from_str("panel_cost = -1000000")?;
        assert_eq!(constants.validate().unwrap_err().field, "panel_cost");
        let constants: SystemConstants = toml::from_str("distance_to_panel_board = -5.0")?;
        assert_eq!(constants.validate().unwrap_err().field, "distance_to_panel_board");
        let constants: SystemConstants = toml::from_str("design_cost = 0")?;
        assert_eq!(constants.validate(), Ok(()));
        Ok(())
    }
}
