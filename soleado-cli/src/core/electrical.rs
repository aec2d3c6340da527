use serde::Serialize;
use soleado_quantities::electric::{Amperes, Volts};

use crate::core::constants::SystemConstants;

/// Series/parallel layout of the array.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElectricalConfiguration {
    /// Number of parallel strings.
    pub strings_count: u32,

    pub panels_per_string: u32,

    /// Open string voltage, the sum of the panel voltages in series.
    pub string_voltage: Volts,

    /// Combined current of the parallel strings.
    pub total_current: Amperes,
}

impl ElectricalConfiguration {
    /// Lay out the panels in a roughly square grid, capped by the maximum string voltage.
    ///
    /// This is a heuristic: it neither minimizes the number of strings nor balances the current.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(panel_count: u32, constants: &SystemConstants) -> Self {
        let panel_current = constants.panel_power / constants.panel_voltage;
        let max_panels_per_string =
            (constants.max_string_voltage / constants.panel_voltage).floor() as u32;
        let panels_per_string =
            max_panels_per_string.min(f64::from(panel_count).sqrt().ceil() as u32);
        let strings_count = panel_count.div_ceil(panels_per_string);
        Self {
            strings_count,
            panels_per_string,
            string_voltage: constants.panel_voltage * f64::from(panels_per_string),
            total_current: panel_current * f64::from(strings_count),
        }
    }

    /// Maximum number of panels the strings can hold.
    pub fn capacity(&self) -> u64 {
        u64::from(self.strings_count) * u64::from(self.panels_per_string)
    }
}
