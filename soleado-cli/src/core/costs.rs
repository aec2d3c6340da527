use serde::Serialize;
use soleado_quantities::{
    area::SquareMetres,
    currency::Pesos,
    energy::KilowattHours,
    length::Metres,
    power::Kilowatts,
};

use crate::core::constants::SystemConstants;

/// Roof-side cabling per square metre of roof.
const CABLE_METRES_PER_SQUARE_METRE: f64 = 0.5;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub equipment: Equipment,
    pub materials: Materials,
    pub labor: Labor,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Equipment {
    pub panels: Pesos,
    pub inverter: Pesos,
    pub batteries: Pesos,
    pub mounting_system: Pesos,
    pub protections: Pesos,
    pub monitoring: Pesos,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Materials {
    pub cables: Pesos,
    pub conduits: Pesos,
    pub connectors: Pesos,
    pub grounding_system: Pesos,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Labor {
    pub installation: Pesos,
    pub design: Pesos,
    pub permits: Pesos,
    pub inspection: Pesos,
}

impl Equipment {
    pub fn total(&self) -> Pesos {
        self.panels
            + self.inverter
            + self.batteries
            + self.mounting_system
            + self.protections
            + self.monitoring
    }
}

impl Materials {
    pub fn total(&self) -> Pesos {
        self.cables + self.conduits + self.connectors + self.grounding_system
    }
}

impl Labor {
    pub fn total(&self) -> Pesos {
        self.installation + self.design + self.permits + self.inspection
    }
}

impl CostBreakdown {
    pub fn new(
        constants: &SystemConstants,
        panel_count: u32,
        inverter_size: Kilowatts,
        battery_capacity: KilowattHours,
        roof_area: SquareMetres,
    ) -> Self {
        let panel_count = f64::from(panel_count);
        let cable_length = Self::cable_length(constants, roof_area);
        Self {
            equipment: Equipment {
                panels: constants.panel_cost * panel_count,
                inverter: inverter_size * constants.inverter_cost_per_kw,
                batteries: battery_capacity * constants.battery_cost_per_kwh,
                mounting_system: constants.mounting_cost_per_panel * panel_count,
                protections: inverter_size * constants.protections_cost_per_kw,
                monitoring: constants.monitoring_system_cost,
            },
            materials: Materials {
                cables: cable_length * constants.cable_cost_per_metre,
                conduits: cable_length * constants.conduit_cost_per_metre,
                connectors: constants.connector_cost_per_panel * panel_count,
                grounding_system: constants.grounding_system_cost,
            },
            labor: Labor {
                installation: constants.installation_cost_per_panel * panel_count,
                design: constants.design_cost,
                permits: constants.permits_cost,
                inspection: constants.inspection_cost,
            },
        }
    }

    /// Cable run priced in the materials: from the roof down one storey to the inverter, then to
    /// the main panel board.
    ///
    /// Note that [`SystemResult::cable_length`](crate::core::result::SystemResult::cable_length)
    /// reports a simplified estimate that does not take the constants into account.
    pub fn cable_length(constants: &SystemConstants, roof_area: SquareMetres) -> Metres {
        Metres(
            roof_area.0 * CABLE_METRES_PER_SQUARE_METRE
                + constants.building_height.0
                + constants.distance_to_panel_board.0,
        )
        .ceil()
    }

    /// Sum of all lines, batteries included.
    pub fn total(&self) -> Pesos {
        self.equipment.total() + self.materials.total() + self.labor.total()
    }

    /// Every line of the three groups, in report order.
    pub fn lines(&self) -> [Pesos; 14] {
        let Self { equipment, materials, labor } = self;
        [
            equipment.panels,
            equipment.inverter,
            equipment.batteries,
            equipment.mounting_system,
            equipment.protections,
            equipment.monitoring,
            materials.cables,
            materials.conduits,
            materials.connectors,
            materials.grounding_system,
            labor.installation,
            labor.design,
            labor.permits,
            labor.inspection,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> CostBreakdown {
        CostBreakdown::new(
            &SystemConstants::default(),
            7,
            Kilowatts(5.0),
            KilowattHours(18.0),
            SquareMetres(40.0),
        )
    }

    #[test]
    fn cable_length() {
        let constants = SystemConstants::default();
        assert_eq!(CostBreakdown::cable_length(&constants, SquareMetres(40.0)), Metres(28.0));
        assert_eq!(CostBreakdown::cable_length(&constants, SquareMetres(15.3)), Metres(16.0));
    }

    #[test]
    fn equipment() {
        let equipment = breakdown().equipment;
        assert_eq!(equipment.panels, Pesos(8_400_000.0));
        assert_eq!(equipment.inverter, Pesos(7_500_000.0));
        assert_eq!(equipment.batteries, Pesos(36_000_000.0));
        assert_eq!(equipment.mounting_system, Pesos(1_400_000.0));
        assert_eq!(equipment.protections, Pesos(1_500_000.0));
        assert_eq!(equipment.monitoring, Pesos(2_500_000.0));
        assert_eq!(equipment.total(), Pesos(57_300_000.0));
    }

    #[test]
    fn materials() {
        let materials = breakdown().materials;
        assert_eq!(materials.cables, Pesos(700_000.0));
        assert_eq!(materials.conduits, Pesos(420_000.0));
        assert_eq!(materials.connectors, Pesos(350_000.0));
        assert_eq!(materials.grounding_system, Pesos(500_000.0));
        assert_eq!(materials.total(), Pesos(1_970_000.0));
    }

    #[test]
    fn labor() {
        let labor = breakdown().labor;
        assert_eq!(labor.installation, Pesos(1_050_000.0));
        assert_eq!(labor.total(), Pesos(5_550_000.0));
    }

    #[test]
    fn total() {
        let breakdown = breakdown();
        assert_eq!(breakdown.total(), Pesos(64_820_000.0));
        assert_eq!(breakdown.lines().into_iter().sum::<Pesos>(), breakdown.total());
    }
}
