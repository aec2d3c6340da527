//! Spanish labels of the report and the terminal tables.

use soleado_quantities::currency::Pesos;

use crate::core::{
    costs::CostBreakdown,
    profile::{BillingPeriod, RoofType},
};

pub const fn billing_period(billing_period: BillingPeriod) -> &'static str {
    match billing_period {
        BillingPeriod::Monthly => "Mensual",
        BillingPeriod::Bimonthly => "Bimestral",
    }
}

pub const fn roof_type(roof_type: RoofType) -> &'static str {
    match roof_type {
        RoofType::Flat => "Plano",
        RoofType::Sloped => "Inclinado",
        RoofType::Tile => "Teja",
    }
}

/// Titled group of labelled amounts.
pub struct CostSection {
    pub title: &'static str,
    pub lines: Vec<(&'static str, Pesos)>,
}

pub fn cost_sections(breakdown: &CostBreakdown) -> [CostSection; 3] {
    let CostBreakdown { equipment, materials, labor } = breakdown;
    [
        CostSection {
            title: "Equipos",
            lines: vec![
                ("Paneles Solares", equipment.panels),
                ("Inversor", equipment.inverter),
                ("Sistema de Baterías", equipment.batteries),
                ("Sistema de Montaje", equipment.mounting_system),
                ("Protecciones Eléctricas", equipment.protections),
                ("Sistema de Monitoreo", equipment.monitoring),
            ],
        },
        CostSection {
            title: "Materiales",
            lines: vec![
                ("Cableado", materials.cables),
                ("Tubería y Canalización", materials.conduits),
                ("Conectores", materials.connectors),
                ("Sistema de Puesta a Tierra", materials.grounding_system),
            ],
        },
        CostSection {
            title: "Mano de Obra",
            lines: vec![
                ("Instalación", labor.installation),
                ("Diseño e Ingeniería", labor.design),
                ("Permisos", labor.permits),
                ("Inspección", labor.inspection),
            ],
        },
    ]
}
