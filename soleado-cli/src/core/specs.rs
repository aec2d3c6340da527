use serde::Serialize;
use soleado_quantities::{energy::KilowattHours, power::Kilowatts};

/// Recommended equipment characteristics, as printed in the report.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EquipmentSpecs {
    pub panel_specs: Vec<String>,
    pub inverter_specs: Vec<String>,
    pub battery_specs: Vec<String>,
    pub protection_specs: Vec<String>,
}

impl EquipmentSpecs {
    pub fn new(inverter_size: Kilowatts, battery_capacity: KilowattHours) -> Self {
        Self {
            panel_specs: to_strings(&[
                "Tecnología: Monocristalino PERC",
                "Eficiencia: ≥ 20%",
                "Tolerancia de potencia: 0/+5W",
                "Certificaciones: IEC 61215, IEC 61730",
                "Garantía de producción: 25 años",
                "Garantía de producto: 12 años",
            ]),
            inverter_specs: vec![
                format!("Potencia nominal: {}kW", inverter_size.0),
                "Eficiencia: ≥ 98%".to_owned(),
                "Protección IP65 o superior".to_owned(),
                "Monitoreo integrado".to_owned(),
                "Garantía: 10 años".to_owned(),
                "Certificaciones: IEC 62109-1/2".to_owned(),
                "Compatible con red bidireccional".to_owned(),
            ],
            battery_specs: vec![
                "Tecnología: Litio-Ion LFP".to_owned(),
                format!("Capacidad total: {}kWh", battery_capacity.0),
                "Profundidad de descarga: 90%".to_owned(),
                "Ciclos de vida: >6000".to_owned(),
                "Garantía: 10 años".to_owned(),
                "Sistema BMS integrado".to_owned(),
            ],
            protection_specs: to_strings(&[
                "Protecciones DC: Clase II",
                "Protecciones AC: Tipo 1+2",
                "Monitoreo de aislamiento",
                "Protección anti-isla",
                "Seccionadores DC/AC",
                "Sistema de puesta a tierra",
                "Medidor bidireccional",
            ]),
        }
    }
}

fn to_strings(specs: &[&str]) -> Vec<String> {
    specs.iter().copied().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_sizes() {
        let specs = EquipmentSpecs::new(Kilowatts(5.0), KilowattHours(18.0));
        assert_eq!(specs.inverter_specs[0], "Potencia nominal: 5kW");
        assert_eq!(specs.battery_specs[1], "Capacidad total: 18kWh");
    }

    #[test]
    fn list_lengths() {
        let specs = EquipmentSpecs::new(Kilowatts(1.0), KilowattHours(1.0));
        assert_eq!(specs.panel_specs.len(), 6);
        assert_eq!(specs.inverter_specs.len(), 7);
        assert_eq!(specs.battery_specs.len(), 6);
        assert_eq!(specs.protection_specs.len(), 7);
    }
}
