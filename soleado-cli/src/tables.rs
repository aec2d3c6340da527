use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{costs::CostBreakdown, result::SystemResult},
    fmt::FormattedPesos,
    labels::cost_sections,
};

pub fn build_summary_table(result: &SystemResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_header(vec!["Resultado", "Valor"]);
    table.add_row(vec![
        Cell::new("Paneles Solares"),
        Cell::new(format!("{} paneles de {}", result.panel_count, result.panel_power)),
    ]);
    table.add_row(vec![Cell::new("Potencia instalada"), Cell::new(result.installed_power())]);
    table.add_row(vec![
        Cell::new("Configuración"),
        Cell::new(format!(
            "{} strings × {} paneles, {} / {}",
            result.panel_configuration.strings_count,
            result.panel_configuration.panels_per_string,
            result.panel_configuration.string_voltage,
            result.panel_configuration.total_current,
        )),
    ]);
    table.add_row(vec![Cell::new("Inversor"), Cell::new(result.inverter_size)]);
    table.add_row(vec![Cell::new("Baterías"), Cell::new(result.battery_capacity)]);
    table.add_row(vec![Cell::new("Cableado"), Cell::new(result.cable_length)]);
    table.add_row(vec![
        Cell::new("Ahorro Anual Estimado"),
        Cell::new(FormattedPesos(result.estimated_savings)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Inversión Total con Baterías").add_attribute(Attribute::Bold),
        Cell::new(FormattedPesos(result.total_cost))
            .add_attribute(Attribute::Bold)
            .fg(Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Inversión Total sin Baterías").add_attribute(Attribute::Bold),
        Cell::new(FormattedPesos(result.total_cost_without_batteries))
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);
    table
}

pub fn build_cost_table(breakdown: &CostBreakdown) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_header(vec!["Grupo", "Concepto", "Valor"]);
    for section in cost_sections(breakdown) {
        for (label, amount) in section.lines {
            table.add_row(vec![
                Cell::new(section.title).add_attribute(Attribute::Dim),
                Cell::new(label),
                Cell::new(FormattedPesos(amount)).set_alignment(CellAlignment::Right),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(FormattedPesos(breakdown.total()))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        constants::SystemConstants,
        profile::ConsumptionProfile,
        sizing::compute_system,
    };

    fn result() -> SystemResult {
        let profile: ConsumptionProfile = serde_json::from_str(
            r#"{
                "average_consumption": 450,
                "billing_period": "monthly",
                "peak_hours": 6,
                "roof_area": 40,
                "roof_type": "sloped"
            }"#,
        )
        .unwrap();
        compute_system(&SystemConstants::default(), &profile).unwrap()
    }

    #[test]
    fn summary_table() {
        let mut table = build_summary_table(&result());
        let text = table.force_no_tty().to_string();
        assert!(text.contains("7 paneles de 550 W"));
        assert!(text.contains("5.00 kW"));
        assert!(text.contains("$ 64.820.000"));
        assert!(text.contains("$ 28.820.000"));
    }

    #[test]
    fn cost_table() {
        let mut table = build_cost_table(&result().cost_breakdown);
        let text = table.force_no_tty().to_string();
        assert!(text.contains("Sistema de Baterías"));
        assert!(text.contains("$ 36.000.000"));
        assert!(text.contains("$ 700.000"));
    }
}
