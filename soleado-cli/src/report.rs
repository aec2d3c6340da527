//! Paginated feasibility report.

use std::fmt::{Display, Formatter, Write};

use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Table, presets};
use itertools::Itertools;

use crate::{
    core::{
        profile::{ConsumerProfile, ConsumptionProfile},
        result::SystemResult,
    },
    fmt::FormattedPesos,
    labels,
};

/// Separates the pages of the printed document.
pub const PAGE_BREAK: char = '\x0c';

const TAX_BENEFITS: [&str; 4] = [
    concat!(
        "1. Deducción del 50% de la inversión en la declaración de renta,\n",
        "   distribuida en los siguientes 15 años.",
    ),
    "2. Exclusión del IVA en equipos y servicios.",
    "3. Exención de aranceles para equipos importados.",
    "4. Depreciación acelerada de los activos.",
];

#[must_use]
#[derive(bon::Builder)]
pub struct Report<'a> {
    consumer: &'a ConsumerProfile,
    consumption: &'a ConsumptionProfile,
    result: &'a SystemResult,
    date: NaiveDate,
}

impl Report<'_> {
    pub fn pages(&self) -> [String; 4] {
        [self.overview(), self.costs(), self.equipment(), Self::tax_benefits()]
    }

    fn overview(&self) -> String {
        let Self { consumer, consumption, result, date } = self;
        let configuration = &result.panel_configuration;
        let mut page = String::new();

        let _ = writeln!(page, "INFORME DE FACTIBILIDAD SOLAR");
        let _ = writeln!(page, "Fecha: {}", date.format("%Y-%m-%d"));

        section(&mut page, "Información del Cliente", &[
            format!("Nombre: {}", consumer.name),
            format!("Dirección: {}", consumer.address),
            format!("Ciudad: {}", consumer.city),
            format!("Estrato: {}", consumer.stratum),
        ]);
        section(&mut page, "Datos de Consumo", &[
            format!("Consumo Promedio: {} kWh", consumption.average_consumption.0),
            format!(
                "Período de Facturación: {}",
                labels::billing_period(consumption.billing_period),
            ),
            format!("Área de Techo Disponible: {} m²", consumption.roof_area.0),
            format!("Tipo de Techo: {}", labels::roof_type(consumption.roof_type)),
        ]);
        section(&mut page, "Especificaciones del Sistema", &[
            format!("Número de Paneles: {}", result.panel_count),
            format!("Potencia por Panel: {}W", result.panel_power.0),
            format!("Potencia Total Instalada: {:.2}kWp", result.installed_power().0),
        ]);
        section(&mut page, "Configuración de Paneles", &[
            format!("• Número de strings: {}", configuration.strings_count),
            format!("• Paneles por string: {}", configuration.panels_per_string),
            format!("• Voltaje por string: {:.1}V", configuration.string_voltage.0),
            format!("• Corriente total: {:.1}A", configuration.total_current.0),
        ]);
        page
    }

    fn costs(&self) -> String {
        let result = self.result;
        let mut page = String::new();
        let _ = writeln!(page, "DESGLOSE DE COSTOS");

        let cost_sections = labels::cost_sections(&result.cost_breakdown);
        for (i, cost_section) in cost_sections.into_iter().enumerate() {
            let mut table = Table::new();
            table.load_preset(presets::ASCII_BORDERS_ONLY_CONDENSED).force_no_tty();
            for (label, amount) in cost_section.lines {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(FormattedPesos(amount)).set_alignment(CellAlignment::Right),
                ]);
            }
            let _ = write!(page, "\n{}. {}:\n{table}\n", i + 1, cost_section.title);
        }

        section(&mut page, "Resumen", &[
            format!("Inversión Total con Baterías: {}", FormattedPesos(result.total_cost)),
            format!(
                "Inversión Total sin Baterías: {}",
                FormattedPesos(result.total_cost_without_batteries),
            ),
            format!("Ahorro Anual Estimado: {}", FormattedPesos(result.estimated_savings)),
        ]);
        page
    }

    fn equipment(&self) -> String {
        let specs = &self.result.equipment_specs;
        let mut page = String::new();
        let _ = writeln!(page, "ESPECIFICACIONES TÉCNICAS DE EQUIPOS");
        for (i, (title, lines)) in [
            ("Paneles Solares", &specs.panel_specs),
            ("Inversor", &specs.inverter_specs),
            ("Sistema de Baterías", &specs.battery_specs),
            ("Sistema de Protecciones", &specs.protection_specs),
        ]
        .into_iter()
        .enumerate()
        {
            let bullets = lines.iter().map(|line| format!("• {line}")).collect_vec();
            section(&mut page, &format!("{}. {title}", i + 1), &bullets);
        }
        page
    }

    fn tax_benefits() -> String {
        format!(
            "BENEFICIOS TRIBUTARIOS - LEY 1715 DE 2014\n\n{}\n",
            TAX_BENEFITS.iter().join("\n\n"),
        )
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pages().iter().join(&format!("{PAGE_BREAK}\n")))
    }
}

fn section(page: &mut String, title: &str, lines: &[String]) {
    let _ = write!(page, "\n{title}:\n");
    for line in lines {
        let _ = writeln!(page, "    {line}");
    }
}
