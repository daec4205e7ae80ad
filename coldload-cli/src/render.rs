//! Report rendering
//!
//! The table view walks the report's load sheet, then adds the figures that
//! only one room kind has. The JSON view serialises the whole report.

use std::io::{self, Write};

use coldload_core::rooms::RoomReport;
use coldload_core::{LoadReport, LoadSheet, Section};

const RULE: &str = "----------------------------------------------------------------";

fn write_sheet(sheet: &LoadSheet, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{:<34} {:>14} {:>10}", "Component", "kJ/day", "kW")?;
    let mut section: Option<Section> = None;
    for line in sheet.lines() {
        if section != Some(line.section) {
            writeln!(out, "{RULE}")?;
            writeln!(out, "{}", line.section.title())?;
            section = Some(line.section);
        }
        let kj = line
            .kj_per_day
            .map(|kj| format!("{kj:.0}"))
            .unwrap_or_default();
        let label = if line.is_total {
            line.label.to_string()
        } else {
            format!("  {}", line.label)
        };
        writeln!(out, "{:<34} {:>14} {:>10.3}", label, kj, line.kw)?;
    }
    writeln!(out, "{RULE}")
}

/// Aligned text report
pub fn render_table(report: &RoomReport, out: &mut dyn Write) -> io::Result<()> {
    let summary = report.summary();
    writeln!(out, "{} cooling load", report.kind().title())?;
    match report {
        RoomReport::ColdRoom(r) => writeln!(
            out,
            "{} | ΔT {:.1} K | U {:.3} W/m²K | {:.1} m³",
            r.product_name, r.temperature_difference, r.u_factor, r.areas.volume
        )?,
        RoomReport::Freezer(r) => writeln!(
            out,
            "{} | ΔT {:.1} K | {:.0} %RH | {:.1} m³",
            r.product_name, r.temperature_difference, r.room_humidity_pct, r.areas.volume
        )?,
        RoomReport::BlastFreezer(r) => writeln!(
            out,
            "{} | ΔT {:.1} K | batch {:.0} kg in {:.1} h | {:.1} m³",
            r.product_name, r.temperature_difference, r.product.mass, r.product.hours, r.areas.volume
        )?,
    }
    writeln!(out)?;

    write_sheet(&report.sheet(), out)?;

    writeln!(
        out,
        "Design load: {:.2} kW | {:.2} TR | {:.0} BTU/h | {:.1} kWh/day (safety {:.0}%)",
        summary.final_kw,
        summary.final_tr,
        summary.final_btu_per_hour,
        summary.daily_energy_kwh,
        summary.safety_percentage()
    )?;

    match report {
        RoomReport::ColdRoom(r) => {
            writeln!(
                out,
                "Storage: {:.0} of {:.0} kg ({:.1}%, {})",
                r.storage.stored_kg,
                r.storage.maximum_kg,
                r.storage.utilization_pct,
                r.storage_type.name()
            )?;
        }
        RoomReport::Freezer(r) => {
            writeln!(
                out,
                "Sensible {:.3} kW | Latent {:.3} kW | SHR {:.2}",
                r.sensible_kw,
                r.latent_kw,
                r.shr()
            )?;
            writeln!(
                out,
                "Air flow: {:.0} CFM | infiltration {:.1} L/s | door heaters {}",
                r.total_air_flow_cfm,
                r.air_change.air_flow_l_per_s(),
                if r.door.heaters_required { "required" } else { "not required" }
            )?;
            writeln!(
                out,
                "Storage: {:.0} of {:.0} kg ({:.1}%, {})",
                r.storage.stored_kg,
                r.storage.maximum_kg,
                r.storage.utilization_pct,
                r.storage_type.name()
            )?;
        }
        RoomReport::BlastFreezer(r) => {
            let t = &r.tonnage;
            writeln!(
                out,
                "TR: transmission {:.2} | product {:.2} | air change {:.2} | internal {:.2}",
                t.transmission, t.product, t.air_change, t.internal
            )?;
            let e = &r.equipment;
            writeln!(
                out,
                "Equipment: fans {:.2} kW | heaters {:.2} kW | lights {:.2} kW | people {:.2} kW",
                e.fan_kw, e.heater_kw, e.lighting_kw, e.people_kw
            )?;
            writeln!(
                out,
                "Capacity: {:.0} of {:.0} kg ({:.1}%)",
                r.storage.stored_kg, r.storage.maximum_kg, r.storage.utilization_pct
            )?;
        }
    }
    Ok(())
}

/// Full report as pretty-printed JSON
pub fn render_json(report: &RoomReport, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
