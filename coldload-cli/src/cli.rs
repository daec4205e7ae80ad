//! Command handlers
//!
//! Each `cmd_*` function writes its output to the given writer and returns
//! an `anyhow::Result` with context attached at the point of failure.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info};

use coldload_core::catalog::PRODUCTS;
use coldload_core::lookup::{InsulationMaterial, UFactorTable, INSULATION_THICKNESSES_MM};
use coldload_core::rooms::{calculate, RoomReport};
use coldload_core::RoomKind;
use coldload_schemas::{CalculationRequest, PRESETS};

use crate::render::{render_json, render_table};

/// Report output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Load sheet as an aligned table
    #[default]
    Table,
    /// Full report as JSON
    Json,
}

fn parse_kind(value: &str) -> Result<RoomKind, String> {
    RoomKind::from_id(value).ok_or_else(|| {
        format!("unknown room kind '{value}' (expected cold-room, freezer or blast-freezer)")
    })
}

/// Options of the `calculate` command
#[derive(Args, Debug, Clone, Default)]
pub struct CalculateOptions {
    /// Room kind: cold-room, freezer or blast-freezer
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: Option<RoomKind>,

    /// Input document (.json or .toml)
    #[arg(short, long, conflicts_with = "preset")]
    pub input: Option<PathBuf>,

    /// Start from an embedded preset
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Override a field, e.g. --set room.length=7 (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Build the request from the input file, preset or room defaults, then apply overrides
pub fn load_request(options: &CalculateOptions) -> Result<CalculationRequest> {
    let mut request = if let Some(path) = &options.input {
        info!("Loading {}", path.display());
        CalculationRequest::from_path(path, options.kind)
            .with_context(|| format!("Failed to load input document {}", path.display()))?
    } else if let Some(name) = &options.preset {
        let preset = PRESETS
            .get(name)
            .with_context(|| format!("Run `coldload presets` to list the {} presets", PRESETS.len()))?;
        if let Some(kind) = options.kind {
            if kind != preset.request.kind() {
                bail!(
                    "Preset '{}' is a {}, not a {}",
                    name,
                    preset.request.kind().title(),
                    kind.title()
                );
            }
        }
        debug!("Using preset {}: {}", preset.name, preset.description);
        preset.request.clone()
    } else if let Some(kind) = options.kind {
        debug!("Using {} defaults", kind.title());
        CalculationRequest::defaults(kind)
    } else {
        bail!("Nothing to calculate: give --input, --preset or --kind");
    };

    for assignment in &options.overrides {
        request
            .apply_assignment(assignment)
            .with_context(|| format!("Invalid --set {assignment}"))?;
    }
    Ok(request)
}

/// `coldload calculate`
pub fn cmd_calculate(options: &CalculateOptions, out: &mut dyn Write) -> Result<RoomReport> {
    let request = load_request(options)?;
    let report = calculate(&request.into_input())
        .with_context(|| format!("{} calculation failed", request.kind().title()))?;

    match options.format {
        OutputFormat::Table => render_table(&report, out),
        OutputFormat::Json => render_json(&report, out),
    }
    .context("Failed to write report")?;
    Ok(report)
}

/// `coldload presets`
pub fn cmd_presets(out: &mut dyn Write) -> Result<()> {
    let width = PRESETS.names().map(str::len).max().unwrap_or(0);
    for preset in PRESETS.iter() {
        writeln!(
            out,
            "{:<width$}  {:<14} {}",
            preset.name,
            preset.request.kind().id(),
            preset.description,
        )?;
    }
    Ok(())
}

/// `coldload products`
pub fn cmd_products(out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{:<20} {:>9} {:>9} {:>8} {:>7} {:>8} {:>6}  {}",
        "Product", "cp above", "cp below", "latent", "Tf °C", "kg/m³", "fill", "respiration W/t (0/5/10 °C)"
    )?;
    for p in PRODUCTS.iter() {
        let props = &p.properties;
        let respiration = if p.respiration.is_inert() {
            "-".to_string()
        } else {
            format!(
                "{}/{}/{}",
                p.respiration.at_0c, p.respiration.at_5c, p.respiration.at_10c
            )
        };
        writeln!(
            out,
            "{:<20} {:>9.2} {:>9.2} {:>8.0} {:>7.1} {:>8.0} {:>6.2}  {}",
            p.name,
            props.specific_heat_above,
            props.specific_heat_below,
            props.latent_heat,
            props.freezing_point,
            props.density,
            props.storage_efficiency,
            respiration
        )?;
    }
    Ok(())
}

/// `coldload insulation`
pub fn cmd_insulation(out: &mut dyn Write) -> Result<()> {
    let table = UFactorTable::STANDARD;
    write!(out, "{:<10}", "W/m²K")?;
    for t in INSULATION_THICKNESSES_MM {
        write!(out, "{:>8}", format!("{t} mm"))?;
    }
    writeln!(out)?;
    for material in InsulationMaterial::ALL {
        write!(out, "{:<10}", material.name())?;
        for t in INSULATION_THICKNESSES_MM {
            write!(out, "{:>8.3}", table.u_factor(material, f64::from(t)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
