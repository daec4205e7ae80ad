//! Input documents for each room kind
//!
//! A document mirrors what a user fills in: every field is optional, and
//! anything missing or unparsable falls back to the room kind's default when
//! the document is resolved with `into_input()`.
//!
//! ```json
//! {
//!   "kind": "cold-room",
//!   "room": { "length": 8, "width": "5.5", "insulation_type": "PUF" },
//!   "conditions": { "room_temp": 2 },
//!   "product": { "name": "Apples", "daily_load": 4000 }
//! }
//! ```
//!
//! Fields can also be set by dotted key, e.g. `room.length=7`, which is how
//! command-line overrides are applied.

use std::fs;
use std::path::Path;

use coldload_core::catalog::{product_or_default, Product, PropertyOverrides, StorageType};
use coldload_core::geometry::RoomGeometry;
use coldload_core::loads::HeaterGroup;
use coldload_core::lookup::InsulationMaterial;
use coldload_core::rooms::{
    BlastFreezerInput, BlastHeaters, ColdRoomInput, Construction, FreezerInput, RoomInput,
};
use coldload_core::RoomKind;
use serde::{Deserialize, Serialize};

use crate::lenient::{self, number};
use crate::SchemaError;

/// Common behaviour of the per-room documents
pub trait RoomDocument {
    /// Resolved core input
    type Input;

    fn kind(&self) -> RoomKind;

    /// Apply room defaults to every absent field
    fn to_input(&self) -> Self::Input;

    /// Numeric field addressed by a dotted key
    fn number_slot(&mut self, key: &str) -> Option<&mut Option<f64>>;

    /// Text field addressed by a dotted key
    fn text_slot(&mut self, key: &str) -> Option<&mut Option<String>>;

    /// Set a field from its dotted key and textual value
    ///
    /// A numeric value that does not parse clears the field, so the default
    /// applies.
    fn apply_override(&mut self, key: &str, value: &str) -> Result<(), SchemaError> {
        let key = key.trim();
        if let Some(slot) = self.number_slot(key) {
            *slot = lenient::parse_number(value);
            return Ok(());
        }
        if let Some(slot) = self.text_slot(key) {
            let value = value.trim();
            *slot = if value.is_empty() { None } else { Some(value.to_string()) };
            return Ok(());
        }
        Err(SchemaError::UnknownField(key.to_string()))
    }
}

fn resolve_product(name: &Option<String>) -> &'static Product {
    match name {
        Some(name) => product_or_default(name),
        None => coldload_core::catalog::default_product(),
    }
}

fn resolve_storage(name: &Option<String>, default: StorageType) -> StorageType {
    match name {
        Some(name) => StorageType::from_name_or_default(name),
        None => default,
    }
}

fn resolve_material(name: &Option<String>, default: InsulationMaterial) -> InsulationMaterial {
    match name {
        Some(name) => InsulationMaterial::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown insulation '{}', using {}", name, default.name());
            default
        }),
        None => default,
    }
}

/// Room dimensions and panels
///
/// Cold rooms have a single panel thickness and no separate floor. Blast
/// freezers take no door openings. A field the room kind does not use is
/// rejected rather than ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoomSection {
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub door_width: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub door_height: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub door_openings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insulation_type: Option<String>,
    /// Walls and ceiling (the single panel thickness of a cold room)
    #[serde(
        alias = "insulation_thickness",
        deserialize_with = "number",
        skip_serializing_if = "Option::is_none"
    )]
    pub wall_thickness: Option<f64>,
    /// Freezers and blast freezers only
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub floor_thickness: Option<f64>,
}

impl RoomSection {
    fn geometry(&self, d: &RoomGeometry) -> RoomGeometry {
        RoomGeometry {
            length: self.length.unwrap_or(d.length),
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            door_width: self.door_width.unwrap_or(d.door_width),
            door_height: self.door_height.unwrap_or(d.door_height),
        }
    }

    fn used_by(field: &str, kind: RoomKind) -> bool {
        match field {
            "door_openings" => kind != RoomKind::BlastFreezer,
            "floor_thickness" => kind != RoomKind::ColdRoom,
            _ => true,
        }
    }

    fn number_slot(&mut self, field: &str, kind: RoomKind) -> Option<&mut Option<f64>> {
        if !Self::used_by(field, kind) {
            return None;
        }
        Some(match field {
            "length" => &mut self.length,
            "width" => &mut self.width,
            "height" => &mut self.height,
            "door_width" => &mut self.door_width,
            "door_height" => &mut self.door_height,
            "door_openings" => &mut self.door_openings,
            "wall_thickness" | "insulation_thickness" => &mut self.wall_thickness,
            "floor_thickness" => &mut self.floor_thickness,
            _ => return None,
        })
    }

    /// First field that is set but has no effect on `kind`
    fn unused_field(&self, kind: RoomKind) -> Option<&'static str> {
        [("door_openings", self.door_openings), ("floor_thickness", self.floor_thickness)]
            .into_iter()
            .find(|(field, value)| value.is_some() && !Self::used_by(field, kind))
            .map(|(field, _)| field)
    }
}

/// Product taken in daily by cold rooms and freezers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub daily_load: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub incoming_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub outgoing_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub specific_heat_above: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub specific_heat_below: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub latent_heat: Option<f64>,
}

impl ProductSection {
    fn overrides(&self) -> PropertyOverrides {
        PropertyOverrides {
            specific_heat_above: self.specific_heat_above,
            specific_heat_below: self.specific_heat_below,
            latent_heat: self.latent_heat,
        }
    }

    fn number_slot(&mut self, field: &str) -> Option<&mut Option<f64>> {
        Some(match field {
            "daily_load" => &mut self.daily_load,
            "incoming_temp" => &mut self.incoming_temp,
            "outgoing_temp" => &mut self.outgoing_temp,
            "specific_heat_above" => &mut self.specific_heat_above,
            "specific_heat_below" => &mut self.specific_heat_below,
            "latent_heat" => &mut self.latent_heat,
            _ => return None,
        })
    }

    fn text_slot(&mut self, field: &str) -> Option<&mut Option<String>> {
        match field {
            "name" => Some(&mut self.name),
            "storage_type" => Some(&mut self.storage_type),
            _ => None,
        }
    }
}

/// Design conditions and occupancy of a cold room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColdRoomConditions {
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub ambient_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub room_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub pull_down_time: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub people: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub lighting_watts: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub equipment_watts: Option<f64>,
}

/// Cold room input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColdRoomDocument {
    pub room: RoomSection,
    pub conditions: ColdRoomConditions,
    pub product: ProductSection,
}

impl RoomDocument for ColdRoomDocument {
    type Input = ColdRoomInput;

    fn kind(&self) -> RoomKind {
        RoomKind::ColdRoom
    }

    fn to_input(&self) -> ColdRoomInput {
        let d = ColdRoomInput::default();
        let (r, c, p) = (&self.room, &self.conditions, &self.product);
        ColdRoomInput {
            geometry: r.geometry(&d.geometry),
            door_openings_per_day: r.door_openings.unwrap_or(d.door_openings_per_day),
            construction: Construction::uniform(
                resolve_material(&r.insulation_type, d.construction.material),
                r.wall_thickness.unwrap_or(d.construction.wall_thickness_mm),
            ),
            ambient_temp_c: c.ambient_temp.unwrap_or(d.ambient_temp_c),
            room_temp_c: c.room_temp.unwrap_or(d.room_temp_c),
            operating_hours: c.operating_hours.unwrap_or(d.operating_hours),
            pull_down_hours: c.pull_down_time.unwrap_or(d.pull_down_hours),
            product: resolve_product(&p.name),
            overrides: p.overrides(),
            daily_load_kg: p.daily_load.unwrap_or(d.daily_load_kg),
            incoming_temp_c: p.incoming_temp.unwrap_or(d.incoming_temp_c),
            outgoing_temp_c: p.outgoing_temp.unwrap_or(d.outgoing_temp_c),
            storage: resolve_storage(&p.storage_type, d.storage),
            people: c.people.unwrap_or(d.people),
            working_hours: c.working_hours.unwrap_or(d.working_hours),
            lighting_w: c.lighting_watts.unwrap_or(d.lighting_w),
            equipment_w: c.equipment_watts.unwrap_or(d.equipment_w),
        }
    }

    fn number_slot(&mut self, key: &str) -> Option<&mut Option<f64>> {
        let (section, field) = key.split_once('.')?;
        match section {
            "room" => self.room.number_slot(field, RoomKind::ColdRoom),
            "product" => self.product.number_slot(field),
            "conditions" => {
                let c = &mut self.conditions;
                Some(match field {
                    "ambient_temp" => &mut c.ambient_temp,
                    "room_temp" => &mut c.room_temp,
                    "operating_hours" => &mut c.operating_hours,
                    "pull_down_time" => &mut c.pull_down_time,
                    "people" => &mut c.people,
                    "working_hours" => &mut c.working_hours,
                    "lighting_watts" => &mut c.lighting_watts,
                    "equipment_watts" => &mut c.equipment_watts,
                    _ => return None,
                })
            }
            _ => None,
        }
    }

    fn text_slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key.split_once('.')? {
            ("room", "insulation_type") => Some(&mut self.room.insulation_type),
            ("product", field) => self.product.text_slot(field),
            _ => None,
        }
    }
}

/// Design conditions and evaporator of a freezer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FreezerConditions {
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub ambient_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub room_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub pull_down_time: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub room_humidity: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub air_flow_per_fan: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub steam_humidifier: Option<f64>,
}

/// Fans, heaters and occupancy of a freezer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FreezerEquipment {
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub fan_motor_rating: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub fan_quantity: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub fan_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub door_heater: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub tray_heater: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub peripheral_heater: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub people: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub lighting_watts: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub equipment_watts: Option<f64>,
}

/// Freezer input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezerDocument {
    pub room: RoomSection,
    pub conditions: FreezerConditions,
    pub product: ProductSection,
    pub equipment: FreezerEquipment,
}

impl RoomDocument for FreezerDocument {
    type Input = FreezerInput;

    fn kind(&self) -> RoomKind {
        RoomKind::Freezer
    }

    fn to_input(&self) -> FreezerInput {
        let d = FreezerInput::default();
        let (r, c, p, e) = (&self.room, &self.conditions, &self.product, &self.equipment);
        let wall = r.wall_thickness.unwrap_or(d.construction.wall_thickness_mm);
        FreezerInput {
            geometry: r.geometry(&d.geometry),
            door_openings_per_day: r.door_openings.unwrap_or(d.door_openings_per_day),
            construction: Construction {
                material: resolve_material(&r.insulation_type, d.construction.material),
                wall_thickness_mm: wall,
                ceiling_thickness_mm: wall,
                floor_thickness_mm: r.floor_thickness.unwrap_or(d.construction.floor_thickness_mm),
            },
            ambient_temp_c: c.ambient_temp.unwrap_or(d.ambient_temp_c),
            room_temp_c: c.room_temp.unwrap_or(d.room_temp_c),
            operating_hours: c.operating_hours.unwrap_or(d.operating_hours),
            pull_down_hours: c.pull_down_time.unwrap_or(d.pull_down_hours),
            room_humidity_pct: c.room_humidity.unwrap_or(d.room_humidity_pct),
            air_flow_per_fan_cfm: c.air_flow_per_fan.unwrap_or(d.air_flow_per_fan_cfm),
            steam_humidifier_kw: c.steam_humidifier.unwrap_or(d.steam_humidifier_kw),
            product: resolve_product(&p.name),
            overrides: p.overrides(),
            daily_load_kg: p.daily_load.unwrap_or(d.daily_load_kg),
            incoming_temp_c: p.incoming_temp.unwrap_or(d.incoming_temp_c),
            outgoing_temp_c: p.outgoing_temp.unwrap_or(d.outgoing_temp_c),
            storage: resolve_storage(&p.storage_type, d.storage),
            fan_motor_kw: e.fan_motor_rating.unwrap_or(d.fan_motor_kw),
            fan_count: e.fan_quantity.unwrap_or(d.fan_count),
            fan_hours: e.fan_hours.unwrap_or(d.fan_hours),
            door_heater_kw: e.door_heater.unwrap_or(d.door_heater_kw),
            tray_heater_kw: e.tray_heater.unwrap_or(d.tray_heater_kw),
            peripheral_heater_kw: e.peripheral_heater.unwrap_or(d.peripheral_heater_kw),
            people: e.people.unwrap_or(d.people),
            working_hours: e.working_hours.unwrap_or(d.working_hours),
            lighting_w: e.lighting_watts.unwrap_or(d.lighting_w),
            equipment_w: e.equipment_watts.unwrap_or(d.equipment_w),
        }
    }

    fn number_slot(&mut self, key: &str) -> Option<&mut Option<f64>> {
        let (section, field) = key.split_once('.')?;
        match section {
            "room" => self.room.number_slot(field, RoomKind::Freezer),
            "product" => self.product.number_slot(field),
            "conditions" => {
                let c = &mut self.conditions;
                Some(match field {
                    "ambient_temp" => &mut c.ambient_temp,
                    "room_temp" => &mut c.room_temp,
                    "operating_hours" => &mut c.operating_hours,
                    "pull_down_time" => &mut c.pull_down_time,
                    "room_humidity" => &mut c.room_humidity,
                    "air_flow_per_fan" => &mut c.air_flow_per_fan,
                    "steam_humidifier" => &mut c.steam_humidifier,
                    _ => return None,
                })
            }
            "equipment" => {
                let e = &mut self.equipment;
                Some(match field {
                    "fan_motor_rating" => &mut e.fan_motor_rating,
                    "fan_quantity" => &mut e.fan_quantity,
                    "fan_hours" => &mut e.fan_hours,
                    "door_heater" => &mut e.door_heater,
                    "tray_heater" => &mut e.tray_heater,
                    "peripheral_heater" => &mut e.peripheral_heater,
                    "people" => &mut e.people,
                    "working_hours" => &mut e.working_hours,
                    "lighting_watts" => &mut e.lighting_watts,
                    "equipment_watts" => &mut e.equipment_watts,
                    _ => return None,
                })
            }
            _ => None,
        }
    }

    fn text_slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key.split_once('.')? {
            ("room", "insulation_type") => Some(&mut self.room.insulation_type),
            ("product", field) => self.product.text_slot(field),
            _ => None,
        }
    }
}

/// Design conditions and cycle of a blast freezer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlastConditions {
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub ambient_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub room_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub batch_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<f64>,
}

/// Product frozen per batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlastProductSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub batch_mass: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub incoming_temp: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub outgoing_temp: Option<f64>,
    /// Loading density (kg/m³)
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub storage_density: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub specific_heat_above: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub specific_heat_below: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub latent_heat: Option<f64>,
}

/// Fans, lights, heaters and occupancy of a blast freezer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlastEquipment {
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub people: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub lighting_kw: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub fan_kw: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub peripheral_heater_qty: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub peripheral_heater_kw: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub door_heater_qty: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub door_heater_kw: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub tray_heater_qty: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub tray_heater_kw: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub drain_heater_qty: Option<f64>,
    #[serde(deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub drain_heater_kw: Option<f64>,
}

fn heater_group(qty: Option<f64>, kw: Option<f64>, d: HeaterGroup) -> HeaterGroup {
    HeaterGroup::new(qty.unwrap_or(d.quantity), kw.unwrap_or(d.capacity_kw))
}

/// Blast freezer input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastFreezerDocument {
    pub room: RoomSection,
    pub conditions: BlastConditions,
    pub product: BlastProductSection,
    pub equipment: BlastEquipment,
}

impl RoomDocument for BlastFreezerDocument {
    type Input = BlastFreezerInput;

    fn kind(&self) -> RoomKind {
        RoomKind::BlastFreezer
    }

    fn to_input(&self) -> BlastFreezerInput {
        let d = BlastFreezerInput::default();
        let (r, c, p, e) = (&self.room, &self.conditions, &self.product, &self.equipment);
        let dc = d.construction;
        let dh = d.heaters;
        BlastFreezerInput {
            geometry: r.geometry(&d.geometry),
            construction: Construction {
                material: resolve_material(&r.insulation_type, dc.material),
                wall_thickness_mm: r.wall_thickness.unwrap_or(dc.wall_thickness_mm),
                ceiling_thickness_mm: r.wall_thickness.unwrap_or(dc.ceiling_thickness_mm),
                floor_thickness_mm: r.floor_thickness.unwrap_or(dc.floor_thickness_mm),
            },
            ambient_temp_c: c.ambient_temp.unwrap_or(d.ambient_temp_c),
            room_temp_c: c.room_temp.unwrap_or(d.room_temp_c),
            batch_hours: c.batch_hours.unwrap_or(d.batch_hours),
            operating_hours: c.operating_hours.unwrap_or(d.operating_hours),
            product: resolve_product(&p.name),
            overrides: PropertyOverrides {
                specific_heat_above: p.specific_heat_above,
                specific_heat_below: p.specific_heat_below,
                latent_heat: p.latent_heat,
            },
            batch_mass_kg: p.batch_mass.unwrap_or(d.batch_mass_kg),
            incoming_temp_c: p.incoming_temp.unwrap_or(d.incoming_temp_c),
            outgoing_temp_c: p.outgoing_temp.unwrap_or(d.outgoing_temp_c),
            storage_density_kg_per_m3: p.storage_density.unwrap_or(d.storage_density_kg_per_m3),
            people: e.people.unwrap_or(d.people),
            working_hours: e.working_hours.unwrap_or(d.working_hours),
            lighting_kw: e.lighting_kw.unwrap_or(d.lighting_kw),
            fan_kw: e.fan_kw.unwrap_or(d.fan_kw),
            heaters: BlastHeaters {
                peripheral: heater_group(e.peripheral_heater_qty, e.peripheral_heater_kw, dh.peripheral),
                door: heater_group(e.door_heater_qty, e.door_heater_kw, dh.door),
                tray: heater_group(e.tray_heater_qty, e.tray_heater_kw, dh.tray),
                drain: heater_group(e.drain_heater_qty, e.drain_heater_kw, dh.drain),
            },
        }
    }

    fn number_slot(&mut self, key: &str) -> Option<&mut Option<f64>> {
        let (section, field) = key.split_once('.')?;
        match section {
            "room" => self.room.number_slot(field, RoomKind::BlastFreezer),
            "conditions" => {
                let c = &mut self.conditions;
                Some(match field {
                    "ambient_temp" => &mut c.ambient_temp,
                    "room_temp" => &mut c.room_temp,
                    "batch_hours" => &mut c.batch_hours,
                    "operating_hours" => &mut c.operating_hours,
                    _ => return None,
                })
            }
            "product" => {
                let p = &mut self.product;
                Some(match field {
                    "batch_mass" => &mut p.batch_mass,
                    "incoming_temp" => &mut p.incoming_temp,
                    "outgoing_temp" => &mut p.outgoing_temp,
                    "storage_density" => &mut p.storage_density,
                    "specific_heat_above" => &mut p.specific_heat_above,
                    "specific_heat_below" => &mut p.specific_heat_below,
                    "latent_heat" => &mut p.latent_heat,
                    _ => return None,
                })
            }
            "equipment" => {
                let e = &mut self.equipment;
                Some(match field {
                    "people" => &mut e.people,
                    "working_hours" => &mut e.working_hours,
                    "lighting_kw" => &mut e.lighting_kw,
                    "fan_kw" => &mut e.fan_kw,
                    "peripheral_heater_qty" => &mut e.peripheral_heater_qty,
                    "peripheral_heater_kw" => &mut e.peripheral_heater_kw,
                    "door_heater_qty" => &mut e.door_heater_qty,
                    "door_heater_kw" => &mut e.door_heater_kw,
                    "tray_heater_qty" => &mut e.tray_heater_qty,
                    "tray_heater_kw" => &mut e.tray_heater_kw,
                    "drain_heater_qty" => &mut e.drain_heater_qty,
                    "drain_heater_kw" => &mut e.drain_heater_kw,
                    _ => return None,
                })
            }
            _ => None,
        }
    }

    fn text_slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key.split_once('.')? {
            ("room", "insulation_type") => Some(&mut self.room.insulation_type),
            ("product", "name") => Some(&mut self.product.name),
            _ => None,
        }
    }
}

/// Input file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(SchemaError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(self, text: &str) -> Result<T, SchemaError> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Toml => Ok(toml::from_str(text)?),
        }
    }
}

/// Just the `kind` tag of a document
#[derive(Deserialize)]
struct KindTag {
    kind: Option<String>,
}

/// A calculation request for any room kind, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CalculationRequest {
    ColdRoom(ColdRoomDocument),
    Freezer(FreezerDocument),
    BlastFreezer(BlastFreezerDocument),
}

impl CalculationRequest {
    /// Empty document of a room kind; resolves to that kind's defaults
    pub fn defaults(kind: RoomKind) -> Self {
        match kind {
            RoomKind::ColdRoom => Self::ColdRoom(ColdRoomDocument::default()),
            RoomKind::Freezer => Self::Freezer(FreezerDocument::default()),
            RoomKind::BlastFreezer => Self::BlastFreezer(BlastFreezerDocument::default()),
        }
    }

    pub fn kind(&self) -> RoomKind {
        match self {
            Self::ColdRoom(d) => d.kind(),
            Self::Freezer(d) => d.kind(),
            Self::BlastFreezer(d) => d.kind(),
        }
    }

    /// Parse a tagged JSON document
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        Self::parse(DocumentFormat::Json, text)
    }

    /// Parse a tagged TOML document
    pub fn from_toml(text: &str) -> Result<Self, SchemaError> {
        Self::parse(DocumentFormat::Toml, text)
    }

    fn parse(format: DocumentFormat, text: &str) -> Result<Self, SchemaError> {
        let request: Self = format.parse(text)?;
        request.validate()?;
        Ok(request)
    }

    /// Parse a document of a known kind; a `kind` field, if present, is ignored
    pub fn parse_as(kind: RoomKind, format: DocumentFormat, text: &str) -> Result<Self, SchemaError> {
        let request = match kind {
            RoomKind::ColdRoom => Self::ColdRoom(format.parse(text)?),
            RoomKind::Freezer => Self::Freezer(format.parse(text)?),
            RoomKind::BlastFreezer => Self::BlastFreezer(format.parse(text)?),
        };
        request.validate()?;
        Ok(request)
    }

    /// Reject room fields that the document's kind would ignore
    pub fn validate(&self) -> Result<(), SchemaError> {
        let kind = self.kind();
        let room = match self {
            Self::ColdRoom(d) => &d.room,
            Self::Freezer(d) => &d.room,
            Self::BlastFreezer(d) => &d.room,
        };
        match room.unused_field(kind) {
            Some(field) => Err(SchemaError::NotApplicable {
                field: format!("room.{field}"),
                kind: kind.title(),
            }),
            None => Ok(()),
        }
    }

    /// Load a JSON or TOML file
    ///
    /// `kind` gives the room kind of an untagged file. A tagged file must
    /// agree with it.
    pub fn from_path(path: &Path, kind: Option<RoomKind>) -> Result<Self, SchemaError> {
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded {} ({} bytes)", path.display(), text.len());
        let Some(kind) = kind else {
            return Self::parse(format, &text);
        };
        let tag: KindTag = format.parse(&text)?;
        let Some(tag) = tag.kind else {
            return Self::parse_as(kind, format, &text);
        };
        if let Some(found) = RoomKind::from_id(&tag).filter(|&found| found != kind) {
            return Err(SchemaError::KindMismatch {
                expected: kind.id(),
                found: found.id(),
            });
        }
        Self::parse(format, &text)
    }

    /// Set a field by dotted key, e.g. `room.length`
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), SchemaError> {
        match self {
            Self::ColdRoom(d) => d.apply_override(key, value),
            Self::Freezer(d) => d.apply_override(key, value),
            Self::BlastFreezer(d) => d.apply_override(key, value),
        }
    }

    /// Apply a `key=value` assignment
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), SchemaError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| SchemaError::InvalidAssignment(assignment.to_string()))?;
        self.apply_override(key, value)
    }

    /// Resolve every default into the core input
    pub fn into_input(&self) -> RoomInput {
        match self {
            Self::ColdRoom(d) => RoomInput::ColdRoom(d.to_input()),
            Self::Freezer(d) => RoomInput::Freezer(d.to_input()),
            Self::BlastFreezer(d) => RoomInput::BlastFreezer(d.to_input()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
