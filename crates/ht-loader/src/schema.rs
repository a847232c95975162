//! Dataset schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// One harness dataset: ECU descriptors, a netlist, and optional checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsDef>,
    #[serde(default)]
    pub ecus: Vec<EcuSpec>,
    #[serde(default)]
    pub netlist: Vec<WireConnection>,
    #[serde(default)]
    pub queries: Vec<LoadQuery>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            limits: None,
            ecus: Vec::new(),
            netlist: Vec::new(),
            queries: Vec::new(),
        }
    }
}

/// ECU datasheet descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EcuSpec {
    pub ecu_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub pins: Vec<PinSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PinSpec {
    pub pin_number: String,
    pub function: String,
    #[serde(rename = "type")]
    pub pin_type: String,
    pub max_current_amps: f64,
    pub voltage_ref: f64,
}

/// One netlist record: a wire segment between two points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireConnection {
    pub from: String,
    pub to: String,
    pub gauge: i32,
    pub length_m: f64,
    pub resistance_per_m: f64,
}

/// A load change to check against the harness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadQuery {
    pub load: String,
    pub current_amps: f64,
}

/// Overrides for the evaluation thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LimitsDef {
    #[serde(default = "default_max_voltage_drop_v")]
    pub max_voltage_drop_v: f64,
    #[serde(default = "default_nominal_bus_v")]
    pub nominal_bus_v: f64,
}

impl Default for LimitsDef {
    fn default() -> Self {
        Self {
            max_voltage_drop_v: default_max_voltage_drop_v(),
            nominal_bus_v: default_nominal_bus_v(),
        }
    }
}

fn default_max_voltage_drop_v() -> f64 {
    ht_core::constants::MAX_VOLTAGE_DROP_V
}

fn default_nominal_bus_v() -> f64 {
    ht_core::constants::NOMINAL_BUS_V
}
