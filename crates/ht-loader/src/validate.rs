//! Dataset validation logic.

use std::collections::HashSet;

use crate::schema::{Dataset, LATEST_VERSION, LimitsDef, LoadQuery};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check document-level structure. Per-pin and per-wire checks happen in the
/// loaders so that a partial load stays possible.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ValidationError> {
    if dataset.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: dataset.version,
        });
    }

    let mut ecu_ids = HashSet::new();
    for ecu in &dataset.ecus {
        if !ecu_ids.insert(&ecu.ecu_id) {
            return Err(ValidationError::DuplicateId {
                id: ecu.ecu_id.clone(),
                context: format!("dataset '{}' ecus", dataset.name),
            });
        }
    }

    if let Some(limits) = &dataset.limits {
        validate_limits(limits)?;
    }

    for (i, query) in dataset.queries.iter().enumerate() {
        validate_query(i, query)?;
    }

    Ok(())
}

fn validate_limits(limits: &LimitsDef) -> Result<(), ValidationError> {
    if !limits.max_voltage_drop_v.is_finite() || limits.max_voltage_drop_v <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "limits.max_voltage_drop_v".to_string(),
            value: limits.max_voltage_drop_v.to_string(),
            reason: "must be finite and > 0".to_string(),
        });
    }
    if !limits.nominal_bus_v.is_finite() || limits.nominal_bus_v <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "limits.nominal_bus_v".to_string(),
            value: limits.nominal_bus_v.to_string(),
            reason: "must be finite and > 0".to_string(),
        });
    }
    Ok(())
}

fn validate_query(index: usize, query: &LoadQuery) -> Result<(), ValidationError> {
    if query.load.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("queries[{index}].load"),
            value: query.load.clone(),
            reason: "load node id is empty".to_string(),
        });
    }
    if !query.current_amps.is_finite() || query.current_amps < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("queries[{index}].current_amps"),
            value: query.current_amps.to_string(),
            reason: "must be finite and >= 0".to_string(),
        });
    }
    Ok(())
}
