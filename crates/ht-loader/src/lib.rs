//! ht-loader: dataset file format, validation, and graph loaders.
//!
//! The two loaders turn ECU descriptors and netlist records into nodes and
//! edges of a [`ht_graph::HarnessGraph`]. Both validate one record at a time:
//! a bad record aborts the load, and records loaded before it stay in the
//! graph.

pub mod netlist_loader;
pub mod schema;
pub mod spec_loader;
pub mod validate;

pub use netlist_loader::{load_netlist, load_netlist_value};
pub use schema::*;
pub use spec_loader::{load_ecu_spec, load_ecu_value, pin_key};
pub use validate::{ValidationError, validate_dataset};

use std::path::{Path, PathBuf};

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Malformed ECU spec '{ecu}': {reason}")]
    MalformedSpec { ecu: String, reason: String },

    #[error("Malformed wire #{index} ({from} -> {to}): {reason}")]
    MalformedWire {
        index: usize,
        from: String,
        to: String,
        reason: String,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported dataset format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> LoadResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_yaml::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

pub fn save_yaml(path: &Path, dataset: &Dataset) -> LoadResult<()> {
    validate_dataset(dataset)?;
    let content = serde_yaml::to_string(dataset)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> LoadResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

pub fn save_json(path: &Path, dataset: &Dataset) -> LoadResult<()> {
    validate_dataset(dataset)?;
    let content = serde_json::to_string_pretty(dataset)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a dataset, picking the format from the file extension.
pub fn load_path(path: &Path) -> LoadResult<Dataset> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
