//! Dataset files to twins and query results.

use std::path::Path;

use ht_loader::{Dataset, LoadQuery};
use ht_physics::{EvaluationLimits, Verdict};
use serde::Serialize;

use crate::error::AppResult;
use crate::twin::{HarnessTwin, TwinBuilder};

/// Load a dataset from YAML or JSON, chosen by file extension.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    Ok(ht_loader::load_path(path)?)
}

/// Build a sealed twin from every ECU and wire in the dataset.
pub fn build_twin(dataset: &Dataset) -> AppResult<HarnessTwin> {
    let limits = match &dataset.limits {
        Some(def) => EvaluationLimits::new(def.max_voltage_drop_v, def.nominal_bus_v)?,
        None => EvaluationLimits::default(),
    };

    let mut builder = TwinBuilder::new().with_limits(limits);
    for ecu in &dataset.ecus {
        builder.load_ecu_spec(ecu)?;
    }
    builder.load_netlist(&dataset.netlist)?;
    builder.finish()
}

/// Outcome of one dataset query.
#[derive(Debug)]
pub struct QueryResult {
    pub query: LoadQuery,
    pub outcome: AppResult<Verdict>,
}

impl QueryResult {
    /// JSON-friendly form: the verdict report, or the error message.
    pub fn to_record(&self) -> QueryRecord {
        match &self.outcome {
            Ok(verdict) => QueryRecord::Report {
                load: self.query.load.clone(),
                passed: verdict.passed(),
                report: verdict.report(),
            },
            Err(err) => QueryRecord::Error {
                load: self.query.load.clone(),
                error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryRecord {
    Report {
        load: String,
        passed: bool,
        report: ht_physics::VerdictReport,
    },
    Error {
        load: String,
        error: String,
    },
}

/// Run every query in the dataset against `twin`, in dataset order.
pub fn run_queries(twin: &HarnessTwin, dataset: &Dataset) -> Vec<QueryResult> {
    dataset
        .queries
        .iter()
        .cloned()
        .zip(twin.validate_batch(&dataset.queries))
        .map(|(query, outcome)| QueryResult { query, outcome })
        .collect()
}
