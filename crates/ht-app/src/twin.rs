//! Building and querying a harness twin.

use ht_graph::{GraphSummary, HarnessGraph, PathSpec, resolve_power_path, validate_invariants};
use ht_loader::{EcuSpec, LoadQuery, WireConnection};
use ht_physics::{EvaluationLimits, Evaluator, Verdict};
use rayon::prelude::*;

use crate::error::{AppError, AppResult};

/// Mutable loading stage. Sealed into a [`HarnessTwin`] by [`finish`].
///
/// A failed load call leaves every record loaded before it in place, so the
/// caller can inspect [`graph`](Self::graph) and decide whether to continue.
///
/// [`finish`]: TwinBuilder::finish
#[derive(Debug, Default)]
pub struct TwinBuilder {
    graph: HarnessGraph,
    limits: EvaluationLimits,
}

impl TwinBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: EvaluationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Load a typed ECU descriptor. Returns the number of pins added.
    pub fn load_ecu_spec(&mut self, spec: &EcuSpec) -> AppResult<usize> {
        Ok(ht_loader::load_ecu_spec(&mut self.graph, spec)?)
    }

    /// Load an untyped ECU descriptor. Returns the number of pins added.
    pub fn load_ecu_value(&mut self, value: serde_json::Value) -> AppResult<usize> {
        Ok(ht_loader::load_ecu_value(&mut self.graph, value)?)
    }

    /// Load netlist records. Returns the number of records added.
    pub fn load_netlist(&mut self, connections: &[WireConnection]) -> AppResult<usize> {
        Ok(ht_loader::load_netlist(&mut self.graph, connections)?)
    }

    pub fn graph(&self) -> &HarnessGraph {
        &self.graph
    }

    /// Check structural invariants and seal the graph.
    pub fn finish(self) -> AppResult<HarnessTwin> {
        validate_invariants(&self.graph)?;
        let summary = self.graph.summary();
        tracing::info!(
            ecus = summary.ecus,
            pins = summary.pins,
            wires = summary.wire_edges / 2,
            "harness twin ready"
        );
        Ok(HarnessTwin {
            graph: self.graph,
            evaluator: Evaluator::new(self.limits),
        })
    }
}

/// A sealed, read-only harness model.
///
/// Every query takes `&self`, so one twin can serve concurrent validations.
#[derive(Debug)]
pub struct HarnessTwin {
    graph: HarnessGraph,
    evaluator: Evaluator,
}

impl HarnessTwin {
    pub fn graph(&self) -> &HarnessGraph {
        &self.graph
    }

    pub fn limits(&self) -> EvaluationLimits {
        self.evaluator.limits()
    }

    pub fn summary(&self) -> GraphSummary {
        self.graph.summary()
    }

    /// Path from `load` to the pin feeding it.
    pub fn resolve(&self, load: &str) -> AppResult<PathSpec> {
        Ok(resolve_power_path(&self.graph, load)?)
    }

    /// Check whether `load` may draw `current_amps` through its feeding pin.
    pub fn validate(&self, load: &str, current_amps: f64) -> AppResult<Verdict> {
        if !current_amps.is_finite() || current_amps < 0.0 {
            return Err(AppError::InvalidRequest(format!(
                "current for {load} must be finite and >= 0, got {current_amps}"
            )));
        }

        let path = self.resolve(load)?;
        let verdict = self.evaluator.evaluate(&path, current_amps);
        tracing::info!(
            load,
            pin = %verdict.target_pin,
            amps = current_amps,
            drop_v = verdict.voltage_drop_v,
            passed = verdict.passed(),
            "validated load"
        );
        Ok(verdict)
    }

    /// Validate independent queries in parallel. Results keep input order.
    pub fn validate_batch(&self, queries: &[LoadQuery]) -> Vec<AppResult<Verdict>> {
        queries
            .par_iter()
            .map(|q| self.validate(&q.load, q.current_amps))
            .collect()
    }
}
