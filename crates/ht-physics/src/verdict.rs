//! Structured evaluation results.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    Pass,
    Fail,
}

impl RuleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleStatus::Pass => "PASS",
            RuleStatus::Fail => "FAIL",
        }
    }
}

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub status: RuleStatus,
    pub message: String,
}

impl RuleOutcome {
    pub fn pass(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            status: RuleStatus::Pass,
            message: message.into(),
        }
    }

    pub fn fail(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            status: RuleStatus::Fail,
            message: message.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == RuleStatus::Pass
    }

    /// Human-readable tag, e.g. `PASS: Current OK`.
    pub fn tag(&self) -> String {
        format!("{}: {}", self.status.as_str(), self.message)
    }
}

/// Result of evaluating one proposed load current against a resolved path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub load: String,
    pub target_pin: String,
    pub load_request_amps: f64,
    pub pin_capacity_amps: f64,
    pub total_resistance_ohm: f64,
    /// Rounded to 4 decimal places.
    pub voltage_drop_v: f64,
    /// Drop as a share of the nominal bus voltage, rounded to 2 places.
    pub drop_percent_of_bus: f64,
    /// Load-to-pin node sequence.
    pub path: Vec<String>,
    pub checks: Vec<RuleOutcome>,
}

impl Verdict {
    /// True when every rule passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(RuleOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.checks.iter().filter(|c| !c.passed())
    }

    pub fn check(&self, rule: &str) -> Option<&RuleOutcome> {
        self.checks.iter().find(|c| c.rule == rule)
    }

    /// Flat report form with unit-suffixed strings and tagged checks.
    pub fn report(&self) -> VerdictReport {
        VerdictReport {
            target_pin: self.target_pin.clone(),
            load_request: format!("{}A", self.load_request_amps),
            pin_capacity: format!("{}A", self.pin_capacity_amps),
            voltage_drop: format!("{:.4}V", self.voltage_drop_v),
            checks: self.checks.iter().map(RuleOutcome::tag).collect(),
        }
    }
}

/// Report record for printing or JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub target_pin: String,
    pub load_request: String,
    pub pin_capacity: String,
    pub voltage_drop: String,
    pub checks: Vec<String>,
}
