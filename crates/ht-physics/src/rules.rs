//! Pass/fail rules applied to a resolved path.

use ht_core::units::{Current, Resistance, Voltage, as_amps, as_volts, volts};
use ht_graph::PathSpec;

use crate::verdict::RuleOutcome;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub path: &'a PathSpec,
    pub current: Current,
    pub total_resistance: Resistance,
    pub voltage_drop: Voltage,
}

/// A single independent check on a proposed load current.
///
/// Rules must not depend on one another's outcome.
pub trait LoadRule: Send + Sync {
    /// Stable identifier used in verdicts.
    fn name(&self) -> &str;

    fn check(&self, input: &RuleInput<'_>) -> RuleOutcome;
}

/// Pin current rating: fails when the request exceeds `max_current_amps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityRule;

impl LoadRule for CapacityRule {
    fn name(&self) -> &str {
        "capacity"
    }

    fn check(&self, input: &RuleInput<'_>) -> RuleOutcome {
        if as_amps(input.current) > input.path.pin.max_current_amps {
            RuleOutcome::fail(self.name(), "Pin Overcurrent")
        } else {
            RuleOutcome::pass(self.name(), "Current OK")
        }
    }
}

/// Voltage drop ceiling between pin and load.
#[derive(Debug, Clone, Copy)]
pub struct VoltageDropRule {
    pub max_drop: Voltage,
}

impl VoltageDropRule {
    pub fn new(max_drop_v: f64) -> Self {
        Self {
            max_drop: volts(max_drop_v),
        }
    }
}

impl LoadRule for VoltageDropRule {
    fn name(&self) -> &str {
        "voltage_drop"
    }

    fn check(&self, input: &RuleInput<'_>) -> RuleOutcome {
        if input.voltage_drop > self.max_drop {
            RuleOutcome::fail(
                self.name(),
                format!("Voltage Drop High ({:.2}V)", as_volts(input.voltage_drop)),
            )
        } else {
            RuleOutcome::pass(self.name(), "Voltage Drop OK")
        }
    }
}
