//! Rule evaluation over a resolved power path.

use std::fmt;

use ht_core::units::{amps, as_ohms, as_volts};
use ht_core::{constants, ensure_finite, round_to};
use ht_graph::PathSpec;

use crate::error::{PhysicsError, PhysicsResult};
use crate::resistance::{path_resistance, voltage_drop};
use crate::rules::{CapacityRule, LoadRule, RuleInput, VoltageDropRule};
use crate::verdict::Verdict;

/// Thresholds for the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationLimits {
    pub max_voltage_drop_v: f64,
    pub nominal_bus_v: f64,
}

impl Default for EvaluationLimits {
    fn default() -> Self {
        Self {
            max_voltage_drop_v: constants::MAX_VOLTAGE_DROP_V,
            nominal_bus_v: constants::NOMINAL_BUS_V,
        }
    }
}

impl EvaluationLimits {
    pub fn new(max_voltage_drop_v: f64, nominal_bus_v: f64) -> PhysicsResult<Self> {
        for (what, value) in [
            ("max_voltage_drop_v", max_voltage_drop_v),
            ("nominal_bus_v", nominal_bus_v),
        ] {
            ensure_finite(value, what)?;
            if value <= 0.0 {
                return Err(PhysicsError::InvalidLimit { what, value });
            }
        }
        Ok(Self {
            max_voltage_drop_v,
            nominal_bus_v,
        })
    }
}

/// Runs every registered rule against a path and a proposed current.
pub struct Evaluator {
    limits: EvaluationLimits,
    rules: Vec<Box<dyn LoadRule>>,
}

impl Evaluator {
    /// Evaluator with the capacity and voltage-drop rules.
    pub fn new(limits: EvaluationLimits) -> Self {
        Self::without_rules(limits)
            .with_rule(CapacityRule)
            .with_rule(VoltageDropRule::new(limits.max_voltage_drop_v))
    }

    /// Evaluator with no rules registered.
    pub fn without_rules(limits: EvaluationLimits) -> Self {
        Self {
            limits,
            rules: Vec::new(),
        }
    }

    /// Register an extra rule. Rules run in registration order.
    pub fn with_rule(mut self, rule: impl LoadRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn limits(&self) -> EvaluationLimits {
        self.limits
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }

    /// Evaluate a proposed load current against a resolved path.
    ///
    /// Every rule runs; the verdict lists each outcome in rule order.
    pub fn evaluate(&self, path: &PathSpec, proposed_current_amps: f64) -> Verdict {
        let current = amps(proposed_current_amps);
        let total_resistance = path_resistance(&path.hops);
        let drop = voltage_drop(current, total_resistance);

        let input = RuleInput {
            path,
            current,
            total_resistance,
            voltage_drop: drop,
        };
        let checks: Vec<_> = self.rules.iter().map(|rule| rule.check(&input)).collect();

        let drop_v = as_volts(drop);
        let verdict = Verdict {
            load: path.load().to_string(),
            target_pin: path.pin.key.clone(),
            load_request_amps: proposed_current_amps,
            pin_capacity_amps: path.pin.max_current_amps,
            total_resistance_ohm: as_ohms(total_resistance),
            voltage_drop_v: round_to(drop_v, 4),
            drop_percent_of_bus: round_to(100.0 * drop_v / self.limits.nominal_bus_v, 2),
            path: path.nodes.clone(),
            checks,
        };

        for failed in verdict.failures() {
            tracing::warn!(
                load = %verdict.load,
                pin = %verdict.target_pin,
                rule = %failed.rule,
                "{}",
                failed.message
            );
        }
        verdict
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluationLimits::default())
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("limits", &self.limits)
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}
