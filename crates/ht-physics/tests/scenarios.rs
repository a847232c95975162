//! Fog-light scenarios evaluated end to end over a hand-built harness.

use ht_core::{Tolerances, nearly_equal};
use ht_graph::{EdgeKind, HarnessGraph, NodeKind, PathSpec, PinAttrs, WireAttrs, resolve_power_path};
use ht_physics::{EvaluationLimits, Evaluator, LoadRule, RuleInput, RuleOutcome, RuleStatus};

const TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-9,
};

fn fog_light_path() -> PathSpec {
    let mut g = HarnessGraph::new();
    g.add_node("BCM_Gen2", NodeKind::Ecu {
        raw_spec: serde_json::Value::Null,
    });
    g.add_node("BCM_Gen2:Pin4", NodeKind::Pin(PinAttrs::new(5.0, 12.0)));
    g.add_edge("BCM_Gen2", "BCM_Gen2:Pin4", EdgeKind::Internal);
    for (from, to, attrs) in [
        ("BCM_Gen2:Pin4", "Splice_A22", WireAttrs::new(18, 1.5, 0.021)),
        ("Splice_A22", "Conn_Fog_L", WireAttrs::new(18, 0.5, 0.021)),
        ("Conn_Fog_L", "Lamp_Fog_L", WireAttrs::new(20, 0.2, 0.033)),
    ] {
        g.add_edge(from, to, EdgeKind::Wire(attrs));
        g.add_edge(to, from, EdgeKind::Wire(attrs));
    }
    resolve_power_path(&g, "Lamp_Fog_L").unwrap()
}

#[test]
fn led_fog_lamp_at_four_amps_passes() {
    let verdict = Evaluator::default().evaluate(&fog_light_path(), 4.0);

    assert_eq!(verdict.target_pin, "BCM_Gen2:Pin4");
    assert!(nearly_equal(verdict.total_resistance_ohm, 0.0486, TOL));
    assert!(nearly_equal(verdict.voltage_drop_v, 0.1944, TOL));
    assert!(verdict.passed());

    let report = verdict.report();
    assert_eq!(report.load_request, "4A");
    assert_eq!(report.pin_capacity, "5A");
    assert_eq!(report.voltage_drop, "0.1944V");
    assert_eq!(report.checks, vec!["PASS: Current OK", "PASS: Voltage Drop OK"]);
}

#[test]
fn halogen_upgrade_at_ten_amps_overloads_pin() {
    let verdict = Evaluator::default().evaluate(&fog_light_path(), 10.0);

    assert!(nearly_equal(verdict.voltage_drop_v, 0.486, TOL));
    assert_eq!(verdict.check("capacity").unwrap().status, RuleStatus::Fail);
    assert_eq!(verdict.check("voltage_drop").unwrap().status, RuleStatus::Pass);
    assert_eq!(
        verdict.report().checks,
        vec!["FAIL: Pin Overcurrent", "PASS: Voltage Drop OK"]
    );
}

#[test]
fn tight_drop_limit_fails_both_rules() {
    let strict = Evaluator::new(EvaluationLimits::new(0.3, 12.0).unwrap());
    let verdict = strict.evaluate(&fog_light_path(), 10.0);

    assert_eq!(verdict.failures().count(), 2);
    assert_eq!(
        verdict.report().checks,
        vec!["FAIL: Pin Overcurrent", "FAIL: Voltage Drop High (0.49V)"]
    );
}

#[test]
fn evaluation_is_deterministic() {
    let path = fog_light_path();
    let evaluator = Evaluator::default();
    let first = evaluator.evaluate(&path, 7.5);
    for _ in 0..10 {
        assert_eq!(evaluator.evaluate(&path, 7.5), first);
    }
}

#[test]
fn zero_current_has_zero_drop() {
    let verdict = Evaluator::default().evaluate(&fog_light_path(), 0.0);
    assert_eq!(verdict.voltage_drop_v, 0.0);
    assert!(verdict.passed());
}

struct MaxHops(usize);

impl LoadRule for MaxHops {
    fn name(&self) -> &str {
        "max_hops"
    }

    fn check(&self, input: &RuleInput<'_>) -> RuleOutcome {
        if input.path.hop_count() > self.0 {
            RuleOutcome::fail(self.name(), "Path Too Long")
        } else {
            RuleOutcome::pass(self.name(), "Path OK")
        }
    }
}

#[test]
fn custom_rules_see_the_path() {
    let evaluator = Evaluator::default().with_rule(MaxHops(2));
    let verdict = evaluator.evaluate(&fog_light_path(), 4.0);
    assert_eq!(verdict.checks.len(), 3);
    assert_eq!(verdict.check("max_hops").unwrap().tag(), "FAIL: Path Too Long");
    assert!(verdict.check("capacity").unwrap().passed());
}

#[test]
fn verdict_serializes_statuses() {
    let verdict = Evaluator::default().evaluate(&fog_light_path(), 10.0);
    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["checks"][0]["status"], "FAIL");
    assert_eq!(json["path"][0], "Lamp_Fog_L");
}
