//! ECU descriptor -> ECU node, pin nodes, and ownership edges.

use std::collections::HashSet;

use ht_core::{ensure_finite, ensure_non_negative};
use ht_graph::{EdgeKind, HarnessGraph, NodeKind, PinAttrs};

use crate::schema::{EcuSpec, PinSpec};
use crate::{LoadError, LoadResult};

/// Graph key of a pin: `"{ecu_id}:{pin_number}"`.
pub fn pin_key(ecu_id: &str, pin_number: &str) -> String {
    format!("{ecu_id}:{pin_number}")
}

/// Load a typed ECU descriptor. Returns the number of pins loaded.
pub fn load_ecu_spec(graph: &mut HarnessGraph, spec: &EcuSpec) -> LoadResult<usize> {
    let raw = serde_json::to_value(spec).map_err(|e| malformed(&spec.ecu_id, e.to_string()))?;
    load_with_raw(graph, spec, raw)
}

/// Load an untyped descriptor, e.g. one produced by a datasheet extractor.
///
/// Missing or mistyped fields surface as `MalformedSpec`. The value is kept
/// verbatim on the ECU node, including fields the loader does not read.
pub fn load_ecu_value(graph: &mut HarnessGraph, value: serde_json::Value) -> LoadResult<usize> {
    let spec: EcuSpec = serde_json::from_value(value.clone()).map_err(|e| {
        let ecu = value
            .get("ecu_id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");
        malformed(ecu, e.to_string())
    })?;
    load_with_raw(graph, &spec, value)
}

fn load_with_raw(
    graph: &mut HarnessGraph,
    spec: &EcuSpec,
    raw_spec: serde_json::Value,
) -> LoadResult<usize> {
    let ecu_id = spec.ecu_id.trim();
    if ecu_id.is_empty() {
        return Err(malformed(&spec.ecu_id, "ecu_id is empty"));
    }

    graph.add_node(ecu_id, NodeKind::Ecu { raw_spec });

    let mut seen = HashSet::new();
    for pin in &spec.pins {
        let attrs = check_pin(ecu_id, pin)?;
        if !seen.insert(pin.pin_number.as_str()) {
            return Err(malformed(
                ecu_id,
                format!("pin {} listed more than once", pin.pin_number),
            ));
        }

        let key = pin_key(ecu_id, &pin.pin_number);
        graph.add_node(key.as_str(), NodeKind::Pin(attrs));
        graph.add_edge(ecu_id, &key, EdgeKind::Internal);
        tracing::info!(ecu = ecu_id, pin = %pin.pin_number, "loaded spec pin");
    }

    Ok(seen.len())
}

fn check_pin(ecu_id: &str, pin: &PinSpec) -> LoadResult<PinAttrs> {
    if pin.pin_number.trim().is_empty() {
        return Err(malformed(ecu_id, "pin_number is empty"));
    }
    let max_current = ensure_non_negative(pin.max_current_amps, "max_current_amps")
        .map_err(|e| malformed(ecu_id, format!("pin {}: {e}", pin.pin_number)))?;
    let voltage_ref = ensure_finite(pin.voltage_ref, "voltage_ref")
        .map_err(|e| malformed(ecu_id, format!("pin {}: {e}", pin.pin_number)))?;

    Ok(PinAttrs::new(max_current, voltage_ref)
        .with_function(pin.function.as_str())
        .with_type(pin.pin_type.as_str()))
}

fn malformed(ecu: &str, reason: impl Into<String>) -> LoadError {
    LoadError::MalformedSpec {
        ecu: ecu.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(number: &str, max: f64) -> PinSpec {
        PinSpec {
            pin_number: number.to_string(),
            function: "Fog_Light_Front_L".to_string(),
            pin_type: "HSD".to_string(),
            max_current_amps: max,
            voltage_ref: 12.0,
        }
    }

    fn bcm(pins: Vec<PinSpec>) -> EcuSpec {
        EcuSpec {
            ecu_id: "BCM_Gen2".to_string(),
            description: Some("Body Control Module - High Line".to_string()),
            pins,
        }
    }

    #[test]
    fn loads_ecu_pins_and_ownership() {
        let mut g = HarnessGraph::new();
        let n = load_ecu_spec(&mut g, &bcm(vec![pin("Pin4", 5.0), pin("Pin5", 0.5)])).unwrap();
        assert_eq!(n, 2);

        let attrs = g.get_node("BCM_Gen2:Pin4").unwrap().kind.as_pin().unwrap();
        assert_eq!(attrs.max_current_amps, 5.0);
        assert_eq!(attrs.voltage_ref, 12.0);
        assert_eq!(attrs.function, "Fog_Light_Front_L");
        assert_eq!(attrs.pin_type, "HSD");

        let edge = g.get_edge("BCM_Gen2", "BCM_Gen2:Pin5").unwrap();
        assert!(edge.kind.is_internal());
        ht_graph::validate_invariants(&g).unwrap();
    }

    #[test]
    fn raw_spec_is_retained() {
        let mut g = HarnessGraph::new();
        load_ecu_spec(&mut g, &bcm(vec![pin("Pin4", 5.0)])).unwrap();
        let NodeKind::Ecu { raw_spec } = &g.get_node("BCM_Gen2").unwrap().kind else {
            panic!("expected ECU node");
        };
        assert_eq!(raw_spec["description"], "Body Control Module - High Line");
        assert_eq!(raw_spec["pins"][0]["type"], "HSD");
    }

    #[test]
    fn negative_rating_is_malformed_and_keeps_earlier_pins() {
        let mut g = HarnessGraph::new();
        let err = load_ecu_spec(
            &mut g,
            &bcm(vec![pin("Pin4", 5.0), pin("Pin5", -1.0), pin("Pin6", 1.0)]),
        )
        .unwrap_err();

        assert!(matches!(err, LoadError::MalformedSpec { .. }));
        assert!(g.get_node("BCM_Gen2:Pin4").is_some());
        assert!(g.get_node("BCM_Gen2:Pin5").is_none());
        assert!(g.get_node("BCM_Gen2:Pin6").is_none());
    }

    #[test]
    fn empty_ecu_id_inserts_nothing() {
        let mut g = HarnessGraph::new();
        let mut spec = bcm(vec![pin("Pin4", 5.0)]);
        spec.ecu_id = "  ".to_string();
        assert!(load_ecu_spec(&mut g, &spec).is_err());
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn duplicate_pin_number_rejected() {
        let mut g = HarnessGraph::new();
        let err = load_ecu_spec(&mut g, &bcm(vec![pin("Pin4", 5.0), pin("Pin4", 3.0)]))
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn untyped_value_with_missing_field_is_malformed() {
        let mut g = HarnessGraph::new();
        let value = serde_json::json!({
            "ecu_id": "BCM_Gen2",
            "pins": [{ "pin_number": "Pin4", "function": "x", "type": "HSD", "voltage_ref": 12.0 }]
        });
        let err = load_ecu_value(&mut g, value).unwrap_err();
        match err {
            LoadError::MalformedSpec { ecu, reason } => {
                assert_eq!(ecu, "BCM_Gen2");
                assert!(reason.contains("max_current_amps"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn untyped_value_with_wrong_type_is_malformed() {
        let mut g = HarnessGraph::new();
        let value = serde_json::json!({
            "ecu_id": "BCM_Gen2",
            "pins": [{ "pin_number": "Pin4", "function": "x", "type": "HSD",
                       "max_current_amps": "five", "voltage_ref": 12.0 }]
        });
        assert!(matches!(
            load_ecu_value(&mut g, value),
            Err(LoadError::MalformedSpec { .. })
        ));
    }

    #[test]
    fn untyped_value_keeps_unknown_fields() {
        let mut g = HarnessGraph::new();
        let value = serde_json::json!({
            "ecu_id": "BCM_Gen2",
            "supplier": "Acme",
            "pins": [{ "pin_number": "Pin4", "function": "x", "type": "HSD",
                       "max_current_amps": 5.0, "voltage_ref": 12.0 }]
        });
        load_ecu_value(&mut g, value).unwrap();
        let NodeKind::Ecu { raw_spec } = &g.get_node("BCM_Gen2").unwrap().kind else {
            panic!("expected ECU node");
        };
        assert_eq!(raw_spec["supplier"], "Acme");
    }

    #[test]
    fn netlist_first_then_spec_upgrades_generic_pin() {
        let mut g = HarnessGraph::new();
        let wire = EdgeKind::Wire(ht_graph::WireAttrs::new(18, 1.5, 0.021));
        g.add_edge("BCM_Gen2:Pin4", "Splice", wire);
        g.add_edge("Splice", "BCM_Gen2:Pin4", wire);
        assert_eq!(g.get_node("BCM_Gen2:Pin4").unwrap().kind, NodeKind::Generic);
        load_ecu_spec(&mut g, &bcm(vec![pin("Pin4", 5.0)])).unwrap();
        assert!(g.get_node("BCM_Gen2:Pin4").unwrap().kind.is_pin());
    }
}
