//! Series resistance and voltage drop along a path.

use ht_core::units::{Current, Resistance, Voltage, ohmic_drop, ohms};
use ht_graph::{EdgeKind, PathHop, WireAttrs};

/// Resistance of one wire segment: `resistance_per_m * length_m`.
pub fn segment_resistance(wire: &WireAttrs) -> Resistance {
    ohms(wire.resistance_ohm())
}

/// Total series resistance of the given hops.
///
/// Only wire hops conduct; internal (ECU -> pin) hops add nothing.
pub fn path_resistance<'a>(hops: impl IntoIterator<Item = &'a PathHop>) -> Resistance {
    hops.into_iter()
        .fold(ohms(0.0), |total, hop| match &hop.edge {
            EdgeKind::Wire(wire) => total + segment_resistance(wire),
            EdgeKind::Internal => total,
        })
}

/// Drop across the path for the requested current.
pub fn voltage_drop(current: Current, resistance: Resistance) -> Voltage {
    ohmic_drop(current, resistance)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use ht_core::units::as_ohms;
    use ht_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn arb_hop() -> impl Strategy<Value = PathHop> {
        prop_oneof![
            1 => Just(EdgeKind::Internal),
            4 => (1_i32..40, 0.0_f64..50.0, 0.0_f64..1.0)
                .prop_map(|(g, l, r)| EdgeKind::Wire(WireAttrs::new(g, l, r))),
        ]
        .prop_map(|edge| PathHop {
            from: "x".into(),
            to: "y".into(),
            edge,
        })
    }

    proptest! {
        #[test]
        fn resistance_adds_under_concatenation(
            a in prop::collection::vec(arb_hop(), 0..8),
            b in prop::collection::vec(arb_hop(), 0..8),
        ) {
            let joined: Vec<PathHop> = a.iter().chain(b.iter()).cloned().collect();
            let whole = as_ohms(path_resistance(&joined));
            let parts = as_ohms(path_resistance(&a)) + as_ohms(path_resistance(&b));
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(whole, parts, tol));
        }

        #[test]
        fn resistance_ignores_hop_order(hops in prop::collection::vec(arb_hop(), 0..8)) {
            let mut reversed = hops.clone();
            reversed.reverse();
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(
                as_ohms(path_resistance(&hops)),
                as_ohms(path_resistance(&reversed)),
                tol
            ));
        }
    }
}
