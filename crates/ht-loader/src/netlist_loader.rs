//! Netlist records -> mirrored wire edges.

use ht_core::ensure_non_negative;
use ht_graph::{EdgeKind, HarnessGraph, WireAttrs};

use crate::schema::WireConnection;
use crate::{LoadError, LoadResult};

/// Load wire connections in order. Returns the number of records loaded.
///
/// Each record becomes `from -> to` plus the mirror `to -> from` with the
/// same attributes, so path search does not depend on the declared direction.
pub fn load_netlist(graph: &mut HarnessGraph, connections: &[WireConnection]) -> LoadResult<usize> {
    for (index, conn) in connections.iter().enumerate() {
        load_connection(graph, index, conn)?;
    }
    Ok(connections.len())
}

/// Load an untyped netlist (a JSON array of records).
///
/// Records are decoded one at a time, so a bad record at index `n` leaves
/// records `0..n` loaded.
pub fn load_netlist_value(graph: &mut HarnessGraph, value: serde_json::Value) -> LoadResult<usize> {
    let serde_json::Value::Array(records) = value else {
        return Err(LoadError::MalformedWire {
            index: 0,
            from: String::new(),
            to: String::new(),
            reason: "netlist must be an array of connection records".to_string(),
        });
    };

    let mut loaded = 0;
    for (index, record) in records.into_iter().enumerate() {
        let endpoint = |key: &str| {
            record
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("?")
                .to_string()
        };
        let (from, to) = (endpoint("from"), endpoint("to"));
        let conn: WireConnection =
            serde_json::from_value(record).map_err(|e| LoadError::MalformedWire {
                index,
                from,
                to,
                reason: e.to_string(),
            })?;
        load_connection(graph, index, &conn)?;
        loaded += 1;
    }
    Ok(loaded)
}

fn load_connection(graph: &mut HarnessGraph, index: usize, conn: &WireConnection) -> LoadResult<()> {
    let attrs = check_connection(index, conn)?;
    graph.add_edge(&conn.from, &conn.to, EdgeKind::Wire(attrs));
    graph.add_edge(&conn.to, &conn.from, EdgeKind::Wire(attrs));
    tracing::debug!(
        from = %conn.from,
        to = %conn.to,
        gauge = conn.gauge,
        resistance_ohm = attrs.resistance_ohm(),
        "loaded wire"
    );
    Ok(())
}

fn check_connection(index: usize, conn: &WireConnection) -> LoadResult<WireAttrs> {
    let fail = |reason: String| LoadError::MalformedWire {
        index,
        from: conn.from.clone(),
        to: conn.to.clone(),
        reason,
    };

    if conn.from.trim().is_empty() || conn.to.trim().is_empty() {
        return Err(fail("endpoint id is empty".to_string()));
    }
    if conn.gauge <= 0 {
        return Err(fail(format!("gauge must be positive, got {}", conn.gauge)));
    }
    let length_m = ensure_non_negative(conn.length_m, "length_m").map_err(|e| fail(e.to_string()))?;
    let resistance_per_m = ensure_non_negative(conn.resistance_per_m, "resistance_per_m")
        .map_err(|e| fail(e.to_string()))?;

    Ok(WireAttrs::new(conn.gauge, length_m, resistance_per_m))
}
