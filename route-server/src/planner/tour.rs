//! Optional 2-opt refinement of a visiting order.
//!
//! The planner's default route is rank-then-truncate: nodes are visited in
//! ranked order. When a query sets `refine_tour`, the selected nodes are
//! reordered here to shorten the path. The node set never changes, only the
//! order. This is a local improvement, not an exact solver.

use crate::domain::Node;
use crate::geo::{GeoPoint, distance_km};

/// Upper bound on improvement passes.
const MAX_PASSES: usize = 32;

/// Improvements smaller than this (km) are treated as noise.
const EPSILON_KM: f64 = 1e-9;

/// Reorder `nodes` with 2-opt moves to shorten the open path that starts at
/// `origin` (if any) and visits every node once.
///
/// Only strictly improving moves are applied, so the result is never longer
/// than the input order.
pub fn two_opt<'a>(mut nodes: Vec<&'a Node>, origin: Option<GeoPoint>) -> Vec<&'a Node> {
    let n = nodes.len();
    if n < 2 {
        return nodes;
    }

    for _ in 0..MAX_PASSES {
        let mut improved = false;

        for i in 0..n - 1 {
            for j in (i + 1)..n {
                // Reversing nodes[i..=j] replaces edges (prev, i) and (j, next)
                // with (prev, j) and (i, next).
                let prev = if i == 0 {
                    origin
                } else {
                    Some(nodes[i - 1].position())
                };
                let next = nodes.get(j + 1).map(|node| node.position());
                let first = nodes[i].position();
                let last = nodes[j].position();

                let before = leg(prev, first) + leg(Some(last), next);
                let after = leg(prev, last) + leg(Some(first), next);

                if after + EPSILON_KM < before {
                    nodes[i..=j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    nodes
}

fn leg(from: Option<GeoPoint>, to: impl Into<Option<GeoPoint>>) -> f64 {
    match (from, to.into()) {
        (Some(a), Some(b)) => distance_km(a, b),
        _ => 0.0,
    }
}
