//! Aspect pattern detection over a set of longitudes.

use serde::{Deserialize, Serialize};

use crate::aspect::{detect_aspect, AspectKind};

/// Recognized three-body aspect patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    /// Three bodies pairwise in trine.
    GrandTrine,
    /// One opposition bridged by two squares to a common apex.
    TSquare,
}

/// A detected pattern; `indices` are positions in the input slice, sorted
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectPattern {
    pub kind: PatternKind,
    pub indices: [usize; 3],
}

/// Scan every unordered triple of `longitudes_deg` for Grand Trines and
/// T-Squares within `orb_deg`. Each triple reports at most one pattern of
/// each kind, with indices sorted ascending.
pub fn detect_aspect_patterns(longitudes_deg: &[f64], orb_deg: f64) -> Vec<AspectPattern> {
    let n = longitudes_deg.len();
    let mut patterns = Vec::new();

    let kind_of = |i: usize, j: usize| {
        detect_aspect(longitudes_deg[i], longitudes_deg[j], orb_deg).map(|r| r.kind)
    };

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let ab = kind_of(i, j);
                let bc = kind_of(j, k);
                let ac = kind_of(i, k);

                let trines = [ab, bc, ac]
                    .iter()
                    .filter(|a| **a == Some(AspectKind::Trine))
                    .count();
                if trines == 3 {
                    patterns.push(AspectPattern {
                        kind: PatternKind::GrandTrine,
                        indices: [i, j, k],
                    });
                }

                let oppositions = [ab, bc, ac]
                    .iter()
                    .filter(|a| **a == Some(AspectKind::Opposition))
                    .count();
                let squares = [ab, bc, ac]
                    .iter()
                    .filter(|a| **a == Some(AspectKind::Square))
                    .count();
                if oppositions == 1 && squares == 2 {
                    patterns.push(AspectPattern {
                        kind: PatternKind::TSquare,
                        indices: [i, j, k],
                    });
                }
            }
        }
    }

    patterns
}
