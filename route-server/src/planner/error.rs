//! Planning error types.

/// Error from route planning.
///
/// These are the only ways a planning call can fail. Both are returned to
/// the caller unchanged; nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The query is malformed or contradictory
    #[error("invalid route query: {0}")]
    InvalidQuery(String),

    /// The query is well-formed but no active node qualifies
    #[error("{}", no_candidates_message(.max_distance_km, .has_origin))]
    NoCandidates {
        max_distance_km: f64,
        has_origin: bool,
    },
}

fn no_candidates_message(max_distance_km: &f64, has_origin: &bool) -> String {
    if *has_origin {
        format!("no active nodes found within {max_distance_km} km")
    } else {
        "no active nodes available".to_string()
    }
}

impl PlanError {
    /// Stable machine-readable kind, for API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::InvalidQuery(_) => "invalid_query",
            PlanError::NoCandidates { .. } => "no_candidates",
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PlanError::InvalidQuery(message.into())
    }
}
