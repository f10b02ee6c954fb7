//! Route planner for DePIN verification runs.
//!
//! Answers: "given these nodes and where I am, which ones should I visit and
//! in what order?"
//!
//! Planning is a fixed pipeline over a caller-supplied catalog:
//! filter (active, within radius) → rank (by criterion) → assemble (take the
//! first `max_nodes`, optionally refine the order with 2-opt, compute
//! metrics). The visiting order is rank-then-truncate, which is an
//! approximation of the shortest tour, not a solution to it.

mod assemble;
mod config;
mod engine;
mod error;
mod filter;
mod options;
mod query;
mod rank;
mod tour;

#[cfg(test)]
mod test_support;

pub use assemble::{RouteResult, assemble};
pub use config::{InvalidSpeed, PlannerConfig, TravelMode, TravelModel, UnknownTravelMode};
pub use engine::Planner;
pub use error::PlanError;
pub use filter::filter_candidates;
pub use options::{RouteOption, RoutePreset, generate_route_options};
pub use query::{Criterion, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MAX_NODES, RouteQuery};
pub use rank::rank;
pub use tour::two_opt;
