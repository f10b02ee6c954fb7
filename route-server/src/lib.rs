//! DePIN node route server.
//!
//! A web service that answers: "which infrastructure nodes should I verify
//! next, and in what order?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod geo;
pub mod planner;
pub mod web;
