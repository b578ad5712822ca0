//! Paddock: a local-first breeding planner.
//!
//! The planner answers two questions: which roster entries come closest to a
//! desired target profile (match scoring and trait coverage), and which
//! chains of crosses could produce a desired color (ancestry tracing over a
//! user-entered combination registry, which may be cyclic).
//!
//! - [`models`]: the serde data model shared by every layer.
//! - [`planner`]: the pure algorithms: scoring, coverage, the combination
//!   registry, cycle-safe ancestry tracing, trait recognition.
//! - [`store`]: JSON-document persistence plus the static color catalog.
//! - [`api`]: the axum router the UI talks to.

pub mod api;
pub mod models;
pub mod planner;
pub mod store;
