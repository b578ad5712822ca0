//! Domain models for the breeding planner.
//!
//! # Core Concepts
//!
//! - [`TargetProfile`]: the desired end-state attribute set. One per profile
//!   document; replaced wholesale on settings save.
//! - [`Candidate`]: a breeding-roster entry evaluated against the target.
//!   Its trait map always mirrors the target's trait list (see
//!   [`reconcile_traits`]).
//! - [`ColorFact`]: a recorded rule that crossing two colors can yield a set
//!   of result colors. Parent pairs are unordered.
//! - [`AncestryNode`]: one node of a color-ancestry trace. Built per query,
//!   never persisted.
//! - [`CatalogColor`]: static display catalog entry. Decorates output; never
//!   constrains which color names are legal.

mod color;
mod profile;

pub use color::*;
pub use profile::*;
