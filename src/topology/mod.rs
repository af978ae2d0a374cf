//! Index-level structure of a tower.
//!
//! This module holds everything that does not depend on the liquid:
//! - triangular-number arithmetic mapping arena slots to rows
//! - `Position` coordinates
//! - glass labels
//! - the overflow edge lists between slots

pub mod overflow_graph;
pub mod position;
pub mod triangular;
pub mod uid;

pub use overflow_graph::OverflowGraph;
pub use position::Position;
