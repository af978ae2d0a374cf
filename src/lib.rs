#![cfg_attr(docsrs, feature(doc_cfg))]
//! # glass-tower
//!
//! glass-tower models a triangular tower of glasses (a champagne tower) and
//! computes where liquid ends up when a volume is poured over the top glass.
//! Each glass keeps what fits and spills the rest into the one or two
//! glasses below it; whatever leaves the bottom row is reported as overflow.
//!
//! ## Features
//! - [`Glass`](data::glass::Glass): a bounded container with validated setters
//! - [`Tower`](tower::Tower): triangular arena of glasses with overflow edges
//!   wired at insertion time
//! - Triangular-number helpers for row/column bookkeeping
//! - Invariant checks in debug builds or with the `check-invariants` feature
//!
//! ## Usage
//! ```rust
//! use glass_tower::prelude::*;
//!
//! let mut tower = Tower::with_rows(4);
//! let overflow = tower.fill(2500.0)?;
//! assert_eq!(overflow, 312.5);
//! assert_eq!(tower.get_glass("G").map(Glass::quantity), Some(93.75));
//! # Ok::<(), TowerError>(())
//! ```
//!
//! ## Determinism
//!
//! Positions depend only on insertion order, and the cascade visits glasses
//! row by row, so the same pour over the same tower always produces the same
//! distribution.
//!
//! The library logs through the [`log`] facade and never installs a logger.

pub mod config;
pub mod data;
pub mod debug_invariants;
pub mod topology;
pub mod tower;
pub mod tower_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::config::TowerConfig;
    pub use crate::data::glass::{DEFAULT_CAPACITY, Glass};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::position::Position;
    pub use crate::topology::triangular::{is_triangular, triangular};
    pub use crate::topology::uid::get_id;
    pub use crate::tower::Tower;
    pub use crate::tower_error::TowerError;
}
