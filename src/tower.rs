//! Tower: a triangular stack of glasses and the overflow cascade.
//!
//! Glasses live in an arena ordered row by row, left to right, so the
//! glass at `(row, column)` is stored at slot `T(row) + column` where `T` is
//! the triangular number. Overflow edges go from a glass to the one or two
//! glasses directly below it and are recorded in an [`OverflowGraph`] when
//! each glass is added; they are never recomputed.
//!
//! ```text
//!         (A)
//!         / \
//!       (B) (C)
//!       / \ / \
//!     (D) (E) (F)
//!     / \ / \ / \
//!   (G) (H) (I) (J)
//! ```
//!
//! Pouring with [`Tower::fill`] fills the top glass and hands each glass's
//! overflow to its children, half to each when there are two. What spills
//! past the bottom row is returned to the caller.

use crate::config::TowerConfig;
use crate::data::glass::{DEFAULT_CAPACITY, Glass};
use crate::debug_invariants::{DebugInvariants, ensure};
use crate::topology::overflow_graph::OverflowGraph;
use crate::topology::position::Position;
use crate::topology::triangular::{
    checked_triangular, is_triangular, position_of, row_of, row_start, slot_of,
};
use crate::topology::uid::get_id;
use crate::tower_error::{TowerError, check_volume};
use itertools::Itertools;
use std::ptr;

/// A triangular tower of glasses.
///
/// The tower owns its glasses. Glasses are handed out by reference; their
/// capacity and contents can be changed through [`Tower::set_capacity`] and
/// [`Tower::set_quantity`], but a stored glass can never be swapped out or
/// moved.
#[derive(Clone, Debug, Default)]
pub struct Tower {
    glasses: Vec<Glass>,
    graph: OverflowGraph,
}

impl Tower {
    /// Creates an empty tower.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tower with `rows` rows of empty glasses labelled `A`, `B`, ...
    ///
    /// # Example
    /// ```rust
    /// use glass_tower::tower::Tower;
    /// let tower = Tower::with_rows(4);
    /// assert_eq!(tower.len(), 10);
    /// assert_eq!(tower.row_count(), 4);
    /// ```
    ///
    /// # Panics
    /// Panics if `rows * (rows + 1) / 2` does not fit in `usize`; use
    /// [`Tower::from_config`] to get an error instead.
    pub fn with_rows(rows: usize) -> Self {
        Self::build(rows, DEFAULT_CAPACITY).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Builds a tower from a [`TowerConfig`].
    ///
    /// # Errors
    /// `InvalidValue` if the configured capacity is negative or not finite,
    /// or if the glass count for `rows` overflows `usize`.
    pub fn from_config(cfg: &TowerConfig) -> Result<Self, TowerError> {
        let capacity = check_volume("capacity", cfg.capacity)?;
        Self::build(cfg.rows, capacity)
    }

    fn build(rows: usize, capacity: f64) -> Result<Self, TowerError> {
        let count = checked_triangular(rows).ok_or_else(|| {
            TowerError::invalid_value("rows", rows as f64, "glass count overflows usize")
        })?;
        let mut tower = Tower {
            glasses: Vec::with_capacity(count),
            graph: OverflowGraph::with_capacity(count),
        };
        for index in 0..count {
            let mut glass = Glass::new(get_id(index));
            glass.capacity = capacity;
            tower.push_glass(glass);
        }
        log::debug!("built tower: rows={rows} glasses={count} capacity={capacity}");
        crate::debug_invariants!(tower, "Tower::build");
        Ok(tower)
    }

    /// Add `glass` at the next free position and wire its overflow edges
    /// from the row above.
    ///
    /// # Errors
    /// - `AlreadyPlaced` if the glass already has a position.
    /// - `DuplicateGlass` if a glass with the same uid is in the tower.
    pub fn add_glass(&mut self, glass: Glass) -> Result<&Glass, TowerError> {
        if let Some(position) = glass.position() {
            return Err(TowerError::AlreadyPlaced {
                uid: glass.uid().to_owned(),
                position,
            });
        }
        if self.get_glass(glass.uid()).is_some() {
            return Err(TowerError::DuplicateGlass(glass.uid().to_owned()));
        }
        let slot = self.push_glass(glass);
        crate::debug_invariants!(self, "Tower::add_glass");
        Ok(&self.glasses[slot])
    }

    fn push_glass(&mut self, mut glass: Glass) -> usize {
        let position = self.next_position();
        let slot = self.graph.add_node();
        debug_assert_eq!(slot, slot_of(position));
        for parent in Self::parent_slots(position) {
            self.graph.add_arrow(parent, slot);
        }
        glass.place(position);
        log::trace!("placed glass {} at {}", glass.uid(), position);
        self.glasses.push(glass);
        slot
    }

    /// Position the next added glass will take.
    ///
    /// A glass count that is a triangular number means the last row is
    /// complete and the next glass opens a new row.
    pub fn next_position(&self) -> Position {
        let count = self.glasses.len();
        let row = row_of(count);
        if is_triangular(count) {
            return Position::new(row, 0);
        }
        let previous = self
            .glasses
            .last()
            .and_then(Glass::position)
            .map_or(0, |p| p.column + 1);
        Position::new(row, previous)
    }

    /// Slots of the previous row that overflow into `position`.
    fn parent_slots(position: Position) -> std::ops::Range<usize> {
        let Position { row, column } = position;
        if row == 0 {
            return 0..0;
        }
        let above = row_start(row - 1);
        let len = row;
        if column == 0 {
            above..above + 1
        } else if column == row {
            above + len - 1..above + len
        } else {
            above + column - 1..above + column + 1
        }
    }

    /// Number of glasses.
    #[inline]
    pub fn len(&self) -> usize {
        self.glasses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glasses.is_empty()
    }

    /// All glasses in insertion (row-major) order.
    #[inline]
    pub fn glasses(&self) -> &[Glass] {
        &self.glasses
    }

    /// Number of complete rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        row_of(self.glasses.len())
    }

    /// Complete rows from top to bottom, each ordered left to right.
    ///
    /// The iterator is computed from the current arena on every call.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Glass]> + '_ {
        (0..self.row_count()).map(move |r| &self.glasses[row_start(r)..row_start(r + 1)])
    }

    /// Row `row`, if it is complete.
    pub fn row(&self, row: usize) -> Option<&[Glass]> {
        (row < self.row_count()).then(|| &self.glasses[row_start(row)..row_start(row + 1)])
    }

    /// Glass labelled `uid`, if any.
    pub fn get_glass(&self, uid: &str) -> Option<&Glass> {
        self.glasses.iter().find(|g| g.uid() == uid)
    }

    fn glass_mut(&mut self, uid: &str) -> Result<&mut Glass, TowerError> {
        self.glasses
            .iter_mut()
            .find(|g| g.uid() == uid)
            .ok_or_else(|| TowerError::InvalidArgument(uid.to_owned()))
    }

    /// Change the capacity of glass `uid` through [`Glass::set_capacity`].
    ///
    /// # Errors
    /// `InvalidArgument` if no glass is labelled `uid`; otherwise whatever
    /// [`Glass::set_capacity`] rejects.
    pub fn set_capacity(&mut self, uid: &str, capacity: f64) -> Result<(), TowerError> {
        self.glass_mut(uid)?.set_capacity(capacity)
    }

    /// Set the liquid held by glass `uid` through [`Glass::set_quantity`].
    ///
    /// # Errors
    /// `InvalidArgument` if no glass is labelled `uid`; otherwise whatever
    /// [`Glass::set_quantity`] rejects.
    pub fn set_quantity(&mut self, uid: &str, quantity: f64) -> Result<(), TowerError> {
        self.glass_mut(uid)?.set_quantity(quantity)
    }

    /// Glass at `position`, if any.
    pub fn glass_at(&self, position: Position) -> Option<&Glass> {
        if !position.is_valid() {
            return None;
        }
        self.glasses.get(slot_of(position))
    }

    /// Arena slot of `glass`, which must be one of this tower's own glasses.
    fn slot_of_glass(&self, glass: &Glass) -> Result<usize, TowerError> {
        glass
            .position()
            .map(slot_of)
            .filter(|&slot| self.glasses.get(slot).is_some_and(|g| ptr::eq(g, glass)))
            .ok_or_else(|| TowerError::InvalidArgument(glass.uid().to_owned()))
    }

    /// Glasses overflowing into `glass`, left to right.
    ///
    /// # Errors
    /// `InvalidArgument` if `glass` is not one of this tower's glasses.
    pub fn get_parents(&self, glass: &Glass) -> Result<Vec<&Glass>, TowerError> {
        let slot = self.slot_of_glass(glass)?;
        Ok(self.graph.parents(slot).iter().map(|&s| &self.glasses[s]).collect())
    }

    /// Glasses receiving the overflow of `glass`, left to right.
    ///
    /// # Errors
    /// `InvalidArgument` if `glass` is not one of this tower's glasses.
    pub fn get_children(&self, glass: &Glass) -> Result<Vec<&Glass>, TowerError> {
        let slot = self.slot_of_glass(glass)?;
        Ok(self.graph.children(slot).iter().map(|&s| &self.glasses[s]).collect())
    }

    /// Sum of all glass capacities.
    pub fn total_capacity(&self) -> f64 {
        self.glasses.iter().map(Glass::capacity).sum()
    }

    /// Sum of the liquid held by all glasses.
    pub fn total_quantity(&self) -> f64 {
        self.glasses.iter().map(Glass::quantity).sum()
    }

    /// Empty every glass.
    pub fn empty(&mut self) {
        self.glasses.iter_mut().for_each(Glass::empty);
    }

    /// Pour `volume` over the top glass and return what spills past the
    /// bottom row.
    ///
    /// Liquid is added to whatever the glasses already hold. Glasses are
    /// visited row by row, so each one has collected the overflow of all
    /// its parents before its own overflow is computed. Overflow goes whole
    /// to a single child, is split evenly between two, and is lost when the
    /// glass has no children. An empty tower loses the whole volume.
    ///
    /// # Errors
    /// `InvalidValue` if `volume` is negative or not finite; the tower is
    /// left unchanged.
    ///
    /// # Example
    /// ```rust
    /// use glass_tower::tower::Tower;
    /// let mut tower = Tower::with_rows(4);
    /// let overflow = tower.fill(1000.0)?;
    /// assert_eq!(overflow, 0.0);
    /// assert_eq!(tower.get_glass("E").unwrap().quantity(), 125.0);
    /// # Ok::<(), glass_tower::tower_error::TowerError>(())
    /// ```
    pub fn fill(&mut self, volume: f64) -> Result<f64, TowerError> {
        let volume = check_volume("volume", volume)?;
        if self.glasses.is_empty() {
            log::warn!("pouring {volume} over an empty tower; everything overflows");
            return Ok(volume);
        }

        let mut inflow = vec![0.0; self.glasses.len()];
        inflow[0] = volume;
        let mut lost = 0.0;

        for slot in 0..self.glasses.len() {
            let received = inflow[slot];
            if received == 0.0 {
                continue;
            }
            let overflow = self.glasses[slot].fill(received)?;
            log::trace!(
                "glass {} received {received}, overflow {overflow}",
                self.glasses[slot].uid()
            );
            if overflow == 0.0 {
                continue;
            }
            match self.graph.children(slot) {
                [] => lost += overflow,
                [only] => inflow[*only] += overflow,
                [left, right] => {
                    let half = overflow / 2.0;
                    inflow[*left] += half;
                    inflow[*right] += half;
                }
                more => unreachable!(
                    "glass at slot {slot} has {} children; a tower glass has at most two",
                    more.len()
                ),
            }
        }

        log::debug!(
            "poured {volume} over {} glasses, overflow {lost}",
            self.glasses.len()
        );
        crate::debug_invariants!(self, "Tower::fill");
        Ok(lost)
    }
}

impl DebugInvariants for Tower {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self, "Tower");
    }

    fn validate_invariants(&self) -> Result<(), TowerError> {
        ensure(self.graph.len() == self.glasses.len(), || {
            format!(
                "{} glasses but {} graph nodes",
                self.glasses.len(),
                self.graph.len()
            )
        })?;
        ensure(self.graph.is_consistent(), || {
            "parent and child lists do not mirror each other".to_owned()
        })?;

        for (slot, glass) in self.glasses.iter().enumerate() {
            let expected = position_of(slot);
            ensure(glass.position() == Some(expected), || {
                format!("glass {glass:?} stored at slot {slot}, expected {expected}")
            })?;
            ensure(
                glass.capacity().is_finite()
                    && glass.capacity() >= 0.0
                    && glass.quantity() >= 0.0
                    && glass.quantity() <= glass.capacity(),
                || {
                    format!(
                        "glass {glass} holds {} of {}",
                        glass.quantity(),
                        glass.capacity()
                    )
                },
            )?;
            let parents = self.graph.parents(slot).len();
            let want = match expected {
                Position { row: 0, .. } => 0,
                p if p.is_row_boundary() => 1,
                _ => 2,
            };
            ensure(parents == want, || {
                format!("glass {glass} at {expected} has {parents} parents, expected {want}")
            })?;
        }

        for (upper, lower) in self.rows().tuple_windows() {
            ensure(lower.len() == upper.len() + 1, || {
                format!(
                    "row [{}] followed by row [{}]",
                    upper.iter().join(" "),
                    lower.iter().join(" ")
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantities(tower: &Tower) -> Vec<f64> {
        tower.glasses().iter().map(Glass::quantity).collect()
    }

    #[test]
    fn next_position_follows_rows() {
        let mut t = Tower::new();
        let mut seen = Vec::new();
        for i in 0..7 {
            seen.push(t.next_position());
            t.add_glass(Glass::new(get_id(i))).unwrap();
        }
        let want: Vec<Position> = [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2), (3, 0)]
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(seen, want);
    }

    #[test]
    fn parent_slots_match_edge_rule() {
        assert_eq!(Tower::parent_slots(Position::new(0, 0)), 0..0);
        assert_eq!(Tower::parent_slots(Position::new(1, 0)), 0..1);
        assert_eq!(Tower::parent_slots(Position::new(1, 1)), 0..1);
        assert_eq!(Tower::parent_slots(Position::new(3, 0)), 3..4);
        assert_eq!(Tower::parent_slots(Position::new(3, 1)), 3..5);
        assert_eq!(Tower::parent_slots(Position::new(3, 3)), 5..6);
    }

    #[test]
    fn add_glass_rejects_duplicates_and_placed_glasses() {
        let mut t = Tower::with_rows(2);
        let err = t.add_glass(Glass::new("A")).unwrap_err();
        assert_eq!(err, TowerError::DuplicateGlass("A".into()));

        let placed = t.get_glass("B").unwrap().clone();
        let err = t.add_glass(placed).unwrap_err();
        assert!(matches!(err, TowerError::AlreadyPlaced { .. }));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn partial_last_row_is_not_yielded() {
        let mut t = Tower::new();
        for i in 0..4 {
            t.add_glass(Glass::new(get_id(i))).unwrap();
        }
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows().len(), 2);
        assert!(t.row(2).is_none());
        assert_eq!(t.glasses()[3].position(), Some(Position::new(2, 0)));
    }

    #[test]
    fn partial_row_routes_single_child_and_loses_the_rest() {
        let mut t = Tower::new();
        for i in 0..4 {
            t.add_glass(Glass::new(get_id(i))).unwrap();
        }
        // B spills only into D; C has no children yet.
        let overflow = t.fill(1000.0).unwrap();
        assert_eq!(quantities(&t), vec![250.0, 250.0, 250.0, 125.0]);
        assert_eq!(overflow, 125.0);
    }

    #[test]
    fn fill_accumulates_across_pours() {
        let mut t = Tower::with_rows(4);
        assert_eq!(t.fill(250.0).unwrap(), 0.0);
        assert_eq!(t.fill(250.0).unwrap(), 0.0);
        assert_eq!(quantities(&t)[..3], [250.0, 125.0, 125.0]);
        t.empty();
        assert_eq!(t.total_quantity(), 0.0);
    }

    #[test]
    fn fill_rejects_bad_volume_without_mutation() {
        let mut t = Tower::with_rows(3);
        assert!(t.fill(-1.0).is_err());
        assert!(t.fill(f64::INFINITY).is_err());
        assert_eq!(t.total_quantity(), 0.0);
    }

    #[test]
    fn empty_tower_loses_everything() {
        let mut t = Tower::new();
        assert_eq!(t.fill(42.0).unwrap(), 42.0);
        assert_eq!(t.rows().count(), 0);
    }

    #[test]
    fn invariants_hold_after_build_and_fill() {
        let mut t = Tower::with_rows(6);
        t.validate_invariants().unwrap();
        t.fill(3000.0).unwrap();
        t.validate_invariants().unwrap();
    }

    #[test]
    fn setters_keep_glass_in_place() {
        let mut t = Tower::with_rows(3);
        t.set_capacity("B", 100.0).unwrap();
        t.set_quantity("B", 60.0).unwrap();
        let b = t.get_glass("B").unwrap();
        assert_eq!(b.position(), Some(Position::new(1, 0)));
        assert_eq!((b.capacity(), b.quantity()), (100.0, 60.0));
        assert_eq!(t.get_parents(b).unwrap().len(), 1);

        assert!(t.set_quantity("B", 150.0).is_err());
        assert!(t.set_capacity("B", 10.0).is_err());
        assert_eq!(
            t.set_capacity("Z", 1.0),
            Err(TowerError::InvalidArgument("Z".into()))
        );
        t.validate_invariants().unwrap();
    }

    #[test]
    fn oversized_row_count_is_an_error() {
        let cfg = TowerConfig {
            rows: usize::MAX,
            ..TowerConfig::default()
        };
        let err = Tower::from_config(&cfg).unwrap_err();
        assert!(matches!(err, TowerError::InvalidValue { field: "rows", .. }));
    }

    #[test]
    fn invariants_catch_overfull_glass() {
        let mut t = Tower::with_rows(2);
        t.glasses[1].quantity = 300.0;
        let err = t.validate_invariants().unwrap_err();
        assert!(matches!(err, TowerError::InvariantViolation(_)));
    }
}
