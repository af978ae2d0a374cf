//! Triangular-number arithmetic for row/column bookkeeping.
//!
//! A tower with `n` rows holds `T(n) = n(n+1)/2` glasses, and the glass
//! stored at arena slot `k` sits in row `floor(T⁻¹(k))`. All slot/row
//! conversions used by [`Tower`](crate::tower::Tower) go through here.

use crate::topology::position::Position;
use static_assertions::const_assert_eq;

const_assert_eq!(triangular(4), 10);
const_assert_eq!(slot_of(Position::new(3, 3)), 9);

/// The `n`-th triangular number, `n(n+1)/2`.
///
/// Overflows for `n` above roughly `2^32` on 64-bit targets; see
/// [`checked_triangular`].
///
/// ```rust
/// use glass_tower::topology::triangular::triangular;
/// assert_eq!(triangular(4), 10);
/// ```
#[inline]
pub const fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}

/// [`triangular`] returning `None` instead of overflowing.
pub const fn checked_triangular(n: usize) -> Option<usize> {
    // One of n, n + 1 is even; halve it before multiplying.
    let (a, b) = if n % 2 == 0 {
        (n / 2, n.checked_add(1))
    } else {
        (n, (n / 2).checked_add(1))
    };
    match b {
        Some(b) => a.checked_mul(b),
        None => None,
    }
}

/// Real-valued inverse of [`triangular`]: `(sqrt(8x + 1) - 1) / 2`.
#[inline]
pub fn triangular_root(x: usize) -> f64 {
    ((8.0 * x as f64 + 1.0).sqrt() - 1.0) / 2.0
}

/// `Some(n)` iff `x == triangular(n)`.
pub fn exact_triangular_root(x: usize) -> Option<usize> {
    let n = row_of(x);
    (triangular(n) == x).then_some(n)
}

/// True iff `x` appears in 0, 1, 3, 6, 10, 15, ...
#[inline]
pub fn is_triangular(x: usize) -> bool {
    exact_triangular_root(x).is_some()
}

/// Row holding arena slot `slot`, i.e. `floor(triangular_root(slot))`.
///
/// The float estimate is corrected with integer arithmetic so the result
/// stays exact where `f64` rounding would drift.
pub fn row_of(slot: usize) -> usize {
    let mut n = triangular_root(slot).floor() as usize;
    while triangular(n) > slot {
        n -= 1;
    }
    while triangular(n + 1) <= slot {
        n += 1;
    }
    n
}

/// Arena offset of the first glass in `row`.
#[inline]
pub const fn row_start(row: usize) -> usize {
    triangular(row)
}

/// Arena slot of the glass at `position`.
#[inline]
pub const fn slot_of(position: Position) -> usize {
    row_start(position.row) + position.column
}

/// Position of the glass at arena slot `slot`.
#[inline]
pub fn position_of(slot: usize) -> Position {
    let row = row_of(slot);
    Position::new(row, slot - row_start(row))
}
