//! Glass: a bounded-capacity liquid container.
//!
//! A glass holds `quantity` units of liquid out of `capacity`. Pouring into
//! a glass with [`Glass::fill`] keeps whatever fits and hands back the rest
//! as overflow; the tower routes that overflow to the glasses below.
//!
//! # Invariants
//! - `0 <= quantity <= capacity` at all times.
//! - `position` is `None` until the glass joins a tower, then never changes.
//!
//! Setters validate before mutating, so a rejected update leaves the glass
//! untouched.

use crate::tower_error::{TowerError, check_volume};
use crate::topology::position::Position;
use std::fmt;

/// Capacity given to every new glass.
pub const DEFAULT_CAPACITY: f64 = 250.0;

/// A liquid container identified by a `uid`.
///
/// Deserialization goes through the same checks as the setters.
#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawGlass")]
pub struct Glass {
    pub(crate) uid: String,
    pub(crate) position: Option<Position>,
    pub(crate) capacity: f64,
    pub(crate) quantity: f64,
}

impl Glass {
    /// Creates an empty, unplaced glass with [`DEFAULT_CAPACITY`].
    ///
    /// # Example
    /// ```rust
    /// use glass_tower::data::glass::Glass;
    /// let glass = Glass::new("A");
    /// assert_eq!(glass.uid(), "A");
    /// assert_eq!(glass.position(), None);
    /// assert_eq!(glass.capacity(), 250.0);
    /// assert_eq!(glass.quantity(), 0.0);
    /// ```
    pub fn new(uid: impl Into<String>) -> Self {
        Glass {
            uid: uid.into(),
            position: None,
            capacity: DEFAULT_CAPACITY,
            quantity: 0.0,
        }
    }

    /// Creates an empty glass holding at most `capacity`.
    ///
    /// # Errors
    /// `InvalidValue` if `capacity` is negative or not finite.
    pub fn with_capacity(uid: impl Into<String>, capacity: f64) -> Result<Self, TowerError> {
        let capacity = check_volume("capacity", capacity)?;
        Ok(Glass {
            capacity,
            ..Glass::new(uid)
        })
    }

    #[inline]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Where the glass sits in its tower, if it has been placed.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Only the tower assigns positions.
    #[inline]
    pub(crate) fn place(&mut self, position: Position) {
        debug_assert!(self.position.is_none(), "glass {} placed twice", self.uid);
        self.position = Some(position);
    }

    #[inline]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Change the maximum volume.
    ///
    /// # Errors
    /// `InvalidValue` if `capacity` is negative, not finite, or smaller than
    /// the liquid already in the glass. Empty the glass first to shrink it
    /// below its current contents.
    pub fn set_capacity(&mut self, capacity: f64) -> Result<(), TowerError> {
        let capacity = check_volume("capacity", capacity)?;
        if capacity < self.quantity {
            return Err(TowerError::invalid_value(
                "capacity",
                capacity,
                "below the quantity already held",
            ));
        }
        self.capacity = capacity;
        Ok(())
    }

    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Same as [`quantity`](Self::quantity).
    #[inline]
    pub fn millilitres(&self) -> f64 {
        self.quantity
    }

    /// Set the held volume directly.
    ///
    /// # Errors
    /// `InvalidValue` if `quantity` is negative, not finite or above the
    /// capacity.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), TowerError> {
        let quantity = check_volume("quantity", quantity)?;
        if quantity > self.capacity {
            return Err(TowerError::invalid_value(
                "quantity",
                quantity,
                "exceeds capacity",
            ));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Same as [`set_quantity`](Self::set_quantity).
    #[inline]
    pub fn set_millilitres(&mut self, millilitres: f64) -> Result<(), TowerError> {
        self.set_quantity(millilitres)
    }

    /// Room left before the glass overflows.
    #[inline]
    pub fn free_space(&self) -> f64 {
        self.capacity - self.quantity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.quantity >= self.capacity
    }

    /// Pour the glass out.
    #[inline]
    pub fn empty(&mut self) {
        self.quantity = 0.0;
    }

    /// Pour `amount` into the glass and return what did not fit.
    ///
    /// Afterwards `quantity == min(capacity, quantity_before + amount)` and
    /// the returned overflow is `max(0, quantity_before + amount - capacity)`.
    ///
    /// # Errors
    /// `InvalidValue` if `amount` is negative or not finite; the glass is
    /// left unchanged.
    ///
    /// # Example
    /// ```rust
    /// use glass_tower::data::glass::Glass;
    /// let mut glass = Glass::new("A");
    /// assert_eq!(glass.fill(200.0)?, 0.0);
    /// assert_eq!(glass.fill(100.0)?, 50.0);
    /// assert!(glass.is_full());
    /// # Ok::<(), glass_tower::tower_error::TowerError>(())
    /// ```
    pub fn fill(&mut self, amount: f64) -> Result<f64, TowerError> {
        let amount = check_volume("amount", amount)?;
        let total = self.quantity + amount;
        if total > self.capacity {
            self.quantity = self.capacity;
            Ok(total - self.capacity)
        } else {
            self.quantity = total;
            Ok(0.0)
        }
    }
}

/// Unchecked wire form of a [`Glass`].
#[derive(serde::Deserialize)]
struct RawGlass {
    uid: String,
    #[serde(default)]
    position: Option<Position>,
    capacity: f64,
    #[serde(default)]
    quantity: f64,
}

impl TryFrom<RawGlass> for Glass {
    type Error = TowerError;

    fn try_from(raw: RawGlass) -> Result<Self, Self::Error> {
        let mut glass = Glass::with_capacity(raw.uid, raw.capacity)?;
        glass.set_quantity(raw.quantity)?;
        if let Some(p) = raw.position {
            if !p.is_valid() {
                return Err(TowerError::InvalidArgument(format!(
                    "{} at {p}",
                    glass.uid
                )));
            }
        }
        glass.position = raw.position;
        Ok(glass)
    }
}

/// Shows uid and position, e.g. `Glass(uid=A, pos=None)`.
impl fmt::Debug for Glass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "Glass(uid={}, pos={})", self.uid, p),
            None => write!(f, "Glass(uid={}, pos=None)", self.uid),
        }
    }
}

/// Prints only the uid.
impl fmt::Display for Glass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uid)
    }
}
