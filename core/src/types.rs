//! Shared primitive types used across the entire kitchen.

/// Seconds on the in-fiction cooking clock. Fractional because the
/// compression factor need not be a whole number.
pub type SimSeconds = f64;

/// Whole seconds of wall-clock time left in a session.
pub type RealSeconds = u32;

/// Stable identifier of a catalog ingredient, e.g. `"rice"`.
pub type IngredientId = &'static str;

/// Heat setting under the pan.
pub type FireLevel = u8;

pub const FIRE_LEVEL_MIN: FireLevel = 0;
pub const FIRE_LEVEL_MAX: FireLevel = 10;
