use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::math::{equals_delta, Vector2, RELAXED_DEG_TOLERANCE};

/// Direction used when measuring the rotation between two angles.
///
/// `Clockwise` is the direction of increasing degrees, which is also the
/// direction arcs are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
    EitherDirection,
    WhicheverLarger,
}

/// Wraps any value into `[0, 360)`.
#[must_use]
pub fn lock_to_360(v: f64) -> f64 {
    let wrapped = (360.0 + (v % 360.0)) % 360.0;
    // Tiny negative inputs can round up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// An angle in degrees, always normalized into `[0, 360)`.
///
/// Zero points along +x; the angle of a vector is `atan2(y, x)`.
/// Equality is approximate, see [`crate::math::EPSILON`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Deg {
    value: f64,
}

impl Deg {
    pub const WHOLE: f64 = 360.0;
    pub const HALF: f64 = 180.0;
    pub const QUARTER: f64 = 90.0;

    pub const HORIZONTAL: Deg = Deg { value: 0.0 };
    pub const VERTICAL: Deg = Deg { value: 90.0 };

    /// Creates an angle, wrapping `value` into `[0, 360)`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: lock_to_360(value),
        }
    }

    /// The angle a vector makes with the +x axis.
    #[must_use]
    pub fn of_vector(v: &Vector2) -> Self {
        Self::new(v.y.atan2(v.x).to_degrees())
    }

    /// The normalized value in `[0, 360)`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn rad(self) -> f64 {
        self.value.to_radians()
    }

    /// Returns the unit vector pointing along this angle.
    #[must_use]
    pub fn unit_vector(self) -> Vector2 {
        let rad = self.rad();
        Vector2::new(rad.cos(), rad.sin())
    }

    /// Returns the angle a quarter turn clockwise.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        self + Self::QUARTER
    }

    /// Turns by `amount` in `dir`; any direction other than `Clockwise` turns counter-clockwise.
    #[must_use]
    pub fn rotated_towards(self, amount: Deg, dir: RotationDirection) -> Self {
        let signed = if dir == RotationDirection::Clockwise {
            amount.value
        } else {
            -amount.value
        };
        Self::new(self.value + signed)
    }

    /// Non-negative rotation needed to travel from `self` to `to` in `dir`.
    ///
    /// `EitherDirection` picks the shorter way round, `WhicheverLarger` the
    /// longer one.
    #[must_use]
    pub fn rotation(self, to: Deg, dir: RotationDirection) -> f64 {
        if self == to {
            return 0.0;
        }
        let (start, end) = if dir == RotationDirection::Clockwise {
            (self.value, to.value)
        } else {
            (to.value, self.value)
        };
        let diff = (end - start).abs();

        match dir {
            RotationDirection::WhicheverLarger => diff.max(Self::WHOLE - diff),
            RotationDirection::EitherDirection => diff.min(Self::WHOLE - diff),
            _ if end >= start => diff,
            _ => Self::WHOLE - diff,
        }
    }

    /// Returns `true` at 0° or 180°.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.value == 0.0 || self.value == Self::HALF
    }

    /// Returns `true` at 90° or 270°.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.value == Self::QUARTER || self.value == 270.0
    }

    /// Whether the two angles describe the same undirected line.
    #[must_use]
    pub fn is_parallel_with(self, other: Deg, relaxed: bool) -> bool {
        let flipped = other + Self::HALF;
        if relaxed {
            self.equals_relaxed(other) || self.equals_relaxed(flipped)
        } else {
            self == other || self == flipped
        }
    }

    /// Equality within [`RELAXED_DEG_TOLERANCE`] degrees, across the 0/360 seam.
    #[must_use]
    pub fn equals_relaxed(self, other: Deg) -> bool {
        self.rotation(other, RotationDirection::EitherDirection) < RELAXED_DEG_TOLERANCE
    }
}

impl PartialEq for Deg {
    fn eq(&self, other: &Self) -> bool {
        equals_delta(self.value, other.value)
    }
}

impl Add for Deg {
    type Output = Deg;

    fn add(self, rhs: Deg) -> Deg {
        Deg::new(self.value + rhs.value)
    }
}

impl Add<f64> for Deg {
    type Output = Deg;

    fn add(self, rhs: f64) -> Deg {
        Deg::new(self.value + rhs)
    }
}

impl Sub for Deg {
    type Output = Deg;

    fn sub(self, rhs: Deg) -> Deg {
        self + -rhs
    }
}

impl Sub<f64> for Deg {
    type Output = Deg;

    fn sub(self, rhs: f64) -> Deg {
        self + -rhs
    }
}

impl Neg for Deg {
    type Output = Deg;

    fn neg(self) -> Deg {
        Deg::new(-self.value)
    }
}

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.value)
    }
}
