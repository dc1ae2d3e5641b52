use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A position or displacement in the North-East-Down frame, in meters.
///
/// Down is positive toward the ground, so an object five meters above the
/// reference plane has `down = -5.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NedVector {
    /// North component in meters.
    pub north: f64,
    /// East component in meters.
    pub east: f64,
    /// Down component in meters.
    pub down: f64,
}

impl NedVector {
    /// The origin of the frame.
    pub const ZERO: NedVector = NedVector {
        north: 0.0,
        east: 0.0,
        down: 0.0,
    };

    /// Create a vector from its three components.
    pub fn new(north: f64, east: f64, down: f64) -> Self {
        Self { north, east, down }
    }

    /// Euclidean length of the vector.
    pub fn norm(&self) -> f64 {
        (self.north * self.north + self.east * self.east + self.down * self.down).sqrt()
    }
}

impl Add for NedVector {
    type Output = NedVector;

    fn add(self, rhs: NedVector) -> NedVector {
        NedVector::new(self.north + rhs.north, self.east + rhs.east, self.down + rhs.down)
    }
}

impl Sub for NedVector {
    type Output = NedVector;

    fn sub(self, rhs: NedVector) -> NedVector {
        NedVector::new(self.north - rhs.north, self.east - rhs.east, self.down - rhs.down)
    }
}

impl Mul<f64> for NedVector {
    type Output = NedVector;

    fn mul(self, factor: f64) -> NedVector {
        NedVector::new(self.north * factor, self.east * factor, self.down * factor)
    }
}
