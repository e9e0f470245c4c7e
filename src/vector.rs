//! 3D vector used for positions and directions
//!
//! A default constructed [`Vector3`] is all zeros.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    #[serde(with = "crate::json::f32_non_finite")]
    pub x: f32,
    #[serde(with = "crate::json::f32_non_finite")]
    pub y: f32,
    #[serde(with = "crate::json::f32_non_finite")]
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Resets all components to 0.0
    pub fn zero(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.z = 0.0;
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn dot(&self, other: &Vector3) -> f32 {
        dot_product(self, other)
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }
}

/// Euclidean dot product
#[inline]
pub fn dot_product(a: &Vector3, b: &Vector3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

impl std::ops::Add for Vector3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vector3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use testresult::TestResult;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
    }

    #[test]
    fn test_zero_and_set() {
        let mut v = Vector3::new(1.0, -2.0, 3.5);
        v.zero();
        assert_eq!(v, Vector3::new(0.0, 0.0, 0.0));
        v.set(4.0, 5.0, 6.0);
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_dot_product() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(dot_product(&x, &y), 0.0);

        let v = Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(dot_product(&v, &v), 29.0);
        assert_eq!(v.dot(&Vector3::new(-1.0, 0.5, 0.25)), 0.5);
    }

    #[test]
    fn test_operators() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(v1 - v2, Vector3::new(-3.0, -3.0, -3.0));
        assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "1,-2.5,0");
    }

    #[test]
    fn test_json() -> TestResult {
        let v = Vector3::new(1.5, f32::NEG_INFINITY, 0.0);
        let value = serde_json::to_value(v)?;
        assert_eq!(value, json!({"x": 1.5, "y": "-Inf", "z": 0.0}));
        let read: Vector3 = serde_json::from_value(value)?;
        assert_eq!(read, v);
        Ok(())
    }
}
