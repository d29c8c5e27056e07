use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Two-dimensional vector in the simulation units (AU, AU/year, AU/year^2).
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
}

impl Axes {
    pub fn new(x: f64, y: f64) -> Axes {
        Axes { x: x, y: y }
    }

    pub fn zero() -> Axes {
        Axes { x: 0., y: 0. }
    }

    pub fn norm(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    /// z component of the 3D cross product of two in-plane vectors
    pub fn cross(&self, other: Axes) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Axes {
    type Output = Axes;

    fn add(self, other: Axes) -> Axes {
        Axes { x: self.x + other.x, y: self.y + other.y }
    }
}

impl AddAssign for Axes {
    fn add_assign(&mut self, other: Axes) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Axes {
    type Output = Axes;

    fn sub(self, other: Axes) -> Axes {
        Axes { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for Axes {
    type Output = Axes;

    fn mul(self, factor: f64) -> Axes {
        Axes { x: self.x * factor, y: self.y * factor }
    }
}

impl Neg for Axes {
    type Output = Axes;

    fn neg(self) -> Axes {
        Axes { x: -self.x, y: -self.y }
    }
}

impl From<(f64, f64)> for Axes {
    fn from(components: (f64, f64)) -> Axes {
        Axes { x: components.0, y: components.1 }
    }
}
