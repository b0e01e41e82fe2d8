use serde::{Deserialize, Serialize};

/// The planar region a projection maps the sphere into.
///
/// Constructed once per projection, usually as a pure function of the
/// projection's parameters, and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Bounds {
    /// Axis-aligned rectangle.
    Rectangle {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    /// Circle of the given radius centered on the origin.
    Circle { radius: f64 },
    /// Ellipse with the given semiaxes, centered on the origin.
    Ellipse { semi_x: f64, semi_y: f64 },
}

impl Bounds {
    /// A rectangle of the given width and height centered on the origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::Rectangle {
            x_min: -width / 2.0,
            x_max: width / 2.0,
            y_min: -height / 2.0,
            y_max: height / 2.0,
        }
    }

    /// A rectangle from explicit minima and maxima on each axis.
    pub fn from_extents(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self::Rectangle {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    pub fn ellipse(semi_x: f64, semi_y: f64) -> Self {
        Self::Ellipse { semi_x, semi_y }
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Rectangle { x_min, x_max, .. } => x_max - x_min,
            Self::Circle { radius } => 2.0 * radius,
            Self::Ellipse { semi_x, .. } => 2.0 * semi_x,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Rectangle { y_min, y_max, .. } => y_max - y_min,
            Self::Circle { radius } => 2.0 * radius,
            Self::Ellipse { semi_y, .. } => 2.0 * semi_y,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Closed-region containment test; the boundary counts as inside.
    pub fn within(&self, x: f64, y: f64) -> bool {
        match *self {
            Self::Rectangle {
                x_min,
                x_max,
                y_min,
                y_max,
            } => x >= x_min && x <= x_max && y >= y_min && y <= y_max,
            Self::Circle { radius } => x * x + y * y <= radius * radius,
            Self::Ellipse { semi_x, semi_y } => {
                let u = x / semi_x;
                let v = y / semi_y;
                u * u + v * v <= 1.0
            }
        }
    }
}
