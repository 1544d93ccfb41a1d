use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or displacement in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp each axis independently to `[-bound, bound]`.
    pub fn clamp_symmetric(self, bound: Vec2) -> Self {
        Self {
            x: self.x.clamp(-bound.x, bound.x),
            y: self.y.clamp(-bound.y, bound.y),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of the element the image is drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest pan offset per axis at `scale`: half of the magnified overflow.
    pub fn pan_bounds(&self, scale: f64) -> Vec2 {
        let overflow = (scale - 1.0).max(0.0);
        Vec2::new(
            self.width.max(0.0) * overflow / 2.0,
            self.height.max(0.0) * overflow / 2.0,
        )
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: ViewportSize,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: ViewportSize) -> Self {
        Self {
            min: Vec2::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + self.size.width / 2.0,
            self.min.y + self.size.height / 2.0,
        )
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.min.x + self.size.width, self.min.y + self.size.height)
    }
}

/// Size of an image scaled to fit entirely inside `viewport` while keeping
/// its aspect ratio (CSS `object-fit: contain`).
pub fn fit_contain(image: ViewportSize, viewport: ViewportSize) -> ViewportSize {
    if image.width <= 0.0 || image.height <= 0.0 {
        return ViewportSize::default();
    }
    let fit = (viewport.width / image.width).min(viewport.height / image.height);
    ViewportSize::new(image.width * fit, image.height * fit)
}
