use std::time::Duration;

use serde::Serialize;

use crate::geometry::{fit_contain, Rect, Vec2, ViewportSize};

/// How the selected image is presented: magnification about the viewport
/// center followed by a pixel translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform {
    pub scale: f64,
    pub offset: Vec2,
    /// Animation length for reaching this transform. `None` while dragging
    /// so the image tracks the pointer exactly.
    pub transition: Option<Duration>,
}

impl Transform {
    /// CSS `transform` value.
    pub fn css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }

    /// CSS `transition` value.
    pub fn css_transition(&self) -> String {
        match self.transition {
            Some(d) => format!("transform {}s ease", d.as_secs_f64()),
            None => "none".to_string(),
        }
    }

    /// Screen rectangle of an `image` drawn contained in `viewport` and
    /// then transformed.
    pub fn apply(&self, viewport: Rect, image: ViewportSize) -> Rect {
        let fitted = fit_contain(image, viewport.size);
        let scaled = ViewportSize::new(fitted.width * self.scale, fitted.height * self.scale);
        Rect::from_center_size(viewport.center() + self.offset, scaled)
    }
}
