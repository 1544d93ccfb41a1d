mod controller;
mod pointer;
mod transform;

pub use controller::{clamp_scale, ImageViewport};
pub use pointer::{DragSession, PointerId, PointerResponse};
pub use transform::Transform;
