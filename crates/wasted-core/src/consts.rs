use std::time::Duration;

/// Zoom floor. At this scale the image is shown fitted and cannot be panned.
pub const MIN_SCALE: f64 = 1.0;

/// Zoom ceiling.
pub const MAX_SCALE: f64 = 3.0;

/// Scale step of the zoom-in/zoom-out toolbar buttons.
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

/// Scale step of a single wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Scale a double click jumps to from rest.
pub const DOUBLE_CLICK_SCALE: f64 = 2.0;

/// Scales closer than this to `MIN_SCALE` snap onto it, so repeated
/// +0.2/-0.2 steps land on rest exactly.
pub const SCALE_SNAP_EPSILON: f64 = 1e-9;

/// Duration of the transform animation when not dragging.
pub const TRANSFORM_TRANSITION: Duration = Duration::from_millis(200);

/// Fade/slide-out duration of the product modal. The close notification
/// fires once this has elapsed.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// How long the "link copied" confirmation stays visible.
pub const COPY_CONFIRMATION: Duration = Duration::from_millis(2000);

/// Route of the shirt viewer page.
pub const VIEWER_ROUTE: &str = "3dshirts";

/// The only query parameter the viewer consumes.
pub const SHIRT_QUERY_PARAM: &str = "shirt";

/// Texture shown by the viewer when no `shirt` parameter is given.
pub const DEFAULT_SHIRT_TEXTURE: &str = "/wasted_designtee.png";

/// Horizontal texture window (offset, repeat) sampled by the shirt front.
pub const FRONT_TEXTURE_WINDOW: (f64, f64) = (0.0, 0.48);

/// Horizontal texture window (offset, repeat) sampled by the shirt back.
pub const BACK_TEXTURE_WINDOW: (f64, f64) = (0.5, 0.49);

/// Alpha-test threshold of the shirt material, as a fraction of full opacity.
pub const SHIRT_ALPHA_TEST: f32 = 0.5;
