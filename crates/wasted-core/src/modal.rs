//! Product quick-view modal: the image viewport plus keyboard handling,
//! the delayed close and the page scroll lock held while it is open.

use std::time::{Duration, Instant};

use tracing::{debug, info};
use url::Url;

use crate::catalog::Product;
use crate::consts::MODAL_CLOSE_DELAY;
use crate::error::Result;
use crate::scroll_lock::{PageScroll, ScrollLock};
use crate::share::viewer_link;
use crate::viewport::ImageViewport;

/// Vertical slide distance (pixels) of the dialog at the end of the close
/// transition.
const CLOSE_SLIDE_PX: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Open,
    /// Fade-out running; the modal closes at `deadline`.
    Closing { since: Instant, deadline: Instant },
    Closed,
}

/// `Open -> Closing -> Closed` with a fixed delay on the second edge.
#[derive(Clone, Debug)]
pub struct ModalLifecycle {
    phase: ModalPhase,
    close_delay: Duration,
}

impl Default for ModalLifecycle {
    fn default() -> Self {
        Self::with_delay(MODAL_CLOSE_DELAY)
    }
}

impl ModalLifecycle {
    pub fn with_delay(close_delay: Duration) -> Self {
        Self {
            phase: ModalPhase::Open,
            close_delay,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, ModalPhase::Closing { .. })
    }

    /// Start the close transition. Returns `false` (and changes nothing)
    /// when a close is already pending or done.
    pub fn request_close(&mut self, now: Instant) -> bool {
        if self.phase != ModalPhase::Open {
            return false;
        }
        self.phase = ModalPhase::Closing {
            since: now,
            deadline: now + self.close_delay,
        };
        true
    }

    /// Advance time. Returns `true` exactly once: on the call that moves the
    /// modal from `Closing` to `Closed`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            ModalPhase::Closing { deadline, .. } if now >= deadline => {
                self.phase = ModalPhase::Closed;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending close fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            ModalPhase::Closing { deadline, .. } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Fraction of the close transition still to run: 1.0 while open,
    /// falling linearly to 0.0 at the deadline.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            ModalPhase::Open => 1.0,
            ModalPhase::Closed => 0.0,
            ModalPhase::Closing { since, deadline } => {
                let total = deadline.saturating_duration_since(since).as_secs_f32();
                if total <= 0.0 {
                    return 0.0;
                }
                let left = deadline.saturating_duration_since(now).as_secs_f32();
                (left / total).clamp(0.0, 1.0)
            }
        }
    }
}

/// Keys the modal reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// Escape accepted; the close notification follows after the delay.
    CloseScheduled,
    /// Arrow key moved to another variant.
    VariantSelected(String),
}

/// One open quick-view of a product. Dropping it (or reaching `Closed`)
/// gives page scrolling back.
#[derive(Debug)]
pub struct ProductModal {
    product: Product,
    viewport: ImageViewport,
    lifecycle: ModalLifecycle,
    scroll_lock: Option<ScrollLock>,
}

impl ProductModal {
    pub fn open(product: &Product, page: &PageScroll) -> Self {
        info!(product = product.id, name = %product.name, "Product modal opened");
        Self {
            product: product.clone(),
            viewport: ImageViewport::new(product),
            lifecycle: ModalLifecycle::default(),
            scroll_lock: Some(page.lock()),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn viewport(&self) -> &ImageViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ImageViewport {
        &mut self.viewport
    }

    pub fn lifecycle(&self) -> &ModalLifecycle {
        &self.lifecycle
    }

    pub fn is_closing(&self) -> bool {
        self.lifecycle.is_closing()
    }

    pub fn handle_key(&mut self, key: ModalKey, now: Instant) -> KeyOutcome {
        match key {
            ModalKey::Escape => {
                if self.request_close(now) {
                    KeyOutcome::CloseScheduled
                } else {
                    KeyOutcome::Ignored
                }
            }
            ModalKey::ArrowLeft => self.viewport.prev_variant().map_or(KeyOutcome::Ignored, |img| {
                KeyOutcome::VariantSelected(img.to_string())
            }),
            ModalKey::ArrowRight => self.viewport.next_variant().map_or(KeyOutcome::Ignored, |img| {
                KeyOutcome::VariantSelected(img.to_string())
            }),
            ModalKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Close button, backdrop click or Escape.
    pub fn request_close(&mut self, now: Instant) -> bool {
        let scheduled = self.lifecycle.request_close(now);
        if scheduled {
            debug!(product = self.product.id, "Modal close scheduled");
        }
        scheduled
    }

    /// Returns `true` once, when the close transition has finished; the
    /// caller then discards the modal.
    pub fn poll(&mut self, now: Instant) -> bool {
        let closed = self.lifecycle.poll(now);
        if closed {
            self.scroll_lock = None;
            info!(product = self.product.id, "Product modal closed");
        }
        closed
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.lifecycle.opacity(now)
    }

    /// Downward slide of the dialog during the close transition.
    pub fn slide_offset(&self, now: Instant) -> f32 {
        (1.0 - self.opacity(now)) * CLOSE_SLIDE_PX
    }

    /// "3D View" link for the currently selected image.
    pub fn viewer_link(&self, site: &Url) -> Result<Url> {
        viewer_link(site, self.viewport.selected_image())
    }
}
