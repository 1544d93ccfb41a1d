use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Scroll behavior of the page body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Auto,
    Visible,
    Scroll,
    Hidden,
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Visible => write!(f, "visible"),
            Self::Scroll => write!(f, "scroll"),
            Self::Hidden => write!(f, "hidden"),
        }
    }
}

/// Shared handle to the page's scroll setting. Clones refer to the same page.
#[derive(Clone, Debug, Default)]
pub struct PageScroll {
    overflow: Rc<Cell<Overflow>>,
}

impl PageScroll {
    pub fn new(initial: Overflow) -> Self {
        Self {
            overflow: Rc::new(Cell::new(initial)),
        }
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow.get()
    }

    pub fn set_overflow(&self, overflow: Overflow) {
        self.overflow.set(overflow);
    }

    pub fn is_locked(&self) -> bool {
        self.overflow() == Overflow::Hidden
    }

    /// Suppress page scrolling until the returned guard is dropped.
    pub fn lock(&self) -> ScrollLock {
        ScrollLock::acquire(self)
    }
}

/// Keeps the page from scrolling while alive; dropping it restores exactly
/// the overflow value seen at acquisition. Locks nest when dropped in
/// reverse order.
#[must_use = "scrolling is restored as soon as the lock is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    page: PageScroll,
    previous: Overflow,
}

impl ScrollLock {
    pub fn acquire(page: &PageScroll) -> Self {
        let previous = page.overflow();
        page.set_overflow(Overflow::Hidden);
        debug!(%previous, "Page scroll locked");
        Self {
            page: page.clone(),
            previous,
        }
    }

    pub fn previous(&self) -> Overflow {
        self.previous
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.page.set_overflow(self.previous);
        debug!(restored = %self.previous, "Page scroll unlocked");
    }
}
