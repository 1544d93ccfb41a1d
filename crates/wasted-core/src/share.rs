//! Links into the shirt viewer and the "copy share link" action.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;
use url::Url;

use crate::consts::{COPY_CONFIRMATION, SHIRT_QUERY_PARAM, VIEWER_ROUTE};
use crate::error::Result;

/// Base used to resolve site-relative links such as `/3dshirts?shirt=..`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Viewer URL showing `image_ref` as the shirt texture. The route goes
/// under the site's path even when that path lacks a trailing slash.
pub fn viewer_link(site: &Url, image_ref: &str) -> Result<Url> {
    let mut base = site.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut url = base.join(VIEWER_ROUTE)?;
    url.query_pairs_mut()
        .clear()
        .append_pair(SHIRT_QUERY_PARAM, image_ref);
    Ok(url)
}

/// The decoded `shirt` parameter of a viewer URL. Empty values count as absent.
pub fn shirt_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == SHIRT_QUERY_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an absolute or site-relative link.
pub fn parse_link(link: &str) -> Result<Url> {
    match Url::parse(link) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Url::parse(RELATIVE_BASE)?.join(link)?),
        Err(e) => Err(e.into()),
    }
}

/// Destination of a share link. Implemented by the host's system clipboard.
pub trait Clipboard {
    type Error: fmt::Display;

    fn write_text(&mut self, text: &str) -> std::result::Result<(), Self::Error>;
}

/// Transient "copied" confirmation shown after a successful copy.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::with_duration(COPY_CONFIRMATION)
    }
}

impl CopyFeedback {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            copied_at: None,
            duration,
        }
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|t| now.saturating_duration_since(t) < self.duration)
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_visible(now) {
            "Copied!"
        } else {
            "Copy share link"
        }
    }
}

/// Write `link` to the clipboard and show the confirmation. Clipboard
/// failures are swallowed; the confirmation simply does not appear.
pub fn copy_share_link<C: Clipboard>(
    clipboard: &mut C,
    link: &Url,
    feedback: &mut CopyFeedback,
    now: Instant,
) -> bool {
    match clipboard.write_text(link.as_str()) {
        Ok(()) => {
            feedback.mark_copied(now);
            true
        }
        Err(e) => {
            debug!(error = %e, "Clipboard write failed");
            false
        }
    }
}
