mod common;

use std::time::{Duration, Instant};

use url::Url;
use wasted_core::modal::{KeyOutcome, ModalKey, ModalLifecycle, ModalPhase, ProductModal};
use wasted_core::scroll_lock::{Overflow, PageScroll};

use common::{cyan_gold_tee, plain_tee, CYAN, GOLD};

const CLOSE: Duration = Duration::from_millis(200);

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_lifecycle_open_closing_closed() {
    let t0 = Instant::now();
    let mut life = ModalLifecycle::default();
    assert_eq!(life.phase(), ModalPhase::Open);

    assert!(life.request_close(t0));
    assert!(life.is_closing());
    assert!(!life.poll(t0 + Duration::from_millis(199)));
    assert!(life.poll(t0 + CLOSE));
    assert_eq!(life.phase(), ModalPhase::Closed);
}

#[test]
fn test_double_close_request_fires_once() {
    let t0 = Instant::now();
    let mut life = ModalLifecycle::default();
    assert!(life.request_close(t0));
    assert!(!life.request_close(t0 + Duration::from_millis(50)));

    // The deadline stays anchored on the first request.
    assert_eq!(life.remaining(t0 + Duration::from_millis(50)), Some(Duration::from_millis(150)));

    let fired = (0..10)
        .map(|i| life.poll(t0 + Duration::from_millis(100 * i)))
        .filter(|&f| f)
        .count();
    assert_eq!(fired, 1);
    assert!(!life.request_close(t0 + Duration::from_secs(5)));
}

#[test]
fn test_opacity_fades_over_close_delay() {
    let t0 = Instant::now();
    let mut life = ModalLifecycle::default();
    assert_eq!(life.opacity(t0), 1.0);
    life.request_close(t0);
    let half = life.opacity(t0 + Duration::from_millis(100));
    assert!((half - 0.5).abs() < 1e-3, "got {half}");
    assert_eq!(life.opacity(t0 + CLOSE), 0.0);
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

#[test]
fn test_arrows_cycle_variants() {
    let page = PageScroll::default();
    let now = Instant::now();
    let mut modal = ProductModal::open(&cyan_gold_tee(), &page);
    assert_eq!(modal.viewport().selected_image(), CYAN);

    assert_eq!(
        modal.handle_key(ModalKey::ArrowRight, now),
        KeyOutcome::VariantSelected(GOLD.to_string())
    );
    assert_eq!(
        modal.handle_key(ModalKey::ArrowRight, now),
        KeyOutcome::VariantSelected(CYAN.to_string())
    );
    assert_eq!(
        modal.handle_key(ModalKey::ArrowLeft, now),
        KeyOutcome::VariantSelected(GOLD.to_string())
    );
}

#[test]
fn test_arrow_resets_zoom() {
    let page = PageScroll::default();
    let mut modal = ProductModal::open(&cyan_gold_tee(), &page);
    modal.viewport_mut().set_zoom(2.5);
    modal.handle_key(ModalKey::ArrowRight, Instant::now());
    assert_eq!(modal.viewport().scale(), 1.0);
}

#[test]
fn test_arrows_ignored_without_variants() {
    let page = PageScroll::default();
    let product = plain_tee();
    let mut modal = ProductModal::open(&product, &page);
    let now = Instant::now();
    assert_eq!(modal.handle_key(ModalKey::ArrowLeft, now), KeyOutcome::Ignored);
    assert_eq!(modal.handle_key(ModalKey::ArrowRight, now), KeyOutcome::Ignored);
    assert_eq!(modal.viewport().selected_image(), product.image);
}

#[test]
fn test_escape_is_debounced() {
    let page = PageScroll::default();
    let t0 = Instant::now();
    let mut modal = ProductModal::open(&plain_tee(), &page);
    assert_eq!(modal.handle_key(ModalKey::Escape, t0), KeyOutcome::CloseScheduled);
    assert_eq!(
        modal.handle_key(ModalKey::Escape, t0 + Duration::from_millis(20)),
        KeyOutcome::Ignored
    );
    assert!(!modal.request_close(t0 + Duration::from_millis(30)));
    assert_eq!(modal.handle_key(ModalKey::Other, t0), KeyOutcome::Ignored);

    assert!(!modal.poll(t0 + Duration::from_millis(100)));
    assert!(modal.poll(t0 + CLOSE));
    assert!(!modal.poll(t0 + CLOSE * 2));
}

// ---------------------------------------------------------------------------
// Scroll lock and links
// ---------------------------------------------------------------------------

#[test]
fn test_modal_locks_scroll_until_closed() {
    let page = PageScroll::new(Overflow::Scroll);
    let t0 = Instant::now();
    let mut modal = ProductModal::open(&plain_tee(), &page);
    assert!(page.is_locked());

    modal.request_close(t0);
    assert!(page.is_locked(), "still locked during the fade-out");
    assert!(modal.poll(t0 + CLOSE));
    assert_eq!(page.overflow(), Overflow::Scroll);

    drop(modal);
    assert_eq!(page.overflow(), Overflow::Scroll);
}

#[test]
fn test_dropping_open_modal_restores_scroll() {
    let page = PageScroll::new(Overflow::Visible);
    {
        let _modal = ProductModal::open(&plain_tee(), &page);
        assert_eq!(page.overflow(), Overflow::Hidden);
    }
    assert_eq!(page.overflow(), Overflow::Visible);
}

#[test]
fn test_reopen_starts_fresh() {
    let page = PageScroll::default();
    let product = cyan_gold_tee();
    let mut modal = ProductModal::open(&product, &page);
    modal.viewport_mut().next_variant();
    modal.viewport_mut().set_zoom(2.0);
    drop(modal);

    let modal = ProductModal::open(&product, &page);
    assert_eq!(modal.viewport().selected_image(), CYAN);
    assert_eq!(modal.viewport().scale(), 1.0);
}

#[test]
fn test_viewer_link_uses_selected_image() {
    let page = PageScroll::default();
    let site = Url::parse("https://wasted.example/").unwrap();
    let mut modal = ProductModal::open(&cyan_gold_tee(), &page);
    modal.viewport_mut().next_variant();
    let link = modal.viewer_link(&site).unwrap();
    assert_eq!(link.path(), "/3dshirts");
    assert_eq!(
        wasted_core::share::shirt_param(&link).as_deref(),
        Some(GOLD)
    );
}
