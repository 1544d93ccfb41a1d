mod common;

use wasted_core::catalog::Catalog;
use wasted_core::variant::{active_index, step, Direction};
use wasted_core::viewport::ImageViewport;

use common::{cyan_gold_tee, plain_tee, product_with_variants, CYAN, GOLD};

// ---------------------------------------------------------------------------
// Index lookup
// ---------------------------------------------------------------------------

#[test]
fn test_active_index_found_and_sentinel() {
    let p = cyan_gold_tee();
    assert_eq!(active_index(&p.colors, CYAN), 0);
    assert_eq!(active_index(&p.colors, GOLD), 1);
    assert_eq!(active_index(&p.colors, &p.image), -1);
    assert_eq!(p.variant_index(GOLD), Some(1));
    assert_eq!(p.variant_index("/nope.png"), None);
}

// ---------------------------------------------------------------------------
// Stepping
// ---------------------------------------------------------------------------

#[test]
fn test_next_from_gold_wraps_to_cyan() {
    let p = cyan_gold_tee();
    assert_eq!(step(&p.colors, GOLD, Direction::Next).unwrap().image, CYAN);
}

#[test]
fn test_prev_from_cyan_wraps_to_gold() {
    let p = cyan_gold_tee();
    assert_eq!(step(&p.colors, CYAN, Direction::Prev).unwrap().image, GOLD);
}

#[test]
fn test_step_without_variants_is_none() {
    let p = plain_tee();
    assert!(step(&p.colors, &p.image, Direction::Next).is_none());
    assert!(step(&p.colors, &p.image, Direction::Prev).is_none());
}

#[test]
fn test_step_from_unknown_selection() {
    let p = product_with_variants(&[("a", "/a.png"), ("b", "/b.png"), ("c", "/c.png")]);
    // Sentinel -1: next is index 0, prev is index (-2 mod 3) = 1.
    assert_eq!(step(&p.colors, "/base.png", Direction::Next).unwrap().image, "/a.png");
    assert_eq!(step(&p.colors, "/base.png", Direction::Prev).unwrap().image, "/b.png");
}

#[test]
fn test_single_variant_always_steps_to_itself() {
    let p = product_with_variants(&[("black", "/black.png")]);
    assert_eq!(step(&p.colors, "/black.png", Direction::Next).unwrap().image, "/black.png");
    assert_eq!(step(&p.colors, "/black.png", Direction::Prev).unwrap().image, "/black.png");
    assert_eq!(step(&p.colors, "/other.png", Direction::Prev).unwrap().image, "/black.png");
}

#[test]
fn test_cycling_n_times_returns_to_start() {
    let catalog = Catalog::builtin();
    let fire = catalog.get(3).unwrap();
    let n = fire.colors.len();
    assert_eq!(n, 8);

    for start in &fire.colors {
        for direction in [Direction::Next, Direction::Prev] {
            let mut vp = ImageViewport::new(fire);
            vp.select_image(start.image.clone());
            for _ in 0..n {
                vp.cycle_variant(direction);
            }
            assert_eq!(vp.selected_image(), start.image);
        }
    }
}

// ---------------------------------------------------------------------------
// Viewport integration
// ---------------------------------------------------------------------------

#[test]
fn test_next_variant_resets_zoom() {
    let mut vp = ImageViewport::new(&cyan_gold_tee());
    vp.set_zoom(2.2);
    assert_eq!(vp.next_variant(), Some(GOLD));
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.prev_variant(), Some(CYAN));
}

#[test]
fn test_variant_navigation_noop_without_variants() {
    let p = plain_tee();
    let mut vp = ImageViewport::new(&p);
    vp.set_zoom(2.0);
    assert_eq!(vp.next_variant(), None);
    assert_eq!(vp.prev_variant(), None);
    assert_eq!(vp.selected_image(), p.image);
    assert_eq!(vp.scale(), 2.0);
}
