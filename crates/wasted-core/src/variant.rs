//! Prev/next cycling through a product's color variants.

use crate::catalog::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Index of the variant whose image is `selected`, or `-1` when the
/// selection is not one of the variants (e.g. the base image is shown).
pub fn active_index(variants: &[Variant], selected: &str) -> isize {
    variants
        .iter()
        .position(|v| v.image == selected)
        .map_or(-1, |i| i as isize)
}

/// The variant one step away from `selected`, wrapping at both ends.
///
/// A selection outside the variant list counts as index `-1`, so `Next`
/// lands on the first variant. Returns `None` only when there are no
/// variants at all.
pub fn step<'a>(variants: &'a [Variant], selected: &str, direction: Direction) -> Option<&'a Variant> {
    if variants.is_empty() {
        return None;
    }
    let len = variants.len() as isize;
    let index = (active_index(variants, selected) + direction.step()).rem_euclid(len);
    variants.get(index as usize)
}
