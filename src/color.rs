//! BGR⇄RGB normalization (`spec.md` §4.4, "Color normalization", and
//! Design Note in `spec.md` §9). The binary MDX twin format stores
//! color triples in BGR order; this core normalizes them to RGB at
//! parse time so downstream code never has to think about source byte
//! order.

use crate::track::AnimatedTrack;

/// Swaps channels 0 and 2 of a static RGB-after-normalization triple,
/// i.e. reverses a BGR source triple into RGB.
pub fn swap_static(triple: &mut [f32; 3]) {
    triple.swap(0, 2);
}

/// Reverses every keyframe's vector (and tangents, if present) in an
/// animated color track.
pub fn swap_animated(track: &mut AnimatedTrack) {
    track.reverse_color_triples();
}
