//! Property tests for mismatch computation and hex formatting.

use placefix_core::{compute_mismatches, Color, GridSnapshot, Pixel};
use proptest::prelude::*;
use std::collections::HashSet;

// Small palette so motif and place collide often enough to exercise both branches.
fn palette_color() -> impl Strategy<Value = Color> {
    (0u8..3, 0u8..2, prop_oneof![Just(0u8), Just(128u8), Just(255u8)])
        .prop_map(|(r, g, a)| Color::rgba(r * 100, g * 200, 50, a))
}

fn grid(max: u32) -> impl Strategy<Value = GridSnapshot> {
    (1..=max, 1..=max).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::option::weighted(0.8, palette_color()), (w * h) as usize)
            .prop_map(move |cells| GridSnapshot::new(w, h, cells).unwrap())
    })
}

fn wants(motif: &GridSnapshot, x: u32, y: u32) -> Option<Color> {
    motif.pixel_at(x, y).unwrap().filter(|c| !c.is_transparent())
}

fn agrees(place: &GridSnapshot, x: u32, y: u32, required: &Color) -> bool {
    place.contains(x, y)
        && place
            .pixel_at(x, y)
            .unwrap()
            .is_some_and(|p| p.same_rgb(required))
}

proptest! {
    #[test]
    fn every_disagreeing_pixel_listed_once(motif in grid(6), place in grid(6)) {
        let set = compute_mismatches(&motif, &place);

        let listed: Vec<Pixel> = set.iter().map(|e| e.pixel).collect();
        let unique: HashSet<Pixel> = listed.iter().copied().collect();
        prop_assert_eq!(unique.len(), listed.len());

        for x in 0..motif.width() {
            for y in 0..motif.height() {
                let expected = wants(&motif, x, y).filter(|c| !agrees(&place, x, y, c));
                let found = set.iter().find(|e| e.pixel == Pixel { x, y }).map(|e| e.required);
                prop_assert_eq!(found, expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn entries_follow_x_then_y(motif in grid(6), place in grid(6)) {
        let set = compute_mismatches(&motif, &place);
        let keys: Vec<(u32, u32)> = set.iter().map(|e| (e.pixel.x, e.pixel.y)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn cared_counts_non_transparent_motif_pixels(motif in grid(6), place in grid(6)) {
        let set = compute_mismatches(&motif, &place);
        let mut cared = 0;
        for x in 0..motif.width() {
            for y in 0..motif.height() {
                if wants(&motif, x, y).is_some() {
                    cared += 1;
                }
            }
        }
        prop_assert_eq!(set.cared(), cared);
        prop_assert!(set.len() <= set.cared());
    }

    #[test]
    fn hex_matches_rgb_channels(v in any::<u32>()) {
        let color = Color::from_argb(v);
        let hex = color.to_hex();
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        prop_assert_eq!(u32::from_str_radix(&hex[1..], 16).unwrap(), v & 0x00FF_FFFF);
    }
}
