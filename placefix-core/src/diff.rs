use std::fmt;

use tracing::debug;

use crate::color::Color;
use crate::grid::GridSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

/// A motif pixel the place does not currently show, with the color it should have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MismatchEntry {
    pub pixel: Pixel,
    pub required: Color,
}

impl fmt::Display for MismatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Change pixel at x={} and y={} to color={}",
            self.pixel.x,
            self.pixel.y,
            self.required.to_hex()
        )
    }
}

/// Human-readable instruction for one mismatch, color as `#RRGGBB`.
pub fn format_entry(entry: &MismatchEntry) -> String {
    entry.to_string()
}

/// Result of one comparison pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MismatchSet {
    entries: Vec<MismatchEntry>,
    cared: usize,
}

impl MismatchSet {
    pub fn entries(&self) -> &[MismatchEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MismatchEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of motif pixels that carry a color requirement.
    pub fn cared(&self) -> usize {
        self.cared
    }

    /// Cared-about pixels the place already shows correctly.
    pub fn satisfied(&self) -> usize {
        self.cared - self.entries.len()
    }

    /// Fraction of cared-about pixels already correct. A motif with nothing
    /// to care about counts as complete.
    pub fn completion(&self) -> f64 {
        if self.cared == 0 {
            return 1.0;
        }
        self.satisfied() as f64 / self.cared as f64
    }
}

impl<'a> IntoIterator for &'a MismatchSet {
    type Item = &'a MismatchEntry;
    type IntoIter = std::slice::Iter<'a, MismatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Motif pixels with alpha at or below this value are treated as unset.
    /// `0` means only fully transparent pixels are ignored.
    pub alpha_cutoff: u8,
}

impl DiffOptions {
    fn requirement(&self, motif_px: Option<Color>) -> Option<Color> {
        motif_px.filter(|c| c.a > self.alpha_cutoff)
    }
}

/// Compare `place` against `motif` with the default options.
pub fn compute_mismatches(motif: &GridSnapshot, place: &GridSnapshot) -> MismatchSet {
    compute_mismatches_with(motif, place, &DiffOptions::default())
}

/// Collect every cared-about motif pixel the place disagrees with.
///
/// Iteration covers the motif's extent only, x outer and y inner. A motif pixel
/// that falls outside the place grid, or over an unset place pixel, is always
/// a mismatch.
pub fn compute_mismatches_with(
    motif: &GridSnapshot,
    place: &GridSnapshot,
    options: &DiffOptions,
) -> MismatchSet {
    let mut entries = Vec::new();
    let mut cared = 0usize;

    for x in 0..motif.width() {
        for y in 0..motif.height() {
            let Some(required) = options.requirement(motif.get(x, y)) else {
                continue;
            };
            cared += 1;

            let shown = if place.contains(x, y) { place.get(x, y) } else { None };
            let matches = shown.is_some_and(|p| p.same_rgb(&required));

            if !matches {
                entries.push(MismatchEntry {
                    pixel: Pixel { x, y },
                    required,
                });
            }
        }
    }

    debug!(
        motif_width = motif.width(),
        motif_height = motif.height(),
        place_width = place.width(),
        place_height = place.height(),
        cared,
        mismatched = entries.len(),
        "computed mismatches"
    );

    MismatchSet { entries, cared }
}
