use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::diff::{MismatchEntry, MismatchSet};

/// One mismatch to fix next, or `None` when the motif is satisfied.
pub type Suggestion = Option<MismatchEntry>;

/// Pick one entry uniformly at random. Nothing is remembered between calls.
pub fn select<R: Rng + ?Sized>(set: &MismatchSet, rng: &mut R) -> Suggestion {
    let picked = set.entries().choose(rng).copied();
    if let Some(entry) = &picked {
        trace!(x = entry.pixel.x, y = entry.pixel.y, of = set.len(), "selected mismatch");
    }
    picked
}

pub fn select_random(set: &MismatchSet) -> Suggestion {
    select(set, &mut rand::thread_rng())
}
