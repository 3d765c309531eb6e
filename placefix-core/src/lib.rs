pub mod color;
pub mod diff;
pub mod error;
pub mod grid;
pub mod select;

pub use color::Color;
pub use diff::{
    compute_mismatches, compute_mismatches_with, format_entry, DiffOptions, MismatchEntry,
    MismatchSet, Pixel,
};
pub use error::{GridError, Result};
pub use grid::GridSnapshot;
pub use select::{select, select_random, Suggestion};
