use crate::color::Color;
use crate::error::{GridError, Result};

/// An immutable, row-major grid of colors. `None` marks a cell with no color
/// at all (unset).
///
/// Built once per refresh from decoded image data and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    width: u32,
    height: u32,
    cells: Vec<Option<Color>>,
}

impl GridSnapshot {
    pub fn new(width: u32, height: u32, cells: Vec<Option<Color>>) -> Result<Self> {
        let expected = checked_area(width, height)?;
        if cells.len() != expected {
            return Err(GridError::BufferSize {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Build from a tightly packed RGBA8 buffer (`width * height * 4` bytes).
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = checked_area(width, height)?
            .checked_mul(Color::SIZE)
            .ok_or(GridError::TooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(GridError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        let cells = rgba
            .chunks_exact(Color::SIZE)
            .map(|px| <[u8; Color::SIZE]>::try_from(px).ok().map(Color::from_bytes))
            .collect();
        Ok(Self { width, height, cells })
    }

    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Option<Color>,
    {
        let area = checked_area(width, height)?;
        let mut cells = Vec::with_capacity(area);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Result<Option<Color>> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// Lookup for callers that have already bounds-checked.
    pub(crate) fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.cells[self.index(x, y)]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn checked_area(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::TooLarge { width, height })
}
