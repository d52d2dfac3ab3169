use glam::{IVec2, UVec2};

use crate::types::GraphError;

/// Fixed-size row-major 2D buffer addressed by `(x, y)` with `x < width`, `y < height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(width: u32, height: u32, data: Vec<T>) -> Result<Self, GraphError> {
        let expected_len = (width as usize) * (height as usize);
        if data.len() != expected_len {
            return Err(GraphError::InvalidGrid(format!(
                "data length {} does not match grid size {}x{}",
                data.len(),
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid by evaluating `f` at every cell in row-major order.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(UVec2) -> T) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(UVec2::new(x, y)));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Apply `f` to every cell, keeping the layout.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid2d<U> {
        Grid2d {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, pos: UVec2) -> Option<&T> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(&self.data[self.index(pos)])
    }

    /// `pos + offset` if it lands inside the grid.
    pub fn checked_offset(&self, pos: UVec2, offset: IVec2) -> Option<UVec2> {
        let x = pos.x.checked_add_signed(offset.x)?;
        let y = pos.y.checked_add_signed(offset.y)?;
        (x < self.width && y < self.height).then_some(UVec2::new(x, y))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (UVec2, &T)> + '_ {
        let width = self.width.max(1);
        self.data.iter().enumerate().map(move |(idx, value)| {
            let idx = idx as u32;
            (UVec2::new(idx % width, idx / width), value)
        })
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn index(&self, pos: UVec2) -> usize {
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }
}

impl<T: Copy> Grid2d<T> {
    /// Mirror top-to-bottom: row `y` becomes row `height - 1 - y`.
    pub fn flipped_vertical(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.width, self.height, |p| {
            self.data[self.index(UVec2::new(p.x, h - 1 - p.y))]
        })
    }

    /// Rotate a quarter turn clockwise (270 degrees counter-clockwise).
    /// The result is `height` wide and `width` tall.
    pub fn rotated_clockwise(&self) -> Self {
        let h = self.height;
        Self::from_fn(self.height, self.width, |p| {
            self.data[self.index(UVec2::new(p.y, h - 1 - p.x))]
        })
    }
}
