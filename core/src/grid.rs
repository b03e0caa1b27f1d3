use rayon::prelude::*;

use crate::simplex2::Simplex2D;

// Borrowed mutable view over a caller-owned, contiguous, row-major f32 buffer
// The core never allocates or resizes the buffer; it only writes cells
pub struct Grid2D<'a> {
    data: &'a mut [f32],
    height: usize,
    width: usize,
}

impl<'a> Grid2D<'a> {
    // Shape checks live here, at the seam to the caller; everything past
    // this point assumes they hold
    pub fn new(data: &'a mut [f32], height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid extents must be positive");
        assert_eq!(
            data.len(),
            height * width,
            "buffer length must equal height * width"
        );
        Self {
            data,
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f32 {
        self.data[r * self.width + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, v: f32) {
        self.data[r * self.width + c] = v;
    }

    pub fn as_slice(&self) -> &[f32] {
        self.data
    }
}

// Sequential fill: grid[r][c] = noise2(c * scale, r * scale)
// Each cell is written exactly once and prior contents are never read,
// so iteration order does not affect the result
pub fn fill2(noise: &Simplex2D, scale: f64, grid: &mut Grid2D) {
    for r in 0..grid.height {
        for c in 0..grid.width {
            grid.data[r * grid.width + c] =
                noise.noise2(c as f64 * scale, r as f64 * scale) as f32;
        }
    }
}

// Row-parallel fill, bit-identical to fill2
// The permutation table is read-only and shared across workers; each worker
// writes a disjoint row chunk, so no synchronization is needed
pub fn par_fill2(noise: &Simplex2D, scale: f64, grid: &mut Grid2D) {
    let width = grid.width;
    grid.data
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(r, row)| {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = noise.noise2(c as f64 * scale, r as f64 * scale) as f32;
            }
        });
}
