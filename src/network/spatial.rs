//! Cell-list spatial index for neighbor candidates.
//!
//! The box is divided into uniform cubic cells at least as wide as the
//! search cutoff, so every pair closer than the cutoff sits in the same or
//! in adjacent cells. Periodic grids wrap cell indices around the box faces.

use std::collections::HashMap;

/// Relative slack added to the cutoff so that rounding in the
/// coordinate-to-cell conversion can never separate a close pair by two cells.
const CELL_SLACK: f64 = 1e-9;

/// Grid-based spatial index for 3D point queries.
#[derive(Debug)]
pub struct SpatialGrid {
    /// Inverse cell size for fast coordinate-to-cell conversion.
    inv_cell_size: f64,
    /// Number of cells per axis when the grid wraps periodically.
    wrap: Option<i32>,
    /// Map from cell coordinates to point indices.
    cells: HashMap<(i32, i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// Creates an open (non-periodic) grid with cells of at least `cutoff`.
    ///
    /// # Panics
    ///
    /// Panics if `cutoff <= 0.0`.
    pub fn new(cutoff: f64) -> Self {
        assert!(cutoff > 0.0, "Cell size must be positive");
        Self {
            inv_cell_size: 1.0 / (cutoff * (1.0 + CELL_SLACK)),
            wrap: None,
            cells: HashMap::new(),
        }
    }

    /// Creates a periodic grid over a cubic box of edge `box_size`.
    ///
    /// Returns `None` when fewer than three cells fit along an axis, since
    /// the 27-cell stencil would then visit the same cell more than once.
    pub fn periodic(box_size: f64, cutoff: f64) -> Option<Self> {
        if !(cutoff > 0.0 && box_size > 0.0) {
            return None;
        }
        let n = (box_size / cutoff * (1.0 - CELL_SLACK)).floor();
        if n < 3.0 || n > i32::MAX as f64 {
            return None;
        }
        Some(Self {
            inv_cell_size: n / box_size,
            wrap: Some(n as i32),
            cells: HashMap::new(),
        })
    }

    /// Creates an open grid and populates it with positions.
    pub fn from_positions(positions: &[[f64; 3]], cutoff: f64) -> Self {
        let mut grid = Self::new(cutoff);
        for (idx, pos) in positions.iter().enumerate() {
            grid.insert(idx, *pos);
        }
        grid
    }

    /// Creates a periodic grid and populates it with positions.
    ///
    /// Every coordinate must lie inside `[0, box_size)`; otherwise `None`
    /// is returned and the caller is expected to fall back to a full scan.
    pub fn periodic_from_positions(
        positions: &[[f64; 3]],
        box_size: f64,
        cutoff: f64,
    ) -> Option<Self> {
        let inside = positions
            .iter()
            .all(|p| p.iter().all(|&c| (0.0..box_size).contains(&c)));
        if !inside {
            return None;
        }

        let mut grid = Self::periodic(box_size, cutoff)?;
        for (idx, pos) in positions.iter().enumerate() {
            grid.insert(idx, *pos);
        }
        Some(grid)
    }

    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.wrap.is_some()
    }

    /// Computes the cell coordinates for a given position.
    fn cell_coords(&self, pos: [f64; 3]) -> (i32, i32, i32) {
        let axis = |c: f64| {
            let cell = (c * self.inv_cell_size).floor() as i32;
            match self.wrap {
                Some(n) => cell.clamp(0, n - 1),
                None => cell,
            }
        };
        (axis(pos[0]), axis(pos[1]), axis(pos[2]))
    }

    /// Inserts a point index at the given position.
    pub fn insert(&mut self, idx: usize, pos: [f64; 3]) {
        let cell = self.cell_coords(pos);
        self.cells.entry(cell).or_default().push(idx);
    }

    /// Collects every indexed point in the 27 cells around `pos`.
    ///
    /// The result is a superset of the points within the cutoff; callers
    /// still have to check the exact distance.
    pub fn candidates(&self, pos: [f64; 3]) -> Vec<usize> {
        let (cx, cy, cz) = self.cell_coords(pos);
        let mut results = Vec::new();

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cell = self.wrap_cell((cx + dx, cy + dy, cz + dz));
                    if let Some(indices) = self.cells.get(&cell) {
                        results.extend_from_slice(indices);
                    }
                }
            }
        }

        results
    }

    fn wrap_cell(&self, (x, y, z): (i32, i32, i32)) -> (i32, i32, i32) {
        match self.wrap {
            Some(n) => (x.rem_euclid(n), y.rem_euclid(n), z.rem_euclid(n)),
            None => (x, y, z),
        }
    }
}
