//! Piece catalog - the seven fixed footprints.
//!
//! Each shape is an immutable 3x3 boolean footprint. Some entries declare a
//! rotation pivot cell; the rest fall back to the geometric center of the
//! occupied bounding box. The catalog itself never changes at runtime.

use crate::types::{EngineError, PieceId, FOOTPRINT_SIZE};

/// Occupancy bitmap of one footprint window.
pub type FootprintMap = [[bool; FOOTPRINT_SIZE]; FOOTPRINT_SIZE];

/// An immutable piece shape: occupancy map plus optional pivot cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    cells: FootprintMap,
    pivot: Option<(usize, usize)>,
}

impl Footprint {
    pub const fn new(cells: FootprintMap, pivot: Option<(usize, usize)>) -> Self {
        Self { cells, pivot }
    }

    /// True iff the offset within the window is occupied.
    pub fn occupied(&self, row: usize, col: usize) -> bool {
        row < FOOTPRINT_SIZE && col < FOOTPRINT_SIZE && self.cells[row][col]
    }

    /// Iterate the occupied (row, col) offsets.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..FOOTPRINT_SIZE)
            .flat_map(|row| (0..FOOTPRINT_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col])
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.offsets().count()
    }

    /// The declared pivot, or the geometric center of the occupied bounding
    /// box when none was declared.
    ///
    /// Fails with `InvalidRotationPivot` for a footprint with no occupied
    /// cells. Catalog entries can never hit this; the guard exists for
    /// custom pieces built through `Footprint::new`.
    pub fn pivot_or_center(&self) -> Result<(usize, usize), EngineError> {
        if let Some(pivot) = self.pivot {
            return Ok(pivot);
        }

        let mut min = (FOOTPRINT_SIZE, FOOTPRINT_SIZE);
        let mut max = (0, 0);
        let mut any = false;
        for (row, col) in self.offsets() {
            any = true;
            min = (min.0.min(row), min.1.min(col));
            max = (max.0.max(row), max.1.max(col));
        }

        if !any {
            return Err(EngineError::InvalidRotationPivot);
        }
        Ok(((min.0 + max.0) / 2, (min.1 + max.1) / 2))
    }
}

const X: bool = true;
const O: bool = false;

// The pivot-marking convention differs across the deployed variants: some
// footprints carry an explicit marker, the rest rely on the center default.
// Both encodings are kept here on purpose.

const T: Footprint = Footprint::new([[O, X, O], [X, X, X], [O, O, O]], Some((1, 1)));
const J: Footprint = Footprint::new([[X, O, O], [X, O, O], [X, X, O]], None);
const L: Footprint = Footprint::new([[O, X, O], [O, X, O], [X, X, O]], None);
const SQUARE: Footprint = Footprint::new([[X, X, O], [X, X, O], [O, O, O]], None);
const S: Footprint = Footprint::new([[X, X, O], [O, X, X], [O, O, O]], Some((1, 1)));
const Z: Footprint = Footprint::new([[O, X, X], [X, X, O], [O, O, O]], Some((1, 1)));
const BAR: Footprint = Footprint::new([[O, X, O], [O, X, O], [O, X, O]], Some((1, 1)));

/// Look up the catalog footprint for a piece id. Pure function.
pub fn footprint(id: PieceId) -> &'static Footprint {
    match id {
        PieceId::T => &T,
        PieceId::J => &J,
        PieceId::L => &L,
        PieceId::O => &SQUARE,
        PieceId::S => &S,
        PieceId::Z => &Z,
        PieceId::I => &BAR,
    }
}
