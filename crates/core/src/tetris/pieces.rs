//! Pieces module - tetromino matrices and rotation
//!
//! Each piece is a small boolean matrix anchored at its top-left corner:
//! I is 1x4, O is 2x2, and T/S/Z/J/L are 2x3. Rotation turns the matrix 90°
//! clockwise (transpose, then reverse each row). There are no wall kicks.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Offset of a single mino from the piece anchor, as `(dx, dy)`.
pub type MinoOffset = (i8, i8);

/// Boolean matrix of up to 4x4 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; 4]; 4],
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; 4]; 4];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows.first().map_or(0, |r| r.len()) as u8,
            cells,
        }
    }

    /// Spawn orientation for a piece kind.
    pub fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// The matrix turned 90° clockwise.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; 4]; 4];
        for (i, row) in self.cells.iter().enumerate().take(rows) {
            for (j, &filled) in row.iter().enumerate().take(cols) {
                cells[j][rows - 1 - i] = filled;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Filled cells as `(dx, dy)` offsets, row-major.
    pub fn minos(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.cells[r][c] {
                    // Every tetromino has exactly four minos.
                    let _ = out.try_push((c as i8, r as i8));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_piece_has_four_minos() {
        for kind in PieceKind::ALL {
            let mut shape = Shape::for_kind(kind);
            for _ in 0..4 {
                assert_eq!(shape.minos().len(), 4, "{kind:?}");
                shape = shape.rotated();
            }
        }
    }

    #[test]
    fn test_spawn_dimensions() {
        let i = Shape::for_kind(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));
        let o = Shape::for_kind(PieceKind::O);
        assert_eq!((o.rows(), o.cols()), (2, 2));
        let t = Shape::for_kind(PieceKind::T);
        assert_eq!((t.rows(), t.cols()), (2, 3));
    }

    #[test]
    fn test_rotation_transposes_and_reverses() {
        // T pointing up becomes T pointing right:
        // 1 0
        // 1 1
        // 1 0
        let t = Shape::for_kind(PieceKind::T).rotated();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.minos().as_slice(), &[(0, 0), (0, 1), (1, 1), (0, 2)]);

        let i = Shape::for_kind(PieceKind::I).rotated();
        assert_eq!((i.rows(), i.cols()), (4, 1));
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for kind in PieceKind::ALL {
            let start = Shape::for_kind(kind);
            let back = start.rotated().rotated().rotated().rotated();
            assert_eq!(start, back, "{kind:?}");
        }
    }
}
