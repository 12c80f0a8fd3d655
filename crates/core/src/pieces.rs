//! Pieces module - the seven shapes and their authored rotation tables
//!
//! Rotations are stored, not computed. Shapes with two-fold symmetry keep two
//! variants and the square keeps one; rotating cycles through whatever is
//! stored. The S/Z variants deliberately differ from a naive 90° turn.

use crate::geometry::Vector;
use crate::types::{Color, PieceKind, CELLS_PER_PIECE};

/// One rotation variant: the occupied cells relative to the piece origin
pub type Variant = [Vector; CELLS_PER_PIECE];

/// A piece shape with its rotation variants and color
#[derive(Debug, PartialEq, Eq)]
pub struct PieceShape {
    pub kind: PieceKind,
    pub color: Color,
    /// Added to the board's spawn anchor so the first variant appears flush
    /// with the top and centred.
    pub spawn_offset: Vector,
    pub variants: &'static [Variant],
}

impl PieceShape {
    /// Cells of the given rotation index (wrapped)
    pub fn variant(&self, rotation: usize) -> &Variant {
        &self.variants[rotation % self.variants.len()]
    }

    /// Rows spanned by a variant
    pub fn height(&self, rotation: usize) -> i32 {
        let cells = self.variant(rotation);
        let top = cells.iter().map(|c| c.y).min().unwrap_or(0);
        let bottom = cells.iter().map(|c| c.y).max().unwrap_or(0);
        bottom - top + 1
    }
}

const fn v(x: i32, y: i32) -> Vector {
    Vector::new(x, y)
}

// ##
// ##
static O_VARIANTS: [Variant; 1] = [[v(0, 0), v(1, 0), v(0, 1), v(1, 1)]];

// ##
//  ##
static Z_VARIANTS: [Variant; 2] = [
    [v(0, 0), v(1, 0), v(1, 1), v(2, 1)],
    [v(1, 0), v(0, 1), v(1, 1), v(0, 2)],
];

//  ##
// ##
static S_VARIANTS: [Variant; 2] = [
    [v(1, 0), v(2, 0), v(0, 1), v(1, 1)],
    [v(0, 0), v(0, 1), v(1, 1), v(1, 2)],
];

// ###
//  #
static T_VARIANTS: [Variant; 4] = [
    [v(0, 0), v(1, 0), v(2, 0), v(1, 1)],
    [v(1, 0), v(0, 1), v(1, 1), v(1, 2)],
    [v(1, 0), v(0, 1), v(1, 1), v(2, 1)],
    [v(0, 0), v(0, 1), v(1, 1), v(0, 2)],
];

// ###
// #
static L_VARIANTS: [Variant; 4] = [
    [v(0, 1), v(1, 1), v(2, 1), v(0, 2)],
    [v(0, 0), v(1, 0), v(1, 1), v(1, 2)],
    [v(2, 0), v(0, 1), v(1, 1), v(2, 1)],
    [v(1, 0), v(1, 1), v(1, 2), v(2, 2)],
];

// ###
//   #
static J_VARIANTS: [Variant; 4] = [
    [v(0, 1), v(1, 1), v(2, 1), v(2, 2)],
    [v(1, 0), v(1, 1), v(1, 2), v(0, 2)],
    [v(0, 1), v(1, 1), v(2, 1), v(0, 0)],
    [v(1, 0), v(2, 0), v(1, 1), v(1, 2)],
];

// ####
static I_VARIANTS: [Variant; 2] = [
    [v(0, 1), v(1, 1), v(2, 1), v(3, 1)],
    [v(1, 0), v(1, 1), v(1, 2), v(1, 3)],
];

static SHAPES: [PieceShape; 7] = [
    PieceShape {
        kind: PieceKind::O,
        color: Color::Yellow,
        spawn_offset: v(1, 0),
        variants: &O_VARIANTS,
    },
    PieceShape {
        kind: PieceKind::Z,
        color: Color::Red,
        spawn_offset: v(0, 0),
        variants: &Z_VARIANTS,
    },
    PieceShape {
        kind: PieceKind::S,
        color: Color::Green,
        spawn_offset: v(0, 0),
        variants: &S_VARIANTS,
    },
    PieceShape {
        kind: PieceKind::T,
        color: Color::Magenta,
        spawn_offset: v(0, 0),
        variants: &T_VARIANTS,
    },
    PieceShape {
        kind: PieceKind::L,
        color: Color::White,
        spawn_offset: v(0, -1),
        variants: &L_VARIANTS,
    },
    PieceShape {
        kind: PieceKind::J,
        color: Color::Blue,
        spawn_offset: v(0, -1),
        variants: &J_VARIANTS,
    },
    PieceShape {
        kind: PieceKind::I,
        color: Color::Cyan,
        spawn_offset: v(0, -1),
        variants: &I_VARIANTS,
    },
];

/// The full catalog, in a fixed order
pub fn all_shapes() -> &'static [PieceShape] {
    &SHAPES
}

/// Look up a shape by kind
pub fn shape_of(kind: PieceKind) -> &'static PieceShape {
    SHAPES
        .iter()
        .find(|shape| shape.kind == kind)
        .unwrap_or(&SHAPES[0])
}

/// The falling piece: a shape, its rotation index and its board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: &'static PieceShape,
    pub rotation: usize,
    pub position: Vector,
}

impl ActivePiece {
    /// A piece in its first variant at `position`
    pub fn new(shape: &'static PieceShape, position: Vector) -> Self {
        Self {
            shape,
            rotation: 0,
            position,
        }
    }

    /// Go to the next rotation
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.shape.variants.len();
    }

    /// Go to the previous rotation
    pub fn unrotate(&mut self) {
        let count = self.shape.variants.len();
        self.rotation = (self.rotation + count - 1) % count;
    }

    pub fn color(&self) -> Color {
        self.shape.color
    }

    /// Occupied board cells in the current rotation
    pub fn cells(&self) -> impl Iterator<Item = Vector> + '_ {
        self.shape
            .variant(self.rotation)
            .iter()
            .map(move |&cell| cell.plus(self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_wraps_through_stored_variants() {
        let mut piece = ActivePiece::new(shape_of(PieceKind::Z), Vector::new(0, 0));
        piece.rotate();
        assert_eq!(piece.rotation, 1);
        piece.rotate();
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn unrotate_wraps_on_underflow() {
        let mut piece = ActivePiece::new(shape_of(PieceKind::T), Vector::new(0, 0));
        piece.unrotate();
        assert_eq!(piece.rotation, 3);

        let mut square = ActivePiece::new(shape_of(PieceKind::O), Vector::new(0, 0));
        square.unrotate();
        assert_eq!(square.rotation, 0);
    }

    #[test]
    fn cells_are_translated_by_position() {
        let piece = ActivePiece::new(shape_of(PieceKind::O), Vector::new(4, 2));
        let cells: Vec<Vector> = piece.cells().collect();
        assert_eq!(
            cells,
            vec![
                Vector::new(4, 2),
                Vector::new(5, 2),
                Vector::new(4, 3),
                Vector::new(5, 3)
            ]
        );
    }

    #[test]
    fn variant_heights() {
        assert_eq!(shape_of(PieceKind::I).height(0), 1);
        assert_eq!(shape_of(PieceKind::I).height(1), 4);
        assert_eq!(shape_of(PieceKind::O).height(0), 2);
        assert_eq!(shape_of(PieceKind::T).height(1), 3);
    }
}
