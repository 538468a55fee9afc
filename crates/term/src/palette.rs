//! Colors of the board, the text and the seven pieces.

use crate::fb::Rgb;
use crate::types::{Cell, PieceKind};

pub const BACKGROUND: Rgb = Rgb::hex(0xd2f0ea);
pub const TEXT: Rgb = Rgb::hex(0x505e79);
pub const BORDER: Rgb = Rgb::hex(0x505e79);
pub const OVERLAY: Rgb = Rgb::hex(0xffffff);
pub const PANEL: Rgb = Rgb::hex(0x000000);
pub const PANEL_TEXT: Rgb = Rgb::hex(0xdcdcdc);

/// Piece colors indexed by color id minus one.
pub const PIECES: [Rgb; 7] = [
    Rgb::hex(0xfc9f4f),
    Rgb::hex(0xc0a3f5),
    Rgb::hex(0x8a96ad),
    Rgb::hex(0xa8d0fe),
    Rgb::hex(0x90bf5e),
    Rgb::hex(0xff7586),
    Rgb::hex(0xffd45c),
];

pub fn piece(kind: PieceKind) -> Rgb {
    PIECES[kind.color_id() as usize - 1]
}

pub fn cell(cell: Cell) -> Option<Rgb> {
    cell.kind().map(piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_piece_has_its_own_color() {
        assert_eq!(piece(PieceKind::J), Rgb::hex(0xfc9f4f));
        assert_eq!(piece(PieceKind::T), Rgb::hex(0xffd45c));
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(piece(*a), piece(*b));
            }
        }
    }

    #[test]
    fn empty_cells_have_no_color() {
        assert_eq!(cell(Cell::Empty), None);
        assert_eq!(cell(Cell::Block(PieceKind::I)), Some(Rgb::hex(0x90bf5e)));
    }
}
