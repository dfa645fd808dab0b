//! Glyph-Tabelle für die 5×5 Matrix
//!
//! Ein Glyph ist row-major gespeichert (Zeile 0 zuerst). Die Matrix ist
//! horizontal gespiegelt montiert, deshalb wird jede Zeile beim Ausgeben
//! über `mirrored_index()` umgedreht.

use crate::types::Digit;

/// Breite bzw. Höhe der Matrix
pub const MATRIX_WIDTH: usize = 5;

/// Anzahl der LEDs in der Matrix
pub const PIXEL_COUNT: usize = MATRIX_WIDTH * MATRIX_WIDTH;

/// 5×5 Bitmap, jede Zelle 0 oder 1
pub type Glyph = [u8; PIXEL_COUNT];

#[rustfmt::skip]
pub static GLYPHS: [Glyph; Digit::COUNT as usize] = [
    [0,1,1,1,0, 1,0,0,0,1, 1,0,0,0,1, 1,0,0,0,1, 0,1,1,1,0], // 0
    [0,1,1,1,0, 0,0,1,0,0, 0,0,1,0,0, 0,0,1,1,0, 0,0,1,0,0], // 1
    [1,1,1,1,1, 0,0,0,0,1, 0,1,1,1,0, 1,0,0,0,0, 1,1,1,1,1], // 2
    [1,1,1,1,1, 1,0,0,0,0, 0,1,1,1,0, 1,0,0,0,0, 1,1,1,1,1], // 3
    [0,0,0,0,1, 1,0,0,0,0, 1,1,1,1,1, 1,0,0,0,1, 1,0,0,0,1], // 4
    [1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1], // 5
    [1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 0,0,0,0,1, 1,1,1,1,1], // 6
    [1,0,0,0,0, 0,0,0,1,0, 0,0,1,0,0, 0,1,0,0,0, 1,1,1,1,1], // 7
    [1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1], // 8
    [1,1,1,1,1, 1,0,0,0,0, 1,1,1,1,1, 1,0,0,0,1, 1,1,1,1,1], // 9
];

/// Bitmap einer Ziffer
pub fn glyph(digit: Digit) -> &'static Glyph {
    &GLYPHS[digit.index()]
}

/// Spiegelt die Spalte innerhalb der Zeile: Spalte c → 4 − c
///
/// ```
/// # use esp_core::glyph::mirrored_index;
/// assert_eq!(mirrored_index(0), 4);
/// assert_eq!(mirrored_index(7), 7);
/// assert_eq!(mirrored_index(24), 20);
/// ```
pub const fn mirrored_index(index: usize) -> usize {
    let row = index / MATRIX_WIDTH;
    let col = index % MATRIX_WIDTH;
    row * MATRIX_WIDTH + (MATRIX_WIDTH - 1 - col)
}

/// Ganzer Glyph in physikalischer Reihenfolge
pub fn mirrored(glyph: &Glyph) -> Glyph {
    core::array::from_fn(|i| glyph[mirrored_index(i)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(glyph: &Glyph, r: usize) -> &[u8] {
        &glyph[r * MATRIX_WIDTH..(r + 1) * MATRIX_WIDTH]
    }

    #[test]
    fn test_glyph_five() {
        let five = glyph(Digit::new(5).unwrap());
        assert_eq!(
            five,
            &[1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1]
        );
    }

    #[test]
    fn test_palindromic_row_unchanged() {
        let five = glyph(Digit::new(5).unwrap());
        let physical = mirrored(five);
        assert_eq!(row(&physical, 0), &[1, 1, 1, 1, 1]);
        // Zeile 1 ist asymmetrisch und wird umgedreht
        assert_eq!(row(&physical, 1), &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_asymmetric_row_of_one() {
        let one = glyph(Digit::new(1).unwrap());
        assert_eq!(row(one, 3), &[0, 0, 1, 1, 0]);
        assert_eq!(row(&mirrored(one), 3), &[0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_mirroring_is_involution() {
        for i in 0..PIXEL_COUNT {
            assert_eq!(mirrored_index(mirrored_index(i)), i);
            assert_eq!(mirrored_index(i) / MATRIX_WIDTH, i / MATRIX_WIDTH);
        }
    }

    #[test]
    fn test_all_cells_binary() {
        assert!(GLYPHS.iter().flatten().all(|&cell| cell <= 1));
    }
}
