//! Farbkodierung für WS2812
//!
//! Wandelt normierte RGB-Intensitäten (0.0..=1.0) in das gepackte Farbwort um,
//! das die LED-Datenleitung erwartet: `G << 24 | R << 16 | B << 8`.

use rgb::RGB8;

/// Fester Helligkeitsfaktor (40 %)
pub const BRIGHTNESS: f32 = 0.4;

/// Skaliert einen Kanal auf 0..=255 inklusive Helligkeitsfaktor
///
/// Kein Clamping: Aufrufer übergeben nur Werte in 0.0..=1.0.
/// Nachkommastellen werden abgeschnitten.
///
/// ```
/// # use esp_core::color::scale_channel;
/// assert_eq!(scale_channel(1.0), 102);
/// assert_eq!(scale_channel(0.0), 0);
/// ```
pub fn scale_channel(intensity: f32) -> u8 {
    (intensity * 255.0 * BRIGHTNESS) as u8
}

/// Helligkeits-skalierte Farbe als `RGB8`
pub fn rgb_from_intensity(r: f32, g: f32, b: f32) -> RGB8 {
    RGB8 {
        r: scale_channel(r),
        g: scale_channel(g),
        b: scale_channel(b),
    }
}

/// Packt eine Farbe im GRB-Layout, unterstes Byte bleibt 0
pub const fn pack_grb(color: RGB8) -> u32 {
    (color.g as u32) << 24 | (color.r as u32) << 16 | (color.b as u32) << 8
}

/// Gegenstück zu `pack_grb`, ignoriert das unterste Byte
pub const fn unpack_grb(word: u32) -> RGB8 {
    RGB8 {
        r: (word >> 16) as u8,
        g: (word >> 24) as u8,
        b: (word >> 8) as u8,
    }
}

/// Normierte Intensitäten → gepacktes Farbwort
pub fn encode_color(r: f32, g: f32, b: f32) -> u32 {
    pack_grb(rgb_from_intensity(r, g, b))
}
