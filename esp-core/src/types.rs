//! Core Types für die Ziffern-Anzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Eine validierte Ziffer im Bereich 0..=9
///
/// Werte außerhalb des Bereichs sind nicht darstellbar. Alle Änderungen laufen
/// über `next()`/`prev()` und wickeln modulo 10 um.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digit(u8);

impl Digit {
    /// Anzahl der darstellbaren Ziffern
    pub const COUNT: u8 = 10;

    /// Startwert nach dem Booten
    pub const ZERO: Digit = Digit(0);

    /// Erstellt eine Ziffer, `None` wenn `value > 9`
    pub const fn new(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Nächste Ziffer, 9 → 0
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// Vorherige Ziffer, 0 → 9
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }

    /// Index in die Glyph-Tabelle
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Wert außerhalb von 0..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDigit(pub u8);

impl core::fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "digit out of range: {}", self.0)
    }
}

/// Die beiden Taster
///
/// Taster A zählt hoch, Taster B zählt runter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Taster A
    Increment,
    /// Taster B
    Decrement,
}

impl Button {
    /// Wendet die Wirkung des Tasters auf eine Ziffer an
    pub const fn apply(self, digit: Digit) -> Digit {
        match self {
            Button::Increment => digit.next(),
            Button::Decrement => digit.prev(),
        }
    }
}

/// Ergebnis einer fallenden Flanke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// Flanke angenommen, Zähler steht jetzt auf dieser Ziffer
    Accepted(Digit),
    /// Flanke lag im Debounce-Fenster und wurde verworfen
    Ignored,
}

impl EdgeOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, EdgeOutcome::Accepted(_))
    }
}

/// Zustand eines einzelnen Tasters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Kein angenommener Druck im aktuellen Fenster
    Idle,
    /// Ein Druck wurde angenommen, weitere Flanken werden bis zum Ablauf verworfen
    Debounced { since_us: u64 },
}

/// Rückgabe eines periodischen Timer-Callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Timer weiterlaufen lassen
    Continue,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Digit {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Button {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Button::Increment => defmt::write!(fmt, "A (+1)"),
            Button::Decrement => defmt::write!(fmt, "B (-1)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EdgeOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            EdgeOutcome::Accepted(digit) => defmt::write!(fmt, "Accepted({})", digit),
            EdgeOutcome::Ignored => defmt::write!(fmt, "Ignored"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DebounceState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DebounceState::Idle => defmt::write!(fmt, "Idle"),
            DebounceState::Debounced { since_us } => {
                defmt::write!(fmt, "Debounced {{ since_us: {} }}", since_us)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_new_rejects_out_of_range() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::try_from(42), Err(InvalidDigit(42)));
    }

    #[test]
    fn test_digit_wraps_in_both_directions() {
        let nine = Digit::new(9).unwrap();
        assert_eq!(nine.next(), Digit::ZERO);
        assert_eq!(Digit::ZERO.prev(), nine);
    }

    #[test]
    fn test_button_apply() {
        let four = Digit::new(4).unwrap();
        assert_eq!(Button::Increment.apply(four).value(), 5);
        assert_eq!(Button::Decrement.apply(four).value(), 3);
    }
}
