//! Static wiring tables of the Fialka.
//!
//! Provides the per-series rotor matrices (wiring, inverse wiring, blocking
//! pins, flipped-core wiring and its inverse) for the three rotor series
//! whose data survived, plus the fixed keyboard, entry disk and reflector
//! permutations shared by every machine.
//!
//! Every table pair is checked at compile time: a row that is not a true
//! inverse of its partner fails the build.

pub(crate) mod fixed;
mod series_3k;
mod series_5k;
mod series_6k;

use serde::{Deserialize, Serialize};

use self::series_3k::{
    INVERSE_WIRING_FLIPPED_K3, INVERSE_WIRING_K3, PIN_POSITIONS_K3, WIRING_FLIPPED_K3, WIRING_K3,
};
use self::series_5k::{
    INVERSE_WIRING_FLIPPED_K5, INVERSE_WIRING_K5, PIN_POSITIONS_K5, WIRING_FLIPPED_K5, WIRING_K5,
};
use self::series_6k::{
    INVERSE_WIRING_FLIPPED_K6, INVERSE_WIRING_K6, PIN_POSITIONS_K6, WIRING_FLIPPED_K6, WIRING_K6,
};

/// Number of electrical contacts (and letters of the internal alphabet).
pub const CONTACTS: usize = 30;

/// Number of rotors in the stack.
pub const ROTORS: usize = 10;

/// One wiring row per physical rotor core, one column per contact.
pub type Wiring = [[u8; CONTACTS]; ROTORS];

/// One pin row per physical rotor shell; `1` marks a blocking pin.
pub type PinMatrix = [[u8; CONTACTS]; ROTORS];

/// Rotor series fitted to the machine.
///
/// Only the 3K, 5K and 6K series are documented well enough to be emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotorSeries {
    K3,
    K5,
    #[default]
    K6,
}

impl RotorSeries {
    /// All supported series, in catalogue order.
    pub const ALL: [RotorSeries; 3] = [RotorSeries::K3, RotorSeries::K5, RotorSeries::K6];

    /// Returns the fixed tables of this series.
    pub fn tables(self) -> RotorSeriesTables {
        tables_for(self)
    }
}

/// The five immutable matrices of one rotor series.
///
/// Row `r` of every matrix belongs to physical rotor (or core) `r`; the
/// configuration maps rotor positions to rows through the rotor and core
/// orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSeriesTables {
    pub(crate) wiring: &'static Wiring,
    pub(crate) inverse_wiring: &'static Wiring,
    pub(crate) pin_positions: &'static PinMatrix,
    pub(crate) wiring_flipped: &'static Wiring,
    pub(crate) inverse_wiring_flipped: &'static Wiring,
}

impl RotorSeriesTables {
    /// Returns `true` when rotor shell `row` carries a blocking pin at `contact`.
    ///
    /// # Parameters
    /// - `row`: Physical rotor number (0..10).
    /// - `contact`: Contact position (0..30).
    pub fn has_pin(&self, row: usize, contact: usize) -> bool {
        self.pin_positions[row][contact] == 1
    }

    /// Normal-side wiring of core `row`.
    pub fn wiring(&self, row: usize, contact: usize) -> u8 {
        self.wiring[row][contact]
    }

    pub fn inverse_wiring(&self, row: usize, contact: usize) -> u8 {
        self.inverse_wiring[row][contact]
    }
}

/// Returns the fixed matrices of `series`.
///
/// # Examples
///
/// ```
/// use fialka::tables::{tables_for, RotorSeries};
///
/// let t = tables_for(RotorSeries::K6);
/// let x = t.wiring(3, 17) as usize;
/// assert_eq!(t.inverse_wiring(3, x), 17);
/// ```
pub fn tables_for(series: RotorSeries) -> RotorSeriesTables {
    match series {
        RotorSeries::K3 => RotorSeriesTables {
            wiring: &WIRING_K3,
            inverse_wiring: &INVERSE_WIRING_K3,
            pin_positions: &PIN_POSITIONS_K3,
            wiring_flipped: &WIRING_FLIPPED_K3,
            inverse_wiring_flipped: &INVERSE_WIRING_FLIPPED_K3,
        },
        RotorSeries::K5 => RotorSeriesTables {
            wiring: &WIRING_K5,
            inverse_wiring: &INVERSE_WIRING_K5,
            pin_positions: &PIN_POSITIONS_K5,
            wiring_flipped: &WIRING_FLIPPED_K5,
            inverse_wiring_flipped: &INVERSE_WIRING_FLIPPED_K5,
        },
        RotorSeries::K6 => RotorSeriesTables {
            wiring: &WIRING_K6,
            inverse_wiring: &INVERSE_WIRING_K6,
            pin_positions: &PIN_POSITIONS_K6,
            wiring_flipped: &WIRING_FLIPPED_K6,
            inverse_wiring_flipped: &INVERSE_WIRING_FLIPPED_K6,
        },
    }
}

// ──────── Compile-time table checks ────────

/// `inverse[forward[x]] == x` for every contact.
const fn is_inverse_row(forward: &[u8; CONTACTS], inverse: &[u8; CONTACTS]) -> bool {
    let mut x = 0;
    while x < CONTACTS {
        let y = forward[x] as usize;
        if y >= CONTACTS || inverse[y] as usize != x {
            return false;
        }
        x += 1;
    }
    true
}

const fn rows_are_inverse(forward: &Wiring, inverse: &Wiring) -> bool {
    let mut r = 0;
    while r < ROTORS {
        if !is_inverse_row(&forward[r], &inverse[r]) {
            return false;
        }
        r += 1;
    }
    true
}

const fn pins_are_binary(pins: &PinMatrix) -> bool {
    let mut r = 0;
    while r < ROTORS {
        let mut c = 0;
        while c < CONTACTS {
            if pins[r][c] > 1 {
                return false;
            }
            c += 1;
        }
        r += 1;
    }
    true
}

const _: () = assert!(rows_are_inverse(&WIRING_K3, &INVERSE_WIRING_K3));
const _: () = assert!(rows_are_inverse(&WIRING_FLIPPED_K3, &INVERSE_WIRING_FLIPPED_K3));
const _: () = assert!(pins_are_binary(&PIN_POSITIONS_K3));
const _: () = assert!(rows_are_inverse(&WIRING_K5, &INVERSE_WIRING_K5));
const _: () = assert!(rows_are_inverse(&WIRING_FLIPPED_K5, &INVERSE_WIRING_FLIPPED_K5));
const _: () = assert!(pins_are_binary(&PIN_POSITIONS_K5));
const _: () = assert!(rows_are_inverse(&WIRING_K6, &INVERSE_WIRING_K6));
const _: () = assert!(rows_are_inverse(&WIRING_FLIPPED_K6, &INVERSE_WIRING_FLIPPED_K6));
const _: () = assert!(pins_are_binary(&PIN_POSITIONS_K6));

const _: () = assert!(is_inverse_row(&fixed::KEYBOARD, &fixed::KEYBOARD_INVERSE));
const _: () = assert!(is_inverse_row(&fixed::ENTRY_DISK, &fixed::ENTRY_DISK_INVERSE));
const _: () = assert!(is_inverse_row(
    &fixed::REFLECTOR_ENCRYPT,
    &fixed::REFLECTOR_DECRYPT
));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_law_all_series() {
        for series in RotorSeries::ALL {
            let t = tables_for(series);
            for r in 0..ROTORS {
                for x in 0..CONTACTS {
                    let y = t.wiring[r][x] as usize;
                    assert_eq!(t.inverse_wiring[r][y] as usize, x, "{series:?} row {r}");
                    let y = t.wiring_flipped[r][x] as usize;
                    assert_eq!(
                        t.inverse_wiring_flipped[r][y] as usize,
                        x,
                        "{series:?} flipped row {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_series_are_distinct() {
        let k3 = tables_for(RotorSeries::K3);
        let k5 = tables_for(RotorSeries::K5);
        let k6 = tables_for(RotorSeries::K6);
        assert_ne!(k3.wiring, k5.wiring);
        assert_ne!(k5.wiring, k6.wiring);
        assert_ne!(k3.pin_positions, k6.pin_positions);
    }

    #[test]
    fn test_has_pin() {
        let t = tables_for(RotorSeries::K6);
        // First row of the 6K pin matrix starts 1, 1, 1, 0.
        assert!(t.has_pin(0, 0));
        assert!(t.has_pin(0, 2));
        assert!(!t.has_pin(0, 3));
    }

    #[test]
    fn test_reflector_is_not_an_involution() {
        let reflector = &fixed::REFLECTOR_ENCRYPT;
        let broken = (0..CONTACTS)
            .filter(|&x| reflector[reflector[x] as usize] as usize != x)
            .count();
        assert_eq!(broken, 3, "only the 3-cycle breaks the involution");
    }

    #[test]
    fn test_numlock10_redirects_cover_inactive_contacts() {
        for x in 0..CONTACTS as u8 {
            let active = fixed::NUMLOCK10_REFLECTOR_ACTIVE.contains(&x);
            assert_eq!(
                fixed::NUMLOCK10_REFLECTOR_TO_PUNCH_CARD[x as usize].is_none(),
                active
            );
            let active = fixed::NUMLOCK10_KEYBOARD_ACTIVE.contains(&x);
            assert_eq!(
                fixed::NUMLOCK10_PUNCH_CARD_TO_REFLECTOR[x as usize].is_none(),
                active
            );
        }
    }

    #[test]
    fn test_wiring_accessors() {
        let t = tables_for(RotorSeries::K3);
        for x in 0..CONTACTS {
            assert_eq!(t.wiring(7, x), t.wiring[7][x]);
            assert_eq!(t.inverse_wiring(7, t.wiring(7, x) as usize) as usize, x);
        }
    }

    #[test]
    fn test_default_series_is_6k() {
        assert_eq!(RotorSeries::default(), RotorSeries::K6);
        assert_eq!(RotorSeries::K6.tables(), tables_for(RotorSeries::K6));
    }
}
