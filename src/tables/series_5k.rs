//! Wiring and blocking-pin data of the 5K (5К) rotor series.
//!
//! Rows are indexed by physical rotor (core) number 0..9, columns by contact.
//! The side-1 / side-2 core wirings follow the Crypto Museum M-125-3 (HU)
//! listing, not the swapped sides found in some software simulators.

use super::{PinMatrix, Wiring};

/// Core wiring, normal side, entry disk towards reflector.
#[rustfmt::skip]
pub(crate) const WIRING_K5: Wiring = [
    [12, 10, 9, 14, 0, 19, 23, 1, 3, 8, 26, 16, 25, 2, 11, 7, 4, 15, 18, 21, 22, 27, 13, 24, 17, 5, 29, 28, 6, 20],
    [5, 18, 21, 0, 20, 12, 27, 25, 29, 9, 8, 6, 11, 22, 16, 23, 24, 7, 19, 15, 3, 1, 14, 4, 17, 28, 2, 26, 10, 13],
    [24, 14, 27, 6, 18, 17, 13, 9, 23, 5, 15, 8, 3, 19, 2, 26, 21, 4, 7, 28, 0, 11, 20, 22, 16, 25, 12, 1, 29, 10],
    [22, 2, 23, 12, 3, 25, 17, 14, 10, 5, 28, 21, 24, 6, 8, 20, 19, 1, 13, 16, 18, 29, 7, 9, 11, 0, 15, 27, 4, 26],
    [15, 21, 8, 1, 5, 4, 0, 11, 3, 16, 13, 20, 17, 14, 27, 26, 7, 10, 28, 2, 24, 9, 18, 25, 22, 12, 23, 19, 6, 29],
    [9, 5, 7, 19, 22, 26, 25, 3, 28, 17, 16, 20, 23, 10, 13, 27, 0, 4, 12, 11, 21, 2, 15, 18, 6, 8, 24, 29, 1, 14],
    [20, 29, 25, 2, 15, 27, 19, 8, 24, 0, 6, 16, 9, 5, 26, 22, 11, 1, 21, 23, 13, 10, 7, 3, 18, 4, 12, 14, 28, 17],
    [23, 16, 10, 19, 29, 28, 18, 9, 6, 20, 5, 17, 1, 0, 4, 12, 26, 11, 14, 24, 3, 22, 13, 27, 8, 2, 25, 15, 7, 21],
    [16, 8, 1, 3, 19, 26, 15, 9, 20, 6, 14, 28, 25, 24, 17, 13, 10, 29, 21, 11, 27, 22, 12, 7, 0, 5, 4, 2, 23, 18],
    [1, 11, 4, 7, 12, 28, 9, 18, 24, 23, 15, 6, 21, 26, 25, 27, 29, 5, 3, 8, 10, 17, 16, 22, 0, 2, 13, 19, 14, 20],
];

#[rustfmt::skip]
pub(crate) const INVERSE_WIRING_K5: Wiring = [
    [4, 7, 13, 8, 16, 25, 28, 15, 9, 2, 1, 14, 0, 22, 3, 17, 11, 24, 18, 5, 29, 19, 20, 6, 23, 12, 10, 21, 27, 26],
    [3, 21, 26, 20, 23, 0, 11, 17, 10, 9, 28, 12, 5, 29, 22, 19, 14, 24, 1, 18, 4, 2, 13, 15, 16, 7, 27, 6, 25, 8],
    [20, 27, 14, 12, 17, 9, 3, 18, 11, 7, 29, 21, 26, 6, 1, 10, 24, 5, 4, 13, 22, 16, 23, 8, 0, 25, 15, 2, 19, 28],
    [25, 17, 1, 4, 28, 9, 13, 22, 14, 23, 8, 24, 3, 18, 7, 26, 19, 6, 20, 16, 15, 11, 0, 2, 12, 5, 29, 27, 10, 21],
    [6, 3, 19, 8, 5, 4, 28, 16, 2, 21, 17, 7, 25, 10, 13, 0, 9, 12, 22, 27, 11, 1, 24, 26, 20, 23, 15, 14, 18, 29],
    [16, 28, 21, 7, 17, 1, 24, 2, 25, 0, 13, 19, 18, 14, 29, 22, 10, 9, 23, 3, 11, 20, 4, 12, 26, 6, 5, 15, 8, 27],
    [9, 17, 3, 23, 25, 13, 10, 22, 7, 12, 21, 16, 26, 20, 27, 4, 11, 29, 24, 6, 0, 18, 15, 19, 8, 2, 14, 5, 28, 1],
    [13, 12, 25, 20, 14, 10, 8, 28, 24, 7, 2, 17, 15, 22, 18, 27, 1, 11, 6, 3, 9, 29, 21, 0, 19, 26, 16, 23, 5, 4],
    [24, 2, 27, 3, 26, 25, 9, 23, 1, 7, 16, 19, 22, 15, 10, 6, 0, 14, 29, 4, 8, 18, 21, 28, 13, 12, 5, 20, 11, 17],
    [24, 0, 25, 18, 2, 17, 11, 3, 19, 6, 20, 1, 4, 26, 28, 10, 22, 21, 7, 27, 29, 12, 23, 9, 8, 14, 13, 15, 5, 16],
];

/// Blocking pins (1 = pin present) per rotor shell and contact.
#[rustfmt::skip]
pub(crate) const PIN_POSITIONS_K5: PinMatrix = [
    [1, 1, 1, 1, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 0],
    [1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 1],
    [1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 0],
    [0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 1, 1, 0, 0, 1, 0, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 1],
];

/// Core wiring with the core inserted flipped (PROTON II).
#[rustfmt::skip]
pub(crate) const WIRING_FLIPPED_K5: Wiring = [
    [18, 10, 24, 2, 1, 25, 13, 6, 17, 3, 8, 9, 12, 15, 26, 23, 19, 28, 5, 14, 4, 22, 27, 29, 7, 11, 0, 16, 21, 20],
    [25, 17, 20, 4, 28, 2, 13, 26, 16, 29, 27, 15, 11, 23, 6, 7, 14, 8, 19, 24, 22, 21, 1, 5, 3, 18, 10, 0, 9, 12],
    [6, 20, 1, 29, 18, 5, 14, 8, 10, 19, 0, 2, 23, 26, 9, 4, 28, 11, 27, 22, 15, 25, 7, 21, 17, 13, 12, 24, 3, 16],
    [8, 4, 26, 3, 15, 0, 19, 21, 23, 1, 12, 14, 17, 29, 11, 10, 22, 24, 6, 9, 2, 25, 20, 16, 13, 5, 27, 18, 7, 28],
    [15, 1, 24, 11, 7, 18, 8, 5, 12, 21, 6, 28, 2, 20, 23, 4, 3, 16, 13, 10, 17, 14, 27, 19, 0, 26, 25, 29, 22, 9],
    [21, 16, 29, 1, 6, 22, 24, 12, 15, 28, 9, 19, 18, 26, 0, 3, 17, 20, 7, 10, 14, 13, 2, 27, 5, 4, 8, 11, 23, 25],
    [10, 13, 2, 16, 18, 26, 12, 27, 23, 20, 17, 7, 9, 29, 19, 8, 4, 25, 21, 14, 24, 0, 6, 22, 11, 3, 15, 28, 5, 1],
    [7, 9, 23, 15, 5, 28, 22, 3, 17, 8, 27, 6, 16, 19, 4, 18, 26, 0, 29, 13, 25, 10, 24, 21, 12, 2, 1, 11, 20, 14],
    [14, 12, 7, 28, 26, 25, 0, 23, 18, 8, 3, 19, 9, 1, 20, 17, 13, 6, 5, 2, 16, 24, 10, 21, 15, 4, 11, 27, 29, 22],
    [29, 10, 16, 11, 17, 28, 0, 8, 14, 13, 20, 22, 27, 25, 1, 3, 5, 4, 9, 24, 15, 7, 6, 12, 21, 2, 18, 23, 26, 19],
];

#[rustfmt::skip]
pub(crate) const INVERSE_WIRING_FLIPPED_K5: Wiring = [
    [26, 4, 3, 9, 20, 18, 7, 24, 10, 11, 1, 25, 12, 6, 19, 13, 27, 8, 0, 16, 29, 28, 21, 15, 2, 5, 14, 22, 17, 23],
    [27, 22, 5, 24, 3, 23, 14, 15, 17, 28, 26, 12, 29, 6, 16, 11, 8, 1, 25, 18, 2, 21, 20, 13, 19, 0, 7, 10, 4, 9],
    [10, 2, 11, 28, 15, 5, 0, 22, 7, 14, 8, 17, 26, 25, 6, 20, 29, 24, 4, 9, 1, 23, 19, 12, 27, 21, 13, 18, 16, 3],
    [5, 9, 20, 3, 1, 25, 18, 28, 0, 19, 15, 14, 10, 24, 11, 4, 23, 12, 27, 6, 22, 7, 16, 8, 17, 21, 2, 26, 29, 13],
    [24, 1, 12, 16, 15, 7, 10, 4, 6, 29, 19, 3, 8, 18, 21, 0, 17, 20, 5, 23, 13, 9, 28, 14, 2, 26, 25, 22, 11, 27],
    [14, 3, 22, 15, 25, 24, 4, 18, 26, 10, 19, 27, 7, 21, 20, 8, 1, 16, 12, 11, 17, 0, 5, 28, 6, 29, 13, 23, 9, 2],
    [21, 29, 2, 25, 16, 28, 22, 11, 15, 12, 0, 24, 6, 1, 19, 26, 3, 10, 4, 14, 9, 18, 23, 8, 20, 17, 5, 7, 27, 13],
    [17, 26, 25, 7, 14, 4, 11, 0, 9, 1, 21, 27, 24, 19, 29, 3, 12, 8, 15, 13, 28, 23, 6, 2, 22, 20, 16, 10, 5, 18],
    [6, 13, 19, 10, 25, 18, 17, 2, 9, 12, 22, 26, 1, 16, 0, 24, 20, 15, 8, 11, 14, 23, 29, 7, 21, 5, 4, 27, 3, 28],
    [6, 14, 25, 15, 17, 16, 22, 21, 7, 18, 1, 3, 23, 9, 8, 20, 2, 4, 26, 29, 10, 24, 11, 27, 19, 13, 28, 12, 5, 0],
];
