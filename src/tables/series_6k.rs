//! Wiring and blocking-pin data of the 6K (6К) rotor series.
//!
//! Rows are indexed by physical rotor (core) number 0..9, columns by contact.

use super::{PinMatrix, Wiring};

/// Core wiring, normal side, entry disk towards reflector.
#[rustfmt::skip]
pub(crate) const WIRING_K6: Wiring = [
    [12, 21, 7, 17, 19, 11, 27, 3, 14, 26, 2, 4, 15, 13, 22, 25, 0, 24, 16, 10, 29, 9, 23, 6, 5, 20, 28, 1, 8, 18],
    [19, 7, 4, 14, 3, 27, 20, 0, 23, 12, 28, 11, 13, 22, 24, 6, 8, 29, 26, 2, 10, 17, 16, 18, 21, 9, 1, 25, 5, 15],
    [28, 10, 3, 21, 23, 15, 17, 1, 22, 2, 16, 7, 19, 4, 27, 11, 14, 25, 29, 6, 20, 18, 12, 9, 26, 24, 8, 0, 13, 5],
    [3, 11, 18, 28, 23, 22, 6, 29, 14, 0, 19, 13, 17, 1, 15, 26, 9, 24, 16, 27, 5, 20, 10, 7, 21, 4, 8, 2, 25, 12],
    [17, 1, 14, 6, 19, 27, 7, 12, 22, 11, 18, 26, 3, 23, 9, 13, 10, 5, 29, 2, 16, 25, 21, 0, 28, 24, 15, 20, 4, 8],
    [15, 3, 13, 23, 22, 18, 29, 2, 0, 7, 26, 12, 8, 4, 28, 9, 14, 25, 21, 6, 24, 16, 19, 10, 1, 5, 20, 27, 17, 11],
    [25, 22, 6, 4, 12, 7, 23, 29, 28, 19, 21, 8, 11, 9, 24, 15, 2, 20, 18, 17, 3, 0, 27, 26, 5, 1, 14, 16, 10, 13],
    [15, 21, 13, 29, 23, 14, 16, 19, 3, 6, 26, 11, 5, 12, 24, 20, 0, 4, 25, 7, 10, 22, 28, 27, 2, 17, 9, 18, 1, 8],
    [11, 0, 16, 28, 5, 3, 6, 10, 14, 2, 20, 24, 8, 25, 29, 12, 21, 19, 9, 23, 26, 13, 27, 22, 1, 4, 18, 17, 15, 7],
    [8, 20, 7, 15, 24, 4, 19, 21, 3, 26, 13, 18, 0, 14, 29, 1, 9, 16, 6, 23, 11, 17, 28, 2, 22, 5, 12, 27, 25, 10],
];

#[rustfmt::skip]
pub(crate) const INVERSE_WIRING_K6: Wiring = [
    [16, 27, 10, 7, 11, 24, 23, 2, 28, 21, 19, 5, 0, 13, 8, 12, 18, 3, 29, 4, 25, 1, 14, 22, 17, 15, 9, 6, 26, 20],
    [7, 26, 19, 4, 2, 28, 15, 1, 16, 25, 20, 11, 9, 12, 3, 29, 22, 21, 23, 0, 6, 24, 13, 8, 14, 27, 18, 5, 10, 17],
    [27, 7, 9, 2, 13, 29, 19, 11, 26, 23, 1, 15, 22, 28, 16, 5, 10, 6, 21, 12, 20, 3, 8, 4, 25, 17, 24, 14, 0, 18],
    [9, 13, 27, 0, 25, 20, 6, 23, 26, 16, 22, 1, 29, 11, 8, 14, 18, 12, 2, 10, 21, 24, 5, 4, 17, 28, 15, 19, 3, 7],
    [23, 1, 19, 12, 28, 17, 3, 6, 29, 14, 16, 9, 7, 15, 2, 26, 20, 0, 10, 4, 27, 22, 8, 13, 25, 21, 11, 5, 24, 18],
    [8, 24, 7, 1, 13, 25, 19, 9, 12, 15, 23, 29, 11, 2, 16, 0, 21, 28, 5, 22, 26, 18, 4, 3, 20, 17, 10, 27, 14, 6],
    [21, 25, 16, 20, 3, 24, 2, 5, 11, 13, 28, 12, 4, 29, 26, 15, 27, 19, 18, 9, 17, 10, 1, 6, 14, 0, 23, 22, 8, 7],
    [16, 28, 24, 8, 17, 12, 9, 19, 29, 26, 20, 11, 13, 2, 5, 0, 6, 25, 27, 7, 15, 1, 21, 4, 14, 18, 10, 23, 22, 3],
    [1, 24, 9, 5, 25, 4, 6, 29, 12, 18, 7, 0, 15, 21, 8, 28, 2, 27, 26, 17, 10, 16, 23, 19, 11, 13, 20, 22, 3, 14],
    [12, 15, 23, 8, 5, 25, 18, 2, 0, 16, 29, 20, 26, 10, 13, 3, 17, 21, 11, 6, 1, 7, 24, 19, 4, 28, 9, 27, 22, 14],
];

/// Blocking pins (1 = pin present) per rotor shell and contact.
#[rustfmt::skip]
pub(crate) const PIN_POSITIONS_K6: PinMatrix = [
    [1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1],
    [0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0],
    [1, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 1],
    [0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0],
    [0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1],
    [0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1, 1],
];

/// Core wiring with the core inserted flipped (PROTON II).
#[rustfmt::skip]
pub(crate) const WIRING_FLIPPED_K6: Wiring = [
    [18, 12, 22, 29, 2, 10, 25, 24, 7, 21, 1, 20, 14, 6, 0, 5, 8, 17, 15, 26, 28, 4, 16, 27, 3, 19, 11, 13, 23, 9],
    [11, 15, 25, 5, 29, 21, 9, 12, 14, 13, 20, 28, 4, 1, 22, 24, 6, 8, 17, 19, 2, 18, 7, 0, 10, 3, 27, 16, 26, 23],
    [2, 25, 17, 0, 22, 6, 4, 21, 18, 12, 10, 24, 1, 5, 16, 19, 3, 26, 11, 23, 14, 28, 8, 29, 13, 15, 7, 9, 27, 20],
    [27, 18, 5, 28, 22, 26, 9, 23, 20, 10, 25, 3, 14, 6, 21, 4, 15, 29, 13, 17, 11, 0, 16, 1, 24, 8, 7, 2, 12, 19],
    [13, 22, 26, 10, 15, 6, 2, 0, 9, 5, 14, 28, 1, 25, 20, 17, 21, 7, 27, 4, 12, 19, 8, 18, 23, 3, 11, 24, 16, 29],
    [15, 19, 13, 3, 10, 25, 29, 20, 11, 14, 6, 24, 9, 5, 16, 21, 2, 26, 22, 18, 4, 23, 0, 28, 1, 12, 8, 7, 17, 27],
    [5, 17, 20, 14, 16, 29, 25, 4, 3, 0, 27, 13, 12, 10, 28, 15, 6, 21, 19, 22, 9, 11, 2, 1, 7, 23, 18, 26, 24, 8],
    [15, 22, 29, 12, 21, 13, 28, 3, 2, 8, 20, 23, 5, 26, 0, 10, 6, 18, 25, 19, 4, 24, 27, 11, 14, 16, 7, 1, 17, 9],
    [19, 23, 15, 13, 12, 26, 29, 8, 3, 17, 4, 7, 21, 11, 9, 18, 1, 5, 22, 6, 10, 28, 16, 20, 24, 27, 25, 2, 14, 0],
    [22, 20, 5, 3, 18, 25, 8, 28, 2, 13, 19, 7, 24, 14, 21, 29, 1, 16, 0, 12, 17, 4, 27, 9, 11, 26, 6, 15, 23, 10],
];

#[rustfmt::skip]
pub(crate) const INVERSE_WIRING_FLIPPED_K6: Wiring = [
    [14, 10, 4, 24, 21, 15, 13, 8, 16, 29, 5, 26, 1, 27, 12, 18, 22, 17, 0, 25, 11, 9, 2, 28, 7, 6, 19, 23, 20, 3],
    [23, 13, 20, 25, 12, 3, 16, 22, 17, 6, 24, 0, 7, 9, 8, 1, 27, 18, 21, 19, 10, 5, 14, 29, 15, 2, 28, 26, 11, 4],
    [3, 12, 0, 16, 6, 13, 5, 26, 22, 27, 10, 18, 9, 24, 20, 25, 14, 2, 8, 15, 29, 7, 4, 19, 11, 1, 17, 28, 21, 23],
    [21, 23, 27, 11, 15, 2, 13, 26, 25, 6, 9, 20, 28, 18, 12, 16, 22, 19, 1, 29, 8, 14, 4, 7, 24, 10, 5, 0, 3, 17],
    [7, 12, 6, 25, 19, 9, 5, 17, 22, 8, 3, 26, 20, 0, 10, 4, 28, 15, 23, 21, 14, 16, 1, 24, 27, 13, 2, 18, 11, 29],
    [22, 24, 16, 3, 20, 13, 10, 27, 26, 12, 4, 8, 25, 2, 9, 0, 14, 28, 19, 1, 7, 15, 18, 21, 11, 5, 17, 29, 23, 6],
    [9, 23, 22, 8, 7, 0, 16, 24, 29, 20, 13, 21, 12, 11, 3, 15, 4, 1, 26, 18, 2, 17, 19, 25, 28, 6, 27, 10, 14, 5],
    [14, 27, 8, 7, 20, 12, 16, 26, 9, 29, 15, 23, 3, 5, 24, 0, 25, 28, 17, 19, 10, 4, 1, 11, 21, 18, 13, 22, 6, 2],
    [29, 16, 27, 8, 10, 17, 19, 11, 7, 14, 20, 13, 4, 3, 28, 2, 22, 9, 15, 0, 23, 12, 18, 1, 24, 26, 5, 25, 21, 6],
    [18, 16, 8, 3, 21, 2, 26, 11, 6, 23, 29, 24, 19, 9, 13, 27, 17, 20, 4, 10, 1, 14, 0, 28, 12, 5, 25, 22, 7, 15],
];
