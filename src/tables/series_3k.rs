//! Wiring and blocking-pin data of the 3K (ЗК) rotor series.
//!
//! Rows are indexed by physical rotor (core) number 0..9, columns by contact.

use super::{PinMatrix, Wiring};

/// Core wiring, normal side, entry disk towards reflector.
#[rustfmt::skip]
pub(crate) const WIRING_K3: Wiring = [
    [22, 21, 2, 6, 3, 7, 15, 5, 9, 19, 14, 16, 23, 8, 29, 11, 24, 10, 0, 27, 26, 4, 28, 25, 1, 17, 20, 13, 12, 18],
    [2, 23, 19, 1, 5, 20, 25, 6, 17, 3, 16, 22, 14, 18, 9, 29, 12, 27, 28, 10, 8, 24, 0, 13, 21, 7, 26, 4, 11, 15],
    [19, 4, 6, 14, 20, 26, 3, 0, 21, 16, 22, 12, 29, 5, 25, 9, 15, 13, 18, 17, 28, 23, 2, 11, 8, 10, 1, 27, 7, 24],
    [15, 20, 27, 10, 26, 2, 14, 11, 23, 29, 8, 16, 3, 19, 24, 7, 0, 28, 18, 17, 13, 9, 4, 22, 25, 6, 5, 21, 1, 12],
    [17, 14, 0, 21, 18, 15, 28, 7, 16, 3, 2, 13, 5, 29, 22, 4, 25, 12, 24, 9, 11, 20, 26, 19, 6, 10, 23, 8, 1, 27],
    [8, 13, 12, 19, 23, 7, 1, 5, 4, 18, 10, 27, 29, 2, 17, 14, 6, 24, 15, 0, 11, 22, 26, 28, 16, 9, 20, 3, 21, 25],
    [6, 8, 4, 25, 5, 3, 18, 2, 7, 27, 21, 11, 20, 23, 22, 9, 12, 0, 15, 28, 1, 24, 26, 14, 17, 10, 13, 16, 29, 19],
    [28, 26, 14, 12, 7, 1, 24, 11, 5, 22, 8, 17, 23, 0, 13, 20, 16, 9, 2, 10, 21, 6, 15, 3, 18, 25, 4, 29, 27, 19],
    [4, 18, 1, 26, 19, 25, 6, 10, 15, 17, 2, 12, 3, 22, 27, 20, 5, 23, 28, 29, 14, 16, 8, 11, 7, 21, 24, 9, 0, 13],
    [19, 23, 7, 24, 18, 0, 16, 4, 14, 26, 8, 11, 21, 9, 17, 2, 15, 29, 3, 13, 6, 22, 10, 1, 28, 25, 27, 20, 5, 12],
];

#[rustfmt::skip]
pub(crate) const INVERSE_WIRING_K3: Wiring = [
    [18, 24, 2, 4, 21, 7, 3, 5, 13, 8, 17, 15, 28, 27, 10, 6, 11, 25, 29, 9, 26, 1, 0, 12, 16, 23, 20, 19, 22, 14],
    [22, 3, 0, 9, 27, 4, 7, 25, 20, 14, 19, 28, 16, 23, 12, 29, 10, 8, 13, 2, 5, 24, 11, 1, 21, 6, 26, 17, 18, 15],
    [7, 26, 22, 6, 1, 13, 2, 28, 24, 15, 25, 23, 11, 17, 3, 16, 9, 19, 18, 0, 4, 8, 10, 21, 29, 14, 5, 27, 20, 12],
    [16, 28, 5, 12, 22, 26, 25, 15, 10, 21, 3, 7, 29, 20, 6, 0, 11, 19, 18, 13, 1, 27, 23, 8, 14, 24, 4, 2, 17, 9],
    [2, 28, 10, 9, 15, 12, 24, 7, 27, 19, 25, 20, 17, 11, 1, 5, 8, 0, 4, 23, 21, 3, 14, 26, 18, 16, 22, 29, 6, 13],
    [19, 6, 13, 27, 8, 7, 16, 5, 0, 25, 10, 20, 2, 1, 15, 18, 24, 14, 9, 3, 26, 28, 21, 4, 17, 29, 22, 11, 23, 12],
    [17, 20, 7, 5, 2, 4, 0, 8, 1, 15, 25, 11, 16, 26, 23, 18, 27, 24, 6, 29, 12, 10, 14, 13, 21, 3, 22, 9, 19, 28],
    [13, 5, 18, 23, 26, 8, 21, 4, 10, 17, 19, 7, 3, 14, 2, 22, 16, 11, 24, 29, 15, 20, 9, 12, 6, 25, 1, 28, 0, 27],
    [28, 2, 10, 12, 0, 16, 6, 24, 22, 27, 7, 23, 11, 29, 20, 8, 21, 9, 1, 4, 15, 25, 13, 17, 26, 5, 3, 14, 18, 19],
    [5, 23, 15, 18, 7, 28, 20, 2, 10, 13, 22, 11, 29, 19, 8, 16, 6, 14, 4, 0, 27, 12, 21, 1, 3, 25, 9, 26, 24, 17],
];

/// Blocking pins (1 = pin present) per rotor shell and contact.
#[rustfmt::skip]
pub(crate) const PIN_POSITIONS_K3: PinMatrix = [
    [0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0],
    [0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0],
    [1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    [0, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1],
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0],
    [0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 1, 0],
];

/// Core wiring with the core inserted flipped (PROTON II).
#[rustfmt::skip]
pub(crate) const WIRING_FLIPPED_K3: Wiring = [
    [8, 12, 18, 17, 10, 13, 29, 5, 2, 26, 4, 3, 0, 20, 6, 19, 1, 22, 7, 14, 16, 11, 21, 25, 15, 23, 27, 24, 28, 9],
    [28, 15, 19, 26, 4, 23, 9, 17, 0, 6, 22, 20, 2, 3, 18, 1, 21, 12, 16, 8, 14, 27, 13, 24, 5, 10, 25, 29, 11, 7],
    [11, 6, 23, 3, 29, 20, 22, 19, 28, 7, 2, 13, 12, 17, 15, 21, 5, 25, 1, 18, 8, 14, 9, 0, 27, 4, 10, 16, 24, 26],
    [15, 18, 29, 9, 25, 24, 5, 8, 26, 21, 17, 13, 12, 2, 0, 23, 6, 11, 27, 14, 22, 1, 7, 19, 16, 28, 4, 20, 3, 10],
    [13, 3, 29, 22, 7, 20, 24, 11, 4, 10, 19, 21, 6, 18, 5, 26, 8, 1, 25, 17, 28, 27, 14, 23, 2, 15, 12, 9, 0, 16],
    [22, 5, 9, 27, 10, 21, 14, 2, 4, 8, 19, 0, 15, 6, 24, 16, 13, 28, 1, 3, 20, 12, 26, 25, 29, 23, 7, 11, 18, 17],
    [24, 11, 1, 14, 17, 20, 13, 16, 4, 6, 29, 2, 15, 0, 18, 21, 8, 7, 10, 19, 9, 3, 23, 28, 12, 27, 25, 5, 26, 22],
    [2, 11, 3, 1, 26, 5, 12, 27, 15, 24, 9, 20, 28, 21, 14, 10, 17, 0, 7, 13, 22, 8, 25, 19, 6, 29, 23, 18, 16, 4],
    [26, 17, 0, 21, 6, 9, 23, 19, 22, 14, 16, 1, 2, 7, 25, 10, 3, 8, 27, 18, 28, 13, 15, 20, 24, 5, 11, 4, 29, 12],
    [11, 18, 25, 10, 3, 5, 2, 29, 20, 8, 24, 17, 27, 1, 15, 28, 13, 21, 9, 19, 22, 4, 16, 26, 14, 0, 12, 6, 23, 7],
];

#[rustfmt::skip]
pub(crate) const INVERSE_WIRING_FLIPPED_K3: Wiring = [
    [12, 16, 8, 11, 10, 7, 14, 18, 0, 29, 4, 21, 1, 5, 19, 24, 20, 3, 2, 15, 13, 22, 17, 25, 27, 23, 9, 26, 28, 6],
    [8, 15, 12, 13, 4, 24, 9, 29, 19, 6, 25, 28, 17, 22, 20, 1, 18, 7, 14, 2, 11, 16, 10, 5, 23, 26, 3, 21, 0, 27],
    [23, 18, 10, 3, 25, 16, 1, 9, 20, 22, 26, 0, 12, 11, 21, 14, 27, 13, 19, 7, 5, 15, 6, 2, 28, 17, 29, 24, 8, 4],
    [14, 21, 13, 28, 26, 6, 16, 22, 7, 3, 29, 17, 12, 11, 19, 0, 24, 10, 1, 23, 27, 9, 20, 15, 5, 4, 8, 18, 25, 2],
    [28, 17, 24, 1, 8, 14, 12, 4, 16, 27, 9, 7, 26, 0, 22, 25, 29, 19, 13, 10, 5, 11, 3, 23, 6, 18, 15, 21, 20, 2],
    [11, 18, 7, 19, 8, 1, 13, 26, 9, 2, 4, 27, 21, 16, 6, 12, 15, 29, 28, 10, 20, 5, 0, 25, 14, 23, 22, 3, 17, 24],
    [13, 2, 11, 21, 8, 27, 9, 17, 16, 20, 18, 1, 24, 6, 3, 12, 7, 4, 14, 19, 5, 15, 29, 22, 0, 26, 28, 25, 23, 10],
    [17, 3, 0, 2, 29, 5, 24, 18, 21, 10, 15, 1, 6, 19, 14, 8, 28, 16, 27, 23, 11, 13, 20, 26, 9, 22, 4, 7, 12, 25],
    [2, 11, 12, 16, 27, 25, 4, 13, 17, 5, 15, 26, 29, 21, 9, 22, 10, 1, 19, 7, 23, 3, 8, 6, 24, 14, 0, 18, 20, 28],
    [25, 13, 6, 4, 21, 5, 27, 29, 9, 18, 3, 0, 26, 16, 24, 14, 22, 11, 1, 19, 8, 17, 20, 28, 10, 2, 23, 12, 15, 7],
];
