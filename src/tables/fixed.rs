//! Fixed wiring shared by every machine: keyboard, entry disk, reflector
//! and the NumLock10 rewiring of the M-125-3.

use super::CONTACTS;

/// Keyboard contact to punch-card input.
#[rustfmt::skip]
pub(crate) const KEYBOARD: [u8; CONTACTS] = [16, 24, 29, 13, 25, 20, 5, 18, 0, 14, 28, 19, 3, 27, 23, 1, 21, 22, 17, 11, 6, 4, 26, 7, 9, 8, 15, 12, 10, 2];

#[rustfmt::skip]
pub(crate) const KEYBOARD_INVERSE: [u8; CONTACTS] = [8, 15, 29, 12, 21, 6, 20, 23, 25, 24, 28, 19, 27, 3, 9, 26, 0, 18, 7, 11, 5, 16, 17, 14, 1, 4, 22, 13, 10, 2];

/// Punch-card output to the rightmost rotor.
#[rustfmt::skip]
pub(crate) const ENTRY_DISK: [u8; CONTACTS] = [27, 13, 19, 23, 1, 15, 0, 9, 20, 10, 16, 12, 18, 29, 4, 5, 7, 14, 22, 24, 26, 17, 2, 28, 25, 11, 21, 6, 8, 3];

#[rustfmt::skip]
pub(crate) const ENTRY_DISK_INVERSE: [u8; CONTACTS] = [6, 4, 22, 29, 14, 15, 27, 16, 28, 7, 9, 25, 11, 1, 17, 5, 10, 21, 12, 2, 8, 26, 18, 3, 19, 24, 20, 0, 23, 13];

/// Reflector as seen in encrypt mode. Contacts 15, 17 and 23 form a 3-cycle,
/// so the table is not an involution.
#[rustfmt::skip]
pub(crate) const REFLECTOR_ENCRYPT: [u8; CONTACTS] = [22, 5, 19, 27, 13, 1, 11, 16, 21, 10, 9, 6, 12, 4, 28, 17, 7, 23, 26, 2, 24, 8, 0, 15, 20, 29, 18, 3, 14, 25];

/// Reflector as seen in decrypt mode, the inverse of [`REFLECTOR_ENCRYPT`].
#[rustfmt::skip]
pub(crate) const REFLECTOR_DECRYPT: [u8; CONTACTS] = [22, 5, 19, 27, 13, 1, 11, 16, 21, 10, 9, 6, 12, 4, 28, 23, 7, 15, 26, 2, 24, 8, 0, 17, 20, 29, 18, 3, 14, 25];

/// Reflector contacts that are really reflected in NumLock10 mode
/// (reference manual p. 116). 12, 15, 17 and 23 belong to the 3-cycle circuit.
pub(crate) const NUMLOCK10_REFLECTOR_ACTIVE: [u8; 10] = [8, 9, 10, 12, 15, 17, 21, 23, 25, 29];

/// Punch-card reader contacts wired to the keyboard in NumLock10 mode
/// (reference manual p. 108).
pub(crate) const NUMLOCK10_KEYBOARD_ACTIVE: [u8; 10] = [1, 3, 6, 7, 13, 16, 17, 22, 23, 24];

/// Rewiring of a non-reflected reflector contact back into the punch card.
/// `None` marks the reflected contacts.
#[rustfmt::skip]
pub(crate) const NUMLOCK10_REFLECTOR_TO_PUNCH_CARD: [Option<u8>; CONTACTS] = [Some(9), Some(28), Some(8), Some(2), Some(27), Some(20), Some(21), Some(15), None, None, None, Some(12), None, Some(0), Some(19), None, Some(4), None, Some(29), Some(25), Some(5), None, Some(18), None, Some(14), None, Some(11), Some(26), Some(10), None];

/// Rewiring of a punch-card contact that is not wired to the keyboard back
/// into the reflector side. `None` marks the keyboard contacts.
#[rustfmt::skip]
pub(crate) const NUMLOCK10_PUNCH_CARD_TO_REFLECTOR: [Option<u8>; CONTACTS] = [Some(13), None, Some(3), None, Some(16), Some(20), None, None, Some(2), Some(0), Some(28), Some(26), Some(11), None, Some(24), Some(7), None, None, Some(22), Some(14), Some(5), Some(6), None, None, None, Some(19), Some(27), Some(4), Some(1), Some(18)];
