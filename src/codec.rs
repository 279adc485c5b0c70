//! Keyboard and print-head layouts.
//!
//! Translates printable characters to contacts and back. Each key carries
//! up to four symbols: Cyrillic letter, Cyrillic special, and a Latin letter
//! and special whose layout depends on the country. Which one applies is
//! chosen by the print head and its shift.

use serde::{Deserialize, Serialize};

use crate::config::{MachineConfiguration, MachineModel, NumLockType, OperationMode};
use crate::tables::CONTACTS;

/// Contact shared by the space bar and one letter key.
pub const SPACE_CONTACT: u8 = 29;

/// Contact that switches the print head to letters in Mixed mode.
pub const LETTER_SHIFT_CONTACT: u8 = 6;

/// Contact that switches the print head to numbers in Mixed mode.
pub const NUMBER_SHIFT_CONTACT: u8 = 19;

/// Printed in place of rejected input under [`InvalidInputPolicy::KeepAndMark`].
pub const INVALID_MARK: char = '@';

const CYRILLIC_LETTERS: &str = "АБВГДЕЖЗИКЛМНОПРСТУФХЦЧШЩЫЬЮЯЙ";
const CYRILLIC_SPECIAL: &str = "58-3Ж,[+ЙN%.4°97Ъ62]0:\"1=Ф/Э; ";
const POLAND_LETTERS: &str = "FADULT5PBRKVZJGHCNE7QWXIOSM8Y2";
const POLAND_SPECIAL: &str = "Ą%-6)4[9?3(=5+ĘŁ:,2]01/78Ž.°' ";
const CZECHOSLOVAKIA_LETTERS: &str = "FADULT5PBRKVZJGHCNE7QWXIOSM8Y2";
const CZECHOSLOVAKIA_SPECIAL: &str = "ŘÄČ6Ě4[9\"3Ö=5ÜŽ+:,2]01/78Š.%- ";
const GDR_LETTERS: &str = "F8DULT5PBRKVZ4GHCNEA327IOSM96J";
const GDR_SPECIAL: &str = "V:W6)4[9/3(X5JÄÜY,2]01F78Q.-Ö*";

/// Mixed-mode shortcuts for the two shift keys.
const LETTER_SHIFT_SHORTCUT: char = '[';
const NUMBER_SHIFT_SHORTCUT: char = ']';

/// Country of the Latin print head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CountryLayout {
    Poland,
    #[default]
    Czechoslovakia,
    Gdr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrintHead {
    Cyrillic,
    #[default]
    Latin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrintHeadShift {
    #[default]
    LetterShift,
    NumberShift,
}

/// Text operation mode of the M-125-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextMode {
    #[default]
    Letters,
    /// Letters and numbers, switched by the shift contacts.
    Mixed,
    Numbers,
}

impl TextMode {
    /// Print-head shift selected when this mode is switched on.
    pub fn initial_shift(self) -> PrintHeadShift {
        match self {
            TextMode::Letters | TextMode::Mixed => PrintHeadShift::LetterShift,
            TextMode::Numbers => PrintHeadShift::NumberShift,
        }
    }
}

/// What happens to characters outside the active character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvalidInputPolicy {
    #[default]
    Remove,
    /// Replace with [`INVALID_MARK`].
    KeepAndMark,
    /// Copy to the output as is.
    KeepUnchanged,
}

fn latin_row(country: CountryLayout, shift: PrintHeadShift) -> &'static str {
    match (country, shift) {
        (CountryLayout::Poland, PrintHeadShift::LetterShift) => POLAND_LETTERS,
        (CountryLayout::Poland, PrintHeadShift::NumberShift) => POLAND_SPECIAL,
        (CountryLayout::Czechoslovakia, PrintHeadShift::LetterShift) => CZECHOSLOVAKIA_LETTERS,
        (CountryLayout::Czechoslovakia, PrintHeadShift::NumberShift) => CZECHOSLOVAKIA_SPECIAL,
        (CountryLayout::Gdr, PrintHeadShift::LetterShift) => GDR_LETTERS,
        (CountryLayout::Gdr, PrintHeadShift::NumberShift) => GDR_SPECIAL,
    }
}

fn row(print_head: PrintHead, country: CountryLayout, shift: PrintHeadShift) -> &'static str {
    match (print_head, shift) {
        (PrintHead::Cyrillic, PrintHeadShift::LetterShift) => CYRILLIC_LETTERS,
        (PrintHead::Cyrillic, PrintHeadShift::NumberShift) => CYRILLIC_SPECIAL,
        (PrintHead::Latin, _) => latin_row(country, shift),
    }
}

fn position(row: &str, c: char) -> Option<u8> {
    row.chars().position(|r| r == c).map(|i| i as u8)
}

/// Keys that give up their contact to the space bar while encrypting.
fn shares_space_contact(print_head: PrintHead, country: CountryLayout, c: char) -> bool {
    match (print_head, country) {
        (PrintHead::Cyrillic, _) => c == 'Й',
        (PrintHead::Latin, CountryLayout::Gdr) => c == 'J' || c == '*',
        (PrintHead::Latin, _) => c == '2',
    }
}

/// Maps a typed character to its contact, or `None` if the machine in its
/// current state has no such key.
///
/// # Examples
///
/// ```
/// use fialka::codec::char_to_z30;
/// use fialka::MachineConfiguration;
///
/// let config = MachineConfiguration::default();
/// assert_eq!(char_to_z30(&config, 'a'), Some(1));
/// assert_eq!(char_to_z30(&config, ' '), Some(29));
/// assert_eq!(char_to_z30(&config, '2'), None);
/// ```
pub fn char_to_z30(config: &MachineConfiguration, c: char) -> Option<u8> {
    let mut upper = c.to_uppercase();
    let c = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => return None,
    };

    if config.numlock_type() == NumLockType::NumLock10 {
        return if c.is_ascii_digit() {
            position(CYRILLIC_SPECIAL, c)
        } else {
            None
        };
    }

    if c == ' ' {
        return match config.operation_mode() {
            OperationMode::Decrypt => None,
            OperationMode::Plain | OperationMode::Encrypt => Some(SPACE_CONTACT),
        };
    }
    if config.operation_mode() == OperationMode::Encrypt
        && shares_space_contact(config.print_head(), config.country_layout(), c)
    {
        return None;
    }

    let shift = match config.machine_model() {
        MachineModel::M125 => PrintHeadShift::LetterShift,
        MachineModel::M125_3 => {
            if config.text_mode() == TextMode::Mixed {
                match c {
                    LETTER_SHIFT_SHORTCUT => return Some(LETTER_SHIFT_CONTACT),
                    NUMBER_SHIFT_SHORTCUT => return Some(NUMBER_SHIFT_CONTACT),
                    _ => {}
                }
            }
            config.print_head_shift()
        }
    };
    position(row(config.print_head(), config.country_layout(), shift), c)
}

/// Character printed for contact `x`.
///
/// # Panics
/// Panics if `x >= 30`.
pub fn z30_to_char(config: &MachineConfiguration, x: u8) -> char {
    assert!(
        (x as usize) < CONTACTS,
        "contact {x} is outside the 30-contact domain"
    );
    if x == SPACE_CONTACT && config.operation_mode() == OperationMode::Decrypt {
        return ' ';
    }
    row(
        config.print_head(),
        config.country_layout(),
        config.print_head_shift(),
    )
    .chars()
    .nth(x as usize)
    .unwrap_or(INVALID_MARK)
}

/// Follows the shift keys in Mixed mode.
///
/// The typed contact decides while encrypting (and in Plain mode), the
/// printed contact while decrypting.
pub fn track_mixed_shift(config: &mut MachineConfiguration, input: u8, output: u8) {
    if config.text_mode() != TextMode::Mixed {
        return;
    }
    let key = match config.operation_mode() {
        OperationMode::Plain | OperationMode::Encrypt => input,
        OperationMode::Decrypt => output,
    };
    match key {
        LETTER_SHIFT_CONTACT => config.set_print_head_shift(PrintHeadShift::LetterShift),
        NUMBER_SHIFT_CONTACT => config.set_print_head_shift(PrintHeadShift::NumberShift),
        _ => {}
    }
}
