//! Error types for the Fialka library.
//!
//! An out-of-range contact handed to the permutation network is a caller
//! bug and panics; it has no variant here.

use std::fmt;

use thiserror::Error;

/// Rejected configuration change. The configuration keeps its prior state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Array has the wrong number of elements.
    #[error("{field} must have {expected} elements, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Array repeats a value and therefore is not a permutation.
    #[error("{field} is not a permutation")]
    NotAPermutation { field: &'static str },
    /// Element is outside `0..bound`.
    #[error("{field}[{index}] = {value} is out of range 0..{bound}")]
    ValueOutOfRange {
        field: &'static str,
        index: usize,
        value: u8,
        bound: usize,
    },
    /// Core orientation other than `1` (normal side) or `-1` (flipped).
    #[error("core orientation [{index}] = {value} must be 1 or -1")]
    InvalidCoreOrientation { index: usize, value: i8 },
    /// The M-125 has no 10-contact numeric mode.
    #[error("NumLock10 is only available on the M-125-3")]
    NumLock10RequiresM125_3,
    /// Core order, orientation and offsets only exist on PROTON II rotors.
    #[error("core settings require PROTON II rotors")]
    CoreSettingsRequireProtonII,
    /// Externally supplied NumLock10 wiring has the wrong shape.
    #[error("malformed NumLock10 wiring: {reason}")]
    MalformedNumLock10Wiring { reason: String },
}

/// Which of the two NumLock10 loops failed to terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopStage {
    /// Punch card to reflector, looking for an active reflector contact.
    ReflectorSide,
    /// Reflector to punch card, looking for an active keyboard contact.
    KeyboardSide,
}

impl fmt::Display for LoopStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopStage::ReflectorSide => write!(f, "reflector-side"),
            LoopStage::KeyboardSide => write!(f, "keyboard-side"),
        }
    }
}

/// Errors produced by the Fialka library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FialkaError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// A NumLock10 loop did not reach an active contact within its bound.
    #[error("{stage} NumLock10 loop found no active contact after {iterations} passes")]
    UnreachableContact { stage: LoopStage, iterations: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_length() {
        let err = ConfigurationError::InvalidLength {
            field: "punch card",
            expected: 30,
            actual: 29,
        };
        assert_eq!(
            format!("{}", err),
            "punch card must have 30 elements, got 29"
        );
    }

    #[test]
    fn test_display_value_out_of_range() {
        let err = ConfigurationError::ValueOutOfRange {
            field: "ring offsets",
            index: 4,
            value: 31,
            bound: 30,
        };
        assert_eq!(
            format!("{}", err),
            "ring offsets[4] = 31 is out of range 0..30"
        );
    }

    #[test]
    fn test_display_core_orientation() {
        let err = ConfigurationError::InvalidCoreOrientation { index: 2, value: 0 };
        assert_eq!(
            format!("{}", err),
            "core orientation [2] = 0 must be 1 or -1"
        );
    }

    #[test]
    fn test_display_unreachable_contact() {
        let err = FialkaError::UnreachableContact {
            stage: LoopStage::KeyboardSide,
            iterations: 30,
        };
        assert_eq!(
            format!("{}", err),
            "keyboard-side NumLock10 loop found no active contact after 30 passes"
        );
    }

    #[test]
    fn test_configuration_error_is_transparent() {
        let err: FialkaError = ConfigurationError::NumLock10RequiresM125_3.into();
        assert_eq!(
            format!("{}", err),
            "NumLock10 is only available on the M-125-3"
        );
        assert_eq!(
            err,
            FialkaError::Configuration(ConfigurationError::NumLock10RequiresM125_3)
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ConfigurationError::CoreSettingsRequireProtonII,
            ConfigurationError::CoreSettingsRequireProtonII
        );
        assert_ne!(
            ConfigurationError::CoreSettingsRequireProtonII,
            ConfigurationError::NumLock10RequiresM125_3
        );
    }
}
