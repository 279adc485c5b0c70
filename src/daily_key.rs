//! Daily key exchange shape.
//!
//! A [`DailyKey`] can only be built from valid parts: the constructors and
//! the serde `Deserialize` impl both run the same checks as the
//! configuration setters.

use serde::{Deserialize, Serialize};

use crate::config::{core_sides_from_signs, CoreSide};
use crate::error::ConfigurationError;
use crate::tables::{CONTACTS, ROTORS};
use crate::utils::permutation::{in_range, permutation};

/// Rotor order, rotor and ring offsets, punch card, and for PROTON II the
/// core settings.
///
/// # Examples
///
/// ```
/// use fialka::{DailyKey, MachineConfiguration};
///
/// let card: Vec<u8> = (0..30).collect();
/// let key = DailyKey::new(&[4, 5, 3, 6, 2, 7, 1, 8, 0, 9], &[0; 10], &[0; 10], &card).unwrap();
///
/// let mut config = MachineConfiguration::default();
/// config.apply_daily_key(&key).unwrap();
/// assert_eq!(config.daily_key(), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDailyKey", into = "RawDailyKey")]
pub struct DailyKey {
    rotor_orders: [u8; ROTORS],
    rotor_offsets: [u8; ROTORS],
    ring_offsets: [u8; ROTORS],
    punch_card: [u8; CONTACTS],
    core: Option<CoreKey>,
}

/// Core order, sides and offsets of a PROTON II key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreKey {
    core_orders: [u8; ROTORS],
    core_sides: [CoreSide; ROTORS],
    core_offsets: [u8; ROTORS],
}

impl DailyKey {
    /// Builds a PROTON I key.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found.
    pub fn new(
        rotor_orders: &[u8],
        rotor_offsets: &[u8],
        ring_offsets: &[u8],
        punch_card: &[u8],
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            rotor_orders: permutation("rotor orders", rotor_orders)?,
            rotor_offsets: in_range("rotor offsets", rotor_offsets, CONTACTS)?,
            ring_offsets: in_range("ring offsets", ring_offsets, CONTACTS)?,
            punch_card: permutation("punch card", punch_card)?,
            core: None,
        })
    }

    /// Adds PROTON II core settings.
    pub fn with_core(self, core: CoreKey) -> Self {
        Self {
            core: Some(core),
            ..self
        }
    }

    pub(crate) fn from_parts(
        rotor_orders: [u8; ROTORS],
        rotor_offsets: [u8; ROTORS],
        ring_offsets: [u8; ROTORS],
        punch_card: [u8; CONTACTS],
        core: Option<CoreKey>,
    ) -> Self {
        Self {
            rotor_orders,
            rotor_offsets,
            ring_offsets,
            punch_card,
            core,
        }
    }

    pub fn rotor_orders(&self) -> &[u8; ROTORS] {
        &self.rotor_orders
    }

    pub fn rotor_offsets(&self) -> &[u8; ROTORS] {
        &self.rotor_offsets
    }

    pub fn ring_offsets(&self) -> &[u8; ROTORS] {
        &self.ring_offsets
    }

    pub fn punch_card(&self) -> &[u8; CONTACTS] {
        &self.punch_card
    }

    pub fn core(&self) -> Option<&CoreKey> {
        self.core.as_ref()
    }
}

impl CoreKey {
    /// # Parameters
    /// - `core_orders`: Permutation of `0..10`.
    /// - `core_orientation`: `1` (normal) or `-1` (flipped) per position.
    /// - `core_offsets`: Ten values in `0..30`.
    ///
    /// # Errors
    /// Returns the first [`ConfigurationError`] found.
    pub fn new(
        core_orders: &[u8],
        core_orientation: &[i8],
        core_offsets: &[u8],
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            core_orders: permutation("core orders", core_orders)?,
            core_sides: core_sides_from_signs(core_orientation)?,
            core_offsets: in_range("core offsets", core_offsets, CONTACTS)?,
        })
    }

    pub(crate) fn from_parts(
        core_orders: [u8; ROTORS],
        core_sides: [CoreSide; ROTORS],
        core_offsets: [u8; ROTORS],
    ) -> Self {
        Self {
            core_orders,
            core_sides,
            core_offsets,
        }
    }

    pub fn core_orders(&self) -> &[u8; ROTORS] {
        &self.core_orders
    }

    pub fn core_sides(&self) -> &[CoreSide; ROTORS] {
        &self.core_sides
    }

    pub fn core_offsets(&self) -> &[u8; ROTORS] {
        &self.core_offsets
    }
}

// ──────── Wire shape ────────

#[derive(Serialize, Deserialize)]
struct RawDailyKey {
    rotor_orders: Vec<u8>,
    rotor_offsets: Vec<u8>,
    ring_offsets: Vec<u8>,
    punch_card: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    core: Option<RawCoreKey>,
}

#[derive(Serialize, Deserialize)]
struct RawCoreKey {
    core_orders: Vec<u8>,
    core_orientation: Vec<i8>,
    core_offsets: Vec<u8>,
}

impl TryFrom<RawDailyKey> for DailyKey {
    type Error = ConfigurationError;

    fn try_from(raw: RawDailyKey) -> Result<Self, Self::Error> {
        let key = DailyKey::new(
            &raw.rotor_orders,
            &raw.rotor_offsets,
            &raw.ring_offsets,
            &raw.punch_card,
        )?;
        match raw.core {
            None => Ok(key),
            Some(core) => Ok(key.with_core(CoreKey::new(
                &core.core_orders,
                &core.core_orientation,
                &core.core_offsets,
            )?)),
        }
    }
}

impl From<DailyKey> for RawDailyKey {
    fn from(key: DailyKey) -> Self {
        Self {
            rotor_orders: key.rotor_orders.to_vec(),
            rotor_offsets: key.rotor_offsets.to_vec(),
            ring_offsets: key.ring_offsets.to_vec(),
            punch_card: key.punch_card.to_vec(),
            core: key.core.map(|core| RawCoreKey {
                core_orders: core.core_orders.to_vec(),
                core_orientation: core.core_sides.iter().map(|s| s.sign()).collect(),
                core_offsets: core.core_offsets.to_vec(),
            }),
        }
    }
}
