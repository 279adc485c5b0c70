//! Machine configuration: the daily key, the mode switches and the letter
//! counter.
//!
//! Every setter validates its whole input before touching any field, so a
//! rejected change leaves the configuration exactly as it was. Mode switches
//! that constrain each other are reconciled in one place,
//! [`MachineConfiguration::apply_mode_constraints`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{CountryLayout, InvalidInputPolicy, PrintHead, PrintHeadShift, TextMode};
use crate::daily_key::{CoreKey, DailyKey};
use crate::error::ConfigurationError;
use crate::network::NumLock10Wiring;
use crate::tables::{tables_for, RotorSeries, RotorSeriesTables, CONTACTS, ROTORS};
use crate::utils::permutation::{identity, in_range, invert, permutation};

/// The counter wraps after 999 groups of five letters.
pub const COUNTER_MODULUS: u16 = 5000;

/// Letters per group on the counter display.
pub const GROUP_SIZE: u16 = 5;

/// Machine model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MachineModel {
    /// Letters only, 30-contact routing only.
    #[default]
    M125,
    /// Adds the number shift, mixed text and the NumLock10 switch.
    M125_3,
}

/// Signal routing between the keyboard and the reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumLockType {
    /// Only ten reflector and keyboard contacts are live; the rest loop back
    /// through the punch card.
    NumLock10,
    #[default]
    NumLock30,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationMode {
    /// Rotors disengaged, the keyboard types straight through.
    Plain,
    #[default]
    Encrypt,
    Decrypt,
}

/// Rotor construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotorType {
    /// Wiring core fixed inside the pin-carrying shell.
    #[default]
    ProtonI,
    /// Removable cores that can be reordered, rotated and flipped.
    ProtonII,
}

/// Visible side of a removable core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoreSide {
    #[default]
    Normal,
    Flipped,
}

impl CoreSide {
    /// `1` for the normal side, `-1` for the flipped side.
    pub fn sign(self) -> i8 {
        match self {
            CoreSide::Normal => 1,
            CoreSide::Flipped => -1,
        }
    }

    /// Inverse of [`sign`](Self::sign).
    pub fn from_sign(sign: i8) -> Option<CoreSide> {
        match sign {
            1 => Some(CoreSide::Normal),
            -1 => Some(CoreSide::Flipped),
            _ => None,
        }
    }
}

/// Where the wiring row of each rotor position comes from.
///
/// PROTON I cores cannot leave their shells, so their order is derived from
/// the rotor order on every read instead of being stored twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreOrderSource {
    FollowRotorOrders,
    Explicit([u8; ROTORS]),
}

/// Complete state of one machine.
///
/// Cloning yields an independent snapshot; nothing is shared between the
/// original and the copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfiguration {
    series: RotorSeries,
    tables: RotorSeriesTables,

    rotor_orders: [u8; ROTORS],
    rotor_offsets: [u8; ROTORS],
    ring_offsets: [u8; ROTORS],
    core_orders: CoreOrderSource,
    core_offsets: [u8; ROTORS],
    core_sides: [CoreSide; ROTORS],
    punch_card: [u8; CONTACTS],
    punch_card_inverse: [u8; CONTACTS],
    counter: u16,

    model: MachineModel,
    numlock: NumLockType,
    operation_mode: OperationMode,
    rotor_type: RotorType,
    numlock10_wiring: NumLock10Wiring,

    country_layout: CountryLayout,
    print_head: PrintHead,
    print_head_shift: PrintHeadShift,
    text_mode: TextMode,
    invalid_input_policy: InvalidInputPolicy,
}

impl Default for MachineConfiguration {
    /// K6 series, PROTON I, rotor order and offsets `0..9`, zero rings,
    /// identity punch card, M-125 in Encrypt mode with the Czechoslovakian
    /// Latin print head.
    fn default() -> Self {
        let base: [u8; ROTORS] = identity();
        let series = RotorSeries::default();
        Self {
            series,
            tables: tables_for(series),
            rotor_orders: base,
            rotor_offsets: base,
            ring_offsets: [0; ROTORS],
            core_orders: CoreOrderSource::FollowRotorOrders,
            core_offsets: [0; ROTORS],
            core_sides: [CoreSide::Normal; ROTORS],
            punch_card: identity(),
            punch_card_inverse: identity(),
            counter: 0,
            model: MachineModel::default(),
            numlock: NumLockType::default(),
            operation_mode: OperationMode::default(),
            rotor_type: RotorType::default(),
            numlock10_wiring: NumLock10Wiring::historical(),
            country_layout: CountryLayout::default(),
            print_head: PrintHead::default(),
            print_head_shift: PrintHeadShift::default(),
            text_mode: TextMode::default(),
            invalid_input_policy: InvalidInputPolicy::default(),
        }
    }
}

impl MachineConfiguration {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // ──────── Daily key ────────

    /// Sets a PROTON I daily key.
    ///
    /// Core settings are left alone: under PROTON I they are neutral, and a
    /// PROTON II machine keeps its current cores.
    ///
    /// # Parameters
    /// - `rotor_orders`: Permutation of `0..10`.
    /// - `rotor_offsets`, `ring_offsets`: Ten values in `0..30`.
    /// - `punch_card`: Permutation of `0..30`.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] naming the first invalid field.
    ///
    /// # Examples
    ///
    /// ```
    /// use fialka::MachineConfiguration;
    ///
    /// let mut config = MachineConfiguration::default();
    /// let card: Vec<u8> = (0..30).rev().collect();
    /// config
    ///     .set_daily_key_proton_i(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0], &[0; 10], &[0; 10], &card)
    ///     .unwrap();
    /// assert_eq!(config.punch_card_inverse()[29], 0);
    ///
    /// assert!(config.set_daily_key_proton_i(&[0; 10], &[0; 10], &[0; 10], &card).is_err());
    /// assert_eq!(config.rotor_orders(), [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    /// ```
    pub fn set_daily_key_proton_i(
        &mut self,
        rotor_orders: &[u8],
        rotor_offsets: &[u8],
        ring_offsets: &[u8],
        punch_card: &[u8],
    ) -> Result<(), ConfigurationError> {
        let rotor_orders = permutation::<ROTORS>("rotor orders", rotor_orders)?;
        let rotor_offsets = in_range::<ROTORS>("rotor offsets", rotor_offsets, CONTACTS)?;
        let ring_offsets = in_range::<ROTORS>("ring offsets", ring_offsets, CONTACTS)?;
        let punch_card = permutation::<CONTACTS>("punch card", punch_card)?;

        self.rotor_orders = rotor_orders;
        self.rotor_offsets = rotor_offsets;
        self.ring_offsets = ring_offsets;
        self.commit_punch_card(punch_card);
        debug!(?rotor_orders, ?rotor_offsets, ?ring_offsets, "daily key set");
        Ok(())
    }

    /// Sets a PROTON II daily key including the core settings.
    ///
    /// # Parameters
    /// - `core_orders`: Permutation of `0..10`.
    /// - `core_orientation`: Ten values, each `1` (normal) or `-1` (flipped).
    /// - `core_offsets`: Ten values in `0..30`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::CoreSettingsRequireProtonII`] when the
    /// machine is fitted with PROTON I rotors, otherwise the first
    /// validation failure.
    #[allow(clippy::too_many_arguments)]
    pub fn set_daily_key_proton_ii(
        &mut self,
        rotor_orders: &[u8],
        rotor_offsets: &[u8],
        ring_offsets: &[u8],
        punch_card: &[u8],
        core_orders: &[u8],
        core_orientation: &[i8],
        core_offsets: &[u8],
    ) -> Result<(), ConfigurationError> {
        if self.rotor_type != RotorType::ProtonII {
            return Err(ConfigurationError::CoreSettingsRequireProtonII);
        }
        let rotor_orders = permutation::<ROTORS>("rotor orders", rotor_orders)?;
        let rotor_offsets = in_range::<ROTORS>("rotor offsets", rotor_offsets, CONTACTS)?;
        let ring_offsets = in_range::<ROTORS>("ring offsets", ring_offsets, CONTACTS)?;
        let punch_card = permutation::<CONTACTS>("punch card", punch_card)?;
        let core_orders = permutation::<ROTORS>("core orders", core_orders)?;
        let core_sides = core_sides_from_signs(core_orientation)?;
        let core_offsets = in_range::<ROTORS>("core offsets", core_offsets, CONTACTS)?;

        self.rotor_orders = rotor_orders;
        self.rotor_offsets = rotor_offsets;
        self.ring_offsets = ring_offsets;
        self.commit_punch_card(punch_card);
        self.core_orders = CoreOrderSource::Explicit(core_orders);
        self.core_sides = core_sides;
        self.core_offsets = core_offsets;
        debug!(
            ?rotor_orders,
            ?rotor_offsets,
            ?ring_offsets,
            ?core_orders,
            ?core_offsets,
            "PROTON II daily key set"
        );
        Ok(())
    }

    /// Applies an already validated [`DailyKey`].
    ///
    /// A key with core settings switches the machine to PROTON II first; a
    /// key without them is applied as a PROTON I key.
    pub fn apply_daily_key(&mut self, key: &DailyKey) -> Result<(), ConfigurationError> {
        match key.core() {
            None => self.set_daily_key_proton_i(
                key.rotor_orders(),
                key.rotor_offsets(),
                key.ring_offsets(),
                key.punch_card(),
            ),
            Some(core) => {
                let signs: Vec<i8> = core.core_sides().iter().map(|s| s.sign()).collect();
                let previous = self.clone();
                if self.rotor_type != RotorType::ProtonII {
                    self.set_rotor_type(RotorType::ProtonII);
                }
                let result = self.set_daily_key_proton_ii(
                    key.rotor_orders(),
                    key.rotor_offsets(),
                    key.ring_offsets(),
                    key.punch_card(),
                    core.core_orders(),
                    &signs,
                    core.core_offsets(),
                );
                if result.is_err() {
                    *self = previous;
                }
                result
            }
        }
    }

    /// Captures the current key, rotor offsets included.
    pub fn daily_key(&self) -> DailyKey {
        let core = match self.rotor_type {
            RotorType::ProtonI => None,
            RotorType::ProtonII => Some(CoreKey::from_parts(
                self.core_orders(),
                self.core_sides,
                self.core_offsets,
            )),
        };
        DailyKey::from_parts(
            self.rotor_orders,
            self.rotor_offsets,
            self.ring_offsets,
            self.punch_card,
            core,
        )
    }

    /// Replaces the punch card and recomputes its inverse.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if `punch_card` is not a permutation
    /// of `0..30`.
    pub fn set_punch_card(&mut self, punch_card: &[u8]) -> Result<(), ConfigurationError> {
        let punch_card = permutation::<CONTACTS>("punch card", punch_card)?;
        self.commit_punch_card(punch_card);
        debug!(?punch_card, "punch card set");
        Ok(())
    }

    fn commit_punch_card(&mut self, punch_card: [u8; CONTACTS]) {
        self.punch_card = punch_card;
        self.punch_card_inverse = invert(&punch_card);
    }

    /// Moves the rotors to new positions without changing the rest of the key.
    pub fn set_rotor_offsets(&mut self, rotor_offsets: &[u8]) -> Result<(), ConfigurationError> {
        self.rotor_offsets = in_range::<ROTORS>("rotor offsets", rotor_offsets, CONTACTS)?;
        debug!(rotor_offsets = ?self.rotor_offsets, "rotor offsets set");
        Ok(())
    }

    /// Swaps the fixed tables for another rotor series. Rotor orders and
    /// offsets are kept.
    pub fn set_rotor_series(&mut self, series: RotorSeries) {
        self.series = series;
        self.tables = tables_for(series);
        debug!(?series, "rotor series set");
    }

    /// Changes the rotor construction.
    ///
    /// PROTON I makes the cores follow the rotor order again and resets core
    /// offsets and sides. PROTON II starts from a copy of the current rotor
    /// order that is independent from then on.
    pub fn set_rotor_type(&mut self, rotor_type: RotorType) {
        self.rotor_type = rotor_type;
        match rotor_type {
            RotorType::ProtonI => {
                self.core_orders = CoreOrderSource::FollowRotorOrders;
                self.core_offsets = [0; ROTORS];
                self.core_sides = [CoreSide::Normal; ROTORS];
            }
            RotorType::ProtonII => {
                self.core_orders = CoreOrderSource::Explicit(self.rotor_orders);
            }
        }
        debug!(?rotor_type, "rotor type set");
    }

    // ──────── Mode switches ────────

    pub fn set_machine_model(&mut self, model: MachineModel) {
        self.model = model;
        debug!(?model, "machine model set");
        self.apply_mode_constraints();
    }

    /// # Errors
    /// Returns [`ConfigurationError::NumLock10RequiresM125_3`] when NumLock10
    /// is requested on an M-125.
    pub fn set_numlock_type(&mut self, numlock: NumLockType) -> Result<(), ConfigurationError> {
        if numlock == NumLockType::NumLock10 && self.model == MachineModel::M125 {
            return Err(ConfigurationError::NumLock10RequiresM125_3);
        }
        self.numlock = numlock;
        debug!(?numlock, "numlock set");
        self.apply_mode_constraints();
        Ok(())
    }

    pub fn set_operation_mode(&mut self, mode: OperationMode) {
        self.operation_mode = mode;
        debug!(?mode, "operation mode set");
    }

    pub fn set_country_layout(&mut self, layout: CountryLayout) {
        self.country_layout = layout;
        debug!(?layout, "country layout set");
    }

    pub fn set_print_head(&mut self, print_head: PrintHead) {
        self.print_head = print_head;
        debug!(?print_head, "print head set");
        self.apply_mode_constraints();
    }

    /// Sets the print-head shift. Only Mixed mode keeps a shift that
    /// disagrees with its text mode.
    pub fn set_print_head_shift(&mut self, shift: PrintHeadShift) {
        self.print_head_shift = shift;
        self.apply_mode_constraints();
    }

    /// Sets the text mode and the matching print-head shift: letter shift for
    /// Letters and Mixed, number shift for Numbers.
    pub fn set_text_mode(&mut self, text_mode: TextMode) {
        self.text_mode = text_mode;
        self.print_head_shift = text_mode.initial_shift();
        debug!(?text_mode, "text mode set");
        self.apply_mode_constraints();
    }

    pub fn set_invalid_input_policy(&mut self, policy: InvalidInputPolicy) {
        self.invalid_input_policy = policy;
    }

    /// Replaces the NumLock10 reflector and keyboard wiring.
    pub fn set_numlock10_wiring(&mut self, wiring: NumLock10Wiring) {
        self.numlock10_wiring = wiring;
        debug!("custom NumLock10 wiring installed");
    }

    /// Forces the fields that other switches constrain:
    ///
    /// - an M-125 runs NumLock30 in Letters mode;
    /// - NumLock10 needs the Cyrillic print head in Numbers mode.
    ///
    /// Outside Mixed mode the print-head shift follows the text mode.
    pub fn apply_mode_constraints(&mut self) {
        if self.model == MachineModel::M125 {
            if self.numlock != NumLockType::NumLock30 {
                debug!("M-125 forces NumLock30");
                self.numlock = NumLockType::NumLock30;
            }
            self.force_text_mode(TextMode::Letters);
        }
        if self.numlock == NumLockType::NumLock10 {
            if self.print_head != PrintHead::Cyrillic {
                debug!("NumLock10 forces the Cyrillic print head");
                self.print_head = PrintHead::Cyrillic;
            }
            self.force_text_mode(TextMode::Numbers);
        }
        if self.text_mode != TextMode::Mixed {
            let shift = self.text_mode.initial_shift();
            if self.print_head_shift != shift {
                debug!(?shift, "print-head shift forced");
                self.print_head_shift = shift;
            }
        }
    }

    fn force_text_mode(&mut self, text_mode: TextMode) {
        if self.text_mode != text_mode {
            debug!(?text_mode, "text mode forced");
            self.text_mode = text_mode;
        }
    }

    // ──────── Counter ────────

    /// Letters processed since the last reset, modulo 5000.
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// The counter as the machine shows it: `groups|letters`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fialka::MachineConfiguration;
    ///
    /// assert_eq!(MachineConfiguration::default().counter_display(), "0|0");
    /// ```
    pub fn counter_display(&self) -> String {
        format!(
            "{}|{}",
            self.counter / GROUP_SIZE,
            self.counter % GROUP_SIZE
        )
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    pub(crate) fn advance_counter(&mut self) {
        self.counter = (self.counter + 1) % COUNTER_MODULUS;
    }

    pub(crate) fn rotor_offsets_mut(&mut self) -> &mut [u8; ROTORS] {
        &mut self.rotor_offsets
    }

    // ──────── Key rendering ────────

    /// Human-readable key: one labelled, dash-separated line pair per array.
    /// Core settings are listed for PROTON II only, sides as `1` (normal)
    /// and `2` (flipped).
    pub fn formatted_key(&self) -> String {
        let mut sections = vec![
            ("Rotor order", join(&self.rotor_orders)),
            ("Rotor offset", join(&self.rotor_offsets)),
            ("Ring offsets", join(&self.ring_offsets)),
        ];
        if self.rotor_type == RotorType::ProtonII {
            let sides: Vec<u8> = self
                .core_sides
                .iter()
                .map(|side| match side {
                    CoreSide::Normal => 1,
                    CoreSide::Flipped => 2,
                })
                .collect();
            sections.push(("Core order", join(&self.core_orders())));
            sections.push(("Core sides", join(&sides)));
            sections.push(("Core offsets", join(&self.core_offsets)));
        }
        sections
            .iter()
            .map(|(label, values)| format!("{label}:\n{values}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ──────── Accessors ────────

    pub fn rotor_series(&self) -> RotorSeries {
        self.series
    }

    pub fn tables(&self) -> &RotorSeriesTables {
        &self.tables
    }

    pub fn rotor_orders(&self) -> [u8; ROTORS] {
        self.rotor_orders
    }

    pub fn rotor_offsets(&self) -> [u8; ROTORS] {
        self.rotor_offsets
    }

    pub fn ring_offsets(&self) -> [u8; ROTORS] {
        self.ring_offsets
    }

    /// Wiring row used at each rotor position.
    pub fn core_orders(&self) -> [u8; ROTORS] {
        match self.core_orders {
            CoreOrderSource::FollowRotorOrders => self.rotor_orders,
            CoreOrderSource::Explicit(orders) => orders,
        }
    }

    pub fn core_order_source(&self) -> CoreOrderSource {
        self.core_orders
    }

    pub fn core_offsets(&self) -> [u8; ROTORS] {
        self.core_offsets
    }

    pub fn core_sides(&self) -> [CoreSide; ROTORS] {
        self.core_sides
    }

    pub fn punch_card(&self) -> [u8; CONTACTS] {
        self.punch_card
    }

    pub fn punch_card_inverse(&self) -> [u8; CONTACTS] {
        self.punch_card_inverse
    }

    pub fn machine_model(&self) -> MachineModel {
        self.model
    }

    pub fn numlock_type(&self) -> NumLockType {
        self.numlock
    }

    pub fn operation_mode(&self) -> OperationMode {
        self.operation_mode
    }

    pub fn rotor_type(&self) -> RotorType {
        self.rotor_type
    }

    pub fn numlock10_wiring(&self) -> &NumLock10Wiring {
        &self.numlock10_wiring
    }

    pub fn country_layout(&self) -> CountryLayout {
        self.country_layout
    }

    pub fn print_head(&self) -> PrintHead {
        self.print_head
    }

    pub fn print_head_shift(&self) -> PrintHeadShift {
        self.print_head_shift
    }

    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    pub fn invalid_input_policy(&self) -> InvalidInputPolicy {
        self.invalid_input_policy
    }
}

pub(crate) fn core_sides_from_signs(signs: &[i8]) -> Result<[CoreSide; ROTORS], ConfigurationError> {
    if signs.len() != ROTORS {
        return Err(ConfigurationError::InvalidLength {
            field: "core orientation",
            expected: ROTORS,
            actual: signs.len(),
        });
    }
    let mut sides = [CoreSide::Normal; ROTORS];
    for (index, (&value, side)) in signs.iter().zip(sides.iter_mut()).enumerate() {
        *side = CoreSide::from_sign(value)
            .ok_or(ConfigurationError::InvalidCoreOrientation { index, value })?;
    }
    Ok(sides)
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWAPPED_PAIRS: [u8; 30] = [
        1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14, 17, 16, 19, 18, 21, 20, 23, 22, 25,
        24, 27, 26, 29, 28,
    ];

    fn proton_ii() -> MachineConfiguration {
        let mut config = MachineConfiguration::default();
        config.set_rotor_type(RotorType::ProtonII);
        config
    }

    #[test]
    fn test_default_configuration() {
        let config = MachineConfiguration::default();
        assert_eq!(config.rotor_series(), RotorSeries::K6);
        assert_eq!(config.rotor_type(), RotorType::ProtonI);
        assert_eq!(config.rotor_orders(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(config.rotor_offsets(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(config.ring_offsets(), [0; 10]);
        assert_eq!(config.punch_card(), identity::<30>());
        assert_eq!(config.machine_model(), MachineModel::M125);
        assert_eq!(config.numlock_type(), NumLockType::NumLock30);
        assert_eq!(config.operation_mode(), OperationMode::Encrypt);
        assert_eq!(config.country_layout(), CountryLayout::Czechoslovakia);
        assert_eq!(config.print_head(), PrintHead::Latin);
        assert_eq!(config.text_mode(), TextMode::Letters);
        assert_eq!(config.print_head_shift(), PrintHeadShift::LetterShift);
        assert_eq!(config.invalid_input_policy(), InvalidInputPolicy::Remove);
        assert_eq!(config.counter(), 0);
    }

    #[test]
    fn test_punch_card_inverse_is_recomputed() {
        let mut config = MachineConfiguration::default();
        config.set_punch_card(&SWAPPED_PAIRS).unwrap();
        let inverse = config.punch_card_inverse();
        for x in 0..CONTACTS {
            assert_eq!(inverse[SWAPPED_PAIRS[x] as usize] as usize, x);
        }
    }

    #[test]
    fn test_rejected_daily_key_leaves_state_untouched() {
        let mut config = MachineConfiguration::default();
        let before = config.clone();
        let bad_card = [0u8; 30];
        let err = config
            .set_daily_key_proton_i(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0], &[0; 10], &[0; 10], &bad_card)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NotAPermutation {
                field: "punch card"
            }
        );
        assert_eq!(config, before);
    }

    #[test]
    fn test_rotor_offset_out_of_range() {
        let mut config = MachineConfiguration::default();
        let err = config
            .set_daily_key_proton_i(
                &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
                &[0, 0, 0, 30, 0, 0, 0, 0, 0, 0],
                &[0; 10],
                &identity::<30>(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::ValueOutOfRange {
                field: "rotor offsets",
                index: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_proton_ii_key_requires_proton_ii() {
        let mut config = MachineConfiguration::default();
        let base = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let err = config
            .set_daily_key_proton_ii(
                &base,
                &[0; 10],
                &[0; 10],
                &identity::<30>(),
                &base,
                &[1; 10],
                &[0; 10],
            )
            .unwrap_err();
        assert_eq!(err, ConfigurationError::CoreSettingsRequireProtonII);
    }

    #[test]
    fn test_proton_ii_rejects_bad_orientation() {
        let mut config = proton_ii();
        let before = config.clone();
        let base = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let err = config
            .set_daily_key_proton_ii(
                &base,
                &[0; 10],
                &[0; 10],
                &identity::<30>(),
                &base,
                &[1, 1, 0, 1, 1, 1, 1, 1, 1, 1],
                &[0; 10],
            )
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidCoreOrientation { index: 2, value: 0 }
        );
        assert_eq!(config, before);
    }

    #[test]
    fn test_proton_i_cores_follow_rotor_orders() {
        let mut config = MachineConfiguration::default();
        let order = [9, 0, 8, 1, 7, 2, 6, 3, 5, 4];
        config
            .set_daily_key_proton_i(&order, &[0; 10], &[0; 10], &identity::<30>())
            .unwrap();
        assert_eq!(config.core_orders(), order);
        assert_eq!(
            config.core_order_source(),
            CoreOrderSource::FollowRotorOrders
        );
    }

    #[test]
    fn test_proton_ii_snapshot_is_independent() {
        let mut config = proton_ii();
        assert_eq!(config.core_orders(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        config
            .set_daily_key_proton_i(
                &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
                &[0; 10],
                &[0; 10],
                &identity::<30>(),
            )
            .unwrap();
        assert_eq!(config.core_orders(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_back_to_proton_i_resets_cores() {
        let mut config = proton_ii();
        let base = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        config
            .set_daily_key_proton_ii(
                &base,
                &[0; 10],
                &[0; 10],
                &identity::<30>(),
                &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
                &[-1; 10],
                &[5; 10],
            )
            .unwrap();
        config.set_rotor_type(RotorType::ProtonI);
        assert_eq!(config.core_orders(), base);
        assert_eq!(config.core_offsets(), [0; 10]);
        assert_eq!(config.core_sides(), [CoreSide::Normal; 10]);
    }

    #[test]
    fn test_rotor_series_keeps_orders_and_offsets() {
        let mut config = MachineConfiguration::default();
        config.set_rotor_series(RotorSeries::K3);
        assert_eq!(config.rotor_series(), RotorSeries::K3);
        assert_eq!(config.tables(), &tables_for(RotorSeries::K3));
        assert_eq!(config.rotor_offsets(), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_numlock10_rejected_on_m125() {
        let mut config = MachineConfiguration::default();
        assert_eq!(
            config.set_numlock_type(NumLockType::NumLock10),
            Err(ConfigurationError::NumLock10RequiresM125_3)
        );
        assert_eq!(config.numlock_type(), NumLockType::NumLock30);
    }

    #[test]
    fn test_numlock10_forces_cyrillic_numbers() {
        let mut config = MachineConfiguration::default();
        config.set_machine_model(MachineModel::M125_3);
        config.set_numlock_type(NumLockType::NumLock10).unwrap();
        assert_eq!(config.print_head(), PrintHead::Cyrillic);
        assert_eq!(config.text_mode(), TextMode::Numbers);
        assert_eq!(config.print_head_shift(), PrintHeadShift::NumberShift);

        config.set_print_head(PrintHead::Latin);
        assert_eq!(config.print_head(), PrintHead::Cyrillic);
    }

    #[test]
    fn test_m125_forces_numlock30_letters() {
        let mut config = MachineConfiguration::default();
        config.set_machine_model(MachineModel::M125_3);
        config.set_numlock_type(NumLockType::NumLock10).unwrap();
        config.set_machine_model(MachineModel::M125);
        assert_eq!(config.numlock_type(), NumLockType::NumLock30);
        assert_eq!(config.text_mode(), TextMode::Letters);
        assert_eq!(config.print_head_shift(), PrintHeadShift::LetterShift);

        config.set_text_mode(TextMode::Mixed);
        assert_eq!(config.text_mode(), TextMode::Letters);
    }

    #[test]
    fn test_print_head_shift_follows_fixed_text_mode() {
        let mut config = MachineConfiguration::default();
        config.set_print_head_shift(PrintHeadShift::NumberShift);
        assert_eq!(config.print_head_shift(), PrintHeadShift::LetterShift);

        config.set_machine_model(MachineModel::M125_3);
        config.set_numlock_type(NumLockType::NumLock10).unwrap();
        config.set_print_head_shift(PrintHeadShift::LetterShift);
        assert_eq!(config.text_mode(), TextMode::Numbers);
        assert_eq!(config.print_head_shift(), PrintHeadShift::NumberShift);

        config.set_numlock_type(NumLockType::NumLock30).unwrap();
        config.set_text_mode(TextMode::Mixed);
        config.set_print_head_shift(PrintHeadShift::NumberShift);
        assert_eq!(config.print_head_shift(), PrintHeadShift::NumberShift);
    }

    #[test]
    fn test_text_mode_sets_shift() {
        let mut config = MachineConfiguration::default();
        config.set_machine_model(MachineModel::M125_3);
        config.set_text_mode(TextMode::Numbers);
        assert_eq!(config.print_head_shift(), PrintHeadShift::NumberShift);
        config.set_text_mode(TextMode::Mixed);
        assert_eq!(config.print_head_shift(), PrintHeadShift::LetterShift);
    }

    #[test]
    fn test_counter_wraps() {
        let mut config = MachineConfiguration::default();
        for _ in 0..COUNTER_MODULUS - 1 {
            config.advance_counter();
        }
        assert_eq!(config.counter_display(), "999|4");
        config.advance_counter();
        assert_eq!(config.counter(), 0);
        config.advance_counter();
        config.reset_counter();
        assert_eq!(config.counter(), 0);
    }

    #[test]
    fn test_formatted_key_proton_i() {
        let config = MachineConfiguration::default();
        assert_eq!(
            config.formatted_key(),
            "Rotor order:\n0-1-2-3-4-5-6-7-8-9\n\
             Rotor offset:\n0-1-2-3-4-5-6-7-8-9\n\
             Ring offsets:\n0-0-0-0-0-0-0-0-0-0"
        );
    }

    #[test]
    fn test_formatted_key_proton_ii_lists_cores() {
        let mut config = proton_ii();
        let base = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        config
            .set_daily_key_proton_ii(
                &base,
                &[0; 10],
                &[0; 10],
                &identity::<30>(),
                &base,
                &[1, -1, 1, -1, 1, -1, 1, -1, 1, -1],
                &base,
            )
            .unwrap();
        let key = config.formatted_key();
        assert!(key.ends_with(
            "Core order:\n0-1-2-3-4-5-6-7-8-9\n\
             Core sides:\n1-2-1-2-1-2-1-2-1-2\n\
             Core offsets:\n0-1-2-3-4-5-6-7-8-9"
        ));
    }

    #[test]
    fn test_clone_does_not_share_state() {
        let mut original = MachineConfiguration::default();
        let snapshot = original.clone();
        original.rotor_offsets_mut()[0] = 17;
        original.advance_counter();
        assert_eq!(snapshot.rotor_offsets()[0], 0);
        assert_eq!(snapshot.counter(), 0);
    }
}
