//! Permutation network: the signal path of one key press.
//!
//! Two routings exist. NumLock30 is a single pass:
//!
//! ```text
//! keyboard -> punch card -> entry disk -> (+3) -> rotors 9..0 -> (-3)
//!   -> reflector (encrypt or decrypt table)
//!   -> (+3) -> rotors 0..9 -> (-3) -> entry disk⁻¹ -> punch card⁻¹ -> keyboard⁻¹
//! ```
//!
//! NumLock10 wires only ten reflector and ten keyboard contacts. A signal
//! landing on any other contact is fed back through the punch card and the
//! rotor stack until it reaches a live one, on the way in and again on the
//! way out.

use tracing::{trace, warn};

use crate::config::{CoreSide, MachineConfiguration, NumLockType, OperationMode};
use crate::error::{ConfigurationError, FialkaError, LoopStage};
use crate::stepping::{self, StepObserver};
use crate::tables::fixed::{
    ENTRY_DISK, ENTRY_DISK_INVERSE, KEYBOARD, KEYBOARD_INVERSE,
    NUMLOCK10_KEYBOARD_ACTIVE, NUMLOCK10_PUNCH_CARD_TO_REFLECTOR,
    NUMLOCK10_REFLECTOR_ACTIVE, NUMLOCK10_REFLECTOR_TO_PUNCH_CARD, REFLECTOR_DECRYPT,
    REFLECTOR_ENCRYPT,
};
use crate::tables::{CONTACTS, ROTORS};

/// Rotation between the entry disk and the rotor stack, and between the
/// stack and the reflector.
const STACK_OFFSET: usize = 3;

/// Upper bound on passes through one NumLock10 loop.
pub const MAX_LOOP_PASSES: usize = CONTACTS;

/// Direction of travel through a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Entry disk towards the reflector.
    Forward,
    /// Reflector towards the entry disk.
    Reverse,
}

/// Live contacts and feedback wiring of the NumLock10 routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumLock10Wiring {
    reflector_active: [bool; CONTACTS],
    keyboard_active: [bool; CONTACTS],
    reflector_to_punch_card: [Option<u8>; CONTACTS],
    punch_card_to_reflector: [Option<u8>; CONTACTS],
}

impl Default for NumLock10Wiring {
    fn default() -> Self {
        Self::historical()
    }
}

impl NumLock10Wiring {
    /// The wiring of the real M-125-3.
    pub fn historical() -> Self {
        Self {
            reflector_active: mask(&NUMLOCK10_REFLECTOR_ACTIVE),
            keyboard_active: mask(&NUMLOCK10_KEYBOARD_ACTIVE),
            reflector_to_punch_card: NUMLOCK10_REFLECTOR_TO_PUNCH_CARD,
            punch_card_to_reflector: NUMLOCK10_PUNCH_CARD_TO_REFLECTOR,
        }
    }

    /// Builds a custom wiring.
    ///
    /// # Parameters
    /// - `reflector_active`: Contacts the reflector actually reflects.
    /// - `keyboard_active`: Contacts wired to a numeric key.
    /// - `reflector_to_punch_card`: Feedback target of every inactive
    ///   reflector contact.
    /// - `punch_card_to_reflector`: Feedback target of every inactive
    ///   keyboard contact.
    ///
    /// Entries of active contacts are ignored. Termination of the loops is
    /// not checked here; a wiring that cycles fails at run time with
    /// [`FialkaError::UnreachableContact`].
    ///
    /// # Errors
    /// Returns [`ConfigurationError::MalformedNumLock10Wiring`] if a contact
    /// is outside `0..30` or an inactive contact has no feedback target.
    pub fn new(
        reflector_active: &[u8],
        keyboard_active: &[u8],
        reflector_to_punch_card: [Option<u8>; CONTACTS],
        punch_card_to_reflector: [Option<u8>; CONTACTS],
    ) -> Result<Self, ConfigurationError> {
        let reflector_active = checked_mask("reflector", reflector_active)?;
        let keyboard_active = checked_mask("keyboard", keyboard_active)?;
        check_redirects("reflector", &reflector_active, &reflector_to_punch_card)?;
        check_redirects("keyboard", &keyboard_active, &punch_card_to_reflector)?;
        Ok(Self {
            reflector_active,
            keyboard_active,
            reflector_to_punch_card,
            punch_card_to_reflector,
        })
    }

    pub fn is_reflector_active(&self, contact: u8) -> bool {
        self.reflector_active[contact as usize]
    }

    pub fn is_keyboard_active(&self, contact: u8) -> bool {
        self.keyboard_active[contact as usize]
    }
}

fn mask(contacts: &[u8]) -> [bool; CONTACTS] {
    let mut mask = [false; CONTACTS];
    for &c in contacts {
        mask[c as usize] = true;
    }
    mask
}

fn checked_mask(side: &str, contacts: &[u8]) -> Result<[bool; CONTACTS], ConfigurationError> {
    if let Some(&c) = contacts.iter().find(|&&c| c as usize >= CONTACTS) {
        return Err(ConfigurationError::MalformedNumLock10Wiring {
            reason: format!("{side} contact {c} is out of range"),
        });
    }
    Ok(mask(contacts))
}

fn check_redirects(
    side: &str,
    active: &[bool; CONTACTS],
    redirects: &[Option<u8>; CONTACTS],
) -> Result<(), ConfigurationError> {
    for (contact, (&live, target)) in active.iter().zip(redirects).enumerate() {
        match target {
            Some(t) if *t as usize >= CONTACTS => {
                return Err(ConfigurationError::MalformedNumLock10Wiring {
                    reason: format!("{side} contact {contact} redirects to {t}"),
                });
            }
            None if !live => {
                return Err(ConfigurationError::MalformedNumLock10Wiring {
                    reason: format!("inactive {side} contact {contact} has no redirect"),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Processes one symbol and steps the rotors.
///
/// In Plain mode the symbol passes unchanged and nothing steps. Otherwise the
/// symbol is routed according to the NumLock switch and the rotors step
/// exactly once; `observers` see the new rotor offsets.
///
/// # Panics
/// Panics if `z` is not a contact (`z >= 30`).
///
/// # Errors
/// Returns [`FialkaError::UnreachableContact`] if a NumLock10 loop does not
/// terminate. The configuration is unchanged in that case.
///
/// # Examples
///
/// ```
/// use fialka::{network, MachineConfiguration, OperationMode};
///
/// let mut enc = MachineConfiguration::default();
/// let mut dec = enc.clone();
/// dec.set_operation_mode(OperationMode::Decrypt);
///
/// let c = network::encrypt_symbol(&mut enc, 7, &mut []).unwrap();
/// assert_eq!(network::encrypt_symbol(&mut dec, c, &mut []).unwrap(), 7);
/// ```
pub fn encrypt_symbol(
    config: &mut MachineConfiguration,
    z: u8,
    observers: &mut [Box<dyn StepObserver>],
) -> Result<u8, FialkaError> {
    assert!(
        (z as usize) < CONTACTS,
        "contact {z} is outside the 30-contact domain"
    );
    if config.operation_mode() == OperationMode::Plain {
        return Ok(z);
    }
    let out = match config.numlock_type() {
        NumLockType::NumLock30 => route30(config, z),
        NumLockType::NumLock10 => route10(config, z)?,
    };
    stepping::step(config, observers);
    Ok(out)
}

/// Single-pass routing. Does not step.
pub fn route30(config: &MachineConfiguration, z: u8) -> u8 {
    let punch_card = config.punch_card();
    let x = KEYBOARD[z as usize];
    let x = ENTRY_DISK[punch_card[x as usize] as usize];
    let x = towards_reflector(config, x);
    let x = reflect(config.operation_mode(), x);
    let x = towards_entry_disk(config, x);
    let x = config.punch_card_inverse()[ENTRY_DISK_INVERSE[x as usize] as usize];
    KEYBOARD_INVERSE[x as usize]
}

/// Looping routing of the NumLock10 switch. Does not step.
///
/// # Errors
/// Returns [`FialkaError::UnreachableContact`] when either loop exceeds
/// [`MAX_LOOP_PASSES`].
pub fn route10(config: &MachineConfiguration, z: u8) -> Result<u8, FialkaError> {
    let wiring = config.numlock10_wiring();
    let punch_card = config.punch_card();
    let punch_card_inverse = config.punch_card_inverse();

    let mut x = KEYBOARD[z as usize];
    let mut reached = false;
    for _ in 0..MAX_LOOP_PASSES {
        x = ENTRY_DISK[punch_card[x as usize] as usize];
        x = towards_reflector(config, x);
        if wiring.is_reflector_active(x) {
            reached = true;
            break;
        }
        x = redirect(&wiring.reflector_to_punch_card, x)?;
        trace!(contact = x, "reflector contact fed back to the punch card");
    }
    if !reached {
        return Err(unreachable(LoopStage::ReflectorSide));
    }

    x = reflect(config.operation_mode(), x);

    reached = false;
    for _ in 0..MAX_LOOP_PASSES {
        x = towards_entry_disk(config, x);
        x = punch_card_inverse[ENTRY_DISK_INVERSE[x as usize] as usize];
        if wiring.is_keyboard_active(x) {
            reached = true;
            break;
        }
        x = redirect(&wiring.punch_card_to_reflector, x)?;
        trace!(contact = x, "keyboard contact fed back to the reflector");
    }
    if !reached {
        return Err(unreachable(LoopStage::KeyboardSide));
    }

    Ok(KEYBOARD_INVERSE[x as usize])
}

fn redirect(table: &[Option<u8>; CONTACTS], x: u8) -> Result<u8, FialkaError> {
    table[x as usize].ok_or_else(|| {
        ConfigurationError::MalformedNumLock10Wiring {
            reason: format!("contact {x} has no redirect"),
        }
        .into()
    })
}

fn unreachable(stage: LoopStage) -> FialkaError {
    warn!(%stage, passes = MAX_LOOP_PASSES, "NumLock10 loop did not terminate");
    FialkaError::UnreachableContact {
        stage,
        iterations: MAX_LOOP_PASSES,
    }
}

/// Entry disk side of the stack to the reflector side, offsets included.
fn towards_reflector(config: &MachineConfiguration, x: u8) -> u8 {
    let mut x = (x as usize + STACK_OFFSET) % CONTACTS;
    for i in (0..ROTORS).rev() {
        x = handle_rotor(config, Direction::Forward, i, x as u8) as usize;
    }
    ((x + CONTACTS - STACK_OFFSET) % CONTACTS) as u8
}

fn towards_entry_disk(config: &MachineConfiguration, x: u8) -> u8 {
    let mut x = (x as usize + STACK_OFFSET) % CONTACTS;
    for i in 0..ROTORS {
        x = handle_rotor(config, Direction::Reverse, i, x as u8) as usize;
    }
    ((x + CONTACTS - STACK_OFFSET) % CONTACTS) as u8
}

fn reflect(mode: OperationMode, x: u8) -> u8 {
    match mode {
        OperationMode::Encrypt => REFLECTOR_ENCRYPT[x as usize],
        OperationMode::Decrypt => REFLECTOR_DECRYPT[x as usize],
        OperationMode::Plain => x,
    }
}

/// Passes `x` through the rotor at `position`.
///
/// The rotor, ring and core offsets are removed, the wiring is looked up in
/// base position and the offsets are put back. A flipped core swaps the
/// forward and inverse tables.
pub fn handle_rotor(
    config: &MachineConfiguration,
    direction: Direction,
    position: usize,
    x: u8,
) -> u8 {
    let rotor = config.rotor_offsets()[position] as usize;
    let ring = config.ring_offsets()[position] as usize;
    let core = config.core_offsets()[position] as usize;
    let row = config.core_orders()[position] as usize;
    let tables = config.tables();

    let x = (x as usize + rotor + ring + CONTACTS - core) % CONTACTS;
    let looked_up = match (direction, config.core_sides()[position]) {
        (Direction::Forward, CoreSide::Normal) => tables.wiring[row][x],
        (Direction::Reverse, CoreSide::Normal) => tables.inverse_wiring[row][x],
        (Direction::Reverse, CoreSide::Flipped) => tables.wiring_flipped[row][x],
        (Direction::Forward, CoreSide::Flipped) => tables.inverse_wiring_flipped[row][x],
    } as usize;
    ((looked_up + 2 * CONTACTS - rotor - ring + core) % CONTACTS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MachineModel, RotorType};

    fn decrypting(config: &MachineConfiguration) -> MachineConfiguration {
        let mut dec = config.clone();
        dec.set_operation_mode(OperationMode::Decrypt);
        dec
    }

    fn numlock10() -> MachineConfiguration {
        let mut config = MachineConfiguration::default();
        config.set_machine_model(MachineModel::M125_3);
        config.set_numlock_type(NumLockType::NumLock10).unwrap();
        config
    }

    #[test]
    fn test_handle_rotor_forward_reverse_inverse() {
        let mut config = MachineConfiguration::default();
        config.set_rotor_type(RotorType::ProtonII);
        config
            .set_daily_key_proton_ii(
                &[3, 1, 4, 0, 5, 9, 2, 6, 8, 7],
                &[5, 17, 29, 0, 3, 8, 11, 23, 1, 2],
                &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
                &(0..30).collect::<Vec<u8>>(),
                &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
                &[1, -1, -1, 1, 1, -1, 1, -1, 1, -1],
                &[0, 29, 1, 28, 2, 27, 3, 26, 4, 25],
            )
            .unwrap();
        for position in 0..ROTORS {
            for x in 0..CONTACTS as u8 {
                let y = handle_rotor(&config, Direction::Forward, position, x);
                assert_eq!(handle_rotor(&config, Direction::Reverse, position, y), x);
            }
        }
    }

    #[test]
    fn test_route30_decrypt_inverts_encrypt() {
        let config = MachineConfiguration::default();
        let dec = decrypting(&config);
        for z in 0..CONTACTS as u8 {
            assert_eq!(route30(&dec, route30(&config, z)), z);
        }
    }

    #[test]
    fn test_route30_is_a_permutation() {
        let config = MachineConfiguration::default();
        let mut seen = [false; CONTACTS];
        for z in 0..CONTACTS as u8 {
            seen[route30(&config, z) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_plain_mode_is_identity_without_stepping() {
        let mut config = MachineConfiguration::default();
        config.set_operation_mode(OperationMode::Plain);
        let before = config.clone();
        for z in 0..CONTACTS as u8 {
            assert_eq!(encrypt_symbol(&mut config, z, &mut []).unwrap(), z);
        }
        assert_eq!(config, before);
    }

    #[test]
    fn test_encrypt_symbol_steps_once() {
        let mut config = MachineConfiguration::default();
        encrypt_symbol(&mut config, 0, &mut []).unwrap();
        assert_eq!(config.counter(), 1);
        assert_ne!(
            config.rotor_offsets(),
            MachineConfiguration::default().rotor_offsets()
        );
    }

    #[test]
    #[should_panic(expected = "outside the 30-contact domain")]
    fn test_out_of_domain_symbol_panics() {
        let mut config = MachineConfiguration::default();
        let _ = encrypt_symbol(&mut config, 30, &mut []);
    }

    #[test]
    fn test_route10_stays_on_numeric_keys() {
        let config = numlock10();
        let dec = decrypting(&config);
        for &z in &NUMLOCK10_KEYBOARD_DIGITS {
            let c = route10(&config, z).unwrap();
            assert!(NUMLOCK10_KEYBOARD_DIGITS.contains(&c), "{z} -> {c}");
            assert_eq!(route10(&dec, c).unwrap(), z);
        }
    }

    /// Cyrillic special-row contacts of the digits 0..9.
    const NUMLOCK10_KEYBOARD_DIGITS: [u8; 10] = [20, 23, 18, 3, 12, 0, 17, 15, 1, 14];

    #[test]
    fn test_non_numeric_contact_can_cycle() {
        // Contact 6 is not behind a numeric key; its feedback path never
        // reaches a live reflector contact.
        let config = numlock10();
        assert_eq!(
            route10(&config, 6),
            Err(FialkaError::UnreachableContact {
                stage: LoopStage::ReflectorSide,
                iterations: MAX_LOOP_PASSES,
            })
        );
    }

    #[test]
    fn test_unreachable_contact_leaves_state_untouched() {
        let mut config = numlock10();
        let feedback: [Option<u8>; CONTACTS] = std::array::from_fn(|c| Some(c as u8));
        let wiring = NumLock10Wiring::new(&[], &[], feedback, feedback).unwrap();
        config.set_numlock10_wiring(wiring);
        let before = config.clone();
        let err = encrypt_symbol(&mut config, 20, &mut []).unwrap_err();
        assert_eq!(
            err,
            FialkaError::UnreachableContact {
                stage: LoopStage::ReflectorSide,
                iterations: MAX_LOOP_PASSES,
            }
        );
        assert_eq!(config, before);
    }

    #[test]
    fn test_custom_wiring_validation() {
        let none = [None; CONTACTS];
        assert!(matches!(
            NumLock10Wiring::new(&[30], &[], none, none),
            Err(ConfigurationError::MalformedNumLock10Wiring { .. })
        ));
        assert!(matches!(
            NumLock10Wiring::new(&[0], &[1], none, none),
            Err(ConfigurationError::MalformedNumLock10Wiring { .. })
        ));
        let all: Vec<u8> = (0..30).collect();
        assert!(NumLock10Wiring::new(&all, &all, none, none).is_ok());
    }

    #[test]
    fn test_historical_wiring_is_default() {
        let wiring = NumLock10Wiring::default();
        assert_eq!(wiring, NumLock10Wiring::historical());
        assert!(wiring.is_reflector_active(8));
        assert!(!wiring.is_reflector_active(0));
        assert!(wiring.is_keyboard_active(1));
        assert!(!wiring.is_keyboard_active(0));
    }
}
