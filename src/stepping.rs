//! Rotor stepping.
//!
//! The ten rotors form two independent chains. Each round every chain steps
//! its first rotor and carries on to the next one until a blocking pin at
//! the chain's check position stops it. The first rotor of each chain
//! therefore moves on every key press.

use tracing::trace;

use crate::config::MachineConfiguration;
use crate::tables::{CONTACTS, ROTORS};

/// Positions 1, 3, 5, 7, 9: stepped backwards, pin checked 17 contacts on.
const CHAIN_A: [usize; 5] = [1, 3, 5, 7, 9];
const CHAIN_A_CHECK: usize = 17;

/// Positions 8, 6, 4, 2, 0: stepped forwards, pin checked 20 contacts on.
const CHAIN_B: [usize; 5] = [8, 6, 4, 2, 0];
const CHAIN_B_CHECK: usize = 20;

/// Receives the rotor offsets after every stepping round.
pub trait StepObserver {
    /// Called once per processed symbol with the new offsets and counter.
    fn rotors_stepped(&mut self, rotor_offsets: &[u8; ROTORS], counter: u16);
}

/// Adapts a closure to [`StepObserver`].
pub struct FnObserver<F>(pub F);

impl<F> StepObserver for FnObserver<F>
where
    F: FnMut(&[u8; ROTORS], u16),
{
    fn rotors_stepped(&mut self, rotor_offsets: &[u8; ROTORS], counter: u16) {
        (self.0)(rotor_offsets, counter)
    }
}

/// Runs one stepping round, advances the counter and notifies `observers`.
///
/// # Examples
///
/// ```
/// use fialka::{stepping, MachineConfiguration};
///
/// let mut config = MachineConfiguration::default();
/// stepping::step(&mut config, &mut []);
/// assert_eq!(config.rotor_offsets()[1], 0);
/// assert_eq!(config.rotor_offsets()[8], 9);
/// assert_eq!(config.counter(), 1);
/// ```
pub fn step(config: &mut MachineConfiguration, observers: &mut [Box<dyn StepObserver>]) {
    let tables = *config.tables();
    let rotor_orders = config.rotor_orders();
    let ring_offsets = config.ring_offsets();
    let offsets = config.rotor_offsets_mut();

    for &i in &CHAIN_A {
        let check = (offsets[i] as usize + ring_offsets[i] as usize + CHAIN_A_CHECK) % CONTACTS;
        offsets[i] = ((offsets[i] as usize + CONTACTS - 1) % CONTACTS) as u8;
        if tables.has_pin(rotor_orders[i] as usize, check) {
            break;
        }
    }
    for &i in &CHAIN_B {
        let check = (offsets[i] as usize + ring_offsets[i] as usize + CHAIN_B_CHECK) % CONTACTS;
        offsets[i] = ((offsets[i] as usize + 1) % CONTACTS) as u8;
        if tables.has_pin(rotor_orders[i] as usize, check) {
            break;
        }
    }
    let offsets = *offsets;

    config.advance_counter();
    let counter = config.counter();
    trace!(?offsets, counter, "rotors stepped");
    for observer in observers.iter_mut() {
        observer.rotors_stepped(&offsets, counter);
    }
}
