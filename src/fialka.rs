//! Fialka: the machine as an operator sees it.
//!
//! Couples a [`MachineConfiguration`] with the keyboard/print-head codec and
//! any number of stepping observers, and processes whole messages.

use crate::codec::{self, InvalidInputPolicy, INVALID_MARK};
use crate::config::MachineConfiguration;
use crate::error::FialkaError;
use crate::network;
use crate::stepping::{FnObserver, StepObserver};
use crate::tables::ROTORS;

/// Fialka M-125 / M-125-3 rotor cipher machine.
///
/// # Architecture
///
/// Each typed character is mapped to one of 30 contacts, routed through the
/// permutation network (keyboard, punch card, entry disk, ten rotors,
/// reflector and back), mapped back to a printable character, and the rotors
/// step. Stepping depends only on the rotor positions, so a decrypting
/// machine started from the same key tracks the encrypting one exactly.
///
/// Observers registered with [`add_observer`](Self::add_observer) see the
/// rotor offsets after every processed symbol.
#[derive(Default)]
pub struct Fialka {
    config: MachineConfiguration,
    observers: Vec<Box<dyn StepObserver>>,
}

impl std::fmt::Debug for Fialka {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fialka")
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Fialka {
    /// Creates a machine with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use fialka::Fialka;
    ///
    /// let mut machine = Fialka::new();
    /// assert_eq!(machine.process("TESTTESTTESTTEST").unwrap(), "PH7FR2EMWW8B8XRA");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine from an existing configuration.
    pub fn with_configuration(config: MachineConfiguration) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    pub fn configuration(&self) -> &MachineConfiguration {
        &self.config
    }

    /// Mutable access for changing the key or the mode switches.
    pub fn configuration_mut(&mut self) -> &mut MachineConfiguration {
        &mut self.config
    }

    pub fn into_configuration(self) -> MachineConfiguration {
        self.config
    }

    /// Registers an observer notified after every stepping round.
    pub fn add_observer(&mut self, observer: impl StepObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Registers a closure as stepping observer.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use fialka::Fialka;
    ///
    /// let steps = Rc::new(Cell::new(0));
    /// let seen = Rc::clone(&steps);
    ///
    /// let mut machine = Fialka::new();
    /// machine.on_step(move |_offsets, _counter| seen.set(seen.get() + 1));
    /// machine.process("HELLO").unwrap();
    /// assert_eq!(steps.get(), 5);
    /// ```
    pub fn on_step<F>(&mut self, f: F)
    where
        F: FnMut(&[u8; ROTORS], u16) + 'static,
    {
        self.add_observer(FnObserver(f));
    }

    /// Processes one contact. See [`network::encrypt_symbol`].
    ///
    /// # Errors
    /// Returns [`FialkaError::UnreachableContact`] if a NumLock10 loop does
    /// not terminate.
    pub fn encrypt_symbol(&mut self, z: u8) -> Result<u8, FialkaError> {
        network::encrypt_symbol(&mut self.config, z, &mut self.observers)
    }

    /// Encrypts, decrypts or echoes `input` according to the operation mode.
    ///
    /// # Parameters
    /// - `input`: Typed text. Characters without a key are handled by the
    ///   configured [`InvalidInputPolicy`].
    ///
    /// # Errors
    /// Returns the first [`FialkaError`] raised by the network. Symbols
    /// processed before the failure have already stepped the rotors.
    pub fn process(&mut self, input: &str) -> Result<String, FialkaError> {
        self.process_with_progress(input, |_, _| {})
    }

    /// Like [`process`](Self::process), calling `progress(done, total)` after
    /// every input character.
    pub fn process_with_progress<P>(
        &mut self,
        input: &str,
        mut progress: P,
    ) -> Result<String, FialkaError>
    where
        P: FnMut(usize, usize),
    {
        let total = input.chars().count();
        let mut output = String::with_capacity(input.len());
        for (done, c) in input.chars().enumerate() {
            match codec::char_to_z30(&self.config, c) {
                Some(z) => {
                    let out = self.encrypt_symbol(z)?;
                    output.push(codec::z30_to_char(&self.config, out));
                    codec::track_mixed_shift(&mut self.config, z, out);
                }
                None => match self.config.invalid_input_policy() {
                    InvalidInputPolicy::Remove => {}
                    InvalidInputPolicy::KeepAndMark => output.push(INVALID_MARK),
                    InvalidInputPolicy::KeepUnchanged => output.push(c),
                },
            }
            progress(done + 1, total);
        }
        Ok(output)
    }
}
