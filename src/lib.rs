//! Fialka M-125 / M-125-3 rotor cipher machine.
//!
//! Fialka is the Soviet ten-rotor cipher machine used throughout the Warsaw
//! Pact. Its reflector is not self-inverse, so the machine has separate
//! Encrypt and Decrypt modes, and its rotors step in two independent chains
//! gated by blocking pins.
//!
//! This crate emulates the signal path and stepping of the M-125 and the
//! M-125-3, including PROTON II removable cores, the punch card, the 3K, 5K
//! and 6K rotor series and the 10-contact NumLock routing.
//!
//! # Architecture
//!
//! ```text
//! tables        (fixed wiring: rotor series, keyboard, entry disk, reflector)
//!     ↓ selected by
//! config        (daily key + mode switches + counter)
//!     ↓ read by                      ↓ advanced by
//! network       (one symbol)   →   stepping   (two pin-gated chains)
//!     ↑ contacts from / to
//! codec         (keyboard and print-head layouts)
//!     ↑
//! Fialka        (message processing, observers)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the default key:
//!
//! ```
//! use fialka::{Fialka, OperationMode};
//!
//! let mut encoder = Fialka::new();
//! let cipher = encoder.process("CRYPTO").unwrap();
//! assert_ne!(cipher, "CRYPTO");
//!
//! let mut decoder = Fialka::new();
//! decoder
//!     .configuration_mut()
//!     .set_operation_mode(OperationMode::Decrypt);
//! assert_eq!(decoder.process(&cipher).unwrap(), "CRYPTO");
//! ```
//!
//! Numbers-only traffic on an M-125-3 with PROTON II cores:
//!
//! ```
//! use fialka::{Fialka, MachineModel, NumLockType, RotorType};
//!
//! let mut machine = Fialka::new();
//! let config = machine.configuration_mut();
//! config.set_machine_model(MachineModel::M125_3);
//! config.set_numlock_type(NumLockType::NumLock10).unwrap();
//! config.set_rotor_type(RotorType::ProtonII);
//!
//! let cipher = machine.process("0123456789").unwrap();
//! assert!(cipher.chars().all(|c| c.is_ascii_digit()));
//! ```

#![deny(clippy::all)]

pub mod codec;
pub mod config;
pub mod daily_key;
pub mod error;
mod fialka;
pub mod network;
pub mod stepping;
pub mod tables;
pub(crate) mod utils;

pub use codec::{CountryLayout, InvalidInputPolicy, PrintHead, PrintHeadShift, TextMode};
pub use config::{
    CoreOrderSource, CoreSide, MachineConfiguration, MachineModel, NumLockType, OperationMode,
    RotorType,
};
pub use daily_key::{CoreKey, DailyKey};
pub use error::{ConfigurationError, FialkaError, LoopStage};
pub use fialka::Fialka;
pub use network::NumLock10Wiring;
pub use stepping::{FnObserver, StepObserver};
pub use tables::{RotorSeries, CONTACTS, ROTORS};
