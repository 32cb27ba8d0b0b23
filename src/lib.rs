//! Rule-driven password generation.
//!
//! Passwords are assembled one character at a time from a weighted
//! distribution derived from a [`Rule`]'s character classes, then accepted
//! or rolled back by the rule's validity predicate.
//!
//! ```
//! use rulepass::{CharacterClass, Configuration, Generator, Rule};
//! use rulepass::pass::charset::{DIGITS, LOWERCASE};
//!
//! struct Pin;
//!
//! impl Rule for Pin {
//!     fn config(&self) -> Configuration {
//!         Configuration::new(8, vec![
//!             CharacterClass::new(LOWERCASE, 4),
//!             CharacterClass::new(DIGITS, 4),
//!         ])
//!     }
//!
//!     fn valid(&self, _candidate: &[char]) -> bool {
//!         true
//!     }
//! }
//!
//! let mut generator = Generator::new(Pin).unwrap();
//! let password = generator.generate().unwrap();
//! assert!(password.chars().count() >= 8);
//! ```

pub mod error;
pub mod pass;
pub mod rand;

pub use error::{Error, Result};
pub use pass::{CharacterClass, Configuration, Generator, Rule};
pub use self::rand::{SecureRandom, UnitFloat, WeightedEntry, WeightedRandomSet};
