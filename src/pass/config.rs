//! Password length and composition settings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A set of characters and how many of them a password must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    /// Members of the class. Order is kept, duplicates are ignored.
    pub characters: String,
    /// Minimum number of characters from this class in a finished password.
    pub minimum: usize,
}

impl CharacterClass {
    pub fn new(characters: impl Into<String>, minimum: usize) -> Self {
        Self {
            characters: characters.into(),
            minimum,
        }
    }

    /// Distinct members in first-seen order.
    pub fn members(&self) -> Vec<char> {
        let mut members: Vec<char> = Vec::with_capacity(self.characters.len());
        for c in self.characters.chars() {
            if !members.contains(&c) {
                members.push(c);
            }
        }
        members
    }
}

/// Properties of the generated password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Minimum password length.
    ///
    /// The actual length is random, in `target_length..=1.5 * target_length`.
    /// A random length lets class minimums be met without fixing an exact
    /// composition (eg. exactly 2 digits and exactly 1 special character).
    #[serde(rename = "length")]
    pub target_length: usize,
    #[serde(rename = "classes", default)]
    pub character_classes: Vec<CharacterClass>,
}

impl Configuration {
    pub fn new(target_length: usize, character_classes: Vec<CharacterClass>) -> Self {
        Self {
            target_length,
            character_classes,
        }
    }

    /// Longest candidate kept before generation restarts from empty.
    pub fn max_length(&self) -> usize {
        self.target_length.saturating_add(self.target_length / 2)
    }

    /// Sum of every class minimum.
    pub fn total_minimum(&self) -> usize {
        self.character_classes.iter().map(|c| c.minimum).sum()
    }

    /// Checks that a generator can always finish a password for this
    /// configuration.
    ///
    /// The length check sums class minimums as if the classes were disjoint.
    /// A character shared by two classes counts toward both, so overlapping
    /// classes that could still complete may be rejected as
    /// [`Error::Unsatisfiable`].
    pub fn validate(&self) -> Result<()> {
        if self.target_length == 0 {
            return Err(Error::ZeroLength);
        }

        for (index, class) in self.character_classes.iter().enumerate() {
            if class.minimum > 0 && class.characters.is_empty() {
                return Err(Error::EmptyClass { index });
            }
        }

        let required = self.total_minimum();
        if required == 0 {
            return Err(Error::NoRequiredCharacters);
        }
        if required > self.max_length() {
            return Err(Error::Unsatisfiable {
                required,
                max_length: self.max_length(),
            });
        }

        Ok(())
    }
}
