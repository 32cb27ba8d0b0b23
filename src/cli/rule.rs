//! Rules the CLI can generate for.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use rulepass::pass::charset::{COMPATIBLE_SPECIAL, UNAMBIGUOUS_DIGITS, UNAMBIGUOUS_LETTERS};
use rulepass::{CharacterClass, Configuration, Rule};

// =============================================================================
// Built-in rule
// =============================================================================

/// Unambiguous letters and digits with an optional special class.
///
/// Minimums scale with the length: half letters, a third digits, a sixth
/// specials, each rounded up.
#[derive(Debug, Clone)]
pub struct DemoRule {
    pub length: usize,
    pub specials: Option<String>,
}

impl DemoRule {
    pub fn new(length: usize, special: bool, special_chars: Option<String>) -> Self {
        let specials = special.then(|| special_chars.unwrap_or_else(|| COMPATIBLE_SPECIAL.into()));
        Self { length, specials }
    }
}

fn share(length: usize, fraction: f64) -> usize {
    (length as f64 * fraction).ceil() as usize
}

impl Rule for DemoRule {
    fn config(&self) -> Configuration {
        let mut classes = vec![
            CharacterClass::new(UNAMBIGUOUS_LETTERS, share(self.length, 0.5)),
            CharacterClass::new(UNAMBIGUOUS_DIGITS, share(self.length, 0.33)),
        ];
        if let Some(specials) = &self.specials {
            classes.push(CharacterClass::new(specials.as_str(), share(self.length, 0.17)));
        }
        Configuration::new(self.length, classes)
    }

    fn valid(&self, _: &[char]) -> bool {
        true
    }
}

// =============================================================================
// Rule files
// =============================================================================

/// A fixed configuration plus substrings a password may not contain.
///
/// ```toml
/// length = 12
/// deny = ["--"]
///
/// [[classes]]
/// characters = "abcdefghijklmnopqrstuvwxyz"
/// minimum = 6
/// ```
#[derive(Debug, Clone)]
pub struct FileRule {
    config: Configuration,
    deny: Vec<String>,
}

#[derive(Deserialize)]
struct RuleFile {
    length: usize,
    #[serde(default)]
    classes: Vec<CharacterClass>,
    #[serde(default)]
    deny: Vec<String>,
}

impl FileRule {
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read rule {}: {e}", path.display()))?;
        Self::parse(&text).map_err(|e| format!("invalid rule {}: {e}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let file: RuleFile = toml::from_str(text)?;
        Ok(Self {
            config: Configuration::new(file.length, file.classes),
            deny: file.deny,
        })
    }

    /// Replaces the file's length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.config.target_length = length;
        self
    }
}

impl Rule for FileRule {
    fn config(&self) -> Configuration {
        self.config.clone()
    }

    fn valid(&self, candidate: &[char]) -> bool {
        if self.deny.is_empty() {
            return true;
        }
        let text: String = candidate.iter().collect();
        !self
            .deny
            .iter()
            .any(|d| !d.is_empty() && text.contains(d.as_str()))
    }
}
