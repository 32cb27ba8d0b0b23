//! Password generation.

use rand_core::RngCore;
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::{Configuration, Rule, charset};
use crate::error::{Error, Result};
use crate::rand::{SecureRandom, WeightedRandomSet};

/// Characters a rule may reject per `generate` call before it gives up.
pub const MAX_REJECTIONS: usize = 10;

/// Upper bound on the candidate buffer reserved up front.
const PREALLOCATE: usize = 256;

/// Generates random passwords matching a rule.
///
/// The character source is weighted once, from the configuration the rule
/// returns at construction. Each [`generate`](Self::generate) call re-reads
/// the configuration for its length and class targets only. If a rule's
/// configuration changes, call [`refresh`](Self::refresh) to reweight.
pub struct Generator<Ru, R = SecureRandom> {
    characters: WeightedRandomSet<char, R>,
    rule: Ru,
}

impl<Ru: Rule> Generator<Ru, SecureRandom> {
    /// Builds a generator drawing from the operating system's secure source.
    pub fn new(rule: Ru) -> Result<Self> {
        Self::with_source(rule, SecureRandom)
    }
}

impl<Ru: Rule, R: RngCore> Generator<Ru, R> {
    /// Builds a generator drawing from `source`.
    ///
    /// Fails fast if the rule's configuration can never produce a password.
    pub fn with_source(rule: Ru, source: R) -> Result<Self> {
        let entries = charset::build(&rule.config())?;
        let characters = WeightedRandomSet::with_source(entries, source)?;
        debug!(
            entries = characters.len(),
            total_weight = characters.total_weight(),
            "built character source"
        );
        Ok(Self { characters, rule })
    }

    /// Reweights the character source from the rule's current configuration.
    pub fn refresh(&mut self) -> Result<()> {
        let entries = charset::build(&self.rule.config())?;
        self.characters.reweight(entries)
    }

    pub fn rule(&self) -> &Ru {
        &self.rule
    }

    /// Shannon entropy of one drawn character, in bits.
    pub fn entropy_per_char(&self) -> f64 {
        self.characters.entropy_bits()
    }

    /// Generate a new random password.
    ///
    /// Characters are kept in the order they were drawn. Returns
    /// [`Error::TooManyRejections`] once the rule has rejected
    /// [`MAX_REJECTIONS`] characters. Candidates that grow past 1.5x the
    /// target length are discarded and rebuilt; that does not reset the
    /// rejection count. A required class with no member left in the
    /// character source fails with [`Error::UndrawableClass`] until
    /// [`refresh`](Self::refresh) is called.
    pub fn generate(&mut self) -> Result<Zeroizing<String>> {
        let config = self.rule.config();
        config.validate()?;

        let classes: Vec<Vec<char>> = config
            .character_classes
            .iter()
            .map(|c| c.members())
            .collect();
        self.check_drawable(&config, &classes)?;
        let max_length = config.max_length();

        let mut password: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(
            max_length.saturating_add(1).min(PREALLOCATE),
        ));
        let mut rejections = 0;

        while rejections < MAX_REJECTIONS {
            if complete(&config, &classes, &password) {
                return Ok(Zeroizing::new(password.iter().collect()));
            }

            password.push(self.characters.next());

            if !self.rule.valid(&password) {
                password.pop();
                rejections += 1;
                trace!(rejections, "rule rejected character");
                continue;
            }

            // Bound the long tail: past the maximum length, start over.
            if password.len() > max_length {
                debug!(length = password.len(), max_length, "restarting overlong password");
                password.zeroize();
            }
        }

        debug!(rejections, "rule rejected too many characters");
        Err(Error::TooManyRejections)
    }

    /// Every required class needs a member the character source can return,
    /// or no candidate could ever complete.
    fn check_drawable(&self, config: &Configuration, classes: &[Vec<char>]) -> Result<()> {
        let drawable = self.characters.support();
        for (index, (class, members)) in config.character_classes.iter().zip(classes).enumerate() {
            if class.minimum > 0 && !members.iter().any(|c| drawable.contains(c)) {
                debug!(index, "class has no drawable characters");
                return Err(Error::UndrawableClass { index });
            }
        }
        Ok(())
    }
}

/// Have we met the minimum length and every class minimum?
fn complete(config: &Configuration, classes: &[Vec<char>], password: &[char]) -> bool {
    if password.len() < config.target_length {
        return false;
    }

    config
        .character_classes
        .iter()
        .zip(classes)
        .all(|(class, members)| charset::occurrences(password, members) >= class.minimum)
}
