//! Character sets and the weighted character source built from them.

use crate::error::Result;
use crate::rand::WeightedEntry;

use super::Configuration;

pub const DIGITS: &str = "0123456789";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// OWASP password special characters.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const URL_SAFE_SPECIAL: &str = "-_";

/// Letters without look-alikes (no I, O, l, o).
pub const UNAMBIGUOUS_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz";
/// Digits without look-alikes (no 0, 1).
pub const UNAMBIGUOUS_DIGITS: &str = "23456789";
/// Special characters that survive most input fields and fonts.
pub const COMPATIBLE_SPECIAL: &str = "_-@!*.";

/// Build the weighted character entries for a configuration.
///
/// A class's share of the distribution is its minimum over the sum of all
/// minimums, split evenly across its distinct members. Classes with a zero
/// minimum contribute nothing.
pub fn build(config: &Configuration) -> Result<Vec<WeightedEntry<char>>> {
    config.validate()?;

    let total = config.total_minimum() as f64;
    let mut entries = Vec::new();

    for class in &config.character_classes {
        if class.minimum == 0 {
            continue;
        }
        let members = class.members();
        let weight = (class.minimum as f64 / total) / members.len() as f64;
        entries.extend(members.into_iter().map(|c| WeightedEntry::new(c, weight)));
    }

    Ok(entries)
}

/// Number of characters in `password` that belong to `class`.
pub fn occurrences(password: &[char], class: &[char]) -> usize {
    password.iter().filter(|c| class.contains(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pass::CharacterClass;

    fn weight_of(entries: &[WeightedEntry<char>], c: char) -> f64 {
        entries
            .iter()
            .filter(|e| e.value == c)
            .map(|e| e.weight)
            .sum()
    }

    #[test]
    fn test_build_weights_follow_minimums() {
        let config = Configuration::new(
            8,
            vec![
                CharacterClass::new("abcd", 3),
                CharacterClass::new("12", 3),
                CharacterClass::new("-", 2),
            ],
        );
        let entries = build(&config).unwrap();

        assert_eq!(entries.len(), 7);
        assert!((weight_of(&entries, 'a') - 3.0 / 8.0 / 4.0).abs() < 1e-12);
        assert!((weight_of(&entries, '1') - 3.0 / 8.0 / 2.0).abs() < 1e-12);
        assert!((weight_of(&entries, '-') - 2.0 / 8.0).abs() < 1e-12);

        let total: f64 = entries.iter().map(|e| e.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_skips_zero_minimum() {
        let config = Configuration::new(
            4,
            vec![CharacterClass::new("ab", 2), CharacterClass::new("xyz", 0)],
        );
        let entries = build(&config).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(weight_of(&entries, 'x'), 0.0);
    }

    #[test]
    fn test_build_ignores_duplicate_members() {
        let config = Configuration::new(2, vec![CharacterClass::new("aab", 2)]);
        let entries = build(&config).unwrap();
        assert_eq!(entries.len(), 2);
        assert!((weight_of(&entries, 'a') - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_build_rejects_invalid() {
        let config = Configuration::new(8, vec![CharacterClass::new("ab", 0)]);
        assert_eq!(build(&config).unwrap_err(), Error::NoRequiredCharacters);
    }

    #[test]
    fn test_occurrences() {
        let password: Vec<char> = "a1-b2--c".chars().collect();
        assert_eq!(occurrences(&password, &['-']), 3);
        assert_eq!(occurrences(&password, &['a', 'b', 'c']), 3);
        assert_eq!(occurrences(&password, &['z']), 0);
        assert_eq!(occurrences(&[], &['a']), 0);
    }

    #[test]
    fn test_unambiguous_sets_exclude_lookalikes() {
        for c in ['I', 'O', 'l', 'o'] {
            assert!(!UNAMBIGUOUS_LETTERS.contains(c));
        }
        for c in ['0', '1'] {
            assert!(!UNAMBIGUOUS_DIGITS.contains(c));
        }
    }
}
