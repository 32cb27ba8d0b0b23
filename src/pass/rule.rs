//! The policy a generator follows.

use std::rc::Rc;
use std::sync::Arc;

use super::Configuration;

/// Target composition plus an acceptance test for candidate passwords.
///
/// The generator calls [`config`](Rule::config) once when it is built, to
/// weight its character source, and again at the start of every
/// [`generate`](super::Generator::generate) call, to decide when a candidate
/// is complete. A rule should therefore return the same configuration for the
/// lifetime of a generator.
///
/// [`valid`](Rule::valid) sees the candidate after every appended character.
/// Returning `false` rolls that character back.
pub trait Rule {
    fn config(&self) -> Configuration;

    fn valid(&self, candidate: &[char]) -> bool;
}

impl<R: Rule + ?Sized> Rule for &R {
    fn config(&self) -> Configuration {
        (**self).config()
    }

    fn valid(&self, candidate: &[char]) -> bool {
        (**self).valid(candidate)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn config(&self) -> Configuration {
        (**self).config()
    }

    fn valid(&self, candidate: &[char]) -> bool {
        (**self).valid(candidate)
    }
}

impl<R: Rule + ?Sized> Rule for Rc<R> {
    fn config(&self) -> Configuration {
        (**self).config()
    }

    fn valid(&self, candidate: &[char]) -> bool {
        (**self).valid(candidate)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn config(&self) -> Configuration {
        (**self).config()
    }

    fn valid(&self, candidate: &[char]) -> bool {
        (**self).valid(candidate)
    }
}
