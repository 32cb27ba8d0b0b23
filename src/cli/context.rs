//! CLI context - bundles settings, flags and the chosen rule.

use tracing::debug;
use zeroize::Zeroizing;

use rulepass::{Generator, Rule};

use super::rule::{DemoRule, FileRule};
use super::{CliFlags, output, prompts, report};
use crate::settings::{Settings, default_path};

/// Run failed; the message has already been printed.
pub struct Failed;

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Resolve settings: saved file (unless `--default`) overlaid with flags.
    pub fn new(flags: CliFlags) -> Self {
        prompts::set_quiet(flags.quiet);

        let mut settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_unreadable(&e.to_string());
                Settings::default()
            })
        };
        apply_flags(&mut settings, &flags);

        Self { settings, flags }
    }

    pub fn run(&self) -> Result<(), Failed> {
        if self.flags.save {
            self.save();
        }

        let rule = self.build_rule()?;
        let mut generator = Generator::new(rule).map_err(|e| {
            prompts::error(&format!("Error: {e}"));
            Failed
        })?;

        let count = self.settings.number.max(1);
        let mut passwords: Vec<Zeroizing<String>> = Vec::with_capacity(count);
        for _ in 0..count {
            let password = generator.generate().map_err(|e| {
                prompts::error(&format!("Error: {e}"));
                Failed
            })?;
            passwords.push(password);
        }
        debug!(count, "generated passwords");

        self.deliver(&passwords)?;

        if self.flags.entropy {
            let lengths: Vec<usize> = passwords.iter().map(|p| p.chars().count()).collect();
            report::print(generator.entropy_per_char(), &lengths);
        }
        Ok(())
    }

    fn save(&self) {
        let path = default_path();
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn build_rule(&self) -> Result<Box<dyn Rule>, Failed> {
        let Some(path) = &self.settings.rule else {
            return Ok(Box::new(DemoRule::new(
                self.settings.length,
                self.settings.special,
                self.settings.special_chars.clone(),
            )));
        };

        let rule = FileRule::load(path).map_err(|e| {
            prompts::error(&format!("Error: {e}"));
            Failed
        })?;
        debug!(path = %path.display(), "loaded rule file");

        // A rule file carries its own length; only an explicit -l replaces it.
        Ok(match self.flags.length {
            Some(length) => Box::new(rule.with_length(length)),
            None => Box::new(rule),
        })
    }

    fn deliver(&self, passwords: &[Zeroizing<String>]) -> Result<(), Failed> {
        if let Some(path) = &self.flags.output {
            output::to_file(path, passwords).map_err(|e| {
                prompts::error(&format!("Error: failed to write {}: {e}", path.display()));
                Failed
            })?;
            let full_path = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            prompts::passwords_written(passwords.len(), &full_path.display().to_string());
            return Ok(());
        }

        if self.flags.clipboard {
            match output::to_clipboard(passwords) {
                Ok(()) => {
                    prompts::clipboard_copied();
                    return Ok(());
                }
                Err(e) => prompts::clipboard_unavailable(&e),
            }
        }

        output::to_stdout(passwords).map_err(|e| {
            prompts::error(&format!("Error: {e}"));
            Failed
        })
    }
}

/// Overlay explicit flags on loaded settings.
fn apply_flags(settings: &mut Settings, flags: &CliFlags) {
    if let Some(length) = flags.length {
        settings.length = length;
    }
    if let Some(number) = flags.number {
        settings.number = number;
    }
    if flags.no_special {
        settings.special = false;
    }
    if let Some(chars) = &flags.special {
        settings.special = true;
        settings.special_chars = Some(chars.clone());
    }
    if let Some(rule) = &flags.rule {
        settings.rule = Some(rule.clone());
    }
}
