//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(
    name = "rulepass",
    version,
    about = "Rule-driven password generator",
    after_help = "EXAMPLES:\n  \
        rulepass                    One password with the saved or default settings\n  \
        rulepass -l 20 -n 3         Three passwords, at least 20 characters each\n  \
        rulepass --no-special       Letters and digits only\n  \
        rulepass -r rule.toml -e    Follow a rule file and report entropy\n  \
        rulepass -l 24 -s           Save 24 as the default length"
)]
pub struct CliFlags {
    /// Minimum characters per password (the result may be up to 1.5x longer)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Letters and digits only
    #[arg(long)]
    pub no_special: bool,

    /// Override the special character set
    #[arg(long, value_name = "CHARS", conflicts_with = "no_special")]
    pub special: Option<String>,

    /// Follow a TOML rule file instead of the built-in rule
    #[arg(short, long, value_name = "FILE")]
    pub rule: Option<PathBuf>,

    /// Append passwords to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print an entropy estimate to stderr
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Save the effective settings as defaults
    #[arg(short, long)]
    pub save: bool,

    /// Ignore saved settings
    #[arg(short, long)]
    pub default: bool,
}
