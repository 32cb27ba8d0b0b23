//! Entropy report drawn as a box on stderr.

use rulepass::rand::entropy_source;

const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────┐
fn box_top(title: &str) {
    let title_part = format!("─ {title} ");
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    eprintln!("┌{}{}┐", title_part, "─".repeat(remaining));
}

/// Print box content line: │ content                              │
fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(content.chars().count());
    eprintln!("│ {}{} │", content, " ".repeat(padding));
}

fn box_bottom() {
    eprintln!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Estimated entropy of a password of `length` characters.
pub fn password_entropy(bits_per_char: f64, length: usize) -> f64 {
    bits_per_char * length as f64
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Summarize the entropy of the generated passwords.
pub fn print(bits_per_char: f64, lengths: &[usize]) {
    let (Some(&shortest), Some(&longest)) = (lengths.iter().min(), lengths.iter().max()) else {
        return;
    };
    let low = password_entropy(bits_per_char, shortest);
    let high = password_entropy(bits_per_char, longest);

    box_top("Entropy");
    if shortest == longest {
        box_line(&format!("{low:.1} bits ({})", entropy_strength(low)));
    } else {
        box_line(&format!(
            "{low:.1} - {high:.1} bits ({} - {})",
            entropy_strength(low),
            entropy_strength(high)
        ));
    }
    box_line(&format!("{bits_per_char:.2} bits per character"));
    box_line(&format!("Source: {}", entropy_source()));
    box_bottom();
}
