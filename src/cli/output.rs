//! Password delivery: terminal, file or clipboard.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroizing;

/// Write one password per line.
pub fn to_writer<W: Write>(out: &mut W, passwords: &[Zeroizing<String>]) -> io::Result<()> {
    for password in passwords {
        out.write_all(password.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

pub fn to_stdout(passwords: &[Zeroizing<String>]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    to_writer(&mut out, passwords)
}

/// Append to `path`, creating it if needed.
pub fn to_file(path: &Path, passwords: &[Zeroizing<String>]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    to_writer(&mut BufWriter::new(file), passwords)
}

/// Copy newline-separated passwords to the system clipboard.
pub fn to_clipboard(passwords: &[Zeroizing<String>]) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;

    let mut joined = Zeroizing::new(String::new());
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(password);
    }

    // The provider takes ownership of its copy; ours is wiped on drop.
    ctx.set_contents(joined.to_string()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passwords(items: &[&str]) -> Vec<Zeroizing<String>> {
        items.iter().map(|p| Zeroizing::new(p.to_string())).collect()
    }

    #[test]
    fn test_to_writer_lines() {
        let mut buf = Vec::new();
        to_writer(&mut buf, &passwords(&["abc", "d-e_f"])).unwrap();
        assert_eq!(buf, b"abc\nd-e_f\n");
    }

    #[test]
    fn test_to_writer_empty() {
        let mut buf = Vec::new();
        to_writer(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_to_file_appends() {
        let dir = std::env::temp_dir().join(format!("rulepass-output-{}", std::process::id()));
        let path = dir.join("passwords.txt");

        to_file(&path, &passwords(&["one"])).unwrap();
        to_file(&path, &passwords(&["two", "three"])).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
        let _ = std::fs::remove_dir_all(dir);
    }
}
