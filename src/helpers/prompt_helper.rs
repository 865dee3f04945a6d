use std::io::{self, BufRead, Write};
use crate::traits::confirmer::Confirmer;

pub struct PromptHelper;

impl PromptHelper {
    /// Print `label` and read one trimmed line; `default` is returned for an empty answer.
    /// A closed stdin yields `ErrorKind::UnexpectedEof`.
    pub fn ask(label: &str, default: &str) -> io::Result<String> {
        if default.is_empty() {
            print!("{}: ", label);
        } else {
            print!("{} [{}]: ", label, default);
        }
        io::stdout().flush()?;

        Self::read_answer(&mut io::stdin().lock(), default)
    }

    pub fn read_answer<R: BufRead>(reader: &mut R, default: &str) -> io::Result<String> {
        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let answer = input.trim();
        Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
    }

    pub fn is_eof(error: &io::Error) -> bool {
        error.kind() == io::ErrorKind::UnexpectedEof
    }

    pub fn is_yes(answer: &str) -> bool {
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "o" | "oui")
    }
}

/// Confirmation read from the terminal; anything but yes declines.
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        match PromptHelper::ask(&format!("{} (y/N)", prompt), "") {
            Ok(answer) => PromptHelper::is_yes(&answer),
            Err(e) => {
                log::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}
