use crate::error::ScanError;
use crate::models::{OutputFormat, WcagLevel, WcagVersion};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Interactive stdin prompter for scan selections not given as flags.
///
/// Level and version re-ask until valid; an invalid format falls back to
/// `table` after a warning; a blank directory means the current working
/// directory.
pub struct UserPrompter<R: BufRead> {
    input: R,
    use_colors: bool,
}

impl UserPrompter<io::BufReader<io::Stdin>> {
    pub fn stdin(use_colors: bool) -> Self {
        Self::new(io::BufReader::new(io::stdin()), use_colors)
    }
}

impl<R: BufRead> UserPrompter<R> {
    pub fn new(input: R, use_colors: bool) -> Self {
        Self { input, use_colors }
    }

    pub fn display_welcome(&self) {
        if self.use_colors {
            println!("\x1b[1m👋 Welcome to AI Accessibility Checker\x1b[0m\n");
        } else {
            println!("👋 Welcome to AI Accessibility Checker\n");
        }
    }

    pub fn prompt_level(&mut self) -> Result<WcagLevel, ScanError> {
        let mut question =
            "🧩 Which WCAG accessibility level do you want to check? (A / AA / AAA): ".to_string();

        loop {
            let answer = self.ask(&question)?;
            match WcagLevel::from_str(&answer) {
                Ok(level) => return Ok(level),
                Err(_) => {
                    question = "❗ Please enter a valid level (A / AA / AAA): ".to_string();
                }
            }
        }
    }

    pub fn prompt_version(&mut self) -> Result<WcagVersion, ScanError> {
        let mut question =
            "📘 Which WCAG version do you want to check? (2.0 / 2.1 / 2.2): ".to_string();

        loop {
            let answer = self.ask(&question)?;
            match WcagVersion::from_str(&answer) {
                Ok(version) => return Ok(version),
                Err(_) => {
                    question = "❗ Please enter a valid version (2.0 / 2.1 / 2.2): ".to_string();
                }
            }
        }
    }

    pub fn prompt_format(&mut self) -> Result<OutputFormat, ScanError> {
        let answer = self.ask("📊 How would you like results? (table / list): ")?;

        match OutputFormat::from_str(&answer) {
            Ok(format) => Ok(format),
            Err(_) => {
                println!("⚠️ Invalid choice. Defaulting to 'table'.");
                Ok(OutputFormat::Table)
            }
        }
    }

    pub fn prompt_directory(&mut self) -> Result<PathBuf, ScanError> {
        let answer = self.ask(
            "📂 Enter the directory path to scan the files (leave blank for current directory): ",
        )?;

        if answer.is_empty() {
            Ok(std::env::current_dir()?)
        } else {
            Ok(PathBuf::from(answer))
        }
    }

    fn ask(&mut self, question: &str) -> Result<String, ScanError> {
        print!("{}", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 {
            // EOF on stdin mid-prompt: nothing sensible to continue with.
            return Err(ScanError::InvalidArguments(
                "Input closed before a selection was made".to_string(),
            ));
        }

        Ok(answer.trim().to_string())
    }
}
