//! Terminal implementations of the prompt and link-opening seams.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info};
use wishlist::{LinkOpener, Prompt};

/// Alerts go to stderr; confirmations read a y/N answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Hands links to the desktop's URL handler without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

#[cfg(target_os = "macos")]
const OPENERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const OPENERS: &[&str] = &["explorer"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENERS: &[&str] = &["xdg-open", "gio", "sensible-browser"];

fn find_opener() -> io::Result<PathBuf> {
    OPENERS
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no URL handler found (tried: {})", OPENERS.join(", ")),
            )
        })
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        let program = find_opener()?;
        let mut command = Command::new(&program);
        if program.file_stem().is_some_and(|stem| stem == "gio") {
            command.arg("open");
        }
        debug!("Opening {url} with {}", program.display());
        // The handler runs detached with no access to our stdio.
        command
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        info!("Opened link {url}");
        Ok(())
    }
}
