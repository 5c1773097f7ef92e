use super::Notifier;
use std::io::{BufRead, Write};

/// Prints alerts to the terminal.
///
/// With `confirm` set, each alert waits for Enter before returning, which is
/// the closest a terminal gets to a modal dialog.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier {
    confirm: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming() -> Self {
        Self { confirm: true }
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", message);
        if self.confirm {
            let _ = write!(out, "[press Enter to continue]");
            let _ = out.flush();
            let mut line = String::new();
            let _ = std::io::stdin().lock().read_line(&mut line);
        }
    }
}
