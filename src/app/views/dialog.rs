//! # Dialogs
//!
//! Blocking yes/no prompts and alerts raised by the screen controllers.

use inquire::Confirm;

/// User-facing confirmation and alert prompts
pub trait Dialog {
    /// Ask a yes/no question; anything but an explicit yes counts as no
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to see before continuing
    fn alert(&self, message: &str);
}

/// [`Dialog`] on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDialog;

impl TerminalDialog {
    pub fn new() -> Self {
        Self
    }
}

impl Dialog for TerminalDialog {
    fn confirm(&self, message: &str) -> bool {
        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!("Confirmation prompt ended without answer: {}", e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("\n⚠  {message}\n");
    }
}
