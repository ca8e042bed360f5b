//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal confirmation. When stdin is not a terminal
//! every prompt is skipped and the item is left as reported.

use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::error::Result;

/// Whether prompts can be shown.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Ask a yes/no question; `None` when prompting is not possible.
pub fn confirm(prompt: &str) -> Result<Option<bool>> {
    if !is_interactive() {
        return Ok(None);
    }
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(Some(answer))
}
