//! Placeholder login prompt.
//!
//! Asks for a display name before entering the chat. Any non-blank input is
//! accepted; there is no credential check behind it.

use rustyline::DefaultEditor;
use rustyline::Result as RlResult;
use rustyline::error::ReadlineError;

/// Whether the entered name is accepted. Anything non-blank passes.
pub fn is_accepted(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Prompt for a display name until one is accepted.
///
/// Returns `None` when the user bails out with ctrl-d.
pub fn prompt_login(rl: &mut DefaultEditor) -> RlResult<Option<String>> {
    loop {
        match rl.readline("name: ") {
            Ok(line) => {
                let name = line.trim();
                if is_accepted(name) {
                    return Ok(Some(name.to_string()));
                }
                println!("Please enter a name.");
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_blank_name_is_accepted() {
        assert!(is_accepted("alice"));
        assert!(is_accepted("  bob  "));
        assert!(is_accepted("x"));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(!is_accepted(""));
        assert!(!is_accepted("   "));
        assert!(!is_accepted("\t"));
    }
}
