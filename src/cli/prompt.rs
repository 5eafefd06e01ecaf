//! Interactive prompts
//!
//! Password entry (hidden, with an optional confirm loop) and manual key
//! entry for ghost-mode decryption.

use std::io::{BufRead, Write};

use crate::crypto::keys;
use crate::error::{EeaError, EeaResult};

/// Prompt for a password without echoing it.
///
/// With `confirm` set, the password is asked for twice and re-prompted until
/// both entries match.
pub fn prompt_password(confirm: bool) -> EeaResult<String> {
    loop {
        let password = rpassword::prompt_password("Enter password: ")
            .map_err(|e| EeaError::Prompt(e.to_string()))?;

        if password.is_empty() {
            println!("Password cannot be empty.");
            continue;
        }

        if !confirm {
            return Ok(password);
        }

        let check = rpassword::prompt_password("Confirm password: ")
            .map_err(|e| EeaError::Prompt(e.to_string()))?;

        if password == check {
            return Ok(password);
        }
        println!("Passwords do not match, try again.");
    }
}

/// Read keys from stdin, one per line, until an empty line or `done`.
///
/// Used by ghost-mode decryption, where the keys were shown once at
/// encryption time and never written anywhere.
pub fn read_keys_interactively() -> EeaResult<Vec<String>> {
    println!("Enter your keys one per line (finish with an empty line):");

    let stdin = std::io::stdin();
    let mut keys_in = Vec::new();

    loop {
        print!("> ");
        std::io::stdout()
            .flush()
            .map_err(|e| EeaError::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| EeaError::Prompt(e.to_string()))?;

        let entry = line.trim();
        if read == 0 || entry.is_empty() || entry.eq_ignore_ascii_case("done") {
            break;
        }
        keys_in.push(entry.to_string());
    }

    keys::validate(&keys_in)?;
    Ok(keys_in)
}

/// Ask a yes/no question; only an explicit `yes` counts.
pub fn confirm(question: &str) -> EeaResult<bool> {
    print!("{} (yes/no): ", question);
    std::io::stdout()
        .flush()
        .map_err(|e| EeaError::Prompt(e.to_string()))?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(|e| EeaError::Prompt(e.to_string()))?;

    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
