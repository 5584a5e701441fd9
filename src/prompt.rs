//! Interactive prompt helpers shared by the commands.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;

/// Prompt for a line of free text.
pub fn text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt until `validate` accepts the input. The retry loop has no attempt
/// cap; the only way out is a matching value.
pub fn with_retry(prompt: &str, error_hint: &str, validate: impl Fn(&str) -> bool) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        if validate(&input) {
            return Ok(input);
        }
        eprintln!("{}", error_hint.red());
    }
}

/// Ask for deletion confirmation. Only a case-insensitive "yes" confirms;
/// "no", "y", an empty line or anything else cancels.
pub fn confirm_deletion() -> Result<bool> {
    let input: String = Input::new()
        .with_prompt("Do you want to proceed with the deletion? (Yes/No)")
        .allow_empty(true)
        .interact_text()?;
    Ok(is_confirmed(&input))
}

fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}
