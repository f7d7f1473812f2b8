//! Interactive questions asked before anything is written.
//!
//! Every question returns `Ok(None)` when the user interrupts, so the caller
//! decides how to wind down.

use std::path::Path;

use crate::app::palette::Palette;
use crate::domain::{AppError, BaseFolder, Element, parse_element};
use crate::ports::Console;

const RETRY_MESSAGE: &str = "Didn't catch that, try again.";

/// Answer to the confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    Retry,
}

impl Confirmation {
    /// Interpret an answer; an empty answer confirms.
    pub fn parse(answer: &str) -> Confirmation {
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => Confirmation::Confirmed,
            "n" | "no" => Confirmation::Declined,
            _ => Confirmation::Retry,
        }
    }
}

/// Ask which category the element belongs to until a known token is entered.
pub fn ask_base_folder<C: Console>(console: &mut C) -> Result<Option<BaseFolder>, AppError> {
    let prompt = BaseFolder::prompt_hint();
    loop {
        let Some(answer) = console.ask(&prompt)? else {
            return Ok(None);
        };
        match BaseFolder::from_token(&answer) {
            Some(folder) => return Ok(Some(folder)),
            None => console.say(RETRY_MESSAGE)?,
        }
    }
}

/// Ask for the element path relative to the category folder.
///
/// Input that cannot name an element (empty, absolute, or with empty, `.` or
/// `..` segments) is reported and asked again.
pub fn ask_element<C: Console>(
    console: &mut C,
    palette: &Palette,
    root: &Path,
    base: BaseFolder,
) -> Result<Option<Element>, AppError> {
    let prompt = format!("Where does it go? {}/", base.dir_name());
    loop {
        let Some(answer) = console.ask(&prompt)? else {
            return Ok(None);
        };
        match parse_element(root, base, &answer) {
            Ok(element) => return Ok(Some(element)),
            Err(AppError::InvalidElementPath(_)) => {
                let hint = "The element needs a name, e.g. Button or Course/Card \
                            (no leading '/', no empty, '.' or '..' segments).";
                console.say(&palette.warning(hint))?;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Show the files about to be created and ask for the go-ahead.
///
/// Returns `Some(true)` to proceed and `Some(false)` when the user declines.
pub fn ask_confirmation<C: Console>(
    console: &mut C,
    palette: &Palette,
    files: &[String],
) -> Result<Option<bool>, AppError> {
    let listing =
        files.iter().map(|file| format!("\t{}", palette.file(file))).collect::<Vec<_>>().join("\n");

    loop {
        console.say("")?;
        console.say(&palette.heading("Files to create:"))?;
        console.say(&listing)?;
        console.say("")?;

        let Some(answer) = console.ask("Ok? [Y]/n")? else {
            return Ok(None);
        };
        match Confirmation::parse(&answer) {
            Confirmation::Confirmed => return Ok(Some(true)),
            Confirmation::Declined => return Ok(Some(false)),
            Confirmation::Retry => console.say(RETRY_MESSAGE)?,
        }
    }
}
