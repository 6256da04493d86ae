//! Interactive prompt helpers for the studio loop.
//!
//! Ctrl-C and Esc are treated as cancellation: helpers return `None` and the
//! caller falls back to the menu instead of erroring out.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;

/// Free-text input with the current value editable in place.
pub(crate) fn prompt_text(label: &str, initial: &str) -> Result<Option<String>, AppError> {
    let input = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();
    match input {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {label}: {err}"))),
    }
}

/// Numeric input for the simulation sliders and weights.
pub(crate) fn prompt_number<T>(label: &str, current: T) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr + std::fmt::Display + Clone,
    <T as std::str::FromStr>::Err: std::fmt::Display + std::fmt::Debug,
{
    let input =
        Input::<T>::new().with_prompt(label).with_initial_text(current.to_string()).interact_text();
    match input {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {label}: {err}"))),
    }
}

/// Single choice from a list; Esc cancels.
pub(crate) fn select(label: &str, items: &[String]) -> Result<Option<usize>, AppError> {
    if items.is_empty() {
        return Ok(None);
    }
    let choice = Select::new().with_prompt(label).items(items).default(0).interact_opt();
    match choice {
        Ok(index) => Ok(index),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read selection: {err}"))),
    }
}

/// Yes/no confirmation, defaulting to no.
pub(crate) fn confirm(label: &str) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(label).default(false).interact() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::Validation(format!("Failed to read confirmation: {err}"))),
    }
}
