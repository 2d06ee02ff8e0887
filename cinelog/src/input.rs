//! Prompt helpers for the interactive shell.
//!
//! All prompts run on the stderr terminal so stdout stays clean for the
//! collection listings themselves.

use std::ops::RangeInclusive;

use anyhow::Result;
use cinelog_core::normalize::{FieldFallback, NormalizeError};
use cinelog_model::{Rating, Year};
use dialoguer::Input;
use dialoguer::console::Term;

pub fn nonempty_string(prompt: &str) -> Result<String> {
    loop {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&Term::stderr())?;
        let value = value.trim().to_string();
        if value.is_empty() {
            eprintln!("Input cannot be empty. Please try again.");
            continue;
        }
        return Ok(value);
    }
}

pub fn bounded_int(
    prompt: &str,
    bounds: &RangeInclusive<i32>,
) -> Result<i32> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .interact_text_on(&Term::stderr())?;
        match raw.trim().parse::<i32>() {
            Ok(value) if bounds.contains(&value) => return Ok(value),
            Ok(_) => eprintln!(
                "Please enter a number between {} and {}.",
                bounds.start(),
                bounds.end()
            ),
            Err(_) => eprintln!("Invalid input. Please enter an integer."),
        }
    }
}

pub fn bounded_float(
    prompt: &str,
    bounds: &RangeInclusive<f64>,
) -> Result<f64> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .interact_text_on(&Term::stderr())?;
        match raw.trim().parse::<f64>() {
            Ok(value) if bounds.contains(&value) => return Ok(value),
            Ok(_) => eprintln!(
                "Please enter a number between {} and {}.",
                bounds.start(),
                bounds.end()
            ),
            Err(_) => eprintln!("Invalid input. Please enter a number."),
        }
    }
}

/// Blank means "clear".
pub fn optional_string(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text_on(&Term::stderr())?;
    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Blank means "no bound".
pub fn optional_int(prompt: &str) -> Result<Option<i32>> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&Term::stderr())?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<i32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => eprintln!(
                "Invalid input. Please enter a valid number or leave blank."
            ),
        }
    }
}

/// Blank means "no bound".
pub fn optional_float(prompt: &str) -> Result<Option<f64>> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&Term::stderr())?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => eprintln!(
                "Invalid input. Please enter a valid number or leave blank."
            ),
        }
    }
}

/// Interactive fallback used when fetched metadata is unusable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptFallback;

impl FieldFallback for PromptFallback {
    fn year(
        &self,
        bounds: &RangeInclusive<i32>,
    ) -> Result<Year, NormalizeError> {
        let prompt = format!(
            "Source year is unusable; enter the release year ({}-{})",
            bounds.start(),
            bounds.end()
        );
        bounded_int(&prompt, bounds)
            .map(Year::new)
            .map_err(|e| NormalizeError::Input(e.to_string()))
    }

    fn rating(
        &self,
        bounds: &RangeInclusive<f64>,
    ) -> Result<Rating, NormalizeError> {
        let prompt = format!(
            "Source rating is unavailable; enter a rating ({}-{})",
            bounds.start(),
            bounds.end()
        );
        bounded_float(&prompt, bounds)
            .map(Rating::new)
            .map_err(|e| NormalizeError::Input(e.to_string()))
    }
}
