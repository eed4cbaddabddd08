//! Small helpers for controlled form fields.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::TargetCast;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn input_checked(e: &InputEvent) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Value of a text/number input from its change event.
pub fn change_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Parses a numeric field, treating an unparsable value as zero so a
/// half-typed number never panics the draft.
pub fn parse_f64(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

pub fn parse_i64(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Empty strings become None; used for optional text fields.
pub fn opt(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One image URL per line, blank lines dropped; used for gallery fields.
pub fn lines_to_vec(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
