//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use fire_business::ApiResponse;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print an API response body, or `done` when there was none.
pub fn response(response: &ApiResponse, pretty: bool, done: &str) -> Result<()> {
    match response.json() {
        Some(value) if pretty => json_pretty(value),
        Some(value) => json(value),
        None => {
            success(done);
            Ok(())
        }
    }
}
