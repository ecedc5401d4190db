// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Tariff billing calculator.

use thiserror::Error;

/// The primary error type used across Tariff crates.
#[derive(Debug, Error)]
pub enum TariffError {
    /// A textual plan category did not match any known category.
    #[error("unknown plan category `{input}`{}", format_suggestion(.suggestion))]
    UnknownCategory {
        input: String,
        suggestion: Option<String>,
    },

    /// Writing the bill report failed.
    #[error("failed to write bill report: {source}")]
    Output { source: std::io::Error },

    /// Rendering bills as JSON failed.
    #[error("failed to serialize bills: {source}")]
    Serialization { source: serde_json::Error },
}

fn format_suggestion(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean `{s}`?)"),
        None => String::new(),
    }
}

impl From<std::io::Error> for TariffError {
    fn from(source: std::io::Error) -> Self {
        TariffError::Output { source }
    }
}

impl From<serde_json::Error> for TariffError {
    fn from(source: serde_json::Error) -> Self {
        TariffError::Serialization { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_message_includes_suggestion() {
        let err = TariffError::UnknownCategory {
            input: "domestik".into(),
            suggestion: Some("Domestic".into()),
        };
        assert_eq!(
            err.to_string(),
            "unknown plan category `domestik` (did you mean `Domestic`?)"
        );
    }

    #[test]
    fn unknown_category_message_without_suggestion() {
        let err = TariffError::UnknownCategory {
            input: "zzz".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown plan category `zzz`");
    }

    #[test]
    fn io_error_converts_to_output() {
        let err: TariffError = std::io::Error::other("pipe closed").into();
        assert!(matches!(err, TariffError::Output { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
