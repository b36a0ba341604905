//! Rendering settings
//!
//! [`HtmlSettings`] selects the culture used for formatting and how strictly
//! the default encoder escapes text. Settings can be deserialized as part of a
//! larger configuration or read from environment variables.
//!
//! Environment variables:
//!
//! | Variable | Field | Example |
//! |----------|-------|---------|
//! | `REINHARDT_HTML_CULTURE` | `culture` | `fr-FR` |
//! | `REINHARDT_HTML_ENCODE_NON_ASCII` | `encode_non_ascii` | `true`, `1`, `yes`, `on` |

use crate::culture::Culture;
use crate::encoder::DefaultHtmlEncoder;
use crate::error::{HtmlError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;

/// Default prefix for environment variables
pub const ENV_PREFIX: &str = "REINHARDT_HTML_";

/// Settings for HTML rendering
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::HtmlSettings;
///
/// let settings = HtmlSettings::default();
/// assert!(settings.culture().unwrap().is_invariant());
/// assert!(!settings.encoder().encodes_non_ascii());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlSettings {
	/// Culture name; empty for the invariant culture
	pub culture: String,

	/// Escape every non-ASCII character as a character reference
	pub encode_non_ascii: bool,
}

impl HtmlSettings {
	/// Read settings from `REINHARDT_HTML_*` environment variables
	///
	/// Unset variables keep their defaults. A boolean that cannot be parsed is
	/// logged and ignored.
	///
	/// # Errors
	///
	/// Returns [`HtmlError::InvalidArgument`] when the culture name is not a
	/// built-in culture.
	pub fn from_env() -> Result<Self> {
		Self::from_env_with_prefix(ENV_PREFIX)
	}

	/// Read settings from environment variables with a custom prefix
	pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
		let mut settings = Self::default();

		if let Ok(culture) = env::var(format!("{}CULTURE", prefix)) {
			settings.culture = culture.trim().to_string();
		}

		let key = format!("{}ENCODE_NON_ASCII", prefix);
		if let Ok(value) = env::var(&key) {
			match parse_bool(&value) {
				Some(flag) => settings.encode_non_ascii = flag,
				None => tracing::warn!(
					key = %key,
					value = %value,
					"Ignoring unparseable boolean setting"
				),
			}
		}

		settings.validate()?;
		tracing::debug!(
			culture = %settings.culture,
			encode_non_ascii = settings.encode_non_ascii,
			"Loaded HTML settings from environment"
		);
		Ok(settings)
	}

	/// Resolve the configured culture
	///
	/// # Errors
	///
	/// Returns [`HtmlError::InvalidArgument`] for an unknown culture name.
	pub fn culture(&self) -> Result<Arc<Culture>> {
		Culture::from_name(&self.culture)
	}

	/// Build the encoder these settings describe
	pub fn encoder(&self) -> DefaultHtmlEncoder {
		if self.encode_non_ascii {
			DefaultHtmlEncoder::strict()
		} else {
			DefaultHtmlEncoder::new()
		}
	}

	/// Check that every value is usable
	pub fn validate(&self) -> Result<()> {
		self.culture().map(|_| ()).map_err(|e| match e {
			HtmlError::InvalidArgument(message) => {
				HtmlError::InvalidArgument(format!("invalid culture setting: {}", message))
			}
			other => other,
		})
	}
}

/// Parse `true/false/1/0/yes/no/on/off`, case-insensitively
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("true", Some(true))]
	#[case(" YES ", Some(true))]
	#[case("1", Some(true))]
	#[case("On", Some(true))]
	#[case("false", Some(false))]
	#[case("0", Some(false))]
	#[case("no", Some(false))]
	#[case("OFF", Some(false))]
	#[case("maybe", None)]
	#[case("", None)]
	fn test_parse_bool(#[case] input: &str, #[case] expected: Option<bool>) {
		assert_eq!(parse_bool(input), expected);
	}

	#[rstest]
	fn test_encoder_follows_flag() {
		let settings = HtmlSettings {
			culture: String::new(),
			encode_non_ascii: true,
		};
		assert_eq!(settings.encoder(), DefaultHtmlEncoder::strict());
	}

	#[rstest]
	fn test_validate_reports_culture() {
		let settings = HtmlSettings {
			culture: "tlh".to_string(),
			encode_non_ascii: false,
		};
		let err = settings.validate().unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid argument: invalid culture setting: unknown culture name 'tlh'"
		);
		assert!(
			HtmlSettings {
				culture: "de".to_string(),
				..Default::default()
			}
			.validate()
			.is_ok()
		);
	}
}
