//! Error types for HTML content rendering

use thiserror::Error;

/// Errors raised while parsing a composite format template or converting
/// an argument with a format specifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
	/// A brace that is neither escaped nor part of a format item
	#[error("Unexpected '{ch}' at position {position} in format template")]
	UnexpectedCharacter {
		/// The offending character
		ch: char,
		/// Byte offset in the template
		position: usize,
	},

	/// The template ended before a format item was closed
	#[error("Format item starting at position {0} is not terminated")]
	UnterminatedItem(usize),

	/// A format item referenced an argument that does not exist
	#[error("Format item index {index} is out of range for {count} argument(s)")]
	IndexOutOfRange {
		/// Index used by the format item
		index: usize,
		/// Number of arguments supplied
		count: usize,
	},

	/// Index or alignment exceeded the supported maximum
	#[error("Format item at position {position} exceeds the {component} limit of {limit}")]
	LimitExceeded {
		/// `"index"` or `"alignment"`
		component: &'static str,
		/// Maximum accepted value
		limit: usize,
		/// Byte offset of the format item
		position: usize,
	},

	/// The format specifier cannot be applied to the argument's type
	#[error("Format specifier '{spec}' is not valid for {type_name} values")]
	InvalidSpecifier {
		/// The specifier as written in the template
		spec: String,
		/// Human readable type name of the argument
		type_name: &'static str,
	},
}

/// Error type for HTML content operations
#[derive(Debug, Error)]
pub enum HtmlError {
	/// A required argument was absent or a value could not be accepted
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// Composite formatting failed
	#[error(transparent)]
	Format(#[from] FormatError),

	/// The output sink rejected a write
	#[error("Failed to write HTML content to the output")]
	Write(#[from] std::fmt::Error),
}

impl HtmlError {
	/// Shorthand for an absent required parameter
	pub(crate) fn missing(parameter: &str) -> Self {
		HtmlError::InvalidArgument(format!("{} must not be absent", parameter))
	}
}

/// Result type for HTML content operations
pub type Result<T> = std::result::Result<T, HtmlError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_argument_message() {
		let err = HtmlError::missing("format");
		assert_eq!(err.to_string(), "Invalid argument: format must not be absent");
	}

	#[rstest]
	fn test_format_error_is_transparent() {
		let err: HtmlError = FormatError::IndexOutOfRange { index: 3, count: 1 }.into();
		assert_eq!(
			err.to_string(),
			"Format item index 3 is out of range for 1 argument(s)"
		);
	}
}
