//! Test helpers for code that renders HTML content
//!
//! [`HtmlTestEncoder`] makes the encoding boundary visible: every encoded run
//! of text is wrapped in `HtmlEncode[[...]]`, so assertions can tell exactly
//! which parts of the output went through the encoder.

use crate::encoder::HtmlEncoder;
use std::fmt::{self, Write};

/// Encoder that wraps its input as `HtmlEncode[[input]]`
///
/// Empty input is returned unchanged.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::HtmlEncoder;
/// use reinhardt_html_core::testing::HtmlTestEncoder;
///
/// let encoder = HtmlTestEncoder::new();
/// assert_eq!(encoder.encode("<b>"), "HtmlEncode[[<b>]]");
/// assert_eq!(encoder.encode(""), "");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTestEncoder;

impl HtmlTestEncoder {
	/// Create a new test encoder
	pub const fn new() -> Self {
		Self
	}
}

impl HtmlEncoder for HtmlTestEncoder {
	fn encode_to(&self, output: &mut dyn Write, value: &str) -> fmt::Result {
		if value.is_empty() {
			return Ok(());
		}
		write!(output, "HtmlEncode[[{}]]", value)
	}
}
