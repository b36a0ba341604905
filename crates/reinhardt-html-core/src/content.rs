//! HTML content primitives
//!
//! [`HtmlContent`] is anything that can write its own HTML-safe representation
//! to an output sink, given an encoder. [`HtmlString`] marks text that is
//! already encoded and must never be encoded again.

use crate::encoder::HtmlEncoder;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Write};
use std::sync::Arc;

#[cfg(windows)]
const PLATFORM_NEW_LINE: &str = "\r\n";
#[cfg(not(windows))]
const PLATFORM_NEW_LINE: &str = "\n";

/// Content that renders itself as HTML
///
/// Implementations are responsible for their own safety: raw text must be
/// passed through `encoder`, already-encoded text is written as-is.
pub trait HtmlContent: Send + Sync {
	/// Write the content to `writer`, encoding raw text with `encoder`
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()>;
}

impl<T: HtmlContent + ?Sized> HtmlContent for &T {
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()> {
		(**self).write_to(writer, encoder)
	}
}

impl<T: HtmlContent + ?Sized> HtmlContent for Box<T> {
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()> {
		(**self).write_to(writer, encoder)
	}
}

impl<T: HtmlContent + ?Sized> HtmlContent for Arc<T> {
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()> {
		(**self).write_to(writer, encoder)
	}
}

/// Convenience methods available on every [`HtmlContent`]
pub trait HtmlContentExt: HtmlContent {
	/// Render the content into a new `String`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{DefaultHtmlEncoder, HtmlContentExt, HtmlString};
	///
	/// let html = HtmlString::new("<b>Bold</b>");
	/// assert_eq!(html.render(&DefaultHtmlEncoder::new()).unwrap(), "<b>Bold</b>");
	/// ```
	fn render(&self, encoder: &dyn HtmlEncoder) -> Result<String> {
		let mut output = String::new();
		self.write_to(&mut output, encoder)?;
		Ok(output)
	}
}

impl<T: HtmlContent + ?Sized> HtmlContentExt for T {}

/// Text that is already HTML encoded
///
/// The text is written verbatim and is never passed through an encoder.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::HtmlString;
///
/// let safe = HtmlString::new("<b>Bold</b>");
/// assert_eq!(safe.as_str(), "<b>Bold</b>");
/// assert_eq!(safe.to_string(), "<b>Bold</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlString(Cow<'static, str>);

impl HtmlString {
	/// The platform newline as pre-encoded content
	pub const NEW_LINE: HtmlString = HtmlString(Cow::Borrowed(PLATFORM_NEW_LINE));

	/// Empty pre-encoded content
	pub const EMPTY: HtmlString = HtmlString(Cow::Borrowed(""));

	/// Create a new pre-encoded string
	pub fn new(s: impl Into<Cow<'static, str>>) -> Self {
		Self(s.into())
	}

	/// Get the encoded text
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert into the encoded text
	pub fn into_string(self) -> String {
		self.0.into_owned()
	}

	/// Whether the encoded text is empty
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<String> for HtmlString {
	fn from(s: String) -> Self {
		Self(Cow::Owned(s))
	}
}

impl From<&str> for HtmlString {
	fn from(s: &str) -> Self {
		Self(Cow::Owned(s.to_string()))
	}
}

impl AsRef<str> for HtmlString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for HtmlString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl HtmlContent for HtmlString {
	fn write_to(&self, writer: &mut dyn Write, _encoder: &dyn HtmlEncoder) -> Result<()> {
		writer.write_str(&self.0)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::HtmlTestEncoder;
	use rstest::rstest;

	#[rstest]
	fn test_html_string_serializes_as_plain_text() {
		let html = HtmlString::new("<br>");
		let json = serde_json::to_string(&html).unwrap();
		assert_eq!(json, r#""<br>""#);

		let back: HtmlString = serde_json::from_str(&json).unwrap();
		assert_eq!(back, html);
	}

	#[rstest]
	fn test_html_string_is_written_verbatim() {
		let html = HtmlString::new("<i>Italic</i> & more");
		let output = html.render(&HtmlTestEncoder::new()).unwrap();
		assert_eq!(output, "<i>Italic</i> & more");
	}

	#[rstest]
	fn test_html_string_from() {
		let safe1: HtmlString = String::from("<b>Bold</b>").into();
		assert_eq!(safe1.as_str(), "<b>Bold</b>");

		let safe2: HtmlString = "<i>Italic</i>".into();
		assert_eq!(safe2.into_string(), "<i>Italic</i>");
	}

	#[rstest]
	fn test_new_line_matches_platform() {
		assert_eq!(HtmlString::NEW_LINE.as_str(), PLATFORM_NEW_LINE);
		assert!(HtmlString::EMPTY.is_empty());
	}

	#[rstest]
	fn test_content_through_smart_pointers() {
		let boxed: Box<dyn HtmlContent> = Box::new(HtmlString::new("a"));
		let shared: Arc<dyn HtmlContent> = Arc::new(HtmlString::new("b"));
		let encoder = HtmlTestEncoder::new();
		assert_eq!(boxed.render(&encoder).unwrap(), "a");
		assert_eq!(shared.render(&encoder).unwrap(), "b");
		assert_eq!((&shared).render(&encoder).unwrap(), "b");
	}
}
