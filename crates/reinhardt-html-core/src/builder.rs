//! HTML content builders
//!
//! [`HtmlContentBuilder`] is the minimal mutable capability: append unencoded
//! text, append pre-encoded text or content, clear. Everything else in
//! [`HtmlContentBuilderExt`] is composed from those four primitives and is
//! available on every builder.
//!
//! ## Example
//!
//! ```
//! use reinhardt_html_core::{html_args, DefaultHtmlEncoder, HtmlContentBuffer, HtmlContentBuilder, HtmlContentBuilderExt, HtmlContentExt};
//!
//! let mut buffer = HtmlContentBuffer::new();
//! buffer
//! 	.append_html("<ul>")
//! 	.append_format("<li>{0}</li>", html_args!["Tom & Jerry"])
//! 	.append_html("</ul>");
//!
//! let html = buffer.render(&DefaultHtmlEncoder::new()).unwrap();
//! assert_eq!(html, "<ul><li>Tom &amp; Jerry</li></ul>");
//! ```

use crate::content::{HtmlContent, HtmlString};
use crate::error::Result;
use crate::format::{FormatArg, FormatProvider, HtmlFormattableString};
use std::sync::Arc;

/// A mutable container of HTML content
pub trait HtmlContentBuilder: HtmlContent {
	/// Append text that will be HTML encoded when written
	fn append(&mut self, unencoded: impl Into<String>) -> &mut Self;

	/// Append text that is already HTML encoded
	fn append_html(&mut self, encoded: impl Into<HtmlString>) -> &mut Self;

	/// Append content that renders itself
	fn append_html_content(&mut self, content: impl HtmlContent + 'static) -> &mut Self;

	/// Remove all content
	fn clear(&mut self) -> &mut Self;
}

/// Convenience operations for every [`HtmlContentBuilder`]
pub trait HtmlContentBuilderExt: HtmlContentBuilder {
	/// Append a composite format whose arguments are HTML encoded
	///
	/// The template itself is treated as HTML and written as-is. Formatting
	/// uses the invariant culture.
	fn append_format(&mut self, format: impl Into<String>, args: Vec<FormatArg>) -> &mut Self {
		self.append_html_content(HtmlFormattableString::new(format, args))
	}

	/// [`append_format`](Self::append_format) with an explicit provider
	fn append_format_with(
		&mut self,
		provider: Arc<dyn FormatProvider>,
		format: impl Into<String>,
		args: Vec<FormatArg>,
	) -> &mut Self {
		self.append_html_content(HtmlFormattableString::with_provider(provider, format, args))
	}

	/// Checked [`append_format`](Self::append_format) for inputs that may be
	/// absent
	///
	/// # Errors
	///
	/// Returns [`HtmlError::InvalidArgument`](crate::HtmlError::InvalidArgument)
	/// when `format` or `args` is `None`. The builder is left untouched.
	fn try_append_format(
		&mut self,
		format: Option<String>,
		args: Option<Vec<FormatArg>>,
	) -> Result<&mut Self> {
		let value = HtmlFormattableString::from_parts(format, args, None)?;
		Ok(self.append_html_content(value))
	}

	/// Append a newline
	fn append_line(&mut self) -> &mut Self {
		self.append_html(HtmlString::NEW_LINE)
	}

	/// Append unencoded text followed by a newline
	fn append_text_line(&mut self, unencoded: impl Into<String>) -> &mut Self {
		self.append(unencoded).append_html(HtmlString::NEW_LINE)
	}

	/// Append content followed by a newline
	fn append_content_line(&mut self, content: impl HtmlContent + 'static) -> &mut Self {
		self.append_html_content(content)
			.append_html(HtmlString::NEW_LINE)
	}

	/// Append pre-encoded text followed by a newline
	fn append_html_line(&mut self, encoded: impl Into<HtmlString>) -> &mut Self {
		self.append_html(encoded).append_html(HtmlString::NEW_LINE)
	}

	/// Replace everything with unencoded text
	fn set_content(&mut self, unencoded: impl Into<String>) -> &mut Self {
		self.clear().append(unencoded)
	}

	/// Replace everything with content
	fn set_html_content(&mut self, content: impl HtmlContent + 'static) -> &mut Self {
		self.clear().append_html_content(content)
	}

	/// Replace everything with pre-encoded text
	fn set_html(&mut self, encoded: impl Into<HtmlString>) -> &mut Self {
		self.clear().append_html(encoded)
	}
}

impl<T: HtmlContentBuilder> HtmlContentBuilderExt for T {}
