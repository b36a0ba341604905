//! In-memory HTML content builder

use crate::builder::HtmlContentBuilder;
use crate::content::{HtmlContent, HtmlString};
use crate::encoder::HtmlEncoder;
use crate::error::Result;
use crate::format::FormatArg;
use std::fmt::{self, Write};
use std::sync::Arc;

/// One appended piece of a [`HtmlContentBuffer`]
#[derive(Clone)]
pub enum HtmlEntry {
	/// Raw text, encoded when written
	Unencoded(String),
	/// Pre-encoded text, written as-is
	Encoded(HtmlString),
	/// Content that renders itself
	Content(Arc<dyn HtmlContent>),
}

impl fmt::Debug for HtmlEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HtmlEntry::Unencoded(text) => f.debug_tuple("Unencoded").field(text).finish(),
			HtmlEntry::Encoded(html) => f.debug_tuple("Encoded").field(html).finish(),
			HtmlEntry::Content(_) => f.write_str("Content(..)"),
		}
	}
}

impl HtmlContent for HtmlEntry {
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()> {
		match self {
			HtmlEntry::Unencoded(text) => encoder.encode_to(writer, text)?,
			HtmlEntry::Encoded(html) => writer.write_str(html.as_str())?,
			HtmlEntry::Content(content) => content.write_to(writer, encoder)?,
		}
		Ok(())
	}
}

/// A list of HTML entries, rendered in order
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{HtmlContentBuffer, HtmlContentBuilder, HtmlContentExt};
/// use reinhardt_html_core::testing::HtmlTestEncoder;
///
/// let mut buffer = HtmlContentBuffer::new();
/// buffer.append("a<b").append_html("<br>");
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.render(&HtmlTestEncoder::new()).unwrap(), "HtmlEncode[[a<b]]<br>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlContentBuffer {
	entries: Vec<HtmlEntry>,
}

impl HtmlContentBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: Vec::with_capacity(capacity),
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[HtmlEntry] {
		&self.entries
	}

	/// Append every entry to `destination`, keeping this buffer intact
	pub fn copy_to<B: HtmlContentBuilder>(&self, destination: &mut B) {
		for entry in &self.entries {
			match entry {
				HtmlEntry::Unencoded(text) => destination.append(text.clone()),
				HtmlEntry::Encoded(html) => destination.append_html(html.clone()),
				HtmlEntry::Content(content) => destination.append_html_content(Arc::clone(content)),
			};
		}
	}

	/// Append every entry to `destination` and empty this buffer
	pub fn move_to<B: HtmlContentBuilder>(&mut self, destination: &mut B) {
		tracing::trace!(entries = self.entries.len(), "Moving buffered HTML content");
		for entry in self.entries.drain(..) {
			match entry {
				HtmlEntry::Unencoded(text) => destination.append(text),
				HtmlEntry::Encoded(html) => destination.append_html(html),
				HtmlEntry::Content(content) => destination.append_html_content(content),
			};
		}
	}
}

impl HtmlContentBuilder for HtmlContentBuffer {
	fn append(&mut self, unencoded: impl Into<String>) -> &mut Self {
		self.entries.push(HtmlEntry::Unencoded(unencoded.into()));
		self
	}

	fn append_html(&mut self, encoded: impl Into<HtmlString>) -> &mut Self {
		self.entries.push(HtmlEntry::Encoded(encoded.into()));
		self
	}

	fn append_html_content(&mut self, content: impl HtmlContent + 'static) -> &mut Self {
		self.entries.push(HtmlEntry::Content(Arc::new(content)));
		self
	}

	fn clear(&mut self) -> &mut Self {
		self.entries.clear();
		self
	}
}

impl HtmlContent for HtmlContentBuffer {
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()> {
		for entry in &self.entries {
			entry.write_to(writer, encoder)?;
		}
		Ok(())
	}
}

impl From<HtmlContentBuffer> for FormatArg {
	fn from(value: HtmlContentBuffer) -> Self {
		FormatArg::content(value)
	}
}
