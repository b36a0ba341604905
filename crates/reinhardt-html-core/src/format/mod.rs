//! Composite formatting with HTML encoding
//!
//! [`HtmlFormattableString`] holds a composite format template and its
//! arguments. Rendering substitutes each format item: pre-encoded arguments
//! are written verbatim, content arguments render themselves with the active
//! encoder, and plain values are formatted with the provider's culture and
//! then encoded. Literal template text is never encoded.
//!
//! ## Example
//!
//! ```
//! use reinhardt_html_core::{html_args, DefaultHtmlEncoder, HtmlContentExt, HtmlFormattableString, HtmlString};
//!
//! let greeting = HtmlFormattableString::new(
//! 	"<p>{0} has {1:N0} points {2}</p>",
//! 	html_args!["<script>", 12345, HtmlString::new("<b>!</b>")],
//! );
//! let html = greeting.render(&DefaultHtmlEncoder::new()).unwrap();
//! assert_eq!(html, "<p>&lt;script&gt; has 12,345 points <b>!</b></p>");
//! ```

mod parser;
mod provider;
mod value;

pub use provider::FormatProvider;
pub use value::{FormatArg, FormatValue, Formattable, Integer};

use crate::content::HtmlContent;
use crate::culture::Culture;
use crate::encoder::HtmlEncoder;
use crate::error::{FormatError, HtmlError, Result};
use parser::{FormatParser, Segment};
use std::fmt::{self, Write};
use std::sync::Arc;

/// A composite format whose substitutions are HTML encoded on write
///
/// Values are immutable once built and may be written any number of times,
/// from any number of threads.
#[derive(Clone)]
pub struct HtmlFormattableString {
	format: String,
	args: Vec<FormatArg>,
	provider: Arc<dyn FormatProvider>,
}

impl HtmlFormattableString {
	/// Create a formattable string using the invariant culture
	pub fn new(format: impl Into<String>, args: Vec<FormatArg>) -> Self {
		Self::with_provider(Culture::invariant(), format, args)
	}

	/// Create a formattable string with an explicit formatting provider
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{html_args, Culture, HtmlContentExt, HtmlFormattableString};
	/// use reinhardt_html_core::testing::HtmlTestEncoder;
	///
	/// let french = Culture::from_name("fr-FR").unwrap();
	/// let value = HtmlFormattableString::with_provider(french, "{0} in french!", html_args![1.21]);
	/// assert_eq!(value.render(&HtmlTestEncoder::new()).unwrap(), "HtmlEncode[[1,21]] in french!");
	/// ```
	pub fn with_provider(
		provider: Arc<dyn FormatProvider>,
		format: impl Into<String>,
		args: Vec<FormatArg>,
	) -> Self {
		Self {
			format: format.into(),
			args,
			provider,
		}
	}

	/// Checked constructor for callers whose inputs may be absent
	///
	/// An absent provider falls back to the invariant culture.
	///
	/// # Errors
	///
	/// Returns [`HtmlError::InvalidArgument`] when `format` or `args` is
	/// `None`.
	pub fn from_parts(
		format: Option<String>,
		args: Option<Vec<FormatArg>>,
		provider: Option<Arc<dyn FormatProvider>>,
	) -> Result<Self> {
		let format = format.ok_or_else(|| HtmlError::missing("format"))?;
		let args = args.ok_or_else(|| HtmlError::missing("args"))?;
		let provider: Arc<dyn FormatProvider> = match provider {
			Some(provider) => provider,
			None => Culture::invariant(),
		};
		Ok(Self::with_provider(provider, format, args))
	}

	pub fn format(&self) -> &str {
		&self.format
	}

	pub fn args(&self) -> &[FormatArg] {
		&self.args
	}

	pub fn provider(&self) -> &dyn FormatProvider {
		self.provider.as_ref()
	}
}

impl fmt::Debug for HtmlFormattableString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HtmlFormattableString")
			.field("format", &self.format)
			.field("args", &self.args)
			.field("culture", &self.provider.culture().name())
			.finish()
	}
}

impl HtmlContent for HtmlFormattableString {
	/// Substitute every format item and write the result
	///
	/// Output is streamed: when an item fails, text written for the items
	/// before it stays in `writer`.
	fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> Result<()> {
		let mut scratch = String::new();
		for segment in FormatParser::new(&self.format) {
			match segment? {
				Segment::Literal(text) => writer.write_str(text)?,
				Segment::Item(item) => {
					let arg = self
						.args
						.get(item.index)
						.ok_or(FormatError::IndexOutOfRange {
							index: item.index,
							count: self.args.len(),
						})?;
					tracing::trace!(
						index = item.index,
						kind = arg.kind(),
						position = item.position,
						"Substituting format item"
					);
					scratch.clear();
					encode_argument_into(&mut scratch, arg, item.spec, self.provider.as_ref(), encoder)?;
					write_aligned(writer, &scratch, item.alignment)?;
				}
			}
		}
		Ok(())
	}
}

/// Convert one argument to HTML-safe text
///
/// Dispatch order:
/// 1. [`FormatArg::Html`] is returned as-is.
/// 2. [`FormatArg::Content`] is rendered with `encoder`.
/// 3. The provider's custom formatter, if it returns `Some`, is encoded.
/// 4. [`FormatArg::Value`] is converted with `spec` and the provider's
///    culture, then encoded.
/// 5. [`FormatArg::Null`] becomes the empty string.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{encode_argument, Culture, FormatArg, HtmlString};
/// use reinhardt_html_core::testing::HtmlTestEncoder;
///
/// let culture = Culture::invariant();
/// let encoder = HtmlTestEncoder::new();
/// let hex = encode_argument(&FormatArg::from(50), Some("X"), culture.as_ref(), &encoder).unwrap();
/// assert_eq!(hex, "HtmlEncode[[32]]");
/// let safe = encode_argument(&HtmlString::new("<br>").into(), None, culture.as_ref(), &encoder).unwrap();
/// assert_eq!(safe, "<br>");
/// ```
pub fn encode_argument(
	arg: &FormatArg,
	spec: Option<&str>,
	provider: &dyn FormatProvider,
	encoder: &dyn HtmlEncoder,
) -> Result<String> {
	let mut output = String::new();
	encode_argument_into(&mut output, arg, spec, provider, encoder)?;
	Ok(output)
}

fn encode_argument_into(
	output: &mut String,
	arg: &FormatArg,
	spec: Option<&str>,
	provider: &dyn FormatProvider,
	encoder: &dyn HtmlEncoder,
) -> Result<()> {
	let spec = spec.filter(|s| !s.is_empty());
	match arg {
		FormatArg::Html(html) => output.push_str(html.as_str()),
		FormatArg::Content(content) => content.write_to(output, encoder)?,
		FormatArg::Null => {
			if let Some(text) = provider.format_custom(spec, None) {
				encoder.encode_to(output, &text)?;
			}
		}
		FormatArg::Value(value) => {
			let text = match provider.format_custom(spec, Some(value)) {
				Some(text) => text,
				None => value.format(spec, provider.culture())?,
			};
			encoder.encode_to(output, &text)?;
		}
	}
	Ok(())
}

/// Pad already-encoded text to `|alignment|` characters
fn write_aligned(writer: &mut dyn Write, text: &str, alignment: isize) -> fmt::Result {
	let width = alignment.unsigned_abs();
	let padding = width.saturating_sub(text.chars().count());
	if alignment > 0 {
		write_spaces(writer, padding)?;
	}
	writer.write_str(text)?;
	if alignment < 0 {
		write_spaces(writer, padding)?;
	}
	Ok(())
}

fn write_spaces(writer: &mut dyn Write, count: usize) -> fmt::Result {
	for _ in 0..count {
		writer.write_char(' ')?;
	}
	Ok(())
}
