//! HTML encoders
//!
//! An [`HtmlEncoder`] turns raw text into text that is safe to place inside an
//! HTML document. Encoders are pure: the same input always produces the same
//! output and encoding has no side effects.
//!
//! Escaped characters for [`DefaultHtmlEncoder`]:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

use std::fmt::{self, Write};

/// Encodes raw text for inclusion in HTML
pub trait HtmlEncoder: Send + Sync {
	/// Write the encoded form of `value` to `output`
	fn encode_to(&self, output: &mut dyn Write, value: &str) -> fmt::Result;

	/// Encode `value` into a new `String`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{DefaultHtmlEncoder, HtmlEncoder};
	///
	/// let encoder = DefaultHtmlEncoder::new();
	/// assert_eq!(encoder.encode("Tom & Jerry"), "Tom &amp; Jerry");
	/// ```
	fn encode(&self, value: &str) -> String {
		let mut result = String::with_capacity(value.len() + 10);
		// Writing into a String cannot fail
		let _ = self.encode_to(&mut result, value);
		result
	}
}

impl<E: HtmlEncoder + ?Sized> HtmlEncoder for &E {
	fn encode_to(&self, output: &mut dyn Write, value: &str) -> fmt::Result {
		(**self).encode_to(output, value)
	}
}

/// The encoder used for ordinary HTML text and attribute values
///
/// In strict mode every non-ASCII character is written as a hexadecimal
/// character reference, which keeps the output safe regardless of the
/// document encoding.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{DefaultHtmlEncoder, HtmlEncoder};
///
/// let encoder = DefaultHtmlEncoder::new();
/// assert_eq!(
///     encoder.encode("<script>alert('XSS')</script>"),
///     "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
/// );
///
/// let strict = DefaultHtmlEncoder::strict();
/// assert_eq!(strict.encode("café"), "caf&#xE9;");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultHtmlEncoder {
	encode_non_ascii: bool,
}

impl DefaultHtmlEncoder {
	/// Encoder that leaves non-ASCII characters untouched
	pub const fn new() -> Self {
		Self {
			encode_non_ascii: false,
		}
	}

	/// Encoder that also escapes every non-ASCII character
	pub const fn strict() -> Self {
		Self {
			encode_non_ascii: true,
		}
	}

	/// Whether non-ASCII characters are escaped
	pub fn encodes_non_ascii(&self) -> bool {
		self.encode_non_ascii
	}
}

impl HtmlEncoder for DefaultHtmlEncoder {
	fn encode_to(&self, output: &mut dyn Write, value: &str) -> fmt::Result {
		let mut start = 0;
		for (index, ch) in value.char_indices() {
			let replacement = match ch {
				'&' => "&amp;",
				'<' => "&lt;",
				'>' => "&gt;",
				'"' => "&quot;",
				'\'' => "&#x27;",
				_ if self.encode_non_ascii && !ch.is_ascii() => {
					output.write_str(&value[start..index])?;
					write!(output, "&#x{:X};", ch as u32)?;
					start = index + ch.len_utf8();
					continue;
				}
				_ => continue,
			};
			output.write_str(&value[start..index])?;
			output.write_str(replacement)?;
			start = index + ch.len_utf8();
		}
		output.write_str(&value[start..])
	}
}
