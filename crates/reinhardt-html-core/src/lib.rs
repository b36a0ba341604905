//! HTML content building and HTML-encoding composite formatting for Reinhardt
//!
//! This crate provides the pieces views use to assemble HTML fragments safely:
//!
//! - [`HtmlContent`]: anything that can write itself as HTML
//! - [`HtmlString`]: text that is already encoded
//! - [`HtmlEncoder`] and [`DefaultHtmlEncoder`]: raw text to HTML-safe text
//! - [`HtmlFormattableString`]: composite formatting (`{0,-10:N2}`) that
//!   encodes every plain argument and leaves safe arguments alone
//! - [`HtmlContentBuilder`], [`HtmlContentBuilderExt`] and
//!   [`HtmlContentBuffer`]: mutable content containers
//! - [`Culture`] and [`FormatProvider`]: number and date conventions
//! - [`HtmlSettings`]: culture and encoder selection from configuration
//!
//! ## Example
//!
//! ```
//! use reinhardt_html_core::prelude::*;
//!
//! let mut buffer = HtmlContentBuffer::new();
//! buffer
//! 	.append_html_line("<table>")
//! 	.append_format("<tr><td>{0}</td><td>{1,8:N2}</td></tr>", html_args!["<Widget>", 1234.5])
//! 	.append_line()
//! 	.append_html("</table>");
//!
//! let html = buffer.render(&DefaultHtmlEncoder::new()).unwrap();
//! assert!(html.contains("<td>&lt;Widget&gt;</td><td>1,234.50</td>"));
//! ```

pub mod buffer;
pub mod builder;
pub mod config;
pub mod content;
pub mod culture;
pub mod encoder;
pub mod error;
pub mod format;
pub mod testing;

pub use buffer::{HtmlContentBuffer, HtmlEntry};
pub use builder::{HtmlContentBuilder, HtmlContentBuilderExt};
pub use config::HtmlSettings;
pub use content::{HtmlContent, HtmlContentExt, HtmlString};
pub use culture::{Culture, DateTimeFormat, NumberFormat};
pub use encoder::{DefaultHtmlEncoder, HtmlEncoder};
pub use error::{FormatError, HtmlError, Result};
pub use format::{
	FormatArg, FormatProvider, FormatValue, Formattable, HtmlFormattableString, Integer,
	encode_argument,
};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::buffer::*;
	pub use crate::builder::*;
	pub use crate::config::HtmlSettings;
	pub use crate::content::*;
	pub use crate::culture::Culture;
	pub use crate::encoder::*;
	pub use crate::error::{FormatError, HtmlError};
	pub use crate::format::{FormatArg, FormatProvider, FormatValue, HtmlFormattableString};
	pub use crate::{html_args, html_format};
}

/// Build a `Vec<FormatArg>` from values convertible into [`FormatArg`]
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{html_args, FormatArg, HtmlString};
///
/// let args = html_args![1, "two", HtmlString::new("<b>3</b>"), None::<f64>];
/// assert_eq!(args.len(), 4);
/// assert!(args[3].is_null());
/// ```
#[macro_export]
macro_rules! html_args {
	() => {
		::std::vec::Vec::<$crate::FormatArg>::new()
	};
	($($arg:expr),+ $(,)?) => {
		::std::vec![$($crate::FormatArg::from($arg)),+]
	};
}

/// Build an [`HtmlFormattableString`] using the invariant culture
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{html_format, DefaultHtmlEncoder, HtmlContentExt};
///
/// let link = html_format!("<a href=\"{0}\">{1}</a>", "/search?q=a&b", "Search");
/// assert_eq!(
/// 	link.render(&DefaultHtmlEncoder::new()).unwrap(),
/// 	"<a href=\"/search?q=a&amp;b\">Search</a>"
/// );
/// ```
#[macro_export]
macro_rules! html_format {
	($format:expr $(, $arg:expr)* $(,)?) => {
		$crate::HtmlFormattableString::new($format, $crate::html_args![$($arg),*])
	};
}
