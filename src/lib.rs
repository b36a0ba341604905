//! # Reinhardt HTML
//!
//! Safe HTML fragment building for Reinhardt views.
//!
//! Views often assemble small pieces of markup around user-supplied values.
//! This crate keeps the boundary between markup and data explicit: template
//! text and [`HtmlString`] values are trusted, every other value is formatted
//! with culture-aware rules and HTML encoded before it reaches the output.
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_html::prelude::*;
//!
//! let mut html = HtmlContentBuffer::new();
//! html.append_html("<h1>")
//! 	.append("Q&A")
//! 	.append_html("</h1>")
//! 	.append_format("<p>{0} answered {1:N0} questions</p>", html_args!["<anon>", 1500]);
//!
//! assert_eq!(
//! 	html.render(&DefaultHtmlEncoder::new()).unwrap(),
//! 	"<h1>Q&amp;A</h1><p>&lt;anon&gt; answered 1,500 questions</p>"
//! );
//! ```
//!
//! ## Cultures
//!
//! Formatting uses the invariant culture unless a provider is supplied:
//!
//! ```rust
//! use reinhardt_html::prelude::*;
//!
//! let german = Culture::from_name("de-DE").unwrap();
//! let price = HtmlFormattableString::with_provider(german, "{0:C}", html_args![1234.5]);
//! assert_eq!(
//! 	price.render(&DefaultHtmlEncoder::new()).unwrap(),
//! 	"1.234,50\u{a0}\u{20ac}"
//! );
//! ```
//!
//! ## Crates
//!
//! - [`reinhardt_html_core`]: all functionality; this crate re-exports it

pub use reinhardt_html_core::*;

/// Re-export commonly used types
pub mod prelude {
	pub use reinhardt_html_core::prelude::*;
}
