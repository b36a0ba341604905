//! Culture-specific formatting rules
//!
//! A [`Culture`] carries the number and date/time conventions used when a
//! plain value is converted to text before HTML encoding. Cultures are passed
//! explicitly; there is no process-wide "current culture". When no culture is
//! supplied the invariant culture is used.
//!
//! Built-in cultures:
//!
//! | Name | Description |
//! |------|-------------|
//! | `""` | Invariant |
//! | `en-US` | English (United States) |
//! | `en-GB` | English (United Kingdom) |
//! | `fr-FR` | French (France) |
//! | `de-DE` | German (Germany) |
//! | `ja-JP` | Japanese (Japan) |
//!
//! ## Example
//!
//! ```
//! use reinhardt_html_core::Culture;
//!
//! let french = Culture::from_name("fr").unwrap();
//! assert_eq!(french.name(), "fr-FR");
//! assert_eq!(french.number.decimal_separator, ",");
//! ```

mod data;
pub(crate) mod datetime;
pub(crate) mod number;

use crate::error::{HtmlError, Result};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::sync::Arc;

static CULTURES: Lazy<Vec<Arc<Culture>>> = Lazy::new(|| {
	vec![
		Arc::new(data::invariant()),
		Arc::new(data::en_us()),
		Arc::new(data::en_gb()),
		Arc::new(data::fr_fr()),
		Arc::new(data::de_de()),
		Arc::new(data::ja_jp()),
	]
});

/// Number formatting conventions
///
/// Currency and percent patterns are small templates: `n` is replaced by the
/// formatted number, `$` by the currency symbol, `%` by the percent symbol and
/// `-` by the negative sign. Every other character is copied literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
	pub negative_sign: Cow<'static, str>,
	pub decimal_separator: Cow<'static, str>,
	pub group_separator: Cow<'static, str>,
	/// Digit group sizes from the decimal point outwards; the last size
	/// repeats, and a trailing `0` stops grouping
	pub group_sizes: Vec<usize>,
	/// Default precision for `F`, `N` and custom fixed formats
	pub decimal_digits: usize,
	pub currency_symbol: Cow<'static, str>,
	pub currency_decimal_digits: usize,
	pub currency_positive_pattern: Cow<'static, str>,
	pub currency_negative_pattern: Cow<'static, str>,
	pub percent_symbol: Cow<'static, str>,
	pub per_mille_symbol: Cow<'static, str>,
	pub percent_decimal_digits: usize,
	pub percent_positive_pattern: Cow<'static, str>,
	pub percent_negative_pattern: Cow<'static, str>,
	pub nan_symbol: Cow<'static, str>,
	pub positive_infinity_symbol: Cow<'static, str>,
	pub negative_infinity_symbol: Cow<'static, str>,
}

/// Date and time formatting conventions
///
/// Day names start with Sunday; month names start with January.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormat {
	pub day_names: [Cow<'static, str>; 7],
	pub abbreviated_day_names: [Cow<'static, str>; 7],
	pub month_names: [Cow<'static, str>; 12],
	pub abbreviated_month_names: [Cow<'static, str>; 12],
	pub am_designator: Cow<'static, str>,
	pub pm_designator: Cow<'static, str>,
	pub era_name: Cow<'static, str>,
	pub date_separator: Cow<'static, str>,
	pub time_separator: Cow<'static, str>,
	pub short_date_pattern: Cow<'static, str>,
	pub long_date_pattern: Cow<'static, str>,
	pub short_time_pattern: Cow<'static, str>,
	pub long_time_pattern: Cow<'static, str>,
	pub month_day_pattern: Cow<'static, str>,
	pub year_month_pattern: Cow<'static, str>,
}

/// A named set of formatting conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
	name: Cow<'static, str>,
	pub number: NumberFormat,
	pub date_time: DateTimeFormat,
}

impl Culture {
	/// Create a culture from its parts
	///
	/// Use this to derive application specific conventions, usually starting
	/// from a clone of a built-in culture's tables.
	pub fn new(
		name: impl Into<Cow<'static, str>>,
		number: NumberFormat,
		date_time: DateTimeFormat,
	) -> Self {
		Self {
			name: name.into(),
			number,
			date_time,
		}
	}

	/// The invariant culture
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Culture;
	///
	/// let invariant = Culture::invariant();
	/// assert!(invariant.is_invariant());
	/// assert_eq!(invariant.number.decimal_separator, ".");
	/// ```
	pub fn invariant() -> Arc<Culture> {
		Arc::clone(&CULTURES[0])
	}

	/// Look up a built-in culture by name
	///
	/// Matching is case-insensitive and accepts `_` in place of `-`. A neutral
	/// name such as `"de"` resolves to the first specific culture of that
	/// language. The empty name returns the invariant culture.
	///
	/// # Errors
	///
	/// Returns [`HtmlError::InvalidArgument`] when no built-in culture matches.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::Culture;
	///
	/// assert_eq!(Culture::from_name("de_de").unwrap().name(), "de-DE");
	/// assert_eq!(Culture::from_name("ja").unwrap().name(), "ja-JP");
	/// assert!(Culture::from_name("xx-YY").is_err());
	/// ```
	pub fn from_name(name: &str) -> Result<Arc<Culture>> {
		let normalized = name.trim().replace('_', "-");
		if let Some(culture) = CULTURES
			.iter()
			.find(|c| c.name.eq_ignore_ascii_case(&normalized))
		{
			return Ok(Arc::clone(culture));
		}

		if !normalized.contains('-')
			&& let Some(culture) = CULTURES.iter().find(|c| {
				c.language()
					.is_some_and(|lang| lang.eq_ignore_ascii_case(&normalized))
			}) {
			tracing::debug!(
				requested = %name,
				resolved = %culture.name,
				"Resolved neutral culture name"
			);
			return Ok(Arc::clone(culture));
		}

		Err(HtmlError::InvalidArgument(format!(
			"unknown culture name '{}'",
			name
		)))
	}

	/// Names of all built-in cultures
	pub fn available() -> Vec<&'static str> {
		vec!["", "en-US", "en-GB", "fr-FR", "de-DE", "ja-JP"]
	}

	/// The culture name, empty for the invariant culture
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Whether this is the invariant culture
	pub fn is_invariant(&self) -> bool {
		self.name.is_empty()
	}

	/// The language part of the name (`"fr"` for `"fr-FR"`)
	pub fn language(&self) -> Option<&str> {
		if self.name.is_empty() {
			return None;
		}
		self.name.split('-').next()
	}
}

impl Default for Culture {
	fn default() -> Self {
		data::invariant()
	}
}
