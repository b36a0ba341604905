//! Format arguments
//!
//! [`FormatArg`] makes the safe/raw distinction explicit: pre-encoded text and
//! self-rendering content are written as-is, plain values are formatted and
//! then encoded.

use crate::content::{HtmlContent, HtmlString};
use crate::culture::Culture;
use crate::culture::datetime::{self, DateParts};
use crate::culture::number::{self, Number};
use crate::error::FormatError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// An integer together with the width and signedness of its source type
///
/// The width matters for hexadecimal and binary output of negative values,
/// which use the two's complement of the original type: `-1i8` formats as
/// `FF`, `-1i32` as `FFFFFFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integer {
	value: i128,
	bits: u32,
	signed: bool,
}

impl Integer {
	/// The numeric value
	pub fn value(&self) -> i128 {
		self.value
	}

	/// Width of the source type in bits
	pub fn bits(&self) -> u32 {
		self.bits
	}

	/// Whether the source type is signed
	pub fn is_signed(&self) -> bool {
		self.signed
	}

	pub(crate) fn twos_complement(&self) -> u128 {
		let raw = self.value as u128;
		if self.value >= 0 || self.bits >= 128 {
			raw
		} else {
			raw & ((1u128 << self.bits) - 1)
		}
	}
}

/// A user type that understands format specifiers
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{Culture, FormatError, Formattable};
///
/// struct Celsius(f64);
///
/// impl Formattable for Celsius {
/// 	fn format(&self, spec: Option<&str>, _culture: &Culture) -> Result<String, FormatError> {
/// 		match spec {
/// 			Some("F") => Ok(format!("{:.1}°F", self.0 * 9.0 / 5.0 + 32.0)),
/// 			_ => Ok(format!("{:.1}°C", self.0)),
/// 		}
/// 	}
/// }
///
/// let value = Celsius(21.5);
/// assert_eq!(value.format(None, &Culture::default()).unwrap(), "21.5°C");
/// ```
pub trait Formattable: Send + Sync {
	/// Convert to text using `spec` and the conventions of `culture`
	fn format(&self, spec: Option<&str>, culture: &Culture) -> Result<String, FormatError>;
}

/// A plain value that is converted to text and encoded
#[derive(Clone)]
pub enum FormatValue {
	Bool(bool),
	Char(char),
	Int(Integer),
	Float(f64),
	Single(f32),
	Decimal(Decimal),
	Str(String),
	Date(NaiveDate),
	Time(NaiveTime),
	DateTime(NaiveDateTime),
	DateTimeOffset(DateTime<FixedOffset>),
	/// A user type with format specifier support
	Formattable(Arc<dyn Formattable>),
	/// A user type with only a default string conversion
	Display(Arc<dyn fmt::Display + Send + Sync>),
}

impl FormatValue {
	/// Short name of the value's type, used in error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			FormatValue::Bool(_) => "bool",
			FormatValue::Char(_) => "char",
			FormatValue::Int(_) => "integer",
			FormatValue::Float(_) | FormatValue::Single(_) => "floating-point",
			FormatValue::Decimal(_) => "decimal",
			FormatValue::Str(_) => "string",
			FormatValue::Date(_)
			| FormatValue::Time(_)
			| FormatValue::DateTime(_)
			| FormatValue::DateTimeOffset(_) => "date/time",
			FormatValue::Formattable(_) => "formattable",
			FormatValue::Display(_) => "display",
		}
	}

	/// Convert to text with an optional specifier
	///
	/// Numbers, dates and [`Formattable`] values honor `spec` and `culture`.
	/// Booleans, characters, strings and display-only values ignore both.
	///
	/// # Errors
	///
	/// Returns [`FormatError::InvalidSpecifier`] when `spec` is not valid for
	/// the value's type.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::{Culture, FormatValue};
	///
	/// let german = Culture::from_name("de-DE").unwrap();
	/// let value = FormatValue::Float(1234.5);
	/// assert_eq!(value.format(Some("N2"), &german).unwrap(), "1.234,50");
	/// ```
	pub fn format(&self, spec: Option<&str>, culture: &Culture) -> Result<String, FormatError> {
		let spec = spec.filter(|s| !s.is_empty());
		let nf = &culture.number;
		let dtf = &culture.date_time;
		match self {
			FormatValue::Bool(v) => Ok(v.to_string()),
			FormatValue::Char(v) => Ok(v.to_string()),
			FormatValue::Str(v) => Ok(v.clone()),
			FormatValue::Display(v) => Ok(v.to_string()),
			FormatValue::Int(v) => number::format_number(&Number::Int(*v), spec, nf),
			FormatValue::Float(v) => number::format_number(&Number::Float(*v), spec, nf),
			FormatValue::Single(v) => number::format_number(&Number::Single(*v), spec, nf),
			FormatValue::Decimal(v) => number::format_number(&Number::Decimal(*v), spec, nf),
			FormatValue::Date(v) => datetime::format_date(&DateParts::from_date(*v), spec, dtf),
			FormatValue::Time(v) => datetime::format_date(&DateParts::from_time(*v), spec, dtf),
			FormatValue::DateTime(v) => datetime::format_date(&DateParts::from_naive(*v), spec, dtf),
			FormatValue::DateTimeOffset(v) => {
				datetime::format_date(&DateParts::from_offset(*v), spec, dtf)
			}
			FormatValue::Formattable(v) => v.format(spec, culture),
		}
	}
}

impl fmt::Debug for FormatValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormatValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			FormatValue::Char(v) => f.debug_tuple("Char").field(v).finish(),
			FormatValue::Int(v) => f.debug_tuple("Int").field(&v.value).finish(),
			FormatValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
			FormatValue::Single(v) => f.debug_tuple("Single").field(v).finish(),
			FormatValue::Decimal(v) => f.debug_tuple("Decimal").field(v).finish(),
			FormatValue::Str(v) => f.debug_tuple("Str").field(v).finish(),
			FormatValue::Date(v) => f.debug_tuple("Date").field(v).finish(),
			FormatValue::Time(v) => f.debug_tuple("Time").field(v).finish(),
			FormatValue::DateTime(v) => f.debug_tuple("DateTime").field(v).finish(),
			FormatValue::DateTimeOffset(v) => f.debug_tuple("DateTimeOffset").field(v).finish(),
			FormatValue::Formattable(_) => f.write_str("Formattable(..)"),
			FormatValue::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
		}
	}
}

/// One argument of a composite format
#[derive(Clone, Default)]
pub enum FormatArg {
	/// An absent value; substitutes as the empty string
	#[default]
	Null,
	/// Pre-encoded text, written without encoding
	Html(HtmlString),
	/// Content that renders itself with the active encoder
	Content(Arc<dyn HtmlContent>),
	/// A plain value, formatted and then encoded
	Value(FormatValue),
}

impl FormatArg {
	/// Wrap any [`HtmlContent`]
	pub fn content(content: impl HtmlContent + 'static) -> Self {
		FormatArg::Content(Arc::new(content))
	}

	/// Wrap a value that only offers a default string conversion
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_html_core::FormatArg;
	/// use std::net::Ipv4Addr;
	///
	/// let arg = FormatArg::display(Ipv4Addr::LOCALHOST);
	/// assert_eq!(arg.kind(), "value");
	/// ```
	pub fn display(value: impl fmt::Display + Send + Sync + 'static) -> Self {
		FormatArg::Value(FormatValue::Display(Arc::new(value)))
	}

	/// Wrap a value with its own format specifier handling
	pub fn formattable(value: impl Formattable + 'static) -> Self {
		FormatArg::Value(FormatValue::Formattable(Arc::new(value)))
	}

	/// Name of the variant, as used in trace events
	pub fn kind(&self) -> &'static str {
		match self {
			FormatArg::Null => "null",
			FormatArg::Html(_) => "html",
			FormatArg::Content(_) => "content",
			FormatArg::Value(_) => "value",
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, FormatArg::Null)
	}
}

impl fmt::Debug for FormatArg {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FormatArg::Null => f.write_str("Null"),
			FormatArg::Html(html) => f.debug_tuple("Html").field(html).finish(),
			FormatArg::Content(_) => f.write_str("Content(..)"),
			FormatArg::Value(value) => f.debug_tuple("Value").field(value).finish(),
		}
	}
}

macro_rules! impl_from_integer {
	($($t:ty),* $(,)?) => {
		$(
			impl From<$t> for Integer {
				fn from(value: $t) -> Self {
					Integer {
						value: value as i128,
						bits: <$t>::BITS,
						signed: <$t>::MIN != 0,
					}
				}
			}

			impl From<$t> for FormatArg {
				fn from(value: $t) -> Self {
					FormatArg::Value(FormatValue::Int(Integer::from(value)))
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_value {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$t> for FormatArg {
				fn from(value: $t) -> Self {
					FormatArg::Value(FormatValue::$variant(value.into()))
				}
			}
		)*
	};
}

impl_from_value!(
	bool => Bool,
	char => Char,
	f64 => Float,
	f32 => Single,
	Decimal => Decimal,
	String => Str,
	&str => Str,
	&String => Str,
	NaiveDate => Date,
	NaiveTime => Time,
	NaiveDateTime => DateTime,
	DateTime<FixedOffset> => DateTimeOffset,
);

impl From<DateTime<Utc>> for FormatArg {
	fn from(value: DateTime<Utc>) -> Self {
		FormatArg::Value(FormatValue::DateTimeOffset(value.fixed_offset()))
	}
}

impl From<FormatValue> for FormatArg {
	fn from(value: FormatValue) -> Self {
		FormatArg::Value(value)
	}
}

impl From<HtmlString> for FormatArg {
	fn from(value: HtmlString) -> Self {
		FormatArg::Html(value)
	}
}

impl From<Arc<dyn HtmlContent>> for FormatArg {
	fn from(value: Arc<dyn HtmlContent>) -> Self {
		FormatArg::Content(value)
	}
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
	fn from(value: Option<T>) -> Self {
		value.map_or(FormatArg::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_integer_width_is_recorded() {
		let small = Integer::from(-1i8);
		assert_eq!((small.value(), small.bits(), small.is_signed()), (-1, 8, true));
		assert_eq!(small.twos_complement(), 0xFF);

		let unsigned = Integer::from(200u8);
		assert_eq!((unsigned.bits(), unsigned.is_signed()), (8, false));
		assert_eq!(unsigned.twos_complement(), 200);

		assert_eq!(Integer::from(-1i128).twos_complement(), u128::MAX);
	}

	#[rstest]
	fn test_from_conversions() {
		assert!(matches!(FormatArg::from(5u16), FormatArg::Value(FormatValue::Int(_))));
		assert!(matches!(FormatArg::from(1.5f32), FormatArg::Value(FormatValue::Single(_))));
		assert!(matches!(FormatArg::from("x"), FormatArg::Value(FormatValue::Str(_))));
		assert!(matches!(FormatArg::from(HtmlString::new("<b>")), FormatArg::Html(_)));
		assert!(FormatArg::from(None::<i32>).is_null());
		assert!(matches!(FormatArg::from(Some(3)), FormatArg::Value(FormatValue::Int(_))));
	}

	#[rstest]
	#[case(FormatValue::Bool(true), "true")]
	#[case(FormatValue::Char('<'), "<")]
	#[case(FormatValue::Str("a & b".to_string()), "a & b")]
	#[case(FormatValue::Int(Integer::from(-7)), "-7")]
	fn test_default_conversions(#[case] value: FormatValue, #[case] expected: &str) {
		assert_eq!(value.format(None, &Culture::default()).unwrap(), expected);
	}

	#[rstest]
	fn test_non_format_aware_values_ignore_spec() {
		let culture = Culture::default();
		let value = FormatValue::Str("text".to_string());
		assert_eq!(value.format(Some("X"), &culture).unwrap(), "text");
		let value = FormatValue::Display(Arc::new(42u8));
		assert_eq!(value.format(Some("D5"), &culture).unwrap(), "42");
	}

	#[rstest]
	fn test_empty_spec_is_default() {
		let culture = Culture::default();
		let value = FormatValue::Float(2.5);
		assert_eq!(value.format(Some(""), &culture).unwrap(), "2.5");
	}

	#[rstest]
	fn test_utc_converts_to_fixed_offset() {
		let utc = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
		let FormatArg::Value(value) = FormatArg::from(utc) else {
			panic!("expected a value");
		};
		assert_eq!(
			value.format(Some("yyyy-MM-dd zzz"), &Culture::default()).unwrap(),
			"1970-01-01 +00:00"
		);
	}

	#[rstest]
	fn test_type_names() {
		assert_eq!(FormatValue::Single(1.0).type_name(), "floating-point");
		assert_eq!(
			FormatValue::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).type_name(),
			"date/time"
		);
	}
}
