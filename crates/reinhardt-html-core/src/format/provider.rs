//! Formatting providers

use super::value::FormatValue;
use crate::culture::Culture;
use std::sync::Arc;

/// Supplies the culture, and optionally a custom formatter, for plain values
///
/// The custom formatter runs before the built-in conversion. Returning
/// `Some` replaces the built-in conversion; the text is still HTML encoded.
/// It also sees absent values as `None`.
///
/// # Examples
///
/// ```
/// use reinhardt_html_core::{Culture, FormatProvider, FormatValue};
///
/// struct YesNo(Culture);
///
/// impl FormatProvider for YesNo {
/// 	fn culture(&self) -> &Culture {
/// 		&self.0
/// 	}
///
/// 	fn format_custom(&self, _spec: Option<&str>, value: Option<&FormatValue>) -> Option<String> {
/// 		match value {
/// 			Some(FormatValue::Bool(true)) => Some("yes".to_string()),
/// 			Some(FormatValue::Bool(false)) => Some("no".to_string()),
/// 			_ => None,
/// 		}
/// 	}
/// }
///
/// let provider = YesNo(Culture::default());
/// assert_eq!(provider.format_custom(None, Some(&FormatValue::Bool(true))).as_deref(), Some("yes"));
/// ```
pub trait FormatProvider: Send + Sync {
	/// Culture used for numbers and dates
	fn culture(&self) -> &Culture;

	/// Custom conversion of a plain value
	fn format_custom(&self, spec: Option<&str>, value: Option<&FormatValue>) -> Option<String> {
		let _ = (spec, value);
		None
	}
}

impl FormatProvider for Culture {
	fn culture(&self) -> &Culture {
		self
	}
}

impl<P: FormatProvider + ?Sized> FormatProvider for Arc<P> {
	fn culture(&self) -> &Culture {
		(**self).culture()
	}

	fn format_custom(&self, spec: Option<&str>, value: Option<&FormatValue>) -> Option<String> {
		(**self).format_custom(spec, value)
	}
}

impl<P: FormatProvider + ?Sized> FormatProvider for &P {
	fn culture(&self) -> &Culture {
		(**self).culture()
	}

	fn format_custom(&self, spec: Option<&str>, value: Option<&FormatValue>) -> Option<String> {
		(**self).format_custom(spec, value)
	}
}
