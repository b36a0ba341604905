//! Culture-aware date and time formatting

use super::DateTimeFormat;
use crate::error::FormatError;
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

const TYPE_NAME: &str = "date/time";
const ROUND_TRIP_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK";
const RFC1123_PATTERN: &str = "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'";
const SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
const UNIVERSAL_SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd HH':'mm':'ss'Z'";

/// Which chrono type a [`DateParts`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateKind {
	DateTime,
	Date,
	Time,
	Offset,
}

/// A calendar value reduced to what the formatter needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateParts {
	local: NaiveDateTime,
	offset: Option<FixedOffset>,
	kind: DateKind,
}

impl DateParts {
	pub(crate) fn from_naive(value: NaiveDateTime) -> Self {
		Self {
			local: value,
			offset: None,
			kind: DateKind::DateTime,
		}
	}

	pub(crate) fn from_date(value: NaiveDate) -> Self {
		Self {
			local: value.and_time(NaiveTime::MIN),
			offset: None,
			kind: DateKind::Date,
		}
	}

	/// Times are formatted on the date 0001-01-01
	pub(crate) fn from_time(value: NaiveTime) -> Self {
		let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or_default();
		Self {
			local: date.and_time(value),
			offset: None,
			kind: DateKind::Time,
		}
	}

	pub(crate) fn from_offset(value: chrono::DateTime<FixedOffset>) -> Self {
		Self {
			local: value.naive_local(),
			offset: Some(*value.offset()),
			kind: DateKind::Offset,
		}
	}

	/// Offset from UTC in seconds; naive values count as UTC
	fn offset_seconds(&self) -> i32 {
		self.offset.map(|o| o.local_minus_utc()).unwrap_or(0)
	}

	/// The same instant at offset zero
	fn to_utc(self) -> Self {
		match self.offset {
			Some(offset) => {
				let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
				Self {
					local: self.local.checked_sub_signed(shift).unwrap_or(self.local),
					offset: FixedOffset::east_opt(0),
					kind: self.kind,
				}
			}
			None => self,
		}
	}
}

fn invalid(spec: &str) -> FormatError {
	FormatError::InvalidSpecifier {
		spec: spec.to_string(),
		type_name: TYPE_NAME,
	}
}

/// Format with an optional standard or custom specifier
///
/// Without a specifier dates use `d`, times use `T`, date-times use `G` and
/// offset date-times use `G` followed by the `zzz` offset.
pub(crate) fn format_date(parts: &DateParts, spec: Option<&str>, dtf: &DateTimeFormat) -> Result<String, FormatError> {
	let spec = match spec {
		Some(spec) if !spec.is_empty() => spec,
		_ => {
			return match parts.kind {
				DateKind::Date => format_standard(parts, 'd', dtf),
				DateKind::Time => format_standard(parts, 'T', dtf),
				DateKind::DateTime => format_standard(parts, 'G', dtf),
				DateKind::Offset => {
					let mut result = format_standard(parts, 'G', dtf)?;
					result.push(' ');
					result.push_str(&format_custom(parts, "zzz", dtf)?);
					Ok(result)
				}
			};
		}
	};

	let mut chars = spec.chars();
	match (chars.next(), chars.next()) {
		(Some(letter), None) => format_standard(parts, letter, dtf).map_err(|_| invalid(spec)),
		_ => format_custom(parts, spec, dtf),
	}
}

fn format_standard(parts: &DateParts, letter: char, dtf: &DateTimeFormat) -> Result<String, FormatError> {
	let joined = |first: &str, second: &str| format!("{} {}", first, second);
	match letter {
		'd' => format_custom(parts, &dtf.short_date_pattern, dtf),
		'D' => format_custom(parts, &dtf.long_date_pattern, dtf),
		'f' => format_custom(parts, &joined(&dtf.long_date_pattern, &dtf.short_time_pattern), dtf),
		'F' => format_custom(parts, &joined(&dtf.long_date_pattern, &dtf.long_time_pattern), dtf),
		'g' => format_custom(parts, &joined(&dtf.short_date_pattern, &dtf.short_time_pattern), dtf),
		'G' => format_custom(parts, &joined(&dtf.short_date_pattern, &dtf.long_time_pattern), dtf),
		'm' | 'M' => format_custom(parts, &dtf.month_day_pattern, dtf),
		'y' | 'Y' => format_custom(parts, &dtf.year_month_pattern, dtf),
		't' => format_custom(parts, &dtf.short_time_pattern, dtf),
		'T' => format_custom(parts, &dtf.long_time_pattern, dtf),
		'o' | 'O' => format_custom(parts, ROUND_TRIP_PATTERN, dtf),
		's' => format_custom(parts, SORTABLE_PATTERN, dtf),
		// Culture independent and always in UTC
		'r' | 'R' => {
			let invariant = super::Culture::invariant();
			format_custom(&parts.to_utc(), RFC1123_PATTERN, &invariant.date_time)
		}
		'u' => format_custom(&parts.to_utc(), UNIVERSAL_SORTABLE_PATTERN, dtf),
		'U' => format_custom(
			&parts.to_utc(),
			&joined(&dtf.long_date_pattern, &dtf.long_time_pattern),
			dtf,
		),
		_ => Err(invalid(&letter.to_string())),
	}
}

fn push_padded(output: &mut String, value: u32, width: usize) {
	output.push_str(&format!("{:0width$}", value, width = width));
}

fn push_offset(output: &mut String, seconds: i32, count: usize) {
	let sign = if seconds < 0 { '-' } else { '+' };
	let total_minutes = seconds.unsigned_abs() / 60;
	let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
	output.push(sign);
	match count {
		1 => push_padded(output, hours, 1),
		2 => push_padded(output, hours, 2),
		_ => {
			push_padded(output, hours, 2);
			output.push(':');
			push_padded(output, minutes, 2);
		}
	}
}

/// Seven digit fraction of a second, in 100ns ticks
fn fraction_digits(nanosecond: u32) -> String {
	// Leap second nanoseconds exceed one second
	format!("{:07}", (nanosecond % 1_000_000_000) / 100)
}

fn format_custom(parts: &DateParts, pattern: &str, dtf: &DateTimeFormat) -> Result<String, FormatError> {
	let local = parts.local;
	let chars: Vec<char> = pattern.chars().collect();
	let mut output = String::with_capacity(pattern.len() * 2);
	let mut index = 0;

	while index < chars.len() {
		let ch = chars[index];
		let mut count = 1;
		while index + count < chars.len() && chars[index + count] == ch {
			count += 1;
		}

		match ch {
			'd' => match count {
				1 | 2 => push_padded(&mut output, local.day(), count),
				3 => output.push_str(
					&dtf.abbreviated_day_names[local.weekday().num_days_from_sunday() as usize],
				),
				_ => output.push_str(&dtf.day_names[local.weekday().num_days_from_sunday() as usize]),
			},
			'f' | 'F' => {
				if count > 7 {
					return Err(invalid(pattern));
				}
				let digits = fraction_digits(local.nanosecond());
				let digits = &digits[..count];
				if ch == 'f' {
					output.push_str(digits);
				} else {
					let trimmed = digits.trim_end_matches('0');
					if trimmed.is_empty() {
						if output.ends_with('.') {
							output.pop();
						}
					} else {
						output.push_str(trimmed);
					}
				}
			}
			'g' => output.push_str(&dtf.era_name),
			'h' => {
				let hour = match local.hour() % 12 {
					0 => 12,
					h => h,
				};
				push_padded(&mut output, hour, count.min(2));
			}
			'H' => push_padded(&mut output, local.hour(), count.min(2)),
			'K' => {
				if let Some(offset) = parts.offset {
					push_offset(&mut output, offset.local_minus_utc(), 3);
				}
			}
			'm' => push_padded(&mut output, local.minute(), count.min(2)),
			'M' => match count {
				1 | 2 => push_padded(&mut output, local.month(), count),
				3 => output.push_str(&dtf.abbreviated_month_names[local.month0() as usize]),
				_ => output.push_str(&dtf.month_names[local.month0() as usize]),
			},
			's' => push_padded(&mut output, local.second(), count.min(2)),
			't' => {
				let designator = if local.hour() < 12 {
					&dtf.am_designator
				} else {
					&dtf.pm_designator
				};
				if count == 1 {
					if let Some(first) = designator.chars().next() {
						output.push(first);
					}
				} else {
					output.push_str(designator);
				}
			}
			'y' => {
				let year = local.year().unsigned_abs();
				match count {
					1 => output.push_str(&(year % 100).to_string()),
					2 => push_padded(&mut output, year % 100, 2),
					n => push_padded(&mut output, year, n),
				}
			}
			'z' => push_offset(&mut output, parts.offset_seconds(), count.min(3)),
			':' => {
				output.push_str(&dtf.time_separator);
				count = 1;
			}
			'/' => {
				output.push_str(&dtf.date_separator);
				count = 1;
			}
			'\'' | '"' => {
				let close = chars[index + 1..]
					.iter()
					.position(|&c| c == ch)
					.ok_or_else(|| invalid(pattern))?;
				output.extend(&chars[index + 1..index + 1 + close]);
				count = close + 2;
			}
			'%' => {
				let next = chars.get(index + 1).copied().ok_or_else(|| invalid(pattern))?;
				if next == '%' {
					return Err(invalid(pattern));
				}
				output.push_str(&format_custom(parts, &next.to_string(), dtf)?);
				count = 2;
			}
			'\\' => {
				let next = chars.get(index + 1).copied().ok_or_else(|| invalid(pattern))?;
				output.push(next);
				count = 2;
			}
			other => {
				for _ in 0..count {
					output.push(other);
				}
			}
		}
		index += count;
	}
	Ok(output)
}
