//! Culture-aware number formatting
//!
//! Every number is first reduced to a decimal digit buffer: exact digits for
//! integers and decimals, the shortest round-trip digits for binary floats.
//! Rounding then happens on the digit buffer, half away from zero.

use super::NumberFormat;
use crate::error::FormatError;
use crate::format::Integer;
use rust_decimal::Decimal;

const DOUBLE_GENERAL_PRECISION: i32 = 15;
const SINGLE_GENERAL_PRECISION: i32 = 7;
const MAX_PRECISION: usize = 999_999_999;

/// A numeric value accepted by the formatter
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
	Int(Integer),
	Float(f64),
	Single(f32),
	Decimal(Decimal),
}

/// Decimal digits `d.ddd × 10^exponent`
///
/// `digits` never has trailing zeros unless the value is zero, which is
/// represented as `"0"` with exponent 0.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DigitBuffer {
	negative: bool,
	digits: String,
	exponent: i32,
}

/// A number rounded to a fixed count of decimals
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fixed {
	negative: bool,
	int: String,
	frac: String,
}

impl Fixed {
	fn is_zero(&self) -> bool {
		self.int.bytes().all(|b| b == b'0') && self.frac.bytes().all(|b| b == b'0')
	}
}

impl Number {
	fn type_name(&self) -> &'static str {
		match self {
			Number::Int(_) => "integer",
			Number::Float(_) => "floating-point",
			Number::Single(_) => "floating-point",
			Number::Decimal(_) => "decimal",
		}
	}

	/// Non-finite floats are rendered with culture symbols and never reach
	/// the digit buffer
	fn non_finite(&self, nf: &NumberFormat) -> Option<String> {
		let value = match *self {
			Number::Float(v) => v,
			Number::Single(v) => f64::from(v),
			_ => return None,
		};
		if value.is_nan() {
			Some(nf.nan_symbol.to_string())
		} else if value == f64::INFINITY {
			Some(nf.positive_infinity_symbol.to_string())
		} else if value == f64::NEG_INFINITY {
			Some(nf.negative_infinity_symbol.to_string())
		} else {
			None
		}
	}

	fn digits(&self) -> DigitBuffer {
		match *self {
			Number::Int(int) => {
				let digits = int.value().unsigned_abs().to_string();
				DigitBuffer::from_plain(int.value() < 0, &digits, "")
			}
			Number::Decimal(d) => {
				let text = d.abs().to_string();
				let (int, frac) = text.split_once('.').unwrap_or((&text, ""));
				DigitBuffer::from_plain(d.is_sign_negative() && !d.is_zero(), int, frac)
			}
			Number::Float(v) => DigitBuffer::from_exponential(v.is_sign_negative(), &format!("{:e}", v.abs())),
			Number::Single(v) => DigitBuffer::from_exponential(v.is_sign_negative(), &format!("{:e}", v.abs())),
		}
	}
}

impl DigitBuffer {
	fn zero(negative: bool) -> Self {
		Self {
			negative,
			digits: "0".to_string(),
			exponent: 0,
		}
	}

	/// Build from an integer part and a fraction part
	fn from_plain(negative: bool, int: &str, frac: &str) -> Self {
		let all: String = format!("{}{}", int, frac);
		let leading = all.bytes().take_while(|&b| b == b'0').count();
		if leading == all.len() {
			return Self::zero(negative);
		}
		let significant = all[leading..].trim_end_matches('0');
		Self {
			negative,
			digits: significant.to_string(),
			exponent: int.len() as i32 - leading as i32 - 1,
		}
	}

	/// Build from Rust's `{:e}` output such as `1.21e0` or `1e-7`
	fn from_exponential(negative: bool, text: &str) -> Self {
		let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
		let exponent: i32 = exponent.parse().unwrap_or(0);
		let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
		let digits = digits.trim_end_matches('0');
		if digits.is_empty() {
			return Self::zero(negative);
		}
		Self {
			negative,
			digits: digits.to_string(),
			exponent,
		}
	}

	fn is_zero(&self) -> bool {
		self.digits == "0"
	}

	/// Multiply by `10^power`
	fn scaled(mut self, power: i32) -> Self {
		if !self.is_zero() {
			self.exponent += power;
		}
		self
	}

	/// Round to `decimals` fraction digits
	fn fixed(&self, decimals: usize) -> Fixed {
		let (mut int, mut frac) = if self.exponent >= 0 {
			let int_len = self.exponent as usize + 1;
			if self.digits.len() > int_len {
				(
					self.digits[..int_len].to_string(),
					self.digits[int_len..].to_string(),
				)
			} else {
				let mut int = self.digits.clone();
				int.push_str(&"0".repeat(int_len - self.digits.len()));
				(int, String::new())
			}
		} else {
			let mut frac = "0".repeat((-self.exponent - 1) as usize);
			frac.push_str(&self.digits);
			("0".to_string(), frac)
		};

		if frac.len() > decimals {
			let combined = format!("{}{}", int, frac);
			let (rounded, carried) = round_half_away(&combined, int.len() + decimals);
			let int_len = int.len() + usize::from(carried);
			int = rounded[..int_len].to_string();
			frac = rounded[int_len..].to_string();
		}
		frac.push_str(&"0".repeat(decimals - frac.len()));

		Fixed {
			negative: self.negative,
			int,
			frac,
		}
	}

	/// Round to `precision` significant digits, padding with zeros
	fn significant(&self, precision: usize) -> DigitBuffer {
		let (mut digits, carried) = round_half_away(&self.digits, precision);
		let exponent = if carried && !self.is_zero() {
			self.exponent + 1
		} else {
			self.exponent
		};
		digits.truncate(precision);
		digits.push_str(&"0".repeat(precision - digits.len()));
		DigitBuffer {
			negative: self.negative,
			digits,
			exponent,
		}
	}

	fn trimmed(mut self) -> Self {
		let trimmed = self.digits.trim_end_matches('0');
		self.digits = if trimmed.is_empty() {
			"0".to_string()
		} else {
			trimmed.to_string()
		};
		self
	}
}

/// Keep the first `keep` digits, rounding half away from zero
///
/// Returns the kept digits and whether rounding carried into a new leading
/// digit.
fn round_half_away(digits: &str, keep: usize) -> (String, bool) {
	if digits.len() <= keep {
		return (digits.to_string(), false);
	}
	let bytes = digits.as_bytes();
	let mut kept: Vec<u8> = bytes[..keep].to_vec();
	let mut carried = false;
	if bytes[keep] >= b'5' {
		let mut index = kept.len();
		loop {
			if index == 0 {
				kept.insert(0, b'1');
				carried = true;
				break;
			}
			index -= 1;
			if kept[index] == b'9' {
				kept[index] = b'0';
			} else {
				kept[index] += 1;
				break;
			}
		}
	}
	(kept.iter().map(|&b| b as char).collect(), carried)
}

/// Parse a standard specifier: one ASCII letter and an optional precision
fn parse_standard(spec: &str) -> Option<(char, Option<usize>)> {
	let mut chars = spec.chars();
	let letter = chars.next().filter(char::is_ascii_alphabetic)?;
	let rest = chars.as_str();
	if rest.is_empty() {
		return Some((letter, None));
	}
	if rest.len() > 9 || !rest.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	let precision: usize = rest.parse().ok()?;
	Some((letter, Some(precision.min(MAX_PRECISION))))
}

/// Whether a group separator follows the digit at `position` (counted from
/// the right, zero based) of an integer part
fn is_group_boundary(position: usize, sizes: &[usize]) -> bool {
	if position == 0 || sizes.is_empty() {
		return false;
	}
	let mut boundary = 0;
	let mut last = 0;
	for &size in sizes {
		if size == 0 {
			return false;
		}
		boundary += size;
		last = size;
		if boundary == position {
			return true;
		}
		if boundary > position {
			return false;
		}
	}
	(position - boundary) % last == 0
}

fn group_digits(int: &str, nf: &NumberFormat) -> String {
	let len = int.len();
	let mut result = String::with_capacity(len + len / 3 * nf.group_separator.len());
	for (index, ch) in int.chars().enumerate() {
		result.push(ch);
		if is_group_boundary(len - index - 1, &nf.group_sizes) {
			result.push_str(&nf.group_separator);
		}
	}
	result
}

fn join_fixed(fixed: &Fixed, grouped: bool, nf: &NumberFormat) -> String {
	let mut result = if grouped {
		group_digits(&fixed.int, nf)
	} else {
		fixed.int.clone()
	};
	if !fixed.frac.is_empty() {
		result.push_str(&nf.decimal_separator);
		result.push_str(&fixed.frac);
	}
	result
}

fn with_sign(negative: bool, body: String, nf: &NumberFormat) -> String {
	if negative {
		format!("{}{}", nf.negative_sign, body)
	} else {
		body
	}
}

/// Expand a currency or percent pattern
fn apply_pattern(pattern: &str, number: &str, symbol_marker: char, symbol: &str, nf: &NumberFormat) -> String {
	let mut result = String::with_capacity(pattern.len() + number.len() + symbol.len());
	for ch in pattern.chars() {
		match ch {
			'n' => result.push_str(number),
			'-' => result.push_str(&nf.negative_sign),
			c if c == symbol_marker => result.push_str(symbol),
			c => result.push(c),
		}
	}
	result
}

/// Render a digit buffer in scientific notation: `d.dddE+xx`
fn scientific(buffer: &DigitBuffer, exp_char: char, min_exp_digits: usize, nf: &NumberFormat) -> String {
	let mut body = buffer.digits[..1].to_string();
	if buffer.digits.len() > 1 {
		body.push_str(&nf.decimal_separator);
		body.push_str(&buffer.digits[1..]);
	}
	let sign = if buffer.exponent < 0 {
		&*nf.negative_sign
	} else {
		"+"
	};
	body.push(exp_char);
	body.push_str(sign);
	body.push_str(&format!(
		"{:0width$}",
		buffer.exponent.unsigned_abs(),
		width = min_exp_digits
	));
	with_sign(buffer.negative, body, nf)
}

/// Render a trimmed digit buffer without exponent
fn positional(buffer: &DigitBuffer, nf: &NumberFormat) -> String {
	let decimals = (buffer.digits.len() as i32 - buffer.exponent - 1).max(0) as usize;
	let fixed = buffer.fixed(decimals);
	with_sign(buffer.negative, join_fixed(&fixed, false, nf), nf)
}

fn general(number: &Number, precision: Option<usize>, exp_char: char, nf: &NumberFormat) -> String {
	let buffer = number.digits();
	let precision = precision.filter(|&p| p > 0);

	match (number, precision) {
		(Number::Int(_), None) => positional(&buffer, nf),
		(Number::Decimal(d), None) => {
			let text = d.abs().to_string();
			let (int, frac) = text.split_once('.').unwrap_or((&text, ""));
			let fixed = Fixed {
				negative: buffer.negative,
				int: int.to_string(),
				frac: frac.to_string(),
			};
			with_sign(fixed.negative, join_fixed(&fixed, false, nf), nf)
		}
		(Number::Float(_) | Number::Single(_), None) => {
			let threshold = if matches!(number, Number::Single(_)) {
				SINGLE_GENERAL_PRECISION
			} else {
				DOUBLE_GENERAL_PRECISION
			};
			if buffer.exponent >= -4 && buffer.exponent < threshold {
				positional(&buffer, nf)
			} else {
				scientific(&buffer, exp_char, 2, nf)
			}
		}
		(_, Some(precision)) => {
			let rounded = buffer.significant(precision).trimmed();
			if rounded.exponent >= -4 && (rounded.exponent as i64) < precision as i64 {
				positional(&rounded, nf)
			} else {
				scientific(&rounded, exp_char, 2, nf)
			}
		}
	}
}

fn integer_only(number: &Number, spec: &str) -> Result<Integer, FormatError> {
	match number {
		Number::Int(int) => Ok(*int),
		other => Err(FormatError::InvalidSpecifier {
			spec: spec.to_string(),
			type_name: other.type_name(),
		}),
	}
}

fn pad_zeros(digits: String, width: Option<usize>) -> String {
	match width {
		Some(width) if digits.len() < width => format!("{}{}", "0".repeat(width - digits.len()), digits),
		_ => digits,
	}
}

/// Format a number with an optional standard or custom specifier
pub(crate) fn format_number(number: &Number, spec: Option<&str>, nf: &NumberFormat) -> Result<String, FormatError> {
	if let Some(symbol) = number.non_finite(nf) {
		return Ok(symbol);
	}

	let spec = match spec {
		Some(spec) if !spec.is_empty() => spec,
		_ => return Ok(general(number, None, 'E', nf)),
	};

	let Some((letter, precision)) = parse_standard(spec) else {
		return Ok(format_custom(number, spec, nf));
	};

	let invalid = || FormatError::InvalidSpecifier {
		spec: spec.to_string(),
		type_name: number.type_name(),
	};

	let result = match letter.to_ascii_uppercase() {
		'C' => {
			let decimals = precision.unwrap_or(nf.currency_decimal_digits);
			let fixed = number.digits().fixed(decimals);
			let body = join_fixed(&fixed, true, nf);
			let pattern = if fixed.negative && !fixed.is_zero() {
				&nf.currency_negative_pattern
			} else {
				&nf.currency_positive_pattern
			};
			apply_pattern(pattern, &body, '$', &nf.currency_symbol, nf)
		}
		'D' => {
			let int = integer_only(number, spec)?;
			let digits = pad_zeros(int.value().unsigned_abs().to_string(), precision);
			with_sign(int.value() < 0, digits, nf)
		}
		'E' => {
			let decimals = precision.unwrap_or(6);
			let buffer = number.digits().significant(decimals + 1);
			let exp_char = if letter.is_ascii_uppercase() { 'E' } else { 'e' };
			scientific(&buffer, exp_char, 3, nf)
		}
		'F' | 'N' => {
			let decimals = precision.unwrap_or(nf.decimal_digits);
			let fixed = number.digits().fixed(decimals);
			let grouped = letter.eq_ignore_ascii_case(&'N');
			with_sign(fixed.negative, join_fixed(&fixed, grouped, nf), nf)
		}
		'G' => {
			let exp_char = if letter.is_ascii_uppercase() { 'E' } else { 'e' };
			general(number, precision, exp_char, nf)
		}
		'P' => {
			let decimals = precision.unwrap_or(nf.percent_decimal_digits);
			let fixed = number.digits().scaled(2).fixed(decimals);
			let body = join_fixed(&fixed, true, nf);
			let pattern = if fixed.negative && !fixed.is_zero() {
				&nf.percent_negative_pattern
			} else {
				&nf.percent_positive_pattern
			};
			apply_pattern(pattern, &body, '%', &nf.percent_symbol, nf)
		}
		'R' => match number {
			Number::Decimal(_) => return Err(invalid()),
			_ => general(number, None, 'E', nf),
		},
		'X' => {
			let int = integer_only(number, spec)?;
			let bits = int.twos_complement();
			let digits = if letter == 'X' {
				format!("{:X}", bits)
			} else {
				format!("{:x}", bits)
			};
			pad_zeros(digits, precision)
		}
		'B' => {
			let int = integer_only(number, spec)?;
			pad_zeros(format!("{:b}", int.twos_complement()), precision)
		}
		_ => return Err(invalid()),
	};
	Ok(result)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
	Digit { zero: bool },
	DecimalPoint,
	Percent,
	PerMille,
	Literal(String),
}

#[derive(Debug, Default)]
struct Section {
	tokens: Vec<Token>,
	int_placeholders: usize,
	first_zero_int: Option<usize>,
	frac_placeholders: usize,
	min_frac: usize,
	grouping: bool,
	scale: i32,
}

impl Section {
	fn has_decimal_point(&self) -> bool {
		self.tokens.contains(&Token::DecimalPoint)
	}

	fn min_int(&self) -> usize {
		self.first_zero_int
			.map(|first| self.int_placeholders - first)
			.unwrap_or(0)
	}
}

/// Split a custom pattern on unquoted `;`
fn split_sections(format: &str) -> Vec<&str> {
	let mut sections = Vec::with_capacity(3);
	let mut start = 0;
	let mut quote: Option<char> = None;
	let mut escaped = false;
	for (index, ch) in format.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match (ch, quote) {
			('\\', None) => escaped = true,
			('\'' | '"', None) => quote = Some(ch),
			(c, Some(q)) if c == q => quote = None,
			(';', None) if sections.len() < 2 => {
				sections.push(&format[start..index]);
				start = index + 1;
			}
			_ => {}
		}
	}
	sections.push(&format[start..]);
	sections
}

fn push_literal(section: &mut Section, s: &str) {
	match section.tokens.last_mut() {
		Some(Token::Literal(existing)) => existing.push_str(s),
		_ => section.tokens.push(Token::Literal(s.to_string())),
	}
}

fn parse_section(text: &str) -> Section {
	let mut section = Section::default();
	let chars: Vec<char> = text.chars().collect();
	let mut in_fraction = false;
	let mut seen_int_digit = false;
	let mut index = 0;

	while index < chars.len() {
		let ch = chars[index];
		match ch {
			'0' | '#' => {
				let zero = ch == '0';
				if in_fraction {
					section.frac_placeholders += 1;
					if zero {
						section.min_frac = section.frac_placeholders;
					}
				} else {
					if zero && section.first_zero_int.is_none() {
						section.first_zero_int = Some(section.int_placeholders);
					}
					section.int_placeholders += 1;
					seen_int_digit = true;
				}
				section.tokens.push(Token::Digit { zero });
			}
			'.' => {
				if !in_fraction {
					in_fraction = true;
					section.tokens.push(Token::DecimalPoint);
				}
			}
			',' => {
				let mut run = 1;
				while index + run < chars.len() && chars[index + run] == ',' {
					run += 1;
				}
				if !in_fraction && seen_int_digit {
					let next = chars.get(index + run).copied();
					if matches!(next, Some('0' | '#')) {
						section.grouping = true;
					} else {
						section.scale -= 3 * run as i32;
					}
				}
				index += run;
				continue;
			}
			'%' => {
				section.scale += 2;
				section.tokens.push(Token::Percent);
			}
			'\u{2030}' => {
				section.scale += 3;
				section.tokens.push(Token::PerMille);
			}
			'\\' => {
				if let Some(&next) = chars.get(index + 1) {
					push_literal(&mut section, &next.to_string());
					index += 1;
				}
			}
			'\'' | '"' => {
				let mut literal = String::new();
				index += 1;
				while index < chars.len() && chars[index] != ch {
					literal.push(chars[index]);
					index += 1;
				}
				push_literal(&mut section, &literal);
			}
			other => push_literal(&mut section, &other.to_string()),
		}
		index += 1;
	}
	section
}

/// Format against one parsed section; returns the text and whether the
/// rounded value is zero
fn render_section(buffer: &DigitBuffer, section: &Section, signed: bool, nf: &NumberFormat) -> (String, bool) {
	let fixed = buffer.clone().scaled(section.scale).fixed(section.frac_placeholders);
	let is_zero = fixed.is_zero();

	let mut frac = fixed.frac.clone();
	while frac.len() > section.min_frac && frac.ends_with('0') {
		frac.pop();
	}

	let mut int_digits = fixed.int.trim_start_matches('0').to_string();
	let min_int = section.min_int();
	if int_digits.len() < min_int {
		int_digits = format!("{}{}", "0".repeat(min_int - int_digits.len()), int_digits);
	}
	let int_digits: Vec<char> = int_digits.chars().collect();

	let mut output = String::new();
	if signed && buffer.negative && !is_zero {
		output.push_str(&nf.negative_sign);
	}

	let push_int_digit = |output: &mut String, position: usize| {
		output.push(int_digits[int_digits.len() - 1 - position]);
		if section.grouping && is_group_boundary(position, &nf.group_sizes) {
			output.push_str(&nf.group_separator);
		}
	};

	let mut int_seen = 0;
	let mut frac_seen = 0;
	let mut after_point = false;
	for token in &section.tokens {
		match token {
			Token::Digit { .. } if !after_point => {
				let position = section.int_placeholders - 1 - int_seen;
				if int_seen == 0 && int_digits.len() > section.int_placeholders {
					for extra in (section.int_placeholders..int_digits.len()).rev() {
						push_int_digit(&mut output, extra);
					}
				}
				if position < int_digits.len() {
					push_int_digit(&mut output, position);
				}
				int_seen += 1;
			}
			Token::Digit { .. } => {
				if let Some(digit) = frac.chars().nth(frac_seen) {
					output.push(digit);
				}
				frac_seen += 1;
			}
			Token::DecimalPoint => {
				if section.int_placeholders == 0 {
					for position in (0..int_digits.len()).rev() {
						push_int_digit(&mut output, position);
					}
				}
				if !frac.is_empty() {
					output.push_str(&nf.decimal_separator);
				}
				after_point = true;
			}
			Token::Percent => output.push_str(&nf.percent_symbol),
			Token::PerMille => output.push_str(&nf.per_mille_symbol),
			Token::Literal(text) => output.push_str(text),
		}
	}
	(output, is_zero)
}

fn format_custom(number: &Number, format: &str, nf: &NumberFormat) -> String {
	let buffer = number.digits();
	let sections = split_sections(format);

	let (primary, signed) = match sections.as_slice() {
		[_, negative, ..] if buffer.negative && !negative.is_empty() => (parse_section(negative), false),
		[first, ..] => (parse_section(first), true),
		[] => (Section::default(), true),
	};

	let (text, is_zero) = render_section(&buffer, &primary, signed, nf);
	if is_zero && sections.len() == 3 && !sections[2].is_empty() {
		let zero = parse_section(sections[2]);
		return render_section(&buffer, &zero, false, nf).0;
	}
	if primary.tokens.is_empty() {
		return String::new();
	}
	text
}
