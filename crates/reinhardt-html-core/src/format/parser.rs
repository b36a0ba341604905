//! Composite format template parser
//!
//! Templates contain literal text and format items of the form
//! `{index[,alignment][:spec]}`. Doubled braces (`{{` and `}}`) stand for a
//! single literal brace.

use crate::error::FormatError;

/// Largest accepted index or alignment magnitude
pub(crate) const MAX_ITEM_COMPONENT: usize = 1_000_000;

/// A parsed format item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FormatItem<'a> {
	pub(crate) index: usize,
	/// Positive values right-align, negative values left-align
	pub(crate) alignment: isize,
	pub(crate) spec: Option<&'a str>,
	/// Byte offset of the opening brace
	pub(crate) position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
	Literal(&'a str),
	Item(FormatItem<'a>),
}

/// Iterator over the segments of a template
///
/// Stops after the first error.
pub(crate) struct FormatParser<'a> {
	template: &'a str,
	position: usize,
	failed: bool,
}

impl<'a> FormatParser<'a> {
	pub(crate) fn new(template: &'a str) -> Self {
		Self {
			template,
			position: 0,
			failed: false,
		}
	}

	fn byte_at(&self, position: usize) -> Option<u8> {
		self.template.as_bytes().get(position).copied()
	}

	fn skip_spaces(&mut self) {
		while self.byte_at(self.position) == Some(b' ') {
			self.position += 1;
		}
	}

	fn unexpected(&self, start: usize) -> FormatError {
		match self.template[self.position..].chars().next() {
			Some(ch) => FormatError::UnexpectedCharacter {
				ch,
				position: self.position,
			},
			None => FormatError::UnterminatedItem(start),
		}
	}

	fn parse_number(&mut self, start: usize, component: &'static str) -> Result<usize, FormatError> {
		let digits_start = self.position;
		let mut value: usize = 0;
		while let Some(b @ b'0'..=b'9') = self.byte_at(self.position) {
			value = value * 10 + usize::from(b - b'0');
			if value > MAX_ITEM_COMPONENT {
				return Err(FormatError::LimitExceeded {
					component,
					limit: MAX_ITEM_COMPONENT,
					position: start,
				});
			}
			self.position += 1;
		}
		if self.position == digits_start {
			return Err(self.unexpected(start));
		}
		Ok(value)
	}

	fn parse_item(&mut self) -> Result<FormatItem<'a>, FormatError> {
		let start = self.position;
		self.position += 1;

		let index = self.parse_number(start, "index")?;
		self.skip_spaces();

		let mut alignment: isize = 0;
		if self.byte_at(self.position) == Some(b',') {
			self.position += 1;
			self.skip_spaces();
			let negative = self.byte_at(self.position) == Some(b'-');
			if negative {
				self.position += 1;
			}
			let width = self.parse_number(start, "alignment")? as isize;
			alignment = if negative { -width } else { width };
			self.skip_spaces();
		}

		let mut spec = None;
		if self.byte_at(self.position) == Some(b':') {
			self.position += 1;
			let spec_start = self.position;
			loop {
				match self.byte_at(self.position) {
					Some(b'}') => break,
					Some(b'{') => return Err(self.unexpected(start)),
					Some(_) => self.position += 1,
					None => return Err(FormatError::UnterminatedItem(start)),
				}
			}
			spec = Some(&self.template[spec_start..self.position]);
		}

		if self.byte_at(self.position) != Some(b'}') {
			return Err(self.unexpected(start));
		}
		self.position += 1;

		Ok(FormatItem {
			index,
			alignment,
			spec,
			position: start,
		})
	}
}

impl<'a> Iterator for FormatParser<'a> {
	type Item = Result<Segment<'a>, FormatError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || self.position >= self.template.len() {
			return None;
		}

		let start = self.position;
		let rest = &self.template.as_bytes()[start..];
		let literal_len = rest
			.iter()
			.position(|&b| b == b'{' || b == b'}')
			.unwrap_or(rest.len());
		if literal_len > 0 {
			self.position += literal_len;
			return Some(Ok(Segment::Literal(&self.template[start..self.position])));
		}

		let brace = rest[0];
		if rest.get(1) == Some(&brace) {
			self.position += 2;
			return Some(Ok(Segment::Literal(&self.template[start..start + 1])));
		}

		let result = if brace == b'{' {
			self.parse_item().map(Segment::Item)
		} else {
			Err(FormatError::UnexpectedCharacter {
				ch: '}',
				position: start,
			})
		};
		if result.is_err() {
			self.failed = true;
		}
		Some(result)
	}
}
