//! Convenience operations of `HtmlContentBuilderExt`

use reinhardt_html_core::testing::HtmlTestEncoder;
use reinhardt_html_core::{
	Culture, FormatArg, HtmlContent, HtmlContentBuffer, HtmlContentBuilder, HtmlContentBuilderExt,
	HtmlContentExt, HtmlEncoder, HtmlError, HtmlString, html_args,
};
use rstest::{fixture, rstest};
use std::fmt::Write;

const NL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Builder that records which primitive was called with what
#[derive(Default)]
struct RecordingBuilder {
	calls: Vec<String>,
}

impl HtmlContent for RecordingBuilder {
	fn write_to(&self, writer: &mut dyn Write, _encoder: &dyn HtmlEncoder) -> reinhardt_html_core::Result<()> {
		writer.write_str(&self.calls.join("|"))?;
		Ok(())
	}
}

impl HtmlContentBuilder for RecordingBuilder {
	fn append(&mut self, unencoded: impl Into<String>) -> &mut Self {
		self.calls.push(format!("append({})", unencoded.into()));
		self
	}

	fn append_html(&mut self, encoded: impl Into<HtmlString>) -> &mut Self {
		let encoded = encoded.into();
		let shown = if encoded.as_str() == NL { "NL" } else { encoded.as_str() };
		self.calls.push(format!("append_html({})", shown));
		self
	}

	fn append_html_content(&mut self, content: impl HtmlContent + 'static) -> &mut Self {
		let rendered = content.render(&HtmlTestEncoder::new()).unwrap();
		self.calls.push(format!("append_html_content({})", rendered));
		self
	}

	fn clear(&mut self) -> &mut Self {
		self.calls.push("clear".to_string());
		self
	}
}

#[fixture]
fn recorder() -> RecordingBuilder {
	RecordingBuilder::default()
}

#[fixture]
fn buffer() -> HtmlContentBuffer {
	let mut buffer = HtmlContentBuffer::new();
	buffer.append("old");
	buffer
}

fn render(buffer: &HtmlContentBuffer) -> String {
	buffer.render(&HtmlTestEncoder::new()).unwrap()
}

#[rstest]
fn test_append_line_uses_platform_newline(mut recorder: RecordingBuilder) {
	recorder.append_line();
	assert_eq!(recorder.calls, vec!["append_html(NL)"]);
	assert_eq!(HtmlString::NEW_LINE.as_str(), NL);
}

#[rstest]
fn test_line_variants_append_then_newline(mut recorder: RecordingBuilder) {
	recorder
		.append_text_line("<a>")
		.append_html_line("<b>")
		.append_content_line(HtmlString::new("<c>"));

	assert_eq!(
		recorder.calls,
		vec![
			"append(<a>)",
			"append_html(NL)",
			"append_html(<b>)",
			"append_html(NL)",
			"append_html_content(<c>)",
			"append_html(NL)",
		]
	);
}

#[rstest]
fn test_set_operations_clear_first(mut recorder: RecordingBuilder) {
	recorder
		.set_content("x")
		.set_html("<y>")
		.set_html_content(HtmlString::new("<z>"));

	assert_eq!(
		recorder.calls,
		vec![
			"clear",
			"append(x)",
			"clear",
			"append_html(<y>)",
			"clear",
			"append_html_content(<z>)",
		]
	);
}

#[rstest]
fn test_append_format_appends_formattable_content(mut recorder: RecordingBuilder) {
	recorder.append_format("{0}!", html_args!["Hello"]);
	assert_eq!(
		recorder.calls,
		vec!["append_html_content(HtmlEncode[[Hello]]!)"]
	);
}

#[rstest]
fn test_append_format_with_culture(mut buffer: HtmlContentBuffer) {
	buffer.append_format_with(
		Culture::from_name("fr-FR").unwrap(),
		" {0:N2}",
		html_args![1.5],
	);
	assert_eq!(render(&buffer), "HtmlEncode[[old]] HtmlEncode[[1,50]]");
}

#[rstest]
#[case(None, Some(vec![]), "format")]
#[case(Some("{0}".to_string()), None, "args")]
fn test_try_append_format_rejects_absent_input(
	mut buffer: HtmlContentBuffer,
	#[case] format: Option<String>,
	#[case] args: Option<Vec<FormatArg>>,
	#[case] parameter: &str,
) {
	let err = buffer.try_append_format(format, args).err().unwrap();

	assert!(matches!(&err, HtmlError::InvalidArgument(message) if message.contains(parameter)));
	assert_eq!(buffer.len(), 1);
	assert_eq!(render(&buffer), "HtmlEncode[[old]]");
}

#[rstest]
fn test_try_append_format_appends_on_success(mut buffer: HtmlContentBuffer) {
	buffer
		.try_append_format(Some("[{0}]".to_string()), Some(html_args![7]))
		.unwrap()
		.append_line();
	assert_eq!(render(&buffer), format!("HtmlEncode[[old]][HtmlEncode[[7]]]{}", NL));
}

#[rstest]
fn test_set_content_replaces_buffer(mut buffer: HtmlContentBuffer) {
	buffer.set_content("new");
	assert_eq!(buffer.len(), 1);
	assert_eq!(render(&buffer), "HtmlEncode[[new]]");

	buffer.set_html("<hr>");
	assert_eq!(render(&buffer), "<hr>");
}

#[rstest]
fn test_chained_document(mut buffer: HtmlContentBuffer) {
	buffer
		.set_html("<ul>")
		.append_line()
		.append_format("<li>{0}</li>", html_args!["a&b"])
		.append_line()
		.append_html("</ul>");

	assert_eq!(
		render(&buffer),
		format!("<ul>{nl}<li>HtmlEncode[[a&b]]</li>{nl}</ul>", nl = NL)
	);
}
