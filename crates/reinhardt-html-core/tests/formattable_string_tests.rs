//! Composite formatting through `HtmlFormattableString`
//!
//! Every encoded substitution is made visible by `HtmlTestEncoder`, which
//! wraps encoded text as `HtmlEncode[[...]]`.

use chrono::NaiveDate;
use reinhardt_html_core::testing::HtmlTestEncoder;
use reinhardt_html_core::{
	Culture, DefaultHtmlEncoder, FormatArg, FormatError, HtmlContent, HtmlContentExt, HtmlError,
	HtmlFormattableString, HtmlString, html_args,
};
use rstest::rstest;
use std::sync::Arc;

fn render(value: &HtmlFormattableString) -> String {
	value.render(&HtmlTestEncoder::new()).unwrap()
}

fn culture(name: &str) -> Arc<Culture> {
	Culture::from_name(name).unwrap()
}

#[rstest]
fn test_left_alignment_pads_encoded_text() {
	// Arrange
	let value = HtmlFormattableString::new("{0, -25} World!", html_args!["Hello"]);

	// Act
	let output = render(&value);

	// Assert
	assert_eq!(output, "HtmlEncode[[Hello]]       World!");
	assert_eq!(output.find(" World!"), Some(25));
}

#[rstest]
fn test_right_alignment_pads_encoded_text() {
	let value = HtmlFormattableString::new("{0,22}|", html_args!["Hi"]);
	assert_eq!(render(&value), "      HtmlEncode[[Hi]]|");
}

#[rstest]
fn test_hex_specifier() {
	let value = HtmlFormattableString::new("0x{0:X}", html_args![50]);
	assert_eq!(render(&value), "0xHtmlEncode[[32]]");
}

#[rstest]
fn test_invariant_number_formats() {
	let value = HtmlFormattableString::with_provider(
		Culture::invariant(),
		"{0, -5:N} {1} {2} {3}",
		html_args![1.1, 2.98, 145.82, 32.86],
	);
	assert_eq!(
		render(&value),
		"HtmlEncode[[1.10]] HtmlEncode[[2.98]] HtmlEncode[[145.82]] HtmlEncode[[32.86]]"
	);
}

#[rstest]
fn test_french_decimal_separator() {
	let value = HtmlFormattableString::with_provider(culture("fr-FR"), "{0} in french!", html_args![1.21]);
	assert_eq!(render(&value), "HtmlEncode[[1,21]] in french!");
}

#[rstest]
fn test_german_long_date() {
	let date = NaiveDate::from_ymd_opt(2015, 2, 1).unwrap();
	let value = HtmlFormattableString::with_provider(culture("de-DE"), "{0:D}", html_args![date]);
	assert_eq!(render(&value), "HtmlEncode[[Sonntag, 1. Februar 2015]]");
}

#[rstest]
fn test_multiple_arguments() {
	let value = HtmlFormattableString::new(
		"0x{0:X} - {1} equivalent for {2}.",
		html_args![50, "hex", 50],
	);
	assert_eq!(
		render(&value),
		"0xHtmlEncode[[32]] - HtmlEncode[[hex]] equivalent for HtmlEncode[[50]]."
	);
}

#[rstest]
fn test_html_string_argument_is_not_encoded() {
	let value = HtmlFormattableString::new("{0}!", html_args![HtmlString::new("First")]);
	assert_eq!(render(&value), "First!");
}

#[rstest]
#[case("Hello, World!")]
#[case("<b>{{literal}}</b>")]
#[case("")]
fn test_no_arguments(#[case] template: &str) {
	let value = HtmlFormattableString::new(template, html_args![]);
	let expected = template.replace("{{", "{").replace("}}", "}");
	assert_eq!(render(&value), expected);
}

#[rstest]
fn test_nested_formattable_is_not_double_encoded() {
	let inner = HtmlFormattableString::new("<em>{0}</em>", html_args!["x<y"]);
	let outer = HtmlFormattableString::new("<p>{0}</p>", html_args![FormatArg::content(inner)]);

	assert_eq!(render(&outer), "<p><em>HtmlEncode[[x<y]]</em></p>");
	assert_eq!(
		outer.render(&DefaultHtmlEncoder::new()).unwrap(),
		"<p><em>x&lt;y</em></p>"
	);
}

#[rstest]
fn test_same_output_on_every_write() {
	let value = HtmlFormattableString::new("{0:N2} {1}", html_args![1234.5, "a&b"]);
	let first = render(&value);
	let second = render(&value);
	assert_eq!(first, second);
	assert_eq!(first, "HtmlEncode[[1,234.50]] HtmlEncode[[a&b]]");
}

#[rstest]
fn test_empty_string_argument_is_not_wrapped() {
	let value = HtmlFormattableString::new("[{0}]", html_args![""]);
	assert_eq!(render(&value), "[]");
}

#[rstest]
fn test_invalid_specifier_keeps_prefix() {
	// Arrange
	let value = HtmlFormattableString::new("ok {0} then {1:D}", html_args!["a", 1.5]);
	let mut output = String::new();

	// Act
	let err = value.write_to(&mut output, &HtmlTestEncoder::new()).unwrap_err();

	// Assert
	assert!(matches!(
		err,
		HtmlError::Format(FormatError::InvalidSpecifier { ref spec, type_name: "floating-point" }) if spec == "D"
	));
	assert_eq!(output, "ok HtmlEncode[[a]] then ");
}

#[rstest]
#[case("{0", FormatError::UnterminatedItem(0))]
#[case("a}", FormatError::UnexpectedCharacter { ch: '}', position: 1 })]
#[case("{2}", FormatError::IndexOutOfRange { index: 2, count: 1 })]
fn test_malformed_templates_fail(#[case] template: &str, #[case] expected: FormatError) {
	let value = HtmlFormattableString::new(template, html_args![1]);
	let err = value.render(&HtmlTestEncoder::new()).unwrap_err();
	match err {
		HtmlError::Format(actual) => assert_eq!(actual, expected),
		other => panic!("unexpected error: {other}"),
	}
}

#[rstest]
fn test_provider_can_be_shared_across_threads() {
	let value = Arc::new(HtmlFormattableString::with_provider(
		culture("de-DE"),
		"{0:N2}",
		html_args![1234.5],
	));

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let value = Arc::clone(&value);
			std::thread::spawn(move || value.render(&HtmlTestEncoder::new()).unwrap())
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), "HtmlEncode[[1.234,50]]");
	}
}

#[rstest]
fn test_html_format_macro() {
	let value = reinhardt_html_core::html_format!("{0}-{1}", 1, "two");
	assert_eq!(render(&value), "HtmlEncode[[1]]-HtmlEncode[[two]]");
}
