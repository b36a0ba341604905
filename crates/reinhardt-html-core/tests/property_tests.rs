//! Properties that hold for any template or argument

use proptest::prelude::*;
use reinhardt_html_core::testing::HtmlTestEncoder;
use reinhardt_html_core::{
	DefaultHtmlEncoder, HtmlContentExt, HtmlEncoder, HtmlFormattableString, HtmlString, html_args,
};

proptest! {
	#[test]
	fn literal_templates_are_unchanged(template in "[^{}]*") {
		let value = HtmlFormattableString::new(template.clone(), html_args![]);
		prop_assert_eq!(value.render(&HtmlTestEncoder::new()).unwrap(), template);
	}

	#[test]
	fn string_arguments_are_encoded_exactly_once(text in ".*") {
		let encoder = DefaultHtmlEncoder::new();
		let value = HtmlFormattableString::new("{0}", html_args![text.clone()]);
		prop_assert_eq!(value.render(&encoder).unwrap(), encoder.encode(&text));
	}

	#[test]
	fn integer_arguments_match_to_string(number in any::<i64>()) {
		let encoder = HtmlTestEncoder::new();
		let value = HtmlFormattableString::new("<{0}>", html_args![number]);
		prop_assert_eq!(
			value.render(&encoder).unwrap(),
			format!("<{}>", encoder.encode(&number.to_string()))
		);
	}

	#[test]
	fn safe_arguments_pass_through(text in ".*") {
		let value = HtmlFormattableString::new("{0}", html_args![HtmlString::new(text.clone())]);
		prop_assert_eq!(value.render(&HtmlTestEncoder::new()).unwrap(), text);
	}

	#[test]
	fn alignment_reaches_requested_width(text in "[a-z]{0,12}", width in 0usize..40, left in any::<bool>()) {
		let template = if left { format!("{{0,-{}}}", width) } else { format!("{{0,{}}}", width) };
		let value = HtmlFormattableString::new(template, html_args![text.clone()]);
		let output = value.render(&HtmlTestEncoder::new()).unwrap();
		let encoded = HtmlTestEncoder::new().encode(&text);

		prop_assert_eq!(output.chars().count(), width.max(encoded.chars().count()));
		prop_assert_eq!(output.trim(), encoded.as_str());
	}

	#[test]
	fn default_encoder_output_has_no_markup(text in ".*") {
		let encoded = DefaultHtmlEncoder::new().encode(&text);
		prop_assert!(!encoded.contains('<'));
		prop_assert!(!encoded.contains('>'));
		prop_assert!(!encoded.contains('"'));
	}

	#[test]
	fn doubled_braces_collapse(inner in "[a-z ]*") {
		let value = HtmlFormattableString::new(format!("{{{{{}}}}}", inner), html_args![]);
		prop_assert_eq!(value.render(&HtmlTestEncoder::new()).unwrap(), format!("{{{}}}", inner));
	}
}
