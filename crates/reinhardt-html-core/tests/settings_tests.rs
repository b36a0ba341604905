//! Loading `HtmlSettings` from serialized configuration and the environment

use reinhardt_html_core::{DefaultHtmlEncoder, HtmlError, HtmlSettings};
use rstest::rstest;
use serial_test::serial;
use std::env;

const CULTURE_VAR: &str = "REINHARDT_HTML_CULTURE";
const NON_ASCII_VAR: &str = "REINHARDT_HTML_ENCODE_NON_ASCII";

fn set_env(culture: Option<&str>, non_ascii: Option<&str>) {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// These tests use #[serial] to ensure exclusive access to environment variables.
	unsafe {
		match culture {
			Some(value) => env::set_var(CULTURE_VAR, value),
			None => env::remove_var(CULTURE_VAR),
		}
		match non_ascii {
			Some(value) => env::set_var(NON_ASCII_VAR, value),
			None => env::remove_var(NON_ASCII_VAR),
		}
	}
}

#[rstest]
fn test_deserialize_with_defaults() {
	let settings: HtmlSettings = serde_json::from_str("{}").unwrap();
	assert_eq!(settings, HtmlSettings::default());

	let settings: HtmlSettings = serde_json::from_str(r#"{"culture": "ja-JP"}"#).unwrap();
	assert_eq!(settings.culture().unwrap().name(), "ja-JP");
	assert!(!settings.encode_non_ascii);
}

#[rstest]
fn test_serialize_round_trip() {
	let settings = HtmlSettings {
		culture: "en-GB".to_string(),
		encode_non_ascii: true,
	};
	let json = serde_json::to_value(&settings).unwrap();
	assert_eq!(
		json,
		serde_json::json!({"culture": "en-GB", "encode_non_ascii": true})
	);
}

#[rstest]
#[serial(html_env)]
fn test_from_env_defaults_when_unset() {
	set_env(None, None);

	let settings = HtmlSettings::from_env().unwrap();

	assert_eq!(settings, HtmlSettings::default());
}

#[rstest]
#[serial(html_env)]
#[case("fr", "yes", "fr-FR", true)]
#[case("de_DE", "0", "de-DE", false)]
#[case("", "ON", "", true)]
fn test_from_env_reads_values(
	#[case] culture: &str,
	#[case] non_ascii: &str,
	#[case] expected_culture: &str,
	#[case] expected_strict: bool,
) {
	set_env(Some(culture), Some(non_ascii));

	let settings = HtmlSettings::from_env().unwrap();

	assert_eq!(settings.culture().unwrap().name(), expected_culture);
	assert_eq!(settings.encoder().encodes_non_ascii(), expected_strict);
	set_env(None, None);
}

#[rstest]
#[serial(html_env)]
fn test_from_env_ignores_bad_boolean() {
	set_env(None, Some("sometimes"));

	let settings = HtmlSettings::from_env().unwrap();

	assert_eq!(settings.encoder(), DefaultHtmlEncoder::new());
	set_env(None, None);
}

#[rstest]
#[serial(html_env)]
fn test_from_env_rejects_unknown_culture() {
	set_env(Some("xx-XX"), None);

	let err = HtmlSettings::from_env().unwrap_err();

	assert!(matches!(err, HtmlError::InvalidArgument(_)));
	set_env(None, None);
}

#[rstest]
#[serial(html_env)]
fn test_from_env_with_custom_prefix() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("MYAPP_HTML_CULTURE", "en-US");
	}

	let settings = HtmlSettings::from_env_with_prefix("MYAPP_HTML_").unwrap();
	assert_eq!(settings.culture, "en-US");

	// SAFETY: See above.
	unsafe {
		env::remove_var("MYAPP_HTML_CULTURE");
	}
}
