//! Basic tests for recase-api

use recase_api::*;

#[test]
fn test_dash_input_conversions() {
    let convert = Convert::new("deep-space-nine");

    assert_eq!(convert.strategy(), SourceStrategy::Dash);
    assert_eq!(convert.to_ada(), "Deep_Space_Nine");
    assert_eq!(convert.to_camel(), "deepSpaceNine");
    assert_eq!(convert.to_cobol(), "DEEP-SPACE-NINE");
    assert_eq!(convert.to_kebab(), "deep-space-nine");
    assert_eq!(convert.to_macro(), "DEEP_SPACE_NINE");
    assert_eq!(convert.to_pascal(), "DeepSpaceNine");
    assert_eq!(convert.to_snake(), "deep_space_nine");
    assert_eq!(convert.to_train(), "Deep-Space-Nine");
}

#[test]
fn test_macro_to_kebab() {
    assert_eq!(Convert::new("HELLO_WORLD").to_kebab(), "hello-world");
}

#[test]
fn test_camel_and_pascal_inputs() {
    let camel = Convert::new("helloWorld");
    assert_eq!(camel.strategy(), SourceStrategy::Uppercase);
    assert_eq!(camel.to_snake(), "hello_world");

    let pascal = Convert::new("XMLHttpRequest");
    assert_eq!(pascal.words(), &["XML", "Http", "Request"]);
    assert_eq!(pascal.to_snake(), "xml_http_request");
    assert_eq!(pascal.to_camel(), "xmlHttpRequest");
}

#[test]
fn test_single_words() {
    assert_eq!(Convert::new("HELLO").to_pascal(), "Hello");
    assert_eq!(Convert::new("X").to_camel(), "x");
    assert_eq!(Convert::new("X").to_pascal(), "X");
    assert_eq!(Convert::new("hello").to_macro(), "HELLO");
}

#[test]
fn test_empty_input() {
    let convert = Convert::new("");

    assert!(convert.words().is_empty());
    assert_eq!(convert.to_ada(), "");
    assert_eq!(convert.to_camel(), "");
    assert_eq!(convert.to_cobol(), "");
    assert_eq!(convert.to_kebab(), "");
    assert_eq!(convert.to_macro(), "");
    assert_eq!(convert.to_pascal(), "");
    assert_eq!(convert.to_snake(), "");
    assert_eq!(convert.to_train(), "");
    assert_eq!(convert.to_string(), "");
}

#[test]
fn test_display_is_camel() {
    let convert = Convert::new("Deep_Space_Nine");
    assert_eq!(convert.to_string(), convert.to_camel());
    assert_eq!(format!("{convert}"), "deepSpaceNine");
}

#[test]
fn test_session_reuse() {
    let convert = Convert::new("some_identifier_name");
    let first = convert.to_train();

    for convention in NamingConvention::ALL {
        let _ = convert.to(convention);
    }

    assert_eq!(convert.to_train(), first);
    assert_eq!(convert.words(), &["some", "identifier", "name"]);
}

#[test]
fn test_snake_round_trip() {
    let snake = Convert::new("hello_world").to_snake();
    let reread = Convert::new(snake);

    assert_eq!(reread.strategy(), SourceStrategy::Underscore);
    assert_eq!(reread.words(), &["hello", "world"]);
}

#[test]
fn test_convenience_functions() {
    assert_eq!(convert("deep-space-nine", NamingConvention::Snake), "deep_space_nine");
    assert_eq!(convert_to("deep-space-nine", "Train-Case").unwrap(), "Deep-Space-Nine");

    let all = convert_all("helloWorld");
    assert_eq!(all.len(), NamingConvention::ALL.len());
    assert_eq!(
        all[0],
        ConventionOutput {
            convention: NamingConvention::Ada,
            output: "Hello_World".to_string(),
        }
    );
}

#[test]
fn test_unknown_convention_name() {
    let err = convert_to("helloWorld", "shouting").unwrap_err();
    assert!(matches!(
        err,
        ApiError::Engine(EngineError::UnknownConvention { .. })
    ));
    assert_eq!(
        err.to_string(),
        "engine error: unknown naming convention 'shouting'"
    );
}

#[test]
fn test_from_input_rejects_non_strings() {
    let err = Convert::from_input(vec![0xc3u8, 0x28]).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { .. }));

    let convert = Convert::from_input(b"deep-space".to_vec()).unwrap();
    assert_eq!(convert.to_pascal(), "DeepSpace");
}

#[test]
#[cfg(feature = "serde")]
fn test_from_json_input() {
    let convert = Convert::from_input(serde_json::json!("hello-world")).unwrap();
    assert_eq!(convert.to_macro(), "HELLO_WORLD");

    let err = Convert::from_input(serde_json::json!(["hello"])).unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidInput {
            reason: "expected a JSON string, found an array".to_string()
        }
    );
}

#[test]
fn test_custom_rules_lower_first_word() {
    let convert = Convert::new("foo_bar");

    assert_eq!(
        convert.to_rules(GlueRules::new("", LetterCase::Upper, true)),
        "fooBAR"
    );
    assert_eq!(
        convert.to_rules(GlueRules::new("-", LetterCase::Upper, true)),
        "foo-BAR"
    );
    assert_eq!(
        convert.to_rules(GlueRules::new("§", LetterCase::Title, true)),
        "foo§Bar"
    );
    assert_eq!(
        convert.to_rules(NamingConvention::Camel.rules()),
        convert.to_camel()
    );
}

#[test]
fn test_camel_lowers_leading_acronym() {
    assert_eq!(Convert::new("HTTP_SERVER").to_camel(), "httpServer");
    assert_eq!(Convert::new("XMLParser").to_camel(), "xmlParser");
}
