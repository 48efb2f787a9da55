use chh_utils::core::literal::parse_literal;
use chh_utils::utils::escape::escape_string;
use chh_utils::{generate_export_code, parse_export_data, HelperError};
use serde_json::json;

#[test]
fn test_generate_parse_round_trip() {
    let values = vec![
        json!(null),
        json!(true),
        json!(42),
        json!(-1.5),
        json!("한글 텍스트 \"quoted\" \\ backslash\nnewline"),
        json!([1, [2, 3], {"k": "v"}]),
        json!({"profiles": [{"id": 1, "name": "미미", "tags": []}], "empty": {}}),
    ];
    for value in values {
        for pretty in [true, false] {
            let code = generate_export_code("data", &value, pretty).unwrap();
            let parsed = parse_export_data(&code, "data").unwrap();
            assert_eq!(parsed, value, "round trip failed for: {}", code);
        }
    }
}

#[test]
fn test_escape_string_evaluation_round_trip() {
    let cases = [
        "plain",
        "with \"quotes\"",
        "back\\slash and \\\" both",
        "multi\nline\twith\ttabs\r",
        "한글과 ` 백틱",
    ];
    for s in cases {
        let literal = format!("\"{}\"", escape_string(s));
        assert_eq!(parse_literal(&literal).unwrap(), json!(s), "for literal {}", literal);
    }
}

#[test]
fn test_parse_hand_edited_source() {
    // Unquoted keys, single quotes and trailing commas show up in files
    // people edit by hand.
    let code = "export const ownerData = {\n    name: '유진',\n    links: ['a', 'b',],\n    active: true,\n};\n";
    let parsed = parse_export_data(code, "ownerData").unwrap();
    assert_eq!(
        parsed,
        json!({"name": "유진", "links": ["a", "b"], "active": true})
    );
}

#[test]
fn test_parse_declaration_with_banner_and_alias() {
    let code = "// ====\n// 데이터\n// ====\n\nexport const characterData = { profiles: [] };\n\nexport const characterProfiles = characterData.profiles;\n";
    assert_eq!(
        parse_export_data(code, "characterData").unwrap(),
        json!({"profiles": []})
    );

    // The alias is bound to an expression, not a data literal.
    assert!(parse_export_data(code, "characterProfiles").is_err());
}

#[test]
fn test_parse_errors_are_parse_kind() {
    let missing = parse_export_data("const x = 1;", "x").unwrap_err();
    assert!(matches!(missing, HelperError::Parse { .. }));

    let malformed = parse_export_data("export const x = { broken ;", "x").unwrap_err();
    assert!(matches!(malformed, HelperError::Parse { .. }));
    assert!(malformed.to_string().starts_with("parse failed:"));
}
