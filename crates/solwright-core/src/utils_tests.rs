use crate::utils::{escape_string_literal, to_identifier, to_pascal_case};

#[test]
fn pascal_case_from_snake() {
    assert_eq!(to_pascal_case("foo_bar"), "FooBar");
    assert_eq!(to_pascal_case("foo"), "Foo");
    assert_eq!(to_pascal_case("_foo"), "Foo");
}

#[test]
fn pascal_case_normalizes() {
    assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
    assert_eq!(to_pascal_case("FOO"), "Foo");
}

#[test]
fn pascal_case_idempotent() {
    assert_eq!(to_pascal_case("FooBar"), "FooBar");
    assert_eq!(to_pascal_case("Q"), "Q");
}

#[test]
fn pascal_case_from_dotted() {
    assert_eq!(to_pascal_case("acme.vaults"), "AcmeVaults");
    assert_eq!(to_pascal_case("acme-vaults"), "AcmeVaults");
}

#[test]
fn identifier_capitalizes_words() {
    assert_eq!(to_identifier("my token", true), "MyToken");
    assert_eq!(to_identifier("my  cool-token", true), "MyCoolToken");
    assert_eq!(to_identifier("MyToken", true), "MyToken");
}

#[test]
fn identifier_keeps_first_char_when_not_capitalizing() {
    assert_eq!(to_identifier("initial owner", false), "initialOwner");
}

#[test]
fn identifier_drops_leading_digits() {
    assert_eq!(to_identifier("42 Token", true), "Token");
    assert_eq!(to_identifier("1st-place", false), "stPlace");
}

#[test]
fn identifier_keeps_dollar_and_underscore() {
    assert_eq!(to_identifier("_$vault", false), "_$vault");
}

#[test]
fn identifier_empty_when_nothing_usable() {
    assert_eq!(to_identifier("123 !!", true), "");
    assert_eq!(to_identifier("", true), "");
}

#[test]
fn string_literal_escapes_quotes_and_backslashes() {
    assert_eq!(escape_string_literal(r#"My "Token""#), r#"My \"Token\""#);
    assert_eq!(escape_string_literal(r"a\b"), r"a\\b");
    assert_eq!(escape_string_literal("plain"), "plain");
}
