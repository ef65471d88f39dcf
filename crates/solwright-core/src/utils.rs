/// Convert snake_case, kebab-case or dotted names to PascalCase.
///
/// Normalizes words separated by `_`, `-`, or `.`. If the input is already
/// PascalCase (starts uppercase, no separators), it is returned unchanged.
///
/// # Examples
/// ```
/// use solwright_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("my_project"), "MyProject");
/// assert_eq!(to_pascal_case("acme.vaults"), "AcmeVaults");
/// assert_eq!(to_pascal_case("MyProject"), "MyProject");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.')
    }

    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Turn free-form text into a Solidity identifier.
///
/// Leading characters that cannot start an identifier are dropped, and every
/// run of non-identifier characters is removed while capitalizing the
/// character that follows it. Returns an empty string when nothing usable
/// remains.
///
/// # Examples
/// ```
/// use solwright_core::utils::to_identifier;
/// assert_eq!(to_identifier("my token", true), "MyToken");
/// assert_eq!(to_identifier("1st-place", false), "stPlace");
/// ```
pub fn to_identifier(s: &str, capitalize: bool) -> String {
    fn is_ident_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '$'
    }

    let trimmed = s.trim_start_matches(|c: char| !(c.is_ascii_alphabetic() || c == '_' || c == '$'));

    let mut result = String::with_capacity(trimmed.len());
    let mut capitalize_next = capitalize;
    for c in trimmed.chars() {
        if !is_ident_char(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Escape text for use inside a double-quoted Solidity string literal.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
