/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `"site_name"` -> `"Site Name"`.
pub fn snake_to_title_case(raw: &str) -> String {
    raw.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Breaks after the first snake_case word: `"green_tea_shop"` ->
/// `"green\ntea shop"`. Single words are returned unchanged.
pub fn to_line_break(raw: &str) -> String {
    match raw.split_once('_') {
        Some((first, rest)) => format!("{first}\n{}", rest.replace('_', " ")),
        None => raw.to_string(),
    }
}

pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env_style_booleans() {
        for raw in ["1", "TRUE", "yes", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "False", "no", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn title_cases_snake_names() {
        assert_eq!(snake_to_title_case("tea_card_shop"), "Tea Card Shop");
        assert_eq!(snake_to_title_case("teacard"), "Teacard");
    }

    #[test]
    fn line_break_after_first_word() {
        assert_eq!(to_line_break("green_tea_shop"), "green\ntea shop");
        assert_eq!(to_line_break("sencha"), "sencha");
    }

    #[test]
    fn capitalizes_unicode_and_empty() {
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}
