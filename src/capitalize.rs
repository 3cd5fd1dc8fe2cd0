// src/capitalize.rs

/// Connector words kept lowercase anywhere but the start of a name.
const ALWAYS_LOWER: &[&str] = &[
    "and", "the", "of", "part", "da", "de", "et", "du", "des", "la",
];

fn is_connector(word: &str) -> bool {
    ALWAYS_LOWER.iter().any(|w| w.eq_ignore_ascii_case(word))
}

/// First character upper, the rest lower.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn capitalize_token(word: &str, first: bool) -> String {
    if word == "MCDONALD" {
        return "McDonald".to_string();
    }
    // initials, e.g. "U.S."
    if word.find('.').is_some_and(|i| i > 0) {
        return word.to_uppercase();
    }
    if let Some((head, rest)) = word.split_once('\'') {
        // d'Ivoire, not D'ivoire
        if head.chars().count() == 1 {
            return format!("{}'{}", head.to_lowercase(), capitalize_word(rest));
        }
    }
    if word.find('-').is_some_and(|i| i > 0) {
        return word
            .split('-')
            .map(capitalize_word)
            .collect::<Vec<_>>()
            .join("-");
    }
    if word.starts_with('(') || word.ends_with(')') {
        let open = if word.starts_with('(') { "(" } else { "" };
        let close = if word.ends_with(')') { ")" } else { "" };
        let inner = word.trim_start_matches('(').trim_end_matches(')');
        let inner = if is_connector(inner) {
            inner.to_lowercase()
        } else {
            capitalize_word(inner)
        };
        return format!("{}{}{}", open, inner, close);
    }
    if !first && is_connector(word) {
        return word.to_lowercase();
    }
    capitalize_word(word)
}

/// Title-case an all-caps entity name from the statoids table.
pub fn capitalize_country_name(name: &str) -> String {
    name.split_whitespace()
        .enumerate()
        .map(|(i, w)| capitalize_token(w, i == 0))
        .collect::<Vec<_>>()
        .join(" ")
}
