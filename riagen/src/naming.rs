//! Identifier naming helpers used when emitting generated code.
//!
//! All functions are pure: they borrow their input and return a freshly allocated [`String`].

/// Suffixes that take `es` in the plural form. Compared ASCII case-insensitively.
const ES_SUFFIXES: [&str; 4] = ["x", "ch", "ss", "sh"];

/// Returns `true` if `ch` is in the vowel set used by the `y` rule. Note that `y` itself counts.
fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Produce the plural form of an identifier-like English noun.
///
/// The first matching rule wins:
/// 1. Ends with `x`, `ch`, `ss` or `sh`: append `es` (`box` -> `boxes`).
/// 2. Ends with `y` preceded by a non-vowel: replace the `y` with `ies` (`city` -> `cities`).
/// 3. Doesn't end with `s`: append `s` (`boy` -> `boys`, `cat` -> `cats`).
/// 4. Otherwise the word is returned unchanged (`cats` -> `cats`).
///
/// Suffix checks ignore ASCII case, appended suffixes are always lowercase. Irregular plurals are
/// not handled (`child` -> `childs`). The empty string falls through to rule 3 and yields `"s"`.
pub fn pluralize(name: &str) -> String {
    // ASCII lowercasing preserves byte offsets, so suffix checks line up with `name`.
    let lower = name.to_ascii_lowercase();

    if ES_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{name}es");
    }

    if let Some(stem) = name.strip_suffix(['y', 'Y']) {
        // An empty stem means the word is a lone `y`.
        if stem.chars().next_back().is_some_and(|prev| !is_vowel(prev)) {
            return format!("{stem}ies");
        }
    }

    if lower.ends_with('s') {
        name.to_owned()
    } else {
        format!("{name}s")
    }
}

/// Convert a PascalCase or camelCase string to snake_case.
///
/// An `_` goes in front of every uppercase char that follows a lowercase one, so acronyms stay in
/// one word: `HTTPServers` -> `httpservers`.
pub fn pascal_to_snake(s: &str) -> String {
    let mut result =
        String::with_capacity(s.len() + s.chars().filter(|c| c.is_uppercase()).count());
    let mut prev_was_lower = false;

    for ch in s.chars() {
        if ch.is_uppercase() && prev_was_lower {
            result.push('_');
        }
        result.push(ch.to_ascii_lowercase());
        prev_was_lower = ch.is_lowercase();
    }

    result
}
