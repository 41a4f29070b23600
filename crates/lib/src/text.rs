//! Text helpers: case conversion, truncation and slugs.
//!
//! Word splitting treats every non-alphanumeric character as a separator
//! and a lowercase-to-uppercase transition as a word boundary, so
//! `"userId"`, `"user_id"` and `"User ID"` all split into `["user", "id"]`
//! once lowercased.

/// Splits `s` into words.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(s: &str, separator: &str) -> String {
    words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Uppercases the first character and lowercases the rest.
///
/// ```
/// # use shapekit::text::capitalize;
/// assert_eq!(capitalize("hELLO world"), "Hello world");
/// ```
pub fn capitalize(s: &str) -> String {
    upper_first(s)
}

/// `"user id"` → `"userId"`.
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in words(s).iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&upper_first(word));
        }
    }
    out
}

/// `"userId"` → `"user-id"`.
pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// `"userId"` → `"user_id"`.
pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

/// Shortens `s` to at most `max` characters, ending in `suffix` when
/// anything was cut.
///
/// Lengths count characters, not bytes, and the suffix counts toward
/// `max`. A suffix longer than `max` is dropped and `s` is cut hard.
///
/// ```
/// # use shapekit::text::truncate;
/// assert_eq!(truncate("Hello world", 8, "..."), "Hello...");
/// assert_eq!(truncate("Hello", 8, "..."), "Hello");
/// ```
pub fn truncate(s: &str, max: usize, suffix: &str) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if suffix_len > max {
        return s.chars().take(max).collect();
    }
    let mut out: String = s.chars().take(max - suffix_len).collect();
    out.push_str(suffix);
    out
}

/// Lowercase, hyphen-separated form suitable for URLs.
///
/// Unlike [`kebab_case`], case transitions are not word boundaries.
///
/// ```
/// # use shapekit::text::slugify;
/// assert_eq!(slugify("  Hello, World! 2024 "), "hello-world-2024");
/// ```
pub fn slugify(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
