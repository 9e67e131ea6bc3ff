//! Spacing around the `/` delimiter

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Replace each run of optional whitespace, `/`, optional whitespace with `" / "`
///
/// Idempotent: already normalized text is returned unchanged.
pub fn normalize_slashes(text: &str) -> Cow<'_, str> {
    static SLASH_RE: OnceLock<Regex> = OnceLock::new();

    let slash_re = SLASH_RE.get_or_init(|| Regex::new(r"\s*/\s*").unwrap());
    slash_re.replace_all(text, " / ")
}
