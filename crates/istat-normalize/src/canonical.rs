//! The canonical-key transform.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Typographic punctuation that survives decomposition.
///
/// The ASCII set is handled by `char::is_ascii_punctuation`; these are the
/// non-ASCII marks that show up in scraped name columns.
const TYPOGRAPHIC_PUNCTUATION: &[char] = &[
    '\u{2018}', // ‘
    '\u{2019}', // ’
    '\u{201C}', // “
    '\u{201D}', // ”
    '\u{2013}', // –
    '\u{2014}', // —
    '\u{2026}', // …
    '\u{00AB}', // «
    '\u{00BB}', // »
    '\u{00B7}', // ·
];

fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&ch)
}

/// Reduces a name to its canonical comparison key.
///
/// The transform is applied in a fixed order so the same input always yields
/// the same key:
///
/// 1. decompose and drop combining marks (accent stripping);
/// 2. lowercase;
/// 3. trim leading and trailing whitespace;
/// 4. remove punctuation.
///
/// Punctuation removal runs last so apostrophes and stray marks that survive
/// decomposition are still stripped. A missing name canonicalizes to the
/// empty string; no input is an error.
///
/// # Examples
///
/// ```
/// use istat_normalize::canonicalize;
///
/// assert_eq!(canonicalize(Some("Città d'Aosta!")), "citta daosta");
/// assert_eq!(canonicalize(Some("  FORLÌ-CESENA  ")), "forlicesena");
/// assert_eq!(canonicalize(None), "");
/// ```
pub fn canonicalize(name: Option<&str>) -> String {
    let Some(raw) = name else {
        return String::new();
    };
    let stripped: String = raw.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
    let lowered = stripped.to_lowercase();
    lowered
        .trim()
        .chars()
        .filter(|ch| !is_punctuation(*ch))
        .collect()
}
