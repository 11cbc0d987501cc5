//! Human-readable item codes: first three letters of the name plus three digits.
//!
//! `item_identifier` alone can collide (1000 suffixes per prefix). Creation
//! paths use `unique_item_identifier`, which checks the owner's existing codes.

use rand::Rng;

const PREFIX_CHARS: usize = 3;
const SUFFIX_SPACE: u16 = 1000;
const RANDOM_ATTEMPTS: usize = 16;

/// Upper-cased first three characters of the (trimmed) name.
pub fn code_prefix(name: &str) -> String {
    name.trim()
        .chars()
        .take(PREFIX_CHARS)
        .collect::<String>()
        .to_uppercase()
}

fn with_suffix(prefix: &str, suffix: u16) -> String {
    format!("{prefix}{suffix:03}")
}

/// Prefix + random zero-padded number in `000..=999`. Not unique.
pub fn item_identifier<R: Rng>(name: &str, rng: &mut R) -> String {
    with_suffix(&code_prefix(name), rng.gen_range(0..SUFFIX_SPACE))
}

/// Like [`item_identifier`] but never returns a code for which `is_taken`
/// holds. A few random draws are tried first, then the suffixes are scanned in
/// order. Returns `None` once every suffix for the prefix is in use.
pub fn unique_item_identifier<R, F>(name: &str, is_taken: F, rng: &mut R) -> Option<String>
where
    R: Rng,
    F: Fn(&str) -> bool,
{
    let prefix = code_prefix(name);

    for _ in 0..RANDOM_ATTEMPTS {
        let code = with_suffix(&prefix, rng.gen_range(0..SUFFIX_SPACE));
        if !is_taken(&code) {
            return Some(code);
        }
    }

    (0..SUFFIX_SPACE)
        .map(|suffix| with_suffix(&prefix, suffix))
        .find(|code| !is_taken(code))
}
