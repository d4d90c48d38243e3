use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_KEY_STRICT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)+([.|\-|+|_| ]*[A-Za-z0-9]+)*").unwrap());

static VERSION_KEY_LOOSE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)*([.|\-|+|_| ]*[A-Za-z0-9]+)*").unwrap());

/// Whether a changelog key looks like a version number.
///
/// Release ordering stays plain string comparison; this check only lets the
/// CLI flag keys that are probably typos.
pub fn is_version_like(key: &str) -> bool {
    version_fragment(key).is_some()
}

/// The version-looking fragment of `key`, if any.
pub fn version_fragment(key: &str) -> Option<&str> {
    VERSION_KEY_STRICT_REGEX
        .find(key)
        .or_else(|| VERSION_KEY_LOOSE_REGEX.find(key))
        .map(|m| m.as_str())
}
