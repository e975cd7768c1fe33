//! Environment variable substitution over raw config bytes.
//!
//! References take the shell forms `$NAME` and `${NAME}`. Unset variables
//! expand to the empty string; anything that is not a well-formed reference
//! (a lone `$`, `$1`, `$$`, `${}`, an unterminated `${NAME`) is copied through
//! verbatim, as is every byte outside a reference. This deliberately differs
//! from Go's `os.ExpandEnv`, which drops such sequences: a stray `$` in a
//! password or path survives substitution unchanged.

use log::debug;
use regex::bytes::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// `$NAME` or `${NAME}`, where NAME is a shell identifier.
static ENV_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("env reference pattern is valid")
});

/// Replace every env reference in `input` with the bytes returned by `lookup`.
///
/// `lookup` receives the bare variable name. Substituted values are inserted
/// byte-for-byte and never rescanned. Input without references is returned
/// borrowed.
pub fn substitute_with<F>(input: &[u8], lookup: F) -> Cow<'_, [u8]>
where
    F: Fn(&str) -> Option<Vec<u8>>,
{
    ENV_REFERENCE.replace_all(input, |caps: &Captures<'_>| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
            .unwrap_or_default();
        lookup(name).unwrap_or_else(|| {
            debug!("environment variable {name} is unset; substituting empty value");
            Vec::new()
        })
    })
}

/// Replace env references in `input` using the current process environment.
///
/// Values are inserted as their raw OS bytes; a non-UTF-8 value makes the
/// result fail UTF-8 validation later rather than being silently altered.
pub fn expand_env(input: &[u8]) -> Cow<'_, [u8]> {
    substitute_with(input, |name| {
        std::env::var_os(name).map(|value| value.into_encoded_bytes())
    })
}
