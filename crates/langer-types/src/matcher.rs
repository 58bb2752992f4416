//! Best-fit language resolution against an ordered priority list.

use thiserror::Error;

use crate::LanguageTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No candidate matched by exact tag or by primary subtag.
    #[error("none of the candidate languages match the available set")]
    NoMatchingLanguage,
}

/// Leading component of a language tag: "en" in "en-US", "zh" in "zh_TW".
pub fn primary_subtag(tag: &str) -> &str {
    match tag.find(['-', '_']) {
        Some(separator) => &tag[..separator],
        None => tag,
    }
}

/// Pick the best-fit member of `available` given candidate tags in
/// `priorities`, most preferred first.
///
/// Two passes, both in candidate order: an exact-tag pass over all of
/// `available`, then a primary-subtag pass. The subtag pass returns the
/// matching member of `available`, not the candidate itself. Pure and
/// deterministic for identical inputs.
pub fn preset_language<S: AsRef<str>>(
    available: &[LanguageTag],
    priorities: &[S],
) -> Result<LanguageTag, MatchError> {
    for candidate in priorities {
        let candidate = candidate.as_ref();
        if available.iter().any(|tag| tag == candidate) {
            return Ok(candidate.to_string());
        }
    }
    for candidate in priorities {
        let wanted = primary_subtag(candidate.as_ref());
        if let Some(tag) = available
            .iter()
            .find(|tag| primary_subtag(tag).eq_ignore_ascii_case(wanted))
        {
            return Ok(tag.clone());
        }
    }
    Err(MatchError::NoMatchingLanguage)
}
