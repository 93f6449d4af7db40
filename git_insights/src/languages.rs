use crate::api::{Error, Result};
use crate::model::{LanguageBytes, LanguageEntry};
use log::debug;
use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Name of the bucket collecting every language past the visible cutoff.
pub const OTHER_LANGUAGE: &str = "Other";

/// Case-insensitive set of language names left out of the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedLanguages(HashSet<String>);

impl ExcludedLanguages {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let languages = languages
            .into_iter()
            .map(|language| language.as_ref().trim().to_lowercase())
            .filter(|language| !language.is_empty())
            .collect();
        ExcludedLanguages(languages)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.0.contains(&language.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses a comma separated list, e.g. `"HTML, scss"`.
impl FromStr for ExcludedLanguages {
    type Err = Infallible;

    fn from_str(languages: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ExcludedLanguages::new(languages.split(',')))
    }
}

/// Ranks languages by bytes and folds everything past `max_visible` into one [`OTHER_LANGUAGE`] entry.
///
/// Percentages are relative to the bytes left after `excluded` is applied, so they add up to 100.
/// Equal byte counts are ordered by name. Returns an empty list when nothing but zero bytes is left.
///
/// # Arguments
/// * `language_bytes` - Bytes per language, left untouched
/// * `max_visible` - Number of languages listed before the rest is folded into [`OTHER_LANGUAGE`]
/// * `excluded` - Languages dropped before ranking
pub fn language_entries(
    language_bytes: &LanguageBytes,
    max_visible: usize,
    excluded: &ExcludedLanguages,
) -> Result<Vec<LanguageEntry>> {
    let mut ranked: Vec<(&str, u64)> = language_bytes
        .iter()
        .filter(|(name, _)| !excluded.contains(name))
        .map(|(name, bytes)| (name.as_str(), *bytes))
        .collect();
    let total = checked_total(ranked.iter().map(|(_, bytes)| *bytes))?;
    debug!(
        "{} of {} languages left after exclusions, {} bytes",
        ranked.len(),
        language_bytes.len(),
        total
    );
    if total == 0 {
        return Ok(Vec::new());
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let percentage = |bytes: u64| bytes as f64 / total as f64 * 100.0;
    let mut entries: Vec<LanguageEntry> = ranked
        .iter()
        .take(max_visible)
        .map(|(name, bytes)| LanguageEntry::new(name.to_string(), *bytes, percentage(*bytes)))
        .collect();
    let other_bytes: u64 = ranked.iter().skip(max_visible).map(|(_, bytes)| bytes).sum();
    if other_bytes > 0 {
        entries.push(LanguageEntry::new(
            OTHER_LANGUAGE.to_string(),
            other_bytes,
            percentage(other_bytes),
        ));
    }
    Ok(entries)
}

/// Sums byte counts, failing instead of wrapping around.
pub(crate) fn checked_total<I>(bytes: I) -> Result<u64>
where
    I: IntoIterator<Item = u64>,
{
    bytes
        .into_iter()
        .try_fold(0u64, |total, bytes| total.checked_add(bytes))
        .ok_or_else(|| Error::Validation("total number of language bytes does not fit in 64 bits".to_string()))
}
