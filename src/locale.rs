//! Locale property lookup used by pattern formatting.
//!
//! A [`Locale`] is a plain `domain -> key -> value` table that a host can
//! build in code or deserialize from its configuration. The "current" locale
//! is never stored here: callers pass a [`LocaleResolver`] into each
//! formatting call.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Localized properties keyed by domain and key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Locale {
    tag:   String,
    #[serde(default)]
    props: BTreeMap<String, BTreeMap<String, String>>,
}

impl Locale {
    /// Creates an empty locale; every lookup returns its fallback.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag:   tag.into(),
            props: BTreeMap::new(),
        }
    }

    /// The built-in English locale. Month and weekday names and the default
    /// date pattern all come from the lookup fallbacks.
    pub fn en() -> Self {
        Self::new("en")
    }

    /// Returns this locale with `domain::key` set to `value`.
    #[must_use]
    pub fn with_prop(
        mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.props
            .entry(domain.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Looks up `domain::key`, returning `fallback` when it is not defined.
    pub fn get<'a>(&'a self, domain: &str, key: &str, fallback: &'a str) -> &'a str {
        self.props
            .get(domain)
            .and_then(|keys| keys.get(key))
            .map_or(fallback, String::as_str)
    }
}

/// Supplies the locale a formatting call should use when it needs one.
///
/// Formatting resolves at most once per call and only when the pattern needs
/// localized text, so an implementation may consult ambient host state that
/// changes between calls.
pub trait LocaleResolver {
    fn resolve_current(&self) -> Cow<'_, Locale>;
}

impl LocaleResolver for Locale {
    fn resolve_current(&self) -> Cow<'_, Locale> {
        Cow::Borrowed(self)
    }
}

impl<F> LocaleResolver for F
where
    F: Fn() -> Locale,
{
    fn resolve_current(&self) -> Cow<'_, Locale> {
        Cow::Owned(self())
    }
}
