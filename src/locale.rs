//! This module implements locales for human-readable calendar output.

pub(crate) mod tables;

/// A supported output locale.
///
/// Unknown or unsupported tags normalize to the default (`en-us`).
/// Fictional month names are proper nouns and stay untranslated; display
/// names, epoch notations and nameless-day labels localize where a
/// translation table exists.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Locale {
    #[default]
    EnUs,
    De,
    Fr,
    Es,
    It,
}

impl Locale {
    /// Every supported locale, in preference order.
    pub const SUPPORTED: [Locale; 5] = [
        Locale::EnUs,
        Locale::De,
        Locale::Fr,
        Locale::Es,
        Locale::It,
    ];

    /// Returns the locale's tag.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-us",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::It => "it",
        }
    }

    /// Looks up a locale by tag, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::SUPPORTED
            .iter()
            .find(|locale| locale.as_tag().eq_ignore_ascii_case(tag))
            .copied()
    }

    /// Normalizes an optional tag to a supported locale, falling back to
    /// the default.
    #[must_use]
    pub fn normalize(tag: Option<&str>) -> Self {
        tag.and_then(Self::from_tag).unwrap_or_default()
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for locale in Locale::SUPPORTED {
            assert_eq!(Locale::from_tag(locale.as_tag()), Some(locale));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Locale::from_tag("DE"), Some(Locale::De));
        assert_eq!(Locale::from_tag("En-Us"), Some(Locale::EnUs));
    }

    #[test]
    fn normalize_falls_back_to_default() {
        assert_eq!(Locale::normalize(None), Locale::EnUs);
        assert_eq!(Locale::normalize(Some("tlh")), Locale::EnUs);
        assert_eq!(Locale::normalize(Some("fr")), Locale::Fr);
    }
}
