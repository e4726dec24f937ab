//! Language definitions and normalization
//!
//! FarmWise supports English plus four African languages. Catalog
//! lookups are keyed by canonical full names (`english`, `yoruba`,
//! `hausa`, `swahili`, `twi`), while transcription and synthesis use
//! ISO-style short codes.
//!
//! `normalize_language` carries an asymmetric contract inherited from
//! observed behavior: empty input defaults to `"english"`, but an
//! unrecognized code or name passes through verbatim. Downstream
//! catalog-miss fallback makes unsupported values harmless, so the
//! pass-through must not be "fixed" into validation.

use serde::{Deserialize, Serialize};

/// Supported languages (English + 4 African languages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Yoruba,
    Hausa,
    Swahili,
    Twi,
}

impl Language {
    /// Get the short code accepted as user input
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Yoruba => "yo",
            Self::Hausa => "ha",
            Self::Swahili => "sw",
            Self::Twi => "twi",
        }
    }

    /// Get the ISO code used by speech services
    ///
    /// Twi maps to `ak`: speech systems file it under Akan.
    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Yoruba => "yo",
            Self::Hausa => "ha",
            Self::Swahili => "sw",
            Self::Twi => "ak",
        }
    }

    /// Get the canonical full name used as a catalog key
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Yoruba => "yoruba",
            Self::Hausa => "hausa",
            Self::Swahili => "swahili",
            Self::Twi => "twi",
        }
    }

    /// Parse from a canonical full name
    pub fn from_canonical(name: &str) -> Option<Self> {
        match name {
            "english" => Some(Self::English),
            "yoruba" => Some(Self::Yoruba),
            "hausa" => Some(Self::Hausa),
            "swahili" => Some(Self::Swahili),
            "twi" => Some(Self::Twi),
            _ => None,
        }
    }

    /// Parse from string (case-insensitive, accepts codes and names)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "yo" | "yor" | "yoruba" => Some(Self::Yoruba),
            "ha" | "hau" | "hausa" => Some(Self::Hausa),
            "sw" | "swa" | "swahili" | "kiswahili" => Some(Self::Swahili),
            "twi" | "ak" | "aka" | "akan" => Some(Self::Twi),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Yoruba,
            Self::Hausa,
            Self::Swahili,
            Self::Twi,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Normalize any language code to a full name (`en` -> `english`)
///
/// Total function, no error conditions:
/// - empty or absent input -> `"english"`
/// - known short code (exactly 5 entries) -> canonical full name
/// - unknown input of 3 characters or fewer -> returned verbatim
/// - input longer than 3 characters -> returned verbatim, never
///   validated against the supported set
pub fn normalize_language(raw: Option<&str>) -> String {
    let lang = raw.unwrap_or("").trim().to_lowercase();
    if lang.is_empty() {
        return "english".to_string();
    }
    if lang.chars().count() <= 3 {
        match lang.as_str() {
            "en" => "english".to_string(),
            "yo" => "yoruba".to_string(),
            "ha" => "hausa".to_string(),
            "sw" => "swahili".to_string(),
            "twi" => "twi".to_string(),
            _ => lang,
        }
    } else {
        lang
    }
}

/// Marker characters that only occur in one of the supported
/// orthographies. Weighted above stopword hits during detection.
const YORUBA_MARKERS: &[char] = &['ẹ', 'ọ', 'ṣ', 'Ẹ', 'Ọ', 'Ṣ', '\u{0323}'];
const HAUSA_MARKERS: &[char] = &['ƙ', 'ɗ', 'ƴ', 'Ƙ', 'Ɗ', 'Ƴ'];
const TWI_MARKERS: &[char] = &['ɛ', 'ɔ', 'Ɛ', 'Ɔ'];

const ENGLISH_STOPWORDS: &[&str] = &["the", "and", "is", "to", "of", "for", "how", "you", "my"];
const YORUBA_STOPWORDS: &[&str] = &["ati", "ni", "ti", "fun", "owo", "bawo", "lati"];
const HAUSA_STOPWORDS: &[&str] = &["da", "don", "na", "kudi", "yaya", "zan", "akan"];
const SWAHILI_STOPWORDS: &[&str] = &["ya", "kwa", "na", "ni", "wa", "pesa", "fedha", "jinsi"];
const TWI_STOPWORDS: &[&str] = &["me", "wo", "na", "sika", "ho", "mu"];

/// Detect the language of free-form text
///
/// Best-effort and deterministic: counts orthographic marker
/// characters (weight 2) and stopword hits (weight 1) per language,
/// highest score wins with ties going to the earlier language in
/// declaration order. Returns `None` when nothing matches; callers
/// treat that as `"unknown"` and let normalization fall back.
pub fn detect_language(text: &str) -> Option<Language> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let marker_score = |markers: &[char]| -> usize {
        lowered.chars().filter(|c| markers.contains(c)).count() * 2
    };
    let stopword_score = |stopwords: &[&str]| -> usize {
        words.iter().filter(|w| stopwords.contains(*w)).count()
    };

    let scores = [
        (Language::English, stopword_score(ENGLISH_STOPWORDS)),
        (
            Language::Yoruba,
            marker_score(YORUBA_MARKERS) + stopword_score(YORUBA_STOPWORDS),
        ),
        (
            Language::Hausa,
            marker_score(HAUSA_MARKERS) + stopword_score(HAUSA_STOPWORDS),
        ),
        (
            Language::Swahili,
            stopword_score(SWAHILI_STOPWORDS),
        ),
        (
            Language::Twi,
            marker_score(TWI_MARKERS) + stopword_score(TWI_STOPWORDS),
        ),
    ];

    let (best, score) = scores
        .iter()
        .fold((Language::English, 0usize), |(bl, bs), &(l, s)| {
            if s > bs {
                (l, s)
            } else {
                (bl, bs)
            }
        });

    if score == 0 {
        None
    } else {
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_defaults_to_english() {
        assert_eq!(normalize_language(None), "english");
        assert_eq!(normalize_language(Some("")), "english");
        assert_eq!(normalize_language(Some("   ")), "english");
    }

    #[test]
    fn test_normalize_short_codes() {
        assert_eq!(normalize_language(Some("en")), "english");
        assert_eq!(normalize_language(Some("yo")), "yoruba");
        assert_eq!(normalize_language(Some("ha")), "hausa");
        assert_eq!(normalize_language(Some("sw")), "swahili");
        assert_eq!(normalize_language(Some("twi")), "twi");
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_language(Some("  EN ")), "english");
        assert_eq!(normalize_language(Some("Yoruba")), "yoruba");
    }

    #[test]
    fn test_normalize_unknown_short_code_passes_through() {
        assert_eq!(normalize_language(Some("fr")), "fr");
        assert_eq!(normalize_language(Some("xyz")), "xyz");
    }

    #[test]
    fn test_normalize_long_input_passes_through() {
        assert_eq!(normalize_language(Some("french")), "french");
        assert_eq!(normalize_language(Some("unknown")), "unknown");
        // Known full names also pass through, unchanged
        assert_eq!(normalize_language(Some("swahili")), "swahili");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Yoruba.code(), "yo");
        assert_eq!(Language::Twi.code(), "twi");
        assert_eq!(Language::Twi.iso_code(), "ak");
        assert_eq!(Language::Swahili.canonical_name(), "swahili");
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(Language::from_str_loose("HA"), Some(Language::Hausa));
        assert_eq!(Language::from_str_loose("Kiswahili"), Some(Language::Swahili));
        assert_eq!(Language::from_str_loose("akan"), Some(Language::Twi));
        assert_eq!(Language::from_str_loose("french"), None);
    }

    #[test]
    fn test_all_languages() {
        assert_eq!(Language::all().len(), 5);
        assert_eq!(Language::all()[0], Language::English);
    }

    #[test]
    fn test_detect_english() {
        assert_eq!(
            detect_language("How do I save money for the farm?"),
            Some(Language::English)
        );
    }

    #[test]
    fn test_detect_yoruba_markers() {
        assert_eq!(
            detect_language("Ṣe eto ajeseku pajawiri fun awọn inawo"),
            Some(Language::Yoruba)
        );
    }

    #[test]
    fn test_detect_swahili() {
        assert_eq!(
            detect_language("Jinsi ya kuweka pesa kwa dharura"),
            Some(Language::Swahili)
        );
    }

    #[test]
    fn test_detect_gibberish_is_none() {
        assert_eq!(detect_language("asdkj qwexyz"), None);
        assert_eq!(detect_language(""), None);
    }

    #[test]
    fn test_detect_is_deterministic() {
        let text = "na da don";
        assert_eq!(detect_language(text), detect_language(text));
    }
}
