use serde::{Deserialize, Serialize};

use crate::helpers::error::CardaBotError;

/// Languages the bot ships reply templates for. The set is closed: a chat
/// can never end up configured with a code outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "KR")]
    Kr,
    #[serde(rename = "JP")]
    Jp,
}

impl Language {
    pub const SUPPORTED: [Language; 4] =
        [Language::En, Language::Pt, Language::Kr, Language::Jp];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
            Language::Kr => "KR",
            Language::Jp => "JP",
        }
    }

    /// Parse a user-supplied language code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Language, CardaBotError> {
        let normalized = code.trim().to_uppercase();
        Self::SUPPORTED
            .into_iter()
            .find(|language| language.code() == normalized)
            .ok_or_else(|| CardaBotError::UnsupportedLanguage(code.trim().to_string()))
    }

    /// Comma-separated code list for the /help reply.
    pub fn supported_codes() -> String {
        Self::SUPPORTED
            .iter()
            .map(|language| language.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips_supported_set() {
        for language in Language::SUPPORTED {
            assert_eq!(Language::from_code(language.code()), Ok(language));
        }
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Language::from_code("pt"), Ok(Language::Pt));
        assert_eq!(Language::from_code(" jp "), Ok(Language::Jp));
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(
            Language::from_code("XX"),
            Err(CardaBotError::UnsupportedLanguage("XX".to_string()))
        );
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
