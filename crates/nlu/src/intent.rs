//! Keyword intent classifier and hint table

use serde::{Deserialize, Serialize};

/// User intents recognized by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    LoanInquiry,
    CropAdvice,
    WeatherUpdate,
    MarketInfo,
    General,
}

impl Intent {
    /// Wire name used in responses and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoanInquiry => "loan_inquiry",
            Self::CropAdvice => "crop_advice",
            Self::WeatherUpdate => "weather_update",
            Self::MarketInfo => "market_info",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the intent of a message
///
/// Pure keyword matching over the lowercased text, first match wins
/// in declaration order. Total function.
pub fn classify_intent(text: &str) -> Intent {
    let text = text.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if contains_any(&["loan", "credit", "money"]) {
        Intent::LoanInquiry
    } else if contains_any(&["crop", "plant", "farming", "seed"]) {
        Intent::CropAdvice
    } else if contains_any(&["weather", "rain", "sun", "temperature"]) {
        Intent::WeatherUpdate
    } else if contains_any(&["market", "price", "sell", "buy"]) {
        Intent::MarketInfo
    } else {
        Intent::General
    }
}

/// Personalized hint appended to the assistant's answer for an intent
pub fn personalized_hint(intent: Intent) -> &'static str {
    match intent {
        Intent::LoanInquiry => {
            "💡 Tip: You can check local cooperative societies for lower-interest agricultural loans."
        }
        Intent::CropAdvice => {
            "🌱 Hint: Choose drought-resistant crops during the dry season for better yield."
        }
        Intent::WeatherUpdate => {
            "☀️ Reminder: Always plan irrigation based on the 7-day weather forecast."
        }
        Intent::MarketInfo => {
            "💰 Suggestion: Compare market prices in nearby towns to get the best deal."
        }
        Intent::General => {
            "✅ Tip: Keep good farm records — they can help you qualify for grants and insurance later."
        }
    }
}
