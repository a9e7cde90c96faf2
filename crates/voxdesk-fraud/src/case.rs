use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a case nobody has confirmed yet.
pub const STATUS_PENDING_REVIEW: &str = "pending_review";

fn default_status() -> String {
    STATUS_PENDING_REVIEW.to_string()
}

/// One flagged transaction and the customer it belongs to.
///
/// Field names match the camelCase keys of the case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudCase {
    /// Case number. Zero in a seed file means "not yet assigned".
    #[serde(default)]
    pub id: u64,
    /// Customer name the caller gives to find the case.
    pub user_name: String,
    #[serde(default)]
    pub security_identifier: Option<String>,
    /// Last four digits of the card.
    #[serde(default)]
    pub card_ending: Option<String>,
    /// `pending_review` until resolved, then a [`Resolution`] label.
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub transaction_name: Option<String>,
    #[serde(default)]
    pub transaction_amount: Option<f64>,
    #[serde(default)]
    pub transaction_time: Option<String>,
    #[serde(default)]
    pub transaction_category: Option<String>,
    #[serde(default)]
    pub transaction_source: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Question asked to verify the caller.
    pub security_question: String,
    /// Expected answer, compared without regard to case.
    pub security_answer: String,
}

impl FraudCase {
    /// Whether `name` is the customer on this case, ignoring case.
    pub fn belongs_to(&self, name: &str) -> bool {
        self.user_name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Whether `answer` matches the security answer, ignoring case and
    /// surrounding whitespace.
    pub fn answer_matches(&self, answer: &str) -> bool {
        self.security_answer.trim().to_lowercase() == answer.trim().to_lowercase()
    }

    /// Whether the customer has already confirmed or denied the charge.
    pub fn is_resolved(&self) -> bool {
        self.status.parse::<Resolution>().is_ok()
    }

    /// The charge as read out to the customer once they are verified.
    pub fn charge_description(&self) -> String {
        let amount = self
            .transaction_amount
            .map_or_else(|| "an unknown amount".to_string(), |a| format!("${a}"));
        format!(
            "a suspicious charge of {amount} at {} through {} in {} on {}",
            or_unknown(&self.transaction_name),
            or_unknown(&self.transaction_source),
            or_unknown(&self.location),
            or_unknown(&self.transaction_time),
        )
    }
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

/// The customer's answer to "did you make this transaction?".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The customer made the transaction; the card stays active.
    ConfirmedSafe,
    /// The customer did not; the card is blocked and a dispute opened.
    ConfirmedFraud,
}

impl Resolution {
    /// Maps the customer's yes/no to a resolution.
    pub fn from_legitimate(is_legitimate: bool) -> Self {
        if is_legitimate {
            Resolution::ConfirmedSafe
        } else {
            Resolution::ConfirmedFraud
        }
    }

    /// The status label stored on the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::ConfirmedSafe => "confirmed_safe",
            Resolution::ConfirmedFraud => "confirmed_fraud",
        }
    }

    /// What the agent tells the customer after recording the resolution.
    pub fn customer_message(&self, card_ending: Option<&str>) -> String {
        match self {
            Resolution::ConfirmedSafe => {
                "Thanks. I've marked the transaction as legitimate. Your card remains active."
                    .to_string()
            }
            Resolution::ConfirmedFraud => format!(
                "I've blocked your card ending in {} and initiated a dispute. \
                 A new card will arrive soon.",
                card_ending.unwrap_or("unknown")
            ),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed_safe" => Ok(Resolution::ConfirmedSafe),
            "confirmed_fraud" => Ok(Resolution::ConfirmedFraud),
            _ => Err(format!("unknown resolution: {}", s)),
        }
    }
}
