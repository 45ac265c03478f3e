use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Someone on either end of a tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A voluntary payment from a traveler to a trip organizer or agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub from: Participant,
    pub to: Participant,
    pub timestamp: DateTime<Utc>,
}

/// What the tip dialog submits
#[derive(Debug, Clone, Deserialize)]
pub struct TipRequest {
    pub amount: Decimal,
    #[serde(default)]
    pub message: Option<String>,
    pub from: Participant,
    pub to: Participant,
}
