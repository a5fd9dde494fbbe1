use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use crate::core::matcher::ThemeMatch;

/// Hackathon record as served by the HackHub backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hackathon {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub rounds: Vec<Round>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub prize: Option<String>,
    #[serde(rename = "locationType", alias = "location_type", default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Hackathon {
    /// Theme with surrounding whitespace removed, if any is set
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Largest number in the prize text, ignoring currency symbols and separators
    ///
    /// "1st $500, 2nd $200" is worth 500.
    pub fn prize_amount(&self) -> Option<f64> {
        let prize = self.prize.as_deref()?;
        prize
            .split(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
            .filter_map(|part| {
                let digits: String = part.chars().filter(|c| *c != ',').collect();
                digits.trim_matches('.').parse::<f64>().ok()
            })
            .fold(None, |best: Option<f64>, amount| match best {
                Some(b) if b >= amount => Some(b),
                _ => Some(amount),
            })
    }
}

/// A dated phase of a hackathon (kickoff, submission, judging...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lifecycle state derived from round dates or the event date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(alias = "upcoming")]
    Upcoming,
    #[serde(alias = "ongoing")]
    Ongoing,
    #[serde(alias = "ended")]
    Ended,
}

impl EventStatus {
    /// Lowercase form used inside reply sentences
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Ended => "Ended",
        };
        f.write_str(name)
    }
}

/// Fuzzy name match of a free-text query against a hackathon
#[derive(Debug, Clone)]
pub struct ScoredHackathon {
    pub hackathon: Hackathon,
    /// Token overlap in [0, 1]
    pub score: f64,
}

/// Hackathon annotated with its derived status, for the listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct HackathonView {
    #[serde(flatten)]
    pub hackathon: Hackathon,
    pub status: Option<EventStatus>,
}

/// Tunables for the chat reply builders
#[derive(Debug, Clone)]
pub struct ReplyOptions {
    pub fuzzy_threshold: f64,
    pub list_limit: usize,
    pub prize_limit: usize,
    pub link_base: String,
    /// Policy for the AI-theme filter and the theme lookup
    pub theme_match: ThemeMatch,
}

impl ReplyOptions {
    /// Deep link to a hackathon page
    pub fn link_for(&self, hackathon: &Hackathon) -> String {
        format!(
            "{}/hackathons/{}",
            self.link_base.trim_end_matches('/'),
            urlencoding::encode(&hackathon.id)
        )
    }
}

impl Default for ReplyOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.34,
            list_limit: 5,
            prize_limit: 5,
            link_base: String::new(),
            theme_match: ThemeMatch::Substring,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Anything that is not an array becomes empty; malformed items are skipped
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_numeric_id_and_prize() {
        let hackathon: Hackathon = serde_json::from_value(json!({
            "_id": 42,
            "name": "Green Hack",
            "date": "2025-04-01",
            "prize": 5000,
            "locationType": "online"
        }))
        .unwrap();

        assert_eq!(hackathon.id, "42");
        assert_eq!(hackathon.prize.as_deref(), Some("5000"));
        assert_eq!(hackathon.location_type.as_deref(), Some("online"));
        assert!(hackathon.rounds.is_empty());
    }

    #[test]
    fn test_rounds_not_an_array() {
        let hackathon: Hackathon = serde_json::from_value(json!({
            "id": "h1",
            "name": "Odd Rounds",
            "date": "2025-04-01",
            "rounds": null
        }))
        .unwrap();
        assert!(hackathon.rounds.is_empty());

        let hackathon: Hackathon = serde_json::from_value(json!({
            "id": "h1",
            "name": "Odd Rounds",
            "rounds": "soon"
        }))
        .unwrap();
        assert!(hackathon.rounds.is_empty());
    }

    #[test]
    fn test_prize_amount() {
        let mut hackathon: Hackathon = serde_json::from_value(json!({
            "id": "h1",
            "name": "Prize Hack",
            "prize": "$10,000"
        }))
        .unwrap();
        assert_eq!(hackathon.prize_amount(), Some(10000.0));

        hackathon.prize = Some("Swag and glory".to_string());
        assert_eq!(hackathon.prize_amount(), None);
    }

    #[test]
    fn test_prize_amount_takes_largest_figure() {
        let mut hackathon: Hackathon =
            serde_json::from_value(json!({"id": "h2", "name": "Tiered", "prize": "1st $500, 2nd $200"}))
                .unwrap();
        assert_eq!(hackathon.prize_amount(), Some(500.0));

        hackathon.prize = Some("Runner-up $1,250.50 / winner $2,000".to_string());
        assert_eq!(hackathon.prize_amount(), Some(2000.0));

        hackathon.prize = Some("7500".to_string());
        assert_eq!(hackathon.prize_amount(), Some(7500.0));
    }

    #[test]
    fn test_link_for() {
        let hackathon: Hackathon =
            serde_json::from_value(json!({"id": "a b", "name": "Spaced"})).unwrap();
        let options = ReplyOptions {
            link_base: "https://hackhub.dev/".to_string(),
            ..ReplyOptions::default()
        };
        assert_eq!(options.link_for(&hackathon), "https://hackhub.dev/hackathons/a%20b");
    }
}
