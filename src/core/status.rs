use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use crate::models::{EventStatus, Hackathon};

/// Default length of a hackathon that has no rounds
pub const DEFAULT_EVENT_DURATION_DAYS: i64 = 2;

/// How the single-date fallback treats the moment between start and end
///
/// The rounds branch is the same under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBoundary {
    /// Ended if `date + duration` is past, Upcoming if `date` is future, else Ongoing
    #[default]
    Window,
    /// Ended if `date + duration` is past, Ongoing if `date` is past, else Upcoming
    StartPassed,
}

/// Derives Upcoming / Ongoing / Ended for a hackathon
#[derive(Debug, Clone, Copy)]
pub struct StatusClassifier {
    boundary: StatusBoundary,
    duration: Duration,
}

impl StatusClassifier {
    pub fn new(boundary: StatusBoundary, duration_days: i64) -> Self {
        Self {
            boundary,
            duration: Duration::days(duration_days),
        }
    }

    pub fn boundary(&self) -> StatusBoundary {
        self.boundary
    }

    /// Classify a hackathon relative to `now`
    ///
    /// Returns `None` when neither the rounds nor the event date can be parsed.
    pub fn classify(&self, hackathon: &Hackathon, now: DateTime<Utc>) -> Option<EventStatus> {
        let round_dates: Vec<DateTime<Utc>> = hackathon
            .rounds
            .iter()
            .filter_map(|round| parse_event_date(&round.date))
            .collect();

        if let (Some(first), Some(last)) = (round_dates.iter().min(), round_dates.iter().max()) {
            return Some(if *last < now {
                EventStatus::Ended
            } else if *first > now {
                EventStatus::Upcoming
            } else {
                EventStatus::Ongoing
            });
        }

        let start = parse_event_date(&hackathon.date)?;
        let end = start + self.duration;

        let status = match self.boundary {
            StatusBoundary::Window => {
                if end < now {
                    EventStatus::Ended
                } else if start > now {
                    EventStatus::Upcoming
                } else {
                    EventStatus::Ongoing
                }
            }
            StatusBoundary::StartPassed => {
                if end < now {
                    EventStatus::Ended
                } else if start < now {
                    EventStatus::Ongoing
                } else {
                    EventStatus::Upcoming
                }
            }
        };

        Some(status)
    }
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(StatusBoundary::default(), DEFAULT_EVENT_DURATION_DAYS)
    }
}

/// Parse an event or round date
///
/// Accepts RFC 3339, a naive ISO date-time (read as UTC) and a bare
/// `YYYY-MM-DD` date (midnight UTC).
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Human readable form of an event date, or the raw text when unparseable
pub fn display_date(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.trim().to_string(),
    }
}
