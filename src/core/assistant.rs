use crate::core::{
    intent::{self, Intent},
    matcher::{exact_name_match, theme_matches, NameMatcher},
    replies::{self, HackathonDetail},
    status::StatusClassifier,
};
use crate::models::{Hackathon, ReplyOptions};
use crate::services::HackathonSource;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Answers chat messages about the hackathon catalogue
///
/// One call handles one message: detect the intent, fetch the listing if
/// the intent needs it, and build the reply. Backend failures are treated
/// as empty data, so a reply is always produced.
#[derive(Clone)]
pub struct Assistant {
    source: Arc<dyn HackathonSource>,
    classifier: StatusClassifier,
    matcher: NameMatcher,
    options: ReplyOptions,
}

impl Assistant {
    pub fn new(
        source: Arc<dyn HackathonSource>,
        classifier: StatusClassifier,
        options: ReplyOptions,
    ) -> Self {
        Self {
            source,
            classifier,
            matcher: NameMatcher::new(options.fuzzy_threshold),
            options,
        }
    }

    pub fn options(&self) -> &ReplyOptions {
        &self.options
    }

    /// Reply to a chat message
    pub async fn respond(&self, message: &str) -> String {
        self.respond_at(message, Utc::now()).await
    }

    /// Reply to a chat message, classifying event status relative to `now`
    pub async fn respond_at(&self, message: &str, now: DateTime<Utc>) -> String {
        let intent = intent::detect(message);
        tracing::debug!("Detected intent {:?}", intent);

        let hackathons = if intent.needs_listing() {
            self.listing().await
        } else {
            Vec::new()
        };

        match intent {
            Intent::Explain => replies::EXPLAINER.to_string(),
            Intent::SmallTalk(kind) => replies::small_talk_reply(kind).to_string(),
            Intent::FindTeam => {
                let best = self.matcher.best(message, &hackathons);
                replies::team_reply(best.as_ref().map(|m| &m.hackathon), &self.options)
            }
            Intent::AiThemes => {
                let ai: Vec<&Hackathon> =
                    hackathons
                    .iter()
                    .filter(|h| replies::is_ai_themed(h, self.options.theme_match))
                    .collect();
                replies::ai_reply(&ai, &self.options)
            }
            Intent::Skills => {
                replies::skills_reply(message, exact_name_match(message, &hackathons))
            }
            Intent::Status(status) => {
                let matching: Vec<&Hackathon> = hackathons
                    .iter()
                    .filter(|h| self.classifier.classify(h, now) == Some(status))
                    .collect();
                replies::status_reply(status, &matching, &self.options)
            }
            Intent::Prizes => {
                let ranked = replies::top_prizes(&hackathons, self.options.prize_limit);
                replies::prize_reply(&ranked)
            }
            Intent::Venue(venue) => {
                let matching: Vec<&Hackathon> = hackathons
                    .iter()
                    .filter(|h| h.location_type.as_deref().map_or(false, |l| venue.accepts(l)))
                    .collect();
                replies::venue_reply(venue, &matching, &self.options)
            }
            Intent::Lookup => self.lookup(message, &hackathons, now).await,
        }
    }

    /// Theme search first, then a fuzzy name match enriched with details
    async fn lookup(&self, message: &str, hackathons: &[Hackathon], now: DateTime<Utc>) -> String {
        let by_theme = theme_matches(message, hackathons, self.options.theme_match);
        if !by_theme.is_empty() {
            return replies::theme_reply(&by_theme, &self.options);
        }

        match self.matcher.best(message, hackathons) {
            Some(matched) => {
                tracing::debug!(
                    "Matched '{}' with score {:.2}",
                    matched.hackathon.name,
                    matched.score
                );
                let detail = self.detail(matched.hackathon, now).await;
                replies::detail_reply(&detail, &self.options)
            }
            None => replies::NOT_FOUND.to_string(),
        }
    }

    async fn listing(&self) -> Vec<Hackathon> {
        match self.source.list_hackathons().await {
            Ok(hackathons) => hackathons,
            Err(e) => {
                tracing::warn!("Failed to list hackathons, continuing with none: {}", e);
                Vec::new()
            }
        }
    }

    /// Detail, team and participant calls, issued one after another
    async fn detail(&self, listed: Hackathon, now: DateTime<Utc>) -> HackathonDetail {
        let hackathon = match self.source.get_hackathon(&listed.id).await {
            Ok(full) => full,
            Err(e) => {
                tracing::warn!("Failed to fetch hackathon {}, using listed record: {}", listed.id, e);
                listed
            }
        };

        let team_count = match self.source.count_teams(&hackathon.id).await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!("Failed to fetch teams for {}: {}", hackathon.id, e);
                None
            }
        };

        let participant_count = match self.source.count_participants(&hackathon.id).await {
            Ok(count) => Some(count),
            Err(e) => {
                tracing::warn!("Failed to fetch participants for {}: {}", hackathon.id, e);
                None
            }
        };

        HackathonDetail {
            status: self.classifier.classify(&hackathon, now),
            hackathon,
            team_count,
            participant_count,
        }
    }
}
