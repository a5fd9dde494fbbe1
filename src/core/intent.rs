//! Intent cascade for chat messages
//!
//! Rules are tried in order against the lowercased message and the first
//! one that fires decides the intent. Anything that falls through is a
//! [`Intent::Lookup`] of a hackathon by theme or name.

use lazy_static::lazy_static;
use regex::Regex;
use crate::models::EventStatus;

/// What a chat message is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// "What is a hackathon?"
    Explain,
    /// Finding or joining a team
    FindTeam,
    /// Hackathons with an AI theme
    AiThemes,
    /// Skills or tech stack to prepare
    Skills,
    SmallTalk(SmallTalk),
    /// Hackathons in a given lifecycle state
    Status(EventStatus),
    /// Highest prizes
    Prizes,
    /// Online or offline events
    Venue(Venue),
    /// Theme search, then fuzzy name lookup
    Lookup,
}

impl Intent {
    /// Whether answering needs the hackathon listing from the backend
    pub fn needs_listing(&self) -> bool {
        !matches!(self, Intent::Explain | Intent::SmallTalk(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallTalk {
    Greeting,
    Thanks,
    Farewell,
    Acknowledgement,
    Confusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Online,
    Offline,
}

impl Venue {
    pub fn label(&self) -> &'static str {
        match self {
            Venue::Online => "online",
            Venue::Offline => "offline",
        }
    }

    /// Whether a backend `locationType` value counts as this venue
    pub fn accepts(&self, location_type: &str) -> bool {
        let location = location_type.trim().to_lowercase();
        let wanted: &[&str] = match self {
            Venue::Online => &["online", "virtual", "remote", "hybrid"],
            Venue::Offline => &["offline", "in-person", "in person", "onsite", "on-site", "hybrid"],
        };
        wanted.contains(&location.as_str())
    }
}

// Keyword sets shared by the status, prize and venue rules and the small talk gate
const TOPIC_WORDS: &str = r"hackathons?|events?|teams?|themes?|rounds?|register|registration|submissions?|submit|judg(e|es|ing)|deadlines?|skills?|tech\s*stacks?|projects?";
const UPCOMING_WORDS: &str = r"upcoming|coming\s+up";
const ONGOING_WORDS: &str = r"ongoing|live|running|in\s+progress|current|currently";
const ENDED_WORDS: &str = r"ended|past|finished|completed";
const PRIZE_WORDS: &str = r"prizes?|rewards?|prize\s+pool|bount(y|ies)|cash|money";
const ONLINE_WORDS: &str = r"online|virtual|remote";
const OFFLINE_WORDS: &str = r"offline|in[\s-]person|on[\s-]?site|physical";

fn keyword_regex(words: &str) -> Regex {
    Regex::new(&format!(r"\b({})\b", words)).unwrap()
}

lazy_static! {
    static ref EXPLAIN: Regex = Regex::new(
        r"\bwhat(\s+is|\s+are|'s|s)\s+(an?\s+)?hackathons?\b|\b(explain|define)\s+(an?\s+)?hackathons?\b|\bmeaning\s+of\s+(an?\s+)?hackathons?\b"
    ).unwrap();

    static ref FIND_TEAM: Regex = Regex::new(
        r"\b(find|join|form|create|build|need|looking\s+for|search(ing)?\s+for)\b.*\b(teams?|teammates?|team\s+mates?|partners?)\b|\bteammates?\b"
    ).unwrap();

    static ref AI_THEME: Regex = Regex::new(
        r"\b(ai|a\.i\.|artificial\s+intelligence)[\s-]+(themed\s+|related\s+)?(hackathons?|events?|competitions?)\b|\b(hackathons?|events?|competitions?)\b.*\b(about|on|for|in|around|with|related\s+to|focused\s+on)\s+(ai|artificial\s+intelligence)\b"
    ).unwrap();

    static ref SKILLS: Regex = Regex::new(
        r"\b(skills?|tech\s*stacks?|technolog(y|ies)|frameworks?|tools?|programming\s+languages?|prerequisites?|what\s+should\s+i\s+(learn|know|study)|how\s+(do|should|can)\s+i\s+prepare)\b"
    ).unwrap();

    static ref HACKATHON_TOPIC: Regex = Regex::new(&format!(
        r"\b({}|{}|{}|{}|{}|{}|{})\b",
        TOPIC_WORDS, UPCOMING_WORDS, ONGOING_WORDS, ENDED_WORDS, PRIZE_WORDS, ONLINE_WORDS, OFFLINE_WORDS
    )).unwrap();

    static ref GREETING: Regex = Regex::new(
        r"^(hi+|hello+|hey+|hiya|howdy|yo|sup|greetings|good\s+(morning|afternoon|evening))\b"
    ).unwrap();

    static ref THANKS: Regex = Regex::new(
        r"\b(thanks?|thank\s+you|thx|ty|much\s+appreciated|appreciate\s+it)\b"
    ).unwrap();

    static ref FAREWELL: Regex = Regex::new(
        r"\b(bye|goodbye|good\s+bye|see\s+(you|ya)|later|good\s+night|cya)\b"
    ).unwrap();

    static ref ACKNOWLEDGEMENT: Regex = Regex::new(
        r"^(ok(ay)?|k|cool|great|nice|awesome|got\s+it|sure|alright|all\s+right|perfect|sounds\s+good)[\s!.]*$"
    ).unwrap();

    static ref CONFUSION: Regex = Regex::new(
        r"^(huh|what|hm+|eh|\?+)[\s?!.]*$|\b(confused|i\s+don'?t\s+(understand|get\s+it)|not\s+sure\s+what|what\s+do\s+you\s+mean|help)\b"
    ).unwrap();

    static ref UPCOMING: Regex = keyword_regex(UPCOMING_WORDS);
    static ref ONGOING: Regex = keyword_regex(ONGOING_WORDS);
    static ref ENDED: Regex = keyword_regex(ENDED_WORDS);
    static ref PRIZE: Regex = keyword_regex(PRIZE_WORDS);
    static ref ONLINE: Regex = keyword_regex(ONLINE_WORDS);
    static ref OFFLINE: Regex = keyword_regex(OFFLINE_WORDS);
}

type Rule = fn(&str) -> Option<Intent>;

/// Ordered cascade; the first rule returning an intent wins
const RULES: &[Rule] = &[
    explain,
    find_team,
    ai_themes,
    skills,
    small_talk,
    status,
    prizes,
    venue,
];

/// Detect the intent of a chat message
pub fn detect(message: &str) -> Intent {
    let query = message.trim().to_lowercase();
    RULES
        .iter()
        .find_map(|rule| rule(&query))
        .unwrap_or(Intent::Lookup)
}

fn explain(query: &str) -> Option<Intent> {
    EXPLAIN.is_match(query).then_some(Intent::Explain)
}

fn find_team(query: &str) -> Option<Intent> {
    FIND_TEAM.is_match(query).then_some(Intent::FindTeam)
}

fn ai_themes(query: &str) -> Option<Intent> {
    AI_THEME.is_match(query).then_some(Intent::AiThemes)
}

fn skills(query: &str) -> Option<Intent> {
    SKILLS.is_match(query).then_some(Intent::Skills)
}

/// Only considered when the message mentions nothing hackathon related
fn small_talk(query: &str) -> Option<Intent> {
    if HACKATHON_TOPIC.is_match(query) {
        return None;
    }

    let kind = if GREETING.is_match(query) {
        SmallTalk::Greeting
    } else if THANKS.is_match(query) {
        SmallTalk::Thanks
    } else if FAREWELL.is_match(query) {
        SmallTalk::Farewell
    } else if ACKNOWLEDGEMENT.is_match(query) {
        SmallTalk::Acknowledgement
    } else if CONFUSION.is_match(query) {
        SmallTalk::Confusion
    } else {
        return None;
    };

    Some(Intent::SmallTalk(kind))
}

fn status(query: &str) -> Option<Intent> {
    if UPCOMING.is_match(query) {
        Some(Intent::Status(EventStatus::Upcoming))
    } else if ONGOING.is_match(query) {
        Some(Intent::Status(EventStatus::Ongoing))
    } else if ENDED.is_match(query) {
        Some(Intent::Status(EventStatus::Ended))
    } else {
        None
    }
}

fn prizes(query: &str) -> Option<Intent> {
    PRIZE.is_match(query).then_some(Intent::Prizes)
}

fn venue(query: &str) -> Option<Intent> {
    if ONLINE.is_match(query) {
        Some(Intent::Venue(Venue::Online))
    } else if OFFLINE.is_match(query) {
        Some(Intent::Venue(Venue::Offline))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain() {
        assert_eq!(detect("What is a hackathon?"), Intent::Explain);
        assert_eq!(detect("what's a hackathon"), Intent::Explain);
        assert_eq!(detect("Explain hackathons to me"), Intent::Explain);
    }

    #[test]
    fn test_explain_wins_over_later_rules() {
        // Mentions "prizes" but the explainer comes first
        assert_eq!(detect("what are hackathons and their prizes"), Intent::Explain);
    }

    #[test]
    fn test_find_team() {
        assert_eq!(detect("How do I find a team for Web3 Summit?"), Intent::FindTeam);
        assert_eq!(detect("I want to join a team"), Intent::FindTeam);
        assert_eq!(detect("looking for teammates"), Intent::FindTeam);
    }

    #[test]
    fn test_ai_themes() {
        assert_eq!(detect("Show me AI hackathons"), Intent::AiThemes);
        assert_eq!(detect("any events about artificial intelligence?"), Intent::AiThemes);
        assert_eq!(detect("ai-themed competitions"), Intent::AiThemes);
        // A bare "ai" in a name lookup is not a theme query
        assert_eq!(detect("ai innovation"), Intent::Lookup);
    }

    #[test]
    fn test_skills() {
        assert_eq!(detect("What skills do I need for blockchain?"), Intent::Skills);
        assert_eq!(detect("recommended tech stack"), Intent::Skills);
        assert_eq!(detect("how should i prepare"), Intent::Skills);
    }

    #[test]
    fn test_small_talk() {
        assert_eq!(detect("Hello!"), Intent::SmallTalk(SmallTalk::Greeting));
        assert_eq!(detect("good morning"), Intent::SmallTalk(SmallTalk::Greeting));
        assert_eq!(detect("thank you so much"), Intent::SmallTalk(SmallTalk::Thanks));
        assert_eq!(detect("bye"), Intent::SmallTalk(SmallTalk::Farewell));
        assert_eq!(detect("ok"), Intent::SmallTalk(SmallTalk::Acknowledgement));
        assert_eq!(detect("huh?"), Intent::SmallTalk(SmallTalk::Confusion));
        assert_eq!(detect("I'm confused"), Intent::SmallTalk(SmallTalk::Confusion));
    }

    #[test]
    fn test_small_talk_skipped_for_hackathon_topics() {
        assert_eq!(
            detect("hey, any upcoming hackathons?"),
            Intent::Status(EventStatus::Upcoming)
        );
        assert_eq!(detect("thanks, what about prizes"), Intent::Prizes);
        assert_eq!(detect("thanks, anything remote?"), Intent::Venue(Venue::Online));
        assert_eq!(detect("hey, what's current?"), Intent::Status(EventStatus::Ongoing));
        assert_eq!(detect("hi, any cash bounties?"), Intent::Prizes);
        assert_eq!(detect("hello, what's coming up"), Intent::Status(EventStatus::Upcoming));
        assert_eq!(detect("thx, which ones finished?"), Intent::Status(EventStatus::Ended));
        assert_eq!(detect("hey, anything onsite?"), Intent::Venue(Venue::Offline));
        assert_eq!(detect("hi, physical events near me"), Intent::Venue(Venue::Offline));
        assert_eq!(detect("hey, what tech stack do i need"), Intent::Skills);
    }

    #[test]
    fn test_every_later_keyword_blocks_small_talk() {
        for keyword in [
            "upcoming", "coming up", "live", "in progress", "currently", "completed",
            "prize pool", "money", "bounty", "virtual", "in-person", "on-site",
        ] {
            let message = format!("hey {}", keyword);
            assert!(
                !matches!(detect(&message), Intent::SmallTalk(_)),
                "{} was treated as small talk",
                message
            );
        }
    }

    #[test]
    fn test_status() {
        assert_eq!(detect("upcoming"), Intent::Status(EventStatus::Upcoming));
        assert_eq!(detect("which ones are live now"), Intent::Status(EventStatus::Ongoing));
        assert_eq!(detect("in progress"), Intent::Status(EventStatus::Ongoing));
        assert_eq!(detect("past hackathons"), Intent::Status(EventStatus::Ended));
    }

    #[test]
    fn test_prizes_and_venue() {
        assert_eq!(detect("biggest prize pool?"), Intent::Prizes);
        assert_eq!(detect("online hackathons"), Intent::Venue(Venue::Online));
        assert_eq!(detect("in-person hackathons"), Intent::Venue(Venue::Offline));
    }

    #[test]
    fn test_fallthrough_is_lookup() {
        assert_eq!(detect("asdjklqwe"), Intent::Lookup);
        assert_eq!(detect("Web3 Summit"), Intent::Lookup);
        assert_eq!(detect(""), Intent::Lookup);
    }

    #[test]
    fn test_venue_accepts() {
        assert!(Venue::Online.accepts("Online"));
        assert!(Venue::Online.accepts("hybrid"));
        assert!(Venue::Offline.accepts("In-Person"));
        assert!(!Venue::Offline.accepts("online"));
    }

    #[test]
    fn test_needs_listing() {
        assert!(!Intent::Explain.needs_listing());
        assert!(!Intent::SmallTalk(SmallTalk::Thanks).needs_listing());
        assert!(Intent::Lookup.needs_listing());
    }
}
