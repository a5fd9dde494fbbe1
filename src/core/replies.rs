//! Reply builders for every intent.
//!
//! These are pure: they take already fetched hackathons and return the
//! text sent back to the user.

use crate::core::intent::{SmallTalk, Venue};
use crate::core::status::display_date;
use crate::core::matcher::ThemeMatch;
use crate::core::text::{contains_phrase, normalize};
use crate::models::{EventStatus, Hackathon, ReplyOptions};

/// Sent whenever a chat request cannot be handled at all
pub const APOLOGY: &str =
    "Sorry, something went wrong while processing your message. Please try again in a moment.";

pub const EXPLAINER: &str = "A hackathon is a time-boxed event where people team up to design and build a working project, usually software or hardware, around a theme. \
Events run through rounds such as kickoff, submission and judging, and the strongest projects win prizes. \
Ask me about upcoming hackathons, themes, prizes or how to find a team!";

pub const NOT_FOUND: &str = "I couldn't find that hackathon. Try asking about upcoming, ongoing or past hackathons, prizes, online events, or a specific hackathon name.";

const GENERIC_TEAM: &str = "To find a team, open the hackathon you're interested in and go to its Teams tab. \
You can browse open teams and request to join, or create your own team and invite teammates. \
Tell me the hackathon name and I can link you straight to it.";

const GENERIC_SKILLS: &str = "Most hackathons reward a mix of skills: one solid programming language (Python or JavaScript), Git and GitHub, working with APIs, basic UI design, and pitching your idea clearly. \
Tell me a theme such as AI, Web, Blockchain or IoT for more specific suggestions.";

/// Theme keywords and the skills worth preparing for them
const SKILLS_BY_THEME: &[(&str, &[&str], &str)] = &[
    (
        "AI",
        &["ai", "artificial intelligence", "machine learning", "ml", "deep learning", "llm", "genai"],
        "Python, PyTorch or TensorFlow, data preprocessing, prompt engineering, and deploying models behind an API",
    ),
    (
        "Web",
        &["web", "web development", "frontend", "front end", "full stack", "fullstack"],
        "HTML and CSS, JavaScript or TypeScript, React or Next.js, REST APIs, and a backend such as Node.js or Flask",
    ),
    (
        "Blockchain",
        &["blockchain", "web3", "crypto", "defi", "nft", "smart contract", "smart contracts"],
        "Solidity, smart contract security, Ethers.js or Web3.js, and wallet integration",
    ),
    (
        "Mobile",
        &["mobile", "android", "ios", "app development"],
        "Flutter or React Native, Kotlin or Swift, and mobile UI design",
    ),
    (
        "IoT",
        &["iot", "internet of things", "hardware", "embedded", "robotics"],
        "Arduino or Raspberry Pi, C or C++, sensor integration, and MQTT",
    ),
    (
        "Data",
        &["data", "data science", "analytics", "big data"],
        "Python, SQL, pandas, data visualisation, and basic statistics",
    ),
    (
        "Cybersecurity",
        &["security", "cybersecurity", "cyber security", "ctf"],
        "networking fundamentals, Linux, cryptography basics, and secure coding practices",
    ),
    (
        "Cloud",
        &["cloud", "devops", "aws", "azure", "gcp"],
        "Docker, Kubernetes, CI/CD pipelines, and one major cloud provider",
    ),
    (
        "Game",
        &["game", "games", "gaming", "game development", "gamedev"],
        "Unity or Unreal Engine, C# or C++, and game design fundamentals",
    ),
    (
        "HealthTech",
        &["health", "healthcare", "healthtech", "medtech", "medical"],
        "data privacy basics, mobile or web development, and working with health data standards such as FHIR",
    ),
    (
        "FinTech",
        &["fintech", "finance", "banking", "payments"],
        "payment APIs, secure backend development, SQL, and basic financial modelling",
    ),
];

/// Join names, keeping at most `limit` and summarising the rest as "+N more"
pub fn format_list(items: &[String], limit: usize) -> String {
    let shown = items
        .iter()
        .take(limit)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    if items.len() > limit {
        format!("{} (+{} more)", shown, items.len() - limit)
    } else {
        shown
    }
}

/// "Name (Theme)" or just "Name"
fn list_item(hackathon: &Hackathon) -> String {
    match hackathon.theme() {
        Some(theme) => format!("{} ({})", hackathon.name, theme),
        None => hackathon.name.clone(),
    }
}

fn list_items(hackathons: &[&Hackathon]) -> Vec<String> {
    hackathons.iter().map(|h| list_item(h)).collect()
}

/// Skills entry whose keywords appear in already normalized text
fn skills_entry(normalized: &str) -> Option<(&'static str, &'static str)> {
    SKILLS_BY_THEME
        .iter()
        .find(|(_, keywords, _)| keywords.iter().any(|k| contains_phrase(normalized, k)))
        .map(|(label, _, skills)| (*label, *skills))
}

fn ai_skills() -> &'static str {
    SKILLS_BY_THEME[0].2
}

pub fn team_reply(matched: Option<&Hackathon>, options: &ReplyOptions) -> String {
    match matched {
        Some(hackathon) => format!(
            "To find or join a team for {}, open {} and go to the Teams tab. \
You can browse open teams and send a join request, or create your own team and invite others.",
            hackathon.name,
            options.link_for(hackathon)
        ),
        None => GENERIC_TEAM.to_string(),
    }
}

pub fn ai_reply(ai_hackathons: &[&Hackathon], options: &ReplyOptions) -> String {
    if ai_hackathons.is_empty() {
        return format!(
            "There are no AI-themed hackathons listed right now. Skills that help in AI hackathons: {}.",
            ai_skills()
        );
    }

    format!(
        "Here are the AI-themed hackathons: {}. Skills that help: {}.",
        format_list(&list_items(ai_hackathons), options.list_limit),
        ai_skills()
    )
}

/// Whether a hackathon's theme mentions AI under the given match policy
pub fn is_ai_themed(hackathon: &Hackathon, policy: ThemeMatch) -> bool {
    hackathon.theme().map_or(false, |theme| {
        let theme = normalize(theme);
        policy.contains(&theme, "ai") || policy.contains(&theme, "artificial intelligence")
    })
}

/// Skills for the hackathon named in the query, else for a theme keyword in it
pub fn skills_reply(query: &str, named: Option<&Hackathon>) -> String {
    if let Some(hackathon) = named {
        if let Some((_, skills)) = hackathon.theme().and_then(|t| skills_entry(&normalize(t))) {
            return format!(
                "For {} ({}), useful skills include: {}.",
                hackathon.name,
                hackathon.theme().unwrap_or_default(),
                skills
            );
        }
    }

    match skills_entry(&normalize(query)) {
        Some((label, skills)) => format!("For {} hackathons, useful skills include: {}.", label, skills),
        None => GENERIC_SKILLS.to_string(),
    }
}

pub fn small_talk_reply(kind: SmallTalk) -> &'static str {
    match kind {
        SmallTalk::Greeting => "Hi there! I can help you discover hackathons, find a team, check prizes and more. What would you like to know?",
        SmallTalk::Thanks => "You're welcome! Let me know if there's anything else I can help with.",
        SmallTalk::Farewell => "Goodbye, and good luck with your next hackathon!",
        SmallTalk::Acknowledgement => "Great! Anything else you'd like to know about hackathons?",
        SmallTalk::Confusion => "No problem, let me help. You can ask things like \"upcoming hackathons\", \"hackathons with the biggest prizes\", \"online hackathons\" or \"how do I join a team\".",
    }
}

pub fn status_reply(status: EventStatus, matching: &[&Hackathon], options: &ReplyOptions) -> String {
    if matching.is_empty() {
        return format!("There are no {} hackathons at the moment.", status.label());
    }

    format!(
        "Here are the {} hackathons: {}.",
        status.label(),
        format_list(&list_items(matching), options.list_limit)
    )
}

/// Hackathons with a parseable prize, highest first
pub fn top_prizes<'a>(hackathons: &'a [Hackathon], limit: usize) -> Vec<&'a Hackathon> {
    let mut ranked: Vec<(&Hackathon, f64)> = hackathons
        .iter()
        .filter_map(|h| h.prize_amount().map(|amount| (h, amount)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().take(limit).map(|(h, _)| h).collect()
}

pub fn prize_reply(ranked: &[&Hackathon]) -> String {
    if ranked.is_empty() {
        return "None of the listed hackathons have announced prizes yet.".to_string();
    }

    let items: Vec<String> = ranked
        .iter()
        .map(|h| format!("{} ({})", h.name, h.prize.as_deref().unwrap_or_default().trim()))
        .collect();

    format!("Hackathons with the biggest prizes: {}.", items.join(", "))
}

pub fn venue_reply(venue: Venue, matching: &[&Hackathon], options: &ReplyOptions) -> String {
    if matching.is_empty() {
        return format!("I couldn't find any {} hackathons right now.", venue.label());
    }

    format!(
        "Here are the {} hackathons: {}.",
        venue.label(),
        format_list(&list_items(matching), options.list_limit)
    )
}

pub fn theme_reply(matching: &[&Hackathon], options: &ReplyOptions) -> String {
    format!(
        "Here are hackathons matching that theme: {}.",
        format_list(&list_items(matching), options.list_limit)
    )
}

/// Everything known about a single hackathon, gathered from the backend
#[derive(Debug, Clone)]
pub struct HackathonDetail {
    pub hackathon: Hackathon,
    pub status: Option<EventStatus>,
    pub team_count: Option<usize>,
    pub participant_count: Option<usize>,
}

pub fn detail_reply(detail: &HackathonDetail, options: &ReplyOptions) -> String {
    let hackathon = &detail.hackathon;
    let mut lines = vec![format!("Here's what I found about {}:", hackathon.name)];

    if let Some(theme) = hackathon.theme() {
        lines.push(format!("Theme: {}", theme));
    }
    if let Some(status) = detail.status {
        lines.push(format!("Status: {}", status));
    }
    if !hackathon.date.trim().is_empty() {
        lines.push(format!("Date: {}", display_date(&hackathon.date)));
    }
    if let Some(location) = hackathon.location_type.as_deref().filter(|l| !l.trim().is_empty()) {
        lines.push(format!("Location: {}", location.trim()));
    }
    if let Some(prize) = hackathon.prize.as_deref() {
        lines.push(format!("Prize: {}", prize.trim()));
    }
    if !hackathon.rounds.is_empty() {
        let rounds: Vec<String> = hackathon
            .rounds
            .iter()
            .map(|round| format!("{} ({})", round.name, display_date(&round.date)))
            .collect();
        lines.push(format!("Rounds: {}", rounds.join(", ")));
    }
    if let Some(teams) = detail.team_count {
        lines.push(format!("Teams: {}", teams));
    }
    if let Some(participants) = detail.participant_count {
        lines.push(format!("Participants: {}", participants));
    }
    if let Some(description) = hackathon.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(description.trim().to_string());
    }

    lines.push(format!("More details: {}", options.link_for(hackathon)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hackathon(id: &str, name: &str, theme: Option<&str>, prize: Option<&str>) -> Hackathon {
        Hackathon {
            id: id.to_string(),
            name: name.to_string(),
            theme: theme.map(str::to_string),
            date: "2025-03-01".to_string(),
            rounds: vec![],
            prize: prize.map(str::to_string),
            location_type: None,
            description: None,
        }
    }

    #[test]
    fn test_format_list_caps_at_limit() {
        let items: Vec<String> = (1..=7).map(|i| format!("H{}", i)).collect();
        assert_eq!(format_list(&items, 5), "H1, H2, H3, H4, H5 (+2 more)");
        assert_eq!(format_list(&items[..2], 5), "H1, H2");
        assert_eq!(format_list(&[], 5), "");
    }

    #[test]
    fn test_is_ai_themed_substring() {
        let policy = ThemeMatch::Substring;
        assert!(is_ai_themed(&hackathon("1", "A", Some("AI for Good"), None), policy));
        assert!(is_ai_themed(&hackathon("2", "B", Some("Generative-AI"), None), policy));
        assert!(is_ai_themed(&hackathon("3", "C", Some("Blockchain"), None), policy));
        assert!(is_ai_themed(&hackathon("4", "D", Some("Sustainability"), None), policy));
        assert!(!is_ai_themed(&hackathon("5", "E", Some("Web3"), None), policy));
        assert!(!is_ai_themed(&hackathon("6", "F", None, None), policy));
    }

    #[test]
    fn test_is_ai_themed_whole_words() {
        let policy = ThemeMatch::WholeWord;
        assert!(is_ai_themed(&hackathon("1", "A", Some("AI for Good"), None), policy));
        assert!(is_ai_themed(&hackathon("2", "B", Some("Generative-AI"), None), policy));
        assert!(!is_ai_themed(&hackathon("3", "C", Some("Blockchain"), None), policy));
        assert!(!is_ai_themed(&hackathon("4", "D", None, None), policy));
    }

    #[test]
    fn test_skills_prefers_named_hackathon_theme() {
        let named = hackathon("1", "Chain Jam", Some("Web3"), None);
        let reply = skills_reply("skills for chain jam and ai", Some(&named));
        assert!(reply.contains("Chain Jam"));
        assert!(reply.contains("Solidity"));
    }

    #[test]
    fn test_skills_falls_back_to_query_keyword() {
        let reply = skills_reply("what skills for iot?", None);
        assert!(reply.contains("For IoT hackathons"));

        let named = hackathon("1", "Mystery Jam", Some("Surprise"), None);
        let reply = skills_reply("skills for mystery jam", Some(&named));
        assert_eq!(reply, GENERIC_SKILLS);
    }

    #[test]
    fn test_top_prizes() {
        let hackathons = vec![
            hackathon("1", "Small", None, Some("$500")),
            hackathon("2", "None", None, None),
            hackathon("3", "Big", None, Some("$10,000")),
            hackathon("4", "Mid", None, Some("2500")),
        ];
        let ranked = top_prizes(&hackathons, 2);
        let names: Vec<&str> = ranked.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Big", "Mid"]);

        let reply = prize_reply(&ranked);
        assert!(reply.contains("Big ($10,000)"));
    }

    #[test]
    fn test_status_reply_empty() {
        let reply = status_reply(EventStatus::Ongoing, &[], &ReplyOptions::default());
        assert_eq!(reply, "There are no ongoing hackathons at the moment.");
    }

    #[test]
    fn test_team_reply_links_hackathon() {
        let h = hackathon("abc", "Web3 Summit", None, None);
        let reply = team_reply(Some(&h), &ReplyOptions::default());
        assert!(reply.contains("Web3 Summit"));
        assert!(reply.contains("/hackathons/abc"));
        assert_eq!(team_reply(None, &ReplyOptions::default()), GENERIC_TEAM);
    }

    #[test]
    fn test_detail_reply_skips_missing_fields() {
        let detail = HackathonDetail {
            hackathon: hackathon("9", "Solo", None, None),
            status: Some(EventStatus::Ended),
            team_count: Some(3),
            participant_count: None,
        };
        let reply = detail_reply(&detail, &ReplyOptions::default());
        assert!(reply.contains("Status: Ended"));
        assert!(reply.contains("Teams: 3"));
        assert!(!reply.contains("Participants"));
        assert!(!reply.contains("Theme"));
    }
}
