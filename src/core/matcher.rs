use serde::Deserialize;
use crate::models::{Hackathon, ScoredHackathon};
use crate::core::text::{contains_phrase, normalize, token_overlap};

/// Minimum token overlap for a query to count as naming a hackathon
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.34;

/// Fuzzy matcher of free text against hackathon names
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher {
    threshold: f64,
}

impl NameMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// All hackathons whose name overlaps the query at or above the threshold
    ///
    /// Sorted by score descending; ties keep listing order.
    pub fn rank(&self, query: &str, hackathons: &[Hackathon]) -> Vec<ScoredHackathon> {
        let mut scored: Vec<ScoredHackathon> = hackathons
            .iter()
            .filter_map(|hackathon| {
                let score = token_overlap(query, &hackathon.name);
                (score >= self.threshold).then(|| ScoredHackathon {
                    hackathon: hackathon.clone(),
                    score,
                })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }

    /// Best scoring hackathon, if any clears the threshold
    pub fn best(&self, query: &str, hackathons: &[Hackathon]) -> Option<ScoredHackathon> {
        self.rank(query, hackathons).into_iter().next()
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}

/// How a hackathon theme is compared with text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMatch {
    /// Plain substring containment, so "ai" is found inside "Blockchain"
    #[default]
    Substring,
    /// Containment on whole words only
    WholeWord,
}

impl ThemeMatch {
    /// Whether `needle` occurs in `haystack`, both already normalized
    pub fn contains(&self, haystack: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self {
            ThemeMatch::Substring => haystack.contains(needle),
            ThemeMatch::WholeWord => contains_phrase(haystack, needle),
        }
    }
}

/// First hackathon whose full name appears word-for-word in the query
pub fn exact_name_match<'a>(query: &str, hackathons: &'a [Hackathon]) -> Option<&'a Hackathon> {
    let query = normalize(query);
    hackathons
        .iter()
        .find(|hackathon| contains_phrase(&query, &normalize(&hackathon.name)))
}

/// Hackathons whose theme contains the query or is contained in it
pub fn theme_matches<'a>(
    query: &str,
    hackathons: &'a [Hackathon],
    policy: ThemeMatch,
) -> Vec<&'a Hackathon> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    hackathons
        .iter()
        .filter(|hackathon| {
            hackathon.theme().map_or(false, |theme| {
                let theme = normalize(theme);
                policy.contains(&query, &theme) || policy.contains(&theme, &query)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hackathon(id: &str, name: &str, theme: Option<&str>) -> Hackathon {
        Hackathon {
            id: id.to_string(),
            name: name.to_string(),
            theme: theme.map(str::to_string),
            date: "2025-03-01".to_string(),
            rounds: vec![],
            prize: None,
            location_type: None,
            description: None,
        }
    }

    fn listing() -> Vec<Hackathon> {
        vec![
            hackathon("1", "Green Energy Hack", Some("Sustainability")),
            hackathon("2", "AI Innovation Challenge", Some("Machine Learning")),
            hackathon("3", "Web3 Summit", Some("Blockchain")),
        ]
    }

    #[test]
    fn test_best_match() {
        let matcher = NameMatcher::default();
        let best = matcher.best("ai innovation", &listing()).unwrap();
        assert_eq!(best.hackathon.id, "2");
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn test_below_threshold() {
        let matcher = NameMatcher::default();
        // {tell, me, about, the, green, park} vs {green, energy, hack}: 1/3 < 0.34
        assert!(matcher.best("tell me about the green park", &listing()).is_none());
        assert!(matcher.best("asdjklqwe", &listing()).is_none());
    }

    #[test]
    fn test_rank_sorted() {
        let matcher = NameMatcher::new(0.1);
        let ranked = matcher.rank("green summit hack", &listing());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].hackathon.id, "1");
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn test_exact_name_match() {
        let hackathons = listing();
        let found = exact_name_match("what skills for the Web3 Summit?", &hackathons);
        assert_eq!(found.map(|h| h.id.as_str()), Some("3"));
        assert!(exact_name_match("web3 skills", &hackathons).is_none());
    }

    #[test]
    fn test_theme_matches() {
        let hackathons = listing();
        let found = theme_matches("any blockchain events", &hackathons, ThemeMatch::Substring);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");

        assert!(theme_matches("machine", &hackathons, ThemeMatch::Substring).len() == 1);
        assert!(theme_matches("", &hackathons, ThemeMatch::Substring).is_empty());
    }

    #[test]
    fn test_theme_matches_partial_words() {
        let hackathons = listing();
        // "chain" sits inside "blockchain"
        let found = theme_matches("chain", &hackathons, ThemeMatch::Substring);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");

        assert!(theme_matches("chain", &hackathons, ThemeMatch::WholeWord).is_empty());
        assert_eq!(theme_matches("blockchain", &hackathons, ThemeMatch::WholeWord).len(), 1);
    }

    #[test]
    fn test_theme_match_policy() {
        assert!(ThemeMatch::Substring.contains("blockchain", "ai"));
        assert!(!ThemeMatch::WholeWord.contains("blockchain", "ai"));
        assert!(ThemeMatch::WholeWord.contains("generative ai", "ai"));
        assert!(!ThemeMatch::Substring.contains("anything", ""));
        assert_eq!(ThemeMatch::default(), ThemeMatch::Substring);
    }
}
