// Core algorithm exports
pub mod assistant;
pub mod intent;
pub mod matcher;
pub mod replies;
pub mod status;
pub mod text;

pub use assistant::Assistant;
pub use intent::{detect, Intent, SmallTalk, Venue};
pub use matcher::{NameMatcher, ThemeMatch, exact_name_match, theme_matches};
pub use status::{StatusBoundary, StatusClassifier, parse_event_date};
pub use text::{normalize, token_overlap};
