use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Subscription tier of a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Subscription {
    #[serde(alias = "STANDARD")]
    Basic,
    Premium,
}

/// A catalog user and everything they did so far
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub subscription: Subscription,
    /// View count per show title; a title is present only once viewed
    pub history: HashMap<String, u32>,
    pub favorites: Vec<String>,
    pub rated_movies: HashSet<String>,
    /// Season numbers already rated, per serial title
    pub rated_seasons: HashMap<String, BTreeSet<u32>>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        subscription: Subscription,
        history: HashMap<String, u32>,
        favorites: Vec<String>,
    ) -> Self {
        Self {
            username: username.into(),
            subscription,
            history,
            favorites,
            rated_movies: HashSet::new(),
            rated_seasons: HashMap::new(),
        }
    }

    pub fn is_premium(&self) -> bool {
        self.subscription == Subscription::Premium
    }

    pub fn has_seen(&self, title: &str) -> bool {
        self.history.contains_key(title)
    }

    /// Number of times the user viewed `title`, 0 if never
    pub fn views(&self, title: &str) -> u32 {
        self.history.get(title).copied().unwrap_or(0)
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.iter().any(|f| f == title)
    }

    pub fn has_rated_season(&self, title: &str, season: u32) -> bool {
        self.rated_seasons
            .get(title)
            .is_some_and(|seasons| seasons.contains(&season))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_serde() {
        let premium: Subscription = serde_json::from_str("\"PREMIUM\"").unwrap();
        let basic: Subscription = serde_json::from_str("\"BASIC\"").unwrap();
        let standard: Subscription = serde_json::from_str("\"STANDARD\"").unwrap();
        assert_eq!(premium, Subscription::Premium);
        assert_eq!(basic, Subscription::Basic);
        assert_eq!(standard, Subscription::Basic);
    }

    #[test]
    fn test_views_and_seen() {
        let history = HashMap::from([("Heat".to_string(), 3)]);
        let user = User::new("ana", Subscription::Basic, history, vec![]);
        assert!(user.has_seen("Heat"));
        assert_eq!(user.views("Heat"), 3);
        assert!(!user.has_seen("Ronin"));
        assert_eq!(user.views("Ronin"), 0);
        assert!(!user.is_premium());
    }

    #[test]
    fn test_has_rated_season() {
        let mut user = User::new("ana", Subscription::Premium, HashMap::new(), vec![]);
        user.rated_seasons
            .entry("Dark".to_string())
            .or_default()
            .insert(2);
        assert!(user.has_rated_season("Dark", 2));
        assert!(!user.has_rated_season("Dark", 1));
        assert!(!user.has_rated_season("Lost", 2));
    }
}
