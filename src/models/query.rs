use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::ShowType;

/// Direction of a ranked result list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort type: {}", other)),
        }
    }
}

/// Metric used to rank shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShowCriterion {
    Ratings,
    Favorite,
    Longest,
    MostViewed,
}

impl FromStr for ShowCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ratings" => Ok(ShowCriterion::Ratings),
            "favorite" => Ok(ShowCriterion::Favorite),
            "longest" => Ok(ShowCriterion::Longest),
            "most_viewed" => Ok(ShowCriterion::MostViewed),
            other => Err(format!("unknown show criteria: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActorCriterion {
    Average,
    Awards,
    FilterDescription,
}

impl FromStr for ActorCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(ActorCriterion::Average),
            "awards" => Ok(ActorCriterion::Awards),
            "filter_description" => Ok(ActorCriterion::FilterDescription),
            other => Err(format!("unknown actor criteria: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserCriterion {
    NumRatings,
}

impl FromStr for UserCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "num_ratings" => Ok(UserCriterion::NumRatings),
            other => Err(format!("unknown user criteria: {}", other)),
        }
    }
}

/// Two-stage show filter: exact release year, then required genres
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowFilter {
    pub year: Option<i32>,
    /// Empty means no genre filter
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowQuery {
    pub show_type: ShowType,
    pub limit: usize,
    pub filter: ShowFilter,
    pub order: SortOrder,
    pub criterion: ShowCriterion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorQuery {
    pub limit: usize,
    pub keywords: Vec<String>,
    pub awards: Vec<String>,
    pub order: SortOrder,
    pub criterion: ActorCriterion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub limit: usize,
    pub order: SortOrder,
    pub criterion: UserCriterion,
}

/// The five recommendation strategies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStrategy {
    Standard,
    BestUnseen,
    Popular,
    Favorite,
    Search,
}

impl RecommendationStrategy {
    /// Only premium subscribers may use this strategy
    pub fn requires_premium(&self) -> bool {
        matches!(
            self,
            RecommendationStrategy::Popular
                | RecommendationStrategy::Favorite
                | RecommendationStrategy::Search
        )
    }
}

impl Display for RecommendationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecommendationStrategy::Standard => "StandardRecommendation",
            RecommendationStrategy::BestUnseen => "BestRatedUnseenRecommendation",
            RecommendationStrategy::Popular => "PopularRecommendation",
            RecommendationStrategy::Favorite => "FavoriteRecommendation",
            RecommendationStrategy::Search => "SearchRecommendation",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for RecommendationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(RecommendationStrategy::Standard),
            "best_unseen" => Ok(RecommendationStrategy::BestUnseen),
            "popular" => Ok(RecommendationStrategy::Popular),
            "favorite" => Ok(RecommendationStrategy::Favorite),
            "search" => Ok(RecommendationStrategy::Search),
            other => Err(format!("unknown recommendation type: {}", other)),
        }
    }
}
