use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod action;
mod actor;
mod genre;
mod query;
mod show;
mod user;

pub use action::{Action, ActionOutcome, ActionRecord, Command, FilterSlots, FilterValue, Query};
pub use actor::{Actor, Award, KeywordFilter};
pub use genre::{GenrePopularity, KNOWN_GENRES};
pub use query::{
    ActorCriterion, ActorQuery, RecommendationStrategy, ShowCriterion, ShowFilter, ShowQuery,
    SortOrder, UserCriterion, UserQuery,
};
pub use show::{Season, Show, ShowKind, ShowType};
pub use user::{Subscription, User};

// ============================================================================
// Input Document Types
// ============================================================================

/// Raw movie entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub name: String,
    pub year: i32,
    pub duration: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default, rename = "actors")]
    pub cast: Vec<String>,
}

impl From<MovieRecord> for Show {
    fn from(record: MovieRecord) -> Self {
        Show::movie(
            record.name,
            record.year,
            record.duration,
            record.genres,
            record.cast,
        )
    }
}

/// Raw season entry; the season number defaults to its 1-based position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub duration: u32,
    #[serde(default)]
    pub season: Option<u32>,
}

/// Raw serial entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialRecord {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default, rename = "actors")]
    pub cast: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<SeasonRecord>,
}

impl From<SerialRecord> for Show {
    fn from(record: SerialRecord) -> Self {
        let seasons = record
            .seasons
            .into_iter()
            .zip(1u32..)
            .map(|(season, position)| {
                Season::new(season.season.unwrap_or(position), season.duration)
            })
            .collect();
        Show::serial(
            record.name,
            record.year,
            seasons,
            record.genres,
            record.cast,
        )
    }
}

/// Raw actor entry; filmography is a list of show titles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorRecord {
    pub name: String,
    #[serde(default)]
    pub career_description: String,
    #[serde(default)]
    pub filmography: Vec<String>,
    #[serde(default)]
    pub awards: HashMap<Award, u32>,
}

/// Raw user entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub subscription: Subscription,
    #[serde(default)]
    pub history: HashMap<String, u32>,
    #[serde(default, rename = "favoriteMovies")]
    pub favorites: Vec<String>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User::new(
            record.username,
            record.subscription,
            record.history,
            record.favorites,
        )
    }
}

/// Entities the catalog is built from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogInput {
    #[serde(default)]
    pub actors: Vec<ActorRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
    #[serde(default)]
    pub serials: Vec<SerialRecord>,
}

/// A full input file: the catalog plus the ordered actions to run against it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(flatten)]
    pub catalog: CatalogInput,
    #[serde(default)]
    pub commands: Vec<ActionRecord>,
}
