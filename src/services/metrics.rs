//! Derived metrics over catalog entities.
//!
//! Every function recomputes its value from current catalog state and returns
//! it; nothing is cached on the entities, so consecutive queries never see
//! leftovers from earlier ones.

use crate::{
    catalog::Catalog,
    models::{Actor, Show, ShowKind, User},
};

/// Final rating of a show, 0 when it has no grades.
///
/// Movies average their grades. Serials divide the sum of every season's
/// grades by the number of seasons, rated or not.
pub fn show_rating(show: &Show) -> f64 {
    match &show.kind {
        ShowKind::Movie { ratings, .. } => {
            if ratings.is_empty() {
                0.0
            } else {
                ratings.iter().sum::<f64>() / ratings.len() as f64
            }
        }
        ShowKind::Serial { seasons } => {
            if seasons.iter().all(|s| s.ratings.is_empty()) {
                return 0.0;
            }
            let sum: f64 = seasons.iter().flat_map(|s| s.ratings.iter()).sum();
            sum / seasons.len() as f64
        }
    }
}

pub fn total_duration(show: &Show) -> u32 {
    match &show.kind {
        ShowKind::Movie { duration, .. } => *duration,
        ShowKind::Serial { seasons } => seasons.iter().map(|s| s.duration).sum(),
    }
}

/// Number of users with the show among their favorites
pub fn times_favorite(show: &Show, users: &[User]) -> u32 {
    users.iter().filter(|u| u.is_favorite(&show.title)).count() as u32
}

/// Total views of the show across all users
pub fn times_viewed(show: &Show, users: &[User]) -> u32 {
    users.iter().map(|u| u.views(&show.title)).sum()
}

/// Average final rating over the actor's rated shows, 0 if none is rated
pub fn actor_rating(actor: &Actor, catalog: &Catalog) -> f64 {
    let ratings: Vec<f64> = catalog
        .filmography(actor)
        .map(show_rating)
        .filter(|rating| *rating != 0.0)
        .collect();

    if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    }
}

pub fn award_total(actor: &Actor) -> u32 {
    actor.awards.values().sum()
}

/// Rated movies plus rated serial seasons
pub fn rating_count(user: &User) -> usize {
    user.rated_movies.len() + user.rated_seasons.values().map(|s| s.len()).sum::<usize>()
}

/// Snapshot of every ranking metric of one show
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShowMetrics {
    pub rating: f64,
    pub times_favorite: u32,
    pub times_viewed: u32,
    pub total_duration: u32,
}

impl ShowMetrics {
    pub fn compute(show: &Show, users: &[User]) -> Self {
        Self {
            rating: show_rating(show),
            times_favorite: times_favorite(show, users),
            times_viewed: times_viewed(show, users),
            total_duration: total_duration(show),
        }
    }
}
