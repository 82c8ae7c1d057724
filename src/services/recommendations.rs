use crate::{
    catalog::Catalog,
    error::ActionError,
    models::{GenrePopularity, RecommendationStrategy, Show, User},
    services::metrics,
};

/// What a recommendation produced
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Title(String),
    Titles(Vec<String>),
}

/// Runs a recommendation strategy for a user.
///
/// Strategies scan shows in catalog order (movies, then serials) unless they
/// re-rank them first. `genre` is only consulted by the search strategy, which
/// finds nothing without one.
pub fn recommend(
    catalog: &Catalog,
    username: &str,
    strategy: RecommendationStrategy,
    genre: Option<&str>,
) -> Result<Recommendation, ActionError> {
    let user = catalog
        .user(username)
        .ok_or_else(|| ActionError::UserNotFound(username.to_string()))?;

    if strategy.requires_premium() && !user.is_premium() {
        tracing::debug!(user = %username, ?strategy, "Strategy needs a premium subscription");
        return Err(ActionError::SubscriptionNotEligible(strategy));
    }

    let found = match strategy {
        RecommendationStrategy::Standard => standard(catalog, user).map(Recommendation::Title),
        RecommendationStrategy::BestUnseen => {
            best_unseen(catalog, user).map(Recommendation::Title)
        }
        RecommendationStrategy::Popular => popular(catalog, user).map(Recommendation::Title),
        RecommendationStrategy::Favorite => favorite(catalog, user).map(Recommendation::Title),
        RecommendationStrategy::Search => genre
            .map(|genre| search(catalog, user, genre))
            .filter(|titles| !titles.is_empty())
            .map(Recommendation::Titles),
    };

    found.ok_or(ActionError::NoResult(strategy))
}

fn first_unseen<'a>(user: &User, mut shows: impl Iterator<Item = &'a Show>) -> Option<String> {
    shows
        .find(|show| !user.has_seen(&show.title))
        .map(|show| show.title.clone())
}

/// First show the user has not watched, in catalog order
fn standard(catalog: &Catalog, user: &User) -> Option<String> {
    first_unseen(user, catalog.shows().iter())
}

/// Best rated unwatched show; equal ratings keep catalog order
fn best_unseen(catalog: &Catalog, user: &User) -> Option<String> {
    let mut ranked: Vec<(&Show, f64)> = catalog
        .shows()
        .iter()
        .map(|show| (show, metrics::show_rating(show)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    first_unseen(user, ranked.into_iter().map(|(show, _)| show))
}

/// Genres ranked by total views, most popular first
fn genre_popularity(catalog: &Catalog) -> Vec<GenrePopularity> {
    let views: Vec<u32> = catalog
        .shows()
        .iter()
        .map(|show| metrics::times_viewed(show, catalog.users()))
        .collect();

    let mut genres: Vec<GenrePopularity> = catalog
        .genres()
        .into_iter()
        .map(|genre| {
            let popularity = catalog
                .shows()
                .iter()
                .zip(&views)
                .filter(|(show, _)| show.has_genre(&genre))
                .map(|(_, views)| views)
                .sum();
            GenrePopularity { genre, popularity }
        })
        .collect();

    genres.sort_by_key(|g| g.popularity);
    genres.reverse();
    genres
}

/// First unwatched show of the most popular genre that still has one
fn popular(catalog: &Catalog, user: &User) -> Option<String> {
    genre_popularity(catalog).iter().find_map(|entry| {
        first_unseen(
            user,
            catalog
                .shows()
                .iter()
                .filter(|show| show.has_genre(&entry.genre)),
        )
    })
}

/// Unwatched show favorited by the most users
fn favorite(catalog: &Catalog, user: &User) -> Option<String> {
    let mut ranked: Vec<(&Show, u32)> = catalog
        .shows()
        .iter()
        .map(|show| (show, metrics::times_favorite(show, catalog.users())))
        .filter(|(_, count)| *count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    first_unseen(user, ranked.into_iter().map(|(show, _)| show))
}

/// Every unwatched show of `genre`, ascending by rating then title
fn search(catalog: &Catalog, user: &User, genre: &str) -> Vec<String> {
    let mut ranked: Vec<(&Show, f64)> = catalog
        .shows()
        .iter()
        .filter(|show| show.has_genre(genre))
        .map(|show| (show, metrics::show_rating(show)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.title.cmp(&b.0.title)));

    ranked
        .into_iter()
        .filter(|(show, _)| !user.has_seen(&show.title))
        .map(|(show, _)| show.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogInput, MovieRecord, SeasonRecord, SerialRecord, Subscription, UserRecord};

    fn movie(name: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            name: name.to_string(),
            year: 2000,
            duration: 100,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            cast: vec![],
        }
    }

    fn user(name: &str, subscription: Subscription, history: &[(&str, u32)], favorites: &[&str]) -> UserRecord {
        UserRecord {
            username: name.to_string(),
            subscription,
            history: history.iter().map(|(t, n)| (t.to_string(), *n)).collect(),
            favorites: favorites.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn catalog(users: Vec<UserRecord>) -> Catalog {
        let mut catalog = Catalog::new(CatalogInput {
            movies: vec![
                movie("Alien", &["Horror", "Science Fiction"]),
                movie("Heat", &["Crime", "Drama"]),
                movie("Ronin", &["Action", "Crime"]),
            ],
            serials: vec![SerialRecord {
                name: "Dark".to_string(),
                year: 2017,
                genres: vec!["Drama".to_string(), "Mystery".to_string()],
                cast: vec![],
                seasons: vec![SeasonRecord {
                    duration: 60,
                    season: None,
                }],
            }],
            actors: vec![],
            users,
        });
        for (title, grade, season) in [("Heat", 9.0, None), ("Dark", 7.0, Some(1)), ("Ronin", 7.0, None)] {
            let (_, show) = catalog.user_and_show_mut("", title);
            show.unwrap().receive_rating(grade, season);
        }
        catalog
    }

    fn title(r: Result<Recommendation, ActionError>) -> String {
        match r {
            Ok(Recommendation::Title(t)) => t,
            other => panic!("expected a title, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_returns_first_unseen() {
        let c = catalog(vec![
            user("new", Subscription::Basic, &[], &[]),
            user("old", Subscription::Basic, &[("Alien", 1)], &[]),
        ]);
        assert_eq!(title(recommend(&c, "new", RecommendationStrategy::Standard, None)), "Alien");
        assert_eq!(title(recommend(&c, "old", RecommendationStrategy::Standard, None)), "Heat");
    }

    #[test]
    fn test_standard_when_everything_seen() {
        let c = catalog(vec![user(
            "all",
            Subscription::Basic,
            &[("Alien", 1), ("Heat", 1), ("Ronin", 1), ("Dark", 1)],
            &[],
        )]);
        assert_eq!(
            recommend(&c, "all", RecommendationStrategy::Standard, None),
            Err(ActionError::NoResult(RecommendationStrategy::Standard))
        );
    }

    #[test]
    fn test_unknown_user() {
        let c = catalog(vec![]);
        assert_eq!(
            recommend(&c, "ghost", RecommendationStrategy::Standard, None),
            Err(ActionError::UserNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_best_unseen_keeps_catalog_order_on_ties() {
        let c = catalog(vec![user("ana", Subscription::Basic, &[("Heat", 1)], &[])]);
        // Ronin and Dark both rate 7; Ronin comes first in the catalog
        assert_eq!(title(recommend(&c, "ana", RecommendationStrategy::BestUnseen, None)), "Ronin");
    }

    #[test]
    fn test_premium_gating() {
        let c = catalog(vec![user("basic", Subscription::Basic, &[], &[])]);
        for strategy in [
            RecommendationStrategy::Popular,
            RecommendationStrategy::Favorite,
            RecommendationStrategy::Search,
        ] {
            assert_eq!(
                recommend(&c, "basic", strategy, Some("Drama")),
                Err(ActionError::SubscriptionNotEligible(strategy))
            );
        }
    }

    #[test]
    fn test_popular_picks_most_viewed_genre() {
        let c = catalog(vec![
            user("ana", Subscription::Premium, &[("Heat", 1)], &[]),
            user("bob", Subscription::Basic, &[("Ronin", 5)], &[]),
        ]);
        // Crime (6 views) and Action (5) lead; Heat is seen, Ronin is not
        assert_eq!(title(recommend(&c, "ana", RecommendationStrategy::Popular, None)), "Ronin");
    }

    #[test]
    fn test_favorite_skips_seen_and_unfavorited() {
        let c = catalog(vec![
            user("ana", Subscription::Premium, &[("Heat", 1)], &[]),
            user("bob", Subscription::Basic, &[("Heat", 1), ("Dark", 1)], &["Heat", "Dark"]),
            user("cid", Subscription::Basic, &[("Heat", 1)], &["Heat"]),
        ]);
        assert_eq!(title(recommend(&c, "ana", RecommendationStrategy::Favorite, None)), "Dark");

        let seen_all = catalog(vec![user(
            "eve",
            Subscription::Premium,
            &[("Heat", 1)],
            &["Heat"],
        )]);
        assert_eq!(
            recommend(&seen_all, "eve", RecommendationStrategy::Favorite, None),
            Err(ActionError::NoResult(RecommendationStrategy::Favorite))
        );
    }

    #[test]
    fn test_search_sorts_ascending_and_skips_seen() {
        let c = catalog(vec![user("ana", Subscription::Premium, &[], &[])]);
        assert_eq!(
            recommend(&c, "ana", RecommendationStrategy::Search, Some("Drama")),
            Ok(Recommendation::Titles(vec!["Dark".to_string(), "Heat".to_string()]))
        );

        let seen = catalog(vec![user("bob", Subscription::Premium, &[("Dark", 1)], &[])]);
        assert_eq!(
            recommend(&seen, "bob", RecommendationStrategy::Search, Some("Drama")),
            Ok(Recommendation::Titles(vec!["Heat".to_string()]))
        );
        assert_eq!(
            recommend(&seen, "bob", RecommendationStrategy::Search, Some("Western")),
            Err(ActionError::NoResult(RecommendationStrategy::Search))
        );
    }

    #[test]
    fn test_search_without_genre() {
        let c = catalog(vec![
            user("ana", Subscription::Premium, &[], &[]),
            user("bob", Subscription::Basic, &[], &[]),
        ]);
        assert_eq!(
            recommend(&c, "ana", RecommendationStrategy::Search, None),
            Err(ActionError::NoResult(RecommendationStrategy::Search))
        );
        assert_eq!(
            recommend(&c, "bob", RecommendationStrategy::Search, None),
            Err(ActionError::SubscriptionNotEligible(RecommendationStrategy::Search))
        );
    }
}
