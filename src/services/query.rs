use std::cmp::Ordering;

use crate::{
    catalog::Catalog,
    models::{
        ActorCriterion, ActorQuery, KeywordFilter, Show, ShowCriterion, ShowFilter, ShowQuery,
        SortOrder, UserCriterion, UserQuery,
    },
    services::metrics::{self, ShowMetrics},
};

/// Shared ranking stage of every query.
///
/// Sorts ascending with `compare`, reverses the whole list for descending
/// order, then keeps entries accepted by `keep` up to `limit`. Rejected
/// entries do not count towards the limit.
fn rank<T>(
    mut entries: Vec<T>,
    order: SortOrder,
    compare: impl FnMut(&T, &T) -> Ordering,
    keep: impl FnMut(&T) -> bool,
    limit: Option<usize>,
) -> Vec<T> {
    entries.sort_by(compare);
    if order == SortOrder::Desc {
        entries.reverse();
    }
    entries
        .into_iter()
        .filter(keep)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Applies the year filter, then the genre filter.
///
/// The genre stage scans the year-filtered shows once per requested genre and
/// appends every match, so a show carrying two requested genres is listed
/// twice.
fn filter_shows<'a>(shows: &'a [Show], filter: &ShowFilter) -> Vec<&'a Show> {
    let by_year: Vec<&Show> = match filter.year {
        Some(year) => shows.iter().filter(|s| s.year == year).collect(),
        None => shows.iter().collect(),
    };

    if filter.genres.is_empty() {
        return by_year;
    }

    filter
        .genres
        .iter()
        .flat_map(|genre| by_year.iter().copied().filter(move |s| s.has_genre(genre)))
        .collect()
}

/// Titles of the top shows of one type for the query's criterion
pub fn query_shows(catalog: &Catalog, query: &ShowQuery) -> Vec<String> {
    let filtered = filter_shows(catalog.shows_of_type(query.show_type), &query.filter);
    let scored: Vec<(&Show, ShowMetrics)> = filtered
        .into_iter()
        .map(|show| (show, ShowMetrics::compute(show, catalog.users())))
        .collect();

    tracing::debug!(
        show_type = ?query.show_type,
        criterion = ?query.criterion,
        candidates = scored.len(),
        "Ranking shows"
    );

    let by_title = |a: &(&Show, ShowMetrics), b: &(&Show, ShowMetrics)| a.0.title.cmp(&b.0.title);
    let limit = Some(query.limit);

    let ranked = match query.criterion {
        ShowCriterion::Ratings => rank(
            scored,
            query.order,
            |a, b| a.1.rating.total_cmp(&b.1.rating).then_with(|| by_title(a, b)),
            |e| e.1.rating > 0.0,
            limit,
        ),
        ShowCriterion::Favorite => rank(
            scored,
            query.order,
            |a, b| {
                a.1.times_favorite
                    .cmp(&b.1.times_favorite)
                    .then_with(|| by_title(a, b))
            },
            |e| e.1.times_favorite > 0,
            limit,
        ),
        ShowCriterion::MostViewed => rank(
            scored,
            query.order,
            |a, b| {
                a.1.times_viewed
                    .cmp(&b.1.times_viewed)
                    .then_with(|| by_title(a, b))
            },
            |e| e.1.times_viewed > 0,
            limit,
        ),
        ShowCriterion::Longest => rank(
            scored,
            query.order,
            |a, b| a.1.total_duration.cmp(&b.1.total_duration),
            |_| true,
            limit,
        ),
    };

    ranked
        .into_iter()
        .map(|(show, _)| show.title.clone())
        .collect()
}

/// Names of the actors matching the query's criterion
pub fn query_actors(catalog: &Catalog, query: &ActorQuery) -> Vec<String> {
    let actors = catalog.actors();

    let names: Vec<&str> = match query.criterion {
        ActorCriterion::Average => {
            let scored: Vec<(&str, f64)> = actors
                .iter()
                .map(|a| (a.name.as_str(), metrics::actor_rating(a, catalog)))
                .collect();
            rank(
                scored,
                query.order,
                |a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)),
                |e| e.1 > 0.0,
                Some(query.limit),
            )
            .into_iter()
            .map(|(name, _)| name)
            .collect()
        }
        ActorCriterion::Awards => {
            let scored: Vec<(&str, u32)> = actors
                .iter()
                .filter(|a| a.has_awards(query.awards.as_slice()))
                .map(|a| (a.name.as_str(), metrics::award_total(a)))
                .collect();
            rank(
                scored,
                query.order,
                |a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)),
                |_| true,
                None,
            )
            .into_iter()
            .map(|(name, _)| name)
            .collect()
        }
        ActorCriterion::FilterDescription => {
            let filter = match KeywordFilter::new(query.keywords.as_slice()) {
                Ok(filter) => filter,
                Err(e) => {
                    tracing::warn!(error = %e, "Keyword filter failed to compile");
                    return Vec::new();
                }
            };
            let matching: Vec<&str> = actors
                .iter()
                .filter(|a| a.has_keywords(&filter))
                .map(|a| a.name.as_str())
                .collect();
            rank(matching, query.order, |a, b| a.cmp(b), |_| true, None)
        }
    };

    names.into_iter().map(str::to_string).collect()
}

/// Usernames ranked by the query's criterion
pub fn query_users(catalog: &Catalog, query: &UserQuery) -> Vec<String> {
    match query.criterion {
        UserCriterion::NumRatings => {
            let scored: Vec<(&str, usize)> = catalog
                .users()
                .iter()
                .map(|u| (u.username.as_str(), metrics::rating_count(u)))
                .collect();
            rank(
                scored,
                query.order,
                |a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)),
                |e| e.1 > 0,
                Some(query.limit),
            )
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect()
        }
    }
}
