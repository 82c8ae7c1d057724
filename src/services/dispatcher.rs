use crate::{
    catalog::Catalog,
    error::ActionError,
    middleware::batch_id::BatchId,
    models::{Action, ActionOutcome, ActionRecord, Command, Query},
    services::{
        query,
        recommendations::{self, Recommendation},
        user_actions,
    },
};

/// Runs every record against the catalog, in order, one outcome per record
pub fn process_batch(
    catalog: &mut Catalog,
    batch_id: BatchId,
    records: &[ActionRecord],
) -> Vec<ActionOutcome> {
    let span = tracing::info_span!("batch", id = %batch_id, actions = records.len());
    let _guard = span.enter();

    let outcomes: Vec<ActionOutcome> = records
        .iter()
        .map(|record| process_action(catalog, record))
        .collect();

    tracing::info!(processed = outcomes.len(), "Batch completed");
    outcomes
}

/// Runs one record; malformed records yield an error message, never a failure
pub fn process_action(catalog: &mut Catalog, record: &ActionRecord) -> ActionOutcome {
    let message = match Action::try_from(record) {
        Ok(action) => execute(catalog, &action),
        Err(e) => {
            tracing::warn!(id = record.id, error = %e, "Rejected action record");
            e.to_string()
        }
    };

    ActionOutcome {
        id: record.id,
        message,
    }
}

/// Executes a validated action and renders its result message
pub fn execute(catalog: &mut Catalog, action: &Action) -> String {
    tracing::debug!(id = action.id(), ?action, "Dispatching action");

    match action {
        Action::Command { username, command, .. } => {
            match run_command(catalog, username, command) {
                Ok(message) | Err(message) => message,
            }
        }
        Action::Query { query: request, .. } => {
            let names = match request {
                Query::Actors(q) => query::query_actors(catalog, q),
                Query::Shows(q) => query::query_shows(catalog, q),
                Query::Users(q) => query::query_users(catalog, q),
            };
            format!("Query result: {}", list(&names))
        }
        Action::Recommendation {
            username,
            strategy,
            genre,
            ..
        } => {
            match recommendations::recommend(catalog, username, *strategy, genre.as_deref()) {
                Ok(Recommendation::Title(title)) => format!("{} result: {}", strategy, title),
                Ok(Recommendation::Titles(titles)) => {
                    format!("{} result: {}", strategy, list(&titles))
                }
                // An unknown user gets the same rejection as an empty result
                Err(ActionError::UserNotFound(_)) => {
                    ActionError::NoResult(*strategy).to_string()
                }
                Err(e) => e.to_string(),
            }
        }
    }
}

fn run_command(catalog: &mut Catalog, username: &str, command: &Command) -> Result<String, String> {
    let outcome = match command {
        Command::Favorite { title } => {
            let user = catalog
                .user_mut(username)
                .ok_or_else(|| ActionError::UserNotFound(username.to_string()).to_string())?;
            user_actions::add_favorite(user, title)
        }
        Command::View { title } => {
            let user = catalog
                .user_mut(username)
                .ok_or_else(|| ActionError::UserNotFound(username.to_string()).to_string())?;
            Ok(user_actions::add_view(user, title))
        }
        Command::Rating {
            title,
            grade,
            season,
        } => match catalog.user_and_show_mut(username, title) {
            (None, _) => Err(ActionError::UserNotFound(username.to_string())),
            (Some(_), None) => Err(ActionError::ShowNotFound(title.to_string())),
            (Some(user), Some(show)) => user_actions::add_rating(user, show, *grade, *season),
        },
    };

    outcome.map(|o| o.to_string()).map_err(|e| e.to_string())
}

/// Renders names the way result lists are reported: `[a, b, c]`
fn list(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CatalogInput, MovieRecord, SeasonRecord, SerialRecord, Subscription, UserRecord,
    };
    use std::collections::HashMap;

    fn catalog() -> Catalog {
        Catalog::new(CatalogInput {
            movies: vec![MovieRecord {
                name: "Heat".to_string(),
                year: 1995,
                duration: 170,
                genres: vec!["Crime".to_string()],
                cast: vec![],
            }],
            serials: vec![SerialRecord {
                name: "Dark".to_string(),
                year: 2017,
                genres: vec!["Drama".to_string()],
                cast: vec![],
                seasons: vec![SeasonRecord {
                    duration: 60,
                    season: None,
                }],
            }],
            users: vec![UserRecord {
                username: "ana".to_string(),
                subscription: Subscription::Basic,
                history: HashMap::from([("Dark".to_string(), 1)]),
                favorites: vec![],
            }],
            ..CatalogInput::default()
        })
    }

    fn record(json: serde_json::Value) -> ActionRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_batch_runs_in_order() {
        let mut catalog = catalog();
        let records = vec![
            record(serde_json::json!({"id": 1, "action_type": "command", "type": "favorite", "user": "ana", "title": "Heat"})),
            record(serde_json::json!({"id": 2, "action_type": "command", "type": "view", "user": "ana", "title": "Heat"})),
            record(serde_json::json!({"id": 3, "action_type": "command", "type": "favorite", "user": "ana", "title": "Heat"})),
            record(serde_json::json!({"id": 4, "action_type": "command", "type": "rating", "user": "ana", "title": "Heat", "grade": 8, "season": 0})),
            record(serde_json::json!({"id": 5, "action_type": "query", "object_type": "movies", "number": 3, "sort_type": "desc", "criteria": "ratings", "filters": [[null], [null], null, null]})),
        ];

        let messages: Vec<String> = process_batch(&mut catalog, BatchId::new(), &records)
            .into_iter()
            .map(|o| o.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "error -> Heat is not seen",
                "success -> Heat was viewed with total views of 1",
                "success -> Heat was added as favourite",
                "success -> Heat was rated with 8.0 by ana",
                "Query result: [Heat]",
            ]
        );
    }

    #[test]
    fn test_unknown_user_and_show() {
        let mut catalog = catalog();
        let ghost = record(serde_json::json!({"id": 1, "action_type": "command", "type": "view", "user": "ghost", "title": "Heat"}));
        assert_eq!(
            process_action(&mut catalog, &ghost).message,
            "error -> user does not exist"
        );

        let missing = record(serde_json::json!({"id": 2, "action_type": "command", "type": "rating", "user": "ana", "title": "Ronin", "grade": 5}));
        assert_eq!(
            process_action(&mut catalog, &missing).message,
            "error -> show does not exist"
        );
    }

    #[test]
    fn test_recommendation_messages() {
        let mut catalog = catalog();
        let standard = record(serde_json::json!({"id": 1, "action_type": "recommendation", "type": "standard", "user": "ana"}));
        assert_eq!(
            process_action(&mut catalog, &standard).message,
            "StandardRecommendation result: Heat"
        );

        let gated = record(serde_json::json!({"id": 2, "action_type": "recommendation", "type": "search", "user": "ana", "genre": "Crime"}));
        assert_eq!(
            process_action(&mut catalog, &gated).message,
            "SearchRecommendation cannot be applied!"
        );

        let ghost = record(serde_json::json!({"id": 3, "action_type": "recommendation", "type": "best_unseen", "user": "ghost"}));
        assert_eq!(
            process_action(&mut catalog, &ghost).message,
            "BestRatedUnseenRecommendation cannot be applied!"
        );
    }

    #[test]
    fn test_empty_query_result() {
        let mut catalog = catalog();
        let users = record(serde_json::json!({"id": 1, "action_type": "query", "object_type": "users", "number": 3, "sort_type": "asc", "criteria": "num_ratings"}));
        assert_eq!(process_action(&mut catalog, &users).message, "Query result: []");
    }

    #[test]
    fn test_incomplete_records_keep_domain_messages() {
        let mut catalog = catalog();
        let search = record(serde_json::json!({"id": 1, "action_type": "recommendation", "type": "search", "user": "ana"}));
        assert_eq!(
            process_action(&mut catalog, &search).message,
            "SearchRecommendation cannot be applied!"
        );

        let rating = record(serde_json::json!({"id": 2, "action_type": "command", "type": "rating", "user": "ana", "title": "Dark", "grade": 6}));
        assert_eq!(
            process_action(&mut catalog, &rating).message,
            "success -> Dark was rated with 6.0 by ana"
        );
        assert_eq!(
            process_action(&mut catalog, &rating).message,
            "error -> Dark has been already rated"
        );
    }
}
