use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::RecommendationStrategy;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Json(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a single action could not be applied.
///
/// These never abort a batch: the `Display` output is the result message
/// reported for the action.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("error -> user does not exist")]
    UserNotFound(String),

    #[error("error -> show does not exist")]
    ShowNotFound(String),

    #[error("error -> {0} is not seen")]
    NotSeen(String),

    #[error("error -> {0} is already in favourite list")]
    AlreadyFavorite(String),

    #[error("error -> {0} has been already rated")]
    AlreadyRated(String),

    #[error("{0} cannot be applied!")]
    SubscriptionNotEligible(RecommendationStrategy),

    #[error("{0} cannot be applied!")]
    NoResult(RecommendationStrategy),

    #[error("error -> invalid action: {0}")]
    InvalidAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        assert_eq!(
            ActionError::NotSeen("Heat".to_string()).to_string(),
            "error -> Heat is not seen"
        );
        assert_eq!(
            ActionError::AlreadyFavorite("Heat".to_string()).to_string(),
            "error -> Heat is already in favourite list"
        );
        assert_eq!(
            ActionError::AlreadyRated("Heat".to_string()).to_string(),
            "error -> Heat has been already rated"
        );
        assert_eq!(
            ActionError::UserNotFound("ghost".to_string()).to_string(),
            "error -> user does not exist"
        );
        assert_eq!(
            ActionError::SubscriptionNotEligible(RecommendationStrategy::Popular).to_string(),
            "PopularRecommendation cannot be applied!"
        );
        assert_eq!(
            ActionError::NoResult(RecommendationStrategy::Search).to_string(),
            "SearchRecommendation cannot be applied!"
        );
    }

    #[test]
    fn test_invalid_input_is_bad_request() {
        let response = AppError::InvalidInput("empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
