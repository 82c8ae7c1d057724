use serde::{Deserialize, Serialize};

use super::{
    ActorQuery, RecommendationStrategy, ShowFilter, ShowQuery, ShowType, SortOrder, UserQuery,
};
use crate::error::ActionError;

/// A filter slot value; years arrive either as numbers or as strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FilterValue {
    Number(i64),
    Text(String),
}

impl FilterValue {
    pub fn as_text(&self) -> String {
        match self {
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

/// Four-slot filter bundle: years, genres, description keywords, awards
pub type FilterSlots = Vec<Option<Vec<Option<FilterValue>>>>;

/// Raw action record as it appears in the input document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionRecord {
    pub id: u32,
    pub action_type: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "user", default)]
    pub username: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub number: Option<usize>,
    #[serde(default)]
    pub sort_type: Option<String>,
    #[serde(default)]
    pub criteria: Option<String>,
    #[serde(default)]
    pub filters: Option<FilterSlots>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// Result message for one action, in the output document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionOutcome {
    pub id: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Favorite {
        title: String,
    },
    View {
        title: String,
    },
    Rating {
        title: String,
        grade: f64,
        season: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Actors(ActorQuery),
    Shows(ShowQuery),
    Users(UserQuery),
}

/// A validated action, ready to dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Command {
        id: u32,
        username: String,
        command: Command,
    },
    Query {
        id: u32,
        query: Query,
    },
    Recommendation {
        id: u32,
        username: String,
        strategy: RecommendationStrategy,
        genre: Option<String>,
    },
}

impl Action {
    pub fn id(&self) -> u32 {
        match self {
            Action::Command { id, .. } | Action::Query { id, .. } => *id,
            Action::Recommendation { id, .. } => *id,
        }
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ActionError> {
    value
        .as_deref()
        .ok_or_else(|| ActionError::InvalidAction(format!("missing {}", field)))
}

fn parse_field<T>(value: &Option<String>, field: &str) -> Result<T, ActionError>
where
    T: std::str::FromStr<Err = String>,
{
    required(value, field)?
        .parse()
        .map_err(ActionError::InvalidAction)
}

/// Non-null values of filter slot `index`
fn slot(filters: &Option<FilterSlots>, index: usize) -> Vec<String> {
    filters
        .as_ref()
        .and_then(|slots| slots.get(index))
        .and_then(|values| values.as_ref())
        .map(|values| values.iter().flatten().map(FilterValue::as_text).collect())
        .unwrap_or_default()
}

fn parse_query(record: &ActionRecord) -> Result<Query, ActionError> {
    let limit = record.number.unwrap_or(0);
    let order: SortOrder = parse_field(&record.sort_type, "sort_type")?;
    let object_type = required(&record.object_type, "object_type")?;

    match object_type {
        "actors" => Ok(Query::Actors(ActorQuery {
            limit,
            keywords: slot(&record.filters, 2),
            awards: slot(&record.filters, 3),
            order,
            criterion: parse_field(&record.criteria, "criteria")?,
        })),
        "movies" | "shows" => {
            let year = match slot(&record.filters, 0).first() {
                Some(year) => Some(year.trim().parse::<i32>().map_err(|_| {
                    ActionError::InvalidAction(format!("invalid year filter: {}", year))
                })?),
                None => None,
            };
            let show_type = if object_type == "movies" {
                ShowType::Movie
            } else {
                ShowType::Serial
            };
            Ok(Query::Shows(ShowQuery {
                show_type,
                limit,
                filter: ShowFilter {
                    year,
                    genres: slot(&record.filters, 1),
                },
                order,
                criterion: parse_field(&record.criteria, "criteria")?,
            }))
        }
        "users" => Ok(Query::Users(UserQuery {
            limit,
            order,
            criterion: parse_field(&record.criteria, "criteria")?,
        })),
        other => Err(ActionError::InvalidAction(format!(
            "unknown object type: {}",
            other
        ))),
    }
}

impl TryFrom<&ActionRecord> for Action {
    type Error = ActionError;

    fn try_from(record: &ActionRecord) -> Result<Self, Self::Error> {
        let id = record.id;
        match record.action_type.as_str() {
            "command" => {
                let username = required(&record.username, "user")?.to_string();
                let title = required(&record.title, "title")?.to_string();
                let command = match required(&record.kind, "type")? {
                    "favorite" => Command::Favorite { title },
                    "view" => Command::View { title },
                    "rating" => Command::Rating {
                        title,
                        grade: record.grade.ok_or_else(|| {
                            ActionError::InvalidAction("missing grade".to_string())
                        })?,
                        season: record.season,
                    },
                    other => {
                        return Err(ActionError::InvalidAction(format!(
                            "unknown command type: {}",
                            other
                        )))
                    }
                };
                Ok(Action::Command {
                    id,
                    username,
                    command,
                })
            }
            "query" => Ok(Action::Query {
                id,
                query: parse_query(record)?,
            }),
            "recommendation" => {
                let strategy: RecommendationStrategy = parse_field(&record.kind, "type")?;
                Ok(Action::Recommendation {
                    id,
                    username: required(&record.username, "user")?.to_string(),
                    strategy,
                    genre: record.genre.clone(),
                })
            }
            other => Err(ActionError::InvalidAction(format!(
                "unknown action type: {}",
                other
            ))),
        }
    }
}
