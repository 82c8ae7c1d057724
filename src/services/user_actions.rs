use std::fmt::Display;

use crate::{
    error::ActionError,
    models::{Show, ShowKind, User},
};

/// Successful result of a user command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Favorited {
        title: String,
    },
    Viewed {
        title: String,
        total_views: u32,
    },
    Rated {
        title: String,
        grade: f64,
        username: String,
    },
}

impl Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::Favorited { title } => {
                write!(f, "success -> {} was added as favourite", title)
            }
            CommandOutcome::Viewed { title, total_views } => write!(
                f,
                "success -> {} was viewed with total views of {}",
                title, total_views
            ),
            // Debug formatting keeps the decimal point on whole grades (7.0)
            CommandOutcome::Rated {
                title,
                grade,
                username,
            } => write!(
                f,
                "success -> {} was rated with {:?} by {}",
                title, grade, username
            ),
        }
    }
}

/// Adds a watched show to the user's favorites
pub fn add_favorite(user: &mut User, title: &str) -> Result<CommandOutcome, ActionError> {
    if user.is_favorite(title) {
        return Err(ActionError::AlreadyFavorite(title.to_string()));
    }
    if !user.has_seen(title) {
        return Err(ActionError::NotSeen(title.to_string()));
    }

    user.favorites.push(title.to_string());
    Ok(CommandOutcome::Favorited {
        title: title.to_string(),
    })
}

/// Records one more view of `title`, starting the count at 1
pub fn add_view(user: &mut User, title: &str) -> CommandOutcome {
    let views = user.history.entry(title.to_string()).or_insert(0);
    *views += 1;

    CommandOutcome::Viewed {
        title: title.to_string(),
        total_views: *views,
    }
}

/// Grades a watched show once per movie, or once per serial season.
///
/// `season` is only consulted for serials, where a missing one means season 0.
/// A season the serial does not have is still marked rated, but its grade is
/// dropped.
pub fn add_rating(
    user: &mut User,
    show: &mut Show,
    grade: f64,
    season: Option<u32>,
) -> Result<CommandOutcome, ActionError> {
    let title = show.title.clone();
    if !user.has_seen(&title) {
        return Err(ActionError::NotSeen(title));
    }

    let season = match show.kind {
        ShowKind::Movie { .. } => {
            if user.rated_movies.contains(&title) {
                return Err(ActionError::AlreadyRated(title));
            }
            user.rated_movies.insert(title.clone());
            None
        }
        ShowKind::Serial { .. } => {
            let season = season.unwrap_or(0);
            if user.has_rated_season(&title, season) {
                return Err(ActionError::AlreadyRated(title));
            }
            user.rated_seasons
                .entry(title.clone())
                .or_default()
                .insert(season);
            Some(season)
        }
    };

    show.receive_rating(grade, season);
    Ok(CommandOutcome::Rated {
        title,
        grade,
        username: user.username.clone(),
    })
}
