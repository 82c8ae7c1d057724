use serde::{Deserialize, Serialize};

/// Which variant of show a query or lookup targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ShowType {
    Movie,
    Serial,
}

/// A single season of a serial, with the grades it received
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    /// 1-based season number used when rating
    pub index: u32,
    /// Duration in minutes
    pub duration: u32,
    pub ratings: Vec<f64>,
}

impl Season {
    pub fn new(index: u32, duration: u32) -> Self {
        Self {
            index,
            duration,
            ratings: Vec::new(),
        }
    }
}

/// Variant-specific part of a show
#[derive(Debug, Clone, PartialEq)]
pub enum ShowKind {
    Movie { duration: u32, ratings: Vec<f64> },
    Serial { seasons: Vec<Season> },
}

/// A movie or serial in the catalog. The title is the unique key.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
    pub cast: Vec<String>,
    pub kind: ShowKind,
}

impl Show {
    /// Creates a movie with no ratings yet
    pub fn movie(
        title: impl Into<String>,
        year: i32,
        duration: u32,
        genres: Vec<String>,
        cast: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            genres,
            cast,
            kind: ShowKind::Movie {
                duration,
                ratings: Vec::new(),
            },
        }
    }

    /// Creates a serial from its seasons
    pub fn serial(
        title: impl Into<String>,
        year: i32,
        seasons: Vec<Season>,
        genres: Vec<String>,
        cast: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            genres,
            cast,
            kind: ShowKind::Serial { seasons },
        }
    }

    pub fn show_type(&self) -> ShowType {
        match self.kind {
            ShowKind::Movie { .. } => ShowType::Movie,
            ShowKind::Serial { .. } => ShowType::Serial,
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Records a grade on the show.
    ///
    /// Movies ignore `season`. Serials store the grade on the season whose
    /// index matches; a grade for an unknown season is dropped.
    pub fn receive_rating(&mut self, grade: f64, season: Option<u32>) {
        match &mut self.kind {
            ShowKind::Movie { ratings, .. } => ratings.push(grade),
            ShowKind::Serial { seasons } => {
                if let Some(target) = seasons.iter_mut().find(|s| Some(s.index) == season) {
                    target.ratings.push(grade);
                } else {
                    tracing::debug!(
                        title = %self.title,
                        season = ?season,
                        "Grade dropped for unknown season"
                    );
                }
            }
        }
    }
}
