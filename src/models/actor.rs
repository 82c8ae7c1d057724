use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};

/// Award kinds an actor can receive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Award {
    BestPerformance,
    BestDirector,
    PeopleChoiceAward,
    BestSupportingActor,
    BestScreenplay,
}

impl Award {
    pub fn as_str(&self) -> &'static str {
        match self {
            Award::BestPerformance => "BEST_PERFORMANCE",
            Award::BestDirector => "BEST_DIRECTOR",
            Award::PeopleChoiceAward => "PEOPLE_CHOICE_AWARD",
            Award::BestSupportingActor => "BEST_SUPPORTING_ACTOR",
            Award::BestScreenplay => "BEST_SCREENPLAY",
        }
    }
}

impl Display for Award {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Award {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEST_PERFORMANCE" => Ok(Award::BestPerformance),
            "BEST_DIRECTOR" => Ok(Award::BestDirector),
            "PEOPLE_CHOICE_AWARD" => Ok(Award::PeopleChoiceAward),
            "BEST_SUPPORTING_ACTOR" => Ok(Award::BestSupportingActor),
            "BEST_SCREENPLAY" => Ok(Award::BestScreenplay),
            other => Err(format!("unknown award: {}", other)),
        }
    }
}

/// An actor with their awards and resolved filmography
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub name: String,
    pub career_description: String,
    pub awards: HashMap<Award, u32>,
    /// Positions of the actor's shows in the catalog, fixed at load time
    pub filmography: Vec<usize>,
}

impl Actor {
    /// Returns true when the actor holds every requested award.
    ///
    /// An award name that does not parse can never be held.
    pub fn has_awards<S: AsRef<str>>(&self, wanted: &[S]) -> bool {
        wanted.iter().all(|name| {
            name.as_ref()
                .parse::<Award>()
                .map(|award| self.awards.contains_key(&award))
                .unwrap_or(false)
        })
    }

    /// Returns true when every pattern of `filter` matches the career
    /// description.
    pub fn has_keywords(&self, filter: &KeywordFilter) -> bool {
        filter.matches(&self.career_description)
    }
}

/// Whole-word keyword patterns, compiled once per query.
///
/// A keyword matches case-insensitively when bounded on each side by a space,
/// period, comma or hyphen, or by either end of the text.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    patterns: Vec<Regex>,
}

impl KeywordFilter {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let patterns = keywords
            .iter()
            .map(|keyword| {
                Regex::new(&format!(
                    r"(?i)(?:^|[ .,\-]){}(?:$|[ .,\-])",
                    regex::escape(keyword.as_ref())
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().all(|re| re.is_match(text))
    }
}
