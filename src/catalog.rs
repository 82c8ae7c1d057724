use std::collections::{HashMap, HashSet};

use crate::models::{Actor, CatalogInput, Show, ShowType, User, KNOWN_GENRES};

/// In-memory catalog of shows, actors and users.
///
/// Shows are kept in catalog order: every movie, then every serial, each in
/// input order. Actor filmographies point into that list and are resolved
/// once, when the catalog is built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shows: Vec<Show>,
    movie_count: usize,
    actors: Vec<Actor>,
    users: Vec<User>,
    show_index: HashMap<String, usize>,
    user_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(input: CatalogInput) -> Self {
        let movie_count = input.movies.len();
        let shows: Vec<Show> = input
            .movies
            .into_iter()
            .map(Show::from)
            .chain(input.serials.into_iter().map(Show::from))
            .collect();

        // First occurrence wins on duplicate titles
        let mut show_index = HashMap::new();
        for (position, show) in shows.iter().enumerate() {
            show_index.entry(show.title.clone()).or_insert(position);
        }

        let users: Vec<User> = input.users.into_iter().map(User::from).collect();
        let mut user_index = HashMap::new();
        for (position, user) in users.iter().enumerate() {
            user_index.entry(user.username.clone()).or_insert(position);
        }

        let actors = input
            .actors
            .into_iter()
            .map(|record| {
                let titles: HashSet<&str> =
                    record.filmography.iter().map(String::as_str).collect();
                let filmography: Vec<usize> = shows
                    .iter()
                    .enumerate()
                    .filter(|(_, show)| titles.contains(show.title.as_str()))
                    .map(|(position, _)| position)
                    .collect();

                if filmography.len() < titles.len() {
                    tracing::debug!(
                        actor = %record.name,
                        declared = titles.len(),
                        resolved = filmography.len(),
                        "Dropped filmography titles missing from catalog"
                    );
                }

                Actor {
                    name: record.name,
                    career_description: record.career_description,
                    awards: record.awards,
                    filmography,
                }
            })
            .collect();

        let catalog = Self {
            shows,
            movie_count,
            actors,
            users,
            show_index,
            user_index,
        };

        tracing::info!(
            movies = catalog.movies().len(),
            serials = catalog.serials().len(),
            actors = catalog.actors.len(),
            users = catalog.users.len(),
            "Catalog built"
        );

        catalog
    }

    /// Every show in catalog order
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn movies(&self) -> &[Show] {
        &self.shows[..self.movie_count]
    }

    pub fn serials(&self) -> &[Show] {
        &self.shows[self.movie_count..]
    }

    pub fn shows_of_type(&self, show_type: ShowType) -> &[Show] {
        match show_type {
            ShowType::Movie => self.movies(),
            ShowType::Serial => self.serials(),
        }
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn show(&self, title: &str) -> Option<&Show> {
        self.show_index.get(title).map(|&i| &self.shows[i])
    }

    pub fn user(&self, username: &str) -> Option<&User> {
        self.user_index.get(username).map(|&i| &self.users[i])
    }

    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        let position = *self.user_index.get(username)?;
        self.users.get_mut(position)
    }

    /// Mutable access to a user and a show at once, for rating
    pub fn user_and_show_mut(
        &mut self,
        username: &str,
        title: &str,
    ) -> (Option<&mut User>, Option<&mut Show>) {
        let user = match self.user_index.get(username) {
            Some(&i) => self.users.get_mut(i),
            None => None,
        };
        let show = match self.show_index.get(title) {
            Some(&i) => self.shows.get_mut(i),
            None => None,
        };
        (user, show)
    }

    /// Shows in the actor's filmography, in catalog order
    pub fn filmography<'a>(&'a self, actor: &'a Actor) -> impl Iterator<Item = &'a Show> + 'a {
        actor
            .filmography
            .iter()
            .filter_map(move |&i| self.shows.get(i))
    }

    /// Canonical genres followed by any other tag used in the catalog
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = KNOWN_GENRES.iter().map(|g| g.to_string()).collect();
        for show in &self.shows {
            for genre in &show.genres {
                if !genres.contains(genre) {
                    genres.push(genre.clone());
                }
            }
        }
        genres
    }
}
