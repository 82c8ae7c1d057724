/// Genre tags the system knows about, in their canonical order.
///
/// Popularity ranking walks this list; tags found only in the catalog are
/// appended after it.
pub const KNOWN_GENRES: [&str; 20] = [
    "Action",
    "Adventure",
    "Drama",
    "Comedy",
    "Crime",
    "Romance",
    "War",
    "History",
    "Thriller",
    "Mystery",
    "Family",
    "Horror",
    "Fantasy",
    "Science Fiction",
    "Action & Adventure",
    "Sci-Fi & Fantasy",
    "Animation",
    "Kids",
    "Western",
    "TV Movie",
];

/// Summed view count of every show carrying `genre`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenrePopularity {
    pub genre: String,
    pub popularity: u32,
}
