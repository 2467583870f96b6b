//! Fixed vocabulary of the catalog table: canonical column names, the
//! missing-value sentinel, and the required input header subset.

pub const TITLE: &str = "title";
pub const CONTENT_TYPE: &str = "type";
pub const COUNTRY: &str = "country";
pub const RELEASE_YEAR: &str = "release_year";
pub const DATE_ADDED: &str = "date_added";
pub const RATING: &str = "rating";
pub const LISTED_IN: &str = "listed_in";
pub const CAST: &str = "cast";

/// Calendar year of `date_added`, derived ahead of the consistency check.
pub const ADDED_YEAR: &str = "added_year";

pub const CONTENT_AGE: &str = "content_age";
pub const TIME_TO_NETFLIX: &str = "time_to_netflix";
pub const GENRE_COUNT: &str = "genre_count";
pub const CAST_COUNT: &str = "cast_count";
pub const IS_KIDS_CONTENT: &str = "is_kids_content";
pub const CONTINENT: &str = "continent";
pub const PANDEMIC_CONTENT: &str = "pandemic_content";

/// Literal written into every cell that was absent in the input.
pub const SENTINEL: &str = "Unknown";

/// Columns the input file must provide; anything else is passed through.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    TITLE,
    CONTENT_TYPE,
    COUNTRY,
    RELEASE_YEAR,
    DATE_ADDED,
    RATING,
    LISTED_IN,
    CAST,
];

/// The one date shape the raw dataset uses, e.g. `September 25, 2021`.
pub const DATE_ADDED_FORMAT: &str = "%B %d, %Y";
