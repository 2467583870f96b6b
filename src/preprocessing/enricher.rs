//! Derived-column computation for the cleaned catalog table.
//!
//! All seven features are pure, row-local functions of existing columns,
//! evaluated after the missing-value fill. The country→continent table and
//! the kids-ratings set are fixed data, kept as constants rather than logic.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use polars::prelude::*;
use std::collections::HashMap;

use crate::catalog::{
    ADDED_YEAR, CAST, CAST_COUNT, CONTENT_AGE, CONTINENT, COUNTRY, GENRE_COUNT, IS_KIDS_CONTENT,
    LISTED_IN, PANDEMIC_CONTENT, RATING, RELEASE_YEAR, SENTINEL, TIME_TO_NETFLIX,
};

/// Ratings that mark a title as children's content.
pub const KIDS_RATINGS: [&str; 5] = ["G", "PG", "TV-G", "TV-Y", "TV-Y7"];

/// Fixed country→continent lookup. Countries not listed map to "Other".
pub static CONTINENT_BY_COUNTRY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("United States", "North America"),
        ("Canada", "North America"),
        ("Mexico", "North America"),
        ("India", "Asia"),
        ("Japan", "Asia"),
        ("South Korea", "Asia"),
        ("China", "Asia"),
        ("United Kingdom", "Europe"),
        ("France", "Europe"),
        ("Germany", "Europe"),
        ("Spain", "Europe"),
        ("Brazil", "South America"),
        ("Australia", "Oceania"),
    ])
});

/// Entries in a comma-separated list cell; 0 for the sentinel.
pub fn count_separated_entries(value: &str) -> i32 {
    if value == SENTINEL {
        0
    } else {
        value.split(", ").count() as i32
    }
}

/// Whether a rating string marks children's content. Exact match only.
pub fn is_kids_rating(rating: &str) -> bool {
    KIDS_RATINGS.contains(&rating)
}

/// Continent for a country cell: the sentinel maps to itself, otherwise the
/// first comma-separated token is looked up, falling back to "Other".
pub fn map_continent(country: &str) -> &'static str {
    if country == SENTINEL {
        return SENTINEL;
    }
    let first = country.split(',').next().unwrap_or(country);
    CONTINENT_BY_COUNTRY.get(first).copied().unwrap_or("Other")
}

/// Enricher appending the derived feature columns
pub struct FeatureEnricher {
    current_year: i32,
}

impl FeatureEnricher {
    /// Create an enricher anchored to the current UTC calendar year
    pub fn new() -> Self {
        Self::with_current_year(Utc::now().year())
    }

    /// Create an enricher anchored to a fixed year (deterministic tests)
    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Append the seven feature columns, left to right. Expects the table
    /// to be past the fill stage: list/rating/country cells are text and
    /// never null, `release_year` is Int64 and `added_year` Int32.
    pub fn enrich(&self, mut df: DataFrame) -> PolarsResult<DataFrame> {
        let release_years: Vec<Option<i64>> =
            df.column(RELEASE_YEAR)?.i64()?.into_iter().collect();
        let added_years: Vec<Option<i32>> = df.column(ADDED_YEAR)?.i32()?.into_iter().collect();

        let content_age: Vec<Option<i64>> = release_years
            .iter()
            .map(|y| y.map(|y| i64::from(self.current_year) - y))
            .collect();

        let time_to_netflix: Vec<Option<i64>> = release_years
            .iter()
            .zip(&added_years)
            .map(|(release, added)| match (release, added) {
                (Some(release), Some(added)) => Some(i64::from(*added) - release),
                _ => None,
            })
            .collect();

        let genre_count: Vec<i32> = df
            .column(LISTED_IN)?
            .str()?
            .into_iter()
            .map(|v| v.map_or(0, count_separated_entries))
            .collect();

        let cast_count: Vec<i32> = df
            .column(CAST)?
            .str()?
            .into_iter()
            .map(|v| v.map_or(0, count_separated_entries))
            .collect();

        let is_kids: Vec<i32> = df
            .column(RATING)?
            .str()?
            .into_iter()
            .map(|r| r.map_or(0, |r| i32::from(is_kids_rating(r))))
            .collect();

        let continents: Vec<&str> = df
            .column(COUNTRY)?
            .str()?
            .into_iter()
            .map(|c| map_continent(c.unwrap_or(SENTINEL)))
            .collect();

        let pandemic: Vec<i32> = release_years
            .iter()
            .map(|y| y.map_or(0, |y| i32::from((2019..=2021).contains(&y))))
            .collect();

        df.with_column(Series::new(CONTENT_AGE.into(), content_age))?;
        df.with_column(Series::new(TIME_TO_NETFLIX.into(), time_to_netflix))?;
        df.with_column(Series::new(GENRE_COUNT.into(), genre_count))?;
        df.with_column(Series::new(CAST_COUNT.into(), cast_count))?;
        df.with_column(Series::new(IS_KIDS_CONTENT.into(), is_kids))?;
        df.with_column(Series::new(CONTINENT.into(), continents))?;
        df.with_column(Series::new(PANDEMIC_CONTENT.into(), pandemic))?;

        Ok(df)
    }
}

impl Default for FeatureEnricher {
    fn default() -> Self {
        Self::new()
    }
}
