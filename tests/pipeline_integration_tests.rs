//! End-to-end tests: run the whole pipeline over synthetic catalog files
//! and check the invariants the cleaned table must satisfy.

use catalog_prep::transformations::cleaning;
use catalog_prep::{PrepConfig, PrepError, PrepPipeline};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const FIXTURE_CSV: &str = "\
title,type,country,release_year,date_added,rating,listed_in,cast,director
Show A,Movie,United States,2020,\"January 15, 2021\",PG,\"Children & Family Movies, Comedies\",\"Actor One, Actor Two\",Jane Doe
Show A,Movie,United States,2020,\"January 15, 2021\",PG,\"Children & Family Movies, Comedies\",\"Actor One, Actor Two\",Jane Doe
Show A,Movie,United Kingdom,2020,\"January 15, 2021\",PG,Comedies,Actor One,John Smith
Future Show,Movie,Japan,2025,\"January 1, 2020\",R,Dramas,Actor Three,Someone
Never Added,TV Show,France,2021,,TV-MA,Dramas,Actor Four,Someone Else
Mystery Show,TV Show,,2019,\"June 1, 2020\",TV-Y,Kids' TV,,
";

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("netflix_titles.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(FIXTURE_CSV.as_bytes()).unwrap();
    path
}

fn run_fixture(dir: &TempDir) -> (catalog_prep::PrepOutcome, PathBuf) {
    let input = write_fixture(dir);
    let output = dir.path().join("netflix_titles_updated.xlsx");
    let pipeline = PrepPipeline::with_config(PrepConfig { current_year: 2024 });
    let outcome = pipeline.run_file(&input, &output).unwrap();
    (outcome, output)
}

#[test]
fn test_stage_counts() {
    let dir = TempDir::new().unwrap();
    let (outcome, _) = run_fixture(&dir);

    let report = &outcome.report;
    assert_eq!(report.rows_loaded, 6);
    // One row released after its add date; the never-added row is dropped
    // silently by the same comparison without being reported
    assert_eq!(report.inconsistent_rows, 1);
    assert_eq!(report.exact_duplicates, 1);
    assert_eq!(report.redundant_removed, 1);
    assert_eq!(report.rows_final, 3);
}

#[test]
fn test_final_table_invariants() {
    let dir = TempDir::new().unwrap();
    let (outcome, _) = run_fixture(&dir);
    let df = &outcome.dataframe;

    assert_eq!(df.height(), 3);

    // No cell is null anywhere after the fill stage
    for column in df.get_columns() {
        assert_eq!(column.null_count(), 0, "nulls left in {}", column.name());
    }

    // Composite key (title, type, country) is unique: dedup is a no-op
    let deduped = cleaning::drop_redundant(df).unwrap();
    assert_eq!(deduped.height(), df.height());

    // Every retained row satisfies release_year <= added_year
    let release = df.column("release_year").unwrap().i64().unwrap();
    let added = df.column("added_year").unwrap().i32().unwrap();
    for i in 0..df.height() {
        let release_year = release.get(i).unwrap();
        let added_year = i64::from(added.get(i).unwrap());
        assert!(release_year <= added_year, "row {} inconsistent", i);
    }
}

#[test]
fn test_dedup_is_stable_and_key_aware() {
    let dir = TempDir::new().unwrap();
    let (outcome, _) = run_fixture(&dir);
    let df = &outcome.dataframe;

    let titles = df.column("title").unwrap().str().unwrap();
    let countries = df.column("country").unwrap().str().unwrap();
    let directors = df.column("director").unwrap().str().unwrap();

    // Both Show A rows survive (different countries); among the two
    // identical United States rows the first occurrence was kept
    assert_eq!(titles.get(0), Some("Show A"));
    assert_eq!(countries.get(0), Some("United States"));
    assert_eq!(directors.get(0), Some("Jane Doe"));
    assert_eq!(titles.get(1), Some("Show A"));
    assert_eq!(countries.get(1), Some("United Kingdom"));
    assert_eq!(titles.get(2), Some("Mystery Show"));
}

#[test]
fn test_derived_features() {
    let dir = TempDir::new().unwrap();
    let (outcome, _) = run_fixture(&dir);
    let df = &outcome.dataframe;

    let content_age = df.column("content_age").unwrap().i64().unwrap();
    let time_to = df.column("time_to_netflix").unwrap().i64().unwrap();
    let genres = df.column("genre_count").unwrap().i32().unwrap();
    let casts = df.column("cast_count").unwrap().i32().unwrap();
    let kids = df.column("is_kids_content").unwrap().i32().unwrap();
    let continents = df.column("continent").unwrap().str().unwrap();
    let pandemic = df.column("pandemic_content").unwrap().i32().unwrap();

    // Row 0: Show A / United States, released 2020, added 2021
    assert_eq!(content_age.get(0), Some(4));
    assert_eq!(time_to.get(0), Some(1));
    assert_eq!(genres.get(0), Some(2));
    assert_eq!(casts.get(0), Some(2));
    assert_eq!(kids.get(0), Some(1));
    assert_eq!(continents.get(0), Some("North America"));
    assert_eq!(pandemic.get(0), Some(1));

    // Row 2: Mystery Show had empty country and cast; both were filled with
    // the sentinel before feature derivation
    assert_eq!(continents.get(2), Some("Unknown"));
    assert_eq!(casts.get(2), Some(0));
    assert_eq!(pandemic.get(2), Some(1));

    let directors = df.column("director").unwrap().str().unwrap();
    assert_eq!(directors.get(2), Some("Unknown"));
}

#[test]
fn test_output_file_written_and_overwritten() {
    let dir = TempDir::new().unwrap();
    let (_, output) = run_fixture(&dir);
    assert!(output.exists());
    assert!(std::fs::metadata(&output).unwrap().len() > 0);

    // A second run replaces the workbook in place
    let (_, output) = run_fixture(&dir);
    assert!(output.exists());
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("out.xlsx");

    let err = PrepPipeline::new().run_file(&input, &output).unwrap_err();
    let source = err.downcast_ref::<PrepError>().unwrap();
    assert!(matches!(source, PrepError::Load(_)));
    assert!(!output.exists(), "no output may be produced on failure");
}
