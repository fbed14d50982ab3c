/// Tests for the geography vocabulary collector.
///
/// These cover vocabulary file creation, the set-difference append, the
/// idempotence of repeated runs, and the header-mismatch guard that must
/// leave the vocabulary file byte-for-byte unchanged.
mod common;

use common::{geog_header_line, read_lines, write_lines};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use vireo::dwc::vocabulary::collect_geography;
use vireo::VireoError;

const INPUT_HEADER: &str = "catalogNumber,continent,country,countryCode,stateProvince,\
county,municipality,waterBody,islandGroup,island,scientificName";

fn composite(
    continent: &str,
    country: &str,
    code: &str,
    state: &str,
    county: &str,
) -> String {
    format!("{}|{}|{}|{}|{}||||", continent, country, code, state, county)
}

#[test]
fn creates_vocabulary_with_header_and_appends_distinct_values() {
    let dir = TempDir::new().unwrap();
    let input = write_lines(
        dir.path(),
        "records.csv",
        &[
            INPUT_HEADER,
            "1,North America,United States,US,Wyoming,Albany,,,,,Vireo olivaceus",
            "2,North America,United States,US,Wyoming,Albany,,,,,Vireo gilvus",
            "3,South America,Chile,CL,,,,,,,Architectonica",
        ],
    );
    let vocab = dir.path().join("dwc_geography.txt");

    let report = collect_geography(&input, &vocab).unwrap();

    assert_eq!(
        report.added_values,
        vec![
            composite("North America", "United States", "US", "Wyoming", "Albany"),
            composite("South America", "Chile", "CL", "", ""),
        ]
    );

    let lines = read_lines(&vocab);
    assert_eq!(lines[0], geog_header_line());
    assert_eq!(lines.len(), 3); // header + 2 distinct values
    assert!(lines[1].ends_with(",,0"));
    assert!(lines[2].ends_with(",,0"));
}

#[test]
fn second_run_adds_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_lines(
        dir.path(),
        "records.csv",
        &[
            INPUT_HEADER,
            "1,Oceania,New Zealand,NZ,Otago,,,,,,Mollusca",
        ],
    );
    let vocab = dir.path().join("dwc_geography.txt");

    let first = collect_geography(&input, &vocab).unwrap();
    assert_eq!(first.added_values.len(), 1);
    let after_first = std::fs::read(&vocab).unwrap();

    let second = collect_geography(&input, &vocab).unwrap();
    assert!(second.added_values.is_empty());
    assert_eq!(std::fs::read(&vocab).unwrap(), after_first);
}

#[test]
fn existing_values_are_never_duplicated() {
    let dir = TempDir::new().unwrap();
    let known = composite("Europe", "Norway", "NO", "", "");
    let header = geog_header_line();
    let known_row = format!("{},,0", known);
    let vocab = write_lines(
        dir.path(),
        "dwc_geography.txt",
        &[header.as_str(), known_row.as_str()],
    );
    let input = write_lines(
        dir.path(),
        "records.csv",
        &[
            INPUT_HEADER,
            "1,Europe,Norway,NO,,,,,,,Gadus morhua",
            "2,Europe,Iceland,IS,,,,,,,Gadus morhua",
        ],
    );

    let report = collect_geography(&input, &vocab).unwrap();

    // added ∩ existing = ∅, and added ∪ existing covers the input
    assert_eq!(
        report.added_values,
        vec![composite("Europe", "Iceland", "IS", "", "")]
    );
    let lines = read_lines(&vocab);
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.starts_with("Europe|Norway"))
            .count(),
        1
    );
}

#[test]
fn header_mismatch_fails_without_touching_the_file() {
    let dir = TempDir::new().unwrap();
    let vocab = write_lines(
        dir.path(),
        "dwc_geography.txt",
        &["geography,standard,checked", "Europe|Norway,,0"],
    );
    let input = write_lines(
        dir.path(),
        "records.csv",
        &[INPUT_HEADER, "1,Europe,Norway,NO,,,,,,,Gadus morhua"],
    );
    let before = std::fs::read(&vocab).unwrap();

    let err = collect_geography(&input, &vocab).unwrap_err();

    match err {
        VireoError::Vocabulary(message) => {
            assert!(message.contains("dwc_geography.txt"));
        }
        other => panic!("expected vocabulary error, got {:?}", other),
    }
    assert_eq!(std::fs::read(&vocab).unwrap(), before);
}

#[test]
fn missing_input_fails_before_creating_the_vocabulary() {
    let dir = TempDir::new().unwrap();
    let vocab = dir.path().join("dwc_geography.txt");

    let result = collect_geography(&dir.path().join("absent.csv"), &vocab);

    assert!(result.is_err());
    assert!(!vocab.exists());
}

#[test]
fn terms_missing_from_the_input_contribute_empty_components() {
    let dir = TempDir::new().unwrap();
    let input = write_lines(
        dir.path(),
        "records.csv",
        &["id,country", "1,Chile"],
    );
    let vocab = dir.path().join("dwc_geography.txt");

    let report = collect_geography(&input, &vocab).unwrap();

    assert_eq!(report.added_values, vec!["|Chile|||||||".to_string()]);
}

#[test]
fn values_with_embedded_delimiters_survive_a_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_lines(
        dir.path(),
        "records.csv",
        &[
            INPUT_HEADER,
            "1,North America,\"United States, of America\",US,,,,,,,Vireo",
        ],
    );
    let vocab = dir.path().join("dwc_geography.txt");

    let first = collect_geography(&input, &vocab).unwrap();
    assert_eq!(
        first.added_values,
        vec![composite("North America", "United States, of America", "US", "", "")]
    );

    // The quoted append must read back as the same value
    let second = collect_geography(&input, &vocab).unwrap();
    assert!(second.added_values.is_empty());
}
