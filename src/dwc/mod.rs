//! Darwin Core flat-file helpers: geography term vocabulary collection and
//! chunked splitting of large occurrence files.

pub mod splitter;
pub mod vocabulary;

/// Darwin Core terms that together identify a geography, from most to least
/// inclusive. Their values are concatenated into the composite geography key.
pub const GEOG_KEY_TERMS: [&str; 9] = [
    "continent",
    "country",
    "countryCode",
    "stateProvince",
    "county",
    "municipality",
    "waterBody",
    "islandGroup",
    "island",
];

/// Delimiter between components of a composite term key.
pub const COMPOSITE_DELIMITER: &str = "|";

/// The composite geography key column name, e.g. `continent|country|...`.
pub fn geog_key() -> String {
    compose_key(&GEOG_KEY_TERMS)
}

/// Join term names into a composite key.
pub fn compose_key(terms: &[&str]) -> String {
    terms.join(COMPOSITE_DELIMITER)
}
