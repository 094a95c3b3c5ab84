use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_matching_filter() {
    for (name, expected) in [
        ("off", LevelFilter::Off),
        ("ERROR", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("Debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ] {
        let level = LogLevel::from_str(name).unwrap();
        assert_that!(*level, eq(expected));
    }
}

#[test]
fn given_unknown_level_name_when_parsed_then_info() {
    // When
    let level = LogLevel::from_str("loud").unwrap();

    // Then
    assert_that!(*level, eq(LevelFilter::Info));
}

#[test]
fn given_level_in_toml_when_deserialized_then_applied() {
    // Given
    let toml = "[logging]\nlevel = \"debug\"\ncolored = false";

    // When
    let config: Config = toml::from_str(toml).unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}
