use crate::ServerConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let server = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };

    // When
    let result = server.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_privileged_port_when_validate_then_error() {
    // Given
    let server = ServerConfig {
        port: 80,
        ..ServerConfig::default()
    };

    // When
    let result = server.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("1024"));
}

#[test]
fn given_blank_host_when_validate_then_error() {
    // Given
    let server = ServerConfig {
        host: "  ".to_string(),
        ..ServerConfig::default()
    };

    // When
    let result = server.validate();

    // Then
    assert_that!(result, err(anything()));
}
