//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{CoverageId, PackageId};

#[test]
fn test_invalid_identifier_message() {
    let error = CoreError::invalid_identifier("PKG-?");
    assert_eq!(error.to_string(), "Invalid identifier: PKG-?");
}

#[test]
fn test_parse_failure_carries_input() {
    let error = "PKG-uno".parse::<PackageId>().unwrap_err();
    assert!(error.to_string().contains("PKG-uno"));
}

#[test]
fn test_blank_key_rejected() {
    let result = "".parse::<CoverageId>();
    assert!(matches!(result, Err(CoreError::InvalidIdentifier(_))));
}
