//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for quote types that give
//! more meaningful error messages than standard assertions.

use core_kernel::CoverageId;
use domain_quote::{QuoteTotal, QuoteWorksheet};
use rust_decimal::Decimal;

/// Asserts that a total is internally consistent
///
/// `total + bonus_amount == subtotal` and `total == subtotal × (1 − bonus/100)`.
pub fn assert_total_consistent(total: &QuoteTotal) {
    assert_eq!(
        total.total + total.bonus_amount,
        total.subtotal,
        "total + bonus must equal subtotal: {:?}",
        total
    );
    let expected = total.subtotal * (Decimal::ONE - total.bonus_percentage / Decimal::ONE_HUNDRED);
    assert_eq!(total.total, expected, "total does not match bonus formula: {:?}", total);
}

/// Asserts that the worksheet's stored total matches its lines
pub fn assert_worksheet_total_current(worksheet: &QuoteWorksheet) {
    let subtotal: Decimal = worksheet.lines().iter().map(|line| line.premium).sum();
    assert_eq!(
        worksheet.total().subtotal,
        subtotal,
        "stale subtotal on worksheet {}",
        worksheet.id()
    );
    assert_total_consistent(worksheet.total());
}

/// Asserts that a coverage is on the worksheet
pub fn assert_has_line(worksheet: &QuoteWorksheet, coverage_id: CoverageId) {
    assert!(
        worksheet.line(coverage_id).is_some(),
        "expected a line for {}, found {:?}",
        coverage_id,
        worksheet.lines().iter().map(|l| l.coverage_id).collect::<Vec<_>>()
    );
}

/// Asserts that a coverage is not on the worksheet
pub fn assert_no_line(worksheet: &QuoteWorksheet, coverage_id: CoverageId) {
    assert!(
        worksheet.line(coverage_id).is_none(),
        "did not expect a line for {}",
        coverage_id
    );
}
