//! Quote DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{format_es_mx, Currency, PackageId, QuoteId};
use domain_quote::{QuoteLineItem, QuoteSubmission, QuoteWorksheet, UnresolvedAssociation};

#[derive(Debug, Deserialize)]
pub struct CreateQuoteRequest {
    pub insured_value: Decimal,
    #[serde(default)]
    pub currency: Currency,
    pub package_id: Option<PackageId>,
    pub bonus_percentage: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemResponse {
    #[serde(flatten)]
    pub line: QuoteLineItem,
    pub sum_insured_display: String,
    pub premium_display: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub id: QuoteId,
    pub package_id: Option<PackageId>,
    pub currency: Currency,
    pub insured_value: Decimal,
    pub insured_value_display: String,
    pub lines: Vec<LineItemResponse>,
    pub unresolved: Vec<UnresolvedAssociation>,
    pub subtotal: Decimal,
    pub bonus_percentage: Decimal,
    pub bonus_amount: Decimal,
    pub total: Decimal,
    pub total_display: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&QuoteWorksheet> for QuoteResponse {
    fn from(worksheet: &QuoteWorksheet) -> Self {
        let currency = worksheet.currency();
        let total = worksheet.total();

        Self {
            id: worksheet.id(),
            package_id: worksheet.package_id(),
            currency,
            insured_value: worksheet.insured_value().amount(),
            insured_value_display: worksheet.insured_value().to_display(),
            lines: worksheet
                .lines()
                .iter()
                .map(|line| LineItemResponse {
                    sum_insured_display: format_es_mx(line.sum_insured, currency),
                    premium_display: format_es_mx(line.premium, currency),
                    line: line.clone(),
                })
                .collect(),
            unresolved: worksheet.unresolved().to_vec(),
            subtotal: total.subtotal,
            bonus_percentage: total.bonus_percentage,
            bonus_amount: total.bonus_amount,
            total: total.total,
            total_display: format_es_mx(total.total, currency),
            updated_at: worksheet.updated_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(flatten)]
    pub submission: QuoteSubmission,
    pub total_display: String,
}

impl From<QuoteSubmission> for SubmissionResponse {
    fn from(submission: QuoteSubmission) -> Self {
        let total_display = submission
            .total
            .total_money(submission.insured_value.currency())
            .to_display();
        Self {
            submission,
            total_display,
        }
    }
}
