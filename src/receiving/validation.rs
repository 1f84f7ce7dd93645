//! Receiving form validation

use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use super::session::ReceivingRecord;

/// Reasons the receiving form cannot be submitted yet.
///
/// Each one is shown to the operator as a single notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceivingError {
    #[error("Please enter the DR number")]
    MissingDrNumber,

    #[error("Please select the DR date")]
    MissingDrDate,

    #[error("Please select a purchase order")]
    NoPoSelected,

    #[error("Please complete the serial numbers of {0} item(s)")]
    IncompleteItems(usize),
}

/// Delivery receipt header fields typed by the operator
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ReceivingForm {
    #[validate(length(max = 64, message = "DR number must be at most 64 characters"))]
    #[serde(default)]
    pub dr_number: String,
    #[validate(length(max = 32, message = "DR date must be at most 32 characters"))]
    #[serde(default)]
    pub dr_date: String,
}

impl ReceivingForm {
    pub fn new(dr_number: impl Into<String>, dr_date: impl Into<String>) -> Self {
        Self {
            dr_number: dr_number.into(),
            dr_date: dr_date.into(),
        }
    }
}

/// Check the form against the current records.
///
/// `records` is `None` when no purchase order is selected. Stops at the
/// first failing rule: DR number, DR date, selection, then completeness.
pub fn check(form: &ReceivingForm, records: Option<&[ReceivingRecord]>) -> Result<(), ReceivingError> {
    if form.dr_number.trim().is_empty() {
        return Err(ReceivingError::MissingDrNumber);
    }
    if form.dr_date.trim().is_empty() {
        return Err(ReceivingError::MissingDrDate);
    }
    let records = records.ok_or(ReceivingError::NoPoSelected)?;

    let incomplete = records.iter().filter(|r| !r.is_completed()).count();
    if incomplete > 0 {
        return Err(ReceivingError::IncompleteItems(incomplete));
    }
    Ok(())
}
