//! Per-workstation receiving state

use serde::Serialize;
use utoipa::ToSchema;

use super::validation::{self, ReceivingError, ReceivingForm};
use crate::models::{PoLineItem, PurchaseOrder, ReceivingSubmission, SerialType, SubmissionItem};

/// Working copy of one purchase order unit while it is being received
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReceivingRecord {
    #[serde(flatten)]
    line: PoLineItem,
    /// "Unit 2 of 4", shown next to the serial inputs
    unit_label: String,
    indoor_serial: String,
    outdoor_serial: String,
    /// Both serials present; recomputed on every serial edit
    completed: bool,
}

impl ReceivingRecord {
    fn new(line: &PoLineItem) -> Self {
        Self {
            line: line.clone(),
            unit_label: line.unit_label(),
            indoor_serial: String::new(),
            outdoor_serial: String::new(),
            completed: false,
        }
    }

    pub fn line(&self) -> &PoLineItem {
        &self.line
    }

    pub fn serial(&self, serial_type: SerialType) -> &str {
        match serial_type {
            SerialType::Indoor => &self.indoor_serial,
            SerialType::Outdoor => &self.outdoor_serial,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_serial(&mut self, serial_type: SerialType, value: String) {
        match serial_type {
            SerialType::Indoor => self.indoor_serial = value,
            SerialType::Outdoor => self.outdoor_serial = value,
        }
        self.completed = !self.indoor_serial.is_empty() && !self.outdoor_serial.is_empty();
    }

    fn to_submission_item(&self) -> SubmissionItem {
        SubmissionItem {
            item_id: self.line.item_id.clone(),
            unit_description: self.line.unit_description.clone(),
            indoor_model: self.line.indoor_model.clone(),
            outdoor_model: self.line.outdoor_model.clone(),
            indoor_serial: normalize_serial(&self.indoor_serial),
            outdoor_serial: normalize_serial(&self.outdoor_serial),
        }
    }
}

/// Committed form of a serial number: no surrounding blanks, uppercase
pub fn normalize_serial(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[derive(Debug, Clone)]
struct Selection {
    po_number: String,
    supplier: String,
    records: Vec<ReceivingRecord>,
}

/// Receiving state of one workstation: the selected purchase order and one
/// record per unit, in the order the order lists them.
#[derive(Debug, Clone, Default)]
pub struct ReceivingSession {
    selection: Option<Selection>,
}

impl ReceivingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start receiving `po`, dropping whatever was entered for the previous selection
    pub fn select_purchase_order(&mut self, po: &PurchaseOrder) {
        self.selection = Some(Selection {
            po_number: po.po_number.clone(),
            supplier: po.supplier.clone(),
            records: po.items.iter().map(ReceivingRecord::new).collect(),
        });
    }

    /// Keystroke phase: store `raw_value` trimmed, case untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not name an existing record.
    pub fn update_serial(&mut self, index: usize, serial_type: SerialType, raw_value: &str) -> &ReceivingRecord {
        let record = self.record_mut(index);
        record.set_serial(serial_type, raw_value.trim().to_string());
        record
    }

    /// Focus-loss phase: normalize the stored serial to its committed form.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not name an existing record.
    pub fn commit_serial(&mut self, index: usize, serial_type: SerialType) -> &ReceivingRecord {
        let record = self.record_mut(index);
        let normalized = normalize_serial(record.serial(serial_type));
        record.set_serial(serial_type, normalized);
        record
    }

    pub fn validate(&self, form: &ReceivingForm) -> Result<(), ReceivingError> {
        validation::check(form, self.selection.as_ref().map(|s| s.records.as_slice()))
    }

    /// Payload for the receiving endpoint, records in selection order.
    ///
    /// # Panics
    ///
    /// Panics unless [`validate`](Self::validate) accepts `form`.
    pub fn build_submission(&self, form: &ReceivingForm) -> ReceivingSubmission {
        if let Err(e) = self.validate(form) {
            panic!("receiving submission built from an invalid session: {}", e);
        }
        let selection = match &self.selection {
            Some(selection) => selection,
            None => unreachable!("validated session has a selection"),
        };

        ReceivingSubmission {
            po_number: selection.po_number.clone(),
            dr_number: form.dr_number.trim().to_string(),
            dr_date: form.dr_date.trim().to_string(),
            items: selection.records.iter().map(ReceivingRecord::to_submission_item).collect(),
        }
    }

    /// Back to "no purchase order selected"
    pub fn reset(&mut self) {
        self.selection = None;
    }

    pub fn po_number(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.po_number.as_str())
    }

    pub fn supplier(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.supplier.as_str())
    }

    pub fn records(&self) -> &[ReceivingRecord] {
        self.selection.as_ref().map(|s| s.records.as_slice()).unwrap_or(&[])
    }

    pub fn record(&self, index: usize) -> Option<&ReceivingRecord> {
        self.records().get(index)
    }

    pub fn completed_count(&self) -> usize {
        self.records().iter().filter(|r| r.is_completed()).count()
    }

    fn record_mut(&mut self, index: usize) -> &mut ReceivingRecord {
        let records: &mut [ReceivingRecord] = match self.selection.as_mut() {
            Some(selection) => &mut selection.records,
            None => &mut [],
        };
        let len = records.len();
        match records.get_mut(index) {
            Some(record) => record,
            None => panic!("receiving record {} out of range ({} records)", index, len),
        }
    }
}
