//! Data models for Warehouse Desk

pub mod delivery_receipt;
pub mod envelope;
pub mod inventory;
pub mod pick_list;
pub mod purchase_order;
pub mod receiving;

// Re-export commonly used types
pub use delivery_receipt::{DeliveryReceipt, DeliveryReceiptShort, DeliveryReceiptView};
pub use envelope::ApiEnvelope;
pub use inventory::{InventoryLine, InventoryRow};
pub use pick_list::{PickList, PickListShort, PickListView};
pub use purchase_order::{ItemId, PoLineItem, PurchaseOrder, PurchaseOrderSummary};
pub use receiving::{ReceivedSummary, ReceivingSubmission, SerialType, SubmissionItem};
