//! Receiving session tracking
//!
//! Holds the in-progress serial numbers of every unit of the purchase order
//! being received, keeps each unit's completion flag in step with its serial
//! fields and decides whether the receiving form may be submitted. Nothing
//! here performs I/O; the hosting service owns one [`ReceivingSession`] per
//! workstation and feeds it operator events.

pub mod session;
pub mod validation;

pub use session::{ReceivingRecord, ReceivingSession};
pub use validation::{ReceivingError, ReceivingForm};
