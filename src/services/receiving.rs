//! Receiving service
//!
//! Hosts one [`ReceivingSession`] per receiving workstation and drives the
//! purchase order fetch and the final submission against the warehouse API.
//! Sessions are only touched under the registry lock, and the lock is never
//! held across a call to the API. A session has at most one submission in
//! flight.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    config::ReceivingConfig,
    error::{AppError, AppResult},
    models::{PurchaseOrderSummary, ReceivedSummary, ReceivingSubmission, SerialType},
    receiving::{ReceivingForm, ReceivingRecord, ReceivingSession},
    services::warehouse_api::WarehouseApi,
};

/// Snapshot of a receiving session for the screen
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReceivingSessionView {
    pub session_id: Uuid,
    pub po_number: Option<String>,
    pub supplier: Option<String>,
    pub records: Vec<ReceivingRecord>,
    pub completed_count: usize,
    pub total_count: usize,
}

impl ReceivingSessionView {
    fn new(session_id: Uuid, session: &ReceivingSession) -> Self {
        Self {
            session_id,
            po_number: session.po_number().map(str::to_string),
            supplier: session.supplier().map(str::to_string),
            records: session.records().to_vec(),
            completed_count: session.completed_count(),
            total_count: session.records().len(),
        }
    }
}

/// A workstation's tracker plus the host-side submission marker
#[derive(Debug, Default)]
struct HostedSession {
    tracker: ReceivingSession,
    /// Set while the receiving is being posted to the API
    submitting: bool,
}

#[derive(Clone)]
pub struct ReceivingService {
    api: Arc<dyn WarehouseApi>,
    sessions: Arc<RwLock<HashMap<Uuid, HostedSession>>>,
    config: ReceivingConfig,
}

impl ReceivingService {
    pub fn new(api: Arc<dyn WarehouseApi>, config: ReceivingConfig) -> Self {
        Self {
            api,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Open a new, empty session
    pub async fn open_session(&self) -> AppResult<ReceivingSessionView> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(AppError::Conflict(format!(
                "Too many open receiving sessions ({})",
                sessions.len()
            )));
        }

        let session_id = Uuid::new_v4();
        let session = HostedSession::default();
        let view = ReceivingSessionView::new(session_id, &session.tracker);
        sessions.insert(session_id, session);

        tracing::info!("Receiving session {} opened", session_id);
        Ok(view)
    }

    pub async fn close_session(&self, session_id: Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .ok_or_else(|| session_not_found(session_id))?;

        tracing::info!("Receiving session {} closed", session_id);
        Ok(())
    }

    pub async fn get_session(&self, session_id: Uuid) -> AppResult<ReceivingSessionView> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&session_id)
            .ok_or_else(|| session_not_found(session_id))?;
        Ok(ReceivingSessionView::new(session_id, &session.tracker))
    }

    /// Purchase orders offered in the selection list
    pub async fn list_purchase_orders(&self) -> AppResult<Vec<PurchaseOrderSummary>> {
        self.api.list_purchase_orders().await
    }

    /// Fetch `po_number` and make it the session's selection
    pub async fn select_purchase_order(
        &self,
        session_id: Uuid,
        po_number: &str,
    ) -> AppResult<ReceivingSessionView> {
        let po_number = po_number.trim();
        if po_number.is_empty() {
            return Err(AppError::BadRequest("Purchase order number is required".to_string()));
        }

        // Fail before the fetch when the session is already gone
        self.get_session(session_id).await?;

        let purchase_order = self.api.get_purchase_order(po_number).await?;
        if purchase_order.items.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Purchase order {} has no items to receive",
                purchase_order.po_number
            )));
        }

        let mut sessions = self.sessions.write().await;
        let session = &mut session_mut(&mut sessions, session_id)?.tracker;
        session.select_purchase_order(&purchase_order);

        tracing::info!(
            "Session {} receiving PO {} ({} units)",
            session_id,
            purchase_order.po_number,
            purchase_order.items.len()
        );
        Ok(ReceivingSessionView::new(session_id, session))
    }

    /// Operator typed into a serial input
    pub async fn update_serial(
        &self,
        session_id: Uuid,
        index: usize,
        serial_type: SerialType,
        value: &str,
    ) -> AppResult<ReceivingRecord> {
        let mut sessions = self.sessions.write().await;
        let session = &mut session_mut(&mut sessions, session_id)?.tracker;
        ensure_record(session, index)?;

        let record = session.update_serial(index, serial_type, value);
        tracing::debug!(
            "Session {} item {} {} serial updated (completed: {})",
            session_id,
            index,
            serial_type,
            record.is_completed()
        );
        Ok(record.clone())
    }

    /// Serial input lost focus
    pub async fn commit_serial(
        &self,
        session_id: Uuid,
        index: usize,
        serial_type: SerialType,
    ) -> AppResult<ReceivingRecord> {
        let mut sessions = self.sessions.write().await;
        let session = &mut session_mut(&mut sessions, session_id)?.tracker;
        ensure_record(session, index)?;

        Ok(session.commit_serial(index, serial_type).clone())
    }

    /// Validate the form, send the receiving to the API and clear the
    /// session once the API accepts it.
    ///
    /// On any failure the session keeps every serial so the operator can retry.
    /// A second submit while one is in flight is a conflict.
    pub async fn submit(&self, session_id: Uuid, form: &ReceivingForm) -> AppResult<ReceivedSummary> {
        let submission = {
            let mut sessions = self.sessions.write().await;
            let session = session_mut(&mut sessions, session_id)?;
            if session.submitting {
                return Err(AppError::Conflict(format!(
                    "Receiving session {} is already being submitted",
                    session_id
                )));
            }
            session.tracker.validate(form)?;
            let submission = session.tracker.build_submission(form);
            session.submitting = true;
            submission
        };

        tracing::info!(
            "Session {} submitting PO {} under DR {} ({} units)",
            session_id,
            submission.po_number,
            submission.dr_number,
            submission.items.len()
        );

        // Detached so the in-flight marker is cleared even if the request is dropped
        let service = self.clone();
        tokio::spawn(async move { service.finish_submission(session_id, submission).await })
            .await
            .map_err(|e| AppError::Internal(format!("Receiving submission task failed: {}", e)))?
    }

    async fn finish_submission(
        &self,
        session_id: Uuid,
        submission: ReceivingSubmission,
    ) -> AppResult<ReceivedSummary> {
        let result = self.api.submit_receiving(&submission).await;

        {
            let mut sessions = self.sessions.write().await;
            if let Some(session) = sessions.get_mut(&session_id) {
                session.submitting = false;
                // The operator may have moved on to another PO while the request was in flight
                if result.is_ok() && session.tracker.po_number() == Some(submission.po_number.as_str()) {
                    session.tracker.reset();
                }
            }
        }

        match result {
            Ok(summary) => {
                tracing::info!(
                    "PO {} received under DR {} ({} items)",
                    summary.po_number,
                    summary.dr_number,
                    summary.total_items
                );
                Ok(summary)
            }
            Err(e) => {
                tracing::warn!(
                    "Receiving of PO {} rejected, session {} kept: {}",
                    submission.po_number,
                    session_id,
                    e
                );
                Err(e)
            }
        }
    }

    /// Clear the form back to "no purchase order selected"
    pub async fn reset(&self, session_id: Uuid) -> AppResult<ReceivingSessionView> {
        let mut sessions = self.sessions.write().await;
        let session = &mut session_mut(&mut sessions, session_id)?.tracker;
        session.reset();

        tracing::info!("Receiving session {} cleared", session_id);
        Ok(ReceivingSessionView::new(session_id, session))
    }
}

fn session_not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Receiving session {} not found", session_id))
}

fn session_mut(
    sessions: &mut HashMap<Uuid, HostedSession>,
    session_id: Uuid,
) -> AppResult<&mut HostedSession> {
    sessions
        .get_mut(&session_id)
        .ok_or_else(|| session_not_found(session_id))
}

fn ensure_record(session: &ReceivingSession, index: usize) -> AppResult<()> {
    if session.record(index).is_none() {
        return Err(AppError::NotFound(format!(
            "Receiving item {} not found ({} items)",
            index,
            session.records().len()
        )));
    }
    Ok(())
}
