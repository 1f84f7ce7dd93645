//! API integration tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use warehouse_desk::{
    api,
    config::AppConfig,
    error::{AppError, AppResult},
    models::{
        DeliveryReceipt, DeliveryReceiptShort, InventoryRow, PickList, PickListShort, PurchaseOrder,
        PurchaseOrderSummary, ReceivedSummary, ReceivingSubmission,
    },
    services::{warehouse_api::WarehouseApi, Services},
    AppState,
};

/// In-process stand-in for the warehouse API
#[derive(Default)]
struct FakeWarehouse {
    reject_submissions: bool,
    submissions: Mutex<Vec<ReceivingSubmission>>,
}

fn fixture<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("Invalid fixture")
}

#[async_trait]
impl WarehouseApi for FakeWarehouse {
    async fn list_purchase_orders(&self) -> AppResult<Vec<PurchaseOrderSummary>> {
        Ok(fixture(json!([
            { "po_number": "PO-1001", "supplier": "Coolair Trading", "total_items": "2" },
            { "po_number": "PO-1002", "supplier": "Polar Supply" }
        ])))
    }

    async fn get_purchase_order(&self, po_number: &str) -> AppResult<PurchaseOrder> {
        match po_number {
            "PO-1001" => Ok(fixture(json!({
                "po_number": "PO-1001",
                "supplier": "Coolair Trading",
                "items": [
                    { "item_id": 11, "unit_number": 1, "total_quantity": 2,
                      "unit_description": "Split type 1.5HP", "indoor_model": "FTKC35", "outdoor_model": "RKC35" },
                    { "item_id": 12, "unit_number": 2, "total_quantity": 2,
                      "unit_description": "Split type 1.5HP", "indoor_model": "FTKC35", "outdoor_model": "RKC35" }
                ]
            }))),
            "PO-1002" => Ok(fixture(json!({
                "po_number": "PO-1002",
                "supplier": "Polar Supply",
                "items": [
                    { "item_id": "A-1", "unit_number": "1", "total_quantity": "1",
                      "unit_description": "Window type 1HP", "indoor_model": "WT10", "outdoor_model": null }
                ]
            }))),
            other => Err(AppError::NotFound(format!("Purchase order {} not found", other))),
        }
    }

    async fn submit_receiving(&self, submission: &ReceivingSubmission) -> AppResult<ReceivedSummary> {
        if self.reject_submissions {
            return Err(AppError::Upstream("Database connection failed".to_string()));
        }
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(ReceivedSummary {
            po_number: submission.po_number.clone(),
            dr_number: submission.dr_number.clone(),
            dr_date: submission.dr_date.clone(),
            total_items: submission.items.len() as u32,
            received_items: Vec::new(),
        })
    }

    async fn list_inventory(&self) -> AppResult<Vec<InventoryRow>> {
        Ok(fixture(json!([
            { "item_code": "CU-12", "description": "Copper tube 1/2in", "category": "Piping",
              "location": "Rack A", "beginning_balance": "10", "receipts": 5, "issues": 3,
              "returns": 1, "scrap": "x" },
            { "item_code": "BRK-1", "description": "Wall bracket", "category": "Hardware",
              "location": "Rack B", "beginning_balance": 0 }
        ])))
    }

    async fn list_delivery_receipts(&self) -> AppResult<Vec<DeliveryReceiptShort>> {
        Ok(fixture(json!([
            { "dr_number": "DR-0091", "dr_date": "2026-10-18", "po_number": "PO-1001", "supplier": "Coolair Trading" },
            { "dr_number": "DR-0092", "dr_date": "2026-10-18", "po_number": "PO-1002", "supplier": "Polar Supply" }
        ])))
    }

    async fn get_delivery_receipt(&self, dr_number: &str) -> AppResult<DeliveryReceipt> {
        if dr_number != "DR-0091" {
            return Err(AppError::NotFound(format!("Delivery receipt {} not found", dr_number)));
        }
        Ok(fixture(json!({
            "dr_number": "DR-0091",
            "dr_date": "2026-10-18",
            "po_number": "PO-1001",
            "supplier": "Coolair Trading",
            "items": [
                { "unit_description": "Split type 1.5HP", "indoor_serial": "AB12", "outdoor_serial": "CD34" }
            ]
        })))
    }

    async fn list_pick_lists(&self) -> AppResult<Vec<PickListShort>> {
        Ok(fixture(json!([{ "pick_list_id": "PL-9", "reference": "JO-2231" }])))
    }

    async fn get_pick_list(&self, pick_list_id: &str) -> AppResult<PickList> {
        Ok(fixture(json!({
            "pick_list_id": pick_list_id,
            "lines": [
                { "item_code": "CU-12", "location": "Rack A", "quantity": 3 },
                { "item_code": "BRK-1", "location": "Rack B", "quantity": 2 },
                { "item_code": "CU-38", "location": "Rack A", "quantity": 1 }
            ]
        })))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

fn app(warehouse: Arc<FakeWarehouse>) -> Router {
    let config = AppConfig::default();
    let services = Services::new(warehouse, config.receiving.clone(), config.inventory.clone());
    api::create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri))
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn open_session(app: &Router) -> String {
    let (status, body) = call(app, Method::POST, "/receiving/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().expect("No session ID").to_string()
}

async fn type_serial(app: &Router, session: &str, index: usize, serial_type: &str, value: &str) -> Value {
    let uri = format!("/receiving/sessions/{}/items/{}/serials/{}", session, index, serial_type);
    let (status, body) = call(app, Method::PUT, &uri, Some(json!({ "value": value }))).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn blur_serial(app: &Router, session: &str, index: usize, serial_type: &str) -> Value {
    let uri = format!("/receiving/sessions/{}/items/{}/serials/{}/commit", session, index, serial_type);
    let (status, body) = call(app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = app(Arc::new(FakeWarehouse::default()));

    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = call(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_list_purchase_orders() {
    let app = app(Arc::new(FakeWarehouse::default()));

    let (status, body) = call(&app, Method::GET, "/purchase-orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["po_number"], "PO-1001");
    assert_eq!(body[0]["total_items"], 2);
    assert!(body[1]["total_items"].is_null());
}

#[tokio::test]
async fn test_receive_purchase_order() {
    let warehouse = Arc::new(FakeWarehouse::default());
    let app = app(warehouse.clone());
    let session = open_session(&app).await;

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/receiving/sessions/{}/purchase-order", session),
        Some(json!({ "po_number": "PO-1002" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["records"][0]["completed"], false);
    assert_eq!(body["records"][0]["unit_label"], "Unit 1 of 1");

    let record = type_serial(&app, &session, 0, "indoor", "ab12 ").await;
    assert_eq!(record["indoor_serial"], "ab12");
    assert_eq!(record["completed"], false);

    let record = type_serial(&app, &session, 0, "outdoor", "cd34").await;
    assert_eq!(record["completed"], true);

    let record = blur_serial(&app, &session, 0, "indoor").await;
    assert_eq!(record["indoor_serial"], "AB12");
    blur_serial(&app, &session, 0, "outdoor").await;

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/receiving/sessions/{}/submit", session),
        Some(json!({ "dr_number": "DR-0092", "dr_date": "2026-10-18" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 1);

    let submissions = warehouse.submissions.lock().unwrap().clone();
    assert_eq!(submissions.len(), 1);
    let sent = serde_json::to_value(&submissions[0]).unwrap();
    assert_eq!(
        sent,
        json!({
            "poNumber": "PO-1002",
            "drNumber": "DR-0092",
            "drDate": "2026-10-18",
            "items": [{
                "item_id": "A-1",
                "unitDescription": "Window type 1HP",
                "indoorModel": "WT10",
                "outdoorModel": null,
                "indoorSerial": "AB12",
                "outdoorSerial": "CD34"
            }]
        })
    );

    let (_, body) = call(&app, Method::GET, &format!("/receiving/sessions/{}", session), None).await;
    assert!(body["po_number"].is_null());
    assert_eq!(body["total_count"], 0);
}

#[tokio::test]
async fn test_submit_reports_first_failing_rule() {
    let app = app(Arc::new(FakeWarehouse::default()));
    let session = open_session(&app).await;
    let submit_uri = format!("/receiving/sessions/{}/submit", session);

    let (status, body) = call(&app, Method::POST, &submit_uri, Some(json!({ "dr_number": "", "dr_date": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "MissingDrNumber");

    let form = json!({ "dr_number": "DR-0091", "dr_date": "2026-10-18" });
    let (_, body) = call(&app, Method::POST, &submit_uri, Some(form.clone())).await;
    assert_eq!(body["error"], "NoPoSelected");

    call(
        &app,
        Method::POST,
        &format!("/receiving/sessions/{}/purchase-order", session),
        Some(json!({ "po_number": "PO-1001" })),
    )
    .await;
    type_serial(&app, &session, 0, "indoor", "AB12").await;

    let (status, body) = call(&app, Method::POST, &submit_uri, Some(form)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "IncompleteItems");
    assert_eq!(body["message"], "Please complete the serial numbers of 2 item(s)");
}

#[tokio::test]
async fn test_failed_submission_keeps_serials() {
    let app = app(Arc::new(FakeWarehouse {
        reject_submissions: true,
        ..Default::default()
    }));
    let session = open_session(&app).await;
    call(
        &app,
        Method::POST,
        &format!("/receiving/sessions/{}/purchase-order", session),
        Some(json!({ "po_number": "PO-1002" })),
    )
    .await;
    type_serial(&app, &session, 0, "indoor", "AB12").await;
    type_serial(&app, &session, 0, "outdoor", "CD34").await;

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/receiving/sessions/{}/submit", session),
        Some(json!({ "dr_number": "DR-0093", "dr_date": "2026-10-18" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "NetworkOrServerError");

    let (_, body) = call(&app, Method::GET, &format!("/receiving/sessions/{}", session), None).await;
    assert_eq!(body["po_number"], "PO-1002");
    assert_eq!(body["records"][0]["indoor_serial"], "AB12");
    assert_eq!(body["completed_count"], 1);
}

#[tokio::test]
async fn test_reselect_discards_entries() {
    let app = app(Arc::new(FakeWarehouse::default()));
    let session = open_session(&app).await;
    let select_uri = format!("/receiving/sessions/{}/purchase-order", session);

    call(&app, Method::POST, &select_uri, Some(json!({ "po_number": "PO-1001" }))).await;
    type_serial(&app, &session, 0, "indoor", "AB12").await;
    call(&app, Method::POST, &select_uri, Some(json!({ "po_number": "PO-1002" }))).await;

    let (_, body) = call(&app, Method::POST, &select_uri, Some(json!({ "po_number": "PO-1001" }))).await;
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["records"][0]["indoor_serial"], "");
}

#[tokio::test]
async fn test_unknown_item_and_purchase_order() {
    let app = app(Arc::new(FakeWarehouse::default()));
    let session = open_session(&app).await;

    let (status, _) = call(
        &app,
        Method::POST,
        &format!("/receiving/sessions/{}/purchase-order", session),
        Some(json!({ "po_number": "PO-404" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/receiving/sessions/{}/items/0/serials/indoor", session),
        Some(json!({ "value": "AB12" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::DELETE, &format!("/receiving/sessions/{}", session), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, Method::GET, &format!("/receiving/sessions/{}", session), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inventory_grid() {
    let app = app(Arc::new(FakeWarehouse::default()));

    let (status, body) = call(&app, Method::GET, "/inventory?in_stock_only=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["item_code"], "CU-12");
    assert_eq!(body["items"][0]["scrap"], 0);
    assert_eq!(body["items"][0]["ending_balance"], 13);

    let (_, body) = call(&app, Method::GET, "/inventory?search=bracket", None).await;
    assert_eq!(body["items"][0]["item_code"], "BRK-1");

    let (_, body) = call(&app, Method::GET, "/inventory/filters", None).await;
    assert_eq!(body["categories"], json!(["Piping", "Hardware"]));
}

#[tokio::test]
async fn test_delivery_receipt_viewer() {
    let app = app(Arc::new(FakeWarehouse::default()));

    let (_, body) = call(&app, Method::GET, "/delivery-receipts?search=polar", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["dr_number"], "DR-0092");

    let (status, body) = call(&app, Method::GET, "/delivery-receipts/DR-0091", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dr_date_display"], "October 18, 2026");
    assert_eq!(body["total_units"], 1);

    let (status, _) = call(&app, Method::GET, "/delivery-receipts/DR-0000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pick_list_viewer() {
    let app = app(Arc::new(FakeWarehouse::default()));

    let (status, body) = call(&app, Method::GET, "/pick-lists/PL-9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["groups"][0]["location"], "Rack A");
    assert_eq!(body["groups"][0]["total_quantity"], 4);
    assert_eq!(body["total_quantity"], 6);

    let (_, body) = call(&app, Method::GET, "/pick-lists", None).await;
    assert_eq!(body[0]["pick_list_id"], "PL-9");
}
