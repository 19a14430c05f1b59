use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = fieldserve_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn health_is_open() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn catalog_is_seeded_and_scoped() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/services", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty());

    let first_id = items[0]["id"].as_u64().unwrap();
    let subs: serde_json::Value = client
        .get(format!("{}/services/{}/sub-services", server.base_url, first_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    for sub in subs["items"].as_array().unwrap() {
        assert_eq!(sub["service_id"].as_u64().unwrap(), first_id);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn booking_lifecycle_end_to_end() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let base = &server.base_url;

    // Register a technician.
    let tech: serde_json::Value = client
        .post(format!("{base}/technicians"))
        .json(&json!({"name": "Asha Verma", "phone": "+91-98-0000-0000"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let tech_id = tech["id"].as_u64().unwrap();
    assert_eq!(tech["active"], json!(true));

    // Create a booking against the seeded Mowing sub-service (20/sqft).
    let resp = client
        .post(format!("{base}/bookings"))
        .json(&json!({
            "customer_id": 7,
            "sub_service_id": 1,
            "property_type": "villa",
            "quantity": 100,
            "scheduled_date": "2026-09-01",
            "scheduled_time": "10:00",
            "address": "12 Palm Grove",
            "notes": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let booking: serde_json::Value = resp.json().await.unwrap();
    let booking_id = booking["id"].as_u64().unwrap();
    assert_eq!(booking["status"], json!("pending"));
    assert_eq!(booking["payment_status"], json!("unpaid"));
    assert_eq!(booking["total_amount"].as_u64().unwrap(), 2_000);
    assert_eq!(booking["advance_amount"].as_u64().unwrap(), 600);
    assert_eq!(booking["balance_amount"].as_u64().unwrap(), 1_400);
    assert_eq!(booking["commission"].as_u64().unwrap(), 800);

    // Assign, then walk the funnel.
    let resp = client
        .post(format!("{base}/bookings/{booking_id}/assign"))
        .json(&json!({"technician_id": tech_id}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base}/bookings/{booking_id}/status"))
        .json(&json!({"status": "assigned"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Skipping in_progress is rejected by the transition table.
    let resp = client
        .post(format!("{base}/bookings/{booking_id}/status"))
        .json(&json!({"status": "completed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(err["error"], json!("invalid_transition"));

    for status in ["in_progress", "completed"] {
        let resp = client
            .post(format!("{base}/bookings/{booking_id}/status"))
            .json(&json!({"status": status}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Completion credited the technician in the same operation.
    let tech: serde_json::Value = client
        .get(format!("{base}/technicians/{tech_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tech["total_assigned"].as_u64().unwrap(), 1);
    assert_eq!(tech["total_completed"].as_u64().unwrap(), 1);

    // Payments: advance once, then settle; both idempotency edges covered.
    let resp = client
        .post(format!("{base}/bookings/{booking_id}/payment"))
        .json(&json!({"reference": "PAY-881"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let paid: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(paid["payment_status"], json!("partial"));
    assert_eq!(paid["payment_reference"], json!("PAY-881"));

    let resp = client
        .post(format!("{base}/bookings/{booking_id}/payment"))
        .json(&json!({"reference": "PAY-882"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    for _ in 0..2 {
        let resp = client
            .post(format!("{base}/bookings/{booking_id}/mark-paid"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let settled: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(settled["payment_status"], json!("paid"));
    }

    // Invoice mirrors the stored booking amounts.
    let invoice: serde_json::Value = client
        .get(format!("{base}/bookings/{booking_id}/invoice"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(invoice["booking_id"].as_u64().unwrap(), booking_id);
    assert_eq!(invoice["total_amount"].as_u64().unwrap(), 2_000);
    assert_eq!(invoice["advance_amount"].as_u64().unwrap(), 600);
    assert_eq!(invoice["balance_amount"].as_u64().unwrap(), 1_400);
    assert_eq!(invoice["commission"].as_u64().unwrap(), 800);
    assert_eq!(invoice["payment_status"], json!("paid"));
    assert_eq!(invoice["sub_service_name"], json!("Mowing"));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_inputs_map_to_client_errors() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let base = &server.base_url;

    // Zero quantity -> 400.
    let resp = client
        .post(format!("{base}/bookings"))
        .json(&json!({
            "customer_id": 1,
            "sub_service_id": 1,
            "property_type": "villa",
            "quantity": 0,
            "scheduled_date": "2026-09-01",
            "scheduled_time": "10:00",
            "address": "12 Palm Grove",
            "notes": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Unknown sub-service -> 404.
    let resp = client
        .post(format!("{base}/bookings"))
        .json(&json!({
            "customer_id": 1,
            "sub_service_id": 9999,
            "property_type": "villa",
            "quantity": 10,
            "scheduled_date": "2026-09-01",
            "scheduled_time": "10:00",
            "address": "12 Palm Grove",
            "notes": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Missing booking invoice -> 404; malformed id -> 400.
    let resp = client
        .get(format!("{base}/bookings/999/invoice"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .get(format!("{base}/bookings/not-a-number"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn deactivated_technician_cannot_take_new_work() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let base = &server.base_url;

    let tech: serde_json::Value = client
        .post(format!("{base}/technicians"))
        .json(&json!({"name": "Ravi Nair", "phone": "+91-98-0000-0001"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let tech_id = tech["id"].as_u64().unwrap();

    let resp = client
        .post(format!("{base}/technicians/{tech_id}/deactivate"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deactivated: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(deactivated["active"], json!(false));

    let booking: serde_json::Value = client
        .post(format!("{base}/bookings"))
        .json(&json!({
            "customer_id": 2,
            "sub_service_id": 1,
            "property_type": "apartment",
            "quantity": 60,
            "scheduled_date": "2026-09-02",
            "scheduled_time": "14:00",
            "address": "4 Rose Lane",
            "notes": "call on arrival"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let booking_id = booking["id"].as_u64().unwrap();

    let resp = client
        .post(format!("{base}/bookings/{booking_id}/assign"))
        .json(&json!({"technician_id": tech_id}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let err: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(err["error"], json!("technician_inactive"));
}
