//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rural_core::Dataset;
use tower::ServiceExt;

const SAMPLE_CSV: &str = r#"Program Area,Investment Type,State Name,County,City,Investment Dollars
Electric Programs,Loans,Texas,Travis,Austin,"1,500,000"
Water and Environmental Programs,Grants,Texas,Travis,City Name Withheld,"250,000"
Electric Programs,Guaranteed Loans,Oklahoma,Tulsa,Tulsa,"700,000"
Business Programs,Grants,Oklahoma,Tulsa,Tulsa,"50,000"
Water and Environmental Programs,Loans,Kansas,Sedgwick,Wichita,"1,000,000"
"#;

fn setup_test_app() -> Router {
    let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let dashboard = Dashboard::new(Arc::new(dataset));
    create_router(dashboard, None, ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ========== Health & Options ==========

#[tokio::test]
async fn test_health() {
    let response = get(setup_test_app(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["records"], 5);
}

#[tokio::test]
async fn test_options() {
    let response = get(setup_test_app(), "/api/options").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(
        json["tabs"],
        serde_json::json!([
            "All",
            "Electric Programs",
            "Water and Environmental Programs",
            "Business Programs"
        ])
    );
    assert_eq!(
        json["dimensions"],
        serde_json::json!(["Program Area", "Investment Type"])
    );
    assert_eq!(json["initial"]["program"], "All");
    assert_eq!(json["initial"]["dimension"], "Program Area");
    assert_eq!(json["page"]["title"], "Rural Investments 2024");
}

#[tokio::test]
async fn test_security_headers() {
    let response = get(setup_test_app(), "/api/health").await;
    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
}

// ========== Total ==========

#[tokio::test]
async fn test_total_all() {
    let response = get(setup_test_app(), "/api/total").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["program"], "All");
    assert_eq!(json["total"], "$3.50M");
    assert_eq!(json["amount"], 3_500_000);
}

#[tokio::test]
async fn test_total_filtered() {
    let response = get(setup_test_app(), "/api/total?program=Electric%20Programs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["program"], "Electric Programs");
    assert_eq!(json["total"], "$2.20M");
}

#[tokio::test]
async fn test_total_unknown_program_is_zero() {
    let response = get(setup_test_app(), "/api/total?program=Broadband").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["total"], "$0.00M");
}

// ========== Treemap ==========

#[tokio::test]
async fn test_treemap_all() {
    let response = get(setup_test_app(), "/api/treemap").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["layout"]["title"]["text"], "Investment by State and City");

    let trace = &json["data"][0];
    assert_eq!(trace["type"], "treemap");
    assert_eq!(
        trace["ids"],
        serde_json::json!([
            "Texas",
            "Texas/Austin",
            "Texas/Unknown",
            "Oklahoma",
            "Oklahoma/Tulsa",
            "Kansas",
            "Kansas/Wichita"
        ])
    );
    assert_eq!(
        trace["values"],
        serde_json::json!([1_750_000, 1_500_000, 250_000, 750_000, 750_000, 1_000_000, 1_000_000])
    );
}

#[tokio::test]
async fn test_treemap_filtered() {
    let response = get(
        setup_test_app(),
        "/api/treemap?program=Water%20and%20Environmental%20Programs",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let trace = &json["data"][0];
    assert_eq!(
        trace["labels"],
        serde_json::json!(["Texas", "Unknown", "Kansas", "Wichita"])
    );
    assert_eq!(trace["parents"], serde_json::json!(["", "Texas", "", "Kansas"]));
}

// ========== Bar ==========

#[tokio::test]
async fn test_bar_default_dimension() {
    let response = get(setup_test_app(), "/api/bar").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["layout"]["title"]["text"], "Investment by Program Area");
    let trace = &json["data"][0];
    assert_eq!(trace["type"], "bar");
    assert_eq!(
        trace["x"],
        serde_json::json!([
            "Electric Programs",
            "Water and Environmental Programs",
            "Business Programs"
        ])
    );
    assert_eq!(trace["y"], serde_json::json!([2_200_000, 1_250_000, 50_000]));
}

#[tokio::test]
async fn test_bar_by_investment_type_filtered() {
    let response = get(
        setup_test_app(),
        "/api/bar?program=Electric%20Programs&dimension=investment-type",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["layout"]["title"]["text"], "Investment by Investment Type");
    let trace = &json["data"][0];
    assert_eq!(trace["x"], serde_json::json!(["Loans", "Guaranteed Loans"]));
    assert_eq!(trace["y"], serde_json::json!([1_500_000, 700_000]));
}

#[tokio::test]
async fn test_bar_unknown_dimension() {
    let response = get(setup_test_app(), "/api/bar?dimension=County").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Unknown dimension"));
}

#[tokio::test]
async fn test_bar_non_bar_dimension() {
    let response = get(setup_test_app(), "/api/bar?dimension=State").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== View ==========

#[tokio::test]
async fn test_view() {
    let response = get(
        setup_test_app(),
        "/api/view?program=Business%20Programs&dimension=Investment%20Type",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["selection"]["program"], "Business Programs");
    assert_eq!(json["selection"]["dimension"], "Investment Type");
    assert_eq!(json["total"], "$0.05M");
    assert_eq!(json["treemap"]["data"][0]["type"], "treemap");
    assert_eq!(json["bar"]["data"][0]["x"], serde_json::json!(["Grants"]));
}

// ========== Events ==========

#[tokio::test]
async fn test_tab_event_returns_all_outputs() {
    let body = serde_json::json!({
        "selection": { "program": "All", "dimension": "Investment Type" },
        "event": { "kind": "tab_selected", "value": "Electric Programs" }
    });
    let response = post_json(setup_test_app(), "/api/events", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["selection"]["program"], "Electric Programs");
    assert_eq!(json["selection"]["dimension"], "Investment Type");

    let updates = json["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[0]["output"], "total");
    assert_eq!(updates[0]["value"], "$2.20M");
    assert_eq!(updates[1]["output"], "treemap");
    assert_eq!(updates[2]["output"], "bar");
    assert_eq!(
        updates[2]["value"]["layout"]["title"]["text"],
        "Investment by Investment Type"
    );
}

#[tokio::test]
async fn test_dimension_event_returns_bar_only() {
    let body = serde_json::json!({
        "event": { "kind": "dimension_selected", "value": "Investment Type" }
    });
    let response = post_json(setup_test_app(), "/api/events", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["selection"]["program"], "All");
    let updates = json["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0]["output"], "bar");
    assert_eq!(
        updates[0]["value"]["data"][0]["x"],
        serde_json::json!(["Loans", "Guaranteed Loans", "Grants"])
    );
}

#[tokio::test]
async fn test_event_with_non_bar_dimension() {
    let body = serde_json::json!({
        "event": { "kind": "dimension_selected", "value": "City" }
    });
    let response = post_json(setup_test_app(), "/api/events", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("not a bar chart dimension"));
}

#[tokio::test]
async fn test_event_malformed_body() {
    let body = serde_json::json!({
        "event": { "kind": "zoomed", "value": 3 }
    });
    let response = post_json(setup_test_app(), "/api/events", body).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route() {
    let response = get(setup_test_app(), "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
