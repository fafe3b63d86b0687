use axum::response::Response;

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
