//! Root and health endpoints.

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
    timestamp: String,
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "running",
        "endpoints": {
            "health": "/health",
            "items": "/api/items",
            "item": "/api/items/{id}",
        },
    }))
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}
