// src/routes/estimate.rs
use axum::{Json, body::Bytes};
use serde_json::Value;

use crate::error::AppError;
use crate::services::pricing::{self, PriceEstimate};

/// POST /estimate. Untyped JSON in, price breakdown out. Missing fields
/// default to 0 / "standard"; a body that isn't JSON at all behaves like
/// an empty object. The only rejection is a non-numeric distance/weight.
pub async fn estimate_handler(body: Bytes) -> Result<Json<PriceEstimate>, AppError> {
    let data: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let distance_km = coerce_number(data.get("distance_km"))?;
    let weight_kg = coerce_number(data.get("weight_kg"))?;
    let service_speed = coerce_speed(data.get("service_speed"));

    Ok(Json(pricing::estimate(
        distance_km,
        weight_kg,
        &service_speed,
    )))
}

// Accepts JSON numbers and numeric strings; absent/null means zero.
fn coerce_number(value: Option<&Value>) -> Result<f64, AppError> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(invalid_inputs),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| invalid_inputs()),
        Some(_) => Err(invalid_inputs()),
    }
}

// Never fails: any scalar stringifies, and unrecognized speeds fall
// through to the standard multiplier downstream.
fn coerce_speed(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "standard".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn invalid_inputs() -> AppError {
    AppError::BadRequest("Invalid inputs".to_string())
}
