// src/services/pricing.rs
use serde::Serialize;

pub const BASE_FEE: f64 = 5.00;
pub const PER_KM: f64 = 0.75;
pub const PER_KG: f64 = 0.60;

const STANDARD_MULTIPLIER: f64 = 1.0;
const EXPRESS_MULTIPLIER: f64 = 1.35;
const SAME_DAY_MULTIPLIER: f64 = 1.85;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_fee: f64,
    pub distance_km: f64,
    pub distance_cost: f64,
    pub weight_kg: f64,
    pub weight_cost: f64,
    pub service_speed: String,
    pub speed_multiplier: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub currency: &'static str,
    pub total: f64,
    pub breakdown: PriceBreakdown,
}

/// Quote a shipment. Total over its domain: negative inputs clamp to zero
/// and unrecognized speeds price as standard, neither raises an error.
pub fn estimate(distance_km: f64, weight_kg: f64, service_speed: &str) -> PriceEstimate {
    let distance_km = f64::max(0.0, distance_km);
    let weight_kg = f64::max(0.0, weight_kg);
    let speed = service_speed.to_lowercase();
    let speed_multiplier = speed_multiplier(&speed);

    let distance_cost = distance_km * PER_KM;
    let weight_cost = weight_kg * PER_KG;
    // The total rounds once, from the unrounded subtotal; the component
    // costs are rounded independently for display.
    let subtotal = BASE_FEE + distance_cost + weight_cost;
    let total = round2(subtotal * speed_multiplier);

    PriceEstimate {
        currency: "USD",
        total,
        breakdown: PriceBreakdown {
            base_fee: BASE_FEE,
            distance_km,
            distance_cost: round2(distance_cost),
            weight_kg,
            weight_cost: round2(weight_cost),
            service_speed: speed,
            speed_multiplier,
        },
    }
}

fn speed_multiplier(speed: &str) -> f64 {
    match speed {
        "express" => EXPRESS_MULTIPLIER,
        "same_day" => SAME_DAY_MULTIPLIER,
        _ => STANDARD_MULTIPLIER,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
