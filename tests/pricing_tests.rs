use courier_backend::services::pricing::{self, BASE_FEE, PER_KG, PER_KM};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn total_matches_formula_for_every_speed() {
    let speeds = [("standard", 1.0), ("express", 1.35), ("same_day", 1.85)];
    let shipments = [(0.0, 0.0), (1.0, 0.5), (10.0, 2.0), (123.4, 17.25)];

    for (speed, multiplier) in speeds {
        for (distance_km, weight_kg) in shipments {
            let quote = pricing::estimate(distance_km, weight_kg, speed);
            let expected = round2((BASE_FEE + distance_km * PER_KM + weight_kg * PER_KG) * multiplier);
            assert_eq!(
                quote.total, expected,
                "{distance_km} km / {weight_kg} kg / {speed}"
            );
            assert_eq!(quote.breakdown.speed_multiplier, multiplier);
            assert_eq!(quote.breakdown.distance_km, distance_km);
            assert_eq!(quote.breakdown.weight_kg, weight_kg);
        }
    }
}

#[test]
fn worked_examples_from_the_rate_card() {
    // 5.00 + 7.50 + 1.20 = 13.70, x1.35 = 18.50
    assert_eq!(pricing::estimate(10.0, 2.0, "express").total, 18.50);
    // Base fee only.
    assert_eq!(pricing::estimate(0.0, 0.0, "standard").total, 5.00);
}

#[test]
fn negative_inputs_behave_like_zero() {
    let clamped = pricing::estimate(-10.0, -2.0, "same_day");
    let zeroed = pricing::estimate(0.0, 0.0, "same_day");
    assert_eq!(clamped, zeroed);
    assert_eq!(clamped.breakdown.distance_km, 0.0);
    assert_eq!(clamped.breakdown.weight_kg, 0.0);
}

#[test]
fn unrecognized_speed_falls_back_to_standard_pricing() {
    let overnight = pricing::estimate(8.0, 3.0, "overnight");
    let standard = pricing::estimate(8.0, 3.0, "standard");
    assert_eq!(overnight.total, standard.total);
    assert_eq!(overnight.breakdown.speed_multiplier, 1.0);
    assert_eq!(overnight.breakdown.service_speed, "overnight");
}

#[test]
fn component_costs_round_independently_of_total() {
    // 1.333 km -> 0.99975, displayed as 1.00; the total still uses the
    // unrounded subtotal before its single rounding step.
    let quote = pricing::estimate(1.333, 0.0, "standard");
    assert_eq!(quote.breakdown.distance_cost, 1.00);
    assert_eq!(quote.total, round2((BASE_FEE + 1.333 * PER_KM) * 1.0));
}

#[test]
fn mixed_case_speed_is_normalized() {
    let quote = pricing::estimate(10.0, 2.0, "Same_Day");
    assert_eq!(quote.breakdown.service_speed, "same_day");
    assert_eq!(quote.breakdown.speed_multiplier, 1.85);
}
