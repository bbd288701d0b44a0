#![cfg(feature = "serde")]

use approx::assert_relative_eq;

use nmecon_runner::{Estimate, Initial, MethodConfig, MethodKind, Run, Status, run};

#[test]
fn reads_method_config_from_toml() {
    let config: MethodConfig = toml::from_str(
        r#"
        tolerance = 1e-6
        max_iters = 100
        kind = "bisection"
        "#,
    )
    .unwrap();

    assert_eq!(config, MethodConfig::new(MethodKind::Bisection, 1e-6, 100));

    let result = run(&|x: f64| x * x - 2.0, Initial::Interval([0.0, 2.0]), &config).unwrap();
    assert_eq!(result.status, Status::Converged);
}

#[test]
fn reads_every_method_kind_from_json() {
    for (name, kind) in [
        ("bisection", MethodKind::Bisection),
        ("newton", MethodKind::Newton),
        ("fixed_point", MethodKind::FixedPoint),
        ("polynomial_approximation", MethodKind::PolynomialApproximation),
        ("bracketing", MethodKind::Bracketing),
    ] {
        let json = format!(r#"{{"tolerance": 1e-8, "max_iters": 20, "kind": "{name}"}}"#);
        let config: MethodConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.kind, kind);
    }
}

#[test]
fn invalid_values_deserialize_but_fail_validation() {
    let config: MethodConfig =
        serde_json::from_str(r#"{"tolerance": -1.0, "max_iters": 20, "kind": "newton"}"#).unwrap();

    assert!(config.validate().is_err());
    assert!(run(&f64::sin, Initial::Guess(3.0), &config).is_err());
}

#[test]
fn negative_max_iters_do_not_deserialize() {
    let result: Result<MethodConfig, _> =
        serde_json::from_str(r#"{"tolerance": 1e-6, "max_iters": -5, "kind": "newton"}"#);

    assert!(result.is_err());
}

#[test]
fn initial_state_round_trips_through_json() {
    let initial: Initial = serde_json::from_str(r#"{"interval": [0.0, 2.0]}"#).unwrap();
    assert_eq!(initial, Initial::Interval([0.0, 2.0]));

    let initial: Initial = serde_json::from_str(r#"{"guess": 1.5}"#).unwrap();
    assert_eq!(initial, Initial::Guess(1.5));

    let initial: Initial = serde_json::from_str(r#"{"triple": [0.0, 1.0, 3.0]}"#).unwrap();
    assert_eq!(initial, Initial::Triple([0.0, 1.0, 3.0]));
}

#[test]
fn run_results_serialize() {
    let config = MethodConfig::new(MethodKind::PolynomialApproximation, 1e-3, 10);
    let result = run(&f64::sin, Initial::Interval([0.0, 1.0]), &config).unwrap();

    let json = serde_json::to_value(&result.trace).unwrap();
    let steps = json["steps"].as_array().unwrap();

    assert_eq!(steps.len(), result.trace.len());
    assert_eq!(steps[0]["iter"], 0);
    assert!(steps[0]["estimate"]["polynomial"]["coefficients"].is_array());
}

#[test]
fn whole_run_round_trips_through_json() {
    let config = MethodConfig::new(MethodKind::Newton, 1e-10, 50);
    let result = run(&|x: f64| x * x - 2.0, Initial::Guess(1.0), &config).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""status":"converged""#));

    let back: Run = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status, result.status);
    assert_eq!(back.trace.len(), result.trace.len());
    assert_relative_eq!(
        back.estimate.point().unwrap(),
        result.estimate.point().unwrap(),
        epsilon = 1e-15
    );
}

#[test]
fn polynomial_estimates_are_validated_on_read() {
    let good = r#"{"polynomial": {"domain": [0.0, 1.0], "coefficients": [2.0]}}"#;
    let estimate: Estimate = serde_json::from_str(good).unwrap();
    assert_eq!(estimate.polynomial().map(|p| p.eval(0.3)), Some(2.0));

    for bad in [
        r#"{"polynomial": {"coefficients": []}}"#,
        r#"{"polynomial": {"domain": [1.0, 1.0], "coefficients": [2.0]}}"#,
        r#"{"polynomial": {"domain": [1.0, 0.0], "coefficients": [2.0]}}"#,
    ] {
        assert!(serde_json::from_str::<Estimate>(bad).is_err(), "{bad}");
    }
}
