use tanhsinh_core::{generate, solve_radius, SolverConfig, SolverError};

// The noise floor 1e-300 is only reached long after every abscissa has
// rounded to exactly 1.0, so the full scan finds nothing.
#[test]
fn test_absurd_precision_reports_no_solution() {
    let config = SolverConfig::new(2f64.powi(-6), 300);
    assert_eq!(
        solve_radius(&config),
        Err(SolverError::NoSolutionFound { max_index: 1_000_000 })
    );
}

// 10^-400 underflows to zero and 10^400 overflows: still an error, not a panic.
#[test]
fn test_overflowing_precision_reports_no_solution() {
    let config = SolverConfig::new(2f64.powi(-6), 400).with_max_index(50_000);
    assert!(matches!(
        generate(&config),
        Err(SolverError::NoSolutionFound { max_index: 50_000 })
    ));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = generate(&SolverConfig::new(0.0, 6)).unwrap_err();
    assert!(err.to_string().contains("step_size"), "{}", err);

    let err = SolverError::NoSolutionFound { max_index: 42 };
    assert!(err.to_string().contains("42"));
}
