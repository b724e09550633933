//! Known-answer scenarios evaluated at startup.

use crate::computation::Computation;
use crate::errors::KinematicsError;

/// Absolute tolerance for comparing a scenario result to its expected value.
pub const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckCase {
    pub computation: Computation,
    pub expected: f64,
}

pub const CHECK_CASES: [CheckCase; 4] = [
    CheckCase {
        computation: Computation::FinalVelocity {
            initial_velocity: 10.0,
            acceleration: 2.0,
            time: 5.0,
        },
        expected: 20.0,
    },
    CheckCase {
        computation: Computation::InitialVelocity {
            final_velocity: 30.0,
            acceleration: 5.0,
            time: 4.0,
        },
        expected: 10.0,
    },
    CheckCase {
        computation: Computation::Time {
            initial_velocity: 0.0,
            final_velocity: 15.0,
            acceleration: 3.0,
        },
        expected: 5.0,
    },
    CheckCase {
        computation: Computation::Acceleration {
            initial_velocity: 5.0,
            final_velocity: 25.0,
            time: 4.0,
        },
        expected: 5.0,
    },
];

/// Result of evaluating one [`CheckCase`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOutcome {
    pub case: CheckCase,
    pub actual: Result<f64, KinematicsError>,
}

impl CheckOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.actual
            .is_ok_and(|actual| (actual - self.case.expected).abs() <= TOLERANCE)
    }
}

/// Evaluate every case in [`CHECK_CASES`].
#[must_use]
pub fn run() -> Vec<CheckOutcome> {
    run_cases(&CHECK_CASES)
}

#[must_use]
pub fn run_cases(cases: &[CheckCase]) -> Vec<CheckOutcome> {
    cases
        .iter()
        .map(|case| CheckOutcome {
            case: *case,
            actual: case.computation.evaluate(),
        })
        .collect()
}
