//! Fixed reference material: worked examples and common speeds.

use crate::computation::Computation;
use crate::convert::meters_per_second_to_kmh;
use crate::errors::KinematicsError;

/// A typical speed with a description of where it shows up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedReference {
    pub meters_per_second: f64,
    pub situation: &'static str,
}

impl SpeedReference {
    #[must_use]
    pub const fn kmh(&self) -> f64 {
        meters_per_second_to_kmh(self.meters_per_second)
    }
}

const fn speed(meters_per_second: f64, situation: &'static str) -> SpeedReference {
    SpeedReference {
        meters_per_second,
        situation,
    }
}

/// Rows of the common-speeds conversion table, slowest first.
pub const COMMON_SPEEDS: [SpeedReference; 10] = [
    speed(1.0, "Slow walk"),
    speed(5.0, "Running"),
    speed(10.0, "Fast cyclist"),
    speed(15.0, "Car in the city"),
    speed(25.0, "Car on the highway"),
    speed(30.0, "Urban speed limit (108 km/h)"),
    speed(40.0, "Highway speed limit"),
    speed(50.0, "Fast train"),
    speed(100.0, "Race car"),
    speed(200.0, "Bullet train"),
];

/// A word problem solved with one of the recorded formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkedExample {
    pub title: &'static str,
    pub scenario: &'static str,
    pub question: &'static str,
    /// Sentence stem completed by the computed value, e.g. "The car reaches".
    pub answer: &'static str,
    pub computation: Computation,
}

impl WorkedExample {
    /// # Errors
    /// Never for the built-in examples; propagated for completeness.
    pub fn solve(&self) -> Result<f64, KinematicsError> {
        self.computation.evaluate()
    }
}

pub const WORKED_EXAMPLES: [WorkedExample; 4] = [
    WorkedExample {
        title: "Accelerating car",
        scenario: "A car starts from rest and accelerates at 3 m/s² for 8 seconds.",
        question: "What is its final velocity?",
        answer: "The car reaches",
        computation: Computation::FinalVelocity {
            initial_velocity: 0.0,
            acceleration: 3.0,
            time: 8.0,
        },
    },
    WorkedExample {
        title: "Braking car",
        scenario: "A car at 25 m/s brakes with a deceleration of 5 m/s².",
        question: "How long does it take to stop?",
        answer: "The car stops in",
        computation: Computation::Time {
            initial_velocity: 25.0,
            final_velocity: 0.0,
            acceleration: -5.0,
        },
    },
    WorkedExample {
        title: "Free fall",
        scenario: "A ball is dropped and falls for 3 seconds (g = 9.8 m/s²).",
        question: "What is its final velocity?",
        answer: "The ball reaches",
        computation: Computation::FinalVelocity {
            initial_velocity: 0.0,
            acceleration: 9.8,
            time: 3.0,
        },
    },
    WorkedExample {
        title: "Airplane take-off",
        scenario: "An airplane accelerates from 0 to 80 m/s in 20 seconds.",
        question: "What is its acceleration?",
        answer: "The acceleration is",
        computation: Computation::Acceleration {
            initial_velocity: 0.0,
            final_velocity: 80.0,
            time: 20.0,
        },
    },
];
