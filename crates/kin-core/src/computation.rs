//! A single formula applied to its named inputs.

use crate::enums::CalculationKind;
use crate::errors::KinematicsError;
use crate::formulas;

/// SI unit for an input symbol as returned by [`Computation::inputs`].
#[must_use]
pub fn symbol_unit(symbol: &str) -> &'static str {
    match symbol {
        "vi" | "vf" => "m/s",
        "a" => "m/s²",
        "t" => "s",
        _ => "",
    }
}

/// One recordable computation. Each variant carries exactly the inputs its
/// formula consumes, so a ledger entry can always be re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Computation {
    FinalVelocity {
        initial_velocity: f64,
        acceleration: f64,
        time: f64,
    },
    InitialVelocity {
        final_velocity: f64,
        acceleration: f64,
        time: f64,
    },
    Time {
        initial_velocity: f64,
        final_velocity: f64,
        acceleration: f64,
    },
    Acceleration {
        initial_velocity: f64,
        final_velocity: f64,
        time: f64,
    },
}

impl Computation {
    /// Build the variant for `kind` from values ordered as
    /// [`CalculationKind::input_symbols`].
    #[must_use]
    pub const fn from_inputs(kind: CalculationKind, values: [f64; 3]) -> Self {
        let [first, second, third] = values;
        match kind {
            CalculationKind::FinalVelocity => Self::FinalVelocity {
                initial_velocity: first,
                acceleration: second,
                time: third,
            },
            CalculationKind::InitialVelocity => Self::InitialVelocity {
                final_velocity: first,
                acceleration: second,
                time: third,
            },
            CalculationKind::Time => Self::Time {
                initial_velocity: first,
                final_velocity: second,
                acceleration: third,
            },
            CalculationKind::Acceleration => Self::Acceleration {
                initial_velocity: first,
                final_velocity: second,
                time: third,
            },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CalculationKind {
        match self {
            Self::FinalVelocity { .. } => CalculationKind::FinalVelocity,
            Self::InitialVelocity { .. } => CalculationKind::InitialVelocity,
            Self::Time { .. } => CalculationKind::Time,
            Self::Acceleration { .. } => CalculationKind::Acceleration,
        }
    }

    /// Run the formula for this variant.
    ///
    /// # Errors
    /// Propagates the precondition failure of the underlying formula.
    pub fn evaluate(&self) -> Result<f64, KinematicsError> {
        match *self {
            Self::FinalVelocity {
                initial_velocity,
                acceleration,
                time,
            } => formulas::final_velocity(initial_velocity, acceleration, time),
            Self::InitialVelocity {
                final_velocity,
                acceleration,
                time,
            } => formulas::initial_velocity(final_velocity, acceleration, time),
            Self::Time {
                initial_velocity,
                final_velocity,
                acceleration,
            } => formulas::elapsed_time(initial_velocity, final_velocity, acceleration),
            Self::Acceleration {
                initial_velocity,
                final_velocity,
                time,
            } => formulas::acceleration(initial_velocity, final_velocity, time),
        }
    }

    /// Inputs as `(symbol, value)` pairs, in the order the formula reads them.
    #[must_use]
    pub const fn inputs(&self) -> [(&'static str, f64); 3] {
        match *self {
            Self::FinalVelocity {
                initial_velocity,
                acceleration,
                time,
            } => [("vi", initial_velocity), ("a", acceleration), ("t", time)],
            Self::InitialVelocity {
                final_velocity,
                acceleration,
                time,
            } => [("vf", final_velocity), ("a", acceleration), ("t", time)],
            Self::Time {
                initial_velocity,
                final_velocity,
                acceleration,
            } => [
                ("vi", initial_velocity),
                ("vf", final_velocity),
                ("a", acceleration),
            ],
            Self::Acceleration {
                initial_velocity,
                final_velocity,
                time,
            } => [
                ("vi", initial_velocity),
                ("vf", final_velocity),
                ("t", time),
            ],
        }
    }

    /// The formula with the inputs substituted and `result` rounded to
    /// `decimals` places, e.g. `vF = 10 + (2)×5 = 20.00 m/s`.
    #[must_use]
    pub fn substitution(&self, result: f64, decimals: usize) -> String {
        let unit = self.kind().unit();
        match *self {
            Self::FinalVelocity {
                initial_velocity,
                acceleration,
                time,
            } => format!(
                "vF = {initial_velocity} + ({acceleration})×{time} = {result:.decimals$} {unit}"
            ),
            Self::InitialVelocity {
                final_velocity,
                acceleration,
                time,
            } => format!(
                "vi = {final_velocity} - ({acceleration})×{time} = {result:.decimals$} {unit}"
            ),
            Self::Time {
                initial_velocity,
                final_velocity,
                acceleration,
            } => format!(
                "Δt = ({final_velocity} - {initial_velocity})/{acceleration} = {result:.decimals$} {unit}"
            ),
            Self::Acceleration {
                initial_velocity,
                final_velocity,
                time,
            } => format!(
                "a = ({final_velocity} - {initial_velocity})/{time} = {result:.decimals$} {unit}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Computation;
    use crate::enums::CalculationKind;
    use crate::errors::KinematicsError;

    #[test]
    fn final_velocity_substitution() {
        let computation = Computation::FinalVelocity {
            initial_velocity: 10.0,
            acceleration: 2.0,
            time: 5.0,
        };
        let result = computation.evaluate().expect("valid inputs");
        assert_eq!(
            computation.substitution(result, 2),
            "vF = 10 + (2)×5 = 20.00 m/s"
        );
    }

    #[test]
    fn time_substitution_keeps_sign_of_acceleration() {
        let computation = Computation::Time {
            initial_velocity: 25.0,
            final_velocity: 0.0,
            acceleration: -5.0,
        };
        let result = computation.evaluate().expect("valid inputs");
        assert_eq!(
            computation.substitution(result, 2),
            "Δt = (0 - 25)/-5 = 5.00 s"
        );
    }

    #[test]
    fn acceleration_substitution_respects_decimals() {
        let computation = Computation::Acceleration {
            initial_velocity: 0.0,
            final_velocity: 10.0,
            time: 3.0,
        };
        let result = computation.evaluate().expect("valid inputs");
        assert_eq!(
            computation.substitution(result, 3),
            "a = (10 - 0)/3 = 3.333 m/s²"
        );
    }

    #[test]
    fn evaluate_propagates_precondition_failure() {
        let computation = Computation::InitialVelocity {
            final_velocity: 30.0,
            acceleration: 5.0,
            time: 0.0,
        };
        assert_eq!(
            computation.evaluate(),
            Err(KinematicsError::NonPositiveTime { time: 0.0 })
        );
    }

    #[test]
    fn from_inputs_round_trips_through_inputs() {
        for kind in CalculationKind::ALL {
            let computation = Computation::from_inputs(kind, [1.0, 2.0, 3.0]);
            assert_eq!(computation.kind(), kind);

            let inputs = computation.inputs();
            let symbols: Vec<&str> = inputs.iter().map(|(symbol, _)| *symbol).collect();
            let values: Vec<f64> = inputs.iter().map(|(_, value)| *value).collect();
            assert_eq!(symbols, kind.input_symbols().to_vec());
            assert_eq!(values, vec![1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn kind_and_inputs_follow_variant() {
        let computation = Computation::Acceleration {
            initial_velocity: 5.0,
            final_velocity: 25.0,
            time: 4.0,
        };
        assert_eq!(computation.kind(), CalculationKind::Acceleration);
        assert_eq!(
            computation.inputs(),
            [("vi", 5.0), ("vf", 25.0), ("t", 4.0)]
        );
    }
}
