//! The calculation session: formulas plus the ledger that records them.

use crate::computation::Computation;
use crate::errors::KinematicsError;
use crate::formulas;
use crate::history::History;

/// Default number of decimal places in rendered results.
pub const DEFAULT_DECIMALS: usize = 2;

/// Session-scoped calculator. Owns its [`History`]; nothing is shared
/// between calculators.
#[derive(Debug, Clone)]
pub struct Calculator {
    history: History,
    decimals: usize,
    record_history: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: History::new(),
            decimals: DEFAULT_DECIMALS,
            record_history: true,
        }
    }

    /// Decimal places used when rendering recorded formulas.
    #[must_use]
    pub const fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Whether successful computations are appended to the history.
    #[must_use]
    pub const fn with_recording(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    #[must_use]
    pub const fn decimals(&self) -> usize {
        self.decimals
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Evaluate `computation` and record it on success.
    ///
    /// A failed computation leaves the history untouched.
    ///
    /// # Errors
    /// Propagates the precondition failure of the underlying formula.
    pub fn compute(&mut self, computation: Computation) -> Result<f64, KinematicsError> {
        let result = computation.evaluate()?;
        if self.record_history {
            let formula = computation.substitution(result, self.decimals);
            self.history.record(computation, result, formula);
        }
        Ok(result)
    }

    /// # Errors
    /// See [`formulas::final_velocity`].
    pub fn final_velocity(
        &mut self,
        initial_velocity: f64,
        acceleration: f64,
        time: f64,
    ) -> Result<f64, KinematicsError> {
        self.compute(Computation::FinalVelocity {
            initial_velocity,
            acceleration,
            time,
        })
    }

    /// # Errors
    /// See [`formulas::initial_velocity`].
    pub fn initial_velocity(
        &mut self,
        final_velocity: f64,
        acceleration: f64,
        time: f64,
    ) -> Result<f64, KinematicsError> {
        self.compute(Computation::InitialVelocity {
            final_velocity,
            acceleration,
            time,
        })
    }

    /// # Errors
    /// See [`formulas::elapsed_time`].
    pub fn elapsed_time(
        &mut self,
        initial_velocity: f64,
        final_velocity: f64,
        acceleration: f64,
    ) -> Result<f64, KinematicsError> {
        self.compute(Computation::Time {
            initial_velocity,
            final_velocity,
            acceleration,
        })
    }

    /// # Errors
    /// See [`formulas::acceleration`].
    pub fn acceleration(
        &mut self,
        initial_velocity: f64,
        final_velocity: f64,
        time: f64,
    ) -> Result<f64, KinematicsError> {
        self.compute(Computation::Acceleration {
            initial_velocity,
            final_velocity,
            time,
        })
    }

    /// Displacement is not a ledger kind and is never recorded.
    #[must_use]
    pub fn displacement(&self, initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
        formulas::displacement(initial_velocity, acceleration, time)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::Calculator;
    use crate::enums::CalculationKind;

    #[test]
    fn records_successful_computation() {
        let mut calc = Calculator::new();
        let vf = calc.final_velocity(10.0, 2.0, 5.0).expect("valid inputs");

        assert_eq!(calc.history().len(), 1);
        let entry = &calc.history().list()[0];
        assert_eq!(entry.kind(), CalculationKind::FinalVelocity);
        assert_relative_eq!(entry.result(), vf);
        assert_eq!(entry.formula(), "vF = 10 + (2)×5 = 20.00 m/s");
    }

    #[test]
    fn clear_empties_history() {
        let mut calc = Calculator::new();
        calc.final_velocity(10.0, 2.0, 5.0).expect("valid inputs");
        calc.clear_history();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn failure_does_not_touch_history() {
        let mut calc = Calculator::new();
        calc.acceleration(5.0, 25.0, 4.0).expect("valid inputs");
        assert!(calc.elapsed_time(0.0, 10.0, 0.0).is_err());
        assert!(calc.initial_velocity(30.0, 5.0, -1.0).is_err());
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn displacement_is_not_recorded() {
        let calc = Calculator::new();
        assert_relative_eq!(calc.displacement(0.0, 3.0, 8.0), 96.0);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn recording_can_be_disabled() {
        let mut calc = Calculator::new().with_recording(false);
        calc.initial_velocity(30.0, 5.0, 4.0).expect("valid inputs");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn decimals_shape_recorded_formula() {
        let mut calc = Calculator::new().with_decimals(0);
        calc.elapsed_time(0.0, 15.0, 3.0).expect("valid inputs");
        assert_eq!(calc.history().list()[0].formula(), "Δt = (15 - 0)/3 = 5 s");
    }

    #[test]
    fn recorded_results_are_recomputable() {
        let mut calc = Calculator::new();
        calc.final_velocity(1.5, -0.25, 12.0).expect("valid inputs");
        calc.initial_velocity(3.0, 9.81, 0.5).expect("valid inputs");
        calc.elapsed_time(4.0, -8.0, -2.0).expect("valid inputs");
        calc.acceleration(0.0, 80.0, 20.0).expect("valid inputs");

        for entry in calc.history() {
            let recomputed = entry.computation().evaluate().expect("recorded inputs are valid");
            assert_eq!(recomputed.to_bits(), entry.result().to_bits());
        }
    }
}
