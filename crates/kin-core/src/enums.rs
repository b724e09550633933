//! Calculation kinds recorded in the history ledger.

use std::fmt;

// ---------------------------------------------------------------------------
// CalculationKind
// ---------------------------------------------------------------------------

/// Which quantity a recorded computation solved for.
///
/// Displacement is computed by the calculator but never recorded, so it has
/// no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationKind {
    FinalVelocity,
    InitialVelocity,
    Time,
    Acceleration,
}

impl CalculationKind {
    pub const ALL: [Self; 4] = [
        Self::FinalVelocity,
        Self::InitialVelocity,
        Self::Time,
        Self::Acceleration,
    ];

    /// Return the `snake_case` identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinalVelocity => "final_velocity",
            Self::InitialVelocity => "initial_velocity",
            Self::Time => "time",
            Self::Acceleration => "acceleration",
        }
    }

    /// Human-readable heading shown in the history listing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FinalVelocity => "Final Velocity",
            Self::InitialVelocity => "Initial Velocity",
            Self::Time => "Time",
            Self::Acceleration => "Acceleration",
        }
    }

    /// SI unit of the solved quantity.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::FinalVelocity | Self::InitialVelocity => "m/s",
            Self::Time => "s",
            Self::Acceleration => "m/s²",
        }
    }

    /// Input symbols in the order the formula consumes them.
    #[must_use]
    pub const fn input_symbols(self) -> [&'static str; 3] {
        match self {
            Self::FinalVelocity => ["vi", "a", "t"],
            Self::InitialVelocity => ["vf", "a", "t"],
            Self::Time => ["vi", "vf", "a"],
            Self::Acceleration => ["vi", "vf", "t"],
        }
    }

    /// The rearranged formula in symbolic form.
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::FinalVelocity => "vF = vi + a×Δt",
            Self::InitialVelocity => "vi = vF - a×Δt",
            Self::Time => "Δt = (vF - vi)/a",
            Self::Acceleration => "a = (vF - vi)/Δt",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
