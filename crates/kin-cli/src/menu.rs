//! Menu tokens, their commands, and the menu screens.

use kin_core::CalculationKind;

const RULE: &str = "==================================================";

/// Where the controller currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Converter,
    Terminated,
}

/// A selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Solve(CalculationKind),
    Displacement,
    ShowHistory,
    WorkedExamples,
    OpenConverter,
    ClearHistory,
    Exit,
}

impl MainCommand {
    /// Map a menu token to its command. Unknown tokens yield `None`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let command = match token.trim() {
            "1" => Self::Solve(CalculationKind::FinalVelocity),
            "2" => Self::Solve(CalculationKind::InitialVelocity),
            "3" => Self::Solve(CalculationKind::Time),
            "4" => Self::Solve(CalculationKind::Acceleration),
            "5" => Self::Displacement,
            "6" => Self::ShowHistory,
            "7" => Self::WorkedExamples,
            "8" => Self::OpenConverter,
            "9" => Self::ClearHistory,
            "0" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// A selection from the converter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterCommand {
    MpsToKmh,
    KmhToMps,
    SpeedTable,
    Back,
}

impl ConverterCommand {
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "1" => Some(Self::MpsToKmh),
            "2" => Some(Self::KmhToMps),
            "3" => Some(Self::SpeedTable),
            "0" => Some(Self::Back),
            _ => None,
        }
    }
}

#[must_use]
pub fn main_menu() -> String {
    [
        "",
        RULE,
        "Choose what to calculate:",
        "1 - Final Velocity (vF)",
        "2 - Initial Velocity (vi)",
        "3 - Time (Δt)",
        "4 - Acceleration (a)",
        "5 - Displacement (s)",
        "6 - Show history",
        "7 - Worked examples",
        "8 - Speed converter m/s ↔ km/h",
        "9 - Clear history",
        "0 - Exit",
    ]
    .join("\n")
}

#[must_use]
pub fn converter_menu() -> String {
    [
        "",
        RULE,
        "SPEED CONVERTER",
        RULE,
        "1 - m/s → km/h",
        "2 - km/h → m/s",
        "3 - Common speeds table",
        "0 - Back to main menu",
    ]
    .join("\n")
}
