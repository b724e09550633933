//! Text rendering for everything the session prints.
//!
//! Functions here build strings; the controller decides where they go.

use kin_core::computation::symbol_unit;
use kin_core::convert::{KMH_PER_MPS, kmh_to_meters_per_second, meters_per_second_to_kmh};
use kin_core::reference::{COMMON_SPEEDS, WORKED_EXAMPLES, WorkedExample};
use kin_core::{CalculationKind, History};

pub mod table;

const RULE: &str = "==================================================";

/// Formula overview shown before the first menu.
#[must_use]
pub fn banner() -> String {
    let mut lines = vec![
        "=== KINEMATICS CALCULATOR ===".to_string(),
        "Based on the equation: a = (vF - vi)/Δt".to_string(),
        "Derived forms:".to_string(),
    ];
    lines.extend(
        CalculationKind::ALL
            .iter()
            .map(|kind| format!("• {}", kind.formula())),
    );
    lines.push(format!("• {DISPLACEMENT_FORMULA}"));
    lines.join("\n")
}

pub const DISPLACEMENT_FORMULA: &str = "s = vi * t + (1/2) * a * t²";

/// `s = 0 * 8 + (1/2) * 3 * 8² = 96.00 m`
#[must_use]
pub fn displacement_substitution(
    initial_velocity: f64,
    acceleration: f64,
    time: f64,
    displacement: f64,
    decimals: usize,
) -> String {
    format!(
        "s = {initial_velocity} * {time} + (1/2) * {acceleration} * {time}² = {displacement:.decimals$} m"
    )
}

/// Numbered list of recorded computations.
#[must_use]
pub fn history_listing(history: &History) -> String {
    if history.is_empty() {
        return "No calculations yet".to_string();
    }

    let mut out = String::from("=== CALCULATION HISTORY ===");
    for (index, entry) in history.iter().enumerate() {
        out.push_str(&format!(
            "\n\n{}. {}:\n   {}",
            index + 1,
            entry.kind().label(),
            entry.formula()
        ));
    }
    out
}

/// The two lines printed for a m/s → km/h conversion.
#[must_use]
pub fn mps_to_kmh_lines(speed_mps: f64, decimals: usize) -> [String; 2] {
    let kmh = meters_per_second_to_kmh(speed_mps);
    [
        format!("{speed_mps} m/s = {kmh:.decimals$} km/h"),
        format!("Calculation: {speed_mps} × {KMH_PER_MPS} = {kmh:.decimals$}"),
    ]
}

/// The two lines printed for a km/h → m/s conversion.
#[must_use]
pub fn kmh_to_mps_lines(speed_kmh: f64, decimals: usize) -> [String; 2] {
    let mps = kmh_to_meters_per_second(speed_kmh);
    [
        format!("{speed_kmh} km/h = {mps:.decimals$} m/s"),
        format!("Calculation: {speed_kmh} ÷ {KMH_PER_MPS} = {mps:.decimals$}"),
    ]
}

/// The common-speeds table.
#[must_use]
pub fn speed_table(options: table::TableOptions) -> String {
    let rows = COMMON_SPEEDS
        .iter()
        .map(|row| {
            vec![
                format!("{:.0}", row.meters_per_second),
                format!("{:.1}", row.kmh()),
                row.situation.to_string(),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "COMMON SPEED CONVERSIONS\n{}",
        table::render_table(&["m/s", "km/h", "situation"], &rows, options)
    )
}

/// All worked examples, solved.
#[must_use]
pub fn worked_examples(decimals: usize) -> String {
    let mut out = format!("{RULE}\nWORKED EXAMPLES\n{RULE}");
    for (index, example) in WORKED_EXAMPLES.iter().enumerate() {
        out.push_str("\n\n");
        out.push_str(&worked_example(index + 1, example, decimals));
    }
    out
}

fn worked_example(number: usize, example: &WorkedExample, decimals: usize) -> String {
    let mut lines = vec![
        format!("{number}. {}:", example.title.to_uppercase()),
        format!("   {}", example.scenario),
        format!("   {}", example.question),
    ];

    let data = example
        .computation
        .inputs()
        .iter()
        .map(|(symbol, value)| describe_input(symbol, *value))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("   Data: {data}"));

    match example.solve() {
        Ok(result) => {
            let kind = example.computation.kind();
            lines.push(format!(
                "   Calculation: {}",
                example.computation.substitution(result, decimals)
            ));
            let mut answer = format!("   Answer: {} {result:.decimals$} {}", example.answer, kind.unit());
            if matches!(
                kind,
                CalculationKind::FinalVelocity | CalculationKind::InitialVelocity
            ) {
                answer.push_str(&format!(" ({:.1} km/h)", meters_per_second_to_kmh(result)));
            }
            lines.push(answer);
        }
        Err(error) => lines.push(format!("   Error: {error}")),
    }

    lines.join("\n")
}

fn describe_input(symbol: &str, value: f64) -> String {
    let unit = symbol_unit(symbol);
    if unit == "m/s" && value != 0.0 {
        format!(
            "{symbol} = {value} {unit} ({:.1} km/h)",
            meters_per_second_to_kmh(value)
        )
    } else {
        format!("{symbol} = {value} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use kin_core::Calculator;
    use pretty_assertions::assert_eq;

    use super::{
        banner, displacement_substitution, history_listing, kmh_to_mps_lines, mps_to_kmh_lines,
        speed_table, table::TableOptions, worked_examples,
    };

    #[test]
    fn banner_lists_every_rearrangement() {
        let text = banner();
        for formula in ["vF = vi + a×Δt", "vi = vF - a×Δt", "Δt = (vF - vi)/a", "a = (vF - vi)/Δt"] {
            assert!(text.contains(formula), "missing {formula}");
        }
        assert!(text.contains("s = vi * t"));
    }

    #[test]
    fn empty_history_message() {
        let calc = Calculator::new();
        assert_eq!(history_listing(calc.history()), "No calculations yet");
    }

    #[test]
    fn history_is_numbered_in_order() {
        let mut calc = Calculator::new();
        calc.final_velocity(10.0, 2.0, 5.0).expect("valid");
        calc.acceleration(5.0, 25.0, 4.0).expect("valid");

        assert_eq!(
            history_listing(calc.history()),
            "=== CALCULATION HISTORY ===\n\n\
             1. Final Velocity:\n   vF = 10 + (2)×5 = 20.00 m/s\n\n\
             2. Acceleration:\n   a = (25 - 5)/4 = 5.00 m/s²"
        );
    }

    #[test]
    fn displacement_line() {
        assert_eq!(
            displacement_substitution(0.0, 3.0, 8.0, 96.0, 2),
            "s = 0 * 8 + (1/2) * 3 * 8² = 96.00 m"
        );
    }

    #[test]
    fn conversion_lines() {
        let [summary, calc] = mps_to_kmh_lines(10.0, 2);
        assert_eq!(summary, "10 m/s = 36.00 km/h");
        assert_eq!(calc, "Calculation: 10 × 3.6 = 36.00");

        let [summary, _] = kmh_to_mps_lines(90.0, 1);
        assert_eq!(summary, "90 km/h = 25.0 m/s");
    }

    #[test]
    fn speed_table_has_every_row() {
        let table = speed_table(TableOptions::default());
        assert!(table.contains("Bullet train"));
        assert!(table.contains("720.0"));
        assert!(table.contains("108.0"));
        assert_eq!(table.lines().count(), 1 + 3 + 10 + 1);
    }

    #[test]
    fn worked_examples_show_answers() {
        let text = worked_examples(2);
        assert!(text.contains("Answer: The car reaches 24.00 m/s (86.4 km/h)"));
        assert!(text.contains("Data: vi = 25 m/s (90.0 km/h), vf = 0 m/s, a = -5 m/s²"));
        assert!(text.contains("Answer: The car stops in 5.00 s"));
        assert!(text.contains("Answer: The acceleration is 4.00 m/s²"));
    }
}
