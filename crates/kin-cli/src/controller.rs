//! The interactive menu loop.
//!
//! ```text
//! Main ──8──▶ Converter ──0──▶ Main
//!   │                            │
//!   └──0 / end of input──▶ Terminated ◀── end of input
//! ```
//!
//! Every command runs to completion or fails with a [`SessionError`]. Failures
//! other than I/O are reported and the loop stays in the same state; a failed
//! command never records anything.

use std::io::{self, BufRead, Write};

use kin_core::{CalculationKind, Calculator, Computation};

use crate::error::SessionError;
use crate::menu::{self, ConverterCommand, MainCommand, MenuState};
use crate::output::{self, table::TableOptions};
use crate::prompt::Prompter;
use crate::ui::UiPrefs;

const CHOOSE_PROMPT: &str = "\nChoose an option: ";

/// Presentation switches resolved from config and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub decimals: usize,
    pub banner: bool,
    pub offer_conversion: bool,
    pub ui: UiPrefs,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            decimals: kin_core::calculator::DEFAULT_DECIMALS,
            banner: true,
            offer_conversion: true,
            ui: UiPrefs::default(),
        }
    }
}

pub struct Controller<R, W> {
    calculator: Calculator,
    prompter: Prompter<R>,
    out: W,
    options: SessionOptions,
    state: MenuState,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub const fn new(
        calculator: Calculator,
        prompter: Prompter<R>,
        out: W,
        options: SessionOptions,
    ) -> Self {
        Self {
            calculator,
            prompter,
            out,
            options,
            state: MenuState::Main,
        }
    }

    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    #[cfg(test)]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        if self.options.banner {
            writeln!(self.out, "{}", output::banner())?;
        }
        while self.state() != MenuState::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Present the current menu once and handle one selection.
    pub fn step(&mut self) -> io::Result<()> {
        match self.state {
            MenuState::Main => self.main_step(),
            MenuState::Converter => self.converter_step(),
            MenuState::Terminated => Ok(()),
        }
    }

    fn main_step(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", menu::main_menu())?;
        let Some(token) = self.read_selection()? else {
            return Ok(());
        };

        match MainCommand::parse(&token) {
            Some(command) => {
                let outcome = self.execute_main(command);
                self.settle(outcome)
            }
            None => self.invalid_option(&token),
        }
    }

    fn converter_step(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", menu::converter_menu())?;
        let Some(token) = self.read_selection()? else {
            return Ok(());
        };

        match ConverterCommand::parse(&token) {
            Some(command) => {
                let outcome = self.execute_converter(command);
                self.settle(outcome)
            }
            None => self.invalid_option(&token),
        }
    }

    /// Read a menu token. `None` means nothing to dispatch this round.
    fn read_selection(&mut self) -> io::Result<Option<String>> {
        match self.prompter.read_line(&mut self.out, CHOOSE_PROMPT) {
            Ok(token) => Ok(Some(token)),
            Err(SessionError::Closed) => {
                self.terminate()?;
                Ok(None)
            }
            Err(error) => {
                self.settle(Err(error))?;
                Ok(None)
            }
        }
    }

    fn execute_main(&mut self, command: MainCommand) -> Result<(), SessionError> {
        match command {
            MainCommand::Solve(kind) => self.solve(kind),
            MainCommand::Displacement => self.displacement(),
            MainCommand::ShowHistory => {
                writeln!(
                    self.out,
                    "{}",
                    output::history_listing(self.calculator.history())
                )?;
                Ok(())
            }
            MainCommand::WorkedExamples => {
                writeln!(
                    self.out,
                    "\n{}",
                    output::worked_examples(self.options.decimals)
                )?;
                Ok(())
            }
            MainCommand::OpenConverter => {
                self.state = MenuState::Converter;
                Ok(())
            }
            MainCommand::ClearHistory => {
                let dropped = self.calculator.history().len();
                self.calculator.clear_history();
                tracing::debug!(dropped, "history cleared");
                writeln!(self.out, "History cleared!")?;
                Ok(())
            }
            MainCommand::Exit => {
                self.terminate()?;
                Ok(())
            }
        }
    }

    fn execute_converter(&mut self, command: ConverterCommand) -> Result<(), SessionError> {
        let decimals = self.options.decimals;
        match command {
            ConverterCommand::MpsToKmh => {
                writeln!(self.out, "\n--- m/s → km/h ---")?;
                let speed = self
                    .prompter
                    .read_number(&mut self.out, "Enter the speed in m/s: ")?;
                for line in output::mps_to_kmh_lines(speed, decimals) {
                    writeln!(self.out, "{line}")?;
                }
            }
            ConverterCommand::KmhToMps => {
                writeln!(self.out, "\n--- km/h → m/s ---")?;
                let speed = self
                    .prompter
                    .read_number(&mut self.out, "Enter the speed in km/h: ")?;
                for line in output::kmh_to_mps_lines(speed, decimals) {
                    writeln!(self.out, "{line}")?;
                }
            }
            ConverterCommand::SpeedTable => {
                let options = TableOptions {
                    max_width: self.options.ui.term_width,
                };
                writeln!(self.out, "\n{}", output::speed_table(options))?;
            }
            ConverterCommand::Back => self.state = MenuState::Main,
        }
        Ok(())
    }

    fn solve(&mut self, kind: CalculationKind) -> Result<(), SessionError> {
        writeln!(self.out, "\n--- {} ---", kind.label().to_uppercase())?;
        writeln!(self.out, "Formula: {}", kind.formula())?;

        let mut values = [0.0; 3];
        for (slot, symbol) in values.iter_mut().zip(kind.input_symbols()) {
            *slot = self.prompter.read_number(&mut self.out, &input_prompt(symbol))?;
        }

        let computation = Computation::from_inputs(kind, values);
        let result = self.calculator.compute(computation)?;
        tracing::debug!(
            %kind,
            result,
            history_len = self.calculator.history().len(),
            "computation finished"
        );

        let line = format!(
            "Result: {}",
            computation.substitution(result, self.options.decimals)
        );
        writeln!(self.out, "\n{}", self.options.ui.success(&line))?;

        if self.options.offer_conversion
            && matches!(
                kind,
                CalculationKind::FinalVelocity | CalculationKind::InitialVelocity
            )
        {
            self.offer_conversion(kind, result)?;
        }
        Ok(())
    }

    fn offer_conversion(&mut self, kind: CalculationKind, speed: f64) -> Result<(), SessionError> {
        let prompt = format!(
            "\nConvert the {} to km/h? (y/n): ",
            kind.label().to_lowercase()
        );
        if self.prompter.confirm(&mut self.out, &prompt)? {
            for line in output::mps_to_kmh_lines(speed, self.options.decimals) {
                writeln!(self.out, "   {line}")?;
            }
        }
        Ok(())
    }

    fn displacement(&mut self) -> Result<(), SessionError> {
        writeln!(self.out, "\n--- DISPLACEMENT ---")?;
        writeln!(self.out, "Formula: {}", output::DISPLACEMENT_FORMULA)?;

        let initial_velocity = self
            .prompter
            .read_number(&mut self.out, &input_prompt("vi"))?;
        let acceleration = self
            .prompter
            .read_number(&mut self.out, &input_prompt("a"))?;
        let time = self.prompter.read_number(&mut self.out, &input_prompt("t"))?;

        let displacement = self
            .calculator
            .displacement(initial_velocity, acceleration, time);
        tracing::debug!(displacement, "displacement computed");

        let line = format!(
            "Result: {}",
            output::displacement_substitution(
                initial_velocity,
                acceleration,
                time,
                displacement,
                self.options.decimals,
            )
        );
        writeln!(self.out, "\n{}", self.options.ui.success(&line))?;
        Ok(())
    }

    fn terminate(&mut self) -> io::Result<()> {
        tracing::debug!(
            recorded = self.calculator.history().len(),
            "session terminated"
        );
        self.state = MenuState::Terminated;
        writeln!(self.out, "Program finished!")
    }

    fn invalid_option(&mut self, token: &str) -> io::Result<()> {
        tracing::debug!(token, "invalid menu option");
        writeln!(self.out, "{}", self.options.ui.failure("Invalid option!"))
    }

    /// Report a recoverable failure; only I/O errors escape the loop.
    fn settle(&mut self, outcome: Result<(), SessionError>) -> io::Result<()> {
        let Err(error) = outcome else {
            return Ok(());
        };

        let message = match error {
            SessionError::Io(io_error) => return Err(io_error),
            SessionError::InvalidInput(cause) => {
                tracing::debug!(quantity = cause.quantity(), %cause, "input rejected");
                format!("Error: {cause}")
            }
            SessionError::MalformedNumber { raw } => {
                tracing::debug!(raw = raw.as_str(), "malformed number");
                "Please enter a valid number!".to_string()
            }
            aborted @ (SessionError::Cancelled | SessionError::Closed) => {
                tracing::debug!(%aborted, "prompt aborted");
                return writeln!(self.out, "{}", self.options.ui.notice("Operation cancelled"));
            }
        };
        writeln!(self.out, "{}", self.options.ui.failure(&message))
    }
}

fn input_prompt(symbol: &str) -> String {
    let label = match symbol {
        "vi" => "Initial velocity",
        "vf" => "Final velocity",
        "a" => "Acceleration",
        "t" => "Time",
        other => other,
    };
    format!("{label} ({}): ", kin_core::computation::symbol_unit(symbol))
}
