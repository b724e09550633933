//! # kin-core
//!
//! Core formulas, conversions and history types for kinecalc.
//!
//! Everything here derives from the single kinematic identity
//! `a = (vF - vi) / Δt`:
//! - Speed conversions between m/s and km/h
//! - The five closed-form formulas (final velocity, initial velocity,
//!   elapsed time, acceleration, displacement)
//! - `Computation`, a tagged record of one formula applied to its inputs
//! - The append-only `History` ledger and the `Calculator` session that owns it
//! - Reference data: worked examples and the common-speeds table
//! - The startup self-check scenarios

pub mod calculator;
pub mod computation;
pub mod convert;
pub mod enums;
pub mod errors;
pub mod formulas;
pub mod history;
pub mod reference;
pub mod self_check;

pub use calculator::Calculator;
pub use computation::Computation;
pub use enums::CalculationKind;
pub use errors::KinematicsError;
pub use history::{History, HistoryEntry};
