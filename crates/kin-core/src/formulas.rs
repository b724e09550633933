//! Closed-form rearrangements of `a = (vF - vi) / Δt`.
//!
//! Inputs are SI base units: velocities in m/s, acceleration in m/s²,
//! time in s, distance in m.
//!
//! The time preconditions are deliberately not uniform. `final_velocity`
//! accepts `t == 0` (no time elapsed, `vF == vi`) while `initial_velocity`
//! and `acceleration` reject it. `displacement` has no precondition at all.

use crate::errors::KinematicsError;

/// `vF = vi + a·Δt`
///
/// # Errors
/// [`KinematicsError::NegativeTime`] when `time < 0`.
pub fn final_velocity(
    initial_velocity: f64,
    acceleration: f64,
    time: f64,
) -> Result<f64, KinematicsError> {
    if time < 0.0 {
        return Err(KinematicsError::NegativeTime { time });
    }
    Ok(initial_velocity + acceleration * time)
}

/// `vi = vF - a·Δt`
///
/// # Errors
/// [`KinematicsError::NonPositiveTime`] when `time <= 0`.
pub fn initial_velocity(
    final_velocity: f64,
    acceleration: f64,
    time: f64,
) -> Result<f64, KinematicsError> {
    if time <= 0.0 {
        return Err(KinematicsError::NonPositiveTime { time });
    }
    Ok(final_velocity - acceleration * time)
}

/// `Δt = (vF - vi) / a`
///
/// A negative result is returned as-is: it means the final velocity lies
/// behind the initial one for that acceleration.
///
/// # Errors
/// [`KinematicsError::ZeroAcceleration`] when `acceleration == 0`.
pub fn elapsed_time(
    initial_velocity: f64,
    final_velocity: f64,
    acceleration: f64,
) -> Result<f64, KinematicsError> {
    if acceleration == 0.0 {
        return Err(KinematicsError::ZeroAcceleration);
    }
    Ok((final_velocity - initial_velocity) / acceleration)
}

/// `a = (vF - vi) / Δt`
///
/// # Errors
/// [`KinematicsError::NonPositiveTime`] when `time <= 0`.
pub fn acceleration(
    initial_velocity: f64,
    final_velocity: f64,
    time: f64,
) -> Result<f64, KinematicsError> {
    if time <= 0.0 {
        return Err(KinematicsError::NonPositiveTime { time });
    }
    Ok((final_velocity - initial_velocity) / time)
}

/// `s = vi·t + ½·a·t²`
#[must_use]
pub fn displacement(initial_velocity: f64, acceleration: f64, time: f64) -> f64 {
    initial_velocity * time + 0.5 * acceleration * time.powi(2)
}
