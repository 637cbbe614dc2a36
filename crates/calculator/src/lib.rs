//! Single-interval spacecraft kinematics: new velocity, distance travelled, and fuel remaining.
//!
//! Every operation validates its own inputs and fails fast. [`compute`] chains them and only
//! hands back a [`ResultSet`] once all of them succeeded, so callers never see partial results.

use kinematics_core::{time, units};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised by the calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(
        "fuel exhausted: burn requires {required_kg:.2} kg but only {available_kg:.2} kg remain"
    )]
    FuelExhausted { available_kg: f64, required_kg: f64 },
}

impl KinematicsError {
    fn not_finite(field: &str, value: f64) -> Self {
        KinematicsError::InvalidArgument(format!("{field} must be a finite number, got {value}"))
    }

    fn negative(field: &str, value: f64) -> Self {
        KinematicsError::InvalidArgument(format!("{field} must not be negative, got {value}"))
    }
}

fn finite(field: &str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::not_finite(field, value))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64, KinematicsError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        Err(KinematicsError::negative(field, value))
    } else {
        Ok(value)
    }
}

/// Validated, immutable input record for one kinematic interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSet {
    velocity_km_h: f64,
    acceleration_m_s2: f64,
    time_s: f64,
    initial_distance_km: f64,
    remaining_fuel_kg: f64,
    fuel_burn_rate_kg_s: f64,
}

impl ParameterSet {
    /// Build a parameter set, rejecting non-finite values and negative magnitudes.
    ///
    /// Acceleration is the only field allowed to be negative (deceleration).
    pub fn new(
        velocity_km_h: f64,
        acceleration_m_s2: f64,
        time_s: f64,
        initial_distance_km: f64,
        remaining_fuel_kg: f64,
        fuel_burn_rate_kg_s: f64,
    ) -> Result<Self, KinematicsError> {
        Ok(Self {
            velocity_km_h: non_negative("velocity_km_h", velocity_km_h)?,
            acceleration_m_s2: finite("acceleration_m_s2", acceleration_m_s2)?,
            time_s: non_negative("time_s", time_s)?,
            initial_distance_km: non_negative("initial_distance_km", initial_distance_km)?,
            remaining_fuel_kg: non_negative("remaining_fuel_kg", remaining_fuel_kg)?,
            fuel_burn_rate_kg_s: non_negative("fuel_burn_rate_kg_s", fuel_burn_rate_kg_s)?,
        })
    }

    /// The reference scenario: 10 000 km/h, 3 m/s² for one hour, 5 000 kg burning 0.5 kg/s.
    pub fn canonical() -> Self {
        Self {
            velocity_km_h: 10_000.0,
            acceleration_m_s2: 3.0,
            time_s: 3_600.0,
            initial_distance_km: 0.0,
            remaining_fuel_kg: 5_000.0,
            fuel_burn_rate_kg_s: 0.5,
        }
    }

    /// Initial velocity (km/h).
    pub fn velocity_km_h(&self) -> f64 {
        self.velocity_km_h
    }

    /// Constant acceleration over the interval (m/s²).
    pub fn acceleration_m_s2(&self) -> f64 {
        self.acceleration_m_s2
    }

    /// Elapsed interval (s).
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Distance already covered (km).
    pub fn initial_distance_km(&self) -> f64 {
        self.initial_distance_km
    }

    /// Fuel on board at the start of the interval (kg).
    pub fn remaining_fuel_kg(&self) -> f64 {
        self.remaining_fuel_kg
    }

    /// Fuel burn rate (kg/s).
    pub fn fuel_burn_rate_kg_s(&self) -> f64 {
        self.fuel_burn_rate_kg_s
    }
}

/// Outcome of one interval. Only [`compute`] constructs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultSet {
    new_velocity_km_h: f64,
    new_distance_km: f64,
    fuel_consumed_kg: f64,
    remaining_fuel_kg: f64,
}

impl ResultSet {
    /// Velocity at the end of the interval (km/h).
    pub fn new_velocity_km_h(&self) -> f64 {
        self.new_velocity_km_h
    }

    /// Distance at the end of the interval (km).
    pub fn new_distance_km(&self) -> f64 {
        self.new_distance_km
    }

    /// Fuel burnt during the interval (kg).
    pub fn fuel_consumed_kg(&self) -> f64 {
        self.fuel_consumed_kg
    }

    /// Fuel left at the end of the interval (kg).
    pub fn remaining_fuel_kg(&self) -> f64 {
        self.remaining_fuel_kg
    }
}

/// Convert seconds to hours, rejecting NaN and infinities.
pub fn seconds_to_hours(seconds: f64) -> Result<f64, KinematicsError> {
    Ok(time::seconds_to_hours(finite("seconds", seconds)?))
}

/// Velocity after accelerating for `time_s` seconds, in km/h.
///
/// Acceleration is converted from m/s² to km/h² before it meets the km/h velocity.
pub fn new_velocity(
    velocity_km_h: f64,
    acceleration_m_s2: f64,
    time_s: f64,
) -> Result<f64, KinematicsError> {
    let velocity_km_h = finite("velocity_km_h", velocity_km_h)?;
    let acceleration_m_s2 = finite("acceleration_m_s2", acceleration_m_s2)?;
    let hours = seconds_to_hours(non_negative("time_s", time_s)?)?;
    let acceleration_km_h2 = units::m_s2_to_km_h2(acceleration_m_s2);
    debug!(acceleration_km_h2, hours, "converted acceleration");
    finite("new_velocity_km_h", velocity_km_h + acceleration_km_h2 * hours)
}

/// Distance after travelling at `velocity_km_h` for `time_s` seconds, in km.
///
/// Velocity is held constant over the interval; acceleration does not contribute.
pub fn new_distance(
    initial_distance_km: f64,
    velocity_km_h: f64,
    time_s: f64,
) -> Result<f64, KinematicsError> {
    let initial_distance_km = finite("initial_distance_km", initial_distance_km)?;
    let velocity_km_h = finite("velocity_km_h", velocity_km_h)?;
    let hours = seconds_to_hours(non_negative("time_s", time_s)?)?;
    finite("new_distance_km", initial_distance_km + velocity_km_h * hours)
}

/// Fuel burnt over `time_s` seconds at `burn_rate_kg_s`, in kg.
///
/// A product too large for `f64` comes back as `+inf`; [`remaining_fuel`] treats it as exhaustion.
pub fn fuel_consumed(burn_rate_kg_s: f64, time_s: f64) -> Result<f64, KinematicsError> {
    let burn_rate_kg_s = non_negative("fuel_burn_rate_kg_s", burn_rate_kg_s)?;
    let time_s = non_negative("time_s", time_s)?;
    Ok(burn_rate_kg_s * time_s)
}

/// Fuel left after consuming `fuel_consumed_kg`, failing if the tank runs dry first.
pub fn remaining_fuel(
    remaining_fuel_kg: f64,
    fuel_consumed_kg: f64,
) -> Result<f64, KinematicsError> {
    let available_kg = non_negative("remaining_fuel_kg", remaining_fuel_kg)?;
    let required_kg = fuel_consumed_kg;
    if required_kg.is_nan() {
        return Err(KinematicsError::not_finite("fuel_consumed_kg", required_kg));
    }
    if required_kg < 0.0 {
        return Err(KinematicsError::negative("fuel_consumed_kg", required_kg));
    }
    // +inf consumption always exceeds a finite supply.
    if required_kg > available_kg {
        return Err(KinematicsError::FuelExhausted {
            available_kg,
            required_kg,
        });
    }
    Ok(available_kg - required_kg)
}

/// Run the full interval calculation.
pub fn compute(params: &ParameterSet) -> Result<ResultSet, KinematicsError> {
    let new_velocity_km_h = new_velocity(
        params.velocity_km_h,
        params.acceleration_m_s2,
        params.time_s,
    )?;
    let new_distance_km = new_distance(
        params.initial_distance_km,
        params.velocity_km_h,
        params.time_s,
    )?;
    let fuel_consumed_kg = fuel_consumed(params.fuel_burn_rate_kg_s, params.time_s)?;
    debug!(fuel_consumed_kg, "fuel consumed over interval");
    let remaining_fuel_kg = remaining_fuel(params.remaining_fuel_kg, fuel_consumed_kg)?;

    Ok(ResultSet {
        new_velocity_km_h,
        new_distance_km,
        fuel_consumed_kg,
        remaining_fuel_kg,
    })
}
