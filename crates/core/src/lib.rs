//! Core units, constants, and conversion helpers for the spacecraft kinematics workspace.

/// Conversion constants between the units the calculator mixes.
pub mod constants {
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Metres per kilometre.
    pub const METRES_PER_KM: f64 = 1_000.0;
    /// Multiplier taking an acceleration in m/s² to km/h² (3600² / 1000).
    pub const M_S2_TO_KM_H2: f64 = SECONDS_PER_HOUR * SECONDS_PER_HOUR / METRES_PER_KM;
}

/// Rate conversions.
pub mod units {
    use super::constants::M_S2_TO_KM_H2;

    /// Convert an acceleration in m/s² to km/h².
    #[inline]
    pub fn m_s2_to_km_h2(v: f64) -> f64 {
        v * M_S2_TO_KM_H2
    }
}

/// Time conversions.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }
}
