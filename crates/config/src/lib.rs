//! Parameter manifests and validation for the kinematics calculator.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use kinematics_calculator::{KinematicsError, ParameterSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// A parameter as it arrives from a manifest or the command line, before it is known to be numeric.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

impl ParameterValue {
    /// Interpret the value as a number, accepting numeric text such as `"10000"`.
    pub fn to_number(&self, field: &str) -> Result<f64, KinematicsError> {
        match self {
            ParameterValue::Number(value) => Ok(*value),
            ParameterValue::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(KinematicsError::InvalidArgument(format!(
                    "{field} must be a finite number, got {text:?}"
                ))),
            },
        }
    }
}

impl FromStr for ParameterValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(value) => ParameterValue::Number(value),
            Err(_) => ParameterValue::Text(s.to_string()),
        })
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

/// Unvalidated parameter record. Missing fields fall back to [`ParameterSet::canonical`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RawParameters {
    pub velocity_km_h: Option<ParameterValue>,
    pub acceleration_m_s2: Option<ParameterValue>,
    pub time_s: Option<ParameterValue>,
    pub initial_distance_km: Option<ParameterValue>,
    pub remaining_fuel_kg: Option<ParameterValue>,
    pub fuel_burn_rate_kg_s: Option<ParameterValue>,
}

impl RawParameters {
    /// Overlay every field set in `overrides` on top of `self`.
    pub fn apply(mut self, overrides: RawParameters) -> Self {
        let RawParameters {
            velocity_km_h,
            acceleration_m_s2,
            time_s,
            initial_distance_km,
            remaining_fuel_kg,
            fuel_burn_rate_kg_s,
        } = overrides;
        self.velocity_km_h = velocity_km_h.or(self.velocity_km_h);
        self.acceleration_m_s2 = acceleration_m_s2.or(self.acceleration_m_s2);
        self.time_s = time_s.or(self.time_s);
        self.initial_distance_km = initial_distance_km.or(self.initial_distance_km);
        self.remaining_fuel_kg = remaining_fuel_kg.or(self.remaining_fuel_kg);
        self.fuel_burn_rate_kg_s = fuel_burn_rate_kg_s.or(self.fuel_burn_rate_kg_s);
        self
    }

    /// Resolve defaults and validate into an immutable [`ParameterSet`].
    pub fn validate(&self) -> Result<ParameterSet, ConfigError> {
        let defaults = ParameterSet::canonical();
        let params = ParameterSet::new(
            resolve("velocity_km_h", &self.velocity_km_h, defaults.velocity_km_h())?,
            resolve(
                "acceleration_m_s2",
                &self.acceleration_m_s2,
                defaults.acceleration_m_s2(),
            )?,
            resolve("time_s", &self.time_s, defaults.time_s())?,
            resolve(
                "initial_distance_km",
                &self.initial_distance_km,
                defaults.initial_distance_km(),
            )?,
            resolve(
                "remaining_fuel_kg",
                &self.remaining_fuel_kg,
                defaults.remaining_fuel_kg(),
            )?,
            resolve(
                "fuel_burn_rate_kg_s",
                &self.fuel_burn_rate_kg_s,
                defaults.fuel_burn_rate_kg_s(),
            )?,
        )?;
        debug!(?params, "validated parameters");
        Ok(params)
    }
}

fn resolve(
    field: &str,
    value: &Option<ParameterValue>,
    default: f64,
) -> Result<f64, KinematicsError> {
    match value {
        Some(value) => value.to_number(field),
        None => Ok(default),
    }
}

/// Errors that can occur while loading or validating parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] KinematicsError),
}

/// Load a parameter manifest. `.toml` files are read as TOML, anything else as YAML.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<RawParameters, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading parameter manifest");
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_record_validates_to_canonical() {
        let params = RawParameters::default().validate().expect("canonical");
        assert_eq!(params, ParameterSet::canonical());
    }

    #[test]
    fn numeric_text_is_accepted() {
        let value: ParameterValue = " 10000 ".parse().unwrap();
        assert_eq!(value, ParameterValue::Number(10_000.0));
        let text = ParameterValue::Text("2.5".into());
        assert_eq!(text.to_number("time_s").unwrap(), 2.5);
    }

    #[test]
    fn non_numeric_velocity_is_invalid_argument() {
        let raw = RawParameters {
            velocity_km_h: Some("fast".parse().unwrap()),
            ..RawParameters::default()
        };
        match raw.validate() {
            Err(ConfigError::Invalid(KinematicsError::InvalidArgument(msg))) => {
                assert_eq!(msg, "velocity_km_h must be a finite number, got \"fast\"");
            }
            other => panic!("expected invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn nan_text_is_rejected_as_non_finite() {
        let raw = RawParameters {
            time_s: Some("NaN".parse().unwrap()),
            ..RawParameters::default()
        };
        assert!(matches!(
            raw.validate(),
            Err(ConfigError::Invalid(KinematicsError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn overrides_win_field_by_field() {
        let base = RawParameters {
            velocity_km_h: Some(1.0.into()),
            time_s: Some(60.0.into()),
            ..RawParameters::default()
        };
        let merged = base.apply(RawParameters {
            time_s: Some(120.0.into()),
            ..RawParameters::default()
        });
        assert_eq!(merged.velocity_km_h, Some(ParameterValue::Number(1.0)));
        assert_eq!(merged.time_s, Some(ParameterValue::Number(120.0)));
    }

    #[test]
    fn toml_manifest_with_integers_and_text() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "velocity_km_h = 12000\ntime_s = \"1800\"").unwrap();
        let params = load_parameters(file.path())
            .expect("toml")
            .validate()
            .expect("valid");
        assert_eq!(params.velocity_km_h(), 12_000.0);
        assert_eq!(params.time_s(), 1_800.0);
        assert_eq!(params.fuel_burn_rate_kg_s(), 0.5);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "velocity: 10000").unwrap();
        assert!(matches!(
            load_parameters(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
