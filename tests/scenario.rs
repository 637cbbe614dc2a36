use spacecraft_kinematics::config::{ConfigError, load_parameters};
use spacecraft_kinematics::kinematics::{KinematicsError, ParameterSet, compute};

#[test]
fn canonical_manifest_matches_builtin_reference() {
    let params = load_parameters("configs/canonical.toml")
        .expect("canonical toml")
        .validate()
        .expect("valid parameters");
    assert_eq!(params, ParameterSet::canonical());
}

#[test]
fn fuel_starved_manifest_runs_dry() {
    let params = load_parameters("configs/fuel_starved.yaml")
        .expect("fuel starved yaml")
        .validate()
        .expect("valid parameters");
    assert!(matches!(
        compute(&params),
        Err(KinematicsError::FuelExhausted { .. })
    ));
}

#[test]
fn text_velocity_in_manifest_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "velocity_km_h: warp nine\n").unwrap();
    let err = load_parameters(&path)
        .expect("yaml parses")
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid(KinematicsError::InvalidArgument(_))
    ));
    assert!(err.to_string().contains("velocity_km_h"));
}

#[test]
fn missing_manifest_is_an_io_error() {
    assert!(matches!(
        load_parameters("configs/does_not_exist.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn library_version_is_exposed() {
    assert_eq!(spacecraft_kinematics::version(), "0.1.0");
}
