//! Report writers for kinematics results.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod text {
    use kinematics_calculator::ResultSet;
    use std::io::{self, Write};

    /// Write the three-line console report, values to two decimals.
    pub fn write_report(writer: &mut dyn Write, result: &ResultSet) -> io::Result<()> {
        writeln!(
            writer,
            "Corrected New Velocity: {:.2} km/h",
            result.new_velocity_km_h()
        )?;
        writeln!(
            writer,
            "Corrected New Distance: {:.2} km",
            result.new_distance_km()
        )?;
        writeln!(
            writer,
            "Corrected Remaining Fuel: {:.2} kg",
            result.remaining_fuel_kg()
        )
    }
}

pub mod json {
    use kinematics_calculator::{ParameterSet, ResultSet};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    #[derive(Serialize)]
    struct Report<'a> {
        parameters: &'a ParameterSet,
        results: &'a ResultSet,
    }

    /// Write parameters and results as a pretty-printed JSON document.
    pub fn write_report(
        writer: &mut dyn Write,
        params: &ParameterSet,
        result: &ResultSet,
    ) -> io::Result<()> {
        let report = Report {
            parameters: params,
            results: result,
        };
        to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinematics_calculator::{ParameterSet, compute};

    #[test]
    fn text_report_matches_console_format() {
        let result = compute(&ParameterSet::canonical()).unwrap();
        let mut buf = Vec::new();
        text::write_report(&mut buf, &result).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Corrected New Velocity: 48880.00 km/h\n\
             Corrected New Distance: 10000.00 km\n\
             Corrected Remaining Fuel: 3200.00 kg\n"
        );
    }

    #[test]
    fn json_report_nests_parameters_and_results() {
        let params = ParameterSet::canonical();
        let result = compute(&params).unwrap();
        let mut buf = Vec::new();
        json::write_report(&mut buf, &params, &result).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["parameters"]["time_s"], 3600.0);
        assert_eq!(value["results"]["fuel_consumed_kg"], 1800.0);
        assert_eq!(value["results"]["remaining_fuel_kg"], 3200.0);
    }

    #[test]
    fn writer_for_path_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.txt");
        {
            let mut writer = writer_for_path(&path).unwrap();
            writeln!(writer, "hello").unwrap();
        }
        assert_eq!(fs::read_to_string(path).unwrap(), "hello\n");
    }
}
