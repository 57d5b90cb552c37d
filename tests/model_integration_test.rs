use baro_model::core::report::{self, OutputFormat};
use baro_model::{build_model, CliConfig};
use std::io::Write;
use tempfile::TempDir;

fn cli_config() -> CliConfig {
    CliConfig {
        model: None,
        pressures: vec![],
        depths: vec![],
        volumes: vec![],
        format: OutputFormat::Text,
        verbose: false,
    }
}

#[test]
fn test_default_sweep_matches_reference_output() {
    let config = cli_config();
    let (model, sweep) = build_model(&config).unwrap();
    assert_eq!(sweep, vec![1.0, 2.0, 3.0, 20.0]);

    let mut out = Vec::new();
    for pressure in sweep {
        let checkpoint = model.volumes_at_pressure(pressure, None).unwrap();
        report::write_checkpoint(&mut out, &checkpoint, OutputFormat::Text).unwrap();
    }

    let expected = "\
At 1 (total 5341.00)
lungs: 5000.00
middle_ear: 1.00
nasopharynx: 250.00
sinuses: 90.00

At 2 (total 2670.50)
lungs: 2456.67
middle_ear: 1.00
nasopharynx: 122.83
sinuses: 90.00

At 3 (total 1780.33)
lungs: 1608.89
middle_ear: 1.00
nasopharynx: 80.44
sinuses: 90.00

At 20 (total 267.05)
lungs: 167.67
middle_ear: 1.00
nasopharynx: 8.38
sinuses: 90.00

";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_json_sweep_is_one_object_per_line() {
    let config = CliConfig {
        pressures: vec![1.0, 2.0],
        format: OutputFormat::Json,
        ..cli_config()
    };
    let (model, sweep) = build_model(&config).unwrap();

    let mut out = Vec::new();
    for pressure in sweep {
        let checkpoint = model.volumes_at_pressure(pressure, None).unwrap();
        report::write_checkpoint(&mut out, &checkpoint, config.format).unwrap();
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["pressure"], 1.0);
    assert_eq!(first["volumes"]["lungs"], 5000.0);

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["pressure"], 2.0);
    assert_eq!(second["volumes"]["sinuses"], 90.0);
}

#[test]
fn test_model_file_drives_segments_and_sweep() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bottle.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"
connections = [["neck", "body"]]
pressures = [1.0, 4.0]

[model]
name = "bottle"

[[segments]]
name = "body"
initial_volume = 900.0
compressible = true

[[segments]]
name = "neck"
initial_volume = 100.0
compressible = false
"#
    )
    .unwrap();

    let config = CliConfig {
        model: Some(path.to_str().unwrap().to_string()),
        ..cli_config()
    };
    let (model, sweep) = build_model(&config).unwrap();
    assert_eq!(sweep, vec![1.0, 4.0]);
    assert!(model.segment("neck").unwrap().connections().contains("body"));

    let checkpoint = model.volumes_at_pressure(4.0, None).unwrap();
    // 1000/4 = 250 total; the rigid neck keeps its 100
    assert!((checkpoint.volumes["neck"] - 100.0).abs() < 1e-9);
    assert!((checkpoint.volumes["body"] - 150.0).abs() < 1e-9);
    assert!((checkpoint.total_volume() * 4.0 - 1000.0).abs() < 1e-9);
}

#[test]
fn test_missing_model_file_is_an_io_error() {
    let config = CliConfig {
        model: Some("no/such/model.toml".to_string()),
        ..cli_config()
    };
    assert!(matches!(
        build_model(&config),
        Err(baro_model::BaroError::IoError(_))
    ));
}

#[test]
fn test_volume_overrides_rebalance_the_split() {
    let config = CliConfig {
        volumes: vec!["lungs=250".to_string()],
        pressures: vec![2.0],
        ..cli_config()
    };
    let (model, sweep) = build_model(&config).unwrap();
    let checkpoint = model.volumes_at_pressure(sweep[0], None).unwrap();

    // lungs now matches the nasopharynx baseline, so the split is even
    assert!(
        (checkpoint.volumes["lungs"] - checkpoint.volumes["nasopharynx"]).abs() < 1e-9
    );
}

#[test]
fn test_depth_sweep_equals_pressure_sweep() {
    let by_depth = CliConfig {
        depths: vec![10.0],
        ..cli_config()
    };
    let by_pressure = CliConfig {
        pressures: vec![2.0],
        ..cli_config()
    };

    let (model_a, sweep_a) = build_model(&by_depth).unwrap();
    let (model_b, sweep_b) = build_model(&by_pressure).unwrap();
    assert_eq!(sweep_a, sweep_b);

    let a = model_a.volumes_at_pressure(sweep_a[0], None).unwrap();
    let b = model_b.volumes_at_pressure(sweep_b[0], None).unwrap();
    assert_eq!(a, b);
}
