use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use vlandoc_cli::{Args, run};

/// Collects all .cfg files from a directory
fn collect_cfg_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("cfg")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Samples are at workspace root, relative to workspace not the crate
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
        no_collapse: false,
        no_width_hint: false,
        layout: None,
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_cfg_files(&samples_dir());
    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(sample_path, &output_path)) {
            failed_samples.push((sample_path.clone(), e));
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }

    println!("✅ All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_cfg_files(&samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpected_successes = Vec::new();

    for sample_path in &error_samples {
        let output_path = temp_dir.path().join("error_output.txt");

        if run(&args_for(sample_path, &output_path)).is_ok() {
            unexpected_successes.push(sample_path.clone());
        }
    }

    if !unexpected_successes.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpected_successes {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpected_successes.len()
        );
    }

    println!(
        "✅ All {} error samples failed as expected",
        error_samples.len()
    );
}

#[test]
fn e2e_output_file_contains_table() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = samples_dir().join("procurve-2920.cfg");
    let output = temp_dir.path().join("core-sw-01.txt");

    run(&args_for(&input, &output)).expect("Failed to render sample");

    let wiki = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = wiki.lines().collect();

    assert_eq!(lines[0], "|< 100% - - - 3em 3em 3em 3em >|");
    assert!(lines[1].starts_with("^ core-sw-01 ^^^ VLAN configuration"));
    assert!(lines[2].starts_with("^ Port"));
    assert!(lines.iter().any(|line| line.contains("Trk1")));
    assert!(lines.iter().any(|line| line.contains("esx-01")));
}

#[test]
fn e2e_overrides_apply() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = samples_dir().join("procurve-2920.cfg");
    let collapsed = temp_dir.path().join("collapsed.txt");
    let expanded = temp_dir.path().join("expanded.txt");

    run(&args_for(&input, &collapsed)).unwrap();
    run(&Args {
        no_collapse: true,
        no_width_hint: true,
        ..args_for(&input, &expanded)
    })
    .unwrap();

    let collapsed = fs::read_to_string(collapsed).unwrap();
    let expanded = fs::read_to_string(expanded).unwrap();

    assert!(collapsed.starts_with("|<"));
    assert!(!expanded.starts_with("|<"));
    assert!(expanded.lines().count() > collapsed.lines().count());
}

#[test]
fn e2e_config_file_is_used() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[wiki]\nwidth_hint = false\n").unwrap();

    let input = samples_dir().join("stacked-modules.cfg");
    let output = temp_dir.path().join("dist.txt");

    run(&Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..args_for(&input, &output)
    })
    .unwrap();

    let wiki = fs::read_to_string(output).unwrap();
    assert!(wiki.starts_with("^ dist-5406 "));
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("missing.cfg");
    let output = temp_dir.path().join("out.txt");

    assert!(run(&args_for(&input, &output)).is_err());
}
