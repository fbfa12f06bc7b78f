use std::io::Write;
use std::process::Command;

fn recursive_gen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_recursive-gen"))
}

#[test]
fn test_tiers_command() {
    let output = recursive_gen()
        .args(["tiers", "--max-leaves", "4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "3");
}

#[test]
fn test_sample_from_config_file() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config,
        "seed: 11\ncount: 4\nmax_leaves: 8\nshape: object\nchildren: {{ min: 1, max: 3 }}"
    )
    .unwrap();

    let output = recursive_gen()
        .arg("sample")
        .arg("--config")
        .arg(config.path())
        .args(["--count", "6"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let documents: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(documents.len(), 6);
    for doc in &documents {
        assert!(recursive_gen::count_leaves(doc) <= 8, "{doc}");
        assert!(doc.is_object() || doc.is_i64(), "{doc}");
    }
}

#[test]
fn test_sample_rejects_zero_budget() {
    let output = recursive_gen()
        .args(["sample", "--max-leaves", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("max_leaves must be at least 1"), "{stderr}");
}

#[test]
fn test_show_events_prints_retries() {
    let output = recursive_gen()
        .args(["sample", "--count", "30", "--max-leaves", "1", "--show-events"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exceeded max_leaves and had to be retried"), "{stderr}");
}
