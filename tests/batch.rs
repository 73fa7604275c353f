use red_scare::app::{run_app, AppError, Cli};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const P3: &str = "3 2 1
a c
a
b
c
a -- b *
b -- c
";

const K2_LOOP: &str = "2 1

x x
x
y
x -- y
";

const BAD: &str = "3 1
a b
a
b
c
a -- z
";

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Temp dir should be created in test");
    for (name, content) in [
        ("P3.txt", P3),
        ("K2.txt", K2_LOOP),
        ("bad.txt", BAD),
        ("notes.md", "not an instance"),
    ] {
        fs::write(dir.path().join(name), content).expect("Fixture should be written in test");
    }
    dir
}

fn cli(data_dir: &Path, output: &Path, timeout_ms: Option<u64>) -> Cli {
    Cli {
        data_dir: data_dir.to_path_buf(),
        output: output.to_path_buf(),
        timeout_ms,
        quiet: true,
    }
}

#[test]
fn test_batch_writes_results_table() {
    let data = data_dir();
    let out_dir = tempfile::tempdir().expect("Temp dir should be created in test");
    let output = out_dir.path().join("results.txt");

    run_app(cli(data.path(), &output, None)).expect("Batch run should succeed");

    let table = fs::read_to_string(&output).expect("Results table should exist");
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(
        lines,
        vec![
            "instance\tn\tA\tF\tM\tN\tS",
            "K2.txt\t2\t0\t2\t-1\t0\t-1",
            "P3.txt\t3\t2\t4\t4\t-1\t2",
        ]
    );

    // Quiet runs leave no logs behind.
    assert!(!out_dir.path().join("red-scare.log").exists());
    assert!(!out_dir.path().join("walks.log").exists());
}

#[test]
fn test_zero_timeout_marks_every_cell_inconclusive() {
    let data = data_dir();
    let out_dir = tempfile::tempdir().expect("Temp dir should be created in test");
    let output = out_dir.path().join("results.txt");

    run_app(cli(data.path(), &output, Some(0))).expect("Batch run should succeed");

    let table = fs::read_to_string(&output).expect("Results table should exist");
    for row in table.lines().skip(1) {
        let cells: Vec<&str> = row.split('\t').collect();
        assert_eq!(cells.len(), 7);
        assert!(cells[2..].iter().all(|cell| *cell == "?"), "row: {}", row);
    }
}

#[test]
fn test_missing_data_dir_fails() {
    let out_dir = tempfile::tempdir().expect("Temp dir should be created in test");
    let err = run_app(cli(
        &out_dir.path().join("absent"),
        &out_dir.path().join("results.txt"),
        None,
    ))
    .expect_err("Missing directory should be rejected");

    assert!(matches!(err, AppError::InvalidPath(_)));
}
