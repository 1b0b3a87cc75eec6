use csv::Trim;
use std::{fs, fs::File, path::Path, path::PathBuf, process::Command};
use transaction_insights::report::ReportRow;

fn read_rows<R: std::io::Read>(reader: R) -> Vec<ReportRow> {
    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut rows: Vec<ReportRow> = vec![];
    for record in rdr.deserialize() {
        rows.push(record.unwrap());
    }
    rows
}

fn run_case(case_dir: &Path) {
    let input_path = case_dir.join("transactions.json");
    let expected_output_path = case_dir.join("report.csv");
    let client_path = case_dir.join("client.txt");
    // Marker file for cases where a failing query must abort the run
    let expect_failure = case_dir.join("expect_failure").exists();

    assert!(input_path.exists());
    assert!(expect_failure || expected_output_path.exists());

    let mut command = Command::new(env!("CARGO_BIN_EXE_transaction_insights"));
    command.arg(&input_path);
    if client_path.exists() {
        let client = fs::read_to_string(&client_path).unwrap();
        command.arg(client.trim());
    }

    let output = command.output().expect("failed to execute binary");
    if expect_failure {
        assert!(!output.status.success(), "case {case_dir:?} should fail");
        return;
    }
    assert!(output.status.success(), "case {case_dir:?} failed");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut generated_res = read_rows(stdout.as_bytes());

    let file: File = File::open(expected_output_path).unwrap();
    let mut expected_res = read_rows(file);

    // Sorting to avoid issues with order
    generated_res.sort();
    expected_res.sort();

    assert_eq!(generated_res, expected_res, "case {case_dir:?}");
}

#[test]
fn test_integration() {
    let files_dir = PathBuf::from("./tests/files");

    for entry in fs::read_dir(&files_dir)
        .expect("cannot read files_dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
    {
        run_case(&entry.path());
    }
}

#[test]
fn test_that_missing_file_produces_empty_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_transaction_insights"))
        .arg("./tests/files/does_not_exist.json")
        .output()
        .expect("failed to execute binary");

    assert!(output.status.success());

    let rows = read_rows(output.stdout.as_slice());
    assert_eq!(rows.len(), 4);
    assert!(rows.contains(&ReportRow {
        query: "total_amount".into(),
        value: "0.00".into(),
    }));
}
