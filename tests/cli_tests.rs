/// CLI-level tests: argument handling, exact output bytes, and the median
/// report on stderr.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const INPUT: &str = ">s1;size=8;\nACGTACGT\n>s2;size=2;\nTTTT\n>s3;size=4;\nGGGGCCCC\n>s4;size=4;\nAAAACCCC\n";

fn seqrank() -> Command {
    Command::cargo_bin("seqrank").unwrap()
}

#[test]
fn sort_orders_records_and_reports_median() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let output = dir.path().join("out.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args(["sort", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Median abundance: 4"));

    let out = fs::read_to_string(&output).unwrap();
    assert_eq!(
        out,
        ">s1;size=8;\nACGTACGT\n>s3;size=4;\nGGGGCCCC\n>s4;size=4;\nAAAACCCC\n>s2;size=2;\nTTTT\n"
    );
}

#[test]
fn sort_writes_to_stdout_by_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args(["sort", input.to_str().unwrap(), "--top-n", "1", "--quiet"])
        .assert()
        .success()
        .stdout(">s1;size=8;\nACGTACGT\n");
}

#[test]
fn sort_filters_by_abundance_window() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args([
            "sort",
            input.to_str().unwrap(),
            "--min-size",
            "3",
            "--max-size",
            "7",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(">s3;size=4;\nGGGGCCCC\n>s4;size=4;\nAAAACCCC\n");
}

#[test]
fn sort_relabels_with_prefix_and_sizeout() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args([
            "sort",
            input.to_str().unwrap(),
            "--relabel",
            "OTU_",
            "--sizeout",
            "--top-n",
            "2",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(">OTU_1;size=8;\nACGTACGT\n>OTU_2;size=4;\nGGGGCCCC\n");
}

#[test]
fn quiet_suppresses_median_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args(["sort", input.to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Median").not());
}

#[test]
fn relabel_schemes_are_mutually_exclusive() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args([
            "sort",
            input.to_str().unwrap(),
            "--relabel-sha1",
            "--relabel-md5",
        ])
        .assert()
        .failure();
}

#[test]
fn invalid_range_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args([
            "sort",
            input.to_str().unwrap(),
            "--min-size",
            "10",
            "--max-size",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

#[test]
fn missing_input_fails_with_io_exit_code() {
    seqrank()
        .args(["sort", "/nonexistent/in.fasta"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    let config = dir.path().join("seqrank.toml");
    fs::write(&input, INPUT).unwrap();
    fs::write(&config, "[sort]\ntop_n = 1\n").unwrap();

    seqrank()
        .args([
            "sort",
            input.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(">s1;size=8;\nACGTACGT\n");
}

#[test]
fn stats_reports_median_in_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.fasta");
    fs::write(&input, INPUT).unwrap();

    seqrank()
        .args(["stats", input.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"median_abundance\": 4.0"));
}
