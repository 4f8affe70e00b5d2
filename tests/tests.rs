use assert_cmd::prelude::*;
use lazy_static::lazy_static;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::{contains, is_empty, PredicateStrExt};
use regex::Regex;
use std::process::Command;
use walkdir::WalkDir;

lazy_static! {
    static ref ROW_REGEX: Regex =
        Regex::new(r"^\d+ \d+ \d+ \d+\.\d{6} \d+\.\d{6} \d+\.\d{6} \d+\.\d{6}$").unwrap();
}

const CPG_ROWS: [&str; 3] = [
    "100 5001 5002 0.600000 0.400000 0.500000 0.500000",
    "2000 6001 6002 0.350000 0.450000 0.400000 0.600000",
    "5000 7001 7002 0.050000 0.900000 0.500000 0.500000",
];

fn stdout_of(args: &[&str]) -> String {
    let output = Command::cargo_bin("rustycpg")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn cli_no_such_file() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-i", "tests/no_such_file.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Read error"));
}

#[test]
fn cli_empty_stdin() {
    assert_cmd::Command::cargo_bin("rustycpg")
        .unwrap()
        .write_stdin("")
        .assert()
        .success()
        .stdout(is_empty());
}

#[test]
fn cli_empty_file() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-i", "tests/input/empty.xml", "30"])
        .assert()
        .success()
        .stdout(is_empty());
}

#[test]
fn cli_stdin_scenario() {
    let xml = r#"<ExchangeSet>
<SnpInfo rsId="5001"><SnpLoc genomicAssembly="37:GRCh37" start="100"/>
  <SsInfo ssOrientToRs="fwd"><AlleleFreq allele="C" freq="0.6"/><AlleleFreq allele="T" freq="0.4"/></SsInfo>
</SnpInfo>
<SnpInfo rsId="5002"><SnpLoc genomicAssembly="37:GRCh37" start="101"/>
  <SsInfo ssOrientToRs="fwd"><AlleleFreq allele="A" freq="0.5"/><AlleleFreq allele="G" freq="0.5"/></SsInfo>
</SnpInfo>
</ExchangeSet>"#;
    assert_cmd::Command::cargo_bin("rustycpg")
        .unwrap()
        .arg("30")
        .write_stdin(xml)
        .assert()
        .success()
        .stdout(contains("100 5001 5002 0.600000 0.400000 0.500000 0.500000").trim());
}

#[test]
fn cli_cpg_rows() {
    let stdout = stdout_of(&["-i", "tests/input/cpg.xml", "30"]);
    let rows = stdout.lines().collect::<Vec<_>>();
    assert_eq!(rows, CPG_ROWS[..2].to_vec());

    let stdout = stdout_of(&["-i", "tests/input/cpg.xml", "4"]);
    let rows = stdout.lines().collect::<Vec<_>>();
    assert_eq!(rows, CPG_ROWS.to_vec());
    assert!(rows.iter().all(|row| ROW_REGEX.is_match(row)));
}

#[test]
fn cli_higher_threshold_is_subset() {
    let mut previous: Option<Vec<String>> = None;
    for threshold in &["4", "30", "50", "100"] {
        let rows = stdout_of(&["-i", "tests/input/cpg.xml", *threshold])
            .lines()
            .map(String::from)
            .collect::<Vec<_>>();
        if let Some(previous) = previous {
            assert!(rows.iter().all(|row| previous.contains(row)));
        }
        previous = Some(rows);
    }
    assert_eq!(previous, Some(Vec::new()));
}

#[test]
fn cli_other_build() {
    // only rs6002 and rs8001 have GRCh38 coordinates and they are far apart
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-b", "38.1:GRCh38.p2", "-i", "tests/input/cpg.xml", "30"])
        .assert()
        .success()
        .stdout(is_empty());
}

#[test]
fn cli_gzip_matches_plain() {
    let gz_inputs = WalkDir::new("tests/input")
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "gz"))
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();
    assert!(!gz_inputs.is_empty());

    for gz in gz_inputs {
        let plain = gz.with_extension("");
        let run = |path: &std::path::Path| {
            Command::cargo_bin("rustycpg")
                .unwrap()
                .args(&["-i", path.to_str().unwrap(), "4"])
                .output()
                .unwrap()
        };
        let (gz_out, plain_out) = (run(&gz), run(&plain));
        assert_eq!(gz_out.status.code(), plain_out.status.code());
        assert_eq!(gz_out.stdout, plain_out.stdout);
    }
}

#[test]
fn cli_malformed_xml() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-i", "tests/input/malformed.xml"])
        .assert()
        .failure()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("Parse error"));
}

#[test]
fn cli_missing_rs_id() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-i", "tests/input/missing_rsid.xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("rsId").and(contains("SnpInfo")));
}

#[test]
fn cli_threshold_out_of_range() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-i", "tests/input/cpg.xml", "150"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("between 0 and 100"));
}

#[test]
fn cli_quiet_still_reports_errors() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-q", "-i", "tests/input/malformed.xml"])
        .assert()
        .failure()
        .stderr(contains("Parse error"));
}

#[test]
fn cli_truncated_xml() {
    Command::cargo_bin("rustycpg")
        .unwrap()
        .args(&["-i", "tests/input/truncated.xml", "4"])
        .assert()
        .failure()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("is not closed"));
}
