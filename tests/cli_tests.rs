//! End-to-end tests of the `default-reference` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use default_reference::{LaneMask, ReferenceFile};

fn cmd() -> Command {
    Command::cargo_bin("default-reference").expect("binary should build")
}

/// Install a reference file under `root` with the given content
fn install(root: &Path, reference: ReferenceFile, content: &[u8]) -> PathBuf {
    let path = reference
        .segments()
        .iter()
        .fold(root.to_path_buf(), |p, s| p.join(s));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn full_install() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    install(dir.path(), ReferenceFile::Sequences, b">1\nACGT\n");
    install(dir.path(), ReferenceFile::Taxonomy, b"foo bar baz");
    install(dir.path(), ReferenceFile::Alignment, b">1\nAC-GT\n");
    dir
}

#[test]
fn test_locate_installed_reference() {
    let dir = full_install();

    cmd()
        .arg("--root")
        .arg(dir.path())
        .args(["locate", "taxonomy"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "gg_13_8_otus/taxonomy/97_otu_taxonomy.txt\n",
        ));
}

#[test]
fn test_locate_missing_reference_fails() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--root")
        .arg(dir.path())
        .args(["locate", "alignment"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is missing from installation"))
        .stderr(predicate::str::contains("85_otus.fasta"));
}

#[test]
fn test_locate_json() {
    let dir = full_install();

    let output = cmd()
        .arg("--root")
        .arg(dir.path())
        .args(["--format", "json", "locate", "sequences"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reference"], "sequences");
    assert!(json["path"]
        .as_str()
        .unwrap()
        .ends_with("rep_set/97_otus.fasta"));
}

#[test]
fn test_mask_prints_lane_mask() {
    let mask = LaneMask::default_16s();

    cmd()
        .arg("mask")
        .assert()
        .success()
        .stdout(format!("{}\n", mask.as_str()));
}

#[test]
fn test_mask_json_stats() {
    let output = cmd().args(["mask", "-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["length"], 7682);
    assert_eq!(json["informative_columns"], 1287);
}

#[test]
fn test_list_reports_installation_state() {
    let dir = tempfile::tempdir().unwrap();
    install(dir.path(), ReferenceFile::Taxonomy, b"foo bar baz");

    let output = cmd()
        .arg("--root")
        .arg(dir.path())
        .args(["list", "--md5", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["reference"], "sequences");
    assert_eq!(entries[0]["exists"], false);
    assert!(entries[0].get("md5").is_none());

    assert_eq!(entries[1]["reference"], "taxonomy");
    assert_eq!(entries[1]["exists"], true);
    assert_eq!(entries[1]["size"], 11);
    assert_eq!(entries[1]["md5"], "ab07acbb1e496801937adfa772424bf7");
}

#[test]
fn test_checksum_md5sum_format() {
    let dir = full_install();
    let path = dir.path().join("gg_13_8_otus/taxonomy/97_otu_taxonomy.txt");

    cmd()
        .arg("checksum")
        .arg(&path)
        .args(["--block-size", "3"])
        .assert()
        .success()
        .stdout(format!(
            "ab07acbb1e496801937adfa772424bf7  {}\n",
            path.display()
        ));
}

#[test]
fn test_checksum_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty");
    fs::write(&path, b"").unwrap();

    cmd()
        .arg("checksum")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "d41d8cd98f00b204e9800998ecf8427e",
        ));
}

#[test]
fn test_checksum_expect() {
    let dir = full_install();
    let path = dir.path().join("gg_13_8_otus/taxonomy/97_otu_taxonomy.txt");

    cmd()
        .arg("checksum")
        .arg(&path)
        .args(["--expect", "AB07ACBB1E496801937ADFA772424BF7"])
        .assert()
        .success();

    cmd()
        .arg("checksum")
        .arg(&path)
        .args(["--expect", "d41d8cd98f00b204e9800998ecf8427e"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MD5 mismatch"));
}

#[test]
fn test_checksum_rejects_zero_block_size() {
    let dir = full_install();
    let path = dir.path().join("gg_13_8_otus/taxonomy/97_otu_taxonomy.txt");

    cmd()
        .arg("checksum")
        .arg(&path)
        .args(["--block-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block size must be at least 1"));
}

#[test]
fn test_checksum_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("checksum")
        .arg(dir.path().join("absent.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to checksum"));
}

#[test]
fn test_filter_alignment_to_file() {
    let mask = LaneMask::default_16s();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("aligned.fasta");
    let output = dir.path().join("filtered.fasta");

    let row = "A".repeat(mask.len());
    fs::write(&input, format!(">seq1\n{row}\n>seq2\n{row}\n")).unwrap();

    cmd()
        .arg("filter-alignment")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered 2 records"));

    let filtered = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = filtered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], ">seq1");
    assert_eq!(lines[1].len(), mask.informative_columns());
}

#[test]
fn test_filter_alignment_wrong_width() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("aligned.fasta");
    fs::write(&input, ">narrow\nACGT\n").unwrap();

    cmd()
        .arg("filter-alignment")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'narrow' has 4 columns"));
}

#[test]
fn test_filter_alignment_failure_leaves_no_output() {
    let mask = LaneMask::default_16s();
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("aligned.fasta");
    let output = dir.path().join("filtered.fasta");

    // First record is valid, second is too narrow
    let row = "A".repeat(mask.len());
    fs::write(&input, format!(">good\n{row}\n>bad\nAC\n")).unwrap();

    cmd()
        .arg("filter-alignment")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'bad' has 2 columns"));

    assert!(!output.exists());
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("aligned.fasta")]);
}

#[test]
fn test_filter_alignment_replaces_existing_output_only_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("aligned.fasta");
    let output = dir.path().join("filtered.fasta");
    fs::write(&input, ">narrow\nACGT\n").unwrap();
    fs::write(&output, ">previous\nACGT\n").unwrap();

    cmd()
        .arg("filter-alignment")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&output).unwrap(), ">previous\nACGT\n");
}
