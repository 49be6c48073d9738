// ABOUTME: Integration tests for the enhanced-qis CLI binary.
// ABOUTME: Covers file and stdin input, JSON reports, output files and argument errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GRADES_URL: &str = "https://qis.example.de/qisserver/rds?state=notenspiegelStudent";

fn qis_cmd() -> Command {
    Command::cargo_bin("enhanced-qis").unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn rewrites_grade_overview_from_file() {
    qis_cmd()
        .arg("--html")
        .arg(fixture("notenspiegel.html"))
        .arg("--url")
        .arg(GRADES_URL)
        .arg("--year")
        .arg("2026")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note (2.10)"))
        .stdout(predicate::str::contains("Pflichtbereich").not());
}

#[test]
fn json_report() {
    let output = qis_cmd()
        .arg("--html")
        .arg(fixture("notenspiegel.html"))
        .arg("--url")
        .arg(GRADES_URL)
        .arg("--year")
        .arg("2026")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["mode"], "grade_overview");
    assert_eq!(json["grades"]["removed"], 5);
    assert_eq!(json["grades"]["header_suffix"], " (2.10)");
}

#[test]
fn reads_latin1_from_stdin() {
    let mut page = b"<form><table></table><table><tr><th class=\"tabelleheader\">Note</th></tr>".to_vec();
    page.extend_from_slice(
        b"<tr><td>1</td><td>Pr\xfcfung</td><td>PL</td><td>SoSe 26</td><td>1,3</td><td>bestanden</td><td>5</td></tr>",
    );
    page.extend_from_slice(b"</table></form>");

    qis_cmd()
        .arg("--url")
        .arg(GRADES_URL)
        .arg("--charset")
        .arg("iso-8859-1")
        .write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Prüfung"))
        .stdout(predicate::str::contains("Note (1.30)"));
}

#[test]
fn output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.html");

    qis_cmd()
        .arg("--html")
        .arg(fixture("pruefungsanmeldung.html"))
        .arg("--url")
        .arg("https://qis.example.de/qisserver/rds?state=prfAnmStudent")
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written.matches("color: rgb(0, 151, 0);").count(), 2);
}

#[test]
fn unknown_page_is_logged_and_echoed() {
    qis_cmd()
        .arg("--url")
        .arg("https://qis.example.de/qisserver/rds?state=user")
        .write_stdin("<p>Startseite</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Startseite</p>"))
        .stderr(predicate::str::contains("could not identify site"));
}

#[test]
fn english_flag_and_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("qis.json");
    fs::write(&config_path, r#"{ "palette": { "passed": "lime" }, "year": 2026 }"#).unwrap();

    qis_cmd()
        .arg("--url")
        .arg(GRADES_URL)
        .arg("--english")
        .arg("--config")
        .arg(&config_path)
        .write_stdin(
            "<form><table></table><table><tr><th class=\"tabelleheader\">Grade</th></tr>\
             <tr><td>1</td><td>Analysis</td><td>PL</td><td>WiSe 25/26</td><td>2,0</td><td>passed</td><td>6</td></tr>\
             </table></form>",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("background-color: lime;"))
        .stdout(predicate::str::contains("Grade (2.00)"));
}

#[test]
fn invalid_url_fails() {
    qis_cmd()
        .arg("--url")
        .arg("not a url")
        .write_stdin("<p></p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn missing_url_fails() {
    qis_cmd()
        .arg("--html")
        .arg(fixture("notenspiegel.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url is required"));
}

#[test]
fn missing_input_file_fails() {
    qis_cmd()
        .arg("--html")
        .arg("/nonexistent/notenspiegel.html")
        .arg("--url")
        .arg(GRADES_URL)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading file"));
}
