use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn help_documents_storage_options() {
    let mut cmd = cargo_bin_cmd!("cinelog");
    let output = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--database"), "help missing --database");
    assert!(text.contains("--in-memory"), "help missing --in-memory");
    assert!(text.contains("--single-user"), "help missing --single-user");
}

#[test]
fn help_documents_search_policy_knobs() {
    let mut cmd = cargo_bin_cmd!("cinelog");
    let output = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(
        text.contains("--fuzzy-cutoff"),
        "help missing --fuzzy-cutoff"
    );
    assert!(text.contains("--fuzzy-limit"), "help missing --fuzzy-limit");
}

#[test]
fn version_is_reported() {
    let mut cmd = cargo_bin_cmd!("cinelog");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("cinelog"));
}
