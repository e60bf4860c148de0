use assert_cmd::Command;

#[test]
fn short_version_flag_prints_exact_version_line() {
    Command::cargo_bin("nyx")
        .unwrap()
        .arg("-V")
        .assert()
        .success()
        .stdout(format!("Nyx {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn long_version_flag_matches_short_form() {
    Command::cargo_bin("nyx")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("Nyx {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_flag_wins_inside_a_cluster() {
    Command::cargo_bin("nyx")
        .unwrap()
        .args(["-qV", "-c", "0"])
        .assert()
        .success()
        .stdout(format!("Nyx {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_long_flag_exits_with_two() {
    Command::cargo_bin("nyx")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .code(2);
}
