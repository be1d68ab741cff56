use crate::common::LauncherFixture;

#[test]
fn missing_redirect_file_exits_one_and_names_path() {
    let fixture = LauncherFixture::new();

    let output = fixture.run(&["--output", "out.ivf"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected = fixture.resolved_config_path().display().to_string();
    assert!(
        stderr.contains(&expected),
        "stderr should name {expected}, got:\n{stderr}"
    );
    assert!(
        stderr.contains("Can't open config file"),
        "unexpected stderr:\n{stderr}"
    );
    let prefix = format!("{}: ", fixture.launcher.display());
    assert!(
        stderr.starts_with(&prefix),
        "stderr should start with {prefix:?}, got:\n{stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_redirect_file_is_a_configuration_error() {
    let fixture = LauncherFixture::new();
    std::fs::write(fixture.config_path(), "").expect("can write redirect file");

    let output = fixture.run(&[]);

    assert_eq!(output.status.code(), Some(1));
}
