#![cfg(unix)]

use crate::common::LauncherFixture;

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn relative_target_receives_translated_arguments() {
    let fixture = LauncherFixture::new();
    fixture.write_fake_encoder("encoders/SvtAv1EncApp", 0);
    fixture.write_redirect("encoders/SvtAv1EncApp");

    let output = fixture.run(&[
        "-",
        "--output",
        "out.ivf",
        "-y",
        "--photon-noise-table",
        "grain.tbl",
        "--preset",
        "4",
    ]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(
        fixture.received_args(),
        [
            "-i",
            "-",
            "-b",
            "out.ivf",
            "--fgs-table",
            "grain.tbl",
            "--preset",
            "4"
        ]
    );
}

#[cfg(debug_assertions)]
#[test]
fn debug_build_prints_command_line_before_running() {
    let fixture = LauncherFixture::new();
    fixture.write_fake_encoder("SvtAv1EncApp", 0);
    fixture.write_redirect("SvtAv1EncApp");

    let output = fixture.run(&["-", "--output", "out.ivf", "-y"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let expected = format!(
        "\"{}\" \"-i\" \"-\" \"-b\" \"out.ivf\"",
        fixture.resolved_dir().join("SvtAv1EncApp").display()
    );
    let stderr = stderr(&output);
    assert!(
        stderr.lines().any(|line| line == expected),
        "stderr should contain {expected}, got:\n{stderr}"
    );
}

#[test]
fn absolute_target_is_used_verbatim() {
    let fixture = LauncherFixture::new();
    let encoder = fixture.write_fake_encoder("elsewhere/encoder-core", 0);
    fixture.write_redirect(&encoder.display().to_string());

    let output = fixture.run(&["--keyint", "240"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(fixture.received_args(), ["--keyint", "240"]);
}

#[test]
fn arguments_with_spaces_survive_as_one_token() {
    let fixture = LauncherFixture::new();
    fixture.write_fake_encoder("SvtAv1EncApp", 0);
    fixture.write_redirect("SvtAv1EncApp");

    let output = fixture.run(&["--output", "my clip.ivf"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(fixture.received_args(), ["-b", "my clip.ivf"]);
}

#[cfg(target_os = "linux")]
#[test]
fn launcher_invoked_through_symlink_uses_real_location() {
    let fixture = LauncherFixture::new();
    fixture.write_fake_encoder("SvtAv1EncApp", 0);
    fixture.write_redirect("SvtAv1EncApp");
    let elsewhere = tempfile::tempdir().expect("can create temporary directory");
    let link = elsewhere.path().join("rav1e");
    std::os::unix::fs::symlink(&fixture.launcher, &link).expect("can create symlink");

    let output = fixture.run_from(&link, &["-y"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(fixture.received_args().is_empty());
}

#[cfg(not(feature = "propagate-exit-status"))]
#[test]
fn encoder_failure_still_exits_zero() {
    let fixture = LauncherFixture::new();
    fixture.write_fake_encoder("SvtAv1EncApp", 3);
    fixture.write_redirect("SvtAv1EncApp");

    let output = fixture.run(&["--preset", "4"]);

    assert_eq!(output.status.code(), Some(0), "stderr:\n{}", stderr(&output));
    assert_eq!(fixture.received_args(), ["--preset", "4"]);
}

#[cfg(not(feature = "propagate-exit-status"))]
#[test]
fn missing_target_still_exits_zero() {
    let fixture = LauncherFixture::new();
    fixture.write_redirect("does-not-exist");

    let output = fixture.run(&[]);

    assert_eq!(output.status.code(), Some(0), "stderr:\n{}", stderr(&output));
}

#[cfg(feature = "propagate-exit-status")]
#[test]
fn encoder_failure_is_propagated() {
    let fixture = LauncherFixture::new();
    fixture.write_fake_encoder("SvtAv1EncApp", 3);
    fixture.write_redirect("SvtAv1EncApp");

    let output = fixture.run(&[]);

    assert_eq!(output.status.code(), Some(3), "stderr:\n{}", stderr(&output));
}
