// バイナリのエントリーポイントのテスト
use std::process::Command;

fn run_binary(path: &str, args: &[&str]) -> std::process::Output {
    Command::new(path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_prints_greeting_only() {
    let output = run_binary(env!("CARGO_BIN_EXE_meal_factory"), &[]);

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Hello world!\n");
}

#[test]
fn test_greeting_is_repeatable() {
    for _ in 0..2 {
        let output = run_binary(env!("CARGO_BIN_EXE_meal_factory"), &[]);
        assert_eq!(output.stdout, b"Hello world!\n");
    }
}

#[test]
fn test_arguments_are_ignored() {
    let cases: [&[&str]; 6] = [
        &["meat"],
        &["--help"],
        &["--version"],
        &["-x"],
        &["-h", "veggie"],
        &["--", "extra"],
    ];

    for args in cases {
        let output = run_binary(env!("CARGO_BIN_EXE_meal_factory"), args);

        assert_eq!(output.status.code(), Some(0), "args={args:?}");
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "Hello world!\n",
            "args={args:?}"
        );
    }
}

#[test]
fn test_expression_demo_output() {
    let output = run_binary(env!("CARGO_BIN_EXE_expression_demo"), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "-1\n8\n");
}

#[test]
fn test_expression_demo_logs_to_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_expression_demo"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "-1\n8\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("division_sample = -1"));
    assert!(stderr.contains("nested_call_sample = 8"));
}
