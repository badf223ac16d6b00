use std::process::Command;

fn run_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary")
}

#[test]
fn sim_binary_smoke() {
    let output = run_sim(&["1", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert!(v["status"] == "UserWon" || v["status"] == "ComputerWon");
    assert!(v["moves"].as_u64().unwrap() > 0);

    // the loser has no ships left
    let loser = if v["winner"] == "User" { "computer" } else { "user" };
    assert_eq!(v[loser]["ships_left"], 0);
}

#[test]
fn sim_binary_is_deterministic() {
    let a = run_sim(&["10", "20"]);
    let b = run_sim(&["10", "20"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn sim_binary_rejects_bad_arguments() {
    assert!(!run_sim(&["1"]).status.success());
    assert!(!run_sim(&["one", "2"]).status.success());
}
