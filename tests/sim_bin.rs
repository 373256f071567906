use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_solo-battleship"))
        .args(["sim", "--difficulty", "hard", "--games", "3", "--seed", "12"])
        .output()
        .expect("failed to run solo-battleship");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let runs = v.as_array().expect("expected a list of runs");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["difficulty"], "hard");
    assert_eq!(runs[0]["games"], 3);
    assert!(runs[0]["max_shots"].as_u64().unwrap() <= 100);
}

#[test]
fn sim_binary_rejects_unknown_difficulty() {
    let output = Command::new(env!("CARGO_BIN_EXE_solo-battleship"))
        .args(["sim", "--difficulty", "nightmare"])
        .output()
        .expect("failed to run solo-battleship");
    assert!(!output.status.success());
}
