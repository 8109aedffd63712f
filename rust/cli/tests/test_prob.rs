use serde_json::Value;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["liardice"];
    argv.extend_from_slice(args);
    let mut stdin = std::io::Cursor::new(Vec::new());
    let code = liardice_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn prob_json(own: &str, total: &str, quantity: &str, face: &str) -> Value {
    let (code, out, err) = run(&[
        "prob",
        "--own",
        own,
        "--total",
        total,
        "--quantity",
        quantity,
        "--face",
        face,
        "--json",
        "--seed",
        "3",
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).unwrap()
}

#[test]
fn held_bid_is_certain() {
    let json = prob_json("1,2,2,5,6", "10", "2", "2");
    assert_eq!(json["probability"].as_f64(), Some(1.0));
    assert_eq!(json["table"]["entries"][0]["probability"].as_f64(), Some(0.0));
}

#[test]
fn three_hidden_threes() {
    let json = prob_json("1,2,2,5,6", "10", "4", "3");
    assert_eq!(json["probability"].as_f64(), Some(51.0 / 243.0));
    assert_eq!(json["bid"]["quantity"].as_u64(), Some(4));
    assert_eq!(json["own"], serde_json::json!([1, 2, 2, 5, 6]));
}

#[test]
fn bid_over_the_table_is_called() {
    let json = prob_json("4,4", "4", "5", "4");
    assert_eq!(json["probability"].as_f64(), Some(0.0));
    assert_eq!(json["decision"]["action"].as_str(), Some("call_lie"));
}

#[test]
fn raise_quantities_follow_the_bid() {
    let json = prob_json("1,2,2,5,6", "10", "3", "1");
    let entries = json["table"]["entries"].as_array().unwrap();
    let quantities: Vec<u64> = entries[1..]
        .iter()
        .map(|e| e["quantity"].as_u64().unwrap())
        .collect();
    assert_eq!(quantities, vec![4, 7, 7, 7, 7, 7]);
}

#[test]
fn text_output_shows_table_and_decision() {
    let (code, out, _) = run(&[
        "prob", "--own", "4,4,4,4,4", "--total", "10", "--quantity", "2", "--face", "2",
        "--seed", "0",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Table:"));
    assert!(out.contains("Computer bids 2 x 4"), "{}", out);
}

#[test]
fn invalid_arguments_exit_with_error() {
    for args in [
        vec!["prob", "--own", "1,8", "--total", "4", "--quantity", "1", "--face", "2"],
        vec!["prob", "--own", "1,2", "--total", "4", "--quantity", "0", "--face", "2"],
        vec!["prob", "--own", "1,2,3", "--total", "2", "--quantity", "1", "--face", "2"],
        vec!["prob", "--total", "4", "--quantity", "1", "--face", "2"],
    ] {
        let (code, _, err) = run(&args);
        assert_eq!(code, 2, "{:?} should fail", args);
        assert!(!err.is_empty());
    }
}

#[test]
fn roll_is_reproducible() {
    let (code, first, _) = run(&["roll", "--dice", "8", "--seed", "11"]);
    let (_, second, _) = run(&["roll", "--dice", "8", "--seed", "11"]);
    assert_eq!(code, 0);
    assert_eq!(first, second);
    assert!(first.starts_with("roll: dice=8 seed=11"));
}
