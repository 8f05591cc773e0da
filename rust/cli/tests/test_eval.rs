use pokersim_cli::run;

fn eval(cards: &str) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["pokersim", "eval", "--cards", cards], &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn eval_reports_royal_flush() {
    let (code, out, _) = eval("Ah Kh Qh Jh Th 2c 3d");
    assert_eq!(code, 0);
    assert!(out.contains("Category: royal flush (10)"), "{out}");
    assert!(out.contains("Best five: "));
    assert!(!out.contains("2c"));
}

#[test]
fn eval_reports_full_house_key() {
    let (code, out, _) = eval("Kh Kd Ks 7c 7d 2h 3s");
    assert_eq!(code, 0);
    assert!(out.contains("Category: full house (7)"), "{out}");
    assert!(out.contains("Key: 13 7\n"), "{out}");
}

#[test]
fn eval_rejects_bad_input() {
    for cards in ["Ah Kh Qh Jh", "Ah Kh Qh Jh Th 9h 8h 7h", "Ah Kh Qh Jh 1x", "Ah Ah Kd Qc Js"] {
        let (code, out, err) = eval(cards);
        assert_eq!(code, 2, "{cards}");
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Invalid input"), "{cards}: {err}");
    }
}
