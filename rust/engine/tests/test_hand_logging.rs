use std::fs;

use pokersim_engine::action::RecordedAction;
use pokersim_engine::betting::Street;
use pokersim_engine::logger::{HandLogger, HandRecord};
use pokersim_engine::policy::CheckCallPolicy;
use pokersim_engine::simulation::{run_game, SimulationConfig};

#[test]
fn game_history_is_written_as_jsonl() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs").join("game.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");

    let config = SimulationConfig::new(&["alice", "bob", "carol"], 40, 5, 1).with_max_hands(12);
    let result = run_game(&config, 5, 3, &mut CheckCallPolicy, &mut logger).unwrap();
    let written = logger.finish().expect("flush");
    assert_eq!(written, result.hands_played);

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));

    let content = String::from_utf8(bytes).unwrap();
    let records: Vec<HandRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert_eq!(records.len(), written);
    assert_eq!(records[0].hand_id, "G0003-H0000");
    assert_eq!(records[0].small_blind, "alice");
    assert_eq!(records[0].big_blind, "bob");
    assert_eq!(records[0].stacks, vec![40, 40, 40]);

    for rec in &records {
        assert!(rec.ts.is_some(), "timestamp should be injected");
        // eliminated players are not dealt in, so the dealt stacks hold every chip
        assert_eq!(rec.stacks.len(), rec.players.len());
        assert_eq!(rec.stacks.iter().sum::<u32>(), 120);
        let paid: u32 = rec.actions.iter().map(|a| a.action.amount()).sum();
        assert_eq!(paid, rec.pot);
        let won: u32 = rec.winners.iter().map(|w| w.amount).sum();
        assert_eq!(won, rec.pot);
        assert!(matches!(
            rec.actions[0].action,
            RecordedAction::SmallBlind(_)
        ));
        assert_eq!(rec.actions[0].street, Street::Preflop);
    }
}

#[test]
fn preset_timestamp_is_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let rec = HandRecord {
        hand_id: "G0000-H0000".to_string(),
        game: 0,
        hand: 0,
        players: vec!["a".into(), "b".into()],
        stacks: vec![10, 10],
        small_blind: "a".into(),
        big_blind: "b".into(),
        actions: vec![],
        board: vec![],
        pot: 0,
        winners: vec![],
        ts: Some("2030-01-01T00:00:00Z".to_string()),
    };
    logger.write(&rec).expect("write");
    assert_eq!(logger.finish().expect("flush"), 1);

    let line = fs::read_to_string(&path).unwrap();
    let back: HandRecord = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(back, rec);
}
