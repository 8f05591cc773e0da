use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::action::RecordedAction;
use crate::betting::Street;
use crate::cards::Card;
use crate::engine::{Hand, HandOutcome};
use crate::observer::GameObserver;

/// Records a single action during a hand.
/// Associates the action with the player and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: RecordedAction,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub player: String,
    pub amount: u32,
    /// Hand category name when the pot was decided at showdown
    #[serde(default)]
    pub hand: Option<String>,
}

/// Complete record of a poker hand including all actions, board cards, and outcome.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier of the form `G0003-H0012`
    pub hand_id: String,
    pub game: usize,
    pub hand: usize,
    pub players: Vec<String>,
    /// Stacks in player order when the hand was dealt
    #[serde(default)]
    pub stacks: Vec<u32>,
    pub small_blind: String,
    pub big_blind: String,
    /// Chronological list of all actions, blinds included
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    pub pot: u32,
    pub winners: Vec<WinnerRecord>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(game: usize, hand: usize) -> String {
    format!("G{:04}-H{:04}", game, hand)
}

impl HandRecord {
    pub fn from_hand(hand: &Hand, outcome: &HandOutcome) -> Self {
        let round = hand.round();
        let actions = hand
            .streets()
            .iter()
            .flat_map(|street| {
                street.log().iter().map(move |(seat, action)| ActionRecord {
                    player: round.player(*seat).to_string(),
                    street: street.street(),
                    action: *action,
                })
            })
            .collect();
        let winners = outcome
            .awards
            .iter()
            .map(|award| WinnerRecord {
                player: round.player(award.seat).to_string(),
                amount: award.amount,
                hand: outcome.showdown.as_ref().and_then(|sd| {
                    sd.hands
                        .iter()
                        .find(|(seat, _)| *seat == award.seat)
                        .map(|(_, strength)| strength.category.name().to_string())
                }),
            })
            .collect();
        Self {
            hand_id: format_hand_id(round.game_index, round.hand_index),
            game: round.game_index,
            hand: round.hand_index,
            players: round.players().to_vec(),
            stacks: round.starting_stacks().to_vec(),
            small_blind: round.player(round.small_blind()).to_string(),
            big_blind: round.player(round.big_blind()).to_string(),
            actions,
            board: hand.board().to_vec(),
            pot: outcome.pot,
            winners,
            ts: None,
        }
    }
}

/// Writes one [`HandRecord`] per finished hand as a JSON line.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// reported by [`HandLogger::finish`]; later hands are not written.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    error: Option<std::io::Error>,
    written: usize,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            error: None,
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            self.written += 1;
        }
        Ok(())
    }

    /// Flushes the file and surfaces any error hit while logging.
    pub fn finish(mut self) -> std::io::Result<usize> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if let Some(w) = &mut self.writer {
            w.flush()?;
        }
        Ok(self.written)
    }
}

impl GameObserver for HandLogger {
    fn hand_won(&mut self, hand: &Hand, outcome: &HandOutcome) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write(&HandRecord::from_hand(hand, outcome)) {
            tracing::error!(error = %e, "failed to write hand record");
            self.error = Some(e);
        }
    }
}
