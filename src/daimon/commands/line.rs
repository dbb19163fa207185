use crate::commands::{CmdMessage, CmdResult};
use rand::seq::SliceRandom;

pub const LINES: &[&str] = &["Boopy stoopy", "Shloop"];

/// Says one of the daimon's lines, picked at random.
pub fn run() -> CmdResult {
    let line = LINES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default();
    CmdResult::default().with_message(CmdMessage::info(line))
}
