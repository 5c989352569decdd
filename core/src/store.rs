use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use serde::Serialize;

use crate::*;

/// Entry of the move list the renderer offers for time travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub index: usize,
    pub is_current: bool,
}

impl HistoryEntry {
    pub const fn is_start(&self) -> bool {
        self.index == 0
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_start() {
            f.write_str("Go to game start")
        } else {
            write!(f, "Go to move #{}", self.index)
        }
    }
}

/// Owns the timeline of a single game: every snapshot played so far, which one is being viewed,
/// and whether the easter-egg board has been reached.
///
/// Turn owner and outcome are never stored, they are derived from the viewed snapshot on read.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameStore {
    history: Vec<Board>,
    cursor: usize,
    easter_egg_fired: bool,
    easter_egg_visible: bool,
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            history: vec![Board::EMPTY],
            cursor: 0,
            easter_egg_fired: false,
            easter_egg_visible: false,
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_board(&self) -> Board {
        self.history[self.cursor]
    }

    pub fn current_outcome(&self) -> Outcome {
        outcome_of(&self.history[self.cursor])
    }

    /// Piece that moves next from the viewed snapshot; Cat on even cursors.
    pub fn turn_owner(&self) -> Piece {
        Piece::for_ply(self.cursor)
    }

    pub fn history_entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        (0..self.history.len()).map(|index| HistoryEntry {
            index,
            is_current: index == self.cursor,
        })
    }

    pub fn easter_egg_fired(&self) -> bool {
        self.easter_egg_fired
    }

    pub fn easter_egg_visible(&self) -> bool {
        self.easter_egg_visible
    }

    /// Places the turn owner's piece on `cell`.
    ///
    /// Any snapshots after the cursor are discarded before the new one is appended.
    pub fn try_apply_move(&mut self, cell: CellIndex) -> Result<MoveOutcome> {
        let board = self.current_board();
        if winner_of(&board).is_some() {
            return Err(GameError::AlreadyEnded);
        }

        let piece = self.turn_owner();
        let next = board.with_piece(cell, piece)?;

        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
        log::debug!("move #{}: {} at {} -> {}", self.cursor, piece, cell, next);

        if matches_pattern(&next, &EASTER_EGG_PATTERN) {
            log::debug!("easter egg pattern reached at move #{}", self.cursor);
            self.easter_egg_fired = true;
            self.easter_egg_visible = true;
        }

        Ok(match outcome_of(&next) {
            Outcome::InProgress => MoveOutcome::Placed,
            Outcome::Won(winner) => MoveOutcome::Won(winner),
            Outcome::Draw => MoveOutcome::Drawn,
        })
    }

    /// Like [`Self::try_apply_move`], but an illegal move is silently ignored.
    pub fn apply_move(&mut self, cell: CellIndex) -> MoveOutcome {
        self.try_apply_move(cell).unwrap_or_else(|err| {
            log::trace!("ignored move at {}: {}", cell, err);
            MoveOutcome::NoChange
        })
    }

    /// Moves the cursor without touching history or the easter-egg flags.
    pub fn try_jump_to(&mut self, index: usize) -> Result<JumpOutcome> {
        if index >= self.history.len() {
            return Err(GameError::InvalidHistoryIndex);
        }

        if index == self.cursor {
            return Ok(JumpOutcome::NoChange);
        }

        log::debug!("jump from move #{} to #{}", self.cursor, index);
        self.cursor = index;
        Ok(JumpOutcome::Moved)
    }

    pub fn jump_to(&mut self, index: usize) -> JumpOutcome {
        self.try_jump_to(index).unwrap_or_else(|err| {
            log::trace!("ignored jump to {}: {}", index, err);
            JumpOutcome::NoChange
        })
    }

    /// Hides the overlay. The pattern still counts as having fired.
    pub fn dismiss_easter_egg(&mut self) -> bool {
        core::mem::replace(&mut self.easter_egg_visible, false)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
