use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lightness of the page background, in percent.
///
/// Purely cosmetic and independent of the game; always kept within `MIN..=MAX`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct BackgroundIntensity(u8);

impl BackgroundIntensity {
    pub const MIN: u8 = 20;
    pub const MAX: u8 = 80;
    pub const DEFAULT: u8 = 40;
    pub const HUE: u16 = 270;
    pub const SATURATION: u8 = 70;

    pub fn new(value: i32) -> Self {
        let value = value.clamp(Self::MIN.into(), Self::MAX.into());
        Self(value.try_into().unwrap_or(Self::DEFAULT))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn css_color(self) -> String {
        format!("hsl({}, {}%, {}%)", Self::HUE, Self::SATURATION, self.0)
    }
}

impl Default for BackgroundIntensity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i32> for BackgroundIntensity {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<BackgroundIntensity> for u8 {
    fn from(intensity: BackgroundIntensity) -> Self {
        intensity.0
    }
}

/// Everything the renderer can ask of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    CellClick(CellIndex),
    HistoryJump(usize),
    SliderChange(i32),
    DismissOverlay,
}

/// Line of text describing the viewed snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    Winner(Piece),
    Draw,
    NextPlayer(Piece),
}

impl Status {
    pub const fn new(outcome: Outcome, turn: Piece) -> Self {
        match outcome {
            Outcome::Won(piece) => Self::Winner(piece),
            Outcome::Draw => Self::Draw,
            Outcome::InProgress => Self::NextPlayer(turn),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(piece) => write!(f, "Winner: {}", piece),
            Self::Draw => f.write_str("Draw"),
            Self::NextPlayer(piece) => write!(f, "Next player: {}", piece),
        }
    }
}

/// Read-only projection handed to the renderer after every change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub board: Board,
    pub turn: Piece,
    pub outcome: Outcome,
    pub status: Status,
    pub winning_line: Option<Line>,
    pub history: Vec<HistoryEntry>,
    pub cursor: usize,
    pub easter_egg_visible: bool,
    pub intensity: BackgroundIntensity,
}

/// One player's page: a game timeline plus the cosmetic background setting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    store: GameStore,
    intensity: BackgroundIntensity,
}

impl Session {
    pub fn new(intensity: BackgroundIntensity) -> Self {
        Self {
            store: GameStore::new(),
            intensity,
        }
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    pub fn intensity(&self) -> BackgroundIntensity {
        self.intensity
    }

    /// Applies a single intent, returning whether anything visible changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        use Intent::*;

        log::trace!("dispatch: {:?}", intent);
        match intent {
            CellClick(cell) => self.store.try_apply_move(cell).has_update(),
            HistoryJump(index) => self.store.try_jump_to(index).has_update(),
            SliderChange(value) => {
                let intensity = BackgroundIntensity::new(value);
                let changed = intensity != self.intensity;
                self.intensity = intensity;
                changed
            }
            DismissOverlay => self.store.dismiss_easter_egg(),
        }
    }

    pub fn view(&self) -> SessionView {
        let board = self.store.current_board();
        let turn = self.store.turn_owner();
        let outcome = outcome_of(&board);

        SessionView {
            board,
            turn,
            outcome,
            status: Status::new(outcome, turn),
            winning_line: winning_line(&board),
            history: self.store.history_entries().collect(),
            cursor: self.store.cursor(),
            easter_egg_visible: self.store.easter_egg_visible(),
            intensity: self.intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn session_after(cells: &[CellIndex]) -> Session {
        let mut session = Session::default();
        for &cell in cells {
            assert!(session.dispatch(Intent::CellClick(cell)));
        }
        session
    }

    #[test]
    fn intensity_is_clamped_into_range() {
        assert_eq!(BackgroundIntensity::new(-5).get(), 20);
        assert_eq!(BackgroundIntensity::new(55).get(), 55);
        assert_eq!(BackgroundIntensity::new(1000).get(), 80);
        assert_eq!(BackgroundIntensity::default().get(), 40);
        assert_eq!(BackgroundIntensity::new(60).css_color(), "hsl(270, 70%, 60%)");
    }

    #[test]
    fn slider_never_touches_the_game() {
        let mut session = session_after(&[0, 3]);
        let store = session.store().clone();

        assert!(session.dispatch(Intent::SliderChange(75)));
        assert!(!session.dispatch(Intent::SliderChange(75)));
        assert!(session.dispatch(Intent::SliderChange(5)));

        assert_eq!(session.intensity().get(), 20);
        assert_eq!(session.store(), &store);
    }

    #[test]
    fn cat_wins_top_row_end_to_end() {
        let session = session_after(&[0, 3, 1, 4, 2]);
        let view = session.view();

        assert_eq!(view.outcome, Outcome::Won(Piece::Cat));
        assert_eq!(view.winning_line, Some([0, 1, 2]));
        assert_eq!(view.status.to_string(), "Winner: Cat");
    }

    #[test]
    fn ignored_intents_report_no_update() {
        let mut session = session_after(&[0, 3, 1, 4, 2]);

        assert!(!session.dispatch(Intent::CellClick(8)));
        assert!(!session.dispatch(Intent::CellClick(0)));
        assert!(!session.dispatch(Intent::CellClick(42)));
        assert!(!session.dispatch(Intent::HistoryJump(6)));
        assert!(!session.dispatch(Intent::DismissOverlay));
        assert!(session.dispatch(Intent::HistoryJump(0)));
    }

    #[test]
    fn status_reads_next_player_then_draw() {
        let mut session = session_after(&[0]);
        assert_eq!(session.view().status.to_string(), "Next player: Dog");

        for cell in [1, 2, 4, 3, 5, 7, 6, 8] {
            session.dispatch(Intent::CellClick(cell));
        }
        let view = session.view();
        assert_eq!(view.outcome, Outcome::Draw);
        assert_eq!(view.status.to_string(), "Draw");
        assert_eq!(view.winning_line, None);
    }

    #[test]
    fn view_tracks_time_travel() {
        let mut session = session_after(&[4, 0, 8]);
        session.dispatch(Intent::HistoryJump(1));
        let view = session.view();

        assert_eq!(view.cursor, 1);
        assert_eq!(view.turn, Piece::Dog);
        assert_eq!(view.board, session.store().history()[1]);
        assert_eq!(view.history.len(), 4);
        assert!(view.history[1].is_current);
    }

    #[test]
    fn easter_egg_overlay_round_trip() {
        let mut session = session_after(&[0, 1, 2, 3, 6, 4, 8, 5]);
        assert!(session.view().easter_egg_visible);

        assert!(session.dispatch(Intent::DismissOverlay));
        let view = session.view();
        assert!(!view.easter_egg_visible);
        assert!(session.store().easter_egg_fired());
        assert_eq!(view.board, EASTER_EGG_PATTERN);
    }

    #[test]
    fn view_serializes_for_js_consumers() {
        let session = session_after(&[4]);
        let json = serde_json::to_value(session.view()).unwrap();

        assert_eq!(json["board"][4], "cat");
        assert_eq!(json["turn"], "dog");
        assert_eq!(json["intensity"], 40);
        assert_eq!(json["history"][1]["is_current"], true);
    }
}
