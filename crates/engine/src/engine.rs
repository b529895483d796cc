//! Engine module - owns the board, the falling piece and the score
//!
//! Every mutation goes through this type. Failed moves and rotations are
//! silent no-ops; a blocked gravity step locks the piece, clears full rows and
//! spawns the next piece. A spawn that collides wipes the board and the score
//! and play continues with the freshly spawned piece.

use log::{debug, info, trace};

use crate::core::{pieces, Board, PieceShape, Randomizer, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, BOARD_COLUMNS, BOARD_ROWS, LINE_CLEAR_BONUS, SPAWN_ANCHOR};

/// The falling piece: catalogue kind, rotation index and anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Always kept below the kind's rotation count
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor in its first rotation state
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            row: SPAWN_ANCHOR.0,
            col: SPAWN_ANCHOR.1,
        }
    }

    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// Absolute (row, column) cells at the current placement
    pub fn cells(&self) -> [(i8, i8); 4] {
        cells_at(self.kind, self.row, self.col, self.rotation)
    }

    fn next_rotation(&self) -> usize {
        (self.rotation + 1) % pieces::rotation_count(self.kind)
    }
}

fn cells_at(kind: PieceKind, row: i8, col: i8, rotation: usize) -> [(i8, i8); 4] {
    pieces::shape(kind, rotation).map(|(dr, dc)| (row + dr, col + dc))
}

/// Pure collision test for a piece placement.
///
/// A cell collides when its column is outside the board, its row is at or
/// below the floor, or it lands on an occupied cell. Rows above the top edge
/// only collide through the column check.
pub fn collides(board: &Board, kind: PieceKind, row: i8, col: i8, rotation: usize) -> bool {
    cells_at(kind, row, col, rotation).iter().any(|&(r, c)| {
        c < 0 || c >= BOARD_COLUMNS as i8 || r >= BOARD_ROWS as i8 || board.is_occupied(r, c)
    })
}

/// Summary of one lock + line clear + spawn cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cells actually written; cells outside the board are skipped
    pub cells_written: u8,
    pub lines_cleared: u32,
    pub score_awarded: u32,
    /// The follow-up spawn collided and the board was wiped
    pub game_over_reset: bool,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    Locked(LockEvent),
}

impl DropOutcome {
    pub fn locked(&self) -> Option<&LockEvent> {
        match self {
            DropOutcome::Moved => None,
            DropOutcome::Locked(ev) => Some(ev),
        }
    }
}

/// Game engine
#[derive(Debug, Clone)]
pub struct Engine<R: Randomizer = SimpleRng> {
    board: Board,
    active: ActivePiece,
    randomizer: R,
    score: u32,
    lines: u32,
    games_reset: u32,
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create an engine with the built-in LCG seeded by `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(SimpleRng::new(seed))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Randomizer> Engine<R> {
    /// Create an engine on an empty board; the first piece is spawned immediately.
    pub fn with_randomizer(randomizer: R) -> Self {
        Self::with_board(Board::new(), randomizer)
    }

    /// Create an engine on a prepared board. The first spawn follows the normal
    /// rules, so a blocked spawn area resets the board.
    pub fn with_board(board: Board, mut randomizer: R) -> Self {
        let active = ActivePiece::spawn(randomizer.next_kind());
        let mut engine = Self {
            board,
            active,
            randomizer,
            score: 0,
            lines: 0,
            games_reset: 0,
            last_event: None,
        };
        engine.check_spawn();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    /// Absolute cells of the falling piece, for overlay rendering
    pub fn active_cells(&self) -> [(i8, i8); 4] {
        self.active.cells()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows cleared since the last reset
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Number of game-over resets since construction
    pub fn games_reset(&self) -> u32 {
        self.games_reset
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Collision test for the active piece's kind at a candidate placement
    pub fn collides(&self, row: i8, col: i8, rotation: usize) -> bool {
        collides(&self.board, self.active.kind, row, col, rotation)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    fn try_shift(&mut self, dr: i8, dc: i8) -> bool {
        let a = self.active;
        if self.collides(a.row + dr, a.col + dc, a.rotation) {
            return false;
        }
        self.active.row += dr;
        self.active.col += dc;
        true
    }

    /// Advance to the next rotation state in place.
    ///
    /// There is no kick search: a rotation that would collide is rejected, so
    /// some pieces cannot rotate against a wall or the floor. Returns false
    /// when the state did not change, including for single-state kinds.
    pub fn rotate(&mut self) -> bool {
        let a = self.active;
        let next = a.next_rotation();
        if next == a.rotation || self.collides(a.row, a.col, next) {
            return false;
        }
        self.active.rotation = next;
        true
    }

    /// One row of gravity. When the piece cannot move it locks, full rows are
    /// cleared and the next piece spawns.
    pub fn drop(&mut self) -> DropOutcome {
        if self.try_shift(1, 0) {
            DropOutcome::Moved
        } else {
            DropOutcome::Locked(self.lock_piece())
        }
    }

    /// Timer entry point; identical to [`Engine::drop`].
    pub fn tick(&mut self) -> DropOutcome {
        self.drop()
    }

    /// Fall to the resting row, then lock.
    pub fn hard_drop(&mut self) -> LockEvent {
        while self.try_shift(1, 0) {}
        self.lock_piece()
    }

    /// Lock the active piece in place, clear full rows and spawn the next piece
    pub fn lock_piece(&mut self) -> LockEvent {
        let piece = self.active;
        let cells_written = self.board.lock_cells(&piece.cells(), piece.kind) as u8;

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        let score_awarded = lines_cleared * LINE_CLEAR_BONUS;
        self.score += score_awarded;
        self.lines += lines_cleared;

        debug!(
            "locked {} at ({}, {}) rot {}: {} cells, {} lines (+{})",
            piece.kind.as_str(),
            piece.row,
            piece.col,
            piece.rotation,
            cells_written,
            lines_cleared,
            score_awarded
        );

        let game_over_reset = self.spawn_piece();

        let event = LockEvent {
            kind: piece.kind,
            cells_written,
            lines_cleared,
            score_awarded,
            game_over_reset,
        };
        self.last_event = Some(event);
        event
    }

    /// Spawn a random piece at the spawn anchor.
    ///
    /// Returns true when the new piece collided and the game was reset: the
    /// board is wiped, the score zeroed, and the new piece stays in place.
    pub fn spawn_piece(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.randomizer.next_kind());
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        let a = self.active;
        trace!("spawned {} at ({}, {})", a.kind.as_str(), a.row, a.col);
        if !self.collides(a.row, a.col, a.rotation) {
            return false;
        }

        info!(
            "game over: spawn blocked, resetting (score {}, lines {})",
            self.score, self.lines
        );
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.games_reset += 1;
        true
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::Drop => {
                self.drop();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.games_reset = self.games_reset;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of kinds, cycling when exhausted.
    struct Scripted {
        kinds: Vec<PieceKind>,
        next: usize,
    }

    impl Scripted {
        fn new(kinds: &[PieceKind]) -> Self {
            Self {
                kinds: kinds.to_vec(),
                next: 0,
            }
        }
    }

    impl Randomizer for Scripted {
        fn next_index(&mut self, _bound: usize) -> usize {
            let kind = self.kinds[self.next % self.kinds.len()];
            self.next += 1;
            kind.index()
        }
    }

    fn engine_with(kinds: &[PieceKind]) -> Engine<Scripted> {
        Engine::with_randomizer(Scripted::new(kinds))
    }

    fn place(engine: &mut Engine<Scripted>, kind: PieceKind, rotation: usize, row: i8, col: i8) {
        engine.active = ActivePiece {
            kind,
            rotation,
            row,
            col,
        };
    }

    fn filled(board: &Board) -> usize {
        board.cells().iter().filter(|c| c.is_some()).count()
    }

    #[test]
    fn test_new_spawns_at_anchor() {
        let engine = engine_with(&[PieceKind::T]);
        let a = engine.active();

        assert_eq!(a.kind, PieceKind::T);
        assert_eq!(a.rotation, 0);
        assert_eq!((a.row, a.col), SPAWN_ANCHOR);
        assert_eq!(engine.score(), 0);
        assert!(engine.board().is_empty());
    }

    #[test]
    fn test_active_cells_are_absolute() {
        let engine = engine_with(&[PieceKind::O]);
        assert_eq!(engine.active_cells(), [(0, 3), (0, 4), (1, 3), (1, 4)]);
    }

    #[test]
    fn test_collision_bounds() {
        let engine = engine_with(&[PieceKind::O]);

        assert!(!engine.collides(0, 0, 0));
        assert!(engine.collides(0, -1, 0));
        assert!(!engine.collides(0, 8, 0));
        assert!(engine.collides(0, 9, 0));
        assert!(!engine.collides(18, 3, 0));
        assert!(engine.collides(19, 3, 0));
    }

    #[test]
    fn test_collision_above_top_is_allowed() {
        // Vertical I reaches row -1 at the spawn row.
        let engine = engine_with(&[PieceKind::I]);
        assert!(!engine.collides(0, 3, 1));
        assert!(!engine.collides(-3, 3, 1));
        // The column check still applies above the board.
        assert!(engine.collides(-3, 9, 1));
    }

    #[test]
    fn test_collision_occupied() {
        let mut engine = engine_with(&[PieceKind::O]);
        engine.board.set(10, 4, Some(PieceKind::Z));

        assert!(engine.collides(9, 3, 0));
        assert!(engine.collides(10, 4, 0));
        assert!(!engine.collides(8, 3, 0));
        assert!(!engine.collides(9, 5, 0));
    }

    /// Collision rule written cell by cell from the board contents.
    fn expected_collision(board: &Board, kind: PieceKind, row: i8, col: i8, rotation: usize) -> bool {
        pieces::shape(kind, rotation).iter().any(|&(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            c < 0
                || c >= BOARD_COLUMNS as i8
                || r >= BOARD_ROWS as i8
                || (r >= 0 && board.get(r, c).flatten().is_some())
        })
    }

    #[test]
    fn test_collision_matches_rule_for_every_placement() {
        let mut board = Board::new();
        for (r, c) in [(0, 0), (5, 4), (10, 9), (14, 2), (19, 0), (19, 5), (19, 9)] {
            board.set(r, c, Some(PieceKind::T));
        }

        for kind in PieceKind::ALL {
            for rotation in 0..pieces::rotation_count(kind) {
                for row in -4..BOARD_ROWS as i8 + 4 {
                    for col in -4..BOARD_COLUMNS as i8 + 4 {
                        assert_eq!(
                            collides(&board, kind, row, col, rotation),
                            expected_collision(&board, kind, row, col, rotation),
                            "{:?} rot {} at ({}, {})",
                            kind,
                            rotation,
                            row,
                            col
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_move_left_against_wall_is_idempotent() {
        let mut engine = engine_with(&[PieceKind::O]);

        for _ in 0..3 {
            assert!(engine.move_left());
        }
        assert_eq!(engine.active().col, 0);

        assert!(!engine.move_left());
        assert!(!engine.move_left());
        assert_eq!(engine.active().col, 0);
        assert_eq!(engine.active().row, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut engine = engine_with(&[PieceKind::I]);
        let mut moved = 0;
        while engine.move_right() {
            moved += 1;
        }
        assert_eq!(moved, 3);
        assert_eq!(engine.active_cells()[3], (0, 9));
    }

    #[test]
    fn test_rotate_cycles_through_states() {
        let mut engine = engine_with(&[PieceKind::T]);
        engine.drop();
        engine.drop();

        for expected in [1, 2, 3, 0] {
            assert!(engine.rotate());
            assert_eq!(engine.active().rotation, expected);
        }
    }

    #[test]
    fn test_rotate_o_piece_keeps_single_state() {
        let mut engine = engine_with(&[PieceKind::O]);
        let before = engine.active();

        assert!(!engine.rotate());
        assert!(!engine.apply_action(GameAction::Rotate));
        assert_eq!(engine.active(), before);
    }

    #[test]
    fn test_rotate_rejected_at_wall() {
        let mut engine = engine_with(&[PieceKind::I]);
        place(&mut engine, PieceKind::I, 1, 5, 3);

        while engine.move_left() {}
        assert_eq!(engine.active().col, -1);

        // Horizontal state would need column -1.
        assert!(!engine.rotate());
        assert_eq!(engine.active().rotation, 1);
        assert_eq!(engine.active().col, -1);
    }

    #[test]
    fn test_rotate_rejected_by_occupied_cell() {
        let mut engine = engine_with(&[PieceKind::S]);
        // S state 1 needs (2, 4) relative to anchor (0, 3).
        engine.board.set(2, 4, Some(PieceKind::O));

        assert!(!engine.rotate());
        assert_eq!(engine.active().rotation, 0);
    }

    #[test]
    fn test_o_piece_drops_to_floor_and_locks() {
        let mut engine = engine_with(&[PieceKind::O, PieceKind::T]);

        let mut moves = 0;
        while engine.drop() == DropOutcome::Moved {
            moves += 1;
        }
        assert_eq!(moves, 18);

        for (r, c) in [(18, 3), (18, 4), (19, 3), (19, 4)] {
            assert_eq!(engine.board().get(r, c), Some(Some(PieceKind::O)));
        }
        assert_eq!(filled(engine.board()), 4);
        assert_eq!(engine.score(), 0);

        let next = engine.active();
        assert_eq!(next.kind, PieceKind::T);
        assert_eq!((next.row, next.col, next.rotation), (0, 3, 0));
    }

    #[test]
    fn test_tick_matches_drop() {
        let mut a = engine_with(&[PieceKind::L]);
        let mut b = engine_with(&[PieceKind::L]);

        for _ in 0..25 {
            assert_eq!(a.tick(), b.drop());
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.active(), b.active());
    }

    #[test]
    fn test_hard_drop_single_row_clear() {
        let mut engine = engine_with(&[PieceKind::I]);
        let mut board = Board::new();
        for row in 0..19 {
            for col in 1..10 {
                board.set(row, col, Some(PieceKind::Z));
            }
        }
        for col in 4..10 {
            board.set(19, col, Some(PieceKind::S));
        }
        engine.board = board;
        place(&mut engine, PieceKind::I, 0, 19, 0);

        let ev = engine.hard_drop();

        assert_eq!(ev.lines_cleared, 1);
        assert_eq!(ev.score_awarded, 100);
        assert!(!ev.game_over_reset);
        assert_eq!(engine.score(), 100);
        // Former rows 0..=18 moved down by one; the new top row is empty.
        assert!((0..10).all(|c| !engine.board().is_occupied(0, c)));
        for row in 1..20 {
            assert!(!engine.board().is_occupied(row, 0));
            assert!((1..10).all(|c| engine.board().is_occupied(row, c)));
        }
        assert_eq!(engine.active().kind, PieceKind::I);
    }

    #[test]
    fn test_two_rows_clear_and_keep_order() {
        let mut engine = engine_with(&[PieceKind::O]);
        engine.board = Board::from_rows(&[".ZZZZZZZZZ", ".SSSSSSSSS"]);
        place(&mut engine, PieceKind::I, 1, 17, -1);

        let ev = engine.hard_drop();

        assert_eq!(ev.lines_cleared, 2);
        assert_eq!(engine.score(), 200);
        assert_eq!(engine.lines(), 2);
        assert_eq!(engine.board().get(18, 0), Some(Some(PieceKind::I)));
        assert_eq!(engine.board().get(19, 0), Some(Some(PieceKind::I)));
        assert_eq!(filled(engine.board()), 2);
    }

    #[test]
    fn test_lock_skips_cells_above_board() {
        let mut engine = engine_with(&[PieceKind::I]);
        engine.board.set(3, 8, Some(PieceKind::O));
        place(&mut engine, PieceKind::I, 1, 0, 7);

        let DropOutcome::Locked(ev) = engine.drop() else {
            panic!("vertical I above a blocker should lock");
        };

        assert_eq!(ev.cells_written, 3);
        assert!(!ev.game_over_reset);
        for row in 0..4 {
            assert!(engine.board().is_occupied(row, 8));
        }
        assert_eq!(filled(engine.board()), 4);
    }

    #[test]
    fn test_spawn_collision_resets_board_and_score() {
        let mut engine = engine_with(&[PieceKind::O]);
        engine.score = 700;
        engine.lines = 7;
        engine.board.set(1, 4, Some(PieceKind::J));
        engine.board.set(15, 0, Some(PieceKind::J));

        assert!(engine.spawn_piece());

        assert!(engine.board().is_empty());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.games_reset(), 1);
        let a = engine.active();
        assert_eq!((a.kind, a.row, a.col, a.rotation), (PieceKind::O, 0, 3, 0));
    }

    #[test]
    fn test_with_board_blocked_spawn_resets() {
        let board = Board::from_rows(&["IIIIIIIII."; 20]);
        let engine = Engine::with_board(board, Scripted::new(&[PieceKind::T]));

        assert!(engine.board().is_empty());
        assert_eq!(engine.games_reset(), 1);
    }

    #[test]
    fn test_lock_reports_reset_in_event() {
        let mut engine = engine_with(&[PieceKind::O]);
        // Locks in the spawn area, so the next O collides.
        engine.board.set(2, 3, Some(PieceKind::L));

        let ev = engine.hard_drop();
        assert!(ev.game_over_reset);
        assert_eq!(engine.take_last_event(), Some(ev));
        assert_eq!(engine.take_last_event(), None);
    }

    #[test]
    fn test_apply_action() {
        let mut engine = engine_with(&[PieceKind::T]);

        assert!(engine.apply_action(GameAction::MoveRight));
        assert_eq!(engine.active().col, 4);
        assert!(engine.apply_action(GameAction::MoveLeft));
        assert!(engine.apply_action(GameAction::Drop));
        assert_eq!(engine.active().row, 1);
        assert!(engine.apply_action(GameAction::Rotate));
        assert_eq!(engine.active().rotation, 1);
        assert!(engine.apply_action(GameAction::HardDrop));
        assert_eq!(filled(engine.board()), 4);
    }

    #[test]
    fn test_snapshot() {
        let mut engine = engine_with(&[PieceKind::Z]);
        engine.hard_drop();
        let snap = engine.snapshot();

        assert_eq!(snap.board[19][4], PieceKind::Z.to_u8());
        assert_eq!(snap.board[18][3], PieceKind::Z.to_u8());
        let active = snap.active.expect("active piece");
        assert_eq!(active.kind, PieceKind::Z);
        assert_eq!(active.cells, engine.active_cells());
        assert_eq!(snap.score, 0);
    }
}
