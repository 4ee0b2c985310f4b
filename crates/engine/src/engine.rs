//! Engine module - the game loop state machine
//!
//! Ties the grid, the active piece and the randomizer together. Gravity is
//! driven by [`Engine::on_tick`]; player commands by [`Engine::submit`]. When a
//! piece cannot fall any further it is locked, full rows are cleared and
//! scored, and the next piece spawns. A piece that locks with any cell above
//! the grid ends the game.
//!
//! Every call runs to completion before the next one, so `Locking` is never
//! observable between calls: it always resolves to `Falling` or `GameOver`.
//! Overflow on lock is the only way into `GameOver`.

use crate::config::EngineConfig;
use crate::core::{ActivePiece, Grid, ShapeRandomizer};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Cell, Command, COLS, ROWS};

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Normal play, a piece is falling
    Falling,
    /// Terminal; only [`Engine::restart`] leaves it
    GameOver,
}

/// Emitted after every lock attempt, consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_gained: u32,
    /// The piece could not lock inside the grid; the game is over
    pub overflow: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    piece: ActivePiece,
    randomizer: ShapeRandomizer,
    phase: Phase,
    score: u32,
    lines: u32,
    last_clear: u32,
    /// Milliseconds since the gravity reference point
    gravity_elapsed_ms: u32,
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create a new game with default tuning and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(EngineConfig::default(), seed)
    }

    /// Create a new game with an empty grid and a freshly spawned piece
    pub fn with_config(config: EngineConfig, seed: u32) -> Self {
        let mut randomizer = ShapeRandomizer::new(seed);
        let piece = ActivePiece::spawn(randomizer.draw());
        Self {
            config,
            grid: Grid::new(),
            piece,
            randomizer,
            phase: Phase::Falling,
            score: 0,
            lines: 0,
            last_clear: 0,
            gravity_elapsed_ms: 0,
            last_event: None,
        }
    }

    /// Resume from a known grid and falling piece.
    ///
    /// Returns `None` if the piece overlaps a wall, the floor, or a locked
    /// cell at its current position.
    pub fn from_parts(
        config: EngineConfig,
        grid: Grid,
        piece: ActivePiece,
        seed: u32,
    ) -> Option<Self> {
        if piece.collides(&grid, 0, 0, piece.matrix()) {
            return None;
        }
        Some(Self {
            config,
            grid,
            piece,
            randomizer: ShapeRandomizer::new(seed),
            phase: Phase::Falling,
            score: 0,
            lines: 0,
            last_clear: 0,
            gravity_elapsed_ms: 0,
            last_event: None,
        })
    }

    /// Throw away the current game and start over from the same seed
    pub fn restart(&mut self) {
        *self = Self::with_config(self.config, self.randomizer.seed());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece; `None` once the game is over
    pub fn active(&self) -> Option<&ActivePiece> {
        match self.phase {
            Phase::Falling => Some(&self.piece),
            Phase::GameOver => None,
        }
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn gravity_elapsed_ms(&self) -> u32 {
        self.gravity_elapsed_ms
    }

    /// Copy of the locked cells
    pub fn grid_snapshot(&self) -> [[Cell; COLS as usize]; ROWS as usize] {
        self.grid.to_rows()
    }

    /// Occupied cells and color of the falling piece
    pub fn active_piece_snapshot(&self) -> Option<ActiveSnapshot> {
        self.active().map(ActiveSnapshot::from)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = self.active_piece_snapshot();
        out.score = self.score;
        out.lines = self.lines;
        out.last_clear = self.last_clear;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a player command.
    ///
    /// Returns true if the state changed. Rejected moves and any command
    /// after game over return false. A manual `MoveDown` resets the gravity
    /// reference point; lateral moves and rotation do not.
    pub fn submit(&mut self, command: Command) -> bool {
        if self.is_game_over() {
            return false;
        }

        match command {
            Command::MoveLeft => self.piece.move_left(&self.grid),
            Command::MoveRight => self.piece.move_right(&self.grid),
            Command::Rotate => self.piece.rotate(&self.grid).applied(),
            Command::MoveDown => {
                self.gravity_elapsed_ms = 0;
                self.step_down();
                true
            }
        }
    }

    /// Advance the gravity clock.
    ///
    /// Returns true if a gravity step fired (the piece fell or locked).
    pub fn on_tick(&mut self, elapsed_ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.gravity_elapsed_ms = self.gravity_elapsed_ms.saturating_add(elapsed_ms);
        if self.gravity_elapsed_ms <= self.config.gravity_interval_ms {
            return false;
        }

        self.gravity_elapsed_ms = 0;
        self.step_down();
        true
    }

    /// Move the piece one row down, locking it if it cannot fall
    fn step_down(&mut self) {
        if !self.piece.move_down(&self.grid) {
            self.lock_piece();
        }
    }

    /// Lock the active piece onto the grid, clear and score full rows, then
    /// spawn the next piece.
    fn lock_piece(&mut self) {
        let piece = self.piece;

        for (row, col) in piece.cells() {
            if row < 0 {
                self.phase = Phase::GameOver;
                self.last_event = Some(LockEvent {
                    rows_cleared: 0,
                    score_gained: 0,
                    overflow: true,
                });
                return;
            }
            self.grid.lock(row as usize, col as usize, piece.color);
        }

        let cleared = self.grid.clear_full_rows();
        let rows_cleared = cleared.len() as u32;
        let score_gained = rows_cleared.saturating_mul(self.config.line_clear_bonus);

        self.score = self.score.saturating_add(score_gained);
        self.lines = self.lines.saturating_add(rows_cleared);
        self.last_clear = rows_cleared;

        self.spawn_piece();
        self.last_event = Some(LockEvent {
            rows_cleared,
            score_gained,
            overflow: false,
        });
    }

    /// Spawn a random piece at the spawn point.
    ///
    /// The new piece is not tested against the grid. If it overlaps locked
    /// cells it can still be steered; the game only ends if it locks with a
    /// cell above the grid.
    fn spawn_piece(&mut self) {
        self.piece = ActivePiece::spawn(self.randomizer.draw());
        self.gravity_elapsed_ms = 0;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ShapeKind};

    #[test]
    fn test_new_engine() {
        let engine = Engine::new(12345);

        assert_eq!(engine.phase(), Phase::Falling);
        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.lines(), 0);
        assert_eq!(engine.grid().occupied_count(), 0);

        let piece = engine.active().unwrap();
        assert_eq!((piece.x, piece.y), (3, -2));
        assert_eq!(piece.rotation.get(), 0);
    }

    #[test]
    fn test_gravity_waits_for_interval() {
        let mut engine = Engine::new(1);
        let y0 = engine.piece.y;

        assert!(!engine.on_tick(1000));
        assert_eq!(engine.piece.y, y0);

        assert!(engine.on_tick(1));
        assert_eq!(engine.piece.y, y0 + 1);
        assert_eq!(engine.gravity_elapsed_ms, 0);
    }

    #[test]
    fn test_manual_down_resets_gravity_clock() {
        let mut engine = Engine::new(1);
        engine.on_tick(900);
        assert_eq!(engine.gravity_elapsed_ms, 900);

        assert!(engine.submit(Command::MoveDown));
        assert_eq!(engine.gravity_elapsed_ms, 0);

        // Another 900ms must not trigger a second step in the same window.
        assert!(!engine.on_tick(900));
    }

    #[test]
    fn test_lateral_moves_keep_gravity_clock() {
        let mut engine = Engine::new(1);
        engine.on_tick(900);
        engine.submit(Command::MoveLeft);
        engine.submit(Command::Rotate);
        assert_eq!(engine.gravity_elapsed_ms, 900);
    }

    #[test]
    fn test_lock_emits_event_and_spawns() {
        let piece = ActivePiece::at(ShapeKind::O, 0, 18);
        let mut engine =
            Engine::from_parts(EngineConfig::default(), Grid::new(), piece, 7).unwrap();

        assert!(engine.submit(Command::MoveDown));
        let ev = engine.take_last_event().unwrap();
        assert_eq!(ev.rows_cleared, 0);
        assert!(!ev.overflow);
        assert_eq!(engine.grid().cell_at(19, 0), Cell::Occupied(Color::Blue));

        let next = engine.active().unwrap();
        assert_eq!((next.x, next.y), (3, -2));
        assert!(engine.take_last_event().is_none());
    }

    #[test]
    fn test_from_parts_rejects_colliding_piece() {
        let mut grid = Grid::new();
        grid.lock(19, 0, Color::Red);
        let piece = ActivePiece::at(ShapeKind::O, 0, 18);
        assert!(Engine::from_parts(EngineConfig::default(), grid, piece, 1).is_none());
    }

    #[test]
    fn test_restart_replays_seed() {
        let mut engine = Engine::new(42);
        let first = engine.active().unwrap().kind;
        engine.submit(Command::MoveDown);
        engine.restart();
        assert_eq!(engine.active().unwrap().kind, first);
        assert_eq!(engine.current_score(), 0);
        assert_eq!(engine.seed(), 42);
    }
}
