//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, JSON observation).
//!
//! # Tile Catalog
//!
//! Every map character maps to exactly one [`TileType`]; the behaviour of a
//! tile type is fixed in a const table:
//!
//! | Tile | Char | Rigid | Energy | Consumable |
//! |------|------|-------|--------|------------|
//! | Goal | `*` | no | -1 | no |
//! | Empty | ` ` | no | -1 | no |
//! | Obstacle | `#` | yes | -1 | no |
//! | Battery | `+` | no | +10 | yes |
//! | Trap | `-` | no | -10 | yes |
//! | Boundary | `%` | yes | -1 | no |
//! | ArrowUp/Down/Left/Right | `u` `d` `l` `r` | no | -1 | no |
//! | Trail | `.` | no | -1 | no |
//!
//! Arrow tiles are decoration only and behave like plain floor.
//!
//! # Fog-of-War Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `REVEAL_RADIUS` | 3 | Half-width of the square scanned after each move |
//! | `LEVEL_MASKED` | 1 | Outer ring: shown as `?` |
//! | `LEVEL_SHOWN` | 2 | Inner square: true content shown |
//!
//! # Examples
//!
//! ```
//! use goal_robot_types::{Direction, Outcome, TileType};
//!
//! // Classify map characters
//! assert_eq!(TileType::classify('+'), TileType::Battery);
//! assert_eq!(TileType::classify('?'), TileType::Empty);
//!
//! // Static tile behaviour
//! assert!(TileType::Boundary.rigid());
//! assert_eq!(TileType::Trap.energy_delta(), -10);
//!
//! // Direction letters from the command grammar
//! assert_eq!(Direction::from_char('u'), Some(Direction::Up));
//! assert_eq!(Direction::Left.offset(), (0, -1));
//!
//! assert!(Outcome::Won.is_terminal());
//! ```

/// Signed grid coordinate. Offsets may leave the grid, so coordinates are signed.
pub type Coord = i32;

/// A `(row, column)` position on the board.
pub type Pos = (Coord, Coord);

/// Half-width of the square scanned by each reveal pass (7x7 window).
pub const REVEAL_RADIUS: Coord = 3;

/// Maximum number of cells touched by a single reveal pass.
pub const REVEAL_WINDOW_CELLS: usize =
    ((2 * REVEAL_RADIUS + 1) * (2 * REVEAL_RADIUS + 1)) as usize;

/// Reveal level of a tile nobody has seen.
pub const LEVEL_HIDDEN: u8 = 0;

/// Reveal level of the outer ring: the tile is known to exist but not what it is.
pub const LEVEL_MASKED: u8 = 1;

/// Reveal level at which the true content is shown.
pub const LEVEL_SHOWN: u8 = 2;

/// Glyph for a hidden tile.
pub const HIDDEN_CHAR: char = ' ';

/// Glyph for a masked tile.
pub const MASKED_CHAR: char = '?';

/// Glyph drawn at the robot's position.
pub const PLAYER_CHAR: char = 'o';

/// Glyph for cells inside the revealed rectangle that are not on the board.
pub const VOID_CHAR: char = ' ';

/// Energy change applied by an ordinary step.
pub const STEP_COST: i64 = -1;

/// Printed when the robot reaches the goal.
pub const WIN_MESSAGE: &str = "Congratulations! You won the game!";

/// Printed when the robot runs out of energy.
pub const LOSE_MESSAGE: &str = "You are out of energy. You lose!";

/// Printed when a command line does not match the grammar.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input!";

/// Static behaviour of one tile type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileTraits {
    pub ch: char,
    /// Blocks entry.
    pub rigid: bool,
    /// Added to the robot's energy when the tile is entered.
    pub energy_delta: i64,
    /// Entering the tile turns it into a trail.
    pub consumable: bool,
}

impl TileTraits {
    const fn floor(ch: char) -> Self {
        Self {
            ch,
            rigid: false,
            energy_delta: STEP_COST,
            consumable: false,
        }
    }

    const fn wall(ch: char) -> Self {
        Self {
            ch,
            rigid: true,
            energy_delta: STEP_COST,
            consumable: false,
        }
    }

    const fn pickup(ch: char, energy_delta: i64) -> Self {
        Self {
            ch,
            rigid: false,
            energy_delta,
            consumable: true,
        }
    }
}

/// The kinds of tile a map cell can hold
///
/// - **Goal**: reaching it wins the game
/// - **Obstacle** / **Boundary**: rigid, never entered
/// - **Battery**: +10 energy, consumed on entry
/// - **Trap**: -10 energy, consumed on entry
/// - **Arrow\***: decorative floor
/// - **Trail**: what a consumed tile becomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Goal,
    Empty,
    Obstacle,
    Battery,
    Trap,
    Boundary,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Trail,
}

/// Per-variant behaviour, indexed by `TileType as usize`.
const TILE_TRAITS: [TileTraits; 11] = [
    TileTraits::floor('*'),
    TileTraits::floor(' '),
    TileTraits::wall('#'),
    TileTraits::pickup('+', 10),
    TileTraits::pickup('-', -10),
    TileTraits::wall('%'),
    TileTraits::floor('u'),
    TileTraits::floor('d'),
    TileTraits::floor('l'),
    TileTraits::floor('r'),
    TileTraits::floor('.'),
];

impl TileType {
    /// Every tile type, in catalog order.
    pub const ALL: [TileType; 11] = [
        TileType::Goal,
        TileType::Empty,
        TileType::Obstacle,
        TileType::Battery,
        TileType::Trap,
        TileType::Boundary,
        TileType::ArrowUp,
        TileType::ArrowDown,
        TileType::ArrowLeft,
        TileType::ArrowRight,
        TileType::Trail,
    ];

    /// Classify a map character
    ///
    /// Total: anything unrecognised is floor.
    ///
    /// # Examples
    ///
    /// ```
    /// use goal_robot_types::TileType;
    ///
    /// assert_eq!(TileType::classify('*'), TileType::Goal);
    /// assert_eq!(TileType::classify('%'), TileType::Boundary);
    /// assert_eq!(TileType::classify('r'), TileType::ArrowRight);
    /// assert_eq!(TileType::classify('x'), TileType::Empty);
    /// // A trail character in the map source is just floor.
    /// assert_eq!(TileType::classify('.'), TileType::Empty);
    /// ```
    pub fn classify(ch: char) -> Self {
        match ch {
            '*' => TileType::Goal,
            '#' => TileType::Obstacle,
            '+' => TileType::Battery,
            '-' => TileType::Trap,
            '%' => TileType::Boundary,
            'u' => TileType::ArrowUp,
            'd' => TileType::ArrowDown,
            'l' => TileType::ArrowLeft,
            'r' => TileType::ArrowRight,
            _ => TileType::Empty,
        }
    }

    /// Static behaviour of this tile type.
    #[inline]
    pub const fn traits(self) -> TileTraits {
        TILE_TRAITS[self as usize]
    }

    /// Display character
    pub const fn ch(self) -> char {
        self.traits().ch
    }

    pub const fn rigid(self) -> bool {
        self.traits().rigid
    }

    pub const fn energy_delta(self) -> i64 {
        self.traits().energy_delta
    }

    pub const fn consumable(self) -> bool {
        self.traits().consumable
    }
}

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a direction letter from the command grammar
    ///
    /// Only the lowercase letters `u`, `d`, `l`, `r` are accepted.
    ///
    /// ```
    /// use goal_robot_types::Direction;
    ///
    /// assert_eq!(Direction::from_char('r'), Some(Direction::Right));
    /// assert_eq!(Direction::from_char('R'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit `(d_row, d_col)` offset
    pub const fn offset(self) -> Pos {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Session result
///
/// `Won` and `Lost` are terminal and latch: once set they never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Fixed message printed when the session ends, if any.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won => Some(WIN_MESSAGE),
            Outcome::Lost => Some(LOSE_MESSAGE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}
