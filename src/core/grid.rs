//! Letter tile grid
//!
//! A fixed 5x5 matrix of cells. Each cell holds an optional letter and a scoring modifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Number of rows and columns
pub const GRID_SIZE: usize = 5;

/// Number of cells in the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Offsets to the eight surrounding cells
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A (row, column) coordinate inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position for a row-major cell index
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / GRID_SIZE, index % GRID_SIZE)
    }

    /// Row-major cell index (0-24)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Every position in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self::from_index)
    }

    /// Up to eight adjacent positions (orthogonal and diagonal) inside the grid
    ///
    /// # Examples
    /// ```
    /// use tile_solver::core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).neighbors().count(), 3);
    /// assert_eq!(Position::new(0, 2).neighbors().count(), 5);
    /// assert_eq!(Position::new(2, 2).neighbors().count(), 8);
    /// ```
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Some(Self::new(row, col)).filter(|pos| pos.in_bounds())
        })
    }

    /// Whether `other` is one of the eight surrounding cells
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && !(dr == 0 && dc == 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Scoring modifier held by a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileModifier {
    #[default]
    Normal,
    DoubleLetter,
    DoubleWord,
}

impl TileModifier {
    /// Next modifier in the editing cycle: normal, double letter, double word
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::DoubleLetter,
            Self::DoubleLetter => Self::DoubleWord,
            Self::DoubleWord => Self::Normal,
        }
    }

    /// Suffix used in the textual grid notation
    #[must_use]
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::Normal => None,
            Self::DoubleLetter => Some('+'),
            Self::DoubleWord => Some('*'),
        }
    }
}

/// A single grid tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    modifier: TileModifier,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn modifier(&self) -> TileModifier {
        self.modifier
    }
}

/// Error type for invalid grid edits and notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds(Position),
    InvalidLetter(char),
    InvalidCharacter(char),
    DanglingModifier(char),
    TooManyCells,
    TooFewCells(usize),
    EmptyCell(Position),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(pos) => {
                write!(f, "Position {pos} is outside the {GRID_SIZE}x{GRID_SIZE} grid")
            }
            Self::InvalidLetter(c) => write!(f, "Tile letter must be A-Z, got {c:?}"),
            Self::InvalidCharacter(c) => write!(f, "Unexpected character {c:?} in grid"),
            Self::DanglingModifier(c) => write!(f, "Modifier {c:?} must follow a letter"),
            Self::TooManyCells => write!(f, "Grid has more than {CELL_COUNT} cells"),
            Self::TooFewCells(count) => {
                write!(f, "Grid must have exactly {CELL_COUNT} cells, got {count}")
            }
            Self::EmptyCell(pos) => write!(f, "Cell {pos} has no letter"),
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed 5x5 tile grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid with no letters and every modifier normal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `pos`, or `None` when outside the grid
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    /// Letter at `pos`, if assigned
    #[inline]
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.get(pos).and_then(Cell::letter)
    }

    /// Modifier at `pos`, normal when outside the grid
    #[inline]
    #[must_use]
    pub fn modifier(&self, pos: Position) -> TileModifier {
        self.get(pos).map_or(TileModifier::Normal, Cell::modifier)
    }

    /// Assign a letter, stored uppercase
    ///
    /// # Errors
    /// Returns `GridError` if `pos` is outside the grid or `letter` is not A-Z.
    pub fn set_letter(&mut self, pos: Position, letter: char) -> Result<(), GridError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::InvalidLetter(letter));
        }
        self.cell_mut(pos)?.letter = Some(letter.to_ascii_uppercase());
        Ok(())
    }

    /// Remove the letter at `pos`
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `pos` is outside the grid.
    pub fn clear_letter(&mut self, pos: Position) -> Result<(), GridError> {
        self.cell_mut(pos)?.letter = None;
        Ok(())
    }

    /// Replace the modifier at `pos`
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `pos` is outside the grid.
    pub fn set_modifier(&mut self, pos: Position, modifier: TileModifier) -> Result<(), GridError> {
        self.cell_mut(pos)?.modifier = modifier;
        Ok(())
    }

    /// Advance the modifier at `pos` to the next one in the cycle, returning it
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if `pos` is outside the grid.
    pub fn cycle_modifier(&mut self, pos: Position) -> Result<TileModifier, GridError> {
        let cell = self.cell_mut(pos)?;
        cell.modifier = cell.modifier.next();
        Ok(cell.modifier)
    }

    /// Grid-adjacent positions of `pos`
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        pos.neighbors()
    }

    /// First cell without a letter, in row-major order
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.letter(pos).is_none())
    }

    /// Whether every cell has a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Check the precondition for solving
    ///
    /// # Errors
    /// Returns `GridError::EmptyCell` naming the first cell without a letter.
    pub fn ensure_complete(&self) -> Result<(), GridError> {
        self.first_empty().map_or(Ok(()), |pos| Err(GridError::EmptyCell(pos)))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, GridError> {
        self.cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(GridError::OutOfBounds(pos))
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.row][pos.col]
    }
}

/// Parse the textual grid notation
///
/// 25 cells in row-major order. Whitespace and `/` are ignored, `.` is an empty cell,
/// and a letter followed by `+` or `*` is a double-letter or double-word tile.
///
/// # Examples
/// ```
/// use tile_solver::core::{Grid, Position, TileModifier};
///
/// let grid: Grid = "CAT+SX/ABCDE/FGHIJ/KLMN*O/PQRST".parse().unwrap();
/// assert_eq!(grid.letter(Position::new(0, 2)), Some('T'));
/// assert_eq!(grid.modifier(Position::new(0, 2)), TileModifier::DoubleLetter);
/// assert_eq!(grid.modifier(Position::new(3, 3)), TileModifier::DoubleWord);
/// ```
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut positions = Position::all();
        let mut filled = 0;
        let mut last_letter: Option<Position> = None;

        for ch in s.chars() {
            match ch {
                c if c.is_whitespace() || c == '/' => {}
                '+' | '*' => {
                    let pos = last_letter.ok_or(GridError::DanglingModifier(ch))?;
                    let modifier = if ch == '+' {
                        TileModifier::DoubleLetter
                    } else {
                        TileModifier::DoubleWord
                    };
                    grid.set_modifier(pos, modifier)?;
                }
                '.' => {
                    positions.next().ok_or(GridError::TooManyCells)?;
                    filled += 1;
                    last_letter = None;
                }
                c if c.is_ascii_alphabetic() => {
                    let pos = positions.next().ok_or(GridError::TooManyCells)?;
                    grid.set_letter(pos, c)?;
                    filled += 1;
                    last_letter = Some(pos);
                }
                c => return Err(GridError::InvalidCharacter(c)),
            }
        }

        if filled < CELL_COUNT {
            return Err(GridError::TooFewCells(filled));
        }
        Ok(grid)
    }
}

/// Writes the grid in the notation accepted by `FromStr`, one row per line
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.letter.unwrap_or('.'))?;
                if let Some(marker) = cell.modifier.marker() {
                    write!(f, "{marker}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: &str = "ABCDE FGHIJ KLMNO PQRST UVWXY";

    #[test]
    fn neighbors_stay_in_bounds() {
        for pos in Position::all() {
            for next in pos.neighbors() {
                assert!(next.in_bounds());
                assert!(pos.is_adjacent(next));
            }
        }
    }

    #[test]
    fn neighbor_counts() {
        assert_eq!(Position::new(0, 0).neighbors().count(), 3);
        assert_eq!(Position::new(4, 4).neighbors().count(), 3);
        assert_eq!(Position::new(0, 3).neighbors().count(), 5);
        assert_eq!(Position::new(3, 0).neighbors().count(), 5);
        assert_eq!(Position::new(1, 1).neighbors().count(), 8);
    }

    #[test]
    fn index_round_trip() {
        for index in 0..CELL_COUNT {
            assert_eq!(Position::from_index(index).index(), index);
        }
        assert_eq!(Position::new(2, 3).index(), 13);
    }

    #[test]
    fn adjacency_excludes_self() {
        let pos = Position::new(2, 2);
        assert!(!pos.is_adjacent(pos));
        assert!(pos.is_adjacent(Position::new(3, 3)));
        assert!(!pos.is_adjacent(Position::new(4, 2)));
    }

    #[test]
    fn adjacency_in_const_context() {
        const CORNER_DIAGONAL: bool = Position::new(0, 0).is_adjacent(Position::new(1, 1));
        const SAME_CELL: bool = Position::new(4, 4).is_adjacent(Position::new(4, 4));
        assert!(CORNER_DIAGONAL);
        assert!(!SAME_CELL);
    }

    #[test]
    fn modifier_cycle() {
        assert_eq!(TileModifier::Normal.next(), TileModifier::DoubleLetter);
        assert_eq!(TileModifier::DoubleLetter.next(), TileModifier::DoubleWord);
        assert_eq!(TileModifier::DoubleWord.next(), TileModifier::Normal);
    }

    #[test]
    fn modifier_serde_names() {
        assert_eq!(
            serde_json::to_string(&TileModifier::DoubleLetter).unwrap(),
            "\"doubleLetter\""
        );
        let parsed: TileModifier = serde_json::from_str("\"doubleWord\"").unwrap();
        assert_eq!(parsed, TileModifier::DoubleWord);
    }

    #[test]
    fn new_grid_is_incomplete() {
        let grid = Grid::new();
        assert!(!grid.is_complete());
        assert_eq!(
            grid.ensure_complete(),
            Err(GridError::EmptyCell(Position::new(0, 0)))
        );
    }

    #[test]
    fn set_letter_uppercases() {
        let mut grid = Grid::new();
        grid.set_letter(Position::new(1, 2), 'q').unwrap();
        assert_eq!(grid.letter(Position::new(1, 2)), Some('Q'));
    }

    #[test]
    fn set_letter_rejects_bad_input() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.set_letter(Position::new(5, 0), 'A'),
            Err(GridError::OutOfBounds(Position::new(5, 0)))
        );
        assert_eq!(
            grid.set_letter(Position::new(0, 0), '3'),
            Err(GridError::InvalidLetter('3'))
        );
    }

    #[test]
    fn clear_letter_makes_grid_incomplete() {
        let mut grid: Grid = LETTERS.parse().unwrap();
        assert!(grid.is_complete());

        grid.clear_letter(Position::new(3, 1)).unwrap();
        assert_eq!(grid.first_empty(), Some(Position::new(3, 1)));
    }

    #[test]
    fn cycle_modifier_in_place() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 4);
        assert_eq!(grid.cycle_modifier(pos), Ok(TileModifier::DoubleLetter));
        assert_eq!(grid.cycle_modifier(pos), Ok(TileModifier::DoubleWord));
        assert_eq!(grid[pos].modifier(), TileModifier::DoubleWord);
    }

    #[test]
    fn parse_plain_letters() {
        let grid: Grid = "abcdefghijklmnopqrstuvwxy".parse().unwrap();
        assert!(grid.is_complete());
        assert_eq!(grid.letter(Position::new(0, 0)), Some('A'));
        assert_eq!(grid.letter(Position::new(4, 4)), Some('Y'));
    }

    #[test]
    fn parse_modifiers_and_blanks() {
        let grid: Grid = "A+B*CDE/...../FGHIJ/KLMNO/PQRST".parse().unwrap();
        assert_eq!(grid.modifier(Position::new(0, 0)), TileModifier::DoubleLetter);
        assert_eq!(grid.modifier(Position::new(0, 1)), TileModifier::DoubleWord);
        assert_eq!(grid.letter(Position::new(1, 0)), None);
        assert!(!grid.is_complete());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("ABC".parse::<Grid>(), Err(GridError::TooFewCells(3)));
        assert_eq!(
            format!("{LETTERS}Z").parse::<Grid>(),
            Err(GridError::TooManyCells)
        );
        assert_eq!(
            "+ABCDEFGHIJKLMNOPQRSTUVWXY".parse::<Grid>(),
            Err(GridError::DanglingModifier('+'))
        );
        assert_eq!(
            "ABCDE-FGHIJ".parse::<Grid>(),
            Err(GridError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn display_matches_notation() {
        let text = "CAT+SX\nABCDE\nFGHIJ\nKLMN*O\nPQRS.";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }
}
