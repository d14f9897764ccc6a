use super::terrain::Terrain;

/// One of the four movement directions. Moves never wrap around the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ]
    }

    /// Parses a WASD key, case-insensitive.
    pub fn from_key(input: &str) -> Option<Direction> {
        match input.trim().to_ascii_uppercase().as_str() {
            "W" => Some(Direction::North),
            "A" => Some(Direction::West),
            "S" => Some(Direction::South),
            "D" => Some(Direction::East),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Direction::North => 'W',
            Direction::West => 'A',
            Direction::South => 'S',
            Direction::East => 'D',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::West => "WEST",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
        }
    }
}

use Terrain::*;

const STANDARD_LAYOUT: [[Terrain; 7]; 5] = [
    [Plains, Plains, Plains, Plains, Forest, Mountain, Cave],
    [Forest, Forest, Forest, Forest, Forest, Hills, Mountain],
    [Forest, Fields, Bridge, Plains, Hills, Forest, Hills],
    [Plains, Shop, Town, Major, Plains, Hills, Mountain],
    [Plains, Fields, Fields, Plains, Hills, Mountain, Mountain],
];

/// Fixed rectangular grid of terrain, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    rows: Vec<Vec<Terrain>>,
}

impl WorldMap {
    /// The hand-drawn 7x5 overworld: town in the south-west, cave in the north-east.
    pub fn standard() -> Self {
        Self {
            rows: STANDARD_LAYOUT.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Builds a map from explicit rows. Returns `None` for empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn terrain_at(&self, x: usize, y: usize) -> Option<Terrain> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// True when a step from `(x, y)` in `direction` stays on the map.
    pub fn can_move(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.step(x, y, direction).is_some()
    }

    /// The tile reached by one step, or `None` at the edge.
    pub fn step(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (nx, ny) = match direction {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::West => (x.checked_sub(1)?, y),
            Direction::South => (x, y + 1),
            Direction::East => (x + 1, y),
        };
        self.contains(nx, ny).then_some((nx, ny))
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::standard()
    }
}
