use std::fmt;

/// Longest room name, in bytes, that a `RoomName` will hold.
pub const MAX_ROOM_NAME_LEN: usize = 49;

/// Bounded room label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomName(String);

impl RoomName {
    /// Builds a name, cutting anything past `MAX_ROOM_NAME_LEN` bytes on a
    /// character boundary.
    pub fn truncated(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.len() <= MAX_ROOM_NAME_LEN {
            return RoomName(raw.to_string());
        }

        let end = raw
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take_while(|&end| end <= MAX_ROOM_NAME_LEN)
            .last()
            .unwrap_or(0);
        RoomName(raw[..end].to_string())
    }

    /// Builds a name only if it is non-empty and fits the bound.
    pub fn checked(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.len() > MAX_ROOM_NAME_LEN {
            None
        } else {
            Some(RoomName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Letter the player types for this direction.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "Esquerda",
            Direction::Right => "Direita",
        }
    }

    /// Lowercase form used inside sentences ("a esquerda").
    pub fn side(self) -> &'static str {
        match self {
            Direction::Left => "esquerda",
            Direction::Right => "direita",
        }
    }
}

/// A node of the mansion map. Each child is exclusively owned by its parent,
/// so the tree cannot share rooms or form cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: RoomName,
    pub left: Option<Box<Room>>,
    pub right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: &str) -> Self {
        Room {
            name: RoomName::truncated(name),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Room) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Room) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn child(&self, dir: Direction) -> Option<&Room> {
        match dir {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Directions that lead somewhere, in menu order.
    pub fn exits(&self) -> Vec<(Direction, &Room)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.child(d).map(|c| (d, c)))
            .collect()
    }

    /// Number of rooms in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + Direction::ALL
            .into_iter()
            .filter_map(|d| self.child(d))
            .map(Room::count)
            .sum::<usize>()
    }

    /// Names of every dead end below (or at) this room, left to right.
    pub fn leaf_names(&self) -> Vec<&str> {
        if self.is_dead_end() {
            return vec![self.name.as_str()];
        }
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.child(d))
            .flat_map(Room::leaf_names)
            .collect()
    }

    /// Two-line description printed by `--check`.
    pub fn summary(&self) -> String {
        format!(
            "Map OK: {} rooms, root '{}'\nDead ends: {}",
            self.count(),
            self.name,
            self.leaf_names().join(", ")
        )
    }
}
