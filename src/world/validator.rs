use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use super::loader::MapFile;
use super::model::{MAX_ROOM_NAME_LEN, RoomName};

/// Longest root-to-leaf path, counted in rooms, a map file may describe.
/// Rooms are walked recursively once built, so the bound keeps every walk
/// well inside the stack.
pub const MAX_MAP_DEPTH: usize = 1024;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks that a map file describes a single finite tree: every reference
/// resolves, no room has two parents and the root has none.
pub(super) fn validate_map(map: &MapFile) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if map.room.is_empty() {
        errors.push(ValidationError::new("map has no rooms"));
        return errors;
    }

    let root = map.map.root.trim();
    if root.is_empty() {
        errors.push(ValidationError::new("map.root may not be empty"));
    }

    // Ids and names
    let mut ids: HashSet<&str> = HashSet::new();
    for room in &map.room {
        let id = room.id.trim();
        if id.is_empty() {
            errors.push(ValidationError::new(format!(
                "room named '{}' has an empty id",
                room.name
            )));
            continue;
        }
        if !ids.insert(id) {
            errors.push(ValidationError::new(format!("duplicate room id '{}'", id)));
        }
        if RoomName::checked(&room.name).is_none() {
            errors.push(ValidationError::new(format!(
                "room '{}' name must be 1 to {} bytes, got {}",
                id,
                MAX_ROOM_NAME_LEN,
                room.name.trim().len()
            )));
        }
    }

    if !root.is_empty() && !ids.contains(root) {
        errors.push(ValidationError::new(format!(
            "map.root '{}' not found among rooms",
            root
        )));
    }

    // Children must exist and have exactly one parent
    let mut parent_of: HashMap<&str, &str> = HashMap::new();
    for room in &map.room {
        let id = room.id.trim();
        for (side, child) in [("left", &room.left), ("right", &room.right)] {
            let Some(child) = child.as_deref().map(str::trim) else {
                continue;
            };

            if !ids.contains(child) {
                errors.push(ValidationError::new(format!(
                    "room '{}' {} targets missing room '{}'",
                    id, side, child
                )));
                continue;
            }

            if child == root {
                errors.push(ValidationError::new(format!(
                    "room '{}' {} points back to the root '{}'",
                    id, side, child
                )));
            }

            if let Some(previous) = parent_of.insert(child, id) {
                errors.push(ValidationError::new(format!(
                    "room '{}' is a child of both '{}' and '{}'",
                    child, previous, id
                )));
            }
        }
    }

    // With single parents and a parentless root, anything not reachable from
    // the root is either an orphan or sits on a cycle.
    if errors.is_empty() {
        let (reachable, depth) = reachable_from(root, map);
        if depth > MAX_MAP_DEPTH {
            errors.push(ValidationError::new(format!(
                "map is {} rooms deep, the limit is {}",
                depth, MAX_MAP_DEPTH
            )));
        }
        for room in &map.room {
            let id = room.id.trim();
            if reachable.contains(id) {
                continue;
            }
            if parent_of.contains_key(id) && on_cycle(id, &parent_of) {
                errors.push(ValidationError::new(format!(
                    "room '{}' is part of a cycle",
                    id
                )));
            } else if !parent_of.contains_key(id) {
                warn!(room = id, "room is unreachable from the root and will be ignored");
            }
        }
    }

    errors
}

// Returns the rooms reachable from `root` and the depth of the deepest one.
fn reachable_from<'a>(root: &'a str, map: &'a MapFile) -> (HashSet<&'a str>, usize) {
    let children: HashMap<&str, Vec<&str>> = map
        .room
        .iter()
        .map(|r| {
            let kids = [&r.left, &r.right]
                .into_iter()
                .filter_map(|c| c.as_deref().map(str::trim))
                .collect();
            (r.id.trim(), kids)
        })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut deepest = 0;
    let mut stack = vec![(root, 1usize)];
    while let Some((id, depth)) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        deepest = deepest.max(depth);
        if let Some(kids) = children.get(id) {
            stack.extend(kids.iter().map(|&kid| (kid, depth + 1)));
        }
    }
    (seen, deepest)
}

// Following single-parent links upward from `start` either reaches a room
// without a parent or comes back around to a room already seen.
fn on_cycle(start: &str, parent_of: &HashMap<&str, &str>) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut cur = start;
    while let Some(&parent) = parent_of.get(cur) {
        if !seen.insert(cur) {
            return true;
        }
        cur = parent;
    }
    false
}
