use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::model::{Room, RoomName};
use super::validator::{ValidationError, validate_map};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
pub(super) struct MapFile {
    pub(super) map: MapHeader,
    #[serde(default)]
    pub(super) room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
pub(super) struct MapHeader {
    #[serde(default)]
    pub(super) name: String,
    pub(super) root: String,
}

#[derive(Deserialize)]
pub(super) struct RoomConfig {
    pub(super) id: String,
    pub(super) name: String,

    #[serde(default)]
    pub(super) left: Option<String>,

    #[serde(default)]
    pub(super) right: Option<String>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read map file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse map: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid map: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a map from a .toml file on disk.
pub fn load_map_from_file(path: &Path) -> Result<Room, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_map_from_str(&contents)
}

/// Load a map from TOML text. The whole file is validated before any room is
/// built, so a returned tree is always well formed.
pub fn load_map_from_str(contents: &str) -> Result<Room, LoadError> {
    let map_file: MapFile = toml::from_str(contents)?;

    let errors = validate_map(&map_file);
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }

    let by_id: HashMap<&str, &RoomConfig> = map_file
        .room
        .iter()
        .map(|r| (r.id.trim(), r))
        .collect();

    let root = build_subtree(map_file.map.root.trim(), &by_id);
    info!(
        map = %map_file.map.name,
        rooms = root.count(),
        "loaded map"
    );
    Ok(root)
}

// Only called after validation: every id resolves and each room has at most
// one parent, so the recursion visits each room once and terminates.
fn build_subtree(id: &str, by_id: &HashMap<&str, &RoomConfig>) -> Room {
    let cfg = by_id[id];
    debug!(id, name = %cfg.name, "building room");

    Room {
        name: RoomName::truncated(&cfg.name),
        left: cfg
            .left
            .as_deref()
            .map(|child| Box::new(build_subtree(child.trim(), by_id))),
        right: cfg
            .right
            .as_deref()
            .map(|child| Box::new(build_subtree(child.trim(), by_id))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::build_mansion;

    const MANSION_TOML: &str = r#"
[map]
name = "Mansao"
root = "hall"

[[room]]
id = "hall"
name = "Hall de Entrada"
left = "estar"
right = "jantar"

[[room]]
id = "estar"
name = "Sala de Estar"
left = "biblioteca"
right = "jardim"

[[room]]
id = "biblioteca"
name = "Biblioteca"
left = "escritorio"

[[room]]
id = "escritorio"
name = "Escritorio Secreto"

[[room]]
id = "jardim"
name = "Jardim de Inverno"

[[room]]
id = "jantar"
name = "Sala de Jantar"
right = "cozinha"

[[room]]
id = "cozinha"
name = "Cozinha"
left = "despensa"

[[room]]
id = "despensa"
name = "Despensa"
"#;

    #[test]
    fn mansion_file_matches_builtin_map() {
        let loaded = load_map_from_str(MANSION_TOML).unwrap();
        assert_eq!(loaded, build_mansion());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = load_map_from_str("[map\nroot = ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_map_from_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn invalid_map_reports_every_problem() {
        let toml = r#"
[map]
root = "hall"

[[room]]
id = "hall"
name = "Hall"
left = "nowhere"
right = "cellar"

[[room]]
id = "cellar"
name = ""
"#;
        match load_map_from_str(toml) {
            Err(LoadError::Invalid(errors)) => {
                assert_eq!(errors.len(), 2, "{errors:?}");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
