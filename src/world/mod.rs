mod builder;
mod loader;
mod model;
mod teardown;
mod validator;

pub use builder::build_mansion;
pub use loader::{LoadError, load_map_from_file, load_map_from_str};

// Minimal, intentional surface area: re-export only what the explorer and front end use.
pub use model::{Direction, MAX_ROOM_NAME_LEN, Room, RoomName};
pub use teardown::release;
pub use validator::{MAX_MAP_DEPTH, ValidationError};
