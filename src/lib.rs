pub mod engine;
pub mod world;

pub use engine::{Ending, Expedition, Explorer, run};
pub use world::{Room, build_mansion, load_map_from_file, load_map_from_str, release};

pub const BANNER: &str = "--- Bem-vindo ao Detective Quest ---\n\
Voce esta na entrada da mansao. Explore os comodos para encontrar o culpado.";

pub const CLOSING: &str = "\nJogo encerrado.";
