mod explorer;
mod input;
mod movement;
mod output;
mod render;

// Minimal, intentional surface area: the explorer and the types its methods return.
pub use explorer::{Ending, Expedition, Explorer, ExplorerState, run};
pub use output::{Output, OutputBlock};
pub use render::DEAD_END_TEXT;
