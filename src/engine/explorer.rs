use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::engine::input::ChoiceReader;
use crate::engine::movement::{Choice, FAREWELL_TEXT, Move, try_handle_choice};
use crate::engine::output::{Output, flush_output};
use crate::engine::render::render_room;
use crate::world::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState<'a> {
    InRoom(&'a Room),
    Exited,
    DeadEnd,
}

/// How an exploration finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player chose to leave (or the input ran out).
    Exited,
    /// The player walked into a room with no way forward.
    DeadEnd,
}

/// Walks a map from the root towards a leaf, one choice at a time.
/// The map is only borrowed; the current room is the sole mutable state.
#[derive(Debug)]
pub struct Explorer<'a> {
    state: ExplorerState<'a>,
    trail: Vec<&'a str>,
}

impl<'a> Explorer<'a> {
    /// Places the player in `root` and returns the first render. A root
    /// without children ends the exploration immediately.
    pub fn start(root: &'a Room) -> (Self, Output) {
        let mut explorer = Explorer {
            state: ExplorerState::InRoom(root),
            trail: Vec::new(),
        };
        let mut out = Output::new();
        explorer.arrive(&mut out, root);
        (explorer, out)
    }

    /// Applies one choice key; returns the output and whether exploration is over.
    pub fn step(&mut self, key: char) -> (Output, bool) {
        let mut out = Output::new();

        let room = match self.state {
            ExplorerState::InRoom(room) => room,
            ExplorerState::Exited | ExplorerState::DeadEnd => return (out, true),
        };

        let choice = Choice::parse(key);
        match try_handle_choice(&mut out, room, choice) {
            Move::Enter(next) => {
                debug!(from = %room.name, to = %next.name, "moved");
                self.arrive(&mut out, next);
            }
            Move::Stay => {
                debug!(room = %room.name, ?choice, "choice did not move the player");
                render_room(&mut out, room);
            }
            Move::Leave => {
                info!(room = %room.name, "player left the mansion");
                self.state = ExplorerState::Exited;
            }
        }

        (out, self.is_finished())
    }

    /// Ends the exploration because no more input will arrive.
    pub fn abandon(&mut self) -> Output {
        let mut out = Output::new();
        if let ExplorerState::InRoom(room) = self.state {
            info!(room = %room.name, "input closed, leaving the mansion");
            out.say(format!("\n{}", FAREWELL_TEXT));
            self.state = ExplorerState::Exited;
        }
        out
    }

    fn arrive(&mut self, out: &mut Output, room: &'a Room) {
        self.trail.push(room.name.as_str());
        render_room(out, room);

        self.state = if room.is_dead_end() {
            info!(room = %room.name, "reached a dead end");
            ExplorerState::DeadEnd
        } else {
            ExplorerState::InRoom(room)
        };
    }

    pub fn state(&self) -> ExplorerState<'a> {
        self.state
    }

    pub fn current(&self) -> Option<&'a Room> {
        match self.state {
            ExplorerState::InRoom(room) => Some(room),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ending().is_some()
    }

    pub fn ending(&self) -> Option<Ending> {
        match self.state {
            ExplorerState::InRoom(_) => None,
            ExplorerState::Exited => Some(Ending::Exited),
            ExplorerState::DeadEnd => Some(Ending::DeadEnd),
        }
    }

    /// Names of the rooms entered so far, in order.
    pub fn trail(&self) -> &[&'a str] {
        &self.trail
    }
}

/// Summary of a finished exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expedition {
    pub ending: Ending,
    pub trail: Vec<String>,
}

/// Runs an interactive exploration of `root`, reading choices from `input`
/// and writing the transcript to `output`. Input left over after the
/// exploration ends is not consumed.
pub fn run<R: BufRead, W: Write>(root: &Room, input: R, output: &mut W) -> io::Result<Expedition> {
    let mut reader = ChoiceReader::new(input);
    let (mut explorer, out) = Explorer::start(root);
    flush_output(out, output)?;

    while !explorer.is_finished() {
        match reader.next_choice()? {
            Some(key) => {
                let (out, _) = explorer.step(key);
                flush_output(out, output)?;
            }
            None => {
                let out = explorer.abandon();
                flush_output(out, output)?;
            }
        }
    }

    let ending = explorer.ending().unwrap_or(Ending::Exited);
    Ok(Expedition {
        ending,
        trail: explorer.trail().iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::build_mansion;

    #[test]
    fn starts_in_root() {
        let map = build_mansion();
        let (explorer, _) = Explorer::start(&map);
        assert_eq!(explorer.current().map(|r| r.name.as_str()), Some("Hall de Entrada"));
        assert_eq!(explorer.trail(), &["Hall de Entrada"]);
        assert_eq!(explorer.ending(), None);
    }

    #[test]
    fn leaf_root_is_a_dead_end_at_once() {
        let map = Room::new("Despensa");
        let (explorer, _) = Explorer::start(&map);
        assert_eq!(explorer.state(), ExplorerState::DeadEnd);
    }

    #[test]
    fn exit_is_honoured_from_any_depth() {
        let map = build_mansion();
        let (mut explorer, _) = Explorer::start(&map);
        explorer.step('e');
        explorer.step('e');
        let (out, done) = explorer.step('S');

        assert!(done);
        assert_eq!(explorer.ending(), Some(Ending::Exited));
        assert!(out.blocks.iter().any(|b| matches!(
            b,
            crate::engine::OutputBlock::Text(t) if t == FAREWELL_TEXT
        )));
    }

    #[test]
    fn invalid_choice_reprompts_same_room() {
        let map = build_mansion();
        let (mut explorer, _) = Explorer::start(&map);
        let (out, done) = explorer.step('x');

        assert!(!done);
        assert_eq!(explorer.current().map(|r| r.name.as_str()), Some("Hall de Entrada"));
        assert_eq!(out.notices().count(), 1);
        assert_eq!(explorer.trail().len(), 1);
    }

    #[test]
    fn steps_after_the_end_do_nothing() {
        let map = build_mansion();
        let (mut explorer, _) = Explorer::start(&map);
        explorer.step('s');
        let (out, done) = explorer.step('e');
        assert!(done);
        assert!(out.blocks.is_empty());
        assert!(explorer.abandon().blocks.is_empty());
    }
}
