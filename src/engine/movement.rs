use tracing::debug;

use crate::engine::output::Output;
use crate::world::{Direction, Room};

/// A single player keystroke, already interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Go(Direction),
    Exit,
    Invalid(char),
}

pub const EXIT_KEY: char = 's';
pub const FAREWELL_TEXT: &str = "Voce decidiu sair da mansao... Ate a proxima, detetive.";

impl Choice {
    pub fn parse(c: char) -> Choice {
        match c.to_ascii_lowercase() {
            'e' => Choice::Go(Direction::Left),
            'd' => Choice::Go(Direction::Right),
            EXIT_KEY => Choice::Exit,
            _ => Choice::Invalid(c),
        }
    }
}

/// Result of applying a choice to the current room.
#[derive(Debug, PartialEq, Eq)]
pub enum Move<'a> {
    Enter(&'a Room),
    Stay,
    Leave,
}

/// Resolves `choice` against `room`. Choices that cannot be honoured are
/// reported through `out` and leave the player where they are.
pub fn try_handle_choice<'a>(out: &mut Output, room: &'a Room, choice: Choice) -> Move<'a> {
    match choice {
        Choice::Go(dir) => match room.child(dir) {
            Some(next) => Move::Enter(next),
            None => {
                out.notice(format!(
                    "Caminho bloqueado. Nao ha nada a {}.",
                    dir.side()
                ));
                Move::Stay
            }
        },
        Choice::Exit => {
            out.say(FAREWELL_TEXT);
            Move::Leave
        }
        Choice::Invalid(key) => {
            debug!(?key, room = %room.name, "unrecognised choice");
            out.notice(format!(
                "Opcao invalida. Por favor, escolha '{}', '{}' ou '{}'.",
                Direction::Left.key(),
                Direction::Right.key(),
                EXIT_KEY
            ));
            Move::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('e', Choice::Go(Direction::Left))]
    #[case('E', Choice::Go(Direction::Left))]
    #[case('d', Choice::Go(Direction::Right))]
    #[case('D', Choice::Go(Direction::Right))]
    #[case('s', Choice::Exit)]
    #[case('S', Choice::Exit)]
    #[case('x', Choice::Invalid('x'))]
    #[case('1', Choice::Invalid('1'))]
    fn parses_choice_letters(#[case] key: char, #[case] expected: Choice) {
        assert_eq!(Choice::parse(key), expected);
    }

    #[test]
    fn absent_child_is_blocked() {
        let room = Room::new("Sala de Jantar").with_right(Room::new("Cozinha"));
        let mut out = Output::new();

        let mv = try_handle_choice(&mut out, &room, Choice::Go(Direction::Left));

        assert_eq!(mv, Move::Stay);
        assert_eq!(
            out.notices().collect::<Vec<_>>(),
            vec!["Caminho bloqueado. Nao ha nada a esquerda."]
        );
    }

    #[test]
    fn present_child_is_entered() {
        let room = Room::new("Sala de Jantar").with_right(Room::new("Cozinha"));
        let mut out = Output::new();

        match try_handle_choice(&mut out, &room, Choice::Go(Direction::Right)) {
            Move::Enter(next) => assert_eq!(next.name.as_str(), "Cozinha"),
            other => panic!("expected to move, got {other:?}"),
        }
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn invalid_key_names_the_valid_ones() {
        let room = Room::new("Hall");
        let mut out = Output::new();

        assert_eq!(try_handle_choice(&mut out, &room, Choice::Invalid('x')), Move::Stay);
        assert_eq!(
            out.notices().collect::<Vec<_>>(),
            vec!["Opcao invalida. Por favor, escolha 'e', 'd' ou 's'."]
        );
    }
}
