use crate::engine::movement::EXIT_KEY;
use crate::engine::output::Output;
use crate::world::Room;

pub const DEAD_END_TEXT: &str = "Este e um comodo sem saida. Fim da exploracao neste caminho.";
pub const PROMPT: &str = "Opcao: ";

/// Shows the room and, unless it is a dead end, the moves available from it.
pub fn render_room(out: &mut Output, room: &Room) {
    out.room(room.name.as_str());

    if room.is_dead_end() {
        out.say(DEAD_END_TEXT);
        return;
    }

    let mut options: Vec<String> = room
        .exits()
        .into_iter()
        .map(|(dir, next)| format!("({}) Ir para a {} ({})", dir.key(), dir.label(), next.name))
        .collect();
    options.push(format!("({}) Sair da mansao", EXIT_KEY));

    out.menu(options);
    out.prompt(PROMPT);
}
