use std::io::{self, BufRead, Write};

use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, GameView, Player, COLS};

/// Line-based game loop: the human types a column, the agent answers.
///
/// Returns the final outcome, or `InProgress` when input ends mid-game.
pub fn run_console<R, W>(
    state: &mut GameState,
    agent: &mut dyn Agent,
    input: R,
    output: &mut W,
    json: bool,
) -> io::Result<GameOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    print_state(state, output, json)?;

    while !state.is_terminal() {
        match state.current_player() {
            Player::Human => {
                write!(
                    output,
                    "{} make your selection (0-{}): ",
                    Player::Human.name(),
                    COLS - 1
                )?;
                output.flush()?;

                let Some(line) = lines.next().transpose()? else {
                    writeln!(output)?;
                    return Ok(state.outcome());
                };
                let Ok(column) = line.trim().parse::<usize>() else {
                    writeln!(output, "Invalid move! Try again.")?;
                    continue;
                };
                if let Err(err) = state.apply_human_move(column) {
                    writeln!(output, "Invalid move! Try again. ({err})")?;
                    continue;
                }
            }
            Player::Computer => {
                let column = agent.select_action(state);
                writeln!(
                    output,
                    "{} ({}) plays column {column}",
                    Player::Computer.name(),
                    agent.name()
                )?;
                if let Err(err) = state.apply_move_mut(column) {
                    return Err(io::Error::other(err));
                }
            }
        }
        print_state(state, output, json)?;
    }

    match state.outcome() {
        GameOutcome::Winner(player) => writeln!(output, "{} wins!", player.name())?,
        GameOutcome::Draw => writeln!(output, "It's a tie!")?,
        GameOutcome::InProgress => {}
    }
    Ok(state.outcome())
}

fn print_state<W: Write>(state: &GameState, output: &mut W, json: bool) -> io::Result<()> {
    writeln!(output, "{}", state.board())?;
    if json {
        let view = GameView::from(state);
        writeln!(output, "{}", view.to_json().map_err(io::Error::other)?)?;
    }
    Ok(())
}
