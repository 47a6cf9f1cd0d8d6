use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 3;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    game_mode: &str,
) {
    let [header, board, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(ROWS as u16 + 4),
        Constraint::Length(3),
        Constraint::Length(4),
    ])
    .areas(frame.area());

    render_header(frame, game_state, game_mode, header);

    let board_widget = Paragraph::new(board_lines(game_state.board(), selected_column))
        .alignment(Alignment::Center);
    frame.render_widget(board_widget, board);

    let status_widget = Paragraph::new(message.as_deref().unwrap_or(""))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, status);

    render_help(frame, help);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Red,
        Player::Computer => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: &str, area: Rect) {
    let (text, color) = match game_state.outcome() {
        GameOutcome::InProgress => {
            let player = game_state.current_player();
            (format!("Current Player: {}", player.name()), player_color(player))
        }
        GameOutcome::Winner(player) => (format!("{} wins", player.name()), player_color(player)),
        GameOutcome::Draw => ("Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(format!("{text}  |  {game_mode}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));
    frame.render_widget(header, area);
}

/// Column labels, the framed grid with the top row first, and a marker under
/// the selected column.
fn board_lines(board: &Board, selected_column: usize) -> Vec<Line<'static>> {
    let selected = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inner = "═".repeat(COLS * CELL_WIDTH + 1);

    let labels = (0..COLS).map(|col| {
        let label = format!(" {col} ");
        if col == selected_column {
            Span::styled(label, selected.add_modifier(Modifier::UNDERLINED))
        } else {
            Span::raw(label)
        }
    });
    let mut lines = vec![padded(labels.collect())];
    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in (0..ROWS).rev() {
        let mut spans = vec![Span::raw("  ║")];
        spans.extend((0..COLS).map(|col| match board.get(row, col) {
            Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            Cell::Human => Span::styled(" ● ", Style::default().fg(player_color(Player::Human))),
            Cell::Computer => {
                Span::styled(" ● ", Style::default().fg(player_color(Player::Computer)))
            }
        }));
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));
    let marker = (0..COLS).map(|col| {
        if col == selected_column {
            Span::styled(" ▲ ", selected)
        } else {
            Span::raw("   ")
        }
    });
    lines.push(padded(marker.collect()));
    lines
}

/// Wrap a row of column-aligned spans with the same margins as the grid.
fn padded(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = vec![Span::raw("   ")];
    all.extend(spans);
    all.push(Span::raw("  "));
    Line::from(all)
}

fn render_help(frame: &mut Frame, area: Rect) {
    let keys = Line::from("←/→: Move  |  Enter or 0-6: Drop  |  R: Restart  |  Q: Quit");
    let legend = Line::from(vec![
        Span::styled("● Player 1", Style::default().fg(player_color(Player::Human))),
        Span::raw(" (you)   "),
        Span::styled("● Player 2", Style::default().fg(player_color(Player::Computer))),
        Span::raw(" (computer)"),
    ]);

    let help = Paragraph::new(vec![keys, legend])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(help, area);
}
