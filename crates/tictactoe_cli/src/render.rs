//! Text rendering of the engine's board view.

use tictactoe_engine::{BoardView, CellView, ViewConfig};

/// Renders the grid, winning line and status message.
///
/// Winning cells are bracketed, empty cells show their index when
/// `show_indices` is on.
pub fn render_text(view: &BoardView, config: &ViewConfig) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            view.row(row)
                .iter()
                .map(|cell| render_cell(cell, config))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let mut out = rows.join("\n---+---+---\n");
    out.push('\n');

    let winning = view.winning_positions();
    if !winning.is_empty() {
        let labels: Vec<_> = winning.iter().map(|p| p.label()).collect();
        out.push_str(&format!("Winning line: {}\n", labels.join(", ")));
    }
    out.push_str(&view.message);
    out.push('\n');
    out
}

fn render_cell(cell: &CellView, config: &ViewConfig) -> String {
    match (cell.mark, cell.is_winning) {
        (Some(player), true) => format!("[{player}]"),
        (Some(player), false) => format!(" {player} "),
        (None, _) if config.show_indices && !cell.game_finished => format!(" {} ", cell.index),
        (None, _) => "   ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameState, apply_move, replay};

    #[test]
    fn test_render_initial_board() {
        let config = ViewConfig::default();
        let view = BoardView::from_state(&GameState::new(), &config);
        assert_eq!(
            render_text(&view, &config),
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 \nPlayer O's turn\n"
        );
    }

    #[test]
    fn test_render_hides_indices() {
        let config = ViewConfig {
            show_indices: false,
            ..ViewConfig::default()
        };
        let state = apply_move(GameState::new(), 4);
        let view = BoardView::from_state(&state, &config);
        let text = render_text(&view, &config);
        assert!(text.starts_with("   |   |   \n---+---+---\n   | O |   \n"));
        assert!(text.ends_with("Player X's turn\n"));
    }

    #[test]
    fn test_render_win_brackets_line() {
        let config = ViewConfig {
            decorations: false,
            ..ViewConfig::default()
        };
        let view = BoardView::from_state(&replay([0, 3, 1, 4, 2]), &config);
        let text = render_text(&view, &config);
        assert!(text.starts_with("[O]|[O]|[O]\n---+---+---\n X | X |   \n"));
        assert!(text.contains("Winning line: Top-left, Top-center, Top-right\n"));
        assert!(text.ends_with("Player O wins!\n"));
    }
}
