use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{FocusState, MultiSelectColors, MultiSelectState};

/// Render the checklist, one option per row of `area`
pub fn render_multi_select(
    frame: &mut Frame,
    area: Rect,
    state: &MultiSelectState,
    colors: &MultiSelectColors,
) {
    if area.height == 0 || area.width < 4 {
        return;
    }

    if state.options.is_empty() {
        let color = if state.is_enabled() {
            colors.label
        } else {
            colors.disabled
        };
        frame.render_widget(
            Paragraph::new(Span::styled("(no options)", Style::default().fg(color))),
            Rect::new(area.x, area.y, area.width, 1),
        );
        return;
    }

    // Keep the cursor row on screen
    let rows = area.height as usize;
    let first = (state.cursor + 1).saturating_sub(rows);

    for (row, index) in (first..state.options.len()).take(rows).enumerate() {
        let on_cursor = index == state.cursor && state.focus == FocusState::Focused;
        let (bracket, check, label) = match state.focus {
            FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
            _ if on_cursor => (colors.focused, colors.checkmark, colors.focused),
            _ => (colors.bracket, colors.checkmark, colors.label),
        };
        let mut label_style = Style::default().fg(label);
        if on_cursor {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        let mark = if state.checked[index] { "x" } else { " " };
        let line = Line::from(vec![
            Span::styled("[", Style::default().fg(bracket)),
            Span::styled(mark, Style::default().fg(check)),
            Span::styled("] ", Style::default().fg(bracket)),
            Span::styled(state.options[index].clone(), label_style),
        ]);
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(area.x, area.y + row as u16, area.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_renders_one_row_per_option() {
        let state = MultiSelectState::new(
            vec!["delete".to_string(), "compact".to_string()],
            Some("compact"),
        );
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_multi_select(
                    frame,
                    Rect::new(0, 0, 20, 2),
                    &state,
                    &MultiSelectColors::default(),
                )
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..20)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert_eq!(row(0).trim_end(), "[ ] delete");
        assert_eq!(row(1).trim_end(), "[x] compact");
    }
}
