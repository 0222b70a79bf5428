//! Toggle rendering functions

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{FocusState, ToggleColors, ToggleState};

/// Render a toggle control as `[x] true` / `[ ] false`
pub fn render_toggle(frame: &mut Frame, area: Rect, state: &ToggleState, colors: &ToggleColors) {
    if area.height == 0 || area.width < 3 {
        return;
    }

    let (bracket_color, check_color, label_color) = match state.focus {
        FocusState::Normal => (colors.bracket, colors.checkmark, colors.label),
        FocusState::Focused => (colors.focused, colors.checkmark, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let mark = if state.checked { "x" } else { " " };

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(mark, Style::default().fg(check_color)),
        Span::styled("]", Style::default().fg(bracket_color)),
        Span::styled(format!(" {}", state.value()), Style::default().fg(label_color)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &ToggleState) -> String {
        let backend = TestBackend::new(12, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_toggle(frame, Rect::new(0, 0, 12, 1), state, &ToggleColors::default())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..12).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_toggle_checked() {
        assert_eq!(render(&ToggleState::new(true)).trim_end(), "[x] true");
    }

    #[test]
    fn test_toggle_unchecked() {
        assert_eq!(render(&ToggleState::new(false)).trim_end(), "[ ] false");
    }

    #[test]
    fn test_toggle_disabled_dims() {
        let backend = TestBackend::new(12, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let colors = ToggleColors::default();
        let state = ToggleState::new(true).with_focus(FocusState::Disabled);
        terminal
            .draw(|frame| render_toggle(frame, Rect::new(0, 0, 12, 1), &state, &colors))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 0)].fg, colors.disabled);
    }
}
