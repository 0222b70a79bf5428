//! Number input rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{format_number, FocusState, NumberInputColors, NumberInputState, NumberKind};
use crate::model::format::{format_bytes, format_duration_ms};

/// Render a number input control.
///
/// Sizes and durations get a friendly hint after the field. Returns the
/// terminal cursor position while the value is being typed.
pub fn render_number_input(
    frame: &mut Frame,
    area: Rect,
    state: &NumberInputState,
    colors: &NumberInputColors,
) -> Option<(u16, u16)> {
    if area.height == 0 || area.width < 5 {
        return None;
    }

    let (value_color, border_color) = match state.focus {
        FocusState::Normal => (colors.value, colors.border),
        FocusState::Focused => (colors.focused, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled),
    };
    let hint_color = if state.is_enabled() {
        colors.hint
    } else {
        colors.disabled
    };

    let text = match &state.editor {
        Some(editor) => editor.value.clone(),
        None if state.is_infinite() => "Infinite".to_string(),
        None => format_number(state.value, state.kind),
    };
    let field_width = text.chars().count().max(10);
    let mut value_style = Style::default().fg(value_color);
    if state.editing() {
        value_style = value_style.add_modifier(Modifier::UNDERLINED);
    }

    let mut spans = vec![
        Span::styled("[ ", Style::default().fg(border_color)),
        Span::styled(format!("{:<field_width$}", text), value_style),
        Span::styled(" ]", Style::default().fg(border_color)),
    ];
    if let Some(hint) = hint(state) {
        spans.push(Span::styled(format!(" {}", hint), Style::default().fg(hint_color)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    state.editor.as_ref().and_then(|editor| {
        let column = editor.value[..editor.cursor].chars().count() as u16;
        let x = area.x + 2 + column;
        (x < area.x + area.width).then_some((x, area.y))
    })
}

/// Friendly rendering of the value, or the key hint for infinite-capable kinds
fn hint(state: &NumberInputState) -> Option<String> {
    if state.editing() {
        return None;
    }
    let friendly = match state.kind {
        NumberKind::Bytes if !state.is_infinite() => Some(format_bytes(state.value as u64)),
        NumberKind::Duration if !state.is_infinite() => {
            Some(format_duration_ms(state.value as u64))
        }
        _ => None,
    };
    match (friendly, state.kind.allows_infinite() && state.focus == FocusState::Focused) {
        (Some(friendly), true) => Some(format!("{}  (i: infinite)", friendly)),
        (None, true) => Some("(i: finite)".to_string()),
        (friendly, false) => friendly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &NumberInputState) -> (String, Option<(u16, u16)>) {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut cursor = None;
        terminal
            .draw(|frame| {
                cursor = render_number_input(
                    frame,
                    Rect::new(0, 0, 50, 1),
                    state,
                    &NumberInputColors::default(),
                );
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let line = (0..50).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        (line, cursor)
    }

    #[test]
    fn test_duration_shows_friendly_hint() {
        let state = NumberInputState::new(Some("604800000"), NumberKind::Duration);
        let (line, cursor) = render(&state);
        assert!(line.starts_with("[ 604800000  ]"));
        assert!(line.contains("7 days"));
        assert!(cursor.is_none());
    }

    #[test]
    fn test_infinite_sentinel_rendered_as_word() {
        let state = NumberInputState::new(Some("-1"), NumberKind::Bytes)
            .with_focus(FocusState::Focused);
        let (line, _) = render(&state);
        assert!(line.contains("Infinite"));
        assert!(line.contains("(i: finite)"));
    }

    #[test]
    fn test_editing_reports_cursor() {
        let mut state =
            NumberInputState::new(Some("42"), NumberKind::Integer).with_focus(FocusState::Focused);
        state.start_editing();
        let (_, cursor) = render(&state);
        assert_eq!(cursor, Some((4, 0)));
    }
}
