//! Button rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{ButtonColors, ButtonState, FocusState};

/// Render a button control, returning the area it occupies
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    state: &ButtonState,
    colors: &ButtonColors,
) -> Rect {
    if area.height == 0 || area.width < 4 {
        return Rect::default();
    }

    let (text_style, border_color) = match state.focus {
        FocusState::Normal => (Style::default().fg(colors.text), colors.border),
        FocusState::Focused => (
            Style::default()
                .fg(colors.focused_fg)
                .bg(colors.focused_bg)
                .add_modifier(Modifier::BOLD),
            colors.focused_bg,
        ),
        FocusState::Disabled => (Style::default().fg(colors.disabled), colors.disabled),
    };

    let width = state.width().min(area.width);
    let max_label_len = width.saturating_sub(4) as usize;
    let label: String = state.label.chars().take(max_label_len).collect();

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(border_color)),
        Span::styled(format!(" {} ", label), text_style),
        Span::styled("]", Style::default().fg(border_color)),
    ]);

    let button_area = Rect::new(area.x, area.y, width, 1);
    frame.render_widget(Paragraph::new(line), button_area);
    button_area
}

/// Render buttons right-aligned in `area`, separated by `gap` columns
pub fn render_button_row(
    frame: &mut Frame,
    area: Rect,
    buttons: &[(&ButtonState, &ButtonColors)],
    gap: u16,
) -> Vec<Rect> {
    let total: u16 = buttons.iter().map(|(b, _)| b.width()).sum::<u16>()
        + gap * buttons.len().saturating_sub(1) as u16;
    let mut x = area.x + area.width.saturating_sub(total);

    buttons
        .iter()
        .map(|(state, colors)| {
            let remaining = (area.x + area.width).saturating_sub(x);
            let rect = render_button(frame, Rect::new(x, area.y, remaining, 1), state, colors);
            x += rect.width + gap;
            rect
        })
        .collect()
}
