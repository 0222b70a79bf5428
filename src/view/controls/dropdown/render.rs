//! Dropdown rendering functions

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{DropdownColors, DropdownState, FocusState};

/// Render a dropdown control.
///
/// The first row of `area` holds the closed control; while open, the
/// visible options are drawn on the rows below it.
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    state: &DropdownState,
    colors: &DropdownColors,
) {
    if area.height == 0 || area.width < 6 {
        return;
    }

    let (selected_color, border_color, arrow_color) = match state.focus {
        FocusState::Normal => (colors.selected, colors.border, colors.arrow),
        FocusState::Focused => (colors.focused, colors.focused, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let arrow = if state.open { "▲" } else { "▼" };
    let inner_width = area.width.saturating_sub(4) as usize;
    let selected = state.selected_value().unwrap_or("");
    let shown = truncate(selected, inner_width);
    let padding = " ".repeat(inner_width.saturating_sub(shown.width()));

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(border_color)),
        Span::styled(format!("{}{}", shown, padding), Style::default().fg(selected_color)),
        Span::styled(arrow, Style::default().fg(arrow_color)),
        Span::styled("]", Style::default().fg(border_color)),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width, 1));

    if !state.open {
        return;
    }

    let visible = state
        .options
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(state.max_visible)
        .take(area.height.saturating_sub(1) as usize);

    for (row, (index, option)) in visible.enumerate() {
        let y = area.y + 1 + row as u16;
        let marker = if index == state.selected { "> " } else { "  " };
        let style = if index == state.selected {
            Style::default().fg(colors.option).bg(colors.highlight_bg)
        } else {
            Style::default().fg(colors.option)
        };
        let text = truncate(option, area.width.saturating_sub(3) as usize);
        let line = Line::from(Span::styled(format!(" {}{}", marker, text), style));
        frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
