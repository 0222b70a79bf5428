//! Text input rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{FocusState, TextInputColors, TextInputLayout, TextInputState, MASK_CHAR};

/// Render a text input control
///
/// # Arguments
/// * `frame` - The ratatui frame to render to
/// * `area` - Rectangle where the control should be rendered
/// * `state` - The text input state
/// * `colors` - Colors for rendering
/// * `field_width` - Width of the input field (not including label)
///
/// # Returns
/// Layout information, including where the terminal cursor belongs
pub fn render_text_input(
    frame: &mut Frame,
    area: Rect,
    state: &TextInputState,
    colors: &TextInputColors,
    field_width: u16,
) -> TextInputLayout {
    if area.height == 0 || area.width < 5 {
        return TextInputLayout::default();
    }

    let (label_color, text_color, border_color) = match state.focus {
        FocusState::Normal => (colors.label, colors.text, colors.border),
        FocusState::Focused => (colors.focused, colors.text, colors.focused),
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    let label_width = state.label.width() as u16;
    let prefix_width = if label_width > 0 { label_width + 2 } else { 0 };
    let field_width = field_width.min(area.width.saturating_sub(prefix_width + 2));
    let inner_width = field_width as usize;

    let display = state.display_value();
    let is_placeholder = display.is_empty() && !state.placeholder.is_empty();
    let shown = if is_placeholder {
        state.placeholder.as_str()
    } else {
        display.as_str()
    };

    // Visual column of the cursor within the full text
    let before_cursor = &state.value[..state.cursor.min(state.value.len())];
    let cursor_visual = if state.masked {
        before_cursor.chars().count() * MASK_CHAR.width().unwrap_or(1)
    } else {
        before_cursor.width()
    };
    let scroll = (cursor_visual + 1).saturating_sub(inner_width);

    let mut visible = String::new();
    let mut column = 0;
    for ch in shown.chars() {
        let w = ch.width().unwrap_or(0);
        if column + w <= scroll {
            column += w;
            continue;
        }
        if column + w - scroll > inner_width {
            break;
        }
        visible.push(ch);
        column += w;
    }
    let padding = " ".repeat(inner_width.saturating_sub(visible.width()));

    let text_style = if is_placeholder {
        Style::default().fg(colors.placeholder)
    } else {
        Style::default().fg(text_color)
    };

    let mut spans = Vec::new();
    if label_width > 0 {
        spans.push(Span::styled(
            state.label.clone(),
            Style::default().fg(label_color),
        ));
        spans.push(Span::styled(": ", Style::default().fg(label_color)));
    }
    spans.push(Span::styled("[", Style::default().fg(border_color)));
    spans.push(Span::styled(format!("{}{}", visible, padding), text_style));
    spans.push(Span::styled("]", Style::default().fg(border_color)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let input_start = area.x + prefix_width;
    let input_area = Rect::new(input_start, area.y, field_width + 2, 1);

    let cursor_pos = if state.focus == FocusState::Focused {
        let x = input_start + 1 + cursor_visual.saturating_sub(scroll) as u16;
        if x <= input_start + field_width {
            let cursor_area = Rect::new(x, area.y, 1, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    " ",
                    Style::default()
                        .fg(colors.cursor)
                        .add_modifier(Modifier::REVERSED),
                )),
                cursor_area,
            );
            Some((x, area.y))
        } else {
            None
        }
    } else {
        None
    };

    TextInputLayout {
        input_area,
        cursor_pos,
    }
}
