//! Configuration editor renderer
//!
//! Draws the entry list with its filter and status bar, and on top of it
//! either the edit dialog or the info popover for the selected entry.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::dialog::{DialogFocus, EditDialogState, EditMode};
use super::state::{ConfigurationEditor, NotificationKind};
use crate::view::controls::{
    render_button_row, render_text_input, ButtonColors, ButtonState, FocusState, TextInputColors,
};
use crate::view::theme::Theme;

const FILTER_WIDTH: u16 = 32;
const DIALOG_MAX_WIDTH: u16 = 64;
const INFO_MAX_WIDTH: u16 = 60;

/// One line of the scrolling list
enum ListLine {
    Header(String),
    /// Index into the visible entries
    Entry(usize),
}

/// Render the whole screen
pub fn render_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &mut ConfigurationEditor,
    theme: &Theme,
) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.editor_bg).fg(theme.editor_fg)),
        area,
    );

    render_title(frame, Rect::new(area.x, area.y, area.width, 1), editor, theme);
    render_filter(frame, Rect::new(area.x, area.y + 1, area.width, 1), editor, theme);

    let list_area = Rect::new(area.x, area.y + 3, area.width, area.height.saturating_sub(4));
    render_list(frame, list_area, editor, theme);

    let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    render_status_bar(frame, status_area, editor, theme);

    if let Some(dialog) = editor.dialog.as_ref() {
        render_dialog(frame, area, dialog, theme);
    } else if editor.show_info {
        render_info(frame, list_area, editor, theme);
    }
}

fn render_title(frame: &mut Frame, area: Rect, editor: &ConfigurationEditor, theme: &Theme) {
    let title = match editor.topic() {
        Some(topic) => format!("Topic configuration: {}", topic),
        None => "Cluster topic defaults".to_string(),
    };
    let mut spans = vec![Span::styled(
        title,
        Style::default().fg(theme.editor_fg).add_modifier(Modifier::BOLD),
    )];
    if editor.loading {
        spans.push(Span::styled(
            "  (loading...)",
            Style::default().fg(theme.line_number_fg),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_filter(frame: &mut Frame, area: Rect, editor: &ConfigurationEditor, theme: &Theme) {
    let mut colors = TextInputColors::from_theme(theme);
    colors.label = theme.filter_fg;
    let width = FILTER_WIDTH.min(area.width.saturating_sub(10));
    let layout = render_text_input(frame, area, &editor.filter, &colors, width);
    if editor.filter_active && editor.dialog.is_none() {
        if let Some(pos) = layout.cursor_pos {
            frame.set_cursor_position(pos);
        }
    }
}

fn render_list(frame: &mut Frame, area: Rect, editor: &mut ConfigurationEditor, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let groups = editor.groups();
    if groups.is_empty() {
        let message = if editor.loading {
            "Loading configuration..."
        } else if editor.entries().is_empty() {
            "No configuration entries"
        } else {
            "No entries match the filter"
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(theme.line_number_fg)),
            Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1),
        );
        return;
    }

    let mut lines = Vec::new();
    let mut entries = Vec::new();
    for group in groups {
        lines.push(ListLine::Header(group.name.clone()));
        for entry in group.entries {
            lines.push(ListLine::Entry(entries.len()));
            entries.push(entry);
        }
    }
    let name_width = entries.iter().map(|e| e.name.width()).max().unwrap_or(0);

    let selected_line = lines
        .iter()
        .position(|line| matches!(line, ListLine::Entry(i) if *i == editor.selected))
        .unwrap_or(0);
    let scroll = scroll_to_show(
        editor.scroll_offset,
        selected_line,
        area.height as usize,
        lines.len(),
    );

    let header_style = Style::default()
        .fg(theme.group_header_fg)
        .add_modifier(Modifier::BOLD);
    for (row, line) in lines.iter().skip(scroll).take(area.height as usize).enumerate() {
        let rect = Rect::new(area.x, area.y + row as u16, area.width, 1);
        let rendered = match line {
            ListLine::Header(name) => Line::from(Span::styled(name.clone(), header_style)),
            ListLine::Entry(index) => {
                let entry = entries[*index];
                editor
                    .row(entry)
                    .line(name_width, *index == editor.selected, theme)
            }
        };
        frame.render_widget(Paragraph::new(rendered), rect);
    }

    editor.scroll_offset = scroll;
}

/// Scroll offset that keeps `selected` visible, showing its group header
/// when the list is scrolled up to the first entry of a group
fn scroll_to_show(current: usize, selected: usize, height: usize, total: usize) -> usize {
    let mut scroll = current;
    if selected <= scroll {
        scroll = selected.saturating_sub(1);
    } else if selected >= scroll + height {
        scroll = selected + 1 - height;
    }
    scroll.min(total.saturating_sub(height))
}

fn render_status_bar(frame: &mut Frame, area: Rect, editor: &ConfigurationEditor, theme: &Theme) {
    let base = Style::default().fg(theme.status_bar_fg).bg(theme.status_bar_bg);
    frame.render_widget(Paragraph::new("").style(base), area);

    let line = match editor.notification.as_ref() {
        Some(notification) => {
            let fg = match notification.kind {
                NotificationKind::Info => theme.diagnostic_info_fg,
                NotificationKind::Success => theme.success_fg,
                NotificationKind::Error => theme.diagnostic_error_fg,
            };
            Line::from(Span::styled(format!(" {}", notification.message), base.fg(fg)))
        }
        None => help_line(hints(editor), theme, base),
    };
    frame.render_widget(Paragraph::new(line), area);
}

const DIALOG_HINTS: &[(&str, &str)] = &[("Tab", "Next"), ("Space", "Select"), ("Ctrl+S", "Apply")];
const FILTER_HINTS: &[(&str, &str)] = &[("Enter", "Done"), ("Ctrl+U", "Clear")];
const LIST_HINTS: &[(&str, &str)] = &[
    ("↑↓", "Navigate"),
    ("Enter", "Edit"),
    ("/", "Filter"),
    ("i", "Info"),
    ("r", "Refresh"),
    ("q", "Quit"),
];

fn hints(editor: &ConfigurationEditor) -> &'static [(&'static str, &'static str)] {
    if editor.dialog.is_some() {
        DIALOG_HINTS
    } else if editor.filter_active {
        FILTER_HINTS
    } else {
        LIST_HINTS
    }
}

fn help_line(hints: &[(&str, &str)], theme: &Theme, base: Style) -> Line<'static> {
    let mut spans = vec![Span::styled(" ", base)];
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), base.fg(theme.help_key_fg)));
        spans.push(Span::styled(format!(":{}  ", label), base.fg(theme.help_fg)));
    }
    Line::from(spans)
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(•) "
    } else {
        "( ) "
    }
}

/// Render the edit dialog centered over `parent`
fn render_dialog(frame: &mut Frame, parent: Rect, dialog: &EditDialogState, theme: &Theme) {
    let control_height = dialog.control.height();
    // borders, default + source, blank, custom, control, blank, status, buttons, help
    let height = (2 + 2 + 1 + 1 + control_height + 1 + 1 + 1 + 1).min(parent.height);
    let width = DIALOG_MAX_WIDTH.min(parent.width.saturating_sub(4));
    let area = Rect::new(
        parent.x + parent.width.saturating_sub(width) / 2,
        parent.y + parent.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" Edit {} ", dialog.entry_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.popup_border_fg))
        .style(Style::default().bg(theme.popup_bg));
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    let bottom = inner.y + inner.height;
    let text = Style::default().fg(theme.popup_text_fg);
    let dim = Style::default().fg(theme.line_number_fg);
    let option_style = |focus: DialogFocus| {
        if dialog.focus == focus {
            text.bg(theme.popup_selection_bg).add_modifier(Modifier::BOLD)
        } else {
            text
        }
    };

    let mut y = inner.y;

    put_line(
        frame,
        inner,
        &mut y,
        Line::from(vec![
            Span::styled(
                format!("{}Default", radio(dialog.mode == EditMode::Default)),
                option_style(DialogFocus::DefaultOption),
            ),
            Span::styled(format!("  {}", dialog.default_display), text),
        ]),
    );
    let explanation = dialog.default_source.explanation();
    put_line(
        frame,
        inner,
        &mut y,
        Line::from(Span::styled(format!("    {}", explanation), dim)),
    );
    y += 1;
    put_line(
        frame,
        inner,
        &mut y,
        Line::from(Span::styled(
            format!("{}Custom", radio(dialog.mode == EditMode::Custom)),
            option_style(DialogFocus::CustomOption),
        )),
    );

    let control_area = Rect::new(
        inner.x + 4,
        y,
        inner.width.saturating_sub(4),
        control_height.min(bottom.saturating_sub(y)),
    );
    let cursor = dialog.control.render(frame, control_area, theme);
    if dialog.focus == DialogFocus::Value && !dialog.pending {
        if let Some(pos) = cursor {
            frame.set_cursor_position(pos);
        }
    }
    y += control_height + 1;

    let status = if dialog.pending {
        Some(Span::styled("Applying...", Style::default().fg(theme.diagnostic_info_fg)))
    } else {
        dialog
            .error
            .as_ref()
            .map(|error| {
                Span::styled(error.clone(), Style::default().fg(theme.diagnostic_error_fg))
            })
    };
    if let Some(span) = status {
        put_line(frame, inner, &mut y, Line::from(span));
    } else {
        y += 1;
    }

    if y < bottom {
        let button_focus = |focus: DialogFocus| {
            if dialog.pending {
                FocusState::Disabled
            } else if dialog.focus == focus {
                FocusState::Focused
            } else {
                FocusState::Normal
            }
        };
        let ok = ButtonState::new("OK").with_focus(button_focus(DialogFocus::Ok));
        let cancel = ButtonState::new("Cancel").with_focus(button_focus(DialogFocus::Cancel));
        let colors = ButtonColors::from_theme(theme);
        render_button_row(
            frame,
            Rect::new(inner.x, y, inner.width, 1),
            &[(&ok, &colors), (&cancel, &colors)],
            2,
        );
        y += 1;
    }

    let base = Style::default().bg(theme.popup_bg);
    put_line(frame, inner, &mut y, help_line(DIALOG_HINTS, theme, base));
}

/// Draw one dialog line at `y` if it still fits, then advance `y`
fn put_line(frame: &mut Frame, inner: Rect, y: &mut u16, line: Line<'_>) {
    if *y < inner.y + inner.height {
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, *y, inner.width, 1));
    }
    *y += 1;
}

/// Render the documentation popover for the selected entry
fn render_info(frame: &mut Frame, area: Rect, editor: &ConfigurationEditor, theme: &Theme) {
    let Some(lines) = editor
        .selected_entry()
        .and_then(|entry| editor.row(entry).info_lines())
    else {
        return;
    };

    let width = INFO_MAX_WIDTH.min(area.width.saturating_sub(2));
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let wrapped: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    let height = (wrapped as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y + area.height.saturating_sub(height),
        width,
        height,
    );

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.popup_border_fg))
        .style(Style::default().bg(theme.popup_bg).fg(theme.popup_text_fg));
    let mut text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    if let Some(first) = text.first_mut() {
        *first = first.clone().style(Style::default().add_modifier(Modifier::BOLD));
    }
    let inner = Rect::new(popup.x + 1, popup.y, popup.width.saturating_sub(1), popup.height);
    frame.render_widget(block, popup);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }),
        Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(2),
        ),
    );
}
