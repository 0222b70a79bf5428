//! One line of the entry list and its info popover

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::model::{format_config_value, ConfigEntry, EditPermission, FormatMode};
use crate::view::theme::Theme;

/// Badge shown on entries that override their default
pub const CUSTOM_BADGE: &str = "custom";

/// Edit affordance labels
const EDIT_LABEL: &str = "edit";
const LOCKED_LABEL: &str = "locked";

/// Display data for one entry
#[derive(Debug, Clone)]
pub struct ConfigEntryRow<'a> {
    pub entry: &'a ConfigEntry,
    pub permission: EditPermission,
}

impl<'a> ConfigEntryRow<'a> {
    pub fn new(entry: &'a ConfigEntry, permission: EditPermission) -> Self {
        Self { entry, permission }
    }

    /// The value in friendly form
    pub fn display_value(&self) -> String {
        format_config_value(
            &self.entry.name,
            self.entry.value.as_deref(),
            FormatMode::Friendly,
        )
    }

    pub fn is_custom(&self) -> bool {
        self.entry.is_explicitly_set
    }

    pub fn has_info(&self) -> bool {
        self.entry.documentation().is_some()
    }

    /// Build the list line.
    ///
    /// Layout: `name  value  [custom]  edit|locked  [i]`, with the deny
    /// reason appended on the selected row.
    pub fn line(&self, name_width: usize, selected: bool, theme: &Theme) -> Line<'static> {
        let base = if selected {
            Style::default().fg(theme.selection_fg).bg(theme.selection_bg)
        } else {
            Style::default().fg(theme.editor_fg)
        };
        let dim = base.fg(theme.line_number_fg);

        let marker = if selected { "> " } else { "  " };
        let pad = name_width.saturating_sub(self.entry.name.width());
        let mut spans = vec![
            Span::styled(marker, base),
            Span::styled(self.entry.name.clone(), base.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(pad + 2), base),
            Span::styled(self.display_value(), base),
        ];

        if self.is_custom() {
            spans.push(Span::styled("  ", base));
            spans.push(Span::styled(
                format!("[{}]", CUSTOM_BADGE),
                base.fg(theme.custom_badge_fg),
            ));
        }

        spans.push(Span::styled("  ", base));
        match self.permission {
            EditPermission::Allowed => spans.push(Span::styled(EDIT_LABEL, dim)),
            EditPermission::Denied(reason) => {
                spans.push(Span::styled(LOCKED_LABEL, dim));
                if selected {
                    spans.push(Span::styled(
                        format!(" ({})", reason.message()),
                        base.fg(theme.diagnostic_warning_fg),
                    ));
                }
            }
        }

        if self.has_info() {
            spans.push(Span::styled("  [i]", dim));
        }

        Line::from(spans)
    }

    /// Contents of the info popover, `None` without documentation
    pub fn info_lines(&self) -> Option<Vec<String>> {
        let documentation = self.entry.documentation()?;
        let mut lines = vec![self.entry.name.clone(), String::new()];
        lines.extend(documentation.lines().map(String::from));
        lines.push(String::new());
        lines.push(format!("Value: {}", self.display_value()));
        let explanation = self.entry.source.explanation();
        if !explanation.is_empty() {
            lines.push(format!("Source: {}", explanation));
        }
        Some(lines)
    }
}
