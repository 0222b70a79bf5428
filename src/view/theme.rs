use ratatui::style::Color;

/// Colors used by the settings screen and its controls
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name ("dark", "light", "high-contrast")
    pub name: String,

    // Base colors
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Secondary text: hints, descriptions, disabled controls
    pub line_number_fg: Color,

    // Popups and dialogs
    pub popup_border_fg: Color,
    pub popup_bg: Color,
    pub popup_text_fg: Color,
    pub popup_selection_bg: Color,

    // Status bar
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,

    // Help line
    pub help_fg: Color,
    pub help_key_fg: Color,

    // Settings list
    pub group_header_fg: Color,
    pub custom_badge_fg: Color,
    pub filter_fg: Color,

    // Buttons
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_focused_fg: Color,
    pub button_focused_bg: Color,

    // Feedback
    pub diagnostic_error_fg: Color,
    pub diagnostic_warning_fg: Color,
    pub diagnostic_info_fg: Color,
    pub success_fg: Color,
}

impl Theme {
    /// Default dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),
            selection_bg: Color::Rgb(38, 79, 120),
            selection_fg: Color::Rgb(255, 255, 255),
            line_number_fg: Color::Rgb(110, 110, 110),

            popup_border_fg: Color::Gray,
            popup_bg: Color::Rgb(37, 37, 38),
            popup_text_fg: Color::White,
            popup_selection_bg: Color::Rgb(58, 79, 120),

            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(0, 122, 204),

            help_fg: Color::Rgb(180, 180, 180),
            help_key_fg: Color::Cyan,

            group_header_fg: Color::Rgb(86, 156, 214),
            custom_badge_fg: Color::Rgb(206, 145, 120),
            filter_fg: Color::Rgb(220, 220, 170),

            button_fg: Color::Rgb(212, 212, 212),
            button_bg: Color::Rgb(60, 60, 65),
            button_focused_fg: Color::White,
            button_focused_bg: Color::Rgb(14, 99, 156),

            diagnostic_error_fg: Color::Rgb(244, 71, 71),
            diagnostic_warning_fg: Color::Yellow,
            diagnostic_info_fg: Color::Rgb(79, 193, 255),
            success_fg: Color::Rgb(106, 153, 85),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            editor_bg: Color::Rgb(255, 255, 255),
            editor_fg: Color::Rgb(30, 30, 30),
            selection_bg: Color::Rgb(173, 214, 255),
            selection_fg: Color::Rgb(0, 0, 0),
            line_number_fg: Color::Rgb(130, 130, 130),

            popup_border_fg: Color::Rgb(140, 140, 140),
            popup_bg: Color::Rgb(243, 243, 243),
            popup_text_fg: Color::Rgb(30, 30, 30),
            popup_selection_bg: Color::Rgb(200, 220, 240),

            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(0, 122, 204),

            help_fg: Color::Rgb(80, 80, 80),
            help_key_fg: Color::Rgb(0, 92, 197),

            group_header_fg: Color::Rgb(0, 0, 255),
            custom_badge_fg: Color::Rgb(163, 21, 21),
            filter_fg: Color::Rgb(121, 94, 38),

            button_fg: Color::Rgb(30, 30, 30),
            button_bg: Color::Rgb(220, 220, 220),
            button_focused_fg: Color::White,
            button_focused_bg: Color::Rgb(0, 95, 184),

            diagnostic_error_fg: Color::Rgb(205, 49, 49),
            diagnostic_warning_fg: Color::Rgb(191, 136, 3),
            diagnostic_info_fg: Color::Rgb(0, 92, 197),
            success_fg: Color::Rgb(0, 128, 0),
        }
    }

    /// High contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),

            editor_bg: Color::Black,
            editor_fg: Color::White,
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            line_number_fg: Color::Gray,

            popup_border_fg: Color::White,
            popup_bg: Color::Black,
            popup_text_fg: Color::White,
            popup_selection_bg: Color::Blue,

            status_bar_fg: Color::Black,
            status_bar_bg: Color::White,

            help_fg: Color::White,
            help_key_fg: Color::Yellow,

            group_header_fg: Color::Cyan,
            custom_badge_fg: Color::Magenta,
            filter_fg: Color::Yellow,

            button_fg: Color::White,
            button_bg: Color::Black,
            button_focused_fg: Color::Black,
            button_focused_bg: Color::Yellow,

            diagnostic_error_fg: Color::LightRed,
            diagnostic_warning_fg: Color::Yellow,
            diagnostic_info_fg: Color::Cyan,
            success_fg: Color::LightGreen,
        }
    }

    /// Get a theme by name, defaults to dark if not found
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().replace('_', "-").as_str() {
            "light" => Self::light(),
            "high-contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Names accepted by [`Theme::from_name`]
    pub fn available_themes() -> &'static [&'static str] {
        &["dark", "light", "high-contrast"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_normalizes() {
        assert_eq!(Theme::from_name("Light").name, "light");
        assert_eq!(Theme::from_name("high_contrast").name, "high-contrast");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(Theme::from_name("solarized").name, "dark");
    }

    #[test]
    fn test_available_themes_resolve_to_themselves() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::from_name(name).name, *name);
        }
    }
}
