use ratatui::style::Color;

/// Available color scheme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSchemeId {
    Default = 0,
    Monochrome = 1,
    LightTerminal = 2,
}

impl ColorSchemeId {
    pub fn all() -> &'static [ColorSchemeId] {
        &[
            ColorSchemeId::Default,
            ColorSchemeId::Monochrome,
            ColorSchemeId::LightTerminal,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorSchemeId::Default => "Default",
            ColorSchemeId::Monochrome => "Monochrome",
            ColorSchemeId::LightTerminal => "Light Terminal",
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            1 => ColorSchemeId::Monochrome,
            2 => ColorSchemeId::LightTerminal,
            _ => ColorSchemeId::Default,
        }
    }
}

/// Colors for the widgets cpuscope draws
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Core labels, bar brackets, value suffixes
    pub label: Color,
    /// Bar fill at normal load
    pub bar_normal: Color,
    /// Bar fill above the high-load threshold
    pub bar_high: Color,
    /// Unfilled bar remainder
    pub bar_bg: Color,
    /// CPU model title line
    pub title: Color,
    /// Static info lines (brand, cores, frequency, cache)
    pub info: Color,
    /// Status line variants
    pub status_info: Color,
    pub status_busy: Color,
    pub status_ok: Color,
    pub status_error: Color,
    /// Popup chrome
    pub popup_border: Color,
    pub popup_text: Color,
}

impl ColorScheme {
    pub fn from_id(id: ColorSchemeId) -> Self {
        match id {
            ColorSchemeId::Default => Self {
                label: Color::Cyan,
                bar_normal: Color::Green,
                bar_high: Color::Red,
                bar_bg: Color::Indexed(236),
                title: Color::White,
                info: Color::Gray,
                status_info: Color::Cyan,
                status_busy: Color::Yellow,
                status_ok: Color::Green,
                status_error: Color::Red,
                popup_border: Color::Cyan,
                popup_text: Color::White,
            },
            ColorSchemeId::Monochrome => Self {
                label: Color::White,
                bar_normal: Color::White,
                bar_high: Color::White,
                bar_bg: Color::DarkGray,
                title: Color::White,
                info: Color::Gray,
                status_info: Color::White,
                status_busy: Color::White,
                status_ok: Color::White,
                status_error: Color::White,
                popup_border: Color::White,
                popup_text: Color::White,
            },
            ColorSchemeId::LightTerminal => Self {
                label: Color::Blue,
                bar_normal: Color::Green,
                bar_high: Color::Red,
                bar_bg: Color::Gray,
                title: Color::Black,
                info: Color::DarkGray,
                status_info: Color::Blue,
                status_busy: Color::Magenta,
                status_ok: Color::Green,
                status_error: Color::Red,
                popup_border: Color::Blue,
                popup_text: Color::Black,
            },
        }
    }
}
