use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xd6, 0xc7, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TITLE_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa4, 0xab);
pub const RATING_STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PANEL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
