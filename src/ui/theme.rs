use ratatui::style::Color;

pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const BORDER_COLOR: Color = Color::Rgb(55, 55, 75);
pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const ERROR_FG: Color = Color::LightRed;
pub const SUCCESS_FG: Color = Color::Green;
pub const CURSOR_FG: Color = Color::Cyan;
