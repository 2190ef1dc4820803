use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey2: Color,

    // Header bar
    pub header_bg: Color,
    pub header_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark body under a slate-blue header
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            header_bg: Color::Rgb(0x64, 0x82, 0xaa),
            header_fg: Color::Rgb(0x00, 0x00, 0x00),
        }
    }
}

/// Mix `fg` over `bg` with the given opacity (1.0 = fully `fg`).
///
/// Non-RGB colors cannot be mixed and snap to whichever side dominates.
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let a = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (f64::from(b) + (f64::from(f) - f64::from(b)) * a).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if a >= 0.5 => fg,
        _ => bg,
    }
}
