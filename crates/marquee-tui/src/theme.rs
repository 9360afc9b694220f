use marquee_core::Rgba;

/// Runtime theme for the demo screen
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Rgba,
    pub bg2: Rgba,

    // Foreground colors
    pub fg0: Rgba,
    pub grey2: Rgba,

    // Semantic colors
    pub accent: Rgba,
    pub selection: Rgba,

    /// Colors cycled through by the change-color action
    pub palette: Vec<Rgba>,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Rgba::rgb(0x28, 0x28, 0x28),
            bg2: Rgba::rgb(0x45, 0x40, 0x3d),
            fg0: Rgba::rgb(0xd4, 0xbe, 0x98),
            grey2: Rgba::rgb(0xa8, 0x99, 0x84),
            accent: Rgba::rgb(0x89, 0xb4, 0x82),
            selection: Rgba::rgb(0xd8, 0xa6, 0x57),
            palette: vec![
                Rgba::rgb(0x28, 0x28, 0x28),
                Rgba::rgb(0x3b, 0x5b, 0x3b), // green
                Rgba::rgb(0x2d, 0x3f, 0x5c), // blue
                Rgba::rgb(0x5c, 0x2d, 0x3a), // red
            ],
        }
    }
}

impl Theme {
    /// Replace the main background (and the first palette entry) with `background`
    pub fn with_background(mut self, background: Option<Rgba>) -> Self {
        if let Some(bg) = background {
            self.bg0 = bg;
            if let Some(first) = self.palette.first_mut() {
                *first = bg;
            }
        }
        self
    }

    /// Palette entry following `current`, wrapping around
    pub fn next_palette_color(&self, current: Rgba) -> Rgba {
        match self.palette.iter().position(|c| *c == current) {
            Some(i) => self.palette[(i + 1) % self.palette.len()],
            None => self.palette.first().copied().unwrap_or(self.bg0),
        }
    }
}
