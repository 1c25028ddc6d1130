//! Dark/light presets. A theme only touches cosmetics: glow, opacity,
//! ring alpha and background. Positions never depend on it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Cosmetic attributes for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeLook {
    /// Planet glow blur radius (px). Planets glow in their own color.
    pub planet_glow: f32,
    pub planet_opacity: f32,
    /// Moon glow blur radius (px). Moons are white with a white glow.
    pub moon_glow: f32,
    pub moon_glow_alpha: f32,
    pub moon_opacity: f32,
    /// Alpha of the 1px white orbit rings.
    pub ring_alpha: f32,
    /// Page background, 0xRRGGBB.
    pub background: u32,
}

const LIGHT: ThemeLook = ThemeLook {
    planet_glow: 12.0,
    planet_opacity: 0.85,
    moon_glow: 8.0,
    moon_glow_alpha: 0.7,
    moon_opacity: 0.9,
    ring_alpha: 0.06,
    background: 0xF8F9FA,
};

const DARK: ThemeLook = ThemeLook {
    planet_glow: 18.0,
    planet_opacity: 0.95,
    moon_glow: 10.0,
    moon_glow_alpha: 0.9,
    moon_opacity: 0.95,
    ring_alpha: 0.04,
    background: 0x06060A,
};

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn look(self) -> &'static ThemeLook {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn dark_glows_stronger_with_fainter_rings() {
        let (light, dark) = (Theme::Light.look(), Theme::Dark.look());
        assert!(dark.planet_glow > light.planet_glow);
        assert!(dark.moon_glow > light.moon_glow);
        assert!(dark.ring_alpha < light.ring_alpha);
        assert_eq!(light.background, 0xF8F9FA);
        assert_eq!(dark.background, 0x06060A);
    }
}
