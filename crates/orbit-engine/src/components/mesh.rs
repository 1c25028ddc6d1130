/// RGB color for SDF rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SDFColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl SDFColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for SDFColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// SDF shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SDFShape {
    Sphere { radius: f32 },
}

/// Soft halo drawn around a shape (CSS box-shadow on the DOM host).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Blur radius in pixels. Zero disables the halo.
    pub radius: f32,
    pub color: SDFColor,
    pub alpha: f32,
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            radius: 0.0,
            color: SDFColor::WHITE,
            alpha: 1.0,
        }
    }
}

/// Visual attributes of a handle: shape, fill, glow and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: SDFShape,
    pub color: SDFColor,
    pub glow: Glow,
    /// 0.0 = invisible, 1.0 = opaque.
    pub opacity: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: SDFShape::Sphere { radius: 10.0 },
            color: SDFColor::default(),
            glow: Glow::default(),
            opacity: 1.0,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: SDFShape, color: SDFColor) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: SDFColor) -> Self {
        Self::new(SDFShape::Sphere { radius }, color)
    }

    pub fn with_glow(mut self, radius: f32, color: SDFColor, alpha: f32) -> Self {
        self.glow = Glow { radius, color, alpha };
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn radius(&self) -> f32 {
        match self.shape {
            SDFShape::Sphere { radius } => radius,
        }
    }

    pub fn set_radius(&mut self, new_radius: f32) {
        match &mut self.shape {
            SDFShape::Sphere { radius } => *radius = new_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_decode() {
        let c = SDFColor::from_hex(0xFF00A8);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 168.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn builder_sets_glow_and_opacity() {
        let mesh = MeshComponent::sphere(6.0, SDFColor::WHITE)
            .with_glow(18.0, SDFColor::new(0.0, 1.0, 1.0), 0.9)
            .with_opacity(0.95);
        assert_eq!(mesh.radius(), 6.0);
        assert_eq!(mesh.glow.radius, 18.0);
        assert_eq!(mesh.glow.alpha, 0.9);
        assert_eq!(mesh.opacity, 0.95);
    }

    #[test]
    fn set_radius_updates_sphere() {
        let mut mesh = MeshComponent::default();
        mesh.set_radius(0.0);
        assert_eq!(mesh.radius(), 0.0);
    }
}
