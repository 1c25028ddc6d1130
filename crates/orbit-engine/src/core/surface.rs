use glam::Vec2;

/// Axis-aligned rectangle in viewport pixels (a DOM bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Latest viewport size, container box and pointer position.
///
/// Written by input handlers between frames, read by the frame update.
/// Owned by one `EngineContext`; dropped with it.
#[derive(Debug, Clone)]
pub struct Surface {
    viewport: Vec2,
    container: Option<Rect>,
    /// Normalized pointer, each axis in [-1, 1].
    pointer: Vec2,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width.max(0.0), height.max(0.0)),
            container: None,
            pointer: Vec2::ZERO,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn set_container(&mut self, rect: Rect) {
        self.container = Some(rect);
    }

    /// Record a pointer position given in viewport pixels.
    /// An axis with zero extent normalizes to 0.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let norm = |v: f32, extent: f32| {
            if extent > 0.0 {
                (v / extent * 2.0 - 1.0).clamp(-1.0, 1.0)
            } else {
                0.0
            }
        };
        self.pointer = Vec2::new(norm(x, self.viewport.x), norm(y, self.viewport.y));
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Center of the container box, or of the viewport when the host has not
    /// reported a container yet.
    pub fn center(&self) -> Vec2 {
        match self.container {
            Some(rect) => rect.center(),
            None => self.viewport / 2.0,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
