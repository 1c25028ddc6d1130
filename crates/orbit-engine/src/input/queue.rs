/// Input event types the engine understands.
/// Generic, with no backdrop-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to viewport pixel (x, y).
    PointerMove { x: f32, y: f32 },
    /// The viewport (window) was resized.
    Resize { width: f32, height: f32 },
    /// Fresh bounding box of the backdrop container, sent by the host each frame.
    ContainerRect { left: f32, top: f32, width: f32, height: f32 },
    /// A host-side animation for shooting star `id` finished.
    AnimationEnd { id: u32 },
    /// A custom event from the UI layer (React buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS pushes events between frames; Rust reads them on the next tick and drains.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drop all pending events, keeping the allocation.
    pub fn drain(&mut self) {
        self.events.clear();
    }

    /// Iterate over pending events in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether a resize arrived since the last drain.
    pub fn resized(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Resize { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
