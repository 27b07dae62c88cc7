use glam::Vec2;

/// Latest known pointer position in canvas-local coordinates.
///
/// Written by the platform layer whenever a sample arrives and read by the
/// integrator once per particle per tick. Newer samples simply replace older
/// ones. Until the first sample arrives the position is unknown and the
/// pointer repels nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn at(pos: Vec2) -> Self {
        Self { pos: Some(pos) }
    }

    pub fn update(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }
}
