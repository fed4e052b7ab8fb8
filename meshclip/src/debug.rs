use std::cell::Cell;

/// Supplies an optional tint for vertices produced by clipping. Purely cosmetic.
pub trait DebugColorProvider {
    fn highlight_color(&self) -> Option<[f32; 4]>;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NoDebugColor;

impl DebugColorProvider for NoDebugColor {
    fn highlight_color(&self) -> Option<[f32; 4]> {
        None
    }
}

impl<T: DebugColorProvider + ?Sized> DebugColorProvider for &T {
    fn highlight_color(&self) -> Option<[f32; 4]> {
        (**self).highlight_color()
    }
}

/// Highlights clipped output while at least one [`DebugScope`] is alive. Scopes nest.
#[derive(Debug)]
pub struct DebugHighlight {
    color: [f32; 4],
    pins: Cell<u32>,
}

impl DebugHighlight {
    pub const DEFAULT_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

    pub fn new(color: [f32; 4]) -> Self {
        Self {
            color,
            pins: Cell::new(0),
        }
    }

    pub fn enter(&self) -> DebugScope<'_> {
        self.pins.set(self.pins.get() + 1);
        DebugScope { owner: self }
    }

    pub fn is_active(&self) -> bool {
        self.pins.get() > 0
    }
}

impl Default for DebugHighlight {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLOR)
    }
}

impl DebugColorProvider for DebugHighlight {
    fn highlight_color(&self) -> Option<[f32; 4]> {
        self.is_active().then_some(self.color)
    }
}

#[must_use = "highlighting ends when the scope is dropped"]
#[derive(Debug)]
pub struct DebugScope<'a> {
    owner: &'a DebugHighlight,
}

impl Drop for DebugScope<'_> {
    fn drop(&mut self) {
        let pins = &self.owner.pins;
        pins.set(pins.get().saturating_sub(1));
    }
}
