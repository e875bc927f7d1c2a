//! Render order for arena sprites.

/// Defines the render order for arena sprites.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpriteLayer {
    /// Arena backdrop and floor.
    Backdrop = 0,
    /// Fighter bodies.
    Fighter = 10,
    /// Placeholder labels drawn over a fighter.
    Label = 20,
    /// Attack hitbox overlay (dev-tools).
    Hitbox = 30,
}

impl SpriteLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }
}
