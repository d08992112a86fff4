// File: crates/boostlog-render-skia/src/types.rs
// Summary: Shared render constants (surface size) and plot insets.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for tick labels on both y axes and for the title + legend on top.
    fn default() -> Self {
        Self::new(72, 72, 72, 56)
    }
}
