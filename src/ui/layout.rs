//! Terminal size decisions shared by the screens.

use ratatui::layout::Rect;

/// Below this width the home sidebar is hidden.
pub const SIDEBAR_MIN_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    pub fn shows_sidebar(&self) -> bool {
        self.width >= SIDEBAR_MIN_WIDTH
    }

    /// Width of a column taking `percentage` of the terminal, within bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        let width = ((self.width as u32 * percentage as u32) / 100) as u16;
        width.clamp(min, max)
    }

    /// Compact terminals get shorter labels and no banner.
    pub fn is_compact(&self) -> bool {
        self.width < 60 || self.height < 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_breakpoint() {
        assert!(!LayoutContext::new(79, 40).shows_sidebar());
        assert!(LayoutContext::new(80, 40).shows_sidebar());
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(25, 20, 30), 30);
        assert_eq!(LayoutContext::new(60, 40).bounded_width(25, 20, 30), 20);
    }

    #[test]
    fn test_compact() {
        assert!(LayoutContext::new(50, 40).is_compact());
        assert!(LayoutContext::new(100, 10).is_compact());
        assert!(!LayoutContext::new(100, 40).is_compact());
    }
}
