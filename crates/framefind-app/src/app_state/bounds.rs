//! Placement of the embedded page inside the window.

/// The page fills the whole client area.
pub fn window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}
