//! Viewport queries consumed by the streamer

use crate::core::camera::OrthoCamera;

/// Source of the visible world region along x.
///
/// Either edge may be `None` when no view is available (camera not bound
/// yet, window minimized); the streamer then skips the tick.
pub trait ViewportProvider {
    /// World x of the left screen edge
    fn left_edge(&self) -> Option<f32>;

    /// World x of the right screen edge
    fn right_edge(&self) -> Option<f32>;
}

/// Viewport with constant edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport {
    pub left: f32,
    pub right: f32,
}

impl FixedViewport {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Viewport spanning `[0, width]`
    pub fn from_width(width: f32) -> Self {
        Self::new(0.0, width)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

impl ViewportProvider for FixedViewport {
    fn left_edge(&self) -> Option<f32> {
        Some(self.left)
    }

    fn right_edge(&self) -> Option<f32> {
        Some(self.right)
    }
}

impl ViewportProvider for OrthoCamera {
    fn left_edge(&self) -> Option<f32> {
        Some(self.left())
    }

    fn right_edge(&self) -> Option<f32> {
        Some(self.right())
    }
}

/// An unbound provider (`None`) has no viewport.
impl<P: ViewportProvider> ViewportProvider for Option<P> {
    fn left_edge(&self) -> Option<f32> {
        self.as_ref().and_then(|p| p.left_edge())
    }

    fn right_edge(&self) -> Option<f32> {
        self.as_ref().and_then(|p| p.right_edge())
    }
}

impl<P: ViewportProvider + ?Sized> ViewportProvider for Box<P> {
    fn left_edge(&self) -> Option<f32> {
        (**self).left_edge()
    }

    fn right_edge(&self) -> Option<f32> {
        (**self).right_edge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_fixed_viewport() {
        let vp = FixedViewport::from_width(20.0);
        assert_eq!(vp.left_edge(), Some(0.0));
        assert_eq!(vp.right_edge(), Some(20.0));
        assert_eq!(vp.width(), 20.0);
    }

    #[test]
    fn test_camera_viewport() {
        let cam = OrthoCamera::new(Vec2::new(10.0, 0.0), 5.0, 2.0);
        assert_eq!(cam.left_edge(), Some(0.0));
        assert_eq!(cam.right_edge(), Some(20.0));
    }

    #[test]
    fn test_unbound_camera_has_no_viewport() {
        let mut slot: Option<OrthoCamera> = None;
        assert_eq!(slot.left_edge(), None);
        assert_eq!(slot.right_edge(), None);

        slot = Some(OrthoCamera::new(Vec2::ZERO, 1.0, 1.0));
        assert_eq!(slot.left_edge(), Some(-1.0));
    }

    #[test]
    fn test_boxed_provider() {
        let vp: Box<dyn ViewportProvider> = Box::new(FixedViewport::new(-3.0, 3.0));
        assert_eq!(vp.left_edge(), Some(-3.0));
        assert_eq!(vp.right_edge(), Some(3.0));
    }
}
