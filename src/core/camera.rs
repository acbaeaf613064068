//! Orthographic side-view camera

use crate::core::types::Vec2;

/// Orthographic camera looking down the Z axis at the XY plane.
///
/// Only the geometry needed to find the visible world region is kept here;
/// movement and look control belong to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoCamera {
    /// World position of the camera center
    pub position: Vec2,
    /// Half of the visible height in world units
    pub ortho_size: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
}

impl OrthoCamera {
    /// Create a new camera
    pub fn new(position: Vec2, ortho_size: f32, aspect: f32) -> Self {
        Self {
            position,
            ortho_size,
            aspect,
        }
    }

    /// Camera whose visible width is exactly `width`, centered on `center_x`.
    ///
    /// Uses a 16:9 aspect ratio and derives the orthographic size from it.
    pub fn with_view_width(center_x: f32, width: f32) -> Self {
        let aspect = 16.0 / 9.0;
        Self::new(Vec2::new(center_x, 0.0), width / (2.0 * aspect), aspect)
    }

    /// Visible height in world units
    pub fn view_height(&self) -> f32 {
        2.0 * self.ortho_size
    }

    /// Visible width in world units
    pub fn view_width(&self) -> f32 {
        self.view_height() * self.aspect
    }

    /// World x of the left screen edge
    pub fn left(&self) -> f32 {
        self.position.x - self.view_width() / 2.0
    }

    /// World x of the right screen edge
    pub fn right(&self) -> f32 {
        self.position.x + self.view_width() / 2.0
    }

    /// Move the camera by `delta` world units
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 5.0, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_from_ortho_size() {
        let cam = OrthoCamera::new(Vec2::new(10.0, 3.0), 5.0, 2.0);
        assert_eq!(cam.view_height(), 10.0);
        assert_eq!(cam.view_width(), 20.0);
        assert_eq!(cam.left(), 0.0);
        assert_eq!(cam.right(), 20.0);
    }

    #[test]
    fn test_with_view_width() {
        let cam = OrthoCamera::with_view_width(10.0, 20.0);
        assert!((cam.left() - 0.0).abs() < 1e-4);
        assert!((cam.right() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_translate_shifts_edges() {
        let mut cam = OrthoCamera::new(Vec2::ZERO, 1.0, 1.0);
        cam.translate(Vec2::new(4.0, 0.0));
        assert_eq!(cam.left(), 3.0);
        assert_eq!(cam.right(), 5.0);
    }
}
