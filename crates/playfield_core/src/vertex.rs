//! Position extraction for renderer-agnostic mesh input.
//!
//! The cooking pipeline accepts any vertex record the caller already keeps
//! for rendering; instead of assuming a memory layout, it asks the vertex
//! for its position through [`VertexPosition`]. Index buffers are
//! generalized the same way via [`MeshIndex`].

use glam::Vec3;

/// A vertex record that can yield its world-space position.
///
/// Implement this for whatever vertex type your renderer uses:
///
/// ```ignore
/// struct LevelVertex {
///     position: [f32; 3],
///     normal: [f32; 3],
///     uv: [f32; 2],
/// }
///
/// impl VertexPosition for LevelVertex {
///     fn position(&self) -> [f32; 3] {
///         self.position
///     }
/// }
/// ```
pub trait VertexPosition {
    fn position(&self) -> [f32; 3];
}

impl VertexPosition for Vec3 {
    fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl VertexPosition for [f32; 3] {
    fn position(&self) -> [f32; 3] {
        *self
    }
}

impl VertexPosition for (f32, f32, f32) {
    fn position(&self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

/// A triangle index convertible to the backend's native `u32`.
pub trait MeshIndex: Copy {
    fn to_u32(self) -> u32;
}

impl MeshIndex for u16 {
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

impl MeshIndex for u32 {
    fn to_u32(self) -> u32 {
        self
    }
}

impl MeshIndex for usize {
    fn to_u32(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LevelVertex {
        position: [f32; 3],
        _normal: [f32; 3],
    }

    impl VertexPosition for LevelVertex {
        fn position(&self) -> [f32; 3] {
            self.position
        }
    }

    #[test]
    fn positions_extract_from_common_layouts() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).position(), [1.0, 2.0, 3.0]);
        assert_eq!([4.0, 5.0, 6.0].position(), [4.0, 5.0, 6.0]);
        assert_eq!((7.0, 8.0, 9.0).position(), [7.0, 8.0, 9.0]);

        let vertex = LevelVertex {
            position: [1.0, 0.0, -1.0],
            _normal: [0.0, 1.0, 0.0],
        };
        assert_eq!(vertex.position(), [1.0, 0.0, -1.0]);
    }

    #[test]
    fn indices_widen_to_u32() {
        assert_eq!(3u16.to_u32(), 3);
        assert_eq!(3u32.to_u32(), 3);
        assert_eq!(3usize.to_u32(), 3);
    }
}
