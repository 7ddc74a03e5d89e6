//! Geometry cooking pipeline.
//!
//! Converts caller-side geometry into immutable backend collision
//! resources: triangle meshes from arbitrary vertex records (positions
//! extracted through [`VertexPosition`]) and height-sample grids from
//! normalized heightmaps. Cooked meshes live in an append-only registry
//! addressed by [`MeshHandle`]; heightfields are consumed immediately into
//! a terrain actor and never registered.

use playfield_core::{dequantize_height, quantize_height, Heightmap, MeshIndex, VertexPosition};
use rapier3d::prelude::nalgebra::DMatrix;
use rapier3d::prelude::*;

use crate::error::{PhysicsError, PhysicsResult};

/// Handle to a cooked triangle mesh.
///
/// Handles are indices into an append-only registry: they stay valid for
/// the lifetime of the engine and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) usize);

impl MeshHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable cooked triangle mesh owned by the registry.
pub(crate) struct CookedMesh {
    pub(crate) shape: TriMesh,
    pub(crate) vertex_count: usize,
    pub(crate) triangle_count: usize,
}

/// Append-only store of cooked meshes.
#[derive(Default)]
pub(crate) struct MeshRegistry {
    meshes: Vec<CookedMesh>,
}

impl MeshRegistry {
    pub(crate) fn insert(&mut self, mesh: CookedMesh) -> MeshHandle {
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub(crate) fn get(&self, handle: MeshHandle) -> Option<&CookedMesh> {
        self.meshes.get(handle.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.meshes.len()
    }
}

/// Cooks vertex/index data into a backend triangle mesh.
///
/// The caller has already validated that `indices.len()` is a multiple of
/// three.
pub(crate) fn cook_triangle_mesh<V, I>(vertices: &[V], indices: &[I]) -> PhysicsResult<TriMesh>
where
    V: VertexPosition,
    I: MeshIndex,
{
    let points: Vec<Point<Real>> = vertices
        .iter()
        .map(|vertex| {
            let [x, y, z] = vertex.position();
            point![x, y, z]
        })
        .collect();
    let triangles: Vec<[u32; 3]> = indices
        .chunks_exact(3)
        .map(|tri| [tri[0].to_u32(), tri[1].to_u32(), tri[2].to_u32()])
        .collect();

    TriMesh::new(points, triangles)
        .map_err(|e| PhysicsError::Cooking(format!("triangle mesh cook failed: {e}")))
}

/// Re-cooks the mesh through an in-memory buffer and discards the result.
///
/// Mirrors the backend's serialize/deserialize path as a round-trip
/// correctness exercise; the registered mesh is always the first cook
/// result, and a round-trip failure aborts registration.
pub(crate) fn recook_through_buffer(shape: &TriMesh) -> PhysicsResult<()> {
    let buffer = bincode::serialize(shape)
        .map_err(|e| PhysicsError::Cooking(format!("cooked mesh write-back failed: {e}")))?;
    let _readback: TriMesh = bincode::deserialize(&buffer)
        .map_err(|e| PhysicsError::Cooking(format!("cooked mesh read-back failed: {e}")))?;
    Ok(())
}

/// Builds a height-sample grid from a normalized heightmap.
///
/// Row `y` of the heightmap runs along the world Z axis, column `x` along
/// the world X axis; the backend matrix is indexed `(row, column)` the same
/// way. Samples are quantized to 16-bit signed height units, so the world
/// height of cell `(x, y)` is
/// `min_z + (max_z - min_z) * dequantize(quantize(sample(x, y)))`.
/// The grid itself is unit-scale; `scale.x`/`scale.z` stretch it to world
/// extents.
pub(crate) fn cook_heightfield(
    heightmap: &Heightmap,
    min_z: f32,
    max_z: f32,
    scale_x: f32,
    scale_z: f32,
) -> HeightField {
    let heights = DMatrix::from_fn(
        heightmap.size_y() as usize,
        heightmap.size_x() as usize,
        |row, col| {
            let quantized = quantize_height(heightmap.sample(col as u32, row as u32));
            min_z + (max_z - min_z) * dequantize_height(quantized)
        },
    );
    HeightField::new(heights, vector![scale_x, 1.0, scale_z])
}
