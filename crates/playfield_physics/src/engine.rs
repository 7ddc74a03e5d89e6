//! The physics engine facade.
//!
//! [`PhysicsEngine`] owns the whole simulation world: the backend component
//! set, the cooked-mesh and character registries, the simulation
//! dispatcher, and the optional debug telemetry stream. One engine, one
//! world; a single caller thread drives everything, and `&mut self`
//! enforces that no operation overlaps an in-flight step.
//!
//! ```ignore
//! use playfield_core::{FixedRateClock, SimulationConfig};
//! use playfield_physics::PhysicsEngine;
//!
//! let mut engine = PhysicsEngine::new(SimulationConfig::default())?;
//! let character = engine.create_character_controller(start, 125.0, 20.0)?;
//! let mut clock = FixedRateClock::new();
//! loop {
//!     engine.tick(&mut clock, 60.0, |engine, elapsed| {
//!         let _ = engine.move_character(character, walk, elapsed, true);
//!     });
//! }
//! ```

use std::sync::Arc;

use glam::{Quat, Vec3};
use playfield_core::{
    report, FixedRateClock, Heightmap, LogSink, MeshIndex, Severity, SimulationConfig, StdoutSink,
    VertexPosition,
};
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::nalgebra::{Quaternion, Translation3, UnitQuaternion};
use rapier3d::prelude::*;

use crate::character::{
    resolve_flags, CharacterRegistry, CharacterState, CollisionFlags, ControllerHandle,
};
use crate::cooking::{self, CookedMesh, MeshHandle, MeshRegistry};
use crate::error::{PhysicsError, PhysicsResult};
use crate::telemetry::{TelemetryClient, TelemetryEvent};

/// Fixed length-scale tolerance for the backend's internal thresholds.
const LENGTH_TOLERANCE: f32 = 100.0;

/// Shared default material. The backend folds static and dynamic friction
/// into a single coefficient.
const MATERIAL_FRICTION: f32 = 0.5;
const MATERIAL_RESTITUTION: f32 = 0.6;

/// Displacements below this are not worth a backend sweep.
const MIN_MOVE_DISTANCE: f32 = 1.0e-6;

/// Facade over the Rapier 3D simulation world.
///
/// Static geometry and terrain are handed to the world and never touched
/// again; characters are addressed through stable handles. All failures are
/// logged through the injected sink and returned as typed errors.
pub struct PhysicsEngine {
    sink: Arc<dyn LogSink>,
    telemetry: Option<TelemetryClient>,
    gravity: Vec3,
    dispatcher: rayon::ThreadPool,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    meshes: MeshRegistry,
    characters: CharacterRegistry,
}

impl PhysicsEngine {
    /// Creates an engine with the default stdout log sink.
    pub fn new(config: SimulationConfig) -> PhysicsResult<Self> {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Creates an engine that logs through the given sink.
    ///
    /// Construction is all-or-nothing: on error nothing is left behind to
    /// tear down. The debug telemetry connection is best-effort and its
    /// failure only logs a warning.
    pub fn with_sink(config: SimulationConfig, sink: Arc<dyn LogSink>) -> PhysicsResult<Self> {
        let telemetry = TelemetryClient::connect();
        match &telemetry {
            Some(_) => report(
                sink.as_ref(),
                Severity::Info,
                "connected to the debug telemetry listener",
            ),
            None => report(
                sink.as_ref(),
                Severity::Warning,
                "could not connect to the debug telemetry listener; continuing without it",
            ),
        }

        let dispatcher = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .thread_name(|i| format!("playfield-sim-{i}"))
            .build()
            .map_err(|e| {
                let message = format!("failed to create the simulation dispatcher: {e}");
                report(sink.as_ref(), Severity::Error, &message);
                PhysicsError::Initialization(message)
            })?;

        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.length_unit = LENGTH_TOLERANCE;

        let mut engine = Self {
            sink,
            telemetry,
            gravity: config.gravity,
            dispatcher,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            meshes: MeshRegistry::default(),
            characters: CharacterRegistry::default(),
        };
        engine.emit(TelemetryEvent::WorldCreated {
            thread_count: config.thread_count,
            gravity: config.gravity.to_array(),
        });
        Ok(engine)
    }

    /// The configured gravity acceleration vector.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Number of cooked meshes in the registry.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of registered character controllers.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Blocking: the step is submitted to the dispatcher pool and awaited
    /// before returning, so the world is consistent when this call ends.
    pub fn simulate(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        let gravity = vector![self.gravity.x, self.gravity.y, self.gravity.z];
        let Self {
            dispatcher,
            integration_parameters,
            physics_pipeline,
            island_manager,
            broad_phase,
            narrow_phase,
            bodies,
            colliders,
            impulse_joints,
            multibody_joints,
            ccd_solver,
            query_pipeline,
            ..
        } = self;
        dispatcher.install(|| {
            physics_pipeline.step(
                &gravity,
                integration_parameters,
                island_manager,
                broad_phase,
                narrow_phase,
                bodies,
                colliders,
                impulse_joints,
                multibody_joints,
                ccd_solver,
                Some(query_pipeline),
                &(),
                &(),
            );
        });
        self.emit(TelemetryEvent::Step { dt });
    }

    /// Steps the simulation at most once per `1 / frequency_hz` seconds of
    /// wall-clock time.
    ///
    /// When enough time has accumulated on `clock`, `pre_step` runs first
    /// (the place to move characters), then the backend is stepped by the
    /// *measured* elapsed time and the clock restarts. Returns whether a
    /// step fired; calls inside the interval are no-ops.
    pub fn tick<F>(&mut self, clock: &mut FixedRateClock, frequency_hz: f32, mut pre_step: F) -> bool
    where
        F: FnMut(&mut Self, f32),
    {
        let step_size = 1.0 / frequency_hz;
        let elapsed = clock.elapsed_secs();
        if elapsed < step_size {
            return false;
        }
        pre_step(self, elapsed);
        self.simulate(elapsed);
        clock.restart();
        true
    }

    /// Cooks vertex/index data into an immutable collision mesh and
    /// registers it.
    ///
    /// `indices` must hold a whole number of triangles. The cooked mesh is
    /// also pushed through an in-memory write/read cycle as a round-trip
    /// exercise; the registered resource is always the first cook result.
    pub fn create_triangle_mesh<V, I>(
        &mut self,
        vertices: &[V],
        indices: &[I],
    ) -> PhysicsResult<MeshHandle>
    where
        V: VertexPosition,
        I: MeshIndex,
    {
        if indices.len() % 3 != 0 {
            let message = format!(
                "the index count must be a multiple of 3, got {}",
                indices.len()
            );
            self.report(Severity::Error, &message);
            return Err(PhysicsError::InvalidArgument(message));
        }

        let shape = match cooking::cook_triangle_mesh(vertices, indices) {
            Ok(shape) => shape,
            Err(e) => {
                self.report(Severity::Error, &e.to_string());
                return Err(e);
            }
        };
        if let Err(e) = cooking::recook_through_buffer(&shape) {
            self.report(Severity::Error, &e.to_string());
            return Err(e);
        }

        let vertex_count = shape.vertices().len();
        let triangle_count = shape.indices().len();
        let handle = self.meshes.insert(CookedMesh {
            shape,
            vertex_count,
            triangle_count,
        });
        self.emit(TelemetryEvent::MeshCooked {
            handle: handle.index(),
            vertices: vertex_count,
            triangles: triangle_count,
        });
        Ok(handle)
    }

    /// Places a static collidable actor built from a cooked mesh.
    ///
    /// The mesh is wrapped with the non-uniform `scale` at placement; the
    /// cooked data itself is never mutated. The actor is owned by the world
    /// from here on and cannot be removed or changed.
    pub fn create_static_actor(
        &mut self,
        mesh: MeshHandle,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    ) -> PhysicsResult<()> {
        let len = self.meshes.len();
        let Some(cooked) = self.meshes.get(mesh) else {
            let err = PhysicsError::NotFound {
                resource: "mesh",
                index: mesh.index(),
                len,
            };
            self.report(Severity::Error, &err.to_string());
            return Err(err);
        };
        let scaled = cooked
            .shape
            .clone()
            .scaled(&vector![scale.x, scale.y, scale.z]);

        let body = RigidBodyBuilder::fixed()
            .position(isometry(position, rotation))
            .build();
        let body_handle = self.bodies.insert(body);
        let collider = ColliderBuilder::new(SharedShape::new(scaled))
            .friction(MATERIAL_FRICTION)
            .restitution(MATERIAL_RESTITUTION)
            .build();
        self.colliders
            .insert_with_parent(collider, body_handle, &mut self.bodies);
        self.query_pipeline.update(&self.colliders);

        self.emit(TelemetryEvent::StaticActorPlaced {
            position: position.to_array(),
        });
        Ok(())
    }

    /// Builds terrain collision from a normalized heightmap and places it.
    ///
    /// `scale.x` and `scale.z` stretch the unit-scale sample grid to world
    /// extents; heights span `[min_z, max_z]`. `position` is the world
    /// location of the heightmap's `(0, 0)` corner. Terrain only
    /// translates; rotation is not supported.
    pub fn create_terrain(
        &mut self,
        position: Vec3,
        scale: Vec3,
        heightmap: &Heightmap,
        min_z: f32,
        max_z: f32,
    ) -> PhysicsResult<()> {
        if heightmap.size_x() < 2 || heightmap.size_y() < 2 {
            let message = format!(
                "terrain needs at least a 2x2 sample grid, got {}x{}",
                heightmap.size_x(),
                heightmap.size_y()
            );
            self.report(Severity::Error, &message);
            return Err(PhysicsError::Cooking(message));
        }

        let field = cooking::cook_heightfield(heightmap, min_z, max_z, scale.x, scale.z);

        // The backend centers heightfields on their local origin; shift so
        // the heightmap's (0, 0) corner lands at `position`.
        let center = position + Vec3::new(scale.x * 0.5, 0.0, scale.z * 0.5);
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y, center.z])
            .build();
        let body_handle = self.bodies.insert(body);
        let collider = ColliderBuilder::new(SharedShape::new(field))
            .friction(MATERIAL_FRICTION)
            .restitution(MATERIAL_RESTITUTION)
            .build();
        self.colliders
            .insert_with_parent(collider, body_handle, &mut self.bodies);
        self.query_pipeline.update(&self.colliders);

        self.emit(TelemetryEvent::TerrainPlaced {
            size_x: heightmap.size_x(),
            size_y: heightmap.size_y(),
        });
        Ok(())
    }

    /// Creates a capsule character controller centered at `start_position`.
    ///
    /// `height` is the cylindrical section of the capsule; the contact
    /// offset is `radius * 1.1` and steps up to a quarter of the height are
    /// climbed automatically.
    pub fn create_character_controller(
        &mut self,
        start_position: Vec3,
        height: f32,
        radius: f32,
    ) -> PhysicsResult<ControllerHandle> {
        if height <= 0.0 || radius <= 0.0 {
            let message = format!(
                "failed to create the character controller: capsule dimensions must be positive (height {height}, radius {radius})"
            );
            self.report(Severity::Error, &message);
            return Err(PhysicsError::InvalidArgument(message));
        }

        let body = RigidBodyBuilder::kinematic_position_based()
            .translation(vector![
                start_position.x,
                start_position.y,
                start_position.z
            ])
            .build();
        let body_handle = self.bodies.insert(body);
        let collider = ColliderBuilder::capsule_y(height * 0.5, radius)
            .friction(MATERIAL_FRICTION)
            .restitution(MATERIAL_RESTITUTION)
            .build();
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);
        self.query_pipeline.update(&self.colliders);

        let mut controller = KinematicCharacterController::default();
        controller.offset = CharacterLength::Absolute(radius * 1.1);
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(height * 0.25),
            min_width: CharacterLength::Absolute(radius * 0.5),
            include_dynamic_bodies: false,
        });

        let handle = self.characters.insert(CharacterState {
            controller,
            body: body_handle,
            collider: collider_handle,
        });
        self.emit(TelemetryEvent::ControllerCreated {
            handle: handle.index(),
            height,
            radius,
        });
        Ok(handle)
    }

    /// World-space position of a character controller's capsule center.
    pub fn controller_position(&self, handle: ControllerHandle) -> PhysicsResult<Vec3> {
        let len = self.characters.len();
        let Some(state) = self.characters.get(handle) else {
            let err = PhysicsError::NotFound {
                resource: "character controller",
                index: handle.index(),
                len,
            };
            self.report(Severity::Error, &err.to_string());
            return Err(err);
        };
        let Some(body) = self.bodies.get(state.body) else {
            return Err(PhysicsError::NotFound {
                resource: "character body",
                index: handle.index(),
                len,
            });
        };
        let translation = body.translation();
        Ok(Vec3::new(translation.x, translation.y, translation.z))
    }

    /// Moves a character by `displacement`, sweeping against the world.
    ///
    /// With `apply_gravity`, the configured gravity vector is added to the
    /// displacement before the sweep. It is the raw vector, not an
    /// integrated velocity: gravity acts as a constant per-move pull.
    /// Returns which directions the move was obstructed in.
    pub fn move_character(
        &mut self,
        handle: ControllerHandle,
        displacement: Vec3,
        elapsed: f32,
        apply_gravity: bool,
    ) -> PhysicsResult<CollisionFlags> {
        let len = self.characters.len();
        let Some(state) = self.characters.get(handle) else {
            let err = PhysicsError::NotFound {
                resource: "character controller",
                index: handle.index(),
                len,
            };
            self.report(Severity::Error, &err.to_string());
            return Err(err);
        };

        let mut desired = displacement;
        if apply_gravity {
            desired += self.gravity;
        }
        if desired.length() <= MIN_MOVE_DISTANCE {
            return Ok(CollisionFlags::default());
        }
        let desired = vector![desired.x, desired.y, desired.z];

        let Some(collider) = self.colliders.get(state.collider) else {
            return Err(PhysicsError::NotFound {
                resource: "character collider",
                index: handle.index(),
                len,
            });
        };
        let Some(body) = self.bodies.get(state.body) else {
            return Err(PhysicsError::NotFound {
                resource: "character body",
                index: handle.index(),
                len,
            });
        };
        let current = *body.position();

        let movement = state.controller.move_shape(
            elapsed,
            &self.bodies,
            &self.colliders,
            &self.query_pipeline,
            collider.shape(),
            &current,
            desired,
            QueryFilter::default().exclude_rigid_body(state.body),
            |_| {},
        );

        let flags = resolve_flags(desired, movement.translation, movement.grounded);
        let target = current.translation.vector + movement.translation;
        let body_handle = state.body;
        if let Some(body) = self.bodies.get_mut(body_handle) {
            // Apply the resolved movement now rather than scheduling it for
            // the next kinematic step, which would lag the caller by a
            // frame.
            body.set_translation(target, true);
        }
        Ok(flags)
    }

    #[track_caller]
    fn report(&self, severity: Severity, message: &str) {
        report(self.sink.as_ref(), severity, message);
    }

    fn emit(&mut self, event: TelemetryEvent) {
        let alive = match self.telemetry.as_mut() {
            Some(client) => client.send(&event),
            None => true,
        };
        if !alive {
            self.telemetry = None;
        }
    }
}

fn isometry(position: Vec3, rotation: Quat) -> Isometry<Real> {
    Isometry::from_parts(
        Translation3::new(position.x, position.y, position.z),
        UnitQuaternion::from_quaternion(Quaternion::new(
            rotation.w, rotation.x, rotation.y, rotation.z,
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use playfield_core::MemorySink;
    use std::thread::sleep;
    use std::time::Duration;

    fn test_engine() -> PhysicsEngine {
        PhysicsEngine::with_sink(SimulationConfig::default(), Arc::new(MemorySink::new()))
            .expect("engine should initialize")
    }

    fn quad() -> (Vec<Vec3>, Vec<u32>) {
        let vertices = vec![
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        let indices = vec![3, 2, 0, 3, 0, 1];
        (vertices, indices)
    }

    #[test]
    fn cooked_mesh_backs_a_static_actor() {
        let mut engine = test_engine();
        let (vertices, indices) = quad();

        let mesh = engine.create_triangle_mesh(&vertices, &indices).unwrap();
        assert_eq!(mesh.index(), 0);
        assert_eq!(engine.mesh_count(), 1);

        engine
            .create_static_actor(
                mesh,
                Vec3::new(0.0, -250.0, 0.0),
                Quat::IDENTITY,
                Vec3::new(500.0, 1.0, 500.0),
            )
            .unwrap();
    }

    #[test]
    fn malformed_index_count_registers_nothing() {
        let sink = Arc::new(MemorySink::new());
        let mut engine =
            PhysicsEngine::with_sink(SimulationConfig::default(), sink.clone()).unwrap();
        let (vertices, _) = quad();
        let indices: Vec<u32> = vec![0, 1, 2, 3, 0];

        let result = engine.create_triangle_mesh(&vertices, &indices);
        assert!(matches!(result, Err(PhysicsError::InvalidArgument(_))));
        assert_eq!(engine.mesh_count(), 0);
        assert!(sink.has_severity(Severity::Error));
    }

    #[test]
    fn one_cook_call_registers_exactly_one_mesh() {
        let mut engine = test_engine();
        let (vertices, indices) = quad();

        let first = engine.create_triangle_mesh(&vertices, &indices).unwrap();
        assert_eq!(engine.mesh_count(), 1);
        let second = engine.create_triangle_mesh(&vertices, &indices).unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(engine.mesh_count(), 2);
    }

    #[test]
    fn unknown_mesh_handle_is_rejected() {
        let mut engine = test_engine();
        let result = engine.create_static_actor(
            MeshHandle(3),
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::ONE,
        );
        assert!(matches!(
            result,
            Err(PhysicsError::NotFound {
                resource: "mesh",
                index: 3,
                len: 0,
            })
        ));
    }

    #[test]
    fn terrain_placement_succeeds_on_a_valid_grid() {
        let mut engine = test_engine();
        let heightmap = Heightmap::new(4, 4, vec![0.25; 16]).unwrap();
        engine
            .create_terrain(
                Vec3::new(-50.0, -10.0, -50.0),
                Vec3::new(100.0, 1.0, 100.0),
                &heightmap,
                0.0,
                20.0,
            )
            .unwrap();
    }

    #[test]
    fn degenerate_terrain_grid_is_rejected() {
        let mut engine = test_engine();
        let heightmap = Heightmap::new(1, 4, vec![0.0; 4]).unwrap();
        let result = engine.create_terrain(
            Vec3::ZERO,
            Vec3::new(10.0, 1.0, 10.0),
            &heightmap,
            0.0,
            1.0,
        );
        assert!(matches!(result, Err(PhysicsError::Cooking(_))));
    }

    #[test]
    fn controller_handles_grow_monotonically() {
        let mut engine = test_engine();
        let first = engine
            .create_character_controller(Vec3::ZERO, 2.0, 0.5)
            .unwrap();
        let second = engine
            .create_character_controller(Vec3::new(5.0, 0.0, 0.0), 2.0, 0.5)
            .unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(engine.character_count(), 2);
    }

    #[test]
    fn invalid_capsule_dimensions_are_rejected() {
        let mut engine = test_engine();
        let result = engine.create_character_controller(Vec3::ZERO, 0.0, 0.5);
        assert!(matches!(result, Err(PhysicsError::InvalidArgument(_))));
        assert_eq!(engine.character_count(), 0);
    }

    #[test]
    fn unknown_controller_handle_is_rejected() {
        let engine = test_engine();
        let result = engine.controller_position(ControllerHandle(9));
        assert!(matches!(
            result,
            Err(PhysicsError::NotFound {
                resource: "character controller",
                index: 9,
                len: 0,
            })
        ));
    }

    #[test]
    fn gravity_is_added_to_the_displacement_before_resolution() {
        // In an empty world the sweep resolves nothing, so the resulting
        // position change is exactly the pre-resolution intent.
        let mut engine = test_engine();
        let character = engine
            .create_character_controller(Vec3::ZERO, 2.0, 0.5)
            .unwrap();

        let flags = engine
            .move_character(character, Vec3::new(1.0, 0.0, 0.0), 1.0 / 60.0, true)
            .unwrap();
        assert!(!flags.any());

        let position = engine.controller_position(character).unwrap();
        assert!((position.x - 1.0).abs() < 1e-3, "x was {}", position.x);
        assert!(
            (position.y - -9.81).abs() < 1e-3,
            "y should carry the raw gravity pull, was {}",
            position.y
        );
    }

    #[test]
    fn gravity_can_be_disabled_per_move() {
        let mut engine = test_engine();
        let character = engine
            .create_character_controller(Vec3::ZERO, 2.0, 0.5)
            .unwrap();

        engine
            .move_character(character, Vec3::new(1.0, 0.0, 0.0), 1.0 / 60.0, false)
            .unwrap();
        let position = engine.controller_position(character).unwrap();
        assert!((position.x - 1.0).abs() < 1e-3);
        assert!(position.y.abs() < 1e-3, "y was {}", position.y);
    }

    #[test]
    fn sub_epsilon_moves_are_no_ops() {
        let mut engine = PhysicsEngine::with_sink(
            SimulationConfig {
                thread_count: 2,
                gravity: Vec3::ZERO,
            },
            Arc::new(MemorySink::new()),
        )
        .unwrap();
        let character = engine
            .create_character_controller(Vec3::ZERO, 2.0, 0.5)
            .unwrap();

        let flags = engine
            .move_character(character, Vec3::new(1.0e-8, 0.0, 0.0), 1.0 / 60.0, true)
            .unwrap();
        assert_eq!(flags, CollisionFlags::default());
        let position = engine.controller_position(character).unwrap();
        assert_eq!(position, Vec3::ZERO);
    }

    #[test]
    fn tick_fires_at_most_once_per_interval() {
        let mut engine = test_engine();
        let mut clock = FixedRateClock::new();
        let mut calls = 0;

        // A freshly started clock has no accumulated time.
        assert!(!engine.tick(&mut clock, 60.0, |_, _| calls += 1));
        assert_eq!(calls, 0);

        sleep(Duration::from_millis(20));
        assert!(engine.tick(&mut clock, 60.0, |_, _| calls += 1));
        assert_eq!(calls, 1);

        // Immediately after a step the window restarts: no second fire.
        assert!(!engine.tick(&mut clock, 60.0, |_, _| calls += 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn tick_passes_the_measured_elapsed_time() {
        let mut engine = test_engine();
        let mut clock = FixedRateClock::new();
        sleep(Duration::from_millis(25));

        let mut seen = 0.0;
        assert!(engine.tick(&mut clock, 60.0, |_, elapsed| seen = elapsed));
        assert!(
            seen >= 0.025,
            "callback should see the measured elapsed time, got {seen}"
        );
    }
}
