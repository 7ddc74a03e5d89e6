//! Kinematic capsule character controllers.
//!
//! Controllers are capsule-shaped movers driven by explicit displacement
//! calls; the backend sweeps the capsule against the world and resolves
//! sliding, stepping, and grounding. The registry is append-only: handles
//! are monotonically growing indices that are never reused, and the
//! backend-owned body/collider pair lives for the lifetime of the world.

use rapier3d::control::KinematicCharacterController;
use rapier3d::prelude::*;

/// Handle to a character controller in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerHandle(pub(crate) usize);

impl ControllerHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Contact directions reported by a character move.
///
/// Mirrors the classic sides/up/down collision flag triple: `down` also
/// covers the grounded state after the move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub sides: bool,
    pub up: bool,
    pub down: bool,
}

impl CollisionFlags {
    pub fn any(self) -> bool {
        self.sides || self.up || self.down
    }
}

/// One registered controller: backend tuning plus the body/collider pair it
/// drives.
pub(crate) struct CharacterState {
    pub(crate) controller: KinematicCharacterController,
    pub(crate) body: RigidBodyHandle,
    pub(crate) collider: ColliderHandle,
}

/// Append-only store of character controllers.
#[derive(Default)]
pub(crate) struct CharacterRegistry {
    characters: Vec<CharacterState>,
}

impl CharacterRegistry {
    pub(crate) fn insert(&mut self, state: CharacterState) -> ControllerHandle {
        self.characters.push(state);
        ControllerHandle(self.characters.len() - 1)
    }

    pub(crate) fn get(&self, handle: ControllerHandle) -> Option<&CharacterState> {
        self.characters.get(handle.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.characters.len()
    }
}

/// Derives collision flags from the requested versus resolved movement.
pub(crate) fn resolve_flags(
    desired: Vector<Real>,
    effective: Vector<Real>,
    grounded: bool,
) -> CollisionFlags {
    const EPSILON: f32 = 1.0e-4;
    let shortfall = desired - effective;
    CollisionFlags {
        sides: shortfall.x.abs() > EPSILON || shortfall.z.abs() > EPSILON,
        up: desired.y > 0.0 && shortfall.y > EPSILON,
        down: grounded || (desired.y < 0.0 && shortfall.y < -EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobstructed_movement_reports_no_contacts() {
        let desired = vector![1.0, -2.0, 0.0];
        let flags = resolve_flags(desired, desired, false);
        assert_eq!(flags, CollisionFlags::default());
        assert!(!flags.any());
    }

    #[test]
    fn grounded_move_reports_down() {
        let flags = resolve_flags(
            vector![1.0, -9.81, 0.0],
            vector![1.0, -0.5, 0.0],
            true,
        );
        assert!(flags.down);
        assert!(!flags.sides);
        assert!(!flags.up);
    }

    #[test]
    fn blocked_descent_reports_down_without_grounding() {
        let flags = resolve_flags(
            vector![0.0, -5.0, 0.0],
            vector![0.0, -1.0, 0.0],
            false,
        );
        assert!(flags.down);
    }

    #[test]
    fn wall_contact_reports_sides() {
        let flags = resolve_flags(
            vector![3.0, 0.0, 0.0],
            vector![0.4, 0.0, 0.0],
            false,
        );
        assert!(flags.sides);
        assert!(!flags.down);
    }

    #[test]
    fn ceiling_contact_reports_up() {
        let flags = resolve_flags(
            vector![0.0, 2.0, 0.0],
            vector![0.0, 0.1, 0.0],
            false,
        );
        assert!(flags.up);
    }
}
