//! Hinge animator - critically-damped cover rotation
//!
//! Each cover swings on its own hinge at the spine. Every frame the hinge
//! angle moves toward the target pose with an exponential approach, so the
//! motion is overshoot-free and independent of frame rate: a flag flip
//! mid-animation reverses the trajectory smoothly instead of snapping.

use bevy::prelude::*;

use crate::constants::*;

/// Whether the book is open. Written only by the input module; every consumer
/// reads it once at the top of its system so a frame sees one consistent value.
#[derive(Resource, Default)]
pub struct BookOpen(pub bool);

/// The only piece of animation state in the scene: one angle per hinge,
/// owned by that hinge's pivot entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HingeState {
    /// Radians away from the closed pose
    pub angle: f32,
}

impl HingeState {
    /// Advance the angle toward `target` over `dt` seconds.
    ///
    /// `target + (angle - target) * exp(-dt / damping)` converges
    /// monotonically with no oscillation, and two steps of `dt/2` land where
    /// one step of `dt` does. Non-finite inputs return the state unchanged so
    /// NaN never reaches rendering; `dt <= 0` is a no-op.
    pub fn step(self, target: f32, damping: f32, dt: f32) -> Self {
        if !self.angle.is_finite() || !target.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return Self {
                angle: if self.angle.is_finite() { self.angle } else { 0.0 },
            };
        }
        Self {
            angle: target + (self.angle - target) * (-dt / damping).exp(),
        }
    }
}

/// Which cover a hinge carries. The two swing in opposite senses from the
/// shared spine axis so the covers open apart symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HingeSide {
    FrontCover,
    BackCover,
}

impl HingeSide {
    /// Target angle for the current pose: closed is flat, open is half the
    /// full opening in this side's swing direction.
    pub fn target_angle(self, open: bool) -> f32 {
        if !open {
            return 0.0;
        }
        // Covers extend along +X from the spine; the front plate sits on the
        // +Z side, so a negative yaw swings its free edge toward the viewer.
        match self {
            HingeSide::FrontCover => -MAX_OPEN_ANGLE / 2.0,
            HingeSide::BackCover => MAX_OPEN_ANGLE / 2.0,
        }
    }
}

/// Hinge component on each cover pivot entity
#[derive(Component)]
pub struct Hinge {
    pub side: HingeSide,
    pub state: HingeState,
}

impl Hinge {
    pub fn new(side: HingeSide) -> Self {
        Self {
            side,
            state: HingeState::default(),
        }
    }
}

/// Step both hinges toward the current pose and write the pivot rotations
pub fn animate_hinges(
    time: Res<Time>,
    open: Res<BookOpen>,
    mut hinges: Query<(&mut Hinge, &mut Transform)>,
) {
    // Snapshot once for the whole frame
    let open = open.0;
    let dt = time.delta_secs();

    for (mut hinge, mut transform) in &mut hinges {
        let target = hinge.side.target_angle(open);
        hinge.state = hinge.state.step(target, HINGE_DAMPING, dt);
        transform.rotation = Quat::from_rotation_y(hinge.state.angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_converges_without_overshoot() {
        let target = MAX_OPEN_ANGLE / 2.0;
        let mut state = HingeState::default();
        let mut prev = state.angle;

        for _ in 0..600 {
            state = state.step(target, HINGE_DAMPING, DT);
            assert!(state.angle >= prev, "must approach monotonically");
            assert!(state.angle <= target, "must never pass the target");
            prev = state.angle;
        }
        assert!((state.angle - target).abs() < 1e-4);
    }

    #[test]
    fn test_frame_rate_independence() {
        let target = 1.0;
        let mut coarse = HingeState::default();
        let mut fine = HingeState::default();

        for _ in 0..120 {
            coarse = coarse.step(target, HINGE_DAMPING, DT);
            fine = fine.step(target, HINGE_DAMPING, DT / 2.0);
            fine = fine.step(target, HINGE_DAMPING, DT / 2.0);
        }
        assert!((coarse.angle - fine.angle).abs() < 1e-4);
    }

    #[test]
    fn test_flag_flip_reverses_smoothly() {
        let open_target = MAX_OPEN_ANGLE / 2.0;
        let mut state = HingeState::default();

        // Part way open, then the flag flips back to closed
        for _ in 0..10 {
            state = state.step(open_target, HINGE_DAMPING, DT);
        }
        let at_flip = state.angle;
        assert!(at_flip > 0.0 && at_flip < open_target);

        let mut prev = at_flip;
        for _ in 0..600 {
            state = state.step(0.0, HINGE_DAMPING, DT);
            // Continuous reversal: each step moves a bounded amount toward zero
            assert!(state.angle <= prev);
            assert!((prev - state.angle) < (at_flip * 0.5));
            prev = state.angle;
        }
        assert!(state.angle.abs() < 1e-4);
        assert!(state.angle >= 0.0, "must not overshoot past closed");
    }

    #[test]
    fn test_opposite_senses_are_symmetric() {
        assert_eq!(
            HingeSide::FrontCover.target_angle(true),
            -HingeSide::BackCover.target_angle(true)
        );
        assert_eq!(HingeSide::FrontCover.target_angle(false), 0.0);
        assert_eq!(HingeSide::BackCover.target_angle(false), 0.0);
    }

    #[test]
    fn test_non_finite_inputs_do_not_poison_state() {
        let state = HingeState { angle: 0.5 };

        assert_eq!(state.step(f32::NAN, HINGE_DAMPING, DT), state);
        assert_eq!(state.step(1.0, HINGE_DAMPING, f32::NAN), state);
        assert_eq!(state.step(1.0, HINGE_DAMPING, f32::INFINITY), state);

        // A poisoned angle resets to closed instead of propagating NaN
        let poisoned = HingeState { angle: f32::NAN };
        assert_eq!(poisoned.step(1.0, HINGE_DAMPING, DT).angle, 0.0);
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let state = HingeState { angle: 0.3 };
        assert_eq!(state.step(1.0, HINGE_DAMPING, 0.0), state);
        assert_eq!(state.step(1.0, HINGE_DAMPING, -DT), state);
    }
}
