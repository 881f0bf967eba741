use bevy::prelude::*;

/// Timed relative translation, applied linearly over `duration`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MoveBy {
    pub delta: Vec3,
    pub duration: f32,
    pub elapsed: f32,
}

impl MoveBy {
    pub fn new(delta: Vec3, duration: f32) -> Self {
        Self {
            delta,
            duration,
            elapsed: 0.0,
        }
    }
}

/// Timed relative rotation by euler angles (radians, XYZ), applied in local space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RotateBy {
    pub angles: Vec3,
    pub duration: f32,
    pub elapsed: f32,
}

impl RotateBy {
    pub fn new(angles: Vec3, duration: f32) -> Self {
        Self {
            angles,
            duration,
            elapsed: 0.0,
        }
    }
}

/// Advance a timed action by `dt`.
///
/// Returns the fraction of the whole action to apply this step, the new
/// elapsed time and whether the action is finished. Fractions over a full
/// run always sum to exactly one.
pub fn action_step(elapsed: f32, duration: f32, dt: f32) -> (f32, f32, bool) {
    if duration <= 0.0 {
        return (1.0, 0.0, true);
    }
    let next = (elapsed + dt).min(duration);
    ((next - elapsed) / duration, next, next >= duration)
}

pub fn advance_actions(
    mut commands: Commands,
    time: Res<Time>,
    mut actors: Query<
        (Entity, &mut Transform, Option<&mut MoveBy>, Option<&mut RotateBy>),
        Or<(With<MoveBy>, With<RotateBy>)>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, move_by, rotate_by) in &mut actors {
        if let Some(mut action) = move_by {
            let (fraction, elapsed, finished) = action_step(action.elapsed, action.duration, dt);
            transform.translation += action.delta * fraction;
            action.elapsed = elapsed;
            if finished {
                commands.entity(entity).remove::<MoveBy>();
            }
        }

        if let Some(mut action) = rotate_by {
            let (fraction, elapsed, finished) = action_step(action.elapsed, action.duration, dt);
            let step = action.angles * fraction;
            transform.rotate_local(Quat::from_euler(EulerRot::XYZ, step.x, step.y, step.z));
            action.elapsed = elapsed;
            if finished {
                commands.entity(entity).remove::<RotateBy>();
            }
        }
    }
}
