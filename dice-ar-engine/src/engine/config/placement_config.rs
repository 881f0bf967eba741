use bevy::prelude::*;
use constants::placement::{
    DIE_HOVER_OFFSET, FEATURE_POINT_TOLERANCE, ROLL_IMPULSE, ROLL_LIFT, ROLL_LIFT_DURATION,
    ROLL_MULTIPLIERS, ROLL_ROTATION_DURATION, ROLL_X_RANGE, ROLL_Y_RANGE, ROLL_Z_RANGE,
    SCAN_ESTIMATED_PLANE_AFTER, SCAN_FEATURE_POINTS_AFTER, SCAN_PLANES_AFTER,
};
use serde::Deserialize;

use super::error::ConfigError;
use crate::tools::placement::controller::PlacementSettings;
use crate::tools::placement::roll::RollSettings;
use crate::tools::placement::state::DieRestorePolicy;

/// Roll tuning as written in JSON. Ranges are inclusive `[min, max]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    pub impulse: [f32; 3],
    pub x_range: [u32; 2],
    pub y_range: [u32; 2],
    pub z_range: [u32; 2],
    pub multipliers: [f32; 3],
    pub rotation_duration: f32,
    pub lift: f32,
    pub lift_duration: f32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            impulse: ROLL_IMPULSE,
            x_range: [ROLL_X_RANGE.0, ROLL_X_RANGE.1],
            y_range: [ROLL_Y_RANGE.0, ROLL_Y_RANGE.1],
            z_range: [ROLL_Z_RANGE.0, ROLL_Z_RANGE.1],
            multipliers: ROLL_MULTIPLIERS,
            rotation_duration: ROLL_ROTATION_DURATION,
            lift: ROLL_LIFT,
            lift_duration: ROLL_LIFT_DURATION,
        }
    }
}

/// Simulated scan timings, in seconds since the session started.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub feature_points_after: f32,
    pub planes_after: f32,
    pub estimated_plane_after: f32,
    pub feature_tolerance: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            feature_points_after: SCAN_FEATURE_POINTS_AFTER,
            planes_after: SCAN_PLANES_AFTER,
            estimated_plane_after: SCAN_ESTIMATED_PLANE_AFTER,
            feature_tolerance: FEATURE_POINT_TOLERANCE,
        }
    }
}

/// Placement config asset loaded from `*.placement.json`. Missing fields use defaults.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub die_hover_offset: f32,
    pub restore_policy: DieRestorePolicy,
    pub roll_seed: Option<u64>,
    pub roll: RollConfig,
    pub scan: ScanConfig,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            die_hover_offset: DIE_HOVER_OFFSET,
            restore_policy: DieRestorePolicy::default(),
            roll_seed: None,
            roll: RollConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl PlacementConfig {
    /// Check every field and build the controller settings.
    pub fn placement_settings(&self) -> Result<PlacementSettings, ConfigError> {
        self.validate()?;

        let roll = &self.roll;
        Ok(PlacementSettings {
            die_hover_offset: self.die_hover_offset,
            roll: RollSettings {
                x_range: (roll.x_range[0], roll.x_range[1]),
                y_range: (roll.y_range[0], roll.y_range[1]),
                z_range: (roll.z_range[0], roll.z_range[1]),
                multipliers: Vec3::from_array(roll.multipliers),
                rotation_duration: roll.rotation_duration,
                impulse: Vec3::from_array(roll.impulse),
                lift: roll.lift,
                lift_duration: roll.lift_duration,
            },
            restore_policy: self.restore_policy,
            roll_seed: self.roll_seed,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let roll = &self.roll;
        for (axis, [min, max]) in [('x', roll.x_range), ('y', roll.y_range), ('z', roll.z_range)] {
            if min > max {
                return Err(ConfigError::EmptyRollRange { axis, min, max });
            }
        }

        for (field, values) in [
            ("roll.impulse", roll.impulse.as_slice()),
            ("roll.multipliers", roll.multipliers.as_slice()),
            ("roll.lift", std::slice::from_ref(&roll.lift)),
        ] {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::NotFinite { field });
            }
        }

        for (field, value) in [
            ("die_hover_offset", self.die_hover_offset),
            ("roll.rotation_duration", roll.rotation_duration),
            ("roll.lift_duration", roll.lift_duration),
            ("scan.feature_points_after", self.scan.feature_points_after),
            ("scan.planes_after", self.scan.planes_after),
            ("scan.estimated_plane_after", self.scan.estimated_plane_after),
        ] {
            non_negative(field, value)?;
        }

        let tolerance = self.scan.feature_tolerance;
        if !tolerance.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "scan.feature_tolerance",
            });
        }
        if tolerance <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "scan.feature_tolerance",
                value: tolerance,
            });
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
