use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::fmt;

/// Full rotations added to every spin so it looks convincing regardless
/// of the starting orientation.
pub const FULL_TURNS: u32 = 3;
/// Duration of the spin animation in milliseconds.
pub const SPIN_DURATION_MS: u64 = 4000;
/// The pointer sits at the top of the wheel; SVG angles start at "right"
/// and grow clockwise, so selection compensates by a quarter turn.
pub const POINTER_OFFSET_DEG: f64 = 90.0;

/// Current state of a wheel widget.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpinPhase {
    Idle,
    Spinning,
    Settled,
}

/// One angular segment of the wheel together with its label placement.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub label: String,
    pub start_deg: f64,
    pub end_deg: f64,
    /// Label anchor, at half the radius along the slice bisector.
    pub label_x: f64,
    pub label_y: f64,
    /// Rotation applied to the label so it reads along the bisector.
    pub label_rotation_deg: f64,
    /// SVG arc path for the slice, in a viewBox of the wheel's diameter.
    pub path: String,
}

/// Parameters of a started spin, for whoever drives the animation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target_deg: f64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelError {
    /// A wheel needs at least one option to spin over.
    NoOptions,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::NoOptions => write!(f, "wheel has no options"),
        }
    }
}

impl std::error::Error for WheelError {}

/// Pure slice geometry for a wheel of the given diameter. Slices are laid
/// out sequentially from 0°, each 360/N wide.
pub fn compute_slices(labels: &[String], wheel_diameter: f64) -> Vec<Slice> {
    let count = labels.len();
    if count == 0 {
        return Vec::new();
    }

    let radius = wheel_diameter / 2.0;
    let segment_deg = 360.0 / count as f64;
    let large_arc_flag = if segment_deg > 180.0 { 1 } else { 0 };

    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let start_deg = i as f64 * segment_deg;
            let end_deg = start_deg + segment_deg;
            let mid_deg = start_deg + segment_deg / 2.0;
            let mid_rad = mid_deg * PI / 180.0;

            let text_radius = radius * 0.5;
            let label_x = radius + text_radius * mid_rad.cos();
            let label_y = radius + text_radius * mid_rad.sin();

            let x1 = radius + radius * (start_deg * PI / 180.0).cos();
            let y1 = radius + radius * (start_deg * PI / 180.0).sin();
            let x2 = radius + radius * (end_deg * PI / 180.0).cos();
            let y2 = radius + radius * (end_deg * PI / 180.0).sin();
            let path = format!(
                "M{radius} {radius} L{x1} {y1} A{radius} {radius} 0 {large_arc_flag} 1 {x2} {y2} Z"
            );

            Slice {
                index: i,
                label: label.clone(),
                start_deg,
                end_deg,
                label_x,
                label_y,
                label_rotation_deg: mid_deg,
                path,
            }
        })
        .collect()
}

/// Maps a final rotation back to the option under the pointer.
///
/// Slices are laid out in increasing-angle order while the wheel rotates
/// clockwise past a fixed top pointer, so the raw angular index runs
/// opposite to the visual one. The inversion is part of the contract;
/// removing it changes which slice a given rotation reports.
///
/// Panics when `option_count` is zero; [`WheelEngine::new`] rejects
/// empty wheels before a spin can ever reach this point.
pub fn selected_index_for(target_deg: f64, option_count: usize) -> usize {
    assert!(option_count > 0, "wheel has no options");
    let segment_deg = 360.0 / option_count as f64;
    let final_deg = target_deg.rem_euclid(360.0);
    let adjusted_deg = (final_deg + POINTER_OFFSET_DEG).rem_euclid(360.0);
    let raw_index = ((adjusted_deg / segment_deg).floor() as usize).min(option_count - 1);
    (option_count - 1 - raw_index) % option_count
}

/// Drives one wheel widget through idle → spinning → settled.
///
/// The engine owns no timer. The caller animates `rotation_deg` toward
/// the planned target over `duration_ms` and calls [`WheelEngine::complete_spin`]
/// once, when the animation finishes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelEngine {
    option_count: usize,
    phase: SpinPhase,
    rotation_deg: f64,
    target_deg: f64,
    selected_index: Option<usize>,
}

impl WheelEngine {
    pub fn new(option_count: usize) -> Result<Self, WheelError> {
        if option_count == 0 {
            return Err(WheelError::NoOptions);
        }
        Ok(Self {
            option_count,
            phase: SpinPhase::Idle,
            rotation_deg: 0.0,
            target_deg: 0.0,
            selected_index: None,
        })
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Starts a spin and returns the plan for the animation host.
    ///
    /// A spin already in progress cannot be retriggered: the call is a
    /// no-op returning `None` and the in-flight spin keeps its target.
    pub fn start_spin<R: Rng>(&mut self, rng: &mut R) -> Option<SpinPlan> {
        if self.phase == SpinPhase::Spinning {
            return None;
        }

        // Rotation restarts from zero each spin; the wheel looks the same
        // but an immediate re-spin animates the full distance again.
        self.rotation_deg = 0.0;
        self.selected_index = None;
        self.phase = SpinPhase::Spinning;

        let random_deg = rng.gen_range(0..360u32);
        self.target_deg = f64::from(FULL_TURNS * 360 + random_deg);

        Some(SpinPlan { target_deg: self.target_deg, duration_ms: SPIN_DURATION_MS })
    }

    /// Settles the wheel after the animation finished and reports the
    /// selected option. Returns `None` when no spin is in flight.
    pub fn complete_spin(&mut self) -> Option<usize> {
        if self.phase != SpinPhase::Spinning {
            return None;
        }

        self.rotation_deg = self.target_deg;
        let index = selected_index_for(self.target_deg, self.option_count);
        self.selected_index = Some(index);
        self.phase = SpinPhase::Settled;
        Some(index)
    }
}
