extern crate nalgebra as na;

use na::DVector;
use serde::{Serialize,Deserialize};
use crate::Float;
use crate::hand::{LANDMARK_COUNT,FINGERS,FINGERTIPS};

pub mod processing;

pub use processing::{extract, extract_checked};

pub const POSITION_FEATURES: usize = LANDMARK_COUNT*3;
pub const ANGLES_PER_FINGER: usize = 3;
pub const ANGLE_FEATURES: usize = FINGERS.len()*ANGLES_PER_FINGER;
pub const DISTANCE_FEATURES: usize = FINGERTIPS.len()*(FINGERTIPS.len()-1)/2;
/// Layout: positions, then joint angles, then fingertip distances.
pub const FEATURE_VECTOR_LEN: usize = POSITION_FEATURES + ANGLE_FEATURES + DISTANCE_FEATURES;

/// Angle reported for a joint whose neighbouring bone has zero length.
pub const DEGENERATE_ANGLE: Float = 0.0;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FeatureVector {
    data: DVector<Float>
}

impl FeatureVector {
    pub fn new(data: DVector<Float>) -> FeatureVector {
        FeatureVector { data }
    }

    pub fn from_slice(values: &[Float]) -> FeatureVector {
        FeatureVector { data: DVector::<Float>::from_column_slice(values) }
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn as_slice(&self) -> &[Float] { self.data.as_slice() }

    /// Normalized landmark coordinates.
    ///
    /// # Panics
    /// The section accessors assume the extractor's layout and panic when the
    /// vector holds fewer than `FEATURE_VECTOR_LEN` values.
    pub fn positions(&self) -> &[Float] { &self.as_slice()[..POSITION_FEATURES] }
    pub fn angles(&self) -> &[Float] { &self.as_slice()[POSITION_FEATURES..POSITION_FEATURES+ANGLE_FEATURES] }
    pub fn distances(&self) -> &[Float] { &self.as_slice()[POSITION_FEATURES+ANGLE_FEATURES..] }
}
