extern crate nalgebra as na;

use na::DVector;
use tracing::warn;
use crate::Float;
use crate::error::{Error,Result};
use crate::feature::{FeatureVector,FEATURE_VECTOR_LEN,DEGENERATE_ANGLE};
use crate::hand::{HandPose,Landmark,LANDMARK_COUNT,FINGERS,FINGERTIPS};

/// Larger side of the hand's x/y bounding box.
pub fn normalization_scale(pose: &HandPose) -> Float {
    let (width, height) = pose.planar_extent();
    width.max(height)
}

fn is_degenerate_scale(scale: Float) -> bool {
    !scale.is_finite() || scale <= 0.0
}

/// Landmarks relative to the wrist, divided by the bounding box scale.
/// z shares the x/y scale. A zero scale collapses every point onto the origin.
pub fn normalize(pose: &HandPose) -> [Landmark; LANDMARK_COUNT] {
    let scale = normalization_scale(pose);
    if is_degenerate_scale(scale) {
        warn!("hand pose has degenerate scale {}, using zero coordinates", scale);
        return [Landmark::zeros(); LANDMARK_COUNT];
    }
    let palm = *pose.wrist();
    pose.get_landmarks().map(|p| (p - palm)/scale)
}

/// Angle at p2 between the bones towards p1 and p3, in [0, pi].
pub fn joint_angle(p1: &Landmark, p2: &Landmark, p3: &Landmark) -> Float {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let norms = v1.norm()*v2.norm();
    if norms == 0.0 || !norms.is_finite() {
        return DEGENERATE_ANGLE;
    }
    (v1.dot(&v2)/norms).clamp(-1.0, 1.0).acos()
}

pub fn finger_angles(normalized: &[Landmark; LANDMARK_COUNT]) -> Vec<Float> {
    FINGERS.iter().flat_map(|finger| {
        finger.chain().windows(3).map(|w| joint_angle(&normalized[w[0]], &normalized[w[1]], &normalized[w[2]])).collect::<Vec<Float>>()
    }).collect()
}

pub fn fingertip_distances(normalized: &[Landmark; LANDMARK_COUNT]) -> Vec<Float> {
    let mut distances = Vec::<Float>::with_capacity(FINGERTIPS.len()*(FINGERTIPS.len()-1)/2);
    for i in 0..FINGERTIPS.len() {
        for j in i+1..FINGERTIPS.len() {
            distances.push((normalized[FINGERTIPS[j]] - normalized[FINGERTIPS[i]]).norm());
        }
    }
    distances
}

pub fn extract(pose: &HandPose) -> FeatureVector {
    let normalized = normalize(pose);

    let mut data = Vec::<Float>::with_capacity(FEATURE_VECTOR_LEN);
    data.extend(normalized.iter().flat_map(|p| [p.x, p.y, p.z]));
    data.extend(finger_angles(&normalized));
    data.extend(fingertip_distances(&normalized));
    debug_assert_eq!(data.len(), FEATURE_VECTOR_LEN);

    FeatureVector::new(DVector::<Float>::from_vec(data))
}

/// Like `extract` but rejects poses whose bounding box has no extent.
pub fn extract_checked(pose: &HandPose) -> Result<FeatureVector> {
    let scale = normalization_scale(pose);
    match is_degenerate_scale(scale) {
        true => Err(Error::DegenerateGeometry(format!("bounding box scale is {}", scale))),
        false => Ok(extract(pose))
    }
}
