#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::SmallRng};
use gesture::{Float, HandPose, Landmark};
use gesture::hand::LANDMARK_COUNT;

const BASES: [(Float, Float); 5] = [(-40.0, -20.0), (-20.0, -60.0), (0.0, -65.0), (18.0, -60.0), (34.0, -52.0)];
const HEADINGS: [Float; 5] = [-2.5, -1.75, -1.5708, -1.4, -1.25];

/// Synthetic hand in image coordinates. `curl` is the bend per joint in radians,
/// 0 gives straight fingers.
pub fn hand_pose(curl: Float) -> HandPose {
    let wrist = Landmark::new(320.0, 400.0, 0.0);
    let mut landmarks = vec![wrist];
    for (finger, (base, heading)) in BASES.iter().zip(HEADINGS.iter()).enumerate() {
        let segment = if finger == 0 { 18.0 } else { 20.0 };
        let mut joint = wrist + Landmark::new(base.0, base.1, 0.0);
        let mut direction = *heading;
        for k in 0..4 {
            joint.z = -(k as Float)*curl*6.0;
            landmarks.push(joint);
            joint += Landmark::new(segment*direction.cos(), segment*direction.sin(), 0.0);
            direction += curl;
        }
    }
    HandPose::from_landmarks(&landmarks).expect("21 landmarks")
}

pub fn open_palm() -> HandPose {
    hand_pose(0.0)
}

pub fn fist() -> HandPose {
    hand_pose(1.3)
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn random_pose<R: Rng>(rng: &mut R) -> HandPose {
    let points = (0..LANDMARK_COUNT).map(|_| [rng.gen_range(100.0..540.0), rng.gen_range(80.0..400.0), rng.gen_range(-30.0..30.0)]).collect::<Vec<[Float; 3]>>();
    HandPose::from_points(&points).expect("21 points")
}

pub fn assert_close(a: &[Float], b: &[Float], eps: Float) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!((x - y).abs() < eps, "index {}: {} vs {}", i, x, y);
    }
}
