extern crate nalgebra as na;

use na::Vector3;
use serde::{Serialize,Deserialize};
use crate::Float;
use crate::error::{Error,Result};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

pub type Landmark = Vector3<Float>;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky
}

pub const FINGERS: [Finger; 5] = [Finger::Thumb, Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

impl Finger {
    /// Landmark indices from the knuckle closest to the wrist out to the tip.
    pub fn indices(&self) -> [usize; 4] {
        match self {
            Finger::Thumb => [1, 2, 3, 4],
            Finger::Index => [5, 6, 7, 8],
            Finger::Middle => [9, 10, 11, 12],
            Finger::Ring => [13, 14, 15, 16],
            Finger::Pinky => [17, 18, 19, 20]
        }
    }

    /// The finger's skeleton rooted at the wrist.
    pub fn chain(&self) -> [usize; 5] {
        let [a, b, c, d] = self.indices();
        [WRIST, a, b, c, d]
    }

    pub fn tip(&self) -> usize {
        self.indices()[3]
    }
}

/// One detected hand: 21 landmarks in the hand-pose model's canonical order.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct HandPose {
    landmarks: [Landmark; LANDMARK_COUNT]
}

impl HandPose {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> HandPose {
        HandPose { landmarks }
    }

    pub fn from_points(points: &[[Float; 3]]) -> Result<HandPose> {
        if points.len() != LANDMARK_COUNT {
            return Err(Error::LandmarkCount { expected: LANDMARK_COUNT, actual: points.len() });
        }
        let mut landmarks = [Landmark::zeros(); LANDMARK_COUNT];
        for (landmark, p) in landmarks.iter_mut().zip(points.iter()) {
            *landmark = Landmark::new(p[0], p[1], p[2]);
        }
        Ok(HandPose { landmarks })
    }

    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<HandPose> {
        let array: [Landmark; LANDMARK_COUNT] = landmarks.try_into().map_err(|_| Error::LandmarkCount { expected: LANDMARK_COUNT, actual: landmarks.len() })?;
        Ok(HandPose { landmarks: array })
    }

    pub fn get_landmarks(&self) -> &[Landmark; LANDMARK_COUNT] { &self.landmarks }
    pub fn get_landmark(&self, index: usize) -> &Landmark { &self.landmarks[index] }
    pub fn wrist(&self) -> &Landmark { &self.landmarks[WRIST] }

    /// Extent of the x/y bounding box as (width, height). z is not considered.
    pub fn planar_extent(&self) -> (Float, Float) {
        let (mut min_x, mut min_y) = (Float::INFINITY, Float::INFINITY);
        let (mut max_x, mut max_y) = (Float::NEG_INFINITY, Float::NEG_INFINITY);
        for p in self.landmarks.iter() {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (max_x - min_x, max_y - min_y)
    }

    pub fn translated(&self, offset: &Landmark) -> HandPose {
        HandPose { landmarks: self.landmarks.map(|p| p + offset) }
    }

    pub fn scaled(&self, factor: Float) -> HandPose {
        HandPose { landmarks: self.landmarks.map(|p| p * factor) }
    }
}
