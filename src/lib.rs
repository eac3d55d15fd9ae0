//! Static hand gesture recognition from 21-point hand landmarks.
//!
//! A hand pose is reduced to a translation and scale invariant feature vector
//! (normalized positions, joint angles, fingertip distances) which is matched
//! against named gestures with a weighted similarity score.

pub mod error;
pub mod hand;
pub mod feature;
pub mod matching;
pub mod recognizer;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use error::{Error, Result};
pub use hand::{HandPose, Landmark, Finger};
pub use feature::{FeatureVector, extract, extract_checked};
pub use matching::{GestureMatch, GestureMatcher, MatcherParameters, SharedGestureMatcher, UNKNOWN_LABEL};
pub use recognizer::{GestureRecognizer, Mode, FrameOutcome};
