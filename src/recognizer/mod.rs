//! Capture and per-frame recognition on top of the matcher.
//!
//! The recognizer mirrors a training/inference session: poses are captured under
//! a name while training, and every frame is matched once inference is armed.
//! Rendering and the hand-pose model stay with the caller, which hands over at
//! most one detected pose per frame.

use tracing::{debug,info};
use crate::error::{Error,Result};
use crate::feature::{extract,extract_checked};
use crate::hand::HandPose;
use crate::matching::{GestureMatch,GestureMatcher,MatcherParameters};

#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Mode {
    Training,
    Inference
}

#[derive(Debug,Clone,PartialEq)]
pub enum FrameOutcome {
    /// Inference is not armed.
    Idle,
    NoHand,
    Detected(GestureMatch)
}

#[derive(Debug,Clone)]
pub struct GestureRecognizer {
    matcher: GestureMatcher,
    mode: Mode,
    inference_active: bool
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        GestureRecognizer::new(MatcherParameters::default())
    }
}

impl GestureRecognizer {
    pub fn new(parameters: MatcherParameters) -> GestureRecognizer {
        GestureRecognizer { matcher: GestureMatcher::new(parameters), mode: Mode::Training, inference_active: false }
    }

    pub fn get_mode(&self) -> Mode { self.mode }
    pub fn is_inference_active(&self) -> bool { self.inference_active }
    pub fn get_matcher(&self) -> &GestureMatcher { &self.matcher }
    pub fn gesture_names(&self) -> Vec<String> { self.matcher.names() }

    /// Switching to inference fails while no gesture is stored; the mode still
    /// changes but nothing is matched until inference is armed again.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.mode = mode;
        match mode {
            Mode::Training => {
                self.inference_active = false;
                Ok(())
            },
            Mode::Inference if self.matcher.is_empty() => {
                self.inference_active = false;
                Err(Error::NoGesturesTrained)
            },
            Mode::Inference => {
                info!("inference armed with {} gestures", self.matcher.len());
                self.inference_active = true;
                Ok(())
            }
        }
    }

    /// Stores the pose's features under the trimmed name and returns that name.
    pub fn capture(&mut self, name: &str, pose: Option<&HandPose>) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("please enter a gesture name".to_string()));
        }
        let pose = pose.ok_or(Error::NoHandDetected)?;
        let features = extract_checked(pose)?;
        self.matcher.train(name, features)?;
        info!("captured gesture {}", name);
        Ok(name.to_string())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.matcher.remove(name);
        if self.matcher.is_empty() {
            self.inference_active = false;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.matcher.clear();
        self.inference_active = false;
    }

    pub fn process_frame(&self, pose: Option<&HandPose>) -> FrameOutcome {
        if !self.inference_active {
            return FrameOutcome::Idle;
        }
        match pose {
            None => FrameOutcome::NoHand,
            Some(pose) => {
                let best = self.matcher.find_best_match(&extract(pose));
                debug!("frame matched {}", best);
                FrameOutcome::Detected(best)
            }
        }
    }
}
