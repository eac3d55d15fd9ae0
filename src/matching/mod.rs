use std::fmt;
use tracing::{debug,trace,warn};
use crate::Float;
use crate::error::{Error,Result};
use crate::feature::FeatureVector;

pub mod matcher_parameters;
pub mod shared;

pub use matcher_parameters::MatcherParameters;
pub use shared::SharedGestureMatcher;

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Weighted mean absolute difference mapped to `1 - diff`. Not clamped, so very
/// dissimilar vectors score below zero.
pub fn similarity(a: &FeatureVector, b: &FeatureVector, parameters: &MatcherParameters) -> Result<Float> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch { expected: a.len(), actual: b.len() });
    }
    let len = a.len();
    let (total_diff, total_weight) = a.as_slice().iter().zip(b.as_slice().iter()).enumerate().fold((0.0, 0.0), |(diff, weight), (i, (x, y))| {
        let w = parameters.weight_at(i, len);
        (diff + w*(x - y).abs(), weight + w)
    });
    match total_weight > 0.0 {
        true => Ok(1.0 - total_diff/total_weight),
        false => Ok(1.0)
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct GestureMatch {
    label: String,
    confidence: u8,
    similarity: Float,
    known: bool
}

impl GestureMatch {
    fn new(label: &str, similarity: Float, known: bool) -> GestureMatch {
        GestureMatch { label: label.to_string(), confidence: confidence_percent(similarity), similarity, known }
    }

    pub fn unknown() -> GestureMatch {
        GestureMatch::new(UNKNOWN_LABEL, 0.0, false)
    }

    pub fn get_label(&self) -> &str { &self.label }
    pub fn get_confidence(&self) -> u8 { self.confidence }
    pub fn get_similarity(&self) -> Float { self.similarity }
    pub fn is_known(&self) -> bool { self.known }
}

impl fmt::Display for GestureMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}% confidence)", self.label, self.confidence)
    }
}

pub fn confidence_percent(similarity: Float) -> u8 {
    (similarity*100.0).round().clamp(0.0, 100.0) as u8
}

/// In-memory gesture store. Iteration follows registration order, which
/// decides ties between equally similar gestures.
#[derive(Debug,Clone,Default)]
pub struct GestureMatcher {
    gestures: Vec<(String, FeatureVector)>,
    parameters: MatcherParameters
}

impl GestureMatcher {
    pub fn new(parameters: MatcherParameters) -> GestureMatcher {
        GestureMatcher { gestures: Vec::new(), parameters }
    }

    pub fn get_parameters(&self) -> &MatcherParameters { &self.parameters }

    pub fn train(&mut self, name: &str, features: FeatureVector) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("gesture name must not be empty".to_string()));
        }
        match self.gestures.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => {
                debug!("retraining gesture {}", name);
                entry.1 = features;
            },
            None => {
                debug!("training gesture {}", name);
                self.gestures.push((name.to_string(), features));
            }
        }
        Ok(())
    }

    /// Returns whether a gesture was removed. Unknown names are ignored.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.gestures.len();
        self.gestures.retain(|(n, _)| n != name);
        let removed = self.gestures.len() != before;
        if removed {
            debug!("removed gesture {}", name);
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("clearing {} gestures", self.gestures.len());
        self.gestures.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.gestures.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&FeatureVector> {
        let name = name.trim();
        self.gestures.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn len(&self) -> usize { self.gestures.len() }
    pub fn is_empty(&self) -> bool { self.gestures.is_empty() }

    pub fn names(&self) -> Vec<String> {
        self.gestures.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn similarity(&self, a: &FeatureVector, b: &FeatureVector) -> Result<Float> {
        similarity(a, b, &self.parameters)
    }

    pub fn find_best_match(&self, query: &FeatureVector) -> GestureMatch {
        let mut best: Option<&str> = None;
        let mut highest_similarity: Float = 0.0;

        for (name, features) in self.gestures.iter() {
            let score = match self.similarity(query, features) {
                Ok(s) => s,
                Err(e) => {
                    warn!("skipping gesture {}: {}", name, e);
                    0.0
                }
            };
            trace!("gesture {} similarity {}", name, score);
            if score > highest_similarity {
                highest_similarity = score;
                best = Some(name.as_str());
            }
        }

        match best {
            Some(name) if highest_similarity > self.parameters.similarity_threshold => GestureMatch::new(name, highest_similarity, true),
            _ => GestureMatch::new(UNKNOWN_LABEL, highest_similarity, false)
        }
    }
}
