use std::{fmt,fs,path::Path};
use serde::{Serialize,Deserialize};
use crate::Float;
use crate::error::{Error,Result};

pub const SIMILARITY_THRESHOLD: Float = 0.65;
pub const WEIGHTED_TAIL: usize = 20;
pub const TAIL_WEIGHT: Float = 2.0;

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct MatcherParameters {
    /// A match must score strictly above this to be reported by name.
    pub similarity_threshold: Float,
    /// Number of trailing features that get `tail_weight`. With the default 20 on
    /// the 88-value layout this covers the last 10 joint angles and all 10
    /// fingertip distances; the thumb's three angles and the index finger's
    /// first two keep weight 1. Values larger than the vector weight everything.
    pub weighted_tail: usize,
    pub tail_weight: Float
}

impl Default for MatcherParameters {
    fn default() -> Self {
        MatcherParameters {
            similarity_threshold: SIMILARITY_THRESHOLD,
            weighted_tail: WEIGHTED_TAIL,
            tail_weight: TAIL_WEIGHT
        }
    }
}

impl MatcherParameters {
    pub fn validate(self) -> Result<MatcherParameters> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::Config(format!("similarity_threshold must lie in [0,1], got {}", self.similarity_threshold)));
        }
        if !(self.tail_weight.is_finite() && self.tail_weight > 0.0) {
            return Err(Error::Config(format!("tail_weight must be positive, got {}", self.tail_weight)));
        }
        Ok(self)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<MatcherParameters> {
        let parameters: MatcherParameters = serde_yaml::from_str(yaml)?;
        parameters.validate()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<MatcherParameters> {
        let yaml = fs::read_to_string(path)?;
        MatcherParameters::from_yaml_str(&yaml)
    }

    pub fn weight_at(&self, index: usize, len: usize) -> Float {
        match index >= len.saturating_sub(self.weighted_tail) {
            true => self.tail_weight,
            false => 1.0
        }
    }
}

impl fmt::Display for MatcherParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "threshold_{}_tail_{}_w_{}", self.similarity_threshold, self.weighted_tail, self.tail_weight)
    }
}
