use std::sync::Arc;
use parking_lot::RwLock;
use crate::error::Result;
use crate::feature::FeatureVector;
use crate::matching::{GestureMatch,GestureMatcher,MatcherParameters};

/// Cloneable handle for matching from several threads. Training, removal and
/// clearing take the write lock, so a match never observes a partial update.
#[derive(Debug,Clone,Default)]
pub struct SharedGestureMatcher {
    inner: Arc<RwLock<GestureMatcher>>
}

impl SharedGestureMatcher {
    pub fn new(parameters: MatcherParameters) -> SharedGestureMatcher {
        SharedGestureMatcher::from_matcher(GestureMatcher::new(parameters))
    }

    pub fn from_matcher(matcher: GestureMatcher) -> SharedGestureMatcher {
        SharedGestureMatcher { inner: Arc::new(RwLock::new(matcher)) }
    }

    pub fn train(&self, name: &str, features: FeatureVector) -> Result<()> {
        self.inner.write().train(name, features)
    }

    pub fn remove(&self, name: &str) -> bool {
        self.inner.write().remove(name)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    pub fn find_best_match(&self, query: &FeatureVector) -> GestureMatch {
        self.inner.read().find_best_match(query)
    }

    pub fn names(&self) -> Vec<String> {
        self.inner.read().names()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current store, detached from later updates.
    pub fn snapshot(&self) -> GestureMatcher {
        self.inner.read().clone()
    }
}
