mod common;

use std::thread;
use gesture::{extract, GestureMatcher, MatcherParameters, SharedGestureMatcher, UNKNOWN_LABEL};
use common::{fist, open_palm};

#[test]
fn test_shared_handle_sees_updates() {
    let shared = SharedGestureMatcher::new(MatcherParameters::default());
    let other = shared.clone();
    shared.train("fist", extract(&fist())).unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other.find_best_match(&extract(&fist())).get_label(), "fist");

    let snapshot = other.snapshot();
    assert!(other.remove("fist"));
    assert!(other.is_empty());
    assert_eq!(snapshot.names(), vec!["fist".to_string()]);
}

#[test]
fn test_concurrent_matching_during_training() {
    let mut matcher = GestureMatcher::default();
    matcher.train("fist", extract(&fist())).unwrap();
    let shared = SharedGestureMatcher::from_matcher(matcher);
    let query = extract(&fist());

    thread::scope(|s| {
        for _ in 0..4 {
            let reader = shared.clone();
            let query = query.clone();
            s.spawn(move || {
                for _ in 0..200 {
                    let best = reader.find_best_match(&query);
                    // A fist query against an open palm alone still clears the threshold.
                    assert!(["fist", "open_palm", UNKNOWN_LABEL].contains(&best.get_label()));
                    if best.get_label() == "fist" {
                        assert_eq!(best.get_confidence(), 100);
                    }
                }
            });
        }
        for i in 0..100 {
            match i % 3 {
                0 => shared.train("open_palm", extract(&open_palm())).unwrap(),
                1 => { shared.remove("fist"); },
                _ => shared.train("fist", extract(&fist())).unwrap()
            }
        }
    });

    shared.clear();
    assert!(shared.is_empty());
    assert!(shared.names().is_empty());
}
