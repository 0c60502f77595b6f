//! Thread-local ambient culture.
//!
//! Convenience entry points (`parse`, `to_string_with`, `Display`) read the
//! ambient culture of the calling thread. Swapping it on one thread must not
//! affect operations running on another.

use crate::common::culture;
use std::sync::{Arc, Barrier};
use std::thread;
use svo::culture::{self as ambient, CultureScope};
use svo::prelude::*;
use svo::value_objects::{Currency, FileSize, Month};

#[test]
fn test_scope_drives_convenience_parsing() {
    let _scope = CultureScope::new(culture("nl-BE"));
    assert_eq!(Currency::parse("Amerikaanse dollar").unwrap(), Currency::USD);
    assert_eq!(Month::parse("maart").unwrap(), Month::MARCH);
    assert_eq!(Month::MARCH.to_string(), "maart");
}

#[test]
fn test_scope_drives_display() {
    let size = FileSize::new(123_456_789);
    {
        let _scope = CultureScope::new(culture("nl-BE"));
        assert_eq!(size.to_string_with("0.0 MB").unwrap(), "117,7 MB");
    }
    {
        let _scope = CultureScope::new(culture("en-US"));
        assert_eq!(size.to_string_with("0.0 MB").unwrap(), "117.7 MB");
    }
}

#[test]
fn test_scopes_do_not_leak_between_threads() {
    let barrier = Arc::new(Barrier::new(2));

    let dutch = {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            let _scope = CultureScope::new(culture("nl-NL"));
            barrier.wait();
            (ambient::current().name(), Month::JANUARY.to_string())
        })
    };
    let french = {
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            let _scope = CultureScope::new(culture("fr-FR"));
            barrier.wait();
            (ambient::current().name(), Month::JANUARY.to_string())
        })
    };

    assert_eq!(dutch.join().unwrap(), ("nl-NL", "januari".to_string()));
    assert_eq!(french.join().unwrap(), ("fr-FR", "janvier".to_string()));
}

#[test]
fn test_explicit_culture_ignores_ambient_one() {
    let _scope = CultureScope::new(culture("de-DE"));
    let nl = culture("nl-NL");
    assert_eq!(Month::MARCH.format("f", nl).unwrap(), "maart");
    assert_eq!(Month::parse_with("mrt", nl).unwrap(), Month::MARCH);
    assert_eq!(Month::MARCH.to_text(), "March");
}

#[test]
fn test_unknown_culture_names() {
    assert!(Culture::get("xx-XX").is_none());
    assert!(matches!(
        Culture::require("xx-XX"),
        Err(SvoError::UnknownCulture { .. })
    ));
}
