#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_target_accepts_fragment_links() {
    assert_eq!(anchor_target("#services"), Some("#services"));
    assert_eq!(anchor_target("  #contacts "), Some("#contacts"));
}

#[test]
fn anchor_target_ignores_bare_hash_and_empty() {
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("/about#team"), None);
}

#[test]
fn scroll_top_subtracts_header_offset() {
    assert_eq!(scroll_top_for(1200.0, 80.0), 1120.0);
}

#[test]
fn scroll_top_never_goes_negative() {
    assert_eq!(scroll_top_for(30.0, 80.0), 0.0);
}

// =============================================================
// CardFade
// =============================================================

#[test]
fn cards_fade_in_within_upper_band() {
    let bounds = [
        Bounds { top: 100.0, bottom: 400.0 },
        Bounds { top: 850.0, bottom: 1100.0 },
        Bounds { top: -500.0, bottom: -10.0 },
    ];
    let mut fade = CardFade::new(bounds.len(), 0.8);
    assert_eq!(fade.sweep(1000.0, |i| bounds[i]), vec![0]);
    assert!(!fade.is_done());
}

#[test]
fn card_fade_is_one_way() {
    let mut fade = CardFade::new(1, 0.8);
    assert_eq!(fade.sweep(1000.0, |_| Bounds { top: 200.0, bottom: 500.0 }), vec![0]);
    assert!(fade.is_done());
    assert!(fade.sweep(1000.0, |_| Bounds { top: 2000.0, bottom: 2300.0 }).is_empty());
    assert!(fade.is_done());
}
