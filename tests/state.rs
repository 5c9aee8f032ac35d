//! Host-side tests for the pure view-state core and the content registry.

use std::collections::HashSet;

use lab_wasm::contact::{mailto_uri, CONTACT_ADDRESS};
use lab_wasm::content;
use lab_wasm::state::{
    scroll_progress, ModalMachine, ModalState, ModalTransition, RevealSet, ViewportClass,
    MOBILE_MAX_WIDTH,
};

#[test]
fn classify_is_a_pure_threshold_on_width() {
    assert_eq!(ViewportClass::classify(0.0), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(400.0), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(MOBILE_MAX_WIDTH), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(MOBILE_MAX_WIDTH + 1.0), ViewportClass::Desktop);
    assert_eq!(ViewportClass::classify(1200.0), ViewportClass::Desktop);

    // Reclassifying the same width never changes the answer.
    for _ in 0..3 {
        assert_eq!(ViewportClass::classify(1200.0), ViewportClass::Desktop);
    }
}

#[test]
fn scroll_progress_stays_in_bounds() {
    // Halfway through the scrollable span.
    let progress = scroll_progress(450.0, 1900.0, 1000.0);
    assert!((progress - 50.0).abs() < 1e-9);

    // Overscroll clamps at the ends.
    assert_eq!(scroll_progress(-50.0, 1900.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(5000.0, 1900.0, 1000.0), 100.0);
}

#[test]
fn scroll_progress_survives_an_unscrollable_document() {
    // scrollHeight == clientHeight must not divide by zero.
    let progress = scroll_progress(0.0, 1000.0, 1000.0);
    assert_eq!(progress, 0.0);
    assert!(progress.is_finite());

    // A viewport taller than the document behaves the same way.
    assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
}

#[test]
fn reveal_flags_are_monotonic_and_one_shot() {
    let mut set = RevealSet::new(3);
    assert_eq!(set.revealed_count(), 0);

    // The firing call reports the transition; repeats do not.
    assert!(set.reveal(1));
    assert!(!set.reveal(1));
    assert!(set.is_revealed(1));

    // Out-of-range indices never fire.
    assert!(!set.reveal(7));

    // Once revealed, a flag stays revealed for the set's lifetime.
    for _ in 0..5 {
        set.reveal(1);
        assert!(set.is_revealed(1));
    }
    assert_eq!(set.revealed_count(), 1);
}

#[test]
fn gated_off_reveal_is_immediate_and_complete() {
    let mut set = RevealSet::new(4);
    set.reveal_all();
    assert_eq!(set.revealed_count(), set.len());
    for i in 0..set.len() {
        assert!(set.is_revealed(i));
    }
}

#[test]
fn modal_open_close_round_trip() {
    let mut machine = ModalMachine::new();
    assert_eq!(machine.state(), ModalState::Closed);

    assert_eq!(machine.open("p1"), ModalTransition::Opened);
    assert_eq!(machine.state(), ModalState::Open("p1"));
    assert_eq!(machine.open_key(), Some("p1"));

    assert_eq!(machine.close(), ModalTransition::Closed);
    assert_eq!(machine.state(), ModalState::Closed);
}

#[test]
fn modal_replace_keeps_a_single_lock() {
    let mut machine = ModalMachine::new();

    // Simulated lock: +1 on Opened, -1 on Closed, untouched otherwise.
    let mut locks_held: i32 = 0;
    let mut apply = |t: ModalTransition, locks: &mut i32| match t {
        ModalTransition::Opened => *locks += 1,
        ModalTransition::Closed => *locks -= 1,
        ModalTransition::Replaced | ModalTransition::NoOp => {}
    };

    apply(machine.open("p1"), &mut locks_held);
    apply(machine.open("p2"), &mut locks_held);
    assert_eq!(machine.state(), ModalState::Open("p2"));
    assert_eq!(locks_held, 1, "re-entrant open must not stack locks");

    // Re-opening the key already shown is also just a replace.
    apply(machine.open("p2"), &mut locks_held);
    assert_eq!(locks_held, 1);

    apply(machine.close(), &mut locks_held);
    assert_eq!(locks_held, 0, "every acquisition released exactly once");
}

#[test]
fn modal_close_is_idempotent() {
    let mut machine = ModalMachine::new();
    machine.open("p1");
    assert_eq!(machine.close(), ModalTransition::Closed);
    assert_eq!(machine.close(), ModalTransition::NoOp);
    assert_eq!(machine.close(), ModalTransition::NoOp);
    assert_eq!(machine.state(), ModalState::Closed);
}

#[test]
fn registry_keys_are_unique_and_resolvable() {
    let mut keys = HashSet::new();
    for p in content::PROJECTS {
        assert!(keys.insert(p.key), "duplicate project key {}", p.key);
        assert_eq!(content::project(p.key).map(|found| found.key), Some(p.key));
    }
    assert!(content::project("nope").is_none());

    // Every feature link points at a real project.
    for f in content::FEATURES {
        if let Some(key) = f.project {
            assert!(content::project(key).is_some(), "dangling link {key}");
        }
    }
}

#[test]
fn registry_grid_positions_are_unique_and_on_the_table() {
    let mut positions = HashSet::new();
    for p in content::PROJECTS {
        let (row, col) = p.grid;
        assert!(positions.insert((row, col)), "grid collision at {row},{col}");
        assert!(
            content::grid_cell_visible(row, col),
            "{} placed on an invisible cell",
            p.key
        );
        assert_eq!(content::project_at(row, col).map(|found| found.key), Some(p.key));
    }
}

#[test]
fn grid_silhouette_matches_the_periodic_table() {
    // Row 1: hydrogen and helium columns only.
    assert!(content::grid_cell_visible(1, 1));
    assert!(content::grid_cell_visible(1, 18));
    for col in 2..18 {
        assert!(!content::grid_cell_visible(1, col));
    }

    // Rows 2-3 skip the transition-metal block.
    assert!(content::grid_cell_visible(2, 2));
    assert!(!content::grid_cell_visible(2, 3));
    assert!(!content::grid_cell_visible(3, 12));
    assert!(content::grid_cell_visible(2, 13));

    // Everything below is fully populated.
    for col in 1..=content::GRID_COLS {
        assert!(content::grid_cell_visible(4, col));
        assert!(content::grid_cell_visible(7, col));
    }
}

#[test]
fn desktop_scenario_reaches_the_expected_descriptor() {
    // Width 1200 classifies desktop, half scroll reads 50, and the card
    // linked to p1 resolves to the Pixel Canvas descriptor.
    assert_eq!(ViewportClass::classify(1200.0), ViewportClass::Desktop);
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);

    let mut machine = ModalMachine::new();
    machine.open("p1");
    let project = machine
        .open_key()
        .and_then(content::project)
        .expect("open key resolves");
    assert_eq!(project.name, "Pixel Canvas");
    assert_eq!(project.status, content::ProjectStatus::Building);
}

#[test]
fn mailto_encodes_subject_and_body() {
    let uri = mailto_uri("Ada", "ada@example.com", "Let's build");
    assert!(uri.starts_with(&format!("mailto:{CONTACT_ADDRESS}?subject=")));
    assert!(uri.contains("subject=Project%20Inquiry%20from%20Ada"));
    assert!(uri.contains("ada%40example.com"));
    // Newlines in the body survive as %0A.
    assert!(uri.contains("Name%3A%20Ada%0AEmail%3A"));
}

#[test]
fn mailto_falls_back_for_an_anonymous_sender() {
    let uri = mailto_uri("", "", "hi");
    assert!(uri.contains("subject=Project%20Inquiry%20from%20Website%20Contact"));
}
