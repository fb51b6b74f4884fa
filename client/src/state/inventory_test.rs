use super::*;
use inventory::model::availability_label;
use inventory::{InventoryRecord, Material};

fn beaker() -> Material {
    Material { id: 1, name: "Beaker".to_owned(), quantity: 5 }
}

fn flask() -> Material {
    Material { id: 2, name: "Flask".to_owned(), quantity: 0 }
}

#[test]
fn collection_state_defaults() {
    let s = CollectionState::<Material>::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.loaded);
    assert!(!s.attempted);
    assert_eq!(s.in_flight, 0);
    assert!(s.pending_deletes.is_empty());
}

#[test]
fn refresh_replaces_whole_collection() {
    let mut s = CollectionState::default();
    s.begin_refresh();
    assert!(s.loading);
    s.finish_refresh(Some(vec![beaker(), flask()]));
    assert!(!s.loading);
    assert!(s.loaded);

    s.begin_refresh();
    s.finish_refresh(Some(vec![flask()]));
    assert_eq!(s.items, vec![flask()]);
}

#[test]
fn failed_refresh_keeps_previous_items() {
    let mut s = CollectionState::default();
    s.begin_refresh();
    s.finish_refresh(Some(vec![beaker()]));

    s.begin_refresh();
    s.finish_refresh(None);
    assert_eq!(s.items, vec![beaker()]);
    assert!(!s.loading);
}

#[test]
fn repeated_refresh_without_mutation_is_idempotent() {
    let server = vec![beaker(), flask()];
    let mut s = CollectionState::default();
    s.begin_refresh();
    s.finish_refresh(Some(server.clone()));
    let first = s.items.clone();
    s.begin_refresh();
    s.finish_refresh(Some(server));
    assert_eq!(s.items, first);
}

#[test]
fn overlapping_refreshes_stay_loading_until_last_and_last_wins() {
    let mut s = CollectionState::default();
    s.begin_refresh();
    s.begin_refresh();
    s.finish_refresh(Some(vec![beaker()]));
    assert!(s.loading, "second call still outstanding");
    s.finish_refresh(Some(vec![flask()]));
    assert!(!s.loading);
    assert_eq!(s.items, vec![flask()]);
}

#[test]
fn create_then_refresh_shows_new_available_row() {
    let mut s = CollectionState::default();
    s.begin_refresh();
    s.finish_refresh(Some(vec![flask()]));

    // POST succeeded server-side; the list view refreshes.
    s.begin_refresh();
    s.finish_refresh(Some(vec![flask(), beaker()]));

    let rows: Vec<_> = s.items.iter().filter(|m| m.name == "Beaker").collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(availability_label(rows[0].is_available()), "Available");
    assert_eq!(rows[0].quantity, 5);
}

#[test]
fn delete_flags_clear_and_refresh_removes_row() {
    let mut s = CollectionState::default();
    s.begin_refresh();
    s.finish_refresh(Some(vec![beaker(), flask()]));

    s.begin_delete(1);
    assert!(s.is_deleting(1));
    assert_eq!(s.items.len(), 2, "row stays until the delete resolves");

    s.finish_delete(1);
    s.begin_refresh();
    s.finish_refresh(Some(vec![flask()]));
    assert!(!s.is_deleting(1));
    assert!(s.items.iter().all(|m| m.id() != 1));
}

#[test]
fn finish_refresh_without_begin_does_not_underflow() {
    let mut s = CollectionState::<Material>::default();
    s.finish_refresh(None);
    assert_eq!(s.in_flight, 0);
    assert!(!s.loading);
}

#[test]
fn list_phase_is_loading_before_any_call_completes() {
    let mut s = CollectionState::<Material>::default();
    assert_eq!(s.phase(), ListPhase::Loading);
    s.begin_refresh();
    assert_eq!(s.phase(), ListPhase::Loading);
}

#[test]
fn list_phase_is_unavailable_only_after_a_failed_call() {
    let mut s = CollectionState::<Material>::default();
    s.begin_refresh();
    s.finish_refresh(None);
    assert_eq!(s.phase(), ListPhase::Unavailable);

    s.begin_refresh();
    assert_eq!(s.phase(), ListPhase::Loading, "retry shows loading again");
    s.finish_refresh(Some(vec![beaker()]));
    assert_eq!(s.phase(), ListPhase::Ready);
}

#[test]
fn failed_refresh_after_success_stays_ready() {
    let mut s = CollectionState::default();
    s.begin_refresh();
    s.finish_refresh(Some(vec![beaker()]));
    s.begin_refresh();
    s.finish_refresh(None);
    assert_eq!(s.phase(), ListPhase::Ready);
}
