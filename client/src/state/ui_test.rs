use super::*;

#[test]
fn ui_state_default_title() {
    assert_eq!(UiState::default().header_title, "Stockroom");
}

#[test]
fn set_title_replaces_header() {
    let mut state = UiState::default();
    state.set_title("Chemicals");
    assert_eq!(state.header_title, "Chemicals");
}

#[test]
fn blank_title_falls_back_to_default() {
    let mut state = UiState::default();
    state.set_title("Chemicals");
    state.set_title("   ");
    assert_eq!(state.header_title, DEFAULT_TITLE);
}
