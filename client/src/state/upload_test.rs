use super::*;

#[test]
fn image_mime_types_are_accepted() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("image/jpeg"));
    assert!(is_image_mime("image/svg+xml"));
}

#[test]
fn non_image_mime_types_are_rejected() {
    assert!(!is_image_mime("text/plain"));
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime(""));
    assert!(!is_image_mime("video/image"));
}

#[test]
fn default_shows_drop_zone_without_preview() {
    let state = UploadState::default();
    assert!(state.shows_drop_zone());
    assert!(state.preview.is_none());
    assert_eq!(state.drop_zone_border(), DROP_IDLE_BORDER);
}

#[test]
fn drag_hover_highlights_border() {
    let state = UploadState { drag_hover: true, ..UploadState::default() };
    assert_eq!(state.drop_zone_border(), "#6366f1");
}

#[test]
fn accept_swaps_drop_zone_for_preview() {
    let mut state = UploadState { drag_hover: true, ..UploadState::default() };
    state.accept("data:image/png;base64,AAAA".to_owned());
    assert!(!state.shows_drop_zone());
    assert_eq!(state.preview.as_deref(), Some("data:image/png;base64,AAAA"));
    assert!(!state.drag_hover);
}

#[test]
fn admit_follows_mime_type() {
    let state = UploadState::default();
    assert!(state.admit("image/png"));
    assert!(!state.admit("text/plain"));
}

#[test]
fn rejected_file_leaves_drop_zone_unchanged() {
    let mut state = UploadState::default();
    let before = state.clone();
    if state.admit("text/plain") {
        state.accept("data:text/plain;base64,aGk=".to_owned());
    }
    assert_eq!(state, before);
    assert!(state.preview.is_none());
    assert!(state.shows_drop_zone());
}

#[test]
fn admitted_file_replaces_drop_zone() {
    let mut state = UploadState::default();
    if state.admit("image/jpeg") {
        state.accept("data:image/jpeg;base64,/9j/".to_owned());
    }
    assert!(!state.shows_drop_zone());
}
