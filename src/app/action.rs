use crate::domain::error::OverlayError;
use crate::overlay::{EditOp, OverlayKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Overlay lifecycle ---
    MountOverlay,  // Host view is drawn; the bar can now be shown
    ToggleOverlay, // Global shortcut
    HideOverlay,   // Esc while the bar is open

    // --- Overlay input ---
    OverlayKey(OverlayKey),        // Up / Down / Enter
    EditInput(EditOp),             // Anything that edits the text field
    SelectSuggestion(usize),       // Click on a suggestion row
    HoverSuggestion(Option<usize>), // Pointer over a suggestion row
    Submit,                        // Click on the "Go" button

    // --- Async Results ---
    SuggestionsLoaded {
        generation: u64,
        query: String,
        result: Result<Vec<String>, OverlayError>,
    },
    PreferenceChanged,                           // Preference file was touched
    NavigationCompleted(Result<String, String>), // Opener finished
}
