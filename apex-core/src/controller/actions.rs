//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! Defines the `Action` enum, which represents all user inputs and internal
//! events the application responds to. Raw terminal events are mapped onto
//! these by the `Controller` before anything touches application state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// A terminal resize event.
    Resize(u16, u16),
    /// Periodic tick for notification expiry.
    Tick,

    MoveSelectionUp,
    MoveSelectionDown,
    PageUp,
    PageDown,

    /// Open the detail page for the selected predator.
    OpenDetail,
    ScrollDetailUp,
    ScrollDetailDown,

    /// Close the currently active overlay.
    CloseOverlay,
    ToggleHelp,
    DismissNotification,

    /// Start editing the search text.
    EnterSearch,
    SearchInput(char),
    SearchBackspace,
    /// Keep the search text and leave search mode.
    SubmitSearch,
    /// Drop the search text and leave search mode.
    ClearSearch,

    /// Flip between id order and alphabetical order.
    ToggleSort,

    OpenFilterMenu,
    FilterMenuUp,
    FilterMenuDown,
    ApplyFilterSelection,
    /// Back to the unfiltered catalog.
    ResetFilter,

    /// Ask to delete the focused predator.
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}
