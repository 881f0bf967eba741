//! Interactive tools driven by user input.
//!
//! ## Placement
//!
//! The only tool is die placement: scan for a surface, tap to place the die,
//! tap again to roll it, and reset to start over. Input arrives as mouse
//! clicks, touches, the on-screen reset button, or (native builds only)
//! keyboard shortcuts.
//!
//! ```text
//! Mouse/Touch/Keyboard
//!   └─> ScreenTapEvent / ResetRequestEvent
//!       └─> handle_screen_taps() / handle_reset_requests()
//!           └─> PlacementController
//!               ├─> EcsScene (nodes, bodies, actions)
//!               └─> DisplayState (status label, reset button)
//! ```

/// Die placement state machine, input handling and status UI.
pub mod placement;
