/// Status text shown while no surface has been found.
pub const STATUS_SCANNING: &str = "Scanning please wait...";

/// Status text shown once a surface is tracked.
pub const STATUS_TAP_TO_PLACE: &str = "Please tap to select a spot";

/// Label on the reset button.
pub const RESET_BUTTON_LABEL: &str = "Reset";
