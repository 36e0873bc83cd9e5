//! Console constants and tuning parameters.

// --- Timing ---

/// Motion tick rate (Hz). One registry advance per second.
pub const TICK_RATE: u32 = 1;

// --- World grid ---

/// Lower bound of the normalized tactical grid, both axes.
pub const WORLD_MIN: f64 = 0.0;

/// Upper bound of the normalized tactical grid, both axes.
pub const WORLD_MAX: f64 = 100.0;

/// Grid centre along each axis.
pub const WORLD_CENTRE: f64 = 50.0;

// --- Trails ---

/// Maximum number of retained trail points per target. Oldest points are
/// evicted first once the capacity is reached.
pub const TRAIL_CAPACITY: usize = 30;

// --- Viewport ---

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 5.0;

/// Multiplier applied per wheel notch toward zoom-in. Repeated notches
/// compound multiplicatively.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Multiplier applied per wheel notch toward zoom-out.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Absolute zoom change per on-screen zoom button press.
pub const ZOOM_STEP: f64 = 0.2;

// --- Pointer interaction ---

/// Pointer travel (pixels) below which a press/release pair still resolves
/// as a click rather than a pan gesture.
pub const DRAG_CLICK_THRESHOLD_PX: f64 = 4.0;

/// Hit radius of a marker at zoom 1, before marker scaling.
pub const MARKER_HIT_RADIUS_PX: f64 = 12.0;

// --- Motion model ---

/// Speed never decays below this floor once a target is moving (km/h).
pub const SPEED_FLOOR_KMH: f64 = 5.0;

/// Per-tick speed random-walk magnitude (km/h, symmetric).
pub const SPEED_JITTER_KMH: f64 = 4.0;

/// Per-tick heading random-walk magnitude (degrees, symmetric).
pub const HEADING_JITTER_DEG: f64 = 7.5;

/// Per-tick latitude/longitude drift magnitude (degrees, symmetric).
pub const GEO_JITTER_DEG: f64 = 0.005;

// --- Path oscillator ranges (rolled per target at spawn) ---

/// Minimum east-west oscillation amplitude (grid units).
pub const PATH_AMP_X_MIN: f64 = 20.0;

/// Maximum east-west oscillation amplitude (grid units).
/// Keeps the path inside the grid: 50 + 40 = 90 < 100.
pub const PATH_AMP_X_MAX: f64 = 40.0;

/// Minimum north-south oscillation amplitude (grid units).
pub const PATH_AMP_Y_MIN: f64 = 8.0;

/// Maximum north-south oscillation amplitude (grid units).
pub const PATH_AMP_Y_MAX: f64 = 22.0;

/// Minimum oscillation period (seconds).
pub const PATH_PERIOD_MIN_SECS: f64 = 18.0;

/// Maximum oscillation period (seconds).
pub const PATH_PERIOD_MAX_SECS: f64 = 42.0;
