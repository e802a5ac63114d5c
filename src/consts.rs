// VIEWPORT
pub const VIEWPORT_SCALE_MIN: f64 = 18.;
pub const VIEWPORT_SCALE_MAX: f64 = 200.;
/// Zoom change applied per Ctrl+wheel notch, in percentage points.
pub const VIEWPORT_ZOOM_WHEEL_STEP: f64 = 50.;
/// Percentage points subtracted after fit-to-viewport so the page clears the rulers.
pub const VIEWPORT_ZOOM_FIT_MARGIN: f64 = 3.;

// RULER
pub const RULER_MAJOR_TICK_INTERVAL: usize = 10;
pub const RULER_MID_TICK_INTERVAL: usize = 5;
/// Overdraw factor for the ruler strip below the zoom level where the page outgrows it.
pub const RULER_OVERDRAW_LOW_ZOOM: f64 = 1.1;
/// Extra page fraction kept drawable on the ruler strip at high zoom.
pub const RULER_OVERDRAW_PAGE_FRACTION: f64 = 0.1;
/// Zoom percent above which the ruler strip length follows the zoomed page size.
pub const RULER_OVERDRAW_ZOOM_THRESHOLD: f64 = 110.;

// SNAPPING
/// Snap tolerance in logical units per device pixel of `unit`, so sensitivity scales with zoom.
pub const SNAP_TOLERANCE_UNIT_FACTOR: f64 = 2.;
/// Sentinel for an axis with no snap match. A legitimate snap coordinate can be 0,
/// so "no match" must be a value outside the page.
pub const NO_SNAP: f64 = -1.;
/// Horizontal offset of sibling gap labels, in logical units per device pixel.
pub const SNAP_LABEL_OFFSET_X_FACTOR: f64 = 50.;
/// Vertical offset of sibling gap labels, in logical units per device pixel.
pub const SNAP_LABEL_OFFSET_Y_FACTOR: f64 = 18.;
