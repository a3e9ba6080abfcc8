/// Exercise whose weight range is reported by default in workout statistics
pub const DEFAULT_TRACKED_EXERCISE: &str = "Bench Press";

/// Decimal precision for display of averages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
