/// TilingLimits: accepted input ranges.
///
/// The defaults are the bounds the host UI puts on its input fields.
/// Hosts with wider fields build their own record.

/// Accepted ranges for `TilingRequest::validate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingLimits {
    /// Smallest accepted period (inclusive)
    pub min_period: i32,
    /// Largest accepted period (inclusive)
    pub max_period: i32,
    /// Largest accepted repetition count (inclusive). The minimum is always 1.
    pub max_repetition_count: u32,
    /// Smallest accepted elevation in degrees (inclusive)
    pub min_elevation_degrees: f64,
    /// Largest accepted elevation in degrees (inclusive)
    pub max_elevation_degrees: f64,
}

impl Default for TilingLimits {
    fn default() -> Self {
        Self {
            min_period: 1,
            max_period: 10,
            max_repetition_count: 10,
            min_elevation_degrees: 0.0,
            max_elevation_degrees: 90.0,
        }
    }
}

impl TilingLimits {
    /// Limits rejecting only what the solver cannot make sense of:
    /// the (0, 0) period pair, zero repetitions and non-finite elevation.
    pub fn unbounded() -> Self {
        Self {
            min_period: i32::MIN,
            max_period: i32::MAX,
            max_repetition_count: u32::MAX,
            min_elevation_degrees: f64::MIN,
            max_elevation_degrees: f64::MAX,
        }
    }

    pub fn accepts_period(&self, period: i32) -> bool {
        (self.min_period..=self.max_period).contains(&period)
    }

    pub fn accepts_repetition_count(&self, count: u32) -> bool {
        (1..=self.max_repetition_count).contains(&count)
    }

    pub fn accepts_elevation(&self, degrees: f64) -> bool {
        degrees.is_finite()
            && (self.min_elevation_degrees..=self.max_elevation_degrees).contains(&degrees)
    }
}
