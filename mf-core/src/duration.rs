//! Observation interval durations.
//!
//! The duration slider works in log10(hours). A duration falls into one of
//! four tiers which decide both its rounding and how it is labelled. The
//! tier and the rounded value are computed once, so the label and the
//! request can never disagree.

/// Rounding/presentation tier of a duration.
///
/// Lower bounds are inclusive, upper bounds exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationTier {
    /// `hours < 1.01`, whole minutes
    Minutes,
    /// `1.01 <= hours < 12`, one decimal
    TenthHours,
    /// `12 <= hours < 24`, whole hours
    WholeHours,
    /// `hours >= 24`, whole days
    Days,
}

impl DurationTier {
    pub fn for_hours(hours: f64) -> Self {
        if hours < 1.01 {
            DurationTier::Minutes
        } else if hours < 12.0 {
            DurationTier::TenthHours
        } else if hours < 24.0 {
            DurationTier::WholeHours
        } else {
            DurationTier::Days
        }
    }
}

/// A duration as selected on the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalDuration {
    tier: DurationTier,
    hours: f64,
}

impl IntervalDuration {
    /// Duration for a slider position `d`, i.e. `10^d` hours.
    pub fn from_log10(d: f64) -> Self {
        Self::from_hours(10f64.powf(d))
    }

    pub fn from_hours(hours: f64) -> Self {
        IntervalDuration {
            tier: DurationTier::for_hours(hours),
            hours,
        }
    }

    pub fn tier(&self) -> DurationTier {
        self.tier
    }

    /// Hours after the tier's rounding.
    pub fn rounded_hours(&self) -> f64 {
        let h = self.hours;
        match self.tier {
            DurationTier::Minutes => (h * 60.0).round() / 60.0,
            DurationTier::TenthHours => (h * 10.0).round() / 10.0,
            DurationTier::WholeHours => h.round(),
            DurationTier::Days => (h / 24.0).round() * 24.0,
        }
    }

    /// The value sent as `min_interval`/`max_interval`.
    pub fn request_value(&self) -> String {
        let rounded = self.rounded_hours();
        match self.tier {
            DurationTier::Minutes | DurationTier::Days => format!("{}", rounded),
            DurationTier::TenthHours => format!("{:.1}", rounded),
            DurationTier::WholeHours => format!("{:.0}", rounded),
        }
    }

    /// The label shown next to the slider.
    pub fn label(&self) -> String {
        let rounded = self.rounded_hours();
        match self.tier {
            DurationTier::Minutes => format!("{} mins", (rounded * 60.0).round() as u64),
            DurationTier::TenthHours => format!("{:.1} hours", rounded),
            DurationTier::WholeHours => format!("{:.0} hours", rounded),
            DurationTier::Days => format!("{} days", (rounded / 24.0).round() as u64),
        }
    }
}

/// Hours value for the request at slider position `d`.
pub fn duration_to_hours(d: f64) -> String {
    IntervalDuration::from_log10(d).request_value()
}

/// Label for slider position `d`.
pub fn format_duration(d: f64) -> String {
    IntervalDuration::from_log10(d).label()
}

/// The two handles of the duration range slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalRange {
    pub lower: IntervalDuration,
    pub upper: IntervalDuration,
}

impl IntervalRange {
    pub fn from_positions(lower: f64, upper: f64) -> Self {
        IntervalRange {
            lower: IntervalDuration::from_log10(lower),
            upper: IntervalDuration::from_log10(upper),
        }
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.lower.label(), self.upper.label())
    }
}
