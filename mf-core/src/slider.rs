//! Base-10 logarithmic sliders.
//!
//! A slider position `p` stands for the value `10^p`. Count-like thresholds
//! round that value to an integer once; the label and the request both read
//! the rounded value.

/// Range, step and starting position of a logarithmic slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Minimum number of meteors per bin.
pub const METEORS_SLIDER: LogSlider = LogSlider {
    min: -0.35,
    max: 3.0,
    step: 0.0001,
    // log10(50)
    default: 1.698_970_004_336_018_8,
};

/// Minimum effective collecting area per bin, in 10^3 km^2 h.
pub const ECA_SLIDER: LogSlider = LogSlider {
    min: -0.35,
    max: 3.0,
    step: 0.0001,
    // log10(20)
    default: 1.301_029_995_663_981_2,
};

/// Observation interval duration in hours (two handles).
pub const DURATION_SLIDER: LogSlider = LogSlider {
    min: -1.7,
    max: 3.38,
    step: 0.001,
    // log10(2); the upper handle starts at DURATION_UPPER_DEFAULT
    default: 0.301_029_995_663_981_2,
};

/// Starting position of the upper duration handle, log10(24) on the step
/// grid. Unsnapped it would sit right on the day boundary.
pub const DURATION_UPPER_DEFAULT: f64 = 1.38;

impl LogSlider {
    /// Clamp a position into range. Non-finite positions fall back to the default.
    pub fn clamp(&self, position: f64) -> f64 {
        if !position.is_finite() {
            return self.default;
        }
        position.clamp(self.min, self.max)
    }

    /// Clamp a position into range and snap it to the step grid, as the
    /// widget does while dragging.
    pub fn snap(&self, position: f64) -> f64 {
        let clamped = self.clamp(position);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Slider position showing `value`, for callers that start from a
    /// natural-unit value instead of a widget.
    pub fn position_for(&self, value: f64) -> f64 {
        if value <= 0.0 {
            return self.min;
        }
        self.snap(value.log10())
    }

    /// Raw slider value, `10^position`.
    pub fn value(&self, position: f64) -> f64 {
        10f64.powf(self.clamp(position))
    }

    /// Slider value rounded to the nearest integer.
    pub fn rounded(&self, position: f64) -> u64 {
        self.value(position).round() as u64
    }
}

/// Minimum meteor count for a slider position.
pub fn binarg_meteors(position: f64) -> u64 {
    METEORS_SLIDER.rounded(position)
}

/// ECA slider value for a position, in 10^3 km^2 h.
pub fn binarg_eca(position: f64) -> u64 {
    ECA_SLIDER.rounded(position)
}

/// Minimum ECA threshold, computed once from the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcaThreshold {
    /// Slider value in 10^3 km^2 h
    pub thousands: u64,
}

impl EcaThreshold {
    pub fn from_position(position: f64) -> Self {
        EcaThreshold {
            thousands: binarg_eca(position),
        }
    }

    /// The value sent to the service, in km^2 h.
    pub fn km2_hours(&self) -> u64 {
        self.thousands * 1000
    }

    pub fn label(&self) -> String {
        format!("{} km\u{b2} \u{b7} h", self.km2_hours())
    }
}
