//! Prediction model and input configuration

/// Coefficients of the linear model used when the remote service is unavailable.
pub struct FallbackModel {
    pub intercept: f64,
    /// Dollars per gallon of gas sold
    pub fuel_volume_weight: f64,
    /// Dollars per dollar of lotto revenue
    pub lotto_revenue_weight: f64,
    /// Flat uplift applied on weekends
    pub weekend_weight: f64,
}

pub const FALLBACK_MODEL: FallbackModel = FallbackModel {
    intercept: 144.25678737,
    fuel_volume_weight: 1.26595992,
    lotto_revenue_weight: 2.15510668,
    weekend_weight: 116.73350928,
};

/// Slider bounds and step sizes for the input controls
pub struct InputLimits {
    pub fuel_volume_max: f64,
    pub lotto_revenue_max: f64,
    /// Increment used by the sliders and the +/- buttons
    pub step: f64,
    pub default_fuel_volume: f64,
    pub default_lotto_revenue: f64,
}

pub const INPUT_LIMITS: InputLimits = InputLimits {
    fuel_volume_max: 1000.0,
    lotto_revenue_max: 500.0,
    step: 10.0,
    default_fuel_volume: 500.0,
    default_lotto_revenue: 200.0,
};

/// Number of predictions kept in the session history
pub const HISTORY_CAPACITY: usize = 10;
