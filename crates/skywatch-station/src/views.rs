#![forbid(unsafe_code)]

//! The three derived views a display device keeps over station broadcasts.
//!
//! Each observer caches exactly one value, `None` until its first
//! notification, and overwrites it wholesale on every broadcast. Text caches
//! use fixed six-decimal notation for scalars.

use skywatch_core::Observer;

use crate::readings::Readings;

/// Weight of pressure in the "current conditions" index.
const PRESSURE_WEIGHT: f64 = 0.8;
/// Weight of humidity in the "current conditions" index.
const HUMIDITY_WEIGHT: f64 = 0.1;
/// Weight of temperature in the "current conditions" index.
const TEMPERATURE_WEIGHT: f64 = 0.1;

/// Humidity above this, together with pressure above
/// [`RAIN_PRESSURE_FLOOR`], classifies as rain. Boundary excluded.
const RAIN_HUMIDITY_FLOOR: f64 = 0.95;
/// Pressure threshold for the rain classification. Boundary excluded.
const RAIN_PRESSURE_FLOOR: f64 = 1.0;

// ---------------------------------------------------------------------------
// Forecast classification
// ---------------------------------------------------------------------------

/// Binary forecast classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    /// High humidity and pressure: rain expected.
    Rain,
    /// Anything else.
    Clear,
}

impl Forecast {
    /// Classify a snapshot. Rain exactly when humidity > 0.95 and
    /// pressure > 1; both boundaries excluded.
    #[must_use]
    pub fn classify(readings: &Readings) -> Self {
        if readings.humidity() > RAIN_HUMIDITY_FLOOR && readings.pressure() > RAIN_PRESSURE_FLOOR {
            Self::Rain
        } else {
            Self::Clear
        }
    }

    /// Console label for this classification.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rain => "Lluvia",
            Self::Clear => "Libre",
        }
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Observer variants
// ---------------------------------------------------------------------------

/// Caches a formatted combination of all three current readings.
#[derive(Debug, Default)]
pub struct StatisticsObserver {
    statistics: Option<String>,
}

impl StatisticsObserver {
    /// Create an observer with an unset cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached statistics text; `None` before the first notification.
    #[must_use]
    pub fn statistics(&self) -> Option<&str> {
        self.statistics.as_deref()
    }
}

impl Observer<Readings> for StatisticsObserver {
    fn update(&mut self, view: &Readings) {
        self.statistics = Some(format!(
            "Hum:{:.6}\nTemp:{:.6}\nPres:{:.6}",
            view.humidity(),
            view.temperature(),
            view.pressure()
        ));
    }
}

/// Caches the weighted "current conditions" index.
#[derive(Debug, Default)]
pub struct CurrentObserver {
    current: Option<String>,
}

impl CurrentObserver {
    /// Create an observer with an unset cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached index text; `None` before the first notification.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Observer<Readings> for CurrentObserver {
    fn update(&mut self, view: &Readings) {
        let index = view.pressure() * PRESSURE_WEIGHT
            + view.humidity() * HUMIDITY_WEIGHT
            + view.temperature() * TEMPERATURE_WEIGHT;
        self.current = Some(format!("{index:.6}"));
    }
}

/// Caches the binary forecast classification.
#[derive(Debug, Default)]
pub struct ForecastObserver {
    forecast: Option<Forecast>,
}

impl ForecastObserver {
    /// Create an observer with an unset cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached classification; `None` before the first notification.
    #[must_use]
    pub fn forecast(&self) -> Option<Forecast> {
        self.forecast
    }
}

impl Observer<Readings> for ForecastObserver {
    fn update(&mut self, view: &Readings) {
        self.forecast = Some(Forecast::classify(view));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
