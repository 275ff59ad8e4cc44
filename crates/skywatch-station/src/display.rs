#![forbid(unsafe_code)]

//! Display device: owns one observer of each kind and renders their caches.
//!
//! # Invariants
//!
//! 1. The device is the sole owner of its three observers; subjects only
//!    ever hold non-owning registrations to them.
//! 2. `observer_list` returns handles to the **same** allocations on every
//!    call, in the fixed order {statistics, current, forecast}, so a later
//!    unregistration by identity matches the earlier registration.
//! 3. `render` mutates nothing; it reports whatever the most recent
//!    broadcast the observers took part in left behind, which may be stale
//!    if the device was deregistered.

use std::cell::RefCell;
use std::rc::Rc;

use skywatch_core::SharedObserver;

use crate::readings::Readings;
use crate::views::{CurrentObserver, Forecast, ForecastObserver, StatisticsObserver};

/// A console display bundling the three derived views.
#[derive(Debug, Default)]
pub struct DisplayDevice {
    statistics: Rc<RefCell<StatisticsObserver>>,
    current: Rc<RefCell<CurrentObserver>>,
    forecast: Rc<RefCell<ForecastObserver>>,
}

impl DisplayDevice {
    /// Create a device whose observers have unset caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shareable handles to the device's observers, for registration with a
    /// subject. Fixed order: statistics, current, forecast.
    #[must_use]
    pub fn observer_list(&self) -> Vec<SharedObserver<Readings>> {
        vec![
            Rc::clone(&self.statistics) as SharedObserver<Readings>,
            Rc::clone(&self.current) as SharedObserver<Readings>,
            Rc::clone(&self.forecast) as SharedObserver<Readings>,
        ]
    }

    /// The statistics observer's cached text.
    #[must_use]
    pub fn statistics(&self) -> Option<String> {
        self.statistics.borrow().statistics().map(str::to_owned)
    }

    /// The current-conditions observer's cached text.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.current.borrow().current().map(str::to_owned)
    }

    /// The forecast observer's cached classification.
    #[must_use]
    pub fn forecast(&self) -> Option<Forecast> {
        self.forecast.borrow().forecast()
    }

    /// The labeled report: each section heading on its own line, followed
    /// by the cached view (an empty line while unset).
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "STATISTICS:\n{}\nCURRENT:\n{}\nFORECAST:\n{}",
            self.statistics().unwrap_or_default(),
            self.current().unwrap_or_default(),
            self.forecast().map(Forecast::label).unwrap_or_default(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::station::WeatherStation;

    use super::*;

    #[test]
    fn observer_list_is_stable_across_calls() {
        let device = DisplayDevice::new();
        let first = device.observer_list();
        let second = device.observer_list();
        assert_eq!(first.len(), 3);
        for (a, b) in first.iter().zip(&second) {
            assert!(Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn render_before_any_broadcast_has_empty_sections() {
        let device = DisplayDevice::new();
        assert_eq!(device.render(), "STATISTICS:\n\nCURRENT:\n\nFORECAST:\n");
    }

    #[test]
    fn render_reflects_latest_broadcast() {
        let mut station = WeatherStation::new();
        let device = DisplayDevice::new();
        station.register_all(&device.observer_list());

        station.set_humidity(0.9);
        station.set_pressure(2.0);
        station.set_temperature(10.0);

        assert_eq!(
            device.render(),
            "STATISTICS:\nHum:0.900000\nTemp:10.000000\nPres:2.000000\n\
             CURRENT:\n2.690000\n\
             FORECAST:\nLibre"
        );
    }

    #[test]
    fn devices_keep_independent_caches() {
        let mut station = WeatherStation::new();
        let d1 = DisplayDevice::new();
        let d2 = DisplayDevice::new();
        station.register_all(&d1.observer_list());

        station.set_humidity(0.7);
        assert!(d1.statistics().is_some());
        assert_eq!(d2.statistics(), None);

        station.register_all(&d2.observer_list());
        station.set_humidity(0.8);
        assert_eq!(
            d1.statistics().as_deref(),
            Some("Hum:0.800000\nTemp:0.000000\nPres:0.000000")
        );
        assert_eq!(d1.statistics(), d2.statistics());
    }

    #[test]
    fn deregistered_device_renders_stale_state() {
        let mut station = WeatherStation::new();
        let device = DisplayDevice::new();
        station.register_all(&device.observer_list());

        station.set_humidity(0.9);
        station.unregister_all(&device.observer_list());
        station.set_humidity(0.99);

        assert_eq!(
            device.statistics().as_deref(),
            Some("Hum:0.900000\nTemp:0.000000\nPres:0.000000")
        );
    }
}
