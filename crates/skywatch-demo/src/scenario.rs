//! The demonstration scenario: two display devices follow one station,
//! device 1 drops out halfway through.

use tracing::info;

use skywatch_station::{DisplayDevice, WeatherStation};

/// Run the scenario and return the console report.
pub fn run() -> String {
    let mut station = WeatherStation::new();
    let d1 = DisplayDevice::new();
    let d2 = DisplayDevice::new();

    station.register_all(&d1.observer_list());
    station.register_all(&d2.observer_list());
    info!(observers = station.observer_count(), "devices registered");

    station.set_humidity(0.90);
    station.set_pressure(2.0);
    station.set_temperature(10.0);

    station.unregister_all(&d1.observer_list());
    info!(observers = station.observer_count(), "device 1 deregistered");

    station.set_humidity(0.99);

    let mut report = String::new();
    report.push_str("DEVICE 1\n");
    report.push_str(&d1.render());
    report.push_str("\n--------\n");
    report.push_str("DEVICE 2\n");
    report.push_str(&d2.render());
    report.push_str("\n--------\n");
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
