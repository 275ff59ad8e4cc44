//! End-to-end scenario: one station, two display devices, a mid-sequence
//! deregistration. Device 1 must keep the state it saw before being
//! removed; device 2 must follow the station all the way.

use pretty_assertions::assert_eq;
use skywatch_station::{DisplayDevice, Forecast, WeatherStation};

#[test]
fn two_devices_with_mid_sequence_deregistration() {
    let mut station = WeatherStation::new();
    let d1 = DisplayDevice::new();
    let d2 = DisplayDevice::new();
    station.register_all(&d1.observer_list());
    station.register_all(&d2.observer_list());
    assert_eq!(station.observer_count(), 6);

    station.set_humidity(0.90);
    station.set_pressure(2.0);
    station.set_temperature(10.0);
    assert_eq!(station.version(), 3);

    station.unregister_all(&d1.observer_list());
    assert_eq!(station.observer_count(), 3);

    station.set_humidity(0.99);

    // Device 1 froze at (h=0.90, t=10, p=2): humidity at or below the rain
    // floor, so the sky stays clear.
    assert_eq!(
        d1.statistics().as_deref(),
        Some("Hum:0.900000\nTemp:10.000000\nPres:2.000000")
    );
    assert_eq!(d1.current().as_deref(), Some("2.690000"));
    assert_eq!(d1.forecast(), Some(Forecast::Clear));

    // Device 2 followed to (h=0.99, t=10, p=2): rain.
    assert_eq!(
        d2.statistics().as_deref(),
        Some("Hum:0.990000\nTemp:10.000000\nPres:2.000000")
    );
    assert_eq!(d2.current().as_deref(), Some("2.699000"));
    assert_eq!(d2.forecast(), Some(Forecast::Rain));
}

#[test]
fn rendered_reports_match_cached_views() {
    let mut station = WeatherStation::new();
    let d1 = DisplayDevice::new();
    let d2 = DisplayDevice::new();
    station.register_all(&d1.observer_list());
    station.register_all(&d2.observer_list());

    station.set_humidity(0.90);
    station.set_pressure(2.0);
    station.set_temperature(10.0);
    station.unregister_all(&d1.observer_list());
    station.set_humidity(0.99);

    assert_eq!(
        d1.render(),
        "STATISTICS:\nHum:0.900000\nTemp:10.000000\nPres:2.000000\n\
         CURRENT:\n2.690000\n\
         FORECAST:\nLibre"
    );
    assert_eq!(
        d2.render(),
        "STATISTICS:\nHum:0.990000\nTemp:10.000000\nPres:2.000000\n\
         CURRENT:\n2.699000\n\
         FORECAST:\nLluvia"
    );
}

#[test]
fn reregistered_device_catches_up_on_next_broadcast() {
    let mut station = WeatherStation::new();
    let device = DisplayDevice::new();
    station.register_all(&device.observer_list());

    station.set_humidity(0.5);
    station.unregister_all(&device.observer_list());
    station.set_humidity(0.6);
    station.register_all(&device.observer_list());

    // Still stale: re-registration alone does not push state.
    assert_eq!(
        device.statistics().as_deref(),
        Some("Hum:0.500000\nTemp:0.000000\nPres:0.000000")
    );

    station.set_humidity(0.7);
    assert_eq!(
        device.statistics().as_deref(),
        Some("Hum:0.700000\nTemp:0.000000\nPres:0.000000")
    );
}
