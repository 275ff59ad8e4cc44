#![forbid(unsafe_code)]

//! The measurement station: a concrete broadcasting subject.
//!
//! # Invariants
//!
//! 1. Every setter assigns its field, then broadcasts exactly once.
//! 2. A broadcast carries the complete, fully-mutated three-field snapshot;
//!    observers never see a partially-applied state.
//! 3. Three setter calls are three independent broadcasts, never one
//!    batched broadcast.
//! 4. `version` increments by exactly 1 per setter call.
//! 5. Getters have no side effects.

use skywatch_core::{DispatchError, SharedObserver, Subject};
use tracing::debug;

use crate::readings::Readings;

/// Weather station holding three scalar measurements and the registry of
/// observers interested in them.
///
/// Registration operations delegate to the embedded [`Subject`]; the
/// underlying subject is also reachable through
/// [`observers`](Self::observers) / [`observers_mut`](Self::observers_mut)
/// for the strict dispatch path.
#[derive(Debug, Default)]
pub struct WeatherStation {
    readings: Readings,
    observers: Subject<Readings>,
    version: u64,
}

impl WeatherStation {
    /// Create a station with all measurements at 0.0 and no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- reads ------------------------------------------------------------

    /// Current snapshot of all three measurements.
    #[must_use]
    pub fn readings(&self) -> Readings {
        self.readings
    }

    /// Relative humidity.
    #[must_use]
    pub fn humidity(&self) -> f64 {
        self.readings.humidity
    }

    /// Temperature in degrees.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.readings.temperature
    }

    /// Barometric pressure in atmospheres.
    #[must_use]
    pub fn pressure(&self) -> f64 {
        self.readings.pressure
    }

    /// Broadcast sequence number: how many mutations this station has
    /// announced. Useful for dirty-checking.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    // ---- mutate-then-broadcast -------------------------------------------

    /// Set humidity and broadcast the new snapshot.
    pub fn set_humidity(&mut self, humidity: f64) {
        self.readings.humidity = humidity;
        debug!(humidity, "humidity updated");
        self.broadcast();
    }

    /// Set temperature and broadcast the new snapshot.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.readings.temperature = temperature;
        debug!(temperature, "temperature updated");
        self.broadcast();
    }

    /// Set pressure and broadcast the new snapshot.
    pub fn set_pressure(&mut self, pressure: f64) {
        self.readings.pressure = pressure;
        debug!(pressure, "pressure updated");
        self.broadcast();
    }

    fn broadcast(&mut self) {
        self.version += 1;
        let snapshot = self.readings;
        self.observers.notify(&snapshot);
    }

    // ---- registration ----------------------------------------------------

    /// Register one observer; it will receive every subsequent broadcast.
    pub fn register(&mut self, observer: &SharedObserver<Readings>) {
        self.observers.register(observer);
    }

    /// Register each observer in slice order.
    pub fn register_all(&mut self, observers: &[SharedObserver<Readings>]) {
        self.observers.register_all(observers);
    }

    /// Remove all registrations identical to `observer`.
    pub fn unregister(&mut self, observer: &SharedObserver<Readings>) {
        self.observers.unregister(observer);
    }

    /// Unregister each observer in turn.
    pub fn unregister_all(&mut self, observers: &[SharedObserver<Readings>]) {
        self.observers.unregister_all(observers);
    }

    /// Number of registrations, including stale ones not yet pruned.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.observer_count()
    }

    /// Strict re-broadcast of the current snapshot; fails without
    /// dispatching if any registration is stale.
    pub fn try_broadcast(&mut self) -> Result<usize, DispatchError> {
        let snapshot = self.readings;
        self.observers.try_notify(&snapshot)
    }

    /// Access the underlying subject.
    #[must_use]
    pub fn observers(&self) -> &Subject<Readings> {
        &self.observers
    }

    /// Mutably access the underlying subject.
    pub fn observers_mut(&mut self) -> &mut Subject<Readings> {
        &mut self.observers
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
