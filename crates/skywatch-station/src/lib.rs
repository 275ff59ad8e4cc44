#![forbid(unsafe_code)]

//! Measurement station, derived views, and display devices for skywatch.
//!
//! # Role in skywatch
//! This crate is the concrete publisher/consumer pair built on the
//! `skywatch-core` engine:
//!
//! - [`WeatherStation`]: holds humidity, temperature, and pressure and
//!   broadcasts a [`Readings`] snapshot after every mutation.
//! - [`StatisticsObserver`], [`CurrentObserver`], [`ForecastObserver`]:
//!   the derived views, each caching one value recomputed per broadcast.
//! - [`DisplayDevice`]: owns one observer of each kind and renders their
//!   cached views as a labeled console report.
//!
//! The station never owns an observer; display devices never reference a
//! station. The only coupling is the transient `&Readings` view each
//! broadcast hands to `update`.

pub mod display;
pub mod readings;
pub mod station;
pub mod views;

pub use display::DisplayDevice;
pub use readings::Readings;
pub use station::WeatherStation;
pub use views::{CurrentObserver, Forecast, ForecastObserver, StatisticsObserver};
