#![forbid(unsafe_code)]

//! The snapshot view a station broadcasts to its observers.

/// One consistent snapshot of the station's three measurements.
///
/// This is the view handed to `Observer::update`, borrowed for the duration
/// of the call. Observers that need history copy the scalars out. All fields
/// default to 0.0; setters accept any finite value without validation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readings {
    pub(crate) humidity: f64,
    pub(crate) temperature: f64,
    pub(crate) pressure: f64,
}

impl Readings {
    /// Build a snapshot from explicit values.
    #[must_use]
    pub fn new(humidity: f64, temperature: f64, pressure: f64) -> Self {
        Self {
            humidity,
            temperature,
            pressure,
        }
    }

    /// Relative humidity, typically in `0.0..=1.0`.
    #[must_use]
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Temperature in degrees.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Barometric pressure in atmospheres.
    #[must_use]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero() {
        let readings = Readings::default();
        assert_eq!(readings.humidity(), 0.0);
        assert_eq!(readings.temperature(), 0.0);
        assert_eq!(readings.pressure(), 0.0);
    }

    #[test]
    fn accessors_return_constructed_values() {
        let readings = Readings::new(0.9, 10.0, 2.0);
        assert_eq!(readings.humidity(), 0.9);
        assert_eq!(readings.temperature(), 10.0);
        assert_eq!(readings.pressure(), 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_flat_object() {
        let readings = Readings::new(0.9, 10.0, 2.0);
        let value = serde_json::to_value(readings).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "humidity": 0.9,
                "temperature": 10.0,
                "pressure": 2.0,
            })
        );
    }
}
