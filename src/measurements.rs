// Measurement sources that drive the weather station demo.

use crate::config::ObserverConfig;
use crate::error::PatternError;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use std::collections::VecDeque;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

pub trait MeasurementSource {
    /// Returns `None` once the source has nothing more to report.
    fn next_measurement(&mut self) -> Option<Measurement>;
}

/// Whole-number readings drawn independently per field from a
/// cryptographically secure generator.
pub struct RandomMeasurements<R = OsRng> {
    rng: R,
    range: Range<i32>,
}

impl RandomMeasurements<OsRng> {
    pub fn new(range: Range<i32>) -> Result<Self, PatternError> {
        Self::with_rng(OsRng, range)
    }

    pub fn from_config(config: &ObserverConfig) -> Result<Self, PatternError> {
        config.validate()?;
        Self::new(config.min_reading..config.max_reading)
    }
}

impl<R: RngCore + CryptoRng> RandomMeasurements<R> {
    pub fn with_rng(rng: R, range: Range<i32>) -> Result<Self, PatternError> {
        if range.is_empty() {
            return Err(PatternError::invalid_config(
                "measurement range",
                format!("{}..{} is empty", range.start, range.end),
            ));
        }
        Ok(Self { rng, range })
    }

    fn reading(&mut self) -> f32 {
        self.rng.gen_range(self.range.clone()) as f32
    }
}

impl<R: RngCore + CryptoRng> MeasurementSource for RandomMeasurements<R> {
    fn next_measurement(&mut self) -> Option<Measurement> {
        let temperature = self.reading();
        let humidity = self.reading();
        let pressure = self.reading();
        Some(Measurement::new(temperature, humidity, pressure))
    }
}

/// Replays a fixed list of measurements, then runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMeasurements {
    queue: VecDeque<Measurement>,
}

impl ScriptedMeasurements {
    pub fn new(measurements: impl IntoIterator<Item = Measurement>) -> Self {
        Self {
            queue: measurements.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MeasurementSource for ScriptedMeasurements {
    fn next_measurement(&mut self) -> Option<Measurement> {
        self.queue.pop_front()
    }
}
