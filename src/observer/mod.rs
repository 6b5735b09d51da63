// Observer Pattern: weather station
// A subject keeps an ordered list of observer handles and pushes every new
// set of measurements to all of them, synchronously and in order.

pub mod displays;

pub use displays::{heat_index, CurrentConditionsDisplay, HeatIndexDisplay, StatisticsDisplay};

use crate::config::ObserverConfig;
use crate::console::{self, Console};
use crate::error::PatternError;
use crate::measurements::{MeasurementSource, RandomMeasurements};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, trace};

// ============================================================================
// Capabilities
// ============================================================================

pub trait Observer {
    fn update(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<(), PatternError>;
}

pub trait DisplayElement {
    fn display(&self) -> Result<(), PatternError>;
}

/// Shared handle to a registered observer. Two handles are equal when they
/// point at the same observer.
pub type ObserverHandle = Rc<RefCell<dyn Observer>>;

pub trait Subject {
    /// Appends `observer` and returns the position of its first entry.
    /// Registering the same handle twice is allowed.
    fn register_observer(&mut self, observer: ObserverHandle) -> usize;

    /// Removes the first entry for `observer`. Returns `false` if it was not
    /// registered.
    fn remove_observer(&mut self, observer: &ObserverHandle) -> bool;

    /// Updates every observer in registration order. The first failing
    /// observer stops the fan-out and its error is returned.
    fn notify_observers(&self) -> Result<(), PatternError>;
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct WeatherData {
    observers: Vec<ObserverHandle>,
    temperature: f32,
    humidity: f32,
    pressure: f32,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all three readings, then notifies observers.
    pub fn set_measurements(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<(), PatternError> {
        self.temperature = temperature;
        self.humidity = humidity;
        self.pressure = pressure;
        self.measurements_changed()
    }

    fn measurements_changed(&self) -> Result<(), PatternError> {
        self.notify_observers()
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn position_of(&self, observer: &ObserverHandle) -> Option<usize> {
        self.observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
    }
}

impl Subject for WeatherData {
    fn register_observer(&mut self, observer: ObserverHandle) -> usize {
        self.observers.push(observer);
        let last = self.observers.len() - 1;
        let position = self.position_of(&self.observers[last]).unwrap_or(last);
        debug!(position, total = self.observers.len(), "observer registered");
        position
    }

    fn remove_observer(&mut self, observer: &ObserverHandle) -> bool {
        match self.position_of(observer) {
            Some(position) => {
                self.observers.remove(position);
                debug!(position, total = self.observers.len(), "observer removed");
                true
            }
            None => {
                debug!("remove requested for unregistered observer");
                false
            }
        }
    }

    fn notify_observers(&self) -> Result<(), PatternError> {
        trace!(
            temperature = self.temperature,
            humidity = self.humidity,
            pressure = self.pressure,
            observers = self.observers.len(),
            "notifying observers"
        );
        for (position, observer) in self.observers.iter().enumerate() {
            let mut observer = observer
                .try_borrow_mut()
                .map_err(|_| PatternError::ObserverBusy { position })?;
            observer.update(self.temperature, self.humidity, self.pressure)?;
        }
        Ok(())
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run() -> Result<bool, PatternError> {
    let config = ObserverConfig::default();
    let mut source = RandomMeasurements::from_config(&config)?;
    run_with(&config, &mut source, &console::stdout())
}

pub fn run_with(
    config: &ObserverConfig,
    source: &mut dyn MeasurementSource,
    console: &Console,
) -> Result<bool, PatternError> {
    info!(iterations = config.iterations, "observer demo");
    let mut weather_data = WeatherData::new();
    let _current = CurrentConditionsDisplay::new(&mut weather_data, console.clone());
    let _statistics = StatisticsDisplay::new(&mut weather_data, console.clone());
    let _heat_index = HeatIndexDisplay::new(&mut weather_data, console.clone());

    for round in 0..config.iterations {
        let Some(measurement) = source.next_measurement() else {
            debug!(round, "measurement source exhausted");
            break;
        };
        weather_data.set_measurements(
            measurement.temperature,
            measurement.humidity,
            measurement.pressure,
        )?;
    }
    Ok(true)
}
