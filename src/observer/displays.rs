// Display elements that observe the weather station.

use super::{DisplayElement, Observer, ObserverHandle, Subject};
use crate::console::{self, Console};
use crate::error::PatternError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

fn register<S, O>(subject: &mut S, observer: O) -> Rc<RefCell<O>>
where
    S: Subject + ?Sized,
    O: Observer + 'static,
{
    let observer = Rc::new(RefCell::new(observer));
    let handle: ObserverHandle = observer.clone();
    subject.register_observer(handle);
    observer
}

// ============================================================================
// Current conditions
// ============================================================================

pub struct CurrentConditionsDisplay {
    temperature: f32,
    humidity: f32,
    console: Console,
}

impl CurrentConditionsDisplay {
    /// Creates the display and registers it with `subject`.
    pub fn new<S: Subject + ?Sized>(subject: &mut S, console: Console) -> Rc<RefCell<Self>> {
        register(
            subject,
            Self {
                temperature: 0.0,
                humidity: 0.0,
                console,
            },
        )
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(
        &mut self,
        temperature: f32,
        humidity: f32,
        _pressure: f32,
    ) -> Result<(), PatternError> {
        self.temperature = temperature;
        self.humidity = humidity;
        self.display()
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) -> Result<(), PatternError> {
        console::emit(&self.console, self)
    }
}

impl fmt::Display for CurrentConditionsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current conditions: {}F degrees and {}% humidity",
            self.temperature, self.humidity
        )
    }
}

// ============================================================================
// Statistics
// ============================================================================

pub struct StatisticsDisplay {
    max_temperature: f32,
    min_temperature: f32,
    avg_temperature: f32,
    num_changes: u32,
    console: Console,
}

impl StatisticsDisplay {
    /// Creates the display and registers it with `subject`.
    pub fn new<S: Subject + ?Sized>(subject: &mut S, console: Console) -> Rc<RefCell<Self>> {
        register(subject, Self::detached(console))
    }

    fn detached(console: Console) -> Self {
        Self {
            max_temperature: 0.0,
            min_temperature: f32::INFINITY,
            avg_temperature: 0.0,
            num_changes: 0,
            console,
        }
    }

    pub fn max_temperature(&self) -> f32 {
        self.max_temperature
    }

    pub fn min_temperature(&self) -> f32 {
        self.min_temperature
    }

    pub fn avg_temperature(&self) -> f32 {
        self.avg_temperature
    }

    pub fn num_changes(&self) -> u32 {
        self.num_changes
    }
}

impl Observer for StatisticsDisplay {
    fn update(
        &mut self,
        temperature: f32,
        _humidity: f32,
        _pressure: f32,
    ) -> Result<(), PatternError> {
        let count = self
            .num_changes
            .checked_add(1)
            .ok_or_else(|| {
                PatternError::observer_failed("statistics", "update counter overflowed")
            })?;

        if temperature > self.max_temperature {
            self.max_temperature = temperature;
        }
        if temperature < self.min_temperature {
            self.min_temperature = temperature;
        }
        self.num_changes = count;
        self.avg_temperature =
            (self.avg_temperature * (count - 1) as f32 + temperature) / count as f32;
        self.display()
    }
}

impl DisplayElement for StatisticsDisplay {
    fn display(&self) -> Result<(), PatternError> {
        console::emit(&self.console, self)
    }
}

impl fmt::Display for StatisticsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Avg/Max/Min temperature = {}/{}/{}",
            self.avg_temperature, self.max_temperature, self.min_temperature
        )
    }
}

// ============================================================================
// Heat index
// ============================================================================

/// Heat index (°F) from air temperature (°F) and relative humidity (%),
/// using the 16-term empirical polynomial approximation.
pub fn heat_index(temperature: f32, humidity: f32) -> f64 {
    let t = f64::from(temperature);
    let rh = f64::from(humidity);
    16.923 + 1.85212 * 10f64.powi(-1) * t + 5.37941 * rh
        - 1.00254 * 10f64.powi(-1) * t * rh
        + 9.41695 * 10f64.powi(-3) * t.powi(2)
        + 7.28898 * 10f64.powi(-3) * rh.powi(2)
        + 3.45372 * 10f64.powi(-4) * t.powi(2) * rh
        - 8.14971 * 10f64.powi(-4) * t * rh.powi(2)
        + 1.02102 * 10f64.powi(-5) * t.powi(2) * rh.powi(2)
        - 3.8646 * 10f64.powi(-5) * t.powi(3)
        + 2.91583 * 10f64.powi(-5) * rh.powi(3)
        + 1.42721 * 10f64.powi(-6) * t.powi(3) * rh
        + 1.97483 * 10f64.powi(-7) * t * rh.powi(3)
        - 2.18429 * 10f64.powi(-8) * t.powi(3) * rh.powi(2)
        + 8.43296 * 10f64.powi(-10) * t.powi(2) * rh.powi(3)
        - 4.81975 * 10f64.powi(-11) * t.powi(3) * rh.powi(3)
}

pub struct HeatIndexDisplay {
    temperature: f32,
    humidity: f32,
    heat_index: f64,
    console: Console,
}

impl HeatIndexDisplay {
    /// Creates the display and registers it with `subject`.
    pub fn new<S: Subject + ?Sized>(subject: &mut S, console: Console) -> Rc<RefCell<Self>> {
        register(
            subject,
            Self {
                temperature: 0.0,
                humidity: 0.0,
                heat_index: 0.0,
                console,
            },
        )
    }

    pub fn heat_index(&self) -> f64 {
        self.heat_index
    }
}

impl Observer for HeatIndexDisplay {
    fn update(
        &mut self,
        temperature: f32,
        humidity: f32,
        _pressure: f32,
    ) -> Result<(), PatternError> {
        self.temperature = temperature;
        self.humidity = humidity;
        self.heat_index = heat_index(self.temperature, self.humidity);
        self.display()
    }
}

impl DisplayElement for HeatIndexDisplay {
    fn display(&self) -> Result<(), PatternError> {
        console::emit(&self.console, self)
    }
}

impl fmt::Display for HeatIndexDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HeatIndex: {}", self.heat_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::CapturedOutput;
    use crate::observer::WeatherData;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_current_conditions_line() {
        let captured = CapturedOutput::new();
        let mut weather_data = WeatherData::new();
        let _display = CurrentConditionsDisplay::new(&mut weather_data, captured.console());

        weather_data.set_measurements(80.0, 65.0, 30.4).unwrap();
        weather_data.set_measurements(-3.5, 12.0, 30.4).unwrap();

        assert_eq!(
            captured.lines(),
            vec![
                "Current conditions: 80F degrees and 65% humidity",
                "Current conditions: -3.5F degrees and 12% humidity",
            ]
        );
    }

    #[test]
    fn test_statistics_running_values() {
        let captured = CapturedOutput::new();
        let mut weather_data = WeatherData::new();
        let stats = StatisticsDisplay::new(&mut weather_data, captured.console());

        weather_data.set_measurements(10.0, 0.0, 0.0).unwrap();
        assert_eq!(stats.borrow().avg_temperature(), 10.0);

        weather_data.set_measurements(90.0, 0.0, 0.0).unwrap();
        assert_eq!(stats.borrow().avg_temperature(), 50.0);

        weather_data.set_measurements(50.0, 0.0, 0.0).unwrap();
        let stats = stats.borrow();
        assert_eq!(stats.avg_temperature(), 50.0);
        assert_eq!(stats.max_temperature(), 90.0);
        assert_eq!(stats.min_temperature(), 10.0);
        assert_eq!(stats.num_changes(), 3);

        assert_eq!(
            captured.lines(),
            vec![
                "Avg/Max/Min temperature = 10/10/10",
                "Avg/Max/Min temperature = 50/90/10",
                "Avg/Max/Min temperature = 50/90/10",
            ]
        );
    }

    #[test]
    fn test_statistics_max_starts_at_zero() {
        let captured = CapturedOutput::new();
        let mut weather_data = WeatherData::new();
        let stats = StatisticsDisplay::new(&mut weather_data, captured.console());

        weather_data.set_measurements(-20.0, 0.0, 0.0).unwrap();

        assert_eq!(stats.borrow().max_temperature(), 0.0);
        assert_eq!(stats.borrow().min_temperature(), -20.0);
        assert_eq!(captured.lines(), vec!["Avg/Max/Min temperature = -20/0/-20"]);
    }

    #[test]
    fn test_statistics_counter_overflow() {
        let captured = CapturedOutput::new();
        let mut stats = StatisticsDisplay::detached(captured.console());
        stats.num_changes = u32::MAX;

        let err = stats.update(1.0, 0.0, 0.0).unwrap_err();

        assert!(matches!(err, PatternError::ObserverFailed { observer: "statistics", .. }));
        assert_eq!(stats.num_changes(), u32::MAX);
        assert!(captured.contents().is_empty());
    }

    #[test]
    fn test_heat_index_regression() {
        assert_close(heat_index(80.0, 65.0), 82.955_350_637_099_93);
        assert_close(heat_index(90.0, 50.0), 95.551_556_512_500_01);
        assert_close(heat_index(1.0, 1.0), 22.403_606_657_145_197);
        assert_close(heat_index(99.0, 99.0), 175.882_563_405_235_94);
        assert_close(heat_index(0.0, 0.0), 16.923);
    }

    #[test]
    fn test_heat_index_display() {
        let captured = CapturedOutput::new();
        let mut weather_data = WeatherData::new();
        let display = HeatIndexDisplay::new(&mut weather_data, captured.console());

        weather_data.set_measurements(0.0, 0.0, 1013.0).unwrap();

        assert_eq!(display.borrow().heat_index(), 16.923);
        assert_eq!(captured.lines(), vec!["HeatIndex: 16.923"]);
    }

    #[test]
    fn test_pressure_is_ignored() {
        let captured = CapturedOutput::new();
        let mut weather_data = WeatherData::new();
        let _display = CurrentConditionsDisplay::new(&mut weather_data, captured.console());
        weather_data.set_measurements(70.0, 30.0, 1.0).unwrap();
        weather_data.set_measurements(70.0, 30.0, 2000.0).unwrap();

        let lines = captured.lines();
        assert_eq!(lines[0], lines[1]);
    }

    proptest! {
        #[test]
        fn test_heat_index_is_pure(t in -40.0f32..130.0, h in 0.0f32..100.0) {
            prop_assert_eq!(heat_index(t, h).to_bits(), heat_index(t, h).to_bits());
        }

        #[test]
        fn test_running_mean_matches_batch_mean(temps in prop::collection::vec(1i32..100, 1..50)) {
            let captured = CapturedOutput::new();
            let mut stats = StatisticsDisplay::detached(captured.console());
            for &t in &temps {
                stats.update(t as f32, 0.0, 0.0).unwrap();
            }

            let mean = temps.iter().map(|&t| f64::from(t)).sum::<f64>() / temps.len() as f64;
            prop_assert!((f64::from(stats.avg_temperature()) - mean).abs() < 1e-2);
            prop_assert_eq!(stats.max_temperature(), *temps.iter().max().unwrap() as f32);
            prop_assert_eq!(stats.min_temperature(), *temps.iter().min().unwrap() as f32);
            prop_assert_eq!(stats.num_changes() as usize, temps.len());
        }
    }
}
