// Decorator Pattern: beverages and condiments
// Each condiment wraps a beverage and adds its own surcharge and label.

use crate::config::DecoratorConfig;
use crate::console::{self, Console};
use crate::error::PatternError;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

// ============================================================================
// Component
// ============================================================================

pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> Price;
}

impl fmt::Display for dyn Beverage + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}$", self.description(), self.cost())
    }
}

// ============================================================================
// Concrete beverages
// ============================================================================

macro_rules! base_beverage {
    ($name:ident, $description:literal, $minor:literal, $scale:literal) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub const PRICE: Price = Price::new($minor, $scale);
        }

        impl Beverage for $name {
            fn description(&self) -> String {
                $description.to_string()
            }

            fn cost(&self) -> Price {
                Self::PRICE
            }
        }
    };
}

base_beverage!(Espresso, "Espresso", 199, 2);
base_beverage!(HouseBlend, "House Blend Coffee", 89, 2);
base_beverage!(DarkRoast, "Dark Roast Coffee", 11, 1);
base_beverage!(Decaf, "Decaf Coffee", 55, 2);

// ============================================================================
// Decorators
// ============================================================================

/// Adds a fixed surcharge and a `", <name>"` suffix to the wrapped beverage.
pub struct Condiment {
    kind: CondimentKind,
    wrapped: Box<dyn Beverage>,
}

impl Condiment {
    pub fn wrap(kind: CondimentKind, wrapped: Box<dyn Beverage>) -> Self {
        Self { kind, wrapped }
    }

    pub fn kind(&self) -> CondimentKind {
        self.kind
    }

    pub fn wrapped(&self) -> &dyn Beverage {
        self.wrapped.as_ref()
    }
}

impl Beverage for Condiment {
    fn description(&self) -> String {
        format!("{}, {}", self.wrapped.description(), self.kind.name())
    }

    fn cost(&self) -> Price {
        self.wrapped.cost() + self.kind.surcharge()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CondimentKind {
    Mocha,
    Whip,
    Soy,
}

impl CondimentKind {
    pub fn name(self) -> &'static str {
        match self {
            CondimentKind::Mocha => "Mocha",
            CondimentKind::Whip => "Whip",
            CondimentKind::Soy => "Soy",
        }
    }

    pub fn surcharge(self) -> Price {
        match self {
            CondimentKind::Mocha => Price::new(35, 2),
            CondimentKind::Whip => Price::new(15, 2),
            CondimentKind::Soy => Price::new(7, 2),
        }
    }
}

pub fn mocha(beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
    Box::new(Condiment::wrap(CondimentKind::Mocha, beverage))
}

pub fn whip(beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
    Box::new(Condiment::wrap(CondimentKind::Whip, beverage))
}

pub fn soy(beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
    Box::new(Condiment::wrap(CondimentKind::Soy, beverage))
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseBeverage {
    Espresso,
    HouseBlend,
    DarkRoast,
    Decaf,
}

impl BaseBeverage {
    pub fn brew(self) -> Box<dyn Beverage> {
        match self {
            BaseBeverage::Espresso => Box::new(Espresso),
            BaseBeverage::HouseBlend => Box::new(HouseBlend),
            BaseBeverage::DarkRoast => Box::new(DarkRoast),
            BaseBeverage::Decaf => Box::new(Decaf),
        }
    }
}

/// Wraps `base` with each condiment in order; the first condiment ends up
/// innermost, so descriptions read in the order given.
pub fn prepare(base: BaseBeverage, condiments: &[CondimentKind]) -> Box<dyn Beverage> {
    condiments
        .iter()
        .fold(base.brew(), |beverage, &kind| -> Box<dyn Beverage> {
            Box::new(Condiment::wrap(kind, beverage))
        })
}

// ============================================================================
// Demo
// ============================================================================

pub fn run() -> Result<bool, PatternError> {
    run_with(&DecoratorConfig::default(), &console::stdout())
}

pub fn run_with(config: &DecoratorConfig, console: &Console) -> Result<bool, PatternError> {
    info!(base = ?config.base, condiments = config.condiments.len(), "decorator demo");
    let beverage = prepare(config.base, &config.condiments);
    debug!(cost = %beverage.cost(), "order prepared");
    console::emit(console, &*beverage)?;
    Ok(false)
}
