// Strategy Pattern: ducks with swappable behaviors
// A duck owns one quack behavior and one fly behavior and delegates to
// whichever is installed at the time of the call.

use crate::console::{self, Console};
use crate::error::PatternError;
use tracing::{debug, info};

// ============================================================================
// Behaviors
// ============================================================================

pub trait QuackBehavior {
    fn quack(&self) -> &'static str;
}

pub trait FlyBehavior {
    fn fly(&self) -> &'static str;
}

pub struct Quacking;
impl QuackBehavior for Quacking {
    fn quack(&self) -> &'static str {
        "Quack"
    }
}

pub struct Squeak;
impl QuackBehavior for Squeak {
    fn quack(&self) -> &'static str {
        "Squeak"
    }
}

pub struct Silent;
impl QuackBehavior for Silent {
    fn quack(&self) -> &'static str {
        "Silent"
    }
}

pub struct FlyWithWings;
impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> &'static str {
        "Fly"
    }
}

pub struct FlyNoWay;
impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> &'static str {
        "No Fly"
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct Duck {
    name: &'static str,
    quack: Box<dyn QuackBehavior>,
    fly: Box<dyn FlyBehavior>,
    console: Console,
}

impl Duck {
    pub fn new(
        name: &'static str,
        quack: Box<dyn QuackBehavior>,
        fly: Box<dyn FlyBehavior>,
        console: Console,
    ) -> Self {
        Self {
            name,
            quack,
            fly,
            console,
        }
    }

    pub fn red_head(console: Console) -> Self {
        Self::new("red head duck", Box::new(Quacking), Box::new(FlyWithWings), console)
    }

    pub fn wooden(console: Console) -> Self {
        Self::new("wooden duck", Box::new(Silent), Box::new(FlyNoWay), console)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn quacking(&self) -> Result<(), PatternError> {
        console::emit(&self.console, self.quack.quack())
    }

    pub fn flying(&self) -> Result<(), PatternError> {
        console::emit(&self.console, self.fly.fly())
    }

    pub fn change_fly(&mut self, fly: Box<dyn FlyBehavior>) {
        debug!(duck = self.name, from = self.fly.fly(), to = fly.fly(), "fly behavior changed");
        self.fly = fly;
    }

    pub fn change_quack(&mut self, quack: Box<dyn QuackBehavior>) {
        debug!(
            duck = self.name,
            from = self.quack.quack(),
            to = quack.quack(),
            "quack behavior changed"
        );
        self.quack = quack;
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run() -> Result<bool, PatternError> {
    run_with(&console::stdout())
}

pub fn run_with(console: &Console) -> Result<bool, PatternError> {
    info!("strategy demo");
    let mut wooden_duck = Duck::wooden(console.clone());
    let red_head_duck = Duck::red_head(console.clone());

    wooden_duck.flying()?;
    wooden_duck.change_fly(Box::new(FlyWithWings));
    wooden_duck.flying()?;
    red_head_duck.quacking()?;
    Ok(true)
}
