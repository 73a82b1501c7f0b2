use crate::config::toml_config::BirdsConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Console, Demo, SharedConsole};
use crate::utils::error::Result;

pub trait Bird {
    fn name(&self) -> &str;
}

pub trait Flyable {
    fn fly(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sparrow {
    pub name: String,
}

impl Sparrow {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Bird for Sparrow {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Flyable for Sparrow {
    fn fly(&self) -> String {
        format!("{} is flying.", self.name)
    }
}

/// A bird without the [`Flyable`] capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penguin {
    pub name: String,
}

impl Penguin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Bird for Penguin {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Prints the flight of a bird that can actually fly.
///
/// ```
/// use solid_principles::adapters::MemoryConsole;
/// use solid_principles::principles::liskov_substitution::after::{make_bird_fly, Sparrow};
///
/// let console = MemoryConsole::new();
/// make_bird_fly(&console, &Sparrow::new("Sparrow"));
/// assert_eq!(console.lines(), vec!["Sparrow is flying."]);
/// ```
///
/// Penguins are rejected at compile time:
///
/// ```compile_fail
/// use solid_principles::adapters::MemoryConsole;
/// use solid_principles::principles::liskov_substitution::after::{make_bird_fly, Penguin};
///
/// let console = MemoryConsole::new();
/// make_bird_fly(&console, &Penguin::new("Penguin"));
/// ```
pub fn make_bird_fly<B>(console: &dyn Console, bird: &B)
where
    B: Bird + Flyable + ?Sized,
{
    tracing::debug!("{} takes off", bird.name());
    console.print(&bird.fly());
}

pub struct BirdsDemo {
    config: BirdsConfig,
}

impl BirdsDemo {
    pub fn new(config: BirdsConfig) -> Self {
        Self { config }
    }
}

impl Demo for BirdsDemo {
    fn principle(&self) -> Principle {
        Principle::LiskovSubstitution
    }

    fn variant(&self) -> Variant {
        Variant::After
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let sparrow = Sparrow::new(self.config.flying.as_str());
        let penguin = Penguin::new(self.config.flightless.as_str());

        make_bird_fly(console.as_ref(), &sparrow);
        tracing::debug!("{} is not Flyable, so it is never asked to fly", penguin.name());

        Ok(())
    }
}
