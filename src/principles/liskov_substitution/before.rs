use crate::config::toml_config::BirdsConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Console, Demo, SharedConsole};
use crate::utils::error::Result;

/// Every bird is assumed to fly.
pub trait Bird {
    fn name(&self) -> &str;

    fn fly(&self) -> String {
        format!("{} is flying.", self.name())
    }
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

    // Forced override: the substitute no longer honors what `fly` promises.
    fn fly(&self) -> String {
        format!("{} cannot fly.", self.name)
    }
}

pub fn make_bird_fly(console: &dyn Console, bird: &dyn Bird) {
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
        Variant::Before
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let sparrow = Sparrow::new(self.config.flying.as_str());
        let penguin = Penguin::new(self.config.flightless.as_str());

        make_bird_fly(console.as_ref(), &sparrow);
        make_bird_fly(console.as_ref(), &penguin);

        Ok(())
    }
}
