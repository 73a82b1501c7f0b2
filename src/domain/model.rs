use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// Every principle, in SOLID order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "srp",
            Principle::OpenClosed => "ocp",
            Principle::LiskovSubstitution => "lsp",
            Principle::InterfaceSegregation => "isp",
            Principle::DependencyInversion => "dip",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        };
        f.write_str(name)
    }
}

/// Which side of an example pair: the violating design or the compliant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Before,
    After,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Before, Variant::After];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Before => f.write_str("before"),
            Variant::After => f.write_str("after"),
        }
    }
}

/// The ordered lines one example printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub principle: Principle,
    pub variant: Variant,
    pub lines: Vec<String>,
}
