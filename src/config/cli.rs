use crate::domain::model::{Principle, Variant};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "solid")]
#[command(about = "Before/after examples of the five SOLID principles")]
pub struct CliConfig {
    /// Principle to demonstrate
    #[arg(value_enum, default_value = "all")]
    pub principle: PrincipleArg,

    /// Which side of each example pair to run
    #[arg(long, value_enum, default_value = "both")]
    pub variant: VariantArg,

    /// Path to a TOML file overriding the example inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print transcripts as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrincipleArg {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
    All,
}

impl PrincipleArg {
    pub fn principles(&self) -> Vec<Principle> {
        match self {
            PrincipleArg::Srp => vec![Principle::SingleResponsibility],
            PrincipleArg::Ocp => vec![Principle::OpenClosed],
            PrincipleArg::Lsp => vec![Principle::LiskovSubstitution],
            PrincipleArg::Isp => vec![Principle::InterfaceSegregation],
            PrincipleArg::Dip => vec![Principle::DependencyInversion],
            PrincipleArg::All => Principle::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Before,
    After,
    Both,
}

impl VariantArg {
    pub fn variants(&self) -> Vec<Variant> {
        match self {
            VariantArg::Before => vec![Variant::Before],
            VariantArg::After => vec![Variant::After],
            VariantArg::Both => Variant::ALL.to_vec(),
        }
    }
}
