use anyhow::Context;
use solid_principles::utils::logger;
use solid_principles::{run_example, Principle, Variant};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    run_example(Principle::LiskovSubstitution, Variant::After)
        .context("lsp_after example failed")
}
