use crate::config::DemoConfig;
use crate::core::{Demo, Principle, Variant};
use crate::principles::{
    dependency_inversion, interface_segregation, liskov_substitution, open_closed,
    single_responsibility,
};

/// Builds the example for one principle and variant from the given inputs.
pub fn build_demo(principle: Principle, variant: Variant, config: &DemoConfig) -> Box<dyn Demo> {
    match (principle, variant) {
        (Principle::SingleResponsibility, Variant::Before) => Box::new(
            single_responsibility::before::JournalDemo::new(config.journal.clone()),
        ),
        (Principle::SingleResponsibility, Variant::After) => Box::new(
            single_responsibility::after::JournalDemo::new(config.journal.clone()),
        ),
        (Principle::OpenClosed, Variant::Before) => Box::new(
            open_closed::before::CatalogDemo::new(config.catalog.clone()),
        ),
        (Principle::OpenClosed, Variant::After) => Box::new(
            open_closed::after::CatalogDemo::new(config.catalog.clone()),
        ),
        (Principle::LiskovSubstitution, Variant::Before) => Box::new(
            liskov_substitution::before::BirdsDemo::new(config.birds.clone()),
        ),
        (Principle::LiskovSubstitution, Variant::After) => Box::new(
            liskov_substitution::after::BirdsDemo::new(config.birds.clone()),
        ),
        (Principle::InterfaceSegregation, Variant::Before) => {
            Box::new(interface_segregation::before::OrdersDemo)
        }
        (Principle::InterfaceSegregation, Variant::After) => {
            Box::new(interface_segregation::after::OrdersDemo)
        }
        (Principle::DependencyInversion, Variant::Before) => Box::new(
            dependency_inversion::before::PaymentsDemo::new(config.payments.clone()),
        ),
        (Principle::DependencyInversion, Variant::After) => Box::new(
            dependency_inversion::after::PaymentsDemo::new(config.payments.clone()),
        ),
    }
}

/// Every requested combination, principle-major.
pub fn build_demos(
    principles: &[Principle],
    variants: &[Variant],
    config: &DemoConfig,
) -> Vec<Box<dyn Demo>> {
    principles
        .iter()
        .flat_map(|&principle| {
            variants
                .iter()
                .map(move |&variant| build_demo(principle, variant, config))
        })
        .collect()
}
