use super::{print_products, Color, Product, Size};
use crate::config::toml_config::CatalogConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::Result;

/// A single filtering condition over `T`.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;

    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    pub color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    pub size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Satisfied only when both inner specifications are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

pub trait Filter<T> {
    /// Items satisfying `spec`, in input order.
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl Filter<Product> for ProductFilter {
    fn filter<'a, S>(&self, items: &'a [Product], spec: &S) -> Vec<&'a Product>
    where
        S: Specification<Product> + ?Sized,
    {
        items.iter().filter(|item| spec.is_satisfied(*item)).collect()
    }
}

pub struct CatalogDemo {
    config: CatalogConfig,
}

impl CatalogDemo {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

impl Demo for CatalogDemo {
    fn principle(&self) -> Principle {
        Principle::OpenClosed
    }

    fn variant(&self) -> Variant {
        Variant::After
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let products = &self.config.products;
        let color = self.config.color;
        let size = self.config.size;
        let combined_color = self.config.combined_color;
        let combined_size = self.config.combined_size;
        print_products(console.as_ref(), "All products:", products);

        let filter = ProductFilter;

        let color_spec = ColorSpecification::new(color);
        let by_color = filter.filter(products, &color_spec);
        tracing::debug!("{} product(s) matched color {}", by_color.len(), color);
        console.blank_line();
        print_products(
            console.as_ref(),
            &format!("All {} products:", color),
            by_color,
        );

        let size_spec = SizeSpecification::new(size);
        let by_size = filter.filter(products, &size_spec);
        tracing::debug!("{} product(s) matched size {}", by_size.len(), size);
        console.blank_line();
        print_products(console.as_ref(), &format!("All {} products:", size), by_size);

        let combined_spec = SizeSpecification::new(combined_size)
            .and(ColorSpecification::new(combined_color));
        let combined = filter.filter(products, &combined_spec);
        console.blank_line();
        print_products(
            console.as_ref(),
            &format!("All {} {} products:", combined_size, combined_color),
            combined,
        );

        Ok(())
    }
}
