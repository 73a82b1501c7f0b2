use super::{print_products, Color, Product, Size};
use crate::config::toml_config::CatalogConfig;
use crate::domain::model::{Principle, Variant};
use crate::domain::ports::{Demo, SharedConsole};
use crate::utils::error::Result;

/// Every new filtering criterion means editing this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn filter_by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    pub fn filter_by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    pub fn filter_by_color_and_size<'a>(
        &self,
        products: &'a [Product],
        color: Color,
        size: Size,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.color == color && p.size == size)
            .collect()
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
        Variant::Before
    }

    fn run(&self, console: SharedConsole) -> Result<()> {
        let products = &self.config.products;
        let color = self.config.color;
        let size = self.config.size;
        let combined_color = self.config.combined_color;
        let combined_size = self.config.combined_size;
        print_products(console.as_ref(), "All products:", products);

        let filter = ProductFilter;

        console.blank_line();
        print_products(
            console.as_ref(),
            &format!("All {} products:", color),
            filter.filter_by_color(products, color),
        );

        console.blank_line();
        print_products(
            console.as_ref(),
            &format!("All {} products:", size),
            filter.filter_by_size(products, size),
        );

        console.blank_line();
        print_products(
            console.as_ref(),
            &format!("All {} {} products:", combined_size, combined_color),
            filter.filter_by_color_and_size(products, combined_color, combined_size),
        );

        Ok(())
    }
}
