//! Single Responsibility: one type, one reason to change.
//!
//! `ProductManager` mixes catalogue logic with persistence and reporting.
//! `ProductService` keeps only the catalogue logic and hands the other two
//! jobs to collaborators behind traits.

use std::cell::RefCell;
use std::io::Write;

use crate::Result;

// =============================================================================
// Violation: one manager doing three jobs
// =============================================================================

pub struct ProductManager;

impl ProductManager {
    pub fn add_product(&self, out: &mut dyn Write, name: &str, price: f64) -> Result<()> {
        writeln!(out, "Adding product: {name}, Price: {price:.2}")?;
        self.save_to_database(out, name, price)?;
        self.print_report(out, name, price)?;
        Ok(())
    }

    fn save_to_database(&self, out: &mut dyn Write, _name: &str, _price: f64) -> Result<()> {
        writeln!(out, "Saving to database...")?;
        Ok(())
    }

    fn print_report(&self, out: &mut dyn Write, _name: &str, _price: f64) -> Result<()> {
        writeln!(out, "Printing report...")?;
        Ok(())
    }
}

pub fn run_violation(out: &mut dyn Write) -> Result<()> {
    ProductManager.add_product(out, "Laptop", 999.99)
}

// =============================================================================
// Obeying: persistence and reporting live behind their own traits
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

pub trait ProductRepository {
    fn save(&self, out: &mut dyn Write, product: &Product) -> Result<()>;
}

pub trait ReportGenerator {
    fn generate(&self, out: &mut dyn Write, product: &Product) -> Result<()>;
}

/// Keeps saved products in memory so callers can inspect what was stored.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RefCell<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&self, out: &mut dyn Write, product: &Product) -> Result<()> {
        writeln!(out, "Saving to database ...")?;
        self.products.borrow_mut().push(product.clone());
        Ok(())
    }
}

pub struct ConsoleReportGenerator;

impl ReportGenerator for ConsoleReportGenerator {
    fn generate(&self, out: &mut dyn Write, _product: &Product) -> Result<()> {
        writeln!(out, "Generating report ...")?;
        Ok(())
    }
}

pub struct ProductService<R, G> {
    repository: R,
    report_generator: G,
}

impl<R: ProductRepository, G: ReportGenerator> ProductService<R, G> {
    pub fn new(repository: R, report_generator: G) -> Self {
        Self {
            repository,
            report_generator,
        }
    }

    pub fn add_product(&self, out: &mut dyn Write, name: &str, price: f64) -> Result<()> {
        let product = Product {
            name: name.to_string(),
            price,
        };
        writeln!(out, "Adding product: {}, Price: {:.2}", product.name, product.price)?;
        self.repository.save(out, &product)?;
        self.report_generator.generate(out, &product)?;
        Ok(())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

pub fn run_obeying(out: &mut dyn Write) -> Result<()> {
    let service = ProductService::new(InMemoryProductRepository::new(), ConsoleReportGenerator);
    service.add_product(out, "Laptop", 999.99)
}
