//! Builder: replace a long positional constructor with named, chainable steps.

use std::fmt;
use std::io::Write;

use crate::{DemoError, Result};

// =============================================================================
// Violation: telescoping constructor
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CarV {
    pub make: String,
    pub model: String,
    pub color: String,
    pub year: u16,
    pub has_sunroof: bool,
}

impl CarV {
    // Five positional arguments; swapping make and model still compiles.
    pub fn new(make: &str, model: &str, color: &str, year: u16, has_sunroof: bool) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            color: color.to_string(),
            year,
            has_sunroof,
        }
    }
}

impl fmt::Display for CarV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} (Sunroof: {})",
            self.year, self.color, self.make, self.model, self.has_sunroof
        )
    }
}

pub fn run_violation(out: &mut dyn Write) -> Result<()> {
    let car = CarV::new("Toyota", "Corolla", "Blue", 2024, true);
    writeln!(out, "{car}")?;
    Ok(())
}

// =============================================================================
// Obeying: consuming builder with validation in build()
// =============================================================================

pub const DEFAULT_COLOR: &str = "White";

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    make: String,
    model: String,
    color: String,
    year: u16,
    has_sunroof: bool,
}

impl Car {
    pub fn builder() -> CarBuilder {
        CarBuilder::new()
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn has_sunroof(&self) -> bool {
        self.has_sunroof
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} (Sunroof: {})",
            self.year, self.color, self.make, self.model, self.has_sunroof
        )
    }
}

#[derive(Debug, Default)]
#[must_use = "a builder does nothing until build() is called"]
pub struct CarBuilder {
    make: Option<String>,
    model: Option<String>,
    color: Option<String>,
    year: Option<u16>,
    has_sunroof: bool,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn sunroof(mut self, has_sunroof: bool) -> Self {
        self.has_sunroof = has_sunroof;
        self
    }

    /// Make, model and year are required; color defaults to `White`.
    pub fn build(self) -> Result<Car> {
        let make = self.make.ok_or(DemoError::MissingField { field: "make" })?;
        let model = self.model.ok_or(DemoError::MissingField { field: "model" })?;
        let year = self.year.ok_or(DemoError::MissingField { field: "year" })?;

        Ok(Car {
            make,
            model,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            year,
            has_sunroof: self.has_sunroof,
        })
    }
}

pub fn run_obeying(out: &mut dyn Write) -> Result<()> {
    let car = Car::builder()
        .make("Toyota")
        .model("Corolla")
        .color("Blue")
        .year(2024)
        .sunroof(true)
        .build()?;

    writeln!(out, "{car}")?;
    Ok(())
}
