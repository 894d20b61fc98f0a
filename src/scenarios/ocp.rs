//! Open/Closed: open for extension, closed for modification.

use std::any::Any;
use std::f64::consts::PI;
use std::io::Write;

use crate::{DemoError, Result};

// =============================================================================
// Violation: the calculator knows every concrete shape
// =============================================================================

pub struct CircleV {
    pub radius: f64,
}

pub struct SquareV {
    pub side: f64,
}

/// Shape the closed calculator has never heard of.
pub struct TriangleV {
    pub base: f64,
    pub height: f64,
}

pub struct ShapeAreaCalculatorV;

impl ShapeAreaCalculatorV {
    /// Supporting a new shape means editing this method.
    pub fn calculate_area(&self, shape: &dyn Any) -> Result<f64> {
        if let Some(c) = shape.downcast_ref::<CircleV>() {
            Ok(PI * c.radius * c.radius)
        } else if let Some(s) = shape.downcast_ref::<SquareV>() {
            Ok(s.side * s.side)
        } else {
            Err(DemoError::UnsupportedShape)
        }
    }
}

pub fn run_violation(out: &mut dyn Write) -> Result<()> {
    let calc = ShapeAreaCalculatorV;
    writeln!(out, "Circle area: {}", calc.calculate_area(&CircleV { radius: 5.0 })?)?;
    writeln!(out, "Square area: {}", calc.calculate_area(&SquareV { side: 4.0 })?)?;

    let triangle = TriangleV {
        base: 6.0,
        height: 3.0,
    };
    match calc.calculate_area(&triangle) {
        Ok(area) => writeln!(out, "Triangle area: {area}")?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}

// =============================================================================
// Obeying: each shape knows its own area
// =============================================================================

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

pub struct Square {
    pub side: f64,
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

// Added later without touching the calculator.
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

pub struct ShapeAreaCalculator;

impl ShapeAreaCalculator {
    pub fn calculate_area(&self, shape: &dyn Shape) -> f64 {
        shape.area()
    }

    pub fn total_area(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        shapes.iter().map(|s| self.calculate_area(s.as_ref())).sum()
    }
}

pub fn run_obeying(out: &mut dyn Write) -> Result<()> {
    let calc = ShapeAreaCalculator;
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Square { side: 4.0 }),
        Box::new(Triangle {
            base: 6.0,
            height: 3.0,
        }),
    ];

    for shape in &shapes {
        writeln!(out, "{} area: {}", shape.name(), calc.calculate_area(shape.as_ref()))?;
    }
    writeln!(out, "Total area: {:.2}", calc.total_area(&shapes))?;
    Ok(())
}
