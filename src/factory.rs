//! Pattern 1: Factory Method
//!
//! A creator trait produces a product trait object without the caller
//! naming the concrete product type. Each concrete factory is fixed to
//! one product: `CoffeeFactory` makes `Coffee`, `TeaFactory` makes `Tea`.

use std::fmt::{self, Write};

/// A beverage that can be prepared.
pub trait Beverage {
    /// Emits one line identifying the beverage being prepared.
    fn prepare(&self, out: &mut dyn Write) -> fmt::Result;
}

pub struct Coffee;

impl Beverage for Coffee {
    fn prepare(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Preparing a coffee.")
    }
}

pub struct Tea;

impl Beverage for Tea {
    fn prepare(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Preparing a tea.")
    }
}

/// A creator that instantiates some concrete [`Beverage`].
///
/// The product type is fixed per factory, not chosen at call time.
pub trait BeverageFactory {
    fn create_beverage(&self) -> Box<dyn Beverage>;
}

pub struct CoffeeFactory;

impl BeverageFactory for CoffeeFactory {
    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Coffee)
    }
}

pub struct TeaFactory;

impl BeverageFactory for TeaFactory {
    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Tea)
    }
}

/// Drives both factories through the trait object, coffee first.
pub fn demo(out: &mut dyn Write) -> fmt::Result {
    let factories: [&dyn BeverageFactory; 2] = [&CoffeeFactory, &TeaFactory];
    for factory in factories {
        factory.create_beverage().prepare(out)?;
    }
    Ok(())
}
