//! Pattern 2: Bridge
//!
//! A refined beverage keeps its ingredient behind `Box<dyn Ingredient>`
//! and delegates the second half of `prepare()` to it, so the beverage
//! and ingredient hierarchies vary independently. Any pairing is valid.

use std::fmt::{self, Write};

/// An ingredient that can be added to a beverage.
pub trait Ingredient {
    /// Emits one line naming the ingredient added.
    fn add(&self, out: &mut dyn Write) -> fmt::Result;
}

pub struct Milk;

impl Ingredient for Milk {
    fn add(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Adding milk.")
    }
}

pub struct Sugar;

impl Ingredient for Sugar {
    fn add(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Adding sugar.")
    }
}

/// The abstraction side of the bridge.
pub trait RefinedBeverage {
    /// Emits the beverage line, then the held ingredient's line.
    fn prepare(&self, out: &mut dyn Write) -> fmt::Result;
}

pub struct RefinedCoffee {
    ingredient: Box<dyn Ingredient>,
}

impl RefinedCoffee {
    pub fn new(ingredient: Box<dyn Ingredient>) -> Self {
        RefinedCoffee { ingredient }
    }
}

impl RefinedBeverage for RefinedCoffee {
    fn prepare(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Preparing a refined coffee.")?;
        self.ingredient.add(out)
    }
}

pub struct RefinedTea {
    ingredient: Box<dyn Ingredient>,
}

impl RefinedTea {
    pub fn new(ingredient: Box<dyn Ingredient>) -> Self {
        RefinedTea { ingredient }
    }
}

impl RefinedBeverage for RefinedTea {
    fn prepare(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Preparing a refined tea.")?;
        self.ingredient.add(out)
    }
}

/// Milk goes into the refined coffee, sugar into the refined tea.
pub fn demo(out: &mut dyn Write) -> fmt::Result {
    RefinedCoffee::new(Box::new(Milk)).prepare(out)?;
    RefinedTea::new(Box::new(Sugar)).prepare(out)
}
