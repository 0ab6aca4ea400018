//! Pattern 1: Factory Method
//! Example: Creating Beverages Through a Factory
//!
//! Run with: cargo run --example factory_method

use beverage_patterns::factory::{Beverage, BeverageFactory, CoffeeFactory, TeaFactory};

fn prepared(beverage: &dyn Beverage) -> String {
    let mut out = String::new();
    beverage.prepare(&mut out).expect("in-memory sink");
    out
}

fn main() {
    println!("=== Factory Method Demo ===\n");

    // The call site only ever sees the two traits.
    let factories: Vec<(&str, Box<dyn BeverageFactory>)> = vec![
        ("CoffeeFactory", Box::new(CoffeeFactory)),
        ("TeaFactory", Box::new(TeaFactory)),
    ];

    for (name, factory) in &factories {
        let beverage = factory.create_beverage();
        println!("{} -> {}", name, prepared(beverage.as_ref()).trim_end());
    }

    println!("\n=== Key Points ===");
    println!("- The concrete beverage type never appears at the call site");
    println!("- Each factory is fixed to exactly one product");
    println!("- Adding a beverage means adding a factory, not editing callers");
}
