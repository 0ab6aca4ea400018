//! Pattern 2: Bridge
//! Example: Refined Beverages Over Interchangeable Ingredients
//!
//! Run with: cargo run --example bridge

use beverage_patterns::bridge::{Milk, RefinedBeverage, RefinedCoffee, RefinedTea, Sugar};

fn prepared(beverage: &dyn RefinedBeverage) -> String {
    let mut out = String::new();
    beverage.prepare(&mut out).expect("in-memory sink");
    out
}

fn main() {
    println!("=== Bridge Demo ===\n");

    println!("The pairing from the classic demo:");
    print!("{}", prepared(&RefinedCoffee::new(Box::new(Milk))));
    print!("{}", prepared(&RefinedTea::new(Box::new(Sugar))));

    // Either hierarchy varies without touching the other.
    println!("\n=== Swapped Pairing ===");
    let swapped: Vec<Box<dyn RefinedBeverage>> = vec![
        Box::new(RefinedCoffee::new(Box::new(Sugar))),
        Box::new(RefinedTea::new(Box::new(Milk))),
    ];
    for beverage in &swapped {
        print!("{}", prepared(beverage.as_ref()));
    }

    println!("\n=== Key Points ===");
    println!("- The beverage owns its ingredient behind Box<dyn Ingredient>");
    println!("- prepare() emits its own line, then delegates to add()");
    println!("- Any beverage/ingredient pairing is valid");
}
