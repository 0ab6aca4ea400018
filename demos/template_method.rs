//! Pattern 3: Template Method
//! Example: A Fixed Four-Step Routine with Two Deferred Steps
//!
//! Run with: cargo run --example template_method

use beverage_patterns::template::{
    prepare, BeveragePreparation, CoffeePreparation, TeaPreparation,
};

fn run(name: &str, steps: &dyn BeveragePreparation) {
    let mut out = String::new();
    prepare(steps, &mut out).expect("in-memory sink");
    println!("{}:", name);
    for line in out.lines() {
        println!("  {}", line);
    }
}

fn main() {
    println!("=== Template Method Demo ===\n");

    run("CoffeePreparation", &CoffeePreparation);
    println!();
    run("TeaPreparation", &TeaPreparation);

    println!("\n=== Key Points ===");
    println!("- prepare() is a free function: the step order cannot be overridden");
    println!("- Boil and pour are fixed lines shared by every variant");
    println!("- Variants implement only brew() and add_ingredients()");
}
