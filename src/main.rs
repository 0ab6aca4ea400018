//! Runs the three pattern demos in a fixed order, one labeled section each.

use std::fmt::{self, Write};

use beverage_patterns::{bridge, factory, template};
use colored::Colorize;

fn render(demo: fn(&mut dyn Write) -> fmt::Result) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    demo(&mut out).expect("in-memory sink");
    out
}

fn main() {
    println!("{}", "1. Factory Method".bold());
    print!("{}", render(factory::demo));

    println!("\n{}", "2. Bridge".bold());
    print!("{}", render(bridge::demo));

    println!("\n{}", "3. Template Method".bold());
    print!("{}", render(template::demo));
}
