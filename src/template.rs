//! Pattern 3: Template Method
//!
//! [`prepare`] fixes the four-step routine; implementors supply only the
//! brew and add-ingredients steps. Because the skeleton is a free function
//! rather than a provided trait method, no variant can reorder it or
//! replace the fixed boil and pour steps.

use std::fmt::{self, Write};

/// The two steps a preparation variant must supply.
pub trait BeveragePreparation {
    fn brew(&self, out: &mut dyn Write) -> fmt::Result;
    fn add_ingredients(&self, out: &mut dyn Write) -> fmt::Result;
}

/// Runs the fixed routine: boil water, brew, pour in cup, add ingredients.
pub fn prepare(steps: &dyn BeveragePreparation, out: &mut dyn Write) -> fmt::Result {
    writeln!(out, "Boiling water.")?;
    steps.brew(out)?;
    writeln!(out, "Pouring into cup.")?;
    steps.add_ingredients(out)
}

pub struct CoffeePreparation;

impl BeveragePreparation for CoffeePreparation {
    fn brew(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Brewing coffee.")
    }

    fn add_ingredients(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Adding sugar and milk.")
    }
}

pub struct TeaPreparation;

impl BeveragePreparation for TeaPreparation {
    fn brew(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Steeping the tea.")
    }

    fn add_ingredients(&self, out: &mut dyn Write) -> fmt::Result {
        writeln!(out, "Adding lemon.")
    }
}

/// Runs the routine for coffee, then for tea.
pub fn demo(out: &mut dyn Write) -> fmt::Result {
    prepare(&CoffeePreparation, out)?;
    prepare(&TeaPreparation, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(steps: &dyn BeveragePreparation) -> String {
        let mut out = String::new();
        prepare(steps, &mut out).unwrap();
        out
    }

    #[test]
    fn tea_preparation_runs_all_four_steps_in_order() {
        let lines: Vec<String> = prepared(&TeaPreparation).lines().map(String::from).collect();
        assert_eq!(
            lines,
            [
                "Boiling water.",
                "Steeping the tea.",
                "Pouring into cup.",
                "Adding lemon.",
            ]
        );
    }

    #[test]
    fn coffee_preparation_runs_all_four_steps_in_order() {
        let lines: Vec<String> = prepared(&CoffeePreparation)
            .lines()
            .map(String::from)
            .collect();
        assert_eq!(
            lines,
            [
                "Boiling water.",
                "Brewing coffee.",
                "Pouring into cup.",
                "Adding sugar and milk.",
            ]
        );
    }

    #[test]
    fn fixed_steps_are_shared_across_variants() {
        let coffee: Vec<String> = prepared(&CoffeePreparation).lines().map(String::from).collect();
        let tea: Vec<String> = prepared(&TeaPreparation).lines().map(String::from).collect();

        // Boil and pour are identical; brew and add-ingredients differ.
        assert_eq!(coffee[0], tea[0]);
        assert_eq!(coffee[2], tea[2]);
        assert_ne!(coffee[1], tea[1]);
        assert_ne!(coffee[3], tea[3]);
    }

    #[test]
    fn demo_runs_coffee_then_tea() {
        let mut out = String::new();
        demo(&mut out).unwrap();
        assert!(out.starts_with("Boiling water.\nBrewing coffee.\n"));
        assert!(out.ends_with("Pouring into cup.\nAdding lemon.\n"));
        assert_eq!(out.lines().count(), 8);
    }
}
