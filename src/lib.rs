//! # Classic Design Patterns in Rust
//!
//! This crate demonstrates three classic design patterns, each rebuilt on
//! traits and applied to a toy beverage-preparation scenario:
//!
//! ## Pattern 1: Factory Method
//! - A factory trait hands out products behind `Box<dyn Beverage>`
//! - Callers never name the concrete product type
//!
//! ## Pattern 2: Bridge
//! - A refined beverage owns its ingredient behind `Box<dyn Ingredient>`
//! - The beverage and ingredient hierarchies vary independently
//!
//! ## Pattern 3: Template Method
//! - A free function fixes the four-step preparation skeleton
//! - Variants supply only the brew and add-ingredients steps
//!
//! Every operation writes its lines into a `std::fmt::Write` sink, so the
//! demos print to the console while the tests capture into a `String`.
//!
//! Run examples with: `cargo run --example <name>`

pub mod bridge;
pub mod factory;
pub mod template;
