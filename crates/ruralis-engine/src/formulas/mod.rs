//! Built-in domain calculators.
//!
//! One module per calculator, each a unit struct implementing
//! `FormulaModule`. Formulas are closed-form and individually small; the
//! interesting part is that they all flow through the same pipeline.

pub mod carcass_yield;
pub mod cost_per_hectare;
pub mod freight_netback;
pub mod liming;
pub mod moisture_discount;
pub mod seed_population;
pub mod spray_calibration;

use crate::formula::FormulaModule;

/// Every built-in calculator, ready for registration.
pub fn all() -> Vec<Box<dyn FormulaModule>> {
    vec![
        Box::new(cost_per_hectare::CostPerHectare),
        Box::new(liming::LimingRequirement),
        Box::new(spray_calibration::SprayCalibration),
        Box::new(freight_netback::FreightNetback),
        Box::new(moisture_discount::MoistureDiscount),
        Box::new(seed_population::SeedPopulation),
        Box::new(carcass_yield::CarcassYield),
    ]
}
