// fixtures/mod.rs - Sample catalog fixtures
//
// What is a fixture?
// A fixture is reusable test setup data. Instead of building a different
// product list in every test, we define one realistic catalog here and
// reuse it across the unit and integration suites.
//
// The philosophy:
// "Setup your test data once, use it everywhere"

pub mod cakes;

pub use cakes::sample_catalog;
