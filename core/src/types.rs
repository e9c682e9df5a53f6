//! Shared primitive types used across the entire simulation.

/// Simulated time in years. Fractional values are normal.
pub type Year = f64;

/// Temperature in degrees Celsius.
pub type Celsius = f64;

/// Surface pressure in kilopascals.
pub type KiloPascal = f64;

/// Share of the atmosphere, in percent (0..=100 by the model's own accounting).
pub type Percent = f64;
