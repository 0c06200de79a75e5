//! Car with a fuel tank and a location.
//!
//! Invariants
//! - `0 <= fuel_amount <= fuel_capacity` at all times.
//! - `drive`, `drive_route` and `refill` validate before mutating; on `Err` the
//!   car is unchanged.
//! - `refill` sets the amount (it does not add to it).

use std::fmt;

use crate::error::{check_amount, EntityError};
use crate::num::Num;
use crate::point::Point;

/// Construction parameters with the stock defaults (a Mercedes at the origin).
#[derive(Clone, Debug, PartialEq)]
pub struct CarCfg {
    pub capacity: f64,
    pub consumption: f64,
    pub location: Point,
    pub model: String,
}

impl Default for CarCfg {
    fn default() -> Self {
        Self {
            capacity: 60.0,
            consumption: 0.6,
            location: Point::origin(),
            model: "Mercedes".to_string(),
        }
    }
}

/// Outcome of a successful leg.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub model: String,
    pub from: Point,
    pub to: Point,
    pub distance: f64,
    pub fuel_used: f64,
    pub fuel_left: f64,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car {} travelled: {} miles. {} fuel left.",
            self.model,
            Num(self.distance),
            Num(self.fuel_left)
        )
    }
}

/// Outcome of a successful refill.
#[derive(Clone, Debug, PartialEq)]
pub struct Refill {
    pub model: String,
    pub fuel_left: f64,
}

impl fmt::Display for Refill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {} refilled. {} fuel left.", self.model, Num(self.fuel_left))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Car {
    fuel_capacity: f64,
    fuel_amount: f64,
    fuel_consumption: f64,
    location: Point,
    model: String,
}

impl Car {
    /// Empty tank at `location`. Capacity must be finite and > 0, consumption
    /// finite and >= 0.
    pub fn new(
        capacity: f64,
        consumption: f64,
        location: Point,
        model: impl Into<String>,
    ) -> Result<Self, EntityError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(EntityError::invalid(format!(
                "fuel capacity must be finite and > 0, got {capacity}"
            )));
        }
        if !consumption.is_finite() || consumption < 0.0 {
            return Err(EntityError::invalid(format!(
                "fuel consumption must be finite and >= 0, got {consumption}"
            )));
        }
        Ok(Self {
            fuel_capacity: capacity,
            fuel_amount: 0.0,
            fuel_consumption: consumption,
            location,
            model: model.into(),
        })
    }

    pub fn from_cfg(cfg: CarCfg) -> Result<Self, EntityError> {
        Self::new(cfg.capacity, cfg.consumption, cfg.location, cfg.model)
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.fuel_capacity
    }

    pub fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    pub fn fuel_amount(&self) -> f64 {
        self.fuel_amount
    }

    pub fn location(&self) -> &Point {
        &self.location
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fuel a drive from the current location to `destination` would burn.
    pub fn fuel_needed(&self, destination: &Point) -> f64 {
        self.location.distance(destination) * self.fuel_consumption
    }

    /// Drive straight to `destination`, burning `distance * consumption`.
    pub fn drive(&mut self, destination: Point) -> Result<Trip, EntityError> {
        let (distance, needed) = self.leg(&self.location, &destination, self.fuel_amount)?;
        Ok(self.commit(destination, distance, needed))
    }

    /// Drive through `waypoints` in order, all or nothing.
    ///
    /// The route is checked leg by leg against the fuel that would remain; the
    /// first leg that cannot be covered fails the whole call and nothing moves.
    pub fn drive_route(&mut self, waypoints: &[Point]) -> Result<Vec<Trip>, EntityError> {
        let mut plan = Vec::with_capacity(waypoints.len());
        let mut at = self.location;
        let mut left = self.fuel_amount;
        for wp in waypoints {
            let (distance, needed) = self.leg(&at, wp, left)?;
            left -= needed;
            at = *wp;
            plan.push((*wp, distance, needed));
        }
        let trips = plan
            .into_iter()
            .map(|(to, distance, needed)| self.commit(to, distance, needed))
            .collect();
        Ok(trips)
    }

    /// Set the tank to exactly `amount`.
    pub fn refill(&mut self, amount: f64) -> Result<Refill, EntityError> {
        let amount = check_amount(amount)?;
        if amount > self.fuel_capacity {
            tracing::warn!(
                model = %self.model,
                requested = amount,
                capacity = self.fuel_capacity,
                "refill over capacity"
            );
            return Err(EntityError::OverCapacity {
                requested: amount,
                capacity: self.fuel_capacity,
            });
        }
        self.fuel_amount = amount;
        tracing::debug!(model = %self.model, fuel = amount, "refilled");
        Ok(Refill {
            model: self.model.clone(),
            fuel_left: self.fuel_amount,
        })
    }

    /// Long form: `<model>: fuel amount <amount>, location <location>.`
    pub fn describe(&self) -> String {
        format!(
            "{}: fuel amount {}, location {}.",
            self.model,
            Num(self.fuel_amount),
            self.location
        )
    }

    /// Distance and fuel for one leg, or `OutOfFuel`.
    ///
    /// A leg whose distance overflows to `inf` can never be fuelled, even at zero
    /// consumption (`inf * 0.0` is NaN), so it reports `needed = inf`.
    fn leg(&self, from: &Point, to: &Point, available: f64) -> Result<(f64, f64), EntityError> {
        let distance = from.distance(to);
        let mut needed = distance * self.fuel_consumption;
        if !distance.is_finite() || !needed.is_finite() {
            needed = f64::INFINITY;
        }
        if needed > available {
            tracing::warn!(model = %self.model, needed, available, "out of fuel");
            return Err(EntityError::OutOfFuel { needed, available });
        }
        Ok((distance, needed))
    }

    fn commit(&mut self, to: Point, distance: f64, needed: f64) -> Trip {
        let from = self.location;
        self.fuel_amount -= needed;
        self.location = to;
        tracing::debug!(
            model = %self.model,
            %from,
            %to,
            distance,
            fuel_left = self.fuel_amount,
            "drove"
        );
        Trip {
            model: self.model.clone(),
            from,
            to,
            distance,
            fuel_used: needed,
            fuel_left: self.fuel_amount,
        }
    }
}

impl Default for Car {
    fn default() -> Self {
        let cfg = CarCfg::default();
        Self {
            fuel_capacity: cfg.capacity,
            fuel_amount: 0.0,
            fuel_consumption: cfg.consumption,
            location: cfg.location,
            model: cfg.model,
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: fuel amount | location: {} | {}",
            self.model,
            Num(self.fuel_amount),
            self.location
        )
    }
}
