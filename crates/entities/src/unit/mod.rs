//! Combat unit with bounded hit points.
//!
//! Rules
//! - `hit_points` never exceeds `hit_points_limit`, which is fixed at creation.
//! - A unit at zero hit points is dead. Every mutating operation checks this
//!   first and fails with `UnitDead`.
//! - Damage larger than the remaining hit points is an error (`UnitDead`), not a
//!   clamp to zero. Damage exactly equal to the remaining hit points kills the
//!   unit without error.
//!
//! Split
//! - `mod.rs`: the unit and its own state changes.
//! - `combat.rs`: attacks between two units and the `Strike` events they emit.

use std::fmt;

use crate::error::{check_amount, EntityError};
use crate::num::Num;

mod combat;

pub use combat::{exchange, Strike, StrikeKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    name: String,
    hit_points: f64,
    hit_points_limit: f64,
    damage: f64,
}

impl Unit {
    /// `hit_points` is also the limit. Zero is allowed (the unit starts dead).
    pub fn new(name: impl Into<String>, hit_points: f64, damage: f64) -> Result<Self, EntityError> {
        let name = name.into();
        if !hit_points.is_finite() || hit_points < 0.0 {
            return Err(EntityError::invalid(format!(
                "hit points of {name} must be finite and >= 0, got {hit_points}"
            )));
        }
        if !damage.is_finite() || damage < 0.0 {
            return Err(EntityError::invalid(format!(
                "damage of {name} must be finite and >= 0, got {damage}"
            )));
        }
        Ok(Self {
            name,
            hit_points,
            hit_points_limit: hit_points,
            damage,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hit_points(&self) -> f64 {
        self.hit_points
    }

    pub fn hit_points_limit(&self) -> f64 {
        self.hit_points_limit
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0.0
    }

    pub(crate) fn ensure_alive(&self) -> Result<(), EntityError> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(EntityError::dead(&self.name))
        }
    }

    /// All checks `take_damage` runs, without applying the damage.
    pub(crate) fn check_damage(&self, amount: f64) -> Result<f64, EntityError> {
        self.ensure_alive()?;
        let amount = check_amount(amount)?;
        if amount > self.hit_points {
            tracing::warn!(
                unit = %self.name,
                amount,
                hit_points = self.hit_points,
                "overkill"
            );
            return Err(EntityError::dead(&self.name));
        }
        Ok(amount)
    }

    pub fn take_damage(&mut self, amount: f64) -> Result<(), EntityError> {
        let amount = self.check_damage(amount)?;
        self.hit_points -= amount;
        tracing::debug!(unit = %self.name, amount, hit_points = self.hit_points, "took damage");
        Ok(())
    }

    /// Add hit points, capped at the limit.
    pub fn heal(&mut self, amount: f64) -> Result<(), EntityError> {
        self.ensure_alive()?;
        let amount = check_amount(amount)?;
        self.hit_points = (self.hit_points + amount).min(self.hit_points_limit);
        tracing::debug!(unit = %self.name, amount, hit_points = self.hit_points, "healed");
        Ok(())
    }

    /// Long form: `<name> has <hp> hitPoints | hitPointLimit:<limit> |; Damage: <dmg>`.
    pub fn describe(&self) -> String {
        format!(
            "{} has {} hitPoints | hitPointLimit:{} |; Damage: {}",
            self.name,
            Num(self.hit_points),
            Num(self.hit_points_limit),
            Num(self.damage)
        )
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: hp - {}; dmg - {}",
            self.name,
            Num(self.hit_points),
            Num(self.damage)
        )
    }
}
