//! Attacks between units.

use std::fmt;

use super::Unit;
use crate::error::EntityError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikeKind {
    Attack,
    CounterAttack,
}

impl StrikeKind {
    fn multiplier(self) -> f64 {
        match self {
            StrikeKind::Attack => 1.0,
            StrikeKind::CounterAttack => 2.0,
        }
    }
}

/// One landed hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Strike {
    pub attacker: String,
    pub target: String,
    pub kind: StrikeKind,
    pub damage: f64,
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            StrikeKind::Attack => "attack",
            StrikeKind::CounterAttack => "counter attack",
        };
        write!(f, "{} {} {}!!!", self.attacker, verb, self.target)
    }
}

impl Unit {
    /// Deal `damage` to `enemy`.
    pub fn attack(&self, enemy: &mut Unit) -> Result<Strike, EntityError> {
        self.strike(enemy, StrikeKind::Attack)
    }

    /// Deal twice `damage` to `enemy`.
    pub fn counter_attack(&self, enemy: &mut Unit) -> Result<Strike, EntityError> {
        self.strike(enemy, StrikeKind::CounterAttack)
    }

    fn strike(&self, enemy: &mut Unit, kind: StrikeKind) -> Result<Strike, EntityError> {
        self.ensure_alive()?;
        let damage = self.damage * kind.multiplier();
        enemy.take_damage(damage)?;
        tracing::debug!(
            attacker = %self.name,
            target = %enemy.name,
            ?kind,
            damage,
            "strike"
        );
        Ok(Strike {
            attacker: self.name.clone(),
            target: enemy.name.clone(),
            kind,
            damage,
        })
    }
}

/// One combat round: `attacker` attacks, then `defender` counter-attacks if it
/// survived.
///
/// Both strikes are validated before either lands, so an `Err` leaves both
/// units untouched.
pub fn exchange(attacker: &mut Unit, defender: &mut Unit) -> Result<Vec<Strike>, EntityError> {
    attacker.ensure_alive()?;
    let first = attacker.damage * StrikeKind::Attack.multiplier();
    defender.check_damage(first)?;
    let survives = defender.hit_points - first > 0.0;
    if survives {
        attacker.check_damage(defender.damage * StrikeKind::CounterAttack.multiplier())?;
    }

    let mut strikes = vec![attacker.attack(defender)?];
    if survives {
        strikes.push(defender.counter_attack(attacker)?);
    }
    Ok(strikes)
}
