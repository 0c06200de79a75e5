//! JSON views of entity state and events for `--json` output.

use entities::{Car, Point, Refill, Strike, StrikeKind, Trip, Unit};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct PointView {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl From<&Point> for PointView {
    fn from(p: &Point) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            text: p.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct CarView {
    pub model: String,
    pub fuel_capacity: f64,
    pub fuel_consumption: f64,
    pub fuel_amount: f64,
    pub location: PointView,
    pub text: String,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            model: car.model().to_string(),
            fuel_capacity: car.fuel_capacity(),
            fuel_consumption: car.fuel_consumption(),
            fuel_amount: car.fuel_amount(),
            location: car.location().into(),
            text: car.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct UnitView {
    pub name: String,
    pub hit_points: f64,
    pub hit_points_limit: f64,
    pub damage: f64,
    pub alive: bool,
    pub text: String,
}

impl From<&Unit> for UnitView {
    fn from(u: &Unit) -> Self {
        Self {
            name: u.name().to_string(),
            hit_points: u.hit_points(),
            hit_points_limit: u.hit_points_limit(),
            damage: u.damage(),
            alive: u.is_alive(),
            text: u.to_string(),
        }
    }
}

pub fn trip(t: &Trip) -> Value {
    json!({
        "from": PointView::from(&t.from),
        "to": PointView::from(&t.to),
        "distance": t.distance,
        "fuel_used": t.fuel_used,
        "fuel_left": t.fuel_left,
        "text": t.to_string(),
    })
}

pub fn refill(r: &Refill) -> Value {
    json!({
        "fuel_left": r.fuel_left,
        "text": r.to_string(),
    })
}

pub fn strike(s: &Strike) -> Value {
    let kind = match s.kind {
        StrikeKind::Attack => "attack",
        StrikeKind::CounterAttack => "counter_attack",
    };
    json!({
        "attacker": s.attacker,
        "target": s.target,
        "kind": kind,
        "damage": s.damage,
        "text": s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_view_carries_rendering() {
        let mut car = Car::default();
        car.refill(50.0).unwrap();
        let v = serde_json::to_value(CarView::from(&car)).unwrap();
        assert_eq!(v["model"], "Mercedes");
        assert_eq!(v["fuel_amount"], 50.0);
        assert_eq!(v["location"]["text"], "(0.0, 0.0)");
        assert_eq!(v["text"], "Mercedes: fuel amount | location: 50.0 | (0.0, 0.0)");
    }

    #[test]
    fn trip_and_strike_values() {
        let mut car = Car::default();
        car.refill(50.0).unwrap();
        let t = car.drive(Point::new(0, 1).unwrap()).unwrap();
        let v = trip(&t);
        assert_eq!(v["fuel_left"], 49.4);
        assert_eq!(v["to"]["y"], 1.0);

        let knight = Unit::new("Knight", 180.0, 25.0).unwrap();
        let mut barbarian = Unit::new("Barbarian", 100.0, 20.0).unwrap();
        let s = knight.counter_attack(&mut barbarian).unwrap();
        let v = strike(&s);
        assert_eq!(v["kind"], "counter_attack");
        assert_eq!(v["damage"], 50.0);
        assert_eq!(v["text"], "Knight counter attack Barbarian!!!");
        let u = serde_json::to_value(UnitView::from(&barbarian)).unwrap();
        assert_eq!(u["hit_points"], 50.0);
        assert_eq!(u["alive"], true);
    }
}
