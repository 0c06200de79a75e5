//! Seeded random routes (waypoint lists) for driving experiments.
//!
//! Model
//! - Waypoints are drawn uniformly from the square `[-half_width, half_width]²`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the same token always yields the same route.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EntityError;
use crate::point::Point;

/// Route sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RouteCfg {
    /// Number of waypoints.
    pub legs: usize,
    /// Half side length of the sampling square around the origin.
    pub half_width: f64,
}

impl Default for RouteCfg {
    fn default() -> Self {
        Self {
            legs: 4,
            half_width: 10.0,
        }
    }
}

impl RouteCfg {
    fn validate(&self) -> Result<(), EntityError> {
        if self.legs == 0 {
            return Err(EntityError::invalid("legs must be > 0"));
        }
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(EntityError::invalid("half_width must be finite and > 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.legs` waypoints for `tok`.
pub fn draw_route(cfg: RouteCfg, tok: ReplayToken) -> Result<Vec<Point>, EntityError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let w = cfg.half_width;
    let route = (0..cfg.legs)
        .map(|_| Point::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w)))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(seed = tok.seed, index = tok.index, legs = route.len(), "route drawn");
    Ok(route)
}

/// Total distance from `start` through every waypoint in order.
pub fn route_length(start: &Point, waypoints: &[Point]) -> f64 {
    let mut at = start;
    let mut total = 0.0;
    for wp in waypoints {
        total += at.distance(wp);
        at = wp;
    }
    total
}
