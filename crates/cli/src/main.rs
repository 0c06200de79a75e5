use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use entities::prelude::*;
use serde_json::json;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "entities-cli")]
#[command(about = "Drive cars and stage unit fights from the command line")]
struct Cmd {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Euclidean distance between two points
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, allow_hyphen_values = true)]
        to: Point,
    },
    /// Refill a car and drive it through one or more destinations
    Drive {
        #[command(flatten)]
        car: CarArgs,
        /// Fuel to put in the tank before leaving
        #[arg(long)]
        fuel: f64,
        /// Destination; repeat for a multi-leg route (all or nothing)
        #[arg(long = "to", required = true, allow_hyphen_values = true)]
        to: Vec<Point>,
    },
    /// Drive a seeded random route
    Route {
        #[command(flatten)]
        car: CarArgs,
        #[arg(long)]
        fuel: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = RouteCfg::default().legs)]
        legs: usize,
        #[arg(long, default_value_t = RouteCfg::default().half_width)]
        half_width: f64,
    },
    /// One unit strikes another
    Attack {
        /// Attacker as NAME:HP:DMG
        #[arg(long)]
        attacker: UnitArg,
        /// Defender as NAME:HP:DMG
        #[arg(long)]
        defender: UnitArg,
        /// Strike with double damage
        #[arg(long, conflicts_with = "exchange")]
        counter: bool,
        /// Full round: attack, then the defender counter-attacks if alive
        #[arg(long)]
        exchange: bool,
    },
}

#[derive(clap::Args)]
struct CarArgs {
    #[arg(long, default_value_t = CarCfg::default().capacity)]
    capacity: f64,
    #[arg(long, default_value_t = CarCfg::default().consumption)]
    consumption: f64,
    /// Starting location
    #[arg(long = "start", default_value = "0,0", allow_hyphen_values = true)]
    start: Point,
    #[arg(long, default_value_t = CarCfg::default().model)]
    model: String,
}

impl CarArgs {
    fn build(self) -> Result<Car> {
        let cfg = CarCfg {
            capacity: self.capacity,
            consumption: self.consumption,
            location: self.start,
            model: self.model,
        };
        Car::from_cfg(cfg).context("building car")
    }
}

/// `NAME:HP:DMG`; the name may itself contain `:`.
#[derive(Clone, Debug)]
struct UnitArg {
    name: String,
    hit_points: f64,
    damage: f64,
}

impl FromStr for UnitArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(dmg), Some(hp), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
            bail!("expected NAME:HP:DMG, got {s:?}");
        };
        if name.is_empty() {
            bail!("unit name is empty in {s:?}");
        }
        Ok(Self {
            name: name.to_string(),
            hit_points: hp.trim().parse().with_context(|| format!("hit points in {s:?}"))?,
            damage: dmg.trim().parse().with_context(|| format!("damage in {s:?}"))?,
        })
    }
}

impl UnitArg {
    fn build(&self) -> Result<Unit> {
        Unit::new(self.name.clone(), self.hit_points, self.damage)
            .with_context(|| format!("building unit {}", self.name))
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Distance { from, to } => distance(from, to, cmd.json),
        Action::Drive { car, fuel, to } => drive(car.build()?, fuel, &to, cmd.json),
        Action::Route {
            car,
            fuel,
            seed,
            index,
            legs,
            half_width,
        } => {
            let tok = ReplayToken { seed, index };
            let route = draw_route(RouteCfg { legs, half_width }, tok).context("drawing route")?;
            tracing::info!(seed, index, legs, "route");
            drive(car.build()?, fuel, &route, cmd.json)
        }
        Action::Attack {
            attacker,
            defender,
            counter,
            exchange,
        } => attack(&attacker, &defender, counter, exchange, cmd.json),
    }
}

fn distance(from: Point, to: Point, as_json: bool) -> Result<()> {
    let d = from.distance(&to);
    if as_json {
        let obj = json!({
            "from": report::PointView::from(&from),
            "to": report::PointView::from(&to),
            "distance": d,
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        println!("{}", entities::num::Num(d));
    }
    Ok(())
}

fn drive(mut car: Car, fuel: f64, waypoints: &[Point], as_json: bool) -> Result<()> {
    tracing::info!(model = car.model(), fuel, legs = waypoints.len(), "drive");
    let refill = car.refill(fuel).context("refilling")?;
    let trips = car
        .drive_route(waypoints)
        .with_context(|| format!("driving {}", car.model()))?;
    if as_json {
        let obj = json!({
            "refill": report::refill(&refill),
            "trips": trips.iter().map(report::trip).collect::<Vec<_>>(),
            "car": report::CarView::from(&car),
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        println!("{refill}");
        for t in &trips {
            println!("{t}");
        }
        println!("{car}");
    }
    Ok(())
}

fn attack(
    attacker: &UnitArg,
    defender: &UnitArg,
    counter: bool,
    full_round: bool,
    as_json: bool,
) -> Result<()> {
    let mut a = attacker.build()?;
    let mut d = defender.build()?;
    tracing::info!(attacker = a.name(), defender = d.name(), counter, full_round, "attack");
    let strikes = if full_round {
        exchange(&mut a, &mut d)?
    } else if counter {
        vec![a.counter_attack(&mut d)?]
    } else {
        vec![a.attack(&mut d)?]
    };
    if as_json {
        let obj = json!({
            "strikes": strikes.iter().map(report::strike).collect::<Vec<_>>(),
            "attacker": report::UnitView::from(&a),
            "defender": report::UnitView::from(&d),
        });
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        for s in &strikes {
            println!("{s}");
        }
        println!("{a}");
        println!("{d}");
    }
    Ok(())
}
