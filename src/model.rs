//! In-memory game objects shared between the presenter and the dialogs

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Planet with its position on the galactic map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

impl Planet {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self { name: name.into(), x, y }
    }
}

/// Trade route between two planets, referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRoute {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl TradeRoute {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { name: name.into(), start: start.into(), end: end.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub name: String,
    pub set_name: String,
    pub description: String,
    pub sort_order: i32,
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            name: "New Campaign".to_string(),
            set_name: String::new(),
            description: String::new(),
            sort_order: 0,
        }
    }
}

/// Parameters for generating trade routes between nearby planets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoConnectionSettings {
    pub max_distance: f32,
    pub max_routes_per_planet: u32,
}

impl Default for AutoConnectionSettings {
    fn default() -> Self {
        Self { max_distance: 120.0, max_routes_per_planet: 3 }
    }
}

#[derive(Debug, Default)]
pub struct GameObjectRepository {
    planets: Vec<Planet>,
    trade_routes: Vec<TradeRoute>,
    auto_connection: AutoConnectionSettings,
}

impl GameObjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small built-in sector so the editor has something to show before a data folder is set
    pub fn demo() -> Self {
        let mut repo = Self::new();
        for planet in [
            Planet::new("Aldara", 0.0, 0.0),
            Planet::new("Brisk", 95.0, 40.0),
            Planet::new("Cygnar", 60.0, -85.0),
            Planet::new("Dorrin Prime", -110.0, 30.0),
            Planet::new("Eloa", -40.0, 120.0),
            Planet::new("Fennick", 180.0, -20.0),
        ] {
            repo.add_planet(planet);
        }
        for route in [
            TradeRoute::new("Aldara_Brisk", "Aldara", "Brisk"),
            TradeRoute::new("Aldara_Cygnar", "Aldara", "Cygnar"),
            TradeRoute::new("Aldara_Dorrin_Prime", "Aldara", "Dorrin Prime"),
            TradeRoute::new("Dorrin_Prime_Eloa", "Dorrin Prime", "Eloa"),
            TradeRoute::new("Brisk_Fennick", "Brisk", "Fennick"),
        ] {
            repo.add_trade_route(route);
        }
        repo
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn trade_routes(&self) -> &[TradeRoute] {
        &self.trade_routes
    }

    pub fn planet_names(&self) -> Vec<String> {
        self.planets.iter().map(|p| p.name.clone()).collect()
    }

    pub fn trade_route_names(&self) -> Vec<String> {
        self.trade_routes.iter().map(|r| r.name.clone()).collect()
    }

    pub fn add_planet(&mut self, planet: Planet) {
        debug!(name = %planet.name, "Planet added");
        self.planets.push(planet);
    }

    pub fn add_trade_route(&mut self, route: TradeRoute) {
        debug!(name = %route.name, start = %route.start, end = %route.end, "Trade route added");
        self.trade_routes.push(route);
    }

    pub fn auto_connection_settings(&self) -> &AutoConnectionSettings {
        &self.auto_connection
    }

    pub fn set_auto_connection_settings(&mut self, settings: AutoConnectionSettings) {
        self.auto_connection = settings;
    }
}
