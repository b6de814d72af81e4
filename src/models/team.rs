//! Team model.
//!
//! A delivery team with a capacity for the planning period, a productivity
//! multiplier, and an hourly cost rate.

use serde::{Deserialize, Serialize};

/// A delivery team that can take on stories for the next sprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Story points of output per nominal story point of effort (> 0).
    pub efficiency: f64,
    /// Currency per effort-hour (>= 0).
    pub cost: f64,
    /// Capacity for the planning period, in story points (>= 0).
    pub available_time: f64,
}

impl Team {
    /// Creates a new team with unit efficiency, zero cost and zero capacity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            efficiency: 1.0,
            cost: 0.0,
            available_time: 0.0,
        }
    }

    /// Sets the productivity multiplier.
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    /// Sets the hourly cost rate.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the sprint capacity in story points.
    pub fn with_available_time(mut self, available_time: f64) -> Self {
        self.available_time = available_time;
        self
    }
}
