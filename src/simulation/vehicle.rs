//! Vehicles waiting at the intersection
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::Direction;

/// A vehicle queued on one approach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// The approach this vehicle arrived on
    pub direction: Direction,
    /// Ticks spent queued, counting the tick it arrived in
    pub wait_time: u32,
}

impl Vehicle {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            wait_time: 0,
        }
    }

    /// Count one more tick of waiting
    pub fn age(&mut self) {
        self.wait_time += 1;
    }
}
