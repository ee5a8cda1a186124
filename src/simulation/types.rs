//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;

/// One of the four approaches into the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Canonical iteration order, also used for round-robin and tie-breaks
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Position of this direction in [`Direction::ALL`]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::East => 3,
        }
    }

    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The direction that follows this one in canonical order (wrapping)
    pub fn next(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// Single-letter label used by the terminal map
    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::West => 'W',
            Direction::East => 'E',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::West => "West",
            Direction::East => "East",
        };
        f.write_str(name)
    }
}

/// Number of queued vehicles per approach
///
/// This is a copy, so holding one never aliases the simulation's queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueLengths([usize; 4]);

impl QueueLengths {
    pub fn new(north: usize, south: usize, west: usize, east: usize) -> Self {
        Self([north, south, west, east])
    }

    pub fn get(&self, direction: Direction) -> usize {
        self.0[direction.index()]
    }

    pub fn set(&mut self, direction: Direction, length: usize) {
        self.0[direction.index()] = length;
    }

    /// Total vehicles waiting across all approaches
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterate `(direction, length)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, usize)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, self.get(direction)))
    }

    /// Direction with the longest queue.
    /// Ties go to the first direction in canonical order.
    pub fn longest(&self) -> Direction {
        let mut best = Direction::North;
        for (direction, length) in self.iter() {
            if length > self.get(best) {
                best = direction;
            }
        }
        best
    }
}

/// Read-only snapshot of the intersection handed to controllers and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationState {
    pub queue_lengths: QueueLengths,
    pub green: Direction,
}

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Approaches that received a new vehicle this tick, in canonical order
    pub spawned: Vec<Direction>,
    /// Vehicles that left the green queue
    pub released: usize,
}
