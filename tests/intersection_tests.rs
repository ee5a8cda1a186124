//! Intersection stepping behaviour
//!
//! Checks the spawn / release / age phases and seeded determinism.

use intersection_sim::simulation::{Direction, QueueLengths, SimConfig, SimIntersection};

fn intersection(spawn_probability: f64, max_pass: usize, seed: u64) -> SimIntersection {
    SimIntersection::new(SimConfig {
        spawn_probability,
        max_pass,
        seed: Some(seed),
    })
    .expect("valid configuration")
}

fn wait_times(sim: &SimIntersection, direction: Direction) -> Vec<u32> {
    sim.vehicles(direction).map(|v| v.wait_time).collect()
}

#[test]
fn test_new_intersection_is_empty_with_north_green() {
    let sim = intersection(0.1, 1, 42);
    let state = sim.state();
    assert_eq!(state.green, Direction::North);
    assert_eq!(state.queue_lengths, QueueLengths::default());
    assert_eq!(sim.ticks(), 0);
}

#[test]
fn test_vehicle_count_is_conserved_across_steps() {
    let mut sim = intersection(0.5, 2, 11);

    for tick in 0..500 {
        // Rotate the green so every queue gets released at some point
        sim.set_green(Direction::from_index(tick / 7));

        let before = sim.state().queue_lengths;
        let report = sim.step();
        let after = sim.state().queue_lengths;

        assert!(report.released <= 2, "released more than max_pass");
        assert_eq!(
            after.total(),
            before.total() + report.spawned.len() - report.released,
            "vehicle count not conserved at tick {}",
            tick
        );

        let green = sim.green();
        let spawned_on_green = report.spawned.contains(&green) as usize;
        assert!(report.released <= before.get(green) + spawned_on_green);
        for direction in Direction::ALL {
            if direction != green {
                let spawned = report.spawned.contains(&direction) as usize;
                assert_eq!(after.get(direction), before.get(direction) + spawned);
            }
        }
    }
}

#[test]
fn test_spawned_vehicle_has_waited_one_tick_after_its_step() {
    let mut sim = intersection(1.0, 0, 3);

    let report = sim.step();
    assert_eq!(report.spawned, Direction::ALL.to_vec());
    assert_eq!(report.released, 0);

    for direction in Direction::ALL {
        assert_eq!(wait_times(&sim, direction), vec![1]);
    }
}

#[test]
fn test_queues_are_fifo_with_oldest_at_head() {
    let mut sim = intersection(1.0, 0, 3);
    for _ in 0..3 {
        sim.step();
    }

    for direction in Direction::ALL {
        assert_eq!(wait_times(&sim, direction), vec![3, 2, 1]);
        assert!(sim.vehicles(direction).all(|v| v.direction == direction));
    }
}

#[test]
fn test_release_only_touches_green_queue_and_removes_head() {
    let mut sim = intersection(1.0, 1, 5);
    sim.set_green(Direction::West);

    sim.step();
    // West spawned one and released it before aging
    assert_eq!(sim.queue_len(Direction::West), 0);
    assert_eq!(wait_times(&sim, Direction::North), vec![1]);

    sim.step();
    sim.step();
    assert_eq!(sim.queue_len(Direction::West), 0);
    assert_eq!(wait_times(&sim, Direction::East), vec![3, 2, 1]);

    // Switching green drains the oldest vehicle first
    sim.set_green(Direction::East);
    let report = sim.step();
    assert_eq!(report.released, 1);
    assert_eq!(wait_times(&sim, Direction::East), vec![3, 2, 1]);
}

#[test]
fn test_release_never_exceeds_queue_length() {
    let mut sim = intersection(0.0, 5, 1);
    let report = sim.step();
    assert!(report.spawned.is_empty());
    assert_eq!(report.released, 0);

    let mut sim = intersection(1.0, 0, 1);
    sim.step();
    sim.step();
    sim.set_green(Direction::South);
    let report = sim.step();
    // max_pass of zero releases nothing
    assert_eq!(report.released, 0);
    assert_eq!(sim.queue_len(Direction::South), 3);
}

#[test]
fn test_large_max_pass_empties_green_queue() {
    let mut sim = intersection(1.0, 0, 9);
    for _ in 0..4 {
        sim.step();
    }

    let mut draining = intersection(1.0, 100, 9);
    draining.set_green(Direction::North);
    let report = draining.step();
    assert_eq!(report.released, 1);
    assert_eq!(draining.queue_len(Direction::North), 0);
    assert_eq!(sim.queue_len(Direction::North), 4);
}

#[test]
fn test_same_seed_gives_identical_runs() {
    let mut first = intersection(0.3, 1, 7);
    let mut second = intersection(0.3, 1, 7);

    for tick in 0..200 {
        let green = Direction::from_index(tick / 10);
        first.set_green(green);
        second.set_green(green);
        assert_eq!(first.step(), second.step());
        assert_eq!(first.state(), second.state());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut first = intersection(0.5, 0, 1);
    let mut second = intersection(0.5, 0, 2);

    let mut first_lengths = Vec::new();
    let mut second_lengths = Vec::new();
    for _ in 0..100 {
        first.step();
        second.step();
        first_lengths.push(first.state().queue_lengths);
        second_lengths.push(second.state().queue_lengths);
    }

    assert_ne!(first_lengths, second_lengths);
}

#[test]
fn test_intersections_do_not_share_randomness() {
    let mut reference = intersection(0.4, 1, 21);
    let mut interleaved = intersection(0.4, 1, 21);
    let mut other = intersection(0.4, 1, 99);

    for _ in 0..50 {
        other.step();
        let expected = reference.step();
        let actual = interleaved.step();
        other.step();
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_state_is_a_snapshot() {
    let mut sim = intersection(1.0, 0, 4);
    let before = sim.state();
    sim.step();
    sim.set_green(Direction::East);

    assert_eq!(before.queue_lengths.total(), 0);
    assert_eq!(before.green, Direction::North);
    assert_eq!(sim.state().queue_lengths.total(), 4);
    assert_eq!(sim.state().green, Direction::East);
}

#[test]
fn test_set_green_accepts_any_transition() {
    let mut sim = intersection(0.1, 1, 42);
    for direction in [
        Direction::East,
        Direction::West,
        Direction::West,
        Direction::South,
        Direction::North,
    ] {
        sim.set_green(direction);
        assert_eq!(sim.green(), direction);
    }
}

#[test]
fn test_invalid_spawn_probability_is_rejected() {
    for spawn_probability in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
        let result = SimIntersection::new(SimConfig {
            spawn_probability,
            ..SimConfig::default()
        });
        assert!(result.is_err(), "accepted {}", spawn_probability);
    }

    for spawn_probability in [0.0, 1.0] {
        let result = SimIntersection::new(SimConfig {
            spawn_probability,
            ..SimConfig::default()
        });
        assert!(result.is_ok(), "rejected {}", spawn_probability);
    }
}

#[test]
fn test_unseeded_intersection_runs() {
    let mut sim = SimIntersection::new(SimConfig {
        seed: None,
        ..SimConfig::default()
    })
    .expect("valid configuration");

    for _ in 0..20 {
        sim.step();
    }
    assert_eq!(sim.ticks(), 20);
}

#[test]
fn test_queue_lengths_longest_prefers_canonical_order() {
    assert_eq!(QueueLengths::new(3, 1, 3, 0).longest(), Direction::North);
    assert_eq!(QueueLengths::new(0, 2, 2, 2).longest(), Direction::South);
    assert_eq!(QueueLengths::new(0, 0, 0, 1).longest(), Direction::East);
    assert_eq!(QueueLengths::default().longest(), Direction::North);
}
