use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use intersection_sim::simulation::{
    ControlMode, SimConfig, SimWorld, DEFAULT_MAX_PASS, DEFAULT_PERIOD_TICKS, DEFAULT_SEED,
    DEFAULT_SPAWN_PROBABILITY, DEFAULT_THRESHOLD,
};

/// Controller selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Fixed,
    Adaptive,
}

impl From<ModeArg> for ControlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Fixed => ControlMode::Fixed,
            ModeArg::Adaptive => ControlMode::Adaptive,
        }
    }
}

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Four-way intersection signal-control simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Controller that decides the green direction at start
    #[arg(long, value_enum, default_value = "fixed")]
    mode: ModeArg,

    /// Per-approach arrival probability each tick
    #[arg(long, default_value_t = DEFAULT_SPAWN_PROBABILITY)]
    spawn_probability: f64,

    /// Vehicles released from the green queue per tick
    #[arg(long, default_value_t = DEFAULT_MAX_PASS)]
    max_pass: usize,

    /// Seed for the arrival random stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Ignore --seed and seed from the operating system
    #[arg(long)]
    random_seed: bool,

    /// Ticks each direction stays green under the fixed controller
    #[arg(long, default_value_t = DEFAULT_PERIOD_TICKS)]
    period: u32,

    /// Adaptive controller threshold (reserved, currently has no effect)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,

    /// Print a report every N ticks in headless mode (0 disables)
    #[arg(long, default_value_t = 50)]
    report_every: u64,

    /// Pause between headless reports in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Toggle the control mode every N ticks in headless mode (0 disables)
    #[arg(long, default_value_t = 0)]
    toggle_every: u64,

    /// Reset the simulation and metrics before this tick in headless mode
    #[arg(long)]
    reset_at: Option<u64>,
}

impl Cli {
    fn build_world(&self) -> Result<SimWorld> {
        let config = SimConfig {
            spawn_probability: self.spawn_probability,
            max_pass: self.max_pass,
            seed: if self.random_seed {
                None
            } else {
                Some(self.seed)
            },
        };
        SimWorld::new(config, self.period, self.threshold, self.mode.into())
            .context("Failed to build the simulation from command-line settings")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let world = cli.build_world()?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(world);
        }
        #[cfg(not(feature = "ui"))]
        {
            drop(world);
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn,intersection_sim=info"),
        )
        .init();
        run_headless(world, &cli)?;
    }

    Ok(())
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(mut world: SimWorld, cli: &Cli) -> Result<()> {
    println!("Running intersection simulation in headless mode...");
    println!(
        "Ticks: {}, Mode: {}, Spawn probability: {}, Max pass: {}",
        cli.ticks,
        world.mode(),
        cli.spawn_probability,
        cli.max_pass
    );
    println!();

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    for tick in 1..=cli.ticks {
        if cli.reset_at == Some(tick) {
            world.reset()?;
        }
        if cli.toggle_every > 0 && tick > 1 && (tick - 1) % cli.toggle_every == 0 {
            world.toggle_mode();
        }

        world.tick();

        if cli.report_every > 0 && tick % cli.report_every == 0 {
            println!("--- After tick {} ---", tick);
            world.print_summary();
            world.draw_map();
            println!();

            if cli.delay_ms > 0 && tick < cli.ticks {
                std::thread::sleep(std::time::Duration::from_millis(cli.delay_ms));
            }
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();

    let summary = world.metrics().summary();
    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks run: {}", cli.ticks);
    info!("Final mode: {}", world.mode());
    info!("Vehicles queued: {}", world.state().queue_lengths.total());
    info!("Mean wait samples: {}", summary.samples);
    match summary.average {
        Some(average) => info!("Average mean wait: {:.2}", average),
        None => info!("Average mean wait: n/a"),
    }

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(world: SimWorld) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Intersection Sim UI...");
    println!();
    println!("Controls:");
    println!("  SPACE       - Toggle fixed/adaptive control");
    println!("  R           - Reset simulation and metrics");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=info".to_string(),
                    level: bevy::log::Level::INFO,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Intersection Sim".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(intersection_sim::ui::SimWorldResource(world))
        .add_plugins(intersection_sim::ui::IntersectionUIPlugin)
        .run();
}
