use clap::{Parser, Subcommand, ValueEnum};
use springnet_core::{scene, StepParams, Vec3, World};

#[derive(Parser)]
#[command(name = "springnet")]
#[command(about = "Springnet - a damped mass-spring network simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a built-in scene and print particle positions
    Run {
        /// Scene to simulate
        #[arg(long, value_enum, default_value = "chain")]
        scene: Scene,
        /// Number of simulation steps
        #[arg(long, default_value_t = 600)]
        steps: usize,
        /// Fixed time step in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Spring constant
        #[arg(long, default_value_t = 40.0)]
        stiffness: f32,
        /// Along-spring damping coefficient
        #[arg(long, default_value_t = 0.5)]
        damping: f32,
        /// Mass shared by every particle
        #[arg(long, default_value_t = 1.0)]
        mass: f32,
        /// Gravity acceleration along the y axis
        #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
        gravity_y: f32,
        /// Fraction of rebound speed kept on a wall bounce, in [0, 1]
        #[arg(long, default_value_t = 0.8)]
        restitution: f32,
        /// Print positions every N steps (0 = only the final state)
        #[arg(long, default_value_t = 0)]
        print_every: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scene {
    /// Rope of 16 segments hanging across the box
    Chain,
    /// 8x8 cloth sheet falling through the box
    Lattice,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scene,
            steps,
            dt,
            stiffness,
            damping,
            mass,
            gravity_y,
            restitution,
            print_every,
        } => {
            let params = StepParams::new()
                .with_stiffness(stiffness)
                .with_damping(damping)
                .with_particle_mass(mass)
                .with_gravity(Vec3::new(0.0, gravity_y, 0.0))
                .with_restitution(restitution);

            match run_scene(scene, steps, dt, &params, print_every) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run_scene(
    scene: Scene,
    steps: usize,
    dt: f32,
    params: &StepParams,
    print_every: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut world = match scene {
        Scene::Chain => scene::chain(Vec3::new(-0.8, 0.8, 0.0), Vec3::new(0.8, 0.8, 0.0), 16),
        Scene::Lattice => scene::lattice(Vec3::new(-0.6, 0.5, -0.6), 8, 8, 0.15),
    };

    for step in 0..steps {
        world.step(dt, params)?;
        if print_every > 0 && (step + 1) % print_every == 0 {
            print_state(step + 1, &world);
        }
    }

    if print_every == 0 {
        print_state(steps, &world);
    }

    Ok(())
}

fn print_state(step: usize, world: &World) {
    println!("step {}", step);
    for (i, pos) in world.positions.iter().enumerate() {
        println!("{} = ({:.4}, {:.4}, {:.4})", i, pos.x, pos.y, pos.z);
    }
}
