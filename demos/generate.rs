use std::{error::Error, fs, path::PathBuf, sync::OnceLock};

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use wmaze::{
    algorithms::{default_registry, Generator, MazeSpec, Params},
    dims::Dims3D,
    graph::Graph as _,
    grid::{clamp_size, make_grid},
    progress::ProgressHandle,
};

#[derive(Parser, Debug)]
#[command(about = "Generates a grid maze and prints its passages")]
struct Args {
    #[arg(default_value_t = 10)]
    width: i32,
    #[arg(default_value_t = 10)]
    height: i32,
    #[arg(default_value_t = 1)]
    depth: i32,

    /// Seed of the maze, random if not set
    #[arg(short, long)]
    seed: Option<u64>,

    /// Name of the generator
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// RON maze spec, overrides the size, seed and algorithm
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn init_logging(verbose: bool) {
    log::set_logger(LOGGER.get_or_init(|| StderrLogger)).unwrap();
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let spec = match &args.spec {
        Some(path) => ron::from_str(&fs::read_to_string(path)?)?,
        None => MazeSpec {
            size: clamp_size(Dims3D(args.width, args.height, args.depth)),
            seed: args.seed,
            generator: args.algorithm.map(|name| (name, Params::default())),
        },
    };

    let registry = default_registry();
    if !spec.validate(&registry) {
        return Err(format!("invalid maze spec: {:?}", spec).into());
    }

    let seed = spec.seed.unwrap_or_else(rand::random);
    println!("Seed: {}", seed);

    let grid = make_grid(spec.size);
    let generator =
        Generator::from_registry(&registry, spec.generator.as_ref())?.with_seed(Some(seed));
    let mazes = generator.generate_many(&grid, args.count, ProgressHandle::new())?;

    for (i, maze) in mazes.iter().enumerate() {
        println!(
            "Maze {}: {} cells, {} passages",
            i,
            maze.node_count(),
            maze.edge_count()
        );

        for (a, b) in maze.edges() {
            let Dims3D(ax, ay, az) = Dims3D::from_linear_index(a, spec.size);
            let Dims3D(bx, by, bz) = Dims3D::from_linear_index(b, spec.size);
            println!("  ({ax}, {ay}, {az}) -- ({bx}, {by}, {bz})");
        }
    }

    Ok(())
}
