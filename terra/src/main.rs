use std::io;

use clap::Parser;
use rand::{thread_rng, Rng as _};

use cterra::{Heuristic, Solver, Traversal};
use terra::{compare, logging, render, settings::Settings, AppError};

#[derive(Parser, Debug)]
#[clap(version, about, name = "terra")]
struct Args {
    #[clap(short = 'n', long, help = "Side length of the maze, odd and at least 5")]
    size: Option<i32>,
    #[clap(short, long, help = "Seed for deterministic generation")]
    seed: Option<u64>,
    #[clap(short, long, help = "Exploration strategy: bfs or dfs")]
    explore: Option<Traversal>,
    #[clap(short = 'a', long, help = "Solver: dijkstra or astar")]
    solve: Option<Solver>,
    #[clap(long, help = "A* heuristic: manhattan or zero")]
    heuristic: Option<Heuristic>,
    #[clap(short, long, action, help = "Run every exploration/solver pairing in parallel")]
    compare: bool,
    #[clap(long, action, help = "Print without colors")]
    no_color: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for more")]
    verbose: u8,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose));

    if args.reset_config {
        return Settings::reset_config(Settings::default_path());
    }

    if args.show_config_path {
        println!("{}", Settings::default_path().display());
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(Settings::default_path())?;
    let mut spec = settings.run_spec();
    spec.size = args.size.unwrap_or(spec.size);
    spec.traversal = args.explore.unwrap_or(spec.traversal);
    spec.solver = args.solve.unwrap_or(spec.solver);
    spec.heuristic = args.heuristic.unwrap_or(spec.heuristic);
    spec.validate()?;

    // drawn here so it can be printed and replayed
    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    spec.seed = Some(seed);

    let maze = spec.generator().generate()?;
    let color = settings.get_color() && !args.no_color;

    if args.compare {
        render::draw(&mut io::stdout(), &maze, None, color)?;
        println!("seed {}", seed);

        let mut reports = Vec::new();
        for result in compare::compare(&maze, &spec) {
            let report = result?;
            println!("{}", render::stats(&report));
            reports.push(report);
        }

        if let Some((dijkstra, a_star)) = compare::cost_mismatch(&reports) {
            log::warn!(
                "A* ({:?} heuristic) paid {} where Dijkstra paid {}",
                spec.heuristic,
                a_star,
                dijkstra
            );
        }
        return Ok(());
    }

    let report = cterra::run(&maze, &spec)?;
    render::draw(&mut io::stdout(), &maze, Some(&report.path), color)?;
    println!("seed {}", seed);
    println!("{}", render::stats(&report));

    Ok(())
}
