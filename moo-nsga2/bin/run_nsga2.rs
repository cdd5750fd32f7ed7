use clap::Parser;
use moo_nsga2::convergence::convergence;
use moo_nsga2::diversity::{diversity, front_extremes};
use moo_nsga2::{
    Nsga2ConfigBuilder, ParallelConfig, hypervolume, load_reference_front, nsga2_optimize,
};
use moo_test_functions::{get_function, get_function_metadata, list_functions, pareto_front};
use ndarray::Array1;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "run_nsga2",
    about = "Run NSGA-II on a selected multi-objective benchmark function"
)]
struct Cli {
    /// Name of the benchmark function to optimize (use --list-functions to see available options)
    #[arg(long, default_value = "zdt1")]
    function: String,

    /// Dimensionality of the problem (defaults to the function's recommended dimension)
    #[arg(long)]
    dim: Option<usize>,

    /// Population size (must be a multiple of 4)
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// Number of generations
    #[arg(long, default_value_t = 250)]
    ngen: usize,

    /// Per-pair crossover probability in [0, 1]
    #[arg(long, default_value_t = 0.9)]
    cxpb: f64,

    /// Crossover distribution index
    #[arg(long, default_value_t = 20.0)]
    eta_c: f64,

    /// Mutation distribution index
    #[arg(long, default_value_t = 20.0)]
    eta_m: f64,

    /// Per-gene mutation probability (defaults to 1/dim)
    #[arg(long)]
    indpb: Option<f64>,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the reference Pareto front (defaults to the analytic front)
    #[arg(long)]
    ref_front: Option<PathBuf>,

    /// Number of analytic reference front points when no file is given
    #[arg(long, default_value_t = 1000)]
    front_points: usize,

    /// Hypervolume reference point as comma-separated values
    #[arg(long, default_value = "11,11")]
    ref_point: String,

    /// Print per-generation progress to stderr
    #[arg(long)]
    disp: bool,

    /// Disable parallel evaluation of the population
    #[arg(long)]
    no_parallel: bool,

    /// Number of threads for parallel evaluation (0 = use all available cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,
}

fn parse_ref_point(text: &str) -> Result<Array1<f64>, String> {
    let values: Result<Vec<f64>, _> = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect();
    match values {
        Ok(v) if !v.is_empty() => Ok(Array1::from_vec(v)),
        _ => Err(format!("cannot parse reference point '{text}'")),
    }
}

fn main() {
    let args = Cli::parse();

    if args.list_functions {
        let metadata = get_function_metadata();
        println!("Available functions:");
        for name in list_functions() {
            if let Some(meta) = metadata.get(&name) {
                println!(
                    "  {:<12} {}D, {} objectives: {}",
                    meta.name,
                    meta.dimensions[0],
                    meta.n_objectives,
                    meta.description
                );
            }
        }
        return;
    }

    let function_name = args.function.trim().to_lowercase();
    let function = match get_function(&function_name) {
        Some(f) => f,
        None => {
            eprintln!(
                "Error: function '{function_name}' not found. Use --list-functions to inspect available names."
            );
            process::exit(2);
        }
    };

    let metadata_map = get_function_metadata();
    let metadata = match metadata_map.get(&function_name) {
        Some(meta) => meta,
        None => {
            eprintln!("Error: no metadata available for '{function_name}'.");
            process::exit(2);
        }
    };

    let dimension = args.dim.unwrap_or(metadata.dimensions[0]);
    if dimension == 0 {
        eprintln!("Error: problem dimension must be greater than zero.");
        process::exit(2);
    }

    let bounds: Vec<(f64, f64)> = if metadata.bounds.len() == dimension {
        metadata.bounds.clone()
    } else {
        // Repeat the last bound pair when the requested dimension differs
        // from the recommended one (ZDT4 keeps its special first variable).
        let mut b = metadata.bounds.clone();
        let last = *b.last().unwrap_or(&(0.0, 1.0));
        b.resize(dimension, last);
        b
    };

    let ref_point = match parse_ref_point(&args.ref_point) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let reference = match &args.ref_front {
        Some(path) => match load_reference_front(path) {
            Ok(front) => front,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(2);
            }
        },
        None => match pareto_front(&function_name, args.front_points) {
            Some(front) => front,
            None => {
                eprintln!("Error: no analytic front for '{function_name}'.");
                process::exit(2);
            }
        },
    };

    let parallel = ParallelConfig {
        enabled: !args.no_parallel,
        num_threads: if args.threads == 0 {
            None
        } else {
            Some(args.threads)
        },
    };

    let mut builder = Nsga2ConfigBuilder::new()
        .pop_size(args.population)
        .ngen(args.ngen)
        .n_objectives(metadata.n_objectives)
        .cxpb(args.cxpb)
        .eta_c(args.eta_c)
        .eta_m(args.eta_m)
        .disp(args.disp)
        .parallel(parallel);
    if let Some(indpb) = args.indpb {
        builder = builder.indpb(indpb);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let config = match builder.build() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            process::exit(2);
        }
    };

    println!(
        "Running NSGA-II on '{}' ({}D), population={}, ngen={}...",
        function_name, dimension, args.population, args.ngen
    );

    let start = Instant::now();
    let report = match nsga2_optimize(&function, &bounds, config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: optimization failed: {e}");
            process::exit(2);
        }
    };
    let elapsed = start.elapsed();

    if args.disp {
        println!("\n{}", report.logbook);
    }

    println!("\nOptimization completed in {elapsed:.2?}");
    println!("Status: {}", report.message);
    println!(
        "Generations: {} | Evaluations: {} | Front size: {}",
        report.ngen,
        report.nfev,
        report.pareto_front().len()
    );

    let front: Vec<Array1<f64>> = report
        .pareto_front()
        .iter()
        .map(|ind| ind.f.clone())
        .collect();

    let hv = hypervolume(&front, &ref_point);
    println!("Hypervolume (ref {:?}): {:.6}", ref_point.to_vec(), hv);

    match convergence(&front, &reference) {
        Ok(c) => println!("Convergence: {c:.6}"),
        Err(e) => eprintln!("Warning: convergence unavailable: {e}"),
    }
    match front_extremes(&reference) {
        Ok((first, last)) => {
            println!("Diversity: {:.6}", diversity(&front, first, last));
        }
        Err(e) => eprintln!("Warning: diversity unavailable: {e}"),
    }
}
