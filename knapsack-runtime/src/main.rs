use anyhow::{anyhow, Result};
use clap::{arg, Command};
use knapsack_algorithms::bottom_up;
use knapsack_challenges::knapsack::{Instance, Track, DEFAULT_BUDGET};
use knapsack_runtime::*;
use knapsack_utils::{jsonify, read_documents};
use log::info;
use std::{fs, path::PathBuf};

fn cli() -> Command {
    Command::new("knapsack-runtime")
        .about("Computes or verifies optimal knapsack values")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_solution")
                .about("Computes the optimal value of an instance")
                .arg(
                    arg!([INPUT] "Experiment, instance and solutions json documents. Path to a json file, a json string, or '-' for stdin")
                        .default_value("-")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--strategy [STRATEGY] "Overrides the experiment version: backtracking, top_down or bottom_up")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies that a value is optimal for an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Generates a random instance")
                .arg(arg!(<SEED> "Seed for the generator").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--budget [BUDGET] "Capacity as a percentage of the total weight")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    let env = env_logger::Env::new()
        .filter_or("KNAPSACK_LOG", "warn")
        .write_style("KNAPSACK_LOG_STYLE");
    env_logger::init_from_env(env);

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            sub_m
                .get_one::<String>("INPUT")
                .cloned()
                .unwrap_or_else(|| "-".to_string()),
            sub_m.get_one::<String>("strategy").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify_solution", sub_m)) => match (
            sub_m.get_one::<String>("INSTANCE"),
            sub_m.get_one::<String>("SOLUTION"),
        ) {
            (Some(instance), Some(solution)) => verify_solution(instance, solution),
            _ => Err(anyhow!("INSTANCE and SOLUTION are required")),
        },
        Some(("generate_instance", sub_m)) => match (
            sub_m.get_one::<u64>("SEED"),
            sub_m.get_one::<usize>("NUM_ITEMS"),
        ) {
            (Some(&seed), Some(&num_items)) => generate_instance(
                seed,
                num_items,
                sub_m
                    .get_one::<u32>("budget")
                    .copied()
                    .unwrap_or(DEFAULT_BUDGET),
                sub_m.get_one::<PathBuf>("output").cloned(),
            ),
            _ => Err(anyhow!("SEED and NUM_ITEMS are required")),
        },
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn compute_solution(
    input: String,
    strategy: Option<String>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    info!("Reading input.");
    let documents = read_documents(load_input(&input)?.as_bytes())?;
    let job = load_job(documents, strategy.as_deref())?;
    let output_data = run_job(&job);

    if let Some(path) = output_file {
        fs::write(&path, output_data.to_string())?;
        info!("output_data written to: {:?}", path);
    } else {
        println!("{}", output_data);
    }
    Ok(())
}

pub fn verify_solution(instance: &str, solution: &str) -> Result<()> {
    let instance = load_instance(instance)?;
    let solution = load_solution(solution)?;
    let optimum = bottom_up::solve_challenge(&instance);

    instance
        .verify_solution(&solution, &optimum)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}

pub fn generate_instance(
    seed: u64,
    num_items: usize,
    budget: u32,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let instance = Instance::generate_instance(seed, &Track { num_items, budget })?;
    if let Some(path) = output_file {
        fs::write(&path, jsonify(&instance))?;
        info!("instance written to: {:?}", path);
    } else {
        println!("{}", jsonify(&instance));
    }
    Ok(())
}
