use anyhow::{anyhow, Result};
use knapsack_algorithms::{solve, Version};
use knapsack_structs::core::{Experiment, Instance, KnownSolution, OutputData, Solution, Solutions};
use knapsack_utils::{dejsonify, time_ms};
use log::{debug, info, warn};
use serde_json::{from_value, Value};
use std::{fs, io::Read};

/// Everything needed to run a single solve.
#[derive(Debug, Clone)]
pub struct Job {
    pub version: Version,
    pub instance: Instance,
    pub known_solutions: Vec<Solution>,
}

/// Builds a job from the experiment, instance and (optional) solutions documents.
/// `strategy` takes precedence over the experiment's `version`.
pub fn load_job(documents: Vec<Value>, strategy: Option<&str>) -> Result<Job> {
    let mut documents = documents.into_iter();

    info!("Reading experiment.");
    let experiment: Experiment = from_value(
        documents
            .next()
            .ok_or_else(|| anyhow!("Missing experiment document"))?,
    )
    .map_err(|e| anyhow!("Invalid experiment: {}", e))?;
    let version = select_version(strategy, experiment.version().map(String::as_str))?;
    info!("\tVersion: {}", version);

    info!("Parsing instance.");
    let instance: Instance = from_value(
        documents
            .next()
            .ok_or_else(|| anyhow!("Missing instance document"))?,
    )
    .map_err(|e| anyhow!("Invalid instance: {}", e))?;
    debug!(
        "{} items, capacity {}, total weight {}, total value {}",
        instance.item_count,
        instance.capacity,
        instance.total_weight(),
        instance.total_value()
    );

    let known_solutions = match documents.next() {
        None | Some(Value::Null) => Vec::new(),
        Some(doc) => match from_value::<Solutions>(doc) {
            Ok(solutions) => solutions.values(),
            Err(e) => {
                debug!("Ignoring unrecognised solutions document: {}", e);
                Vec::new()
            }
        },
    };

    Ok(Job {
        version,
        instance,
        known_solutions,
    })
}

pub fn select_version(strategy: Option<&str>, experiment_version: Option<&str>) -> Result<Version> {
    strategy
        .or(experiment_version)
        .ok_or_else(|| anyhow!("No version selected. Set 'version' in the experiment or pass --strategy"))?
        .parse()
}

/// Solves the job, timing only the solver call.
pub fn run_job(job: &Job) -> OutputData {
    info!("Solving knapsack.");
    let (solution, time) = time_ms(|| solve(job.version, &job.instance));
    info!("Solution: {}", solution.value);
    info!("Time: {}ms.", time);

    for known in &job.known_solutions {
        if *known != solution {
            warn!(
                "Computed solution ({}) differs from known solution ({})",
                solution.value, known.value
            );
        }
    }

    OutputData { solution, time }
}

/// Reads an argument that is either '-' for stdin, a path to a json file, or literal json.
pub fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if input.ends_with(".json") {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))
    } else {
        Ok(input.to_string())
    }
}

pub fn load_instance(input: &str) -> Result<Instance> {
    dejsonify::<Instance>(&load_input(input)?).map_err(|e| anyhow!("Invalid instance: {}", e))
}

/// Accepts a bare value or an output document such as `{"solution": 220, "time": 0.1}`.
pub fn load_solution(input: &str) -> Result<Solution> {
    let input = load_input(input)?;
    match dejsonify::<Solution>(&input) {
        Ok(solution) => Ok(solution),
        Err(_) => dejsonify::<KnownSolution>(&input)
            .map(|known| known.solution)
            .map_err(|e| anyhow!("Failed to parse solution: {}", e)),
    }
}
