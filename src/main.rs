use std::io::Read;

use clap::Parser;
use eyre::{Context, Result};
use log::{info, warn};

use u_cpu_sched::cli::Cli;
use u_cpu_sched::config::SimulatorConfig;
use u_cpu_sched::models::Task;
use u_cpu_sched::scheduler::ScheduleKpi;
use u_cpu_sched::workload::WorkloadGenerator;
use u_cpu_sched::{input, report, validation, AlgorithmKind};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn load_tasks(cli: &Cli) -> Result<Vec<Task>> {
    if let Some(n) = cli.random {
        info!("Generating {n} random task(s) with seed {}", cli.seed);
        return Ok(WorkloadGenerator::new(cli.seed).with_task_count(n).generate());
    }

    let text = match &cli.tasks {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read task file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read tasks from stdin")?;
            buf
        }
    };

    let tasks = input::parse_tasks(&text).context("Failed to parse tasks")?;
    info!("Tasks added successfully ({} task(s))", tasks.len());
    Ok(tasks)
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config =
        SimulatorConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let tasks = load_tasks(&cli)?;
    if let Err(issues) = validation::validate_tasks(&tasks) {
        for issue in issues {
            warn!("{}", issue.message);
        }
    }

    let kind = match &cli.algorithm {
        Some(name) => name.parse::<AlgorithmKind>()?,
        None => config.default_algorithm,
    };
    let algorithm = kind.with_quantum(config.resolve_quantum(cli.quantum))?;
    let schedule = algorithm
        .run(&tasks)
        .with_context(|| format!("Failed to schedule with {kind}"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print!("{}", report::render(&kind, &schedule));
    }

    if cli.kpi {
        let kpi = ScheduleKpi::calculate(&schedule, &tasks);
        println!("Makespan: {}", kpi.makespan);
        println!("Average completion time: {:.2}", kpi.avg_completion_time);
        println!("Average turnaround time: {:.2}", kpi.avg_turnaround_time);
        println!("Average waiting time: {:.2}", kpi.avg_waiting_time);
    }

    if !cli.no_save && config.save_report && !schedule.is_empty() {
        let dir = config.resolve_output_dir(cli.output_dir.as_deref());
        let timestamp = chrono::Local::now().naive_local();
        let path = report::save(&dir, &kind, &schedule, timestamp)
            .context("Failed to save schedule report")?;
        println!("Results have been saved to {}", path.display());
    }

    Ok(())
}
