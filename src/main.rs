//! # MLQ Scheduler - Entry Point
//! src/main.rs
//!
//! Punto de entrada del simulador: `run` planifica un archivo de procesos
//! y `generate` produce cargas de trabajo aleatorias.

use mlq_scheduler::config::{Cli, Command, GenerateConfig, RunConfig};
use mlq_scheduler::error::AppError;
use mlq_scheduler::io::{read_processes, render_gantt, write_table, Report};
use mlq_scheduler::metrics::RunMetrics;
use mlq_scheduler::scheme::{parse_levels, prompt_scheme};
use mlq_scheduler::workload::write_workload;
use mlq_scheduler::MultilevelQueue;
use std::io;

fn main() {
    let cli = Cli::new();
    init_logging(&cli.log_level);

    let result = match &cli.command {
        Command::Run(config) => run(config),
        Command::Generate(config) => generate(config),
    };

    if let Err(e) = result {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` tiene precedencia sobre `--log-level`
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn build_queues(config: &RunConfig) -> Result<MultilevelQueue, AppError> {
    if let Some(levels) = &config.levels {
        return Ok(parse_levels(levels)?);
    }

    let scheme = match config.scheme {
        Some(scheme) => scheme,
        None => prompt_scheme(io::stdin().lock(), io::stdout())?,
    };

    log::info!("using scheme {} ({})", scheme.number(), scheme.description());
    Ok(scheme.build()?)
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    config.validate().map_err(AppError::Config)?;

    let mlq = build_queues(config)?;
    let scheme = mlq.to_string();
    config.print_summary(&scheme);

    let processes = read_processes(&config.input)?;
    log::info!("read {} processes from {}", processes.len(), config.input.display());

    let run = mlq.run(processes)?;
    let metrics = RunMetrics::collect(&run)?;

    let output = config.output_path();
    write_table(&output, &run.completed, &metrics.averages)?;

    if let Some(json) = &config.json {
        Report::new(scheme.as_str(), &run, &metrics).save(json)?;
        println!("🧾 Reporte JSON: {}", json.display());
    }

    println!("✅ {} procesos planificados -> {}", run.completed.len(), output.display());
    println!();
    for queue in &run.queues {
        println!(
            "   Q{} {:<6} {:>3} procesos  [{} -> {}]",
            queue.queue, queue.policy, queue.processes, queue.start, queue.end
        );
    }
    println!();
    println!(
        "📊 WT={:.2}; CT={:.2}; RT={:.2}; TAT={:.2}",
        metrics.averages.waiting_time,
        metrics.averages.completion_time,
        metrics.averages.response_time,
        metrics.averages.turnaround_time
    );
    println!(
        "   Makespan: {}  CPU: {:.1}%  Throughput: {:.3} proc/tick",
        metrics.makespan,
        metrics.cpu_utilization * 100.0,
        metrics.throughput
    );

    if config.gantt {
        println!();
        println!("🕒 Gantt:");
        print!("{}", render_gantt(&run.timeline));
    }

    Ok(())
}

fn generate(config: &GenerateConfig) -> Result<(), AppError> {
    config.validate().map_err(AppError::Config)?;

    let written = write_workload(&config.output, &config.spec())?;
    println!(
        "📦 {} procesos generados en {} (semilla {})",
        written,
        config.output.display(),
        config.seed
    );
    Ok(())
}
