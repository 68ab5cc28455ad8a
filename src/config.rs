//! # Configuración del Simulador
//! src/config.rs
//!
//! Este módulo define la configuración de la línea de comandos con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./mlq run mlq001.txt --scheme 1
//! ./mlq run mlq001.txt --levels "rr:2,rr:3,psjf" --json reporte.json --gantt
//! ./mlq generate mlq_gen.txt --count 20 --seed 42
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! MLQ_SCHEME=3 MLQ_LOG=debug ./mlq run mlq001.txt
//! ```

use crate::io::default_output_path;
use crate::process::MAX_TIME;
use crate::scheme::Scheme;
use crate::workload::WorkloadSpec;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Simulador de planificación de CPU con colas multinivel
#[derive(Debug, Clone, Parser)]
#[command(name = "mlq")]
#[command(about = "Simulador de planificación de CPU con colas multinivel")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Nivel de log (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn", env = "MLQ_LOG", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Planifica un archivo de procesos
    Run(RunConfig),

    /// Genera un archivo de procesos aleatorio
    Generate(GenerateConfig),
}

/// Configuración de una corrida
#[derive(Debug, Clone, Args)]
pub struct RunConfig {
    /// Archivo de entrada (etiqueta; BT; AT; Q; Pr)
    pub input: PathBuf,

    /// Archivo de salida; por defecto `<entrada>_salida.txt`
    #[arg(short, long, env = "MLQ_OUTPUT")]
    pub output: Option<PathBuf>,

    // === Esquema ===

    /// Esquema predefinido (1, 2 o 3); sin él se pregunta por stdin
    #[arg(short, long, env = "MLQ_SCHEME")]
    pub scheme: Option<Scheme>,

    /// Colas personalizadas, p.ej. "rr:2,rr:3,psjf" (la primera es la cola 1)
    #[arg(long, env = "MLQ_LEVELS", conflicts_with = "scheme")]
    pub levels: Option<String>,

    // === Reportes ===

    /// Escribe además un reporte JSON
    #[arg(long, env = "MLQ_JSON")]
    pub json: Option<PathBuf>,

    /// Imprime el diagrama de Gantt
    #[arg(long)]
    pub gantt: bool,
}

/// Configuración del generador de cargas
#[derive(Debug, Clone, Args)]
pub struct GenerateConfig {
    /// Archivo a escribir
    pub output: PathBuf,

    /// Número de procesos
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Número de colas
    #[arg(long, default_value = "3")]
    pub queues: u32,

    /// Burst time máximo
    #[arg(long = "max-burst", default_value = "10")]
    pub max_burst: u64,

    /// Arrival time máximo
    #[arg(long = "max-arrival", default_value = "20")]
    pub max_arrival: u64,

    /// Semilla del generador
    #[arg(long, default_value = "0", env = "MLQ_SEED")]
    pub seed: u64,
}

impl Cli {
    /// Parsea los argumentos del proceso
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl RunConfig {
    /// Crea una configuración para `input` sin opciones
    #[cfg(test)]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            scheme: None,
            levels: None,
            json: None,
            gantt: false,
        }
    }

    /// Ruta de salida efectiva
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("Input file must not be empty".to_string());
        }

        if self.scheme.is_some() && self.levels.is_some() {
            return Err("Scheme and levels are mutually exclusive".to_string());
        }

        if let Some(levels) = &self.levels {
            if levels.trim().is_empty() {
                return Err("Levels must name at least one policy".to_string());
            }
        }

        if self.output_path() == self.input {
            return Err("Output file must differ from input file".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self, scheme: &str) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║          Multilevel Queue Scheduler Configuration            ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("📂 Archivos:");
        println!("   Entrada:      {}", self.input.display());
        println!("   Salida:       {}", self.output_path().display());
        if let Some(json) = &self.json {
            println!("   Reporte JSON: {}", json.display());
        }
        println!();
        println!("🗂️  Colas:        {}", scheme);
        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl GenerateConfig {
    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("Process count must be >= 1".to_string());
        }
        if self.queues == 0 {
            return Err("Queue count must be >= 1".to_string());
        }
        if self.max_burst == 0 {
            return Err("Max burst must be >= 1".to_string());
        }
        if self.max_burst > MAX_TIME || self.max_arrival > MAX_TIME {
            return Err(format!("Max burst/arrival must be <= {}", MAX_TIME));
        }
        Ok(())
    }

    pub fn spec(&self) -> WorkloadSpec {
        WorkloadSpec {
            count: self.count,
            queues: self.queues,
            max_burst: self.max_burst,
            max_arrival: self.max_arrival,
            seed: self.seed,
        }
    }
}

impl Default for GenerateConfig {
    /// Configuración por defecto
    fn default() -> Self {
        let spec = WorkloadSpec::default();
        Self {
            output: PathBuf::from("mlq_gen.txt"),
            count: spec.count,
            queues: spec.queues,
            max_burst: spec.max_burst,
            max_arrival: spec.max_arrival,
            seed: spec.seed,
        }
    }
}
