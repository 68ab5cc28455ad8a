//! # Escritor de Resultados
//! src/io/writer.rs
//!
//! Formato de salida:
//!
//! ```text
//! # archivo de salida
//! # etiqueta; BT; AT; Q; Pr; WT; CT; RT; TAT
//! A;6;0;1;5;0;6;0;6
//!
//! WT=0.00; CT=6.00; RT=0.00; TAT=6.00
//! ```

use super::write_atomic;
use crate::error::AppError;
use crate::metrics::Averages;
use crate::process::Process;
use crate::scheduler::Timeline;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

const OUTPUT_HEADER: &str = "# archivo de salida\n# etiqueta; BT; AT; Q; Pr; WT; CT; RT; TAT\n";
const INPUT_HEADER: &str = "# archivo de entrada\n# etiqueta; BT; AT; Q; Pr\n";

/// Tabla de resultados en el orden de emisión del orquestador
pub fn render_table(processes: &[Process], averages: &Averages) -> String {
    let mut out = String::from(OUTPUT_HEADER);

    for p in processes {
        let response = p
            .response_time()
            .map_or_else(|| "-".to_string(), |rt| rt.to_string());
        let _ = writeln!(
            out,
            "{};{};{};{};{};{};{};{};{}",
            p.id(),
            p.burst_time(),
            p.arrival_time(),
            p.queue(),
            p.priority(),
            p.waiting_time(),
            p.completion_time(),
            response,
            p.turnaround_time()
        );
    }

    let _ = write!(
        out,
        "\nWT={:.2}; CT={:.2}; RT={:.2}; TAT={:.2}",
        averages.waiting_time,
        averages.completion_time,
        averages.response_time,
        averages.turnaround_time
    );

    out
}

/// Escribe la tabla de resultados en `path`
pub fn write_table(
    path: impl AsRef<Path>,
    processes: &[Process],
    averages: &Averages,
) -> Result<(), AppError> {
    let table = render_table(processes, averages);
    write_atomic(path.as_ref(), |w| {
        w.write_all(table.as_bytes())?;
        Ok(())
    })
}

/// Lista de procesos en el formato del lector
pub fn render_input(processes: &[Process]) -> String {
    let mut out = String::from(INPUT_HEADER);
    for p in processes {
        let _ = writeln!(
            out,
            "{}; {}; {}; {}; {}",
            p.id(),
            p.burst_time(),
            p.arrival_time(),
            p.queue(),
            p.priority()
        );
    }
    out
}

/// Diagrama de Gantt en texto, una línea por tramo
///
/// Los huecos sin ejecución aparecen como `idle`.
pub fn render_gantt(timeline: &Timeline) -> String {
    let mut out = String::new();
    let mut cursor = 0;

    for slice in timeline {
        if slice.start > cursor {
            let _ = writeln!(out, "[{:>5}, {:>5})  idle", cursor, slice.start);
        }
        let _ = writeln!(
            out,
            "[{:>5}, {:>5})  Q{} {}",
            slice.start, slice.end, slice.queue, slice.process
        );
        cursor = slice.end;
    }

    out
}

/// `dir/mlq001.txt` -> `dir/mlq001_salida.txt`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mlq".to_string());
    input.with_file_name(format!("{}_salida.txt", stem))
}
