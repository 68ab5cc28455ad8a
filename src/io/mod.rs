//! # Entrada y Salida
//! src/io/mod.rs
//!
//! Adaptadores de archivo alrededor del núcleo:
//! - `reader`: lista de procesos en texto delimitado por `;`
//! - `writer`: tabla de resultados y diagrama de Gantt en texto
//! - `report`: reporte completo en JSON

pub mod reader;
pub mod report;
pub mod writer;

pub use reader::{parse_processes, read_processes};
pub use report::Report;
pub use writer::{default_output_path, render_gantt, render_input, render_table, write_table};

use crate::error::AppError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Escribe a un archivo temporal y lo renombra al destino
/// (atómico en sistemas Unix).
///
/// Si algo falla el temporal se borra y el destino queda intacto.
pub(crate) fn write_atomic<F>(path: &Path, fill: F) -> Result<(), AppError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), AppError>,
{
    let temp_path = temp_path_for(path);

    let result = write_then_rename(&temp_path, path, fill);
    if result.is_err() {
        // Best effort: el error original es el que importa
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_then_rename<F>(temp_path: &Path, path: &Path, fill: F) -> Result<(), AppError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), AppError>,
{
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::new(file);

    fill(&mut writer)?;
    writer.flush()?;
    drop(writer);

    fs::rename(temp_path, path)?;
    Ok(())
}

/// `out.txt` -> `out.txt.tmp`, sin pasar por UTF-8
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
