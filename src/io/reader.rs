//! # Lector de Procesos
//! src/io/reader.rs
//!
//! Formato de entrada:
//!
//! ```text
//! # archivo de entrada
//! # etiqueta; BT; AT; Q; Pr
//! A; 6; 0; 1; 5
//! B; 9; 0; 1; 4
//! ```
//!
//! Las líneas vacías y las que empiezan con `#` se ignoran.

use crate::error::AppError;
use crate::process::Process;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const FIELDS: usize = 5;

/// Parsea el contenido completo de un archivo de entrada
pub fn parse_processes(text: &str) -> Result<Vec<Process>, AppError> {
    let mut processes = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields: Vec<&str> = line.split(';').map(str::trim).collect();
        // Tolerar un `;` final
        if fields.len() == FIELDS + 1 && fields[FIELDS].is_empty() {
            warn!("line {}: trailing ';' ignored", line_no);
            fields.pop();
        }

        if fields.len() != FIELDS {
            return Err(AppError::Parse {
                line: line_no,
                reason: format!(
                    "expected {} fields (label; BT; AT; Q; Pr), found {}",
                    FIELDS,
                    fields.len()
                ),
            });
        }

        let label = fields[0];
        if label.is_empty() {
            return Err(AppError::Parse {
                line: line_no,
                reason: "empty process label".to_string(),
            });
        }

        let burst = parse_field::<i64>(fields[1], "burst time", line_no)?;
        let arrival = parse_field::<i64>(fields[2], "arrival time", line_no)?;
        let queue = parse_field::<u32>(fields[3], "queue", line_no)?;
        let priority = parse_field::<i32>(fields[4], "priority", line_no)?;

        let process = Process::new(label, burst, arrival, queue, priority).map_err(|e| {
            AppError::Parse {
                line: line_no,
                reason: e.to_string(),
            }
        })?;

        debug!("parsed {}", process);
        processes.push(process);
    }

    Ok(processes)
}

/// Lee y parsea un archivo de entrada
pub fn read_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, AppError> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_processes(&text)
}

fn parse_field<T: FromStr>(value: &str, name: &str, line: usize) -> Result<T, AppError> {
    value.parse::<T>().map_err(|_| AppError::Parse {
        line,
        reason: format!("invalid {}: '{}'", name, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "# archivo de entrada\n\
                          # etiqueta; BT; AT; Q; Pr\n\
                          A; 6; 0; 1; 5\n\
                          B; 9; 0; 1; 4\n\
                          \n\
                          C; 10; 2; 2; 3\n";

    #[test]
    fn test_parse_sample() {
        let processes = parse_processes(SAMPLE).unwrap();
        assert_eq!(processes.len(), 3);

        let c = &processes[2];
        assert_eq!(c.id(), "C");
        assert_eq!(c.burst_time(), 10);
        assert_eq!(c.arrival_time(), 2);
        assert_eq!(c.queue(), 2);
        assert_eq!(c.priority(), 3);
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let processes = parse_processes("Z;1;0;1;1\nA;1;0;1;1\n").unwrap();
        let ids: Vec<&str> = processes.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["Z", "A"]);
    }

    #[test]
    fn test_parse_trailing_separator() {
        let processes = parse_processes("A; 1; 0; 1; 1;\n").unwrap();
        assert_eq!(processes.len(), 1);
    }

    // ==================== Errors ====================

    #[test]
    fn test_wrong_field_count() {
        let err = parse_processes("# header\nA; 1; 0; 1\n").unwrap_err();
        match err {
            AppError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 4"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_processes("A; x; 0; 1; 1\n").unwrap_err();
        assert!(err.to_string().contains("invalid burst time: 'x'"));
    }

    #[test]
    fn test_negative_burst_rejected() {
        let err = parse_processes("A; -2; 0; 1; 1\n").unwrap_err();
        match err {
            AppError::Parse { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("burst_time"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_huge_arrival_rejected() {
        let err = parse_processes("A; 1; 0; 1; 1\nB; 1; 9223372036854775807; 1; 1\n").unwrap_err();
        match err {
            AppError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("arrival_time"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_label() {
        let err = parse_processes(" ; 1; 0; 1; 1\n").unwrap_err();
        assert!(err.to_string().contains("empty process label"));
    }

    // ==================== Files ====================

    #[test]
    fn test_read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let processes = read_processes(file.path()).unwrap();
        assert_eq!(processes.len(), 3);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_processes("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
