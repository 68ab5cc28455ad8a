//! # Esquemas de Planificación
//! src/scheme.rs
//!
//! Esquemas predefinidos (qué algoritmo atiende cada cola) y parsing de
//! configuraciones personalizadas del tipo `rr:2,rr:3,psjf`.
//!
//! | Esquema | Cola 1 | Cola 2 | Cola 3 |
//! |---------|--------|--------|--------|
//! | 1       | RR(1)  | RR(3)  | SJF    |
//! | 2       | RR(3)  | RR(5)  | FCFS   |
//! | 3       | RR(2)  | RR(3)  | PSJF   |

use crate::error::{Result, SchedulerError};
use crate::mlq::MultilevelQueue;
use crate::scheduler::{Fcfs, PreemptiveSjf, QueueId, RoundRobin, SchedulingPolicy, Sjf};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Esquemas del menú
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// RR(1), RR(3), SJF
    RrSjf = 1,
    /// RR(3), RR(5), FCFS
    RrFcfs = 2,
    /// RR(2), RR(3), PSJF
    RrPsjf = 3,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::RrSjf, Scheme::RrFcfs, Scheme::RrPsjf];

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Scheme::RrSjf),
            2 => Some(Scheme::RrFcfs),
            3 => Some(Scheme::RrPsjf),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Niveles en el formato de `parse_levels`
    pub fn levels(&self) -> &'static str {
        match self {
            Scheme::RrSjf => "rr:1,rr:3,sjf",
            Scheme::RrFcfs => "rr:3,rr:5,fcfs",
            Scheme::RrPsjf => "rr:2,rr:3,psjf",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scheme::RrSjf => "RR(1), RR(3), SJF",
            Scheme::RrFcfs => "RR(3), RR(5), FCFS",
            Scheme::RrPsjf => "RR(2), RR(3), STCF",
        }
    }

    /// Construye el orquestador de tres colas
    pub fn build(&self) -> Result<MultilevelQueue> {
        parse_levels(self.levels())
    }
}

impl FromStr for Scheme {
    type Err = SchedulerError;

    /// `"1"`, `"2"` o `"3"`; usado como value parser de `--scheme`
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| SchedulerError::UnknownScheme(s.trim().to_string()))
    }
}

/// Parsea un algoritmo: `fcfs`, `sjf`, `psjf` (alias `srtf`, `stcf`)
/// o Round Robin como `rr:N`, `rr=N` o `rr(N)`.
pub fn parse_policy(s: &str) -> Result<Box<dyn SchedulingPolicy>> {
    let name = s.trim().to_lowercase();

    match name.as_str() {
        "fcfs" => return Ok(Box::new(Fcfs)),
        "sjf" => return Ok(Box::new(Sjf)),
        "psjf" | "srtf" | "stcf" => return Ok(Box::new(PreemptiveSjf)),
        _ => {}
    }

    let quantum = name
        .strip_prefix("rr")
        .map(|rest| {
            rest.trim_start_matches([':', '=', '('])
                .trim_end_matches(')')
                .trim()
        })
        .and_then(|q| q.parse::<i64>().ok())
        .ok_or_else(|| SchedulerError::UnknownPolicy(s.trim().to_string()))?;

    Ok(Box::new(RoundRobin::new(quantum)?))
}

/// Parsea una lista separada por comas; la posición define la cola
/// (la primera es la cola 1, de mayor prioridad).
pub fn parse_levels(spec: &str) -> Result<MultilevelQueue> {
    let mut mlq = MultilevelQueue::new();

    for (idx, part) in spec.split(',').filter(|p| !p.trim().is_empty()).enumerate() {
        let queue = QueueId::try_from(idx + 1).map_err(|_| SchedulerError::NoQueues)?;
        mlq.add_level(queue, parse_policy(part)?);
    }

    if mlq.is_empty() {
        return Err(SchedulerError::NoQueues);
    }

    Ok(mlq)
}

/// Menú interactivo: repite la pregunta hasta recibir 1, 2 o 3
pub fn prompt_scheme<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Scheme> {
    writeln!(output, "Menú de esquemas:")?;
    for scheme in Scheme::ALL {
        writeln!(output, "{}. {}.", scheme.number(), scheme.description())?;
    }

    let mut line = String::new();
    loop {
        write!(output, "Escoja el esquema que desea implementar: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scheme selected",
            ));
        }

        match line.trim().parse::<u8>() {
            Ok(n) => {
                if let Some(scheme) = Scheme::from_number(n) {
                    return Ok(scheme);
                }
            }
            Err(_) => writeln!(output, "Por favor, introduzca un número válido.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(mlq: &MultilevelQueue) -> Vec<(QueueId, String)> {
        mlq.levels().map(|(q, p)| (q, p.name())).collect()
    }

    // ==================== Presets ====================

    #[test]
    fn test_scheme_one() {
        let mlq = Scheme::RrSjf.build().unwrap();
        assert_eq!(
            names(&mlq),
            vec![
                (1, "RR(1)".to_string()),
                (2, "RR(3)".to_string()),
                (3, "SJF".to_string())
            ]
        );
    }

    #[test]
    fn test_scheme_two_and_three() {
        assert_eq!(Scheme::RrFcfs.build().unwrap().to_string(), "Q1=RR(3), Q2=RR(5), Q3=FCFS");
        assert_eq!(Scheme::RrPsjf.build().unwrap().to_string(), "Q1=RR(2), Q2=RR(3), Q3=PSJF");
    }

    #[test]
    fn test_scheme_from_number() {
        assert_eq!(Scheme::from_number(2), Some(Scheme::RrFcfs));
        assert_eq!(Scheme::from_number(0), None);
        assert_eq!(Scheme::from_number(4), None);
        assert_eq!(Scheme::RrPsjf.number(), 3);
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!(" 1 ".parse::<Scheme>().unwrap(), Scheme::RrSjf);
        assert_eq!(
            "9".parse::<Scheme>(),
            Err(SchedulerError::UnknownScheme("9".to_string()))
        );
        assert!(matches!(
            "dos".parse::<Scheme>(),
            Err(SchedulerError::UnknownScheme(_))
        ));
    }

    // ==================== Policy Parsing ====================

    #[test]
    fn test_parse_policy_names() {
        assert_eq!(parse_policy("FCFS").unwrap().name(), "FCFS");
        assert_eq!(parse_policy("sjf").unwrap().name(), "SJF");
        assert_eq!(parse_policy("stcf").unwrap().name(), "PSJF");
        assert_eq!(parse_policy("srtf").unwrap().name(), "PSJF");
    }

    #[test]
    fn test_parse_round_robin_forms() {
        assert_eq!(parse_policy("rr:4").unwrap().name(), "RR(4)");
        assert_eq!(parse_policy("RR(2)").unwrap().name(), "RR(2)");
        assert_eq!(parse_policy("rr=7").unwrap().name(), "RR(7)");
    }

    #[test]
    fn test_parse_round_robin_bad_quantum() {
        assert_eq!(
            parse_policy("rr:0").unwrap_err(),
            SchedulerError::InvalidQuantum(0)
        );
        assert_eq!(
            parse_policy("rr(-3)").unwrap_err(),
            SchedulerError::InvalidQuantum(-3)
        );
    }

    #[test]
    fn test_parse_unknown_policy() {
        assert_eq!(
            parse_policy("lottery").unwrap_err(),
            SchedulerError::UnknownPolicy("lottery".to_string())
        );
        assert!(matches!(
            parse_policy("rr:abc").unwrap_err(),
            SchedulerError::UnknownPolicy(_)
        ));
    }

    #[test]
    fn test_parse_levels_assigns_queue_ids() {
        let mlq = parse_levels("psjf, rr:2").unwrap();
        assert_eq!(
            names(&mlq),
            vec![(1, "PSJF".to_string()), (2, "RR(2)".to_string())]
        );
    }

    #[test]
    fn test_parse_levels_empty() {
        assert_eq!(parse_levels(" , ").unwrap_err(), SchedulerError::NoQueues);
    }

    // ==================== Interactive Menu ====================

    #[test]
    fn test_prompt_retries_until_valid() {
        let input = b"abc\n7\n2\n" as &[u8];
        let mut output = Vec::new();

        let scheme = prompt_scheme(input, &mut output).unwrap();
        assert_eq!(scheme, Scheme::RrFcfs);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. RR(1), RR(3), SJF."));
        assert!(text.contains("3. RR(2), RR(3), STCF."));
        assert_eq!(text.matches("introduzca un número válido").count(), 1);
        assert_eq!(text.matches("Escoja el esquema").count(), 3);
    }

    #[test]
    fn test_prompt_eof() {
        let err = prompt_scheme(b"" as &[u8], Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
