//! Loading of titration tasks from files.
//!
//! A task file is either a bare JSON document or a text document in which the
//! JSON follows a `TITRATION` (or `TITRATION TASK`) header line, up to the next
//! all-caps header or the end of the file:
//! ```text
//! acetic acid with sodium hydroxide, lab 3
//! TITRATION
//! {
//!   "spec": { "V_a": 0.0513, "C_a": 0.131, "C_b": 0.0953, "Ka": 1.76e-5 },
//!   "V_max": 0.15,
//!   "samples_per_regime": 100
//! }
//! ```
use crate::Titration::titration_config::TitrationTask;
use crate::Titration::titration_error::TitrationError;
use log::{error, info, warn};
use std::fs;
use std::path::Path;

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_titration_task(&self) -> Result<TitrationTask, TitrationError> {
        load_titration_task(&self.file_name)
    }
}

/// Reads and validates a titration task from `file_name`.
pub fn load_titration_task(file_name: &str) -> Result<TitrationTask, TitrationError> {
    let path = Path::new(file_name);
    let content = fs::read_to_string(path).map_err(|source| TitrationError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<&str> = content.lines().collect();

    // Find the TITRATION header
    let start_index = lines
        .iter()
        .position(|line| {
            let trimmed = line.trim().to_uppercase();
            trimmed == "TITRATION" || trimmed == "TITRATION TASK"
        })
        .map(|i| i + 1);
    let (start_index, section) = match start_index {
        Some(start_index) => {
            // Find the end index (next header or end of file)
            let end_index = lines[start_index..]
                .iter()
                .position(|line| is_header(line))
                .map_or(lines.len(), |i| start_index + i);
            (start_index, lines[start_index..end_index].join("\n"))
        }
        None => (0, content.clone()),
    };

    let task = match serde_json::from_str::<TitrationTask>(&section) {
        Ok(task) => task,
        Err(e) => {
            let actual_line = start_index + e.line();
            error!(
                "Error parsing titration task at line {}, column {} (line {} in file '{}'): {}",
                e.line(),
                e.column(),
                actual_line,
                file_name,
                e
            );
            if let Some(problem_line) = actual_line.checked_sub(1).and_then(|i| lines.get(i)) {
                error!("Problematic line: {}", problem_line);
            }
            return Err(e.into());
        }
    };
    task.spec.validate()?;
    if task.samples_per_regime < 2 {
        warn!(
            "Task in '{}' asks for {} sample(s) per regime",
            file_name, task.samples_per_regime
        );
    }
    info!("Loaded titration task from file '{}'", file_name);
    Ok(task)
}

fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|c| c.is_alphabetic())
        && trimmed
            .chars()
            .all(|c| c.is_uppercase() || c == '_' || c == ' ')
}
