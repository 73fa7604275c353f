//! Handles the core logic of processing a single instance file.
//!
//! This module loads an instance, runs all five constraint queries on it
//! through the bounded runner, logs the outcomes and witness walks, and turns
//! the results into rows of the results table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::Color;
use crate::instance_loader::{self, Instance};
use crate::path::{BoundedRunner, Constraint, PathExplorer, PathResult, QueryOutcome};

/// One line of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceRow {
    pub name: String,
    pub vertex_count: usize,
    pub results: Vec<(Constraint, PathResult)>,
}

impl InstanceRow {
    /// Result for `constraint`, or `Inconclusive` if it was never run.
    pub fn result(&self, constraint: Constraint) -> PathResult {
        self.results
            .iter()
            .find(|(c, _)| *c == constraint)
            .map_or(PathResult::Inconclusive, |(_, r)| *r)
    }
}

/// Loads one instance file, logging its size and any loader warnings.
///
/// # Errors
/// Returns `AppError::InstanceLoad` if the file cannot be read or parsed.
pub fn load_instance(file_path: &Path, quiet_mode: bool) -> Result<Instance, AppError> {
    verbose_println!(quiet_mode, "[STEP 1] Loading instance...");
    let instance = instance_loader::load_instance_from_file(file_path)?;

    verbose_println!(
        quiet_mode,
        "   => {} vertices, {} edges ({} red), s = {}, t = {}",
        instance.graph.vertex_count(),
        instance.graph.edge_count(),
        instance.graph.count_color(Color::Red),
        instance.vertex_names[instance.source],
        instance.vertex_names[instance.target]
    );
    for warning in &instance.warnings {
        verbose_eprintln!(quiet_mode, "   [WARNING] {}: {}", instance.name, warning);
    }
    Ok(instance)
}

/// Solves all constraints for one instance.
///
/// Witness walks are written to `walk_log_writer` when one is given; failing
/// to write them does not fail the instance.
///
/// # Errors
/// Returns `AppError::Search` if the instance's endpoints are not vertices of
/// its graph. Timeouts are not errors; they show up as `?` cells.
pub fn solve_instance(
    instance: &Instance,
    runner: &BoundedRunner,
    quiet_mode: bool,
    walk_log_writer: Option<&mut BufWriter<File>>,
) -> Result<InstanceRow, AppError> {
    verbose_println!(quiet_mode, "[STEP 2] Solving constraints...");
    let outcomes = runner.solve_all(&instance.graph, instance.source, instance.target)?;

    print_outcome_summary(&outcomes, quiet_mode);

    if let Some(writer) = walk_log_writer {
        if let Err(e) = write_walks(instance, &outcomes, writer) {
            verbose_eprintln!(
                quiet_mode,
                "   [ERROR] Failed to write walks for {}: {}",
                instance.name,
                e
            );
        }
    }

    Ok(InstanceRow {
        name: instance.name.clone(),
        vertex_count: instance.graph.vertex_count(),
        results: outcomes
            .into_iter()
            .map(|(constraint, outcome)| (constraint, outcome.result))
            .collect(),
    })
}

/// Prints one line per constraint with its result.
/// This function is only active if `quiet_mode` is false.
fn print_outcome_summary(outcomes: &[(Constraint, QueryOutcome)], quiet_mode: bool) {
    if quiet_mode {
        return;
    }

    verbose_println!(quiet_mode, "   Results:");
    for (constraint, outcome) in outcomes {
        let status = match outcome.result {
            PathResult::Distance(k) => format!("distance {}", k),
            PathResult::Unreachable => "unreachable".to_string(),
            PathResult::Inconclusive => "inconclusive (time budget exhausted)".to_string(),
        };
        verbose_println!(quiet_mode, "     {:<9} : {}", constraint.to_string(), status);
    }
}

fn write_walks(
    instance: &Instance,
    outcomes: &[(Constraint, QueryOutcome)],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "=== {} ===", instance.name)?;
    for (constraint, outcome) in outcomes {
        write!(writer, "{:<9} : ", constraint.to_string())?;
        match &outcome.walk {
            Some(walk) => PathExplorer::print_walk_to_writer(
                walk,
                Some(instance.vertex_names.as_slice()),
                writer,
            )?,
            None => writeln!(writer, "{}", outcome.result)?,
        }
    }
    writeln!(writer)
}

/// Renders the tab-separated results table, header included.
///
/// Columns are the instance name, the vertex count and one column per
/// constraint in `Constraint::TABLE_ORDER`. Cells use `PathResult`'s display
/// form: a distance, `-1` or `?`.
pub fn render_results_table(rows: &[InstanceRow]) -> String {
    let mut table = String::with_capacity(64 + rows.len() * 48);

    table.push_str("instance\tn");
    for constraint in Constraint::TABLE_ORDER {
        table.push('\t');
        table.push(constraint.column());
    }
    table.push('\n');

    for row in rows {
        table.push_str(&row.name);
        table.push('\t');
        table.push_str(&row.vertex_count.to_string());
        for constraint in Constraint::TABLE_ORDER {
            table.push('\t');
            table.push_str(&row.result(constraint).to_string());
        }
        table.push('\n');
    }
    table
}
