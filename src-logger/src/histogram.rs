//! Empirical attainment histogram
//!
//! Folds a run's stream of observations into a bounded 2-D count grid: one
//! axis discretizes the evaluation counter, the other the objective value.
//! The grid counts observations per cell; attainment surfaces across runs
//! are a downstream aggregation and not this component's job.

use std::collections::HashMap;
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use optbench_problem::Observation;

use crate::error::LoggerError;
use crate::scale::Scale;

/// The finished grid of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunGrid {
    /// Run number the grid belongs to
    pub run_id: u64,
    /// Counts per `(time bin, value bin)` cell
    pub cells: HashMap<(usize, usize), u64>,
}

impl RunGrid {
    /// Total observations folded into the grid.
    pub fn total(&self) -> u64 {
        self.cells.values().sum()
    }
}

/// Whether a logger currently accepts observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Logging,
}

/// Discretizing observer for one benchmarking run at a time.
///
/// The two scales are immutable configuration shared by every run of the
/// logger, which keeps grids comparable across runs; only the grid and the
/// run counter change at run boundaries.
#[derive(Debug)]
pub struct HistogramLogger<XS, YS>
where
    XS: Scale<Value = i64>,
    YS: Scale<Value = f64>,
{
    x_scale: XS,
    y_scale: YS,
    grid: HashMap<(usize, usize), u64>,
    run_id: u64,
    state: RunState,
}

impl<XS, YS> HistogramLogger<XS, YS>
where
    XS: Scale<Value = i64>,
    YS: Scale<Value = f64>,
{
    /// A fresh logger in the idle state; `x_scale` discretizes the
    /// evaluation counter, `y_scale` the objective value.
    pub fn new(x_scale: XS, y_scale: YS) -> Self {
        Self {
            x_scale,
            y_scale,
            grid: HashMap::new(),
            run_id: 0,
            state: RunState::Idle,
        }
    }

    /// Begin accepting observations for a run.
    pub fn start_run(&mut self) {
        if self.state == RunState::Idle {
            self.run_id += 1;
            self.state = RunState::Logging;
        }
    }

    /// Fold one observation into the grid.
    pub fn log(&mut self, observation: &Observation) -> Result<(), LoggerError> {
        if self.state != RunState::Logging {
            return Err(LoggerError::NotLogging);
        }
        let tx = self.x_scale.index(observation.eval_count as i64);
        let ty = self.y_scale.index(observation.value);
        *self.grid.entry((tx, ty)).or_insert(0) += 1;
        Ok(())
    }

    /// End the active run, flushing its grid as the run's result.
    pub fn finish_run(&mut self) -> RunGrid {
        self.state = RunState::Idle;
        RunGrid {
            run_id: self.run_id,
            cells: std::mem::take(&mut self.grid),
        }
    }

    /// Clear the grid and advance the run counter while staying in the
    /// logging state. The scales are untouched.
    pub fn new_run(&mut self) {
        self.grid.clear();
        self.run_id += 1;
        log::debug!("histogram logger advanced to run {}", self.run_id);
    }

    /// Observations folded in so far in the current run.
    pub fn total(&self) -> u64 {
        self.grid.values().sum()
    }

    /// Count in one cell of the current grid.
    pub fn cell(&self, tx: usize, ty: usize) -> u64 {
        self.grid.get(&(tx, ty)).copied().unwrap_or(0)
    }

    /// Current run number.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Time-axis scale.
    pub fn x_scale(&self) -> &XS {
        &self.x_scale
    }

    /// Value-axis scale.
    pub fn y_scale(&self) -> &YS {
        &self.y_scale
    }

    /// Save the current grid as `<output_dir>/<name>_run<id>.csv` with
    /// `x_bin,y_bin,count` rows sorted by cell.
    pub fn save_to_csv(&self, output_dir: &Path, name: &str) -> Result<PathBuf, LoggerError> {
        create_dir_all(output_dir)?;

        let filename = output_dir.join(format!("{}_run{}.csv", name, self.run_id));
        let mut file = File::create(&filename)?;

        writeln!(file, "x_bin,y_bin,count")?;

        let mut cells: Vec<(&(usize, usize), &u64)> = self.grid.iter().collect();
        cells.sort_by_key(|(k, _)| **k);
        for ((tx, ty), count) in cells {
            writeln!(file, "{},{},{}", tx, ty, count)?;
        }

        Ok(filename)
    }
}
