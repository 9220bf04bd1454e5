//! The ordered task pipeline driving one scaffolding invocation.
//!
//! Each task carries an action plus two predicates: "enabled" decides
//! whether the task participates at all, and "skip" (consulted only for
//! enabled tasks) can bypass the action with a human-readable reason.
//! Skips are reported distinctly from failures; the first failing action
//! aborts the remaining sequence.

use crate::error::{Error, Result};

/// Outcome of one executed (or bypassed) task in a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Ran,
    Skipped(String),
}

/// Per-task record handed to the progress observer and returned from a
/// completed run.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub name: &'static str,
    pub outcome: TaskOutcome,
}

/// A named unit of scaffolding work.
pub struct Task<'a> {
    name: &'static str,
    enabled: Box<dyn Fn() -> bool + 'a>,
    skip: Box<dyn Fn() -> Option<String> + 'a>,
    action: Box<dyn FnMut() -> Result<()> + 'a>,
}

impl<'a> Task<'a> {
    pub fn new(name: &'static str, action: impl FnMut() -> Result<()> + 'a) -> Self {
        Self {
            name,
            enabled: Box::new(|| true),
            skip: Box::new(|| None),
            action: Box::new(action),
        }
    }

    /// Replaces the enabled predicate; a false result removes the task
    /// from execution and reporting entirely.
    pub fn enabled_if(mut self, predicate: impl Fn() -> bool + 'a) -> Self {
        self.enabled = Box::new(predicate);
        self
    }

    /// Replaces the skip predicate; a Some(reason) result bypasses the
    /// action and reports the task as skipped with that reason.
    pub fn skip_if(mut self, predicate: impl Fn() -> Option<String> + 'a) -> Self {
        self.skip = Box::new(predicate);
        self
    }
}

/// The ordered sequence of tasks for one invocation.
pub struct Pipeline<'a> {
    tasks: Vec<Task<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new(tasks: Vec<Task<'a>>) -> Self {
        Self { tasks }
    }

    /// Executes the tasks strictly in order, invoking the observer after
    /// each task settles so a caller can render progress.
    ///
    /// # Errors
    /// * `Error::TaskError` pairing the failing task's name with the
    ///   underlying error; tasks after the failure are not executed.
    pub fn run_with(
        mut self,
        observe: &mut dyn FnMut(&TaskReport),
    ) -> Result<Vec<TaskReport>> {
        let mut reports = Vec::with_capacity(self.tasks.len());

        for task in &mut self.tasks {
            let name = task.name;
            if !(task.enabled)() {
                continue;
            }

            if let Some(reason) = (task.skip)() {
                let report =
                    TaskReport { name, outcome: TaskOutcome::Skipped(reason) };
                observe(&report);
                reports.push(report);
                continue;
            }

            (task.action)().map_err(|e| Error::TaskError {
                task: name.to_string(),
                source: Box::new(e),
            })?;

            let report = TaskReport { name, outcome: TaskOutcome::Ran };
            observe(&report);
            reports.push(report);
        }

        Ok(reports)
    }

    /// Runs the pipeline, printing each task's outcome.
    pub fn run(self) -> Result<Vec<TaskReport>> {
        self.run_with(&mut |report| match &report.outcome {
            TaskOutcome::Ran => println!("{}: done", report.name),
            TaskOutcome::Skipped(reason) => {
                println!("{}: skipped ({})", report.name, reason)
            }
        })
    }
}
