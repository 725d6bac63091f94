use indexmap::IndexMap;

use super::{CommandName, Sample};
use crate::data::BenchmarkRun;
use crate::error::{ConvertError, RunError};

/// Samples grouped by command, both in order of first appearance.
#[derive(Debug, Default)]
pub struct ResultSet {
    groups: IndexMap<CommandName, Vec<Sample>>,
}

impl ResultSet {
    pub fn new() -> ResultSet {
        Self::default()
    }

    /// Groups `runs` by command name. Any invalid run fails the whole set.
    pub fn from_runs(runs: &[BenchmarkRun], parameter: &str) -> Result<ResultSet, ConvertError> {
        let mut result_set = ResultSet::new();
        for (index, run) in runs.iter().enumerate() {
            let invalid = |source: RunError| ConvertError::InvalidRun {
                index,
                command: run.command.clone(),
                source,
            };
            let name = CommandName::from_command(&run.command).map_err(invalid)?;
            let sample = Sample::from_run(run, parameter).map_err(invalid)?;
            result_set.push(name, sample);
        }
        Ok(result_set)
    }

    pub fn push(&mut self, name: CommandName, sample: Sample) {
        self.groups.entry(name).or_default().push(sample);
    }

    pub fn get(&self, name: &CommandName) -> Option<&[Sample]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CommandName, &[Sample])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
