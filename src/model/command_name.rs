use std::fmt;

use camino::{Utf8Component, Utf8Path};

use crate::error::RunError;

/// Short name of a benchmarked program, e.g. `rbtest` for `./rbtest 100000 1337`.
///
/// Used verbatim as output file stem relative to the output directory, so it
/// is never absolute and never contains a `..` component.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommandName(String);

impl CommandName {
    pub fn from_command(command: &str) -> Result<CommandName, RunError> {
        let program = command.split(' ').next().unwrap_or_default();
        let name = program.strip_prefix("./").unwrap_or(program);

        if name.is_empty() {
            return Err(RunError::EmptyCommand);
        }
        let escapes = Utf8Path::new(name).components().any(|c| {
            matches!(
                c,
                Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::ParentDir
            )
        });
        if escapes {
            return Err(RunError::InvalidCommandName {
                name: name.to_string(),
            });
        }

        Ok(CommandName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.dat", self.0)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
