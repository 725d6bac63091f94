//! hyperfine JSON to per-command data files.
//!
//! The whole input is parsed and validated before the first output file is
//! opened, so a malformed input never touches the output directory.

use camino::{Utf8Path, Utf8PathBuf};

use crate::dat::DatWriter;
use crate::data;
use crate::error::ConvertError;
use crate::model::{CommandName, ResultSet, Sample};

pub const DEFAULT_PARAMETER: &str = "n";

#[derive(Builder, Debug, Clone)]
#[builder(setter(into))]
pub struct Converter {
    input: Utf8PathBuf,
    outdir: Utf8PathBuf,
    /// hyperfine parameter used as the first data column.
    #[builder(default = "DEFAULT_PARAMETER.to_string()")]
    parameter: String,
}

/// A data file written by [`Converter::convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatFile {
    pub command: CommandName,
    pub path: Utf8PathBuf,
    pub rows: usize,
}

impl Converter {
    pub fn load(&self) -> Result<ResultSet, ConvertError> {
        let export = data::load(&self.input)?;
        ResultSet::from_runs(&export.results, &self.parameter)
    }

    /// Writes one `<command>.dat` per group, overwriting existing files.
    pub fn write(&self, result_set: &ResultSet) -> Result<Vec<DatFile>, ConvertError> {
        if !self.outdir.is_dir() {
            return Err(ConvertError::MissingOutputDir {
                path: self.outdir.clone(),
            });
        }

        result_set
            .iter()
            .map(|(name, samples)| self.write_one(name, samples))
            .collect()
    }

    fn write_one(&self, name: &CommandName, samples: &[Sample]) -> Result<DatFile, ConvertError> {
        let path = self.outdir.join(name.file_name());

        DatWriter::create(&path)
            .and_then(|mut writer| {
                writer.write_group(name, &self.parameter, samples)?;
                writer.finish()
            })
            .map_err(|source| ConvertError::WriteOutput {
                path: path.clone(),
                source,
            })?;

        Ok(DatFile {
            command: name.clone(),
            path,
            rows: samples.len(),
        })
    }

    pub fn convert(&self) -> Result<Vec<DatFile>, ConvertError> {
        let result_set = self.load()?;
        self.write(&result_set)
    }
}

/// Converts `input` into data files in `outdir`, keyed on parameter `n`.
pub fn convert(input: &Utf8Path, outdir: &Utf8Path) -> Result<Vec<DatFile>, ConvertError> {
    Converter {
        input: input.to_owned(),
        outdir: outdir.to_owned(),
        parameter: DEFAULT_PARAMETER.to_string(),
    }
    .convert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn setup(json: &str) -> (TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let input = root.join("out.json");
        fs::write(&input, json).unwrap();
        (dir, root)
    }

    fn dat_files(dir: &Utf8Path) -> Vec<String> {
        let mut names: Vec<String> = dir
            .read_dir_utf8()
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string())
            .filter(|name| name.ends_with(".dat"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn single_run() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"./rbtest 100000 1337","parameters":{"n":"100000"},"mean":0.01,"min":0.009,"max":0.012}]}"#,
        );

        let written = convert(&root.join("out.json"), &root).unwrap();
        assert_eq!(
            written,
            vec![DatFile {
                command: CommandName::from_command("rbtest").unwrap(),
                path: root.join("rbtest.dat"),
                rows: 1,
            }]
        );
        assert_eq!(
            fs::read_to_string(root.join("rbtest.dat")).unwrap(),
            "# rbtest\n#\tn\tmean\tmin\tmax\n\t100000\t0.01\t0.009\t0.012\n"
        );
    }

    #[test]
    fn two_commands() {
        let (_dir, root) = setup(
            r#"{"results":[
            {"command":"./rbtest 100 1337","parameters":{"n":"100"},"mean":1.5,"min":1,"max":2},
            {"command":"./stree 100 1337","parameters":{"n":"100"},"mean":2.5,"min":2,"max":3},
            {"command":"./rbtest 200 1337","parameters":{"n":"200"},"mean":3.5,"min":3,"max":4},
            {"command":"./stree 200 1337","parameters":{"n":"200"},"mean":4.5,"min":4,"max":5}
        ]}"#,
        );

        let written = convert(&root.join("out.json"), &root).unwrap();
        let order: Vec<&str> = written.iter().map(|f| f.command.as_str()).collect();
        assert_eq!(order, ["rbtest", "stree"]);
        assert_eq!(dat_files(&root), ["rbtest.dat", "stree.dat"]);

        assert_eq!(
            fs::read_to_string(root.join("rbtest.dat")).unwrap(),
            concat!(
                "# rbtest\n",
                "#\tn\tmean\tmin\tmax\n",
                "\t100\t1.5\t1.0\t2.0\n",
                "\t200\t3.5\t3.0\t4.0\n",
            )
        );
        assert_eq!(
            fs::read_to_string(root.join("stree.dat")).unwrap(),
            concat!(
                "# stree\n",
                "#\tn\tmean\tmin\tmax\n",
                "\t100\t2.5\t2.0\t3.0\n",
                "\t200\t4.5\t4.0\t5.0\n",
            )
        );
    }

    #[test]
    fn overwrites_existing() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"./a 1","parameters":{"n":"1"},"mean":1,"min":1,"max":1}]}"#,
        );
        fs::write(root.join("a.dat"), "stale contents that are longer\n").unwrap();

        convert(&root.join("out.json"), &root).unwrap();
        assert_eq!(
            fs::read_to_string(root.join("a.dat")).unwrap(),
            "# a\n#\tn\tmean\tmin\tmax\n\t1\t1.0\t1.0\t1.0\n"
        );
    }

    #[test]
    fn malformed_json_writes_nothing() {
        let (_dir, root) = setup(r#"{"results":[{"command":"./rbtest 100000 1337","par"#);

        let err = convert(&root.join("out.json"), &root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(dat_files(&root).is_empty());
    }

    #[test]
    fn invalid_run_writes_nothing() {
        let (_dir, root) = setup(
            r#"{"results":[
            {"command":"./a 1","parameters":{"n":"1"},"mean":1,"min":1,"max":1},
            {"command":"./b 1","parameters":{"n":"1"},"mean":"fast","min":1,"max":1}
        ]}"#,
        );

        let err = convert(&root.join("out.json"), &root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(dat_files(&root).is_empty());
    }

    #[test]
    fn small_and_integral_timings() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"./a 100","parameters":{"n":"100"},"mean":0.000095,"min":1.0,"max":2}]}"#,
        );

        convert(&root.join("out.json"), &root).unwrap();
        assert_eq!(
            fs::read_to_string(root.join("a.dat")).unwrap(),
            "# a\n#\tn\tmean\tmin\tmax\n\t100\t9.5e-05\t1.0\t2.0\n"
        );
    }

    #[test]
    fn command_in_subdirectory() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"bin/rbtest 100","parameters":{"n":"100"},"mean":1,"min":1,"max":1}]}"#,
        );
        fs::create_dir(root.join("bin")).unwrap();

        let written = convert(&root.join("out.json"), &root).unwrap();
        assert_eq!(written[0].path, root.join("bin/rbtest.dat"));
        assert_eq!(
            fs::read_to_string(root.join("bin/rbtest.dat")).unwrap(),
            "# bin/rbtest\n#\tn\tmean\tmin\tmax\n\t100\t1.0\t1.0\t1.0\n"
        );
    }

    #[test]
    fn command_subdirectory_missing() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"bin/rbtest 100","parameters":{"n":"100"},"mean":1,"min":1,"max":1}]}"#,
        );

        let err = convert(&root.join("out.json"), &root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert!(matches!(err, ConvertError::WriteOutput { .. }));
    }

    #[test]
    fn escaping_command_writes_nothing() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"../rbtest 100","parameters":{"n":"100"},"mean":1,"min":1,"max":1}]}"#,
        );

        let err = convert(&root.join("out.json"), &root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(dat_files(&root).is_empty());
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();

        let err = convert(&root.join("out.json"), &root).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
    }

    #[test]
    fn missing_outdir() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"./a 1","parameters":{"n":"1"},"mean":1,"min":1,"max":1}]}"#,
        );

        let err = convert(&root.join("out.json"), &root.join("plots")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert!(matches!(err, ConvertError::MissingOutputDir { .. }));
    }

    #[test]
    fn custom_parameter() {
        let (_dir, root) = setup(
            r#"{"results":[{"command":"./a 7 1337","parameters":{"n":"7","seed":"1337"},"mean":1,"min":1,"max":1}]}"#,
        );

        let converter = ConverterBuilder::default()
            .input(root.join("out.json"))
            .outdir(root.clone())
            .parameter("seed")
            .build()
            .unwrap();
        converter.convert().unwrap();

        assert_eq!(
            fs::read_to_string(root.join("a.dat")).unwrap(),
            "# a\n#\tseed\tmean\tmin\tmax\n\t1337\t1.0\t1.0\t1.0\n"
        );
    }

    #[test]
    fn empty_results() {
        let (_dir, root) = setup(r#"{"results":[]}"#);
        let written = convert(&root.join("out.json"), &root).unwrap();
        assert!(written.is_empty());
        assert!(dat_files(&root).is_empty());
    }
}
