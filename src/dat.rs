//! gnuplot data file output.

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::Utf8Path;
use itertools::Itertools;

use crate::model::{CommandName, Sample};

pub const TIMING_COLUMNS: [&str; 3] = ["mean", "min", "max"];

pub struct DatWriter<W: Write> {
    out: W,
}

impl DatWriter<BufWriter<File>> {
    pub fn create(path: &Utf8Path) -> std::io::Result<Self> {
        Ok(DatWriter::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> DatWriter<W> {
    pub fn new(out: W) -> Self {
        DatWriter { out }
    }

    /// Writes the `# <name>` header, the column labels, then one row per sample.
    pub fn write_group(
        &mut self,
        name: &CommandName,
        parameter: &str,
        samples: &[Sample],
    ) -> std::io::Result<()> {
        writeln!(self.out, "# {name}")?;
        writeln!(
            self.out,
            "#\t{}",
            std::iter::once(parameter).chain(TIMING_COLUMNS).join("\t")
        )?;
        for sample in samples {
            writeln!(self.out, "{sample}")?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
