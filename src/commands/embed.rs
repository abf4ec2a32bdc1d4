use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::{debug, info};

use crate::{header::write_header, names::NameSet};

#[derive(Debug, Parser)]
pub struct EmbedCommand {
    /// Name of the generated header. Defaults to the source path with `.` and `/` replaced by
    /// `_`, plus `.h`.
    #[clap(short = 'o', value_name = "output", allow_hyphen_values = true)]
    output: Option<OsString>,
    /// Name of the generated macro. Defaults to `EMBED_` followed by the upper-cased source path.
    #[clap(short = 'd', value_name = "define", allow_hyphen_values = true)]
    define: Option<OsString>,
    /// Overwrite the output file if it already exists.
    #[clap(short = 'f')]
    force: bool,
    /// Path to the file to embed.
    #[clap(value_name = "filename")]
    source: PathBuf,
}

impl EmbedCommand {
    pub fn run(self) -> Result<()> {
        let names = NameSet::resolve(self.source.as_os_str(), self.output, self.define);
        debug!(
            header = %names.header,
            header_origin = ?names.header.origin,
            macro_name = %names.macro_name,
            macro_origin = ?names.macro_name.origin,
            guard = %names.include_guard_lossy(),
            "resolved names"
        );

        let source_file = File::open(&self.source)
            .wrap_err_with(|| format!("Failed to open source file `{}`", self.source.display()))?;

        let mut options = OpenOptions::new();
        options.write(true);
        if self.force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let output_file = options
            .open(names.header.as_os_str())
            .wrap_err_with(|| format!("Failed to create output file `{}`", names.header))?;

        let mut writer = BufWriter::new(output_file);
        let embedded = write_header(&mut writer, source_file, &names)
            .and_then(|embedded| writer.flush().map(|()| embedded))
            .wrap_err_with(|| format!("Failed to write output file `{}`", names.header))?;

        info!(
            source = %self.source.display(),
            header = %names.header,
            bytes = embedded,
            "embedded file"
        );

        Ok(())
    }
}
