use std::io::{Read, Result, Write};

use tracing::trace;

use crate::{encoder::encode_stream, names::NameSet};

/// Steps of writing one header, in the only order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    OpenGuard,
    MacroHeader,
    Body,
    CloseMacroLine,
    CloseGuard,
    Done,
}

impl Stage {
    fn next(self) -> Self {
        match self {
            Self::OpenGuard => Self::MacroHeader,
            Self::MacroHeader => Self::Body,
            Self::Body => Self::CloseMacroLine,
            Self::CloseMacroLine => Self::CloseGuard,
            Self::CloseGuard | Self::Done => Self::Done,
        }
    }
}

/// Writes the guarded header embedding everything read from `source`.
///
/// The body is streamed straight from `source` to `writer`. Returns the number of source bytes
/// embedded.
pub fn write_header<R, W>(mut writer: W, mut source: R, names: &NameSet) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let guard = &names.include_guard;
    let mut embedded = 0;
    let mut stage = Stage::OpenGuard;

    loop {
        trace!(?stage, "writing header");

        match stage {
            Stage::OpenGuard => {
                writer.write_all(b"#ifndef ")?;
                writer.write_all(guard)?;
                writer.write_all(b"\n#define ")?;
                writer.write_all(guard)?;
                writer.write_all(b"\n\n")?;
            }
            Stage::MacroHeader => {
                writer.write_all(b"#define ")?;
                writer.write_all(names.macro_name.as_bytes())?;
                writer.write_all(b" ")?;
            }
            Stage::Body => embedded = encode_stream(&mut source, &mut writer)?,
            Stage::CloseMacroLine => writer.write_all(b"\n\n")?,
            Stage::CloseGuard => writer.write_all(b"#endif")?,
            Stage::Done => break,
        }

        stage = stage.next();
    }

    Ok(embedded)
}
