use std::io::{ErrorKind, Read, Result, Write};

use crate::constants::{DELIMITER, READ_BUFFER_SIZE};

/// Reads a source in fixed-size chunks, reusing one buffer.
///
/// Once the source is exhausted it stays exhausted.
pub struct ChunkReader<R> {
    reader: R,
    buffer: [u8; READ_BUFFER_SIZE],
    done: bool,
}

impl<R> ChunkReader<R>
where
    R: Read,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: [0; READ_BUFFER_SIZE],
            done: false,
        }
    }

    /// Returns the next non-empty chunk, or `None` at end of input.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        if self.done {
            return Ok(None);
        }

        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => {
                    self.done = true;
                    return Ok(None);
                }
                Ok(len) => return Ok(Some(&self.buffer[..len])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

/// Writes bytes as comma separated decimal tokens.
///
/// The delimiter goes before every token except the first one the encoder ever writes, so a
/// stream can be fed chunk by chunk.
#[derive(Debug, Default)]
pub struct DecimalEncoder {
    written: u64,
}

impl DecimalEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes encoded so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn encode<W>(&mut self, mut writer: W, bytes: &[u8]) -> Result<()>
    where
        W: Write,
    {
        let mut digits = [0; 3];

        for &byte in bytes {
            if self.written > 0 {
                writer.write_all(&[DELIMITER])?;
            }
            writer.write_all(decimal_digits(byte, &mut digits))?;
            self.written += 1;
        }

        Ok(())
    }
}

/// Streams everything from `reader` into `writer` as decimal tokens, returning the byte count.
pub fn encode_stream<R, W>(reader: R, mut writer: W) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let mut chunks = ChunkReader::new(reader);
    let mut encoder = DecimalEncoder::new();

    while let Some(chunk) = chunks.next_chunk()? {
        encoder.encode(&mut writer, chunk)?;
    }

    Ok(encoder.written())
}

/// Formats `byte` in decimal without leading zeros.
pub fn decimal_digits(byte: u8, buf: &mut [u8; 3]) -> &[u8] {
    let mut len = 0;

    let hundreds = byte / 100;
    if hundreds != 0 {
        buf[len] = b'0' + hundreds;
        len += 1;
    }

    let tens = (byte % 100) / 10;
    if tens != 0 || hundreds != 0 {
        buf[len] = b'0' + tens;
        len += 1;
    }

    buf[len] = b'0' + byte % 10;
    len += 1;

    &buf[..len]
}
