use std::io::Write;

use tanhsinh_core::{QuadratureTable, SinkError, TableSink};

/// Writes the bincode encoding of the table; read it back with
/// [`QuadratureTable::from_bytes`].
pub struct BincodeSink<W: Write> {
    writer: W,
}

impl<W: Write> BincodeSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for BincodeSink<W> {
    fn emit(&mut self, table: &QuadratureTable) -> Result<(), SinkError> {
        let bytes = table.to_bytes().map_err(SinkError::Encode)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        log::debug!("Wrote {} byte table blob", bytes.len());
        Ok(())
    }
}
