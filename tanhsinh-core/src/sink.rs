use crate::error::SinkError;
use crate::table::QuadratureTable;

/// Consumer of a finished table.
///
/// The generator hands every table, read-only and complete, to a sink; the
/// sink alone decides the output representation (source code, binary blob,
/// data file) and where it goes.
pub trait TableSink {
    fn emit(&mut self, table: &QuadratureTable) -> Result<(), SinkError>;
}

/// Collects tables in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub tables: Vec<QuadratureTable>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }
}

impl TableSink for MemorySink {
    fn emit(&mut self, table: &QuadratureTable) -> Result<(), SinkError> {
        self.tables.push(table.clone());
        Ok(())
    }
}

impl<S: TableSink + ?Sized> TableSink for &mut S {
    fn emit(&mut self, table: &QuadratureTable) -> Result<(), SinkError> {
        (**self).emit(table)
    }
}

impl<S: TableSink + ?Sized> TableSink for Box<S> {
    fn emit(&mut self, table: &QuadratureTable) -> Result<(), SinkError> {
        (**self).emit(table)
    }
}
