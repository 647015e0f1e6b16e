use std::io::Write;

use tanhsinh_core::{QuadratureTable, SinkError, TableSink};

pub const HEADER: &str = "// GENERATED CODE DO NOT EDIT";
pub const FOOTER: &str = "// END GENERATED CODE";

/// Writes a table as Rust constant declarations:
///
/// ```text
/// // GENERATED CODE DO NOT EDIT
///
/// const WEIGHTS: [f64; L] = [w0,w1,...,];
/// const ABSCISSA: [f64; L] = [x0,x1,...,];
/// const H: f64 = h;
///
/// // END GENERATED CODE
/// ```
///
/// Values use the shortest text that parses back to the same `f64`, so the
/// constants are bit-identical to the generated table.
///
/// # Example
/// ```
/// use tanhsinh_core::{build_table, TableSink};
/// use tanhsinh_emit::RustConstSink;
///
/// let mut sink = RustConstSink::new(Vec::new());
/// sink.emit(&build_table(0.5, 1)).unwrap();
///
/// let source = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(source.contains("const ABSCISSA: [f64; 3]"));
/// assert!(source.contains("const H: f64 = 0.5;"));
/// ```
pub struct RustConstSink<W: Write> {
    writer: W,
    public: bool,
}

impl<W: Write> RustConstSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            public: false,
        }
    }

    /// Prefix each constant with `pub`.
    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_array(&mut self, vis: &str, name: &str, values: &[f64]) -> std::io::Result<()> {
        write!(self.writer, "{}const {}: [f64; {}] = [", vis, name, values.len())?;
        for v in values {
            write!(self.writer, "{:?},", v)?;
        }
        writeln!(self.writer, "];")
    }
}

impl<W: Write> TableSink for RustConstSink<W> {
    fn emit(&mut self, table: &QuadratureTable) -> Result<(), SinkError> {
        let vis = if self.public { "pub " } else { "" };

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", HEADER)?;
        writeln!(self.writer)?;
        self.write_array(vis, "WEIGHTS", table.weights())?;
        self.write_array(vis, "ABSCISSA", table.abscissas())?;
        writeln!(self.writer, "{}const H: f64 = {:?};", vis, table.step_size())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", FOOTER)?;
        self.writer.flush()?;

        log::debug!("Wrote Rust constants for {} nodes", table.len());
        Ok(())
    }
}
