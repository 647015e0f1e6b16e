use std::io::Write;

use tanhsinh_core::TableSink;

use crate::{BincodeSink, RustConstSink};

/// Target representation of an emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rust `const` declarations
    #[default]
    RustConst,
    /// bincode-encoded `QuadratureTable`
    Bincode,
}

impl OutputFormat {
    /// Conventional file name for this format.
    pub fn default_output_name(self) -> &'static str {
        match self {
            OutputFormat::RustConst => "tanhsinh_consts.rs",
            OutputFormat::Bincode => "tanhsinh_table.bin",
        }
    }

    /// Sink writing this format to `writer`. `public` only affects Rust output.
    pub fn sink<'a, W: Write + 'a>(self, writer: W, public: bool) -> Box<dyn TableSink + 'a> {
        match self {
            OutputFormat::RustConst => Box::new(RustConstSink::new(writer).public(public)),
            OutputFormat::Bincode => Box::new(BincodeSink::new(writer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanhsinh_core::{build_table, QuadratureTable};

    #[test]
    fn test_default_names() {
        assert_eq!(OutputFormat::default(), OutputFormat::RustConst);
        assert_eq!(OutputFormat::RustConst.default_output_name(), "tanhsinh_consts.rs");
        assert_eq!(OutputFormat::Bincode.default_output_name(), "tanhsinh_table.bin");
    }

    #[test]
    fn test_sink_dispatch() {
        let table = build_table(0.25, 2);

        let mut source = Vec::new();
        OutputFormat::RustConst.sink(&mut source, false).emit(&table).unwrap();
        assert!(String::from_utf8(source).unwrap().contains("const H: f64 = 0.25;"));

        let mut blob = Vec::new();
        OutputFormat::Bincode.sink(&mut blob, false).emit(&table).unwrap();
        assert_eq!(QuadratureTable::from_bytes(&blob).unwrap(), table);
    }
}
