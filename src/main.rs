use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tanhsinh_core::{generate, SolverConfig, DEFAULT_MAX_INDEX};
use tanhsinh_emit::{table_digest, OutputFormat};

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    /// Rust `const` declarations
    Rust,
    /// bincode blob
    Bincode,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Rust => OutputFormat::RustConst,
            Format::Bincode => OutputFormat::Bincode,
        }
    }
}

/// Generate a tanh-sinh quadrature abscissa/weight table
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Step size exponent k, giving h = 2^-k
    #[arg(long, default_value_t = 6)]
    step_exponent: i32,

    /// Explicit step size h (overrides --step-exponent)
    #[arg(long)]
    step_size: Option<f64>,

    /// Target precision in decimal digits
    #[arg(long, default_value_t = 6)]
    precision: i32,

    /// Exclusive upper bound on candidate node indices
    #[arg(long, default_value_t = DEFAULT_MAX_INDEX)]
    max_index: u64,

    /// Abort the radius search after this many milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Output representation
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    format: Format,

    /// Emit `pub const` items (Rust output only)
    #[arg(long, default_value_t = false)]
    public: bool,

    /// Output file; `-` writes to stdout. Defaults to a per-format file name
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        let mut config = match self.step_size {
            Some(h) => SolverConfig::new(h, self.precision),
            None => SolverConfig::from_step_exponent(self.step_exponent, self.precision),
        }
        .with_max_index(self.max_index);
        if let Some(ms) = self.deadline_ms {
            config = config.with_deadline_ms(ms);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = args.solver_config();
    let format = OutputFormat::from(args.format);
    log::info!(
        "Generating table: h = {}, p = {}, noise floor = {:e}",
        config.step_size,
        config.precision,
        config.noise_floor()
    );

    let table = generate(&config).context("generate quadrature table")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format.default_output_name()));

    if output.as_os_str() == "-" {
        let mut sink = format.sink(io::stdout().lock(), args.public);
        sink.emit(&table).context("write table to stdout")?;
    } else {
        let file = File::create(&output).with_context(|| format!("create {}", output.display()))?;
        let mut sink = format.sink(BufWriter::new(file), args.public);
        sink.emit(&table).with_context(|| format!("write table to {}", output.display()))?;
        log::info!("Wrote {}", output.display());
    }

    log::info!(
        "Radius N = {}, {} nodes, h = {}, sha256 = {}",
        table.radius(),
        table.len(),
        table.step_size(),
        table_digest(&table)
    );

    Ok(())
}
