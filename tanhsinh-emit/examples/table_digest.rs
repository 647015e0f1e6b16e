use tanhsinh_core::{generate, SolverConfig};
use tanhsinh_emit::table_digest;

fn main() {
    let config = SolverConfig::default();
    let table = match generate(&config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("generation failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("TANHSINH_RADIUS {}", table.radius());
    println!("TANHSINH_HASH {}", table_digest(&table));
}
