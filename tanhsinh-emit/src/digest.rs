use sha2::{Digest, Sha256};
use tanhsinh_core::QuadratureTable;

/// Lowercase hex SHA-256 of the table's bit patterns.
///
/// Hashes the little-endian bits of the step size, then every abscissa, then
/// every weight. Equal digests mean bit-identical tables.
pub fn table_digest(table: &QuadratureTable) -> String {
    let mut hasher = Sha256::new();
    hasher.update(table.step_size().to_bits().to_le_bytes());
    for v in table.abscissas() {
        hasher.update(v.to_bits().to_le_bytes());
    }
    for v in table.weights() {
        hasher.update(v.to_bits().to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanhsinh_core::build_table;

    #[test]
    fn test_digest_shape() {
        let digest = table_digest(&build_table(0.5, 3));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_is_stable() {
        let a = table_digest(&build_table(0.015625, 204));
        let b = table_digest(&build_table(0.015625, 204));
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_distinguishes_tables() {
        let base = table_digest(&build_table(0.5, 3));
        assert_ne!(base, table_digest(&build_table(0.5, 4)));
        assert_ne!(base, table_digest(&build_table(0.25, 3)));
    }
}
