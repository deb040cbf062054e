// Bincode 2.x wrappers with a fixed standard configuration so the byte
// layout that feeds block hashing stays stable across the crate.
use crate::error::{LedgerError, Result};
use serde::{Deserialize, Serialize};

/// Serialize data using bincode 2.0 with standard configuration
pub fn serialize<T: Serialize + bincode::Encode>(data: &T) -> Result<Vec<u8>> {
    let config = bincode::config::standard();
    bincode::encode_to_vec(data, config)
        .map_err(|e| LedgerError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize data using bincode 2.0 with standard configuration
pub fn deserialize<T>(bytes: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de> + bincode::Decode<()>,
{
    let config = bincode::config::standard();
    let (data, _) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| LedgerError::Serialization(format!("Deserialization failed: {e}")))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;

    #[test]
    fn test_serialize_deserialize_transactions() {
        let original = vec![
            Transaction::new(1, "wallet-Alice", "wallet-Bob", 25),
            Transaction::new(2, "mint", "wallet-Miner49r", 50),
        ];

        let serialized = serialize(&original).expect("Serialization should work");
        let deserialized: Vec<Transaction> =
            deserialize(&serialized).expect("Deserialization should work");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_serialization_is_order_sensitive() {
        let a = Transaction::new(1, "wallet-Alice", "wallet-Bob", 25);
        let b = Transaction::new(2, "wallet-Bob", "wallet-Alice", 10);

        let forward = serialize(&vec![a.clone(), b.clone()]).unwrap();
        let reversed = serialize(&vec![b, a]).unwrap();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_deserialize_invalid_data() {
        let invalid_bytes = vec![0xFF, 0xFF, 0xFF, 0xFF];
        let result: Result<Vec<Transaction>> = deserialize(&invalid_bytes);
        assert!(result.is_err());
    }
}
