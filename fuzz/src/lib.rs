/// Reads `data` as little endian i64 values, trailing bytes that do not fill a value are dropped.
pub fn u8_as_i64(data: &[u8]) -> Vec<i64> {
    data.chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            i64::from_le_bytes(bytes)
        })
        .collect()
}
