//! Reads a program file into the big-endian word vector that becomes
//! segment 0.

use std::io::Read;

use crate::error::{UmError, UmResult};

/// Reads all bytes from `reader` and groups them into big-endian 32-bit
/// words. Fails if the byte count is not a multiple of 4.
pub fn load<R: Read>(mut reader: R) -> UmResult<Vec<u32>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if bytes.len() % 4 != 0 {
        let rounded_down = (bytes.len() / 4) * 4;
        return Err(UmError::ShortRead { expected: (rounded_down + 4) as u64, got: bytes.len() as u64 });
    }

    Ok(bytes.chunks_exact(4).map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn loads_words_big_endian() {
        let bytes = [0x00, 0x00, 0x00, 0x07, 0xDE, 0xAD, 0xBE, 0xEF];
        let words = load(Cursor::new(bytes)).unwrap();
        assert_eq!(words, vec![7, 0xDEAD_BEEF]);
    }

    #[test]
    fn empty_file_yields_empty_program() {
        let words = load(Cursor::new([])).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn short_read_is_fatal() {
        let bytes = [0x00, 0x00, 0x07];
        let err = load(Cursor::new(bytes)).unwrap_err();
        assert_eq!(err, UmError::ShortRead { expected: 4, got: 3 });
    }
}
