use byteorder::{BigEndian, ByteOrder};

use super::error::{Error, Result};

/// A forward-reading view over an immutable byte buffer.  Every read is
/// bounds-checked and fails with `Error::TruncatedStream` instead of
/// panicking.
pub struct ByteCursor {
    data: Vec<u8>,
    position: usize,
}

impl ByteCursor {
    /// Creates a cursor positioned at the start of the data.
    pub fn new(data: Vec<u8>) -> ByteCursor {
        ByteCursor { data, position: 0 }
    }

    /// Returns true and advances past the signature if the next bytes are
    /// equal to it.  Otherwise the position is left unchanged.
    pub fn has_signature(&mut self, signature: &[u8]) -> Result<bool> {
        if self.peek(signature.len())? == signature {
            self.position += signature.len();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Reads the next byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek(1)?[0];
        self.position += 1;
        Ok(value)
    }

    /// Reads the next big-endian `u32` value.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        let value = BigEndian::read_u32(self.peek(4)?);
        self.position += 4;
        Ok(value)
    }

    /// Returns the current read position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the read position.  Positions past the end of the data are
    /// accepted here and reported by the next read.
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Consumes the cursor and returns the whole underlying buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn peek(&self, length: usize) -> Result<&[u8]> {
        self.data
            .get(self.position..)
            .and_then(|rest| rest.get(..length))
            .ok_or(Error::TruncatedStream {
                offset: self.position,
                length,
            })
    }
}
