/// Little-endian byte stream primitives for the effect archive layout
///
/// Strings are a 7-bit variable-length byte count followed by UTF-8 bytes.
/// Every read is bounds checked; running out of bytes yields
/// `Error::MalformedStream` naming the field and the offset.

use crate::error::{Error, Result};

/// Longest varint a 32-bit length can take
const MAX_VARINT_BYTES: usize = 5;

// ===== READER =====

/// Sequential reader over an in-memory byte slice
pub struct BinaryReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::MalformedStream(format!(
                "{} needs {} bytes at offset {}, {} remaining",
                field,
                len,
                self.position,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self, field: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    pub fn read_u8(&mut self, field: &str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }

    /// Any non-zero byte reads as true
    pub fn read_bool(&mut self, field: &str) -> Result<bool> {
        Ok(self.read_u8(field)? != 0)
    }

    pub fn read_i16(&mut self, field: &str) -> Result<i16> {
        Ok(i16::from_le_bytes(self.take_array(field)?))
    }

    pub fn read_i32(&mut self, field: &str) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array(field)?))
    }

    pub fn read_f32(&mut self, field: &str) -> Result<f32> {
        Ok(f32::from_le_bytes(self.take_array(field)?))
    }

    pub fn read_bytes(&mut self, len: usize, field: &str) -> Result<&'a [u8]> {
        self.take(len, field)
    }

    /// Read a 32-bit signed length followed by that many bytes
    pub fn read_length_prefixed(&mut self, field: &str) -> Result<&'a [u8]> {
        let offset = self.position;
        let len = self.read_i32(field)?;
        if len < 0 {
            return Err(Error::MalformedStream(format!(
                "{} has negative length {} at offset {}",
                field, len, offset
            )));
        }
        self.take(len as usize, field)
    }

    fn read_varint(&mut self, field: &str) -> Result<usize> {
        let offset = self.position;
        let mut value: u32 = 0;
        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_u8(field)?;
            let bits = u32::from(byte & 0x7f);
            if i == MAX_VARINT_BYTES - 1 && bits > 0x0f {
                break;
            }
            value |= bits << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value as usize);
            }
        }
        Err(Error::MalformedStream(format!(
            "{} has an invalid length prefix at offset {}",
            field, offset
        )))
    }

    /// Read a varint-prefixed UTF-8 string
    pub fn read_string(&mut self, field: &str) -> Result<String> {
        let len = self.read_varint(field)?;
        let offset = self.position;
        let bytes = self.take(len, field)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| {
            Error::MalformedStream(format!("{} is not valid UTF-8 at offset {}", field, offset))
        })
    }
}

// ===== WRITER =====

/// Append-only writer producing the same layout the reader consumes
#[derive(Default)]
pub struct BinaryWriter {
    bytes: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(value as u8);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Write a 32-bit signed length followed by the bytes
    pub fn write_length_prefixed(&mut self, bytes: &[u8]) -> Result<()> {
        let len = i32::try_from(bytes.len()).map_err(|_| {
            Error::InvalidResource(format!("{} byte payload exceeds i32 length", bytes.len()))
        })?;
        self.write_i32(len);
        self.write_bytes(bytes);
        Ok(())
    }

    fn write_varint(&mut self, mut value: usize) {
        while value >= 0x80 {
            self.bytes.push((value as u8) | 0x80);
            value >>= 7;
        }
        self.bytes.push(value as u8);
    }

    /// Write a varint-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) {
        self.write_varint(value.len());
        self.bytes.extend_from_slice(value.as_bytes());
    }
}

#[cfg(test)]
#[path = "binary_tests.rs"]
mod tests;
