//! Boundary text form of a row

use rowtable_core::{Error, Result};

/// Joins and splits row fields on a single delimiter byte.
///
/// There is no quoting or escaping: a field that contains the delimiter is
/// split in two by [`RowCodec::decode`]. The empty string decodes to zero
/// fields, so a row of one empty field and a row of no fields encode alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCodec {
    delimiter: u8,
}

impl Default for RowCodec {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl RowCodec {
    /// Create a codec for an ASCII delimiter
    pub fn new(delimiter: u8) -> Result<Self> {
        if !delimiter.is_ascii() || delimiter == 0 {
            return Err(Error::InvalidArgument(format!(
                "delimiter must be a non-NUL ASCII byte, got 0x{delimiter:02x}"
            )));
        }
        Ok(Self { delimiter })
    }

    /// The delimiter byte
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Join fields with the delimiter
    pub fn encode<S: AsRef<str>>(&self, fields: &[S]) -> Vec<u8> {
        let mut out = Vec::with_capacity(fields.iter().map(|f| f.as_ref().len() + 1).sum());
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            out.extend_from_slice(field.as_ref().as_bytes());
        }
        out
    }

    /// Split text on the delimiter
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        text.split(char::from(self.delimiter))
            .map(str::to_owned)
            .collect()
    }

    /// Split encoded bytes back into fields
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::malformed(1, format!("invalid UTF-8: {e}")))?;
        Ok(self.split(text))
    }

    /// Like [`RowCodec::decode`], rejecting records longer than `capacity` bytes
    pub fn decode_bounded(&self, bytes: &[u8], capacity: usize) -> Result<Vec<String>> {
        if bytes.len() > capacity {
            return Err(Error::malformed(
                1,
                format!(
                    "record is {} bytes, consumer accepts at most {capacity}",
                    bytes.len()
                ),
            ));
        }
        self.decode(bytes)
    }

    /// Write the encoded row plus a NUL terminator into `out`
    ///
    /// Returns the encoded length, excluding the terminator. When the row does
    /// not fit, nothing but an empty terminated string is written (if `out`
    /// has room for one byte) and [`Error::BufferTooSmall`] is returned.
    pub fn encode_into<S: AsRef<str>>(&self, fields: &[S], out: &mut [u8]) -> Result<usize> {
        let encoded = self.encode(fields);

        let result = if encoded.contains(&0) {
            Err(Error::malformed(1, "field contains an embedded NUL"))
        } else if encoded.len() + 1 > out.len() {
            Err(Error::BufferTooSmall {
                needed: encoded.len() + 1,
                capacity: out.len(),
            })
        } else {
            Ok(())
        };

        match result {
            Ok(()) => {
                out[..encoded.len()].copy_from_slice(&encoded);
                out[encoded.len()] = 0;
                Ok(encoded.len())
            }
            Err(e) => {
                if let Some(first) = out.first_mut() {
                    *first = 0;
                }
                Err(e)
            }
        }
    }
}
