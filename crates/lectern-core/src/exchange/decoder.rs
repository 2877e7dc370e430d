/// Incremental UTF-8 decoder for chunked byte streams.
///
/// A multi-byte character split across two chunks is held back until the
/// rest of it arrives. Invalid sequences decode to U+FFFD, matching a lossy
/// text decoder.
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode as much of `chunk` (plus any carried bytes) as is complete.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::with_capacity(self.pending.len());
        let mut rest: &[u8] = &self.pending;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        // Incomplete sequence at the end: wait for more bytes.
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        self.pending = rest.to_vec();
        out
    }

    /// Flush at end of stream. A dangling partial character becomes U+FFFD.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let tail = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        tail
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let mut d = Utf8StreamDecoder::new();
        assert_eq!(d.decode(b"Hel"), "Hel");
        assert_eq!(d.decode(b"lo"), "lo");
        assert!(!d.has_pending());
    }

    #[test]
    fn test_split_multibyte_is_carried() {
        // "译" is E8 AF 91
        let mut d = Utf8StreamDecoder::new();
        assert_eq!(d.decode(&[b'a', 0xE8, 0xAF]), "a");
        assert!(d.has_pending());
        assert_eq!(d.decode(&[0x91, b'b']), "\u{8bd1}b");
        assert_eq!(d.finish(), "");
    }

    #[test]
    fn test_invalid_byte_is_replaced() {
        let mut d = Utf8StreamDecoder::new();
        assert_eq!(d.decode(&[b'x', 0xFF, b'y']), "x\u{fffd}y");
    }

    #[test]
    fn test_truncated_tail_flushes_as_replacement() {
        let mut d = Utf8StreamDecoder::new();
        assert_eq!(d.decode(&[0xE8, 0xAF]), "");
        assert_eq!(d.finish(), "\u{fffd}");
        assert!(!d.has_pending());
    }
}
