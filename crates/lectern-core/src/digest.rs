use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::warn;

use crate::consts::DIGEST_READ_BUFFER_BYTES;

/// SHA-256 of `bytes` as 64 lowercase hex characters.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Hash everything `reader` yields without holding it in memory.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; DIGEST_READ_BUFFER_BYTES];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digest a file on disk. Read failures are logged and reported as absent.
pub fn try_digest_file(path: &Path) -> Option<String> {
    match File::open(path).and_then(digest_reader) {
        Ok(hex) => Some(hex),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Digest unavailable");
            None
        }
    }
}
