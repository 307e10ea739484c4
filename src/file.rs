use std::ffi::CStr;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::error::ReadError;

/// Whole contents of a file followed by a single NUL byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBuffer {
    bytes: Vec<u8>,
}

impl FileBuffer {
    /// Length including the terminator.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: even an empty file yields the terminator.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File contents without the terminator.
    pub fn contents(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents up to the first NUL, which is the terminator unless the file
    /// itself contains one.
    pub fn as_c_str(&self) -> &CStr {
        // the buffer always ends in 0, so a NUL is always found
        CStr::from_bytes_until_nul(&self.bytes).unwrap_or_default()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

pub fn read_file(path: impl AsRef<Path>) -> Result<FileBuffer, ReadError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = file.metadata().map_err(|source| ReadError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;
    let size = usize::try_from(metadata.len())
        .ok()
        .filter(|size| *size < usize::MAX)
        .ok_or_else(|| ReadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        })?;

    let mut bytes = vec![0u8; size + 1];
    fill(&mut file, &mut bytes[..size], path)?;
    bytes[size] = 0;

    debug!("read {} bytes from {}", size, path.display());
    Ok(FileBuffer { bytes })
}

/// Fill `bytes` completely from `reader`, failing if it runs dry first.
pub(crate) fn fill(reader: &mut impl Read, bytes: &mut [u8], path: &Path) -> Result<(), ReadError> {
    let size = bytes.len();
    let mut filled = 0;
    while filled < size {
        match reader.read(&mut bytes[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ReadError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    if filled < size {
        return Err(ReadError::ShortRead {
            path: path.to_path_buf(),
            expected: size,
            actual: filled,
        });
    }
    Ok(())
}

pub fn read_text(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    let mut bytes = read_file(path)?.into_vec();
    bytes.pop();
    String::from_utf8(bytes).map_err(|e| ReadError::Utf8 {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}
