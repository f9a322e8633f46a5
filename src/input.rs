//! Advert loading

use crate::error::{DecoderError, DecoderResult};
use std::io::Read;
use std::path::Path;

/// Path that means "read the advert from standard input"
pub const STDIN_PATH: &str = "-";

/// Read a whole advert into memory. `-` reads standard input.
pub fn read_advert(path: &Path) -> DecoderResult<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| DecoderError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|source| DecoderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
