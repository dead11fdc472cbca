//! Embedded asset table
//!
//! Holds `include_bytes!` contents in a `'static` table. Immutable, so one
//! instance can serve any number of concurrent command builds.

use std::io::Read;

use crate::error::AssetError;
use crate::ports::AssetSource;

/// Static `(name, contents)` table compiled into the binary
#[derive(Clone, Copy, Debug)]
pub struct EmbeddedAssets {
    files: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedAssets {
    pub const fn new(files: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { files }
    }

    /// Raw contents of `name`, if embedded
    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.files
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, contents)| *contents)
    }
}

impl AssetSource for EmbeddedAssets {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        self.get(name)
            .map(|contents| Box::new(contents) as Box<dyn Read>)
            .ok_or_else(|| AssetError::NotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ASSETS: EmbeddedAssets = EmbeddedAssets::new(&[("a/steps.sh", b"echo a\n" as &[u8])]);

    #[test]
    fn test_open_known_asset() {
        let mut contents = String::new();
        ASSETS
            .open("a/steps.sh")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "echo a\n");
    }

    #[test]
    fn test_open_unknown_asset() {
        assert!(matches!(
            ASSETS.open("missing.sh"),
            Err(AssetError::NotFound { name }) if name == "missing.sh"
        ));
    }
}
