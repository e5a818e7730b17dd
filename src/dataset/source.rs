use crate::dataset::error::DatasetError;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// The raw dataset bytes, loaded once and shared read-only between workers.
/// Each worker scans the full range through its own cursor.
#[derive(Debug)]
pub struct DatasetSource {
    data: Vec<u8>,
    path: Option<PathBuf>,
}

impl DatasetSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path_buf = path.as_ref().to_path_buf();
        let mut file = File::open(path.as_ref()).map_err(|e| DatasetError::Open {
            path: path_buf.clone(),
            source: e,
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Ok(Self {
            data,
            path: Some(path_buf),
        })
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, path: None }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }

    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;

    #[test]
    fn test_open_missing_file_is_fatal() {
        let err = DatasetSource::open("no/such/dataset.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }

    #[test]
    fn test_independent_readers() {
        let source = DatasetSource::from_text("header\nrow\n");

        let mut first = String::new();
        source.reader().read_line(&mut first).unwrap();

        let mut second = String::new();
        source.reader().read_line(&mut second).unwrap();

        assert_eq!(first, "header\n");
        assert_eq!(first, second);
    }
}
