use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Something a translation document can be read from.
pub trait Source {
    /// Human readable name used in errors and logs.
    fn name(&self) -> String;
    fn read_bytes(&mut self) -> io::Result<Vec<u8>>;
}

impl Source for &Path {
    fn name(&self) -> String {
        self.display().to_string()
    }

    fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        fs::read(self)
    }
}

impl Source for PathBuf {
    fn name(&self) -> String {
        self.display().to_string()
    }

    fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        fs::read(self)
    }
}

impl Source for &str {
    fn name(&self) -> String {
        (*self).to_string()
    }

    fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        fs::read(*self)
    }
}

impl Source for String {
    fn name(&self) -> String {
        self.clone()
    }

    fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        fs::read(self.as_str())
    }
}

/// Adapts any reader into a named source.
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_bytes(&mut self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
