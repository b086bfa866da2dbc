//! In-memory archive fixtures for unit tests.

use crate::archive::DosDateTime;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Fixed timestamp written on every fixture entry: 2020-01-01 00:00:00.
pub fn stamp() -> DosDateTime {
    DosDateTime::new((2020 - 1980) << 9 | 1 << 5 | 1, 0)
}

pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn options(method: CompressionMethod) -> FileOptions {
        FileOptions::default()
            .compression_method(method)
            .last_modified_time(DateTime::from_date_and_time(2020, 1, 1, 0, 0, 0).unwrap())
    }

    pub fn stored(mut self, name: &str, data: &[u8]) -> Self {
        self.writer
            .start_file(name, Self::options(CompressionMethod::Stored))
            .unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    pub fn deflated(mut self, name: &str, data: &[u8]) -> Self {
        self.writer
            .start_file(name, Self::options(CompressionMethod::Deflated))
            .unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    pub fn directory(mut self, name: &str) -> Self {
        self.writer
            .add_directory(name, Self::options(CompressionMethod::Stored))
            .unwrap();
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.writer.set_comment(comment);
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }
}
