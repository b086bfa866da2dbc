#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

pub enum Entry<'a> {
    File(&'a str, &'a [u8]),
    Dir(&'a str),
    /// A nested archive stored under the given name
    Archive(&'a str, Vec<u8>),
}

pub fn options_at(second: u8) -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::from_date_and_time(2020, 1, 1, 0, 0, second).unwrap())
}

pub fn archive_bytes(entries: &[Entry]) -> Vec<u8> {
    archive_bytes_at(entries, 0)
}

/// Build an archive whose entries all carry 2020-01-01 00:00:`second`.
pub fn archive_bytes_at(entries: &[Entry], second: u8) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = options_at(second);
    for entry in entries {
        match entry {
            Entry::File(name, data) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            Entry::Dir(name) => writer.add_directory(*name, options).unwrap(),
            Entry::Archive(name, data) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
        }
    }
    writer.finish().unwrap().into_inner()
}

pub fn write_archive(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

pub fn location(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
