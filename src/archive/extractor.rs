use flate2::read::DeflateDecoder;
use std::io::Read;
use std::sync::Arc;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// Entry-level access to an archive: listing and reading entry bytes.
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Read and decompress an entry's data into memory.
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        if entry.is_encrypted() {
            bail!("{} is encrypted", entry.file_name);
        }

        let data_offset = self.parser.get_data_offset(entry).await?;
        if data_offset
            .checked_add(entry.compressed_size)
            .is_none_or(|end| end > self.parser.size())
        {
            bail!("Data of {} extends past the end of the archive", entry.file_name);
        }

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_exact_at(data_offset, &mut raw)
            .await?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(raw),
            CompressionMethod::Deflate => {
                let mut data = Vec::new();
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size.saturating_add(1))
                    .read_to_end(&mut data)
                    .with_context(|| format!("Cannot inflate {}", entry.file_name))?;
                if data.len() as u64 != entry.uncompressed_size {
                    bail!(
                        "Inflated size mismatch for {}: expected {} bytes, got {}{}",
                        entry.file_name,
                        entry.uncompressed_size,
                        data.len(),
                        if data.len() as u64 > entry.uncompressed_size { " or more" } else { "" }
                    );
                }
                Ok(data)
            }
            CompressionMethod::Unknown(method) => bail!(
                "Unsupported compression method {} for {} (only STORED and DEFLATE are supported)",
                method,
                entry.file_name
            ),
        }
    }
}
