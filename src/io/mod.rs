//! Random-access data sources that archives are read from.

mod http;
mod local;
mod memory;

pub use http::HttpRangeReader;
pub use local::LocalFileReader;
pub use memory::MemoryReader;

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::path::Path;

/// Trait for random access reading from a data source
#[async_trait]
pub trait ReadAt: Send + Sync {
    /// Read data at the specified offset into the buffer
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize>;

    /// Get the total size of the data source
    fn size(&self) -> u64;

    /// Fill the whole buffer starting at `offset`, failing on a short source.
    async fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read_at(offset + filled as u64, &mut buf[filled..]).await?;
            if n == 0 {
                bail!(
                    "Unexpected end of data at offset {} ({} bytes missing)",
                    offset + filled as u64,
                    buf.len() - filled
                );
            }
            filled += n;
        }
        Ok(())
    }
}

/// Returns `true` if the location names a remote archive.
pub fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// A top-level archive source, chosen from the location string.
pub enum ArchiveSource {
    Local(LocalFileReader),
    Http(HttpRangeReader),
}

impl ArchiveSource {
    /// Open `location` as an HTTP Range source if it is a URL, else as a local file.
    pub async fn open(location: &str) -> Result<Self> {
        if is_http_url(location) {
            Ok(Self::Http(HttpRangeReader::new(location.to_string()).await?))
        } else {
            Ok(Self::Local(LocalFileReader::new(Path::new(location))?))
        }
    }

    /// Bytes fetched over the network so far, `None` for local files.
    pub fn transferred_bytes(&self) -> Option<u64> {
        match self {
            Self::Local(_) => None,
            Self::Http(reader) => Some(reader.transferred_bytes()),
        }
    }
}

#[async_trait]
impl ReadAt for ArchiveSource {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        match self {
            Self::Local(reader) => reader.read_at(offset, buf).await,
            Self::Http(reader) => reader.read_at(offset, buf).await,
        }
    }

    fn size(&self) -> u64 {
        match self {
            Self::Local(reader) => reader.size(),
            Self::Http(reader) => reader.size(),
        }
    }
}

/// Format a byte count with a binary unit (bytes, KB, MB, GB).
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
