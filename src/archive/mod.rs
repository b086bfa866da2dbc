//! Zip-family archive reading (zip, jar, war, ear and friends).
//!
//! - [`structures`]: on-disk records (EOCD, ZIP64 records, central directory entries)
//! - [`parser`]: locating and decoding those records from a [`ReadAt`](crate::io::ReadAt) source
//! - [`extractor`]: listing entries and reading their bytes
//!
//! Only the Central Directory is consulted for metadata, so listing an archive
//! never touches entry data. Entry bytes are read on demand, which the
//! comparison does only for nested archives.
//!
//! Supported: PKZIP APPNOTE 6.3 layout, ZIP64 extensions, STORED and DEFLATE.
//! Not supported: encryption, multi-disk archives, other compression methods.

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
