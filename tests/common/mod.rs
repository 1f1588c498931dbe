//! Shared fixtures for integration tests
//!
//! Note: Items may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Canonical sample buffer: pattern "That was a blank line" at indices 2 and
/// 6, blank lines at 1 and 5, one template, one constant, one non-ASCII
/// character (so the re-encoded rendition actually differs byte-wise).
pub const SAMPLE: &str = "A café line opens the sample buffer.\n\nThat was a blank line\ntemplates look like {greeting}\nconstants look like {{unit}}\n\nThat was a blank line";

pub const SAMPLE_LINES: usize = 7;

/// On-disk renditions of `SAMPLE`: plain UTF-8, latin-1 re-encoded, gzip, bzip2
pub struct Fixture {
    /// Owns the directory; files disappear when dropped
    pub dir: TempDir,
    pub plain: PathBuf,
    pub latin1: PathBuf,
    pub gz: PathBuf,
    pub bz2: PathBuf,
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();

    let plain = dir.path().join("sample.txt");
    std::fs::write(&plain, SAMPLE).unwrap();

    // Every sample char is below U+0100, so the latin-1 bytes are just the
    // code points truncated to one byte.
    let latin1 = dir.path().join("sample.latin1");
    let bytes: Vec<u8> = SAMPLE.chars().map(|c| c as u32 as u8).collect();
    std::fs::write(&latin1, bytes).unwrap();

    let gz = dir.path().join("sample.txt.gz");
    let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), flate2::Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let bz2 = dir.path().join("sample.txt.bz2");
    let mut encoder = BzEncoder::new(File::create(&bz2).unwrap(), bzip2::Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    Fixture {
        dir,
        plain,
        latin1,
        gz,
        bz2,
    }
}
