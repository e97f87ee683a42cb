use super::{require_file, Command, CommandError};
use crate::core::session::Session;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone)]
pub struct CompressCommand;

#[derive(Clone)]
pub struct DecompressCommand;

impl Default for CompressCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DecompressCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl DecompressCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Stream-compress `source` into `dest` as gzip.
pub fn compress_file(source: &Path, dest: &Path) -> Result<(), CommandError> {
    require_file(source)?;

    let mut reader = BufReader::new(File::open(source)?);
    let mut encoder = GzEncoder::new(BufWriter::new(File::create(dest)?), Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?.flush()?;
    Ok(())
}

/// Inverse of [`compress_file`]. A malformed gzip stream surfaces as an IO
/// error from the decoder.
pub fn decompress_file(source: &Path, dest: &Path) -> Result<(), CommandError> {
    require_file(source)?;

    let mut decoder = GzDecoder::new(BufReader::new(File::open(source)?));
    let mut writer = BufWriter::new(File::create(dest)?);
    io::copy(&mut decoder, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn take_two(args: &[String]) -> Result<(&str, &str), CommandError> {
    let src = args.first().ok_or(CommandError::MissingArgument("src"))?;
    let dest = args.get(1).ok_or(CommandError::MissingArgument("dest"))?;
    Ok((src, dest))
}

impl Command for CompressCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let (raw_src, raw_dest) = take_two(args)?;
        let source = session.resolve(raw_src)?;
        let dest = session.resolve(raw_dest)?;
        compress_file(&source, &dest)
    }
}

impl Command for DecompressCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let (raw_src, raw_dest) = take_two(args)?;
        let source = session.resolve(raw_src)?;
        let dest = session.resolve(raw_dest)?;
        decompress_file(&source, &dest)
    }
}
