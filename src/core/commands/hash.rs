use super::{require_file, Command, CommandError};
use crate::core::session::Session;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

#[derive(Clone)]
pub struct HashCommand;

impl Default for HashCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HashCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Lowercase hex SHA-256 of a file, fed through the digest incrementally so
/// large files never sit in memory whole.
pub fn digest_file(path: &Path) -> Result<String, CommandError> {
    require_file(path)?;

    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

impl Command for HashCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<(), CommandError> {
        let raw = args.first().ok_or(CommandError::MissingArgument("path"))?;
        let path = session.resolve(raw)?;
        println!("{}", digest_file(&path)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_known_digest_of_abc() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("abc.txt");
        fs::write(&path, b"abc").expect("write");

        assert_eq!(digest_file(&path).expect("digest"), ABC_SHA256);
    }

    #[test]
    fn test_empty_file_digest() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("empty");
        fs::write(&path, b"").expect("write");

        assert_eq!(digest_file(&path).expect("digest"), EMPTY_SHA256);
    }

    #[test]
    fn test_identical_contents_identical_digests() {
        let tmp = TempDir::new().expect("tempdir");
        let a = tmp.path().join("a.bin");
        let b = tmp.path().join("b.bin");
        fs::write(&a, b"same bytes in both files").expect("write");
        fs::write(&b, b"same bytes in both files").expect("write");

        assert_eq!(digest_file(&a).expect("digest a"), digest_file(&b).expect("digest b"));
    }

    #[test]
    fn test_hash_missing_file() {
        let tmp = TempDir::new().expect("tempdir");
        let result = digest_file(&tmp.path().join("ghost"));
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }

    #[test]
    fn test_hash_missing_argument() {
        let tmp = TempDir::new().expect("tempdir");
        let mut session = Session::new("User".to_string(), tmp.path().to_path_buf());

        let result = HashCommand::new().execute(&mut session, &[]);
        assert!(matches!(result, Err(CommandError::MissingArgument(_))));
    }
}
