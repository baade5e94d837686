use crate::error::{PersistenceError, Result};
use crc64fast::Digest;
use credence_kernel::store::{StateStore, StoreError};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub entry_count: u32,
    pub checksum: u64,
}

impl StoreHeader {
    pub const SIZE: usize = 4 + 4 + 4 + 8; // 20 bytes
    pub const MAGIC: [u8; 4] = *b"CRED";
    pub const VERSION: u32 = 1;

    pub fn new(entry_count: u32, checksum: u64) -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            entry_count,
            checksum,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.magic);
        buf[4..8].copy_from_slice(&self.version.to_le_bytes());
        buf[8..12].copy_from_slice(&self.entry_count.to_le_bytes());
        buf[12..20].copy_from_slice(&self.checksum.to_le_bytes());
        buf
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        reader.read_exact(&mut buf)?;

        let magic: [u8; 4] = buf[0..4].try_into().unwrap();
        if magic != Self::MAGIC {
            return Err(PersistenceError::InvalidMagic);
        }

        let version = u32::from_le_bytes(buf[4..8].try_into().unwrap());
        if version != Self::VERSION {
            return Err(PersistenceError::UnsupportedVersion(version));
        }

        let entry_count = u32::from_le_bytes(buf[8..12].try_into().unwrap());
        let checksum = u64::from_le_bytes(buf[12..20].try_into().unwrap());

        Ok(Self {
            magic,
            version,
            entry_count,
            checksum,
        })
    }
}

/// File-backed ledger state.
///
/// The whole key space lives in one snapshot file: header, then
/// length-prefixed entries in key order. Every put rewrites the file through
/// a temp-file rename, so a crash leaves either the old or the new state,
/// never a torn one. Opening fails closed on any corruption.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u8>>,
}

impl FileStore {
    /// Open a store file, creating an empty store if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let mut file = File::open(&path)?;
        let header = StoreHeader::read_from(&mut file)?;

        let mut body = Vec::new();
        file.read_to_end(&mut body)?;

        let computed = compute_crc64(&body);
        if computed != header.checksum {
            return Err(PersistenceError::ChecksumMismatch {
                expected: header.checksum,
                found: computed,
            });
        }

        let entries = decode_entries(&body, header.entry_count)?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let body = encode_entries(&self.entries);
        let header = StoreHeader::new(self.entries.len() as u32, compute_crc64(&body));

        let tmp = self.path.with_extension("tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(&header.to_bytes())?;
        file.write_all(&body)?;
        file.sync_data()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> std::result::Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> std::result::Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value.to_vec());
        if let Err(e) = self.persist() {
            // Roll the in-memory map back so it keeps matching the file.
            match previous {
                Some(old) => {
                    self.entries.insert(key.to_string(), old);
                }
                None => {
                    self.entries.remove(key);
                }
            }
            return Err(StoreError(e.to_string()));
        }
        Ok(())
    }
}

fn encode_entries(entries: &BTreeMap<String, Vec<u8>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (key, value) in entries {
        body.extend_from_slice(&(key.len() as u32).to_le_bytes());
        body.extend_from_slice(key.as_bytes());
        body.extend_from_slice(&(value.len() as u32).to_le_bytes());
        body.extend_from_slice(value);
    }
    body
}

fn decode_entries(body: &[u8], entry_count: u32) -> Result<BTreeMap<String, Vec<u8>>> {
    let mut entries = BTreeMap::new();
    let mut offset = 0usize;

    for _ in 0..entry_count {
        let key = decode_chunk(body, &mut offset)?;
        let key = String::from_utf8(key)
            .map_err(|_| PersistenceError::InvalidFormat("key is not UTF-8".to_string()))?;
        let value = decode_chunk(body, &mut offset)?;
        entries.insert(key, value);
    }

    if offset != body.len() {
        return Err(PersistenceError::InvalidFormat(format!(
            "trailing bytes after {} entries",
            entry_count
        )));
    }
    Ok(entries)
}

fn decode_chunk(body: &[u8], offset: &mut usize) -> Result<Vec<u8>> {
    let end = *offset + 4;
    if end > body.len() {
        return Err(PersistenceError::InvalidFormat(
            "truncated length prefix".to_string(),
        ));
    }
    let len = u32::from_le_bytes(body[*offset..end].try_into().unwrap()) as usize;
    *offset = end;

    if *offset + len > body.len() {
        return Err(PersistenceError::InvalidFormat(
            "truncated entry payload".to_string(),
        ));
    }
    let chunk = body[*offset..*offset + len].to_vec();
    *offset += len;
    Ok(chunk)
}

pub fn compute_crc64(data: &[u8]) -> u64 {
    let mut digest = Digest::new();
    digest.write(data);
    digest.sum64()
}
