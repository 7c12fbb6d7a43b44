//! Load-or-create storage for the single persisted key pair.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use signet_crypto::{key_codec, KeyPair};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::error::{KeyStoreError, KeyStoreResult};

#[cfg(unix)]
const DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Owns the key record at one fixed path.
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether anything exists at the key path.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Returns the stored key pair and its public key text, generating and
    /// persisting a new pair only when no record exists yet.
    ///
    /// An existing record is never modified. If it is not a regular file or
    /// does not decode, the error is returned and the file is left untouched.
    pub fn load_or_create(&self) -> KeyStoreResult<(KeyPair, String)> {
        match fs::metadata(&self.path) {
            Ok(metadata) => self.load(&metadata),
            Err(e) if e.kind() == ErrorKind::NotFound => self.create(),
            Err(source) => Err(KeyStoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn load(&self, metadata: &fs::Metadata) -> KeyStoreResult<(KeyPair, String)> {
        if !metadata.is_file() {
            return Err(KeyStoreError::NotAFile {
                path: self.path.clone(),
            });
        }
        self.warn_if_exposed(metadata);

        let bytes = fs::read(&self.path)
            .map(Zeroizing::new)
            .map_err(|source| KeyStoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let decoded = key_codec::decode_bytes(&bytes).map_err(|source| KeyStoreError::Decode {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), "Loaded signing key");
        Ok(decoded.into_parts())
    }

    fn create(&self) -> KeyStoreResult<(KeyPair, String)> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        create_private_dir(dir)?;

        let key_pair = KeyPair::try_generate(&mut OsRng).map_err(|e| KeyStoreError::Entropy {
            reason: e.to_string(),
        })?;
        let record = key_codec::encode(&key_pair).map_err(KeyStoreError::Encode)?;

        let write_err = |source| KeyStoreError::Write {
            path: self.path.clone(),
            source,
        };
        let mut staged = tempfile::Builder::new()
            .prefix(".keypair-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(write_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(fs::Permissions::from_mode(FILE_MODE))
                .map_err(write_err)?;
        }
        staged.write_all(record.as_bytes()).map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;

        match staged.persist_noclobber(&self.path) {
            Ok(_) => {
                info!(path = %self.path.display(), "Generated new signing key");
                Ok((key_pair, record.public_key_pem().to_string()))
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                // Another invocation created the record first; theirs wins.
                warn!(
                    path = %self.path.display(),
                    "Key file appeared during creation, using the existing record"
                );
                drop(e.file);
                let metadata = fs::metadata(&self.path).map_err(|source| KeyStoreError::Read {
                    path: self.path.clone(),
                    source,
                })?;
                self.load(&metadata)
            }
            Err(e) => Err(KeyStoreError::Persist {
                path: self.path.clone(),
                source: e.error,
            }),
        }
    }

    #[cfg(unix)]
    fn warn_if_exposed(&self, metadata: &fs::Metadata) {
        use std::os::unix::fs::PermissionsExt;

        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %self.path.display(),
                mode = %format!("{mode:o}"),
                "Key file is accessible by other users"
            );
        }
    }

    #[cfg(not(unix))]
    fn warn_if_exposed(&self, _metadata: &fs::Metadata) {}
}

fn create_private_dir(dir: &Path) -> KeyStoreResult<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(dir).map_err(|source| KeyStoreError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
