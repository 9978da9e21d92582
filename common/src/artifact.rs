use crate::crypto::KeyPair;
use crate::{CommonError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    PrivatePkcs1,
    PrivatePkcs8,
    Public,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::PrivatePkcs1,
        ArtifactKind::PrivatePkcs8,
        ArtifactKind::Public,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::PrivatePkcs1 => "private key (PKCS#1)",
            ArtifactKind::PrivatePkcs8 => "private key (PKCS#8)",
            ArtifactKind::Public => "public key",
        }
    }

    /// Appended to the key name to form the file name.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::PrivatePkcs1 => "_private.pem",
            ArtifactKind::PrivatePkcs8 => "_private.p8",
            ArtifactKind::Public => "_public.pem",
        }
    }

    pub fn file_name(&self, key_name: &str) -> String {
        format!("{}{}", key_name, self.file_suffix())
    }
}

#[derive(Debug, Clone)]
pub struct EncodedArtifact {
    pub kind: ArtifactKind,
    pub contents: String,
    pub path: PathBuf,
}

impl EncodedArtifact {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The three artifacts written for one key pair.
#[derive(Debug, Clone)]
pub struct PersistedKeys {
    pub private_pkcs1: EncodedArtifact,
    pub private_pkcs8: EncodedArtifact,
    pub public: EncodedArtifact,
}

impl PersistedKeys {
    pub fn artifacts(&self) -> [&EncodedArtifact; 3] {
        [&self.private_pkcs1, &self.private_pkcs8, &self.public]
    }
}

/// Paths the artifacts of `key_name` occupy under `output_dir`, in
/// [`ArtifactKind::ALL`] order.
pub fn artifact_paths(key_name: &str, output_dir: &Path) -> [PathBuf; 3] {
    ArtifactKind::ALL.map(|kind| output_dir.join(kind.file_name(key_name)))
}

/// Serialize `keypair` into its three PEM encodings and write them under
/// `output_dir`, creating the directory when missing and overwriting existing
/// files.
///
/// Files are written PKCS#1 first, then PKCS#8, then the public key. A failed
/// write leaves any earlier file in place.
pub fn encode_and_persist(
    keypair: &KeyPair,
    key_name: &str,
    output_dir: &Path,
) -> Result<PersistedKeys> {
    if key_name.is_empty() {
        return Err(CommonError::InvalidInput("Key name must not be empty".to_string()));
    }

    let private_pkcs1 = keypair.private_key_pkcs1_pem()?;
    let private_pkcs8 = keypair.private_key_pkcs8_pem()?;
    let public = keypair.public_key_pem()?;

    fs::create_dir_all(output_dir)?;
    debug!("Output directory ready: {}", output_dir.display());

    let [pkcs1_path, pkcs8_path, public_path] = artifact_paths(key_name, output_dir);
    let private_pkcs1 = write_artifact(ArtifactKind::PrivatePkcs1, private_pkcs1, pkcs1_path)?;
    let private_pkcs8 = write_artifact(ArtifactKind::PrivatePkcs8, private_pkcs8, pkcs8_path)?;
    let public = write_artifact(ArtifactKind::Public, public, public_path)?;

    info!("Key pair '{}' written to {}", key_name, output_dir.display());

    Ok(PersistedKeys {
        private_pkcs1,
        private_pkcs8,
        public,
    })
}

fn write_artifact(kind: ArtifactKind, contents: String, path: PathBuf) -> Result<EncodedArtifact> {
    fs::write(&path, contents.as_bytes())?;
    debug!("Wrote {} to {}", kind.label(), path.display());

    Ok(EncodedArtifact {
        kind,
        contents,
        path,
    })
}
