use crate::config::KeygenConfig;
use crate::error::{KeygenError, Result};
use common::{
    PersistedKeys, encode_and_persist, generate_keypair, render_grant_sql, render_pkcs8_json,
    render_secret_json,
};
use std::path::PathBuf;
use tracing::info;

/// Validated inputs for one generate, encode and render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenRequest {
    pub key_name: String,
    pub output_dir: PathBuf,
    pub target_user: String,
}

impl KeygenRequest {
    /// Trim the configured values and check them before any key is generated.
    /// A blank target user falls back to the key name.
    pub fn resolve(cfg: &KeygenConfig) -> Result<Self> {
        let key_name = cfg.key_name.as_deref().unwrap_or_default().trim();
        if key_name.is_empty() {
            return Err(KeygenError::InvalidInput(
                "A key name is required (--key-name or key_name in the config file)".to_string(),
            ));
        }

        let output_dir = cfg.output_dir.trim();
        if output_dir.is_empty() {
            return Err(KeygenError::InvalidInput(
                "The output directory must not be empty".to_string(),
            ));
        }

        let target_user = cfg
            .target_user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .unwrap_or(key_name);

        Ok(Self {
            key_name: key_name.to_string(),
            output_dir: PathBuf::from(output_dir),
            target_user: target_user.to_string(),
        })
    }
}

/// Everything produced by one cycle, returned as plain values.
#[derive(Debug, Clone)]
pub struct KeygenOutcome {
    pub key_name: String,
    pub target_user: String,
    pub keys: PersistedKeys,
    pub grant_sql: String,
    pub secret_json: String,
    pub pkcs8_json: String,
}

pub fn run(request: &KeygenRequest) -> Result<KeygenOutcome> {
    info!(
        "Generating key pair '{}' into {}",
        request.key_name,
        request.output_dir.display()
    );

    let keypair = generate_keypair()?;
    let keys = encode_and_persist(&keypair, &request.key_name, &request.output_dir)?;

    let grant_sql = render_grant_sql(&request.target_user, &keys.public.contents);
    let secret_json = render_secret_json(&request.target_user, &keys.private_pkcs1.contents);
    let pkcs8_json = render_pkcs8_json(&request.key_name, &keys.private_pkcs8.contents);

    Ok(KeygenOutcome {
        key_name: request.key_name.clone(),
        target_user: request.target_user.clone(),
        keys,
        grant_sql,
        secret_json,
        pkcs8_json,
    })
}
