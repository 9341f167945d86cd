use async_trait::async_trait;
use domain::bindings::{
    AutoroleBinding, BindingRepository, BindingRepositoryError, MessageBindings, SetupBinding,
};
use domain_shared::discord::{ChannelId, MessageId, RoleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{instrument, warn};

/// Whole-file JSON store. The file is opened, fully read or written, and
/// closed on every call; no descriptor or lock is held between calls.
pub struct JsonBindingRepository {
    path: PathBuf,
}

impl JsonBindingRepository {
    #[instrument(level = "trace", skip_all)]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BindingRepository for JsonBindingRepository {
    #[instrument(level = "debug", err, skip(self))]
    async fn load(&self) -> Result<MessageBindings, BindingRepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            // First run: no file yet.
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(MessageBindings::default())
            }
            Err(err) => return Err(BindingRepositoryError::Corrupt(err.to_string())),
        };

        let stored: StoredBindings = serde_json::from_str(&raw)
            .map_err(|err| BindingRepositoryError::Corrupt(err.to_string()))?;

        stored_to_domain(stored)
    }

    #[instrument(level = "debug", err, skip_all)]
    async fn save(&self, bindings: &MessageBindings) -> Result<(), BindingRepositoryError> {
        let stored = domain_to_stored(bindings);
        let raw = serde_json::to_string_pretty(&stored).map_err(|err| {
            warn!(error = ?err, "Failed to serialize bindings");
            BindingRepositoryError::Unavailable
        })?;

        tokio::fs::write(&self.path, raw).await.map_err(|err| {
            warn!(error = ?err, path = ?self.path, "Failed to write bindings");
            BindingRepositoryError::Unavailable
        })?;

        Ok(())
    }
}

// Persisted layout: outer mapping keys are message id strings, nested ids
// are native integers.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredBindings {
    autoroles: BTreeMap<String, StoredAutorole>,
    setups: BTreeMap<String, StoredSetup>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredAutorole {
    channel_id: u64,
    role_id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSetup {
    channel_id: u64,
    role_ids: Vec<u64>,
}

#[instrument(level = "trace", skip_all)]
fn stored_to_domain(stored: StoredBindings) -> Result<MessageBindings, BindingRepositoryError> {
    let mut bindings = MessageBindings::default();

    for (key, autorole) in stored.autoroles {
        bindings.bind_autorole(
            parse_message_id(&key)?,
            AutoroleBinding {
                channel_id: ChannelId(autorole.channel_id),
                role_id: RoleId(autorole.role_id),
            },
        );
    }
    for (key, setup) in stored.setups {
        bindings.bind_setup(
            parse_message_id(&key)?,
            SetupBinding {
                channel_id: ChannelId(setup.channel_id),
                role_ids: setup.role_ids.into_iter().map(RoleId).collect(),
            },
        );
    }

    Ok(bindings)
}

#[instrument(level = "trace", skip_all)]
fn domain_to_stored(bindings: &MessageBindings) -> StoredBindings {
    let mut stored = StoredBindings::default();

    for (message_id, binding) in &bindings.autoroles {
        stored.autoroles.insert(
            message_id.0.to_string(),
            StoredAutorole {
                channel_id: binding.channel_id.0,
                role_id: binding.role_id.0,
            },
        );
    }
    for (message_id, binding) in &bindings.setups {
        stored.setups.insert(
            message_id.0.to_string(),
            StoredSetup {
                channel_id: binding.channel_id.0,
                role_ids: binding.role_ids.iter().map(|role_id| role_id.0).collect(),
            },
        );
    }

    stored
}

fn parse_message_id(key: &str) -> Result<MessageId, BindingRepositoryError> {
    key.parse::<u64>().map(MessageId).map_err(|_| {
        BindingRepositoryError::Corrupt(format!("invalid message id key {key:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(dir: &tempfile::TempDir) -> JsonBindingRepository {
        JsonBindingRepository::new(dir.path().join("storage.json"))
    }

    fn sample_bindings(entries: usize) -> MessageBindings {
        let mut bindings = MessageBindings::default();
        for n in 0..entries as u64 {
            bindings.bind_autorole(
                MessageId(100 + n),
                AutoroleBinding {
                    channel_id: ChannelId(5),
                    role_id: RoleId(10 + n),
                },
            );
            bindings.bind_setup(
                MessageId(200 + n),
                SetupBinding {
                    channel_id: ChannelId(6),
                    role_ids: vec![RoleId(1), RoleId(2 + n)],
                },
            );
        }
        bindings
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_state() {
        let dir = tempfile::tempdir().unwrap();

        let loaded = repository(&dir).load().await.unwrap();

        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_structurally() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);

        for entries in [0, 1, 3] {
            let bindings = sample_bindings(entries);
            repository.save(&bindings).await.unwrap();
            let loaded = repository.load().await.unwrap();
            assert_eq!(loaded, bindings);
        }
    }

    #[tokio::test]
    async fn persisted_layout_uses_string_keys_and_integer_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);

        let mut bindings = MessageBindings::default();
        bindings.bind_autorole(
            MessageId(77),
            AutoroleBinding {
                channel_id: ChannelId(5),
                role_id: RoleId(10),
            },
        );
        bindings.bind_setup(
            MessageId(90),
            SetupBinding {
                channel_id: ChannelId(6),
                role_ids: vec![RoleId(1), RoleId(2)],
            },
        );
        repository.save(&bindings).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["autoroles"]["77"]["channel_id"], 5);
        assert_eq!(value["autoroles"]["77"]["role_id"], 10);
        assert_eq!(
            value["setups"]["90"]["role_ids"],
            serde_json::json!([1, 2])
        );
    }

    #[tokio::test]
    async fn unparsable_file_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("storage.json"), "{not json").unwrap();

        let result = repository(&dir).load().await;

        assert!(matches!(result, Err(BindingRepositoryError::Corrupt(_))));
    }

    #[tokio::test]
    async fn save_overwrites_previous_content_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);

        repository.save(&sample_bindings(3)).await.unwrap();
        repository.save(&MessageBindings::default()).await.unwrap();

        let loaded = repository.load().await.unwrap();
        assert!(loaded.is_empty());
    }
}
