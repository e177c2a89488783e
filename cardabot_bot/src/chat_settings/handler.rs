use anyhow::Result;
use cardabot_core::helpers::backend::ConfigStore;
use cardabot_core::helpers::dto::ChatConfig;
use cardabot_core::helpers::i18n::Language;
use sled::Db;

const TREE_NAME: &str = "chat_settings";

/// Sled-backed per-chat settings. One JSON record per chat id, created
/// lazily on first contact and never deleted.
#[derive(Clone)]
pub struct ChatSettings {
    tree: sled::Tree,
}

impl ChatSettings {
    pub fn new(db: &Db) -> sled::Result<Self> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { tree })
    }

    fn read(&self, chat_id: i64) -> Result<Option<ChatConfig>> {
        match self.tree.get(chat_id.to_string())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn update<F>(&self, chat_id: i64, apply: F) -> Result<()>
    where
        F: Fn(&mut ChatConfig),
    {
        self.tree.fetch_and_update(chat_id.to_string(), |existing| {
            let mut config = existing
                .and_then(|bytes| serde_json::from_slice::<ChatConfig>(bytes).ok())
                .unwrap_or_else(|| ChatConfig::new(chat_id));
            apply(&mut config);
            Some(serde_json::to_vec(&config).unwrap())
        })?;
        Ok(())
    }
}

impl ConfigStore for ChatSettings {
    fn get_or_create(&self, chat_id: i64) -> Result<ChatConfig> {
        if let Some(config) = self.read(chat_id)? {
            return Ok(config);
        }

        let fresh = ChatConfig::new(chat_id);
        let bytes = serde_json::to_vec(&fresh).unwrap();
        // Losing the swap means a concurrent caller created the record
        // first; the read below returns whichever record won.
        let _ = self
            .tree
            .compare_and_swap(chat_id.to_string(), None as Option<&[u8]>, Some(bytes))?;

        Ok(self.read(chat_id)?.unwrap_or(fresh))
    }

    fn get_language(&self, chat_id: i64) -> Result<Language> {
        Ok(self.get_or_create(chat_id)?.language)
    }

    fn set_language(&self, chat_id: i64, language: Language) -> Result<()> {
        self.update(chat_id, |config| config.language = language)
    }

    fn get_default_pool(&self, chat_id: i64) -> Result<String> {
        Ok(self.get_or_create(chat_id)?.default_pool)
    }

    fn set_default_pool(&self, chat_id: i64, pool: &str) -> Result<()> {
        self.update(chat_id, |config| config.default_pool = pool.to_string())
    }

    fn chat_ids(&self) -> Result<Vec<i64>> {
        let mut ids = Vec::new();
        for entry in self.tree.iter() {
            let (key, _) = entry?;
            if let Ok(id) = String::from_utf8_lossy(&key).parse::<i64>() {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
