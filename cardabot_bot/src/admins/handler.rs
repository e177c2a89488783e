use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use dashmap::DashMap;
use teloxide::{
    Bot,
    prelude::Requester,
    types::{ChatId, UserId},
};

const ADMIN_CACHE_TTL: Duration = Duration::from_secs(3600);

struct CachedAdmins {
    admin_ids: Vec<UserId>,
    fetched_at: Instant,
}

/// Per-chat administrator ids, cached for an hour. A race on refresh only
/// causes a redundant upstream call; the last write wins and the map stays
/// consistent.
#[derive(Clone, Default)]
pub struct AdminCache {
    cache: Arc<DashMap<ChatId, CachedAdmins>>,
}

impl AdminCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup_fresh(&self, chat_id: ChatId) -> Option<Vec<UserId>> {
        let entry = self.cache.get(&chat_id)?;
        if entry.fetched_at.elapsed() < ADMIN_CACHE_TTL {
            Some(entry.admin_ids.clone())
        } else {
            None
        }
    }

    fn store(&self, chat_id: ChatId, admin_ids: Vec<UserId>) {
        self.cache.insert(
            chat_id,
            CachedAdmins {
                admin_ids,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Whether `user_id` administers `chat_id`. Only meaningful for group
    /// chats; private chats skip the gate entirely.
    pub async fn is_admin(&self, bot: &Bot, chat_id: ChatId, user_id: UserId) -> Result<bool> {
        if let Some(ids) = self.lookup_fresh(chat_id) {
            return Ok(ids.contains(&user_id));
        }

        let admins = bot.get_chat_administrators(chat_id).await?;
        let ids: Vec<UserId> = admins.iter().map(|member| member.user.id).collect();
        let is_admin = ids.contains(&user_id);
        self.store(chat_id, ids);

        Ok(is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_misses_on_unknown_chat() {
        let cache = AdminCache::new();
        assert!(cache.lookup_fresh(ChatId(-1)).is_none());
    }

    #[test]
    fn test_store_then_lookup_returns_ids() {
        let cache = AdminCache::new();
        cache.store(ChatId(-1), vec![UserId(10), UserId(20)]);

        let ids = cache.lookup_fresh(ChatId(-1)).unwrap();
        assert_eq!(ids, vec![UserId(10), UserId(20)]);
    }

    #[test]
    fn test_expired_entries_miss() {
        let cache = AdminCache::new();
        cache.cache.insert(
            ChatId(-1),
            CachedAdmins {
                admin_ids: vec![UserId(10)],
                fetched_at: Instant::now() - ADMIN_CACHE_TTL,
            },
        );

        assert!(cache.lookup_fresh(ChatId(-1)).is_none());
    }

    #[test]
    fn test_store_overwrites_previous_entry() {
        let cache = AdminCache::new();
        cache.store(ChatId(-1), vec![UserId(10)]);
        cache.store(ChatId(-1), vec![UserId(30)]);

        let ids = cache.lookup_fresh(ChatId(-1)).unwrap();
        assert_eq!(ids, vec![UserId(30)]);
    }
}
