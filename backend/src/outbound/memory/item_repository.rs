//! Mutex-guarded `Vec` implementing the ordered item store.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ItemPersistenceError, ItemRepository};
use crate::domain::{Item, ItemFields};

/// Ordered item store held in process memory.
///
/// A single lock guards every operation, so a lookup and the mutation it
/// selects always happen in the same critical section. Lookups are linear
/// scans.
///
/// # Examples
/// ```
/// use shopping_list::domain::{Item, ItemFields};
/// use shopping_list::outbound::memory::InMemoryItemRepository;
///
/// let repo = InMemoryItemRepository::with_items(vec![Item::from(ItemFields::new("Bounty", 1.5))]);
/// assert_eq!(repo.len().expect("lock"), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
}

impl InMemoryItemRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `items` in the given order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Number of stored items.
    pub fn len(&self) -> Result<usize, ItemPersistenceError> {
        Ok(self.lock()?.len())
    }

    /// True when the store holds no items.
    pub fn is_empty(&self) -> Result<bool, ItemPersistenceError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Item>>, ItemPersistenceError> {
        self.items
            .lock()
            .map_err(|err| ItemPersistenceError::poisoned(err.to_string()))
    }

    fn position(items: &[Item], name: &str) -> Option<usize> {
        items.iter().position(|item| item.has_name(name))
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ItemPersistenceError> {
        Ok(self.lock()?.clone())
    }

    async fn find_first(&self, name: &str) -> Result<Option<Item>, ItemPersistenceError> {
        Ok(self.lock()?.iter().find(|item| item.has_name(name)).cloned())
    }

    async fn append(&self, item: Item) -> Result<Item, ItemPersistenceError> {
        self.lock()?.push(item.clone());
        Ok(item)
    }

    async fn replace_first(
        &self,
        name: &str,
        fields: ItemFields,
    ) -> Result<Option<Item>, ItemPersistenceError> {
        let mut items = self.lock()?;
        let Some(item) = items.iter_mut().find(|item| item.has_name(name)) else {
            return Ok(None);
        };
        item.overwrite(fields);
        Ok(Some(item.clone()))
    }

    async fn remove_first(&self, name: &str) -> Result<Option<Item>, ItemPersistenceError> {
        let mut items = self.lock()?;
        Ok(Self::position(&items, name).map(|index| items.remove(index)))
    }

    async fn reset(&self, items: Vec<Item>) -> Result<(), ItemPersistenceError> {
        *self.lock()? = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use rstest::{fixture, rstest};

    fn item(name: &str, price: f64) -> Item {
        Item::from(ItemFields::new(name, price))
    }

    fn names(items: &[Item]) -> Vec<Option<&str>> {
        items.iter().map(Item::name).collect()
    }

    #[fixture]
    fn repo() -> InMemoryItemRepository {
        InMemoryItemRepository::with_items(vec![
            item("Bounty", 1.5),
            item("Avocado", 1.0),
            item("Bounty", 2.0),
        ])
    }

    #[rstest]
    #[tokio::test]
    async fn append_preserves_insertion_order(repo: InMemoryItemRepository) {
        repo.append(item("cheerios", 3.4)).await.expect("append");

        let items = repo.list().await.expect("list");
        assert_eq!(
            names(&items),
            vec![Some("Bounty"), Some("Avocado"), Some("Bounty"), Some("cheerios")]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn find_first_returns_earliest_duplicate(repo: InMemoryItemRepository) {
        let found = repo.find_first("Bounty").await.expect("find");
        assert_eq!(found, Some(item("Bounty", 1.5)));
    }

    #[rstest]
    #[tokio::test]
    async fn find_first_is_case_sensitive(repo: InMemoryItemRepository) {
        let found = repo.find_first("bounty").await.expect("find");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn replace_first_mutates_stored_entry(repo: InMemoryItemRepository) {
        let updated = repo
            .replace_first("Bounty", ItemFields::new("bountyYYY", 3.5))
            .await
            .expect("replace");
        assert_eq!(updated, Some(item("bountyYYY", 3.5)));

        let items = repo.list().await.expect("list");
        assert_eq!(
            items,
            vec![item("bountyYYY", 3.5), item("Avocado", 1.0), item("Bounty", 2.0)]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn remove_first_keeps_relative_order(repo: InMemoryItemRepository) {
        let removed = repo.remove_first("Bounty").await.expect("remove");
        assert_eq!(removed, Some(item("Bounty", 1.5)));

        let items = repo.list().await.expect("list");
        assert_eq!(items, vec![item("Avocado", 1.0), item("Bounty", 2.0)]);
    }

    #[rstest]
    #[tokio::test]
    async fn misses_leave_store_untouched(repo: InMemoryItemRepository) {
        assert!(repo.remove_first("coconut").await.expect("remove").is_none());
        assert!(
            repo.replace_first("coconut", ItemFields::default())
                .await
                .expect("replace")
                .is_none()
        );
        assert_eq!(repo.len().expect("len"), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn reset_replaces_contents(repo: InMemoryItemRepository) {
        repo.reset(Vec::new()).await.expect("reset");
        assert!(repo.is_empty().expect("is_empty"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_not_lost() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let tasks: Vec<_> = (0..32)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.append(item(&format!("item-{n}"), 1.0)).await })
            })
            .collect();
        for task in tasks {
            task.await.expect("join").expect("append");
        }
        assert_eq!(repo.len().expect("len"), 32);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let poisoner = Arc::clone(&repo);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.items.lock().expect("first lock");
            panic!("poison the store");
        })
        .join();

        assert!(matches!(
            repo.len(),
            Err(ItemPersistenceError::Poisoned { .. })
        ));
    }
}
