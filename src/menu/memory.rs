use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

use super::{parse_link_id, MenuLink, MenuStore, NewMenuLink, StoreResult};

/// In-process menu store for handler tests
///
/// Keeps links in insertion order; listing sorts stably by weight, so equal
/// weights come back in the order they were added.
#[derive(Default)]
pub struct InMemoryMenuStore {
    links: Mutex<Vec<MenuLink>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn list_links(&self) -> StoreResult<Vec<MenuLink>> {
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by_key(|link| link.weight);
        Ok(links)
    }

    async fn add_link(&self, link: NewMenuLink) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        self.links.lock().unwrap().push(MenuLink {
            id,
            weight: link.weight,
            path: link.path,
            name: link.name,
        });
        Ok(id)
    }

    async fn delete_link(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_link_id(id)?;
        let mut links = self.links.lock().unwrap();
        match links.iter().position(|link| link.id == oid) {
            Some(index) => {
                links.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::StoreError;
    use std::collections::HashSet;

    fn link(weight: i32, path: &str, name: &str) -> NewMenuLink {
        NewMenuLink {
            weight,
            path: path.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_is_sorted_for_any_insertion_order() {
        let orders: [&[i32]; 4] = [
            &[1, 2, 3, 4],
            &[4, 3, 2, 1],
            &[3, -1, 3, 0, 10, 2],
            &[7, 7, 7],
        ];

        for weights in orders {
            let store = InMemoryMenuStore::new();
            for (i, w) in weights.iter().enumerate() {
                store
                    .add_link(link(*w, &format!("/{}", i), &format!("L{}", i)))
                    .await
                    .unwrap();
            }

            let listed = store.list_links().await.unwrap();
            assert_eq!(listed.len(), weights.len());
            assert!(
                listed.windows(2).all(|pair| pair[0].weight <= pair[1].weight),
                "not sorted for insertion order {:?}",
                weights
            );
        }
    }

    #[tokio::test]
    async fn test_add_assigns_fresh_id() {
        let store = InMemoryMenuStore::new();
        store.add_link(link(1, "/", "Home")).await.unwrap();
        let before = store.list_links().await.unwrap();
        let seen: HashSet<ObjectId> = before.iter().map(|l| l.id).collect();

        let id = store.add_link(link(5, "/x", "X")).await.unwrap();

        let after = store.list_links().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(!seen.contains(&id));

        let added: Vec<&MenuLink> = after.iter().filter(|l| !seen.contains(&l.id)).collect();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].id, id);
        assert_eq!(added[0].weight, 5);
        assert_eq!(added[0].path, "/x");
        assert_eq!(added[0].name, "X");
    }

    #[tokio::test]
    async fn test_delete_existing_removes_exactly_one() {
        let store = InMemoryMenuStore::new();
        let keep = store.add_link(link(1, "/a", "A")).await.unwrap();
        let gone = store.add_link(link(1, "/b", "B")).await.unwrap();

        assert!(store.delete_link(&gone.to_hex()).await.unwrap());

        let listed = store.list_links().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = InMemoryMenuStore::new();
        store.add_link(link(1, "/a", "A")).await.unwrap();
        let before = store.list_links().await.unwrap();

        let deleted = store.delete_link(&ObjectId::new().to_hex()).await.unwrap();

        assert!(!deleted);
        assert_eq!(store.list_links().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_malformed_id_fails() {
        let store = InMemoryMenuStore::new();
        store.add_link(link(1, "/a", "A")).await.unwrap();
        let before = store.list_links().await.unwrap();

        let result = store.delete_link("12345").await;

        assert!(matches!(result, Err(StoreError::InvalidIdentifier(ref s)) if s == "12345"));
        assert_eq!(store.list_links().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let store = InMemoryMenuStore::new();
        assert!(store.list_links().await.unwrap().is_empty());

        store.add_link(link(2, "/a", "A")).await.unwrap();
        let b = store.add_link(link(1, "/b", "B")).await.unwrap();

        let names: Vec<String> = store
            .list_links()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["B", "A"]);

        store.delete_link(&b.to_hex()).await.unwrap();

        let names: Vec<String> = store
            .list_links()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["A"]);
    }
}
