use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mongo::MongoClient;

#[cfg(test)]
pub mod memory;

/// A navigation entry as stored in the `menuLinks` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(deserialize_with = "deserialize_weight")]
    pub weight: i32,
    pub path: String,
    pub name: String,
}

/// Read a stored weight from any BSON numeric type
///
/// Shells and other drivers write plain numbers as doubles or int64. Doubles
/// are truncated and saturate at the `i32` bounds; NaN maps to `i32::MIN`,
/// which is where MongoDB itself sorts it.
fn deserialize_weight<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct WeightVisitor;

    impl<'de> Visitor<'de> for WeightVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a numeric weight")
        }

        fn visit_i32<E: de::Error>(self, v: i32) -> Result<i32, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            Ok(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            Ok(v.min(i32::MAX as u64) as i32)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            if v.is_nan() {
                Ok(i32::MIN)
            } else {
                // `as` truncates and saturates
                Ok(v as i32)
            }
        }
    }

    deserializer.deserialize_any(WeightVisitor)
}

/// A navigation entry that has not been stored yet
///
/// Carries no identifier; the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuLink {
    pub weight: i32,
    pub path: String,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Connection(#[from] mongodb::error::Error),

    #[error("invalid link identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("insert did not return an ObjectId")]
    MissingInsertedId,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Storage for the site's navigation menu
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// All links, ascending by weight
    async fn list_links(&self) -> StoreResult<Vec<MenuLink>>;

    /// Insert a link and return the identifier the store assigned
    async fn add_link(&self, link: NewMenuLink) -> StoreResult<ObjectId>;

    /// Delete the link with the given hex identifier
    ///
    /// Returns `Ok(false)` when the identifier is well-formed but matches
    /// nothing.
    async fn delete_link(&self, id: &str) -> StoreResult<bool>;

    async fn health_check(&self) -> StoreResult<()>;
}

pub(crate) fn parse_link_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

/// MongoDB-backed menu store
#[derive(Clone)]
pub struct MongoMenuStore {
    client: MongoClient,
    links: Collection<MenuLink>,
}

impl MongoMenuStore {
    pub fn new(client: MongoClient, collection: &str) -> Self {
        let links = client.database().collection::<MenuLink>(collection);
        Self { client, links }
    }
}

#[async_trait]
impl MenuStore for MongoMenuStore {
    async fn list_links(&self) -> StoreResult<Vec<MenuLink>> {
        let cursor = self.links.find(doc! {}).sort(doc! { "weight": 1 }).await?;
        let links: Vec<MenuLink> = cursor.try_collect().await?;

        tracing::debug!("Listed {} menu links", links.len());
        Ok(links)
    }

    async fn add_link(&self, link: NewMenuLink) -> StoreResult<ObjectId> {
        let result = self
            .links
            .clone_with_type::<NewMenuLink>()
            .insert_one(&link)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)?;

        tracing::info!(
            %id,
            weight = link.weight,
            path = %link.path,
            name = %link.name,
            "Added menu link to {}",
            self.links.name()
        );
        Ok(id)
    }

    async fn delete_link(&self, id: &str) -> StoreResult<bool> {
        let oid = parse_link_id(id)?;

        let result = self.links.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 1 {
            tracing::info!(%oid, "Menu link deleted");
            Ok(true)
        } else {
            tracing::debug!(%oid, "No menu link matched, nothing deleted");
            Ok(false)
        }
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(self.client.health_check().await?)
    }
}
