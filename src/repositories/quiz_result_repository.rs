use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizResultRecord};

/// Durable sink for completed quiz attempts. Only ever written for players
/// with an identity; anonymous results are never persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    async fn save(&self, record: QuizResultRecord) -> AppResult<QuizResultRecord>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResultRecord>>;
}

pub struct MongoQuizResultRepository {
    collection: Collection<QuizResultRecord>,
}

impl MongoQuizResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!("Successfully created indexes for quiz results collection");
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for MongoQuizResultRepository {
    async fn save(&self, record: QuizResultRecord) -> AppResult<QuizResultRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResultRecord>> {
        let records = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "submitted_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }
}
