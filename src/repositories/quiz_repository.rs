use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)>;
    async fn list_by_creator(
        &self,
        creator_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Quiz>, i64)>;
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn replace(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
    /// Bumps the attempt counter and raises the highest observed percentage.
    /// Single-document atomic operators, so concurrent submits cannot lose
    /// the maximum.
    async fn record_attempt_stats(&self, id: &str, percentage: f64) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let creator_index = IndexModel::builder()
            .keys(doc! { "creatorId": 1 })
            .options(IndexOptions::builder().name("creator_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(creator_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }

    async fn page(
        &self,
        filter: mongodb::bson::Document,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let items: Vec<Quiz> = self
            .collection
            .find(filter)
            .skip(offset.max(0) as u64)
            .limit(limit)
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;

        Ok((items, total))
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        self.page(doc! {}, offset, limit).await
    }

    async fn list_by_creator(
        &self,
        creator_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        self.page(doc! { "creatorId": creator_id }, offset, limit)
            .await
    }

    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn replace(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection
            .replace_one(doc! { "id": &quiz.id }, &quiz)
            .await?;
        Ok(quiz)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn record_attempt_stats(&self, id: &str, percentage: f64) -> AppResult<()> {
        self.collection
            .update_one(
                doc! { "id": id },
                doc! {
                    "$inc": { "timesTaken": 1 },
                    "$max": { "highestScore": percentage },
                },
            )
            .await?;
        Ok(())
    }
}
