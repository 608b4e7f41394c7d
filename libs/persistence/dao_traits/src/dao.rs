use async_trait::async_trait;

/// Storage seam shared by the catalog implementations. Domain-specific
/// reads and mutations live on the concrete DAO.
#[async_trait]
pub trait GenericDao {
    type Model: Send + Sync + 'static;
    type CreateRequest: Send + Sync + 'static;
    type Error: Send + 'static;
    type ID: ?Sized + Send + Sync;

    async fn find_by_id(
        &self, id: &Self::ID,
    ) -> Result<Self::Model, Self::Error>;

    async fn all(&self) -> Result<Vec<Self::Model>, Self::Error>;

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error>;
}
