// src/services/category_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryRequest},
    repositories::CategoryRepository,
    services::Requester,
    utils::html::clean_html,
};

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn create(&self, requester: &Requester, mut request: CategoryRequest) -> AppResult<Category> {
        request.description = clean_html(&request.description);
        request.validate()?;

        if self.categories.find_live_by_name(&request.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Category already exists. Please try with another name.".to_string(),
            ));
        }

        let category = self
            .categories
            .create(
                requester.user_id,
                &request.name,
                &request.description,
                request.category_pic.as_deref(),
            )
            .await?;

        tracing::info!("Category {} created by user {}", category.id, requester.user_id);
        Ok(category)
    }

    /// Overwrites a live category. Its own name may be kept; another live
    /// category's name may not be taken.
    pub async fn update(
        &self,
        requester: &Requester,
        id: i64,
        mut request: CategoryRequest,
    ) -> AppResult<Category> {
        request.description = clean_html(&request.description);
        request.validate()?;

        self.get(id).await?;

        if let Some(holder) = self.categories.find_live_by_name(&request.name).await? {
            if holder.id != id {
                return Err(AppError::Conflict(
                    "Please change the name because a category with this name already exists".to_string(),
                ));
            }
        }

        let category = self
            .categories
            .update(
                id,
                &request.name,
                &request.description,
                request.category_pic.as_deref(),
            )
            .await?
            .ok_or_else(|| category_not_found(id))?;

        tracing::info!("Category {} updated by user {}", id, requester.user_id);
        Ok(category)
    }

    /// Soft-deletes a live category. Quizzes filed under it keep their reference.
    pub async fn delete(&self, requester: &Requester, id: i64) -> AppResult<i64> {
        if !self.categories.soft_delete(id).await? {
            return Err(category_not_found(id));
        }
        tracing::info!("Category {} deleted by user {}", id, requester.user_id);

        Ok(id)
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.categories.list_live().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Category> {
        self.categories
            .find_live_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))
    }
}

fn category_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Category not found with the id {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::user::Role, test_utils::MemoryStore};

    fn request(name: &str) -> CategoryRequest {
        CategoryRequest {
            name: name.to_string(),
            description: "Questions about systems programming".to_string(),
            category_pic: None,
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let store = Arc::new(MemoryStore::default());
        let service = CategoryService::new(store.clone());
        let educator = Requester { user_id: 1, role: Role::Educator };

        let created = service.create(&educator, request("Programming")).await.unwrap();
        assert_eq!(created.creator_id, 1);

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(service.get(created.id).await.unwrap().name, "Programming");
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let store = Arc::new(MemoryStore::default());
        let service = CategoryService::new(store.clone());
        let educator = Requester { user_id: 1, role: Role::Educator };

        service.create(&educator, request("Programming")).await.unwrap();
        let err = service.create(&educator, request("Programming")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let service = CategoryService::new(Arc::new(MemoryStore::default()));
        assert!(matches!(service.get(5).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_keeps_own_name_but_not_anothers() {
        let store = Arc::new(MemoryStore::default());
        let service = CategoryService::new(store.clone());
        let educator = Requester { user_id: 1, role: Role::Educator };

        let programming = service.create(&educator, request("Programming")).await.unwrap();
        service.create(&educator, request("Databases")).await.unwrap();

        let mut req = request("Programming");
        req.description = "Compilers, runtimes and tooling".into();
        let updated = service.update(&educator, programming.id, req).await.unwrap();
        assert_eq!(updated.description, "Compilers, runtimes and tooling");

        let err = service
            .update(&educator, programming.id, request("Databases"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn deleted_category_disappears_and_frees_its_name() {
        let store = Arc::new(MemoryStore::default());
        let service = CategoryService::new(store.clone());
        let educator = Requester { user_id: 1, role: Role::Educator };

        let created = service.create(&educator, request("Programming")).await.unwrap();
        assert_eq!(service.delete(&educator, created.id).await.unwrap(), created.id);

        assert!(service.list().await.unwrap().is_empty());
        assert!(matches!(service.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.delete(&educator, created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update(&educator, created.id, request("Programming")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(service.create(&educator, request("Programming")).await.is_ok());
    }

    #[tokio::test]
    async fn sanitised_description_must_still_be_long_enough() {
        let service = CategoryService::new(Arc::new(MemoryStore::default()));
        let educator = Requester { user_id: 1, role: Role::Educator };
        let mut req = request("Programming");
        req.description = "<script>xxxxxxxxxxxx</script>abc".into();
        assert!(matches!(
            service.create(&educator, req).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn short_description_is_rejected() {
        let service = CategoryService::new(Arc::new(MemoryStore::default()));
        let educator = Requester { user_id: 1, role: Role::Educator };
        let mut req = request("Programming");
        req.description = "short".into();
        assert!(matches!(
            service.create(&educator, req).await,
            Err(AppError::BadRequest(_))
        ));
    }
}
