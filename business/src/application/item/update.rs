use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        // The name may stay the same; only a different item owning it is a conflict.
        if let Some(owner) = self.repository.find_by_name(&params.input.name).await?
            && owner.id != existing.id
        {
            self.logger
                .warn(&format!("Item name already taken: {}", params.input.name));
            return Err(ItemError::AlreadyExists);
        }

        let updated = Item::from_repository(
            existing.id,
            params.input.name,
            params.input.description,
            params.input.quantity,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await.map_err(|e| match e {
            RepositoryError::Duplicated => ItemError::AlreadyExists,
            other => ItemError::Repository(other),
        })?;

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::input::ItemInput;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_item(id: Uuid, name: &str) -> Item {
        Item::from_repository(
            id,
            name.to_string(),
            Some("old description".to_string()),
            1,
            Utc::now() - Duration::days(2),
            Utc::now() - Duration::days(1),
        )
    }

    fn new_input() -> ItemInput {
        ItemInput::new(
            "Brown Rice".to_string(),
            Some("Whole grain 10kg".to_string()),
            4,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_replace_fields_and_refresh_updated_at() {
        let item_id = Uuid::new_v4();
        let existing = stored_item(item_id, "Rice");
        let previous_updated_at = existing.updated_at;
        let created_at = existing.created_at;

        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == item_id)
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemParams {
                id: item_id,
                input: new_input(),
            })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.id, item_id);
        assert_eq!(updated.name, "Brown Rice");
        assert_eq!(updated.description.as_deref(), Some("Whole grain 10kg"));
        assert_eq!(updated.quantity, 4);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at > previous_updated_at);
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemParams {
                id: Uuid::new_v4(),
                input: new_input(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_when_name_owned_by_other_item() {
        let item_id = Uuid::new_v4();
        let other_id = Uuid::new_v4();

        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_item(item_id, "Rice")));
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "Brown Rice")
            .returning(move |_| Ok(Some(stored_item(other_id, "Brown Rice"))));
        // No save expectation: the conflicting rename must not be persisted.

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemParams {
                id: item_id,
                input: new_input(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_allow_keeping_own_name() {
        let item_id = Uuid::new_v4();

        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_item(item_id, "Rice")));
        mock_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(stored_item(item_id, "Rice"))));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let input = ItemInput::new("Rice".to_string(), None, 9).unwrap();
        let result = use_case
            .execute(UpdateItemParams { id: item_id, input })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.name, "Rice");
        assert_eq!(updated.quantity, 9);
    }

    #[tokio::test]
    async fn should_map_duplicated_save_to_conflict() {
        let item_id = Uuid::new_v4();

        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored_item(item_id, "Rice")));
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemParams {
                id: item_id,
                input: new_input(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::AlreadyExists));
    }
}
