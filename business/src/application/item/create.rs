use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Creating item: {}", params.input.name));

        // Friendly pre-check only. The unique index on items.name is the
        // authoritative guard against a concurrent create with the same name.
        if self
            .repository
            .find_by_name(&params.input.name)
            .await?
            .is_some()
        {
            self.logger
                .warn(&format!("Item name already taken: {}", params.input.name));
            return Err(ItemError::AlreadyExists);
        }

        let item = Item::new(params.input);
        self.repository.save(&item).await.map_err(|e| match e {
            RepositoryError::Duplicated => ItemError::AlreadyExists,
            other => ItemError::Repository(other),
        })?;

        self.logger.info(&format!("Item created: {}", item.id));
        Ok(item)
    }
}
