use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::input::ItemInput;
use crate::domain::item::model::Item;

pub struct CreateItemParams {
    pub input: ItemInput,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
