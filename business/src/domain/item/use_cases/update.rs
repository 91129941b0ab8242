use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::input::ItemInput;
use crate::domain::item::model::Item;

pub struct UpdateItemParams {
    pub id: Uuid,
    pub input: ItemInput,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
