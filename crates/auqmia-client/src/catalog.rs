use auqmia_core::{paths, Animal};

use crate::error::ClientError;
use crate::gateway::{Access, Gateway};

/// Remote catalog of adoptable animals. Holds no cache of its own.
#[derive(Clone)]
pub struct CatalogAccessor {
    gateway: Gateway,
}

impl CatalogAccessor {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list_animals(&self) -> Result<Vec<Animal>, ClientError> {
        self.gateway.get(paths::ANIMALS, Access::Public).await
    }

    pub async fn delete_animal(&self, id: &str) -> Result<(), ClientError> {
        let path = paths::animal(id).ok_or_else(|| ClientError::InvalidId(id.to_string()))?;
        self.gateway.delete(&path, Access::Authenticated).await
    }
}
