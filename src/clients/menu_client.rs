//! # Menu Client
//!
//! The catalog surface: name-keyed upsert, listing, and the atomic
//! reserve/release stock operations.

use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, MenuItemUpsert};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    fn map_err(e: FrameworkError) -> MenuError {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<MenuError>() {
                Ok(menu_err) => *menu_err,
                Err(other) => MenuError::ActorCommunication(other.to_string()),
            },
            other => MenuError::ActorCommunication(other.to_string()),
        }
    }

    /// Creates or replaces the item with the given (trimmed) name.
    ///
    /// The name, not the id, is the uniqueness key: upserting an existing
    /// name overwrites its price and quantity, a new name creates the item.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn upsert(&self, params: MenuItemUpsert) -> Result<MenuItem, MenuError> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(MenuError::Validation("name must not be empty".to_string()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(MenuError::Validation(
                "price must be a non-negative number".to_string(),
            ));
        }

        let existing = self.find(MenuFilter::ByName(name.clone())).await?;
        match existing.into_iter().next() {
            Some(item) => {
                debug!(%item.id, "Replacing existing item");
                self.inner
                    .update(
                        item.id,
                        MenuItemUpdate {
                            price: Some(params.price),
                            available_qty: Some(params.available_qty),
                        },
                    )
                    .await
                    .map_err(Self::map_err)
            }
            None => {
                let id = self
                    .inner
                    .create(MenuItemCreate {
                        name,
                        price: params.price,
                        available_qty: params.available_qty,
                    })
                    .await
                    .map_err(Self::map_err)?;
                self.inner
                    .get(id)
                    .await
                    .map_err(Self::map_err)?
                    .ok_or_else(|| MenuError::NotFound(id.to_string()))
            }
        }
    }

    /// All menu items, sorted by name for a stable listing.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.find(MenuFilter::All).await?;
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Atomically decrements the item's stock by `qty`, failing with
    /// [`MenuError::InsufficientStock`] when fewer units are available.
    #[instrument(skip(self))]
    pub async fn reserve(&self, id: MenuItemId, qty: u32) -> Result<(), MenuError> {
        debug!("Reserving {} units of {}", qty, id);
        match self.inner.perform_action(id, MenuAction::Reserve(qty)).await {
            Ok(MenuActionResult::Reserved) => Ok(()),
            Ok(other) => unreachable!("Reserve action must return Reserved, got {other:?}"),
            Err(e) => Err(Self::map_err(e)),
        }
    }

    /// Atomically increments the item's stock by `qty`, returning the new
    /// level. The compensating half of [`MenuClient::reserve`].
    #[instrument(skip(self))]
    pub async fn release(&self, id: MenuItemId, qty: u32) -> Result<u32, MenuError> {
        debug!("Releasing {} units of {}", qty, id);
        match self.inner.perform_action(id, MenuAction::Release(qty)).await {
            Ok(MenuActionResult::Released(new_qty)) => Ok(new_qty),
            Ok(other) => unreachable!("Release action must return Released, got {other:?}"),
            Err(e) => Err(Self::map_err(e)),
        }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> MenuError {
        Self::map_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn reserve_sends_the_reserve_action() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu_client = MenuClient::new(client);

        let reserve_task =
            tokio::spawn(async move { menu_client.reserve(MenuItemId(1), 5).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuItemId(1));
        match action {
            MenuAction::Reserve(qty) => assert_eq!(qty, 5),
            other => panic!("Expected Reserve action, got {other:?}"),
        }

        responder.send(Ok(MenuActionResult::Reserved)).unwrap();
        assert!(reserve_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn reserve_recovers_the_typed_stock_error() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_action()
            .return_err(FrameworkError::EntityError(Box::new(
                MenuError::InsufficientStock {
                    name: "Burger".to_string(),
                    requested: 100,
                    available: 3,
                },
            )));

        let menu_client = MenuClient::new(mock.client());
        let result = menu_client.reserve(MenuItemId(1), 100).await;

        assert_eq!(
            result,
            Err(MenuError::InsufficientStock {
                name: "Burger".to_string(),
                requested: 100,
                available: 3,
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn upsert_rejects_blank_names_without_touching_the_actor() {
        let mock = MockClient::<MenuItem>::new();
        let menu_client = MenuClient::new(mock.client());

        let result = menu_client
            .upsert(MenuItemUpsert {
                name: "   ".to_string(),
                price: 1.0,
                available_qty: 1,
            })
            .await;

        assert!(matches!(result, Err(MenuError::Validation(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn upsert_rejects_negative_prices() {
        let mock = MockClient::<MenuItem>::new();
        let menu_client = MenuClient::new(mock.client());

        let result = menu_client
            .upsert(MenuItemUpsert {
                name: "Burger".to_string(),
                price: -0.5,
                available_qty: 1,
            })
            .await;

        assert!(matches!(result, Err(MenuError::Validation(_))));
        mock.verify();
    }
}
