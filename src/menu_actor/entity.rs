//! `ActorEntity` implementation for [`MenuItem`].

use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Filter = MenuFilter;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            available_qty: params.available_qty,
        })
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        match filter {
            MenuFilter::All => true,
            MenuFilter::ByName(name) => self.name == *name,
        }
    }

    /// Applies the replace half of the name-keyed upsert.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(qty) = update.available_qty {
            self.available_qty = qty;
        }
        Ok(())
    }

    /// Stock mutations. Runs inside the actor, so check and mutation are one
    /// atomic step.
    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuActionResult, Self::Error> {
        match action {
            MenuAction::Reserve(qty) => {
                if self.available_qty >= qty {
                    self.available_qty -= qty;
                    Ok(MenuActionResult::Reserved)
                } else {
                    Err(MenuError::InsufficientStock {
                        name: self.name.clone(),
                        requested: qty,
                        available: self.available_qty,
                    })
                }
            }
            MenuAction::Release(qty) => {
                self.available_qty = self.available_qty.saturating_add(qty);
                Ok(MenuActionResult::Released(self.available_qty))
            }
        }
    }
}
