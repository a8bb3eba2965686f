//! Shop transactions. The start room of every floor doubles as the shop.

use game_core::{GameConfig, MapOracle, PickupOutcome, RemoveOutcome, RngOracle};

use super::{Phase, Session};
use crate::api::{ActionError, Result};
use crate::events::{GameEvent, PurchaseRefusal, SaleRefusal};

impl<M: MapOracle, R: RngOracle> Session<M, R> {
    /// Buys one potion. The potion must fit before any gold is spent.
    pub(super) fn buy_potion(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        self.require_shop()?;

        let price = self.config.potion_price;
        let gold = self.hero.gold();
        let refusal = if gold < price {
            Some(PurchaseRefusal::NotEnoughGold { price, gold })
        } else if self.hero.inventory().len() >= GameConfig::MAX_INVENTORY_SLOTS {
            Some(PurchaseRefusal::InventoryFull)
        } else {
            None
        };
        if let Some(reason) = refusal {
            events.push(GameEvent::PurchaseRefused { reason });
            return Ok(());
        }

        let Some(potion) = self.catalog.potion() else {
            events.push(GameEvent::PurchaseRefused {
                reason: PurchaseRefusal::OutOfStock,
            });
            return Ok(());
        };

        match self.hero.pick_up_item(potion) {
            PickupOutcome::NoSpace(_) => {
                events.push(GameEvent::PurchaseRefused {
                    reason: PurchaseRefusal::InventoryFull,
                });
            }
            PickupOutcome::Stored | PickupOutcome::GoldCredited(_) => {
                self.hero.spend_gold(price);
                tracing::debug!("Bought a potion for {} gold", price);
                events.push(GameEvent::PotionPurchased {
                    price,
                    gold: self.hero.gold(),
                });
            }
        }
        Ok(())
    }

    pub(super) fn sell_at(&mut self, index: usize, events: &mut Vec<GameEvent>) -> Result<()> {
        self.require_shop()?;
        let name = self
            .hero
            .items()
            .get(index)
            .map(|item| item.name().to_owned())
            .unwrap_or_default();
        let outcome = self.hero.remove_item_at(index)?;
        self.settle_sale(outcome, name, events);
        Ok(())
    }

    pub(super) fn sell_named(&mut self, name: &str, events: &mut Vec<GameEvent>) -> Result<()> {
        self.require_shop()?;
        let outcome = self.hero.remove_item_named(name);
        self.settle_sale(outcome, name.to_owned(), events);
        Ok(())
    }

    pub(super) fn leave_shop(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        self.require_shop()?;
        self.phase = Phase::Exploring;
        events.push(GameEvent::ShopLeft);
        Ok(())
    }

    /// Credits the sold item's value as gold.
    fn settle_sale(&mut self, outcome: RemoveOutcome, name: String, events: &mut Vec<GameEvent>) {
        match outcome {
            RemoveOutcome::Removed(item) => {
                self.hero.collect_gold(item.value());
                tracing::debug!("Sold {} for {} gold", item.name(), item.value());
                events.push(GameEvent::ItemSold {
                    item,
                    gold: self.hero.gold(),
                });
            }
            RemoveOutcome::Refused => events.push(GameEvent::SaleRefused {
                reason: SaleRefusal::Lethal { name },
            }),
            RemoveOutcome::NotFound => events.push(GameEvent::SaleRefused {
                reason: SaleRefusal::NotHeld { name },
            }),
        }
    }

    fn require_shop(&self) -> Result<()> {
        match self.phase {
            Phase::Shopping => Ok(()),
            Phase::Fighting(_) => Err(ActionError::InCombat.into()),
            Phase::Dead => Err(ActionError::HeroDead.into()),
            Phase::Exploring => Err(ActionError::NotInShop.into()),
        }
    }
}
