//! Merge persisted order and custom data with the cards embedded in a page.
//!
//! The embedded card set can change between generations (images added or
//! removed), so persisted facets are reconciled at load time:
//! - ids in the persisted order that still exist come first, in that order
//! - ids that were never persisted follow in generation order
//! - persisted ids that no longer exist are dropped
//!
//! Custom data is then overlaid on the surviving cards.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{Card, CustomData};

/// Order `embedded` by `saved_order`, appending unknown cards.
pub fn reconcile_order(embedded: &[Card], saved_order: &[String]) -> Vec<Card> {
    let by_id: HashMap<&str, &Card> = embedded.iter().map(|c| (c.id.as_str(), c)).collect();
    let mut taken: HashSet<&str> = HashSet::with_capacity(embedded.len());
    let mut cards = Vec::with_capacity(embedded.len());

    for id in saved_order {
        if let Some(card) = by_id.get(id.as_str())
            && taken.insert(card.id.as_str())
        {
            cards.push((*card).clone());
        }
    }

    cards.extend(
        embedded
            .iter()
            .filter(|c| !taken.contains(c.id.as_str()))
            .cloned(),
    );

    cards
}

/// Overlay custom data on `cards`. Empty stored values leave the card as is.
pub fn apply_custom_data(cards: &mut [Card], custom: &BTreeMap<String, CustomData>) {
    for card in cards.iter_mut() {
        if let Some(data) = custom.get(&card.id) {
            if !data.title.is_empty() {
                card.title = data.title.clone();
            }
            if !data.link.is_empty() {
                card.link = data.link.clone();
            }
        }
    }
}

/// Full load-time reconciliation of both optional facets.
pub fn reconcile(
    embedded: &[Card],
    saved_order: Option<&[String]>,
    custom: Option<&BTreeMap<String, CustomData>>,
) -> Vec<Card> {
    let mut cards = match saved_order {
        Some(order) => reconcile_order(embedded, order),
        None => embedded.to_vec(),
    };
    if let Some(custom) = custom {
        apply_custom_data(&mut cards, custom);
    }
    cards
}
