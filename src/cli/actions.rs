//! Cart action arguments

use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

use crate::products::ProductId;

/// Errors parsing a cart action argument.
#[derive(Debug, Error)]
pub enum ActionParseError {
    /// Product id was not a number.
    #[error("invalid product id {0:?}: {1}")]
    Id(String, ParseIntError),

    /// Quantity was not a number.
    #[error("invalid quantity {0:?}: {1}")]
    Quantity(String, ParseIntError),

    /// `--set` needs an `ID=QTY` pair.
    #[error("expected ID=QTY, found {0:?}")]
    MissingQuantity(String),
}

/// `--add ID[:QTY]`; the quantity defaults to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddAction {
    /// Product to add
    pub id: ProductId,

    /// Units to add
    pub quantity: u32,
}

impl FromStr for AddAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => (id, Some(quantity)),
            None => (s, None),
        };

        let quantity = match quantity {
            Some(quantity) => quantity
                .trim()
                .parse()
                .map_err(|err| ActionParseError::Quantity(quantity.to_string(), err))?,
            None => 1,
        };

        Ok(Self {
            id: parse_id(id)?,
            quantity,
        })
    }
}

/// `--set ID=QTY`; non-positive quantities are clamped by the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetAction {
    /// Product to update
    pub id: ProductId,

    /// Requested quantity
    pub quantity: i64,
}

impl FromStr for SetAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once('=')
            .ok_or_else(|| ActionParseError::MissingQuantity(s.to_string()))?;

        Ok(Self {
            id: parse_id(id)?,
            quantity: quantity
                .trim()
                .parse()
                .map_err(|err| ActionParseError::Quantity(quantity.to_string(), err))?,
        })
    }
}

fn parse_id(id: &str) -> Result<ProductId, ActionParseError> {
    id.trim()
        .parse()
        .map(ProductId)
        .map_err(|err| ActionParseError::Id(id.to_string(), err))
}
