//! Text commands typed at the storefront prompt.

use std::str::FromStr;

use common::ProductId;

use crate::error::StorefrontError;
use crate::page::Page;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to another page.
    Go(Page),

    /// Add a catalog product to the cart.
    Add(ProductId),

    /// Increase the quantity of a cart line.
    Increment(ProductId),

    /// Decrease the quantity of a cart line.
    Decrement(ProductId),

    /// Remove a cart line.
    Remove(ProductId),

    /// Dispatch a raw JSON action.
    Dispatch(String),

    /// Start checkout.
    Checkout,

    /// Show the command list.
    Help,

    /// End the session.
    Quit,
}

pub const HELP: &str = "\
commands:
  home | products | cart   switch page (also: go <page>)
  add <id>                 add a product to the cart
  inc <id> | dec <id>      change a cart line's quantity
  rm <id>                  remove a cart line
  checkout                 check out
  {\"type\": ...}            dispatch a raw cart action
  help | quit";

fn product_id(input: &str, verb: &str, arg: Option<&str>) -> Result<ProductId, StorefrontError> {
    let arg = arg.ok_or_else(|| StorefrontError::parse(input, format!("{verb} needs a product id")))?;
    arg.parse()
        .map_err(|_| StorefrontError::parse(input, format!("{arg:?} is not a product id")))
}

impl FromStr for Command {
    type Err = StorefrontError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let line = input.trim();
        if line.starts_with('{') {
            return Ok(Command::Dispatch(line.to_string()));
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(StorefrontError::parse(input, "empty command"));
        };
        let verb = verb.to_ascii_lowercase();
        let arg = words.next();

        if words.next().is_some() {
            return Err(StorefrontError::parse(input, "too many arguments"));
        }

        let command = match verb.as_str() {
            "home" | "products" | "cart" if arg.is_none() => Command::Go(Page::parse(&verb)),
            "home" | "products" | "cart" => {
                return Err(StorefrontError::parse(input, format!("{verb} takes no arguments")));
            }
            "go" => Command::Go(Page::parse(arg.unwrap_or_default())),
            "add" => Command::Add(product_id(input, &verb, arg)?),
            "inc" | "+" => Command::Increment(product_id(input, &verb, arg)?),
            "dec" | "-" => Command::Decrement(product_id(input, &verb, arg)?),
            "rm" | "remove" => Command::Remove(product_id(input, &verb, arg)?),
            "checkout" => Command::Checkout,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(StorefrontError::parse(input, "unknown command")),
        };

        Ok(command)
    }
}
