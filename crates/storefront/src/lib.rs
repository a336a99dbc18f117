//! Terminal storefront over the cart store.
//!
//! The storefront owns the catalog, the cart store and the current page. It
//! turns typed commands into cart actions and re-renders the page after each
//! one. Everything runs on the caller's thread, one command at a time.

pub mod command;
pub mod config;
pub mod error;
pub mod page;
pub mod render;

use std::io::{BufRead, Write};

use cart::{CartAction, CartState, CartStore};
use catalog::Catalog;
use common::{ProductId, SessionId};

pub use command::Command;
pub use config::Config;
pub use error::{Result, StorefrontError};
pub use page::Page;

/// An informational message shown above the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The product is already in the cart; use `inc` to add more.
    AlreadyInCart { name: String },

    /// Checkout is not available yet.
    CheckoutUnavailable,

    /// The command list.
    Help,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::AlreadyInCart { name } => {
                write!(f, "{name} is already in your cart (use `inc <id>` to add more)")
            }
            Notice::CheckoutUnavailable => {
                write!(f, "Coming soon! Payment is still under development.")
            }
            Notice::Help => write!(f, "{}", command::HELP),
        }
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Re-render the current page.
    Render,

    /// Show a notice, then re-render.
    Notice(Notice),

    /// End the session.
    Quit,
}

/// One storefront session.
#[derive(Debug, Clone)]
pub struct Storefront {
    session: SessionId,
    catalog: Catalog,
    store: CartStore,
    page: Page,
}

impl Storefront {
    /// Creates a session on the home page with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            session: SessionId::new(),
            catalog,
            store: CartStore::new(),
            page: Page::default(),
        }
    }

    /// Sets the page shown first.
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        self.store.state()
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Renders the current page.
    pub fn render(&self) -> String {
        render::render(self.page, &self.catalog, self.store.state())
    }

    /// Handles one command.
    #[tracing::instrument(skip(self), fields(session = %self.session, page = %self.page))]
    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Go(page) => {
                self.page = page;
                Ok(Outcome::Render)
            }
            Command::Add(id) => self.add(id),
            Command::Increment(id) => self.dispatch(CartAction::IncrementItem(id)),
            Command::Decrement(id) => self.dispatch(CartAction::DecrementItem(id)),
            Command::Remove(id) => self.dispatch(CartAction::RemoveFromCart(id)),
            Command::Dispatch(json) => self.dispatch(CartAction::from_json(&json)?),
            Command::Checkout => {
                tracing::info!(
                    total_items = self.cart().total_items(),
                    total_price = %self.cart().total_price(),
                    "checkout requested"
                );
                Ok(Outcome::Notice(Notice::CheckoutUnavailable))
            }
            Command::Help => Ok(Outcome::Notice(Notice::Help)),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    // One add per product from the catalog view; further units go through `inc`.
    fn add(&mut self, id: ProductId) -> Result<Outcome> {
        let product = self
            .catalog
            .product(id)
            .ok_or(StorefrontError::UnknownProduct(id))?;

        if self.store.state().is_in_cart(id) {
            return Ok(Outcome::Notice(Notice::AlreadyInCart {
                name: product.name.clone(),
            }));
        }

        let action = CartAction::AddToCart(product.clone());
        self.dispatch(action)
    }

    fn dispatch(&mut self, action: CartAction) -> Result<Outcome> {
        self.store.dispatch(action);
        Ok(Outcome::Render)
    }
}

/// Reads commands from `input` until it ends or the user quits, writing each
/// rendered page to `output`.
///
/// Bad commands, including lines that are not valid UTF-8, are reported to
/// the user and the session goes on.
pub fn run<R: BufRead, W: Write>(
    storefront: &mut Storefront,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    let span = tracing::info_span!("session", session = %storefront.session_id());
    let _enter = span.enter();
    tracing::info!(page = %storefront.page(), products = storefront.catalog().len(), "session started");

    write!(output, "{}", storefront.render())?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let outcome = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line
                .trim_end_matches(['\r', '\n'])
                .parse::<Command>()
                .and_then(|command| storefront.handle(command)),
            Err(_) => Err(StorefrontError::parse(
                String::from_utf8_lossy(&buf).trim_end(),
                "input is not valid UTF-8",
            )),
        };

        match outcome {
            Ok(Outcome::Quit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Ok(Outcome::Render) => {
                writeln!(output)?;
                write!(output, "{}", storefront.render())?;
            }
            Ok(Outcome::Notice(notice)) => {
                writeln!(output, "\n{notice}\n")?;
                write!(output, "{}", storefront.render())?;
            }
            Err(err) => {
                tracing::debug!(error = %err, "command rejected");
                writeln!(output, "error: {err}")?;
            }
        }
        output.flush()?;
    }

    tracing::info!(
        actions = storefront.store().actions().len(),
        total_items = storefront.cart().total_items(),
        "session ended"
    );
    Ok(())
}
