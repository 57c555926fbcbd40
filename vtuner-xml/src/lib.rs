//! # vtuner-xml
//!
//! Response encoder for the vTuner internet-radio menu protocol spoken by
//! AV receivers and other embedded radio clients.
//!
//! A hosting service resolves stations and categories, assembles them into a
//! [`Page`] of [`Item`]s and sends the rendered document as the HTTP body.
//! The encoder reproduces the quirks real firmware depends on: `?empty=`
//! filler parameters on outward URLs, one tag per CRLF-separated line and
//! fixed fallbacks for missing station metadata.
//!
//! ## Usage
//!
//! ```rust
//! use vtuner_xml::{Directory, Display, Page, Station};
//!
//! let mut page = Page::new();
//! page.add(Display::new("Welcome"));
//! page.add(Directory::new("Jazz", "http://radio.local/genre/jazz"));
//! page.add(
//!     Station::new("MY_42", "Jazz FM", "https://stream.example.org/jazz", "MY")
//!         .with_genre("Jazz")
//!         .with_mac("0011AABBCCDD"),
//! );
//! page.set_count(3);
//!
//! let body = page.render()?;
//! assert!(body.starts_with("<?xml"));
//! # Ok::<(), vtuner_xml::RenderError>(())
//! ```
//!
//! The display-text item is named `Display` after its protocol tag and
//! shadows `std::fmt::Display` when both are imported. Refer to it as
//! `vtuner_xml::item::Display` or match it as `Item::Display` in such modules.

pub mod constants;
mod element;
pub mod error;
pub mod item;
pub mod logging;
pub mod page;
pub mod token;
pub mod url;

pub use error::{RenderError, RenderResult};
pub use item::{Directory, Display, Item, Previous, Search, Station};
pub use page::Page;
pub use token::init_token;
pub use url::{strip_secure_scheme, with_filler_param};
