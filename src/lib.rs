//! # chiggi-site
//!
//! WASM front end for a static personal website. The page skeleton is plain
//! HTML; this crate adds the behavior: a light/dark theme that remembers the
//! user's choice and otherwise follows the OS, hash-addressable tabs with
//! keyboard navigation, and text filled in from `config.json`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme state machine and persistence rules |
//! | [`tabs`] | Tab router, history and keyboard navigation |
//! | [`store`] | Preference storage trait and in-memory store |
//! | [`config`] | `config.json` model and fetch |
//! | [`content`] | Projection of the content document onto the page |
//! | [`options`] | Boot options from `<body>` data attributes |
//! | [`consts`] | DOM contract names |
//! | `dom` | `web-sys` adapters (`hydrate` only) |
//! | `app` | Bootstrap and event wiring (`hydrate` only) |
//!
//! Everything outside `dom` and `app` compiles and tests without a browser.

pub mod config;
pub mod consts;
pub mod content;
pub mod options;
pub mod store;
pub mod tabs;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;
