//! Product Catalog Viewer (prodcat)
//!
//! TUI application for browsing a product catalog: products joined with
//! their category and the category's owner, narrowed by owner, name search
//! and category, and ordered by a tri-state column sort.
//!
//! Pure core: [`model`], [`catalog`] (join, filter, sort, derive) and
//! [`state`] (the reducer and UI state). Impure shell: [`source`],
//! [`config`], [`logging`] and [`view`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
