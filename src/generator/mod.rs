//! Bookshelf layout: case, shelves and books.
//!
//! [`generate`] is the single entry point. It recomputes the whole draft on
//! every call; the only input besides the config is the random source used
//! for book gaps and colors.
//!
//! # Example
//! ```
//! use bevy_bookshelf::prelude::*;
//!
//! let config = BookshelfConfig::default();
//! let drafts = generate(&config, &mut SeededRandom::new(0));
//!
//! assert_eq!(drafts.count(SolidTag::Case), 5);
//! assert_eq!(drafts.count(SolidTag::Shelf), 3);
//! assert_eq!(drafts.count(SolidTag::Book), 35);
//! ```

mod books;
mod case;

pub use books::{
    Book, available_width, book_solid, books_count, max_gap, pack_books, wrap_onto_shelf,
};
pub use case::{case_planks, shelf_center_y, shelf_top_y, shelves};

use bevy::prelude::*;

use crate::config::{BookshelfConfig, ConfigError};
use crate::draft::{DraftCollection, SolidTag};
use crate::random::RandomSource;

/// Build the full bookshelf draft.
///
/// Never fails: degenerate configs produce degenerate boxes and no books.
/// Use [`try_generate`] to reject them instead.
///
/// The shelf count is not bounded here; callers passing unvalidated configs
/// must keep it within [`MAX_SHELVES`](crate::config::MAX_SHELVES) or
/// allocation grows with it.
pub fn generate(config: &BookshelfConfig, rng: &mut impl RandomSource) -> DraftCollection {
    let books = pack_books(config, rng);

    let mut drafts = DraftCollection::with_capacity(5 + config.shelves_count as usize + books.len());
    drafts.extend(case_planks(config));
    drafts.extend(shelves(config));
    drafts.paint(SolidTag::Case, config.color);
    drafts.paint(SolidTag::Shelf, config.color);
    for book in &books {
        drafts.push(book_solid(config, book));
    }

    debug!(
        "Generated bookshelf: {} shelves, {} books",
        config.shelves_count,
        books.len()
    );

    drafts
}

/// Validate `config`, then [`generate`].
pub fn try_generate(
    config: &BookshelfConfig,
    rng: &mut impl RandomSource,
) -> Result<DraftCollection, ConfigError> {
    config.validate()?;
    Ok(generate(config, rng))
}
