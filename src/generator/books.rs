//! Random book packing.
//!
//! Books are laid out along one linear axis as if every shelf were placed
//! end to end, then wrapped back onto individual shelves.

use bevy::prelude::*;

use super::case::shelf_top_y;
use crate::config::BookshelfConfig;
use crate::draft::{Solid, SolidTag};
use crate::random::RandomSource;

/// A packed book before it is boxed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Book {
    pub thickness: f32,
    /// Start of the book along the concatenated shelves.
    pub position: f32,
    pub shelf_index: u32,
    /// Start of the book measured from the left end of its shelf.
    pub position_on_shelf: f32,
    pub color: Color,
}

impl Book {
    /// Linear position of the book's right edge.
    pub fn end(&self) -> f32 {
        self.position + self.thickness
    }
}

/// Total shelf length covered by books.
pub fn available_width(config: &BookshelfConfig) -> f32 {
    config.internal_width * config.shelves_count as f32 * config.books_density
}

/// Number of books that fit the available width.
///
/// The quotient is taken in f64 so that `floor` is not thrown off by f32
/// rounding. Zero for non-positive or non-finite quotients.
pub fn books_count(config: &BookshelfConfig) -> usize {
    if config.books_thickness <= 0.0 {
        return 0;
    }
    let available = config.internal_width as f64
        * config.shelves_count as f64
        * config.books_density as f64;
    let quotient = available / config.books_thickness as f64;
    if !quotient.is_finite() || quotient <= 0.0 {
        return 0;
    }
    quotient.floor() as usize
}

/// Upper bound (exclusive) of the random gap left before each book.
pub fn max_gap(config: &BookshelfConfig) -> f32 {
    (config.books_thickness * (1.0 - config.books_density)).max(0.0)
}

/// Map a linear position onto a shelf index and an offset along that shelf.
///
/// Positions past the last shelf stay on the last shelf.
pub fn wrap_onto_shelf(position: f32, internal_width: f32, shelves_count: u32) -> (u32, f32) {
    if shelves_count == 0 || internal_width <= 0.0 {
        return (0, position);
    }
    let index = (position / internal_width).floor().max(0.0) as u32;
    let index = index.min(shelves_count - 1);
    (index, (position - index as f32 * internal_width).max(0.0))
}

/// Pack books along the concatenated shelves.
///
/// Each book starts a random gap in `[0, max_gap)` after the previous one
/// ends. Draws one gap and one color per book from `rng`, in that order.
pub fn pack_books(config: &BookshelfConfig, rng: &mut impl RandomSource) -> Vec<Book> {
    let count = books_count(config);
    let gap = max_gap(config);

    let mut books = Vec::with_capacity(count);
    let mut end = 0.0;
    for _ in 0..count {
        let position = end + rng.uniform(0.0, gap);
        let (shelf_index, position_on_shelf) =
            wrap_onto_shelf(position, config.internal_width, config.shelves_count);
        let book = Book {
            thickness: config.books_thickness,
            position,
            shelf_index,
            position_on_shelf,
            color: rng.random_color(),
        };
        end = book.end();
        books.push(book);
    }
    books
}

/// Box a packed book, standing upright on its shelf against the back plank.
///
/// The left edge sits at `position_on_shelf` from the left side plank. A book
/// that straddles the end of its shelf runs into the right side plank.
pub fn book_solid(config: &BookshelfConfig, book: &Book) -> Solid {
    let width = config.internal_width;
    let p = config.planks_width;

    let size = vec3(book.thickness, config.books_height, config.books_width);
    let center = vec3(
        -width / 2.0 + book.position_on_shelf + book.thickness / 2.0,
        shelf_top_y(config, book.shelf_index) + config.books_height / 2.0,
        config.internal_depth / 2.0 - p / 2.0 - config.books_width / 2.0,
    );
    Solid::new(SolidTag::Book, center, size).with_color(book.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    /// Replays fixed values for `uniform`, scaled into the requested range.
    struct Scripted {
        fractions: Vec<f32>,
        next: usize,
    }

    impl RandomSource for Scripted {
        fn uniform(&mut self, min: f32, max: f32) -> f32 {
            let t = self.fractions[self.next % self.fractions.len()];
            self.next += 1;
            min + (max - min) * t
        }
    }

    fn config() -> BookshelfConfig {
        BookshelfConfig::default()
            .with_internal_size(0.7, 1.5, 0.2)
            .with_shelves(3)
            .with_books(0.5, 0.03, 0.25, 0.15)
    }

    #[test]
    fn test_books_count_example() {
        assert!((available_width(&config()) - 1.05).abs() < 1e-5);
        assert_eq!(books_count(&config()), 35);
    }

    #[test]
    fn test_books_count_matches_floor() {
        let config = config().with_books(0.8, 0.045, 0.25, 0.15);
        let expected = (0.7 * 3.0 * 0.8 / 0.045_f32).floor() as usize;
        assert_eq!(books_count(&config), expected);
    }

    #[test]
    fn test_no_books_without_room() {
        assert_eq!(books_count(&config().with_shelves(0)), 0);
        assert_eq!(books_count(&config().with_books(0.0, 0.03, 0.25, 0.15)), 0);
        assert_eq!(books_count(&config().with_books(0.5, 0.0, 0.25, 0.15)), 0);
        assert_eq!(books_count(&config().with_books(0.5, -0.03, 0.25, 0.15)), 0);
        assert_eq!(books_count(&config().with_internal_size(-0.7, 1.5, 0.2)), 0);
        // Thicker than the whole run
        assert_eq!(books_count(&config().with_books(0.5, 2.0, 0.25, 0.15)), 0);
    }

    #[test]
    fn test_positions_increase_with_bounded_gaps() {
        let config = config();
        let gap = max_gap(&config);
        let books = pack_books(&config, &mut SeededRandom::new(1234));
        assert_eq!(books.len(), 35);

        let mut previous_end = 0.0;
        for book in &books {
            let g = book.position - previous_end;
            assert!(g >= -1e-6, "negative gap {g}");
            assert!(g < gap + 1e-6, "gap {g} exceeds {gap}");
            assert!(book.position > previous_end - 1e-6);
            previous_end = book.end();
        }
        for pair in books.windows(2) {
            assert!(pair[1].position > pair[0].position);
        }
    }

    #[test]
    fn test_full_density_packs_without_gaps() {
        let config = config().with_books(1.0, 0.035, 0.25, 0.15);
        let books = pack_books(&config, &mut SeededRandom::new(5));
        for (i, book) in books.iter().enumerate() {
            assert!((book.position - i as f32 * 0.035).abs() < 1e-4);
        }
    }

    #[test]
    fn test_shelf_indices_in_range() {
        for seed in 0..32 {
            for density in [0.1, 0.5, 0.9, 1.0] {
                let config = config().with_books(density, 0.03, 0.25, 0.15);
                for book in pack_books(&config, &mut SeededRandom::new(seed)) {
                    assert!(book.shelf_index < config.shelves_count);
                    assert!(book.position_on_shelf >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_wrap_onto_shelf() {
        let (index, offset) = wrap_onto_shelf(0.25, 1.0, 3);
        assert_eq!((index, offset), (0, 0.25));

        let (index, offset) = wrap_onto_shelf(1.5, 1.0, 3);
        assert_eq!(index, 1);
        assert!((offset - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_exact_multiple_starts_next_shelf() {
        let (index, offset) = wrap_onto_shelf(2.0, 1.0, 3);
        assert_eq!(index, 2);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_wrap_past_last_shelf_stays_on_last() {
        let (index, offset) = wrap_onto_shelf(3.2, 1.0, 3);
        assert_eq!(index, 2);
        assert!((offset - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_scripted_gaps_wrap_books() {
        // Every gap at its maximum: books start every 1.5 thicknesses.
        let config = BookshelfConfig::default()
            .with_internal_size(0.1, 1.0, 0.2)
            .with_shelves(2)
            .with_books(0.5, 0.02, 0.2, 0.1);
        let mut rng = Scripted {
            fractions: vec![1.0],
            next: 0,
        };
        let books = pack_books(&config, &mut rng);

        assert_eq!(books.len(), 5);
        let expected = [0.01, 0.04, 0.07, 0.10, 0.13];
        for (book, position) in books.iter().zip(expected) {
            assert!((book.position - position).abs() < 1e-5);
        }
        assert_eq!(books[2].shelf_index, 0);
        assert_eq!(books[4].shelf_index, 1);
        assert!((books[4].position_on_shelf - 0.03).abs() < 1e-5);
    }

    #[test]
    fn test_book_solid_stands_on_shelf() {
        let config = config();
        let book = Book {
            thickness: 0.03,
            position: 0.7 + 0.1,
            shelf_index: 1,
            position_on_shelf: 0.1,
            color: Color::BLACK,
        };
        let solid = book_solid(&config, &book);

        assert_eq!(solid.tag, SolidTag::Book);
        assert_eq!(solid.color, Color::BLACK);
        assert!((solid.min().y - shelf_top_y(&config, 1)).abs() < 1e-5);
        assert!((solid.min().x - (-0.35 + 0.1)).abs() < 1e-5);
        assert!((solid.size - vec3(0.03, 0.25, 0.15)).abs().max_element() < 1e-6);
        // Back face against the back plank
        assert!((solid.max().z - (0.1 - 0.025)).abs() < 1e-5);
    }

    #[test]
    fn test_book_solid_starts_at_position_on_shelf() {
        let config = config();
        let book = Book {
            thickness: 0.03,
            position: 0.69,
            shelf_index: 0,
            position_on_shelf: 0.69,
            color: Color::WHITE,
        };
        let solid = book_solid(&config, &book);
        assert!((solid.min().x - (-0.35 + 0.69)).abs() < 1e-5);
    }

    #[test]
    fn test_books_on_same_shelf_do_not_overlap() {
        for seed in 0..16 {
            for density in [0.5, 0.9, 1.0] {
                let config = config().with_books(density, 0.03, 0.25, 0.15);
                let books = pack_books(&config, &mut SeededRandom::new(seed));
                let solids: Vec<_> = books
                    .iter()
                    .map(|b| (b.shelf_index, book_solid(&config, b)))
                    .collect();

                for pair in solids.windows(2) {
                    let (shelf_a, a) = &pair[0];
                    let (shelf_b, b) = &pair[1];
                    if shelf_a == shelf_b {
                        assert!(
                            b.min().x >= a.max().x - 1e-5,
                            "seed {seed} density {density}: [{}, {}] overlaps [{}, {}]",
                            b.min().x,
                            b.max().x,
                            a.min().x,
                            a.max().x
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_books_count_floors_near_integer_quotient() {
        // 0.699999 / 0.02 is just under 35
        let config = BookshelfConfig::default()
            .with_internal_size(0.699999, 1.5, 0.2)
            .with_shelves(1)
            .with_books(1.0, 0.02, 0.25, 0.15);
        assert_eq!(books_count(&config), 34);
    }
}
