//! Config validation.

use thiserror::Error;

use super::BookshelfConfig;
use super::limits::MAX_SHELVES;

/// Errors reported by [`BookshelfConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} is not a finite number")]
    NotFinite { field: &'static str },

    #[error("Invalid configuration: {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("Invalid configuration: books density must be within 0.0..=1.0, got {value}")]
    DensityOutOfRange { value: f32 },

    #[error("Invalid configuration: shelf count ({count}) exceeds maximum ({max})")]
    TooManyShelves { count: u32, max: u32 },
}

/// Validate that every dimension is finite and positive, the density is a
/// fraction and the shelf count is at most [`MAX_SHELVES`].
pub fn validate_config(config: &BookshelfConfig) -> Result<(), ConfigError> {
    if config.shelves_count > MAX_SHELVES {
        return Err(ConfigError::TooManyShelves {
            count: config.shelves_count,
            max: MAX_SHELVES,
        });
    }

    let dimensions = [
        ("internal height", config.internal_height),
        ("internal width", config.internal_width),
        ("internal depth", config.internal_depth),
        ("planks width", config.planks_width),
        ("books thickness", config.books_thickness),
        ("books height", config.books_height),
        ("books width", config.books_width),
    ];

    for (field, value) in dimensions {
        validate_dimension(field, value)?;
    }

    if !config.books_density.is_finite() {
        return Err(ConfigError::NotFinite {
            field: "books density",
        });
    }
    if !(0.0..=1.0).contains(&config.books_density) {
        return Err(ConfigError::DensityOutOfRange {
            value: config.books_density,
        });
    }

    Ok(())
}

fn validate_dimension(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_width() {
        let config = BookshelfConfig::new().with_internal_size(0.0, 1.0, 1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "internal width",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_negative_planks() {
        let config = BookshelfConfig::new().with_planks_width(-0.05);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "planks width",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = BookshelfConfig::new().with_internal_size(1.0, f32::NAN, 1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "internal height"
            })
        );
    }

    #[test]
    fn test_density_bounds() {
        let dense = BookshelfConfig::new().with_books(1.0, 0.03, 0.2, 0.1);
        assert!(dense.validate().is_ok());

        let empty = BookshelfConfig::new().with_books(0.0, 0.03, 0.2, 0.1);
        assert!(empty.validate().is_ok());

        let over = BookshelfConfig::new().with_books(1.5, 0.03, 0.2, 0.1);
        assert_eq!(
            over.validate(),
            Err(ConfigError::DensityOutOfRange { value: 1.5 })
        );
    }

    #[test]
    fn test_shelf_count_bound() {
        assert!(BookshelfConfig::new().with_shelves(MAX_SHELVES).validate().is_ok());
        assert_eq!(
            BookshelfConfig::new().with_shelves(u32::MAX).validate(),
            Err(ConfigError::TooManyShelves {
                count: u32::MAX,
                max: MAX_SHELVES
            })
        );
    }

    #[test]
    fn test_zero_shelves_is_valid() {
        assert!(BookshelfConfig::new().with_shelves(0).validate().is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::NonPositive {
            field: "internal depth",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: internal depth must be positive, got -1"
        );
    }
}
