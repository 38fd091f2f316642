use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Expert"];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog has no genres")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenreEntry {
    pub name: String,
    #[serde(default)]
    pub moods: Vec<String>,
}

/// Genre and mood choices offered by the pickers.
///
/// Genres keep the order they were declared in, which is also the order
/// they are shown in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    genres: Vec<GenreEntry>,
}

impl Catalog {
    pub fn new(genres: Vec<GenreEntry>) -> Result<Self, CatalogError> {
        if genres.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { genres })
    }

    pub fn from_toml(source: &str, path: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(source).map_err(|source| CatalogError::Parse {
            path: path.to_string(),
            source,
        })?;
        Self::new(catalog.genres)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml(&source, &display)
    }

    pub fn genres(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }

    /// Moods allowed for `genre`. Empty when the genre is unset or unknown.
    pub fn moods_for(&self, genre: &str) -> &[String] {
        if genre.is_empty() {
            return &[];
        }
        self.genres
            .iter()
            .find(|g| g.name == genre)
            .map(|g| g.moods.as_slice())
            .unwrap_or(&[])
    }

    pub fn levels(&self) -> Vec<String> {
        LEVELS.iter().map(|l| l.to_string()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let entry = |name: &str, moods: &[&str]| GenreEntry {
            name: name.to_string(),
            moods: moods.iter().map(|m| m.to_string()).collect(),
        };

        Self {
            genres: vec![
                entry(
                    "Fiction",
                    &["Reflective", "Hopeful", "Melancholic", "Inspired"],
                ),
                entry("Fantasy", &["Curious", "Adventurous", "Whimsical", "Epic"]),
                entry(
                    "Science Fiction",
                    &["Curious", "Thoughtful", "Thrilled", "Unsettled"],
                ),
                entry("Mystery", &["Suspenseful", "Intrigued", "Cozy", "Dark"]),
                entry("Romance", &["Romantic", "Lighthearted", "Longing", "Joyful"]),
                entry("Horror", &["Scared", "Uneasy", "Thrilled", "Morbid"]),
                entry(
                    "Non-Fiction",
                    &["Informed", "Motivated", "Curious", "Grounded"],
                ),
                entry(
                    "History",
                    &["Nostalgic", "Curious", "Reflective", "Inspired"],
                ),
                entry("Poetry", &["Emotional", "Contemplative", "Serene", "Lonely"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moods_follow_genre() {
        let catalog = Catalog::default();
        assert!(catalog.moods_for("Fantasy").contains(&"Curious".to_string()));
        assert!(catalog.moods_for("").is_empty());
        assert!(catalog.moods_for("Cookbooks").is_empty());
    }

    #[test]
    fn levels_are_fixed() {
        assert_eq!(
            Catalog::default().levels(),
            vec!["Beginner", "Intermediate", "Expert"]
        );
    }

    #[test]
    fn parses_toml_table_in_declared_order() {
        let source = r#"
            [[genres]]
            name = "Western"
            moods = ["Rugged", "Lonesome"]

            [[genres]]
            name = "Satire"
        "#;

        let catalog = Catalog::from_toml(source, "inline").unwrap();
        assert_eq!(catalog.genres(), vec!["Western", "Satire"]);
        assert_eq!(catalog.moods_for("Western"), ["Rugged", "Lonesome"]);
        assert!(catalog.moods_for("Satire").is_empty());
    }

    #[test]
    fn rejects_empty_table() {
        let err = Catalog::from_toml("genres = []", "inline").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "[[genres]]\nname = \"Drama\"\nmoods = [\"Tense\"]\n").unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.moods_for("Drama"), ["Tense"]);
    }
}
