/// The three picker values. An empty string means "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    genre: String,
    mood: String,
    level: String,
}

impl Selection {
    pub fn new(
        genre: impl Into<String>,
        mood: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            mood: mood.into(),
            level: level.into(),
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn mood(&self) -> &str {
        &self.mood
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Sets the genre and clears the mood, which only makes sense for the
    /// genre it was picked under.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
        self.mood.clear();
    }

    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.mood = mood.into();
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.level = level.into();
    }

    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("genre", &self.genre),
            ("mood", &self.mood),
            ("level", &self.level),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.genre.is_empty() && !self.mood.is_empty() && !self.level.is_empty()
    }

    pub fn prompt(&self) -> String {
        format!(
            "Recommend 6 books for a {} {} reader feeling {}. For each book, provide the title, author, and a brief explanation of why it's suitable. Format your response clearly.",
            self.level, self.genre, self.mood
        )
    }
}
