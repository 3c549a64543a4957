use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category tags the API is known to emit. Others may appear.
pub mod category {
    pub const LEAK: &str = "LEAK";
    pub const CONTROVERSIA: &str = "CONTROVERSIA";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "twitter")]
    pub twitter_handle: String,
    #[serde(rename = "fotoUrl")]
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "desarrolladora")]
    pub developer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "cuerpo")]
    pub body: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "imagenUrl")]
    pub image_url: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "autor", default)]
    pub author: Option<Author>,
    #[serde(rename = "juego", default)]
    pub game: Option<Game>,
}

impl NewsItem {
    pub fn new(id: i64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: String::new(),
            category: category.into(),
            image_url: String::new(),
            date: String::new(),
            author: None,
            game: None,
        }
    }

    /// Human label for the category tag.
    pub fn category_label(&self) -> &str {
        match self.category.as_str() {
            category::LEAK => "Leaks",
            category::CONTROVERSIA => "Drama",
            other => other,
        }
    }

    pub fn display_author(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or("(unknown author)")
    }

    /// Parse the leading `YYYY-MM-DD` of `date`, ignoring any time part.
    pub fn published_on(&self) -> Option<NaiveDate> {
        let day = self.date.trim().get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}
