use serde::{Deserialize, Serialize};

/// A stored popularity counter for one search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// Document id assigned at creation.
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: u64,
    /// Id of the first result seen for this term.
    pub movie_id: u64,
    pub poster_url: String,
}

/// Document body for a term seen for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTrendRecord {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: u64,
    pub movie_id: u64,
    pub poster_url: String,
}

impl NewTrendRecord {
    pub fn first_seen(search_term: &str, movie_id: u64, poster_url: String) -> Self {
        Self {
            search_term: search_term.to_string(),
            count: 1,
            movie_id,
            poster_url,
        }
    }

    pub fn into_record(self, id: String) -> TrendRecord {
        TrendRecord {
            id,
            search_term: self.search_term,
            count: self.count,
            movie_id: self.movie_id,
            poster_url: self.poster_url,
        }
    }
}
