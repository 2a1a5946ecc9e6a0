//! Movie records as served by the catalog

use chrono::NaiveDate;
use serde::Deserialize;

/// A single movie from the catalog. Consumed read-only and replaced on every fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Envelope returned by both the popular and the search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub results: Vec<Movie>,
}

impl Movie {
    /// Full poster URL, or `None` when the catalog has no poster for this movie
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", image_base_url.trim_end_matches('/'), ensure_leading_slash(path)))
    }

    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;

        let date = self.release_date.as_deref()?;
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => Some(parsed.year()),
            // Some entries only carry a year
            Err(_) => date.get(..4).and_then(|y| y.parse().ok()),
        }
    }

    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(rating) => format!("{:.1}", rating),
            None => "N/A".to_string(),
        }
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 1,
            title: "Heat".to_string(),
            poster_path: Some("/heat.jpg".to_string()),
            vote_average: Some(7.94),
            release_date: Some("1995-12-15".to_string()),
            overview: None,
        }
    }

    #[test]
    fn test_poster_url_joins_host_and_path() {
        let m = movie();
        assert_eq!(
            m.poster_url("https://image.tmdb.org/t/p/w500"),
            Some("https://image.tmdb.org/t/p/w500/heat.jpg".to_string())
        );
        assert_eq!(
            m.poster_url("https://img.example/"),
            Some("https://img.example/heat.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_absent_without_path() {
        let mut m = movie();
        m.poster_path = None;
        assert_eq!(m.poster_url("https://img.example"), None);
        m.poster_path = Some(String::new());
        assert_eq!(m.poster_url("https://img.example"), None);
    }

    #[test]
    fn test_release_year_and_rating() {
        let mut m = movie();
        assert_eq!(m.release_year(), Some(1995));
        assert_eq!(m.rating_label(), "7.9");

        m.release_date = Some("2001".to_string());
        m.vote_average = None;
        assert_eq!(m.release_year(), Some(2001));
        assert_eq!(m.rating_label(), "N/A");

        m.release_date = Some(String::new());
        assert_eq!(m.release_year(), None);
    }

    #[test]
    fn test_decode_tolerates_null_and_missing_fields() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 11, "title": "Star Wars", "poster_path": null, "vote_average": 8.2,
                 "release_date": "1977-05-25", "overview": "A long time ago", "adult": false},
                {"id": 12, "title": "Finding Nemo"}
            ],
            "total_pages": 1
        }"#;

        let response: MovieListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].poster_path, None);
        assert_eq!(response.results[0].vote_average, Some(8.2));
        assert_eq!(response.results[1].title, "Finding Nemo");
        assert_eq!(response.results[1].overview, None);
    }
}
