/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use seenit_lib::modules::content::{ContentRecord, ContentType};

pub struct ContentRecordFactory {
    content_type: ContentType,
    source_id: String,
    title: String,
    series_key: Option<String>,
    series_root_source_id: Option<String>,
    season_number: Option<i32>,
    season_title: Option<String>,
}

impl Default for ContentRecordFactory {
    fn default() -> Self {
        Self {
            content_type: ContentType::Anime,
            source_id: "1".to_string(),
            title: "Test Anime".to_string(),
            series_key: None,
            series_root_source_id: None,
            season_number: None,
            season_title: None,
        }
    }
}

#[allow(dead_code)]
impl ContentRecordFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anime season belonging to `series_key`
    pub fn season(series_key: &str, source_id: &str, season: i32) -> Self {
        Self::default()
            .with_series_key(series_key)
            .with_source_id(source_id)
            .with_season_number(season)
    }

    pub fn movie(source_id: &str, title: &str) -> Self {
        Self::default()
            .with_content_type(ContentType::Movie)
            .with_source_id(source_id)
            .with_title(title)
    }

    pub fn tv(source_id: &str, title: &str) -> Self {
        Self::default()
            .with_content_type(ContentType::Tv)
            .with_source_id(source_id)
            .with_title(title)
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_source_id(mut self, source_id: &str) -> Self {
        self.source_id = source_id.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_series_key(mut self, key: &str) -> Self {
        self.series_key = Some(key.to_string());
        self
    }

    pub fn with_root(mut self, root: &str) -> Self {
        self.series_root_source_id = Some(root.to_string());
        self
    }

    pub fn with_season_number(mut self, season: i32) -> Self {
        self.season_number = Some(season);
        self
    }

    pub fn with_season_title(mut self, season_title: &str) -> Self {
        self.season_title = Some(season_title.to_string());
        self
    }

    pub fn build(self) -> ContentRecord {
        let mut record = ContentRecord::new(self.content_type, self.source_id, self.title);
        record.series_key = self.series_key;
        record.series_root_source_id = self.series_root_source_id;
        record.season_number = self.season_number;
        record.season_title = self.season_title;
        record
    }
}

/// Every ordering of `items` (Heap's algorithm)
#[allow(dead_code)]
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut working = items.to_vec();
    let mut out = Vec::new();
    heap(working.len(), &mut working, &mut out);
    out
}
