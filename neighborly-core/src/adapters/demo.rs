//! Demo record source
//!
//! Ships a small fixed directory so the pipeline can be exercised without
//! network access. The fixture deliberately includes one user without
//! coordinates and one repeated post title, so every reporting path is
//! visible in a demo run.

use serde_json::{json, Value as JsonValue};

use crate::domain::result::Result;
use crate::ports::RecordSource;

/// In-memory record source with fixed demo data
#[derive(Debug, Default)]
pub struct DemoRecordSource;

impl DemoRecordSource {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSource for DemoRecordSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_users(&self) -> Result<JsonValue> {
        Ok(demo_users())
    }

    fn fetch_posts(&self) -> Result<JsonValue> {
        Ok(demo_posts())
    }
}

/// Demo users; coordinates use the upstream decimal-string form
pub fn demo_users() -> JsonValue {
    json!([
        {
            "id": 1,
            "username": "Magdalena",
            "address": {
                "street": "Rynek Główny 1",
                "city": "Kraków",
                "geo": {"lat": "50.049683", "lng": "19.944544"}
            }
        },
        {
            "id": 2,
            "username": "Wojciech",
            "address": {
                "street": "Plac Defilad 1",
                "city": "Warszawa",
                "geo": {"lat": "52.237049", "lng": "21.017532"}
            }
        },
        {
            "id": 3,
            "username": "Ania",
            "address": {
                "street": "Długi Targ 44",
                "city": "Gdańsk",
                "geo": {"lat": "54.352025", "lng": "18.646638"}
            }
        },
        {
            "id": 4,
            "username": "Staszek",
            "address": {
                "street": "Rynek 13",
                "city": "Wrocław",
                "geo": {"lat": "51.107885", "lng": "17.038538"}
            }
        },
        {
            // No address at all: exercises the unreachable-user path
            "id": 5,
            "username": "Nomad"
        }
    ])
}

/// Demo posts; "Weekend market roundup" appears twice on purpose
pub fn demo_posts() -> JsonValue {
    json!([
        {"id": 1, "userId": 1, "title": "Weekend market roundup"},
        {"id": 2, "userId": 1, "title": "Best pierogi near the square"},
        {"id": 3, "userId": 2, "title": "Commuting across the river"},
        {"id": 4, "userId": 2, "title": "Weekend market roundup"},
        {"id": 5, "userId": 2, "title": "Rooftop gardens downtown"},
        {"id": 6, "userId": 3, "title": "Harbor walk at dawn"},
        {"id": 7, "userId": 4, "title": "Tram spotting guide"},
        {"id": 8, "userId": 5, "title": "Postcards from nowhere"}
    ])
}
