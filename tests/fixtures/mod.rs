// Test fixtures - reusable raw upstream payloads
// Raw JSON in the shapes the REST collaborators actually return, so the
// integration tests exercise the full normalize -> expand -> view pipeline.

use serde_json::{json, Value};

/// Groups for the January-March 2025 cohort scenarios.
pub fn raw_groups() -> Value {
    json!([
        {
            "id": 7,
            "name": "Rust beginners",
            "trainerId": 3,
            "trainerName": "A. Martin",
            "formationId": 12,
            "formationTitle": "Systems programming",
            "startDate": "2025-01-06",
            "endDate": "2025-03-28"
        },
        {
            "id": 8,
            "name": "Evening workshop group",
            "trainerId": 4,
            "trainerName": "B. Costa",
            "formationId": 13,
            "formationTitle": "Web fundamentals",
            // Older payload shape: formation-prefixed period names.
            "formationStartDate": "2025-01-01",
            "formationEndDate": "2025-03-31"
        },
        {
            // Reversed period after a bad upstream edit.
            "id": 9,
            "name": "Broken group",
            "startDate": "2025-05-01",
            "endDate": "2025-04-01"
        }
    ])
}

/// Sessions covering weekly, narrowed-override, and single-date rules.
pub fn raw_sessions() -> Value {
    json!([
        {
            "id": 10,
            "title": "Core course",
            "groupId": 7,
            "status": "active",
            "days": ["monday", "wednesday"],
            "startTime": "09:00",
            "endTime": "12:00",
            "location": "Room B"
        },
        {
            "id": 11,
            "title": "Friday workshop",
            "groupId": 8,
            "status": "active",
            "days": "friday",
            "startTime": "18:00",
            "endTime": "20:00",
            "startDate": "2025-01-01",
            "endDate": "2025-01-15"
        },
        {
            "id": 12,
            "title": "Exam day",
            "groupId": 7,
            "status": "pending",
            "date": "2025-02-14",
            "startTime": "14:00",
            "endTime": "16:00"
        },
        {
            "id": 13,
            "title": "Ghost session",
            "groupId": 9,
            "status": "active",
            "days": ["monday"],
            "startTime": "09:00",
            "endTime": "10:00"
        }
    ])
}
