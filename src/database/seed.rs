use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::models::{Activity, ActivityCatalog};

/// Catalog the service starts with when no seed file is configured.
pub fn default_catalog() -> ActivityCatalog {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(&["james@mergington.edu"]),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Train together and play friendly soccer matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(&["lucas@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore drawing, painting and mixed media projects",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(&["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and stage the school's theater productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(&["noah@mergington.edu", "isabella@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(&["liam@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Sharpen public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(&["charlotte@mergington.edu", "ethan@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Reads a `{ "<name>": { description, schedule, max_participants, participants } }` file.
pub fn load_catalog(path: &Path) -> anyhow::Result<ActivityCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading activity seed file {}", path.display()))?;
    let mut catalog: ActivityCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("parsing activity seed file {}", path.display()))?;

    for (name, activity) in catalog.iter_mut() {
        let before = activity.participants.len();
        dedup_preserving_order(&mut activity.participants);
        if activity.participants.len() != before {
            tracing::warn!(activity = %name, "dropped duplicate participants from seed file");
        }
    }
    Ok(catalog)
}

pub fn catalog_from(path: Option<&Path>) -> anyhow::Result<ActivityCatalog> {
    match path {
        Some(p) => load_catalog(p),
        None => Ok(default_catalog()),
    }
}

fn dedup_preserving_order(emails: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    emails.retain(|e| seen.insert(e.clone()));
}
