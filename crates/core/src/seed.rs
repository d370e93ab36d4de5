//! Fixed catalog loaded at process start.

use crate::activity::{Activity, Catalog};

/// Build the startup catalog.
///
/// "Chess Club" always has at least one pre-registered participant.
pub fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    catalog.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    catalog.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    catalog.insert(
        "Soccer Team".to_string(),
        Activity::new(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
    );
    catalog.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
    );
    catalog.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["amelia@mergington.edu"]),
    );
    catalog.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    catalog.insert(
        "Math Club".to_string(),
        Activity::new(
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(&["james@mergington.edu"]),
    );
    catalog.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        ),
    );

    catalog
}
