use crate::models::review::{Review, ReviewId};

fn seed(id: &str, name: &str, initials: &str, rating: u8, text: &str, date: &str, color: &str) -> Review {
    Review {
        id: ReviewId::Seed(id.to_string()),
        resource_id: 0,
        name: name.to_string(),
        initials: initials.to_string(),
        color: color.to_string(),
        rating,
        text: text.to_string(),
        date: date.to_string(),
        is_new: false,
    }
}

/// The three reviews every resource shows before anyone has rated it.
/// These live only in code: they are appended when reviews are read and are
/// never written to storage.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        seed(
            "seed-1",
            "Meera Pillai",
            "MP",
            5,
            "Worked through every chapter over a semester and the explanations never lost me. \
             The exercise sets build up in exactly the right order.",
            "Feb 2026",
            "#8b5cf6",
        ),
        seed(
            "seed-2",
            "Daniel Okafor",
            "DO",
            4,
            "Clear structure and well-chosen worked examples. A few chapters lean heavily on \
             earlier notation, so keep a bookmark in the appendix.",
            "Jan 2026",
            "#10b981",
        ),
        seed(
            "seed-3",
            "Sofia Martins",
            "SM",
            4,
            "Solid reference that I keep coming back to. Would love more diagrams in the later \
             sections, but the writing carries it.",
            "Dec 2025",
            "#f59e0b",
        ),
    ]
}
