//! Example content loaded at start-up so the deck and guestbook are not empty.

use super::{Comment, GuestbookEntry};

const COMMENTS: &[(u32, &str, &str)] = &[
    (1, "Alex", "Toller Einstieg in die Präsentation!"),
    (1, "Julia", "Das Problem ist gut dargestellt"),
    (1, "Max", "Könnten Sie die Zahlen genauer erklären?"),
    (2, "Sarah", "Die Marktanalyse ist sehr detailliert"),
    (2, "Tom", "Welche Quellen haben Sie verwendet?"),
    (2, "Anna", "Interessante Wachstumsprognosen"),
    (3, "David", "Das Produktdesign gefällt mir"),
    (3, "Lisa", "Gibt es schon einen Prototypen?"),
    (3, "Paul", "Die USP sind klar herausgearbeitet"),
    (4, "Emma", "Das Geschäftsmodell ist schlüssig"),
    (4, "Felix", "Wann startet die Monetarisierung?"),
    (4, "Hannah", "Die Preisstrategie ist nachvollziehbar"),
    (5, "Oliver", "Das Team hat viel Erfahrung"),
    (6, "Sophie", "Die Roadmap ist ambitioniert"),
    (7, "Leon", "Starke Konkurrenzanalyse"),
    (8, "Mia", "Die Finanzprojektionen sind konservativ"),
    (9, "Ben", "Guter Überblick über die Risiken"),
    (10, "Lena", "Der Exit-Plan ist realistisch"),
    (11, "Jonas", "Beeindruckende Traction"),
    (12, "Laura", "Überzeugender Abschluss!"),
];

const GUESTBOOK: &[(&str, &str)] = &[
    (
        "Alex Schmidt",
        "Tolle Präsentation! Wann geht's los mit der Umsetzung?",
    ),
    ("Julia Weber", "Sehr professioneller Pitch. Viel Erfolg!"),
    (
        "Max Müller",
        "Interessantes Konzept. Melden Sie sich bei Interesse an einer Kooperation",
    ),
    (
        "Sarah Meyer",
        "Habe noch Fragen zur Technologie. Können wir uns austauschen?",
    ),
    (
        "Tom Wagner",
        "Beeindruckende Zahlen. Wann ist die nächste Funding-Runde?",
    ),
    (
        "Anna Fischer",
        "Das Team hat mich überzeugt. Bin gespannt auf die Entwicklung",
    ),
    (
        "David Becker",
        "Gut strukturierte Präsentation. Die Slides waren sehr klar",
    ),
    (
        "Lisa Hoffmann",
        "Würde gerne mehr über die Kundensegmentierung erfahren",
    ),
    (
        "Paul Schulz",
        "Top Pitches heute, aber Ihre Präsentation war die beste!",
    ),
    (
        "Emma Köhler",
        "Haben Sie schon mit potenziellen Partnern gesprochen?",
    ),
];

/// Example comments for slides `1..=slide_count`. Comments for slides the deck
/// does not have are left out.
pub fn comments(slide_count: u32) -> Vec<Comment> {
    COMMENTS
        .iter()
        .filter(|(slide, _, _)| *slide <= slide_count)
        .map(|&(slide, name, text)| Comment::new(slide, name, text))
        .collect()
}

pub fn guestbook() -> Vec<GuestbookEntry> {
    GUESTBOOK
        .iter()
        .map(|&(name, text)| GuestbookEntry::new(name, text))
        .collect()
}
