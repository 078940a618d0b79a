use crate::snapshot::PuzzleInfo;

#[derive(Clone, Copy, Debug)]
pub struct PuzzleCatalogEntry {
    pub label: &'static str,
    pub slug: &'static str,
    pub src: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const DEFAULT_PUZZLE_SLUG: &str = "triceratops";

// Source images are prepared square by the host; the engine only ever
// sees normalized regions into them.
pub const PUZZLE_CATALOG: &[PuzzleCatalogEntry] = &[
    PuzzleCatalogEntry {
        label: "Tyrannosaurus Rex",
        slug: "tyrannosaurus",
        src: "puzzles/tyrannosaurus.jpg",
        width: 600,
        height: 600,
    },
    PuzzleCatalogEntry {
        label: "Triceratops",
        slug: "triceratops",
        src: "puzzles/triceratops.jpg",
        width: 600,
        height: 600,
    },
    PuzzleCatalogEntry {
        label: "Stegosaurus",
        slug: "stegosaurus",
        src: "puzzles/stegosaurus.jpg",
        width: 600,
        height: 600,
    },
    PuzzleCatalogEntry {
        label: "Velociraptor",
        slug: "velociraptor",
        src: "puzzles/velociraptor.jpg",
        width: 600,
        height: 600,
    },
    PuzzleCatalogEntry {
        label: "Brachiosaurus",
        slug: "brachiosaurus",
        src: "puzzles/brachiosaurus.jpg",
        width: 600,
        height: 600,
    },
];

pub fn puzzle_by_slug(slug: &str) -> Option<&'static PuzzleCatalogEntry> {
    let trimmed = slug.trim();
    PUZZLE_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

pub fn puzzle_by_label(label: &str) -> Option<&'static PuzzleCatalogEntry> {
    let trimmed = label.trim();
    PUZZLE_CATALOG
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(trimmed))
}

pub fn puzzle_info(slug: &str) -> Option<PuzzleInfo> {
    puzzle_by_slug(slug).map(|entry| PuzzleInfo::built_in(entry.label, entry.slug))
}
