use serde::Serialize;

/// A named tier in the player progression ladder. `max_points` is inclusive;
/// `None` marks the final, unbounded tier. Icon and color are display
/// metadata for the frontend and carry no game meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Level {
    pub name: &'static str,
    pub min_points: i64,
    pub max_points: Option<i64>,
    pub icon: &'static str,
    pub color: &'static str,
}

/// The tier ladder, ordered by ascending `min_points`. Ranges are contiguous
/// and partition the non-negative integers.
pub static LEVELS: [Level; 7] = [
    Level {
        name: "Novato",
        min_points: 0,
        max_points: Some(49),
        icon: "🫒",
        color: "#9CA3AF",
    },
    Level {
        name: "Aprendiz",
        min_points: 50,
        max_points: Some(149),
        icon: "🍋",
        color: "#22C55E",
    },
    Level {
        name: "Aficionado",
        min_points: 150,
        max_points: Some(299),
        icon: "🍹",
        color: "#3B82F6",
    },
    Level {
        name: "Barman",
        min_points: 300,
        max_points: Some(499),
        icon: "🍸",
        color: "#8B5CF6",
    },
    Level {
        name: "Mixólogo",
        min_points: 500,
        max_points: Some(799),
        icon: "🥃",
        color: "#F59E0B",
    },
    Level {
        name: "Maestro Coctelero",
        min_points: 800,
        max_points: Some(1199),
        icon: "🍾",
        color: "#EF4444",
    },
    Level {
        name: "Leyenda",
        min_points: 1200,
        max_points: None,
        icon: "🏆",
        color: "#FFD700",
    },
];

impl Level {
    pub fn contains(&self, points: i64) -> bool {
        points >= self.min_points && self.max_points.map(|max| points <= max).unwrap_or(true)
    }
}
