use std::fmt;

/// Attribute name paired with its 1-based column in a stats table row.
pub type ColumnSchema = [(&'static str, usize)];

/// Attribute name paired with its scoring multiplier.
pub type WeightTable = [(&'static str, f64)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Skater,
    Goalie,
}

/// Static description of how one category is requested, read and weighted.
#[derive(Debug)]
pub struct CategorySpec {
    /// Value of the `pos` request parameter.
    pub request_value: &'static str,
    pub schema: &'static ColumnSchema,
    pub weights: &'static WeightTable,
}

// Column positions follow the QuantHockey season table layout.
static SKATER: CategorySpec = CategorySpec {
    request_value: "Player",
    schema: &[
        ("name", 2),
        ("position", 5),
        ("goals", 7),
        ("assists", 8),
        ("penalty_mins", 10),
        ("plus_minus", 11),
        ("game_winning_goals", 19),
        ("powerplay_pts", 27),
        ("shorthanded_pts", 28),
        ("shots", 36),
        ("hits", 45),
    ],
    weights: &[
        ("goals", 5.0),
        ("assists", 3.0),
        ("plus_minus", 1.0),
        ("penalty_mins", 1.0),
        ("powerplay_pts", 2.0),
        ("shorthanded_pts", 1.0),
        ("game_winning_goals", 2.0),
        ("shots", 1.0),
        ("hits", 1.0),
    ],
};

static GOALIE: CategorySpec = CategorySpec {
    request_value: "Goalie",
    schema: &[("name", 2), ("wins", 7), ("shutouts", 13)],
    weights: &[("wins", 5.0), ("shutouts", 3.0)],
};

impl Category {
    pub fn describe(self) -> &'static CategorySpec {
        match self {
            Category::Skater => &SKATER,
            Category::Goalie => &GOALIE,
        }
    }

    pub fn schema(self) -> &'static ColumnSchema {
        self.describe().schema
    }

    pub fn weights(self) -> &'static WeightTable {
        self.describe().weights
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Skater => write!(f, "skater"),
            Category::Goalie => write!(f, "goalie"),
        }
    }
}
