use std::fmt;

// ---------------------------------------------------------------------------
// Variant — Jerry Talisman colour family
// ---------------------------------------------------------------------------

/// Colour family of a Jerry Talisman, lowest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Green,
    Blue,
    Purple,
    Golden,
    Unknown,
}

impl Variant {
    /// The four families that appear in the report, in display order.
    pub const KNOWN: [Variant; 4] = [
        Variant::Green,
        Variant::Blue,
        Variant::Purple,
        Variant::Golden,
    ];

    /// Map the colour word from a chat line. Case-sensitive; anything that is
    /// not one of the four item names is `Unknown`.
    pub fn from_color(color: &str) -> Self {
        match color {
            "Green" => Variant::Green,
            "Blue" => Variant::Blue,
            "Purple" => Variant::Purple,
            "Golden" => Variant::Golden,
            _ => Variant::Unknown,
        }
    }

    /// How many Green talismans one of this family is worth.
    pub fn multiplier(self) -> u64 {
        match self {
            Variant::Green => 1,
            Variant::Blue => 5,
            Variant::Purple => 25,
            Variant::Golden => 125,
            Variant::Unknown => 0,
        }
    }

    /// Rarity colour code the item carries once recombobulated.
    ///
    /// Each family is bumped one rarity: Green to rare (`9`), Blue to epic
    /// (`5`), Purple to legendary (`6`), Golden to mythic (`d`).
    pub fn upgraded_marker(self) -> Option<char> {
        match self {
            Variant::Green => Some('9'),
            Variant::Blue => Some('5'),
            Variant::Purple => Some('6'),
            Variant::Golden => Some('d'),
            Variant::Unknown => None,
        }
    }

    /// Whether `marker` is this family's recombobulated rarity code.
    pub fn is_upgraded_marker(self, marker: char) -> bool {
        self.upgraded_marker() == Some(marker)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Green => "Green",
            Variant::Blue => "Blue",
            Variant::Purple => "Purple",
            Variant::Golden => "Golden",
            Variant::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// PurchaseRecord — one purchase line from the chat log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub variant: Variant,
    /// The item bought was already recombobulated.
    pub recombobulated: bool,
    /// Coins paid.
    pub cost: i64,
}

impl PurchaseRecord {
    pub fn new(variant: Variant, recombobulated: bool, cost: i64) -> Self {
        Self {
            variant,
            recombobulated,
            cost,
        }
    }
}
