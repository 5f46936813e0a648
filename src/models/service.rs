/// One static catalog entry for an emergency contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub id: u32,
    pub icon: &'static str, // Relative to the assets directory
    pub name: &'static str,
    pub short_name: &'static str,
    pub number: &'static str, // Display form, may contain '-'
    pub category: &'static str,
}

impl ServiceRecord {
    /// Glyph shown when the icon image is unavailable
    pub fn fallback_glyph(&self) -> &'static str {
        match self.category {
            "Police" => "👮",
            "Fire" => "🔥",
            "Health" => "🚑",
            "Help" => "🤝",
            "Govt." => "🏛",
            "Electricity" => "⚡",
            "NGO" => "🌱",
            "Travel" => "🚆",
            _ => "☎",
        }
    }
}
