/// Support policy for catalog object ids.
///
/// The Raumfeld catalog exposes branches that make no sense for a browsing
/// consumer (search stubs, renderer listings, zone internals). The lists are
/// plain data so callers can swap in their own policy.
#[derive(Debug, Clone)]
pub struct ObjectFilter {
    unsupported_ids: Vec<String>,
    supported_ids: Vec<String>,
    supported_prefixes: Vec<String>,
}

impl ObjectFilter {
    pub fn new(
        unsupported_ids: Vec<String>,
        supported_ids: Vec<String>,
        supported_prefixes: Vec<String>,
    ) -> Self {
        Self {
            unsupported_ids,
            supported_ids,
            supported_prefixes,
        }
    }

    /// An id on the unsupported list is rejected unconditionally; otherwise
    /// it must be a whitelisted id or carry a whitelisted prefix.
    pub fn is_supported(&self, oid: &str) -> bool {
        if self.unsupported_ids.iter().any(|id| id == oid) {
            return false;
        }

        self.supported_ids.iter().any(|id| id == oid)
            || self.supported_prefixes.iter().any(|p| oid.starts_with(p.as_str()))
    }
}

impl Default for ObjectFilter {
    fn default() -> Self {
        Self::new(
            vec![
                "0/My Music/Search".to_string(),
                "0/Playlists/Shuffles".to_string(),
                "0/Renderers".to_string(),
                "0/Spotify".to_string(),
                "0/Tidal/Search".to_string(),
                "0/RadioTime/Search".to_string(),
                "0/Zones".to_string(),
            ],
            vec!["0".to_string()],
            vec![
                "0/My Music".to_string(),
                "0/Favorites".to_string(),
                "0/Line In".to_string(),
                "0/Playlists".to_string(),
                "0/Podcasts".to_string(),
                "0/RadioTime".to_string(),
                "0/Tidal".to_string(),
            ],
        )
    }
}
