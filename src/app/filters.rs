//! Search filtering over the icon catalog

use super::App;
use crate::types::IconInfo;

impl App {
    pub fn apply_filters(&mut self) {
        self.filtered_indices = filter_icons(&self.catalog.icons, &self.search_query);
    }
}

/// Indices of matching icons, best matches first, catalog order within a tier
pub fn filter_icons(icons: &[IconInfo], query: &str) -> Vec<usize> {
    let query = query.trim();
    let query_lower = query.to_lowercase();

    let mut scored: Vec<(usize, u8)> = icons
        .iter()
        .enumerate()
        .filter_map(|(i, icon)| match_priority(icon, query, &query_lower).map(|p| (i, p)))
        .collect();

    // Stable sort keeps catalog order inside each tier
    scored.sort_by_key(|(_, priority)| *priority);
    scored.into_iter().map(|(i, _)| i).collect()
}

/// Lower is better. Exact-case label hits rank first, component hits last.
fn match_priority(icon: &IconInfo, query: &str, query_lower: &str) -> Option<u8> {
    if query.is_empty() {
        return Some(0);
    }

    let labels = || icon.component_names.iter().map(|m| m.label.as_str());

    if labels().any(|l| l.contains(query)) {
        return Some(0);
    }
    if icon.drawable_name.contains(query) {
        return Some(1);
    }
    if labels().any(|l| l.to_lowercase().contains(query_lower)) {
        return Some(2);
    }
    if icon.drawable_name.to_lowercase().contains(query_lower) {
        return Some(3);
    }
    if icon
        .component_names
        .iter()
        .any(|m| m.component_name.to_lowercase().contains(query_lower))
    {
        return Some(4);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentMapping;

    fn icons() -> Vec<IconInfo> {
        let icon = |id, drawable: &str, label: &str, component: &str| IconInfo {
            id,
            drawable_name: drawable.into(),
            component_names: vec![ComponentMapping::new(label, component)],
        };
        vec![
            icon(0, "calculator_foreground", "Calculator", "com.android.calculator2/.Calculator"),
            icon(1, "call_foreground", "Phone", "com.android.dialer/.Main"),
            icon(2, "maps_foreground", "maps", "com.google.android.apps.maps/.Maps"),
            icon(3, "camera_foreground", "Camera", "org.lineageos.aperture/.CameraLauncher"),
        ]
    }

    #[test]
    fn empty_query_keeps_catalog_order() {
        assert_eq!(filter_icons(&icons(), "  "), [0, 1, 2, 3]);
    }

    #[test]
    fn exact_case_label_ranks_first() {
        // "maps" hits icon 2's label exactly; nothing else contains it
        assert_eq!(filter_icons(&icons(), "maps"), [2]);
        // "Ca" matches labels of 0 and 3 exactly, drawable "call" only lowercase
        assert_eq!(filter_icons(&icons(), "Ca"), [0, 3, 1]);
    }

    #[test]
    fn matches_component_names() {
        assert_eq!(filter_icons(&icons(), "aperture"), [3]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_icons(&icons(), "zzz").is_empty());
    }
}
