//! Icon info presentation: grouping, source identifier and share text
//!
//! Everything here is pure. The sheet builds one [`IconInfoPresenter`] when it
//! opens and keeps it until it is dismissed.

use crate::constants::{DRAWABLE_SUFFIX, GITHUB_URL};
use crate::types::{ComponentMapping, GroupedMapping, IconInfo};
use std::collections::HashMap;

/// Derived, read-only view of one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconInfoPresenter {
    pub source_identifier: String,
    pub groups: Vec<GroupedMapping>,
    pub share_text: String,
    pub source_url: String,
}

impl IconInfoPresenter {
    pub fn present(icon: &IconInfo) -> Self {
        let source_identifier = compute_source_identifier(&icon.drawable_name);
        let groups = group_mappings(&icon.component_names);
        let share_text = build_share_text(&source_identifier, &groups);
        let source_url = source_url(&source_identifier);
        Self {
            source_identifier,
            groups,
            share_text,
            source_url,
        }
    }
}

/// Strip the first `_foreground` from a drawable name, if present
pub fn compute_source_identifier(drawable_name: &str) -> String {
    drawable_name.replacen(DRAWABLE_SUFFIX, "", 1)
}

/// Group mappings by label, keeping first-seen label order and the original
/// component order inside each group
pub fn group_mappings(mappings: &[ComponentMapping]) -> Vec<GroupedMapping> {
    let mut groups: Vec<GroupedMapping> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for mapping in mappings {
        match index.get(mapping.label.as_str()) {
            Some(&i) => groups[i].component_names.push(mapping.component_name.clone()),
            None => {
                index.insert(mapping.label.as_str(), groups.len());
                groups.push(GroupedMapping {
                    label: mapping.label.clone(),
                    component_names: vec![mapping.component_name.clone()],
                });
            }
        }
    }

    groups
}

/// Plain-text payload handed to the share facility
pub fn build_share_text(source_identifier: &str, groups: &[GroupedMapping]) -> String {
    let formatted_components = groups
        .iter()
        .map(|group| format!("{}:\n{}", group.label, group.component_names.join("\n")))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Drawable: {source_identifier}\n\nMapped components: \n{formatted_components}")
}

/// Link to the icon's SVG in the upstream repository
pub fn source_url(source_identifier: &str) -> String {
    format!("{}/blob/develop/svgs/{}.svg", GITHUB_URL, source_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_icon() -> IconInfo {
        IconInfo {
            id: 3,
            drawable_name: "call_foreground".into(),
            component_names: vec![
                ComponentMapping::new("Phone", "com.app.phone.Dialer"),
                ComponentMapping::new("Phone", "com.app.phone.Contacts"),
                ComponentMapping::new("Messages", "com.app.sms.Main"),
            ],
        }
    }

    #[test]
    fn strips_suffix_once() {
        assert_eq!(compute_source_identifier("call_foreground"), "call");
        assert_eq!(
            compute_source_identifier("x_foreground_foreground"),
            "x_foreground"
        );
    }

    #[test]
    fn name_without_suffix_passes_through() {
        assert_eq!(compute_source_identifier("plain_icon"), "plain_icon");
        assert_eq!(compute_source_identifier(""), "");
    }

    #[test]
    fn groups_by_first_seen_label() {
        let groups = group_mappings(&call_icon().component_names);
        assert_eq!(
            groups,
            vec![
                GroupedMapping::new("Phone", ["com.app.phone.Dialer", "com.app.phone.Contacts"]),
                GroupedMapping::new("Messages", ["com.app.sms.Main"]),
            ]
        );
    }

    #[test]
    fn interleaved_labels_keep_component_order() {
        let mappings = vec![
            ComponentMapping::new("B", "b1"),
            ComponentMapping::new("A", "a1"),
            ComponentMapping::new("B", "b2"),
            ComponentMapping::new("A", "a2"),
            ComponentMapping::new("C", "c1"),
            ComponentMapping::new("B", "b3"),
        ];
        let groups = group_mappings(&mappings);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["B", "A", "C"]);
        assert_eq!(groups[0].component_names, ["b1", "b2", "b3"]);

        let mut flattened: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.component_names.iter().map(String::as_str))
            .collect();
        let mut input: Vec<&str> = mappings.iter().map(|m| m.component_name.as_str()).collect();
        flattened.sort_unstable();
        input.sort_unstable();
        assert_eq!(flattened, input);
    }

    #[test]
    fn duplicate_component_names_are_kept() {
        let mappings = vec![
            ComponentMapping::new("A", "same"),
            ComponentMapping::new("A", "same"),
        ];
        assert_eq!(group_mappings(&mappings)[0].component_names, ["same", "same"]);
    }

    #[test]
    fn empty_mappings() {
        assert!(group_mappings(&[]).is_empty());
        assert_eq!(
            build_share_text("call", &[]),
            "Drawable: call\n\nMapped components: \n"
        );
    }

    #[test]
    fn share_text_matches_golden() {
        let presenter = IconInfoPresenter::present(&call_icon());
        assert_eq!(presenter.source_identifier, "call");
        assert_eq!(
            presenter.share_text,
            "Drawable: call\n\nMapped components: \nPhone:\ncom.app.phone.Dialer\ncom.app.phone.Contacts\nMessages:\ncom.app.sms.Main"
        );
        assert_eq!(presenter, IconInfoPresenter::present(&call_icon()));
    }

    #[test]
    fn source_url_points_at_svg() {
        assert_eq!(
            source_url("call"),
            "https://github.com/LawnchairLauncher/lawnicons/blob/develop/svgs/call.svg"
        );
        assert_eq!(IconInfoPresenter::present(&call_icon()).source_url, source_url("call"));
    }
}
