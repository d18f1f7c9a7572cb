//! Icon catalog: appfilter.xml parsing and SVG source lookup
//!
//! An icon pack directory holds `appfilter.xml` and an `svgs/` folder whose
//! files are named after each icon's source identifier.

use crate::constants::{APPFILTER_FILE, SVG_DIR};
use crate::error::{CatalogError, CatalogResult};
use crate::presenter::compute_source_identifier;
use crate::types::{ComponentMapping, IconInfo};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct Catalog {
    pub icons: Vec<IconInfo>,
    pub svg_dir: Option<PathBuf>,
}

impl Catalog {
    /// Load `appfilter.xml` from an icon pack directory
    pub fn load(dir: &Path) -> CatalogResult<Self> {
        let appfilter = dir.join(APPFILTER_FILE);
        if !appfilter.is_file() {
            return Err(CatalogError::MissingAppfilter(appfilter));
        }
        let xml = std::fs::read_to_string(&appfilter).map_err(|source| CatalogError::Io {
            path: appfilter.clone(),
            source,
        })?;
        let icons = parse_appfilter(&xml)?;
        info!(count = icons.len(), path = %dir.display(), "Icon catalog loaded");

        let svg_dir = dir.join(SVG_DIR);
        Ok(Self {
            icons,
            svg_dir: svg_dir.is_dir().then_some(svg_dir),
        })
    }

    /// Small built-in catalog shown when no icon pack is configured
    pub fn sample() -> Self {
        let icons = parse_appfilter(SAMPLE_APPFILTER).unwrap_or_default();
        Self { icons, svg_dir: None }
    }

    pub fn svg_path(&self, icon: &IconInfo) -> Option<PathBuf> {
        let dir = self.svg_dir.as_ref()?;
        Some(dir.join(format!("{}.svg", compute_source_identifier(&icon.drawable_name))))
    }

    /// Glyph shown in place of an icon that has no SVG. Sample icons have no
    /// sources at all, so they get a matching Phosphor glyph instead.
    pub fn placeholder_glyph(&self, icon: &IconInfo) -> &'static str {
        if self.svg_dir.is_some() {
            return egui_phosphor::regular::WARNING;
        }
        match compute_source_identifier(&icon.drawable_name).as_str() {
            "email" => egui_phosphor::regular::ENVELOPE,
            "search" => egui_phosphor::regular::MAGNIFYING_GLASS,
            "call" => egui_phosphor::regular::PHONE,
            _ => egui_phosphor::regular::WARNING,
        }
    }
}

const SAMPLE_APPFILTER: &str = r#"<resources>
    <item component="ComponentInfo{com.google.android.gm/com.google.android.gm.ConversationListActivityGmail}" drawable="email_foreground" name="Gmail" />
    <item component="ComponentInfo{com.google.android.gm/com.google.android.gm.GmailActivity}" drawable="email_foreground" name="Gmail" />
    <item component="ComponentInfo{com.android.email/com.android.email.activity.Welcome}" drawable="email_foreground" name="Email" />
    <item component="ComponentInfo{com.google.android.googlequicksearchbox/com.google.android.googlequicksearchbox.SearchActivity}" drawable="search_foreground" name="Google Search" />
    <item component="ComponentInfo{com.google.android.dialer/com.google.android.dialer.extensions.GoogleDialtactsActivity}" drawable="call_foreground" name="Phone" />
    <item component="ComponentInfo{com.android.dialer/com.android.dialer.main.impl.MainActivity}" drawable="call_foreground" name="Phone" />
    <item component="ComponentInfo{com.android.messaging/com.android.messaging.ui.conversationlist.ConversationListActivity}" drawable="call_foreground" name="Messages" />
</resources>"#;

/// Parse appfilter items into icons, one per drawable.
///
/// Mappings keep document order. Icons are sorted by their first label
/// (case-insensitive, then drawable name) and numbered in that order.
pub fn parse_appfilter(xml: &str) -> CatalogResult<Vec<IconInfo>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut icons: Vec<IconInfo> = Vec::new();
    let mut by_drawable: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) if e.name().as_ref() == b"item" => {
                let Some((drawable, mapping)) = parse_item(e) else {
                    skipped += 1;
                    continue;
                };
                match by_drawable.get(&drawable) {
                    Some(&i) => icons[i].component_names.push(mapping),
                    None => {
                        by_drawable.insert(drawable.clone(), icons.len());
                        icons.push(IconInfo {
                            id: 0,
                            drawable_name: drawable,
                            component_names: vec![mapping],
                        });
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(CatalogError::Xml {
                    position: reader.error_position(),
                    message: e.to_string(),
                })
            }
            _ => {}
        }
    }

    if skipped > 0 {
        warn!(skipped, "Skipped appfilter items without a drawable");
    }

    icons.sort_by_cached_key(|icon| {
        let label = icon
            .component_names
            .first()
            .map(|m| m.label.to_lowercase())
            .unwrap_or_default();
        (label, icon.drawable_name.clone())
    });
    for (id, icon) in icons.iter_mut().enumerate() {
        icon.id = id;
    }

    debug!(icons = icons.len(), "Parsed appfilter");
    Ok(icons)
}

fn parse_item(e: &BytesStart) -> Option<(String, ComponentMapping)> {
    let mut component = None;
    let mut drawable = None;
    let mut name = None;

    for attr in e.attributes().flatten() {
        let value = match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"component" => component = Some(value),
            b"drawable" => drawable = Some(value),
            b"name" => name = Some(value),
            _ => {}
        }
    }

    let drawable = drawable.filter(|d| !d.is_empty())?;
    let component_name = strip_component_info(component.as_deref().unwrap_or_default()).to_owned();
    let label = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| component_name.clone());
    Some((drawable, ComponentMapping { label, component_name }))
}

/// `ComponentInfo{pkg/cls}` -> `pkg/cls`
fn strip_component_info(raw: &str) -> &str {
    raw.strip_prefix("ComponentInfo{")
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_items_by_drawable() {
        let xml = r#"<resources>
            <item component="ComponentInfo{a.b/a.b.Main}" drawable="phone_foreground" name="Phone" />
            <item component="ComponentInfo{c.d/c.d.Sms}" drawable="sms_foreground" name="Messages" />
            <item component="ComponentInfo{a.b/a.b.Contacts}" drawable="phone_foreground" name="Phone" />
        </resources>"#;
        let icons = parse_appfilter(xml).unwrap();

        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].drawable_name, "sms_foreground");
        assert_eq!(icons[0].id, 0);
        assert_eq!(icons[1].id, 1);
        assert_eq!(
            icons[1].component_names,
            vec![
                ComponentMapping::new("Phone", "a.b/a.b.Main"),
                ComponentMapping::new("Phone", "a.b/a.b.Contacts"),
            ]
        );
    }

    #[test]
    fn missing_name_falls_back_to_component() {
        let xml = r#"<item component="x.y/x.y.Z" drawable="z" />"#;
        let icons = parse_appfilter(xml).unwrap();
        assert_eq!(icons[0].component_names[0], ComponentMapping::new("x.y/x.y.Z", "x.y/x.y.Z"));
    }

    #[test]
    fn items_without_drawable_are_skipped() {
        let xml = r#"<resources><item component="a/b" name="A" /><item drawable="" name="B" /></resources>"#;
        assert!(parse_appfilter(xml).unwrap().is_empty());
    }

    #[test]
    fn unescapes_attributes() {
        let xml = r#"<item component="ComponentInfo{a/b}" drawable="d" name="Tom &amp; Jerry" />"#;
        assert_eq!(parse_appfilter(xml).unwrap()[0].component_names[0].label, "Tom & Jerry");
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let err = parse_appfilter("<resources><item drawable=\"a\"></resources>").unwrap_err();
        assert!(matches!(err, CatalogError::Xml { .. }));
    }

    #[test]
    fn sample_catalog_is_populated() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.icons.len(), 3);
        assert!(catalog.svg_dir.is_none());
        assert!(catalog.svg_path(&catalog.icons[0]).is_none());
    }

    #[test]
    fn sample_icons_have_matching_glyphs() {
        let catalog = Catalog::sample();
        let glyph = |drawable: &str| {
            let icon = catalog
                .icons
                .iter()
                .find(|i| i.drawable_name == drawable)
                .unwrap();
            catalog.placeholder_glyph(icon)
        };
        assert_eq!(glyph("email_foreground"), egui_phosphor::regular::ENVELOPE);
        assert_eq!(glyph("search_foreground"), egui_phosphor::regular::MAGNIFYING_GLASS);
        assert_eq!(glyph("call_foreground"), egui_phosphor::regular::PHONE);
    }

    #[test]
    fn loaded_pack_uses_warning_glyph() {
        let catalog = Catalog {
            icons: Catalog::sample().icons,
            svg_dir: Some(PathBuf::from("svgs")),
        };
        assert_eq!(
            catalog.placeholder_glyph(&catalog.icons[0]),
            egui_phosphor::regular::WARNING
        );
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(APPFILTER_FILE),
            r#"<resources><item component="ComponentInfo{a/b}" drawable="call_foreground" name="Phone" /></resources>"#,
        )
        .unwrap();
        std::fs::create_dir(dir.path().join(SVG_DIR)).unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.icons.len(), 1);
        assert_eq!(
            catalog.svg_path(&catalog.icons[0]).unwrap(),
            dir.path().join(SVG_DIR).join("call.svg")
        );
    }

    #[test]
    fn load_without_appfilter_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Catalog::load(dir.path()),
            Err(CatalogError::MissingAppfilter(_))
        ));
    }
}
