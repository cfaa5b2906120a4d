//! Map document: a self-contained Leaflet HTML page with at most one
//! marker.
//!
//! The page is assembled from a fixed template the same way folium-style
//! tools emit theirs: CDN-linked Leaflet assets, a fixed base view, and an
//! optional colored marker with a caption popup. Rendering only produces
//! the string; writing `map.html` belongs to the caller.

use crate::geo::MapAnnotation;

/// Fixed base view: (latitude, longitude) of the map center.
pub const MAP_CENTER: (f64, f64) = (-0.789275, 113.921327);
/// Fixed base zoom level.
pub const MAP_ZOOM: u32 = 5;
/// Fixed output filename, relative to the working directory.
pub const MAP_FILE: &str = "map.html";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const MARKER_ICON_BASE: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img";

/// One renderable map: the fixed base view plus zero or one marker.
/// Built once per request; never cached or updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    center: (f64, f64),
    zoom: u32,
    marker: Option<MapAnnotation>,
}

impl MapDocument {
    pub fn new(marker: Option<MapAnnotation>) -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            marker,
        }
    }

    /// Render the full HTML page.
    pub fn render(&self) -> String {
        let marker_js = match &self.marker {
            Some(m) => format!(
                r#"var icon = L.icon({{
    iconUrl: '{base}/marker-icon-2x-{color}.png',
    shadowUrl: '{base}/marker-shadow.png',
    iconSize: [25, 41],
    iconAnchor: [12, 41],
    popupAnchor: [1, -34],
    shadowSize: [41, 41]
}});
L.marker([{lat}, {lon}], {{icon: icon}}).addTo(map).bindPopup("{caption}");"#,
                base = MARKER_ICON_BASE,
                color = m.color.name(),
                lat = m.latitude,
                lon = m.longitude,
                caption = m.caption,
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Land-cover map</title>
<link rel="stylesheet" href="{css}">
<script src="{js}"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
{marker_js}
</script>
</body>
</html>
"#,
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            lat = self.center.0,
            lon = self.center.1,
            zoom = self.zoom,
            marker_js = marker_js,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassLabel;
    use crate::geo::annotate;

    #[test]
    fn base_view_is_fixed() {
        let html = MapDocument::new(None).render();
        assert!(html.contains("setView([-0.789275, 113.921327], 5)"));
    }

    #[test]
    fn no_annotation_renders_no_marker() {
        let html = MapDocument::new(None).render();
        assert!(!html.contains("L.marker"));
    }

    #[test]
    fn water_annotation_renders_a_blue_marker_with_popup() {
        let html = MapDocument::new(annotate(ClassLabel::Water)).render();
        assert!(html.contains("marker-icon-2x-blue.png"));
        assert!(html.contains("L.marker([-5.137524, 112.1586481]"));
        assert!(html.contains(r#"bindPopup("Laut Jawa")"#));
    }

    #[test]
    fn tile_url_placeholders_survive_templating() {
        let html = MapDocument::new(None).render();
        assert!(html.contains("https://tile.openstreetmap.org/{z}/{x}/{y}.png"));
    }
}
