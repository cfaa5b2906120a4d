//! Geo-annotation: land-cover label → representative map marker.
//!
//! A pure, total lookup over the closed label set. Each mapped class has
//! exactly one fixed landmark; `Cloudy` carries no location and produces
//! no marker.

use serde::Serialize;

use crate::classifier::ClassLabel;

/// Marker tint for the rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Green,
    Blue,
}

impl MarkerColor {
    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Green => "green",
            MarkerColor::Blue => "blue",
        }
    }
}

/// A single annotated point: fixed coordinate, caption, and style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapAnnotation {
    pub latitude: f64,
    pub longitude: f64,
    pub caption: &'static str,
    pub color: MarkerColor,
    /// Icon style tag, always "info-sign".
    pub icon: &'static str,
}

const INFO_ICON: &str = "info-sign";

/// Representative location for a predicted class, or `None` for `Cloudy`.
///
/// The lookup is exhaustive over the closed enum, so an out-of-domain
/// label is unrepresentable rather than defensively handled.
pub fn annotate(label: ClassLabel) -> Option<MapAnnotation> {
    match label {
        ClassLabel::Cloudy => None,
        ClassLabel::Desert => Some(MapAnnotation {
            latitude: -7.92967,
            longitude: 112.96586,
            caption: "Padang Pasir Bromo",
            color: MarkerColor::Red,
            icon: INFO_ICON,
        }),
        ClassLabel::GreenArea => Some(MapAnnotation {
            latitude: -6.8573768,
            longitude: 107.6286693,
            caption: "Taman Hutan Raya Ir.H.Djuanda",
            color: MarkerColor::Green,
            icon: INFO_ICON,
        }),
        ClassLabel::Water => Some(MapAnnotation {
            latitude: -5.137524,
            longitude: 112.1586481,
            caption: "Laut Jawa",
            color: MarkerColor::Blue,
            icon: INFO_ICON,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudy_has_no_marker() {
        assert_eq!(annotate(ClassLabel::Cloudy), None);
    }

    #[test]
    fn desert_maps_to_bromo() {
        let m = annotate(ClassLabel::Desert).unwrap();
        assert_eq!((m.latitude, m.longitude), (-7.92967, 112.96586));
        assert_eq!(m.caption, "Padang Pasir Bromo");
        assert_eq!(m.color, MarkerColor::Red);
        assert_eq!(m.icon, "info-sign");
    }

    #[test]
    fn green_area_maps_to_djuanda_forest_park() {
        let m = annotate(ClassLabel::GreenArea).unwrap();
        assert_eq!((m.latitude, m.longitude), (-6.8573768, 107.6286693));
        assert_eq!(m.caption, "Taman Hutan Raya Ir.H.Djuanda");
        assert_eq!(m.color, MarkerColor::Green);
    }

    #[test]
    fn water_maps_to_the_java_sea() {
        let m = annotate(ClassLabel::Water).unwrap();
        assert_eq!((m.latitude, m.longitude), (-5.137524, 112.1586481));
        assert_eq!(m.caption, "Laut Jawa");
        assert_eq!(m.color, MarkerColor::Blue);
    }

    #[test]
    fn annotation_is_stable_across_calls() {
        assert_eq!(annotate(ClassLabel::Water), annotate(ClassLabel::Water));
    }
}
