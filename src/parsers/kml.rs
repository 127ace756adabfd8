use quick_xml::events::Event;
use quick_xml::Reader;

use crate::models::GeoPoint;

/// Extract point coordinates from KML text.
///
/// Collects the text content of every `<coordinates>` element (matched by
/// local name, so both default-namespace and prefixed KML 2.2 documents
/// work), tokenizes it on whitespace, and reads each token's leading
/// `lon,lat` components. Malformed tokens are skipped individually;
/// malformed XML yields an empty list.
pub fn extract_kml_points(text: &str) -> Vec<GeoPoint> {
    let mut reader = Reader::from_str(text);
    let mut points = Vec::new();
    let mut inside_coordinates = false;
    let mut content = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref element)) if element.local_name().as_ref() == b"coordinates" => {
                inside_coordinates = true;
                content.clear();
            }
            Ok(Event::Text(ref element)) if inside_coordinates => match element.unescape() {
                Ok(unescaped) => content.push_str(&unescaped),
                Err(_) => return Vec::new(),
            },
            Ok(Event::CData(ref element)) if inside_coordinates => {
                content.push_str(&String::from_utf8_lossy(element));
            }
            Ok(Event::End(ref element)) if element.local_name().as_ref() == b"coordinates" => {
                inside_coordinates = false;
                collect_tokens(&content, &mut points);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return Vec::new(),
        }
    }

    points
}

/// Parse whitespace-separated `lon,lat[,alt]` tokens, skipping bad ones
fn collect_tokens(content: &str, points: &mut Vec<GeoPoint>) {
    for token in content.split_whitespace() {
        let mut components = token.split(',');
        let (Some(lon_text), Some(lat_text)) = (components.next(), components.next()) else {
            continue;
        };
        let (Ok(lon), Ok(lat)) = (lon_text.parse::<f64>(), lat_text.parse::<f64>()) else {
            continue;
        };
        let point = GeoPoint::new(lat, lon);
        if point.is_valid() {
            points.push(point);
        }
    }
}
