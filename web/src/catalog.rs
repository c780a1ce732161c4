use std::collections::HashSet;

use shared_types::{Coordinates, PoiDescription, PointOfInterest};

/// The fixed, ordered list of places drawn on the map. Identifiers are unique;
/// the first entry with a given identifier is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<PointOfInterest>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = PointOfInterest>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|poi| {
                let fresh = seen.insert(poi.id.clone());
                if !fresh {
                    leptos::logging::warn!(
                        "Dropping duplicate point of interest '{}' ({})",
                        poi.id,
                        poi.name
                    );
                }
                fresh
            })
            .collect();
        Self { entries }
    }

    pub fn dublin_pubs() -> Self {
        Self::new(vec![
            pub_entry(
                "bleedingHorse",
                "The Bleeding Horse",
                53.33354,
                -6.2649,
                PoiDescription::Text(
                    "Timber-beamed corner pub on Camden Street with a history going back to the 1600s."
                        .to_string(),
                ),
            ),
            pub_entry(
                "D2",
                "D2",
                53.33438,
                -6.26288,
                PoiDescription::Text("Late bar off Harcourt Street with a big terrace.".to_string()),
            ),
            pub_entry(
                "nearys",
                "Neary's",
                53.34074,
                -6.26119,
                PoiDescription::Text(
                    "Victorian bar on Chatham Street, a favourite of Gaiety Theatre actors."
                        .to_string(),
                ),
            ),
            pub_entry(
                "davyByrnes",
                "Davy Byrnes",
                53.34183,
                -6.25936,
                PoiDescription::TextWithLink {
                    text: "The 'moral pub' where Leopold Bloom stops for a gorgonzola sandwich in Ulysses."
                        .to_string(),
                    label: "Open in OpenStreetMap".to_string(),
                    url: osm_link(53.34183, -6.25936),
                },
            ),
            pub_entry(
                "duke",
                "The Duke",
                53.34195,
                -6.25869,
                PoiDescription::TextWithLink {
                    text: "Starting point of the Dublin Literary Pub Crawl.".to_string(),
                    label: "Open in OpenStreetMap".to_string(),
                    url: osm_link(53.34195, -6.25869),
                },
            ),
            pub_entry(
                "mcdaids",
                "McDaid's",
                53.34125,
                -6.261,
                PoiDescription::Text(
                    "Brendan Behan's local, in a building that was once a city morgue.".to_string(),
                ),
            ),
            pub_entry(
                "toners",
                "Toners",
                53.33775,
                -6.25242,
                PoiDescription::Link {
                    label: "Open in OpenStreetMap".to_string(),
                    url: osm_link(53.33775, -6.25242),
                },
            ),
            pub_entry(
                "waterloo",
                "The Waterloo",
                53.3305,
                -6.24445,
                PoiDescription::Text("Baggot Street pub with a beer garden out back.".to_string()),
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&PointOfInterest> {
        self.entries.iter().find(|poi| poi.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn pub_entry(id: &str, name: &str, lat: f64, lng: f64, description: PoiDescription) -> PointOfInterest {
    PointOfInterest {
        id: id.to_string(),
        name: name.to_string(),
        coordinates: Coordinates::new(lat, lng),
        description,
    }
}

fn osm_link(lat: f64, lng: f64) -> String {
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=19/{lat}/{lng}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dublin_pubs_have_unique_ids() {
        let catalog = Catalog::dublin_pubs();
        let ids: HashSet<_> = catalog.iter().map(|poi| poi.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn duplicate_ids_keep_the_first_entry() {
        let first = pub_entry("davyByrnes", "Davy Byrnes", 53.34183, -6.25936, PoiDescription::Text("first".into()));
        let second = pub_entry("davyByrnes", "Davy Byrnes", 0.0, 0.0, PoiDescription::Text("second".into()));
        let other = pub_entry("duke", "The Duke", 53.34195, -6.25869, PoiDescription::Text("x".into()));

        let catalog = Catalog::new(vec![first.clone(), other.clone(), second]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("davyByrnes"), Some(&first));
        let order: Vec<_> = catalog.iter().map(|poi| poi.id.as_str()).collect();
        assert_eq!(order, vec!["davyByrnes", "duke"]);
    }

    #[test]
    fn out_of_range_coordinates_pass_through() {
        let odd = pub_entry("nowhere", "Nowhere", 123.0, -500.0, PoiDescription::Text(String::new()));
        let catalog = Catalog::new(vec![odd]);
        assert_eq!(
            catalog.get("nowhere").map(|poi| poi.coordinates),
            Some(Coordinates::new(123.0, -500.0))
        );
    }

    #[test]
    fn links_point_at_the_entry() {
        let catalog = Catalog::dublin_pubs();
        let toners = catalog.get("toners").and_then(|poi| poi.description.link());
        assert_eq!(
            toners.map(|(_, url)| url.to_string()),
            Some("https://www.openstreetmap.org/?mlat=53.33775&mlon=-6.25242#map=19/53.33775/-6.25242".to_string())
        );
    }
}
