//! Statischer Datensatz: Laden, Validieren und Nachschlagen von Kartenpunkten.

use super::filter::{derive_options, FilterAttribute, FilterOption};
use super::PointRecord;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Mitgelieferter Wohnungs-Datensatz (Straßen-Variante).
pub const BUNDLED_HOUSES_JSON: &str = include_str!("../../assets/houses.json");
/// Mitgelieferter Landmarken-Datensatz (Kategorie-Variante).
pub const BUNDLED_LANDMARKS_JSON: &str = include_str!("../../assets/landmarks.json");

/// Geografische Ausdehnung aller Einträge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Mittelpunkt als `[lat, lon]`.
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min_lat + self.max_lat) * 0.5,
            (self.min_lon + self.max_lon) * 0.5,
        ]
    }
}

/// Geordnete, unveränderliche Menge von Kartenpunkten mit ID-Index.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PointRecord>,
    index_by_id: HashMap<u64, usize>,
}

/// Rohform eines JSON-Eintrags vor der Validierung.
///
/// Akzeptiert sowohl die englischen Feldnamen als auch die des
/// niederländischen Wohnungs-Exports (`vge_id`, `Lat`, `Long`, `Straat`, ...).
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(alias = "vge_id")]
    id: Option<u64>,
    #[serde(alias = "Lat")]
    lat: Option<f64>,
    #[serde(alias = "Long", alias = "lng")]
    lon: Option<f64>,
    #[serde(default, alias = "naam")]
    name: Option<TextValue>,
    #[serde(default, alias = "Straat")]
    street: Option<TextValue>,
    #[serde(default, alias = "huisnummer")]
    house_number: Option<TextValue>,
    #[serde(default, alias = "Postcode")]
    postcode: Option<TextValue>,
    #[serde(default)]
    category: Option<TextValue>,
    #[serde(default, alias = "geldig_vanaf")]
    valid_from: Option<TextValue>,
    #[serde(default, alias = "wijk_code")]
    district_code: Option<TextValue>,
    #[serde(default)]
    description: Option<TextValue>,
}

/// Textfeld, das im Export teils als Zahl vorliegt (Hausnummer, Postcode).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl TextValue {
    fn into_string(self) -> String {
        match self {
            TextValue::Text(s) => s,
            TextValue::Integer(n) => n.to_string(),
            TextValue::Float(f) => f.to_string(),
        }
    }
}

fn text(value: Option<TextValue>) -> Option<String> {
    value.map(TextValue::into_string)
}

/// Prüft, dass Breiten- und Längengrad endlich und im gültigen Bereich liegen.
fn check_coordinates(position: usize, id: u64, lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        bail!(
            "Eintrag #{} (id {}): Breitengrad {} ausserhalb von [-90, 90]",
            position,
            id,
            lat
        );
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        bail!(
            "Eintrag #{} (id {}): Laengengrad {} ausserhalb von [-180, 180]",
            position,
            id,
            lon
        );
    }
    Ok(())
}

impl RawRecord {
    /// Prüft Pflichtfelder und Wertebereiche und erzeugt den fertigen Eintrag.
    fn validate(self, position: usize) -> Result<PointRecord> {
        let Some(id) = self.id else {
            bail!("Eintrag #{}: Pflichtfeld 'id' fehlt", position);
        };
        let Some(lat) = self.lat else {
            bail!("Eintrag #{} (id {}): Pflichtfeld 'lat' fehlt", position, id);
        };
        let Some(lon) = self.lon else {
            bail!("Eintrag #{} (id {}): Pflichtfeld 'lon' fehlt", position, id);
        };

        check_coordinates(position, id, lat, lon)?;

        Ok(PointRecord {
            id,
            lat,
            lon,
            name: text(self.name),
            street: text(self.street),
            house_number: text(self.house_number),
            postcode: text(self.postcode),
            category: text(self.category),
            valid_from: text(self.valid_from),
            district_code: text(self.district_code),
            description: text(self.description),
        })
    }
}

impl Dataset {
    /// Baut einen Datensatz aus fertigen Einträgen.
    ///
    /// Schlägt bei ungültigen Koordinaten oder doppelten IDs fehl.
    pub fn from_records(records: Vec<PointRecord>) -> Result<Self> {
        let mut index_by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            check_coordinates(index, record.id, record.lat, record.lon)?;
            if let Some(previous) = index_by_id.insert(record.id, index) {
                bail!(
                    "Doppelte ID {} in Eintrag #{} (bereits in Eintrag #{})",
                    record.id,
                    index,
                    previous
                );
            }
        }

        Ok(Self {
            records,
            index_by_id,
        })
    }

    /// Parst ein JSON-Array von Einträgen und validiert jeden Eintrag.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(json).context("Datensatz ist kein gueltiges JSON-Array")?;

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                serde_json::from_value::<RawRecord>(entry)
                    .with_context(|| format!("Eintrag #{}: ungueltige Feldwerte", position))?
                    .validate(position)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// Lädt einen Datensatz aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Datensatz nicht lesbar: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Datensatz fehlerhaft: {}", path.display()))
    }

    /// Alle Einträge in Datei-Reihenfolge.
    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn der Datensatz leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sucht einen Eintrag über seine ID.
    pub fn get(&self, id: u64) -> Option<&PointRecord> {
        self.index_by_id.get(&id).map(|&index| &self.records[index])
    }

    /// Eindeutige Attributwerte als Filter-Optionen (Erstauftritts-Reihenfolge).
    pub fn distinct_values(&self, attribute: FilterAttribute) -> Vec<FilterOption> {
        derive_options(&self.records, attribute)
    }

    /// Anzahl der Einträge mit exakt diesem Attributwert.
    pub fn count_with(&self, attribute: FilterAttribute, value: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.attribute(attribute) == Some(value))
            .count()
    }

    /// Bounding-Box aller Einträge, `None` bei leerem Datensatz.
    pub fn bounds(&self) -> Option<GeoBounds> {
        let first = self.records.first()?;
        let init = GeoBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };

        Some(self.records.iter().fold(init, |b, r| GeoBounds {
            min_lat: b.min_lat.min(r.lat),
            max_lat: b.max_lat.max(r.lat),
            min_lon: b.min_lon.min(r.lon),
            max_lon: b.max_lon.max(r.lon),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_dutch_export_field_names() {
        let json = r#"[
            {"vge_id": 101, "Lat": 52.3591, "Long": 6.6387, "Postcode": "7607 AB",
             "Straat": "Grotestraat", "huisnummer": "12", "naam": null,
             "geldig_vanaf": "2019-01-01", "wijk_code": null}
        ]"#;

        let dataset = Dataset::from_json_str(json).expect("Export sollte parsebar sein");
        let record = dataset.get(101).expect("Eintrag 101 fehlt");

        assert_relative_eq!(record.lat, 52.3591);
        assert_relative_eq!(record.lon, 6.6387);
        assert_eq!(record.street.as_deref(), Some("Grotestraat"));
        assert_eq!(record.house_number.as_deref(), Some("12"));
        assert_eq!(record.valid_from.as_deref(), Some("2019-01-01"));
        assert_eq!(record.name, None);
        assert_eq!(record.district_code, None);
    }

    #[test]
    fn numeric_text_fields_are_stored_as_text() {
        let json = r#"[{"id": 1, "lat": 1.0, "lon": 2.0, "house_number": 14, "postcode": 7607}]"#;

        let dataset = Dataset::from_json_str(json).unwrap();
        let record = dataset.get(1).unwrap();

        assert_eq!(record.house_number.as_deref(), Some("14"));
        assert_eq!(record.postcode.as_deref(), Some("7607"));
    }

    #[test]
    fn missing_latitude_is_rejected_with_position_and_id() {
        let json = r#"[
            {"id": 1, "lat": 1.0, "lon": 2.0},
            {"id": 2, "lon": 2.0}
        ]"#;

        let err = Dataset::from_json_str(json).expect_err("Fehlendes lat muss scheitern");
        let msg = format!("{err:#}");

        assert!(msg.contains("#1"), "{msg}");
        assert!(msg.contains("id 2"), "{msg}");
        assert!(msg.contains("'lat'"), "{msg}");
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = Dataset::from_json_str(r#"[{"lat": 1.0, "lon": 2.0}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("'id'"));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let err = Dataset::from_json_str(r#"[{"id": 1, "lat": 91.0, "lon": 2.0}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("Breitengrad"));

        let err =
            Dataset::from_json_str(r#"[{"id": 1, "lat": 1.0, "lon": -180.5}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("Laengengrad"));
    }

    #[test]
    fn prebuilt_records_with_invalid_coordinates_are_rejected() {
        let err = Dataset::from_records(vec![PointRecord::new(1, 200.0, f64::NAN)])
            .expect_err("Ungültige Koordinaten müssen scheitern");
        assert!(format!("{err:#}").contains("Breitengrad 200"));

        let err = Dataset::from_records(vec![
            PointRecord::new(1, 52.0, 6.0),
            PointRecord::new(2, 52.0, f64::INFINITY),
        ])
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("#1"), "{msg}");
        assert!(msg.contains("Laengengrad"), "{msg}");
    }

    #[test]
    fn wrong_field_type_names_the_entry_position() {
        let json = r#"[
            {"id": 1, "lat": 1.0, "lon": 2.0},
            {"id": "x", "lat": 1.0, "lon": 2.0}
        ]"#;

        let msg = format!("{:#}", Dataset::from_json_str(json).unwrap_err());
        assert!(msg.contains("Eintrag #1"), "{msg}");
        assert!(!msg.contains("JSON-Array"), "{msg}");

        let msg = format!(
            "{:#}",
            Dataset::from_json_str(r#"[{"id": -4, "lat": 1.0, "lon": 2.0}]"#).unwrap_err()
        );
        assert!(msg.contains("Eintrag #0"), "{msg}");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 5, "lat": 1.0, "lon": 2.0},
            {"id": 5, "lat": 1.5, "lon": 2.5}
        ]"#;

        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(format!("{err:#}").contains("Doppelte ID 5"));
    }

    #[test]
    fn invalid_json_reports_context() {
        let err = Dataset::from_json_str("{ kein array").unwrap_err();
        assert!(format!("{err:#}").contains("kein gueltiges JSON-Array"));
    }

    #[test]
    fn bounds_cover_all_records() {
        let dataset = Dataset::from_records(vec![
            PointRecord::new(1, 52.0, 6.0),
            PointRecord::new(2, 53.0, 7.0),
            PointRecord::new(3, 52.5, 5.5),
        ])
        .unwrap();

        let bounds = dataset.bounds().expect("nicht leer");
        assert_relative_eq!(bounds.min_lat, 52.0);
        assert_relative_eq!(bounds.max_lat, 53.0);
        assert_relative_eq!(bounds.min_lon, 5.5);
        assert_relative_eq!(bounds.max_lon, 7.0);
        assert_relative_eq!(bounds.center()[0], 52.5);

        assert!(Dataset::default().bounds().is_none());
    }

    #[test]
    fn bundled_datasets_load() {
        let houses = Dataset::from_json_str(BUNDLED_HOUSES_JSON).expect("houses.json");
        assert!(!houses.is_empty());
        assert!(!houses.distinct_values(FilterAttribute::Street).is_empty());

        let landmarks = Dataset::from_json_str(BUNDLED_LANDMARKS_JSON).expect("landmarks.json");
        assert!(!landmarks.is_empty());
        assert!(landmarks
            .records()
            .iter()
            .all(|r| r.attribute(FilterAttribute::Category).is_some()));
    }
}
