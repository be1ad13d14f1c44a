//! Einzelner Kartenpunkt (Wohnung oder Landmarke) aus dem Datensatz.

use super::filter::FilterAttribute;

/// Ein unveränderlicher Datensatz-Eintrag mit Position und optionalen Attributen.
///
/// Pflichtfelder sind `id`, `lat` und `lon`; alle beschreibenden Felder sind
/// optional und werden in der Detailansicht nur angezeigt, wenn sie vorhanden sind.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    /// Eindeutige ID innerhalb des Datensatzes
    pub id: u64,
    /// Breitengrad in Grad (-90..=90)
    pub lat: f64,
    /// Längengrad in Grad (-180..=180)
    pub lon: f64,
    /// Anzeigename (z.B. Gebäudename)
    pub name: Option<String>,
    /// Straßenname (Filter-Attribut der Wohnungs-Variante)
    pub street: Option<String>,
    /// Hausnummer inkl. Zusatz
    pub house_number: Option<String>,
    /// Postleitzahl
    pub postcode: Option<String>,
    /// Kategorie (Filter-Attribut der Landmarken-Variante)
    pub category: Option<String>,
    /// Gültig-ab-Datum als Freitext
    pub valid_from: Option<String>,
    /// Wijk-/Bezirkscode
    pub district_code: Option<String>,
    /// Freitext-Beschreibung
    pub description: Option<String>,
}

/// Eine Zeile der Detailansicht: Beschriftung und Wert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl PointRecord {
    /// Erstellt einen Eintrag ohne optionale Attribute.
    pub fn new(id: u64, lat: f64, lon: f64) -> Self {
        Self {
            id,
            lat,
            lon,
            name: None,
            street: None,
            house_number: None,
            postcode: None,
            category: None,
            valid_from: None,
            district_code: None,
            description: None,
        }
    }

    /// Setzt den Straßennamen (Builder-Stil, v.a. für Tests und Benches).
    pub fn with_street(mut self, street: &str) -> Self {
        self.street = Some(street.to_string());
        self
    }

    /// Setzt die Kategorie (Builder-Stil).
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Setzt den Anzeigenamen (Builder-Stil).
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Liefert das Filter-Attribut des Eintrags, sofern gesetzt.
    pub fn attribute(&self, attribute: FilterAttribute) -> Option<&str> {
        match attribute {
            FilterAttribute::Street => self.street.as_deref(),
            FilterAttribute::Category => self.category.as_deref(),
        }
    }

    /// Überschrift für Detailansicht und Tooltip.
    ///
    /// "Straße Hausnummer", sonst Name, sonst `#id`.
    /// Leere oder nur aus Leerzeichen bestehende Felder zählen als fehlend.
    pub fn title(&self) -> String {
        let street = non_blank(&self.street);
        let number = non_blank(&self.house_number);
        match (street, number, non_blank(&self.name)) {
            (Some(street), Some(number), _) => format!("{} {}", street, number),
            (Some(street), None, _) => street.to_string(),
            (None, _, Some(name)) => name.to_string(),
            (None, _, None) => format!("#{}", self.id),
        }
    }

    /// Alle vorhandenen optionalen Felder in Anzeige-Reihenfolge.
    ///
    /// Fehlende Felder werden ausgelassen, nicht als leere Zeile geliefert.
    pub fn detail_fields(&self) -> Vec<DetailField> {
        let candidates: [(&'static str, &Option<String>); 8] = [
            ("Straße", &self.street),
            ("Hausnummer", &self.house_number),
            ("Postcode", &self.postcode),
            ("Name", &self.name),
            ("Kategorie", &self.category),
            ("Gültig ab", &self.valid_from),
            ("Wijk-Code", &self.district_code),
            ("Beschreibung", &self.description),
        ];

        candidates
            .into_iter()
            .filter_map(|(label, value)| {
                non_blank(value).map(|v| DetailField {
                    label,
                    value: v.to_string(),
                })
            })
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_fields_omit_absent_values() {
        let mut record = PointRecord::new(7, 52.36, 6.64).with_street("Wierdensestraat");
        record.house_number = Some("12a".to_string());
        record.postcode = Some("7607 GH".to_string());
        record.valid_from = None;
        record.name = Some("   ".to_string());

        let labels: Vec<&str> = record.detail_fields().iter().map(|f| f.label).collect();

        assert_eq!(labels, vec!["Straße", "Hausnummer", "Postcode"]);
    }

    #[test]
    fn title_prefers_street_and_number_then_name_then_id() {
        let mut record = PointRecord::new(3, 0.0, 0.0).with_street("Oak");
        record.house_number = Some("5".to_string());
        assert_eq!(record.title(), "Oak 5");

        let named = PointRecord::new(4, 0.0, 0.0).with_name("Stadhuis");
        assert_eq!(named.title(), "Stadhuis");

        assert_eq!(PointRecord::new(9, 0.0, 0.0).title(), "#9");
    }

    #[test]
    fn title_skips_blank_street_and_number() {
        let mut record = PointRecord::new(11, 0.0, 0.0).with_street("  ");
        record.house_number = Some("12".to_string());
        assert_eq!(record.title(), "#11");

        record.name = Some("Molen".to_string());
        assert_eq!(record.title(), "Molen");

        record.street = Some("Oak".to_string());
        record.house_number = Some(String::new());
        assert_eq!(record.title(), "Oak");
    }

    #[test]
    fn attribute_reads_configured_field() {
        let record = PointRecord::new(1, 0.0, 0.0)
            .with_street("Main")
            .with_category("museum");

        assert_eq!(record.attribute(FilterAttribute::Street), Some("Main"));
        assert_eq!(record.attribute(FilterAttribute::Category), Some("museum"));
        assert_eq!(
            PointRecord::new(2, 0.0, 0.0).attribute(FilterAttribute::Street),
            None
        );
    }
}
