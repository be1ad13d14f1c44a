//! Filter-Modell: Filter-Attribut, Filter-Optionen, aktive Auswahl und Sichtbarkeits-Prädikat.

use super::PointRecord;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Welches Attribut eines Eintrags gegen den aktiven Filter geprüft wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAttribute {
    /// Straßenname (Werte werden aus dem Datensatz abgeleitet)
    #[default]
    Street,
    /// Kategorie (typisch: feste Options-Liste aus der Konfiguration)
    Category,
}

impl FilterAttribute {
    /// Überschrift der Filter-Leiste.
    pub fn heading(self) -> &'static str {
        match self {
            FilterAttribute::Street => "Filtern nach Straße:",
            FilterAttribute::Category => "Filtern nach Kategorie:",
        }
    }
}

/// Eine auswählbare Filter-Option (Checkbox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Rohwert, der mit dem Filter-Attribut verglichen wird
    pub value: String,
    /// Anzeigetext
    pub label: String,
}

impl FilterOption {
    /// Erstellt eine Option mit eigenem Anzeigetext.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Erstellt eine Option, deren Anzeigetext dem Wert entspricht.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Aktiver Filterzustand: entweder alles anzeigen oder genau ein Wert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// Kein Filter aktiv
    #[default]
    ShowAll,
    /// Nur Einträge mit exakt diesem Attributwert
    Only(String),
}

impl FilterSelection {
    /// Single-Select mit Abwahl.
    ///
    /// Ist `value` bereits aktiv, wird auf `ShowAll` zurückgeschaltet,
    /// sonst ersetzt `value` die bisherige Auswahl. Unbekannte Werte werden
    /// angenommen und treffen schlicht keinen Eintrag.
    pub fn toggle(&mut self, value: &str) {
        *self = match self {
            FilterSelection::Only(active) if active == value => FilterSelection::ShowAll,
            _ => FilterSelection::Only(value.to_string()),
        };
    }

    /// Gibt `true` zurück, wenn `value` die aktive Auswahl ist (Checkbox-Zustand).
    pub fn is_selected(&self, value: &str) -> bool {
        matches!(self, FilterSelection::Only(active) if active == value)
    }

    /// Aktiver Filterwert, `None` bei `ShowAll`.
    pub fn active_value(&self) -> Option<&str> {
        match self {
            FilterSelection::ShowAll => None,
            FilterSelection::Only(value) => Some(value),
        }
    }
}

/// Sichtbarkeits-Prädikat der Kartenansicht.
///
/// `ShowAll` zeigt jeden Eintrag; ein konkreter Wert zeigt nur Einträge,
/// deren Attribut exakt gleich ist. Einträge ohne Attribut bleiben dann verborgen.
pub fn is_visible(
    record: &PointRecord,
    attribute: FilterAttribute,
    selection: &FilterSelection,
) -> bool {
    match selection {
        FilterSelection::ShowAll => true,
        FilterSelection::Only(value) => record.attribute(attribute) == Some(value.as_str()),
    }
}

/// Leitet die Filter-Optionen aus den eindeutigen Attributwerten ab.
///
/// Reihenfolge: erstes Auftreten im Datensatz. Einträge ohne Attribut tragen nichts bei.
pub fn derive_options<'a>(
    records: impl IntoIterator<Item = &'a PointRecord>,
    attribute: FilterAttribute,
) -> Vec<FilterOption> {
    let distinct: IndexSet<&str> = records
        .into_iter()
        .filter_map(|r| r.attribute(attribute))
        .collect();

    distinct.into_iter().map(FilterOption::from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PointRecord> {
        vec![
            PointRecord::new(1, 52.0, 6.0).with_street("Main"),
            PointRecord::new(2, 52.1, 6.1).with_street("Oak"),
            PointRecord::new(3, 52.2, 6.2).with_street("Main"),
            PointRecord::new(4, 52.3, 6.3),
        ]
    }

    #[test]
    fn show_all_makes_every_record_visible() {
        for record in sample_records() {
            assert!(is_visible(
                &record,
                FilterAttribute::Street,
                &FilterSelection::ShowAll
            ));
        }
    }

    #[test]
    fn concrete_filter_matches_attribute_exactly() {
        let selection = FilterSelection::Only("Main".to_string());
        let visible: Vec<u64> = sample_records()
            .iter()
            .filter(|r| is_visible(r, FilterAttribute::Street, &selection))
            .map(|r| r.id)
            .collect();

        assert_eq!(visible, vec![1, 3]);
    }

    #[test]
    fn record_without_attribute_is_hidden_under_concrete_filter() {
        let record = PointRecord::new(4, 52.3, 6.3);
        let selection = FilterSelection::Only(String::new());

        assert!(!is_visible(&record, FilterAttribute::Street, &selection));
    }

    #[test]
    fn toggle_twice_restores_previous_selection() {
        let mut selection = FilterSelection::ShowAll;
        selection.toggle("Oak");
        selection.toggle("Oak");
        assert_eq!(selection, FilterSelection::ShowAll);

        let mut selection = FilterSelection::Only("Oak".to_string());
        selection.toggle("Oak");
        selection.toggle("Oak");
        assert_eq!(selection, FilterSelection::Only("Oak".to_string()));
    }

    #[test]
    fn toggle_pair_from_other_value_ends_in_show_all() {
        let mut selection = FilterSelection::Only("Main".to_string());
        selection.toggle("Oak");
        selection.toggle("Oak");

        // Die vorherige Auswahl "Main" wird nicht wiederhergestellt
        assert_eq!(selection, FilterSelection::ShowAll);
    }

    #[test]
    fn toggle_replaces_prior_value() {
        let mut selection = FilterSelection::default();
        selection.toggle("Main");
        selection.toggle("Oak");

        assert_eq!(selection, FilterSelection::Only("Oak".to_string()));
        assert!(selection.is_selected("Oak"));
        assert!(!selection.is_selected("Main"));
    }

    #[test]
    fn toggle_accepts_unknown_value() {
        let mut selection = FilterSelection::default();
        selection.toggle("Nergensstraat");

        assert_eq!(selection.active_value(), Some("Nergensstraat"));
        assert!(sample_records()
            .iter()
            .all(|r| !is_visible(r, FilterAttribute::Street, &selection)));
    }

    #[test]
    fn derived_options_keep_first_seen_order_without_duplicates() {
        let records = sample_records();
        let options = derive_options(&records, FilterAttribute::Street);

        assert_eq!(
            options,
            vec![FilterOption::from_value("Main"), FilterOption::from_value("Oak")]
        );
    }

    #[test]
    fn derived_options_for_missing_attribute_are_empty() {
        let records = sample_records();
        assert!(derive_options(&records, FilterAttribute::Category).is_empty());
    }
}
