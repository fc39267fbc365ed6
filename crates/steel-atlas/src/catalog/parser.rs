use super::domain::{Composition, PerformanceMetrics, SteelRecord};
use super::CatalogImportError;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use tracing::debug;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SteelRecord>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<SteelRow>().enumerate() {
        let row = row?;
        let line = index + 2;

        let id = row.id.trim().to_string();
        if id.is_empty() {
            return Err(CatalogImportError::MissingId { row: line });
        }
        if !seen.insert(id.clone()) {
            return Err(CatalogImportError::DuplicateId(id));
        }

        let record = row.into_record(id);
        if !record.metrics.is_complete() {
            debug!(steel = %record.id, row = line, "steel row is missing performance ratings");
        }
        records.push(record);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SteelRow {
    id: String,
    name: String,
    producer: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    family: Option<String>,
    #[serde(rename = "C", default, deserialize_with = "lenient_number")]
    carbon: Option<f64>,
    #[serde(rename = "Cr", default, deserialize_with = "lenient_number")]
    chromium: Option<f64>,
    #[serde(rename = "V", default, deserialize_with = "lenient_number")]
    vanadium: Option<f64>,
    #[serde(rename = "Mo", default, deserialize_with = "lenient_number")]
    molybdenum: Option<f64>,
    #[serde(rename = "W", default, deserialize_with = "lenient_number")]
    tungsten: Option<f64>,
    #[serde(rename = "Co", default, deserialize_with = "lenient_number")]
    cobalt: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    edge: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    toughness: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    corrosion: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    sharpen: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ht_curve: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl SteelRow {
    fn into_record(self, id: String) -> SteelRecord {
        let percent = |value: Option<f64>| value.filter(|v| *v >= 0.0).unwrap_or(0.0);

        SteelRecord {
            id,
            name: self.name,
            producer: self.producer,
            country: self.country,
            family: self.family.map(|family| family.to_ascii_lowercase()),
            composition: Composition {
                carbon: percent(self.carbon),
                chromium: percent(self.chromium),
                vanadium: percent(self.vanadium),
                molybdenum: percent(self.molybdenum),
                tungsten: percent(self.tungsten),
                cobalt: percent(self.cobalt),
            },
            metrics: PerformanceMetrics {
                edge: self.edge,
                toughness: self.toughness,
                corrosion: self.corrosion,
                sharpen: self.sharpen,
            },
            ht_curve: self.ht_curve,
            description: self.description,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::Metric;
    use std::io::Cursor;

    const HEADER: &str =
        "id,name,producer,country,family,C,Cr,V,Mo,W,Co,edge,toughness,corrosion,sharpen,ht_curve,description\n";

    #[test]
    fn parses_full_row() {
        let csv = format!(
            "{HEADER}cpm-magnacut,CPM MagnaCut,Crucible,USA,Stainless,1.15,10.7,4,2,,,7,7,9,6,\"150:64,200:63\",Balanced stainless\n"
        );
        let records = parse_records(Cursor::new(csv)).expect("parse");

        assert_eq!(records.len(), 1);
        let steel = &records[0];
        assert_eq!(steel.id, "cpm-magnacut");
        assert_eq!(steel.family.as_deref(), Some("stainless"));
        assert_eq!(steel.composition.vanadium, 4.0);
        assert_eq!(steel.composition.tungsten, 0.0);
        assert_eq!(steel.metric(Metric::Corrosion), 9.0);
        assert_eq!(steel.ht_curve.as_deref(), Some("150:64,200:63"));
    }

    #[test]
    fn blank_and_garbage_metrics_are_absent() {
        let csv = format!("{HEADER}x,X,Acme,,,,,,,,,  ,n/a,5,5,,\n");
        let records = parse_records(Cursor::new(csv)).expect("parse");

        let steel = &records[0];
        assert_eq!(steel.metrics.edge, None);
        assert_eq!(steel.metrics.toughness, None);
        assert_eq!(steel.metrics.corrosion, Some(5.0));
        assert!(steel.country.is_none());
        assert!(steel.ht_curve.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let csv = format!("{HEADER}a,A,Acme,,,,,,,,,1,1,1,1,,\na,A2,Acme,,,,,,,,,1,1,1,1,,\n");
        let error = parse_records(Cursor::new(csv)).expect_err("duplicate");
        match error {
            CatalogImportError::DuplicateId(id) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn rejects_rows_without_id() {
        let csv = format!("{HEADER}a,A,Acme,,,,,,,,,1,1,1,1,,\n,B,Acme,,,,,,,,,1,1,1,1,,\n");
        let error = parse_records(Cursor::new(csv)).expect_err("missing id");
        assert!(matches!(error, CatalogImportError::MissingId { row: 3 }));
    }
}
