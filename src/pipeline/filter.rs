use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Feature, FeatureCollection};

/// A configurable attribute test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AttrPredicate {
    /// `column == value`
    Equals { column: String, value: String },
    /// `column` is any of `values`
    OneOf { column: String, values: Vec<String> },
}

impl AttrPredicate {
    pub fn equals(column: impl Into<String>, value: impl Into<String>) -> Self {
        AttrPredicate::Equals { column: column.into(), value: value.into() }
    }

    /// Features lacking the column, or holding a non-text value there, never match.
    pub fn matches(&self, feature: &Feature) -> bool {
        match self {
            AttrPredicate::Equals { column, value } => feature.text(column) == Some(value.as_str()),
            AttrPredicate::OneOf { column, values } => feature.text(column)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v)),
        }
    }
}

/// Keep features satisfying `predicate`, in their original order, and project
/// each onto `keep` (geometry is always retained). An empty result is valid.
pub fn filter<P, S>(collection: FeatureCollection, predicate: P, keep: &[S]) -> FeatureCollection
where
    P: Fn(&Feature) -> bool,
    S: AsRef<str>,
{
    let before = collection.len();
    let (features, shell) = collection.split();

    let features: Vec<Feature> = features.into_iter()
        .filter(|feature| predicate(feature))
        .map(|mut feature| {
            feature.project(keep);
            feature
        })
        .collect();

    info!(before, after = features.len(), "filtered features");
    shell.with_features(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attributes;
    use geo::{polygon, MultiPolygon};

    fn country(name: &str, continent: &str) -> Feature {
        let geometry = MultiPolygon::new(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)]]);
        Feature::new(Attributes::new(), geometry)
            .with("NAME", name)
            .with("CONTINENT", continent)
            .with("ISO_A3", "XXX")
    }

    fn world() -> FeatureCollection {
        vec![
            country("France", "Europe"),
            country("Japan", "Asia"),
            country("Norway", "Europe"),
            country("Chile", "South America"),
        ].into_iter().collect()
    }

    #[test]
    fn keeps_matching_features_in_order() {
        let europe = AttrPredicate::equals("CONTINENT", "Europe");
        let out = filter(world(), |f| europe.matches(f), &["NAME", "CONTINENT"]);

        let names: Vec<_> = out.iter().map(|f| f.text("NAME").unwrap()).collect();
        assert_eq!(names, ["France", "Norway"]);
        assert!(out.iter().all(|f| f.text("CONTINENT") == Some("Europe")));
        assert!(out.iter().all(|f| f.get("ISO_A3").is_none()));
    }

    #[test]
    fn no_match_is_an_empty_collection() {
        let out = filter(world(), |f| f.text("CONTINENT") == Some("Antarctica"), &["NAME"]);
        assert!(out.is_empty());
    }

    #[test]
    fn one_of_matches_any_listed_value() {
        let americas = AttrPredicate::OneOf {
            column: "CONTINENT".into(),
            values: vec!["North America".into(), "South America".into()],
        };
        let out = filter(world(), |f| americas.matches(f), &["NAME"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out.features()[0].text("NAME"), Some("Chile"));
    }

    #[test]
    fn predicate_deserializes_from_tagged_json() {
        let parsed: AttrPredicate =
            serde_json::from_str(r#"{"op":"equals","column":"CONTINENT","value":"Europe"}"#).unwrap();
        assert_eq!(parsed, AttrPredicate::equals("CONTINENT", "Europe"));
    }
}
