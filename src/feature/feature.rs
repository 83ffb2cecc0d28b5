use std::collections::BTreeMap;

use geo::MultiPolygon;

use crate::{Error, Result};
use super::{schema::NAME_COLUMN, AttrValue};

/// Attribute table row, ordered by column name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// One geographic entity: an attribute row plus its polygon geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub attributes: Attributes,
    pub geometry: MultiPolygon<f64>,
}

impl Feature {
    pub fn new(attributes: Attributes, geometry: MultiPolygon<f64>) -> Self {
        Self { attributes, geometry }
    }

    /// Builder-style attribute insert, mostly for constructing fixtures.
    pub fn with(mut self, column: &str, value: impl Into<AttrValue>) -> Self {
        self.set(column, value);
        self
    }

    #[inline] pub fn get(&self, column: &str) -> Option<&AttrValue> { self.attributes.get(column) }

    #[inline]
    pub fn set(&mut self, column: &str, value: impl Into<AttrValue>) {
        self.attributes.insert(column.to_string(), value.into());
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(AttrValue::as_str)
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(AttrValue::as_f64)
    }

    /// Text value of `column`, used as a lookup key.
    /// A missing value is an error labelled through `name_column`.
    pub fn key(&self, column: &str, name_column: &str) -> Result<&str> {
        self.text(column).ok_or_else(|| self.missing(column, name_column))
    }

    /// Numeric value of `column`, or a `MissingAttribute` error naming this feature.
    pub fn require_number(&self, column: &str, name_column: &str) -> Result<f64> {
        self.number(column).ok_or_else(|| self.missing(column, name_column))
    }

    /// A human-readable handle for log and error messages: the value of
    /// `name_column` if present, else the first text attribute, else `"<unnamed>"`.
    pub fn label(&self, name_column: &str) -> String {
        self.text(name_column)
            .or_else(|| self.attributes.values().find_map(AttrValue::as_str))
            .unwrap_or("<unnamed>")
            .to_string()
    }

    fn missing(&self, column: &str, name_column: &str) -> Error {
        Error::MissingAttribute { feature: self.label(name_column), column: column.to_string() }
    }

    /// Keep only the listed columns; geometry is untouched.
    pub(crate) fn project<S: AsRef<str>>(&mut self, keep: &[S]) {
        self.attributes.retain(|column, _| keep.iter().any(|k| k.as_ref() == column));
    }
}

/// An ordered sequence of features plus the dataset's projection, if known.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    crs: Option<String>, // WKT from the .prj sidecar
    /// Column that names features in logs and errors.
    name_column: String,
}

impl Default for FeatureCollection {
    fn default() -> Self { Self::new(Vec::new(), None) }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>, crs: Option<String>) -> Self {
        Self { features, crs, name_column: NAME_COLUMN.to_string() }
    }

    /// Label features by `column` instead of Natural Earth's `NAME`.
    pub fn with_name_column(mut self, column: &str) -> Self {
        self.name_column = column.to_string();
        self
    }

    #[inline] pub fn name_column(&self) -> &str { &self.name_column }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[Feature] { &self.features }

    #[inline] pub fn iter(&self) -> std::slice::Iter<'_, Feature> { self.features.iter() }

    /// Projection WKT read from the dataset, if it had one.
    #[inline] pub fn crs(&self) -> Option<&str> { self.crs.as_deref() }

    /// Take the features out, leaving an empty collection that still carries
    /// the projection and name column. Stages rebuild with [`Self::with_features`].
    pub(crate) fn split(mut self) -> (Vec<Feature>, Self) {
        (std::mem::take(&mut self.features), self)
    }

    pub(crate) fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    /// Find a feature by its text value in `column`.
    pub fn find(&self, column: &str, value: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.text(column) == Some(value))
    }

    /// Sum of a numeric column, skipping features where it is absent.
    pub fn sum(&self, column: &str) -> f64 {
        self.features.iter().filter_map(|f| f.number(column)).sum()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), None)
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.into_iter() }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}
