//! Shared fixtures: a tiny synthetic world written as a real shapefile.
#![allow(dead_code)]

use std::{fs::File, io::Write, path::{Path, PathBuf}};

use shapefile::{
    dbase::{FieldName, FieldValue, Record, TableWriterBuilder},
    Point, Polygon, PolygonRing,
};

pub const LAYER: &str = "tiny_world";

pub struct Country {
    pub name: &'static str,
    pub continent: &'static str,
    pub subregion: &'static str,
    pub population: f64,
    /// Lower-left corner of a unit square.
    pub origin: (f64, f64),
}

/// Countries A and B are adjacent unit squares in "West", C lies far away in
/// "East", and D is outside Europe.
pub fn tiny_world() -> Vec<Country> {
    vec![
        Country { name: "A", continent: "Europe", subregion: "West", population: 100.0, origin: (0.0, 0.0) },
        Country { name: "B", continent: "Europe", subregion: "West", population: 300.0, origin: (1.0, 0.0) },
        Country { name: "C", continent: "Europe", subregion: "East", population: 50.0, origin: (50.0, 50.0) },
        Country { name: "D", continent: "Asia", subregion: "Eastern Asia", population: 9000.0, origin: (3.0, 3.0) },
    ]
}

/// Clockwise unit square, the shapefile convention for exterior rings.
fn unit_square(x0: f64, y0: f64) -> Polygon {
    Polygon::new(PolygonRing::Outer(vec![
        Point { x: x0, y: y0 },
        Point { x: x0, y: y0 + 1.0 },
        Point { x: x0 + 1.0, y: y0 + 1.0 },
        Point { x: x0 + 1.0, y: y0 },
        Point { x: x0, y: y0 },
    ]))
}

fn field(name: &str) -> FieldName {
    FieldName::try_from(name).unwrap()
}

/// Write `countries` as `<dir>/<LAYER>.shp` (+ `.shx`, `.dbf`, `.prj`).
pub fn write_shapefile(dir: &Path, countries: &[Country]) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let shp_path = dir.join(format!("{LAYER}.shp"));

    let table = TableWriterBuilder::new()
        .add_character_field(field("NAME"), 40)
        .add_character_field(field("CONTINENT"), 40)
        .add_character_field(field("SUBREGION"), 40)
        .add_character_field(field("ISO_A3"), 3)
        .add_numeric_field(field("POP_EST"), 18, 1);

    let mut writer = shapefile::Writer::from_path(&shp_path, table).unwrap();
    for country in countries {
        let mut record = Record::default();
        record.insert("NAME".into(), FieldValue::Character(Some(country.name.into())));
        record.insert("CONTINENT".into(), FieldValue::Character(Some(country.continent.into())));
        record.insert("SUBREGION".into(), FieldValue::Character(Some(country.subregion.into())));
        record.insert("ISO_A3".into(), FieldValue::Character(Some("XXX".into())));
        record.insert("POP_EST".into(), FieldValue::Numeric(Some(country.population)));

        let (x0, y0) = country.origin;
        writer.write_shape_and_record(&unit_square(x0, y0), &record).unwrap();
    }
    drop(writer);

    std::fs::write(shp_path.with_extension("prj"), "GEOGCS[\"GCS_WGS_1984\"]").unwrap();
    shp_path
}

/// Zip every file of the layer in `dir` into `zip_path`.
pub fn zip_layer(dir: &Path, zip_path: &Path) {
    let mut zip = zip::ZipWriter::new(File::create(zip_path).unwrap());
    for ext in ["shp", "shx", "dbf", "prj"] {
        let path = dir.join(format!("{LAYER}.{ext}"));
        if !path.exists() {
            continue;
        }
        zip.start_file(format!("{LAYER}.{ext}"), zip::write::SimpleFileOptions::default()).unwrap();
        zip.write_all(&std::fs::read(&path).unwrap()).unwrap();
    }
    zip.finish().unwrap();
}

/// Build the zipped tiny world inside `root`, returning the archive path.
pub fn tiny_world_archive(root: &Path) -> PathBuf {
    let staging = root.join("staging");
    write_shapefile(&staging, &tiny_world());
    let zip_path = root.join("tiny_world.zip");
    zip_layer(&staging, &zip_path);
    zip_path
}
