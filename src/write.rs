// src/write.rs

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};
use tracing::{debug, info, instrument};

use crate::record::{EntityTable, OUTPUT_HEADER};

/// Write the header and one line per real entity to `w`, in table order.
/// Fields needing it are quoted. Returns the number of entity lines.
pub fn write_records<W: Write>(w: W, table: &EntityTable) -> Result<usize> {
    let mut out = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w);
    out.write_record(OUTPUT_HEADER).context("writing header")?;

    let mut written = 0;
    for record in table.iter() {
        if !record.is_entity() {
            debug!(alpha2 = %record.alpha2(), "skipping artifact row");
            continue;
        }
        let Some(fields) = record.output() else {
            continue;
        };
        out.write_record(fields)
            .with_context(|| format!("writing record {}", record.alpha2()))?;
        written += 1;
    }
    out.flush().context("flushing output")?;
    Ok(written)
}

/// Write the table to `path`, creating its directory if needed.
#[instrument(level = "info", skip(path, table), fields(path = %path.display()))]
pub fn write_file(path: &Path, table: &EntityTable) -> Result<usize> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {:?}", dir))?;
    }
    let f = fs::File::create(path).with_context(|| format!("creating {:?}", path))?;
    let written = write_records(f, table).with_context(|| format!("writing {:?}", path))?;
    info!(written, "wrote csv");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EntityRecord, COLUMN_NAMES};
    use tempfile::tempdir;

    fn record(alpha2: &str, alpha3: &str, numeric: &str) -> EntityRecord {
        let mut r = vec![String::new(); COLUMN_NAMES.len()];
        r[1] = alpha2.to_string();
        r[2] = alpha3.to_string();
        r[3] = numeric.to_string();
        EntityRecord::from_row(r).unwrap()
    }

    #[test]
    fn header_then_entities_in_order() {
        let mut table = EntityTable::new();
        table.insert(record("FR", "FRA", "250"));
        table.insert(record("DE", "DEU", "276"));

        let mut buf = Vec::new();
        let n = write_records(&mut buf, &table).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "alpha_2,alpha_3,numeric\nFR,FRA,250\nDE,DEU,276\n"
        );
    }

    #[test]
    fn placeholder_codes_excluded() {
        let mut table = EntityTable::new();
        table.insert(record("FR", "FRA", "250"));
        table.insert(EntityRecord::from_row(vec!["x".into(), "Codes".into()]).unwrap());
        table.insert(EntityRecord::from_row(vec!["".into(), "".into(), "".into()]).unwrap());
        table.insert(EntityRecord::from_row(vec!["y".into(), "Codes Codes Codes".into()]).unwrap());

        let mut buf = Vec::new();
        assert_eq!(write_records(&mut buf, &table).unwrap(), 1);
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("Codes"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn comma_in_field_is_quoted() {
        let mut table = EntityTable::new();
        table.insert(record("XK", "XKX,KOS", "383"));
        let mut buf = Vec::new();
        write_records(&mut buf, &table).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("XK,\"XKX,KOS\",383\n"));
    }

    #[test]
    fn creates_output_directory() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data").join("statoids").join("iso_3166_1.csv");
        let mut table = EntityTable::new();
        table.insert(record("JP", "JPN", "392"));

        assert_eq!(write_file(&path, &table).unwrap(), 1);
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "alpha_2,alpha_3,numeric\nJP,JPN,392\n");
    }

    #[test]
    fn unwritable_path_fails() {
        let tmp = tempdir().unwrap();
        // a regular file standing where the directory should be
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let table = EntityTable::new();
        assert!(write_file(&blocker.join("out.csv"), &table).is_err());
    }
}
