use std::io::Error;
use std::path::Path;

/// Writes `rows` discount requests cycling through percentages 0..=99.
pub fn generate_discount_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["price", "discount_percent"])?;

    for i in 0..rows {
        wtr.write_record([(i + 1).to_string(), (i % 100).to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
