use std::path::Path;

pub fn write_properties_csv(
    path: &Path,
    rows: &[(&str, &str, &str, &str, &str)],
) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["id", "nightly_price", "cleaning_fee", "service_fee", "currency"])?;
    for (id, nightly, cleaning, service, currency) in rows {
        wtr.write_record([id, nightly, cleaning, service, currency])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_reservations_csv(path: &Path, rows: &[(&str, &str, &str, &str)]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["property_id", "start", "end", "status"])?;
    for (property_id, start, end, status) in rows {
        wtr.write_record([property_id, start, end, status])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_requests_csv(path: &Path, rows: &[(&str, &str, &str, &str)]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["property_id", "start_date", "end_date", "guests"])?;
    for (property_id, start, end, guests) in rows {
        wtr.write_record([property_id, start, end, guests])?;
    }
    wtr.flush()?;
    Ok(())
}
