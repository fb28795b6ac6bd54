use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::errors::PortalError;
use crate::models::{PointEvent, SavingsRecord};

pub fn load_events(csv_path: &Path) -> anyhow::Result<Vec<PointEvent>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open events file {}", csv_path.display()))?;
    let events = read_events(file)
        .with_context(|| format!("failed to read events from {}", csv_path.display()))?;
    tracing::info!(path = %csv_path.display(), count = events.len(), "loaded point events");
    Ok(events)
}

pub fn load_savings(csv_path: &Path) -> anyhow::Result<Vec<SavingsRecord>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open savings file {}", csv_path.display()))?;
    let records = read_savings(file)
        .with_context(|| format!("failed to read savings from {}", csv_path.display()))?;
    tracing::info!(path = %csv_path.display(), count = records.len(), "loaded savings records");
    Ok(records)
}

pub fn read_events<R: Read>(source: R) -> anyhow::Result<Vec<PointEvent>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut events = Vec::new();

    for (line, result) in reader.deserialize::<PointEvent>().enumerate() {
        let mut event = result?;
        event.plant_name = event.plant_name.trim().to_string();
        if event.plant_name.is_empty() {
            return Err(
                PortalError::InvalidInput(format!("event row {} has no plant name", line + 1))
                    .into(),
            );
        }
        events.push(event);
    }

    Ok(events)
}

pub fn read_savings<R: Read>(source: R) -> anyhow::Result<Vec<SavingsRecord>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut records = Vec::new();

    for (line, result) in reader.deserialize::<SavingsRecord>().enumerate() {
        let mut record = result?;
        record.plant_name = record.plant_name.trim().to_string();
        validate_savings(&record)
            .with_context(|| format!("savings row {} is not usable", line + 1))?;
        records.push(record);
    }

    Ok(records)
}

fn validate_savings(record: &SavingsRecord) -> Result<(), PortalError> {
    if record.plant_name.is_empty() {
        return Err(PortalError::InvalidInput("missing plant name".to_string()));
    }
    if !(1..=12).contains(&record.month) {
        return Err(PortalError::InvalidInput(format!(
            "month {} is outside 1..=12",
            record.month
        )));
    }
    if !record.monthly.is_finite() || !record.ytd.is_finite() {
        return Err(PortalError::InvalidInput(format!(
            "savings for {} must be finite numbers",
            record.plant_name
        )));
    }
    Ok(())
}

pub fn write_events<W: Write>(sink: W, events: &[PointEvent]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_savings<W: Write>(sink: W, records: &[SavingsRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
