use std::io::Write;
use csv::WriterBuilder;
use crate::analysis::chart::ChartPoint;
use crate::utils::logging::{self, OperationCategory};

/// Write chart points as CSV with a header row.
pub fn write_chart_csv<W: Write>(writer: W, points: &[ChartPoint]) -> Result<(), csv::Error> {
    let _timing = logging::start_timing("write_chart_csv", OperationCategory::Report);
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::consumption::ConsumptionInput;

    #[test]
    fn test_header_and_rows() {
        let points = vec![
            ChartPoint::before(&ConsumptionInput::baseline()).unwrap(),
            ChartPoint::after(&ConsumptionInput::zero(), 0.0),
        ];
        let mut buffer = Vec::new();
        write_chart_csv(&mut buffer, &points).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Name,NaturalGas,Electricity,HeatingOil,Propane,Coal,Biomass,CarbonFootprint"
        );
        assert!(lines[1].starts_with("Before,100.0,100.0"));
        assert_eq!(lines[2], "After,0.0,0.0,0.0,0.0,0.0,0.0,0.0");
    }
}
