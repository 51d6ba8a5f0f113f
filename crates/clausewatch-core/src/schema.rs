/// Arrow schemas and RecordBatch conversion for analysis results.
pub mod alerts {
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Date32Array, Float32Array, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::error::ArrowError;
    use arrow::record_batch::RecordBatch;
    use chrono::NaiveDate;

    use crate::alert::AnalysisResult;

    /// Schema for risk alerts, one row per (sentence, risk type).
    pub fn risk_alert_schema() -> Schema {
        Schema::new(vec![
            Field::new("document_name", DataType::Utf8, false),
            Field::new("risk_type", DataType::Utf8, false),
            Field::new("source_sentence", DataType::Utf8, false),
            Field::new("confidence", DataType::Float32, false),
        ])
    }

    /// Schema for deadline alerts, one row per resolved deadline.
    pub fn deadline_alert_schema() -> Schema {
        Schema::new(vec![
            Field::new("document_name", DataType::Utf8, false),
            Field::new("event_label", DataType::Utf8, false),
            Field::new("kind", DataType::Utf8, false),
            Field::new("deadline", DataType::Date32, false),
            Field::new("status", DataType::Utf8, false),
            Field::new("days_remaining", DataType::Int64, false),
            Field::new("source_sentence", DataType::Utf8, false),
        ])
    }

    pub fn risk_alerts_batch(result: &AnalysisResult) -> Result<RecordBatch, ArrowError> {
        let alerts = &result.risk_alerts;
        let columns: Vec<ArrayRef> = vec![
            document_column(result, alerts.len()),
            utf8(alerts.iter().map(|a| a.risk_type.as_str())),
            utf8(alerts.iter().map(|a| a.source_sentence.as_str())),
            Arc::new(Float32Array::from_iter_values(
                alerts.iter().map(|a| a.confidence),
            )),
        ];
        RecordBatch::try_new(Arc::new(risk_alert_schema()), columns)
    }

    pub fn deadline_alerts_batch(result: &AnalysisResult) -> Result<RecordBatch, ArrowError> {
        let alerts = &result.deadline_alerts;
        let columns: Vec<ArrayRef> = vec![
            document_column(result, alerts.len()),
            utf8(alerts.iter().map(|a| a.event_label.as_str())),
            utf8(alerts.iter().map(|a| a.kind.as_str())),
            Arc::new(Date32Array::from_iter_values(
                alerts.iter().map(|a| days_since_epoch(a.deadline)),
            )),
            utf8(alerts.iter().map(|a| a.status.as_str())),
            Arc::new(Int64Array::from_iter_values(
                alerts.iter().map(|a| a.days_remaining),
            )),
            utf8(alerts.iter().map(|a| a.source_sentence.as_str())),
        ];
        RecordBatch::try_new(Arc::new(deadline_alert_schema()), columns)
    }

    fn document_column(result: &AnalysisResult, rows: usize) -> ArrayRef {
        Arc::new(StringArray::from(vec![result.document_name.as_str(); rows]))
    }

    fn utf8<'a>(values: impl Iterator<Item = &'a str>) -> ArrayRef {
        Arc::new(StringArray::from_iter_values(values))
    }

    /// Arrow `Date32` value: days since 1970-01-01.
    fn days_since_epoch(date: NaiveDate) -> i32 {
        // NaiveDate::default() is the Unix epoch.
        date.signed_duration_since(NaiveDate::default()).num_days() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::alerts;
    use crate::engine::Engine;
    use arrow::array::{Array, Date32Array, Int64Array, StringArray};
    use chrono::NaiveDate;

    #[test]
    fn risk_alert_schema_has_expected_fields() {
        let schema = alerts::risk_alert_schema();
        assert_eq!(schema.fields().len(), 4);
        assert!(schema.field_with_name("risk_type").is_ok());
        assert!(schema.field_with_name("confidence").is_ok());
    }

    #[test]
    fn deadline_alert_schema_has_expected_fields() {
        let schema = alerts::deadline_alert_schema();
        assert_eq!(schema.fields().len(), 7);
        assert!(schema.field_with_name("deadline").is_ok());
        assert!(schema.field_with_name("days_remaining").is_ok());
    }

    #[test]
    fn batches_mirror_result() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let result = Engine::pt_br().process_contract(
            "A multa deverá ser paga em até 30 dias corridos. Sem prazo aqui.",
            "c.pdf",
            today,
        );

        let risks = alerts::risk_alerts_batch(&result).unwrap();
        assert_eq!(risks.num_rows(), result.risk_alerts.len());

        let deadlines = alerts::deadline_alerts_batch(&result).unwrap();
        assert_eq!(deadlines.num_rows(), 1);

        let dates = deadlines
            .column_by_name("deadline")
            .unwrap()
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        assert_eq!(
            dates.value_as_date(0),
            NaiveDate::from_ymd_opt(2025, 1, 31)
        );

        let status = deadlines
            .column_by_name("status")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(status.value(0), "upcoming");

        let remaining = deadlines
            .column_by_name("days_remaining")
            .unwrap()
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(remaining.value(0), 30);
        assert!(!remaining.is_null(0));
    }

    #[test]
    fn empty_result_gives_empty_batches() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let result = Engine::pt_br().process_contract("", "vazio", today);
        assert_eq!(alerts::risk_alerts_batch(&result).unwrap().num_rows(), 0);
        assert_eq!(alerts::deadline_alerts_batch(&result).unwrap().num_rows(), 0);
    }
}
