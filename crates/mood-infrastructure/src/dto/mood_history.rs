//! On-disk representation of the mood history.
//!
//! The document is a single object holding a named list of records:
//!
//! ```json
//! {
//!   "moodDataList": [
//!     { "day": "Monday", "sadValue": 1.2, "surprisedValue": 0.3, "neutralValue": 0.8 }
//!   ]
//! }
//! ```

use mood_core::mood::MoodRecord;
use serde::{Deserialize, Serialize};

/// One stored session record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecordDto {
    pub day: String,
    pub sad_value: f32,
    pub surprised_value: f32,
    pub neutral_value: f32,
}

/// The whole history file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodHistoryDto {
    #[serde(default)]
    pub mood_data_list: Vec<MoodRecordDto>,
}

impl From<MoodRecordDto> for MoodRecord {
    fn from(dto: MoodRecordDto) -> Self {
        MoodRecord::new(dto.day, dto.sad_value, dto.surprised_value, dto.neutral_value)
    }
}

impl From<&MoodRecord> for MoodRecordDto {
    fn from(record: &MoodRecord) -> Self {
        Self {
            day: record.day.clone(),
            sad_value: record.sad_value,
            surprised_value: record.surprised_value,
            neutral_value: record.neutral_value,
        }
    }
}

impl MoodHistoryDto {
    pub fn into_records(self) -> Vec<MoodRecord> {
        self.mood_data_list.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_camel_case_document() {
        let json = r#"{
            "moodDataList": [
                { "day": "Friday", "sadValue": 1.25, "surprisedValue": 0.5, "neutralValue": 0.75 }
            ]
        }"#;
        let dto: MoodHistoryDto = serde_json::from_str(json).unwrap();
        let records = dto.into_records();
        assert_eq!(records, vec![MoodRecord::new("Friday", 1.25, 0.5, 0.75)]);
    }

    #[test]
    fn test_writes_camel_case_keys() {
        let dto = MoodHistoryDto {
            mood_data_list: vec![(&MoodRecord::new("Sunday", 0.0, 0.25, 0.5)).into()],
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("\"moodDataList\""));
        assert!(json.contains("\"surprisedValue\":0.25"));
    }

    #[test]
    fn test_missing_list_is_empty_history() {
        let dto: MoodHistoryDto = serde_json::from_str("{}").unwrap();
        assert!(dto.mood_data_list.is_empty());
    }
}
