#[cfg(test)]
mod model_tests {
    use crate::models::{
        AddOutcome, CatalogEntry, City, Notice, NoticeEvent, NoticeKind, RemoveOutcome,
        ReorderOutcome,
    };

    fn seoul() -> City {
        City::new("1", "Seoul", "Asia/Seoul")
    }

    #[test]
    fn test_city_serializes_with_persisted_field_names() {
        let json = serde_json::to_string(&seoul()).unwrap();
        assert_eq!(json, r#"{"id":"1","city":"Seoul","timezone":"Asia/Seoul"}"#);
    }

    #[test]
    fn test_city_deserializes_ignoring_extra_fields() {
        let json = r#"{"id":"2","city":"Tokyo","country":"Japan","timezone":"Asia/Tokyo"}"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city, City::new("2", "Tokyo", "Asia/Tokyo"));
    }

    #[test]
    fn test_city_rejects_missing_fields() {
        let json = r#"{"id":"2","city":"Tokyo"}"#;
        assert!(serde_json::from_str::<City>(json).is_err());
    }

    #[test]
    fn test_catalog_entry_converts_to_city() {
        let entry = CatalogEntry {
            city: seoul(),
            country: "South Korea".to_string(),
        };
        assert_eq!(entry.id(), "1");
        assert_eq!(entry.display_name(), "Seoul");
        assert_eq!(entry.time_zone(), "Asia/Seoul");
        assert_eq!(City::from(&entry), seoul());
    }

    #[test]
    fn test_notice_for_add_outcomes() {
        let added = Notice::for_add(&AddOutcome::Added(seoul())).unwrap();
        assert_eq!(added.event, NoticeEvent::Added);
        assert_eq!(added.kind(), NoticeKind::Success);
        assert_eq!(added.title(), "City Added");
        assert_eq!(added.message(), "Seoul added to world clock");

        let duplicate = Notice::for_add(&AddOutcome::AlreadyPresent(seoul())).unwrap();
        assert_eq!(duplicate.kind(), NoticeKind::Info);
        assert_eq!(duplicate.title(), "Already Added");
        assert_eq!(duplicate.message(), "Seoul is already in your world clock");

        assert!(Notice::for_add(&AddOutcome::Queued).is_none());
    }

    #[test]
    fn test_notice_for_remove_outcomes() {
        let removed = Notice::for_remove(&RemoveOutcome::Removed(seoul())).unwrap();
        assert_eq!(removed.kind(), NoticeKind::Success);
        assert_eq!(removed.title(), "City Removed");
        assert_eq!(removed.message(), "Seoul removed from world clock");

        assert!(Notice::for_remove(&RemoveOutcome::NotFound).is_none());
        assert!(Notice::for_remove(&RemoveOutcome::Queued).is_none());
    }

    #[test]
    fn test_outcome_mutation_flags() {
        assert!(AddOutcome::Added(seoul()).is_mutation());
        assert!(!AddOutcome::AlreadyPresent(seoul()).is_mutation());
        assert!(RemoveOutcome::Removed(seoul()).is_mutation());
        assert!(!RemoveOutcome::NotFound.is_mutation());
        assert!(ReorderOutcome::Reordered.is_mutation());
        assert!(!ReorderOutcome::Rejected.is_mutation());
        assert!(!ReorderOutcome::Queued.is_mutation());
    }
}
