#[cfg(test)]
mod tests {
    use trueka_board::*;
    use trueka_core::{KindFilter, SkillEntry, SkillKind, SkillMatch};

    fn board() -> Vec<SkillEntry> {
        vec![
            SkillEntry::offer("Guitarra", "Ana"),
            SkillEntry::seek("Cocina", "Beto"),
            SkillEntry::offer("Yoga", "Carla"),
            SkillEntry::seek("guitarra", "Luis"),
            SkillEntry::offer("cocina", "Dani"),
        ]
    }

    fn pair(skill: &str, seeker: &str, offerer: &str) -> SkillMatch {
        SkillMatch {
            skill: skill.into(),
            seeker: seeker.into(),
            offerer: offerer.into(),
        }
    }

    // ── Filter ─────────────────────────────────────────────────

    mod filtering {
        use super::*;

        #[test]
        fn test_all_is_identity() {
            let entries = board();
            let view = filter(&entries, KindFilter::All);
            assert_eq!(view.len(), entries.len());
            assert!(view.iter().zip(&entries).all(|(a, b)| *a == b));
        }

        #[test]
        fn test_only_offers_preserves_order() {
            let entries = board();
            let view = filter(&entries, KindFilter::Only(SkillKind::Offer));
            let users: Vec<&str> = view.iter().map(|e| e.user.as_str()).collect();
            assert_eq!(users, ["Ana", "Carla", "Dani"]);
            assert!(view.iter().all(|e| e.kind == SkillKind::Offer));
        }

        #[test]
        fn test_only_seeks() {
            let entries = board();
            let view = filter(&entries, SkillKind::Seek.into());
            let users: Vec<&str> = view.iter().map(|e| e.user.as_str()).collect();
            assert_eq!(users, ["Beto", "Luis"]);
        }

        #[test]
        fn test_empty_list() {
            assert!(filter(&[], KindFilter::All).is_empty());
            assert!(filter(&[], KindFilter::Only(SkillKind::Offer)).is_empty());
            assert!(filter(&[], KindFilter::Only(SkillKind::Seek)).is_empty());
        }

        #[test]
        fn test_count_by_kind() {
            let counts = count_by_kind(&board());
            assert_eq!(counts, KindCounts { offers: 3, seeks: 2 });
            assert_eq!(count_by_kind(&[]), KindCounts::default());
        }
    }

    // ── Matching ───────────────────────────────────────────────

    mod matching {
        use super::*;

        #[test]
        fn test_case_insensitive_match_uses_seeker_spelling() {
            let entries = vec![
                SkillEntry::offer("Guitarra", "Ana"),
                SkillEntry::seek("guitarra", "Luis"),
            ];
            assert_eq!(find_matches(&entries), vec![pair("guitarra", "Luis", "Ana")]);
        }

        #[test]
        fn test_every_offer_paired_in_insertion_order() {
            let entries = vec![
                SkillEntry::offer("Yoga", "Ana"),
                SkillEntry::offer("Yoga", "Beto"),
                SkillEntry::seek("Yoga", "Carla"),
            ];
            assert_eq!(
                find_matches(&entries),
                vec![pair("Yoga", "Carla", "Ana"), pair("Yoga", "Carla", "Beto")]
            );
        }

        #[test]
        fn test_grouped_by_seek_order() {
            let matches = find_matches(&board());
            assert_eq!(
                matches,
                vec![
                    pair("Cocina", "Beto", "Dani"),
                    pair("guitarra", "Luis", "Ana"),
                ]
            );
        }

        #[test]
        fn test_cartesian_count() {
            let entries = vec![
                SkillEntry::offer("Pan", "A"),
                SkillEntry::seek("pan", "X"),
                SkillEntry::offer("PAN", "B"),
                SkillEntry::seek("Pan", "Y"),
                SkillEntry::offer("pan", "C"),
                SkillEntry::seek("Té", "Z"),
                SkillEntry::offer("té", "D"),
            ];
            // pan: 3 offers × 2 seeks, té: 1 × 1
            let matches = find_matches(&entries);
            assert_eq!(matches.len(), 7);
            let seekers: Vec<&str> = matches.iter().map(|m| m.seeker.as_str()).collect();
            assert_eq!(seekers, ["X", "X", "X", "Y", "Y", "Y", "Z"]);
            let offerers: Vec<&str> = matches.iter().map(|m| m.offerer.as_str()).collect();
            assert_eq!(offerers, ["A", "B", "C", "A", "B", "C", "D"]);
        }

        #[test]
        fn test_no_trimming_or_substring() {
            let entries = vec![
                SkillEntry::offer("Yoga ", "Ana"),
                SkillEntry::offer("Yoga avanzado", "Beto"),
                SkillEntry::seek("Yoga", "Carla"),
            ];
            assert!(find_matches(&entries).is_empty());
        }

        #[test]
        fn test_same_kind_never_matches() {
            let entries = vec![
                SkillEntry::offer("Yoga", "Ana"),
                SkillEntry::offer("yoga", "Beto"),
                SkillEntry::seek("Pan", "Carla"),
                SkillEntry::seek("pan", "Dani"),
            ];
            assert!(find_matches(&entries).is_empty());
        }

        #[test]
        fn test_duplicates_not_collapsed() {
            let entries = vec![
                SkillEntry::offer("Yoga", "Ana"),
                SkillEntry::offer("Yoga", "Ana"),
                SkillEntry::seek("Yoga", "Ana"),
            ];
            assert_eq!(find_matches(&entries).len(), 2);
        }

        #[test]
        fn test_empty_list() {
            assert!(find_matches(&[]).is_empty());
        }
    }

    // ── Slots ──────────────────────────────────────────────────

    mod slots {
        use super::*;

        #[test]
        fn test_sqlite_missing_slot_is_none() {
            let slots = SqliteSlots::open_in_memory().unwrap();
            assert!(slots.read("skills").unwrap().is_none());
        }

        #[test]
        fn test_sqlite_write_overwrites() {
            let slots = SqliteSlots::open_in_memory().unwrap();
            slots.write("skills", "[1]").unwrap();
            slots.write("skills", "[2]").unwrap();
            assert_eq!(slots.read("skills").unwrap().as_deref(), Some("[2]"));
        }

        #[test]
        fn test_sqlite_slots_are_independent() {
            let slots = SqliteSlots::open_in_memory().unwrap();
            slots.write("a", "x").unwrap();
            assert!(slots.read("b").unwrap().is_none());
        }

        #[test]
        fn test_memory_clones_share_state() {
            let slots = MemorySlots::new();
            let other = slots.clone();
            slots.write("skills", "[]").unwrap();
            assert_eq!(other.read("skills").unwrap().as_deref(), Some("[]"));
            other.clear("skills");
            assert!(slots.read("skills").unwrap().is_none());
        }
    }

    // ── Store ──────────────────────────────────────────────────

    mod store {
        use super::*;
        use trueka_core::TruekaError;

        struct ReadOnlySlots(MemorySlots);

        impl SnapshotSlots for ReadOnlySlots {
            fn read(&self, key: &str) -> trueka_core::Result<Option<String>> {
                self.0.read(key)
            }

            fn write(&self, _key: &str, _value: &str) -> trueka_core::Result<()> {
                Err(TruekaError::Store("disk full".into()))
            }
        }

        struct BrokenSlots;

        impl SnapshotSlots for BrokenSlots {
            fn read(&self, _key: &str) -> trueka_core::Result<Option<String>> {
                Err(TruekaError::Store("unreadable".into()))
            }

            fn write(&self, _key: &str, _value: &str) -> trueka_core::Result<()> {
                Ok(())
            }
        }

        fn snapshot(slots: &MemorySlots) -> Vec<SkillEntry> {
            let raw = slots.read("skills").unwrap().unwrap();
            serde_json::from_str(&raw).unwrap()
        }

        #[test]
        fn test_first_run_is_empty() {
            let store = SkillStore::open(Box::new(MemorySlots::new()), "skills");
            assert!(store.is_empty());
            assert_eq!(store.slot(), "skills");
        }

        #[test]
        fn test_add_appends_and_persists() {
            let slots = MemorySlots::new();
            let mut store = SkillStore::open(Box::new(slots.clone()), "skills");
            store.add(SkillEntry::offer("Yoga", "Ana")).unwrap();
            store.add(SkillEntry::seek("Pan", "Beto")).unwrap();
            assert_eq!(store.len(), 2);
            assert_eq!(store.entries()[1], SkillEntry::seek("Pan", "Beto"));
            assert_eq!(snapshot(&slots), store.entries());
        }

        #[test]
        fn test_add_to_loaded_snapshot() {
            let raw = r#"[
                {"name":"Yoga","user":"Ana","type":"ofrece"},
                {"name":"Pan","user":"Beto","type":"busca"}
            ]"#;
            let slots = MemorySlots::with_value("skills", raw);
            let mut store = SkillStore::open(Box::new(slots.clone()), "skills");
            assert_eq!(store.len(), 2);

            store.add(SkillEntry::offer("Cocina", "Carla")).unwrap();

            let persisted = snapshot(&slots);
            assert_eq!(persisted.len(), 3);
            assert_eq!(persisted[0].user, "Ana");
            assert_eq!(persisted[1].user, "Beto");
            assert_eq!(persisted[2], SkillEntry::offer("Cocina", "Carla"));
        }

        #[test]
        fn test_duplicates_permitted() {
            let mut store = SkillStore::open(Box::new(MemorySlots::new()), "skills");
            store.add(SkillEntry::offer("Yoga", "Ana")).unwrap();
            store.add(SkillEntry::offer("Yoga", "Ana")).unwrap();
            assert_eq!(store.len(), 2);
        }

        #[test]
        fn test_malformed_snapshot_is_empty() {
            let slots = MemorySlots::with_value("skills", "{not json");
            let store = SkillStore::open(Box::new(slots), "skills");
            assert!(store.is_empty());
        }

        #[test]
        fn test_wrong_shape_snapshot_is_empty() {
            let slots = MemorySlots::with_value("skills", r#"[{"name":"Yoga"}]"#);
            let store = SkillStore::open(Box::new(slots), "skills");
            assert!(store.is_empty());
        }

        #[test]
        fn test_unreadable_backend_is_empty() {
            let store = SkillStore::open(Box::new(BrokenSlots), "skills");
            assert!(store.is_empty());
        }

        #[test]
        fn test_failed_persist_keeps_memory_state() {
            let slots = ReadOnlySlots(MemorySlots::new());
            let mut store = SkillStore::open(Box::new(slots), "skills");
            let result = store.add(SkillEntry::offer("Yoga", "Ana"));
            assert!(matches!(result, Err(TruekaError::Store(_))));
            assert_eq!(store.len(), 1);
            assert!(matches!(store.persist(), Err(TruekaError::Store(_))));
        }

        #[test]
        fn test_round_trip_through_reopen() {
            let slots = MemorySlots::new();
            let mut store = SkillStore::open(Box::new(slots.clone()), "skills");
            for entry in board() {
                store.add(entry).unwrap();
            }
            let reopened = SkillStore::open(Box::new(slots), "skills");
            assert_eq!(reopened.entries(), board().as_slice());
        }

        #[test]
        fn test_external_clear_resets_board() {
            let slots = MemorySlots::new();
            let mut store = SkillStore::open(Box::new(slots.clone()), "skills");
            store.add(SkillEntry::offer("Yoga", "Ana")).unwrap();
            slots.clear("skills");
            let reopened = SkillStore::open(Box::new(slots), "skills");
            assert!(reopened.is_empty());
        }

        #[test]
        fn test_sqlite_file_survives_reopen() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("trueka.db");
            {
                let slots = SqliteSlots::open(&path).unwrap();
                let mut store = SkillStore::open(Box::new(slots), "skills");
                store.add(SkillEntry::offer("Guitarra", "Ana")).unwrap();
                store.add(SkillEntry::seek("guitarra", "Luis")).unwrap();
            }
            let slots = SqliteSlots::open(&path).unwrap();
            let store = SkillStore::open(Box::new(slots), "skills");
            assert_eq!(store.len(), 2);
            assert_eq!(find_matches(store.entries()).len(), 1);
        }

        #[test]
        fn test_slots_isolated_by_name() {
            let slots = MemorySlots::new();
            let mut board_a = SkillStore::open(Box::new(slots.clone()), "a");
            board_a.add(SkillEntry::offer("Yoga", "Ana")).unwrap();
            let board_b = SkillStore::open(Box::new(slots), "b");
            assert!(board_b.is_empty());
        }
    }
}
