//! End-to-end checks across the math and recovery crates.

#[cfg(test)]
mod tests {
    use std::fs;

    use num_bigint::BigInt;
    use recovery_core::batch::{collect_inputs, recover_batch};
    use recovery_core::{recover_secret, RecoveryError, ShareDocument};
    use recovery_math::radix::{decode, encode};
    use recovery_math::Point;

    const MIXED_BASES: &str = include_str!("../fixtures/mixed_bases.json");
    const CORRUPTED_LARGE: &str = include_str!("../fixtures/corrupted_large.json");
    const LARGE_SECRET: &str =
        "268310499339116833016236979523184895284713495065949561620137598157168";

    #[test]
    fn test_mixed_base_document() {
        let document = ShareDocument::from_json(MIXED_BASES).expect("fixture parses");
        let recovery = document.recover().expect("fixture recovers");

        assert_eq!(recovery.secret, BigInt::from(3));
        // Only {1, 2, 3} has integral coefficients among the size-3 subsets.
        assert_eq!(recovery.votes, 1);
        assert_eq!(recovery.subsets_tried, 4);
    }

    #[test]
    fn test_large_document_with_corrupted_share() {
        let document =
            ShareDocument::from_json(CORRUPTED_LARGE).expect("fixture parses");
        assert_eq!(document.params.threshold, 3);
        assert_eq!(document.params.declared_shares, Some(6));

        let recovery = document.recover().expect("fixture recovers");
        assert_eq!(recovery.secret.to_string(), LARGE_SECRET);
        assert_eq!(recovery.subset_size, 3);
        assert_eq!(recovery.votes, 5);
    }

    #[test]
    fn test_decoded_points_feed_recover_secret() {
        let document =
            ShareDocument::from_json(CORRUPTED_LARGE).expect("fixture parses");
        let points: Vec<Point> = document.points().expect("shares decode");
        let honest: Vec<Point> = points.into_iter().filter(|p| p.x() != 5).collect();

        let secret = recover_secret(&honest, 3).expect("honest shares recover");
        assert_eq!(secret.to_string(), LARGE_SECRET);
    }

    #[test]
    fn test_share_values_survive_reencoding() {
        let document =
            ShareDocument::from_json(CORRUPTED_LARGE).expect("fixture parses");
        for share in &document.shares {
            let value = decode(&share.value, share.base).expect("share decodes");
            assert_eq!(
                encode(&value, share.base).expect("valid base"),
                share.value.to_lowercase()
            );
        }
    }

    #[test]
    fn test_batch_over_fixture_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("test1.json"), MIXED_BASES).unwrap();
        fs::write(dir.path().join("test2.json"), CORRUPTED_LARGE).unwrap();
        fs::write(
            dir.path().join("test3.json"),
            r#"{ "keys": { "n": 1, "k": 2 }, "1": { "base": "10", "value": "5" } }"#,
        )
        .unwrap();

        let inputs = collect_inputs(&[dir.path()]).expect("directory lists");
        assert_eq!(inputs.len(), 3);

        let outcomes = recover_batch(&inputs);
        assert_eq!(
            outcomes[0].result.as_ref().map(|r| r.secret.clone()).unwrap(),
            BigInt::from(3)
        );
        assert_eq!(
            outcomes[1].result.as_ref().unwrap().secret.to_string(),
            LARGE_SECRET
        );
        assert!(matches!(
            outcomes[2].result,
            Err(RecoveryError::InsufficientPoints { available: 1, .. })
        ));

        let records: Vec<_> = outcomes.iter().map(|o| o.record()).collect();
        let json = serde_json::to_string(&records).expect("records serialize");
        assert!(json.contains(LARGE_SECRET));
    }
}
