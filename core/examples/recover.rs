use recovery_core::ShareDocument;

const DOCUMENT: &str = r#"{
    "keys": { "n": 4, "k": 2 },
    "1": { "base": "10", "value": "1494" },
    "2": { "base": "16", "value": "6a0" },
    "3": { "base": "2", "value": "11101101010" },
    "4": { "base": "36", "value": "1l2" }
}"#;

/// Recover the intercept of y = 1292 + 202x from four shares, one of which
/// has been tampered with.
fn main() {
    let document =
        ShareDocument::from_json(DOCUMENT).expect("document should parse");
    let recovery = document.recover().expect("recovery should succeed");

    println!("Secret: {}", recovery.secret);
    println!(
        "Agreement at subset size {} with {} of {} subsets ({} discarded)",
        recovery.subset_size,
        recovery.votes,
        recovery.subsets_tried,
        recovery.subsets_discarded
    );
}
