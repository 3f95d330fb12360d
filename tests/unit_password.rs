use courtside::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_round_trip() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert_ne!(hash, "correct horse battery staple");
    assert!(verify_password("correct horse battery staple", &hash).unwrap());
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert!(!verify_password("incorrect horse", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("same password").unwrap();
    let second = hash_password("same password").unwrap();

    assert_ne!(first, second);
}
