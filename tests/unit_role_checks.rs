use axum::http::StatusCode;
use uuid::Uuid;

use courtside::middleware::role::{
    check_admin, check_admin_or_coach, check_coach, check_profile_owner,
};
use courtside::modules::users::model::UserRole;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[test]
fn test_check_admin_only_passes_admins() {
    assert!(check_admin(&UserRole::Admin).is_ok());

    let err = check_admin(&UserRole::Coach).unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);

    let err = check_admin(&UserRole::User).unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[test]
fn test_coach_may_act_on_own_resource() {
    // Coach 42 deleting /profile/coach/42 passes the predicate.
    assert!(check_coach(&UserRole::Coach, uid(42), uid(42)).is_ok());
}

#[test]
fn test_coach_denied_on_foreign_resource() {
    // Coach 42 hitting /profile/coach/99 is forbidden.
    let err = check_coach(&UserRole::Coach, uid(42), uid(99)).unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[test]
fn test_coach_predicate_requires_coach_role() {
    assert!(check_coach(&UserRole::User, uid(42), uid(42)).is_err());
    assert!(check_coach(&UserRole::Admin, uid(42), uid(42)).is_err());
}

#[test]
fn test_admin_or_coach_predicate() {
    // Admins pass regardless of the targeted coach.
    assert!(check_admin_or_coach(&UserRole::Admin, uid(1), uid(99)).is_ok());

    // Coaches pass only for their own id.
    assert!(check_admin_or_coach(&UserRole::Coach, uid(42), uid(42)).is_ok());
    assert!(check_admin_or_coach(&UserRole::Coach, uid(42), uid(99)).is_err());

    // Plain users never pass.
    let err = check_admin_or_coach(&UserRole::User, uid(42), uid(42)).unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[test]
fn test_profile_owner_predicate() {
    assert!(check_profile_owner(&UserRole::User, uid(7), uid(7)).is_ok());
    assert!(check_profile_owner(&UserRole::Coach, uid(7), uid(7)).is_ok());

    // Admins may manage any profile.
    assert!(check_profile_owner(&UserRole::Admin, uid(1), uid(7)).is_ok());

    let err = check_profile_owner(&UserRole::User, uid(8), uid(7)).unwrap_err();
    assert_eq!(err.status, StatusCode::FORBIDDEN);
}

#[test]
fn test_predicates_are_idempotent() {
    // Same identity and route parameters, same answer, every time.
    for _ in 0..3 {
        assert!(check_coach(&UserRole::Coach, uid(42), uid(42)).is_ok());
        assert!(check_coach(&UserRole::Coach, uid(42), uid(99)).is_err());
        assert!(check_admin(&UserRole::User).is_err());
        assert!(check_profile_owner(&UserRole::Admin, uid(1), uid(7)).is_ok());
    }
}
