//! Tests for the account service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{
    CredentialRepositoryError, MockCredentialRepository, MockPasswordHasher, MockSessionTokens,
    SessionTokenError,
};

type Service = AccountService<MockCredentialRepository, MockPasswordHasher, MockSessionTokens>;

fn service(
    repo: MockCredentialRepository,
    hasher: MockPasswordHasher,
    tokens: MockSessionTokens,
) -> Service {
    AccountService::new(Arc::new(repo), Arc::new(hasher), Arc::new(tokens))
}

fn creds() -> Credentials {
    Credentials::try_from_parts("ada@example.com", "s3cret").expect("valid credentials")
}

#[tokio::test]
async fn register_stores_hashed_password() {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .withf(|password| password == "s3cret")
        .times(1)
        .return_once(|_| Ok("hashed".to_owned()));
    let mut repo = MockCredentialRepository::new();
    repo.expect_insert()
        .withf(|user| user.email() == "ada@example.com" && user.password_hash() == "hashed")
        .times(1)
        .return_once(|_| Ok(()));

    service(repo, hasher, MockSessionTokens::new())
        .register(&creds())
        .await
        .expect("registration succeeds");
}

#[tokio::test]
async fn register_maps_duplicate_to_invalid_request() {
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .return_once(|_| Ok("hashed".to_owned()));
    let mut repo = MockCredentialRepository::new();
    repo.expect_insert()
        .return_once(|_| Err(CredentialRepositoryError::duplicate("ada@example.com")));

    let err = service(repo, hasher, MockSessionTokens::new())
        .register(&creds())
        .await
        .expect_err("duplicate rejected");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn login_issues_token_for_matching_password() {
    let mut repo = MockCredentialRepository::new();
    repo.expect_find_by_email()
        .withf(|email| email == "ada@example.com")
        .return_once(|_| Ok(Some(User::new("ada@example.com", "hashed"))));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|password, hash| password == "s3cret" && hash == "hashed")
        .return_once(|_, _| Ok(true));
    let mut tokens = MockSessionTokens::new();
    tokens
        .expect_issue()
        .withf(|identity| identity.email() == "ada@example.com")
        .return_once(|_| Ok("signed".to_owned()));

    let session = service(repo, hasher, tokens)
        .login(&creds())
        .await
        .expect("login succeeds");
    assert_eq!(session.token, "signed");
    assert_eq!(session.identity.email(), "ada@example.com");
}

#[rstest]
#[case(None, false)]
#[case(Some(User::new("ada@example.com", "hashed")), false)]
#[tokio::test]
async fn login_rejects_unknown_user_and_wrong_password(
    #[case] stored: Option<User>,
    #[case] verifies: bool,
) {
    let has_user = stored.is_some();
    let mut repo = MockCredentialRepository::new();
    repo.expect_find_by_email().return_once(move |_| Ok(stored));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .times(usize::from(has_user))
        .returning(move |_, _| Ok(verifies));
    let mut tokens = MockSessionTokens::new();
    tokens.expect_issue().times(0);

    let err = service(repo, hasher, tokens)
        .login(&creds())
        .await
        .expect_err("login rejected");
    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), INVALID_CREDENTIALS);
}

#[tokio::test]
async fn login_maps_store_outage_to_service_unavailable() {
    let mut repo = MockCredentialRepository::new();
    repo.expect_find_by_email()
        .return_once(|_| Err(CredentialRepositoryError::connection("refused")));

    let err = service(repo, MockPasswordHasher::new(), MockSessionTokens::new())
        .login(&creds())
        .await
        .expect_err("outage surfaces");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn login_maps_signing_failure_to_internal() {
    let mut repo = MockCredentialRepository::new();
    repo.expect_find_by_email()
        .return_once(|_| Ok(Some(User::new("ada@example.com", "hashed"))));
    let mut hasher = MockPasswordHasher::new();
    hasher.expect_verify().return_once(|_, _| Ok(true));
    let mut tokens = MockSessionTokens::new();
    tokens
        .expect_issue()
        .return_once(|_| Err(SessionTokenError::encode("bad key")));

    let err = service(repo, hasher, tokens)
        .login(&creds())
        .await
        .expect_err("signing failure surfaces");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
