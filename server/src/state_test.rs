use super::test_helpers::{MockCollaborator, TEST_PUBLISHABLE_KEY, test_app_state, test_config};
use super::*;

#[test]
fn new_derives_environment_from_config() {
    let state = test_app_state(Arc::new(MockCollaborator::signed_out()));
    assert!(state.environment.has_publishable_key);
    assert!(!state.environment.has_secret_key);
}

#[test]
fn new_derives_clerk_script_from_config() {
    let state = test_app_state(Arc::new(MockCollaborator::signed_out()));
    assert_eq!(state.clerk_script.publishable_key, TEST_PUBLISHABLE_KEY);
    assert_eq!(state.clerk_script, test_config().clerk_script());
}

#[tokio::test]
async fn collaborator_is_shared_across_clones() {
    let mock = Arc::new(MockCollaborator::signed_out());
    let state = test_app_state(mock.clone());
    let cloned = state.clone();

    cloned.clerk.sign_out(Some("tok")).await.unwrap();
    state.clerk.sign_out(None).await.unwrap();

    assert_eq!(*mock.sign_outs.lock().unwrap(), 2);
    assert_eq!(*mock.seen_tokens.lock().unwrap(), vec![Some("tok".to_owned()), None]);
}
