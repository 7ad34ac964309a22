use super::*;

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// StubData / StubState
// =============================================================================

#[test]
fn insert_assigns_increasing_ids() {
    let mut data = StubData::default();
    let a = data.insert("a".into(), "x".into(), "React".into());
    let b = data.insert("b".into(), "y".into(), "Node".into());
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(data.articles.len(), 2);
}

#[tokio::test]
async fn seeded_has_articles() {
    let state = StubState::seeded();
    let data = state.data.read().await;
    assert_eq!(data.articles.len(), 3);
    assert_eq!(data.next_id, 3);
}

#[tokio::test]
async fn sessions_resolve_to_username() {
    let state = StubState::new();
    let token = state.open_session("foo").await;
    assert_eq!(state.session_user(&token).await.as_deref(), Some("foo"));
    assert_eq!(state.session_user("nope").await, None);
}

#[tokio::test]
async fn earlier_sessions_stay_valid_after_new_login() {
    let state = StubState::new();
    let first = state.open_session("foo").await;
    let second = state.open_session("foo").await;
    assert_ne!(first, second);
    assert_eq!(state.session_user(&first).await.as_deref(), Some("foo"));
    assert_eq!(state.data.read().await.sessions.len(), 2);
}
