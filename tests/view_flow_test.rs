//! View models driven through the public API over the mock HTTP client.
//!
//! Covers shared-state propagation between independent views, optimistic
//! updates and their rollback, and stale responses being dropped.

mod common;

use std::sync::{Arc, Mutex};

use common::*;
use conduit::adapters::MockResponse;
use conduit::auth;
use conduit::routes::Route;
use conduit::shared::{Container, CurrentUser, EventChannel};
use conduit::traits::Method;
use conduit::view_state::profile::{FOLLOW_FAILED, PROFILE_FAILED};
use conduit::view_state::{LoadState, LoginForm, ProfileTab, ProfileView};
use serde_json::json;

#[test]
fn test_container_listeners_run_in_registration_order() {
    let container = Container::new(0);
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&order);
    let second = Arc::clone(&order);
    let _a = container.add_listener(move || first.lock().unwrap().push("first"));
    let b = container.add_listener(move || second.lock().unwrap().push("second"));

    container.set_state(1);
    b.unsubscribe();
    container.set_state(2);

    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "first"]);
    assert_eq!(container.state(), 2);
}

#[test]
fn test_event_channel_delivers_payload_to_each_listener() {
    let channel: EventChannel<String> = EventChannel::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    for name in ["a", "b"] {
        let sink = Arc::clone(&seen);
        channel.add_listener(move |payload: &String| {
            sink.lock().unwrap().push(format!("{}:{}", name, payload))
        });
    }

    channel.trigger("hi".to_string());
    assert_eq!(*seen.lock().unwrap(), vec!["a:hi".to_string(), "b:hi".to_string()]);
}

#[tokio::test]
async fn test_login_publishes_current_user_to_other_views() {
    let (ctx, http) = mock_context();
    ctx.current_user.set_state(CurrentUser::guest());
    http.set_response(
        Method::Post,
        &mock_url("/users/login"),
        MockResponse::json(200, user_json("jake", "jwt")),
    );
    let changes = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&changes);
    let _sub = ctx
        .current_user
        .add_listener(move || *counter.lock().unwrap() += 1);

    let form = LoginForm::new(ctx.clone());
    form.state.update(|s| {
        s.fields.email = "jake@example.com".into();
        s.fields.password = "pw".into();
    });

    assert_eq!(form.submit().await, Some(Route::Home));
    assert_eq!(ctx.username(), Some("jake".to_string()));
    assert_eq!(*changes.lock().unwrap(), 1);

    auth::logout(&ctx);
    assert_eq!(ctx.current_user.state(), CurrentUser::guest());
    assert_eq!(*changes.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_follow_failure_reverts_and_notifies() {
    let (ctx, http) = mock_context();
    http.set_response(
        Method::Get,
        &mock_url("/profiles/jake"),
        MockResponse::json(200, json!({"profile": profile_json("jake", false)})),
    );
    http.set_response(
        Method::Post,
        &mock_url("/profiles/jake/follow"),
        MockResponse::text(500, ""),
    );
    let seen = record_notifications(&ctx);

    let view = ProfileView::new(ctx, "jake", ProfileTab::MyArticles);
    view.load().await;

    let pending = view.toggle_follow().expect("profile is loaded");
    assert_eq!(
        view.state.with_state(|s| s.loaded().map(|p| p.following)),
        Some(true),
        "follow applies before the server answers"
    );

    pending.await;
    assert_eq!(
        view.state.with_state(|s| s.loaded().map(|p| p.following)),
        Some(false)
    );
    assert_eq!(*seen.lock().unwrap(), vec![FOLLOW_FAILED.to_string()]);
}

#[tokio::test]
async fn test_follow_success_keeps_new_value() {
    let (ctx, http) = mock_context();
    http.set_response(
        Method::Get,
        &mock_url("/profiles/jake"),
        MockResponse::json(200, json!({"profile": profile_json("jake", false)})),
    );
    http.set_response(
        Method::Post,
        &mock_url("/profiles/jake/follow"),
        MockResponse::json(200, json!({"profile": profile_json("jake", true)})),
    );

    let view = ProfileView::new(ctx, "jake", ProfileTab::MyArticles);
    view.load().await;
    view.toggle_follow().expect("profile is loaded").await;

    assert_eq!(
        view.state.with_state(|s| s.loaded().map(|p| p.following)),
        Some(true)
    );
}

#[tokio::test]
async fn test_unmounted_view_ignores_late_answer() {
    let (ctx, http) = mock_context();
    http.set_response(
        Method::Get,
        &mock_url("/profiles/jake"),
        MockResponse::json(200, json!({"profile": profile_json("jake", false)})),
    );

    let view = ProfileView::new(ctx, "jake", ProfileTab::MyArticles);
    let pending = view.load();
    view.unmount();
    pending.await;

    assert!(view.state.with_state(LoadState::is_loading));
}

#[tokio::test]
async fn test_profile_failure_message() {
    let (ctx, http) = mock_context();
    http.set_default_response(MockResponse::text(500, ""));

    let view = ProfileView::new(ctx, "jake", ProfileTab::MyArticles);
    view.load().await;

    assert_eq!(
        view.state.with_state(|s| s.error().map(str::to_string)),
        Some(PROFILE_FAILED.to_string())
    );
}
