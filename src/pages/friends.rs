//! Friends page with search, list, and request-management tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the social hub route. It owns the three fetched collections and
//! the active-tab state, wires row commands to REST mutations, and keeps
//! the inbound-request feed fresh with a background poll. Row components
//! stay presentation-only; every side effect funnels through the handlers
//! defined at the bottom of this file.

#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use leptos::prelude::*;

use crate::components::button::{Button, ButtonTheme};
use crate::components::friend_item::{FriendCommand, FriendItem};
use crate::components::input::{Input, InputSize};
use crate::components::request_item::{RequestCommand, RequestItem};
use crate::net::hooks::{
    CollectionState, refresh_friend_list, refresh_received_requests, refresh_sent_requests,
    use_friend_list, use_received_requests, use_sent_requests,
};
use crate::net::types::{Friend, FriendRequest};
use crate::state::ui::FriendsTab;

/// Friends page: four mutually exclusive tabs over three collections.
#[component]
pub fn FriendsPage() -> impl IntoView {
    let friends = use_friend_list();
    let sent = use_sent_requests();
    let received = use_received_requests();

    let active_tab = RwSignal::new(FriendsTab::default());
    let search_query = RwSignal::new(String::new());
    let action_error = RwSignal::new(None::<String>);

    // Row sources re-derive only when the backing collection data actually
    // changes; tab switches and loading-flag flips reuse the cached value.
    let friend_items = Memo::new(move |_| friends.get().items);
    let sent_items = Memo::new(move |_| sent.get().items);
    let received_items = Memo::new(move |_| received.get().items);
    let search_results =
        Memo::new(move |_| filter_friends(&friend_items.get(), &search_query.get()));

    // Inbound requests are the one feed that changes without local action,
    // so poll it quietly in the background.
    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let received_poll = received;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(10)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh_received_requests(received_poll);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_friend_command =
        Callback::new(
            move |(friend_id, command): (String, FriendCommand)| match command {
                FriendCommand::Visit => visit_profile(&friend_id),
                FriendCommand::Delete => remove_friend(friends, action_error, friend_id),
            },
        );

    let on_request_command =
        Callback::new(
            move |(request_id, command): (String, RequestCommand)| match command {
                RequestCommand::Accept => {
                    accept_received_request(received, friends, action_error, request_id);
                }
                RequestCommand::Reject => {
                    reject_received_request(received, action_error, request_id);
                }
                RequestCommand::Cancel => cancel_sent_request(sent, action_error, request_id),
            },
        );

    let retry_friends = Callback::new(move |_| {
        friends.update(|s| s.loading = true);
        refresh_friend_list(friends);
    });
    let retry_sent = Callback::new(move |_| {
        sent.update(|s| s.loading = true);
        refresh_sent_requests(sent);
    });
    let retry_received = Callback::new(move |_| {
        received.update(|s| s.loading = true);
        refresh_received_requests(received);
    });

    view! {
        <div class="friends-page">
            <header class="friends-page__header">
                <h1 class="friends-page__title">"Friends"</h1>
            </header>

            <div class="friends-page__tabs">
                <button
                    class="friends-page__tab"
                    class:friends-page__tab--active=move || active_tab.get() == FriendsTab::Search
                    on:click=move |_| active_tab.set(FriendsTab::Search)
                >
                    "Search"
                </button>
                <button
                    class="friends-page__tab"
                    class:friends-page__tab--active=move || active_tab.get() == FriendsTab::Friends
                    on:click=move |_| active_tab.set(FriendsTab::Friends)
                >
                    "Friends"
                </button>
                <button
                    class="friends-page__tab"
                    class:friends-page__tab--active=move || active_tab.get() == FriendsTab::Received
                    on:click=move |_| active_tab.set(FriendsTab::Received)
                >
                    "Received"
                </button>
                <button
                    class="friends-page__tab"
                    class:friends-page__tab--active=move || active_tab.get() == FriendsTab::Sent
                    on:click=move |_| active_tab.set(FriendsTab::Sent)
                >
                    "Sent"
                </button>
            </div>

            <Show when=move || action_error.get().is_some()>
                <p class="friends-page__action-error">
                    {move || action_error.get().unwrap_or_default()}
                </p>
            </Show>

            <div class="friends-page__content">
                {move || match active_tab.get() {
                    FriendsTab::Search => {
                        view! {
                            <SearchSection
                                query=search_query
                                results=search_results
                                on_command=on_friend_command
                            />
                        }
                            .into_any()
                    }
                    FriendsTab::Friends => {
                        view! {
                            <FriendListSection
                                friends=friends
                                items=friend_items
                                on_command=on_friend_command
                                on_retry=retry_friends
                            />
                        }
                            .into_any()
                    }
                    FriendsTab::Received => {
                        view! {
                            <RequestListSection
                                requests=received
                                items=received_items
                                empty_label="No received requests."
                                error_label="Could not load received requests"
                                on_command=on_request_command
                                on_retry=retry_received
                            />
                        }
                            .into_any()
                    }
                    FriendsTab::Sent => {
                        view! {
                            <RequestListSection
                                requests=sent
                                items=sent_items
                                empty_label="No sent requests."
                                error_label="Could not load sent requests"
                                on_command=on_request_command
                                on_retry=retry_sent
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Name search over the already-fetched friend list.
#[component]
fn SearchSection(
    query: RwSignal<String>,
    results: Memo<Vec<Friend>>,
    on_command: Callback<(String, FriendCommand)>,
) -> impl IntoView {
    view! {
        <section class="friends-page__section">
            <div class="friends-page__search-bar">
                <Input value=query placeholder="Search friends by name" size=InputSize::Responsive/>
            </div>
            <Show
                when=move || !query.get().trim().is_empty()
                fallback=|| {
                    view! { <p class="friends-page__hint">"Type a name to find a friend."</p> }
                }
            >
                <Show
                    when=move || !results.get().is_empty()
                    fallback=|| view! { <p class="friends-page__empty">"No friends match."</p> }
                >
                    <div class="friends-page__list">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|friend| {
                                    view! { <FriendItem friend=friend on_command=on_command/> }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}

/// Established friendships with visit/delete row actions.
#[component]
fn FriendListSection(
    friends: RwSignal<CollectionState<Friend>>,
    items: Memo<Vec<Friend>>,
    on_command: Callback<(String, FriendCommand)>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let body = Memo::new(move |_| tab_body(&friends.get()));

    view! {
        <section class="friends-page__section">
            {move || match body.get() {
                TabBody::Loading => {
                    view! { <p class="friends-page__loading">"Loading friends..."</p> }.into_any()
                }
                TabBody::Error(message) => {
                    view! {
                        <div class="friends-page__error">
                            <p>{format!("Could not load friends: {message}")}</p>
                            <Button
                                label="Retry".to_owned()
                                theme=ButtonTheme::Secondary
                                on_press=on_retry
                            />
                        </div>
                    }
                        .into_any()
                }
                TabBody::Empty => {
                    view! { <p class="friends-page__empty">"No friends yet."</p> }.into_any()
                }
                TabBody::Rows => {
                    view! {
                        <div class="friends-page__list">
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|friend| {
                                        view! { <FriendItem friend=friend on_command=on_command/> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// One request feed (sent or received) with direction-appropriate actions.
#[component]
fn RequestListSection(
    requests: RwSignal<CollectionState<FriendRequest>>,
    items: Memo<Vec<FriendRequest>>,
    empty_label: &'static str,
    error_label: &'static str,
    on_command: Callback<(String, RequestCommand)>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let body = Memo::new(move |_| tab_body(&requests.get()));

    view! {
        <section class="friends-page__section">
            {move || match body.get() {
                TabBody::Loading => {
                    view! { <p class="friends-page__loading">"Loading requests..."</p> }.into_any()
                }
                TabBody::Error(message) => {
                    view! {
                        <div class="friends-page__error">
                            <p>{format!("{error_label}: {message}")}</p>
                            <Button
                                label="Retry".to_owned()
                                theme=ButtonTheme::Secondary
                                on_press=on_retry
                            />
                        </div>
                    }
                        .into_any()
                }
                TabBody::Empty => {
                    view! { <p class="friends-page__empty">{empty_label}</p> }.into_any()
                }
                TabBody::Rows => {
                    view! {
                        <div class="friends-page__list">
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|request| {
                                        view! {
                                            <RequestItem request=request on_command=on_command/>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// What a collection tab renders.
#[derive(Clone, Debug, PartialEq, Eq)]
enum TabBody {
    /// Initial or retried fetch in flight; rows stay hidden even when stale
    /// items are still around.
    Loading,
    /// Fetch failed; message to show beside the retry button.
    Error(String),
    /// Loaded cleanly with nothing to show.
    Empty,
    /// Loaded items ready to render.
    Rows,
}

/// Body for a collection tab, in precedence order: loading, then error,
/// then empty, then rows. A retry in flight reads as loading even while
/// the previous failure is still recorded.
fn tab_body<T>(state: &CollectionState<T>) -> TabBody {
    if state.loading {
        TabBody::Loading
    } else if let Some(error) = &state.error {
        TabBody::Error(error.to_string())
    } else if state.items.is_empty() {
        TabBody::Empty
    } else {
        TabBody::Rows
    }
}

/// Profile route for a friend id.
#[cfg(any(test, feature = "hydrate"))]
fn profile_href(friend_id: &str) -> String {
    format!("/users/{friend_id}")
}

/// Full-page navigation to the friend's profile.
fn visit_profile(friend_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&profile_href(friend_id));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = friend_id;
    }
}

fn remove_friend(
    friends: RwSignal<CollectionState<Friend>>,
    action_error: RwSignal<Option<String>>,
    friend_id: String,
) {
    action_error.set(None);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_friend(&friend_id).await {
                Ok(()) => refresh_friend_list(friends),
                Err(e) => {
                    leptos::logging::warn!("friend delete failed: {e}");
                    action_error.set(Some(format!("Could not remove friend: {e}")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (friends, friend_id);
    }
}

/// Accepting also refreshes the friend list, since the other party lands
/// there on success.
fn accept_received_request(
    received: RwSignal<CollectionState<FriendRequest>>,
    friends: RwSignal<CollectionState<Friend>>,
    action_error: RwSignal<Option<String>>,
    request_id: String,
) {
    action_error.set(None);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::accept_request(&request_id).await {
                Ok(()) => {
                    refresh_received_requests(received);
                    refresh_friend_list(friends);
                }
                Err(e) => {
                    leptos::logging::warn!("request accept failed: {e}");
                    action_error.set(Some(format!("Could not accept request: {e}")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (received, friends, request_id);
    }
}

fn reject_received_request(
    received: RwSignal<CollectionState<FriendRequest>>,
    action_error: RwSignal<Option<String>>,
    request_id: String,
) {
    action_error.set(None);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::reject_request(&request_id).await {
                Ok(()) => refresh_received_requests(received),
                Err(e) => {
                    leptos::logging::warn!("request reject failed: {e}");
                    action_error.set(Some(format!("Could not reject request: {e}")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (received, request_id);
    }
}

fn cancel_sent_request(
    sent: RwSignal<CollectionState<FriendRequest>>,
    action_error: RwSignal<Option<String>>,
    request_id: String,
) {
    action_error.set(None);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::cancel_request(&request_id).await {
                Ok(()) => refresh_sent_requests(sent),
                Err(e) => {
                    leptos::logging::warn!("request cancel failed: {e}");
                    action_error.set(Some(format!("Could not cancel request: {e}")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (sent, request_id);
    }
}

/// Case-insensitive substring match on friend names, preserving list order.
/// A blank query matches nothing; the search tab shows its hint instead.
fn filter_friends(friends: &[Friend], query: &str) -> Vec<Friend> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    friends
        .iter()
        .filter(|f| f.friend_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
