//! Notifications Panel Component
//!
//! Slide-in card listing recent alerts.

use leptos::prelude::*;

use crate::fixtures;
use crate::models::Notification;

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let (notifications, set_notifications) =
        signal(fixtures::load_or_default(fixtures::notifications()));

    let mark_all_read = move |_| {
        set_notifications.update(|list| list.iter_mut().for_each(|n| n.read = true));
    };

    view! {
        <div class="card notifications-panel">
            <div class="card-header">
                <div class="row between">
                    <h3 class="card-title">"Notifications"</h3>
                    <button class="btn ghost small" on:click=mark_all_read>"Mark all as read"</button>
                </div>
                <p class="card-description">"Stay updated with your inventory"</p>
            </div>
            <div class="card-content">
                <Show
                    when=move || !notifications.get().is_empty()
                    fallback=|| view! { <div class="empty">"No notifications at the moment"</div> }
                >
                    <For
                        each=move || notifications.get()
                        key=|n: &Notification| (n.id, n.read)
                        children=move |n| {
                            view! {
                                <div class=if n.read { "notification read" } else { "notification" }>
                                    <span class="notification-icon">{n.kind.icon()}</span>
                                    <div class="notification-body">
                                        <div class="notification-title">{n.title}</div>
                                        <div class="notification-description">{n.description}</div>
                                        <div class="notification-time">{n.timestamp}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
            <div class="card-footer">
                <button class="btn outline full">"View all notifications"</button>
            </div>
        </div>
    }
}
