//! Households View
//!
//! Pending invitations, household cards and the create dialog.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{DeleteConfirmButton, Modal, SearchInput};
use crate::context::use_app_context;
use crate::filter::filter_by_name;
use crate::fixtures;
use crate::models::{Household, Invitation, Role};
use crate::validation::require_non_empty;

#[component]
pub fn HouseholdsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (initial_households, initial_invitations) = fixtures::or_log(
        fixtures::households().map(|data| (data.households, data.invitations)),
        Default::default,
    );

    let (households, set_households) = signal(initial_households);
    let (invitations, set_invitations) = signal(initial_invitations);
    let (query, set_query) = signal(String::new());
    let filtered = Memo::new(move |_| households.with(|all| filter_by_name(all, &query.get())));

    let (dialog_open, set_dialog_open) = signal(false);
    let (name, set_name) = signal(String::new());

    let close_dialog = move || {
        set_dialog_open.set(false);
        set_name.set(String::new());
    };

    let create = move || {
        let raw = name.get_untracked();
        let Some(household_name) = ctx.settle(
            require_non_empty("Household name", &raw).map(str::to_string),
            |n| format!("Household \"{}\" created", n),
        ) else {
            return;
        };
        set_households.update(|all| {
            let id = all.iter().map(|h| h.id).max().unwrap_or(0) + 1;
            all.push(Household {
                id,
                name: household_name,
                role: Role::Owner,
                members: 1,
                inventory_items: 0,
                low_stock_items: 0,
                categories: 0,
            });
        });
        close_dialog();
    };

    let remove_household = move |id: u32, message: &'static str| {
        tracing::debug!(id, message, "household removed from list");
        set_households.update(|all| all.retain(|h| h.id != id));
        ctx.success(message);
    };

    let answer_invitation = move |id: u32, accepted: bool| {
        set_invitations.update(|all| all.retain(|i| i.id != id));
        ctx.success(if accepted { "Invitation accepted" } else { "Invitation declined" });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Households"</h2>
                    <p class="muted">"Manage your household inventories"</p>
                </div>
                <button class="btn primary" on:click=move |_| set_dialog_open.set(true)>"＋ Create Household"</button>
            </div>

            <Modal
                open=dialog_open
                title=Signal::stored("Create New Household".to_string())
                description=Signal::stored("Create a new household to manage inventory with others".to_string())
                on_close=move |_| close_dialog()
            >
                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    create();
                }>
                    <label class="field">
                        <span>"Household Name"</span>
                        <input
                            id="householdName"
                            class="input"
                            placeholder="Enter household name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| close_dialog()>"Cancel"</button>
                        <button type="submit" class="btn primary">"Create Household"</button>
                    </div>
                </form>
            </Modal>

            <Show when=move || invitations.with(|all| !all.is_empty())>
                <div class="panel">
                    <h3 class="panel-title">"Pending Invitations"</h3>
                    <div class="stack">
                        <For
                            each=move || invitations.get()
                            key=|i: &Invitation| i.id
                            children=move |invitation| {
                                let id = invitation.id;
                                view! {
                                    <div class="list-row">
                                        <span class="accent">"🏠"</span>
                                        <div class="list-row-body">
                                            <div class="list-row-title">{invitation.name.clone()}</div>
                                            <div class="muted small">
                                                {format!(
                                                    "Invited by {} on {}",
                                                    invitation.invited_by,
                                                    invitation.date.format("%-m/%-d/%Y"),
                                                )}
                                            </div>
                                        </div>
                                        <div class="row">
                                            <button class="btn primary small" on:click=move |_| answer_invitation(id, true)>
                                                "Accept"
                                            </button>
                                            <button class="btn outline small" on:click=move |_| answer_invitation(id, false)>
                                                "Decline"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            <div class="card">
                <div class="card-header row between">
                    <h3 class="card-title">"Your Households"</h3>
                    <SearchInput placeholder="Search households..." value=query set_value=set_query />
                </div>
                <div class="card-content">
                    <div class="grid cards">
                        <Show when=move || filtered.with(|h| h.is_empty())>
                            <div class="empty full-span">"No households found"</div>
                        </Show>
                        <For
                            each=move || filtered.get()
                            key=|h: &Household| (h.id, h.name.clone())
                            children=move |household| {
                                let id = household.id;
                                let href = format!("/households/{}", id);
                                let leave_or_delete = if household.role == Role::Owner {
                                    view! {
                                        <DeleteConfirmButton
                                            label="🗑 Delete Household"
                                            on_confirm=move |_| remove_household(id, "Household deleted")
                                        />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <DeleteConfirmButton
                                            label="⎋ Leave Household"
                                            on_confirm=move |_| remove_household(id, "Left household")
                                        />
                                    }
                                    .into_any()
                                };
                                view! {
                                    <div class="household-card">
                                        <div class="row between">
                                            <A href=href.clone()>
                                                <span class="household-name">{household.name.clone()}</span>
                                            </A>
                                            <span class=household.role.badge_class()>{household.role.as_str()}</span>
                                        </div>
                                        <div class="grid two tight">
                                            <div class="metric">
                                                <div class="muted tiny">"Inventory"</div>
                                                <div class="metric-value">{format!("{} items", household.inventory_items)}</div>
                                                <div class="warning tiny">{format!("{} low stock", household.low_stock_items)}</div>
                                            </div>
                                            <div class="metric">
                                                <div class="muted tiny">"Members"</div>
                                                <div class="metric-value">{household.members}</div>
                                                <div class="muted tiny">{format!("{} categories", household.categories)}</div>
                                            </div>
                                        </div>
                                        <div class="row between">
                                            <A href=href.clone()>
                                                <span class="btn outline small">"View Details"</span>
                                            </A>
                                            <div class="card-actions">
                                                <A href=href>
                                                    <span class="menu-item">"👥 Manage Members"</span>
                                                </A>
                                                {leave_or_delete}
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
