//! Household Detail View
//!
//! Overview, member management and the role permission matrix for one
//! household.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::charts::progress_value;
use crate::components::{tab, DeleteConfirmButton, Modal, ProgressBar, TabBar};
use crate::context::use_app_context;
use crate::fixtures;
use crate::models::{HouseholdDetail, Member, MemberStatus, Role};
use crate::permissions::Permission;
use crate::validation::validate_email;

/// Progress bar scale for the household's per-category counts
const SUMMARY_SCALE: u32 = 2;

/// The signed-in user's row in the member table
const CURRENT_MEMBER_ID: u32 = 1;

#[component]
fn RoleSelect(
    #[prop(into)] id: String,
    current: ReadSignal<Role>,
    on_change: impl Fn(Role) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="select"
            on:change=move |ev| {
                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                    on_change(role);
                }
            }
        >
            {Role::ASSIGNABLE.into_iter().map(|role| view! {
                <option value=role.as_str() selected=move || current.get() == role>{role.label()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
fn PermissionMatrix() -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Permission"</th>
                    <th>"Description"</th>
                    {Role::ALL.into_iter().map(|role| view! { <th class="center">{role.label()}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {Permission::ALL.into_iter().map(|permission| view! {
                    <tr>
                        <td class="strong">{permission.name()}</td>
                        <td class="muted small">{permission.description()}</td>
                        {Role::ALL.into_iter().map(|role| {
                            let granted = role.has_permission(permission);
                            view! {
                                <td class=if granted { "center granted" } else { "center denied" }>
                                    {if granted { "✓" } else { "✗" }}
                                </td>
                            }
                        }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn HouseholdDetailPage() -> impl IntoView {
    let params = use_params_map();
    let household_id = params.read_untracked().get("id").unwrap_or_default();
    tracing::debug!(%household_id, "opening household");

    let detail = fixtures::or_log(fixtures::households().map(|data| Some(data.detail)), || None);

    match detail {
        Some(detail) => view! { <HouseholdView detail=detail /> }.into_any(),
        None => view! {
            <div class="page">
                <div class="empty">"Household not found"</div>
                <A href="/households">
                    <span class="btn outline">"Back to Households"</span>
                </A>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn HouseholdView(detail: HouseholdDetail) -> impl IntoView {
    let ctx = use_app_context();
    let HouseholdDetail {
        name: household_name,
        members: initial_members,
        inventory_summary,
        categories,
        inventory_items,
        shopping_list_items,
        ..
    } = detail;

    let (members, set_members) = signal(initial_members);
    let (active_tab, set_active_tab) = signal("overview");

    // Invite dialog
    let (invite_open, set_invite_open) = signal(false);
    let (invite_email, set_invite_email) = signal(String::new());
    let (invite_role, set_invite_role) = signal(Role::Member);

    // Change role dialog
    let (editing_member, set_editing_member) = signal(None::<Member>);
    let (edit_role, set_edit_role) = signal(Role::Member);

    let close_invite = move || {
        set_invite_open.set(false);
        set_invite_email.set(String::new());
        set_invite_role.set(Role::Member);
    };

    let send_invite = move || {
        let raw = invite_email.get_untracked();
        let Some(email) = ctx.settle(validate_email(&raw).map(str::to_string), |e| {
            format!("Invitation sent to {}", e)
        }) else {
            return;
        };
        let role = invite_role.get_untracked();
        tracing::debug!(%email, role = role.as_str(), "invite member");
        set_members.update(|all| {
            let id = all.iter().map(|m| m.id).max().unwrap_or(0) + 1;
            all.push(Member {
                id,
                name: email.clone(),
                email,
                role,
                status: MemberStatus::Pending,
            });
        });
        close_invite();
    };

    let open_role_dialog = move |member: &Member| {
        set_edit_role.set(member.role);
        set_editing_member.set(Some(member.clone()));
    };

    let close_role_dialog = move || set_editing_member.set(None);

    let save_role = move || {
        let Some(member) = editing_member.get_untracked() else {
            return;
        };
        let role = edit_role.get_untracked();
        set_members.update(|all| {
            if let Some(m) = all.iter_mut().find(|m| m.id == member.id) {
                m.role = role;
            }
        });
        ctx.success("Member role updated");
        close_role_dialog();
    };

    let remove_member = move |id: u32| {
        tracing::debug!(id, "remove member");
        set_members.update(|all| all.retain(|m| m.id != id));
        ctx.success("Member removed from household");
    };

    let title = household_name.clone();
    let tabs = vec![
        tab("overview", "Overview"),
        tab("members", "Members"),
        tab("permissions", "Permissions"),
    ];

    view! {
        <div class="page">
            <div class="page-header start">
                <A href="/households">
                    <span class="muted back-link">"‹"</span>
                </A>
                <div>
                    <h2 class="page-title">"🏠 " {title}</h2>
                    <p class="muted">"Manage your household inventory and members"</p>
                </div>
            </div>

            <TabBar tabs=tabs active=active_tab set_active=set_active_tab />

            <Show when=move || active_tab.get() == "overview">
                <div class="grid three">
                    <div class="card stat-card">
                        <div class="card-header"><h3 class="card-title">"📦 Inventory"</h3></div>
                        <div class="card-content">
                            <div class="stat-value">{inventory_items}</div>
                            <p class="muted small">{format!("Across {} categories", categories)}</p>
                            <A href="/inventory"><span class="btn outline small full">"View Inventory"</span></A>
                        </div>
                    </div>
                    <div class="card stat-card">
                        <div class="card-header"><h3 class="card-title">"🛒 Shopping List"</h3></div>
                        <div class="card-content">
                            <div class="stat-value">{shopping_list_items}</div>
                            <p class="muted small">"Items to purchase"</p>
                            <A href="/shopping-list"><span class="btn outline small full">"View Shopping List"</span></A>
                        </div>
                    </div>
                    <div class="card stat-card">
                        <div class="card-header"><h3 class="card-title">"👥 Members"</h3></div>
                        <div class="card-content">
                            <div class="stat-value">{move || members.with(|m| m.len())}</div>
                            <p class="muted small">"Active household members"</p>
                            <button class="btn outline small" on:click=move |_| set_active_tab.set("members")>
                                "Manage Members"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Inventory Summary"</h3>
                        <p class="card-description">"Items by category"</p>
                    </div>
                    <div class="card-content stack">
                        {inventory_summary.iter().map(|row| {
                            let low = row.low_stock;
                            view! {
                                <div class="summary-row">
                                    <div class="row between">
                                        <span>"🏷 " {row.category.clone()}</span>
                                        <span class="muted small">
                                            {format!("{} items", row.item_count)}
                                            {(low > 0).then(|| view! {
                                                <span class="warning">{format!(" ({} low)", low)}</span>
                                            })}
                                        </span>
                                    </div>
                                    <ProgressBar value=f64::from(progress_value(row.item_count, SUMMARY_SCALE)) />
                                </div>
                            }
                        }).collect_view()}
                        <A href="/categories"><span class="btn outline full">"Manage Categories"</span></A>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Settings"</h3>
                        <p class="card-description">"Manage household settings"</p>
                    </div>
                    <div class="card-content stack">
                        <div class="setting-row">
                            <div>
                                <div class="strong small">"Household Name"</div>
                                <div class="muted small">{household_name.clone()}</div>
                            </div>
                        </div>
                        <div class="setting-row">
                            <div>
                                <div class="strong small">"Default Categories"</div>
                                <div class="muted small">{format!("{} categories configured", categories)}</div>
                            </div>
                        </div>
                        <div class="setting-row">
                            <div>
                                <div class="strong small danger">"Delete Household"</div>
                                <div class="muted small">"This action cannot be undone"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "members">
                <div class="card">
                    <div class="card-header row between">
                        <div>
                            <h3 class="card-title">"Household Members"</h3>
                            <p class="card-description">"Manage members and their roles"</p>
                        </div>
                        <button class="btn primary" on:click=move |_| set_invite_open.set(true)>"＋ Invite Member"</button>
                    </div>
                    <div class="card-content">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th class="right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || members.get()
                                    key=|m: &Member| (m.id, m.role)
                                    children=move |member| {
                                        let id = member.id;
                                        let is_self = id == CURRENT_MEMBER_ID;
                                        let target = member.clone();
                                        view! {
                                            <tr>
                                                <td class="strong">
                                                    {member.name.clone()}
                                                    {is_self.then(|| view! { <span class="badge badge-outline">"You"</span> })}
                                                    {(member.status == MemberStatus::Pending).then(|| view! {
                                                        <span class="badge badge-warning">"Pending"</span>
                                                    })}
                                                </td>
                                                <td>{member.email.clone()}</td>
                                                <td><span class=member.role.badge_class()>{member.role.as_str()}</span></td>
                                                <td class="right row-actions">
                                                    {(!is_self).then(|| view! {
                                                        <button class="menu-item" on:click=move |_| open_role_dialog(&target)>
                                                            "Change Role"
                                                        </button>
                                                        <DeleteConfirmButton
                                                            label="Remove Member"
                                                            on_confirm=move |_| remove_member(id)
                                                        />
                                                    })}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "permissions">
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Role Permissions"</h3>
                        <p class="card-description">"Manage permissions for different roles in your household"</p>
                    </div>
                    <div class="card-content">
                        <PermissionMatrix />
                    </div>
                </div>
            </Show>

            <Modal
                open=invite_open
                title=Signal::stored("Invite New Member".to_string())
                description=Signal::stored("Send an invitation to join your household".to_string())
                on_close=move |_| close_invite()
            >
                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    send_invite();
                }>
                    <label class="field">
                        <span>"Email Address"</span>
                        <input
                            id="email"
                            class="input"
                            type="email"
                            placeholder="Enter email address"
                            prop:value=move || invite_email.get()
                            on:input=move |ev| set_invite_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Role"</span>
                        <RoleSelect id="role" current=invite_role on_change=move |r| set_invite_role.set(r) />
                        <p class="muted tiny">{move || invite_role.get().invite_description()}</p>
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| close_invite()>"Cancel"</button>
                        <button type="submit" class="btn primary">"Send Invitation"</button>
                    </div>
                </form>
            </Modal>

            <Modal
                open=Signal::derive(move || editing_member.with(|m| m.is_some()))
                title=Signal::stored("Change Member Role".to_string())
                description=Signal::derive(move || {
                    editing_member.with(|m| {
                        format!("Update role and permissions for {}", m.as_ref().map(|m| m.name.as_str()).unwrap_or_default())
                    })
                })
                on_close=move |_| close_role_dialog()
            >
                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    save_role();
                }>
                    <label class="field">
                        <span>"Role"</span>
                        <RoleSelect id="editRole" current=edit_role on_change=move |r| set_edit_role.set(r) />
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| close_role_dialog()>"Cancel"</button>
                        <button type="submit" class="btn primary">"Save Changes"</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
