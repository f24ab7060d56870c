//! Shopping List View
//!
//! Current list with check-off and the add dialog, plus completed purchases
//! grouped by day.

use leptos::prelude::*;

use crate::components::{tab, CategorySelector, Modal, TabBar, UnitSelector};
use crate::context::use_app_context;
use crate::error::FormError;
use crate::fixtures::{self, ShoppingListData};
use crate::history::{format_day, group_purchases};
use crate::models::ShoppingListEntry;
use crate::validation::{parse_quantity, require_non_empty};

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    let ctx = use_app_context();
    let ShoppingListData { current, completed } = fixtures::load_or_default(fixtures::shopping_list());

    let (items, set_items) = signal(current);
    let (active_tab, set_active_tab) = signal("current");
    let any_checked = Memo::new(move |_| items.with(|all| all.iter().any(|i| i.checked)));

    let (dialog_open, set_dialog_open) = signal(false);
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal("1".to_string());
    let (unit, set_unit) = signal("pieces".to_string());
    let (category, set_category) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let reset_dialog = move || {
        set_dialog_open.set(false);
        set_name.set(String::new());
        set_quantity.set("1".to_string());
        set_unit.set("pieces".to_string());
        set_category.set(String::new());
        set_notes.set(String::new());
    };

    let toggle_checked = move |id: u32| {
        set_items.update(|all| {
            if let Some(item) = all.iter_mut().find(|i| i.id == id) {
                item.checked = !item.checked;
            }
        });
    };

    let add_item = move || {
        let raw = name.get_untracked();
        let Some(item_name) = ctx.settle(require_non_empty("Item name", &raw).map(str::to_string), |n| {
            format!("{} added to shopping list", n)
        }) else {
            return;
        };
        let note = notes.get_untracked();
        let entry = ShoppingListEntry {
            id: 0,
            name: item_name,
            quantity: parse_quantity(&quantity.get_untracked(), 1),
            unit: unit.get_untracked(),
            category: category.get_untracked(),
            checked: false,
            notes: (!note.trim().is_empty()).then(|| note.trim().to_string()),
            low_stock: false,
        };
        tracing::debug!(name = %entry.name, quantity = entry.quantity, "add shopping list entry");
        set_items.update(|all| {
            let id = all.iter().map(|i| i.id).max().unwrap_or(0) + 1;
            all.push(ShoppingListEntry { id, ..entry });
        });
        reset_dialog();
    };

    let add_to_inventory = move || {
        let checked = items.with_untracked(|all| all.iter().filter(|i| i.checked).count());
        let outcome = if checked == 0 { Err(FormError::NothingSelected) } else { Ok(checked) };
        if ctx.settle(outcome, |n| format!("{} items added to inventory", n)).is_some() {
            set_items.update(|all| all.retain(|i| !i.checked));
        }
    };

    let tabs = vec![
        ("current", Signal::derive(move || format!("Current List ({})", items.with(|i| i.len())))),
        tab("completed", "Completed History"),
    ];
    let purchase_groups = group_purchases(&completed);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Shopping List"</h2>
                    <p class="muted">"Plan your shopping and restock your inventory"</p>
                </div>
                <div class="row">
                    <button class="btn primary" on:click=move |_| set_dialog_open.set(true)>"＋ Add Item"</button>
                    <button
                        class="btn outline"
                        disabled=move || !any_checked.get()
                        on:click=move |_| add_to_inventory()
                    >
                        "↻ Add to Inventory"
                    </button>
                </div>
            </div>

            <Modal
                open=dialog_open
                title=Signal::stored("Add to Shopping List".to_string())
                description=Signal::stored("Add a new item to your shopping list".to_string())
                on_close=move |_| reset_dialog()
            >
                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    add_item();
                }>
                    <label class="field">
                        <span>"Item Name"</span>
                        <input
                            id="itemName"
                            class="input"
                            placeholder="Enter item name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label class="field">
                            <span>"Quantity"</span>
                            <input
                                id="quantity"
                                class="input"
                                type="number"
                                min="1"
                                prop:value=move || quantity.get()
                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Unit"</span>
                            <UnitSelector id="unit" current_unit=unit on_change=move |u| set_unit.set(u) />
                        </label>
                    </div>
                    <label class="field">
                        <span>"Category"</span>
                        <CategorySelector id="category" current=category on_change=move |c| set_category.set(c) />
                    </label>
                    <label class="field">
                        <span>"Notes (Optional)"</span>
                        <input
                            id="notes"
                            class="input"
                            placeholder="Add notes or specifications"
                            prop:value=move || notes.get()
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn outline" on:click=move |_| reset_dialog()>"Cancel"</button>
                        <button type="submit" class="btn primary">"Add to List"</button>
                    </div>
                </form>
            </Modal>

            <TabBar tabs=tabs active=active_tab set_active=set_active_tab />

            <Show when=move || active_tab.get() == "current">
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Shopping List"</h3>
                    </div>
                    <div class="card-content">
                        <Show
                            when=move || items.with(|all| !all.is_empty())
                            fallback=move || view! {
                                <div class="empty">
                                    <div class="empty-icon">"🛒"</div>
                                    <p>"Your shopping list is empty"</p>
                                    <button class="btn outline" on:click=move |_| set_dialog_open.set(true)>
                                        "＋ Add an Item"
                                    </button>
                                </div>
                            }
                        >
                            <div class="stack">
                                <For
                                    each=move || items.get()
                                    key=|i: &ShoppingListEntry| (i.id, i.checked)
                                    children=move |item| {
                                        let id = item.id;
                                        let checkbox_id = format!("item-{}", id);
                                        view! {
                                            <div class=if item.checked { "list-row checked" } else { "list-row" }>
                                                <input
                                                    type="checkbox"
                                                    id=checkbox_id.clone()
                                                    prop:checked=item.checked
                                                    on:change=move |_| toggle_checked(id)
                                                />
                                                <div class="list-row-body">
                                                    <label for=checkbox_id class="list-row-title">{item.name.clone()}</label>
                                                    <div class="muted small row">
                                                        <span>{format!("{} {}", item.quantity, item.unit)}</span>
                                                        <span class="badge badge-outline">{item.category.clone()}</span>
                                                        {item.low_stock.then(|| view! {
                                                            <span class="badge badge-warning">"Low Stock"</span>
                                                        })}
                                                    </div>
                                                    {item.notes.clone().map(|n| view! {
                                                        <p class="muted tiny italic">{format!("Note: {}", n)}</p>
                                                    })}
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "completed">
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Purchase History"</h3>
                        <p class="card-description">"Items you've purchased recently"</p>
                    </div>
                    <div class="card-content stack">
                        {if purchase_groups.is_empty() {
                            view! { <div class="empty">"No shopping history yet"</div> }.into_any()
                        } else {
                            purchase_groups.iter().map(|(day, purchases)| view! {
                                <div class="day-group">
                                    <div class="day-heading muted small">{format_day(*day)}</div>
                                    {purchases.iter().map(|p| view! {
                                        <div class="list-row">
                                            <span class="check-mark">"✓"</span>
                                            <div class="list-row-body">
                                                <div class="list-row-title">{p.name.clone()}</div>
                                                <div class="muted small row">
                                                    <span>{format!("{} {}", p.quantity, p.unit)}</span>
                                                    <span class="badge badge-outline">{p.category.clone()}</span>
                                                </div>
                                                {p.notes.clone().map(|n| view! {
                                                    <p class="muted tiny italic">{format!("Note: {}", n)}</p>
                                                })}
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            }).collect_view().into_any()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
